//! Public types for the contact API
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct ContactResponse {
    pub email: String,
}
