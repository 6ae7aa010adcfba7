use anyhow::Result;
use herald::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
