use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

pub const DEFAULT_OPENAI_HOST: &str = "https://api.openai.com";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_PLAYBACK_INTERVAL_MS: u64 = 140;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub openai_api_hostname: String,
    pub openai_api_key: String,
    pub openai_model: String,
    pub contact_email: String,
    pub web_ui_path: String,
    /// Delay between words when playing back the opening message
    pub playback_interval: Duration,
    /// Minimum delay between fragments relayed from the completion
    /// API. Zero relays fragments as soon as they arrive.
    pub live_pacing_interval: Duration,
}

fn millis_var(name: &str, default: u64) -> Result<Duration> {
    let millis = match env::var(name) {
        Ok(val) => val
            .parse::<u64>()
            .with_context(|| format!("Invalid value for {}: {}", name, val))?,
        Err(_) => default,
    };
    Ok(Duration::from_millis(millis))
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let openai_api_key =
            env::var("OPENAI_SECRET_KEY").context("Missing env var OPENAI_SECRET_KEY")?;
        let contact_email =
            env::var("HERALD_CONTACT_EMAIL").context("Missing env var HERALD_CONTACT_EMAIL")?;
        let openai_api_hostname =
            env::var("HERALD_OPENAI_HOST").unwrap_or_else(|_| DEFAULT_OPENAI_HOST.to_string());
        let openai_model =
            env::var("HERALD_OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_OPENAI_MODEL.to_string());
        let web_ui_path = env::var("HERALD_WEB_UI_PATH").unwrap_or("./web-ui".to_string());
        let playback_interval =
            millis_var("HERALD_PLAYBACK_INTERVAL_MS", DEFAULT_PLAYBACK_INTERVAL_MS)?;
        let live_pacing_interval = millis_var("HERALD_LIVE_PACING_MS", 0)?;

        Ok(Self {
            openai_api_hostname,
            openai_api_key,
            openai_model,
            contact_email,
            web_ui_path,
            playback_interval,
            live_pacing_interval,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 7] = [
        "OPENAI_SECRET_KEY",
        "HERALD_CONTACT_EMAIL",
        "HERALD_OPENAI_HOST",
        "HERALD_OPENAI_MODEL",
        "HERALD_WEB_UI_PATH",
        "HERALD_PLAYBACK_INTERVAL_MS",
        "HERALD_LIVE_PACING_MS",
    ];

    fn clear_env() {
        for var in VARS {
            // Safety: tests touching the environment are run serially
            unsafe { env::remove_var(var) };
        }
    }

    #[test]
    #[serial]
    fn it_uses_defaults() {
        clear_env();
        unsafe {
            env::set_var("OPENAI_SECRET_KEY", "sk-test");
            env::set_var("HERALD_CONTACT_EMAIL", "team@example.com");
        }

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.openai_api_key, "sk-test");
        assert_eq!(config.contact_email, "team@example.com");
        assert_eq!(config.openai_api_hostname, DEFAULT_OPENAI_HOST);
        assert_eq!(config.openai_model, DEFAULT_OPENAI_MODEL);
        assert_eq!(config.playback_interval, Duration::from_millis(140));
        assert!(config.live_pacing_interval.is_zero());
        clear_env();
    }

    #[test]
    #[serial]
    fn it_requires_the_api_key() {
        clear_env();
        unsafe { env::set_var("HERALD_CONTACT_EMAIL", "team@example.com") };

        let err = AppConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("OPENAI_SECRET_KEY"));
        clear_env();
    }

    #[test]
    #[serial]
    fn it_rejects_bad_intervals() {
        clear_env();
        unsafe {
            env::set_var("OPENAI_SECRET_KEY", "sk-test");
            env::set_var("HERALD_CONTACT_EMAIL", "team@example.com");
            env::set_var("HERALD_LIVE_PACING_MS", "soon");
        }

        let err = AppConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("HERALD_LIVE_PACING_MS"));
        clear_env();
    }
}
