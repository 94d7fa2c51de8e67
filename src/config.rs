use anyhow::{bail, Result};
use serde::Deserialize;

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub openai: OpenAiConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub api_base: String,
}

impl Config {
    /// Load configuration from an optional file, with the API key taken from
    /// the OPENAI_API_KEY environment variable.
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("http.bind", "127.0.0.1")?
            .set_default("http.port", 5000)?
            .set_default("openai.api_key", "")?
            .set_default("openai.api_base", DEFAULT_API_BASE)?
            .add_source(config::File::with_name(path).required(false))
            .build()?;

        let mut cfg: Config = settings.try_deserialize()?;

        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            cfg.openai.api_key = key;
        }

        if cfg.openai.api_key.is_empty() {
            bail!("No OpenAI API key found in environment variables");
        }

        Ok(cfg)
    }
}
