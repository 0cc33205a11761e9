use anyhow::Result;
use dotenvy::dotenv;

pub const DEFAULT_API_URL: &str = "https://ws.audioscrobbler.com/2.0/";

#[derive(Debug, Clone)]
pub struct Config {
    /// Last.fm API key. `None` when absent or empty; that's a handled
    /// resolver outcome, not a startup failure.
    pub api_key: Option<String>,
    pub api_url: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        dotenv().ok(); // Try loading .env file, ignore if it doesn't exist (e.g. env vars set manually)

        Ok(Config {
            api_key: std::env::var("LASTFM_API_KEY")
                .ok()
                .filter(|k| !k.is_empty()),
            api_url: std::env::var("LASTFM_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
        })
    }
}
