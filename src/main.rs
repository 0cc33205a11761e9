mod config;
mod lastfm;
mod mood;
mod resolver;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::{fmt, EnvFilter};

use crate::{config::Config, lastfm::LastFmClient, resolver::resolve};

/// Music Recommendation CLI Tool
#[derive(Parser)]
#[command(name = "moodfm")]
#[command(about = "Mood-based music recommendations with an offline fallback", long_about = None)]
struct Cli {
    /// Get music recommendations based on a specified MOOD (e.g. Happy, Sad, Stressed)
    #[arg(long, value_name = "MOOD")]
    recommend: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // ── Logging setup ────────────────────────────────────────────────────────
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("moodfm=info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let Some(mood_input) = cli.recommend else {
        Cli::command().print_help()?;
        return Ok(());
    };

    // ── Load config ──────────────────────────────────────────────────────────
    let config = Config::load()?;
    let client = LastFmClient::new(config.api_url.clone())?;
    let mut rng = rand::thread_rng();

    println!(
        "\n--- Searching for Music Recommendations for MOOD: {} ---",
        mood_input.to_uppercase()
    );

    let result = resolve(&mood_input, config.api_key.as_deref(), &client, &mut rng).await;

    println!("\nStatus: {}", result.status);
    if result.recommendations.is_empty() {
        println!("No recommendations found.");
    } else {
        println!("\nRecommended Tracks:");
        for track in &result.recommendations {
            println!("- {} by {}", track.name, track.artist);
        }
    }
    println!("{}", "-".repeat(50));

    Ok(())
}
