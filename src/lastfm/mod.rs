use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::resolver::Track;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);
const TRACK_LIMIT: u32 = 10;

/// Why a live lookup produced no usable tracks. Every variant is recovered
/// by the resolver's fallback path; only the short `kind` label reaches the
/// user-facing status line.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("API returned status {0}")]
    Status(u16),
    #[error("API returned no usable track data")]
    NoTracks,
    #[error("failed to parse API response: {0}")]
    Parse(String),
    #[error("request timed out")]
    Timeout,
    #[error("connection error: {0}")]
    Connection(String),
}

impl FetchError {
    /// Short label used in the status line, e.g. "Status 500" or "Timeout".
    pub fn kind(&self) -> String {
        match self {
            FetchError::Status(code) => format!("Status {code}"),
            FetchError::NoTracks => "NoTracks".to_string(),
            FetchError::Parse(_) => "Parse".to_string(),
            FetchError::Timeout => "Timeout".to_string(),
            FetchError::Connection(_) => "Connection".to_string(),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout
        } else if e.is_decode() {
            FetchError::Parse(e.to_string())
        } else {
            FetchError::Connection(e.to_string())
        }
    }
}

/// The single seam between the resolver and the outside world. Tests stand
/// in a stub here instead of mocking HTTP.
#[async_trait]
pub trait TrackSource: Send + Sync {
    async fn top_tracks(&self, tag: &str, api_key: &str) -> Result<Vec<Track>, FetchError>;
}

// ── Last.fm response models ──────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct TopTracksResponse {
    tracks: Option<TrackList>,
}

#[derive(Debug, Deserialize)]
struct TrackList {
    #[serde(default)]
    track: Vec<ApiTrack>,
}

#[derive(Debug, Deserialize)]
struct ApiTrack {
    name: String,
    artist: ArtistField,
}

/// Last.fm serves the artist either as an object or as a bare string,
/// depending on the endpoint variant.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ArtistField {
    Named { name: String },
    Plain(String),
}

impl From<ApiTrack> for Track {
    fn from(t: ApiTrack) -> Self {
        let artist = match t.artist {
            ArtistField::Named { name } => name,
            ArtistField::Plain(name) => name,
        };
        Track { name: t.name, artist }
    }
}

/// Parses a `tag.gettoptracks` body into tracks. An absent or empty track
/// list counts as `NoTracks` so the caller lands on the fallback path.
pub(crate) fn parse_top_tracks(body: &str) -> Result<Vec<Track>, FetchError> {
    let parsed: TopTracksResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))?;

    let tracks: Vec<Track> = parsed
        .tracks
        .map(|list| list.track)
        .unwrap_or_default()
        .into_iter()
        .map(Track::from)
        .collect();

    if tracks.is_empty() {
        return Err(FetchError::NoTracks);
    }
    Ok(tracks)
}

// ── Live client ──────────────────────────────────────────────────────────

pub struct LastFmClient {
    http: Client,
    base_url: String,
}

impl LastFmClient {
    pub fn new(base_url: impl Into<String>) -> anyhow::Result<Self> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(LastFmClient {
            http,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl TrackSource for LastFmClient {
    async fn top_tracks(&self, tag: &str, api_key: &str) -> Result<Vec<Track>, FetchError> {
        let limit = TRACK_LIMIT.to_string();
        let params = [
            ("method", "tag.gettoptracks"),
            ("tag", tag),
            ("api_key", api_key),
            ("format", "json"),
            ("limit", limit.as_str()),
        ];

        debug!("Requesting top tracks for tag '{tag}'");
        let response = self.http.get(&self.base_url).query(&params).send().await?;

        // Any non-200 is a status failure, checked before touching the body
        let status = response.status().as_u16();
        if status != 200 {
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        parse_top_tracks(&body)
    }
}
