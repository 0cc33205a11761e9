use rand::seq::SliceRandom;
use rand::Rng;
use tracing::warn;

use crate::lastfm::TrackSource;
use crate::mood::Mood;

/// A single recommended song.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub name: String,
    pub artist: String,
}

impl From<&(&'static str, &'static str)> for Track {
    fn from(&(name, artist): &(&'static str, &'static str)) -> Self {
        Track {
            name: name.to_string(),
            artist: artist.to_string(),
        }
    }
}

/// Which path the resolver took, and up to three songs to go with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationResult {
    pub status: String,
    pub recommendations: Vec<Track>,
}

const SAMPLE_SIZE: usize = 3;

/// Maps (mood, api_key) to a recommendation, preferring live API data and
/// falling back to the offline tables on any disqualifying condition.
///
/// Total over its inputs: every outcome (invalid mood, missing key, API
/// success, empty response, API failure) comes back as a well-formed
/// `RecommendationResult`; nothing propagates to the caller. At most one
/// outbound call is made per invocation. Genre choice and sample draws come
/// from `rng`, so callers can seed for determinism.
pub async fn resolve(
    mood_input: &str,
    api_key: Option<&str>,
    source: &dyn TrackSource,
    rng: &mut impl Rng,
) -> RecommendationResult {
    let Ok(mood) = mood_input.parse::<Mood>() else {
        return RecommendationResult {
            status: "Invalid Mood".to_string(),
            recommendations: sample_fallback(Mood::Happy, rng),
        };
    };

    let genre = *mood
        .genres()
        .choose(rng)
        .expect("every mood has at least one genre");

    let key = match api_key {
        Some(k) if !k.is_empty() => k,
        _ => {
            return RecommendationResult {
                status: format!("API Key Missing. Using Fallback ({genre})."),
                recommendations: sample_fallback(mood, rng),
            }
        }
    };

    match source.top_tracks(genre, key).await {
        Ok(tracks) => {
            let picks: Vec<Track> = tracks.choose_multiple(rng, SAMPLE_SIZE).cloned().collect();
            RecommendationResult {
                status: format!("API Success ({genre})."),
                recommendations: picks,
            }
        }
        Err(e) => {
            warn!("Live lookup failed for mood {mood}: {e}");
            RecommendationResult {
                status: format!("API Failed ({}). Using Fallback ({genre}).", e.kind()),
                recommendations: sample_fallback(mood, rng),
            }
        }
    }
}

fn sample_fallback(mood: Mood, rng: &mut impl Rng) -> Vec<Track> {
    mood.fallback_songs()
        .choose_multiple(rng, SAMPLE_SIZE)
        .map(Track::from)
        .collect()
}
