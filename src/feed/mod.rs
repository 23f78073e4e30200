pub mod fetcher;
pub mod parser;
pub mod types;

use std::time::Duration;

use fetcher::{fetch_feed, FetchError};
use parser::{parse_notes, FeedParseError};
use types::Note;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Parse(#[from] FeedParseError),
}

/// Fetches and parses a feed in one call, returning the full sorted note
/// list. Truncating to a display count is the caller's business.
///
/// Each call is independent: one outbound request, no caching, no shared
/// state, and no partial results on failure.
pub async fn fetch_recent_notes(
    client: &reqwest::Client,
    feed_url: &str,
) -> Result<Vec<Note>, FeedError> {
    let body = fetch_feed(client, feed_url).await?;
    let notes = parse_notes(&body)?;
    Ok(notes)
}

/// Front door for callers that do not manage their own `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct NotesClient {
    client: reqwest::Client,
}

impl NotesClient {
    pub fn new() -> Result<Self, FeedError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, FeedError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FetchError::Request)?;
        Ok(Self { client })
    }

    pub async fn recent_notes(&self, feed_url: &str) -> Result<Vec<Note>, FeedError> {
        fetch_recent_notes(&self.client, feed_url).await
    }
}
