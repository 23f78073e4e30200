use reqwest::header::ACCEPT;

const FEED_ACCEPT: &str = "application/rss+xml, text/xml";

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status code: {status} {status_text}")]
    HttpStatus { status: u16, status_text: String },
}

/// Fetches the feed body as text. The Accept header is advisory; whatever
/// content type the server actually returns is handed to the parser as-is.
/// Non-2xx responses fail immediately, without retry.
pub async fn fetch_feed(client: &reqwest::Client, url: &str) -> Result<String, FetchError> {
    let response = client.get(url).header(ACCEPT, FEED_ACCEPT).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::HttpStatus {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
        });
    }
    Ok(response.text().await?)
}
