use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One normalized feed item. `published_at` is `None` when the item carried
/// no pubDate or one that did not parse; that is ordinary data, not a defect.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Note {
    pub title: String,
    pub url: String,
    pub description: String,
    pub published_at: Option<DateTime<Utc>>,
}
