//! Feed ingestion for the portfolio's "recent notes" widget: fetch an RSS
//! feed, normalize its items, and return them newest first. The rendering
//! side decides how many to show and how to present failures.

pub mod feed;

pub use feed::fetcher::FetchError;
pub use feed::parser::FeedParseError;
pub use feed::types::Note;
pub use feed::{fetch_recent_notes, FeedError, NotesClient};
