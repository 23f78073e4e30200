use chrono::{DateTime, Utc};

use super::types::Note;

#[derive(Debug, thiserror::Error)]
pub enum FeedParseError {
    #[error("invalid feed XML: {0}")]
    Xml(#[from] roxmltree::Error),
}

/// Parses an RSS document and returns its items as notes, newest first.
///
/// Items with an unparsable or missing pubDate sort after every dated item,
/// keeping their document order; the sort is stable so ties keep document
/// order too. A well-formed document with no `<item>` elements yields an
/// empty list.
pub fn parse_notes(xml: &str) -> Result<Vec<Note>, FeedParseError> {
    let doc = roxmltree::Document::parse(xml)?;
    let mut notes: Vec<Note> = doc
        .descendants()
        .filter(|node| node.has_tag_name("item"))
        .map(note_from_item)
        .collect();
    // Option<DateTime> orders None below every Some, so reversing the
    // comparison puts newest first and undated items last.
    notes.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    Ok(notes)
}

fn note_from_item(item: roxmltree::Node<'_, '_>) -> Note {
    let title = child_text(item, "title").unwrap_or_else(|| "Untitled".to_string());
    let url = child_text(item, "link").unwrap_or_else(|| "#".to_string());
    let description = child_text(item, "description").unwrap_or_default();
    let published_at = child_text(item, "pubDate").and_then(|raw| parse_pub_date(&raw));

    Note {
        title,
        url,
        description,
        published_at,
    }
}

fn child_text(item: roxmltree::Node<'_, '_>, name: &str) -> Option<String> {
    item.children()
        .find(|node| node.has_tag_name(name))
        .and_then(|node| node.text())
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(ToString::to_string)
}

fn parse_pub_date(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(raw)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .ok()
        .map(|value| value.with_timezone(&Utc))
}
