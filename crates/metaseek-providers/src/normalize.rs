//! Shared normalization: field fallbacks, snippet truncation, and the
//! provider-independent part of the unified model.

use crate::raw::{RawIntent, RawResponse, RawResult};
use metaseek_core::{ResultCard, ResultSet, SearchIntent};

/// Maximum snippet length in characters; longer content is cut once, in
/// the normalizer, to `SNIPPET_MAX - 3` plus the ellipsis marker.
pub const SNIPPET_MAX: usize = 300;
pub const ELLIPSIS: &str = "...";

/// Placeholder anchor. The renderer hides URL lines equal to it.
pub const PLACEHOLDER_LINK: &str = "#";
pub const PLACEHOLDER_TITLE: &str = "Untitled";
pub const PLACEHOLDER_SNIPPET: &str = "No content available";
pub const PLACEHOLDER_SOURCE: &str = "Unknown source";

/// Trim and drop empty strings, so `""` and whitespace behave like a
/// missing field.
pub fn non_empty(value: Option<&str>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Cut `content` to the fixed maximum, appending the ellipsis marker.
/// Counts characters, not bytes, so multi-byte text never splits.
pub fn truncate_snippet(content: &str) -> String {
    if content.chars().count() <= SNIPPET_MAX {
        return content.to_string();
    }
    let mut out: String = content.chars().take(SNIPPET_MAX - ELLIPSIS.len()).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Normalize one raw result into a card, applying every documented
/// fallback.
pub fn card_from_raw(raw: &RawResult) -> ResultCard {
    let title = non_empty(raw.title.as_deref()).unwrap_or_else(|| PLACEHOLDER_TITLE.to_string());
    let link = non_empty(raw.link.as_deref()).unwrap_or_else(|| PLACEHOLDER_LINK.to_string());
    let media = non_empty(raw.media.as_deref());

    // Link wins; a linkless result shows its media label; otherwise the
    // placeholder anchor signals "nothing to show".
    let display_url = if link != PLACEHOLDER_LINK {
        link.clone()
    } else if let Some(media) = &media {
        media.clone()
    } else {
        PLACEHOLDER_LINK.to_string()
    };

    let snippet = non_empty(raw.content.as_deref())
        .map(|c| truncate_snippet(&c))
        .unwrap_or_else(|| PLACEHOLDER_SNIPPET.to_string());
    let source = media.unwrap_or_else(|| PLACEHOLDER_SOURCE.to_string());

    ResultCard {
        title,
        link,
        display_url,
        snippet,
        source,
    }
}

/// First intent entry, if the payload exposes one. The keyword string is
/// split on whitespace into individual atoms, order preserved.
pub fn intent_from_raw(intents: &[RawIntent]) -> Option<SearchIntent> {
    let first = intents.first()?;
    Some(SearchIntent {
        intent: non_empty(first.intent.as_deref()).unwrap_or_default(),
        query: non_empty(first.query.as_deref()).unwrap_or_default(),
        keywords: first
            .keywords
            .as_deref()
            .map(|k| k.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default(),
    })
}

/// An explicit backend total wins over the list length.
pub fn result_count(raw: &RawResponse, normalized_len: usize) -> u64 {
    raw.meta
        .as_ref()
        .and_then(|m| m.total_results)
        .unwrap_or(normalized_len as u64)
}

/// The provider-independent part of normalization: intent plus the
/// ordered card list. Adapters layer meta and capability-gated sections
/// on top.
pub fn base_model(raw: &RawResponse) -> ResultSet {
    ResultSet {
        intent: intent_from_raw(&raw.search_intent),
        results: raw.search_result.iter().map(card_from_raw).collect(),
        ..ResultSet::default()
    }
}
