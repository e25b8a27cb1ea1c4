//! SearXNG meta-search aggregator (`searxng`).
//!
//! The richest provider: engine list, language, time range, safe-search
//! level and result count on the request side; suggestions, corrections,
//! quick answers and infoboxes on the response side.

use crate::normalize::{base_model, non_empty, result_count, PLACEHOLDER_LINK};
use crate::options;
use crate::raw::RawResponse;
use metaseek_core::{
    Answer, Capabilities, Infobox, OptionDef, OptionKind, ProviderAdapter, ProviderId,
    ProviderInfo, ResultSet, SearchMeta, SearchQuery,
};

pub const SOURCE_LABEL: &str = "SearXNG";

const ANSWER_TITLE: &str = "Answer";
const INFOBOX_TITLE: &str = "Infobox";

pub static OPTIONS: &[OptionDef] = &[
    OptionDef {
        key: "engines",
        kind: OptionKind::Text,
        default: "google,bing",
        omit_when_default: false,
    },
    OptionDef {
        key: "language",
        kind: OptionKind::Choice {
            allowed: &["auto", "en", "zh", "de", "fr", "ja"],
        },
        default: "auto",
        omit_when_default: false,
    },
    OptionDef {
        key: "time_range",
        kind: OptionKind::Choice {
            allowed: &["", "day", "week", "month", "year"],
        },
        default: "",
        omit_when_default: true,
    },
    OptionDef {
        key: "safesearch",
        kind: OptionKind::Choice {
            allowed: &["0", "1", "2"],
        },
        default: "1",
        omit_when_default: false,
    },
    OptionDef {
        key: "count",
        kind: OptionKind::Count,
        default: "10",
        omit_when_default: false,
    },
];

pub static INFO: ProviderInfo = ProviderInfo {
    id: ProviderId::Searxng,
    display_name: "SearXNG",
    description: "SearXNG meta-search, aggregating results from multiple engines.",
    options: OPTIONS,
    capabilities: Capabilities {
        suggestions: true,
        corrections: true,
        answers: true,
        infoboxes: true,
        meta_extras: true,
    },
};

#[derive(Debug, Clone, Copy, Default)]
pub struct SearxngAdapter;

impl ProviderAdapter for SearxngAdapter {
    fn info(&self) -> &'static ProviderInfo {
        &INFO
    }

    fn option_pairs(&self, query: &SearchQuery) -> Vec<(String, String)> {
        options::resolve(OPTIONS, &query.options)
    }

    fn normalize(&self, raw: &serde_json::Value) -> ResultSet {
        let raw = RawResponse::from_value(raw);
        let mut model = base_model(&raw);

        model.suggestions = raw
            .suggestions
            .iter()
            .filter_map(|s| non_empty(Some(s.as_str())))
            .collect();
        model.corrections = raw
            .corrections
            .iter()
            .filter_map(|s| non_empty(Some(s.as_str())))
            .collect();
        model.answers = raw
            .answers
            .iter()
            .map(|a| Answer {
                title: non_empty(a.title.as_deref()).unwrap_or_else(|| ANSWER_TITLE.to_string()),
                content: non_empty(a.content.as_deref()).unwrap_or_default(),
                link: non_empty(a.link.as_deref()).unwrap_or_else(|| PLACEHOLDER_LINK.to_string()),
            })
            .collect();
        model.infoboxes = raw
            .infoboxes
            .iter()
            .map(|b| Infobox {
                title: non_empty(b.title.as_deref()).unwrap_or_else(|| INFOBOX_TITLE.to_string()),
                content: non_empty(b.content.as_deref()).unwrap_or_default(),
                link: non_empty(b.link.as_deref()).unwrap_or_else(|| PLACEHOLDER_LINK.to_string()),
                icon: non_empty(b.icon.as_deref()),
            })
            .collect();

        let mut extras = Vec::new();
        if let Some(meta) = &raw.meta {
            if let Some(engines) = non_empty(meta.engines.as_deref()) {
                extras.push(("engines".to_string(), engines));
            }
            if let Some(time) = meta.time {
                if time > 0.0 {
                    extras.push(("time".to_string(), format!("{time:.2}")));
                }
            }
        }
        let source = raw
            .meta
            .as_ref()
            .and_then(|m| non_empty(m.source.as_deref()))
            .unwrap_or_else(|| SOURCE_LABEL.to_string());

        model.meta = Some(SearchMeta {
            source: Some(source),
            result_count: result_count(&raw, model.results.len()),
            extras,
        });
        model
    }
}
