//! Bocha AI web search (`bochaai`).
//!
//! Supports a freshness window, a result count (backend range 1..=50),
//! an opt-in summary flag, and a page number. No auxiliary sections,
//! but the response meta carries a source label and a web-search URL.

use crate::normalize::{base_model, non_empty, result_count};
use crate::options;
use crate::raw::RawResponse;
use metaseek_core::{
    Capabilities, OptionDef, OptionKind, ProviderAdapter, ProviderId, ProviderInfo, ResultSet,
    SearchMeta, SearchQuery,
};

pub const SOURCE_LABEL: &str = "Bocha AI";

pub static OPTIONS: &[OptionDef] = &[
    OptionDef {
        key: "freshness",
        kind: OptionKind::Choice {
            allowed: &["noLimit", "oneDay", "oneWeek", "oneMonth", "oneYear"],
        },
        default: "noLimit",
        omit_when_default: true,
    },
    OptionDef {
        key: "count",
        kind: OptionKind::Count,
        default: "10",
        omit_when_default: false,
    },
    OptionDef {
        key: "summary",
        kind: OptionKind::Flag,
        default: "false",
        omit_when_default: true,
    },
    OptionDef {
        key: "page",
        kind: OptionKind::Count,
        default: "1",
        omit_when_default: true,
    },
];

pub static INFO: ProviderInfo = ProviderInfo {
    id: ProviderId::BochaAi,
    display_name: "Bocha AI",
    description: "Bocha AI web search with intelligent summaries and knowledge integration.",
    options: OPTIONS,
    capabilities: Capabilities {
        suggestions: false,
        corrections: false,
        answers: false,
        infoboxes: false,
        meta_extras: true,
    },
};

#[derive(Debug, Clone, Copy, Default)]
pub struct BochaAdapter;

impl ProviderAdapter for BochaAdapter {
    fn info(&self) -> &'static ProviderInfo {
        &INFO
    }

    fn option_pairs(&self, query: &SearchQuery) -> Vec<(String, String)> {
        let mut pairs = options::resolve(OPTIONS, &query.options);
        for (key, value) in &mut pairs {
            // Backend-documented ranges.
            match key.as_str() {
                "count" => *value = options::clamp_count(value, 1, 50, 10),
                "page" => *value = options::clamp_count(value, 1, i64::MAX, 1),
                _ => {}
            }
        }
        pairs
    }

    fn normalize(&self, raw: &serde_json::Value) -> ResultSet {
        let raw = RawResponse::from_value(raw);
        let mut model = base_model(&raw);

        let mut extras = Vec::new();
        if let Some(meta) = &raw.meta {
            if let Some(url) = non_empty(meta.web_search_url.as_deref()) {
                extras.push(("webSearchUrl".to_string(), url));
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

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> SearchQuery {
        let mut q = SearchQuery::new("rust", ProviderId::BochaAi).unwrap();
        for (k, v) in pairs {
            q = q.with_option(*k, *v);
        }
        q
    }

    #[test]
    fn default_request_sends_count_only() {
        let pairs = BochaAdapter.option_pairs(&query(&[]));
        assert_eq!(pairs, vec![("count".to_string(), "10".to_string())]);
    }

    #[test]
    fn no_limit_freshness_is_never_sent() {
        let pairs = BochaAdapter.option_pairs(&query(&[("freshness", "noLimit")]));
        assert!(pairs.iter().all(|(k, _)| k != "freshness"));
    }

    #[test]
    fn full_option_set_in_schema_order() {
        let pairs = BochaAdapter.option_pairs(&query(&[
            ("freshness", "oneWeek"),
            ("count", "20"),
            ("summary", "true"),
            ("page", "2"),
        ]));
        assert_eq!(
            pairs,
            vec![
                ("freshness".to_string(), "oneWeek".to_string()),
                ("count".to_string(), "20".to_string()),
                ("summary".to_string(), "true".to_string()),
                ("page".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn count_is_clamped_to_backend_range() {
        let pairs = BochaAdapter.option_pairs(&query(&[("count", "500")]));
        assert!(pairs.contains(&("count".to_string(), "50".to_string())));
        let pairs = BochaAdapter.option_pairs(&query(&[("count", "-3")]));
        assert!(pairs.contains(&("count".to_string(), "1".to_string())));
    }

    #[test]
    fn explicit_total_results_wins() {
        let raw = serde_json::json!({
            "search_result": [
                {"title": "a"}, {"title": "b"}, {"title": "c"}, {"title": "d"}, {"title": "e"}
            ],
            "meta": {"totalResults": 42, "source": "Bocha AI"}
        });
        let meta = BochaAdapter.normalize(&raw).meta.unwrap();
        assert_eq!(meta.result_count, 42);
    }

    #[test]
    fn meta_defaults_to_bocha_label_and_surfaces_search_url() {
        let raw = serde_json::json!({
            "search_result": [],
            "meta": {"webSearchUrl": "https://bochaai.com/search?q=rust"}
        });
        let meta = BochaAdapter.normalize(&raw).meta.unwrap();
        assert_eq!(meta.source.as_deref(), Some(SOURCE_LABEL));
        assert_eq!(
            meta.extras,
            vec![(
                "webSearchUrl".to_string(),
                "https://bochaai.com/search?q=rust".to_string()
            )]
        );
    }

    #[test]
    fn auxiliary_sections_are_capability_gated() {
        let raw = serde_json::json!({
            "search_result": [{"title": "A"}],
            "suggestions": ["rust book"],
            "answers": [{"title": "Answer", "content": "42"}]
        });
        let model = BochaAdapter.normalize(&raw);
        assert!(model.suggestions.is_empty());
        assert!(model.answers.is_empty());
    }
}
