//! Zhipu basic AI search (`search_std`).
//!
//! The simplest provider: no advanced options, no auxiliary sections.
//! The backend caps the query at 78 characters, so the builder truncates
//! before sending.

use crate::normalize::{base_model, result_count};
use crate::raw::RawResponse;
use metaseek_core::{Capabilities, ProviderAdapter, ProviderId, ProviderInfo, ResultSet, SearchMeta, SearchQuery};

pub const QUERY_MAX_CHARS: usize = 78;

pub static INFO: ProviderInfo = ProviderInfo {
    id: ProviderId::SearchStd,
    display_name: "Zhipu Basic Search",
    description: "Zhipu AI's base search engine, suited to general queries.",
    options: &[],
    capabilities: Capabilities::NONE,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct ZhipuAdapter;

impl ProviderAdapter for ZhipuAdapter {
    fn info(&self) -> &'static ProviderInfo {
        &INFO
    }

    fn max_query_chars(&self) -> Option<usize> {
        Some(QUERY_MAX_CHARS)
    }

    fn option_pairs(&self, _query: &SearchQuery) -> Vec<(String, String)> {
        Vec::new()
    }

    fn normalize(&self, raw: &serde_json::Value) -> ResultSet {
        let raw = RawResponse::from_value(raw);
        let mut model = base_model(&raw);
        model.meta = Some(SearchMeta {
            source: None,
            result_count: result_count(&raw, model.results.len()),
            extras: Vec::new(),
        });
        model
    }
}
