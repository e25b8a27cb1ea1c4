//! Tolerant deserialization of the backend response envelope.
//!
//! The backend answers every provider with the same zhipu-compatible
//! envelope; which sections are actually populated varies by provider.
//! Every field is optional and untrusted, so a partial payload
//! deserializes instead of failing.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawResponse {
    #[serde(default)]
    pub search_intent: Vec<RawIntent>,
    #[serde(default)]
    pub search_result: Vec<RawResult>,
    #[serde(default)]
    pub meta: Option<RawMeta>,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub corrections: Vec<String>,
    #[serde(default)]
    pub answers: Vec<RawAnswer>,
    #[serde(default)]
    pub infoboxes: Vec<RawInfobox>,
}

impl RawResponse {
    /// Lenient decode: a payload that is not even envelope-shaped
    /// degrades to the empty envelope (the documented no-results state).
    pub fn from_value(value: &serde_json::Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawIntent {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub intent: Option<String>,
    /// Whitespace-separated keyword string.
    #[serde(default)]
    pub keywords: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawResult {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    /// Publisher / site label.
    #[serde(default)]
    pub media: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    /// Result-kind badge ("图片", "视频", ...), passed through untouched.
    #[serde(default)]
    pub refer: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMeta {
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default, rename = "totalResults")]
    pub total_results: Option<u64>,
    #[serde(default, rename = "webSearchUrl")]
    pub web_search_url: Option<String>,
    #[serde(default, rename = "originalQuery")]
    pub original_query: Option<String>,
    #[serde(default)]
    pub engines: Option<String>,
    /// Backend-measured search time in seconds.
    #[serde(default)]
    pub time: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAnswer {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawInfobox {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}
