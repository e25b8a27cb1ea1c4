use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("empty query")]
    EmptyQuery,
    #[error("unknown provider: {0}")]
    UnknownProvider(String),
    #[error("not configured: {0}")]
    NotConfigured(String),
    #[error("transport failed: {0}")]
    Transport(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Wire identifiers of the supported search providers.
///
/// The string tags are part of the request contract with the backend
/// (`engine=<tag>`) and must not be renamed without a migration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderId {
    /// Zhipu basic AI search.
    #[serde(rename = "search_std")]
    SearchStd,
    /// Bocha AI web search with summaries.
    #[serde(rename = "bochaai")]
    BochaAi,
    /// SearXNG meta-search aggregator.
    #[serde(rename = "searxng")]
    Searxng,
}

impl ProviderId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SearchStd => "search_std",
            Self::BochaAi => "bochaai",
            Self::Searxng => "searxng",
        }
    }

    /// Parse a wire tag. Anything outside the fixed set is a configuration
    /// error, not a user-recoverable condition.
    pub fn parse(tag: &str) -> Result<Self> {
        match tag.trim() {
            "search_std" => Ok(Self::SearchStd),
            "bochaai" => Ok(Self::BochaAi),
            "searxng" => Ok(Self::Searxng),
            other => Err(Error::UnknownProvider(other.to_string())),
        }
    }

    /// All providers, in catalog order.
    pub fn all() -> &'static [ProviderId] {
        &[Self::SearchStd, Self::BochaAi, Self::Searxng]
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProviderId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Value shape of an advanced option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// One of a fixed vocabulary.
    Choice { allowed: &'static [&'static str] },
    /// Integer-valued (kept as a string on the wire).
    Count,
    /// Boolean flag; included (as `true`) only when set.
    Flag,
    /// Free text.
    Text,
}

/// One advanced option a provider exposes.
#[derive(Debug, Clone, Copy)]
pub struct OptionDef {
    pub key: &'static str,
    pub kind: OptionKind,
    pub default: &'static str,
    /// When set, a resolved value equal to `default` is a "no value"
    /// sentinel and the pair is left out of the request entirely.
    pub omit_when_default: bool,
}

/// Which auxiliary response sections a provider can ever populate.
///
/// The normalizer gates on these: a payload carrying e.g. `suggestions`
/// for a provider without that capability normalizes to an empty list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub suggestions: bool,
    pub corrections: bool,
    pub answers: bool,
    pub infoboxes: bool,
    pub meta_extras: bool,
}

impl Capabilities {
    pub const NONE: Capabilities = Capabilities {
        suggestions: false,
        corrections: false,
        answers: false,
        infoboxes: false,
        meta_extras: false,
    };
}

/// Static description of one provider: identity, catalog copy, and the
/// ordered advanced-option schema.
#[derive(Debug, Clone, Copy)]
pub struct ProviderInfo {
    pub id: ProviderId,
    pub display_name: &'static str,
    pub description: &'static str,
    pub options: &'static [OptionDef],
    pub capabilities: Capabilities,
}

/// One search invocation: trimmed query text, target provider, and the
/// user-chosen option values (schema keys only; missing keys fall back
/// to schema defaults at build time).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    pub text: String,
    pub provider: ProviderId,
    pub options: BTreeMap<String, String>,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>, provider: ProviderId) -> Result<Self> {
        let text = text.into().trim().to_string();
        if text.is_empty() {
            return Err(Error::EmptyQuery);
        }
        Ok(Self {
            text,
            provider,
            options: BTreeMap::new(),
        })
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }
}

/// Ordered request parameters ready for transport.
///
/// Always starts with `query` and `engine`; identical inputs yield an
/// identical pair list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.push((key.into(), value.into()));
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Canonical query-string form.
    ///
    /// Only the `query` value is percent-encoded; option values come from
    /// a constrained vocabulary and are emitted verbatim (so e.g.
    /// `engines=google,bing` keeps its comma). This is the exact wire
    /// shape the backend expects.
    pub fn to_query_string(&self) -> String {
        let mut out = String::new();
        for (k, v) in &self.0 {
            if !out.is_empty() {
                out.push('&');
            }
            out.push_str(k);
            out.push('=');
            if k == "query" {
                out.push_str(&urlencoding::encode(v));
            } else {
                out.push_str(v);
            }
        }
        out
    }
}

/// Intent/classification block echoed by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchIntent {
    /// Intent label, e.g. `SEARCH_ALL`.
    pub intent: String,
    /// The query as the backend understood it.
    pub query: String,
    /// Individual keyword atoms, original order.
    pub keywords: Vec<String>,
}

/// Advisory metadata about one response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchMeta {
    /// Data-source label (e.g. "SearXNG"); absent for the base engine.
    pub source: Option<String>,
    /// Estimated total result count. An explicit backend total wins over
    /// the normalized list length; never exact-guaranteed.
    pub result_count: u64,
    /// Provider-specific extras, insertion order preserved.
    pub extras: Vec<(String, String)>,
}

/// One normalized result card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultCard {
    pub title: String,
    pub link: String,
    /// The link, or the media label when no real link exists. Equal to
    /// the `#` placeholder when neither is present, which is the
    /// renderer's cue to hide the URL line.
    pub display_url: String,
    pub snippet: String,
    pub source: String,
}

/// A quick answer (meta-search providers only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub title: String,
    pub content: String,
    pub link: String,
}

/// An auxiliary infobox (meta-search providers only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Infobox {
    pub title: String,
    pub content: String,
    pub link: String,
    pub icon: Option<String>,
}

/// The unified result model every provider response normalizes into.
///
/// Built fresh per search and discarded after rendering; result order is
/// exactly the provider's order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    pub intent: Option<SearchIntent>,
    pub meta: Option<SearchMeta>,
    pub results: Vec<ResultCard>,
    pub suggestions: Vec<String>,
    pub corrections: Vec<String>,
    pub answers: Vec<Answer>,
    pub infoboxes: Vec<Infobox>,
}

impl ResultSet {
    /// The documented "no results" condition. Not an error.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// One renderable block. The mapper emits these in a fixed order the
/// renderer depends on: Intent, Meta, Corrections, Answers, Infoboxes,
/// Results, Suggestions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum RenderBlock {
    Intent(SearchIntent),
    Meta(SearchMeta),
    Corrections(Vec<String>),
    Answers(Vec<Answer>),
    Infoboxes(Vec<Infobox>),
    Results(Vec<ResultCard>),
    Suggestions(Vec<String>),
}

/// A provider behind the unified request/response contract.
///
/// Implementations are pure: `option_pairs` and `normalize` are
/// deterministic transformations with no I/O, so overlapping searches
/// cannot interfere through them.
pub trait ProviderAdapter: Send + Sync {
    fn info(&self) -> &'static ProviderInfo;

    fn id(&self) -> ProviderId {
        self.info().id
    }

    /// Backend-imposed cap on the outgoing query text, if any.
    fn max_query_chars(&self) -> Option<usize> {
        None
    }

    /// The option pairs to append after `query`/`engine`, in schema order.
    fn option_pairs(&self, query: &SearchQuery) -> Vec<(String, String)>;

    /// Transform a raw backend payload into the unified model. Must not
    /// fail: missing or malformed pieces degrade to documented defaults.
    fn normalize(&self, raw: &serde_json::Value) -> ResultSet;
}

/// The transport seam: fetches the raw payload for an already-built
/// parameter list. The reqwest client implements this; tests substitute
/// canned payloads.
#[async_trait::async_trait]
pub trait SearchTransport: Send + Sync {
    async fn fetch_raw(&self, params: &QueryParams) -> Result<serde_json::Value>;
}
