//! Transport: the single backend `/api/search` endpoint.
//!
//! The client owns the only suspension point in a search invocation.
//! Everything around it (building parameters, normalizing the payload)
//! is pure, so overlapping searches cannot corrupt shared state.

use crate::{catalog, request};
use metaseek_core::{Error, QueryParams, Result, ResultSet, SearchQuery, SearchTransport};
use std::time::{Instant, SystemTime, UNIX_EPOCH};
use tracing::{debug, warn};
use url::Url;

pub const DEFAULT_TIMEOUT_MS: u64 = 20_000;

fn endpoint_from_env() -> Option<String> {
    std::env::var("METASEEK_ENDPOINT")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Accept either a server base URL or a full `/api/search` endpoint.
fn endpoint_search_for(base_endpoint: &str) -> String {
    let mut base = base_endpoint.trim().trim_end_matches('/').to_string();
    if !base.ends_with("/api/search") {
        base.push_str("/api/search");
    }
    base
}

#[derive(Debug, Clone)]
pub struct SearchClient {
    client: reqwest::Client,
    endpoint: String,
    timeout_ms: u64,
}

impl SearchClient {
    pub fn new(client: reqwest::Client, endpoint: &str) -> Result<Self> {
        let endpoint = endpoint_search_for(endpoint);
        Url::parse(&endpoint)
            .map_err(|e| Error::NotConfigured(format!("invalid endpoint {endpoint:?}: {e}")))?;
        Ok(Self {
            client,
            endpoint,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        })
    }

    pub fn from_env(client: reqwest::Client) -> Result<Self> {
        let endpoint = endpoint_from_env()
            .ok_or_else(|| Error::NotConfigured("missing METASEEK_ENDPOINT".to_string()))?;
        Self::new(client, &endpoint)
    }

    /// Requests can hang indefinitely without an explicit timeout. Keep
    /// a conservative cap even if callers pass something huge.
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms.clamp(1_000, 60_000);
        self
    }

    fn cache_buster() -> String {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis()
            .to_string()
    }

    /// Fetch the raw payload for an already-built parameter list.
    ///
    /// Appends the opaque `_t` cache-busting token at send time; the
    /// token is deliberately not part of the canonical parameter list.
    pub async fn fetch_raw(&self, params: &QueryParams) -> Result<serde_json::Value> {
        let url = format!(
            "{}?{}&_t={}",
            self.endpoint,
            params.to_query_string(),
            Self::cache_buster()
        );
        debug!(%url, "search request");

        let t0 = Instant::now();
        let resp = self
            .client
            .get(&url)
            .timeout(std::time::Duration::from_millis(self.timeout_ms))
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            warn!(%status, "search request failed");
            return Err(Error::Transport(format!("search HTTP {status}")));
        }

        let value: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;
        debug!(elapsed_ms = t0.elapsed().as_millis() as u64, "search response");
        Ok(value)
    }

    /// One full invocation: build parameters, fetch, normalize.
    pub async fn search(&self, query: &SearchQuery) -> Result<ResultSet> {
        let params = request::build_params(query)?;
        let raw = self.fetch_raw(&params).await?;
        Ok(catalog::adapter(query.provider).normalize(&raw))
    }
}

#[async_trait::async_trait]
impl SearchTransport for SearchClient {
    async fn fetch_raw(&self, params: &QueryParams) -> Result<serde_json::Value> {
        SearchClient::fetch_raw(self, params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::get, Router};
    use metaseek_core::ProviderId;
    use std::collections::HashMap;
    use std::net::SocketAddr;

    struct EnvGuard {
        k: &'static str,
        prev: Option<String>,
    }

    impl EnvGuard {
        fn set(k: &'static str, v: &str) -> Self {
            let prev = std::env::var(k).ok();
            std::env::set_var(k, v);
            Self { k, prev }
        }

        fn unset(k: &'static str) -> Self {
            let prev = std::env::var(k).ok();
            std::env::remove_var(k);
            Self { k, prev }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            if let Some(v) = self.prev.take() {
                std::env::set_var(self.k, v);
            } else {
                std::env::remove_var(self.k);
            }
        }
    }

    async fn serve(app: Router) -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr
    }

    #[test]
    fn endpoint_gains_api_search_suffix() {
        assert_eq!(
            endpoint_search_for("http://localhost:5000"),
            "http://localhost:5000/api/search"
        );
        assert_eq!(
            endpoint_search_for("http://localhost:5000/api/search/"),
            "http://localhost:5000/api/search"
        );
    }

    #[test]
    fn blank_env_endpoint_is_missing() {
        let _g = EnvGuard::set("METASEEK_ENDPOINT", "   ");
        assert!(endpoint_from_env().is_none());
        let _g = EnvGuard::unset("METASEEK_ENDPOINT");
        assert!(matches!(
            SearchClient::from_env(reqwest::Client::new()),
            Err(Error::NotConfigured(_))
        ));
    }

    #[test]
    fn invalid_endpoint_is_rejected() {
        assert!(matches!(
            SearchClient::new(reqwest::Client::new(), "not a url"),
            Err(Error::NotConfigured(_))
        ));
    }

    #[test]
    fn timeout_is_clamped() {
        let c = SearchClient::new(reqwest::Client::new(), "http://localhost:1")
            .unwrap()
            .with_timeout_ms(10);
        assert_eq!(c.timeout_ms, 1_000);
        let c = c.with_timeout_ms(600_000);
        assert_eq!(c.timeout_ms, 60_000);
    }

    #[tokio::test]
    async fn search_end_to_end_against_fixture() {
        let app = Router::new().route(
            "/api/search",
            get(|q: axum::extract::Query<HashMap<String, String>>| async move {
                assert_eq!(q.get("engine").map(String::as_str), Some("searxng"));
                assert_eq!(q.get("query").map(String::as_str), Some("rust ownership"));
                assert!(q.contains_key("_t"), "cache buster missing");
                axum::Json(serde_json::json!({
                    "search_result": [
                        {"title": "A", "link": "https://example.com/a", "content": "alpha", "media": "example.com"}
                    ],
                    "suggestions": ["rust borrowing"],
                    "meta": {"source": "SearXNG", "totalResults": 7}
                }))
            }),
        );
        let addr = serve(app).await;

        let client =
            SearchClient::new(reqwest::Client::new(), &format!("http://{addr}")).unwrap();
        let query = SearchQuery::new("rust ownership", ProviderId::Searxng).unwrap();
        let model = client.search(&query).await.unwrap();
        assert_eq!(model.results.len(), 1);
        assert_eq!(model.suggestions, vec!["rust borrowing"]);
        assert_eq!(model.meta.unwrap().result_count, 7);
    }

    #[tokio::test]
    async fn non_success_status_is_transport_failure() {
        let app = Router::new().route(
            "/api/search",
            get(|| async { (axum::http::StatusCode::BAD_GATEWAY, "upstream down") }),
        );
        let addr = serve(app).await;

        let client =
            SearchClient::new(reqwest::Client::new(), &format!("http://{addr}")).unwrap();
        let query = SearchQuery::new("rust", ProviderId::SearchStd).unwrap();
        let err = client.search(&query).await.unwrap_err();
        assert!(matches!(err, Error::Transport(ref msg) if msg.contains("502")));
    }

    #[tokio::test]
    async fn non_json_body_is_transport_failure() {
        let app = Router::new().route("/api/search", get(|| async { "<html>nope</html>" }));
        let addr = serve(app).await;

        let client =
            SearchClient::new(reqwest::Client::new(), &format!("http://{addr}")).unwrap();
        let query = SearchQuery::new("rust", ProviderId::SearchStd).unwrap();
        assert!(matches!(
            client.search(&query).await,
            Err(Error::Transport(_))
        ));
    }

    #[tokio::test]
    async fn wrong_shape_json_degrades_to_empty_model() {
        let app = Router::new().route(
            "/api/search",
            get(|| async { axum::Json(serde_json::json!({"unexpected": true})) }),
        );
        let addr = serve(app).await;

        let client =
            SearchClient::new(reqwest::Client::new(), &format!("http://{addr}")).unwrap();
        let query = SearchQuery::new("rust", ProviderId::SearchStd).unwrap();
        let model = client.search(&query).await.unwrap();
        assert!(model.is_empty());
    }
}
