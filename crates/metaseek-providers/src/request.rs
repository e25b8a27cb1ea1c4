//! Request construction: one `SearchQuery` in, one ordered parameter
//! list out.

use crate::catalog;
use metaseek_core::{Error, QueryParams, Result, SearchQuery};

/// Build the request parameters for one search invocation.
///
/// The pair list always leads with `query` and `engine`, followed by the
/// provider's option pairs in schema order. Equal inputs produce equal
/// output. The transport's cache-busting token is not part of this list.
pub fn build_params(query: &SearchQuery) -> Result<QueryParams> {
    let text = query.text.trim();
    if text.is_empty() {
        return Err(Error::EmptyQuery);
    }

    let adapter = catalog::adapter(query.provider);
    let text = match adapter.max_query_chars() {
        Some(max) if text.chars().count() > max => text.chars().take(max).collect::<String>(),
        _ => text.to_string(),
    };

    let mut params = QueryParams::new();
    params.push("query", text);
    params.push("engine", query.provider.as_str());
    for (key, value) in adapter.option_pairs(query) {
        params.push(key, value);
    }
    Ok(params)
}
