//! Schema-driven resolution of advanced-option values into request pairs.

use metaseek_core::{OptionDef, OptionKind};
use std::collections::BTreeMap;

/// Truthy forms accepted for flag options.
pub fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Walk the schema in order and produce the option pairs to send.
///
/// Per definition: the user value wins when present, else the default;
/// a pair equal to its omit sentinel is left out entirely; flags are
/// sent (as `true`) only when set; count values that do not parse as an
/// integer fall back to the default.
pub fn resolve(defs: &[OptionDef], chosen: &BTreeMap<String, String>) -> Vec<(String, String)> {
    let mut out = Vec::new();
    for def in defs {
        let value = chosen
            .get(def.key)
            .map(String::as_str)
            .unwrap_or(def.default);
        match def.kind {
            OptionKind::Flag => {
                if is_truthy(value) {
                    out.push((def.key.to_string(), "true".to_string()));
                }
            }
            OptionKind::Count => {
                let value = if value.trim().parse::<i64>().is_ok() {
                    value.trim()
                } else {
                    def.default
                };
                if def.omit_when_default && value == def.default {
                    continue;
                }
                out.push((def.key.to_string(), value.to_string()));
            }
            OptionKind::Choice { .. } | OptionKind::Text => {
                if def.omit_when_default && value == def.default {
                    continue;
                }
                out.push((def.key.to_string(), value.to_string()));
            }
        }
    }
    out
}

/// Clamp an already-resolved integer pair into `[lo, hi]`, falling back
/// to `fallback` when the value does not parse.
pub fn clamp_count(value: &str, lo: i64, hi: i64, fallback: i64) -> String {
    value
        .trim()
        .parse::<i64>()
        .unwrap_or(fallback)
        .clamp(lo, hi)
        .to_string()
}
