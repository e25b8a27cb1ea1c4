//! Text rendering of the block sequence.
//!
//! This is the renderer collaborator the core hands its blocks to: it
//! walks them in the order the mapper emitted and never reorders or
//! filters. The `#` placeholder anchor hides a URL line.

use metaseek_core::RenderBlock;
use metaseek_providers::normalize::PLACEHOLDER_LINK;
use std::fmt::Write;

pub const NO_RESULTS_NOTICE: &str =
    "No results found. Try different keywords or check the spelling.";

pub fn render_text(blocks: &[RenderBlock], empty: bool, elapsed_ms: u64) -> String {
    let mut out = String::new();
    for block in blocks {
        match block {
            RenderBlock::Intent(intent) => {
                if !intent.intent.is_empty() {
                    let label = if intent.intent == "SEARCH_ALL" {
                        "web-wide search"
                    } else {
                        intent.intent.as_str()
                    };
                    let _ = writeln!(out, "Search type: {label}");
                }
                if !intent.query.is_empty() {
                    let _ = writeln!(out, "Query: {}", intent.query);
                }
                if !intent.keywords.is_empty() {
                    let _ = writeln!(out, "Keywords: {}", intent.keywords.join(", "));
                }
            }
            RenderBlock::Meta(meta) => {
                match &meta.source {
                    Some(source) => {
                        let _ = writeln!(
                            out,
                            "About {} results from {} ({:.2}s)",
                            meta.result_count,
                            source,
                            elapsed_ms as f64 / 1000.0
                        );
                    }
                    None => {
                        let _ = writeln!(
                            out,
                            "About {} results ({:.2}s)",
                            meta.result_count,
                            elapsed_ms as f64 / 1000.0
                        );
                    }
                }
                for (key, value) in &meta.extras {
                    let _ = writeln!(out, "  {key}: {value}");
                }
            }
            RenderBlock::Corrections(corrections) => {
                let _ = writeln!(out, "\nDid you mean: {}", corrections.join(", "));
            }
            RenderBlock::Answers(answers) => {
                let _ = writeln!(out, "\nQuick answers:");
                for answer in answers {
                    let _ = writeln!(out, "  {}", answer.title);
                    if !answer.content.is_empty() {
                        let _ = writeln!(out, "    {}", answer.content);
                    }
                    if answer.link != PLACEHOLDER_LINK {
                        let _ = writeln!(out, "    {}", answer.link);
                    }
                }
            }
            RenderBlock::Infoboxes(infoboxes) => {
                for infobox in infoboxes {
                    let _ = writeln!(out, "\n[{}]", infobox.title);
                    if !infobox.content.is_empty() {
                        let _ = writeln!(out, "  {}", infobox.content);
                    }
                    if infobox.link != PLACEHOLDER_LINK {
                        let _ = writeln!(out, "  {}", infobox.link);
                    }
                }
            }
            RenderBlock::Results(cards) => {
                for (i, card) in cards.iter().enumerate() {
                    let _ = writeln!(out, "\n{}. {}", i + 1, card.title);
                    if card.display_url != PLACEHOLDER_LINK {
                        let _ = writeln!(out, "   {}", card.display_url);
                    }
                    let _ = writeln!(out, "   {}", card.snippet);
                    let _ = writeln!(out, "   source: {}", card.source);
                }
            }
            RenderBlock::Suggestions(suggestions) => {
                let _ = writeln!(out, "\nRelated searches: {}", suggestions.join(", "));
            }
        }
    }
    if empty {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(NO_RESULTS_NOTICE);
        out.push('\n');
    }
    out
}
