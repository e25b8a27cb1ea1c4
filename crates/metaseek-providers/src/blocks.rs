//! Presentation mapping: unified model to ordered render blocks.

use metaseek_core::{RenderBlock, ResultSet};

/// Project a result model onto the renderable block sequence.
///
/// Pure function. Blocks appear in the fixed order the renderer depends
/// on (intent, meta, corrections, answers, infoboxes, results,
/// suggestions); empty sections are skipped, and results map 1:1 to
/// cards in provider order with no filtering or re-ranking.
pub fn to_blocks(model: &ResultSet) -> Vec<RenderBlock> {
    let mut blocks = Vec::new();
    if let Some(intent) = &model.intent {
        blocks.push(RenderBlock::Intent(intent.clone()));
    }
    if let Some(meta) = &model.meta {
        blocks.push(RenderBlock::Meta(meta.clone()));
    }
    if !model.corrections.is_empty() {
        blocks.push(RenderBlock::Corrections(model.corrections.clone()));
    }
    if !model.answers.is_empty() {
        blocks.push(RenderBlock::Answers(model.answers.clone()));
    }
    if !model.infoboxes.is_empty() {
        blocks.push(RenderBlock::Infoboxes(model.infoboxes.clone()));
    }
    if !model.results.is_empty() {
        blocks.push(RenderBlock::Results(model.results.clone()));
    }
    if !model.suggestions.is_empty() {
        blocks.push(RenderBlock::Suggestions(model.suggestions.clone()));
    }
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use metaseek_core::{Answer, ResultCard, SearchIntent, SearchMeta};

    fn card(title: &str) -> ResultCard {
        ResultCard {
            title: title.to_string(),
            link: "https://example.com".to_string(),
            display_url: "https://example.com".to_string(),
            snippet: "snippet".to_string(),
            source: "example.com".to_string(),
        }
    }

    #[test]
    fn empty_model_yields_no_blocks() {
        assert!(to_blocks(&ResultSet::default()).is_empty());
    }

    #[test]
    fn no_block_for_empty_sections() {
        let model = ResultSet {
            results: vec![card("A")],
            ..ResultSet::default()
        };
        let blocks = to_blocks(&model);
        assert_eq!(blocks.len(), 1);
        assert!(matches!(blocks[0], RenderBlock::Results(_)));
    }

    #[test]
    fn full_model_emits_blocks_in_contract_order() {
        let model = ResultSet {
            intent: Some(SearchIntent {
                intent: "SEARCH_ALL".to_string(),
                query: "rust".to_string(),
                keywords: vec!["rust".to_string()],
            }),
            meta: Some(SearchMeta {
                source: Some("SearXNG".to_string()),
                result_count: 2,
                extras: Vec::new(),
            }),
            results: vec![card("A"), card("B")],
            suggestions: vec!["rust book".to_string()],
            corrections: vec!["rust".to_string()],
            answers: vec![Answer {
                title: "Answer".to_string(),
                content: "42".to_string(),
                link: "#".to_string(),
            }],
            infoboxes: Vec::new(),
        };
        let kinds: Vec<&'static str> = to_blocks(&model)
            .iter()
            .map(|b| match b {
                RenderBlock::Intent(_) => "intent",
                RenderBlock::Meta(_) => "meta",
                RenderBlock::Corrections(_) => "corrections",
                RenderBlock::Answers(_) => "answers",
                RenderBlock::Infoboxes(_) => "infoboxes",
                RenderBlock::Results(_) => "results",
                RenderBlock::Suggestions(_) => "suggestions",
            })
            .collect();
        assert_eq!(
            kinds,
            vec!["intent", "meta", "corrections", "answers", "results", "suggestions"]
        );
    }

    #[test]
    fn results_block_preserves_card_order() {
        let model = ResultSet {
            results: vec![card("first"), card("second"), card("third")],
            ..ResultSet::default()
        };
        let blocks = to_blocks(&model);
        let RenderBlock::Results(cards) = &blocks[0] else {
            panic!("expected results block");
        };
        let titles: Vec<&str> = cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }
}
