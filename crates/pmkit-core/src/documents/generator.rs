use super::document::DocKind;
use super::prompts::{build_brd_prompt, build_market_research_prompt, build_product_brief_prompt};
use crate::llm::{LLMError, LLM};

/// Generates business documents from canned prompt templates.
///
/// Each generation is a single one-shot model call: no tool use, no
/// reasoning loop, no conversation context. The model's text comes back
/// unmodified.
pub struct DocumentGenerator<L: LLM> {
    llm: L,
}

impl<L: LLM> DocumentGenerator<L> {
    /// Creates a new generator over the given model client.
    pub fn new(llm: L) -> Self {
        Self { llm }
    }

    /// Renders the filled prompt for a document kind.
    ///
    /// Pure string interpolation; `market_data` is only used for
    /// [`DocKind::MarketResearch`] and defaults to empty.
    pub fn render(kind: DocKind, requirements: &str, market_data: &str) -> String {
        match kind {
            DocKind::ProductBrief => build_product_brief_prompt(requirements),
            DocKind::Brd => build_brd_prompt(requirements),
            DocKind::MarketResearch => build_market_research_prompt(requirements, market_data),
        }
    }

    /// Renders the prompt for `kind` and sends it to the model.
    ///
    /// Returns the raw generated text with no post-processing and no
    /// section-presence validation.
    pub async fn generate(
        &self,
        kind: DocKind,
        requirements: &str,
        market_data: &str,
    ) -> Result<String, LLMError> {
        let prompt = Self::render(kind, requirements, market_data);

        tracing::info!(kind = kind.as_str(), "generating document");

        self.llm.complete(&prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::OpenAIClient;

    type Gen = DocumentGenerator<OpenAIClient>;

    #[test]
    fn test_render_selects_matching_template() {
        let brief = Gen::render(DocKind::ProductBrief, "req", "");
        assert!(brief.contains("# PRODUCT BRIEF"));

        let brd = Gen::render(DocKind::Brd, "req", "");
        assert!(brd.contains("# BUSINESS REQUIREMENTS DOCUMENT (BRD)"));

        let research = Gen::render(DocKind::MarketResearch, "req", "numbers");
        assert!(research.contains("# MARKET RESEARCH REPORT"));
        assert!(research.contains("Market Data: numbers"));
    }

    #[test]
    fn test_render_ignores_market_data_for_other_kinds() {
        let brief = Gen::render(DocKind::ProductBrief, "req", "ignored");
        assert!(!brief.contains("ignored"));
    }
}
