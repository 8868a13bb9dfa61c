use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The kind of business document to generate.
///
/// A closed set: each kind maps to exactly one prompt template and one
/// agent operation, so dispatch over kinds is exhaustively checkable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocKind {
    /// Product brief
    ProductBrief,
    /// Business requirements document
    Brd,
    /// Market research report
    MarketResearch,
}

impl DocKind {
    /// All document kinds, in presentation order.
    pub const ALL: [DocKind; 3] = [DocKind::ProductBrief, DocKind::Brd, DocKind::MarketResearch];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocKind::ProductBrief => "product_brief",
            DocKind::Brd => "brd",
            DocKind::MarketResearch => "market_research",
        }
    }

    /// Human-readable name for display.
    pub fn display_name(&self) -> &'static str {
        match self {
            DocKind::ProductBrief => "Product Brief",
            DocKind::Brd => "Business Requirements Document",
            DocKind::MarketResearch => "Market Research Report",
        }
    }

    /// File name used when exporting the document as plain text.
    pub fn file_name(&self) -> String {
        format!("{}.txt", self.as_str())
    }

    /// Parses a kind from its short name (as used by the CLI).
    pub fn parse(s: &str) -> Option<DocKind> {
        match s.trim().to_lowercase().as_str() {
            "brief" | "product_brief" => Some(DocKind::ProductBrief),
            "brd" => Some(DocKind::Brd),
            "market" | "market_research" => Some(DocKind::MarketResearch),
            _ => None,
        }
    }
}

/// A generated business document.
///
/// Never mutated after creation; regenerating a kind replaces the whole
/// document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Which template produced this document
    pub kind: DocKind,
    /// The raw generated text, unmodified
    pub content: String,
    /// When the document was generated
    pub generated_at: DateTime<Utc>,
}

impl Document {
    /// Creates a new document stamped with the current time.
    pub fn new(kind: DocKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
            generated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        assert_eq!(DocKind::ProductBrief.file_name(), "product_brief.txt");
        assert_eq!(DocKind::Brd.file_name(), "brd.txt");
        assert_eq!(DocKind::MarketResearch.file_name(), "market_research.txt");
    }

    #[test]
    fn test_parse() {
        assert_eq!(DocKind::parse("brief"), Some(DocKind::ProductBrief));
        assert_eq!(DocKind::parse("BRD"), Some(DocKind::Brd));
        assert_eq!(DocKind::parse("market"), Some(DocKind::MarketResearch));
        assert_eq!(DocKind::parse("memo"), None);
    }

    #[test]
    fn test_all_covers_every_kind() {
        assert_eq!(DocKind::ALL.len(), 3);
    }
}
