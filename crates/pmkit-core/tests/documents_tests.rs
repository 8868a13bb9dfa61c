use pmkit_core::documents::prompts::{
    build_brd_prompt, build_market_research_prompt, build_product_brief_prompt,
};
use pmkit_core::{DocKind, Document};

#[test]
fn test_product_brief_section_headers() {
    let prompt = build_product_brief_prompt("req");
    let sections = [
        "## Product Name",
        "## Product Description",
        "## Target Audience",
        "## Key Features",
        "## Value Proposition",
        "## Success Metrics",
        "## Competitive Advantage",
        "## Technical Requirements (High-Level)",
        "## Timeline & Milestones",
    ];
    for section in sections {
        assert!(prompt.contains(section), "missing {}", section);
    }
}

#[test]
fn test_brd_section_headers() {
    let prompt = build_brd_prompt("req");
    assert!(prompt.contains("## 1. Executive Summary"));
    assert!(prompt.contains("## 13. Timeline and Milestones"));
    assert!(prompt.contains("### 2.1 Project Name"));
    assert!(prompt.contains("### 5.2 User Stories"));
}

#[test]
fn test_market_research_section_headers() {
    let prompt = build_market_research_prompt("product", "");
    assert!(prompt.contains("## 1. Executive Summary"));
    assert!(prompt.contains("### 4.4 SWOT Analysis"));
    assert!(prompt.contains("## 12. Conclusion"));
}

#[test]
fn test_market_data_defaults_to_empty() {
    let prompt = build_market_research_prompt("product", "");
    assert!(prompt.contains("Market Data: \n"));
}

#[test]
fn test_requirements_are_interpolated_verbatim() {
    let requirements = "multi-line\nrequirements with *markdown* and {braces}";
    let prompt = build_brd_prompt(requirements);
    assert!(prompt.contains(requirements));
}

#[test]
fn test_export_file_names() {
    assert_eq!(DocKind::ProductBrief.file_name(), "product_brief.txt");
    assert_eq!(DocKind::Brd.file_name(), "brd.txt");
    assert_eq!(DocKind::MarketResearch.file_name(), "market_research.txt");
}

#[test]
fn test_document_keeps_content_verbatim() {
    let doc = Document::new(DocKind::ProductBrief, "raw model output");
    assert_eq!(doc.kind, DocKind::ProductBrief);
    assert_eq!(doc.content, "raw model output");
}

#[test]
fn test_display_names() {
    assert_eq!(DocKind::ProductBrief.display_name(), "Product Brief");
    assert_eq!(DocKind::Brd.display_name(), "Business Requirements Document");
    assert_eq!(
        DocKind::MarketResearch.display_name(),
        "Market Research Report"
    );
}
