//! Translation coverage reporting.
//!
//! Rendering is fail-soft: a node missing a variant for the active language
//! is simply left alone. This module makes those gaps visible so content
//! authors can fix them, without ever turning them into render-time errors.

use crate::i18n::LanguageRegistry;
use crate::render::Document;

/// Coverage report for a document's translatable nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageReport {
    /// Node ids missing an English variant
    pub missing_en: Vec<String>,

    /// Node ids missing a Marathi variant
    pub missing_mr: Vec<String>,

    /// Total translatable nodes inspected
    pub total_nodes: usize,
}

impl CoverageReport {
    /// Check if every node carries a variant for every enabled language.
    pub fn is_complete(&self) -> bool {
        self.missing_en.is_empty() && self.missing_mr.is_empty()
    }

    /// Number of missing variants across all languages.
    pub fn gap_count(&self) -> usize {
        self.missing_en.len() + self.missing_mr.len()
    }
}

/// Inspect a document and list nodes lacking a variant for an enabled language.
///
/// Only languages the registry lists as enabled are checked, so disabling a
/// language never leaves phantom gaps in the report.
///
/// # Arguments
/// * `document` - The document whose nodes to inspect
///
/// # Returns
/// A `CoverageReport` naming every gap per language.
pub fn coverage_report(document: &Document) -> CoverageReport {
    let enabled = LanguageRegistry::get().list_enabled();
    let mut missing_en = Vec::new();
    let mut missing_mr = Vec::new();

    for node in document.nodes() {
        for language in &enabled {
            match language.code {
                "en" if node.en.is_none() => missing_en.push(node.id.clone()),
                "mr" if node.mr.is_none() => missing_mr.push(node.id.clone()),
                _ => {}
            }
        }
    }

    CoverageReport {
        missing_en,
        missing_mr,
        total_nodes: document.nodes().len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{RenderMode, TextNode};

    fn node_with(id: &str, en: Option<&str>, mr: Option<&str>) -> TextNode {
        TextNode {
            id: id.to_string(),
            en: en.map(str::to_string),
            mr: mr.map(str::to_string),
            text: en.unwrap_or_default().to_string(),
            children: Vec::new(),
            mode: RenderMode::ReplaceTextOnly,
        }
    }

    #[test]
    fn test_complete_document_reports_no_gaps() {
        let doc = Document::new(vec![
            node_with("a", Some("Home"), Some("होम")),
            node_with("b", Some("Contact"), Some("संपर्क")),
        ]);

        let report = coverage_report(&doc);
        assert!(report.is_complete());
        assert_eq!(report.gap_count(), 0);
        assert_eq!(report.total_nodes, 2);
    }

    #[test]
    fn test_missing_marathi_variant_is_listed() {
        let doc = Document::new(vec![
            node_with("a", Some("Home"), Some("होम")),
            node_with("footer", Some("All rights reserved"), None),
        ]);

        let report = coverage_report(&doc);
        assert!(!report.is_complete());
        assert_eq!(report.missing_mr, vec!["footer".to_string()]);
        assert!(report.missing_en.is_empty());
    }

    #[test]
    fn test_missing_english_variant_is_listed() {
        let doc = Document::new(vec![node_with("mr-only", None, Some("होम"))]);

        let report = coverage_report(&doc);
        assert_eq!(report.missing_en, vec!["mr-only".to_string()]);
        assert_eq!(report.gap_count(), 1);
    }

    #[test]
    fn test_empty_document_is_complete() {
        let report = coverage_report(&Document::new(vec![]));
        assert!(report.is_complete());
        assert_eq!(report.total_nodes, 0);
    }
}
