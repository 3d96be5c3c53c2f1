//! Rendering port: an in-memory document model.
//!
//! The site augments static markup; this module models just enough of that
//! markup (translatable text nodes, title, meta description) for the
//! localization logic to run and be tested without a browser. A real
//! front end binds these nodes to concrete elements by id.

use crate::i18n::Language;

/// How a node is rewritten when its text changes.
///
/// Elements that carry non-text children (an icon next to a label) only get
/// their text slot replaced so the icon survives. Button-style elements opt
/// out and are replaced wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Replace only the text slot, preserving child elements.
    ReplaceTextOnly,
    /// Replace the whole content, dropping child elements.
    ReplaceAll,
}

/// A translatable text node.
///
/// Carries up to two parallel-language variants. A node missing the variant
/// for the requested language is left unchanged on translation (fail-soft).
#[derive(Debug, Clone)]
pub struct TextNode {
    pub id: String,
    pub en: Option<String>,
    pub mr: Option<String>,
    /// Currently displayed text.
    pub text: String,
    /// Non-text children (icon refs and the like).
    pub children: Vec<String>,
    pub mode: RenderMode,
}

impl TextNode {
    /// A plain bilingual node, initially displaying its English variant.
    pub fn bilingual(id: &str, en: &str, mr: &str) -> Self {
        Self {
            id: id.to_string(),
            en: Some(en.to_string()),
            mr: Some(mr.to_string()),
            text: en.to_string(),
            children: Vec::new(),
            mode: RenderMode::ReplaceTextOnly,
        }
    }

    /// Attach non-text children (kept intact under `ReplaceTextOnly`).
    pub fn with_children(mut self, children: Vec<String>) -> Self {
        self.children = children;
        self
    }

    /// Switch the node to whole-content replacement.
    pub fn replace_all(mut self) -> Self {
        self.mode = RenderMode::ReplaceAll;
        self
    }

    /// The variant declared for a language, if any.
    pub fn variant(&self, language: Language) -> Option<&str> {
        if language == Language::MARATHI {
            self.mr.as_deref()
        } else {
            self.en.as_deref()
        }
    }
}

/// A bilingual metadata field (page title, meta description).
#[derive(Debug, Clone, Default)]
pub struct MetaField {
    pub en: Option<String>,
    pub mr: Option<String>,
    pub value: String,
}

impl MetaField {
    pub fn bilingual(en: &str, mr: &str) -> Self {
        Self {
            en: Some(en.to_string()),
            mr: Some(mr.to_string()),
            value: en.to_string(),
        }
    }

    fn variant(&self, language: Language) -> Option<&str> {
        if language == Language::MARATHI {
            self.mr.as_deref()
        } else {
            self.en.as_deref()
        }
    }
}

/// The current page as the script sees it.
#[derive(Debug, Clone, Default)]
pub struct Document {
    nodes: Vec<TextNode>,
    pub title: Option<MetaField>,
    pub meta_description: Option<MetaField>,
}

impl Document {
    pub fn new(nodes: Vec<TextNode>) -> Self {
        Self {
            nodes,
            title: None,
            meta_description: None,
        }
    }

    pub fn nodes(&self) -> &[TextNode] {
        &self.nodes
    }

    pub fn node(&self, id: &str) -> Option<&TextNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn push(&mut self, node: TextNode) {
        self.nodes.push(node);
    }

    /// Re-render every translatable node for `language`.
    ///
    /// Synchronous, single pass, idempotent. Nodes without a variant for the
    /// requested language keep their current text; no error is raised. The
    /// title and meta description follow the same rule.
    pub fn translate(&mut self, language: Language) {
        for node in &mut self.nodes {
            let Some(text) = node.variant(language).map(str::to_string) else {
                continue;
            };
            node.text = text;
            if node.mode == RenderMode::ReplaceAll {
                node.children.clear();
            }
        }

        if let Some(title) = &mut self.title {
            if let Some(text) = title.variant(language).map(str::to_string) {
                title.value = text;
            }
        }
        if let Some(meta) = &mut self.meta_description {
            if let Some(text) = meta.variant(language).map(str::to_string) {
                meta.value = text;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document() -> Document {
        let mut doc = Document::new(vec![
            TextNode::bilingual("hero-heading", "Rent Agreement in Minutes", "मिनिटांत भाडे करार"),
            TextNode::bilingual("cta-label", "Create Agreement", "करार तयार करा")
                .with_children(vec!["fas fa-file-contract".to_string()]),
            TextNode::bilingual("submit-label", "Submit", "सबमिट करा").replace_all(),
        ]);
        doc.title = Some(MetaField::bilingual(
            "Rent Agreement Services",
            "भाडे करार सेवा",
        ));
        doc
    }

    #[test]
    fn test_translate_replaces_declared_variants() {
        let mut doc = sample_document();
        doc.translate(Language::MARATHI);

        assert_eq!(doc.node("hero-heading").unwrap().text, "मिनिटांत भाडे करार");
        assert_eq!(doc.node("cta-label").unwrap().text, "करार तयार करा");
        assert_eq!(doc.title.as_ref().unwrap().value, "भाडे करार सेवा");
    }

    #[test]
    fn test_translate_is_idempotent() {
        let mut once = sample_document();
        once.translate(Language::MARATHI);

        let mut twice = sample_document();
        twice.translate(Language::MARATHI);
        twice.translate(Language::MARATHI);

        for (a, b) in once.nodes().iter().zip(twice.nodes()) {
            assert_eq!(a.text, b.text);
            assert_eq!(a.children, b.children);
        }
        assert_eq!(
            once.title.as_ref().unwrap().value,
            twice.title.as_ref().unwrap().value
        );
    }

    #[test]
    fn test_translate_round_trip_restores_english() {
        let mut doc = sample_document();
        doc.translate(Language::MARATHI);
        doc.translate(Language::ENGLISH);

        assert_eq!(doc.node("hero-heading").unwrap().text, "Rent Agreement in Minutes");
    }

    #[test]
    fn test_missing_variant_leaves_node_unchanged() {
        let mut doc = Document::new(vec![TextNode {
            id: "footer-note".to_string(),
            en: Some("All rights reserved".to_string()),
            mr: None,
            text: "All rights reserved".to_string(),
            children: Vec::new(),
            mode: RenderMode::ReplaceTextOnly,
        }]);

        doc.translate(Language::MARATHI);
        assert_eq!(doc.node("footer-note").unwrap().text, "All rights reserved");
    }

    #[test]
    fn test_replace_text_only_preserves_children() {
        let mut doc = sample_document();
        doc.translate(Language::MARATHI);

        let node = doc.node("cta-label").unwrap();
        assert_eq!(node.children, vec!["fas fa-file-contract".to_string()]);
    }

    #[test]
    fn test_replace_all_drops_children() {
        let mut doc = Document::new(vec![TextNode::bilingual("btn", "Go", "जा")
            .with_children(vec!["fas fa-arrow-right".to_string()])
            .replace_all()]);

        doc.translate(Language::MARATHI);

        let node = doc.node("btn").unwrap();
        assert_eq!(node.text, "जा");
        assert!(node.children.is_empty());
    }

    #[test]
    fn test_untitled_document_translates() {
        let mut doc = Document::new(vec![]);
        doc.translate(Language::MARATHI);
        assert!(doc.title.is_none());
    }
}
