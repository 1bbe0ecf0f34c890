//! Static preview texts for the "read more" modal.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::i18n::current::articles as t;

/// One preview entry: the `data-article` key and the text shown for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleEntry {
    /// Key carried by the read-more control.
    pub key: &'static str,
    /// Body text written into the modal content slot.
    pub preview: &'static str,
}

const ENTRIES: &[ArticleEntry] = &[
    ArticleEntry { key: "protein-breakfast", preview: t::PROTEIN_BREAKFAST },
    ArticleEntry { key: "nutrition-labels", preview: t::NUTRITION_LABELS },
    ArticleEntry { key: "healthy-snacking", preview: t::HEALTHY_SNACKING },
];

static CATALOG: Lazy<ArticleCatalog> = Lazy::new(|| ArticleCatalog::from_entries(ENTRIES));

/// Immutable key → preview mapping, built once per page session.
#[derive(Debug, Clone)]
pub struct ArticleCatalog {
    entries: HashMap<&'static str, &'static str>,
}

impl ArticleCatalog {
    /// The catalog shipped with the page.
    pub fn builtin() -> &'static ArticleCatalog {
        &CATALOG
    }

    /// Build a catalog from a fixed entry list. Later duplicates win.
    pub fn from_entries(entries: &[ArticleEntry]) -> Self {
        let entries = entries
            .iter()
            .map(|entry| (entry.key, entry.preview))
            .collect();
        Self { entries }
    }

    /// Preview text for `key`, if the key is known.
    pub fn preview(&self, key: &str) -> Option<&'static str> {
        self.entries.get(key).copied()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_all_previews() {
        let catalog = ArticleCatalog::builtin();
        assert_eq!(catalog.len(), 3);
        for key in ["protein-breakfast", "nutrition-labels", "healthy-snacking"] {
            assert!(catalog.preview(key).is_some(), "missing {key}");
        }
    }

    #[test]
    fn protein_breakfast_text_is_joined_without_line_breaks() {
        let text = ArticleCatalog::builtin()
            .preview("protein-breakfast")
            .expect("known key");
        assert!(text.starts_with("Discover five satisfying breakfast ideas"));
        assert!(text.contains("prioritize protein"));
        assert!(!text.contains('\n'));
    }

    #[test]
    fn unknown_and_empty_keys_are_absent() {
        let catalog = ArticleCatalog::builtin();
        assert_eq!(catalog.preview("unknown"), None);
        assert_eq!(catalog.preview(""), None);
    }
}
