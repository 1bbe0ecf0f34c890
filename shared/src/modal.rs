//! State of the article preview modal.

use tracing::debug;

use crate::articles::ArticleCatalog;

/// Open/closed state plus the catalog the modal reads previews from.
#[derive(Debug, Clone, Copy)]
pub struct ArticleModal {
    catalog: &'static ArticleCatalog,
    open: bool,
}

impl Default for ArticleModal {
    fn default() -> Self {
        Self::new(ArticleCatalog::builtin())
    }
}

impl ArticleModal {
    /// Closed modal reading from `catalog`.
    pub fn new(catalog: &'static ArticleCatalog) -> Self {
        Self { catalog, open: false }
    }

    /// Open the modal for `key`.
    ///
    /// Returns the text to write into the content slot. `None` means the key
    /// is unknown and the slot keeps whatever it already shows. Opening an
    /// already open modal just swaps the text.
    pub fn open(&mut self, key: &str) -> Option<&'static str> {
        self.open = true;
        let body = self.catalog.preview(key);
        debug!(key, known = body.is_some(), "article modal opened");
        body
    }

    /// Close the modal. Returns `false` when it was already closed.
    pub fn close(&mut self) -> bool {
        let was_open = self.open;
        self.open = false;
        if was_open {
            debug!("article modal closed");
        }
        was_open
    }

    /// Whether the modal is showing.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Value for the modal's `aria-hidden` attribute.
    pub fn aria_hidden(&self) -> &'static str {
        if self.open {
            "false"
        } else {
            "true"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ArticleModal;

    #[test]
    fn known_key_yields_preview() {
        let mut modal = ArticleModal::default();
        let body = modal.open("nutrition-labels").expect("known key");
        assert!(body.starts_with("Learn how to quickly scan calories"));
        assert!(modal.is_open());
        assert_eq!(modal.aria_hidden(), "false");
    }

    #[test]
    fn unknown_key_still_opens_without_text() {
        let mut modal = ArticleModal::default();
        assert_eq!(modal.open("does-not-exist"), None);
        assert!(modal.is_open());
    }

    #[test]
    fn closing_twice_is_a_no_op() {
        let mut modal = ArticleModal::default();
        modal.open("healthy-snacking");
        assert!(modal.close());
        assert!(!modal.close());
        assert_eq!(modal.aria_hidden(), "true");
    }
}
