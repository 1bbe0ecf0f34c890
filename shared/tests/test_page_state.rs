//! Menu, modal, back-to-top and scroll-target state through the public API.

#[cfg(test)]
mod tests {
    use nutri_page_shared::{
        back_to_top::is_visible_at, smooth_scroll::fragment_target, ArticleCatalog, ArticleModal,
        BackToTop, NavMenu,
    };

    #[test]
    fn back_to_top_follows_scroll_offsets() {
        let mut control = BackToTop::new();
        let mut shown = Vec::new();
        for offset in [0.0, 460.0, 440.0] {
            control.update(offset);
            shown.push(control.is_visible());
            assert_eq!(control.is_visible(), is_visible_at(offset));
        }
        assert_eq!(shown, vec![false, true, false]);
    }

    #[test]
    fn nav_menu_even_toggles_close_it() {
        let mut menu = NavMenu::new();
        for _ in 0..4 {
            menu.toggle();
        }
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        assert_eq!(menu.aria_expanded(), "true");
    }

    #[test]
    fn modal_shows_fixed_text_and_closes_from_any_state() {
        let mut modal = ArticleModal::default();
        let body = modal.open("protein-breakfast");
        assert_eq!(body, ArticleCatalog::builtin().preview("protein-breakfast"));
        assert!(body.is_some());

        assert_eq!(modal.open("no-such-article"), None);
        assert!(modal.is_open());

        assert!(modal.close());
        assert!(!modal.is_open());
        assert!(!modal.close());
        assert!(!modal.is_open());
    }

    #[test]
    fn only_resolvable_fragments_take_over_navigation() {
        assert_eq!(fragment_target(Some("#articles"), false), Some("articles"));
        assert_eq!(fragment_target(None, true), Some("subscribe"));
        assert_eq!(fragment_target(Some("#"), false), None);
    }
}
