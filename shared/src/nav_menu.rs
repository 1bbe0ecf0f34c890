//! Open/closed state of the mobile navigation menu.

use tracing::debug;

/// Mobile menu state. Starts closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    /// A closed menu.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip between open and closed; returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        debug!(open = self.open, "nav menu toggled");
        self.open
    }

    /// A link inside the menu was chosen: close regardless of state.
    pub fn select_link(&mut self) {
        if self.open {
            debug!("nav menu closed by link selection");
        }
        self.open = false;
    }

    /// Whether the menu is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Value for the toggle's `aria-expanded` attribute.
    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::NavMenu;

    #[test]
    fn starts_closed() {
        let menu = NavMenu::new();
        assert!(!menu.is_open());
        assert_eq!(menu.aria_expanded(), "false");
    }

    #[test]
    fn toggle_parity_decides_state() {
        let mut menu = NavMenu::new();
        for count in 1..=6 {
            let open = menu.toggle();
            assert_eq!(open, count % 2 == 1);
            assert_eq!(menu.aria_expanded(), open.to_string());
        }
        assert!(!menu.is_open());
    }

    #[test]
    fn link_selection_always_closes() {
        let mut menu = NavMenu::new();
        menu.select_link();
        assert!(!menu.is_open());

        menu.toggle();
        menu.select_link();
        assert!(!menu.is_open());
        assert_eq!(menu.aria_expanded(), "false");
    }
}
