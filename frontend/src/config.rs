//! DOM hooks and state classes the page markup is expected to carry.

// Smooth scroll
pub const SMOOTH_SCROLL_SELECTOR: &str = "a[href^=\"#\"], .js-scroll-to-subscribe";
pub const SCROLL_TO_SUBSCRIBE_CLASS: &str = "js-scroll-to-subscribe";

// Navigation toggle
pub const NAV_TOGGLE_SELECTOR: &str = ".nav-toggle";
pub const NAV_LINKS_SELECTOR: &str = ".nav-links";
pub const NAV_OPEN_CLASS: &str = "nav-links--open";

// Back to top
pub const BACK_TO_TOP_SELECTOR: &str = ".back-to-top";
pub const BACK_TO_TOP_VISIBLE_CLASS: &str = "back-to-top--visible";
pub const SCROLL_THROTTLE_MS: f64 = nutri_page_shared::back_to_top::DEFAULT_THROTTLE_MS;

// Article modal
pub const MODAL_ID: &str = "article-modal";
pub const MODAL_TITLE_ID: &str = "article-modal-title";
pub const MODAL_CONTENT_ID: &str = "article-modal-content";
pub const MODAL_BACKDROP_SELECTOR: &str = ".modal-backdrop";
pub const MODAL_CLOSE_SELECTOR: &str = "[data-close-modal]";
pub const MODAL_OPEN_CLASS: &str = "modal--open";
pub const READ_MORE_SELECTOR: &str = ".js-read-more";
pub const ARTICLE_KEY_ATTR: &str = "data-article";

// Subscribe form
pub const SUBSCRIBE_FORM_ID: &str = "subscribe-form";
pub const SUBSCRIBE_MESSAGE_ID: &str = "subscribe-message";
pub const FORM_FIELD_SELECTOR: &str = ".form-field";
pub const FORM_FIELD_ERROR_CLASS: &str = "form-field--error";
pub const MESSAGE_SUCCESS_CLASS: &str = "form-message--success";
pub const MESSAGE_ERROR_CLASS: &str = "form-message--error";

// Footer
pub const YEAR_ID: &str = "year";

/// Selector of the error slot rendered next to `field_name`.
pub fn field_error_selector(field_name: &str) -> String {
    format!(".field-error[data-for=\"{}\"]", field_name)
}

/// Selector of the input named `field_name`.
pub fn field_input_selector(field_name: &str) -> String {
    format!("[name=\"{}\"]", field_name)
}
