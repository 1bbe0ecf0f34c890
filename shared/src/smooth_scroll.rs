//! Resolve which element an in-page navigation control scrolls to.

/// Element id the "scroll to subscribe" controls fall back to.
pub const SUBSCRIBE_TARGET_ID: &str = "subscribe";

/// Element id a control should scroll to, before checking the document.
///
/// `href` is the raw attribute value, untrimmed. A subscribe control without
/// an `href` (or with an empty one) targets [`SUBSCRIBE_TARGET_ID`]. Anything
/// else needs a `#fragment`; a bare `#`, a blank or a non-fragment link
/// resolves to nothing, which leaves the browser's default navigation alone.
pub fn fragment_target(href: Option<&str>, is_subscribe_control: bool) -> Option<&str> {
    let href = href.filter(|href| !href.is_empty());
    match href {
        None if is_subscribe_control => Some(SUBSCRIBE_TARGET_ID),
        None => None,
        Some(href) => href.strip_prefix('#').filter(|id| !id.is_empty()),
    }
}
