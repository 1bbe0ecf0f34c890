use nutri_page_shared::smooth_scroll::fragment_target;
use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::{config, dom};

/// Take over clicks on in-page anchors whose fragment exists in the document.
pub fn setup(document: &Document) {
    let links = dom::elements(document.query_selector_all(config::SMOOTH_SCROLL_SELECTOR));
    if links.is_empty() {
        dom::skip("smooth-scroll", config::SMOOTH_SCROLL_SELECTOR);
        return;
    }

    for link in links {
        let document = document.clone();
        let control = link.clone();
        dom::listen(&link, "click", move |event| {
            let href = control.get_attribute("href");
            let is_subscribe = control
                .class_list()
                .contains(config::SCROLL_TO_SUBSCRIBE_CLASS);
            let Some(target_id) = fragment_target(href.as_deref(), is_subscribe) else {
                return;
            };
            // 目标不存在时保留浏览器默认行为
            let Some(target) = document.get_element_by_id(target_id) else {
                return;
            };

            event.prevent_default();
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        });
    }
}
