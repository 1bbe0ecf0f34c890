use std::{cell::RefCell, rc::Rc};

use nutri_page_shared::ArticleModal;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent};

use crate::{config, dom};

struct ModalView {
    root: Element,
    title: Option<HtmlElement>,
    content: Option<Element>,
}

impl ModalView {
    fn show(&self, state: &ArticleModal, body: Option<&str>) {
        let _ = self.root.class_list().add_1(config::MODAL_OPEN_CLASS);
        let _ = self.root.set_attribute("aria-hidden", state.aria_hidden());

        if let (Some(content), Some(body)) = (&self.content, body) {
            content.set_text_content(Some(body));
        }
        if let Some(title) = &self.title {
            let _ = title.focus();
        }
    }

    fn hide(&self, state: &ArticleModal) {
        let _ = self.root.class_list().remove_1(config::MODAL_OPEN_CLASS);
        let _ = self.root.set_attribute("aria-hidden", state.aria_hidden());
    }
}

fn close(modal: &RefCell<ArticleModal>, view: &ModalView) {
    let mut modal = modal.borrow_mut();
    if modal.close() {
        view.hide(&modal);
    }
}

/// Article preview overlay opened by the read-more controls.
pub fn setup(document: &Document) {
    let Some(root) = document.get_element_by_id(config::MODAL_ID) else {
        dom::skip("article-modal", config::MODAL_ID);
        return;
    };

    let view = Rc::new(ModalView {
        title: document
            .get_element_by_id(config::MODAL_TITLE_ID)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok()),
        content: document.get_element_by_id(config::MODAL_CONTENT_ID),
        root,
    });
    let modal = Rc::new(RefCell::new(ArticleModal::default()));

    for trigger in dom::elements(document.query_selector_all(config::READ_MORE_SELECTOR)) {
        let modal = modal.clone();
        let view = view.clone();
        let control = trigger.clone();
        dom::listen(&trigger, "click", move |_| {
            let key = control.get_attribute(config::ARTICLE_KEY_ATTR).unwrap_or_default();
            let mut modal = modal.borrow_mut();
            let body = modal.open(&key);
            view.show(&modal, body);
        });
    }

    for button in dom::elements(view.root.query_selector_all(config::MODAL_CLOSE_SELECTOR)) {
        let modal = modal.clone();
        let view = view.clone();
        dom::listen(&button, "click", move |_| close(&modal, &view));
    }

    if let Some(backdrop) = view.root.query_selector(config::MODAL_BACKDROP_SELECTOR).ok().flatten() {
        let modal = modal.clone();
        let view = view.clone();
        dom::listen(&backdrop, "click", move |_| close(&modal, &view));
    }

    dom::listen(document, "keydown", move |event| {
        let is_escape = event
            .dyn_ref::<KeyboardEvent>()
            .is_some_and(|key_event| key_event.key() == "Escape");
        if is_escape {
            close(&modal, &view);
        }
    });
}
