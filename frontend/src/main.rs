//! Browser bindings for the nutrition tips landing page.
//!
//! Compiled to wasm and loaded by `index.html`; every component binds to
//! markup that is already on the page.

mod components;
mod config;
mod dom;

fn main() {
    let Some(document) = dom::document() else {
        return;
    };

    // wasm 可能在 DOMContentLoaded 之后才加载完成
    if document.ready_state() == "loading" {
        let ready_document = document.clone();
        dom::listen(&document, "DOMContentLoaded", move |_| {
            components::setup_all(&ready_document);
        });
    } else {
        components::setup_all(&document);
    }
}
