// One binder per page feature. Each one looks up its own elements and stays
// inert when they are missing, without affecting the others.

pub mod article_modal;
pub mod back_to_top;
pub mod footer_year;
pub mod nav_toggle;
pub mod smooth_scroll;
pub mod subscribe_form;

use web_sys::Document;

pub fn setup_all(document: &Document) {
    smooth_scroll::setup(document);
    nav_toggle::setup(document);
    back_to_top::setup(document);
    article_modal::setup(document);
    subscribe_form::setup(document);
    footer_year::setup(document);
}
