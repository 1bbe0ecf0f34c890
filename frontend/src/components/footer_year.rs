use web_sys::Document;

use crate::{config, dom};

/// Write the current calendar year into the footer placeholder.
pub fn setup(document: &Document) {
    let Some(placeholder) = document.get_element_by_id(config::YEAR_ID) else {
        dom::skip("footer-year", config::YEAR_ID);
        return;
    };
    let year = js_sys::Date::new_0().get_full_year();
    placeholder.set_text_content(Some(&year.to_string()));
}
