use std::{cell::RefCell, rc::Rc};

use nutri_page_shared::NavMenu;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::{config, dom};

fn render(menu: &NavMenu, toggle: &Element, links: &Element) {
    let _ = links
        .class_list()
        .toggle_with_force(config::NAV_OPEN_CLASS, menu.is_open());
    let _ = toggle.set_attribute("aria-expanded", menu.aria_expanded());
}

/// Mobile menu: the toggle flips it, picking a link inside closes it.
pub fn setup(document: &Document) {
    let Some(toggle) = document.query_selector(config::NAV_TOGGLE_SELECTOR).ok().flatten() else {
        dom::skip("nav-toggle", config::NAV_TOGGLE_SELECTOR);
        return;
    };
    let Some(links) = document.query_selector(config::NAV_LINKS_SELECTOR).ok().flatten() else {
        dom::skip("nav-toggle", config::NAV_LINKS_SELECTOR);
        return;
    };

    let menu = Rc::new(RefCell::new(NavMenu::new()));

    {
        let menu = menu.clone();
        let toggle_el = toggle.clone();
        let links = links.clone();
        dom::listen(&toggle, "click", move |_| {
            let mut menu = menu.borrow_mut();
            menu.toggle();
            render(&menu, &toggle_el, &links);
        });
    }

    let links_el = links.clone();
    dom::listen(&links, "click", move |event| {
        let clicked_link = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .is_some_and(|el| el.tag_name().eq_ignore_ascii_case("a"));
        if !clicked_link {
            return;
        }
        let mut menu = menu.borrow_mut();
        menu.select_link();
        render(&menu, &toggle, &links_el);
    });
}
