use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Document, Element, Event, EventTarget, NodeList};

pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Collect the element nodes of a `querySelectorAll` result.
pub fn elements(nodes: Result<NodeList, JsValue>) -> Vec<Element> {
    let Ok(nodes) = nodes else {
        return Vec::new();
    };

    let mut found = Vec::with_capacity(nodes.length() as usize);
    let mut index = 0;
    while index < nodes.length() {
        if let Some(element) = nodes.item(index).and_then(|node| node.dyn_into::<Element>().ok()) {
            found.push(element);
        }
        index += 1;
    }
    found
}

/// Register `handler` for `event` on `target` for the rest of the page's life.
pub fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .is_ok()
    {
        // 页面生命周期内常驻，不需要移除
        closure.forget();
    }
}

pub fn debug(message: &str) {
    web_sys::console::debug_1(&message.into());
}

/// A component found nothing to bind to and stays inert.
pub fn skip(component: &str, missing: &str) {
    debug(&format!("{component}: `{missing}` not found, skipped"));
}
