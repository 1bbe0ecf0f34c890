use nutri_page_shared::{Field, FieldError, FormMessage, SubmitOutcome, SubscribeInput};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, FormData, HtmlFormElement};

use crate::{config, dom};

fn message_class(message: FormMessage) -> &'static str {
    match message {
        FormMessage::Success => config::MESSAGE_SUCCESS_CLASS,
        FormMessage::Error => config::MESSAGE_ERROR_CLASS,
    }
}

fn read_input(form: &HtmlFormElement) -> SubscribeInput {
    let Ok(data) = FormData::new_with_form(form) else {
        return SubscribeInput::default();
    };
    let value = |field: Field| data.get(field.name()).as_string().unwrap_or_default();

    SubscribeInput {
        name: value(Field::Name),
        email: value(Field::Email),
        interest: value(Field::Interest),
    }
}

fn render_field(form: &HtmlFormElement, field: Field, error: Option<FieldError>) {
    let input = form
        .query_selector(&config::field_input_selector(field.name()))
        .ok()
        .flatten();
    let Some(wrapper) = input.and_then(|el| el.closest(config::FORM_FIELD_SELECTOR).ok().flatten())
    else {
        return;
    };
    let Some(slot) = form
        .query_selector(&config::field_error_selector(field.name()))
        .ok()
        .flatten()
    else {
        return;
    };

    match error {
        Some(err) => {
            let _ = wrapper.class_list().add_1(config::FORM_FIELD_ERROR_CLASS);
            slot.set_text_content(Some(&err.to_string()));
        },
        None => {
            let _ = wrapper.class_list().remove_1(config::FORM_FIELD_ERROR_CLASS);
            slot.set_text_content(Some(""));
        },
    }
}

fn clear_message(slot: &Element) {
    slot.set_text_content(Some(""));
    let _ = slot
        .class_list()
        .remove_2(config::MESSAGE_SUCCESS_CLASS, config::MESSAGE_ERROR_CLASS);
}

fn show_message(slot: &Element, message: FormMessage) {
    slot.set_text_content(Some(message.text()));
    let _ = slot.class_list().add_1(message_class(message));
}

/// Validate on submit; submission is simulated and never leaves the page.
pub fn setup(document: &Document) {
    let Some(form) = document
        .get_element_by_id(config::SUBSCRIBE_FORM_ID)
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        dom::skip("subscribe-form", config::SUBSCRIBE_FORM_ID);
        return;
    };
    let message_slot = document.get_element_by_id(config::SUBSCRIBE_MESSAGE_ID);

    let form_el = form.clone();
    dom::listen(&form, "submit", move |event| {
        event.prevent_default();

        if let Some(slot) = &message_slot {
            clear_message(slot);
        }

        let outcome = read_input(&form_el).submit();
        for field in Field::ALL {
            render_field(&form_el, field, outcome.field_error(field));
        }

        if let SubmitOutcome::Accepted(submission) = &outcome {
            form_el.reset();
            if let Ok(payload) = serde_json::to_string(submission) {
                dom::debug(&format!("subscribe-form: simulated submission {payload}"));
            }
        }

        if let Some(slot) = &message_slot {
            show_message(slot, outcome.message());
        }
    });
}
