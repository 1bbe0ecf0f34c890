use std::{cell::RefCell, rc::Rc};

use gloo_timers::callback::Timeout;
use nutri_page_shared::{BackToTop, ScrollThrottle, ThrottleDecision};
use web_sys::{Document, Element, ScrollBehavior, ScrollToOptions, Window};

use crate::{config, dom};

struct ScrollState {
    control: BackToTop,
    throttle: ScrollThrottle,
    // 已触发的定时器在下一次调度时被替换释放
    trailing: Option<Timeout>,
}

fn now_ms(window: &Window) -> f64 {
    window
        .performance()
        .map(|perf| perf.now())
        .unwrap_or_else(js_sys::Date::now)
}

fn refresh(window: &Window, button: &Element, state: &RefCell<ScrollState>) {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    if let Some(visible) = state.borrow_mut().control.update(scroll_y) {
        let _ = button
            .class_list()
            .toggle_with_force(config::BACK_TO_TOP_VISIBLE_CLASS, visible);
    }
}

/// Show the control past the scroll threshold; clicking scrolls to the top.
pub fn setup(document: &Document) {
    let Some(button) = document.query_selector(config::BACK_TO_TOP_SELECTOR).ok().flatten() else {
        dom::skip("back-to-top", config::BACK_TO_TOP_SELECTOR);
        return;
    };
    let Some(window) = web_sys::window() else {
        return;
    };

    let state = Rc::new(RefCell::new(ScrollState {
        control: BackToTop::new(),
        throttle: ScrollThrottle::new(config::SCROLL_THROTTLE_MS),
        trailing: None,
    }));

    // 刷新后浏览器可能恢复滚动位置
    refresh(&window, &button, &state);

    {
        let window_el = window.clone();
        let button = button.clone();
        let state = state.clone();
        dom::listen(&window, "scroll", move |_| {
            let decision = state.borrow_mut().throttle.poll(now_ms(&window_el));
            match decision {
                ThrottleDecision::RunNow => refresh(&window_el, &button, &state),
                ThrottleDecision::ScheduleTrailing { delay_ms } => {
                    let timeout = {
                        let window_el = window_el.clone();
                        let button = button.clone();
                        let state = state.clone();
                        Timeout::new(delay_ms.ceil() as u32, move || {
                            let now = now_ms(&window_el);
                            state.borrow_mut().throttle.fire_trailing(now);
                            refresh(&window_el, &button, &state);
                        })
                    };
                    drop(state.borrow_mut().trailing.replace(timeout));
                },
                ThrottleDecision::Skip => {},
            }
        });
    }

    dom::listen(&button, "click", move |_| {
        let options = ScrollToOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_top(0.0);
        window.scroll_to_with_scroll_to_options(&options);
    });
}
