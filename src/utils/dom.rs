use wasm_bindgen::JsCast;
use web_sys::{window, ScrollBehavior, ScrollToOptions};

/// Locks or releases background scrolling while a dialog is open.
pub fn lock_body_scroll(locked: bool) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let overflow = if locked { "hidden" } else { "" };
        let _ = body.style().set_property("overflow", overflow);
    }
}

/// Current viewport width in CSS pixels.
pub fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Current viewport height in CSS pixels.
pub fn viewport_height() -> f64 {
    window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Current vertical scroll offset.
pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Smoothly scrolls the window to the given vertical offset.
pub fn smooth_scroll_to(top: f64) {
    if let Some(w) = window() {
        let opts = ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(ScrollBehavior::Smooth);
        w.scroll_to_with_scroll_to_options(&opts);
    }
}

/// Smoothly scrolls to the element with the given id, leaving `offset` pixels
/// of headroom (typically the rendered nav height).
pub fn smooth_scroll_to_id(id: &str, offset: f64) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(target) = document.get_element_by_id(id) {
        if let Ok(el) = target.dyn_into::<web_sys::HtmlElement>() {
            smooth_scroll_to(el.offset_top() as f64 - offset);
        }
    }
}
