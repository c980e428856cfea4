use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Adds the `revealed` class to every `.reveal` element as it enters the
/// viewport. Elements stay observed; re-entry re-adds the class, which is
/// idempotent since the class is never removed.
#[function_component(ScrollRevealController)]
pub fn scroll_reveal_controller() -> Html {
    use_effect_with_deps(
        move |_| {
            let observer = install_observer();
            move || {
                if let Some((observer, _callback)) = observer {
                    observer.disconnect();
                }
            }
        },
        (),
    );

    html! {}
}

fn install_observer() -> Option<(IntersectionObserver, Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>)> {
    let document = web_sys::window()?.document()?;
    let targets = document.query_selector_all(".reveal").ok()?;
    if targets.length() == 0 {
        log::warn!("scroll reveal: no .reveal elements on this page, skipping");
        return None;
    }

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let _ = entry.target().class_list().add_1("revealed");
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.1));
    // Fire slightly before the element fully enters the viewport.
    options.set_root_margin("0px 0px -50px 0px");

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .ok()?;
    for i in 0..targets.length() {
        if let Some(node) = targets.get(i) {
            if let Ok(el) = node.dyn_into::<Element>() {
                observer.observe(&el);
            }
        }
    }
    Some((observer, callback))
}
