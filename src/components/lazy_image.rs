use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use web_sys::{HtmlImageElement, IntersectionObserver, IntersectionObserverEntry};
use yew::prelude::*;

/// Defers image loading: every `img[data-src]` gets its real source assigned
/// the first time it approaches the viewport, then stops being observed.
#[function_component(LazyImageController)]
pub fn lazy_image_controller() -> Html {
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
    let images = document.query_selector_all("img[data-src]").ok()?;
    if images.length() == 0 {
        log::warn!("lazy loader: no deferred images on this page, skipping");
        return None;
    }

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Ok(img) = target.dyn_into::<HtmlImageElement>() {
                    // No-op for images whose deferred source is already gone.
                    if let Some(src) = img.get_attribute("data-src") {
                        img.set_src(&src);
                        let _ = img.remove_attribute("data-src");
                    }
                    observer.unobserve(&img);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref()).ok()?;
    for i in 0..images.length() {
        if let Some(node) = images.get(i) {
            if let Ok(el) = node.dyn_into::<web_sys::Element>() {
                observer.observe(&el);
            }
        }
    }
    Some((observer, callback))
}
