use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::utils::dom;

const PARALLAX_SPEED: f64 = 0.5;
const PARALLAX_DAMPING: f64 = 0.1;

/// Vertically offsets decorative `.parallax-img` images in proportion to the
/// scroll position. Images outside the viewport keep their last transform.
#[function_component(ParallaxController)]
pub fn parallax_controller() -> Html {
    use_effect_with_deps(
        move |_| {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            let mut images: Vec<HtmlElement> = Vec::new();
            if let Ok(list) = document.query_selector_all(".parallax-img") {
                for i in 0..list.length() {
                    if let Some(node) = list.get(i) {
                        if let Ok(el) = node.dyn_into::<HtmlElement>() {
                            images.push(el);
                        }
                    }
                }
            }
            if images.is_empty() {
                log::warn!("parallax: no .parallax-img elements on this page, skipping");
                return Box::new(|| {}) as Box<dyn FnOnce()>;
            }

            let on_scroll = move || {
                let viewport_height = dom::viewport_height();
                let rate = dom::scroll_y() * PARALLAX_SPEED * PARALLAX_DAMPING;
                for image in &images {
                    let rect = image.get_bounding_client_rect();
                    if rect.top() < viewport_height && rect.bottom() > 0.0 {
                        let _ = image
                            .style()
                            .set_property("transform", &format!("translateY({rate}px)"));
                    }
                }
            };

            let scroll_callback = Closure::wrap(Box::new(on_scroll) as Box<dyn FnMut()>);
            window
                .add_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                )
                .unwrap();

            Box::new(move || {
                window
                    .remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();
            }) as Box<dyn FnOnce()>
        },
        (),
    );

    html! {}
}
