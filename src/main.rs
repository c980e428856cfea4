use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::ErrorEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod utils {
    pub mod dom;
}
mod data {
    pub mod anthem;
    pub mod content;
    pub mod faq;
}
mod components {
    pub mod anthem_modal;
    pub mod chat_widget;
    pub mod contact_form;
    pub mod lazy_image;
    pub mod lightbox;
    pub mod navbar;
    pub mod parallax;
    pub mod registration_popup;
    pub mod reveal;
    pub mod slider;
    pub mod stats;
    pub mod testimonials;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

/// Marks the document loaded (dropping the loading overlay), logs how long
/// the page took, and prints the welcome banner.
fn on_page_loaded() {
    let Some(window) = web_sys::window() else { return };
    let Some(document) = window.document() else { return };

    if let Some(body) = document.body() {
        let _ = body.class_list().add_1("loaded");
    }
    if let Some(performance) = window.performance() {
        info!("⚡ Página cargada en {:.0}ms", performance.now());
    }

    web_sys::console::log_2(
        &"%c¡Bienvenido al Colegio Nueva Aurora! 🎓".into(),
        &"color: #0A2463; font-size: 20px; font-weight: bold; padding: 10px;".into(),
    );
    web_sys::console::log_2(
        &"%cAdmisión 2027: revisa la sección Admisiones".into(),
        &"color: #D62828; font-size: 12px;".into(),
    );
}

#[function_component]
fn App() -> Html {
    // Page-level wiring: load handling and the uncaught-error report. Every
    // interactive controller lives in its own component and guards its own
    // initialization, so none of them can block the rest.
    use_effect_with_deps(
        move |_| {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            if document.ready_state() == "complete" {
                on_page_loaded();
            } else {
                let load_callback = Closure::once(on_page_loaded);
                let _ = window.add_event_listener_with_callback(
                    "load",
                    load_callback.as_ref().unchecked_ref(),
                );
                load_callback.forget();
            }

            let error_callback = Closure::wrap(Box::new(move |e: ErrorEvent| {
                gloo_console::error!("Error detectado:", e.message());
            }) as Box<dyn FnMut(ErrorEvent)>);
            let _ = window.add_event_listener_with_callback(
                "error",
                error_callback.as_ref().unchecked_ref(),
            );
            error_callback.forget();

            || ()
        },
        (),
    );

    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
