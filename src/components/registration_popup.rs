use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::config;
use crate::utils::dom;

/// One-time admissions popup: opens on its own shortly after the page load
/// event and can be dismissed by the close button, the backdrop or Escape.
#[function_component(RegistrationPopup)]
pub fn registration_popup() -> Html {
    let open = use_state(|| false);

    {
        let open = open.clone();
        use_effect_with_deps(
            move |_| {
                let schedule = move || {
                    let open = open.clone();
                    Timeout::new(config::POPUP_DELAY_MS, move || open.set(true)).forget();
                };
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();
                if document.ready_state() == "complete" {
                    schedule();
                } else {
                    let load_callback = wasm_bindgen::closure::Closure::once(schedule);
                    let _ = window.add_event_listener_with_callback(
                        "load",
                        load_callback.as_ref().unchecked_ref(),
                    );
                    load_callback.forget();
                }
                || ()
            },
            (),
        );
    }

    {
        let locked = *open;
        use_effect_with_deps(
            move |_| {
                dom::lock_body_scroll(locked);
                || ()
            },
            locked,
        );
    }

    {
        let open = open.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" && *open {
                open.set(false);
            }
        });
    }

    let close = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(false))
    };

    let go_to_admissions = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| {
            open.set(false);
            dom::smooth_scroll_to_id("admisiones", 70.0);
        })
    };

    if !*open {
        return html! {};
    }

    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-overlay popup-overlay" onclick={close.clone()}>
            <style>
                {r#"
                    .popup-overlay {
                        position: fixed;
                        inset: 0;
                        background: rgba(10, 20, 40, 0.7);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        z-index: 600;
                        padding: 24px;
                    }
                    .popup-content {
                        background: #fff;
                        border-radius: 12px;
                        max-width: 440px;
                        width: 100%;
                        padding: 36px 32px;
                        text-align: center;
                        position: relative;
                    }
                    .popup-content h3 { color: #0a2463; font-size: 1.5rem; margin-bottom: 12px; }
                    .popup-content p { color: #444; margin-bottom: 20px; line-height: 1.6; }
                    .popup-close {
                        position: absolute;
                        top: 10px;
                        right: 14px;
                        background: none;
                        border: none;
                        font-size: 1.6rem;
                        cursor: pointer;
                        color: #555;
                    }
                    .popup-cta {
                        background: #d62828;
                        color: #fff;
                        border: none;
                        border-radius: 6px;
                        padding: 12px 28px;
                        font-size: 1rem;
                        cursor: pointer;
                    }
                "#}
            </style>
            <div class="popup-content" onclick={stop}>
                <button class="popup-close" onclick={close}>{"×"}</button>
                <h3>{"¡Admisión 2027 abierta!"}</h3>
                <p>
                    {"Quedan pocas vacantes en Inicial y Primaria. Agenda una visita \
                      guiada y conoce nuestro campus."}
                </p>
                <button class="popup-cta" onclick={go_to_admissions}>
                    {"Quiero informes"}
                </button>
            </div>
        </div>
    }
}
