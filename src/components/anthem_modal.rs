use web_sys::MouseEvent;
use yew::prelude::*;

use crate::data::anthem::{self, SectionKind};
use crate::utils::dom;

/// The anthem buttons plus the dialog they open. Lyrics come from the static
/// anthem mapping; asking for an unknown id does nothing.
#[function_component(AnthemModal)]
pub fn anthem_modal() -> Html {
    let open_id = use_state(|| None::<String>);

    {
        let locked = open_id.is_some();
        use_effect_with_deps(
            move |_| {
                dom::lock_body_scroll(locked);
                || ()
            },
            locked,
        );
    }

    let open = {
        let open_id = open_id.clone();
        move |id: &'static str| {
            let open_id = open_id.clone();
            Callback::from(move |_: MouseEvent| {
                if anthem::by_id(id).is_some() {
                    open_id.set(Some(id.to_string()));
                }
            })
        }
    };

    let close = {
        let open_id = open_id.clone();
        Callback::from(move |_: MouseEvent| open_id.set(None))
    };

    let anthem = open_id.as_deref().and_then(anthem::by_id);

    html! {
        <div class="anthem-block">
            <style>
                {r#"
                    .anthem-buttons { display: flex; gap: 12px; flex-wrap: wrap; margin-top: 16px; }
                    .anthem-button {
                        background: none;
                        border: 2px solid #0a2463;
                        color: #0a2463;
                        border-radius: 6px;
                        padding: 10px 18px;
                        cursor: pointer;
                        font-size: 0.95rem;
                    }
                    .anthem-button:hover { background: #0a2463; color: #fff; }
                    .modal-overlay {
                        position: fixed;
                        inset: 0;
                        background: rgba(10, 20, 40, 0.7);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        z-index: 500;
                        padding: 24px;
                    }
                    .modal-content {
                        background: #fff;
                        border-radius: 10px;
                        max-width: 540px;
                        width: 100%;
                        max-height: 80vh;
                        overflow-y: auto;
                        padding: 32px;
                        position: relative;
                    }
                    .modal-close {
                        position: absolute;
                        top: 12px;
                        right: 16px;
                        background: none;
                        border: none;
                        font-size: 1.6rem;
                        cursor: pointer;
                        color: #555;
                    }
                    .anthem-section { margin: 18px 0; }
                    .anthem-section.chorus { font-style: italic; padding-left: 18px; }
                    .anthem-section-label { font-weight: 600; color: #d62828; margin-bottom: 6px; }
                    .anthem-line { line-height: 1.7; }
                    .anthem-author { margin-top: 24px; font-size: 0.9rem; color: #666; }
                "#}
            </style>
            <div class="anthem-buttons">
                <button class="anthem-button" onclick={open("colegio")}>
                    {"♪ Himno del colegio"}
                </button>
                <button class="anthem-button" onclick={open("promocion")}>
                    {"♪ Himno a la promoción"}
                </button>
            </div>
            {
                if let Some(anthem) = anthem {
                    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());
                    html! {
                        <div class="modal-overlay" onclick={close.clone()}>
                            <div class="modal-content" onclick={stop}>
                                <button class="modal-close" onclick={close.clone()}>{"×"}</button>
                                <h2>{&anthem.title}</h2>
                                {
                                    anthem.sections.iter().map(|section| {
                                        let chorus = section.kind == SectionKind::Chorus;
                                        html! {
                                            <div class={classes!(
                                                "anthem-section",
                                                chorus.then_some("chorus"),
                                            )}>
                                                {
                                                    if let Some(label) = &section.label {
                                                        html! { <div class="anthem-section-label">{label}</div> }
                                                    } else {
                                                        html! {}
                                                    }
                                                }
                                                {
                                                    section.lines.iter().map(|line| html! {
                                                        <div class="anthem-line">{line}</div>
                                                    }).collect::<Html>()
                                                }
                                            </div>
                                        }
                                    }).collect::<Html>()
                                }
                                <div class="anthem-author">{&anthem.author}</div>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
