use gloo_timers::callback::Timeout;
use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::config;
use crate::data::faq;

#[derive(Clone, PartialEq)]
struct ChatMessage {
    text: String,
    is_user: bool,
}

/// Scripted FAQ assistant: fixed question buttons, canned answers after a
/// short "typing" pause. History is kept for the life of the page.
#[function_component(ChatWidget)]
pub fn chat_widget() -> Html {
    let open = use_state(|| false);
    let has_unread = use_state(|| true);
    let is_typing = use_state(|| false);
    let messages = use_state(|| {
        vec![ChatMessage {
            text: "¡Hola! Soy el asistente del colegio. ¿En qué te puedo ayudar?".to_string(),
            is_user: false,
        }]
    });
    let log_ref = use_node_ref();

    // Keep the newest message in view; the option list renders below it.
    {
        let log_ref = log_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(log) = log_ref.cast::<HtmlElement>() {
                    log.set_scroll_top(log.scroll_height());
                }
                || ()
            },
            (messages.len(), *is_typing),
        );
    }

    let toggle_open = {
        let open = open.clone();
        let has_unread = has_unread.clone();
        Callback::from(move |_: MouseEvent| {
            if !*open {
                has_unread.set(false);
            }
            open.set(!*open);
        })
    };

    let ask = {
        let messages = messages.clone();
        let is_typing = is_typing.clone();
        move |key: String, question: String| {
            let messages = messages.clone();
            let is_typing = is_typing.clone();
            Callback::from(move |_: MouseEvent| {
                let mut log = (*messages).clone();
                log.push(ChatMessage { text: question.clone(), is_user: true });
                messages.set(log.clone());
                is_typing.set(true);

                let messages = messages.clone();
                let is_typing = is_typing.clone();
                let key = key.clone();
                Timeout::new(config::CHAT_TYPING_DELAY_MS, move || {
                    let mut log = log;
                    log.push(ChatMessage {
                        text: faq::answer_for(&key).to_string(),
                        is_user: false,
                    });
                    messages.set(log);
                    is_typing.set(false);
                })
                .forget();
            })
        }
    };

    html! {
        <div class="chat-widget">
            <style>
                {r#"
                    .chat-launcher {
                        position: fixed;
                        bottom: 24px;
                        right: 24px;
                        z-index: 400;
                        width: 58px;
                        height: 58px;
                        border-radius: 50%;
                        border: none;
                        background: #0a2463;
                        color: #fff;
                        font-size: 1.5rem;
                        cursor: pointer;
                        box-shadow: 0 6px 18px rgba(0,0,0,0.25);
                    }
                    .chat-badge {
                        position: absolute;
                        top: 2px;
                        right: 2px;
                        width: 14px;
                        height: 14px;
                        border-radius: 50%;
                        background: #d62828;
                        border: 2px solid #fff;
                    }
                    .chat-panel {
                        position: fixed;
                        bottom: 96px;
                        right: 24px;
                        z-index: 400;
                        width: 340px;
                        max-width: calc(100vw - 48px);
                        height: 440px;
                        background: #fff;
                        border-radius: 12px;
                        box-shadow: 0 12px 32px rgba(0,0,0,0.3);
                        display: flex;
                        flex-direction: column;
                        overflow: hidden;
                    }
                    .chat-header {
                        background: #0a2463;
                        color: #fff;
                        padding: 14px 16px;
                        font-weight: 600;
                    }
                    .chat-log { flex: 1; overflow-y: auto; padding: 14px; }
                    .chat-message {
                        max-width: 85%;
                        margin-bottom: 10px;
                        padding: 10px 12px;
                        border-radius: 10px;
                        font-size: 0.9rem;
                        line-height: 1.5;
                        white-space: pre-line;
                    }
                    .chat-message.user {
                        margin-left: auto;
                        background: #0a2463;
                        color: #fff;
                        border-bottom-right-radius: 2px;
                    }
                    .chat-message.bot {
                        background: #eef1f6;
                        color: #1a1a2e;
                        border-bottom-left-radius: 2px;
                    }
                    .chat-typing { color: #888; font-size: 0.85rem; margin-bottom: 10px; }
                    .chat-options { display: flex; flex-direction: column; gap: 6px; }
                    .chat-option {
                        text-align: left;
                        background: none;
                        border: 1px solid #0a2463;
                        color: #0a2463;
                        border-radius: 8px;
                        padding: 8px 10px;
                        font-size: 0.85rem;
                        cursor: pointer;
                    }
                    .chat-option:hover { background: #0a2463; color: #fff; }
                "#}
            </style>
            {
                if *open {
                    html! {
                        <div class="chat-panel">
                            <div class="chat-header">{"Asistente Nueva Aurora"}</div>
                            <div class="chat-log" ref={log_ref}>
                                {
                                    messages.iter().map(|msg| html! {
                                        <div class={classes!(
                                            "chat-message",
                                            if msg.is_user { "user" } else { "bot" },
                                        )}>
                                            {&msg.text}
                                        </div>
                                    }).collect::<Html>()
                                }
                                {
                                    if *is_typing {
                                        html! { <div class="chat-typing">{"Escribiendo…"}</div> }
                                    } else {
                                        html! {}
                                    }
                                }
                                <div class="chat-options">
                                    {
                                        faq::entries().iter().map(|entry| html! {
                                            <button
                                                class="chat-option"
                                                onclick={ask(entry.key.clone(), entry.question.clone())}
                                            >
                                                {&entry.question}
                                            </button>
                                        }).collect::<Html>()
                                    }
                                </div>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <button class="chat-launcher" onclick={toggle_open} aria-label="Chat de preguntas frecuentes">
                {"💬"}
                { if *has_unread { html! { <span class="chat-badge"></span> } } else { html! {} } }
            </button>
        </div>
    }
}
