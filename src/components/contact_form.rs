use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, InputEvent, SubmitEvent};
use yew::prelude::*;

use crate::config;

/// The admission inquiry as read from the form fields.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Inquiry {
    pub nombre: String,
    pub telefono: String,
    pub alumno: String,
    pub nivel: String,
    pub mensaje: String,
}

/// Builds the pre-filled WhatsApp text. The free-text line is omitted when
/// the field was left blank.
fn build_whatsapp_message(inquiry: &Inquiry) -> String {
    let mut message = format!(
        "¡Hola! Quiero información sobre el proceso de admisión.\n\
         *Nombre:* {}\n\
         *Teléfono:* {}\n\
         *Alumno:* {}\n\
         *Nivel:* {}",
        inquiry.nombre, inquiry.telefono, inquiry.alumno, inquiry.nivel
    );
    let mensaje = inquiry.mensaje.trim();
    if !mensaje.is_empty() {
        message.push_str("\n*Mensaje:* ");
        message.push_str(mensaje);
    }
    message
}

fn build_whatsapp_url(number: &str, message: &str) -> String {
    format!("https://wa.me/{}?text={}", number, urlencoding::encode(message))
}

#[derive(Clone, Copy, PartialEq)]
enum SubmitState {
    Idle,
    Sending,
    Sent,
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let nombre = use_state(String::new);
    let telefono = use_state(String::new);
    let alumno = use_state(String::new);
    let nivel = use_state(|| "Inicial".to_string());
    let mensaje = use_state(String::new);
    let submit_state = use_state(|| SubmitState::Idle);

    let on_nombre = {
        let nombre = nombre.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            nombre.set(input.value());
        })
    };
    let on_telefono = {
        let telefono = telefono.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            telefono.set(input.value());
        })
    };
    let on_alumno = {
        let alumno = alumno.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            alumno.set(input.value());
        })
    };
    let on_nivel = {
        let nivel = nivel.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            nivel.set(select.value());
        })
    };
    let on_mensaje = {
        let mensaje = mensaje.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            mensaje.set(area.value());
        })
    };

    let onsubmit = {
        let nombre = nombre.clone();
        let telefono = telefono.clone();
        let alumno = alumno.clone();
        let nivel = nivel.clone();
        let mensaje = mensaje.clone();
        let submit_state = submit_state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submit_state != SubmitState::Idle {
                return;
            }
            let inquiry = Inquiry {
                nombre: (*nombre).clone(),
                telefono: (*telefono).clone(),
                alumno: (*alumno).clone(),
                nivel: (*nivel).clone(),
                mensaje: (*mensaje).clone(),
            };
            let url = build_whatsapp_url(
                config::whatsapp_number(),
                &build_whatsapp_message(&inquiry),
            );
            submit_state.set(SubmitState::Sending);

            let nombre = nombre.clone();
            let telefono = telefono.clone();
            let alumno = alumno.clone();
            let nivel = nivel.clone();
            let mensaje = mensaje.clone();
            let submit_state = submit_state.clone();
            spawn_local(async move {
                TimeoutFuture::new(config::FORM_OPEN_DELAY_MS).await;
                if let Some(window) = web_sys::window() {
                    // Fire and forget: a blocked popup is not detected.
                    let _ = window.open_with_url_and_target(&url, "_blank");
                }
                nombre.set(String::new());
                telefono.set(String::new());
                alumno.set(String::new());
                nivel.set("Inicial".to_string());
                mensaje.set(String::new());
                submit_state.set(SubmitState::Sent);
                TimeoutFuture::new(config::FORM_FEEDBACK_MS).await;
                submit_state.set(SubmitState::Idle);
            });
        })
    };

    let button_label = match *submit_state {
        SubmitState::Idle => "Enviar solicitud",
        SubmitState::Sending => "Enviando...",
        SubmitState::Sent => "✓ Enviado",
    };

    html! {
        <form class="contact-form" {onsubmit}>
            <style>
                {r#"
                    .contact-form {
                        max-width: 560px;
                        margin: 0 auto;
                        display: flex;
                        flex-direction: column;
                        gap: 16px;
                    }
                    .contact-form input,
                    .contact-form select,
                    .contact-form textarea {
                        padding: 12px 14px;
                        border: 1px solid #c9ced6;
                        border-radius: 6px;
                        font-size: 1rem;
                        font-family: inherit;
                    }
                    .contact-form textarea { min-height: 100px; resize: vertical; }
                    .form-submit {
                        background: linear-gradient(135deg, #d62828 0%, #a61e1e 100%);
                        color: #fff;
                        border: none;
                        border-radius: 6px;
                        padding: 14px;
                        font-size: 1.05rem;
                        cursor: pointer;
                        transition: background 0.3s ease;
                    }
                    .form-submit:disabled { opacity: 0.85; cursor: default; }
                    .form-submit.sent {
                        background: linear-gradient(135deg, #10b981 0%, #059669 100%);
                    }
                "#}
            </style>
            <input
                type="text"
                name="nombre"
                placeholder="Nombre del padre o apoderado"
                required={true}
                value={(*nombre).clone()}
                oninput={on_nombre}
            />
            <input
                type="tel"
                name="telefono"
                placeholder="Teléfono de contacto"
                required={true}
                value={(*telefono).clone()}
                oninput={on_telefono}
            />
            <input
                type="text"
                name="alumno"
                placeholder="Nombre del alumno"
                required={true}
                value={(*alumno).clone()}
                oninput={on_alumno}
            />
            <select name="nivel" onchange={on_nivel}>
                <option value="Inicial" selected={*nivel == "Inicial"}>{"Inicial"}</option>
                <option value="Primaria" selected={*nivel == "Primaria"}>{"Primaria"}</option>
                <option value="Secundaria" selected={*nivel == "Secundaria"}>{"Secundaria"}</option>
            </select>
            <textarea
                name="mensaje"
                placeholder="Mensaje adicional (opcional)"
                value={(*mensaje).clone()}
                oninput={on_mensaje}
            />
            <button
                type="submit"
                class={classes!(
                    "form-submit",
                    (*submit_state == SubmitState::Sent).then_some("sent"),
                )}
                disabled={*submit_state != SubmitState::Idle}
            >
                {button_label}
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inquiry() -> Inquiry {
        Inquiry {
            nombre: "Ana".into(),
            telefono: "999".into(),
            alumno: "Luis".into(),
            nivel: "Primaria".into(),
            mensaje: String::new(),
        }
    }

    #[test]
    fn message_carries_every_labeled_field() {
        let message = build_whatsapp_message(&inquiry());
        assert!(message.contains("*Nombre:* Ana"));
        assert!(message.contains("*Teléfono:* 999"));
        assert!(message.contains("*Alumno:* Luis"));
        assert!(message.contains("*Nivel:* Primaria"));
    }

    #[test]
    fn blank_message_line_is_omitted() {
        let message = build_whatsapp_message(&inquiry());
        assert!(!message.contains("*Mensaje:*"));

        let with_note = Inquiry { mensaje: "  ".into(), ..inquiry() };
        assert!(!build_whatsapp_message(&with_note).contains("*Mensaje:*"));

        let with_note = Inquiry { mensaje: "Visita el sábado".into(), ..inquiry() };
        assert!(build_whatsapp_message(&with_note).contains("*Mensaje:* Visita el sábado"));
    }

    #[test]
    fn url_targets_the_configured_number_and_is_encoded() {
        let url = build_whatsapp_url("51987654321", &build_whatsapp_message(&inquiry()));
        assert!(url.starts_with("https://wa.me/51987654321?text="));
        let (_, query) = url.split_once("?text=").unwrap();
        assert!(!query.contains(' '));
        assert!(!query.contains('\n'));
        assert!(query.contains("Ana"));
    }
}
