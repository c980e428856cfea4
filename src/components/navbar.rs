use std::collections::HashSet;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::config;
use crate::data::content::{NavEntry, NAV};
use crate::utils::dom;

/// A section's vertical extent in document coordinates.
struct SectionBounds {
    id: String,
    top: f64,
    height: f64,
}

/// Resolves the section containing `probe` (scroll position plus lookahead).
/// Returns `None` when the probe falls between sections.
fn active_section(sections: &[SectionBounds], probe: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| probe >= s.top && probe < s.top + s.height)
        .map(|s| s.id.as_str())
}

fn section_bounds(document: &web_sys::Document) -> Vec<SectionBounds> {
    let mut bounds = Vec::new();
    if let Ok(list) = document.query_selector_all("section[id]") {
        for i in 0..list.length() {
            let Some(node) = list.get(i) else { continue };
            let Ok(el) = node.dyn_into::<HtmlElement>() else { continue };
            bounds.push(SectionBounds {
                id: el.id(),
                top: el.offset_top() as f64,
                height: el.offset_height() as f64,
            });
        }
    }
    bounds
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);
    let open_dropdowns = use_state(HashSet::<&'static str>::new);
    let scrolled = use_state(|| false);
    let active = use_state(|| Some("inicio".to_string()));
    let nav_ref = use_node_ref();

    {
        let scrolled = scrolled.clone();
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let on_scroll = move || {
                    let y = dom::scroll_y();
                    scrolled.set(y > config::NAV_SCROLLED_OFFSET);
                    let found = active_section(
                        &section_bounds(&document),
                        y + config::NAV_LOOKAHEAD_PX,
                    )
                    .map(str::to_owned);
                    active.set(found);
                };
                on_scroll();

                let scroll_callback =
                    Closure::wrap(Box::new(on_scroll) as Box<dyn FnMut()>);
                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Shared by every non-dropdown link: on narrow viewports also collapse
    // the menu and any open dropdown, then glide to the section.
    let follow_link = {
        let menu_open = menu_open.clone();
        let open_dropdowns = open_dropdowns.clone();
        let active = active.clone();
        let nav_ref = nav_ref.clone();
        move |target: &'static str| {
            let menu_open = menu_open.clone();
            let open_dropdowns = open_dropdowns.clone();
            let active = active.clone();
            let nav_ref = nav_ref.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                if dom::viewport_width() <= config::MOBILE_BREAKPOINT_PX {
                    menu_open.set(false);
                    open_dropdowns.set(HashSet::new());
                }
                active.set(Some(target.to_string()));
                let nav_height = nav_ref
                    .cast::<HtmlElement>()
                    .map(|el| el.offset_height() as f64)
                    .unwrap_or(70.0);
                dom::smooth_scroll_to_id(target, nav_height);
            })
        }
    };

    let toggle_dropdown = {
        let open_dropdowns = open_dropdowns.clone();
        move |label: &'static str, fallback: Callback<MouseEvent>| {
            let open_dropdowns = open_dropdowns.clone();
            Callback::from(move |e: MouseEvent| {
                if dom::viewport_width() <= config::MOBILE_BREAKPOINT_PX {
                    e.prevent_default();
                    let mut open = (*open_dropdowns).clone();
                    if !open.remove(label) {
                        open.insert(label);
                    }
                    open_dropdowns.set(open);
                } else {
                    fallback.emit(e);
                }
            })
        }
    };

    let is_active = |target: &str| active.as_deref() == Some(target);

    html! {
        <header class={classes!("site-header", (*scrolled).then_some("scrolled"))}>
            <style>
                {r#"
                    .site-header { position: fixed; top: 0; left: 0; right: 0; z-index: 100; }
                    .top-bar {
                        background: #0a2463;
                        color: #fff;
                        font-size: 0.85rem;
                        display: flex;
                        justify-content: center;
                        gap: 32px;
                        padding: 6px 16px;
                        transition: margin-top 0.3s ease;
                    }
                    .site-header.scrolled .top-bar { margin-top: -32px; }
                    .main-nav {
                        background: rgba(255,255,255,0.96);
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 14px 32px;
                        transition: box-shadow 0.3s ease, padding 0.3s ease;
                    }
                    .site-header.scrolled .main-nav {
                        padding: 8px 32px;
                        box-shadow: 0 2px 12px rgba(0,0,0,0.15);
                    }
                    .nav-logo { font-weight: 700; font-size: 1.3rem; color: #0a2463; text-decoration: none; }
                    .burger-menu { display: none; background: none; border: none; cursor: pointer; }
                    .burger-menu span {
                        display: block;
                        width: 24px;
                        height: 3px;
                        background: #0a2463;
                        margin: 4px 0;
                    }
                    .nav-menu { display: flex; align-items: center; gap: 8px; list-style: none; }
                    .nav-link {
                        color: #1a1a2e;
                        text-decoration: none;
                        padding: 8px 12px;
                        border-radius: 4px;
                        display: block;
                    }
                    .nav-link:hover { color: #d62828; }
                    .nav-link.active { color: #d62828; font-weight: 600; }
                    .nav-dropdown { position: relative; }
                    .dropdown-menu {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        background: #fff;
                        min-width: 180px;
                        box-shadow: 0 4px 16px rgba(0,0,0,0.15);
                        border-radius: 4px;
                        padding: 6px 0;
                        list-style: none;
                    }
                    @media (min-width: 1025px) {
                        .nav-dropdown:hover .dropdown-menu { display: block; }
                    }
                    @media (max-width: 1024px) {
                        .burger-menu { display: block; }
                        .nav-menu {
                            display: none;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            background: #fff;
                            flex-direction: column;
                            align-items: stretch;
                            padding: 12px 0;
                            box-shadow: 0 8px 16px rgba(0,0,0,0.15);
                        }
                        .nav-menu.open { display: flex; }
                        .dropdown-menu { position: static; box-shadow: none; }
                        .nav-dropdown.open .dropdown-menu { display: block; }
                        .dropdown-menu .nav-link { padding-left: 28px; }
                    }
                "#}
            </style>
            <div class="top-bar">
                <span>{"📞 (01) 555-0134"}</span>
                <span>{"✉ informes@nuevaaurora.edu.pe"}</span>
                <span>{"🕐 Lun–Vie 8:00–16:00"}</span>
            </div>
            <nav class="main-nav" ref={nav_ref}>
                <a class="nav-logo" href="#inicio" onclick={follow_link("inicio")}>
                    {"Colegio Nueva Aurora"}
                </a>
                <button class="burger-menu" onclick={toggle_menu} aria-label="Menú">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <ul class={classes!("nav-menu", (*menu_open).then_some("open"))}>
                    {
                        NAV.iter().map(|entry| match entry {
                            NavEntry::Link(link) => html! {
                                <li>
                                    <a
                                        class={classes!("nav-link", is_active(link.target).then_some("active"))}
                                        href={format!("#{}", link.target)}
                                        onclick={follow_link(link.target)}
                                    >
                                        {link.label}
                                    </a>
                                </li>
                            },
                            NavEntry::Dropdown { label, target, links } => html! {
                                <li class={classes!(
                                    "nav-dropdown",
                                    open_dropdowns.contains(label).then_some("open"),
                                )}>
                                    <a
                                        class={classes!("nav-link", is_active(target).then_some("active"))}
                                        href={format!("#{target}")}
                                        onclick={toggle_dropdown(*label, follow_link(*target))}
                                    >
                                        {*label}{" ▾"}
                                    </a>
                                    <ul class="dropdown-menu">
                                        {
                                            links.iter().map(|link| html! {
                                                <li>
                                                    <a
                                                        class="nav-link"
                                                        href={format!("#{}", link.target)}
                                                        onclick={follow_link(link.target)}
                                                    >
                                                        {link.label}
                                                    </a>
                                                </li>
                                            }).collect::<Html>()
                                        }
                                    </ul>
                                </li>
                            },
                        }).collect::<Html>()
                    }
                </ul>
            </nav>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionBounds> {
        vec![
            SectionBounds { id: "inicio".into(), top: 0.0, height: 600.0 },
            SectionBounds { id: "nosotros".into(), top: 600.0, height: 400.0 },
            SectionBounds { id: "admisiones".into(), top: 1200.0, height: 500.0 },
        ]
    }

    #[test]
    fn probe_inside_a_section_marks_exactly_that_section() {
        assert_eq!(active_section(&sections(), 0.0), Some("inicio"));
        assert_eq!(active_section(&sections(), 599.9), Some("inicio"));
        assert_eq!(active_section(&sections(), 600.0), Some("nosotros"));
        assert_eq!(active_section(&sections(), 1300.0), Some("admisiones"));
    }

    #[test]
    fn probe_between_sections_marks_none() {
        // 1000..1200 is a gap in the layout above.
        assert_eq!(active_section(&sections(), 1100.0), None);
        assert_eq!(active_section(&sections(), 2000.0), None);
    }
}
