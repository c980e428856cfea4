use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::data::content::GALLERY;
use crate::utils::dom;

/// Viewer state over a fixed gallery of `count` entries. Closing when already
/// closed is a no-op, and navigation wraps at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LightboxState {
    current: Option<usize>,
    count: usize,
}

impl LightboxState {
    fn closed(count: usize) -> Self {
        LightboxState { current: None, count }
    }

    fn open(self, index: usize) -> Self {
        if index < self.count {
            LightboxState { current: Some(index), ..self }
        } else {
            self
        }
    }

    fn close(self) -> Self {
        LightboxState { current: None, ..self }
    }

    fn advance(self, delta: isize) -> Self {
        match self.current {
            Some(i) if self.count > 0 => {
                let count = self.count as isize;
                let next = ((i as isize + delta) % count + count) % count;
                LightboxState { current: Some(next as usize), ..self }
            }
            _ => self,
        }
    }

    fn is_open(self) -> bool {
        self.current.is_some()
    }
}

/// The gallery grid plus the full-screen viewer over it. Thumbnails load
/// lazily through the page-wide deferred-source mechanism.
#[function_component(GalleryLightbox)]
pub fn gallery_lightbox() -> Html {
    let state = use_state(|| LightboxState::closed(GALLERY.len()));

    {
        let locked = state.is_open();
        use_effect_with_deps(
            move |_| {
                dom::lock_body_scroll(locked);
                || ()
            },
            locked,
        );
    }

    {
        let state = state.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if !state.is_open() {
                return;
            }
            match e.key().as_str() {
                "Escape" => state.set(state.close()),
                "ArrowLeft" => state.set(state.advance(-1)),
                "ArrowRight" => state.set(state.advance(1)),
                _ => {}
            }
        });
    }

    let close = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.set(state.close()))
    };
    let prev = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            state.set(state.advance(-1));
        })
    };
    let next = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            state.set(state.advance(1));
        })
    };

    html! {
        <div class="gallery-block">
            <style>
                {r#"
                    .gallery-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
                        gap: 16px;
                    }
                    .gallery-item { cursor: pointer; border-radius: 8px; overflow: hidden; position: relative; }
                    .gallery-item img { width: 100%; height: 200px; object-fit: cover; display: block; }
                    .gallery-item figcaption {
                        position: absolute;
                        left: 0; right: 0; bottom: 0;
                        background: rgba(10, 36, 99, 0.75);
                        color: #fff;
                        font-size: 0.85rem;
                        padding: 6px 10px;
                    }
                    .lightbox-overlay {
                        position: fixed;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.9);
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        z-index: 700;
                    }
                    .lightbox-overlay img {
                        max-width: 88vw;
                        max-height: 78vh;
                        border-radius: 4px;
                    }
                    .lightbox-caption { color: #ddd; margin-top: 14px; }
                    .lightbox-counter { color: #888; font-size: 0.85rem; margin-top: 4px; }
                    .lightbox-close {
                        position: absolute;
                        top: 18px;
                        right: 26px;
                        background: none;
                        border: none;
                        color: #fff;
                        font-size: 2rem;
                        cursor: pointer;
                    }
                    .lightbox-arrow {
                        position: absolute;
                        top: 50%;
                        transform: translateY(-50%);
                        background: rgba(255,255,255,0.15);
                        border: none;
                        color: #fff;
                        border-radius: 50%;
                        width: 48px;
                        height: 48px;
                        font-size: 1.5rem;
                        cursor: pointer;
                    }
                    .lightbox-arrow.prev { left: 20px; }
                    .lightbox-arrow.next { right: 20px; }
                "#}
            </style>
            <div class="gallery-grid">
                {
                    GALLERY.iter().enumerate().map(|(i, item)| {
                        let state = state.clone();
                        let onclick = Callback::from(move |_: MouseEvent| {
                            state.set(state.open(i));
                        });
                        html! {
                            <figure class="gallery-item" {onclick}>
                                <img data-src={item.thumb} alt={item.caption} />
                                <figcaption>{item.caption}</figcaption>
                            </figure>
                        }
                    }).collect::<Html>()
                }
            </div>
            {
                if let Some(i) = state.current {
                    let item = &GALLERY[i];
                    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());
                    html! {
                        <div class="lightbox-overlay" onclick={close.clone()}>
                            <button class="lightbox-close" onclick={close.clone()}>{"×"}</button>
                            <button class="lightbox-arrow prev" onclick={prev}>{"‹"}</button>
                            <img src={item.full} alt={item.caption} onclick={stop} />
                            <div class="lightbox-caption">{item.caption}</div>
                            <div class="lightbox-counter">
                                {format!("{} / {}", i + 1, GALLERY.len())}
                            </div>
                            <button class="lightbox-arrow next" onclick={next}>{"›"}</button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_wraps_at_both_ends() {
        let state = LightboxState::closed(6).open(5);
        assert_eq!(state.advance(1).current, Some(0));
        let state = LightboxState::closed(6).open(0);
        assert_eq!(state.advance(-1).current, Some(5));
    }

    #[test]
    fn closing_twice_is_a_no_op() {
        let state = LightboxState::closed(6).open(2);
        let closed = state.close();
        assert!(!closed.is_open());
        assert_eq!(closed.close(), closed);
    }

    #[test]
    fn navigation_while_closed_does_nothing() {
        let state = LightboxState::closed(6);
        assert_eq!(state.advance(1), state);
        assert_eq!(state.advance(-1), state);
    }

    #[test]
    fn out_of_range_open_is_ignored() {
        let state = LightboxState::closed(3);
        assert_eq!(state.open(3), state);
        assert_eq!(state.open(2).current, Some(2));
    }
}
