use std::rc::Rc;

use gloo_timers::callback::Interval;
use web_sys::{Element, MouseEvent, TouchEvent};
use yew::prelude::*;

use crate::config;
use crate::data::content::TESTIMONIALS;
use crate::utils::dom;

/// Visible cards for a given viewport width.
fn visible_count_for(width: f64) -> usize {
    if width >= 1024.0 {
        3
    } else if width >= 640.0 {
        2
    } else {
        1
    }
}

/// Asymmetric wrap: forward movement clamps to `count - visible` and wraps to
/// the start only past that bound; backward movement below zero wraps to the
/// bound. This keeps the last page full instead of showing trailing space.
fn advance(current: usize, delta: isize, count: usize, visible: usize) -> usize {
    let last = count.saturating_sub(visible);
    let next = current as isize + delta;
    if next > last as isize {
        0
    } else if next < 0 {
        last
    } else {
        next as usize
    }
}

#[function_component(TestimonialsCarousel)]
pub fn testimonials_carousel() -> Html {
    let current = use_state(|| 0usize);
    let offset_px = use_state(|| 0.0f64);
    let visible = use_state(|| 1usize);
    let index_ref = use_mut_ref(|| 0usize);
    let autoplay = use_mut_ref(|| None::<Interval>);
    let touch_start_x = use_mut_ref(|| 0i32);
    let track_ref = use_node_ref();
    let count = TESTIMONIALS.len();

    // Applies an index: measures the card width at slide time and recomputes
    // the visible count rather than caching either.
    let go_to: Rc<dyn Fn(usize)> = {
        let current = current.clone();
        let offset_px = offset_px.clone();
        let visible = visible.clone();
        let index_ref = index_ref.clone();
        let track_ref = track_ref.clone();
        Rc::new(move |i: usize| {
            let vis = visible_count_for(dom::viewport_width());
            let i = i.min(count.saturating_sub(vis));
            let card_width = track_ref
                .cast::<Element>()
                .and_then(|track| track.first_element_child())
                .map(|card| card.client_width() as f64)
                .unwrap_or(0.0);
            *index_ref.borrow_mut() = i;
            current.set(i);
            visible.set(vis);
            offset_px.set(-(i as f64) * (card_width + config::TESTIMONIAL_GAP_PX));
        })
    };

    let slide: Rc<dyn Fn(isize)> = {
        let index_ref = index_ref.clone();
        let go_to = go_to.clone();
        Rc::new(move |delta: isize| {
            let vis = visible_count_for(dom::viewport_width());
            let i = advance(*index_ref.borrow(), delta, count, vis);
            go_to(i);
        })
    };

    let start_autoplay: Rc<dyn Fn()> = {
        let autoplay = autoplay.clone();
        let slide = slide.clone();
        Rc::new(move || {
            let slide = slide.clone();
            let mut slot = autoplay.borrow_mut();
            slot.take();
            *slot = Some(Interval::new(config::AUTOPLAY_INTERVAL_MS, move || {
                slide(1);
            }));
        })
    };
    let stop_autoplay: Rc<dyn Fn()> = {
        let autoplay = autoplay.clone();
        Rc::new(move || {
            autoplay.borrow_mut().take();
        })
    };

    let navigate: Rc<dyn Fn(isize)> = {
        let slide = slide.clone();
        let start_autoplay = start_autoplay.clone();
        Rc::new(move |delta: isize| {
            slide(delta);
            start_autoplay();
        })
    };

    {
        let go_to = go_to.clone();
        let start_autoplay = start_autoplay.clone();
        let stop_autoplay = stop_autoplay.clone();
        use_effect_with_deps(
            move |_| {
                go_to(0);
                start_autoplay();
                move || stop_autoplay()
            },
            (),
        );
    }

    let on_prev = {
        let navigate = navigate.clone();
        Callback::from(move |_: MouseEvent| navigate(-1))
    };
    let on_next = {
        let navigate = navigate.clone();
        Callback::from(move |_: MouseEvent| navigate(1))
    };
    let on_mouse_enter = {
        let stop_autoplay = stop_autoplay.clone();
        Callback::from(move |_: MouseEvent| stop_autoplay())
    };
    let on_mouse_leave = {
        let start_autoplay = start_autoplay.clone();
        Callback::from(move |_: MouseEvent| start_autoplay())
    };
    let on_touch_start = {
        let touch_start_x = touch_start_x.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(touch) = e.changed_touches().get(0) {
                *touch_start_x.borrow_mut() = touch.screen_x();
            }
        })
    };
    let on_touch_end = {
        let touch_start_x = touch_start_x.clone();
        let navigate = navigate.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(touch) = e.changed_touches().get(0) {
                let diff = *touch_start_x.borrow() - touch.screen_x();
                if diff.abs() >= config::SWIPE_THRESHOLD_PX {
                    navigate(if diff > 0 { 1 } else { -1 });
                }
            }
        })
    };

    let dot_count = count.saturating_sub(*visible) + 1;

    html! {
        <div
            class="testimonials-carousel"
            onmouseenter={on_mouse_enter}
            onmouseleave={on_mouse_leave}
            ontouchstart={on_touch_start}
            ontouchend={on_touch_end}
        >
            <style>
                {r#"
                    .testimonials-carousel { position: relative; padding: 0 56px; }
                    .testimonials-viewport { overflow: hidden; }
                    .testimonials-track {
                        display: flex;
                        gap: 24px;
                        transition: transform 0.5s ease;
                    }
                    .testimonial-card {
                        flex: 0 0 100%;
                        background: #fff;
                        border-radius: 10px;
                        box-shadow: 0 4px 16px rgba(0,0,0,0.08);
                        padding: 28px 24px;
                    }
                    @media (min-width: 640px) {
                        .testimonial-card { flex: 0 0 calc((100% - 24px) / 2); }
                    }
                    @media (min-width: 1024px) {
                        .testimonial-card { flex: 0 0 calc((100% - 48px) / 3); }
                    }
                    .testimonial-quote { font-style: italic; line-height: 1.7; color: #333; }
                    .testimonial-name { margin-top: 16px; font-weight: 600; color: #0a2463; }
                    .testimonial-role { font-size: 0.85rem; color: #777; }
                    .carousel-arrow {
                        position: absolute;
                        top: 50%;
                        transform: translateY(-50%);
                        background: #0a2463;
                        color: #fff;
                        border: none;
                        border-radius: 50%;
                        width: 44px;
                        height: 44px;
                        font-size: 1.3rem;
                        cursor: pointer;
                    }
                    .carousel-arrow.prev { left: 0; }
                    .carousel-arrow.next { right: 0; }
                    .carousel-dots {
                        display: flex;
                        justify-content: center;
                        gap: 8px;
                        margin-top: 24px;
                    }
                    .carousel-dot {
                        width: 10px;
                        height: 10px;
                        border-radius: 50%;
                        border: none;
                        background: #c9ced6;
                        cursor: pointer;
                    }
                    .carousel-dot.active { background: #0a2463; }
                "#}
            </style>
            <div class="testimonials-viewport">
                <div
                    class="testimonials-track"
                    ref={track_ref}
                    style={format!("transform: translateX({}px)", *offset_px)}
                >
                    {
                        TESTIMONIALS.iter().map(|t| html! {
                            <div class="testimonial-card">
                                <p class="testimonial-quote">{format!("“{}”", t.quote)}</p>
                                <div class="testimonial-name">{t.name}</div>
                                <div class="testimonial-role">{t.role}</div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
            <button class="carousel-arrow prev" onclick={on_prev}>{"‹"}</button>
            <button class="carousel-arrow next" onclick={on_next}>{"›"}</button>
            <div class="carousel-dots">
                {
                    (0..dot_count).map(|i| {
                        let go_to = go_to.clone();
                        let start_autoplay = start_autoplay.clone();
                        let onclick = Callback::from(move |_: MouseEvent| {
                            go_to(i);
                            start_autoplay();
                        });
                        html! {
                            <button
                                class={classes!("carousel-dot", (i == *current).then_some("active"))}
                                {onclick}
                            />
                        }
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints_map_to_visible_counts() {
        assert_eq!(visible_count_for(1440.0), 3);
        assert_eq!(visible_count_for(1024.0), 3);
        assert_eq!(visible_count_for(1023.0), 2);
        assert_eq!(visible_count_for(640.0), 2);
        assert_eq!(visible_count_for(639.0), 1);
        assert_eq!(visible_count_for(320.0), 1);
    }

    #[test]
    fn forward_never_exceeds_last_full_page() {
        let (count, visible) = (6, 3);
        let mut i = 0;
        for _ in 0..20 {
            i = advance(i, 1, count, visible);
            assert!(i <= count - visible);
        }
    }

    #[test]
    fn forward_wraps_to_start_only_past_the_bound() {
        // count 6, visible 3: indices 0..=3 are reachable.
        assert_eq!(advance(2, 1, 6, 3), 3);
        assert_eq!(advance(3, 1, 6, 3), 0);
    }

    #[test]
    fn backward_from_zero_wraps_to_the_bound() {
        assert_eq!(advance(0, -1, 6, 3), 3);
        assert_eq!(advance(1, -1, 6, 3), 0);
        assert_eq!(advance(0, -1, 6, 1), 5);
    }

    #[test]
    fn single_visible_behaves_like_plain_wraparound_bounds() {
        let (count, visible) = (4, 1);
        assert_eq!(advance(3, 1, count, visible), 0);
        assert_eq!(advance(0, -1, count, visible), 3);
    }
}
