use std::rc::Rc;

use gloo_timers::callback::Interval;
use web_sys::{KeyboardEvent, TouchEvent};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::config;
use crate::data::content::SLIDES;

/// Wraps `index + delta` into `[0, count)`.
fn wrap_index(index: usize, delta: isize, count: usize) -> usize {
    let count = count as isize;
    (((index as isize + delta) % count + count) % count) as usize
}

/// Classifies a horizontal touch gesture. Movement under the threshold is not
/// a swipe; the finger moving left advances forward.
fn classify_swipe(start_x: i32, end_x: i32) -> Option<isize> {
    let diff = start_x - end_x;
    if diff.abs() < config::SWIPE_THRESHOLD_PX {
        None
    } else if diff > 0 {
        Some(1)
    } else {
        Some(-1)
    }
}

#[function_component(HeroSlider)]
pub fn hero_slider() -> Html {
    let current = use_state(|| 0usize);
    // Shadow copy of the index for timer callbacks, which outlive any render.
    let index_ref = use_mut_ref(|| 0usize);
    let autoplay = use_mut_ref(|| None::<Interval>);
    let touch_start_x = use_mut_ref(|| 0i32);
    let count = SLIDES.len();

    let go_to: Rc<dyn Fn(usize)> = {
        let current = current.clone();
        let index_ref = index_ref.clone();
        Rc::new(move |i: usize| {
            *index_ref.borrow_mut() = i;
            current.set(i);
        })
    };

    let advance: Rc<dyn Fn(isize)> = {
        let index_ref = index_ref.clone();
        let go_to = go_to.clone();
        Rc::new(move |delta: isize| {
            let i = *index_ref.borrow();
            go_to(wrap_index(i, delta, count));
        })
    };

    let start_autoplay: Rc<dyn Fn()> = {
        let autoplay = autoplay.clone();
        let advance = advance.clone();
        Rc::new(move || {
            let advance = advance.clone();
            let mut slot = autoplay.borrow_mut();
            // Never two intervals at once: drop the old one first.
            slot.take();
            *slot = Some(Interval::new(config::AUTOPLAY_INTERVAL_MS, move || {
                advance(1);
            }));
        })
    };

    let stop_autoplay: Rc<dyn Fn()> = {
        let autoplay = autoplay.clone();
        Rc::new(move || {
            autoplay.borrow_mut().take();
        })
    };

    // User navigation funnels through these so every action resets autoplay.
    let navigate: Rc<dyn Fn(isize)> = {
        let advance = advance.clone();
        let start_autoplay = start_autoplay.clone();
        Rc::new(move |delta: isize| {
            advance(delta);
            start_autoplay();
        })
    };

    let jump: Rc<dyn Fn(usize)> = {
        let go_to = go_to.clone();
        let start_autoplay = start_autoplay.clone();
        Rc::new(move |i: usize| {
            go_to(i);
            start_autoplay();
        })
    };

    {
        let start_autoplay = start_autoplay.clone();
        let stop_autoplay = stop_autoplay.clone();
        use_effect_with_deps(
            move |_| {
                start_autoplay();
                move || stop_autoplay()
            },
            (),
        );
    }

    {
        let navigate = navigate.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| match e.key().as_str() {
            "ArrowLeft" => navigate(-1),
            "ArrowRight" => navigate(1),
            _ => {}
        });
    }

    let on_prev = {
        let navigate = navigate.clone();
        Callback::from(move |_: MouseEvent| navigate(-1))
    };
    let on_next = {
        let navigate = navigate.clone();
        Callback::from(move |_: MouseEvent| navigate(1))
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
                if let Some(delta) = classify_swipe(*touch_start_x.borrow(), touch.screen_x()) {
                    navigate(delta);
                }
            }
        })
    };

    let on_mouse_enter = {
        let stop_autoplay = stop_autoplay.clone();
        Callback::from(move |_: MouseEvent| stop_autoplay())
    };
    let on_mouse_leave = {
        let start_autoplay = start_autoplay.clone();
        Callback::from(move |_: MouseEvent| start_autoplay())
    };

    html! {
        <div
            class="slider-container"
            onmouseenter={on_mouse_enter}
            onmouseleave={on_mouse_leave}
            ontouchstart={on_touch_start}
            ontouchend={on_touch_end}
        >
            <style>
                {r#"
                    .slider-container {
                        position: relative;
                        height: 85vh;
                        min-height: 480px;
                        overflow: hidden;
                    }
                    .slide {
                        position: absolute;
                        inset: 0;
                        opacity: 0;
                        transition: opacity 0.8s ease;
                        background-size: cover;
                        background-position: center;
                    }
                    .slide.active { opacity: 1; }
                    .slide::after {
                        content: '';
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(180deg, rgba(10,36,99,0.35) 0%, rgba(10,36,99,0.65) 100%);
                    }
                    .slide-content {
                        position: relative;
                        z-index: 1;
                        height: 100%;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        align-items: center;
                        text-align: center;
                        color: #fff;
                        padding: 0 24px;
                    }
                    body.loaded .slide-content { animation: slide-content-in 1s ease; }
                    @keyframes slide-content-in {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: none; }
                    }
                    .slide-content h1 { font-size: 3rem; margin-bottom: 12px; }
                    .slide-content p { font-size: 1.3rem; margin-bottom: 24px; }
                    .slide-cta {
                        background: #d62828;
                        color: #fff;
                        border: none;
                        border-radius: 4px;
                        padding: 14px 32px;
                        font-size: 1rem;
                        cursor: pointer;
                    }
                    .slider-arrow {
                        position: absolute;
                        top: 50%;
                        transform: translateY(-50%);
                        z-index: 2;
                        background: rgba(255,255,255,0.25);
                        color: #fff;
                        border: none;
                        border-radius: 50%;
                        width: 48px;
                        height: 48px;
                        font-size: 1.5rem;
                        cursor: pointer;
                    }
                    .slider-arrow.prev { left: 16px; }
                    .slider-arrow.next { right: 16px; }
                    .slider-dots {
                        position: absolute;
                        bottom: 24px;
                        left: 0;
                        right: 0;
                        z-index: 2;
                        display: flex;
                        justify-content: center;
                        gap: 10px;
                    }
                    .slider-dot {
                        width: 12px;
                        height: 12px;
                        border-radius: 50%;
                        border: none;
                        background: rgba(255,255,255,0.4);
                        cursor: pointer;
                    }
                    .slider-dot.active { background: #fff; }
                "#}
            </style>
            {
                SLIDES.iter().enumerate().map(|(i, slide)| {
                    let target = slide.cta_target;
                    let on_cta = Callback::from(move |_: MouseEvent| {
                        crate::utils::dom::smooth_scroll_to_id(target, 70.0);
                    });
                    html! {
                        <div
                            class={classes!("slide", (i == *current).then_some("active"))}
                            style={format!("background-image: url('{}')", slide.image)}
                        >
                            <div class="slide-content">
                                <h1>{slide.title}</h1>
                                <p>{slide.subtitle}</p>
                                <button class="slide-cta" onclick={on_cta}>{slide.cta}</button>
                            </div>
                        </div>
                    }
                }).collect::<Html>()
            }
            <button class="slider-arrow prev" onclick={on_prev}>{"‹"}</button>
            <button class="slider-arrow next" onclick={on_next}>{"›"}</button>
            <div class="slider-dots">
                {
                    (0..count).map(|i| {
                        let jump = jump.clone();
                        let onclick = Callback::from(move |_: MouseEvent| jump(i));
                        html! {
                            <button
                                class={classes!("slider-dot", (i == *current).then_some("active"))}
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
    fn forward_wraps_back_to_start_after_full_cycle() {
        for n in 1..=6 {
            let mut i = 0;
            for _ in 0..n {
                i = wrap_index(i, 1, n);
            }
            assert_eq!(i, 0, "n = {n}");
        }
    }

    #[test]
    fn backward_from_zero_wraps_to_last() {
        assert_eq!(wrap_index(0, -1, 4), 3);
        assert_eq!(wrap_index(0, -1, 1), 0);
    }

    #[test]
    fn index_stays_in_bounds_for_any_navigation() {
        let n = 5;
        let mut i = 0;
        for delta in [1, 1, -1, 1, -1, -1, -1, 1, 1, 1, 1, -1] {
            i = wrap_index(i, delta, n);
            assert!(i < n);
        }
    }

    #[test]
    fn sub_threshold_movement_is_not_a_swipe() {
        assert_eq!(classify_swipe(100, 51), None);
        assert_eq!(classify_swipe(100, 149), None);
        assert_eq!(classify_swipe(100, 100), None);
    }

    #[test]
    fn swipe_direction_follows_the_finger() {
        // At the threshold exactly, the gesture counts.
        assert_eq!(classify_swipe(150, 100), Some(1));
        assert_eq!(classify_swipe(100, 150), Some(-1));
        assert_eq!(classify_swipe(300, 100), Some(1));
    }
}
