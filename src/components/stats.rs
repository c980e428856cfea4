use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config;
use crate::data::content::STATS;
use crate::utils::dom;

/// Per-statistic count-up stepper: advances a fixed increment per frame and
/// snaps to the exact target on the final frame.
struct CountUp {
    target: u32,
    current: f64,
    increment: f64,
}

impl CountUp {
    fn new(target: u32, duration_ms: u32, frame_ms: u32) -> Self {
        let frames = (duration_ms / frame_ms).max(1) as f64;
        CountUp {
            target,
            current: 0.0,
            increment: target as f64 / frames,
        }
    }

    fn step(&mut self) -> u32 {
        self.current += self.increment;
        if self.done() {
            self.target
        } else {
            self.current.floor() as u32
        }
    }

    fn done(&self) -> bool {
        self.current >= self.target as f64
    }
}

#[function_component(StatsSection)]
pub fn stats_section() -> Html {
    let values = use_state(|| vec![0u32; STATS.len()]);
    let animated = use_mut_ref(|| false);
    let frame_timer = use_mut_ref(|| None::<Interval>);
    let section_ref = use_node_ref();

    {
        let values = values.clone();
        let animated = animated.clone();
        let frame_timer = frame_timer.clone();
        let section_ref = section_ref.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();

                let check_position = move || {
                    if *animated.borrow() {
                        return;
                    }
                    let Some(section) = section_ref.cast::<HtmlElement>() else {
                        return;
                    };
                    let midpoint = section.offset_top() as f64
                        + section.offset_height() as f64 / 2.0;
                    if dom::scroll_y() + dom::viewport_height() <= midpoint {
                        return;
                    }
                    *animated.borrow_mut() = true;

                    let counters: Rc<RefCell<Vec<CountUp>>> = Rc::new(RefCell::new(
                        STATS
                            .iter()
                            .map(|s| {
                                CountUp::new(
                                    s.target,
                                    config::STATS_DURATION_MS,
                                    config::STATS_FRAME_MS,
                                )
                            })
                            .collect(),
                    ));
                    let values = values.clone();
                    let timer_slot = frame_timer.clone();
                    *frame_timer.borrow_mut() =
                        Some(Interval::new(config::STATS_FRAME_MS, move || {
                            let mut counters = counters.borrow_mut();
                            values.set(counters.iter_mut().map(CountUp::step).collect());
                            if counters.iter().all(CountUp::done) {
                                timer_slot.borrow_mut().take();
                            }
                        }));
                };
                check_position();

                let scroll_callback =
                    Closure::wrap(Box::new(check_position) as Box<dyn FnMut()>);
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

    html! {
        <section id="estadisticas" class="stats-section" ref={section_ref}>
            <style>
                {r#"
                    .stats-section {
                        background: linear-gradient(135deg, #0a2463 0%, #123a8f 100%);
                        color: #fff;
                        padding: 64px 24px;
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 48px;
                        text-align: center;
                    }
                    .stat-number { font-size: 3rem; font-weight: 700; }
                    .stat-label { font-size: 1rem; opacity: 0.85; margin-top: 4px; }
                "#}
            </style>
            {
                STATS.iter().zip(values.iter()).map(|(stat, value)| html! {
                    <div class="stat-item">
                        <div class="stat-number">{value}{stat.suffix}</div>
                        <div class="stat-label">{stat.label}</div>
                    </div>
                }).collect::<Html>()
            }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reaches_the_exact_target_and_stops() {
        let mut counter = CountUp::new(38, 2_000, 16);
        let mut last = 0;
        let mut frames = 0;
        while !counter.done() {
            last = counter.step();
            frames += 1;
            assert!(frames <= 126, "count-up never finished");
        }
        assert_eq!(last, 38);
    }

    #[test]
    fn intermediate_values_are_floored_and_monotonic() {
        let mut counter = CountUp::new(1250, 2_000, 16);
        let mut previous = 0;
        for _ in 0..50 {
            let value = counter.step();
            assert!(value >= previous);
            assert!(value < 1250, "should still be mid-animation");
            previous = value;
        }
    }

    #[test]
    fn zero_target_finishes_immediately() {
        let mut counter = CountUp::new(0, 2_000, 16);
        assert_eq!(counter.step(), 0);
        assert!(counter.done());
    }
}
