// Fixed site configuration. None of this is user-configurable at runtime;
// the numbers mirror the behavior of the production site.

/// Admissions WhatsApp line, in international format without the leading `+`.
pub fn whatsapp_number() -> &'static str {
    "51987654321"
}

/// Carousel autoplay period (hero slider and testimonials).
pub const AUTOPLAY_INTERVAL_MS: u32 = 5_000;

/// Total duration of the stats count-up.
pub const STATS_DURATION_MS: u32 = 2_000;
/// Frame period of the count-up animation.
pub const STATS_FRAME_MS: u32 = 16;

/// Minimum horizontal travel for a touch gesture to count as a swipe.
pub const SWIPE_THRESHOLD_PX: i32 = 50;

/// Pause before the chat assistant "types" its answer.
pub const CHAT_TYPING_DELAY_MS: u32 = 600;

/// Simulated processing time before the WhatsApp link opens.
pub const FORM_OPEN_DELAY_MS: u32 = 800;
/// How long the submit button shows its success state.
pub const FORM_FEEDBACK_MS: u32 = 3_000;

/// Delay between the page load event and the registration popup.
pub const POPUP_DELAY_MS: u32 = 1_200;

/// Scroll offset past which the nav bar condenses and the top bar hides.
pub const NAV_SCROLLED_OFFSET: f64 = 100.0;
/// Lookahead added to the scroll position when resolving the active section.
pub const NAV_LOOKAHEAD_PX: f64 = 200.0;
/// Viewport width at or below which the burger menu takes over.
pub const MOBILE_BREAKPOINT_PX: f64 = 1024.0;

/// Gap between testimonial cards, must match the track CSS.
pub const TESTIMONIAL_GAP_PX: f64 = 24.0;
