//! Auto-dismissal of server-rendered flash messages.
//!
//! Each message gets its own pair of timers: fade out after the visible
//! period, detach once the fade has run. Messages never wait on each other.

use crate::config::AdminUiConfig;
use crate::host::{Dom, Scheduler};

/// CSS transition applied when the fade starts.
pub fn fade_transition(fade_ms: u32) -> String {
    format!("opacity {}s ease", f64::from(fade_ms) / 1000.0)
}

/// Schedule the fade-out and removal of one message.
pub fn schedule_dismissal<D: Dom, S: Scheduler>(
    dom: &D,
    scheduler: &S,
    message: D::Node,
    visible_ms: u32,
    fade_ms: u32,
) {
    let dom = dom.clone();
    let remover = scheduler.clone();
    scheduler.schedule(
        visible_ms,
        Box::new(move || {
            dom.set_style(&message, "opacity", "0");
            dom.set_style(&message, "transition", &fade_transition(fade_ms));
            remover.schedule(fade_ms, Box::new(move || dom.remove(&message)));
        }),
    );
}

/// Schedule dismissal of every flash message currently on the page.
///
/// Returns how many messages were found.
pub fn dismiss_all<D: Dom, S: Scheduler>(dom: &D, scheduler: &S, config: &AdminUiConfig) -> usize {
    let messages = dom.elements_by_class(&config.flash_class);
    let count = messages.len();
    for message in messages {
        schedule_dismissal(dom, scheduler, message, config.flash_visible_ms, config.flash_fade_ms);
    }
    count
}
