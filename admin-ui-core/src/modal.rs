//! `openModal(id)` / `closeModal(id)`.
//!
//! Plain visibility toggles: no stacking, no focus handling. An unknown id
//! is silently ignored.

use crate::host::Dom;

/// `display` value of an open modal; the overlay markup is a flex container.
pub const OPEN_DISPLAY: &str = "flex";
pub const CLOSED_DISPLAY: &str = "none";

/// Show the modal with the given id. Returns whether it exists.
pub fn open_modal<D: Dom>(dom: &D, id: &str) -> bool {
    set_display(dom, id, OPEN_DISPLAY)
}

/// Hide the modal with the given id. Returns whether it exists.
pub fn close_modal<D: Dom>(dom: &D, id: &str) -> bool {
    set_display(dom, id, CLOSED_DISPLAY)
}

fn set_display<D: Dom>(dom: &D, id: &str, display: &str) -> bool {
    match dom.element_by_id(id) {
        Some(modal) => {
            dom.set_style(&modal, "display", display);
            true
        }
        None => false,
    }
}
