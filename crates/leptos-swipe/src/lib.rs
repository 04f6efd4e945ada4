//! Leptos Swipe Utilities
//!
//! Simple swipe-gesture detection for Leptos using pointer events.
//! Uses a horizontal displacement threshold to distinguish swipe from
//! click or scroll.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Direction of a recognized swipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

/// Minimum horizontal travel in pixels to count as a swipe
pub const SWIPE_THRESHOLD_PX: i32 = 48;
/// Maximum vertical travel before the gesture is treated as a scroll
pub const SWIPE_SLOP_PX: i32 = 32;

/// Classify a pointer displacement. Returns `None` for anything that is
/// not a deliberate horizontal swipe.
pub fn swipe_from_delta(dx: i32, dy: i32) -> Option<SwipeDirection> {
    if dx.abs() < SWIPE_THRESHOLD_PX || dy.abs() > SWIPE_SLOP_PX {
        return None;
    }
    Some(if dx < 0 {
        SwipeDirection::Left
    } else {
        SwipeDirection::Right
    })
}

/// Per-region gesture state: where the primary pointer went down, if it
/// is currently down inside the region.
#[derive(Clone, Copy)]
pub struct SwipeSignals {
    pub start_read: ReadSignal<Option<(i32, i32)>>,
    pub start_write: WriteSignal<Option<(i32, i32)>>,
}

pub fn create_swipe_signals() -> SwipeSignals {
    let (start_read, start_write) = signal(None::<(i32, i32)>);
    SwipeSignals {
        start_read,
        start_write,
    }
}

/// Create pointerdown handler for a swipe region
/// Records the gesture start position
pub fn make_on_pointerdown(sw: SwipeSignals) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
    move |ev: web_sys::PointerEvent| {
        if !ev.is_primary() {
            return;
        }
        // Ignore if target is input or button
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() {
                return;
            }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() {
                return;
            }
        }
        sw.start_write.set(Some((ev.client_x(), ev.client_y())));
    }
}

/// Create pointerup handler for a swipe region
/// Runs `on_swipe` when the release completes a swipe gesture
pub fn make_on_pointerup(
    sw: SwipeSignals,
    on_swipe: Callback<SwipeDirection>,
) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
    move |ev: web_sys::PointerEvent| {
        let Some((start_x, start_y)) = sw.start_read.get_untracked() else {
            return;
        };
        sw.start_write.set(None);
        let dx = ev.client_x() - start_x;
        let dy = ev.client_y() - start_y;
        if let Some(direction) = swipe_from_delta(dx, dy) {
            on_swipe.run(direction);
        }
    }
}

/// Create pointercancel/pointerleave handler
/// Abandons the in-progress gesture
pub fn make_on_pointercancel(sw: SwipeSignals) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
    move |_ev: web_sys::PointerEvent| {
        if sw.start_read.get_untracked().is_some() {
            sw.start_write.set(None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_travel_is_not_a_swipe() {
        assert_eq!(swipe_from_delta(0, 0), None);
        assert_eq!(swipe_from_delta(SWIPE_THRESHOLD_PX - 1, 0), None);
        assert_eq!(swipe_from_delta(-(SWIPE_THRESHOLD_PX - 1), 0), None);
    }

    #[test]
    fn horizontal_travel_past_threshold_is_a_swipe() {
        assert_eq!(swipe_from_delta(SWIPE_THRESHOLD_PX, 0), Some(SwipeDirection::Right));
        assert_eq!(swipe_from_delta(-SWIPE_THRESHOLD_PX, 5), Some(SwipeDirection::Left));
        assert_eq!(swipe_from_delta(200, -SWIPE_SLOP_PX), Some(SwipeDirection::Right));
    }

    #[test]
    fn vertical_travel_is_treated_as_scroll() {
        assert_eq!(swipe_from_delta(SWIPE_THRESHOLD_PX, SWIPE_SLOP_PX + 1), None);
        assert_eq!(swipe_from_delta(-200, -(SWIPE_SLOP_PX + 1)), None);
    }
}
