use leptos::prelude::Get;
use leptos::prelude::Signal;
use leptos_use::use_media_query;

/// Widths at or above this are "desktop": the menu is always shown.
pub const BREAKPOINT_PX: u32 = 640;

const WIDE_QUERY: &str = "(min-width: 640px)";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Viewport {
    Narrow,
    Wide,
}

impl Viewport {
    pub fn from_width(px: f64) -> Self {
        if px >= BREAKPOINT_PX as f64 {
            Viewport::Wide
        } else {
            Viewport::Narrow
        }
    }

    pub fn is_wide(self) -> bool {
        self == Viewport::Wide
    }
}

/// The viewport to report when going from `prev` to `now`, if the breakpoint
/// was crossed. The first observation (`prev == None`) is never a crossing.
pub fn crossing(prev: Option<Viewport>, now: Viewport) -> Option<Viewport> {
    match prev {
        Some(p) if p != now => Some(now),
        _ => None,
    }
}

/// Reads the window width right now. Without a window (tests, prerender)
/// this reports `Narrow`, which keeps the menu collapsed.
pub fn current_viewport() -> Viewport {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .map(Viewport::from_width)
        .unwrap_or(Viewport::Narrow)
}

/// Reactive viewport class, updated whenever the width crosses the breakpoint.
pub fn use_viewport() -> Signal<Viewport> {
    let wide = use_media_query(WIDE_QUERY.to_string());

    Signal::derive(move || {
        if wide.get() {
            Viewport::Wide
        } else {
            Viewport::Narrow
        }
    })
}
