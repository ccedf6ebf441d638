//! Viewport signal sources: scroll offset, pointer position, element
//! intersection and timers, exposed as Yew hooks.
//!
//! Scroll and pointer are shared: one browser listener per page feeds every
//! mounted consumer through a [`hub::SignalHub`].

pub mod clock;
pub mod env;
pub mod hub;
pub mod intersection;
pub mod pointer;
pub mod scroll;

pub use clock::{use_cycle, use_elapsed, use_tween};
pub use env::{scroll_to, ScrollSample};
pub use intersection::{use_active_section, use_in_view, InViewOptions};
pub use pointer::{event_point, node_rect, use_pointer};
pub use scroll::{use_scroll, use_scrolled_past};
