use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::AddEventListenerOptions;
use yew::prelude::*;

use super::env::{window, BrowserViewport, ScrollSample, Viewport};
use super::hub::{Disconnect, Emit, SignalHub, SignalSource};

/// Single passive `scroll` + `resize` listener on the window.
struct WindowScrollSource;

impl SignalSource<ScrollSample> for WindowScrollSource {
    fn connect(&self, emit: Emit<ScrollSample>) -> Option<Disconnect> {
        let window = match window() {
            Ok(window) => window,
            Err(err) => {
                debug!("scroll source unavailable: {}", err);
                return None;
            }
        };

        let on_scroll = {
            let emit = emit.clone();
            Closure::wrap(Box::new(move || {
                emit(BrowserViewport.scroll_sample());
            }) as Box<dyn FnMut()>)
        };

        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        for event in ["scroll", "resize"] {
            if let Err(err) = window.add_event_listener_with_callback_and_add_event_listener_options(
                event,
                on_scroll.as_ref().unchecked_ref(),
                &options,
            ) {
                debug!("failed to listen for {}: {:?}", event, err);
            }
        }

        // Consumers mounted mid-page need the current offset, not zero.
        emit(BrowserViewport.scroll_sample());

        Some(Box::new(move || {
            for event in ["scroll", "resize"] {
                let _ = window.remove_event_listener_with_callback(event, on_scroll.as_ref().unchecked_ref());
            }
            drop(on_scroll);
        }))
    }
}

thread_local! {
    static SCROLL_HUB: SignalHub<ScrollSample> =
        SignalHub::new("scroll", WindowScrollSource, ScrollSample::default());
}

pub fn scroll_hub() -> SignalHub<ScrollSample> {
    SCROLL_HUB.with(|hub| hub.clone())
}

/// Latest scroll sample; re-renders the caller whenever it changes.
#[hook]
pub fn use_scroll() -> ScrollSample {
    let sample = use_state_eq(|| scroll_hub().latest());

    {
        let sample = sample.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = scroll_hub().subscribe(move |next: &ScrollSample| sample.set(*next));
                move || drop(subscription)
            },
            (),
        );
    }

    *sample
}

/// True once the page is scrolled past `threshold` pixels.
#[hook]
pub fn use_scrolled_past(threshold: f64) -> bool {
    use_scroll().scroll_y > threshold
}
