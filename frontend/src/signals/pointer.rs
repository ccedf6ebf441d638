use std::cell::Cell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use super::env::document;
use super::hub::{Disconnect, Emit, SignalHub, SignalSource};
use crate::animation::{Point, Rect};

/// Pointer position in viewport coordinates and whether it is over the page.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub position: Point,
    pub present: bool,
}

struct DocumentPointerSource;

impl SignalSource<PointerSample> for DocumentPointerSource {
    fn connect(&self, emit: Emit<PointerSample>) -> Option<Disconnect> {
        let document = match document() {
            Ok(document) => document,
            Err(err) => {
                debug!("pointer source unavailable: {}", err);
                return None;
            }
        };
        let last = Rc::new(Cell::new(Point::ORIGIN));

        let on_move = {
            let emit = emit.clone();
            let last = last.clone();
            Closure::wrap(Box::new(move |e: MouseEvent| {
                let position = Point::new(e.client_x() as f64, e.client_y() as f64);
                last.set(position);
                emit(PointerSample { position, present: true });
            }) as Box<dyn FnMut(MouseEvent)>)
        };
        let on_enter = {
            let emit = emit.clone();
            let last = last.clone();
            Closure::wrap(Box::new(move |_: MouseEvent| {
                emit(PointerSample { position: last.get(), present: true });
            }) as Box<dyn FnMut(MouseEvent)>)
        };
        let on_leave = Closure::wrap(Box::new(move |_: MouseEvent| {
            emit(PointerSample { position: last.get(), present: false });
        }) as Box<dyn FnMut(MouseEvent)>);

        let listeners = [("mousemove", on_move), ("mouseenter", on_enter), ("mouseleave", on_leave)];
        for (event, callback) in &listeners {
            if let Err(err) = document.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
                debug!("failed to listen for {}: {:?}", event, err);
            }
        }

        Some(Box::new(move || {
            for (event, callback) in &listeners {
                let _ = document.remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
            }
        }))
    }
}

thread_local! {
    static POINTER_HUB: SignalHub<PointerSample> =
        SignalHub::new("pointer", DocumentPointerSource, PointerSample::default());
}

pub fn pointer_hub() -> SignalHub<PointerSample> {
    POINTER_HUB.with(|hub| hub.clone())
}

/// Page-wide pointer position, shared by every caller through one listener.
#[hook]
pub fn use_pointer() -> PointerSample {
    let sample = use_state_eq(|| pointer_hub().latest());

    {
        let sample = sample.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = pointer_hub().subscribe(move |next: &PointerSample| sample.set(*next));
                move || drop(subscription)
            },
            (),
        );
    }

    *sample
}

/// Bounding box of the element behind `node`, if it is mounted.
pub fn node_rect(node: &NodeRef) -> Option<Rect> {
    let element = node.cast::<web_sys::Element>()?;
    let rect = element.get_bounding_client_rect();
    Some(Rect::new(rect.left(), rect.top(), rect.width(), rect.height()))
}

pub fn event_point(e: &MouseEvent) -> Point {
    Point::new(e.client_x() as f64, e.client_y() as f64)
}
