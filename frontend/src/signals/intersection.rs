//! `IntersectionObserver` hooks.
//!
//! Every connected observer is held as a [`Lease`] counted in
//! [`live_observers`]; dropping the lease disconnects the observer and releases
//! the JS callback. Hooks drop their lease on unmount and whenever their
//! options change.

use std::cell::Cell;
use std::rc::Rc;

use log::{debug, trace};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use super::env::document;
use super::hub::{tally_count, Disconnect, Emit, Lease};

thread_local! {
    static LIVE_OBSERVERS: Cell<usize> = Cell::new(0);
}

/// Number of observers currently connected on this thread.
pub fn live_observers() -> usize {
    tally_count(&LIVE_OBSERVERS)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InViewOptions {
    /// Fraction of the element that must be visible.
    pub threshold: f64,
    /// CSS margin applied to the viewport before testing, e.g. `"-50px"`.
    pub root_margin: &'static str,
}

impl InViewOptions {
    pub const fn threshold(threshold: f64) -> Self {
        Self { threshold, root_margin: "0px" }
    }

    /// Thresholds outside `[0, 1]` make the observer constructor throw.
    fn sanitized_threshold(&self) -> f64 {
        if self.threshold.is_finite() {
            self.threshold.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

impl Default for InViewOptions {
    fn default() -> Self {
        Self::threshold(0.0)
    }
}

/// Reports intersection changes for a fixed set of targets.
pub trait ObserverSource<T> {
    /// Start observing with `options`. Returns `None` when observers are
    /// unsupported or there is nothing to observe.
    fn connect(&self, options: InViewOptions, emit: Emit<T>) -> Option<Disconnect>;
}

/// Connect `source`, counting it in [`live_observers`] until the lease drops.
pub fn attach<T>(source: &impl ObserverSource<T>, options: InViewOptions, emit: Emit<T>) -> Option<Lease> {
    let lease = source.connect(options, emit).map(|disconnect| Lease::new(&LIVE_OBSERVERS, disconnect));
    trace!("intersection observer attached: {}, {} live", lease.is_some(), live_observers());
    lease
}

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

struct ObserverGuard {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl Drop for ObserverGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
        trace!("intersection observer disconnected");
    }
}

fn observe(
    targets: &[Element],
    options: InViewOptions,
    mut on_entry: impl FnMut(&IntersectionObserverEntry) + 'static,
) -> Option<ObserverGuard> {
    let callback: EntriesCallback = Closure::wrap(Box::new(move |entries: Array, _: IntersectionObserver| {
        for entry in entries.iter() {
            if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                on_entry(&entry);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.sanitized_threshold()));
    init.set_root_margin(options.root_margin);

    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => observer,
        Err(err) => {
            debug!("intersection observer unavailable: {:?}", err);
            return None;
        }
    };
    for target in targets {
        observer.observe(target);
    }
    Some(ObserverGuard { observer, _callback: callback })
}

/// Whether one element intersects the viewport.
struct ElementVisibility(Element);

impl ObserverSource<bool> for ElementVisibility {
    fn connect(&self, options: InViewOptions, emit: Emit<bool>) -> Option<Disconnect> {
        let guard = observe(std::slice::from_ref(&self.0), options, move |entry| emit(entry.is_intersecting()))?;
        Some(Box::new(move || drop(guard)))
    }
}

/// Id of whichever section most recently entered the viewport.
struct SectionEntries(Vec<Element>);

impl ObserverSource<String> for SectionEntries {
    fn connect(&self, options: InViewOptions, emit: Emit<String>) -> Option<Disconnect> {
        if self.0.is_empty() {
            return None;
        }
        let guard = observe(&self.0, options, move |entry| {
            if entry.is_intersecting() {
                emit(entry.target().id());
            }
        })?;
        Some(Box::new(move || drop(guard)))
    }
}

/// Whether the element behind `node` currently intersects the viewport.
///
/// Starts `false`; an element already in view at mount flips to `true` on the
/// observer's first callback.
#[hook]
pub fn use_in_view(node: NodeRef, options: InViewOptions) -> bool {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |(node, options)| {
                let lease = node.cast::<Element>().and_then(|element| {
                    let emit: Emit<bool> = Rc::new(move |seen| visible.set(seen));
                    attach(&ElementVisibility(element), *options, emit)
                });
                move || drop(lease)
            },
            (node, options),
        );
    }

    *visible
}

/// Id of the most recently entered section among `ids`.
#[hook]
pub fn use_active_section(ids: &'static [&'static str], threshold: f64) -> Option<String> {
    let active = use_state_eq(|| None::<String>);

    {
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let targets: Vec<Element> = match document() {
                    Ok(doc) => ids.iter().filter_map(|id| doc.get_element_by_id(id)).collect(),
                    Err(_) => Vec::new(),
                };
                let emit: Emit<String> = Rc::new(move |id| active.set(Some(id)));
                let lease = attach(&SectionEntries(targets), InViewOptions::threshold(threshold), emit);
                move || drop(lease)
            },
            (ids, threshold.to_bits()),
        );
    }

    (*active).clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeObserver {
        connects: Cell<usize>,
        disconnects: Rc<Cell<usize>>,
        options: Cell<Option<InViewOptions>>,
        emit: RefCell<Option<Emit<bool>>>,
    }

    impl FakeObserver {
        fn report(&self, visible: bool) {
            let emit = self.emit.borrow().clone();
            if let Some(emit) = emit {
                emit(visible);
            }
        }
    }

    impl ObserverSource<bool> for FakeObserver {
        fn connect(&self, options: InViewOptions, emit: Emit<bool>) -> Option<Disconnect> {
            self.connects.set(self.connects.get() + 1);
            self.options.set(Some(options));
            *self.emit.borrow_mut() = Some(emit);
            let disconnects = self.disconnects.clone();
            Some(Box::new(move || disconnects.set(disconnects.get() + 1)))
        }
    }

    struct Unsupported;

    impl ObserverSource<bool> for Unsupported {
        fn connect(&self, _options: InViewOptions, _emit: Emit<bool>) -> Option<Disconnect> {
            None
        }
    }

    fn recorder(seen: &Rc<Cell<bool>>) -> Emit<bool> {
        let seen = seen.clone();
        Rc::new(move |visible| seen.set(visible))
    }

    #[test]
    fn thresholds_are_clamped() {
        assert_eq!(InViewOptions::threshold(1.5).sanitized_threshold(), 1.0);
        assert_eq!(InViewOptions::threshold(-0.2).sanitized_threshold(), 0.0);
        assert_eq!(InViewOptions::threshold(f64::NAN).sanitized_threshold(), 0.0);
        assert_eq!(InViewOptions::default().root_margin, "0px");
    }

    #[test]
    fn option_change_then_unmount_leaves_no_observer() {
        let source = FakeObserver::default();
        let seen = Rc::new(Cell::new(false));
        assert_eq!(live_observers(), 0);

        let first = attach(&source, InViewOptions::threshold(0.1), recorder(&seen));
        assert_eq!(live_observers(), 1);
        source.report(true);
        assert!(seen.get());

        // New options: the effect cleanup runs before the effect attaches again.
        drop(first);
        assert_eq!(live_observers(), 0);
        let second = attach(&source, InViewOptions { threshold: 0.5, root_margin: "-50px" }, recorder(&seen));
        assert_eq!(live_observers(), 1);
        assert_eq!(source.connects.get(), 2);
        assert_eq!(source.options.get().map(|o| o.root_margin), Some("-50px"));

        drop(second);
        assert_eq!(live_observers(), 0);
        assert_eq!(source.disconnects.get(), 2);
    }

    #[test]
    fn observers_release_independently() {
        let sources: Vec<FakeObserver> = (0..3).map(|_| FakeObserver::default()).collect();
        let seen = Rc::new(Cell::new(false));
        let mut leases: Vec<_> = sources
            .iter()
            .map(|source| attach(source, InViewOptions::default(), recorder(&seen)))
            .collect();
        assert_eq!(live_observers(), 3);

        leases.remove(1);
        assert_eq!(live_observers(), 2);
        assert_eq!(sources[1].disconnects.get(), 1);
        assert_eq!(sources[0].disconnects.get(), 0);

        drop(leases);
        assert_eq!(live_observers(), 0);
        assert!(sources.iter().all(|source| source.disconnects.get() == 1));
    }

    #[test]
    fn unsupported_observer_is_not_counted() {
        let seen = Rc::new(Cell::new(false));
        assert!(attach(&Unsupported, InViewOptions::default(), recorder(&seen)).is_none());
        assert_eq!(live_observers(), 0);
        assert!(!seen.get());
    }
}
