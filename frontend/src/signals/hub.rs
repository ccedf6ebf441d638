//! Publish/subscribe fan-out for browser signals.
//!
//! A hub owns at most one connection to its underlying source (one `scroll`
//! listener, one `mousemove` listener, ...). The connection is opened when the
//! first consumer subscribes and closed when the last [`Subscription`] drops.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::thread::LocalKey;

use log::trace;

pub type Emit<T> = Rc<dyn Fn(T)>;
pub type Disconnect = Box<dyn FnOnce()>;

pub trait SignalSource<T> {
    /// Start delivering samples through `emit`.
    /// Returns `None` when the source is unavailable (no window, for example).
    fn connect(&self, emit: Emit<T>) -> Option<Disconnect>;
}

struct HubState<T> {
    name: &'static str,
    latest: T,
    next_id: u64,
    subscribers: Vec<(u64, Rc<dyn Fn(&T)>)>,
    disconnect: Option<Disconnect>,
}

pub struct SignalHub<T: 'static> {
    source: Rc<dyn SignalSource<T>>,
    state: Rc<RefCell<HubState<T>>>,
}

impl<T: 'static> Clone for SignalHub<T> {
    fn clone(&self) -> Self {
        Self { source: self.source.clone(), state: self.state.clone() }
    }
}

/// Keeps a consumer registered; dropping it unsubscribes.
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

pub type Tally = LocalKey<Cell<usize>>;

/// A single connection counted in `tally` for as long as it is held.
/// Dropping it disconnects and uncounts.
#[must_use = "dropping the lease disconnects immediately"]
pub struct Lease {
    tally: &'static Tally,
    disconnect: Option<Disconnect>,
}

impl Lease {
    pub fn new(tally: &'static Tally, disconnect: Disconnect) -> Self {
        tally.with(|count| count.set(count.get() + 1));
        Self { tally, disconnect: Some(disconnect) }
    }
}

impl Drop for Lease {
    fn drop(&mut self) {
        if let Some(disconnect) = self.disconnect.take() {
            disconnect();
        }
        self.tally.with(|count| count.set(count.get().saturating_sub(1)));
    }
}

pub fn tally_count(tally: &'static Tally) -> usize {
    tally.with(Cell::get)
}

impl<T: Clone + 'static> SignalHub<T> {
    pub fn new(name: &'static str, source: impl SignalSource<T> + 'static, initial: T) -> Self {
        Self {
            source: Rc::new(source),
            state: Rc::new(RefCell::new(HubState {
                name,
                latest: initial,
                next_id: 0,
                subscribers: Vec::new(),
                disconnect: None,
            })),
        }
    }

    pub fn latest(&self) -> T {
        self.state.borrow().latest.clone()
    }

    pub fn subscriber_count(&self) -> usize {
        self.state.borrow().subscribers.len()
    }

    pub fn is_connected(&self) -> bool {
        self.state.borrow().disconnect.is_some()
    }

    pub fn subscribe(&self, on_sample: impl Fn(&T) + 'static) -> Subscription {
        let (id, first) = {
            let mut state = self.state.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            state.subscribers.push((id, Rc::new(on_sample)));
            (id, state.subscribers.len() == 1 && state.disconnect.is_none())
        };

        if first {
            // The source may emit synchronously, so no borrow is held here.
            let weak = Rc::downgrade(&self.state);
            let emit: Emit<T> = Rc::new(move |sample| publish_to(&weak, sample));
            let disconnect = self.source.connect(emit);
            let mut state = self.state.borrow_mut();
            trace!("{} hub connected: {}", state.name, disconnect.is_some());
            state.disconnect = disconnect;
        }

        let weak = Rc::downgrade(&self.state);
        Subscription { release: Some(Box::new(move || unsubscribe(&weak, id))) }
    }
}

fn publish_to<T: Clone>(state: &Weak<RefCell<HubState<T>>>, sample: T) {
    let Some(state) = state.upgrade() else {
        return;
    };
    let subscribers: Vec<Rc<dyn Fn(&T)>> = {
        let mut state = state.borrow_mut();
        state.latest = sample.clone();
        state.subscribers.iter().map(|(_, f)| f.clone()).collect()
    };
    for subscriber in subscribers {
        subscriber(&sample);
    }
}

fn unsubscribe<T>(state: &Weak<RefCell<HubState<T>>>, id: u64) {
    let Some(state) = state.upgrade() else {
        return;
    };
    let disconnect = {
        let mut state = state.borrow_mut();
        state.subscribers.retain(|(sid, _)| *sid != id);
        if state.subscribers.is_empty() {
            trace!("{} hub idle, disconnecting", state.name);
            state.disconnect.take()
        } else {
            None
        }
    };
    if let Some(disconnect) = disconnect {
        disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct Counters {
        connects: Cell<usize>,
        disconnects: Cell<usize>,
        emit: RefCell<Option<Emit<f64>>>,
    }

    struct FakeSource(Rc<Counters>);

    impl SignalSource<f64> for FakeSource {
        fn connect(&self, emit: Emit<f64>) -> Option<Disconnect> {
            self.0.connects.set(self.0.connects.get() + 1);
            emit(1.0);
            *self.0.emit.borrow_mut() = Some(emit);
            let counters = self.0.clone();
            Some(Box::new(move || {
                counters.disconnects.set(counters.disconnects.get() + 1);
                counters.emit.borrow_mut().take();
            }))
        }
    }

    struct Unavailable;

    impl SignalSource<f64> for Unavailable {
        fn connect(&self, _emit: Emit<f64>) -> Option<Disconnect> {
            None
        }
    }

    fn hub() -> (SignalHub<f64>, Rc<Counters>) {
        let counters = Rc::new(Counters::default());
        (SignalHub::new("test", FakeSource(counters.clone()), 0.0), counters)
    }

    #[test]
    fn one_connection_for_many_consumers() {
        let (hub, counters) = hub();
        let a = hub.subscribe(|_| {});
        let b = hub.subscribe(|_| {});
        let c = hub.subscribe(|_| {});
        assert_eq!(counters.connects.get(), 1);
        assert_eq!(hub.subscriber_count(), 3);
        drop((a, b, c));
        assert_eq!(counters.disconnects.get(), 1);
    }

    #[test]
    fn dropping_every_subscription_leaves_nothing_behind() {
        let (hub, counters) = hub();
        let subs: Vec<_> = (0..5).map(|_| hub.subscribe(|_| {})).collect();
        assert!(hub.is_connected());
        drop(subs);
        assert_eq!(hub.subscriber_count(), 0);
        assert!(!hub.is_connected());
        assert!(counters.emit.borrow().is_none());
    }

    #[test]
    fn samples_fan_out_to_every_consumer() {
        let (hub, counters) = hub();
        let seen_a = Rc::new(Cell::new(0.0));
        let seen_b = Rc::new(Cell::new(0.0));
        let a = {
            let seen = seen_a.clone();
            hub.subscribe(move |v| seen.set(*v))
        };
        let _b = {
            let seen = seen_b.clone();
            hub.subscribe(move |v| seen.set(*v))
        };
        let emit = counters.emit.borrow().clone().expect("connected");
        emit(42.0);
        assert_eq!((seen_a.get(), seen_b.get()), (42.0, 42.0));
        assert_eq!(hub.latest(), 42.0);

        drop(a);
        emit(7.0);
        assert_eq!((seen_a.get(), seen_b.get()), (42.0, 7.0));
    }

    #[test]
    fn initial_sample_from_connect_reaches_first_subscriber() {
        let (hub, _counters) = hub();
        let seen = Rc::new(Cell::new(0.0));
        let _sub = {
            let seen = seen.clone();
            hub.subscribe(move |v| seen.set(*v))
        };
        assert_eq!(seen.get(), 1.0);
    }

    #[test]
    fn resubscribing_after_idle_reconnects() {
        let (hub, counters) = hub();
        drop(hub.subscribe(|_| {}));
        let _again = hub.subscribe(|_| {});
        assert_eq!(counters.connects.get(), 2);
        assert_eq!(counters.disconnects.get(), 1);
    }

    thread_local! {
        static LEASES: Cell<usize> = Cell::new(0);
    }

    #[test]
    fn leases_are_counted_while_held() {
        let released = Rc::new(Cell::new(0));
        let lease = |released: &Rc<Cell<usize>>| {
            let released = released.clone();
            Lease::new(&LEASES, Box::new(move || released.set(released.get() + 1)))
        };
        let a = lease(&released);
        let b = lease(&released);
        assert_eq!(tally_count(&LEASES), 2);
        drop(a);
        assert_eq!((tally_count(&LEASES), released.get()), (1, 1));
        drop(b);
        assert_eq!((tally_count(&LEASES), released.get()), (0, 2));
    }

    #[test]
    fn unavailable_source_keeps_neutral_value() {
        let hub = SignalHub::new("headless", Unavailable, 0.0);
        let sub = hub.subscribe(|_| {});
        assert!(!hub.is_connected());
        assert_eq!(hub.latest(), 0.0);
        drop(sub);
        assert_eq!(hub.subscriber_count(), 0);
    }
}
