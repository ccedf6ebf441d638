//! Timer-driven hooks: tweens, cycling indices and one-shot delays.
//!
//! Timers are started through a [`Ticker`] and held as a [`Lease`] counted in
//! [`live_timers`], so an unmounted component leaves nothing ticking.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use log::trace;
use web_sys::js_sys::Date;
use yew::prelude::*;

use super::hub::{tally_count, Disconnect, Emit, Lease};
use crate::animation::easing::tween_progress;
use crate::config::FRAME_MS;

thread_local! {
    static LIVE_TIMERS: Cell<usize> = Cell::new(0);
}

/// Number of intervals and timeouts currently held on this thread.
pub fn live_timers() -> usize {
    tally_count(&LIVE_TIMERS)
}

pub type Tick = Box<dyn FnMut()>;

pub trait Ticker {
    /// Milliseconds on a monotonic-enough wall clock.
    fn now(&self) -> f64;
    /// Run `tick` every `period_ms` until the returned handle is called.
    fn every(&self, period_ms: u32, tick: Tick) -> Disconnect;
    /// Run `f` once after `delay_ms` unless the returned handle is called first.
    fn after(&self, delay_ms: u32, f: Box<dyn FnOnce()>) -> Disconnect;
    /// Run `f` on a later turn of the event loop.
    fn defer(&self, f: Box<dyn FnOnce()>);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTicker;

impl Ticker for BrowserTicker {
    fn now(&self) -> f64 {
        Date::now()
    }

    fn every(&self, period_ms: u32, tick: Tick) -> Disconnect {
        let interval = Interval::new(period_ms, tick);
        Box::new(move || drop(interval))
    }

    fn after(&self, delay_ms: u32, f: Box<dyn FnOnce()>) -> Disconnect {
        let timeout = Timeout::new(delay_ms, f);
        Box::new(move || drop(timeout))
    }

    fn defer(&self, f: Box<dyn FnOnce()>) {
        Timeout::new(0, f).forget();
    }
}

/// Shared slot for a running timer; emptying it stops the timer.
pub type TimerSlot = Rc<RefCell<Option<Lease>>>;

/// Start/finish bookkeeping of a tween, kept across effect re-runs.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tween {
    started_at: Option<f64>,
    finished: bool,
}

impl Tween {
    /// Start time to tick from, or `None` when nothing should run.
    ///
    /// The first activation fixes the start. From then on the tween runs to
    /// completion even if `active` drops or the duration changes.
    pub fn resume(&mut self, active: bool, now: f64) -> Option<f64> {
        if self.finished || (!active && self.started_at.is_none()) {
            return None;
        }
        Some(*self.started_at.get_or_insert(now))
    }

    pub fn advance(&mut self, start: f64, now: f64, duration_ms: f64) -> Option<f64> {
        if self.finished {
            return None;
        }
        let progress = tween_progress(now - start, duration_ms);
        self.finished = progress >= 1.0;
        Some(progress)
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

/// Tick `tween` on a frame interval, reporting progress through `set`.
/// The interval stops itself once the tween completes.
pub fn drive_tween<T: Ticker + Clone + 'static>(
    ticker: T,
    tween: Rc<RefCell<Tween>>,
    active: bool,
    duration_ms: f64,
    set: Emit<f64>,
) -> TimerSlot {
    let slot: TimerSlot = Rc::new(RefCell::new(None));
    let Some(start) = tween.borrow_mut().resume(active, ticker.now()) else {
        return slot;
    };

    let tick = {
        let ticker = ticker.clone();
        let slot = slot.clone();
        move || {
            let Some(progress) = tween.borrow_mut().advance(start, ticker.now(), duration_ms) else {
                return;
            };
            set(progress);
            if progress >= 1.0 {
                // An interval can't be dropped from inside its own tick.
                let slot = slot.clone();
                ticker.defer(Box::new(move || {
                    slot.borrow_mut().take();
                }));
            }
        }
    };

    if duration_ms > 0.0 {
        let lease = Lease::new(&LIVE_TIMERS, ticker.every(FRAME_MS, Box::new(tick)));
        *slot.borrow_mut() = Some(lease);
        trace!("tween started, {} timers live", live_timers());
    } else {
        tick();
    }
    slot
}

pub fn drive_cycle(ticker: &impl Ticker, len: usize, period_ms: u32, set: Emit<usize>) -> Option<Lease> {
    (len > 1).then(|| {
        let mut current = 0_usize;
        let tick: Tick = Box::new(move || {
            current = next_index(current, len);
            set(current);
        });
        Lease::new(&LIVE_TIMERS, ticker.every(period_ms, tick))
    })
}

pub fn drive_delay(ticker: &impl Ticker, delay_ms: u32, done: Box<dyn FnOnce()>) -> Option<Lease> {
    (delay_ms > 0).then(|| Lease::new(&LIVE_TIMERS, ticker.after(delay_ms, done)))
}

/// Progress of a tween in `[0, 1]` that starts the first time `active` is true.
///
/// Ticks on a frame-sized interval and drops it as soon as the tween completes
/// or the component unmounts.
#[hook]
pub fn use_tween(active: bool, duration_ms: f64) -> f64 {
    let progress = use_state_eq(|| 0.0_f64);
    let tween = use_mut_ref(Tween::default);

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |(active, duration_bits)| {
                let set: Emit<f64> = Rc::new(move |p| progress.set(p));
                let slot = drive_tween(BrowserTicker, tween, *active, f64::from_bits(*duration_bits), set);
                move || {
                    slot.borrow_mut().take();
                }
            },
            (active, duration_ms.to_bits()),
        );
    }

    *progress
}

/// Index that advances every `period_ms`, wrapping at `len`. No timer runs for `len <= 1`.
#[hook]
pub fn use_cycle(len: usize, period_ms: u32) -> usize {
    let index = use_state_eq(|| 0_usize);

    {
        let index = index.clone();
        use_effect_with_deps(
            move |(len, period_ms)| {
                let lease = drive_cycle(&BrowserTicker, *len, *period_ms, Rc::new(move |next| index.set(next)));
                move || drop(lease)
            },
            (len, period_ms),
        );
    }

    if len == 0 {
        0
    } else {
        *index % len
    }
}

pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

/// Becomes true once `delay_ms` has passed since mount.
#[hook]
pub fn use_elapsed(delay_ms: u32) -> bool {
    let done = use_state_eq(|| delay_ms == 0);

    {
        let done = done.clone();
        use_effect_with_deps(
            move |delay_ms| {
                let lease = drive_delay(&BrowserTicker, *delay_ms, Box::new(move || done.set(true)));
                move || drop(lease)
            },
            delay_ms,
        );
    }

    *done
}

#[cfg(test)]
mod tests {
    use super::*;

    type Pending = Rc<RefCell<Vec<(u64, Rc<RefCell<Tick>>)>>>;

    #[derive(Default)]
    struct FakeState {
        now: Cell<f64>,
        next_id: Cell<u64>,
        intervals: Pending,
        timeouts: RefCell<Vec<(u64, Box<dyn FnOnce()>)>>,
        deferred: RefCell<Vec<Box<dyn FnOnce()>>>,
    }

    #[derive(Clone, Default)]
    struct FakeTicker(Rc<FakeState>);

    impl FakeTicker {
        fn advance(&self, ms: f64) {
            self.0.now.set(self.0.now.get() + ms);
        }

        fn fire_intervals(&self) {
            let ticks: Vec<_> = self.0.intervals.borrow().iter().map(|(_, tick)| tick.clone()).collect();
            for tick in ticks {
                (*tick.borrow_mut())();
            }
        }

        fn run_deferred(&self) {
            let deferred: Vec<_> = self.0.deferred.borrow_mut().drain(..).collect();
            for f in deferred {
                f();
            }
        }

        fn running(&self) -> usize {
            self.0.intervals.borrow().len() + self.0.timeouts.borrow().len()
        }

        fn id(&self) -> u64 {
            let id = self.0.next_id.get();
            self.0.next_id.set(id + 1);
            id
        }
    }

    impl Ticker for FakeTicker {
        fn now(&self) -> f64 {
            self.0.now.get()
        }

        fn every(&self, _period_ms: u32, tick: Tick) -> Disconnect {
            let id = self.id();
            self.0.intervals.borrow_mut().push((id, Rc::new(RefCell::new(tick))));
            let intervals = self.0.intervals.clone();
            Box::new(move || intervals.borrow_mut().retain(|(other, _)| *other != id))
        }

        fn after(&self, _delay_ms: u32, f: Box<dyn FnOnce()>) -> Disconnect {
            let id = self.id();
            self.0.timeouts.borrow_mut().push((id, f));
            let state = self.0.clone();
            Box::new(move || state.timeouts.borrow_mut().retain(|(other, _)| *other != id))
        }

        fn defer(&self, f: Box<dyn FnOnce()>) {
            self.0.deferred.borrow_mut().push(f);
        }
    }

    fn recorder<T: Copy + 'static>(seen: &Rc<RefCell<Vec<T>>>) -> Emit<T> {
        let seen = seen.clone();
        Rc::new(move |value| seen.borrow_mut().push(value))
    }

    /// What the effect cleanup does.
    fn release(slot: &TimerSlot) {
        slot.borrow_mut().take();
    }

    #[test]
    fn cycle_wraps() {
        assert_eq!(next_index(0, 3), 1);
        assert_eq!(next_index(2, 3), 0);
        assert_eq!(next_index(5, 0), 0);
    }

    #[test]
    fn tween_finishes_after_duration_change() {
        let ticker = FakeTicker::default();
        let tween = Rc::new(RefCell::new(Tween::default()));
        let seen = Rc::new(RefCell::new(Vec::new()));

        let slot = drive_tween(ticker.clone(), tween.clone(), true, 2000.0, recorder(&seen));
        assert_eq!(live_timers(), 1);
        ticker.advance(500.0);
        ticker.fire_intervals();
        assert_eq!(seen.borrow().last().copied(), Some(0.25));

        // Duration changes: cleanup, then the effect runs again.
        release(&slot);
        assert_eq!((live_timers(), ticker.running()), (0, 0));
        let slot = drive_tween(ticker.clone(), tween.clone(), true, 1000.0, recorder(&seen));
        assert_eq!(live_timers(), 1);

        ticker.advance(250.0);
        ticker.fire_intervals();
        assert_eq!(seen.borrow().last().copied(), Some(0.75));
        ticker.advance(250.0);
        ticker.fire_intervals();
        assert_eq!(seen.borrow().last().copied(), Some(1.0));
        assert!(tween.borrow().is_finished());

        ticker.run_deferred();
        assert!(slot.borrow().is_none());
        assert_eq!((live_timers(), ticker.running()), (0, 0));
    }

    #[test]
    fn started_tween_survives_losing_activation() {
        let ticker = FakeTicker::default();
        let tween = Rc::new(RefCell::new(Tween::default()));
        let seen = Rc::new(RefCell::new(Vec::new()));

        let slot = drive_tween(ticker.clone(), tween.clone(), true, 1000.0, recorder(&seen));
        ticker.advance(300.0);
        ticker.fire_intervals();
        release(&slot);

        let slot = drive_tween(ticker.clone(), tween.clone(), false, 1000.0, recorder(&seen));
        assert_eq!(live_timers(), 1);
        ticker.advance(700.0);
        ticker.fire_intervals();
        assert_eq!(seen.borrow().last().copied(), Some(1.0));

        ticker.run_deferred();
        release(&slot);
        assert_eq!(live_timers(), 0);
    }

    #[test]
    fn tween_waits_for_activation_and_never_restarts() {
        let ticker = FakeTicker::default();
        let tween = Rc::new(RefCell::new(Tween::default()));
        let seen = Rc::new(RefCell::new(Vec::new()));

        let idle = drive_tween(ticker.clone(), tween.clone(), false, 1000.0, recorder(&seen));
        assert!(idle.borrow().is_none());
        assert_eq!(live_timers(), 0);

        let instant = drive_tween(ticker.clone(), tween.clone(), true, 0.0, recorder(&seen));
        assert!(instant.borrow().is_none());
        assert_eq!(*seen.borrow(), vec![1.0]);

        let again = drive_tween(ticker.clone(), tween, true, 1000.0, recorder(&seen));
        assert!(again.borrow().is_none());
        ticker.run_deferred();
        assert_eq!((live_timers(), ticker.running()), (0, 0));
    }

    #[test]
    fn unmounted_tween_stops_ticking() {
        let ticker = FakeTicker::default();
        let tween = Rc::new(RefCell::new(Tween::default()));
        let seen = Rc::new(RefCell::new(Vec::new()));

        let slot = drive_tween(ticker.clone(), tween.clone(), true, 1000.0, recorder(&seen));
        ticker.advance(100.0);
        ticker.fire_intervals();
        release(&slot);
        ticker.advance(100.0);
        ticker.fire_intervals();
        assert_eq!(seen.borrow().len(), 1);
        assert!(!tween.borrow().is_finished());
        assert_eq!((live_timers(), ticker.running()), (0, 0));
    }

    #[test]
    fn cycle_and_delay_release_on_unmount() {
        let ticker = FakeTicker::default();
        let seen = Rc::new(RefCell::new(Vec::new()));

        assert!(drive_cycle(&ticker, 1, 3000, recorder(&seen)).is_none());
        let cycle = drive_cycle(&ticker, 3, 3000, recorder(&seen));
        for _ in 0..4 {
            ticker.fire_intervals();
        }
        assert_eq!(*seen.borrow(), vec![1, 2, 0, 1]);

        let done = Rc::new(Cell::new(false));
        assert!(drive_delay(&ticker, 0, Box::new(|| {})).is_none());
        let delay = {
            let done = done.clone();
            drive_delay(&ticker, 300, Box::new(move || done.set(true)))
        };
        assert_eq!((live_timers(), ticker.running()), (2, 2));

        drop(cycle);
        drop(delay);
        assert_eq!((live_timers(), ticker.running()), (0, 0));
        assert!(!done.get());
    }
}
