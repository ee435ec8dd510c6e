use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;

use leptos::leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle};

/// One-shot delayed callback scheduling with cancellation.
///
/// Every animation tick is scheduled as a fresh one-shot callback rather than
/// a repeating interval, so each tick can pick its own delay (short for a
/// character, long for a line or phase pause).
pub trait Scheduler: Clone + 'static {
    type Handle;

    /// Schedule `cb` to run once after `delay`. Returns `None` if the
    /// platform refused the timer.
    fn schedule(&self, delay: Duration, cb: Box<dyn FnOnce()>) -> Option<Self::Handle>;

    fn cancel(&self, handle: Self::Handle);
}

/// Production scheduler backed by the browser's timeout queue.
#[derive(Clone, Copy, Default)]
pub struct DomScheduler;

impl Scheduler for DomScheduler {
    type Handle = TimeoutHandle;

    fn schedule(&self, delay: Duration, cb: Box<dyn FnOnce()>) -> Option<Self::Handle> {
        set_timeout_with_handle(cb, delay).ok()
    }

    fn cancel(&self, handle: Self::Handle) {
        handle.clear();
    }
}

type StepFn = dyn FnMut() -> Option<Duration>;

struct TickerInner<S: Scheduler> {
    sched: S,
    pending: RefCell<Option<S::Handle>>,
    run: Cell<u64>,
}

impl<S: Scheduler> Drop for TickerInner<S> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.get_mut().take() {
            self.sched.cancel(handle);
        }
    }
}

/// Drives a step function through self-rescheduling one-shot timers.
///
/// At most one tick is ever pending. `start` supersedes any prior run: the
/// pending timer is cancelled and the run generation is bumped, so a stale
/// callback that already left the timer queue sees a generation mismatch and
/// does nothing. That is what keeps an interrupted reveal from interleaving
/// with its replacement.
pub struct Ticker<S: Scheduler> {
    inner: Rc<TickerInner<S>>,
}

impl<S: Scheduler> Ticker<S> {
    pub fn new(sched: S) -> Self {
        Self {
            inner: Rc::new(TickerInner {
                sched,
                pending: RefCell::new(None),
                run: Cell::new(0),
            }),
        }
    }

    /// Cancel any in-flight run and begin driving `step` after `first_delay`.
    ///
    /// `step` performs one unit of work per tick and returns the delay until
    /// the next tick, or `None` to end the run.
    pub fn start(&self, first_delay: Duration, step: impl FnMut() -> Option<Duration> + 'static) {
        self.stop();
        let step: Rc<RefCell<StepFn>> = Rc::new(RefCell::new(step));
        Self::arm(&self.inner, self.inner.run.get(), first_delay, step);
    }

    /// Cancel the pending tick, if any. Idempotent.
    pub fn stop(&self) {
        self.inner.run.set(self.inner.run.get() + 1);
        if let Some(handle) = self.inner.pending.borrow_mut().take() {
            self.inner.sched.cancel(handle);
        }
    }

    fn arm(inner: &Rc<TickerInner<S>>, run: u64, delay: Duration, step: Rc<RefCell<StepFn>>) {
        let weak: Weak<TickerInner<S>> = Rc::downgrade(inner);
        let handle = inner.sched.schedule(
            delay,
            Box::new(move || {
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                if inner.run.get() != run {
                    // superseded by a later start() or stop()
                    return;
                }
                inner.pending.borrow_mut().take();
                let next = (step.borrow_mut())();
                if let Some(delay) = next {
                    Self::arm(&inner, run, delay, step);
                }
            }),
        );
        *inner.pending.borrow_mut() = handle;
    }
}


#[cfg(test)]
mod tests {
    use super::testing::ManualScheduler;
    use super::*;

    #[test]
    fn ticker_reschedules_with_varying_delays() {
        let sched = ManualScheduler::new();
        let ticker = Ticker::new(sched.clone());
        let log = Rc::new(RefCell::new(Vec::new()));

        let seen = log.clone();
        let mut remaining = vec![Duration::from_millis(10), Duration::from_millis(100)];
        ticker.start(Duration::from_millis(5), move || {
            seen.borrow_mut().push(());
            if remaining.is_empty() {
                None
            } else {
                Some(remaining.remove(0))
            }
        });

        sched.advance(4);
        assert_eq!(log.borrow().len(), 0);
        sched.advance(1);
        assert_eq!(log.borrow().len(), 1);
        sched.advance(10);
        assert_eq!(log.borrow().len(), 2);
        // final tick is 100ms out, not a repeat of the 10ms delay
        sched.advance(99);
        assert_eq!(log.borrow().len(), 2);
        sched.advance(1);
        assert_eq!(log.borrow().len(), 3);
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn stop_prevents_future_ticks() {
        let sched = ManualScheduler::new();
        let ticker = Ticker::new(sched.clone());
        let count = Rc::new(Cell::new(0u32));

        let seen = count.clone();
        ticker.start(Duration::from_millis(10), move || {
            seen.set(seen.get() + 1);
            Some(Duration::from_millis(10))
        });

        sched.advance(25);
        assert_eq!(count.get(), 2);
        ticker.stop();
        sched.advance(1000);
        assert_eq!(count.get(), 2);
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn restart_supersedes_previous_run() {
        let sched = ManualScheduler::new();
        let ticker = Ticker::new(sched.clone());
        let log = Rc::new(RefCell::new(String::new()));

        let first = log.clone();
        ticker.start(Duration::from_millis(10), move || {
            first.borrow_mut().push('a');
            Some(Duration::from_millis(10))
        });
        sched.advance(20);

        let second = log.clone();
        ticker.start(Duration::from_millis(10), move || {
            second.borrow_mut().push('b');
            Some(Duration::from_millis(10))
        });
        sched.advance(50);

        // no 'a' ever appears after the restart
        assert_eq!(&*log.borrow(), "aabbbbb");
    }

    #[test]
    fn dropping_ticker_cancels_pending_tick() {
        let sched = ManualScheduler::new();
        let count = Rc::new(Cell::new(0u32));

        let ticker = Ticker::new(sched.clone());
        let seen = count.clone();
        ticker.start(Duration::from_millis(10), move || {
            seen.set(seen.get() + 1);
            Some(Duration::from_millis(10))
        });
        sched.advance(15);
        assert_eq!(count.get(), 1);

        drop(ticker);
        sched.advance(1000);
        assert_eq!(count.get(), 1);
    }
}
