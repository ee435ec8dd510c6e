//! Timed content rotation: the scheduler-driven state machines behind the
//! typing animations. Each machine advances one unit of work per tick and
//! reports the delay until its next tick, so a single cancellable one-shot
//! timer can drive reveals, pauses, and deletions at different speeds.

mod cycler;
mod sched;
mod typewriter;

pub use cycler::{CyclePhase, RoleCycler, TYPE_INTERVAL};
pub use sched::{DomScheduler, Scheduler, Ticker};
pub use typewriter::{Typewriter, BOOT_DELAY};
