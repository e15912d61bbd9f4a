//! Deferred resize notifications.
//!
//! A notification passes through two host-managed suspension points:
//!
//! ```text
//! Idle -> AwaitingMicrotask -> AwaitingFrame -> Fired
//! ```
//!
//! Waiting for the microtask lets the current script finish its layout
//! changes; waiting for the frame puts delivery after layout and before paint.
//! Notifications queued in the same task usually land on the same frame, but
//! that is up to the host.
//!
//! Queued work holds the host weakly. The host owns its microtask queue, so a
//! strong handle in there would keep an undrained host alive forever. A
//! microtask that finds its host gone does nothing.

use std::cell::Cell;
use std::rc::{Rc, Weak};

use crate::host::EventLoopHost;

/// How many scheduled notifications sit at each suspension point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PendingNotifications {
    /// Scheduled, microtask not yet run.
    pub awaiting_microtask: usize,
    /// Microtask ran, frame callback not yet run.
    pub awaiting_frame: usize,
}

impl PendingNotifications {
    /// Nothing is in flight.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        self.awaiting_microtask == 0 && self.awaiting_frame == 0
    }
}

#[derive(Debug, Default)]
struct PhaseCounters {
    awaiting_microtask: Cell<usize>,
    awaiting_frame: Cell<usize>,
    fired: Cell<usize>,
}

impl PhaseCounters {
    fn microtask_queued(&self) {
        self.awaiting_microtask.set(self.awaiting_microtask.get() + 1);
    }

    fn microtask_dropped(&self) {
        self.awaiting_microtask
            .set(self.awaiting_microtask.get().saturating_sub(1));
    }

    fn frame_requested(&self) {
        self.awaiting_microtask
            .set(self.awaiting_microtask.get().saturating_sub(1));
        self.awaiting_frame.set(self.awaiting_frame.get() + 1);
    }

    fn fired(&self) {
        self.awaiting_frame
            .set(self.awaiting_frame.get().saturating_sub(1));
        self.fired.set(self.fired.get() + 1);
    }
}

/// Schedules callbacks on the microtask-then-animation-frame cadence.
///
/// Every call to [`schedule`](Self::schedule) fires exactly once. There is no
/// cancellation and no deduplication; callers that want one notification per
/// frame coalesce on their side.
pub struct NotificationScheduler<H: EventLoopHost + 'static> {
    host: Rc<H>,
    counters: Rc<PhaseCounters>,
}

impl<H: EventLoopHost + 'static> NotificationScheduler<H> {
    /// A scheduler deferring through `host`.
    #[must_use]
    pub fn new(host: Rc<H>) -> Self {
        Self {
            host,
            counters: Rc::new(PhaseCounters::default()),
        }
    }

    /// The host notifications are deferred through.
    #[must_use]
    pub const fn host(&self) -> &Rc<H> {
        &self.host
    }

    /// Queue `callback` to run on the animation frame after the next
    /// microtask checkpoint. Never runs it synchronously. A panic in
    /// `callback` is not caught.
    pub fn schedule<F>(&self, callback: F)
    where
        F: FnOnce() + 'static,
    {
        let host: Weak<H> = Rc::downgrade(&self.host);
        let counters = Rc::clone(&self.counters);
        counters.microtask_queued();
        #[cfg(feature = "notify-trace")]
        eprintln!("[NOTIFY] scheduled, awaiting microtask");

        self.host.queue_microtask(Box::new(move || {
            let Some(host) = host.upgrade() else {
                counters.microtask_dropped();
                return;
            };
            counters.frame_requested();
            let _request = host.request_animation_frame(Box::new(move |_timestamp| {
                counters.fired();
                #[cfg(feature = "notify-trace")]
                eprintln!("[NOTIFY] firing on frame at {_timestamp}ms");
                callback();
            }));
            #[cfg(feature = "notify-trace")]
            eprintln!("[NOTIFY] microtask ran, frame requested as {_request:?}");
        }));
    }

    /// Notifications scheduled but not yet fired, by phase.
    #[must_use]
    pub fn pending(&self) -> PendingNotifications {
        PendingNotifications {
            awaiting_microtask: self.counters.awaiting_microtask.get(),
            awaiting_frame: self.counters.awaiting_frame.get(),
        }
    }

    /// Total notifications delivered so far.
    #[must_use]
    pub fn fired(&self) -> usize {
        self.counters.fired.get()
    }
}

/// Run `callback` on the animation frame following the next microtask
/// checkpoint of `host`.
///
/// The bare form of [`NotificationScheduler::schedule`], without phase
/// bookkeeping.
pub fn queue_resize_observer<H, F>(host: &Rc<H>, callback: F)
where
    H: EventLoopHost + 'static,
    F: FnOnce() + 'static,
{
    let frame_host = Rc::downgrade(host);
    host.queue_microtask(Box::new(move || {
        if let Some(frame_host) = frame_host.upgrade() {
            let _request =
                frame_host.request_animation_frame(Box::new(move |_timestamp| callback()));
        }
    }));
}
