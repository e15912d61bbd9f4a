//! A single-threaded event loop driven one phase at a time.
//!
//! Real hosts decide when microtask checkpoints and frames happen. This loop
//! leaves that to the caller:
//! 1. [`perform_microtask_checkpoint`](EventLoop::perform_microtask_checkpoint)
//!    drains the microtask queue.
//! 2. [`run_animation_frame`](EventLoop::run_animation_frame) runs the frame
//!    callbacks requested so far.
//!
//! No queue is borrowed while user code runs, so callbacks may queue more
//! work on the same loop.

use std::cell::{Cell, RefCell};
use std::collections::{HashSet, VecDeque};
use std::mem;

use crate::host::{EventLoopHost, FrameCallback, FrameRequestId, Microtask};

/// Deterministic [`EventLoopHost`].
#[derive(Default)]
pub struct EventLoop {
    microtasks: RefCell<VecDeque<Microtask>>,
    frame_callbacks: RefCell<Vec<(FrameRequestId, FrameCallback)>>,
    /// Ids cancelled while their frame is already running.
    cancelled: RefCell<HashSet<FrameRequestId>>,
    next_frame_request: Cell<u64>,
    frames_run: Cell<u64>,
}

impl EventLoop {
    /// Create a new, empty event loop.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// [§ 8.1.7.3 Perform a microtask checkpoint](https://html.spec.whatwg.org/multipage/webappapis.html#perform-a-microtask-checkpoint)
    ///
    /// "While the event loop's microtask queue is not empty: ... Run
    /// `oldestMicrotask`." Microtasks queued by a running microtask run in the
    /// same checkpoint. Returns how many ran.
    #[must_use = "the count is how many microtasks ran"]
    pub fn perform_microtask_checkpoint(&self) -> usize {
        let mut ran = 0;
        loop {
            let next = self.microtasks.borrow_mut().pop_front();
            let Some(task) = next else {
                break;
            };
            task();
            ran += 1;
        }
        ran
    }

    /// [§ 8.10.1 Run the animation frame callbacks](https://html.spec.whatwg.org/multipage/imagebitmap-and-animations.html#run-the-animation-frame-callbacks)
    ///
    /// "Let callbacks be the map of animation frame callbacks ... For each
    /// handle in `callbackHandles`, if handle exists in callbacks: ... invoke
    /// the callback." Only callbacks requested before this frame began run;
    /// requests made during the frame wait for the next one. A microtask
    /// checkpoint follows each callback. Returns how many callbacks ran.
    #[must_use = "the count is how many frame callbacks ran"]
    pub fn run_animation_frame(&self, timestamp: f64) -> usize {
        self.frames_run.set(self.frames_run.get() + 1);
        let callbacks = mem::take(&mut *self.frame_callbacks.borrow_mut());

        let mut ran = 0;
        for (id, callback) in callbacks {
            if self.cancelled.borrow_mut().remove(&id) {
                continue;
            }
            callback(timestamp);
            ran += 1;
            let _microtasks = self.perform_microtask_checkpoint();
        }
        self.cancelled.borrow_mut().clear();
        ran
    }

    /// [§ 8.10.1 `cancelAnimationFrame()`](https://html.spec.whatwg.org/multipage/imagebitmap-and-animations.html#animationframeprovider-cancelanimationframe)
    ///
    /// "Remove callbacks[handle]." Unknown or already-run ids are ignored.
    pub fn cancel_animation_frame(&self, id: FrameRequestId) {
        let mut pending = self.frame_callbacks.borrow_mut();
        let before = pending.len();
        pending.retain(|(pending_id, _)| *pending_id != id);
        if pending.len() == before {
            // Possibly taken by the frame that is running right now.
            let _newly_cancelled = self.cancelled.borrow_mut().insert(id);
        }
    }

    /// Number of queued microtasks.
    #[must_use]
    pub fn pending_microtasks(&self) -> usize {
        self.microtasks.borrow().len()
    }

    /// Number of frame callbacks waiting for the next frame.
    #[must_use]
    pub fn pending_frame_callbacks(&self) -> usize {
        self.frame_callbacks.borrow().len()
    }

    /// Whether anything is waiting to run.
    #[must_use]
    pub fn has_pending_work(&self) -> bool {
        self.pending_microtasks() > 0 || self.pending_frame_callbacks() > 0
    }

    /// Number of frames run so far.
    #[must_use]
    pub const fn frame_count(&self) -> u64 {
        self.frames_run.get()
    }
}

impl EventLoopHost for EventLoop {
    fn queue_microtask(&self, task: Microtask) {
        self.microtasks.borrow_mut().push_back(task);
    }

    fn request_animation_frame(&self, callback: FrameCallback) -> FrameRequestId {
        let id = FrameRequestId(self.next_frame_request.get() + 1);
        self.next_frame_request.set(id.0);
        self.frame_callbacks.borrow_mut().push((id, callback));
        id
    }
}
