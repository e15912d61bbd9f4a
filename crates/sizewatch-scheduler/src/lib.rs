//! Frame-aligned notification scheduling for sizewatch.
//!
//! # Scope
//!
//! - **Host seam** ([`EventLoopHost`]) for the two primitives notifications
//!   need: queueing a microtask and requesting an animation frame
//! - **Deferred notifications** ([`NotificationScheduler`]): run a callback
//!   after the current microtask queue drains, then on the next frame
//! - **A deterministic event loop** ([`EventLoop`]) that is driven phase by
//!   phase instead of by real time
//!
//! Everything here is single-threaded; callbacks are `!Send` closures.

/// Deterministic single-threaded event loop.
pub mod event_loop;
/// The scheduling primitives a host provides.
pub mod host;
/// Two-phase deferred notifications.
pub mod notify;

pub use event_loop::EventLoop;
pub use host::{EventLoopHost, FrameCallback, FrameRequestId, Microtask};
pub use notify::{NotificationScheduler, PendingNotifications, queue_resize_observer};
