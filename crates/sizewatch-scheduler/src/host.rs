//! Scheduling primitives provided by the environment.
//!
//! [HTML § 8.1.7 Event loops](https://html.spec.whatwg.org/multipage/webappapis.html#event-loops)

/// A unit of work for the microtask queue.
pub type Microtask = Box<dyn FnOnce()>;

/// An animation frame callback. The argument is the frame timestamp in
/// milliseconds.
pub type FrameCallback = Box<dyn FnOnce(f64)>;

/// Handle returned by [`EventLoopHost::request_animation_frame`].
///
/// "The `requestAnimationFrame()` method ... returns a handle."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameRequestId(pub u64);

/// The two deferral points a frame-aligned notification passes through.
pub trait EventLoopHost {
    /// [§ 8.1.7.3 `queueMicrotask()`](https://html.spec.whatwg.org/multipage/timers-and-user-prompts.html#microtask-queuing)
    ///
    /// Run `task` after the currently executing script, before the next
    /// rendering opportunity, in FIFO order with other microtasks.
    fn queue_microtask(&self, task: Microtask);

    /// [§ 8.10.1 `requestAnimationFrame()`](https://html.spec.whatwg.org/multipage/imagebitmap-and-animations.html#dom-animationframeprovider-requestanimationframe)
    ///
    /// Run `callback` during the next frame's "run the animation frame
    /// callbacks" step, immediately before paint.
    fn request_animation_frame(&self, callback: FrameCallback) -> FrameRequestId;
}
