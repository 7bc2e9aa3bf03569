#![forbid(unsafe_code)]

//! Animation: easing curves, scalar tweens, and declarative timelines.
//!
//! Everything here is headless and clock-driven: callers advance time with
//! `tick(dt)` from their own event loop and read sampled values back. No
//! threads, no timers, no allocation during tick.

pub mod animation;
pub mod timeline;

pub use animation::{
    Clock, EasingFn, Tween, ease_in, ease_in_out, ease_out, ease_out_back, linear, sine_in_out,
};
pub use timeline::{Position, Property, Step, Timeline, TimelineEvent, Track};
