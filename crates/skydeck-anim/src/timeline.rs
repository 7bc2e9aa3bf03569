#![forbid(unsafe_code)]

//! Declarative property timelines.
//!
//! A [`Timeline`] is an ordered set of [`Step`]s placed on one shared time
//! axis. Each step drives one or more `(target, property)` tracks between
//! two values under a single clock. Placement supports appending, starting
//! with the previously added step, and starting relative to the timeline's
//! current end, which is what a cross-fade overlap needs.
//!
//! # Design
//!
//! Milestones are collected into an internal queue during `tick()` and
//! drained by the caller. This avoids closures (which compose poorly in
//! update-loop architectures) and keeps the API pure: the caller decides
//! what a completion means.
//!
//! # Invariants
//!
//! 1. `Started` fires at most once, after the first `tick()`.
//! 2. `Completed` fires at most once, when the last-ending step (repeats
//!    included) finishes. An empty timeline completes on its first tick.
//! 3. A finished track pins its end value; a not-yet-started track reports
//!    its start value.
//! 4. `drain_events()` clears the queue; events are not replayed.

use std::time::Duration;

use crate::animation::{Clock, EasingFn, linear};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A visual property a timeline track can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Property {
    Opacity,
    TranslateX,
    TranslateY,
    Scale,
}

/// Where a step lands on the time axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// At the timeline's current end (the default).
    Append,
    /// At the start of the most recently added step.
    WithPrevious,
    /// The given span before the timeline's current end (saturating at 0).
    BeforeEnd(Duration),
    /// At an absolute offset from the timeline's start.
    At(Duration),
}

/// One `(target, property)` value range driven by a step's clock.
#[derive(Debug, Clone, Copy)]
pub struct Track<T> {
    pub target: T,
    pub property: Property,
    pub from: f32,
    pub to: f32,
}

/// An event emitted by a [`Timeline`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineEvent {
    /// The timeline received its first tick.
    Started,
    /// Every step has finished.
    Completed,
}

// ---------------------------------------------------------------------------
// Step
// ---------------------------------------------------------------------------

/// A builder for one timeline step: shared duration, easing, and repeat
/// settings over any number of tracks.
#[derive(Debug, Clone)]
pub struct Step<T> {
    duration: Duration,
    easing: EasingFn,
    repeat: u32,
    yoyo: bool,
    tracks: Vec<Track<T>>,
}

impl<T> Step<T> {
    /// Create a step with the given duration and linear easing.
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            easing: linear,
            repeat: 0,
            yoyo: false,
            tracks: Vec::new(),
        }
    }

    /// Set the easing function (builder).
    #[must_use]
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    /// Set extra play-throughs (builder).
    #[must_use]
    pub fn repeat(mut self, repeat: u32) -> Self {
        self.repeat = repeat;
        self
    }

    /// Reverse on odd play-throughs (builder).
    #[must_use]
    pub fn yoyo(mut self) -> Self {
        self.yoyo = true;
        self
    }

    /// Add a track driving `property` on `target` from `from` to `to`.
    #[must_use]
    pub fn track(mut self, target: T, property: Property, from: f32, to: f32) -> Self {
        self.tracks.push(Track {
            target,
            property,
            from,
            to,
        });
        self
    }
}

#[derive(Debug, Clone)]
struct PlacedStep<T> {
    clock: Clock,
    tracks: Vec<Track<T>>,
}

// ---------------------------------------------------------------------------
// Timeline
// ---------------------------------------------------------------------------

/// An ordered set of property steps on a shared, tick-driven time axis.
#[derive(Debug, Clone)]
pub struct Timeline<T> {
    steps: Vec<PlacedStep<T>>,
    last_start: Duration,
    end: Duration,
    started_fired: bool,
    completed_fired: bool,
    events: Vec<TimelineEvent>,
}

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Timeline<T> {
    /// Create an empty timeline.
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            last_start: Duration::ZERO,
            end: Duration::ZERO,
            started_fired: false,
            completed_fired: false,
            events: Vec::new(),
        }
    }

    /// Place a step on the time axis.
    pub fn push(&mut self, step: Step<T>, position: Position) -> &mut Self {
        let start = match position {
            Position::Append => self.end,
            Position::WithPrevious => self.last_start,
            Position::BeforeEnd(span) => self.end.saturating_sub(span),
            Position::At(offset) => offset,
        };
        let mut clock = Clock::new(step.duration)
            .delay(start)
            .easing(step.easing)
            .repeat(step.repeat);
        if step.yoyo {
            clock = clock.yoyo();
        }
        self.last_start = start;
        self.end = self.end.max(clock.total());
        self.steps.push(PlacedStep {
            clock,
            tracks: step.tracks,
        });
        self
    }

    /// Number of placed steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the timeline has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Total span from the timeline's start to its last-ending step.
    pub fn duration(&self) -> Duration {
        self.end
    }

    /// Whether every step has finished. True for an empty timeline.
    pub fn is_complete(&self) -> bool {
        self.steps.iter().all(|step| step.clock.is_complete())
    }

    /// Advance every step's clock by `dt` and record milestone events.
    pub fn tick(&mut self, dt: Duration) {
        for step in &mut self.steps {
            step.clock.tick(dt);
        }
        if !self.started_fired {
            self.started_fired = true;
            self.events.push(TimelineEvent::Started);
        }
        if !self.completed_fired && self.is_complete() {
            self.completed_fired = true;
            self.events.push(TimelineEvent::Completed);
        }
    }

    /// Drain all pending events. Clears the event queue.
    pub fn drain_events(&mut self) -> Vec<TimelineEvent> {
        std::mem::take(&mut self.events)
    }

    /// Rewind every step and clear event tracking.
    pub fn reset(&mut self) {
        for step in &mut self.steps {
            step.clock.reset();
        }
        self.started_fired = false;
        self.completed_fired = false;
        self.events.clear();
    }
}

impl<T: Copy> Timeline<T> {
    /// Current value of every track, in placement order.
    ///
    /// Later steps on the same `(target, property)` pair are yielded later,
    /// so an in-order applier gives them the last word.
    pub fn sample(&self) -> impl Iterator<Item = (T, Property, f32)> + '_ {
        self.steps.iter().flat_map(|step| {
            let progress = step.clock.progress();
            step.tracks.iter().map(move |track| {
                let value = track.from + (track.to - track.from) * progress;
                (track.target, track.property, value)
            })
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
