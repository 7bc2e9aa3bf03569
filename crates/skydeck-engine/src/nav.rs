#![forbid(unsafe_code)]

//! Slide navigation state machine.
//!
//! One controller owns the authoritative active-slide index and the single
//! in-flight transition. All slide changes go through the guarded
//! [`NavController::request_transition`]; there is no direct index
//! mutation, which is what keeps the at-most-one-in-flight invariant.
//!
//! # States
//!
//! Idle (no pending transition) and Transitioning (a timeline is
//! animating). Requests that arrive while Transitioning are dropped, not
//! queued — a deliberate debounce against rapid re-clicks, not an error.
//! There is no cancellation primitive for an in-flight transition.
//!
//! # Invariants
//!
//! 1. At most one transition is in flight.
//! 2. `current_index` changes only when a transition completes, never
//!    mid-flight.
//! 3. Hiding the outgoing panel and committing the index happen in the
//!    same tick, so no request can observe one without the other.
//!
//! The media swap runs at request time while the index commits at
//! completion time. That skew is the observed behavior being modeled;
//! do not "fix" it into synchrony.

use std::time::Duration;

use skydeck_anim::{
    Position, Property, Step, Timeline, TimelineEvent, ease_in, ease_out_back, sine_in_out,
};

use crate::deck::Deck;
use crate::media::MediaBinder;
use crate::stage::{ContentPose, Stage, StageTarget};

/// Timing and geometry constants for the slide transition choreography.
#[derive(Debug, Clone, Copy)]
pub struct TransitionTuning {
    /// Outgoing content fade/rise duration.
    pub content_exit: Duration,
    /// Container cross-fade duration (also the backdrop pulse's half-span).
    pub container_fade: Duration,
    /// Incoming content settle duration.
    pub content_enter: Duration,
    /// How far before the timeline's end the incoming content starts.
    pub enter_overlap: Duration,
    /// Vertical displacement of content while transparent.
    pub content_rise: f32,
    /// Peak backdrop scale during the ambient pulse.
    pub backdrop_pulse: f32,
}

impl Default for TransitionTuning {
    fn default() -> Self {
        Self {
            content_exit: Duration::from_millis(500),
            container_fade: Duration::from_millis(500),
            content_enter: Duration::from_millis(800),
            enter_overlap: Duration::from_millis(300),
            content_rise: 50.0,
            backdrop_pulse: 1.05,
        }
    }
}

#[derive(Debug, Clone)]
struct Pending {
    to: usize,
    timeline: Timeline<StageTarget>,
}

/// Owner of the active-slide index and the in-flight transition.
#[derive(Debug, Clone)]
pub struct NavController {
    deck: Deck,
    binder: MediaBinder,
    tuning: TransitionTuning,
    current: usize,
    pending: Option<Pending>,
}

impl NavController {
    /// A controller over `deck`, starting Idle on slide 0.
    pub fn new(deck: Deck) -> Self {
        Self {
            deck,
            binder: MediaBinder::default(),
            tuning: TransitionTuning::default(),
            current: 0,
            pending: None,
        }
    }

    /// Use a non-default media policy (builder).
    #[must_use]
    pub fn with_binder(mut self, binder: MediaBinder) -> Self {
        self.binder = binder;
        self
    }

    /// Use non-default transition timing (builder).
    #[must_use]
    pub fn with_tuning(mut self, tuning: TransitionTuning) -> Self {
        self.tuning = tuning;
        self
    }

    /// The authoritative active slide index.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Whether a transition is in flight.
    pub fn is_transitioning(&self) -> bool {
        self.pending.is_some()
    }

    /// The in-flight transition's destination, if any.
    pub fn pending_target(&self) -> Option<usize> {
        self.pending.as_ref().map(|pending| pending.to)
    }

    /// The slide registry.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Request a transition to `target`.
    ///
    /// Silently dropped when `target` is out of range, equals the current
    /// index, or a transition is already in flight. On accept: the target
    /// marker activates immediately, both panels become visible for the
    /// cross-fade window, the media swap runs now, and the transition
    /// timeline starts.
    pub fn request_transition(&mut self, stage: &mut Stage, target: usize) {
        if self.pending.is_some() {
            #[cfg(feature = "tracing")]
            tracing::debug!(index = target, "transition dropped: already transitioning");
            return;
        }
        if !self.deck.contains(target) {
            #[cfg(feature = "tracing")]
            tracing::debug!(index = target, "transition dropped: out of range");
            return;
        }
        if target == self.current {
            return;
        }

        // Marker feedback is not gated on the animation.
        stage.set_marker_active(target);

        // Both panels stay visible during the cross-fade window; the
        // incoming one starts transparent with its content displaced.
        stage.set_panel_visible(target, true);
        stage.set_panel_opacity(target, 0.0);
        if self.deck.slide(target).is_some_and(|slide| slide.has_content()) {
            stage.set_content_pose(
                target,
                ContentPose {
                    opacity: 0.0,
                    offset_y: self.tuning.content_rise,
                },
            );
        }

        // Media swap at request time, not completion time.
        self.binder.apply(stage, target);

        let timeline = self.build_timeline(self.current, target);
        self.pending = Some(Pending {
            to: target,
            timeline,
        });

        #[cfg(feature = "tracing")]
        tracing::debug!(from = self.current, to = target, "transition accepted");
    }

    /// Advance the in-flight transition, applying sampled values to the
    /// stage. On completion the outgoing panel is hidden and the index
    /// committed within this same call.
    pub fn tick(&mut self, stage: &mut Stage, dt: Duration) {
        let Some(pending) = self.pending.as_mut() else {
            return;
        };

        pending.timeline.tick(dt);
        for (target, property, value) in pending.timeline.sample() {
            stage.apply(target, property, value);
        }

        if pending
            .timeline
            .drain_events()
            .contains(&TimelineEvent::Completed)
        {
            let to = pending.to;
            // Hiding the outgoing panel and moving the index must not be
            // separable; a request landing between them would flash.
            stage.set_panel_visible(self.current, false);
            self.current = to;
            self.pending = None;

            #[cfg(feature = "tracing")]
            tracing::debug!(current = to, "transition committed");
        }
    }

    fn build_timeline(&self, from: usize, to: usize) -> Timeline<StageTarget> {
        let tuning = &self.tuning;
        let mut timeline = Timeline::new();

        if self.deck.slide(from).is_some_and(|slide| slide.has_content()) {
            timeline.push(
                Step::new(tuning.content_exit)
                    .easing(ease_in)
                    .track(
                        StageTarget::Content(from),
                        Property::TranslateY,
                        0.0,
                        -tuning.content_rise,
                    )
                    .track(StageTarget::Content(from), Property::Opacity, 1.0, 0.0),
                Position::Append,
            );
        }

        // Ambient backdrop pulse: grow and return, carrying no state.
        timeline.push(
            Step::new(tuning.container_fade)
                .easing(sine_in_out)
                .repeat(1)
                .yoyo()
                .track(StageTarget::Backdrop, Property::Scale, 1.0, tuning.backdrop_pulse),
            Position::WithPrevious,
        );

        timeline.push(
            Step::new(tuning.container_fade).track(
                StageTarget::Panel(from),
                Property::Opacity,
                1.0,
                0.0,
            ),
            Position::WithPrevious,
        );

        timeline.push(
            Step::new(tuning.container_fade).track(
                StageTarget::Panel(to),
                Property::Opacity,
                0.0,
                1.0,
            ),
            Position::Append,
        );

        if self.deck.slide(to).is_some_and(|slide| slide.has_content()) {
            timeline.push(
                Step::new(tuning.content_enter)
                    .easing(ease_out_back)
                    .track(
                        StageTarget::Content(to),
                        Property::TranslateY,
                        tuning.content_rise,
                        0.0,
                    )
                    .track(StageTarget::Content(to), Property::Opacity, 0.0, 1.0),
                Position::BeforeEnd(tuning.enter_overlap),
            );
        }

        timeline
    }
}
