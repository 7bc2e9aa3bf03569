#![forbid(unsafe_code)]

//! skydeck public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports the animation and engine types and offers a lightweight
//! prelude for day-to-day usage.

use std::fmt;

// --- Animation re-exports --------------------------------------------------

pub use skydeck_anim::{
    Clock, EasingFn, Position, Property, Step, Timeline, TimelineEvent, Track, Tween, ease_in,
    ease_in_out, ease_out, ease_out_back, linear, sine_in_out,
};

// --- Engine re-exports -----------------------------------------------------

pub use skydeck_engine::{
    CarouselEngine, CarouselTuning, ContentPose, Deck, DeckApp, DeckBuilder, DeckError, Direction,
    Effect, MeasureStrip, MediaBinder, MediaVariant, Msg, NavController, PanelState, Slide, Stage,
    StageDirty, StageTarget, StripMeasurements, TransitionTuning, compute_next_offset,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for skydeck apps.
#[derive(Debug)]
pub enum Error {
    /// The slide registry could not be built.
    Deck(DeckError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deck(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<DeckError> for Error {
    fn from(err: DeckError) -> Self {
        Self::Deck(err)
    }
}

/// Standard result type for skydeck APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Deck, DeckApp, DeckBuilder, Direction, Effect, Error, MeasureStrip, MediaVariant, Msg,
        NavController, Result, Stage, StageDirty, StripMeasurements,
    };

    pub use crate::{anim, engine};
}

pub use skydeck_anim as anim;
pub use skydeck_engine as engine;
