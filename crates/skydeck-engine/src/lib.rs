#![forbid(unsafe_code)]

//! Engine: slide registry, stage model, navigation state machine, media
//! binding, carousel arithmetic, and the message boundary.

pub mod carousel;
pub mod control;
pub mod deck;
pub mod media;
pub mod nav;
pub mod stage;

pub use carousel::{
    CarouselEngine, CarouselTuning, Direction, MeasureStrip, StripMeasurements,
    compute_next_offset,
};
pub use control::{DeckApp, Effect, Msg};
pub use deck::{Deck, DeckBuilder, DeckError, Slide};
pub use media::{MediaBinder, MediaVariant};
pub use nav::{NavController, TransitionTuning};
pub use stage::{ContentPose, PanelState, Stage, StageDirty, StageTarget};
