#![forbid(unsafe_code)]

//! Control boundary: messages in, effects out.
//!
//! Hosts translate their input events (marker clicks, the launch control,
//! carousel arrows, call-to-action buttons, frame ticks) into [`Msg`]
//! values and feed them to [`DeckApp::update`]. Side effects that belong
//! to external collaborators — today just opening the contact dialog —
//! come back as [`Effect`] values for the host to perform; the engine
//! never performs them itself.

use std::time::Duration;

use crate::carousel::{CarouselEngine, Direction, MeasureStrip};
use crate::deck::Deck;
use crate::nav::NavController;
use crate::stage::{Stage, StageDirty};

/// An input event at the engine boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Msg {
    /// The navigation marker for a slide index was pressed.
    MarkerPressed(usize),
    /// The first slide's launch control was pressed.
    LaunchPressed,
    /// The carousel's next control was pressed.
    CarouselNext,
    /// The carousel's previous control was pressed.
    CarouselPrev,
    /// A call-to-action control was pressed.
    CtaPressed,
    /// A frame tick with the elapsed time since the previous one.
    Tick(Duration),
}

/// An outward side effect the host must perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Effect {
    /// Open the (externally owned) contact dialog.
    OpenContact,
}

/// The launch control's destination: the slide after the opener.
const LAUNCH_TARGET: usize = 1;

/// Aggregate of the stage, the navigation controller, and the carousel.
#[derive(Debug)]
pub struct DeckApp<M> {
    stage: Stage,
    nav: NavController,
    carousel: CarouselEngine,
    strip: M,
}

impl<M: MeasureStrip> DeckApp<M> {
    /// Build an app over `deck` with `card_count` carousel cards and the
    /// host's strip measurement probe.
    pub fn new(deck: Deck, card_count: usize, strip: M) -> Self {
        let stage = Stage::new(&deck);
        Self {
            stage,
            nav: NavController::new(deck),
            carousel: CarouselEngine::new(card_count),
            strip,
        }
    }

    /// Route one message. Returns an effect when the host must act.
    pub fn update(&mut self, msg: Msg) -> Option<Effect> {
        match msg {
            Msg::MarkerPressed(index) => {
                self.nav.request_transition(&mut self.stage, index);
                None
            }
            Msg::LaunchPressed => {
                self.nav.request_transition(&mut self.stage, LAUNCH_TARGET);
                None
            }
            Msg::CarouselNext => {
                self.carousel.advance(Direction::Next, &self.strip);
                None
            }
            Msg::CarouselPrev => {
                self.carousel.advance(Direction::Previous, &self.strip);
                None
            }
            Msg::CtaPressed => Some(Effect::OpenContact),
            Msg::Tick(dt) => {
                self.nav.tick(&mut self.stage, dt);
                self.carousel.tick(&mut self.stage, dt);
                None
            }
        }
    }

    /// The visual-state mirror for the host to paint from.
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// Drain the stage's dirty bits.
    pub fn take_dirty(&mut self) -> StageDirty {
        self.stage.take_dirty()
    }

    /// The navigation state machine.
    pub fn nav(&self) -> &NavController {
        &self.nav
    }

    /// The carousel engine.
    pub fn carousel(&self) -> &CarouselEngine {
        &self.carousel
    }
}
