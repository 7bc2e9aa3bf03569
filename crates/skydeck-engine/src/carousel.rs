#![forbid(unsafe_code)]

//! Carousel engine: a horizontally scrolling strip of measured cards.
//!
//! The strip scrolls by one stride (card width plus gap) per advance.
//! Geometry is re-measured on every call through [`MeasureStrip`] because
//! layout may have changed since the last advance. Offsets are clamped at
//! the start and wrap back to the start past the last card's trailing
//! edge; the alternative hard-clamp at the end was considered and
//! rejected in favor of the loop-to-start feel.
//!
//! Unlike slide navigation there is deliberately no in-flight guard:
//! rapid advances compound on the committed offset while the strip's
//! tween retargets from its current sample, so state runs ahead of the
//! visual.
//!
//! # Failure Modes
//!
//! - Measurement unavailable, non-positive stride, zero-width container,
//!   or an empty strip: `advance` is a no-op.

use std::time::Duration;

use skydeck_anim::{EasingFn, Property, Tween, ease_out};

use crate::stage::{Stage, StageTarget};

/// Scroll direction for the card strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Next,
    Previous,
}

/// Runtime geometry of the strip, captured at advance time.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StripMeasurements {
    /// Rendered width of one card.
    pub card_width: f32,
    /// Gap between adjacent cards.
    pub gap: f32,
    /// Width of the strip's visible viewport.
    pub container_width: f32,
}

impl StripMeasurements {
    /// The scroll quantum: one card plus its gap.
    pub fn stride(&self) -> f32 {
        self.card_width + self.gap
    }
}

/// The host-side measurement seam. Queried on every advance.
pub trait MeasureStrip {
    /// Current strip geometry, or `None` when it cannot be measured.
    fn measure(&self) -> Option<StripMeasurements>;
}

/// Pure scroll arithmetic: one stride in `direction` from `offset`,
/// clamped at the start, wrapping to the start past the end.
///
/// Separated from the engine so the clamp/wrap policy is testable without
/// any animation or rendering environment.
pub fn compute_next_offset(
    offset: f32,
    item_count: usize,
    direction: Direction,
    measurements: &StripMeasurements,
) -> f32 {
    let stride = measurements.stride();
    let mut proposed = match direction {
        Direction::Next => offset - stride,
        Direction::Previous => offset + stride,
    };

    // Cannot scroll right past the start.
    if proposed > 0.0 {
        proposed = 0.0;
    }

    // Past the last card's trailing edge: wrap to the start rather than
    // clamping to the exact end.
    let total_width = item_count as f32 * stride;
    if -proposed > total_width - measurements.container_width {
        proposed = 0.0;
    }

    proposed
}

/// Timing for the strip's settle animation.
#[derive(Debug, Clone, Copy)]
pub struct CarouselTuning {
    pub duration: Duration,
    pub easing: EasingFn,
}

impl Default for CarouselTuning {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(500),
            easing: ease_out,
        }
    }
}

/// Owns the committed scroll offset and the strip's in-flight tween.
#[derive(Debug, Clone)]
pub struct CarouselEngine {
    item_count: usize,
    scroll_offset: f32,
    tween: Option<Tween>,
    tuning: CarouselTuning,
}

impl CarouselEngine {
    /// An engine over `item_count` cards, starting at offset 0.
    pub fn new(item_count: usize) -> Self {
        Self::with_tuning(item_count, CarouselTuning::default())
    }

    /// An engine with explicit animation tuning.
    pub fn with_tuning(item_count: usize, tuning: CarouselTuning) -> Self {
        Self {
            item_count,
            scroll_offset: 0.0,
            tween: None,
            tuning,
        }
    }

    /// The committed offset. Always ≤ 0; may be ahead of the visual tween.
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Number of cards in the strip.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Whether the strip tween is still settling.
    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Move one stride in `direction`, re-measuring first.
    ///
    /// Commits the new offset immediately and (re)targets the strip tween;
    /// there is no debounce, by design.
    pub fn advance(&mut self, direction: Direction, probe: &impl MeasureStrip) {
        let Some(measurements) = probe.measure() else {
            #[cfg(feature = "tracing")]
            tracing::debug!("carousel advance dropped: strip not measurable");
            return;
        };
        if self.item_count == 0
            || measurements.stride() <= 0.0
            || measurements.container_width <= 0.0
        {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                ?measurements,
                "carousel advance dropped: degenerate geometry"
            );
            return;
        }

        let previous = self.scroll_offset;
        let target = compute_next_offset(previous, self.item_count, direction, &measurements);
        self.scroll_offset = target;

        match &mut self.tween {
            // Mid-flight: keep the visual continuous by retargeting from
            // the current sample.
            Some(tween) => tween.retarget(target, self.tuning.duration),
            // Idle: the strip visually rests at the previous commit.
            None => {
                self.tween =
                    Some(Tween::new(previous, target, self.tuning.duration).easing(self.tuning.easing));
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(?direction, offset = target, "carousel advanced");
    }

    /// Advance the strip tween and write its sample to the stage.
    pub fn tick(&mut self, stage: &mut Stage, dt: Duration) {
        let Some(tween) = &mut self.tween else {
            return;
        };
        tween.tick(dt);
        stage.apply(StageTarget::Strip, Property::TranslateX, tween.value());
        if tween.is_complete() {
            self.tween = None;
        }
    }
}
