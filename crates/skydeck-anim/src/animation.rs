#![forbid(unsafe_code)]

//! Easing curves and scalar tweens.
//!
//! Time is tracked as [`Duration`] internally for precise accumulation
//! (no floating-point drift) and accurate overshoot reporting.
//!
//! # Invariants
//!
//! 1. Ticking past completion is safe and pins the final value.
//! 2. A zero duration is clamped to a non-zero minimum; no division by zero.
//! 3. With `yoyo`, odd play-throughs run the curve in reverse, so a tween
//!    with an odd number of reversed plays ends back at its start value.

use std::time::Duration;

// ---------------------------------------------------------------------------
// Easing functions
// ---------------------------------------------------------------------------

/// Easing function signature: maps `t` in [0, 1] to an eased progress value.
///
/// All curves except [`ease_out_back`] stay within [0, 1].
pub type EasingFn = fn(f32) -> f32;

/// Identity easing (constant velocity).
#[inline]
pub fn linear(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// Quadratic ease-in (slow start).
#[inline]
pub fn ease_in(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t
}

/// Quadratic ease-out (slow end).
#[inline]
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Quadratic ease-in-out (slow start and end).
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Sinusoidal ease-in-out (gentler than the quadratic variant).
#[inline]
pub fn sine_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    -((std::f32::consts::PI * t).cos() - 1.0) / 2.0
}

/// Back ease-out: overshoots past 1.0 mid-curve, then settles at exactly 1.0.
///
/// This is the pronounced "arrival" curve used for incoming slide content.
/// Unlike every other curve in this module, its output exceeds 1.0 for part
/// of the run; callers interpolating positions get a bounce-like finish.
#[inline]
pub fn ease_out_back(t: f32) -> f32 {
    // Overshoot constant for a visibly springy settle.
    const C1: f32 = 1.70158 * 1.7;
    const C3: f32 = C1 + 1.0;
    let t = t.clamp(0.0, 1.0);
    let u = t - 1.0;
    1.0 + C3 * u * u * u + C1 * u * u
}

// ---------------------------------------------------------------------------
// Clock
// ---------------------------------------------------------------------------

/// A delay/duration/repeat/yoyo play-head producing eased progress.
///
/// The clock owns everything about *when* and *how fast*; pairing it with a
/// value range is [`Tween`]'s job. Repeat counts extra play-throughs beyond
/// the first: `repeat = 1` plays the curve twice. With
/// `yoyo`, every odd play-through runs in reverse.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    delay: Duration,
    duration: Duration,
    repeat: u32,
    yoyo: bool,
    easing: EasingFn,
    elapsed: Duration,
}

impl Clock {
    /// Create a clock with the given play duration, no delay, no repeats,
    /// and linear easing.
    pub fn new(duration: Duration) -> Self {
        Self {
            delay: Duration::ZERO,
            duration: if duration.is_zero() {
                Duration::from_nanos(1)
            } else {
                duration
            },
            repeat: 0,
            yoyo: false,
            easing: linear,
            elapsed: Duration::ZERO,
        }
    }

    /// Set the start delay (builder).
    #[must_use]
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Set the easing function (builder).
    #[must_use]
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    /// Set the number of extra play-throughs (builder).
    #[must_use]
    pub fn repeat(mut self, repeat: u32) -> Self {
        self.repeat = repeat;
        self
    }

    /// Reverse direction on every odd play-through (builder).
    #[must_use]
    pub fn yoyo(mut self) -> Self {
        self.yoyo = true;
        self
    }

    fn plays(&self) -> u32 {
        self.repeat.saturating_add(1)
    }

    /// Total span from first tick to completion, delay included.
    pub fn total(&self) -> Duration {
        self.delay.saturating_add(self.duration.saturating_mul(self.plays()))
    }

    /// Advance the clock by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    /// Whether the delay has elapsed and the curve is playing (or done).
    pub fn has_started(&self) -> bool {
        self.elapsed >= self.delay
    }

    /// Whether all play-throughs have finished.
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.total()
    }

    /// Time elapsed past completion.
    pub fn overshoot(&self) -> Duration {
        self.elapsed.saturating_sub(self.total())
    }

    /// Rewind to the initial state.
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    /// Direction-folded linear progress in [0, 1], before easing.
    fn folded(&self) -> f32 {
        let active = self.elapsed.saturating_sub(self.delay);
        let dur = self.duration.as_secs_f64();
        let (cycle, t) = if self.is_complete() {
            (self.plays() - 1, 1.0f32)
        } else {
            let secs = active.as_secs_f64();
            let cycle = ((secs / dur) as u32).min(self.plays() - 1);
            let local = secs - f64::from(cycle) * dur;
            (cycle, (local / dur).clamp(0.0, 1.0) as f32)
        };
        if self.yoyo && cycle % 2 == 1 { 1.0 - t } else { t }
    }

    /// Eased progress. Stays in [0, 1] for bounded curves; may exceed 1.0
    /// for overshooting curves such as [`ease_out_back`].
    pub fn progress(&self) -> f32 {
        (self.easing)(self.folded())
    }
}

// ---------------------------------------------------------------------------
// Tween
// ---------------------------------------------------------------------------

/// Scalar interpolation `from → to` driven by a [`Clock`].
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    clock: Clock,
    from: f32,
    to: f32,
}

impl Tween {
    /// Create a tween from `from` to `to` over `duration`, linear easing.
    pub fn new(from: f32, to: f32, duration: Duration) -> Self {
        Self {
            clock: Clock::new(duration),
            from,
            to,
        }
    }

    /// Set the easing function (builder).
    #[must_use]
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.clock = self.clock.easing(easing);
        self
    }

    /// Set the start delay (builder).
    #[must_use]
    pub fn delay(mut self, delay: Duration) -> Self {
        self.clock = self.clock.delay(delay);
        self
    }

    /// Set extra play-throughs (builder).
    #[must_use]
    pub fn repeat(mut self, repeat: u32) -> Self {
        self.clock = self.clock.repeat(repeat);
        self
    }

    /// Reverse on odd play-throughs (builder).
    #[must_use]
    pub fn yoyo(mut self) -> Self {
        self.clock = self.clock.yoyo();
        self
    }

    /// Advance by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        self.clock.tick(dt);
    }

    /// Whether the tween has finished all play-throughs.
    pub fn is_complete(&self) -> bool {
        self.clock.is_complete()
    }

    /// Current interpolated value.
    pub fn value(&self) -> f32 {
        self.from + (self.to - self.from) * self.clock.progress()
    }

    /// Time elapsed past completion.
    pub fn overshoot(&self) -> Duration {
        self.clock.overshoot()
    }

    /// Rewind to the initial state.
    pub fn reset(&mut self) {
        self.clock.reset();
    }

    /// Redirect toward a new target, starting from the current sample.
    ///
    /// The clock restarts; easing, repeat, and yoyo settings are kept.
    pub fn retarget(&mut self, to: f32, duration: Duration) {
        self.from = self.value();
        self.to = to;
        let mut clock = Clock::new(duration)
            .easing(self.clock.easing)
            .repeat(self.clock.repeat);
        if self.clock.yoyo {
            clock = clock.yoyo();
        }
        self.clock = clock;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const MS_100: Duration = Duration::from_millis(100);
    const MS_250: Duration = Duration::from_millis(250);
    const MS_500: Duration = Duration::from_millis(500);
    const SEC_1: Duration = Duration::from_secs(1);

    // ---- Easing tests ----

    #[test]
    fn easing_endpoints() {
        for f in [linear, ease_in, ease_out, ease_in_out, sine_in_out, ease_out_back] {
            assert!((f(0.0) - 0.0).abs() < 1e-5);
            assert!((f(1.0) - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn easing_clamps_input() {
        assert!((linear(-1.0) - 0.0).abs() < f32::EPSILON);
        assert!((linear(2.0) - 1.0).abs() < f32::EPSILON);
        assert!((ease_in(-0.5) - 0.0).abs() < f32::EPSILON);
        assert!((ease_out(1.5) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn ease_in_slower_start() {
        assert!(ease_in(0.5) < linear(0.5));
    }

    #[test]
    fn ease_out_faster_start() {
        assert!(ease_out(0.5) > linear(0.5));
    }

    #[test]
    fn sine_in_out_midpoint() {
        assert!((sine_in_out(0.5) - 0.5).abs() < 0.01);
    }

    #[test]
    fn ease_out_back_overshoots_then_settles() {
        let peak = (0..=100)
            .map(|i| ease_out_back(i as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0, "expected overshoot past 1.0, peak = {peak}");
        assert!((ease_out_back(1.0) - 1.0).abs() < 1e-5);
    }

    // ---- Clock tests ----

    #[test]
    fn clock_starts_at_zero() {
        let clock = Clock::new(SEC_1);
        assert!((clock.progress() - 0.0).abs() < f32::EPSILON);
        assert!(!clock.is_complete());
    }

    #[test]
    fn clock_completes_after_duration() {
        let mut clock = Clock::new(SEC_1);
        clock.tick(SEC_1);
        assert!(clock.is_complete());
        assert!((clock.progress() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn clock_midpoint_linear() {
        let mut clock = Clock::new(SEC_1);
        clock.tick(MS_500);
        assert!((clock.progress() - 0.5).abs() < 0.01);
    }

    #[test]
    fn clock_delay_holds_at_zero() {
        let mut clock = Clock::new(MS_500).delay(MS_500);
        clock.tick(MS_250);
        assert!(!clock.has_started());
        assert!((clock.progress() - 0.0).abs() < f32::EPSILON);

        clock.tick(MS_500);
        assert!(clock.has_started());
        assert!((clock.progress() - 0.5).abs() < 0.01);
    }

    #[test]
    fn clock_repeat_extends_total() {
        let clock = Clock::new(MS_500).repeat(1);
        assert_eq!(clock.total(), SEC_1);
    }

    #[test]
    fn clock_yoyo_returns_to_start() {
        let mut clock = Clock::new(MS_500).repeat(1).yoyo();
        clock.tick(MS_250);
        assert!((clock.progress() - 0.5).abs() < 0.01);

        clock.tick(MS_500); // Into the reversed play-through.
        assert!((clock.progress() - 0.5).abs() < 0.01);

        clock.tick(MS_500); // Done: ends where it began.
        assert!(clock.is_complete());
        assert!((clock.progress() - 0.0).abs() < f32::EPSILON);
    }

    #[test]
    fn clock_without_yoyo_ends_at_one() {
        let mut clock = Clock::new(MS_500).repeat(1);
        clock.tick(SEC_1);
        assert!(clock.is_complete());
        assert!((clock.progress() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn clock_zero_duration_is_safe() {
        let mut clock = Clock::new(Duration::ZERO);
        clock.tick(Duration::from_millis(16));
        assert!(clock.is_complete());
    }

    #[test]
    fn clock_overshoot() {
        let mut clock = Clock::new(MS_100);
        clock.tick(MS_500);
        assert_eq!(clock.overshoot(), Duration::from_millis(400));
    }

    #[test]
    fn clock_reset() {
        let mut clock = Clock::new(MS_100);
        clock.tick(SEC_1);
        clock.reset();
        assert!(!clock.is_complete());
        assert!((clock.progress() - 0.0).abs() < f32::EPSILON);
    }

    // ---- Tween tests ----

    #[test]
    fn tween_starts_at_from() {
        let tween = Tween::new(10.0, 20.0, SEC_1);
        assert!((tween.value() - 10.0).abs() < f32::EPSILON);
    }

    #[test]
    fn tween_ends_at_to() {
        let mut tween = Tween::new(10.0, 20.0, SEC_1);
        tween.tick(SEC_1);
        assert!((tween.value() - 20.0).abs() < f32::EPSILON);
    }

    #[test]
    fn tween_negative_range() {
        let mut tween = Tween::new(0.0, -380.0, MS_500);
        tween.tick(MS_500);
        assert!((tween.value() + 380.0).abs() < f32::EPSILON);
    }

    #[test]
    fn tween_pins_after_completion() {
        let mut tween = Tween::new(0.0, 1.0, MS_100);
        tween.tick(SEC_1);
        tween.tick(SEC_1);
        assert!((tween.value() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn tween_yoyo_repeat_ends_at_from() {
        // The backdrop pulse: scale up, come back, carry no state.
        let mut tween = Tween::new(1.0, 1.05, MS_500).repeat(1).yoyo().easing(sine_in_out);
        tween.tick(MS_500);
        assert!(tween.value() > 1.04);
        tween.tick(MS_500);
        assert!(tween.is_complete());
        assert!((tween.value() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn tween_retarget_continues_from_sample() {
        let mut tween = Tween::new(0.0, -380.0, SEC_1);
        tween.tick(MS_500);
        let mid = tween.value();
        tween.retarget(-760.0, MS_500);
        assert!((tween.value() - mid).abs() < f32::EPSILON);
        tween.tick(MS_500);
        assert!((tween.value() + 760.0).abs() < f32::EPSILON);
    }

    #[test]
    fn tween_with_back_easing_overshoots_target() {
        let mut tween = Tween::new(50.0, 0.0, SEC_1).easing(ease_out_back);
        let mut min = f32::MAX;
        for _ in 0..100 {
            tween.tick(Duration::from_millis(10));
            min = min.min(tween.value());
        }
        assert!(min < 0.0, "expected overshoot below target, min = {min}");
        assert!((tween.value() - 0.0).abs() < 1e-4);
    }

    // ---- Property tests ----

    proptest! {
        #[test]
        fn bounded_easings_stay_in_range(t in -2.0f32..3.0) {
            for f in [linear, ease_in, ease_out, ease_in_out, sine_in_out] {
                let v = f(t);
                prop_assert!((0.0..=1.0).contains(&v));
            }
        }

        #[test]
        fn clock_progress_bounded_for_linear(
            dur_ms in 1u64..5_000,
            ticks in proptest::collection::vec(0u64..200, 0..50),
        ) {
            let mut clock = Clock::new(Duration::from_millis(dur_ms));
            for t in ticks {
                clock.tick(Duration::from_millis(t));
                let p = clock.progress();
                prop_assert!((0.0..=1.0).contains(&p));
            }
        }
    }
}
