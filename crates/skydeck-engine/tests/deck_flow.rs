//! End-to-end flows through the public engine API.

use std::time::Duration;

use skydeck_engine::{
    Deck, DeckApp, MeasureStrip, MediaVariant, Msg, NavController, Stage, StripMeasurements,
};

const FRAME: Duration = Duration::from_millis(16);

struct FixedStrip;

impl MeasureStrip for FixedStrip {
    fn measure(&self) -> Option<StripMeasurements> {
        Some(StripMeasurements {
            card_width: 350.0,
            gap: 30.0,
            container_width: 1200.0,
        })
    }
}

fn settle(app: &mut DeckApp<FixedStrip>) {
    for _ in 0..300 {
        app.update(Msg::Tick(FRAME));
    }
}

#[test]
fn transition_to_slide_one_end_to_end() {
    let mut app = DeckApp::new(Deck::with_slides(4).unwrap(), 5, FixedStrip);

    app.update(Msg::MarkerPressed(1));
    settle(&mut app);

    assert_eq!(app.nav().current_index(), 1);
    let stage = app.stage();
    assert!(stage.panel(1).unwrap().visible);
    assert!(!stage.panel(0).unwrap().visible);
    assert_eq!(stage.media(), MediaVariant::Featured);
    assert!(stage.marker_active(1));
    assert!(!stage.marker_active(0));
}

#[test]
fn exactly_one_marker_active_after_each_completed_transition() {
    let mut app = DeckApp::new(Deck::with_slides(4).unwrap(), 5, FixedStrip);

    for target in [2, 1, 3] {
        app.update(Msg::MarkerPressed(target));
        settle(&mut app);
        let active: Vec<usize> = (0..4).filter(|&i| app.stage().marker_active(i)).collect();
        assert_eq!(active, vec![target]);
    }
}

#[test]
fn request_during_transition_leaves_one_transition_in_flight() {
    let mut app = DeckApp::new(Deck::with_slides(4).unwrap(), 5, FixedStrip);

    app.update(Msg::MarkerPressed(1));
    app.update(Msg::Tick(FRAME));
    app.update(Msg::MarkerPressed(3));

    assert_eq!(app.nav().pending_target(), Some(1));
    assert_eq!(app.nav().current_index(), 0);

    settle(&mut app);
    assert_eq!(app.nav().current_index(), 1);
    // The dropped request left no trace once the first committed.
    assert!(!app.nav().is_transitioning());
}

#[test]
fn carousel_strides_then_wraps_while_deck_transitions() {
    let mut app = DeckApp::new(Deck::with_slides(4).unwrap(), 5, FixedStrip);

    app.update(Msg::MarkerPressed(2));
    app.update(Msg::CarouselNext);
    assert_eq!(app.carousel().scroll_offset(), -380.0);

    // Past 5*380 - 1200 = 700 of hidden strip: wrap to the start.
    app.update(Msg::CarouselNext);
    assert_eq!(app.carousel().scroll_offset(), 0.0);

    settle(&mut app);
    assert_eq!(app.nav().current_index(), 2);
    assert_eq!(app.stage().strip_translate_x(), 0.0);
}

#[test]
fn media_returns_to_standard_when_leaving_the_featured_slide() {
    let mut app = DeckApp::new(Deck::with_slides(4).unwrap(), 5, FixedStrip);

    app.update(Msg::MarkerPressed(1));
    settle(&mut app);
    assert_eq!(app.stage().media(), MediaVariant::Featured);

    app.update(Msg::MarkerPressed(3));
    // Request time, not completion time.
    assert_eq!(app.stage().media(), MediaVariant::Standard);
    settle(&mut app);
    assert_eq!(app.stage().media(), MediaVariant::Standard);
}

#[test]
fn bare_controller_flow_without_the_app_wrapper() {
    let deck = Deck::with_slides(3).unwrap();
    let mut stage = Stage::new(&deck);
    let mut nav = NavController::new(deck);

    nav.request_transition(&mut stage, 2);
    while nav.is_transitioning() {
        nav.tick(&mut stage, FRAME);
    }
    assert_eq!(nav.current_index(), 2);

    let visible: Vec<usize> = stage.visible_panels().collect();
    assert_eq!(visible, vec![2]);
}
