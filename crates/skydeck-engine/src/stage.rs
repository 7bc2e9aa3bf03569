#![forbid(unsafe_code)]

//! Stage model: the headless mirror of everything the host paints.
//!
//! The stage holds per-slide panel visibility and opacity, content poses,
//! navigation marker flags, the backdrop scale, the two media elements'
//! visibility, and the card strip's horizontal translation. Animation code
//! writes into it through [`Stage::apply`]; hosts read it back and repaint
//! the regions named by the drained [`StageDirty`] bits.
//!
//! # Invariants
//!
//! 1. Exactly one navigation marker is active at any time.
//! 2. Exactly one media element is visible at any time.
//! 3. Applying a value to a missing target or a mismatched property does
//!    nothing; it is not an error.

use bitflags::bitflags;

use skydeck_anim::Property;

use crate::deck::Deck;
use crate::media::MediaVariant;

/// An element the transition timeline can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StageTarget {
    /// A slide's visual container.
    Panel(usize),
    /// A slide's content sub-element.
    Content(usize),
    /// The shared global backdrop.
    Backdrop,
    /// The carousel card strip.
    Strip,
}

bitflags! {
    /// Regions whose state changed since the host last drained them.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct StageDirty: u8 {
        const PANELS   = 1 << 0;
        const MARKERS  = 1 << 1;
        const BACKDROP = 1 << 2;
        const MEDIA    = 1 << 3;
        const STRIP    = 1 << 4;
    }
}

/// Pose of a slide's content sub-element.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentPose {
    pub opacity: f32,
    pub offset_y: f32,
}

impl Default for ContentPose {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            offset_y: 0.0,
        }
    }
}

/// Visual state of one slide's container.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PanelState {
    pub visible: bool,
    pub opacity: f32,
    /// `None` for slides without a content sub-element.
    pub content: Option<ContentPose>,
}

/// The headless visual-state mirror.
#[derive(Debug, Clone)]
pub struct Stage {
    panels: Vec<PanelState>,
    markers: Vec<bool>,
    backdrop_scale: f32,
    media: MediaVariant,
    strip_translate_x: f32,
    dirty: StageDirty,
}

impl Stage {
    /// Build a stage for `deck`: slide 0 visible and marked, the standard
    /// media element showing, everything at rest.
    pub fn new(deck: &Deck) -> Self {
        let panels = deck
            .iter()
            .map(|slide| PanelState {
                visible: slide.index() == 0,
                opacity: 1.0,
                content: slide.has_content().then(ContentPose::default),
            })
            .collect();
        let mut markers = vec![false; deck.len()];
        markers[0] = true;
        Self {
            panels,
            markers,
            backdrop_scale: 1.0,
            media: MediaVariant::Standard,
            strip_translate_x: 0.0,
            dirty: StageDirty::all(),
        }
    }

    // --- Timeline routing --------------------------------------------------

    /// Route a sampled timeline value to its element. Unknown targets and
    /// mismatched properties are ignored.
    pub fn apply(&mut self, target: StageTarget, property: Property, value: f32) {
        match (target, property) {
            (StageTarget::Panel(i), Property::Opacity) => {
                if let Some(panel) = self.panels.get_mut(i)
                    && panel.opacity != value
                {
                    panel.opacity = value;
                    self.dirty |= StageDirty::PANELS;
                }
            }
            (StageTarget::Content(i), Property::Opacity) => {
                if let Some(pose) = self.content_mut(i)
                    && pose.opacity != value
                {
                    pose.opacity = value;
                    self.dirty |= StageDirty::PANELS;
                }
            }
            (StageTarget::Content(i), Property::TranslateY) => {
                if let Some(pose) = self.content_mut(i)
                    && pose.offset_y != value
                {
                    pose.offset_y = value;
                    self.dirty |= StageDirty::PANELS;
                }
            }
            (StageTarget::Backdrop, Property::Scale) => {
                if self.backdrop_scale != value {
                    self.backdrop_scale = value;
                    self.dirty |= StageDirty::BACKDROP;
                }
            }
            (StageTarget::Strip, Property::TranslateX) => {
                if self.strip_translate_x != value {
                    self.strip_translate_x = value;
                    self.dirty |= StageDirty::STRIP;
                }
            }
            _ => {}
        }
    }

    fn content_mut(&mut self, index: usize) -> Option<&mut ContentPose> {
        self.panels.get_mut(index)?.content.as_mut()
    }

    // --- Direct setters ----------------------------------------------------

    /// Show or hide a slide's container. Out-of-range indices are ignored.
    pub fn set_panel_visible(&mut self, index: usize, visible: bool) {
        if let Some(panel) = self.panels.get_mut(index)
            && panel.visible != visible
        {
            panel.visible = visible;
            self.dirty |= StageDirty::PANELS;
        }
    }

    /// Preset a panel's opacity (used to stage an incoming slide).
    pub fn set_panel_opacity(&mut self, index: usize, opacity: f32) {
        self.apply(StageTarget::Panel(index), Property::Opacity, opacity);
    }

    /// Preset a content pose (used to stage incoming content). No-op for
    /// contentless slides.
    pub fn set_content_pose(&mut self, index: usize, pose: ContentPose) {
        if let Some(existing) = self.content_mut(index)
            && *existing != pose
        {
            *existing = pose;
            self.dirty |= StageDirty::PANELS;
        }
    }

    /// Make `index` the single active marker. Out-of-range indices are
    /// ignored, preserving the exactly-one-active invariant.
    pub fn set_marker_active(&mut self, index: usize) {
        if index >= self.markers.len() || self.markers[index] {
            return;
        }
        for marker in &mut self.markers {
            *marker = false;
        }
        self.markers[index] = true;
        self.dirty |= StageDirty::MARKERS;
    }

    /// Make `variant`'s media element the single visible one.
    pub fn set_media(&mut self, variant: MediaVariant) {
        if self.media != variant {
            self.media = variant;
            self.dirty |= StageDirty::MEDIA;
        }
    }

    // --- Accessors ----------------------------------------------------------

    /// The panel at `index`, if any.
    pub fn panel(&self, index: usize) -> Option<&PanelState> {
        self.panels.get(index)
    }

    /// Whether the marker at `index` is active.
    pub fn marker_active(&self, index: usize) -> bool {
        self.markers.get(index).copied().unwrap_or(false)
    }

    /// The single active marker's index.
    pub fn active_marker(&self) -> usize {
        self.markers.iter().position(|&active| active).unwrap_or(0)
    }

    /// Current backdrop scale.
    pub fn backdrop_scale(&self) -> f32 {
        self.backdrop_scale
    }

    /// The currently visible media variant.
    pub fn media(&self) -> MediaVariant {
        self.media
    }

    /// Current horizontal translation of the card strip.
    pub fn strip_translate_x(&self) -> f32 {
        self.strip_translate_x
    }

    /// Indices of currently visible panels.
    pub fn visible_panels(&self) -> impl Iterator<Item = usize> + '_ {
        self.panels
            .iter()
            .enumerate()
            .filter(|(_, panel)| panel.visible)
            .map(|(i, _)| i)
    }

    /// Drain the accumulated dirty bits.
    pub fn take_dirty(&mut self) -> StageDirty {
        let dirty = self.dirty;
        self.dirty = StageDirty::empty();
        dirty
    }
}
