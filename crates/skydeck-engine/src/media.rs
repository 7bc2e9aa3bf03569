#![forbid(unsafe_code)]

//! Media binder: maps the active slide index to a background media variant.
//!
//! The mapping is a total, side-effect-free function; making the chosen
//! variant visible is a separate effect step. Today the policy is a
//! two-state toggle (one distinguished slide gets the featured variant,
//! every other slide the standard one). Widening to an N-way mapping only
//! touches [`MediaBinder::variant_for`]; the commit logic stays put.

use crate::stage::Stage;

/// An addressable background media element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MediaVariant {
    /// The shared default background.
    Standard,
    /// The distinguished slide's background.
    Featured,
}

/// Index → variant policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MediaBinder {
    featured_index: usize,
}

impl Default for MediaBinder {
    fn default() -> Self {
        Self { featured_index: 1 }
    }
}

impl MediaBinder {
    /// A binder that features the given slide index.
    pub fn new(featured_index: usize) -> Self {
        Self { featured_index }
    }

    /// The variant for a slide index. Total and pure.
    pub fn variant_for(&self, index: usize) -> MediaVariant {
        if index == self.featured_index {
            MediaVariant::Featured
        } else {
            MediaVariant::Standard
        }
    }

    /// Effect step: make the variant for `index` the visible media element.
    pub fn apply(&self, stage: &mut Stage, index: usize) {
        stage.set_media(self.variant_for(index));
    }
}
