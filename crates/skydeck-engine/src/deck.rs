#![forbid(unsafe_code)]

//! Slide registry.
//!
//! A [`Deck`] is the fixed, ordered collection of slides: 0-based, dense,
//! and immutable for the lifetime of the page. Slides are never created or
//! destroyed at runtime; only their stage attributes toggle.

use std::fmt;

/// One full-panel section of the presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slide {
    index: usize,
    has_content: bool,
}

impl Slide {
    /// Position in the registry (0-based, dense).
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether the slide carries a content sub-element.
    ///
    /// Contentless slides still transition; only the content-specific
    /// tween steps are skipped.
    pub fn has_content(&self) -> bool {
        self.has_content
    }
}

/// Registry construction failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckError {
    /// A deck needs at least one slide.
    Empty,
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "a deck needs at least one slide"),
        }
    }
}

impl std::error::Error for DeckError {}

/// Builder for a [`Deck`].
#[derive(Debug, Clone, Default)]
pub struct DeckBuilder {
    content: Vec<bool>,
}

impl DeckBuilder {
    /// Start an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a slide with a content sub-element.
    #[must_use]
    pub fn slide(mut self) -> Self {
        self.content.push(true);
        self
    }

    /// Append a slide without a content sub-element.
    #[must_use]
    pub fn slide_without_content(mut self) -> Self {
        self.content.push(false);
        self
    }

    /// Finalize the registry.
    pub fn build(self) -> Result<Deck, DeckError> {
        if self.content.is_empty() {
            return Err(DeckError::Empty);
        }
        let slides = self
            .content
            .into_iter()
            .enumerate()
            .map(|(index, has_content)| Slide { index, has_content })
            .collect();
        Ok(Deck { slides })
    }
}

/// The fixed ordered collection of slides.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Deck {
    slides: Vec<Slide>,
}

impl Deck {
    /// A deck of `count` slides, all with content.
    pub fn with_slides(count: usize) -> Result<Self, DeckError> {
        let mut builder = DeckBuilder::new();
        for _ in 0..count {
            builder = builder.slide();
        }
        builder.build()
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false: construction rejects empty decks. Kept for symmetry.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Whether `index` addresses a slide.
    pub fn contains(&self, index: usize) -> bool {
        index < self.slides.len()
    }

    /// The slide at `index`, if any.
    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Iterate over the slides in order.
    pub fn iter(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter()
    }
}
