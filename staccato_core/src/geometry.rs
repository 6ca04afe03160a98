// Copyright 2026 the Staccato Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Relative geometry and alignment.
//!
//! Node geometry is expressed per axis as a [`Dim`]: a pixel offset plus a
//! fraction of the reference frame (the parent's global rectangle, or the
//! viewport for roots). [`align_rect`] places a locally computed rectangle
//! inside the reference frame according to an [`Alignment`] anchor.

use kurbo::{Rect, Size};

/// One axis of relative geometry: `offset` pixels plus `scale` times the
/// reference frame's extent on that axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dim {
    /// Absolute pixel offset.
    pub offset: f64,
    /// Fraction of the reference frame's extent.
    pub scale: f64,
}

impl Dim {
    /// Zero offset, zero scale.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a dimension from an offset and a scale.
    #[inline]
    #[must_use]
    pub const fn new(offset: f64, scale: f64) -> Self {
        Self { offset, scale }
    }

    /// A pure pixel value.
    #[inline]
    #[must_use]
    pub const fn px(offset: f64) -> Self {
        Self::new(offset, 0.0)
    }

    /// A pure fraction of the reference frame.
    #[inline]
    #[must_use]
    pub const fn fraction(scale: f64) -> Self {
        Self::new(0.0, scale)
    }

    /// Resolves against a reference extent.
    #[inline]
    #[must_use]
    pub fn resolve(self, reference: f64) -> f64 {
        self.offset + reference * self.scale
    }
}

/// A pair of [`Dim`]s, one per axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dim2 {
    /// Horizontal axis.
    pub x: Dim,
    /// Vertical axis.
    pub y: Dim,
}

impl Dim2 {
    /// Zero on both axes.
    pub const ZERO: Self = Self::new(Dim::ZERO, Dim::ZERO);

    /// Creates a pair from two axes.
    #[inline]
    #[must_use]
    pub const fn new(x: Dim, y: Dim) -> Self {
        Self { x, y }
    }

    /// Pixel offsets on both axes.
    #[inline]
    #[must_use]
    pub const fn px(x: f64, y: f64) -> Self {
        Self::new(Dim::px(x), Dim::px(y))
    }

    /// Fractions of the reference frame on both axes.
    #[inline]
    #[must_use]
    pub const fn fraction(x: f64, y: f64) -> Self {
        Self::new(Dim::fraction(x), Dim::fraction(y))
    }

    /// Resolves both axes against a reference size.
    #[inline]
    #[must_use]
    pub fn resolve(self, reference: Size) -> Size {
        Size::new(self.x.resolve(reference.width), self.y.resolve(reference.height))
    }
}

/// Anchor of a node within its reference frame.
///
/// The nine values form a 3×3 grid: `Top`/`Mid`/`Bot` select the vertical
/// anchor and `Left`/`Center`/`Right` the horizontal one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Alignment {
    /// Flush with the reference frame's top-left corner.
    #[default]
    TopLeft,
    /// Horizontally centered along the top edge.
    TopCenter,
    /// Flush with the top-right corner.
    TopRight,
    /// Vertically centered along the left edge.
    MidLeft,
    /// Centered on both axes.
    MidCenter,
    /// Vertically centered along the right edge.
    MidRight,
    /// Flush with the bottom-left corner.
    BotLeft,
    /// Horizontally centered along the bottom edge.
    BotCenter,
    /// Flush with the bottom-right corner.
    BotRight,
}

impl Alignment {
    /// Every alignment, in row-major grid order.
    pub const ALL: [Self; 9] = [
        Self::TopLeft,
        Self::TopCenter,
        Self::TopRight,
        Self::MidLeft,
        Self::MidCenter,
        Self::MidRight,
        Self::BotLeft,
        Self::BotCenter,
        Self::BotRight,
    ];

    /// Fractions of the free space (reference extent minus node extent)
    /// placed before the node, as `(horizontal, vertical)`.
    #[must_use]
    pub const fn anchor(self) -> (f64, f64) {
        match self {
            Self::TopLeft => (0.0, 0.0),
            Self::TopCenter => (0.5, 0.0),
            Self::TopRight => (1.0, 0.0),
            Self::MidLeft => (0.0, 0.5),
            Self::MidCenter => (0.5, 0.5),
            Self::MidRight => (1.0, 0.5),
            Self::BotLeft => (0.0, 1.0),
            Self::BotCenter => (0.5, 1.0),
            Self::BotRight => (1.0, 1.0),
        }
    }
}

/// Places `local` inside `reference` according to `alignment`.
///
/// The size of `local` is kept. Its origin is first snapped to the anchor,
/// then translated by `local`'s own origin, so a `TopRight` node with
/// `x0 = -10` sits ten pixels in from the right edge. Negative extents are
/// kept as they are.
#[must_use]
pub fn align_rect(local: Rect, alignment: Alignment, reference: Rect) -> Rect {
    let (fx, fy) = alignment.anchor();
    let (width, height) = (local.width(), local.height());
    let x = reference.x0 + fx * (reference.width() - width) + local.x0;
    let y = reference.y0 + fy * (reference.height() - height) + local.y0;
    // Rect::from_origin_size would normalize negative extents.
    Rect::new(x, y, x + width, y + height)
}
