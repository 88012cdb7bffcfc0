// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Translate displacement markers into render offsets.
//!
//! ```
//! use kurbo::Vec2;
//! use understory_reorder::Displacement;
//! use understory_reorder::offset::Axis;
//!
//! // A vertical list with 50px rows.
//! assert_eq!(Displacement::Up.offset(Axis::Vertical, 50.0), Vec2::new(0.0, 50.0));
//! assert_eq!(Displacement::Down.offset(Axis::Vertical, 50.0), Vec2::new(0.0, -50.0));
//!
//! // A horizontal strip of 100px thumbnails.
//! assert_eq!(Displacement::Down.offset(Axis::Horizontal, 100.0), Vec2::new(-100.0, 0.0));
//! ```

use kurbo::Vec2;

use crate::snapshot::Displacement;

/// The direction along which a list is laid out.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    /// Items flow left to right.
    Horizontal,
    /// Items flow top to bottom.
    #[default]
    Vertical,
}

impl Axis {
    /// A vector of length `extent` pointing toward the back of the list.
    #[must_use]
    pub fn forward(self, extent: f64) -> Vec2 {
        match self {
            Self::Horizontal => Vec2::new(extent, 0.0),
            Self::Vertical => Vec2::new(0.0, extent),
        }
    }
}

impl Displacement {
    /// Offset to apply to an item occupying `extent` along `axis`.
    ///
    /// [`Displacement::Up`] shifts the item one slot toward the back and
    /// [`Displacement::Down`] one slot toward the front.
    #[must_use]
    pub fn offset(self, axis: Axis, extent: f64) -> Vec2 {
        match self {
            Self::None => Vec2::ZERO,
            Self::Up => axis.forward(extent),
            Self::Down => -axis.forward(extent),
        }
    }
}
