// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transient state of a single drag gesture.

use alloc::vec::Vec;
use core::cmp::Ordering;

use smallvec::SmallVec;

use crate::policy::{MarkerPolicy, MoveBasis, ReorderConfig};
use crate::snapshot::Displacement;

/// Most drags cross only a handful of items before they are dropped.
const INLINE_MARKERS: usize = 8;

type Markers = SmallVec<[usize; INLINE_MARKERS]>;

/// State of an in-progress drag.
///
/// A session exists from [`begin_drag`](crate::ReorderEngine::begin_drag) until
/// the matching [`end_drag`](crate::ReorderEngine::end_drag) or
/// [`cancel_drag`](crate::ReorderEngine::cancel_drag). The preview is stored as
/// a permutation of committed indices: slot `k` of the preview shows the
/// committed item `order()[k]`.
///
/// Marker indices live in the committed (original) index space, the same space
/// in which hosts report enter targets.
#[derive(Clone, Debug)]
pub struct DragSession {
    origin: usize,
    order: Vec<usize>,
    last_target: usize,
    displaced_up: Markers,
    displaced_down: Markers,
    origin_hidden: bool,
}

impl DragSession {
    pub(crate) fn new(origin: usize, len: usize) -> Self {
        debug_assert!(origin < len, "drag origin {origin} outside 0..{len}");
        Self {
            origin,
            order: (0..len).collect(),
            last_target: origin,
            displaced_up: Markers::new(),
            displaced_down: Markers::new(),
            origin_hidden: false,
        }
    }

    /// Index of the item grabbed at drag start.
    #[must_use]
    pub fn origin(&self) -> usize {
        self.origin
    }

    /// The preview order as committed indices.
    #[must_use]
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// The most recent enter target, or the origin if nothing was entered yet.
    #[must_use]
    pub fn last_target(&self) -> usize {
        self.last_target
    }

    /// Indices currently marked as displaced toward the back.
    ///
    /// These are items the dragged item has passed on its way to the front.
    /// Entries are listed in the order they were marked.
    #[must_use]
    pub fn displaced_up(&self) -> &[usize] {
        &self.displaced_up
    }

    /// Indices currently marked as displaced toward the front.
    ///
    /// These are items the dragged item has passed on its way to the back.
    /// Entries are listed in the order they were marked.
    #[must_use]
    pub fn displaced_down(&self) -> &[usize] {
        &self.displaced_down
    }

    /// Returns `true` once the pointer has left the origin item.
    #[must_use]
    pub fn origin_hidden(&self) -> bool {
        self.origin_hidden
    }

    /// Displacement marker for `index` in committed index space.
    #[must_use]
    pub fn displacement(&self, index: usize) -> Displacement {
        if self.displaced_up.contains(&index) {
            Displacement::Up
        } else if self.displaced_down.contains(&index) {
            Displacement::Down
        } else {
            Displacement::None
        }
    }

    /// Preview slot currently showing the origin item.
    #[must_use]
    pub fn origin_slot(&self) -> Option<usize> {
        self.order.iter().position(|&i| i == self.origin)
    }

    /// Returns `true` if the preview differs from the committed order.
    #[must_use]
    pub fn is_reordered(&self) -> bool {
        self.order.iter().enumerate().any(|(slot, &i)| slot != i)
    }

    /// Applies an enter event. `target` must already be bounds-checked.
    pub(crate) fn enter(&mut self, target: usize, config: &ReorderConfig) {
        let from = match config.move_basis {
            MoveBasis::DraggedItem => self.last_target,
            MoveBasis::OriginSlot => self.origin,
        };
        move_slot(&mut self.order, from, target);

        match self.origin.cmp(&target) {
            Ordering::Greater => mark(&mut self.displaced_up, target, config.markers),
            Ordering::Less => mark(&mut self.displaced_down, target, config.markers),
            Ordering::Equal => {
                self.displaced_up.clear();
                self.displaced_down.clear();
            }
        }

        self.last_target = target;
    }

    /// Applies a leave event, returning whether the origin is now hidden.
    pub(crate) fn leave(&mut self, index: usize) -> bool {
        if index == self.origin {
            self.origin_hidden = true;
        }
        self.origin_hidden
    }
}

/// Moves the element at `from` to `to`, shifting everything in between by one.
fn move_slot(order: &mut [usize], from: usize, to: usize) {
    match from.cmp(&to) {
        Ordering::Less => order[from..=to].rotate_left(1),
        Ordering::Greater => order[to..=from].rotate_right(1),
        Ordering::Equal => {}
    }
}

fn mark(markers: &mut Markers, target: usize, policy: MarkerPolicy) {
    match markers.iter().position(|&m| m == target) {
        None => markers.push(target),
        Some(pos) => match policy {
            MarkerPolicy::Toggle => {
                markers.remove(pos);
            }
            MarkerPolicy::Unwind => {
                markers.pop();
            }
        },
    }
}
