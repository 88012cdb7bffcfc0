// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render-ready views of a [`ReorderEngine`](crate::ReorderEngine).

use alloc::vec::Vec;

use crate::session::DragSession;

/// Presentation marker for an item that the dragged item has passed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Displacement {
    /// Rendered in place.
    #[default]
    None,
    /// The dragged item moved toward the front past this item, so it is
    /// shown shifted one slot toward the back.
    Up,
    /// The dragged item moved toward the back past this item, so it is
    /// shown shifted one slot toward the front.
    Down,
}

impl Displacement {
    /// Returns `true` unless this is [`Displacement::None`].
    #[must_use]
    pub fn is_displaced(self) -> bool {
        self != Self::None
    }
}

/// A borrowed view of the list to render after the latest gesture event.
///
/// While idle the snapshot shows the committed list. During a drag it shows
/// the preview order. A snapshot borrows the engine, so it cannot outlive the
/// next event.
#[derive(Debug)]
pub struct Snapshot<'a, T> {
    items: &'a [T],
    session: Option<&'a DragSession>,
    revision: u64,
}

impl<T> Clone for Snapshot<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Snapshot<'_, T> {}

impl<'a, T> Snapshot<'a, T> {
    pub(crate) fn new(items: &'a [T], session: Option<&'a DragSession>, revision: u64) -> Self {
        Self {
            items,
            session,
            revision,
        }
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item shown at `slot`.
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<&'a T> {
        self.committed_index(slot)
            .and_then(|index| self.items.get(index))
    }

    /// Items in display order.
    pub fn iter(&self) -> impl Iterator<Item = &'a T> + use<'a, T> {
        let this = *self;
        (0..this.len()).filter_map(move |slot| this.get(slot))
    }

    /// Items in display order, each paired with its own displacement marker.
    ///
    /// Markers are keyed by committed index, so an item keeps its marker
    /// wherever the preview places it. The items are already in their preview
    /// positions; use [`Snapshot::iter_committed`] when the renderer applies
    /// the markers as offsets instead.
    pub fn iter_with_displacement(
        &self,
    ) -> impl Iterator<Item = (&'a T, Displacement)> + use<'a, T> {
        let this = *self;
        (0..this.len()).filter_map(move |slot| {
            let index = this.committed_index(slot)?;
            Some((this.items.get(index)?, this.displacement(index)))
        })
    }

    /// Items in committed order, each paired with its displacement marker.
    ///
    /// For renderers that keep drawing the committed order during a drag and
    /// shift displaced items by an offset.
    pub fn iter_committed(&self) -> impl Iterator<Item = (&'a T, Displacement)> + use<'a, T> {
        let this = *self;
        self.items
            .iter()
            .enumerate()
            .map(move |(index, item)| (item, this.displacement(index)))
    }

    /// Committed index of the item shown at `slot`.
    #[must_use]
    pub fn committed_index(&self, slot: usize) -> Option<usize> {
        match self.session {
            Some(session) => session.order().get(slot).copied(),
            None => (slot < self.items.len()).then_some(slot),
        }
    }

    /// Displacement marker for `index`.
    #[must_use]
    pub fn displacement(&self, index: usize) -> Displacement {
        self.session
            .map_or(Displacement::None, |session| session.displacement(index))
    }

    /// The preview order as committed indices, while dragging.
    #[must_use]
    pub fn order(&self) -> Option<&'a [usize]> {
        self.session.map(DragSession::order)
    }

    /// Origin of the active drag.
    #[must_use]
    pub fn origin(&self) -> Option<usize> {
        self.session.map(DragSession::origin)
    }

    /// Returns `true` while a drag session is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Returns `true` if the renderer should hide the origin item.
    #[must_use]
    pub fn origin_hidden(&self) -> bool {
        self.session.is_some_and(DragSession::origin_hidden)
    }

    /// Returns `true` if the item at committed `index` is the hidden origin.
    #[must_use]
    pub fn is_index_hidden(&self, index: usize) -> bool {
        self.session
            .is_some_and(|session| session.origin_hidden() && session.origin() == index)
    }

    /// Returns `true` if `slot` shows the origin item and that item is hidden.
    #[must_use]
    pub fn is_hidden(&self, slot: usize) -> bool {
        self.session.is_some_and(|session| {
            session.origin_hidden() && session.origin_slot() == Some(slot)
        })
    }

    /// Revision of the committed list this snapshot was taken from.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Clones the items in display order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}
