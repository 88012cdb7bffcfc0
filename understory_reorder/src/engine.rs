// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drag-reorder state machine.
//!
//! ## Usage
//!
//! 1) Call [`ReorderEngine::begin_drag`] with the index of the grabbed item.
//! 2) Forward every drag-enter with [`ReorderEngine::enter_item`] and every
//!    drag-leave with [`ReorderEngine::leave_item`], using committed indices.
//! 3) Render [`ReorderEngine::snapshot`] after each event.
//! 4) Finish with [`ReorderEngine::end_drag`] to commit, or
//!    [`ReorderEngine::cancel_drag`] to throw the preview away.
//!
//! ## Minimal example
//!
//! ```
//! use understory_reorder::{Displacement, ReorderEngine};
//!
//! let mut engine = ReorderEngine::new(vec!["A", "B", "C"]);
//!
//! engine.begin_drag(0).unwrap();
//! engine.enter_item(2).unwrap();
//!
//! let snapshot = engine.snapshot();
//! assert_eq!(snapshot.to_vec(), ["B", "C", "A"]);
//! assert_eq!(snapshot.displacement(2), Displacement::Down);
//!
//! assert!(engine.end_drag().unwrap());
//! assert_eq!(engine.items(), &["B", "C", "A"]);
//! ```

use alloc::vec::Vec;
use core::mem;

use crate::error::ReorderError;
use crate::policy::{ConflictPolicy, ReorderConfig};
use crate::session::DragSession;
use crate::snapshot::{Displacement, Snapshot};

/// Owns a committed list and the drag session reordering it.
///
/// The engine never inspects item payloads; only positions matter. Items need
/// no trait bounds because the preview is kept as a permutation of committed
/// indices and applied once, on commit.
///
/// Every operation either succeeds or returns a [`ReorderError`] with the
/// engine left exactly as it was.
#[derive(Clone, Debug)]
pub struct ReorderEngine<T> {
    items: Vec<T>,
    session: Option<DragSession>,
    config: ReorderConfig,
    revision: u64,
}

impl<T> Default for ReorderEngine<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> FromIterator<T> for ReorderEngine<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> ReorderEngine<T> {
    /// Creates an idle engine over `items` with the default configuration.
    #[must_use]
    pub fn new(items: Vec<T>) -> Self {
        Self::with_config(items, ReorderConfig::default())
    }

    /// Creates an idle engine over `items`.
    #[must_use]
    pub fn with_config(items: Vec<T>, config: ReorderConfig) -> Self {
        Self {
            items,
            session: None,
            config,
            revision: 0,
        }
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The committed list, ignoring any preview.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consumes the engine and returns the committed list.
    ///
    /// An active session is discarded without committing.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// The engine configuration.
    #[must_use]
    pub fn config(&self) -> &ReorderConfig {
        &self.config
    }

    /// Returns the current revision counter.
    ///
    /// The counter is bumped each time a drop changes the committed order.
    /// Drops that leave the order as it was do not bump it.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns `true` while a drag session is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// The active drag session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Origin of the active drag.
    #[must_use]
    pub fn origin(&self) -> Option<usize> {
        self.session.as_ref().map(DragSession::origin)
    }

    /// Returns `true` if the origin item should currently be hidden.
    #[must_use]
    pub fn origin_hidden(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(DragSession::origin_hidden)
    }

    /// Displacement marker for `index`.
    ///
    /// Useful for renderers that keep drawing the committed order during a
    /// drag and animate displaced items with offsets instead.
    #[must_use]
    pub fn displacement(&self, index: usize) -> Displacement {
        self.session
            .as_ref()
            .map_or(Displacement::None, |session| session.displacement(index))
    }

    /// Returns the list to render: the preview while dragging, else the
    /// committed list.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_, T> {
        Snapshot::new(&self.items, self.session.as_ref(), self.revision)
    }

    /// Starts a drag of the item at `index`.
    ///
    /// If a session is already active, the configured
    /// [`ConflictPolicy`] decides between rejecting the call and restarting.
    pub fn begin_drag(&mut self, index: usize) -> Result<(), ReorderError> {
        self.check_index(index)?;
        if let Some(active) = &self.session {
            match self.config.conflict {
                ConflictPolicy::Reject => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        origin = active.origin(),
                        requested = index,
                        "drag start rejected, session already active"
                    );
                    return Err(ReorderError::SessionAlreadyActive {
                        origin: active.origin(),
                    });
                }
                ConflictPolicy::Restart => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        origin = active.origin(),
                        requested = index,
                        "restarting drag, previous preview discarded"
                    );
                }
            }
        }

        self.session = Some(DragSession::new(index, self.items.len()));
        #[cfg(feature = "tracing")]
        tracing::debug!(origin = index, len = self.items.len(), "drag started");
        Ok(())
    }

    /// Reports that the pointer entered the item at committed index `target`.
    ///
    /// Moves one item in the preview (see [`MoveBasis`](crate::MoveBasis))
    /// and updates the displacement markers. Returns the marker now attached
    /// to `target`.
    pub fn enter_item(&mut self, target: usize) -> Result<Displacement, ReorderError> {
        let len = self.items.len();
        let session = self.session.as_mut().ok_or(ReorderError::NoActiveSession)?;
        if target >= len {
            return Err(ReorderError::InvalidIndex { index: target, len });
        }

        session.enter(target, &self.config);
        #[cfg(feature = "tracing")]
        tracing::trace!(
            origin = session.origin(),
            target,
            up = ?session.displaced_up(),
            down = ?session.displaced_down(),
            "drag entered item"
        );
        Ok(session.displacement(target))
    }

    /// Reports that the pointer left the item at committed index `index`.
    ///
    /// Leaving the origin item flags it as hidden. The preview and markers are
    /// never touched. Returns whether the origin is hidden after the call.
    pub fn leave_item(&mut self, index: usize) -> Result<bool, ReorderError> {
        let len = self.items.len();
        let session = self.session.as_mut().ok_or(ReorderError::NoActiveSession)?;
        if index >= len {
            return Err(ReorderError::InvalidIndex { index, len });
        }

        let hidden = session.leave(index);
        #[cfg(feature = "tracing")]
        tracing::trace!(index, hidden, "drag left item");
        Ok(hidden)
    }

    /// Ends the drag and commits the preview order.
    ///
    /// Returns `true` if the committed order changed. Calling this without an
    /// active session returns [`ReorderError::NoActiveSession`] and changes
    /// nothing, so repeated calls are harmless.
    pub fn end_drag(&mut self) -> Result<bool, ReorderError> {
        let session = self.session.take().ok_or(ReorderError::NoActiveSession)?;
        let changed = session.is_reordered();
        if changed {
            let items = mem::take(&mut self.items);
            self.items = apply_order(items, session.order());
            self.bump_revision();
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            origin = session.origin(),
            changed,
            revision = self.revision,
            "drag ended"
        );
        Ok(changed)
    }

    /// Discards the active session without committing.
    ///
    /// Hosts call this when the platform cancels a gesture. Returns `true` if
    /// a session was discarded.
    pub fn cancel_drag(&mut self) -> bool {
        match self.session.take() {
            Some(_session) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(origin = _session.origin(), "drag cancelled");
                true
            }
            None => false,
        }
    }

    fn check_index(&self, index: usize) -> Result<(), ReorderError> {
        let len = self.items.len();
        if index < len {
            Ok(())
        } else {
            Err(ReorderError::InvalidIndex { index, len })
        }
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

/// Rebuilds `items` so that slot `k` holds the old `items[order[k]]`.
fn apply_order<T>(items: Vec<T>, order: &[usize]) -> Vec<T> {
    debug_assert_eq!(items.len(), order.len(), "preview order length mismatch");
    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
    let reordered: Vec<T> = order
        .iter()
        .filter_map(|&index| slots.get_mut(index).and_then(Option::take))
        .collect();
    debug_assert_eq!(
        reordered.len(),
        slots.len(),
        "preview order is not a permutation"
    );
    reordered
}
