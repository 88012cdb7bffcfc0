// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine configuration.
//!
//! Hosts tune behavior that reasonable drag UIs disagree on through a small
//! [`ReorderConfig`] value. Every policy has a default, so
//! `ReorderConfig::default()` is the usual starting point.
//!
//! ```rust
//! use understory_reorder::{ConflictPolicy, MarkerPolicy, MoveBasis, ReorderConfig};
//!
//! let config = ReorderConfig::default()
//!     .with_markers(MarkerPolicy::Unwind)
//!     .with_conflict(ConflictPolicy::Restart);
//!
//! assert_eq!(config.move_basis, MoveBasis::DraggedItem);
//! assert_eq!(config.markers, MarkerPolicy::Unwind);
//! ```

/// Which item an [`enter_item`](crate::ReorderEngine::enter_item) call moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum MoveBasis {
    /// Move the item that was grabbed at drag start.
    ///
    /// The dragged item is taken out of the slot it occupied after the
    /// previous enter event and reinserted at the new target. The preview is
    /// therefore always the committed list with the origin item moved to the
    /// most recent target, however many items the pointer crossed on the way.
    #[default]
    DraggedItem,
    /// Move whichever item currently sits in the origin slot of the preview.
    ///
    /// After the first hop the origin slot usually holds a neighbor rather
    /// than the grabbed item, so multi-hop drags reshuffle neighbors as well.
    OriginSlot,
}

/// How displacement markers react when a target is entered again.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum MarkerPolicy {
    /// Insert the target if it is unmarked, remove it if it is marked.
    #[default]
    Toggle,
    /// Insert the target if it is unmarked. Otherwise release the most
    /// recently inserted marker of that direction.
    ///
    /// Backing the pointer out over previously crossed items releases their
    /// offsets in reverse crossing order.
    Unwind,
}

/// What [`begin_drag`](crate::ReorderEngine::begin_drag) does while another
/// session is still active.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum ConflictPolicy {
    /// Return [`ReorderError::SessionAlreadyActive`](crate::ReorderError::SessionAlreadyActive)
    /// and keep the active session.
    #[default]
    Reject,
    /// Discard the active session without committing and start a new one.
    Restart,
}

/// Configuration for a [`ReorderEngine`](crate::ReorderEngine).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct ReorderConfig {
    /// See [`MoveBasis`].
    pub move_basis: MoveBasis,
    /// See [`MarkerPolicy`].
    pub markers: MarkerPolicy,
    /// See [`ConflictPolicy`].
    pub conflict: ConflictPolicy,
}

impl ReorderConfig {
    /// Returns the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            move_basis: MoveBasis::DraggedItem,
            markers: MarkerPolicy::Toggle,
            conflict: ConflictPolicy::Reject,
        }
    }

    /// Sets the [`MoveBasis`].
    #[must_use]
    pub const fn with_move_basis(mut self, move_basis: MoveBasis) -> Self {
        self.move_basis = move_basis;
        self
    }

    /// Sets the [`MarkerPolicy`].
    #[must_use]
    pub const fn with_markers(mut self, markers: MarkerPolicy) -> Self {
        self.markers = markers;
        self
    }

    /// Sets the [`ConflictPolicy`].
    #[must_use]
    pub const fn with_conflict(mut self, conflict: ConflictPolicy) -> Self {
        self.conflict = conflict;
        self
    }
}
