// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Error returned when a gesture event cannot be applied.
///
/// Every variant describes caller misuse. The engine is left untouched when an
/// operation fails, so hosts that prefer a silent no-op can discard the error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ReorderError {
    /// An index was outside the list bounds.
    InvalidIndex {
        /// The rejected index.
        index: usize,
        /// The list length at the time of the call.
        len: usize,
    },
    /// A drag operation was requested while no drag session is active.
    NoActiveSession,
    /// [`begin_drag`](crate::ReorderEngine::begin_drag) was called while a
    /// session was already active and the engine is configured to reject it.
    SessionAlreadyActive {
        /// Origin of the session that is still active.
        origin: usize,
    },
    /// A shape that needs at least one item was rebuilt from an empty list.
    EmptyShape,
}

impl fmt::Display for ReorderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidIndex { index, len } => {
                write!(f, "index {index} is out of bounds for a list of {len} items")
            }
            Self::NoActiveSession => f.write_str("no drag session is active"),
            Self::SessionAlreadyActive { origin } => {
                write!(f, "a drag session from index {origin} is already active")
            }
            Self::EmptyShape => f.write_str("shape requires at least one item"),
        }
    }
}

impl core::error::Error for ReorderError {}
