// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_reorder --heading-base-level=0

//! Understory Reorder: a drag-and-reorder state machine for lists.
//!
//! This crate turns a stream of drag gesture events into a live preview of the
//! reordered list, per-item displacement markers for animation, and a
//! committed order on drop. It does **not** know anything about rendering,
//! hit testing, or pointer capture. Hosts forward four events with item
//! indices and render the resulting [`Snapshot`]:
//!
//! - drag start → [`ReorderEngine::begin_drag`]
//! - drag enter → [`ReorderEngine::enter_item`]
//! - drag leave → [`ReorderEngine::leave_item`]
//! - drag end → [`ReorderEngine::end_drag`] (or [`ReorderEngine::cancel_drag`])
//!
//! Indices are always reported in the *committed* index space, i.e. the
//! position an item had when the drag started.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_reorder::{Displacement, ReorderEngine};
//!
//! let mut engine = ReorderEngine::new(vec!["task1", "task2", "task3"]);
//!
//! // Grab the last task and drag it over the first one.
//! engine.begin_drag(2).unwrap();
//! engine.leave_item(2).unwrap();
//! engine.enter_item(0).unwrap();
//!
//! let snapshot = engine.snapshot();
//! assert_eq!(snapshot.to_vec(), ["task3", "task1", "task2"]);
//! assert_eq!(snapshot.displacement(0), Displacement::Up);
//! assert!(snapshot.origin_hidden());
//!
//! // Drop: the preview becomes the committed order.
//! engine.end_drag().unwrap();
//! assert_eq!(engine.items(), &["task3", "task1", "task2"]);
//! assert!(!engine.is_dragging());
//! ```
//!
//! ## Concepts
//!
//! - **Committed list**: the authoritative order, replaced only on drop.
//! - **Drag session** ([`DragSession`]): exists between drag start and drop. It
//!   holds the origin index, the preview order, and the displacement markers.
//! - **Displacement markers** ([`Displacement`]): which items a renderer should
//!   shift while the dragged item passes them. With the `kurbo` feature,
//!   [`Displacement::offset`] converts a marker into a translation.
//! - **Shapes** ([`ReorderShape`]): adapters for data that is not a plain `Vec`,
//!   such as a [`NestedList`] of groups or a [`PinnedHead`] gallery.
//!
//! Behavior that UIs disagree on is configurable through [`ReorderConfig`]:
//! which item a multi-hop drag moves ([`MoveBasis`]), how markers react to
//! re-entry ([`MarkerPolicy`]), and what a second drag start does while one is
//! active ([`ConflictPolicy`]).
//!
//! ## Features
//!
//! - `std` (enabled by default): Use the Rust standard library.
//! - `kurbo`: Enable [`offset`] helpers producing `kurbo::Vec2` offsets.
//! - `tracing`: Emit `tracing` events for every drag transition.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod engine;
mod error;
mod policy;
mod session;
mod shape;
mod snapshot;

#[cfg(feature = "kurbo")]
pub mod offset;

pub use engine::ReorderEngine;
pub use error::ReorderError;
pub use policy::{ConflictPolicy, MarkerPolicy, MoveBasis, ReorderConfig};
pub use session::DragSession;
pub use shape::{Group, NestedList, PinnedHead, ReorderShape, Reorderable};
pub use snapshot::{Displacement, Snapshot};
