// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters between application data shapes and the flat engine list.
//!
//! The engine reorders a flat `Vec`. Applications often store their data in a
//! different shape; a [`ReorderShape`] flattens it into engine items and
//! rebuilds it after a drop. Three shapes are provided:
//!
//! - `Vec<T>`: a flat list, flattened as-is.
//! - [`NestedList`]: a list of [`Group`]s, each owning a list of children.
//!   Only groups are reordered; children always travel with their group.
//! - [`PinnedHead`]: a designated head stored apart from the rest, which is
//!   logically index 0 of the reorderable sequence.
//!
//! [`Reorderable`] bundles a shape with an engine.
//!
//! ```rust
//! use understory_reorder::{PinnedHead, Reorderable};
//!
//! let gallery = PinnedHead::new("main", vec!["image1", "image2", "image3", "image4"]);
//! let mut reorder = Reorderable::new(gallery);
//!
//! // Drag the third image onto the head slot.
//! reorder.begin_drag(3).unwrap();
//! reorder.enter_item(0).unwrap();
//! reorder.end_drag().unwrap();
//!
//! let gallery = reorder.into_shape().unwrap();
//! assert_eq!(gallery.head, "image3");
//! assert_eq!(gallery.rest, ["main", "image1", "image2", "image4"]);
//! ```

use alloc::vec::Vec;
use core::fmt;

use crate::engine::ReorderEngine;
use crate::error::ReorderError;
use crate::policy::ReorderConfig;
use crate::snapshot::{Displacement, Snapshot};

/// A data shape that can be reordered as a flat sequence.
pub trait ReorderShape: Sized {
    /// The unit the engine reorders.
    type Item;

    /// Flattens the shape into engine order.
    fn flatten(self) -> Vec<Self::Item>;

    /// Rebuilds the shape from engine order.
    fn unflatten(items: Vec<Self::Item>) -> Result<Self, ReorderError>;
}

impl<T> ReorderShape for Vec<T> {
    type Item = T;

    fn flatten(self) -> Vec<T> {
        self
    }

    fn unflatten(items: Vec<T>) -> Result<Self, ReorderError> {
        Ok(items)
    }
}

/// A reorderable entry that owns a list of children.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Group<H, C> {
    /// The group's own payload, such as a task title.
    pub head: H,
    /// Children that move together with the group.
    pub children: Vec<C>,
}

impl<H, C> Group<H, C> {
    /// Creates a group.
    pub fn new(head: H, children: impl IntoIterator<Item = C>) -> Self {
        Self {
            head,
            children: children.into_iter().collect(),
        }
    }
}

/// A list of groups reordered at the top level.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NestedList<H, C> {
    groups: Vec<Group<H, C>>,
}

impl<H, C> Default for NestedList<H, C> {
    fn default() -> Self {
        Self { groups: Vec::new() }
    }
}

impl<H, C> FromIterator<Group<H, C>> for NestedList<H, C> {
    fn from_iter<I: IntoIterator<Item = Group<H, C>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<H, C> NestedList<H, C> {
    /// Creates a nested list from its groups.
    #[must_use]
    pub fn new(groups: Vec<Group<H, C>>) -> Self {
        Self { groups }
    }

    /// The groups in order.
    #[must_use]
    pub fn groups(&self) -> &[Group<H, C>] {
        &self.groups
    }

    /// Number of children across all groups.
    #[must_use]
    pub fn total_children(&self) -> usize {
        self.groups.iter().map(|group| group.children.len()).sum()
    }

    /// Consumes the list and returns its groups.
    #[must_use]
    pub fn into_groups(self) -> Vec<Group<H, C>> {
        self.groups
    }
}

impl<H, C> ReorderShape for NestedList<H, C> {
    type Item = Group<H, C>;

    fn flatten(self) -> Vec<Group<H, C>> {
        self.groups
    }

    fn unflatten(items: Vec<Group<H, C>>) -> Result<Self, ReorderError> {
        Ok(Self::new(items))
    }
}

/// A sequence whose first item is stored apart from the others.
///
/// Galleries often show one "main" thumbnail above a strip of the remaining
/// images. Dragging an image onto the head slot is an ordinary move to
/// index 0.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PinnedHead<T> {
    /// The item in slot 0.
    pub head: T,
    /// The items in slots `1..`.
    pub rest: Vec<T>,
}

impl<T> PinnedHead<T> {
    /// Creates a pinned-head sequence.
    pub fn new(head: T, rest: impl IntoIterator<Item = T>) -> Self {
        Self {
            head,
            rest: rest.into_iter().collect(),
        }
    }

    /// Number of items, including the head.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rest.len() + 1
    }

    /// Always `false`: a pinned-head sequence holds at least its head.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Splits a flat slice into its head and the rest.
    ///
    /// Renderers use this to lay out a snapshot the way the shape is drawn.
    #[must_use]
    pub fn split(items: &[T]) -> Option<(&T, &[T])> {
        items.split_first()
    }
}

impl<T> ReorderShape for PinnedHead<T> {
    type Item = T;

    fn flatten(self) -> Vec<T> {
        let mut items = Vec::with_capacity(self.rest.len() + 1);
        items.push(self.head);
        items.extend(self.rest);
        items
    }

    fn unflatten(items: Vec<T>) -> Result<Self, ReorderError> {
        let mut items = items.into_iter();
        let head = items.next().ok_or(ReorderError::EmptyShape)?;
        Ok(Self {
            head,
            rest: items.collect(),
        })
    }
}

/// A [`ReorderEngine`] over a flattened [`ReorderShape`].
pub struct Reorderable<S: ReorderShape> {
    engine: ReorderEngine<S::Item>,
}

impl<S> fmt::Debug for Reorderable<S>
where
    S: ReorderShape,
    S::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reorderable")
            .field("engine", &self.engine)
            .finish()
    }
}

impl<S> Clone for Reorderable<S>
where
    S: ReorderShape,
    S::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            engine: self.engine.clone(),
        }
    }
}

impl<S: ReorderShape> Reorderable<S> {
    /// Flattens `shape` into a new engine with the default configuration.
    #[must_use]
    pub fn new(shape: S) -> Self {
        Self::with_config(shape, ReorderConfig::default())
    }

    /// Flattens `shape` into a new engine.
    #[must_use]
    pub fn with_config(shape: S, config: ReorderConfig) -> Self {
        Self {
            engine: ReorderEngine::with_config(shape.flatten(), config),
        }
    }

    /// The underlying engine.
    #[must_use]
    pub fn engine(&self) -> &ReorderEngine<S::Item> {
        &self.engine
    }

    /// The underlying engine, mutably.
    pub fn engine_mut(&mut self) -> &mut ReorderEngine<S::Item> {
        &mut self.engine
    }

    /// See [`ReorderEngine::begin_drag`].
    pub fn begin_drag(&mut self, index: usize) -> Result<(), ReorderError> {
        self.engine.begin_drag(index)
    }

    /// See [`ReorderEngine::enter_item`].
    pub fn enter_item(&mut self, target: usize) -> Result<Displacement, ReorderError> {
        self.engine.enter_item(target)
    }

    /// See [`ReorderEngine::leave_item`].
    pub fn leave_item(&mut self, index: usize) -> Result<bool, ReorderError> {
        self.engine.leave_item(index)
    }

    /// See [`ReorderEngine::end_drag`].
    pub fn end_drag(&mut self) -> Result<bool, ReorderError> {
        self.engine.end_drag()
    }

    /// See [`ReorderEngine::cancel_drag`].
    pub fn cancel_drag(&mut self) -> bool {
        self.engine.cancel_drag()
    }

    /// See [`ReorderEngine::snapshot`].
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_, S::Item> {
        self.engine.snapshot()
    }

    /// Rebuilds the committed shape, discarding any active session.
    pub fn into_shape(self) -> Result<S, ReorderError> {
        S::unflatten(self.engine.into_items())
    }

    /// Rebuilds a copy of the committed shape.
    pub fn to_shape(&self) -> Result<S, ReorderError>
    where
        S::Item: Clone,
    {
        S::unflatten(self.engine.items().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn pinned_head_flattens_head_first() {
        let gallery = PinnedHead::new('m', ['a', 'b']);
        assert_eq!(gallery.len(), 3);
        assert_eq!(gallery.flatten(), ['m', 'a', 'b']);
    }

    #[test]
    fn pinned_head_rejects_empty() {
        assert_eq!(
            PinnedHead::<u8>::unflatten(Vec::new()),
            Err(ReorderError::EmptyShape)
        );
    }

    #[test]
    fn split_matches_shape_layout() {
        let items = ['m', 'a', 'b'];
        let (head, rest) = PinnedHead::split(&items).unwrap();
        assert_eq!(*head, 'm');
        assert_eq!(rest, &['a', 'b']);
        assert!(PinnedHead::<char>::split(&[]).is_none());
    }

    #[test]
    fn nested_children_travel_with_their_group() {
        let list: NestedList<&str, &str> = [
            Group::new("task1", ["act1"]),
            Group::new("task2", ["act1", "act2"]),
            Group::new("task3", ["act1", "act2", "act3"]),
        ]
        .into_iter()
        .collect();
        assert_eq!(list.total_children(), 6);

        let mut reorder = Reorderable::new(list);
        reorder.begin_drag(2).unwrap();
        reorder.enter_item(0).unwrap();
        reorder.end_drag().unwrap();

        let list = reorder.into_shape().unwrap();
        let heads: Vec<_> = list.groups().iter().map(|g| g.head).collect();
        assert_eq!(heads, ["task3", "task1", "task2"]);
        assert_eq!(list.groups()[0].children, ["act1", "act2", "act3"]);
        assert_eq!(list.total_children(), 6);
    }

    #[test]
    fn to_shape_ignores_uncommitted_preview() {
        let mut reorder = Reorderable::new(vec![1, 2, 3]);
        reorder.begin_drag(0).unwrap();
        reorder.enter_item(2).unwrap();
        assert_eq!(reorder.snapshot().to_vec(), [2, 3, 1]);
        assert_eq!(reorder.to_shape(), Ok(vec![1, 2, 3]));
    }
}
