// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless host pages for the `understory_reorder` demos.
//!
//! Each page owns one data shape, forwards gestures to a [`Reorderable`], and
//! renders the snapshot as text rows with the offset a real renderer would
//! animate toward.

use kurbo::Vec2;
use understory_reorder::offset::Axis;
use understory_reorder::{Group, NestedList, PinnedHead, ReorderError, ReorderShape, Reorderable};

/// Pages reachable through [`route`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Page {
    /// Tasks with nested activities, reordered vertically.
    Tasks,
    /// Thumbnail strip with a pinned main image, reordered horizontally.
    Gallery,
    /// Plain list of titles.
    Flat,
    /// Anything else.
    NotFound,
}

/// Maps a path to a page. A trailing slash is ignored.
pub fn route(path: &str) -> Page {
    let path = path.trim_end_matches('/');
    match path {
        "" => Page::Tasks,
        "/todo" => Page::Gallery,
        "/flat" => Page::Flat,
        _ => Page::NotFound,
    }
}

/// Gesture events as a platform would deliver them.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Gesture {
    /// The user grabbed the item at this index.
    Start(usize),
    /// The pointer entered the item at this index.
    Enter(usize),
    /// The pointer left the item at this index.
    Leave(usize),
    /// The item was dropped.
    End,
    /// The drag was abandoned.
    Cancel,
}

/// Three tasks; task `n` owns activities `act1..=actn`.
pub fn seed_tasks() -> NestedList<String, String> {
    (1..=3)
        .map(|n| Group::new(format!("task{n}"), (1..=n).map(|act| format!("act{act}"))))
        .collect()
}

/// A main image followed by five thumbnails.
pub fn seed_gallery() -> PinnedHead<String> {
    PinnedHead::new("main".into(), (1..=5).map(|n| format!("image{n}")))
}

/// Three plain titles.
pub fn seed_flat() -> Vec<String> {
    ["draft", "review", "ship"].map(String::from).to_vec()
}

/// One rendered row.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    /// Text drawn for the item.
    pub label: String,
    /// Shift from the row's committed position.
    pub offset: Vec2,
    /// Whether the row is the hidden drag origin.
    pub hidden: bool,
}

/// A page that drives a reorderable shape.
pub struct PageHost<S: ReorderShape> {
    reorder: Reorderable<S>,
    axis: Axis,
    extent: f64,
    label: fn(&S::Item) -> String,
}

impl<S: ReorderShape> PageHost<S> {
    /// Creates a page over `shape`, laid out along `axis` with rows `extent`
    /// apart.
    pub fn new(shape: S, axis: Axis, extent: f64, label: fn(&S::Item) -> String) -> Self {
        Self {
            reorder: Reorderable::new(shape),
            axis,
            extent,
            label,
        }
    }

    /// Forwards a gesture. Rejected gestures are logged and otherwise ignored.
    pub fn dispatch(&mut self, gesture: Gesture) -> Result<(), ReorderError> {
        let result = match gesture {
            Gesture::Start(index) => self.reorder.begin_drag(index),
            Gesture::Enter(index) => self.reorder.enter_item(index).map(drop),
            Gesture::Leave(index) => self.reorder.leave_item(index).map(drop),
            Gesture::End => self.reorder.end_drag().map(drop),
            Gesture::Cancel => {
                self.reorder.cancel_drag();
                Ok(())
            }
        };
        if let Err(err) = &result {
            tracing::warn!(?gesture, %err, "gesture ignored");
        }
        result
    }

    /// Renders rows in committed order.
    ///
    /// During a drag, items the dragged item has passed are shifted one row
    /// by their offset, and the origin row is flagged once it is hidden.
    pub fn render(&self) -> Vec<Row> {
        let snapshot = self.reorder.snapshot();
        snapshot
            .iter_committed()
            .enumerate()
            .map(|(index, (item, displacement))| Row {
                label: (self.label)(item),
                offset: displacement.offset(self.axis, self.extent),
                hidden: snapshot.is_index_hidden(index),
            })
            .collect()
    }

    /// Consumes the page and returns its data in the committed order.
    pub fn into_shape(self) -> Result<S, ReorderError> {
        self.reorder.into_shape()
    }
}

/// The tasks page.
pub fn tasks_page() -> PageHost<NestedList<String, String>> {
    PageHost::new(seed_tasks(), Axis::Vertical, 50.0, |group| {
        format!("{} [{}]", group.head, group.children.join(", "))
    })
}

/// The gallery page.
pub fn gallery_page() -> PageHost<PinnedHead<String>> {
    PageHost::new(seed_gallery(), Axis::Horizontal, 100.0, String::clone)
}

/// The flat list page.
pub fn flat_page() -> PageHost<Vec<String>> {
    PageHost::new(seed_flat(), Axis::Vertical, 50.0, String::clone)
}
