// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_reorder` crate.
//!
//! These walk full gestures through the public API: preview order, marker
//! bookkeeping, commit, and the shape adapters built on top of the engine.

use understory_reorder::{
    ConflictPolicy, Displacement, Group, NestedList, PinnedHead, ReorderConfig, ReorderEngine,
    ReorderError, Reorderable,
};

#[test]
fn three_item_scenario() {
    let mut engine = ReorderEngine::new(vec!['A', 'B', 'C']);
    engine.begin_drag(0).unwrap();
    engine.enter_item(2).unwrap();

    let session = engine.session().unwrap();
    assert_eq!(session.order(), &[1, 2, 0]);
    assert!(session.displaced_up().is_empty());
    assert_eq!(session.displaced_down(), &[2]);
    assert_eq!(engine.snapshot().to_vec(), ['B', 'C', 'A']);

    engine.end_drag().unwrap();
    assert_eq!(engine.items(), &['B', 'C', 'A']);
    assert_eq!(engine.snapshot().to_vec(), ['B', 'C', 'A']);
}

#[test]
fn single_move_preserves_items_for_every_pair() {
    let items: Vec<u32> = (0..6).collect();
    for from in 0..items.len() {
        for to in 0..items.len() {
            let mut engine = ReorderEngine::new(items.clone());
            engine.begin_drag(from).unwrap();
            if from != to {
                engine.enter_item(to).unwrap();
            }
            engine.end_drag().unwrap();

            let mut expected = items.clone();
            let moved = expected.remove(from);
            expected.insert(to, moved);
            assert_eq!(engine.items(), expected.as_slice(), "move {from} -> {to}");
        }
    }
}

#[test]
fn double_enter_restores_markers() {
    let mut engine = ReorderEngine::new(vec![0, 1, 2, 3, 4]);
    engine.begin_drag(2).unwrap();
    engine.enter_item(4).unwrap();
    let up_before = engine.session().unwrap().displaced_up().to_vec();
    let down_before = engine.session().unwrap().displaced_down().to_vec();

    engine.enter_item(0).unwrap();
    engine.enter_item(0).unwrap();

    let session = engine.session().unwrap();
    assert_eq!(session.displaced_up(), up_before.as_slice());
    assert_eq!(session.displaced_down(), down_before.as_slice());
}

#[test]
fn returning_to_origin_clears_all_offsets() {
    let mut engine = ReorderEngine::new(vec![0, 1, 2, 3, 4]);
    engine.begin_drag(1).unwrap();
    engine.enter_item(2).unwrap();
    engine.enter_item(3).unwrap();
    engine.enter_item(0).unwrap();
    assert!(engine.displacement(3).is_displaced());
    assert_eq!(engine.displacement(0), Displacement::Up);

    engine.enter_item(1).unwrap();
    let snapshot = engine.snapshot();
    assert!((0..snapshot.len()).all(|i| !snapshot.displacement(i).is_displaced()));
    assert_eq!(snapshot.to_vec(), [0, 1, 2, 3, 4]);

    assert_eq!(engine.end_drag(), Ok(false));
}

#[test]
fn leave_is_advisory() {
    let mut engine = ReorderEngine::new(vec!["a", "b", "c", "d"]);
    engine.begin_drag(1).unwrap();
    engine.enter_item(3).unwrap();
    let order = engine.snapshot().order().unwrap().to_vec();

    for index in 0..4 {
        engine.leave_item(index).unwrap();
    }

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.order().unwrap(), order.as_slice());
    assert_eq!(snapshot.displacement(3), Displacement::Down);
    assert!(snapshot.origin_hidden());
    // The origin item now sits in the last slot.
    assert!(snapshot.is_hidden(3));
    assert!(!snapshot.is_hidden(1));
}

#[test]
fn visibility_is_restored_on_drop() {
    let mut engine = ReorderEngine::new(vec![1, 2]);
    engine.begin_drag(0).unwrap();
    engine.leave_item(0).unwrap();
    assert!(engine.origin_hidden());
    engine.end_drag().unwrap();
    assert!(!engine.origin_hidden());
    assert!(!engine.snapshot().is_hidden(0));
}

#[test]
fn end_drag_is_idempotent() {
    let mut engine = ReorderEngine::new(vec![1, 2, 3]);
    engine.begin_drag(0).unwrap();
    engine.enter_item(1).unwrap();
    assert_eq!(engine.end_drag(), Ok(true));
    let revision = engine.revision();

    assert_eq!(engine.end_drag(), Err(ReorderError::NoActiveSession));
    assert_eq!(engine.end_drag(), Err(ReorderError::NoActiveSession));
    assert_eq!(engine.items(), &[2, 1, 3]);
    assert_eq!(engine.revision(), revision);
}

#[test]
fn double_begin_is_rejected() {
    let mut engine = ReorderEngine::new(vec![1, 2, 3]);
    engine.begin_drag(0).unwrap();
    assert_eq!(
        engine.begin_drag(2),
        Err(ReorderError::SessionAlreadyActive { origin: 0 })
    );
    assert_eq!(engine.origin(), Some(0));
}

#[test]
fn double_begin_restarts_under_restart_policy() {
    let config = ReorderConfig::default().with_conflict(ConflictPolicy::Restart);
    let mut engine = ReorderEngine::with_config(vec![1, 2, 3], config);
    engine.begin_drag(0).unwrap();
    engine.enter_item(2).unwrap();
    engine.begin_drag(2).unwrap();
    engine.enter_item(0).unwrap();
    engine.end_drag().unwrap();
    assert_eq!(engine.items(), &[3, 1, 2]);
}

#[test]
fn revision_tracks_committed_changes() {
    let mut engine = ReorderEngine::new(vec![1, 2, 3]);
    let snapshot_revision = engine.snapshot().revision();
    assert_eq!(snapshot_revision, 0);

    engine.begin_drag(0).unwrap();
    engine.enter_item(2).unwrap();
    engine.enter_item(0).unwrap();
    engine.end_drag().unwrap();
    assert_eq!(engine.revision(), 0);

    engine.begin_drag(0).unwrap();
    engine.enter_item(1).unwrap();
    engine.end_drag().unwrap();
    assert_eq!(engine.revision(), 1);
    assert_eq!(engine.snapshot().revision(), 1);
}

#[test]
fn markers_follow_the_passed_item() {
    let mut engine = ReorderEngine::new(vec!['a', 'b', 'c']);
    engine.begin_drag(0).unwrap();
    engine.enter_item(2).unwrap();
    let snapshot = engine.snapshot();

    let preview: Vec<_> = snapshot.iter_with_displacement().collect();
    assert_eq!(
        preview,
        [
            (&'b', Displacement::None),
            (&'c', Displacement::Down),
            (&'a', Displacement::None),
        ]
    );

    let committed: Vec<_> = snapshot.iter_committed().collect();
    assert_eq!(
        committed,
        [
            (&'a', Displacement::None),
            (&'b', Displacement::None),
            (&'c', Displacement::Down),
        ]
    );
    assert_eq!(snapshot.committed_index(2), Some(0));
}

#[test]
fn hidden_origin_by_slot_and_by_index() {
    let mut engine = ReorderEngine::new(vec!['a', 'b', 'c']);
    engine.begin_drag(0).unwrap();
    engine.leave_item(0).unwrap();
    engine.enter_item(1).unwrap();
    let snapshot = engine.snapshot();
    assert!(snapshot.is_hidden(1));
    assert!(!snapshot.is_hidden(0));
    assert!(snapshot.is_index_hidden(0));
    assert!(!snapshot.is_index_hidden(1));
}

fn gallery() -> PinnedHead<&'static str> {
    PinnedHead::new("main", ["image1", "image2", "image3", "image4"])
}

#[test]
fn gallery_image_dropped_on_head_becomes_head() {
    let mut reorder = Reorderable::new(gallery());
    reorder.begin_drag(3).unwrap();
    reorder.enter_item(0).unwrap();
    reorder.end_drag().unwrap();

    let gallery = reorder.into_shape().unwrap();
    assert_eq!(gallery.head, "image3");
    assert_eq!(gallery.rest, ["main", "image1", "image2", "image4"]);
}

#[test]
fn gallery_head_dragged_into_images() {
    let mut reorder = Reorderable::new(gallery());
    reorder.begin_drag(0).unwrap();
    reorder.enter_item(3).unwrap();

    let snapshot = reorder.snapshot();
    let preview = snapshot.to_vec();
    let (head, rest) = PinnedHead::split(&preview).unwrap();
    assert_eq!(*head, "image1");
    assert_eq!(rest, ["image2", "image3", "main", "image4"]);

    reorder.end_drag().unwrap();
    let gallery = reorder.into_shape().unwrap();
    assert_eq!(gallery.head, "image1");
    assert_eq!(gallery.rest[2], "main");
    assert_eq!(gallery.len(), 5);
}

#[test]
fn nested_list_reorders_groups() {
    let tasks = NestedList::new(vec![
        Group::new("task1", ["act1"]),
        Group::new("task2", ["act1", "act2"]),
        Group::new("task3", ["act1", "act2", "act3"]),
    ]);
    let mut reorder = Reorderable::new(tasks);
    reorder.begin_drag(0).unwrap();
    reorder.enter_item(1).unwrap();
    reorder.enter_item(2).unwrap();
    reorder.end_drag().unwrap();

    let tasks = reorder.into_shape().unwrap().into_groups();
    let heads: Vec<_> = tasks.iter().map(|group| group.head).collect();
    assert_eq!(heads, ["task2", "task3", "task1"]);
    assert_eq!(tasks[2].children, ["act1"]);
}

#[test]
fn flat_list_shape_round_trips_through_engine() {
    let mut reorder = Reorderable::new(vec![10, 20, 30]);
    reorder.begin_drag(2).unwrap();
    reorder.enter_item(1).unwrap();
    reorder.cancel_drag();
    reorder.begin_drag(2).unwrap();
    reorder.enter_item(0).unwrap();
    reorder.end_drag().unwrap();
    assert_eq!(reorder.engine().revision(), 1);
    assert_eq!(reorder.into_shape(), Ok(vec![30, 10, 20]));
}
