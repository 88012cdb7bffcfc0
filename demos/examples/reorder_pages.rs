// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reorder pages.
//!
//! Replay scripted drag gestures against the task list, the thumbnail gallery,
//! and a flat list, printing every frame a renderer would draw.
//!
//! Run:
//! - `cargo run -p understory_reorder_demos --example reorder_pages`
//! - `RUST_LOG=understory_reorder=trace cargo run -p understory_reorder_demos --example reorder_pages`

use tracing_subscriber::EnvFilter;
use understory_reorder::ReorderShape;
use understory_reorder_demos::{
    Gesture, Page, PageHost, Row, flat_page, gallery_page, route, tasks_page,
};

fn print_rows(rows: &[Row]) {
    for row in rows {
        let visibility = if row.hidden { " (hidden)" } else { "" };
        println!(
            "    {:<28} offset=({:>6.1}, {:>6.1}){visibility}",
            row.label, row.offset.x, row.offset.y
        );
    }
}

fn replay<S: ReorderShape>(mut page: PageHost<S>, gestures: &[Gesture]) {
    println!("  initial");
    print_rows(&page.render());
    for &gesture in gestures {
        // Rejected gestures are logged by the host and leave the page as-is.
        let _ = page.dispatch(gesture);
        println!("  after {gesture:?}");
        print_rows(&page.render());
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,understory_reorder=debug")),
        )
        .init();

    for path in ["/", "/todo", "/flat", "/missing"] {
        println!("GET {path}");
        match route(path) {
            Page::Tasks => replay(
                tasks_page(),
                &[
                    Gesture::Start(0),
                    Gesture::Leave(0),
                    Gesture::Enter(1),
                    Gesture::Enter(2),
                    Gesture::End,
                ],
            ),
            Page::Gallery => replay(
                gallery_page(),
                &[
                    Gesture::Start(3),
                    Gesture::Leave(3),
                    Gesture::Enter(2),
                    Gesture::Enter(1),
                    Gesture::Enter(0),
                    Gesture::End,
                ],
            ),
            Page::Flat => replay(
                flat_page(),
                &[
                    Gesture::Enter(1),
                    Gesture::Start(2),
                    Gesture::Enter(0),
                    Gesture::Enter(0),
                    Gesture::Cancel,
                ],
            ),
            Page::NotFound => println!("  404: no page at {path}"),
        }
    }
}
