//! Simulated typing session against a live diff
//!
//! Run with: cargo run --example diff_demo

use diff_panes::messages::SyncEvent;
use diff_panes::report::render_side_by_side;
use diff_panes::sync::{DiffSyncController, SyncOptions};
use std::thread;
use std::time::{Duration, Instant};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let original = "{\n  \"name\": \"cat\",\n  \"legs\": 4\n}";
    let mut session = DiffSyncController::new(
        original,
        original,
        SyncOptions {
            debounce: Duration::from_millis(200),
            ..SyncOptions::default()
        },
    );
    let events = session.subscribe();

    // Keystrokes arrive faster than the debounce, so only the last one is diffed
    let edits = [
        "{\n  \"name\": \"d\",\n  \"legs\": 4\n}",
        "{\n  \"name\": \"do\",\n  \"legs\": 4\n}",
        "{\n  \"name\": \"dog\",\n  \"legs\": 4,\n  \"tail\": true\n}",
    ];
    for edit in edits {
        session.set_right_content(edit);
        session.poll();
        thread::sleep(Duration::from_millis(50));
    }

    while let Some(deadline) = session.next_deadline() {
        thread::sleep(deadline.saturating_duration_since(Instant::now()));
        session.poll();
    }

    for event in events.try_iter() {
        match event {
            SyncEvent::ComputingChanged(computing) => println!("computing: {}", computing),
            SyncEvent::DiffUpdated { generation, result } => {
                println!("generation {}:", generation);
                print!("{}", render_side_by_side(&result.rows));
            }
        }
    }

    println!("left placeholders: {:?}", session.left_placeholders());
    session.dispose();
}
