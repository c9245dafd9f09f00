//! Drive a simulated table from text commands on stdin.
//!
//! ```text
//! RUST_LOG=debug cargo run --features demo --bin table-lights-demo
//! queue north_left Chase color=RED speed_delay=2
//! trigger_all
//! immediate ALL Rainbow
//! quit
//! ```

use std::io::BufRead;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use table_lights::{
    CommandPoll, CommandRecord, CommandSource, Controller, Layout, RecordingSink, RuntimeConfig,
    SegmentDefinition, StripConfig, Table, TableSide, calculate_segments, run,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

struct StdinSource {
    lines: Receiver<String>,
}

impl StdinSource {
    fn spawn() -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            for line in std::io::stdin().lock().lines() {
                let Ok(line) = line else {
                    break;
                };
                if tx.send(line).is_err() {
                    break;
                }
            }
        });
        Self { lines: rx }
    }
}

impl CommandSource for StdinSource {
    fn poll_command(&mut self) -> CommandPoll {
        loop {
            match self.lines.try_recv() {
                Ok(line) if line.trim().is_empty() => {}
                Ok(line) => match line.parse::<CommandRecord>() {
                    Ok(command) => return CommandPoll::Ready(command),
                    Err(error) => warn!(%error, line = %line, "cannot read command"),
                },
                Err(TryRecvError::Empty) => return CommandPoll::Pending,
                Err(TryRecvError::Disconnected) => return CommandPoll::Closed,
            }
        }
    }
}

fn sample_table() -> Table {
    Table::new("game table", 2.0, 1.0, 60)
        .with_side(TableSide::new("north", 2.0, 0))
        .with_side(TableSide::new("east", 1.0, 1))
        .with_side(TableSide::new("south", 2.0, 2))
        .with_side(TableSide::new("west", 1.0, 3))
}

fn sample_layout() -> Layout {
    Layout::new("players", "game table")
        .with_segment(SegmentDefinition::even("north_left", "north", 20, 0))
        .with_segment(SegmentDefinition::even("north_right", "north", 20, 1))
        .with_segment(SegmentDefinition::center("east_seat", "east", 30))
        .with_segment(SegmentDefinition::center("south_seat", "south", 40))
        .with_segment(SegmentDefinition::absolute("west_corner", "west", 10, 5))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let table = sample_table();
    let segments = calculate_segments(&sample_layout(), &table);
    for segment in &segments {
        info!(
            segment = %segment.name,
            side = %segment.side_name,
            start = segment.start,
            end = segment.end,
            "segment placed"
        );
    }

    let strip = StripConfig {
        led_count: table.total_pixels(),
        ..StripConfig::default()
    };
    let controller = Controller::from_segments(RecordingSink::new(strip.led_count), &segments);
    let controller = run(controller, StdinSource::spawn(), &RuntimeConfig::default());

    let sink = controller.into_sink();
    info!(
        flushes = sink.flushes(),
        writes = sink.writes(),
        lit = sink.shown().iter().filter(|color| **color != table_lights::color::BLACK).count(),
        "demo finished"
    );
}
