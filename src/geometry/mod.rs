//! Table geometry and segment placement.
//!
//! A [`Table`] turns physical side lengths into strip index ranges. A
//! [`Layout`] places named segments on those sides, and
//! [`calculate_segments`] projects both into concrete LED ranges.

mod layout;
mod table;

pub use layout::{CalculatedSegment, Layout, Placement, SegmentDefinition, calculate_segments};
pub use table::{Table, TableSide};
