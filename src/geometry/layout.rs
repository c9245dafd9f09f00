use tracing::warn;

use super::table::{Table, TableSide};
use crate::bounds::LedRange;

const PLACEMENT_NAME_CENTER: &str = "center";
const PLACEMENT_NAME_EVEN: &str = "even";
const PLACEMENT_NAME_ABSOLUTE: &str = "absolute";

/// How a segment is positioned within its side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    /// Centered on the side's midpoint.
    #[default]
    Center,
    /// Spread with equal gaps among the side's other even segments.
    Even,
    /// At `offset_pixels` from the side start.
    Absolute,
}

impl Placement {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Center => PLACEMENT_NAME_CENTER,
            Self::Even => PLACEMENT_NAME_EVEN,
            Self::Absolute => PLACEMENT_NAME_ABSOLUTE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            PLACEMENT_NAME_CENTER => Some(Self::Center),
            PLACEMENT_NAME_EVEN => Some(Self::Even),
            PLACEMENT_NAME_ABSOLUTE => Some(Self::Absolute),
            _ => None,
        }
    }
}

/// Declarative segment on a named side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentDefinition {
    pub name: String,
    pub side_name: String,
    pub width_pixels: usize,
    pub strategy: Placement,
    /// Relative order among even segments of the same side.
    pub order_index: i32,
    /// Offset from the side start, used by absolute placement.
    pub offset_pixels: usize,
}

impl SegmentDefinition {
    pub fn new(
        name: impl Into<String>,
        side_name: impl Into<String>,
        width_pixels: usize,
        strategy: Placement,
    ) -> Self {
        Self {
            name: name.into(),
            side_name: side_name.into(),
            width_pixels,
            strategy,
            order_index: 0,
            offset_pixels: 0,
        }
    }

    pub fn center(name: impl Into<String>, side_name: impl Into<String>, width_pixels: usize) -> Self {
        Self::new(name, side_name, width_pixels, Placement::Center)
    }

    pub fn even(
        name: impl Into<String>,
        side_name: impl Into<String>,
        width_pixels: usize,
        order_index: i32,
    ) -> Self {
        Self {
            order_index,
            ..Self::new(name, side_name, width_pixels, Placement::Even)
        }
    }

    pub fn absolute(
        name: impl Into<String>,
        side_name: impl Into<String>,
        width_pixels: usize,
        offset_pixels: usize,
    ) -> Self {
        Self {
            offset_pixels,
            ..Self::new(name, side_name, width_pixels, Placement::Absolute)
        }
    }
}

/// Segment with a concrete inclusive LED range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatedSegment {
    pub name: String,
    pub start: usize,
    pub end: usize,
    pub side_name: String,
}

impl CalculatedSegment {
    fn place(definition: &SegmentDefinition, start: usize) -> Self {
        Self {
            name: definition.name.clone(),
            start,
            end: start + definition.width_pixels - 1,
            side_name: definition.side_name.clone(),
        }
    }

    pub const fn range(&self) -> LedRange {
        LedRange {
            begin: self.start,
            end: self.end,
        }
    }
}

/// Named set of segment definitions for one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub name: String,
    pub table_name: String,
    pub segments: Vec<SegmentDefinition>,
}

impl Layout {
    pub fn new(name: impl Into<String>, table_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table_name: table_name.into(),
            segments: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_segment(mut self, segment: SegmentDefinition) -> Self {
        self.segments.push(segment);
        self
    }

    /// See [`calculate_segments`].
    pub fn calculate_segments(&self, table: &Table) -> Vec<CalculatedSegment> {
        calculate_segments(self, table)
    }
}

/// Project a layout onto a table.
///
/// Sides are handled in the order they first appear in the layout. Within a
/// side, even segments are placed first, then centered ones, then absolute
/// ones; each class ignores the others, so overlaps are possible. Unknown
/// sides and zero-width segments are skipped with a warning.
pub fn calculate_segments(layout: &Layout, table: &Table) -> Vec<CalculatedSegment> {
    if layout.table_name != table.name {
        warn!(
            layout = %layout.name,
            expected = %layout.table_name,
            table = %table.name,
            "layout belongs to a different table"
        );
    }

    let mut by_side: Vec<(&str, Vec<&SegmentDefinition>)> = Vec::new();
    for definition in &layout.segments {
        if definition.width_pixels == 0 {
            warn!(segment = %definition.name, "segment has zero width, skipped");
            continue;
        }
        let side_name = definition.side_name.as_str();
        match by_side.iter_mut().find(|(name, _)| *name == side_name) {
            Some((_, definitions)) => definitions.push(definition),
            None => by_side.push((side_name, vec![definition])),
        }
    }

    let mut calculated = Vec::new();
    for (side_name, mut definitions) in by_side {
        let Some(side) = table.get_side(side_name) else {
            warn!(side = side_name, table = %table.name, "unknown side, segments skipped");
            continue;
        };

        definitions.sort_by_key(|definition| definition.order_index);

        place_even(side, &definitions, &mut calculated);
        place_center(side, &definitions, &mut calculated);
        place_absolute(side, &definitions, &mut calculated);
    }

    calculated
}

/// gap | seg | gap | seg | gap.
fn place_even(side: &TableSide, definitions: &[&SegmentDefinition], out: &mut Vec<CalculatedSegment>) {
    let even: Vec<_> = definitions
        .iter()
        .filter(|definition| definition.strategy == Placement::Even)
        .collect();
    if even.is_empty() {
        return;
    }

    let total_width: usize = even.iter().map(|definition| definition.width_pixels).sum();
    let available = side.pixel_count().checked_sub(total_width).unwrap_or_else(|| {
        warn!(
            side = %side.name,
            side_pixels = side.pixel_count(),
            total_width,
            "segments are too wide for the side"
        );
        0
    });
    let gap = available / (even.len() + 1);

    let mut offset = gap;
    for definition in even {
        out.push(CalculatedSegment::place(definition, side.start_pixel() + offset));
        offset += definition.width_pixels + gap;
    }
}

fn place_center(side: &TableSide, definitions: &[&SegmentDefinition], out: &mut Vec<CalculatedSegment>) {
    let midpoint = side.start_pixel() + side.pixel_count() / 2;
    for definition in definitions
        .iter()
        .filter(|definition| definition.strategy == Placement::Center)
    {
        let start = midpoint.saturating_sub(definition.width_pixels / 2);
        out.push(CalculatedSegment::place(definition, start));
    }
}

fn place_absolute(side: &TableSide, definitions: &[&SegmentDefinition], out: &mut Vec<CalculatedSegment>) {
    for definition in definitions
        .iter()
        .filter(|definition| definition.strategy == Placement::Absolute)
    {
        out.push(CalculatedSegment::place(
            definition,
            side.start_pixel() + definition.offset_pixels,
        ));
    }
}
