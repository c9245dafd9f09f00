use tracing::debug;

/// One edge of the table.
///
/// `start_pixel` and `pixel_count` are derived by the owning [`Table`] and
/// are only meaningful after it has recalculated its geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSide {
    pub name: String,
    /// Physical length in meters.
    pub length_meters: f64,
    /// Position in the walk around the table.
    pub order: u32,
    start_pixel: usize,
    pixel_count: usize,
}

impl TableSide {
    pub fn new(name: impl Into<String>, length_meters: f64, order: u32) -> Self {
        Self {
            name: name.into(),
            length_meters,
            order,
            start_pixel: 0,
            pixel_count: 0,
        }
    }

    /// Strip index of the first pixel on this side.
    pub const fn start_pixel(&self) -> usize {
        self.start_pixel
    }

    pub const fn pixel_count(&self) -> usize {
        self.pixel_count
    }

    /// Strip index of the last pixel, `None` for a side without pixels.
    pub const fn end_pixel(&self) -> Option<usize> {
        if self.pixel_count == 0 {
            return None;
        }
        Some(self.start_pixel + self.pixel_count - 1)
    }
}

/// Physical table with LED strip running around its sides.
///
/// Sides are kept sorted by `order`. Side ranges are recomputed on every
/// change to the density or to a side.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub name: String,
    pub width_meters: f64,
    pub length_meters: f64,
    pixels_per_meter: u32,
    sides: Vec<TableSide>,
}

impl Table {
    pub fn new(
        name: impl Into<String>,
        width_meters: f64,
        length_meters: f64,
        pixels_per_meter: u32,
    ) -> Self {
        Self {
            name: name.into(),
            width_meters,
            length_meters,
            pixels_per_meter,
            sides: Vec::new(),
        }
    }

    /// Add a side while building.
    #[must_use]
    pub fn with_side(mut self, side: TableSide) -> Self {
        self.add_side(side);
        self
    }

    pub fn add_side(&mut self, side: TableSide) {
        self.sides.push(side);
        self.recalculate_geometry();
    }

    pub const fn pixels_per_meter(&self) -> u32 {
        self.pixels_per_meter
    }

    pub fn set_pixels_per_meter(&mut self, pixels_per_meter: u32) {
        self.pixels_per_meter = pixels_per_meter;
        self.recalculate_geometry();
    }

    /// Change the length of the named side.
    ///
    /// Returns `false` when no side has that name.
    pub fn set_side_length(&mut self, name: &str, length_meters: f64) -> bool {
        let Some(side) = self.sides.iter_mut().find(|side| side.name == name) else {
            return false;
        };
        side.length_meters = length_meters;
        self.recalculate_geometry();
        true
    }

    /// Sides in walk order.
    pub fn sides(&self) -> &[TableSide] {
        &self.sides
    }

    pub fn get_side(&self, name: &str) -> Option<&TableSide> {
        self.sides.iter().find(|side| side.name == name)
    }

    /// Pixels on all sides together.
    pub fn total_pixels(&self) -> usize {
        self.sides.iter().map(TableSide::pixel_count).sum()
    }

    /// Sort sides and derive their strip ranges.
    ///
    /// Each side gets `floor(length * pixels_per_meter)` pixels, starting
    /// right after the previous side.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn recalculate_geometry(&mut self) {
        self.sides.sort_by_key(|side| side.order);

        let density = f64::from(self.pixels_per_meter);
        let mut next_pixel = 0;
        for side in &mut self.sides {
            side.start_pixel = next_pixel;
            side.pixel_count = libm::floor(side.length_meters * density).max(0.0) as usize;
            next_pixel += side.pixel_count;
        }

        debug!(table = %self.name, total_pixels = next_pixel, "table geometry recalculated");
    }
}
