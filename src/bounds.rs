/// Inclusive range of strip indices owned by one segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedRange {
    pub begin: usize,
    pub end: usize,
}

impl LedRange {
    /// Create a range, returning `None` when `begin > end`.
    pub const fn new(begin: usize, end: usize) -> Option<Self> {
        if begin > end {
            return None;
        }
        Some(Self { begin, end })
    }

    /// Number of LEDs in the range.
    pub const fn count(self) -> usize {
        self.end - self.begin + 1
    }

    /// Whether `index` falls inside the range.
    pub const fn contains(self, index: usize) -> bool {
        index >= self.begin && index <= self.end
    }

    /// Iterate over the strip indices in order.
    pub fn indices(self) -> impl Iterator<Item = usize> {
        self.begin..=self.end
    }
}
