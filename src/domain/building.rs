//! Building: an immutable interval-with-height and its geometric algebra.
//!
//! Every decomposition returns [`Building::EMPTY`] instead of a degenerate
//! result, so operations compose without optional types.

use std::fmt;

/// One building: the half-open span `[start, end)` at a fixed `height`.
///
/// All values must be non-negative. A building whose span is degenerate or
/// whose height is not positive is *empty*; [`Building::EMPTY`] is the
/// canonical empty value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Building {
    pub start: f64,
    pub end: f64,
    pub height: f64,
}

impl Building {
    /// The "no building here" sentinel.
    pub const EMPTY: Building = Building {
        start: 0.0,
        end: 0.0,
        height: 0.0,
    };

    pub const fn new(start: f64, end: f64, height: f64) -> Self {
        Self { start, end, height }
    }

    /// Copy of this building with another height.
    pub fn with_height(&self, height: f64) -> Self {
        Self { height, ..*self }
    }

    pub fn is_empty(&self) -> bool {
        self.end == self.start || self.height <= 0.0
    }

    pub fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }

    /// True if `self` lies entirely left of `other`; touching counts.
    pub fn is_left_of(&self, other: &Building) -> bool {
        self.end <= other.start
    }

    /// True if `self` lies entirely right of `other`; touching counts.
    pub fn is_right_of(&self, other: &Building) -> bool {
        self.start >= other.end
    }

    /// True if `self` ends exactly where `other` starts.
    pub fn is_left_adjacent_of(&self, other: &Building) -> bool {
        self.end == other.start
    }

    pub fn is_same_height(&self, other: &Building) -> bool {
        self.height == other.height
    }

    /// True if `x` lies inside the span of a non-empty building.
    pub fn covers(&self, x: f64) -> bool {
        self.is_not_empty() && self.start <= x && x < self.end
    }

    /// The part between both starts, owned by whichever starts further left.
    ///
    /// ```text
    ///  A = [2, 4.5) at 1.5, B = [4, 7) at 2.5
    ///
    ///      ----$=====      '-' left part   [2, 4)   at 1.5
    ///   2 |    +++++++     '$' intersect   [4, 4.5) at 2.5
    ///   1 |**A*#++B+++     '=' right part  [4.5, 7) at 2.5
    ///     +-----------
    ///      2   4     7
    /// ```
    ///
    /// Ties favor `self`. Returns [`Building::EMPTY`] if either side is empty
    /// or both start at the same x.
    pub fn left_part_of_both(&self, other: &Building) -> Building {
        if self.is_empty() || other.is_empty() {
            return Building::EMPTY;
        }

        let height = if other.start < self.start {
            other.height
        } else {
            self.height
        };

        or_empty(
            self.start.min(other.start),
            self.start.max(other.start),
            height,
        )
    }

    /// The part between both ends, owned by whichever ends further right.
    ///
    /// See [`Building::left_part_of_both`] for a picture. Ties favor `self`.
    pub fn right_part_of_both(&self, other: &Building) -> Building {
        if self.is_empty() || other.is_empty() {
            return Building::EMPTY;
        }

        let height = if other.end > self.end {
            other.height
        } else {
            self.height
        };

        or_empty(self.end.min(other.end), self.end.max(other.end), height)
    }

    /// The overlapping span of both buildings at the taller of the two heights.
    ///
    /// Returns [`Building::EMPTY`] if the spans do not overlap.
    pub fn intersect(&self, other: &Building) -> Building {
        if self.is_left_of(other) || self.is_right_of(other) {
            return Building::EMPTY;
        }

        let height = self.height.max(other.height);

        match (
            self.is_overlapping_left_of(other),
            self.is_overlapping_right_of(other),
        ) {
            // self sticks out on both sides of other
            (true, true) => or_empty(other.start, other.end, height),
            (true, false) => or_empty(other.start, self.end, height),
            (false, true) => or_empty(self.start, other.end, height),
            // self lies within other
            (false, false) => or_empty(self.start, self.end, height),
        }
    }

    fn is_overlapping_left_of(&self, other: &Building) -> bool {
        self.end > other.start && self.start < other.start
    }

    fn is_overlapping_right_of(&self, other: &Building) -> bool {
        other.end > self.start && self.end > other.end
    }
}

/// Shared guard of every decomposition: degenerate results become EMPTY.
fn or_empty(start: f64, end: f64, height: f64) -> Building {
    let building = Building::new(start, end, height);
    if building.is_empty() {
        Building::EMPTY
    } else {
        building
    }
}

/// Renders the textual form accepted by the parser, e.g. `[1,2.5,3]`.
/// Empty buildings render as an empty string.
impl fmt::Display for Building {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        match f.precision() {
            Some(p) => write!(
                f,
                "[{:.p$},{:.p$},{:.p$}]",
                self.start,
                self.end,
                self.height,
                p = p
            ),
            None => write!(f, "[{},{},{}]", self.start, self.end, self.height),
        }
    }
}
