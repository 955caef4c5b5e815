//! Building factory: validates and parses the textual form `[start,end,height]`.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::domain::building::Building;
use crate::domain::error::{DomainError, DomainResult};

static BUILDING_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let part = r"(\d+(?:\.\d+)?)";
    Regex::new(&format!(r"^\[{part},{part},{part}\]$")).expect("building pattern is valid")
});

/// Parse a building from its textual form, e.g. `[1,2.5,3]`.
///
/// Checks run in a fixed order so each rejection names its reason:
/// blank, negative sign, pattern, height, then start/end order.
/// `start == end` is accepted and yields an empty building.
pub fn parse_building(input: &str) -> DomainResult<Building> {
    if input.trim().is_empty() {
        return Err(DomainError::BlankInput);
    }

    if input.contains('-') {
        return Err(DomainError::NegativeValues(input.to_string()));
    }

    let caps = BUILDING_PATTERN
        .captures(input)
        .ok_or_else(|| DomainError::Unparseable(input.to_string()))?;

    // digit runs too long for f64 parse to infinity
    let field = |i: usize| -> DomainResult<f64> {
        caps[i]
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| DomainError::Unparseable(input.to_string()))
    };
    let (start, end, height) = (field(1)?, field(2)?, field(3)?);

    if height <= 0.0 {
        return Err(DomainError::FlatBuilding { height });
    }
    if start > end {
        return Err(DomainError::StartAfterEnd { start, end });
    }

    trace!(start, end, height, "parsed building");
    Ok(Building::new(start, end, height))
}

impl FromStr for Building {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_building(s)
    }
}
