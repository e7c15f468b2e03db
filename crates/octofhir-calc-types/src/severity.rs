//! Severity bands and ordered threshold scales
//!
//! Every metric classifies its value with a [`SeverityScale`]: a static list of
//! bands, each pairing a boundary with the severity assigned when the value
//! lies beyond it. Low-side (`Below`) bands and high-side (`AtLeast`/`Above`)
//! bands are each checked in declaration order, most severe first, and the
//! first match of each tail wins. A bidirectional scale returns the worse of
//! its two tails.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discretized clinical risk of a computed value, ordered `Ok < Borderline <
/// High < Critical`
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Ok,
    Borderline,
    High,
    Critical,
}

impl Severity {
    /// Worst severity of an iterator, `Ok` when empty
    pub fn worst(severities: impl IntoIterator<Item = Severity>) -> Severity {
        severities.into_iter().max().unwrap_or_default()
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Severity::Ok => "ok",
            Severity::Borderline => "borderline",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Boundary of a band
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// value < x
    Below(f64),
    /// value >= x
    AtLeast(f64),
    /// value > x
    Above(f64),
}

impl Bound {
    /// Whether `value` lies beyond this boundary
    pub fn contains(&self, value: f64) -> bool {
        match *self {
            Bound::Below(x) => value < x,
            Bound::AtLeast(x) => value >= x,
            Bound::Above(x) => value > x,
        }
    }

    const fn is_low_side(&self) -> bool {
        matches!(self, Bound::Below(_))
    }
}

/// A boundary and the severity it assigns
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub bound: Bound,
    pub severity: Severity,
}

impl Band {
    pub const fn below(x: f64, severity: Severity) -> Self {
        Self { bound: Bound::Below(x), severity }
    }

    pub const fn at_least(x: f64, severity: Severity) -> Self {
        Self { bound: Bound::AtLeast(x), severity }
    }

    pub const fn above(x: f64, severity: Severity) -> Self {
        Self { bound: Bound::Above(x), severity }
    }
}

/// Which side of a scale is abnormal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Low values are bad
    Falling,
    /// High values are bad
    Rising,
    /// Both tails are bad
    Bidirectional,
}

/// Ordered threshold table for one metric
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeverityScale {
    bands: &'static [Band],
}

impl SeverityScale {
    /// Bands must be listed most severe first within each tail
    pub const fn new(bands: &'static [Band]) -> Self {
        Self { bands }
    }

    /// A scale that never flags anything
    pub const fn flat() -> Self {
        Self { bands: &[] }
    }

    pub fn bands(&self) -> &'static [Band] {
        self.bands
    }

    pub fn direction(&self) -> Option<Direction> {
        let low = self.bands.iter().any(|b| b.bound.is_low_side());
        let high = self.bands.iter().any(|b| !b.bound.is_low_side());
        match (low, high) {
            (true, true) => Some(Direction::Bidirectional),
            (true, false) => Some(Direction::Falling),
            (false, true) => Some(Direction::Rising),
            (false, false) => None,
        }
    }

    /// Classify a value; NaN and values inside every boundary are `Ok`
    pub fn classify(&self, value: f64) -> Severity {
        if value.is_nan() {
            return Severity::Ok;
        }
        let low = self.first_match(value, true);
        let high = self.first_match(value, false);
        low.max(high)
    }

    fn first_match(&self, value: f64, low_side: bool) -> Severity {
        self.bands
            .iter()
            .filter(|band| band.bound.is_low_side() == low_side)
            .find(|band| band.bound.contains(value))
            .map(|band| band.severity)
            .unwrap_or_default()
    }
}
