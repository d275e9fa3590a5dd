//! Query filters over close approaches
//!
//! Every field is an optional constraint; absent fields impose none. The
//! combined predicate is a pure conjunction, evaluated per approach with
//! short-circuiting in a fixed order: date filters, then distance, velocity,
//! diameter, and finally the hazardous flag.

use chrono::NaiveDate;

use crate::entities::{CloseApproach, NearEarthObject};

/// Optional constraints applied to each approach and its linked object.
#[derive(Debug, Clone, Default)]
pub struct ApproachFilters {
    /// Exact calendar day of the approach.
    pub date: Option<NaiveDate>,

    /// Inclusive lower bound on the approach day.
    pub start_date: Option<NaiveDate>,

    /// Inclusive upper bound on the approach day.
    pub end_date: Option<NaiveDate>,

    /// Inclusive bounds on the approach distance, in AU.
    pub distance_min: Option<f64>,
    pub distance_max: Option<f64>,

    /// Inclusive bounds on the relative velocity, in km/s.
    pub velocity_min: Option<f64>,
    pub velocity_max: Option<f64>,

    /// Inclusive bounds on the object's diameter, in km.
    pub diameter_min: Option<f64>,
    pub diameter_max: Option<f64>,

    /// Exact match on the object's hazardous classification.
    pub hazardous: Option<bool>,
}

impl ApproachFilters {
    /// True when the approach satisfies every supplied constraint.
    ///
    /// An approach with no parseable time fails any bounded date filter, and
    /// an object with unknown diameter fails any bounded diameter filter
    /// (NaN comparisons are false).
    pub fn matches(&self, approach: &CloseApproach, neo: &NearEarthObject) -> bool {
        if self.date.is_some() || self.start_date.is_some() || self.end_date.is_some() {
            let Some(day) = approach.time.map(|t| t.date()) else {
                return false;
            };
            if self.date.is_some_and(|d| d != day) {
                return false;
            }
            if self.start_date.is_some_and(|d| day < d) {
                return false;
            }
            if self.end_date.is_some_and(|d| day > d) {
                return false;
            }
        }
        if !in_range(approach.distance, self.distance_min, self.distance_max) {
            return false;
        }
        if !in_range(approach.velocity, self.velocity_min, self.velocity_max) {
            return false;
        }
        if !in_range(neo.diameter, self.diameter_min, self.diameter_max) {
            return false;
        }
        if self.hazardous.is_some_and(|h| h != neo.hazardous) {
            return false;
        }
        true
    }
}

/// Inclusive range check with either bound optional. NaN fails any bound.
fn in_range(value: f64, min: Option<f64>, max: Option<f64>) -> bool {
    let above_min = min.map_or(true, |m| value >= m);
    let below_max = max.map_or(true, |m| value <= m);
    above_min && below_max
}

/// Yield at most `n` leading elements of `iter`, preserving order.
///
/// `None` or `Some(0)` means no limit. Never pulls more than `n` elements
/// from the upstream iterator, so a lazy source stays lazy.
pub fn limit<I: Iterator>(iter: I, n: Option<usize>) -> impl Iterator<Item = I::Item> {
    let n = match n {
        Some(n) if n > 0 => n,
        _ => usize::MAX,
    };
    iter.take(n)
}
