//! Close-approach entity type

use chrono::NaiveDateTime;

use crate::core::time::{format_approach_time, parse_approach_time};

/// A single close approach to Earth by an NEO.
///
/// Carries the date and time (UTC, minute precision) of closest approach,
/// the nominal approach distance in astronomical units, and the relative
/// approach velocity in kilometers per second.
///
/// `neo` is an index into the owning
/// [`NeoDatabase`](crate::core::database::NeoDatabase)'s NEO table, set
/// exactly once during the link phase. A `None` after linking means the
/// designation resolved to no catalogued object; the database substitutes
/// its unknown-object placeholder on lookup, so callers never observe a
/// dangling reference.
#[derive(Debug, Clone)]
pub struct CloseApproach {
    /// Primary designation of the approaching object (foreign key into the
    /// NEO catalog).
    pub designation: String,

    /// Moment of closest approach; `None` when the source value was missing
    /// or unparseable.
    pub time: Option<NaiveDateTime>,

    /// Nominal approach distance in astronomical units.
    pub distance: f64,

    /// Relative approach velocity in km/s.
    pub velocity: f64,

    /// Index of the owning NEO in the database table; set during linking.
    pub(crate) neo: Option<usize>,
}

impl CloseApproach {
    /// Build an approach from raw catalog tokens.
    ///
    /// Defaulting rules: an unparseable calendar date becomes `None`, and
    /// missing or unparseable distance and velocity become `0.0`.
    pub fn new(designation: &str, time: &str, distance: &str, velocity: &str) -> Self {
        Self {
            designation: designation.to_string(),
            time: parse_approach_time(time),
            distance: distance.parse().unwrap_or(0.0),
            velocity: velocity.parse().unwrap_or(0.0),
            neo: None,
        }
    }

    /// Approach time at minute precision, e.g. `2020-01-01 00:00`; empty
    /// when the time is unknown.
    pub fn time_str(&self) -> String {
        format_approach_time(self.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization_defaults() {
        let approach = CloseApproach::new("", "", "", "");
        assert_eq!(approach.designation, "");
        assert_eq!(approach.time, None);
        assert_eq!(approach.distance, 0.0);
        assert_eq!(approach.velocity, 0.0);
        assert_eq!(approach.neo, None);
    }

    #[test]
    fn test_normalization_populated() {
        let approach = CloseApproach::new("433", "2020-Jan-01 00:00", "0.5", "10.0");
        assert_eq!(approach.designation, "433");
        assert_eq!(approach.time_str(), "2020-01-01 00:00");
        assert_eq!(approach.distance, 0.5);
        assert_eq!(approach.velocity, 10.0);
    }

    #[test]
    fn test_unparseable_time_is_none() {
        let approach = CloseApproach::new("433", "whenever", "0.5", "10.0");
        assert_eq!(approach.time, None);
        assert_eq!(approach.time_str(), "");
    }
}
