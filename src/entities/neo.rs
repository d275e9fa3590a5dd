//! Near-Earth object entity type

use std::fmt;

/// A near-Earth object (NEO).
///
/// Encapsulates the semantic and physical parameters of one object: its
/// primary designation (required, unique across the catalog), IAU name
/// (optional), diameter in kilometers (sometimes unknown), and whether the
/// object is classified as potentially hazardous.
///
/// The `approaches` collection holds indices into the owning
/// [`NeoDatabase`](crate::core::database::NeoDatabase)'s time-sorted approach
/// table. It starts empty and is populated exactly once during the link
/// phase; the entity is immutable afterwards.
#[derive(Debug, Clone)]
pub struct NearEarthObject {
    /// Primary designation; empty when the source row carried none.
    pub designation: String,

    /// IAU name; `None` when the catalog has no name for this object.
    pub name: Option<String>,

    /// Diameter in kilometers; `NaN` when unknown.
    pub diameter: f64,

    /// Potentially-hazardous classification.
    pub hazardous: bool,

    /// Indices of this object's close approaches in the database's
    /// time-sorted approach table.
    pub approaches: Vec<usize>,
}

impl NearEarthObject {
    /// Build an object from raw catalog tokens.
    ///
    /// Defaulting rules: a missing designation stays the empty string, an
    /// empty name becomes `None`, an empty or unparseable diameter becomes
    /// `NaN`, and only the token `Y` marks the object hazardous.
    pub fn new(designation: &str, name: &str, diameter: &str, hazardous: &str) -> Self {
        Self {
            designation: designation.to_string(),
            name: if name.is_empty() {
                None
            } else {
                Some(name.to_string())
            },
            diameter: diameter.parse().unwrap_or(f64::NAN),
            hazardous: hazardous == "Y",
            approaches: Vec::new(),
        }
    }

    /// Designation plus the parenthesized IAU name, e.g. `433 (Eros)`.
    ///
    /// Objects without a name render as the bare designation.
    pub fn fullname(&self) -> String {
        match &self.name {
            Some(name) => format!("{} ({})", self.designation, name),
            None => self.designation.clone(),
        }
    }
}

impl fmt::Display for NearEarthObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "NEO {} has a diameter of {:.3} km and is{}potentially hazardous",
            self.fullname(),
            self.diameter,
            if self.hazardous { " " } else { " not " }
        )
    }
}
