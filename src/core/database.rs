//! In-memory database linking NEOs with their close approaches

use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

use crate::core::filters::ApproachFilters;
use crate::entities::{CloseApproach, NearEarthObject};

/// Errors raised while building the database
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Duplicate NEO designation in catalog: {0}")]
    DuplicateDesignation(String),
}

/// A catalog of NEOs cross-referenced with their close approaches.
///
/// Construction sorts the approaches by time (stable, so ties keep input
/// order) and links each one to its owning object through the designation
/// index. Approaches whose designation matches no catalogued object are
/// linked to an explicit unknown-object placeholder rather than dropped;
/// the placeholder is excluded from the designation and name indices.
#[derive(Debug)]
pub struct NeoDatabase {
    neos: Vec<NearEarthObject>,
    approaches: Vec<CloseApproach>,
    unknown: NearEarthObject,
    by_designation: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
}

/// A close approach paired with its resolved NEO.
///
/// Yielded by [`NeoDatabase::query`] and [`NeoDatabase::approaches_of`];
/// bundles the two references so filters and serializers never reach back
/// into the database.
#[derive(Debug, Clone, Copy)]
pub struct LinkedApproach<'a> {
    pub approach: &'a CloseApproach,
    pub neo: &'a NearEarthObject,
}

impl fmt::Display for LinkedApproach<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "At {}, '{}' approaches Earth at a distance of {:.2} au and a velocity of {:.2} km/s.",
            self.approach.time_str(),
            self.neo.fullname(),
            self.approach.distance,
            self.approach.velocity
        )
    }
}

impl NeoDatabase {
    /// Build the database from the loaded catalogs.
    ///
    /// Sorts the approaches before linking so the per-object index lists
    /// come out in time order as well. Duplicate designations violate the
    /// catalog's primary-key invariant and are rejected.
    pub fn new(
        mut neos: Vec<NearEarthObject>,
        mut approaches: Vec<CloseApproach>,
    ) -> Result<Self, DatabaseError> {
        approaches.sort_by_key(|a| a.time);

        let mut by_designation = HashMap::with_capacity(neos.len());
        let mut by_name = HashMap::new();
        for (index, neo) in neos.iter().enumerate() {
            if by_designation
                .insert(neo.designation.clone(), index)
                .is_some()
            {
                return Err(DatabaseError::DuplicateDesignation(neo.designation.clone()));
            }
            if let Some(name) = &neo.name {
                by_name.insert(name.clone(), index);
            }
        }

        for (index, approach) in approaches.iter_mut().enumerate() {
            if let Some(&neo_index) = by_designation.get(&approach.designation) {
                approach.neo = Some(neo_index);
                neos[neo_index].approaches.push(index);
            }
        }

        Ok(Self {
            neos,
            approaches,
            unknown: NearEarthObject::new("", "", "", ""),
            by_designation,
            by_name,
        })
    }

    /// Exact, case-sensitive designation lookup.
    pub fn get_neo_by_designation(&self, designation: &str) -> Option<&NearEarthObject> {
        self.by_designation
            .get(designation)
            .map(|&index| &self.neos[index])
    }

    /// Exact, case-sensitive name lookup. Objects without a name never
    /// match.
    pub fn get_neo_by_name(&self, name: &str) -> Option<&NearEarthObject> {
        self.by_name.get(name).map(|&index| &self.neos[index])
    }

    /// Resolve an approach's owning object, substituting the unknown-object
    /// placeholder when its designation matched nothing at link time.
    pub fn neo_for(&self, approach: &CloseApproach) -> &NearEarthObject {
        approach.neo.map_or(&self.unknown, |index| &self.neos[index])
    }

    /// All catalogued objects, in input order.
    pub fn neos(&self) -> &[NearEarthObject] {
        &self.neos
    }

    /// All close approaches, time ascending.
    pub fn approaches(&self) -> &[CloseApproach] {
        &self.approaches
    }

    /// One object's close approaches, time ascending.
    pub fn approaches_of<'a>(
        &'a self,
        neo: &'a NearEarthObject,
    ) -> impl Iterator<Item = LinkedApproach<'a>> + 'a {
        neo.approaches.iter().map(move |&index| LinkedApproach {
            approach: &self.approaches[index],
            neo,
        })
    }

    /// Lazily yield the approaches matching every supplied filter, in the
    /// stored time-ascending order. The iterator borrows the database; call
    /// again to restart.
    pub fn query<'a>(
        &'a self,
        filters: &'a ApproachFilters,
    ) -> impl Iterator<Item = LinkedApproach<'a>> + 'a {
        self.approaches.iter().filter_map(move |approach| {
            let neo = self.neo_for(approach);
            filters
                .matches(approach, neo)
                .then_some(LinkedApproach { approach, neo })
        })
    }
}
