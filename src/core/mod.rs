//! Core module - extraction, database, filtering, and serialization

pub mod database;
pub mod extract;
pub mod filters;
pub mod time;
pub mod write;

pub use database::{DatabaseError, LinkedApproach, NeoDatabase};
pub use extract::{load_approaches, load_neos, ExtractError};
pub use filters::{limit, ApproachFilters};
pub use write::{write_to_csv, write_to_json, WriteError};
