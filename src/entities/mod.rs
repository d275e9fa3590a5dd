//! Entity types for the NEO catalog

pub mod approach;
pub mod neo;

pub use approach::CloseApproach;
pub use neo::NearEarthObject;
