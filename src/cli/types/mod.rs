//! Type-safe wrappers for NBA stats identifiers and seasons.

pub mod ids;
pub mod time;

pub use ids::PlayerId;
pub use time::Season;
