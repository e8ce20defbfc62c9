//! Player resolution and the stats views built from a career-stats bundle.

pub mod extract;
pub mod render;
pub mod resolver;

pub use extract::{extract, format, DisplayTable, Extraction, ViewSelection};
pub use resolver::{normalize, resolve};
