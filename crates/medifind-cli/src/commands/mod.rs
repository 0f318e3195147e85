//! CLI command implementations.

pub mod add;
pub mod facets;
pub mod list;
pub mod seed;
pub mod serve;
