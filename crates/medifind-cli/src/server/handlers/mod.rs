//! API request handlers.

mod doctors;
mod health;

pub use doctors::*;
pub use health::*;
