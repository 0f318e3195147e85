//! Provider records and their enumerated attributes.

mod number;
mod record;
mod types;

pub use record::{NewProvider, Provider};
pub use types::{Gender, Weekday};
