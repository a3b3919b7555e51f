//! Domain layer for Hanul
//!
//! Pure forecast logic: grid projection, release schedule, region lookup
//! and the merge of short- and mid-term forecasts into one timeline.
//! Nothing here performs I/O or reads the clock.

pub mod entities;
pub mod errors;
pub mod forecast;
pub mod projection;
pub mod region;
pub mod schedule;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
