//! Application layer - Use cases and orchestration
//!
//! Defines the port through which forecasts are fetched and the service
//! that turns one location and instant into a complete weather report.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
