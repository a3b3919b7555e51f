//! KMA forecast API integration
//!
//! Client for the village (short-term) and mid-term forecast services of the
//! Korea Meteorological Administration, published through the public data
//! portal (<https://www.data.go.kr>). All endpoints need a service key.

pub mod client;
mod models;

pub use client::{KmaClient, KmaConfig, KmaError, KmaHttpClient};
pub use models::{ObservationItem, ResultCode};
