//! Adapters implementing application ports

mod kma_adapter;

pub use kma_adapter::KmaForecastAdapter;
