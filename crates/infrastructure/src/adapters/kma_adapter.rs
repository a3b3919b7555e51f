//! KMA adapter - Implements ForecastPort using integration_kma
//!
//! Wraps the HTTP client with retry and per-release caches. A short-term
//! release is reused for 30 minutes and a mid-term release for an hour.
//! Empty answers are not cached because a release may still be publishing.

use std::{
    fmt,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};

use application::{ApplicationError, ports::ForecastPort};
use async_trait::async_trait;
use domain::{
    BaseDateTime, ForecastItem, GridCoordinate, MidTermLandForecast, MidTermTemperatureForecast,
    RegionCode,
};
use integration_kma::{KmaClient, KmaError, KmaHttpClient, ResultCode};
use moka::future::Cache;
use tracing::{debug, instrument};

use crate::{
    config::{AppConfig, CacheConfig},
    retry::{RetryConfig, retry},
};

type ShortTermKey = (GridCoordinate, BaseDateTime);
type MidTermKey = (RegionCode, String);

struct ForecastCaches {
    short_term: Cache<ShortTermKey, Arc<Vec<ForecastItem>>>,
    land: Cache<MidTermKey, Arc<MidTermLandForecast>>,
    temperature: Cache<MidTermKey, Arc<MidTermTemperatureForecast>>,
}

impl ForecastCaches {
    fn new(config: &CacheConfig) -> Self {
        fn build<K, V>(max_entries: u64, ttl: Duration) -> Cache<K, V>
        where
            K: std::hash::Hash + Eq + Send + Sync + 'static,
            V: Clone + Send + Sync + 'static,
        {
            Cache::builder()
                .max_capacity(max_entries)
                .time_to_live(ttl)
                .build()
        }

        Self {
            short_term: build(config.max_entries, config.short_term_ttl()),
            land: build(config.max_entries, config.mid_term_ttl()),
            temperature: build(config.max_entries, config.mid_term_ttl()),
        }
    }
}

/// Forecast source backed by the KMA open API
pub struct KmaForecastAdapter {
    client: Arc<dyn KmaClient>,
    retry: RetryConfig,
    caches: Option<ForecastCaches>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl fmt::Debug for KmaForecastAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KmaForecastAdapter")
            .field("retry", &self.retry)
            .field("cached", &self.caches.is_some())
            .field("hits", &self.hits.load(Ordering::Relaxed))
            .field("misses", &self.misses.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

impl KmaForecastAdapter {
    /// Create an adapter around any KMA client
    pub fn new(client: Arc<dyn KmaClient>, cache: &CacheConfig, retry: RetryConfig) -> Self {
        Self {
            client,
            retry,
            caches: cache.enabled.then(|| ForecastCaches::new(cache)),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Create an adapter with an HTTP client built from the configuration
    ///
    /// # Errors
    ///
    /// Fails when the service key is missing or the HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, ApplicationError> {
        let client = KmaHttpClient::new(config.kma.to_client_config()?).map_err(map_error)?;
        Ok(Self::new(Arc::new(client), &config.cache, config.retry.clone()))
    }

    /// `(hits, misses)` across all caches
    pub fn cache_stats(&self) -> (u64, u64) {
        (
            self.hits.load(Ordering::Relaxed),
            self.misses.load(Ordering::Relaxed),
        )
    }

    fn record<V>(&self, cached: Option<V>) -> Option<V> {
        let counter = if cached.is_some() {
            &self.hits
        } else {
            &self.misses
        };
        counter.fetch_add(1, Ordering::Relaxed);
        cached
    }
}

/// Map a client error to an application error
fn map_error(err: KmaError) -> ApplicationError {
    match err {
        KmaError::ConnectionFailed(e)
        | KmaError::RequestFailed(e)
        | KmaError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
        KmaError::ParseError(e) => ApplicationError::Internal(format!("Invalid KMA response: {e}")),
        KmaError::RateLimitExceeded => ApplicationError::RateLimited,
        KmaError::ApiError { code, message } if code == ResultCode::UNREGISTERED_KEY => {
            ApplicationError::Configuration(format!("KMA rejected the service key: {message}"))
        },
        KmaError::ApiError { code, message } => {
            ApplicationError::ExternalService(format!("KMA error {code}: {message}"))
        },
    }
}

#[async_trait]
impl ForecastPort for KmaForecastAdapter {
    #[instrument(skip(self, base), fields(nx = grid.nx, ny = grid.ny, base = %base))]
    async fn short_term_forecast(
        &self,
        grid: GridCoordinate,
        base: &BaseDateTime,
    ) -> Result<Vec<ForecastItem>, ApplicationError> {
        let key = (grid, base.clone());

        if let Some(caches) = &self.caches {
            let cached = caches.short_term.get(&key).await;
            if let Some(items) = self.record(cached) {
                debug!(items = items.len(), "Short-term cache hit");
                return Ok(items.as_ref().clone());
            }
        }

        let items = retry(&self.retry, || self.client.short_term_forecast(grid, base))
            .await
            .map_err(map_error)?;

        if let Some(caches) = self.caches.as_ref().filter(|_| !items.is_empty()) {
            caches.short_term.insert(key, Arc::new(items.clone())).await;
        }

        Ok(items)
    }

    #[instrument(skip(self, region), fields(region = %region))]
    async fn mid_term_land_forecast(
        &self,
        region: &RegionCode,
        release: &str,
    ) -> Result<Option<MidTermLandForecast>, ApplicationError> {
        let key = (region.clone(), release.to_string());

        if let Some(caches) = &self.caches {
            let cached = caches.land.get(&key).await;
            if let Some(land) = self.record(cached) {
                debug!("Mid-term land cache hit");
                return Ok(Some(land.as_ref().clone()));
            }
        }

        let land = retry(&self.retry, || {
            self.client.mid_term_land_forecast(region, release)
        })
        .await
        .map_err(map_error)?;

        if let (Some(caches), Some(record)) = (&self.caches, &land) {
            caches.land.insert(key, Arc::new(record.clone())).await;
        }

        Ok(land)
    }

    #[instrument(skip(self, region), fields(region = %region))]
    async fn mid_term_temperature_forecast(
        &self,
        region: &RegionCode,
        release: &str,
    ) -> Result<Option<MidTermTemperatureForecast>, ApplicationError> {
        let key = (region.clone(), release.to_string());

        if let Some(caches) = &self.caches {
            let cached = caches.temperature.get(&key).await;
            if let Some(temperature) = self.record(cached) {
                debug!("Mid-term temperature cache hit");
                return Ok(Some(temperature.as_ref().clone()));
            }
        }

        let temperature = retry(&self.retry, || {
            self.client.mid_term_temperature_forecast(region, release)
        })
        .await
        .map_err(map_error)?;

        if let (Some(caches), Some(record)) = (&self.caches, &temperature) {
            caches.temperature.insert(key, Arc::new(record.clone())).await;
        }

        Ok(temperature)
    }
}
