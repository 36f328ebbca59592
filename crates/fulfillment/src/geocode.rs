//! Address resolution boundary.
//!
//! Geocoding is an external service call that can hang, miss, or fail; the
//! [`Geocode`] trait is the seam the order actor talks through. The actor —
//! not the implementation — bounds each call with the configured timeout and
//! retries a timed-out lookup once, so implementations stay simple.

use crate::geo::Coordinates;
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GeocodingError {
    #[error("geocoding lookup timed out")]
    Timeout,
    #[error("no coordinates found for address: {0}")]
    NotFound(String),
    #[error("geocoding upstream failure: {0}")]
    Upstream(String),
}

/// Resolves a postal address to coordinates.
#[async_trait]
pub trait Geocode: Send + Sync {
    async fn locate(&self, address: &str) -> Result<Coordinates, GeocodingError>;
}

/// Table-backed geocoder for demos and tests.
///
/// Unknown addresses resolve to `NotFound`. An optional artificial latency
/// lets tests exercise the timeout path.
#[derive(Debug, Clone, Default)]
pub struct StaticGeocoder {
    table: HashMap<String, Coordinates>,
    latency: Option<Duration>,
}

impl StaticGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an address entry, builder style.
    pub fn entry(mut self, address: impl Into<String>, coords: Coordinates) -> Self {
        self.table.insert(address.into(), coords);
        self
    }

    /// Delays every lookup by `latency`, builder style.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }
}

#[async_trait]
impl Geocode for StaticGeocoder {
    async fn locate(&self, address: &str) -> Result<Coordinates, GeocodingError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        self.table
            .get(address)
            .copied()
            .ok_or_else(|| GeocodingError::NotFound(address.to_string()))
    }
}
