//! Engine configuration.
//!
//! Every policy constant lives here and is passed explicitly into the system
//! at construction; nothing reads process-wide mutable state. Defaults match
//! the platform's standing policy: 2.50 per km delivery fee, 20 km delivery
//! radius, 30 minute edit window, cancellation forbidden within 30 minutes of
//! the estimated delivery, 90 minute delivery estimate.

use chrono::Duration;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Delivery fee per kilometre of great-circle distance.
    pub delivery_fee_per_km: Decimal,

    /// Maximum restaurant-to-address distance eligible for delivery, in km.
    /// A distance of exactly this value is still accepted.
    pub max_delivery_km: f64,

    /// Minutes after creation during which a customer may edit the order.
    pub edit_window_mins: i64,

    /// Minutes before the estimated delivery time at which cancellation
    /// closes.
    pub cancel_buffer_mins: i64,

    /// Minutes from creation to the estimated delivery time.
    pub delivery_eta_mins: i64,

    /// Upper bound on a single geocoding lookup, in milliseconds.
    pub geocoding_timeout_ms: u64,

    /// Pause before the single internal retry of a timed-out geocoding
    /// lookup, in milliseconds.
    pub geocoding_retry_backoff_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            delivery_fee_per_km: dec!(2.5),
            max_delivery_km: 20.0,
            edit_window_mins: 30,
            cancel_buffer_mins: 30,
            delivery_eta_mins: 90,
            geocoding_timeout_ms: 5_000,
            geocoding_retry_backoff_ms: 250,
        }
    }
}

impl EngineConfig {
    pub fn edit_window(&self) -> Duration {
        Duration::minutes(self.edit_window_mins)
    }

    pub fn cancel_buffer(&self) -> Duration {
        Duration::minutes(self.cancel_buffer_mins)
    }

    pub fn delivery_eta(&self) -> Duration {
        Duration::minutes(self.delivery_eta_mins)
    }

    pub fn geocoding_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.geocoding_timeout_ms)
    }

    pub fn geocoding_retry_backoff(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.geocoding_retry_backoff_ms)
    }
}
