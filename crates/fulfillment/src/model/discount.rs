//! Discount codes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiscountId(pub Uuid);

impl DiscountId {
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for DiscountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "discount_{}", self.0)
    }
}

/// A percentage-off code with an expiry instant.
///
/// `percentage` is a whole number in `0..=100`; validation happens in the
/// discount actor so a stored record is always in range.
#[derive(Debug, Clone)]
pub struct Discount {
    pub id: DiscountId,
    pub code: String,
    pub percentage: u8,
    pub expires_at: DateTime<Utc>,
}

impl Discount {
    /// A discount expires the instant `now` passes `expires_at`; at exactly
    /// `expires_at` it is still valid.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

#[derive(Debug, Clone)]
pub struct DiscountCreate {
    pub code: String,
    pub percentage: u8,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct DiscountUpdate {
    pub percentage: Option<u8>,
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub enum DiscountFilter {
    /// Codes are matched exactly, case-sensitive.
    ByCode(String),
    /// Every discount already expired at the given instant.
    Expired(DateTime<Utc>),
}
