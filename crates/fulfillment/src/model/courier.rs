//! Courier directory records.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

/// Identifier for couriers. `Ord` so roster selection can break ties
/// deterministically by smallest id.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct CourierId(pub Uuid);

impl CourierId {
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for CourierId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "courier_{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Courier {
    pub id: CourierId,
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Clone)]
pub struct CourierCreate {
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Clone)]
pub struct CourierUpdate {
    pub phone: Option<String>,
}
