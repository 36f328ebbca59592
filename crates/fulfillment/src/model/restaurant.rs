//! Restaurants and their courier rosters.

use crate::geo::Coordinates;
use crate::model::CourierId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RestaurantId(pub Uuid);

impl RestaurantId {
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for RestaurantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "restaurant_{}", self.0)
    }
}

/// Whether a rostered courier can take a new delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourierAvailability {
    Available,
    Busy,
}

/// A restaurant with its fixed location and courier roster.
///
/// The roster is a `BTreeMap` so iteration order is by `CourierId`: claiming
/// always picks the smallest available id, which makes assignment
/// deterministic for a given roster state.
#[derive(Debug, Clone)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub location: Coordinates,
    pub roster: BTreeMap<CourierId, CourierAvailability>,
}

#[derive(Debug, Clone)]
pub struct RestaurantCreate {
    pub name: String,
    pub location: Coordinates,
    pub roster: Vec<CourierId>,
}

#[derive(Debug, Clone)]
pub struct RestaurantUpdate {
    pub name: Option<String>,
    /// Couriers to add to the roster, available.
    pub enroll: Vec<CourierId>,
}
