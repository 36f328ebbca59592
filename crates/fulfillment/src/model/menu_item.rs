//! Menu catalog records.

use crate::model::RestaurantId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::Display;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub Uuid);

impl ItemId {
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "item_{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct MenuItem {
    pub id: ItemId,
    pub restaurant: RestaurantId,
    pub name: String,
    pub price: Decimal,
}

#[derive(Debug, Clone)]
pub struct MenuItemCreate {
    pub restaurant: RestaurantId,
    pub name: String,
    pub price: Decimal,
}

#[derive(Debug, Clone)]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub price: Option<Decimal>,
}

/// Catalog queries.
#[derive(Debug, Clone)]
pub enum MenuFilter {
    /// Items of `restaurant` whose id is in `items`. Used to batch the price
    /// lookup for one order in a single round trip.
    RestaurantItems {
        restaurant: RestaurantId,
        items: HashSet<ItemId>,
    },
}
