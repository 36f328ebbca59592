//! Error types for the Catalog actor.

use crate::model::ItemId;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("menu item not found: {0}")]
    NotFound(ItemId),

    #[error("menu item name must not be empty")]
    EmptyName,

    #[error("menu item price must not be negative: {0}")]
    NegativePrice(Decimal),

    #[error("catalog service unavailable: {0}")]
    Unavailable(String),
}
