//! Error types for the Restaurant actor.

use crate::model::CourierId;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum RestaurantError {
    #[error("restaurant not found: {0}")]
    NotFound(String),

    #[error("restaurant name must not be empty")]
    EmptyName,

    #[error("no courier is currently available")]
    NoCourierAvailable,

    #[error("courier {0} is not on this restaurant's roster")]
    NotOnRoster(CourierId),

    #[error("restaurant service unavailable: {0}")]
    Unavailable(String),
}
