//! Error types for the Courier actor.

use crate::model::CourierId;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CourierError {
    #[error("courier not found: {0}")]
    NotFound(CourierId),

    #[error("courier name must not be empty")]
    EmptyName,

    #[error("courier phone must not be empty")]
    EmptyPhone,

    #[error("courier service unavailable: {0}")]
    Unavailable(String),
}
