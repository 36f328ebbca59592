//! Error types for the Customer actor.

use crate::model::CustomerId;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CustomerError {
    #[error("customer not found: {0}")]
    NotFound(CustomerId),

    #[error("customer name must not be empty")]
    EmptyName,

    #[error("customer service unavailable: {0}")]
    Unavailable(String),
}
