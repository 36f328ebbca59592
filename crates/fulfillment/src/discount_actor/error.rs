//! Error types for the Discount actor.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum DiscountError {
    #[error("discount code must not be empty")]
    EmptyCode,

    #[error("discount percentage must be at most 100, got {0}")]
    PercentageOutOfRange(u8),

    #[error("discount service unavailable: {0}")]
    Unavailable(String),
}
