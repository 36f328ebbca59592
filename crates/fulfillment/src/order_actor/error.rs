//! Error types for the Order actor.
//!
//! [`OrderError`] is the single enum every order operation returns. The
//! coarse [`ErrorKind`] grouping (and its HTTP status mapping) is what an
//! outer transport would key on; the variants themselves stay precise so
//! tests and callers can match the exact failure.

use crate::geocode::GeocodingError;
use crate::model::{CourierId, CustomerId, InvalidStatusError, ItemId, OrderStatus, RestaurantId};
use crate::pricing::{DeliveryOutOfRange, PricingError};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum OrderError {
    #[error("order contains no items")]
    EmptyOrder,

    #[error("quantity for item {0} must be at least 1")]
    ZeroQuantity(ItemId),

    #[error("delivery orders require a delivery address")]
    MissingDeliveryAddress,

    #[error("unknown customer: {0}")]
    UnknownCustomer(CustomerId),

    #[error("unknown restaurant: {0}")]
    UnknownRestaurant(RestaurantId),

    #[error("item {0} is not on this restaurant's menu")]
    ItemNotAvailable(ItemId),

    #[error("unknown discount code: {0:?}")]
    UnknownDiscount(String),

    #[error("discount code {0:?} has expired")]
    DiscountExpired(String),

    #[error(transparent)]
    DeliveryOutOfRange(#[from] DeliveryOutOfRange),

    #[error(transparent)]
    Geocoding(#[from] GeocodingError),

    #[error("no courier is available for this delivery")]
    NoCourierAvailable,

    #[error("claimed courier {0} has no profile on record")]
    CourierProfileMissing(CourierId),

    /// Deliberately covers both "no such order" and "not your order": the
    /// caller learns nothing about orders it does not own.
    #[error("order not found")]
    NotFoundOrUnauthorized,

    #[error("the edit window for this order has closed")]
    EditWindowExpired,

    #[error("an edit must change at least one field")]
    NoFieldsToUpdate,

    #[error("too close to the delivery time to cancel")]
    CancelWindowClosed,

    #[error("order is already closed: {0}")]
    OrderClosed(OrderStatus),

    #[error("only staff may update order status")]
    StaffOnly,

    #[error(transparent)]
    InvalidStatus(#[from] InvalidStatusError),

    #[error("order has already been delivered")]
    AlreadyDelivered,

    #[error("cannot move order from {from} to {to}")]
    InvalidTransition {
        from: OrderStatus,
        to: OrderStatus,
    },

    #[error("upstream service unavailable: {0}")]
    Unavailable(String),
}

impl From<PricingError> for OrderError {
    fn from(e: PricingError) -> Self {
        match e {
            PricingError::MissingPrice(item) => OrderError::ItemNotAvailable(item),
        }
    }
}

/// Coarse failure classes, for transports and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Authorization,
    Conflict,
    Range,
    Timeout,
    Upstream,
}

impl ErrorKind {
    pub fn http_status(self) -> u16 {
        match self {
            ErrorKind::Validation | ErrorKind::Range => 400,
            ErrorKind::Authorization => 403,
            ErrorKind::NotFound => 404,
            ErrorKind::Conflict => 409,
            ErrorKind::Upstream => 500,
            ErrorKind::Timeout => 504,
        }
    }
}

impl OrderError {
    pub fn kind(&self) -> ErrorKind {
        use OrderError::*;
        match self {
            EmptyOrder | ZeroQuantity(_) | MissingDeliveryAddress | UnknownCustomer(_)
            | DiscountExpired(_) | NoFieldsToUpdate | InvalidStatus(_) => ErrorKind::Validation,
            UnknownRestaurant(_) | ItemNotAvailable(_) | UnknownDiscount(_)
            | NotFoundOrUnauthorized => ErrorKind::NotFound,
            StaffOnly => ErrorKind::Authorization,
            NoCourierAvailable | EditWindowExpired | CancelWindowClosed | OrderClosed(_)
            | AlreadyDelivered | InvalidTransition { .. } => ErrorKind::Conflict,
            DeliveryOutOfRange(_) => ErrorKind::Range,
            Geocoding(GeocodingError::Timeout) => ErrorKind::Timeout,
            Geocoding(_) | CourierProfileMissing(_) | Unavailable(_) => ErrorKind::Upstream,
        }
    }
}
