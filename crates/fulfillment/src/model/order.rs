//! Orders: the central record and its lifecycle vocabulary.

use crate::model::{CourierId, CustomerId, ItemId, RestaurantId};
use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub Uuid);

impl OrderId {
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryMethod {
    Delivery,
    Pickup,
}

/// Lifecycle state of an order.
///
/// Pending and InProgress may move forward or be canceled; Delivered and
/// Canceled are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    InProgress,
    Delivered,
    Canceled,
}

impl OrderStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Canceled)
    }

    /// Legal forward moves of the status machine.
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (self, next),
            (Pending, InProgress) | (Pending, Delivered) | (Pending, Canceled)
                | (InProgress, Delivered)
                | (InProgress, Canceled)
        )
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::InProgress => "In Progress",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Canceled => "Canceled",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown order status: {0:?}")]
pub struct InvalidStatusError(pub String);

impl FromStr for OrderStatus {
    type Err = InvalidStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(OrderStatus::Pending),
            "In Progress" | "InProgress" => Ok(OrderStatus::InProgress),
            "Delivered" => Ok(OrderStatus::Delivered),
            "Canceled" => Ok(OrderStatus::Canceled),
            other => Err(InvalidStatusError(other.to_string())),
        }
    }
}

/// Courier details surfaced on a delivery order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourierContact {
    pub id: CourierId,
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Clone)]
pub struct Order {
    pub id: OrderId,
    pub customer: CustomerId,
    pub restaurant: RestaurantId,
    /// Item quantities; always non-empty with every quantity >= 1.
    pub products: HashMap<ItemId, u32>,
    pub method: DeliveryMethod,
    /// Present exactly when `method` is `Delivery`.
    pub delivery_address: Option<String>,
    pub discount_code: Option<String>,
    /// Stored for the record only; no charge is ever executed here.
    pub payment_method: String,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    /// Estimated delivery instant, fixed at creation.
    pub eta: DateTime<Utc>,
    /// Stamped when the order reaches Delivered.
    pub delivery_time: Option<DateTime<Utc>>,
    pub delivery_fee: Decimal,
    /// Discounted subtotal plus delivery fee, rounded to cents.
    pub total: Decimal,
    /// The claimed courier, for delivery orders with one assigned.
    pub courier: Option<CourierContact>,
}

impl Order {
    /// Customer edits are allowed until `window` past creation, inclusive.
    pub fn edit_window_open(&self, now: DateTime<Utc>, window: Duration) -> bool {
        now <= self.created_at + window
    }

    /// Cancellation closes `buffer` before the estimated delivery time; at
    /// exactly the cutoff it is still allowed.
    pub fn cancel_window_open(&self, now: DateTime<Utc>, buffer: Duration) -> bool {
        now <= self.eta - buffer
    }
}

/// Request to place an order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer: CustomerId,
    pub restaurant: RestaurantId,
    pub products: HashMap<ItemId, u32>,
    pub method: DeliveryMethod,
    pub delivery_address: Option<String>,
    pub discount_code: Option<String>,
    pub payment_method: String,
}

/// Customer-editable fields. `None` leaves a field untouched; an edit with
/// every field `None` is rejected.
#[derive(Debug, Clone)]
pub struct OrderEdit {
    pub caller: CustomerId,
    pub products: Option<HashMap<ItemId, u32>>,
    pub method: Option<DeliveryMethod>,
    pub delivery_address: Option<String>,
    pub discount_code: Option<Option<String>>,
    pub payment_method: Option<String>,
}

impl OrderEdit {
    /// An edit with every field left untouched; callers fill in what they
    /// want changed with struct update syntax.
    pub fn for_caller(caller: CustomerId) -> Self {
        Self {
            caller,
            products: None,
            method: None,
            delivery_address: None,
            discount_code: None,
            payment_method: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_none()
            && self.method.is_none()
            && self.delivery_address.is_none()
            && self.discount_code.is_none()
            && self.payment_method.is_none()
    }
}

/// Cancellation request; carries the caller for the ownership check.
#[derive(Debug, Clone)]
pub struct OrderCancel {
    pub caller: CustomerId,
}

#[derive(Debug, Clone)]
pub enum OrderFilter {
    /// Orders placed by a customer, optionally narrowed to one status.
    ByCustomer {
        customer: CustomerId,
        status: Option<OrderStatus>,
    },
    /// All orders against a restaurant.
    ByRestaurant(RestaurantId),
    /// Every order currently in one status, across customers. Staff-facing;
    /// the client gates it behind a role check.
    ByStatus(OrderStatus),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_strings() {
        for s in ["Pending", "In Progress", "Delivered", "Canceled"] {
            let parsed: OrderStatus = s.parse().unwrap();
            assert_eq!(parsed.to_string(), s);
        }
    }

    #[test]
    fn compact_in_progress_spelling_is_accepted() {
        assert_eq!(
            "InProgress".parse::<OrderStatus>().unwrap(),
            OrderStatus::InProgress
        );
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!("Shipped".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn terminal_states_allow_no_moves() {
        use OrderStatus::*;
        for from in [Delivered, Canceled] {
            for to in [Pending, InProgress, Delivered, Canceled] {
                assert!(!from.can_transition_to(to), "{from} -> {to}");
            }
        }
    }

    #[test]
    fn pending_may_skip_straight_to_delivered() {
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Delivered));
    }

    #[test]
    fn no_status_moves_backwards() {
        assert!(!OrderStatus::InProgress.can_transition_to(OrderStatus::Pending));
    }

    #[test]
    fn empty_edit_is_detected() {
        let edit = OrderEdit::for_caller(CustomerId::random());
        assert!(edit.is_empty());

        let edit = OrderEdit {
            discount_code: Some(None),
            ..OrderEdit::for_caller(CustomerId::random())
        };
        assert!(!edit.is_empty());
    }
}
