//! Lifecycle actions for the Order actor.

use crate::model::{CustomerId, OrderStatus};

/// Non-CRUD operations on an order.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Staff-only move of the status machine.
    UpdateStatus {
        caller: CustomerId,
        next: OrderStatus,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderActionResult {
    StatusUpdated(OrderStatus),
}
