//! Roster actions for the Restaurant actor.

use crate::model::CourierId;

/// Non-CRUD operations on a restaurant's courier roster.
#[derive(Debug, Clone)]
pub enum RestaurantAction {
    /// Claim the available courier with the smallest id, marking it busy.
    ClaimCourier,
    /// Mark a previously claimed courier available again.
    ReleaseCourier(CourierId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestaurantActionResult {
    Claimed(CourierId),
    Released,
}
