//! Customers and their capabilities.
//!
//! The customer directory doubles as the identity collaborator: callers are
//! identified by `CustomerId`, and staff-only operations check the explicit
//! [`Role`] carried on the record rather than loose integer flags.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub Uuid);

impl CustomerId {
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "customer_{}", self.0)
    }
}

/// Capability level of a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Customer,
    Worker,
    Admin,
}

impl Role {
    /// Workers and admins may progress order statuses.
    pub fn is_staff(self) -> bool {
        matches!(self, Role::Worker | Role::Admin)
    }
}

#[derive(Debug, Clone)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub role: Role,
}

#[derive(Debug, Clone)]
pub struct CustomerCreate {
    pub name: String,
    pub role: Role,
}

#[derive(Debug, Clone)]
pub struct CustomerUpdate {
    pub name: Option<String>,
    pub role: Option<Role>,
}
