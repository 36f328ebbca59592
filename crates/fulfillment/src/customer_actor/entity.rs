//! [`ActorEntity`] implementation for [`Customer`].

use crate::customer_actor::CustomerError;
use crate::model::{Customer, CustomerCreate, CustomerId, CustomerUpdate};
use async_trait::async_trait;
use resource_actor::ActorEntity;

#[async_trait]
impl ActorEntity for Customer {
    type Id = CustomerId;
    type Create = CustomerCreate;
    type Update = CustomerUpdate;
    type Delete = ();
    type Action = ();
    type ActionResult = ();
    type Filter = ();
    type Context = ();
    type Error = CustomerError;

    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error> {
        if params.name.trim().is_empty() {
            return Err(CustomerError::EmptyName);
        }
        Ok(Self {
            id,
            name: params.name,
            role: params.role,
        })
    }

    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            if name.trim().is_empty() {
                return Err(CustomerError::EmptyName);
            }
            self.name = name;
        }
        if let Some(role) = update.role {
            self.role = role;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        _action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error> {
        Ok(())
    }
}
