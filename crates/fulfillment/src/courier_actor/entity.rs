//! [`ActorEntity`] implementation for [`Courier`].

use crate::courier_actor::CourierError;
use crate::model::{Courier, CourierCreate, CourierId, CourierUpdate};
use async_trait::async_trait;
use resource_actor::ActorEntity;

#[async_trait]
impl ActorEntity for Courier {
    type Id = CourierId;
    type Create = CourierCreate;
    type Update = CourierUpdate;
    type Delete = ();
    type Action = ();
    type ActionResult = ();
    type Filter = ();
    type Context = ();
    type Error = CourierError;

    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error> {
        if params.name.trim().is_empty() {
            return Err(CourierError::EmptyName);
        }
        if params.phone.trim().is_empty() {
            return Err(CourierError::EmptyPhone);
        }
        Ok(Self {
            id,
            name: params.name,
            phone: params.phone,
        })
    }

    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(phone) = update.phone {
            if phone.trim().is_empty() {
                return Err(CourierError::EmptyPhone);
            }
            self.phone = phone;
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
