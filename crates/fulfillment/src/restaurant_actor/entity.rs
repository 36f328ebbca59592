//! [`ActorEntity`] implementation for [`Restaurant`].
//!
//! `handle_action` is the atomic section for courier assignment: the actor
//! task owns the roster and handles one message at a time, so a claim can
//! never observe a half-applied roster or race another claim.

use crate::model::{
    CourierAvailability, Restaurant, RestaurantCreate, RestaurantId, RestaurantUpdate,
};
use crate::restaurant_actor::{RestaurantAction, RestaurantActionResult, RestaurantError};
use async_trait::async_trait;
use resource_actor::ActorEntity;

#[async_trait]
impl ActorEntity for Restaurant {
    type Id = RestaurantId;
    type Create = RestaurantCreate;
    type Update = RestaurantUpdate;
    type Delete = ();
    type Action = RestaurantAction;
    type ActionResult = RestaurantActionResult;
    type Filter = ();
    type Context = ();
    type Error = RestaurantError;

    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error> {
        if params.name.trim().is_empty() {
            return Err(RestaurantError::EmptyName);
        }
        let roster = params
            .roster
            .into_iter()
            .map(|courier| (courier, CourierAvailability::Available))
            .collect();
        Ok(Self {
            id,
            name: params.name,
            location: params.location,
            roster,
        })
    }

    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            if name.trim().is_empty() {
                return Err(RestaurantError::EmptyName);
            }
            self.name = name;
        }
        for courier in update.enroll {
            self.roster
                .entry(courier)
                .or_insert(CourierAvailability::Available);
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error> {
        match action {
            RestaurantAction::ClaimCourier => {
                // BTreeMap iterates in id order, so the winner is the
                // smallest available id.
                let claimed = self
                    .roster
                    .iter_mut()
                    .find(|(_, state)| **state == CourierAvailability::Available);
                match claimed {
                    Some((id, state)) => {
                        *state = CourierAvailability::Busy;
                        Ok(RestaurantActionResult::Claimed(*id))
                    }
                    None => Err(RestaurantError::NoCourierAvailable),
                }
            }
            RestaurantAction::ReleaseCourier(courier) => {
                match self.roster.get_mut(&courier) {
                    Some(state) => {
                        *state = CourierAvailability::Available;
                        Ok(RestaurantActionResult::Released)
                    }
                    None => Err(RestaurantError::NotOnRoster(courier)),
                }
            }
        }
    }
}
