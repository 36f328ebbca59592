//! [`ActorEntity`] implementation for [`Discount`].

use crate::discount_actor::DiscountError;
use crate::model::{Discount, DiscountCreate, DiscountFilter, DiscountId, DiscountUpdate};
use async_trait::async_trait;
use resource_actor::ActorEntity;

#[async_trait]
impl ActorEntity for Discount {
    type Id = DiscountId;
    type Create = DiscountCreate;
    type Update = DiscountUpdate;
    type Delete = ();
    type Action = ();
    type ActionResult = ();
    type Filter = DiscountFilter;
    type Context = ();
    type Error = DiscountError;

    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error> {
        if params.code.trim().is_empty() {
            return Err(DiscountError::EmptyCode);
        }
        if params.percentage > 100 {
            return Err(DiscountError::PercentageOutOfRange(params.percentage));
        }
        Ok(Self {
            id,
            code: params.code,
            percentage: params.percentage,
            expires_at: params.expires_at,
        })
    }

    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(percentage) = update.percentage {
            if percentage > 100 {
                return Err(DiscountError::PercentageOutOfRange(percentage));
            }
            self.percentage = percentage;
        }
        if let Some(expires_at) = update.expires_at {
            self.expires_at = expires_at;
        }
        Ok(())
    }

    fn matches(&self, filter: &Self::Filter) -> bool {
        match filter {
            DiscountFilter::ByCode(code) => self.code == *code,
            DiscountFilter::Expired(now) => self.is_expired(*now),
        }
    }

    async fn handle_action(
        &mut self,
        _action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error> {
        Ok(())
    }
}
