//! [`ActorEntity`] implementation for [`MenuItem`].

use crate::catalog_actor::CatalogError;
use crate::model::{ItemId, MenuFilter, MenuItem, MenuItemCreate, MenuItemUpdate};
use async_trait::async_trait;
use resource_actor::ActorEntity;
use rust_decimal::Decimal;

#[async_trait]
impl ActorEntity for MenuItem {
    type Id = ItemId;
    type Create = MenuItemCreate;
    type Update = MenuItemUpdate;
    type Delete = ();
    type Action = ();
    type ActionResult = ();
    type Filter = MenuFilter;
    type Context = ();
    type Error = CatalogError;

    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error> {
        if params.name.trim().is_empty() {
            return Err(CatalogError::EmptyName);
        }
        if params.price < Decimal::ZERO {
            return Err(CatalogError::NegativePrice(params.price));
        }
        Ok(Self {
            id,
            restaurant: params.restaurant,
            name: params.name,
            price: params.price,
        })
    }

    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            if name.trim().is_empty() {
                return Err(CatalogError::EmptyName);
            }
            self.name = name;
        }
        if let Some(price) = update.price {
            if price < Decimal::ZERO {
                return Err(CatalogError::NegativePrice(price));
            }
            self.price = price;
        }
        Ok(())
    }

    fn matches(&self, filter: &Self::Filter) -> bool {
        match filter {
            MenuFilter::RestaurantItems { restaurant, items } => {
                self.restaurant == *restaurant && items.contains(&self.id)
            }
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
