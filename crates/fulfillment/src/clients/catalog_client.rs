use crate::catalog_actor::CatalogError;
use crate::model::{ItemId, MenuFilter, MenuItem, MenuItemCreate, RestaurantId};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use rust_decimal::Decimal;
use std::collections::{HashMap, HashSet};
use tracing::instrument;

/// Client for the Catalog actor.
#[derive(Clone)]
pub struct CatalogClient {
    inner: ResourceClient<MenuItem>,
}

impl CatalogClient {
    pub fn new(inner: ResourceClient<MenuItem>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params))]
    pub async fn add_item(&self, params: MenuItemCreate) -> Result<ItemId, CatalogError> {
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Unit prices of the given items on one restaurant's menu, in a single
    /// round trip. Items absent from the menu are simply missing from the
    /// result map.
    #[instrument(skip(self, items))]
    pub async fn prices(
        &self,
        restaurant: RestaurantId,
        items: HashSet<ItemId>,
    ) -> Result<HashMap<ItemId, Decimal>, CatalogError> {
        let found = self
            .find(MenuFilter::RestaurantItems { restaurant, items })
            .await?;
        Ok(found.into_iter().map(|item| (item.id, item.price)).collect())
    }
}

#[async_trait]
impl ActorClient<MenuItem> for CatalogClient {
    type Error = CatalogError;

    fn inner(&self) -> &ResourceClient<MenuItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.into_entity_error::<CatalogError>() {
            Ok(domain) => domain,
            Err(other) => CatalogError::Unavailable(other.to_string()),
        }
    }
}
