use crate::model::{CourierId, Restaurant, RestaurantCreate, RestaurantId, RestaurantUpdate};
use crate::restaurant_actor::{RestaurantAction, RestaurantActionResult, RestaurantError};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::instrument;

/// Client for the Restaurant actor.
#[derive(Clone)]
pub struct RestaurantClient {
    inner: ResourceClient<Restaurant>,
}

impl RestaurantClient {
    pub fn new(inner: ResourceClient<Restaurant>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params))]
    pub async fn open(&self, params: RestaurantCreate) -> Result<RestaurantId, RestaurantError> {
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn fetch(&self, id: RestaurantId) -> Result<Restaurant, RestaurantError> {
        self.get(id)
            .await?
            .ok_or_else(|| RestaurantError::NotFound(id.to_string()))
    }

    /// Add couriers to a restaurant's roster, available.
    #[instrument(skip(self, couriers))]
    pub async fn enroll_couriers(
        &self,
        id: RestaurantId,
        couriers: Vec<CourierId>,
    ) -> Result<(), RestaurantError> {
        let update = RestaurantUpdate {
            name: None,
            enroll: couriers,
        };
        self.inner
            .update(id, update)
            .await
            .map(|_| ())
            .map_err(Self::map_error)
    }

    /// Atomically claim the available courier with the smallest id.
    #[instrument(skip(self))]
    pub async fn claim_courier(&self, id: RestaurantId) -> Result<CourierId, RestaurantError> {
        let result = self
            .inner
            .perform_action(id, RestaurantAction::ClaimCourier)
            .await
            .map_err(Self::map_error)?;
        match result {
            RestaurantActionResult::Claimed(courier) => Ok(courier),
            other => Err(RestaurantError::Unavailable(format!(
                "unexpected claim result: {other:?}"
            ))),
        }
    }

    /// Mark a claimed courier available again.
    #[instrument(skip(self))]
    pub async fn release_courier(
        &self,
        id: RestaurantId,
        courier: CourierId,
    ) -> Result<(), RestaurantError> {
        self.inner
            .perform_action(id, RestaurantAction::ReleaseCourier(courier))
            .await
            .map(|_| ())
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Restaurant> for RestaurantClient {
    type Error = RestaurantError;

    fn inner(&self) -> &ResourceClient<Restaurant> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.into_entity_error::<RestaurantError>() {
            Ok(domain) => domain,
            Err(FrameworkError::NotFound(id)) => RestaurantError::NotFound(id),
            Err(other) => RestaurantError::Unavailable(other.to_string()),
        }
    }
}
