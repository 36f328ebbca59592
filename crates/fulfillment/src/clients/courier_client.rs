use crate::courier_actor::CourierError;
use crate::model::{Courier, CourierCreate, CourierId};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::instrument;

/// Client for the Courier actor.
#[derive(Clone)]
pub struct CourierClient {
    inner: ResourceClient<Courier>,
}

impl CourierClient {
    pub fn new(inner: ResourceClient<Courier>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params))]
    pub async fn register(&self, params: CourierCreate) -> Result<CourierId, CourierError> {
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn fetch(&self, id: CourierId) -> Result<Courier, CourierError> {
        self.get(id).await?.ok_or(CourierError::NotFound(id))
    }
}

#[async_trait]
impl ActorClient<Courier> for CourierClient {
    type Error = CourierError;

    fn inner(&self) -> &ResourceClient<Courier> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.into_entity_error::<CourierError>() {
            Ok(domain) => domain,
            Err(other) => CourierError::Unavailable(other.to_string()),
        }
    }
}
