use crate::customer_actor::CustomerError;
use crate::model::{Customer, CustomerCreate, CustomerId};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::instrument;

/// Client for the Customer actor.
#[derive(Clone)]
pub struct CustomerClient {
    inner: ResourceClient<Customer>,
}

impl CustomerClient {
    pub fn new(inner: ResourceClient<Customer>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params))]
    pub async fn register(&self, params: CustomerCreate) -> Result<CustomerId, CustomerError> {
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Fetch a customer, turning absence into a typed error.
    #[instrument(skip(self))]
    pub async fn fetch(&self, id: CustomerId) -> Result<Customer, CustomerError> {
        self.get(id)
            .await?
            .ok_or(CustomerError::NotFound(id))
    }
}

#[async_trait]
impl ActorClient<Customer> for CustomerClient {
    type Error = CustomerError;

    fn inner(&self) -> &ResourceClient<Customer> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.into_entity_error::<CustomerError>() {
            Ok(domain) => domain,
            Err(other) => CustomerError::Unavailable(other.to_string()),
        }
    }
}
