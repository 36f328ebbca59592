use crate::clients::CustomerClient;
use crate::customer_actor::CustomerError;
use crate::model::{CustomerId, Order, OrderCancel, OrderCreate, OrderEdit, OrderFilter, OrderId, OrderStatus};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::instrument;

/// Client for the Order actor.
///
/// All orchestration (pricing, geocoding, courier assignment) happens in the
/// order entity's hooks; this client is the typed doorway. Reads and
/// mutations that identify an order by id take the calling customer too, and
/// a wrong caller gets the same answer as a missing order. The customer
/// directory handle backs the role check on staff-only listings.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    customers: CustomerClient,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>, customers: CustomerClient) -> Self {
        Self { inner, customers }
    }

    /// Place an order. On success the order is stored priced, scheduled and
    /// (for delivery) courier-assigned.
    #[instrument(skip(self, params))]
    pub async fn place(&self, params: OrderCreate) -> Result<OrderId, OrderError> {
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Fetch an order on behalf of a customer.
    #[instrument(skip(self))]
    pub async fn fetch(&self, id: OrderId, caller: CustomerId) -> Result<Order, OrderError> {
        let order = self
            .get(id)
            .await?
            .ok_or(OrderError::NotFoundOrUnauthorized)?;
        if order.customer != caller {
            return Err(OrderError::NotFoundOrUnauthorized);
        }
        Ok(order)
    }

    /// A customer's orders, optionally narrowed to one status.
    #[instrument(skip(self))]
    pub async fn orders_for(
        &self,
        customer: CustomerId,
        status: Option<OrderStatus>,
    ) -> Result<Vec<Order>, OrderError> {
        self.find(OrderFilter::ByCustomer { customer, status }).await
    }

    /// Every order currently in `status`, across customers. Staff only: the
    /// dispatch board workers work from.
    #[instrument(skip(self))]
    pub async fn orders_in_status(
        &self,
        caller: CustomerId,
        status: OrderStatus,
    ) -> Result<Vec<Order>, OrderError> {
        let customer = self.customers.fetch(caller).await.map_err(|e| match e {
            CustomerError::NotFound(id) => OrderError::UnknownCustomer(id),
            other => OrderError::Unavailable(other.to_string()),
        })?;
        if !customer.role.is_staff() {
            return Err(OrderError::StaffOnly);
        }
        self.find(OrderFilter::ByStatus(status)).await
    }

    /// Edit an order within its edit window. Returns the repriced order.
    #[instrument(skip(self, edit))]
    pub async fn edit(&self, id: OrderId, edit: OrderEdit) -> Result<Order, OrderError> {
        self.inner.update(id, edit).await.map_err(Self::map_error)
    }

    /// Cancel (remove) an order, subject to the cancellation window.
    #[instrument(skip(self))]
    pub async fn cancel(&self, id: OrderId, caller: CustomerId) -> Result<(), OrderError> {
        self.delete(id, OrderCancel { caller }).await
    }

    /// Staff-only status progression. Accepts the display spelling
    /// ("In Progress") as well as the compact one.
    #[instrument(skip(self))]
    pub async fn update_status(
        &self,
        id: OrderId,
        caller: CustomerId,
        status: &str,
    ) -> Result<OrderStatus, OrderError> {
        let next: OrderStatus = status.parse()?;
        let result = self
            .inner
            .perform_action(id, OrderAction::UpdateStatus { caller, next })
            .await
            .map_err(Self::map_error)?;
        let OrderActionResult::StatusUpdated(updated) = result;
        Ok(updated)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.into_entity_error::<OrderError>() {
            Ok(domain) => domain,
            Err(FrameworkError::NotFound(_)) => OrderError::NotFoundOrUnauthorized,
            Err(other) => OrderError::Unavailable(other.to_string()),
        }
    }
}
