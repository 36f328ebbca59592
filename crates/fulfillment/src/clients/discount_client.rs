use crate::discount_actor::DiscountError;
use crate::model::{Discount, DiscountCreate, DiscountFilter, DiscountId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{instrument, warn};

/// Client for the Discount actor.
#[derive(Clone)]
pub struct DiscountClient {
    inner: ResourceClient<Discount>,
}

impl DiscountClient {
    pub fn new(inner: ResourceClient<Discount>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params))]
    pub async fn publish(&self, params: DiscountCreate) -> Result<DiscountId, DiscountError> {
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Resolve a code, then opportunistically sweep expired codes.
    ///
    /// The lookup runs first so an expired record still comes back and the
    /// caller can report it as expired rather than unknown. The sweep that
    /// follows is best-effort housekeeping, not required for correctness: a
    /// failure is logged and ignored, because expiry is judged at read time.
    #[instrument(skip(self))]
    pub async fn resolve(
        &self,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<Discount>, DiscountError> {
        let matching = self.find(DiscountFilter::ByCode(code.to_string())).await?;
        if let Err(e) = self.purge_expired(now).await {
            warn!(error = %e, "expired-discount sweep failed");
        }
        Ok(matching.into_iter().next())
    }

    /// Delete every discount already expired at `now`. Returns how many were
    /// removed.
    #[instrument(skip(self))]
    pub async fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize, DiscountError> {
        let expired = self.find(DiscountFilter::Expired(now)).await?;
        let mut removed = 0;
        for discount in expired {
            match self.delete(discount.id, ()).await {
                Ok(()) => removed += 1,
                Err(e) => warn!(id = %discount.id, error = %e, "expired discount not removed"),
            }
        }
        Ok(removed)
    }
}

#[async_trait]
impl ActorClient<Discount> for DiscountClient {
    type Error = DiscountError;

    fn inner(&self) -> &ResourceClient<Discount> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.into_entity_error::<DiscountError>() {
            Ok(domain) => domain,
            Err(other) => DiscountError::Unavailable(other.to_string()),
        }
    }
}
