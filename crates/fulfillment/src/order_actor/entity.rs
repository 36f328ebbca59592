//! [`ActorEntity`] implementation for [`Order`], plus [`OrderContext`].
//!
//! Every hook runs inside the order actor's single task, so each one is a
//! critical section over the order store. Calls out to other actors
//! (restaurant, catalog, discounts, couriers) are themselves single messages
//! handled atomically by their owners.

use crate::clients::{
    CatalogClient, CourierClient, CustomerClient, DiscountClient, RestaurantClient,
};
use crate::config::EngineConfig;
use crate::clock::Clock;
use crate::customer_actor::CustomerError;
use crate::geo::Coordinates;
use crate::geocode::{Geocode, GeocodingError};
use crate::model::{
    CourierContact, CourierId, DeliveryMethod, ItemId, Order, OrderCancel, OrderCreate,
    OrderEdit, OrderFilter, OrderId, OrderStatus,
};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use crate::pricing;
use crate::restaurant_actor::RestaurantError;
use async_trait::async_trait;
use chrono::DateTime;
use resource_actor::ActorEntity;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;

/// Everything the order actor needs from the rest of the system, injected at
/// `run()`.
#[derive(Clone)]
pub struct OrderContext {
    pub config: EngineConfig,
    pub clock: Clock,
    pub geocoder: Arc<dyn Geocode>,
    pub customers: CustomerClient,
    pub restaurants: RestaurantClient,
    pub couriers: CourierClient,
    pub catalog: CatalogClient,
    pub discounts: DiscountClient,
}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderEdit;
    type Delete = OrderCancel;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Filter = OrderFilter;
    type Context = OrderContext;
    type Error = OrderError;

    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error> {
        validate_products(&params.products)?;
        if params.method == DeliveryMethod::Delivery && blank(params.delivery_address.as_deref()) {
            return Err(OrderError::MissingDeliveryAddress);
        }
        Ok(Self {
            id,
            customer: params.customer,
            restaurant: params.restaurant,
            products: params.products,
            method: params.method,
            delivery_address: params.delivery_address,
            discount_code: params.discount_code,
            payment_method: params.payment_method,
            status: OrderStatus::Pending,
            // Stamped from the clock in on_create.
            created_at: DateTime::UNIX_EPOCH,
            eta: DateTime::UNIX_EPOCH,
            delivery_time: None,
            delivery_fee: Decimal::ZERO,
            total: Decimal::ZERO,
            courier: None,
        })
    }

    async fn on_create(&mut self, ctx: &Self::Context) -> Result<(), Self::Error> {
        let now = ctx.clock.now();
        self.created_at = now;
        self.eta = now + ctx.config.delivery_eta();

        ctx.customers
            .fetch(self.customer)
            .await
            .map_err(|e| match e {
                CustomerError::NotFound(id) => OrderError::UnknownCustomer(id),
                other => OrderError::Unavailable(other.to_string()),
            })?;

        reprice(self, ctx).await?;

        // The claim is the only step with a side effect outside this order,
        // so it runs last: any earlier failure leaks nothing.
        if self.method == DeliveryMethod::Delivery {
            self.courier = Some(claim_courier(ctx, self).await?);
        }
        Ok(())
    }

    async fn on_update(&mut self, edit: Self::Update, ctx: &Self::Context) -> Result<(), Self::Error> {
        if edit.caller != self.customer {
            return Err(OrderError::NotFoundOrUnauthorized);
        }
        if self.status.is_terminal() {
            return Err(OrderError::OrderClosed(self.status));
        }
        if !self.edit_window_open(ctx.clock.now(), ctx.config.edit_window()) {
            return Err(OrderError::EditWindowExpired);
        }
        if edit.is_empty() {
            return Err(OrderError::NoFieldsToUpdate);
        }

        // Mutate a draft so a failed edit leaves the stored order untouched.
        let mut draft = self.clone();
        if let Some(products) = edit.products {
            validate_products(&products)?;
            draft.products = products;
        }
        if let Some(method) = edit.method {
            draft.method = method;
        }
        if let Some(address) = edit.delivery_address {
            draft.delivery_address = Some(address);
        }
        if let Some(code) = edit.discount_code {
            draft.discount_code = code;
        }
        if let Some(payment) = edit.payment_method {
            draft.payment_method = payment;
        }
        if draft.method == DeliveryMethod::Delivery && blank(draft.delivery_address.as_deref()) {
            return Err(OrderError::MissingDeliveryAddress);
        }

        // Any edit can change the money, so the draft is repriced from
        // scratch: fee from the (possibly new) address, fresh discount
        // resolution, fresh totals.
        reprice(&mut draft, ctx).await?;

        match (self.courier.as_ref(), draft.method) {
            // Switched to pickup: hand the courier back.
            (Some(contact), DeliveryMethod::Pickup) => {
                release_courier(ctx, self, contact.id).await;
                draft.courier = None;
            }
            // Switched to delivery: claim, again as the final step.
            (None, DeliveryMethod::Delivery) => {
                draft.courier = Some(claim_courier(ctx, &draft).await?);
            }
            // Still delivery with a courier, or still pickup.
            _ => {}
        }

        *self = draft;
        Ok(())
    }

    async fn on_delete(&self, params: Self::Delete, ctx: &Self::Context) -> Result<(), Self::Error> {
        if params.caller != self.customer {
            return Err(OrderError::NotFoundOrUnauthorized);
        }
        if self.status.is_terminal() {
            return Err(OrderError::OrderClosed(self.status));
        }
        if !self.cancel_window_open(ctx.clock.now(), ctx.config.cancel_buffer()) {
            return Err(OrderError::CancelWindowClosed);
        }
        if let Some(contact) = &self.courier {
            release_courier(ctx, self, contact.id).await;
        }
        Ok(())
    }

    fn matches(&self, filter: &Self::Filter) -> bool {
        match filter {
            OrderFilter::ByCustomer { customer, status } => {
                self.customer == *customer && status.map_or(true, |s| s == self.status)
            }
            OrderFilter::ByRestaurant(restaurant) => self.restaurant == *restaurant,
            OrderFilter::ByStatus(status) => self.status == *status,
        }
    }

    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error> {
        match action {
            OrderAction::UpdateStatus { caller, next } => {
                let customer = ctx.customers.fetch(caller).await.map_err(|e| match e {
                    CustomerError::NotFound(id) => OrderError::UnknownCustomer(id),
                    other => OrderError::Unavailable(other.to_string()),
                })?;
                if !customer.role.is_staff() {
                    return Err(OrderError::StaffOnly);
                }
                if self.status == OrderStatus::Delivered && next == OrderStatus::Delivered {
                    return Err(OrderError::AlreadyDelivered);
                }
                if !self.status.can_transition_to(next) {
                    return Err(OrderError::InvalidTransition {
                        from: self.status,
                        to: next,
                    });
                }
                match next {
                    OrderStatus::Delivered => {
                        self.delivery_time = Some(ctx.clock.now());
                    }
                    OrderStatus::Canceled => {
                        if let Some(contact) = &self.courier {
                            release_courier(ctx, self, contact.id).await;
                        }
                    }
                    _ => {}
                }
                self.status = next;
                Ok(OrderActionResult::StatusUpdated(next))
            }
        }
    }
}

fn blank(s: Option<&str>) -> bool {
    s.map(|a| a.trim().is_empty()).unwrap_or(true)
}

fn validate_products(products: &HashMap<ItemId, u32>) -> Result<(), OrderError> {
    if products.is_empty() {
        return Err(OrderError::EmptyOrder);
    }
    for (item, &quantity) in products {
        if quantity == 0 {
            return Err(OrderError::ZeroQuantity(*item));
        }
    }
    Ok(())
}

/// Resolve the delivery address, bounded by the configured timeout, with one
/// retry after a backoff when the first attempt times out.
async fn locate_bounded(ctx: &OrderContext, address: &str) -> Result<Coordinates, OrderError> {
    let timeout = ctx.config.geocoding_timeout();
    match tokio::time::timeout(timeout, ctx.geocoder.locate(address)).await {
        Ok(result) => Ok(result?),
        Err(_) => {
            warn!(address, "geocoding timed out, retrying once");
            tokio::time::sleep(ctx.config.geocoding_retry_backoff()).await;
            match tokio::time::timeout(timeout, ctx.geocoder.locate(address)).await {
                Ok(result) => Ok(result?),
                Err(_) => Err(OrderError::Geocoding(GeocodingError::Timeout)),
            }
        }
    }
}

/// Recompute everything money-related on `order`: delivery fee from the
/// current address and method, unit prices from the catalog, discount
/// resolution, and the rounded total.
async fn reprice(order: &mut Order, ctx: &OrderContext) -> Result<(), OrderError> {
    let restaurant = ctx
        .restaurants
        .fetch(order.restaurant)
        .await
        .map_err(|e| match e {
            RestaurantError::NotFound(_) => OrderError::UnknownRestaurant(order.restaurant),
            other => OrderError::Unavailable(other.to_string()),
        })?;

    order.delivery_fee = match order.method {
        DeliveryMethod::Delivery => {
            let address = order
                .delivery_address
                .as_deref()
                .ok_or(OrderError::MissingDeliveryAddress)?;
            let coords = locate_bounded(ctx, address).await?;
            let distance = restaurant.location.distance_km(coords);
            pricing::delivery_fee(&ctx.config, distance)?
        }
        DeliveryMethod::Pickup => Decimal::ZERO,
    };

    let unit_prices = ctx
        .catalog
        .prices(order.restaurant, order.products.keys().copied().collect())
        .await
        .map_err(|e| OrderError::Unavailable(e.to_string()))?;

    let now = ctx.clock.now();
    let discount_pct = match &order.discount_code {
        Some(code) => {
            let discount = ctx
                .discounts
                .resolve(code, now)
                .await
                .map_err(|e| OrderError::Unavailable(e.to_string()))?
                .ok_or_else(|| OrderError::UnknownDiscount(code.clone()))?;
            // Expiry is judged here, at read time; the resolver's sweep is
            // housekeeping only.
            if discount.is_expired(now) {
                return Err(OrderError::DiscountExpired(code.clone()));
            }
            Some(discount.percentage)
        }
        None => None,
    };

    order.total = pricing::quote(&order.products, &unit_prices, discount_pct, order.delivery_fee)?;
    Ok(())
}

/// Claim a courier for `order`'s restaurant and resolve its contact profile.
/// A claim whose profile lookup fails is handed straight back.
async fn claim_courier(ctx: &OrderContext, order: &Order) -> Result<CourierContact, OrderError> {
    let courier_id = ctx
        .restaurants
        .claim_courier(order.restaurant)
        .await
        .map_err(|e| match e {
            RestaurantError::NoCourierAvailable => OrderError::NoCourierAvailable,
            RestaurantError::NotFound(_) => OrderError::UnknownRestaurant(order.restaurant),
            other => OrderError::Unavailable(other.to_string()),
        })?;

    match ctx.couriers.fetch(courier_id).await {
        Ok(profile) => Ok(CourierContact {
            id: courier_id,
            name: profile.name,
            phone: profile.phone,
        }),
        Err(e) => {
            warn!(order = %order.id, courier = %courier_id, error = %e, "releasing unusable claim");
            release_courier(ctx, order, courier_id).await;
            Err(OrderError::CourierProfileMissing(courier_id))
        }
    }
}

/// Best-effort release; a failure is logged, never surfaced, because the
/// caller's own operation has already been decided.
async fn release_courier(ctx: &OrderContext, order: &Order, courier_id: CourierId) {
    if let Err(e) = ctx
        .restaurants
        .release_courier(order.restaurant, courier_id)
        .await
    {
        warn!(order = %order.id, courier = %courier_id, error = %e, "courier release failed");
    }
}
