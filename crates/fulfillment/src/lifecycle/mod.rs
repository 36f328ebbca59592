//! # System Lifecycle & Orchestration
//!
//! Individual actors are simple; wiring them together is where the
//! complexity lives. [`FulfillmentSystem`] is the conductor: it creates
//! every actor, injects dependencies, starts the tasks, and coordinates
//! graceful shutdown.
//!
//! ## Late binding
//!
//! Actors are constructed without their dependencies; dependencies are
//! injected at `run(context)`. The directory actors (customers, couriers,
//! restaurants, catalog, discounts) have no dependencies and run with `()`.
//! The order actor receives an [`OrderContext`] holding the engine config,
//! the clock, the geocoder and a clone of every other client. The dependency
//! graph is acyclic, so construction order is trivial.
//!
//! ## Shutdown
//!
//! Dropping the system's client handles closes the order actor's channel
//! first; when its task exits, the context clones it held drop too, which
//! closes the directory actors' channels in turn. `shutdown()` then awaits
//! every task, bounded by a drain deadline, so no in-flight message is lost
//! and a leaked client clone cannot hang the caller.

use crate::clients::{
    CatalogClient, CourierClient, CustomerClient, DiscountClient, OrderClient, RestaurantClient,
};
use crate::clock::Clock;
use crate::config::EngineConfig;
use crate::geocode::Geocode;
use crate::order_actor::OrderContext;
use crate::{catalog_actor, courier_actor, customer_actor, discount_actor, order_actor, restaurant_actor};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// How long `shutdown` waits for each actor task to drain and exit. A
/// client clone still alive somewhere keeps an actor's channel open; the
/// deadline turns that bug into a logged warning instead of a hang.
const SHUTDOWN_DRAIN: Duration = Duration::from_secs(5);

/// The running engine: every actor spawned, every client wired.
pub struct FulfillmentSystem {
    pub customers: CustomerClient,
    pub couriers: CourierClient,
    pub restaurants: RestaurantClient,
    pub catalog: CatalogClient,
    pub discounts: DiscountClient,
    pub orders: OrderClient,
    handles: Vec<JoinHandle<()>>,
}

impl FulfillmentSystem {
    /// Create and start every actor.
    pub fn start(config: EngineConfig, clock: Clock, geocoder: Arc<dyn Geocode>) -> Self {
        let (customer_actor, customer_generic) = customer_actor::new();
        let (courier_actor, courier_generic) = courier_actor::new();
        let (restaurant_actor, restaurant_generic) = restaurant_actor::new();
        let (catalog_actor, catalog_generic) = catalog_actor::new();
        let (discount_actor, discount_generic) = discount_actor::new();
        let (order_actor, order_generic) = order_actor::new();

        let customers = CustomerClient::new(customer_generic);
        let couriers = CourierClient::new(courier_generic);
        let restaurants = RestaurantClient::new(restaurant_generic);
        let catalog = CatalogClient::new(catalog_generic);
        let discounts = DiscountClient::new(discount_generic);
        let orders = OrderClient::new(order_generic, customers.clone());

        let order_ctx = OrderContext {
            config,
            clock,
            geocoder,
            customers: customers.clone(),
            restaurants: restaurants.clone(),
            couriers: couriers.clone(),
            catalog: catalog.clone(),
            discounts: discounts.clone(),
        };

        let handles = vec![
            tokio::spawn(customer_actor.run(())),
            tokio::spawn(courier_actor.run(())),
            tokio::spawn(restaurant_actor.run(())),
            tokio::spawn(catalog_actor.run(())),
            tokio::spawn(discount_actor.run(())),
            tokio::spawn(order_actor.run(order_ctx)),
        ];

        info!("fulfillment system started");
        Self {
            customers,
            couriers,
            restaurants,
            catalog,
            discounts,
            orders,
            handles,
        }
    }

    /// Drop every client handle and wait for all actors to drain and exit.
    pub async fn shutdown(self) {
        let Self {
            customers,
            couriers,
            restaurants,
            catalog,
            discounts,
            orders,
            handles,
        } = self;
        drop(orders);
        drop(customers);
        drop(couriers);
        drop(restaurants);
        drop(catalog);
        drop(discounts);

        for handle in handles {
            if tokio::time::timeout(SHUTDOWN_DRAIN, handle).await.is_err() {
                warn!("actor did not drain in time; a client handle is still alive");
            }
        }
        info!("fulfillment system stopped");
    }
}
