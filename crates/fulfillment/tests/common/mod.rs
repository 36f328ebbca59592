//! Shared test harness: a running system with a manual clock, a seeded
//! restaurant at the origin, one rostered courier and a two-item menu.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use fulfillment::clock::Clock;
use fulfillment::config::EngineConfig;
use fulfillment::geo::Coordinates;
use fulfillment::geocode::StaticGeocoder;
use fulfillment::lifecycle::FulfillmentSystem;
use fulfillment::model::{
    CourierCreate, CourierId, CustomerCreate, CustomerId, DeliveryMethod, ItemId, MenuItemCreate,
    OrderCreate, RestaurantCreate, RestaurantId, Role,
};
use resource_actor::tracing::setup_tracing;
use rust_decimal_macros::dec;
use std::collections::HashMap;
use std::sync::Arc;

/// ~19.90 km east of the restaurant, inside the 20 km radius.
pub const NEAR_ADDRESS: &str = "1 Harbour Lane";
/// ~22.24 km east of the restaurant, outside the radius.
pub const FAR_ADDRESS: &str = "9 Distant Road";

pub fn start_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 10, 12, 0, 0).unwrap()
}

pub fn default_geocoder() -> StaticGeocoder {
    StaticGeocoder::new()
        .entry(NEAR_ADDRESS, Coordinates::new(0.0, 0.179))
        .entry(FAR_ADDRESS, Coordinates::new(0.0, 0.2))
}

pub struct Harness {
    pub system: FulfillmentSystem,
    pub clock: Clock,
    pub config: EngineConfig,
    pub alice: CustomerId,
    pub bob: CustomerId,
    pub staff: CustomerId,
    pub courier: CourierId,
    pub restaurant: RestaurantId,
    /// 10.00 each.
    pub pizza: ItemId,
    /// 5.00 each.
    pub dessert: ItemId,
}

pub async fn harness() -> Harness {
    harness_with(EngineConfig::default(), default_geocoder()).await
}

pub async fn harness_with(config: EngineConfig, geocoder: StaticGeocoder) -> Harness {
    setup_tracing();
    let clock = Clock::manual(start_instant());
    let system = FulfillmentSystem::start(config.clone(), clock.clone(), Arc::new(geocoder));

    let alice = system
        .customers
        .register(CustomerCreate {
            name: "Alice".to_string(),
            role: Role::Customer,
        })
        .await
        .unwrap();
    let bob = system
        .customers
        .register(CustomerCreate {
            name: "Bob".to_string(),
            role: Role::Customer,
        })
        .await
        .unwrap();
    let staff = system
        .customers
        .register(CustomerCreate {
            name: "Dana".to_string(),
            role: Role::Worker,
        })
        .await
        .unwrap();
    let courier = system
        .couriers
        .register(CourierCreate {
            name: "Kofi".to_string(),
            phone: "+233201234567".to_string(),
        })
        .await
        .unwrap();
    let restaurant = system
        .restaurants
        .open(RestaurantCreate {
            name: "Trattoria Zero".to_string(),
            location: Coordinates::new(0.0, 0.0),
            roster: vec![courier],
        })
        .await
        .unwrap();
    let pizza = system
        .catalog
        .add_item(MenuItemCreate {
            restaurant,
            name: "Margherita".to_string(),
            price: dec!(10.00),
        })
        .await
        .unwrap();
    let dessert = system
        .catalog
        .add_item(MenuItemCreate {
            restaurant,
            name: "Tiramisu".to_string(),
            price: dec!(5.00),
        })
        .await
        .unwrap();

    Harness {
        system,
        clock,
        config,
        alice,
        bob,
        staff,
        courier,
        restaurant,
        pizza,
        dessert,
    }
}

impl Harness {
    /// 2 pizzas + 1 dessert (subtotal 25.00) delivered to [`NEAR_ADDRESS`].
    pub fn delivery_order(&self) -> OrderCreate {
        OrderCreate {
            customer: self.alice,
            restaurant: self.restaurant,
            products: HashMap::from([(self.pizza, 2), (self.dessert, 1)]),
            method: DeliveryMethod::Delivery,
            delivery_address: Some(NEAR_ADDRESS.to_string()),
            discount_code: None,
            payment_method: "card".to_string(),
        }
    }

    /// Same basket, picked up at the counter.
    pub fn pickup_order(&self) -> OrderCreate {
        OrderCreate {
            method: DeliveryMethod::Pickup,
            delivery_address: None,
            ..self.delivery_order()
        }
    }
}
