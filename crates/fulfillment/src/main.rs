//! Demo walkthrough: seed a restaurant, place a discounted delivery order,
//! and progress it to delivered.
//!
//! Run with `RUST_LOG=info` for compact logs or `RUST_LOG=debug` for full
//! payloads.

use chrono::Duration;
use fulfillment::clock::Clock;
use fulfillment::config::EngineConfig;
use fulfillment::geo::Coordinates;
use fulfillment::geocode::StaticGeocoder;
use fulfillment::lifecycle::FulfillmentSystem;
use fulfillment::model::{
    CourierCreate, CustomerCreate, DeliveryMethod, DiscountCreate, MenuItemCreate, OrderCreate,
    OrderEdit, RestaurantCreate, Role,
};
use resource_actor::tracing::setup_tracing;
use rust_decimal_macros::dec;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let clock = Clock::system();
    let geocoder = StaticGeocoder::new()
        .entry("1 Harbour Lane", Coordinates::new(0.0, 0.179));
    let system = FulfillmentSystem::start(EngineConfig::default(), clock.clone(), Arc::new(geocoder));

    // Directory data.
    let alice = system
        .customers
        .register(CustomerCreate {
            name: "Alice".to_string(),
            role: Role::Customer,
        })
        .await?;
    let dispatcher = system
        .customers
        .register(CustomerCreate {
            name: "Dana".to_string(),
            role: Role::Worker,
        })
        .await?;
    let courier = system
        .couriers
        .register(CourierCreate {
            name: "Kofi".to_string(),
            phone: "+233201234567".to_string(),
        })
        .await?;
    let trattoria = system
        .restaurants
        .open(RestaurantCreate {
            name: "Trattoria Zero".to_string(),
            location: Coordinates::new(0.0, 0.0),
            roster: vec![courier],
        })
        .await?;
    let margherita = system
        .catalog
        .add_item(MenuItemCreate {
            restaurant: trattoria,
            name: "Margherita".to_string(),
            price: dec!(10.00),
        })
        .await?;
    let tiramisu = system
        .catalog
        .add_item(MenuItemCreate {
            restaurant: trattoria,
            name: "Tiramisu".to_string(),
            price: dec!(5.00),
        })
        .await?;
    system
        .discounts
        .publish(DiscountCreate {
            code: "WELCOME10".to_string(),
            percentage: 10,
            expires_at: clock.now() + Duration::days(1),
        })
        .await?;

    // Place a delivery order: 2 pizzas, 1 dessert, 10% off.
    let order_id = system
        .orders
        .place(OrderCreate {
            customer: alice,
            restaurant: trattoria,
            products: HashMap::from([(margherita, 2), (tiramisu, 1)]),
            method: DeliveryMethod::Delivery,
            delivery_address: Some("1 Harbour Lane".to_string()),
            discount_code: Some("WELCOME10".to_string()),
            payment_method: "card".to_string(),
        })
        .await?;

    let order = system.orders.fetch(order_id, alice).await?;
    info!(
        order = %order_id,
        total = %order.total,
        delivery_fee = %order.delivery_fee,
        courier = ?order.courier.as_ref().map(|c| c.name.clone()),
        eta = %order.eta,
        "order placed"
    );

    // Alice changes her mind about dessert while the edit window is open.
    let edit = OrderEdit {
        products: Some(HashMap::from([(margherita, 2)])),
        ..OrderEdit::for_caller(alice)
    };
    let edited = system.orders.edit(order_id, edit).await?;
    info!(order = %order_id, total = %edited.total, "order edited and repriced");

    // Staff walk the order to delivered.
    system
        .orders
        .update_status(order_id, dispatcher, "In Progress")
        .await?;
    system
        .orders
        .update_status(order_id, dispatcher, "Delivered")
        .await?;

    let delivered = system.orders.fetch(order_id, alice).await?;
    info!(
        order = %order_id,
        status = %delivered.status,
        delivered_at = ?delivered.delivery_time,
        "order complete"
    );

    system.shutdown().await;
    Ok(())
}
