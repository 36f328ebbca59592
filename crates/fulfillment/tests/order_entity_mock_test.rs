//! Isolation tests for the order entity's hooks: every collaborator is a
//! scripted [`MockClient`], so the pricing pipeline runs with no real actors
//! except the scripts themselves.

use chrono::{TimeZone, Utc};
use fulfillment::clients::{
    CatalogClient, CourierClient, CustomerClient, DiscountClient, RestaurantClient,
};
use fulfillment::clock::Clock;
use fulfillment::config::EngineConfig;
use fulfillment::geo::Coordinates;
use fulfillment::geocode::StaticGeocoder;
use fulfillment::model::{
    Courier, CourierId, Customer, CustomerId, DeliveryMethod, ItemId, MenuItem, Order,
    OrderCreate, OrderId, Restaurant, RestaurantId, Role,
};
use fulfillment::order_actor::{OrderContext, OrderError};
use fulfillment::restaurant_actor::RestaurantActionResult;
use resource_actor::mock::MockClient;
use resource_actor::ActorEntity;
use rust_decimal_macros::dec;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

struct Mocks {
    customers: MockClient<Customer>,
    restaurants: MockClient<Restaurant>,
    couriers: MockClient<Courier>,
    catalog: MockClient<MenuItem>,
    discounts: MockClient<fulfillment::model::Discount>,
}

fn context(mocks: &Mocks) -> OrderContext {
    OrderContext {
        config: EngineConfig::default(),
        clock: Clock::manual(Utc.with_ymd_and_hms(2026, 1, 10, 12, 0, 0).unwrap()),
        geocoder: Arc::new(
            StaticGeocoder::new().entry("1 Harbour Lane", Coordinates::new(0.0, 0.1)),
        ),
        customers: CustomerClient::new(mocks.customers.client()),
        restaurants: RestaurantClient::new(mocks.restaurants.client()),
        couriers: CourierClient::new(mocks.couriers.client()),
        catalog: CatalogClient::new(mocks.catalog.client()),
        discounts: DiscountClient::new(mocks.discounts.client()),
    }
}

#[tokio::test]
async fn on_create_prices_and_assigns_from_scripted_collaborators() {
    let mut mocks = Mocks {
        customers: MockClient::new(),
        restaurants: MockClient::new(),
        couriers: MockClient::new(),
        catalog: MockClient::new(),
        discounts: MockClient::new(),
    };

    let customer_id = CustomerId::random();
    let restaurant_id = RestaurantId::random();
    let courier_id = CourierId::random();
    let pizza = ItemId::random();

    mocks.customers.expect_get(customer_id).return_ok(Some(Customer {
        id: customer_id,
        name: "Alice".to_string(),
        role: Role::Customer,
    }));
    mocks
        .restaurants
        .expect_get(restaurant_id)
        .return_ok(Some(Restaurant {
            id: restaurant_id,
            name: "Trattoria Zero".to_string(),
            location: Coordinates::new(0.0, 0.0),
            roster: BTreeMap::new(),
        }));
    mocks.catalog.expect_find().return_ok(vec![MenuItem {
        id: pizza,
        restaurant: restaurant_id,
        name: "Margherita".to_string(),
        price: dec!(10.00),
    }]);
    mocks
        .restaurants
        .expect_action(restaurant_id)
        .return_ok(RestaurantActionResult::Claimed(courier_id));
    mocks.couriers.expect_get(courier_id).return_ok(Some(Courier {
        id: courier_id,
        name: "Kofi".to_string(),
        phone: "+233201234567".to_string(),
    }));

    let ctx = context(&mocks);
    let mut order = Order::from_create_params(
        OrderId::random(),
        OrderCreate {
            customer: customer_id,
            restaurant: restaurant_id,
            products: HashMap::from([(pizza, 2)]),
            method: DeliveryMethod::Delivery,
            delivery_address: Some("1 Harbour Lane".to_string()),
            discount_code: None,
            payment_method: "card".to_string(),
        },
    )
    .unwrap();
    order.on_create(&ctx).await.unwrap();

    // 0.1 degrees along the equator is ~11.12 km, so the fee is ~27.80.
    assert!(order.delivery_fee > dec!(27.75) && order.delivery_fee < dec!(27.85));
    assert_eq!(order.courier.as_ref().map(|c| c.id), Some(courier_id));
    assert_eq!(order.created_at, ctx.clock.now());

    mocks.customers.verify();
    mocks.restaurants.verify();
    mocks.couriers.verify();
    mocks.catalog.verify();
    mocks.discounts.verify();
}

#[tokio::test]
async fn a_failed_profile_lookup_hands_the_claim_back() {
    let mut mocks = Mocks {
        customers: MockClient::new(),
        restaurants: MockClient::new(),
        couriers: MockClient::new(),
        catalog: MockClient::new(),
        discounts: MockClient::new(),
    };

    let customer_id = CustomerId::random();
    let restaurant_id = RestaurantId::random();
    let courier_id = CourierId::random();
    let pizza = ItemId::random();

    mocks.customers.expect_get(customer_id).return_ok(Some(Customer {
        id: customer_id,
        name: "Alice".to_string(),
        role: Role::Customer,
    }));
    mocks
        .restaurants
        .expect_get(restaurant_id)
        .return_ok(Some(Restaurant {
            id: restaurant_id,
            name: "Trattoria Zero".to_string(),
            location: Coordinates::new(0.0, 0.0),
            roster: BTreeMap::new(),
        }));
    mocks.catalog.expect_find().return_ok(vec![MenuItem {
        id: pizza,
        restaurant: restaurant_id,
        name: "Margherita".to_string(),
        price: dec!(10.00),
    }]);
    mocks
        .restaurants
        .expect_action(restaurant_id)
        .return_ok(RestaurantActionResult::Claimed(courier_id));
    // Directory has no profile for the claimed courier.
    mocks.couriers.expect_get(courier_id).return_ok(None);
    // The entity must release the claim it cannot use.
    mocks
        .restaurants
        .expect_action(restaurant_id)
        .return_ok(RestaurantActionResult::Released);

    let ctx = context(&mocks);
    let mut order = Order::from_create_params(
        OrderId::random(),
        OrderCreate {
            customer: customer_id,
            restaurant: restaurant_id,
            products: HashMap::from([(pizza, 1)]),
            method: DeliveryMethod::Delivery,
            delivery_address: Some("1 Harbour Lane".to_string()),
            discount_code: None,
            payment_method: "card".to_string(),
        },
    )
    .unwrap();

    let err = order.on_create(&ctx).await.unwrap_err();
    assert!(matches!(err, OrderError::CourierProfileMissing(id) if id == courier_id));
    mocks.restaurants.verify();
    mocks.couriers.verify();
}
