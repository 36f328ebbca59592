//! Lifecycle rules: the edit window, repricing on edit, the cancellation
//! buffer, ownership checks, and discount expiry under a manual clock.

mod common;

use common::{harness, NEAR_ADDRESS};
use chrono::Duration;
use fulfillment::model::{DeliveryMethod, DiscountCreate, OrderCreate, OrderEdit, OrderStatus};
use fulfillment::order_actor::{ErrorKind, OrderError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;

#[tokio::test]
async fn edits_inside_the_window_reprice_the_order() {
    let h = harness().await;
    let id = h.system.orders.place(h.pickup_order()).await.unwrap();

    h.clock.advance(Duration::minutes(29) + Duration::seconds(59));
    let edit = OrderEdit {
        products: Some(HashMap::from([(h.pizza, 1)])),
        ..OrderEdit::for_caller(h.alice)
    };
    let edited = h.system.orders.edit(id, edit).await.unwrap();
    assert_eq!(edited.total, dec!(10.00));
    h.system.shutdown().await;
}

#[tokio::test]
async fn edits_after_the_window_are_rejected_and_change_nothing() {
    let h = harness().await;
    let id = h.system.orders.place(h.pickup_order()).await.unwrap();

    h.clock.advance(Duration::minutes(30) + Duration::seconds(1));
    let edit = OrderEdit {
        products: Some(HashMap::from([(h.pizza, 1)])),
        ..OrderEdit::for_caller(h.alice)
    };
    let err = h.system.orders.edit(id, edit).await.unwrap_err();
    assert!(matches!(err, OrderError::EditWindowExpired));
    assert_eq!(err.kind(), ErrorKind::Conflict);

    let order = h.system.orders.fetch(id, h.alice).await.unwrap();
    assert_eq!(order.total, dec!(25.00));
    h.system.shutdown().await;
}

#[tokio::test]
async fn an_edit_with_no_fields_is_rejected() {
    let h = harness().await;
    let id = h.system.orders.place(h.pickup_order()).await.unwrap();
    let err = h
        .system
        .orders
        .edit(id, OrderEdit::for_caller(h.alice))
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::NoFieldsToUpdate));
    h.system.shutdown().await;
}

#[tokio::test]
async fn a_failed_edit_leaves_the_stored_order_untouched() {
    let h = harness().await;
    let id = h.system.orders.place(h.pickup_order()).await.unwrap();

    // Valid products plus an unusable discount code: repricing fails, so
    // neither change may stick.
    let edit = OrderEdit {
        products: Some(HashMap::from([(h.pizza, 1)])),
        discount_code: Some(Some("NOPE".to_string())),
        ..OrderEdit::for_caller(h.alice)
    };
    let err = h.system.orders.edit(id, edit).await.unwrap_err();
    assert!(matches!(err, OrderError::UnknownDiscount(_)));

    let order = h.system.orders.fetch(id, h.alice).await.unwrap();
    assert_eq!(order.products, HashMap::from([(h.pizza, 2), (h.dessert, 1)]));
    assert_eq!(order.total, dec!(25.00));
    assert!(order.discount_code.is_none());
    h.system.shutdown().await;
}

#[tokio::test]
async fn switching_to_pickup_releases_the_courier_and_drops_the_fee() {
    let h = harness().await;
    let id = h.system.orders.place(h.delivery_order()).await.unwrap();

    let edit = OrderEdit {
        method: Some(DeliveryMethod::Pickup),
        ..OrderEdit::for_caller(h.alice)
    };
    let edited = h.system.orders.edit(id, edit).await.unwrap();
    assert_eq!(edited.delivery_fee, Decimal::ZERO);
    assert_eq!(edited.total, dec!(25.00));
    assert!(edited.courier.is_none());

    // The courier went back on the roster.
    let claimed = h.system.restaurants.claim_courier(h.restaurant).await.unwrap();
    assert_eq!(claimed, h.courier);
    h.system.shutdown().await;
}

#[tokio::test]
async fn switching_to_delivery_claims_a_courier_and_charges_the_fee() {
    let h = harness().await;
    let id = h.system.orders.place(h.pickup_order()).await.unwrap();

    let edit = OrderEdit {
        method: Some(DeliveryMethod::Delivery),
        delivery_address: Some(NEAR_ADDRESS.to_string()),
        ..OrderEdit::for_caller(h.alice)
    };
    let edited = h.system.orders.edit(id, edit).await.unwrap();
    assert!(edited.delivery_fee > Decimal::ZERO);
    assert_eq!(edited.courier.as_ref().map(|c| c.id), Some(h.courier));
    h.system.shutdown().await;
}

#[tokio::test]
async fn only_the_owner_can_see_edit_or_cancel_an_order() {
    let h = harness().await;
    let id = h.system.orders.place(h.pickup_order()).await.unwrap();

    let err = h.system.orders.fetch(id, h.bob).await.unwrap_err();
    assert!(matches!(err, OrderError::NotFoundOrUnauthorized));
    assert_eq!(err.kind().http_status(), 404);

    let edit = OrderEdit {
        products: Some(HashMap::from([(h.pizza, 1)])),
        ..OrderEdit::for_caller(h.bob)
    };
    let err = h.system.orders.edit(id, edit).await.unwrap_err();
    assert!(matches!(err, OrderError::NotFoundOrUnauthorized));

    let err = h.system.orders.cancel(id, h.bob).await.unwrap_err();
    assert!(matches!(err, OrderError::NotFoundOrUnauthorized));

    // Still there for its owner.
    assert!(h.system.orders.fetch(id, h.alice).await.is_ok());
    h.system.shutdown().await;
}

#[tokio::test]
async fn cancellation_closes_thirty_minutes_before_the_eta() {
    let h = harness().await;
    let id = h.system.orders.place(h.pickup_order()).await.unwrap();

    // ETA is at +90, so the last cancellable instant is +60.
    h.clock.advance(Duration::minutes(60) + Duration::seconds(1));
    let err = h.system.orders.cancel(id, h.alice).await.unwrap_err();
    assert!(matches!(err, OrderError::CancelWindowClosed));

    // A fresh order cancels fine well before its cutoff.
    let second = h.system.orders.place(h.pickup_order()).await.unwrap();
    h.system.orders.cancel(second, h.alice).await.unwrap();
    let err = h.system.orders.fetch(second, h.alice).await.unwrap_err();
    assert!(matches!(err, OrderError::NotFoundOrUnauthorized));
    h.system.shutdown().await;
}

#[tokio::test]
async fn cancelling_a_delivery_frees_its_courier() {
    let h = harness().await;
    let id = h.system.orders.place(h.delivery_order()).await.unwrap();
    h.system.orders.cancel(id, h.alice).await.unwrap();

    let claimed = h.system.restaurants.claim_courier(h.restaurant).await.unwrap();
    assert_eq!(claimed, h.courier);
    h.system.shutdown().await;
}

#[tokio::test]
async fn order_listings_can_be_narrowed_by_status() {
    let h = harness().await;
    let first = h.system.orders.place(h.pickup_order()).await.unwrap();
    let _second = h.system.orders.place(h.pickup_order()).await.unwrap();
    h.system
        .orders
        .update_status(first, h.staff, "Delivered")
        .await
        .unwrap();

    let all = h.system.orders.orders_for(h.alice, None).await.unwrap();
    assert_eq!(all.len(), 2);

    let delivered = h
        .system
        .orders
        .orders_for(h.alice, Some(OrderStatus::Delivered))
        .await
        .unwrap();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].id, first);

    let pending = h
        .system
        .orders
        .orders_for(h.alice, Some(OrderStatus::Pending))
        .await
        .unwrap();
    assert_eq!(pending.len(), 1);
    h.system.shutdown().await;
}

#[tokio::test]
async fn discounts_expire_to_the_second() {
    let h = harness().await;
    h.system
        .discounts
        .publish(DiscountCreate {
            code: "FLASH".to_string(),
            percentage: 20,
            expires_at: common::start_instant() + Duration::hours(1),
        })
        .await
        .unwrap();

    // One second before expiry the code still applies.
    h.clock.advance(Duration::minutes(59) + Duration::seconds(59));
    let id = h
        .system
        .orders
        .place(OrderCreate {
            discount_code: Some("FLASH".to_string()),
            ..h.pickup_order()
        })
        .await
        .unwrap();
    let order = h.system.orders.fetch(id, h.alice).await.unwrap();
    assert_eq!(order.total, dec!(20.00));

    // Two seconds later the same code is reported as expired, not unknown.
    h.clock.advance(Duration::seconds(2));
    let err = h
        .system
        .orders
        .place(OrderCreate {
            discount_code: Some("FLASH".to_string()),
            ..h.pickup_order()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::DiscountExpired(ref code) if code == "FLASH"));
    assert_eq!(err.kind().http_status(), 400);

    // That resolution also swept the code from the store, so the next
    // attempt sees a code that no longer exists.
    let err = h
        .system
        .orders
        .place(OrderCreate {
            discount_code: Some("FLASH".to_string()),
            ..h.pickup_order()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::UnknownDiscount(code) if code == "FLASH"));
    let removed = h.system.discounts.purge_expired(h.clock.now()).await.unwrap();
    assert_eq!(removed, 0);
    h.system.shutdown().await;
}

#[tokio::test]
async fn purge_removes_only_expired_codes() {
    let h = harness().await;
    let now = h.clock.now();
    h.system
        .discounts
        .publish(DiscountCreate {
            code: "OLD".to_string(),
            percentage: 5,
            expires_at: now - Duration::hours(1),
        })
        .await
        .unwrap();
    h.system
        .discounts
        .publish(DiscountCreate {
            code: "FRESH".to_string(),
            percentage: 5,
            expires_at: now + Duration::hours(1),
        })
        .await
        .unwrap();

    let removed = h.system.discounts.purge_expired(now).await.unwrap();
    assert_eq!(removed, 1);
    assert!(h.system.discounts.resolve("FRESH", now).await.unwrap().is_some());
    assert!(h.system.discounts.resolve("OLD", now).await.unwrap().is_none());
    h.system.shutdown().await;
}
