//! Domain model: entities, their opaque ids, and the request payloads that
//! travel to the actors.

pub mod courier;
pub mod customer;
pub mod discount;
pub mod menu_item;
pub mod order;
pub mod restaurant;

pub use courier::{Courier, CourierCreate, CourierId, CourierUpdate};
pub use customer::{Customer, CustomerCreate, CustomerId, CustomerUpdate, Role};
pub use discount::{Discount, DiscountCreate, DiscountFilter, DiscountId, DiscountUpdate};
pub use menu_item::{ItemId, MenuFilter, MenuItem, MenuItemCreate, MenuItemUpdate};
pub use order::{
    CourierContact, DeliveryMethod, InvalidStatusError, Order, OrderCancel, OrderCreate,
    OrderEdit, OrderFilter, OrderId, OrderStatus,
};
pub use restaurant::{
    CourierAvailability, Restaurant, RestaurantCreate, RestaurantId, RestaurantUpdate,
};
