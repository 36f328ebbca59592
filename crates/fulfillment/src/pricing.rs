//! Exact money arithmetic.
//!
//! All monetary amounts are [`Decimal`]; floats never touch a price. The
//! pipeline is: sum unit price times quantity, apply the percentage discount,
//! add the delivery fee, then round to cents exactly once at the end with
//! midpoint-away-from-zero.

use crate::config::EngineConfig;
use crate::model::ItemId;
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::HashMap;

/// Currency exponent: totals are rounded to cents.
pub const CURRENCY_SCALE: u32 = 2;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PricingError {
    #[error("no price on record for item {0}")]
    MissingPrice(ItemId),
}

/// A delivery address outside the serviceable radius.
#[derive(Debug, Clone, thiserror::Error)]
#[error("delivery distance {distance_km:.2} km exceeds the {max_km} km limit")]
pub struct DeliveryOutOfRange {
    pub distance_km: f64,
    pub max_km: f64,
}

/// Delivery fee for a restaurant-to-address distance, or an error when the
/// address is out of range. A distance of exactly the limit is accepted.
pub fn delivery_fee(config: &EngineConfig, distance_km: f64) -> Result<Decimal, DeliveryOutOfRange> {
    if !distance_km.is_finite() || distance_km > config.max_delivery_km {
        return Err(DeliveryOutOfRange {
            distance_km,
            max_km: config.max_delivery_km,
        });
    }
    let distance = Decimal::from_f64_retain(distance_km).unwrap_or(Decimal::ZERO);
    Ok(config.delivery_fee_per_km * distance)
}

/// Total for an order: discounted subtotal plus delivery fee, rounded to
/// [`CURRENCY_SCALE`] decimal places.
///
/// `discount_pct` is a whole-number percentage in `0..=100`. Rounding happens
/// once, on the final sum, so intermediate products stay exact.
pub fn quote(
    products: &HashMap<ItemId, u32>,
    unit_prices: &HashMap<ItemId, Decimal>,
    discount_pct: Option<u8>,
    delivery_fee: Decimal,
) -> Result<Decimal, PricingError> {
    let mut subtotal = Decimal::ZERO;
    for (item, &quantity) in products {
        let unit = unit_prices
            .get(item)
            .ok_or(PricingError::MissingPrice(*item))?;
        subtotal += *unit * Decimal::from(quantity);
    }

    if let Some(pct) = discount_pct {
        let keep = Decimal::from(100u32 - u32::from(pct.min(100))) / Decimal::from(100u32);
        subtotal *= keep;
    }

    let total = subtotal + delivery_fee;
    Ok(total.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn item() -> ItemId {
        ItemId::random()
    }

    #[test]
    fn subtotal_with_discount_and_fee() {
        let (a, b) = (item(), item());
        let products = HashMap::from([(a, 2), (b, 1)]);
        let prices = HashMap::from([(a, dec!(10.00)), (b, dec!(5.00))]);

        // 25.00 * 0.90 + 3.75 = 26.25
        let total = quote(&products, &prices, Some(10), dec!(3.75)).unwrap();
        assert_eq!(total, dec!(26.25));
    }

    #[test]
    fn no_discount_is_identity() {
        let a = item();
        let products = HashMap::from([(a, 3)]);
        let prices = HashMap::from([(a, dec!(7.99))]);
        let total = quote(&products, &prices, None, Decimal::ZERO).unwrap();
        assert_eq!(total, dec!(23.97));
    }

    #[test]
    fn hundred_percent_discount_leaves_only_the_fee() {
        let a = item();
        let products = HashMap::from([(a, 4)]);
        let prices = HashMap::from([(a, dec!(12.50))]);
        let total = quote(&products, &prices, Some(100), dec!(5.00)).unwrap();
        assert_eq!(total, dec!(5.00));
    }

    #[test]
    fn rounds_once_at_the_end_midpoint_away_from_zero() {
        let a = item();
        let products = HashMap::from([(a, 1)]);
        let prices = HashMap::from([(a, dec!(10.01))]);
        // 10.01 * 0.75 = 7.5075 -> 7.51
        let total = quote(&products, &prices, Some(25), Decimal::ZERO).unwrap();
        assert_eq!(total, dec!(7.51));
    }

    #[test]
    fn missing_price_is_an_error() {
        let a = item();
        let products = HashMap::from([(a, 1)]);
        let prices = HashMap::new();
        assert!(matches!(
            quote(&products, &prices, None, Decimal::ZERO),
            Err(PricingError::MissingPrice(id)) if id == a
        ));
    }

    #[test]
    fn fee_scales_linearly_with_distance() {
        let config = EngineConfig::default();
        assert_eq!(delivery_fee(&config, 1.5).unwrap(), dec!(3.75));
        assert_eq!(delivery_fee(&config, 0.0).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn exactly_the_limit_is_accepted() {
        let config = EngineConfig::default();
        let fee = delivery_fee(&config, 20.0).unwrap();
        assert_eq!(fee, dec!(50.0));
    }

    #[test]
    fn just_past_the_limit_is_rejected() {
        let config = EngineConfig::default();
        let err = delivery_fee(&config, 20.01).unwrap_err();
        assert_eq!(err.max_km, 20.0);
    }

    #[test]
    fn non_finite_distance_is_rejected() {
        let config = EngineConfig::default();
        assert!(delivery_fee(&config, f64::NAN).is_err());
        assert!(delivery_fee(&config, f64::INFINITY).is_err());
    }
}
