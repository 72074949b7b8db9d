//! # Pricing & Scheduling
//!
//! Pure functions that derive an order's prices and delivery estimate. They
//! run once, when the order is placed; nothing recomputes them later.
//!
//! Amounts are plain `f64` sums with no currency rounding.

use crate::model::CartLine;
use chrono::{DateTime, Duration, Utc};

/// Share of the order price charged on top for a priority order.
pub const PRIORITY_SURCHARGE_RATE: f64 = 0.2;

/// Delivery estimate for priority orders, in minutes.
pub const PRIORITY_DELIVERY_MINUTES: i64 = 30;

/// Delivery estimate for standard orders, in minutes.
pub const STANDARD_DELIVERY_MINUTES: i64 = 45;

/// The three derived amounts of an order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBreakdown {
    /// Sum of the cart's line totals.
    pub order_price: f64,
    /// Surcharge for priority handling; exactly `0.0` for standard orders.
    pub priority_price: f64,
    /// `order_price + priority_price`.
    pub total_price: f64,
}

/// Prices a cart.
///
/// Line totals are summed as supplied; `quantity * unit_price` is not
/// re-derived.
pub fn compute_prices(cart: &[CartLine], priority: bool) -> PriceBreakdown {
    let order_price = cart.iter().fold(0.0, |sum, line| sum + line.total_price);
    let priority_price = if priority {
        order_price * PRIORITY_SURCHARGE_RATE
    } else {
        0.0
    };

    PriceBreakdown {
        order_price,
        priority_price,
        total_price: order_price + priority_price,
    }
}

/// Estimated delivery time for an order placed at `now`.
pub fn compute_delivery(now: DateTime<Utc>, priority: bool) -> DateTime<Utc> {
    let minutes = if priority {
        PRIORITY_DELIVERY_MINUTES
    } else {
        STANDARD_DELIVERY_MINUTES
    };
    now + Duration::minutes(minutes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn two_margheritas() -> Vec<CartLine> {
        vec![CartLine::new(1, "Margherita", 2, 12.0)]
    }

    #[test]
    fn test_standard_order_has_no_surcharge() {
        let prices = compute_prices(&two_margheritas(), false);
        assert_eq!(prices.order_price, 24.0);
        assert_eq!(prices.priority_price, 0.0);
        assert_eq!(prices.total_price, 24.0);
    }

    #[test]
    fn test_priority_order_adds_twenty_percent() {
        let prices = compute_prices(&two_margheritas(), true);
        assert_eq!(prices.order_price, 24.0);
        assert!(approx(prices.priority_price, 4.8));
        assert!(approx(prices.total_price, 28.8));
    }

    #[test]
    fn test_total_is_order_plus_priority_for_mixed_carts() {
        let carts = vec![
            vec![],
            two_margheritas(),
            vec![
                CartLine::new(2, "Pepperoni", 1, 15.0),
                CartLine::new(6, "Supreme", 3, 18.0),
                CartLine::new(4, "Vegetarian", 5, 13.0),
            ],
        ];

        for cart in &carts {
            for priority in [false, true] {
                let prices = compute_prices(cart, priority);
                assert_eq!(
                    prices.total_price,
                    prices.order_price + prices.priority_price
                );
                if priority {
                    assert_eq!(prices.priority_price, prices.order_price * 0.2);
                } else {
                    assert_eq!(prices.priority_price, 0.0);
                }
            }
        }
    }

    #[test]
    fn test_supplied_line_total_is_trusted() {
        let mut line = CartLine::new(3, "Hawaiian", 2, 14.0);
        line.total_price = 1.0;

        let prices = compute_prices(&[line], false);
        assert_eq!(prices.order_price, 1.0);
    }

    #[test]
    fn test_empty_cart_costs_nothing() {
        let prices = compute_prices(&[], true);
        assert_eq!(prices.order_price, 0.0);
        assert_eq!(prices.priority_price, 0.0);
        assert_eq!(prices.total_price, 0.0);
    }

    #[test]
    fn test_delivery_windows() {
        let placed = Utc.with_ymd_and_hms(2024, 5, 1, 18, 20, 0).unwrap();

        assert_eq!(
            compute_delivery(placed, true),
            Utc.with_ymd_and_hms(2024, 5, 1, 18, 50, 0).unwrap()
        );
        assert_eq!(
            compute_delivery(placed, false),
            Utc.with_ymd_and_hms(2024, 5, 1, 19, 5, 0).unwrap()
        );
    }

    #[test]
    fn test_delivery_crosses_midnight() {
        let placed = Utc.with_ymd_and_hms(2024, 12, 31, 23, 40, 0).unwrap();
        assert_eq!(
            compute_delivery(placed, false),
            Utc.with_ymd_and_hms(2025, 1, 1, 0, 25, 0).unwrap()
        );
    }
}
