//! Pricing

use decimal_percentage::Percentage;
use rusty_money::{Money, iso, iso::Currency};
use smallvec::SmallVec;

use crate::{
    cart::Cart,
    discounts::{self, DiscountRule},
    menu::MenuItem,
};

/// The computed result of evaluating a cart.
///
/// A summary is derived state: recomputed from the cart on every change and
/// never mutated. It borrows the cart's items rather than cloning them, so
/// callers comparing by identity keep working.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary<'a> {
    items: SmallVec<[&'a MenuItem; 3]>,
    subtotal: Money<'static, Currency>,
    rule: DiscountRule,
    discount_amount: Money<'static, Currency>,
    total: Money<'static, Currency>,
}

impl<'a> OrderSummary<'a> {
    /// The included items, in fixed slot order: sandwich, side, drink.
    #[must_use]
    pub fn items(&self) -> &[&'a MenuItem] {
        &self.items
    }

    /// The exact sum of the included items' prices, before any rounding.
    #[must_use]
    pub fn subtotal(&self) -> &Money<'static, Currency> {
        &self.subtotal
    }

    /// The discount tier the cart qualified for.
    #[must_use]
    pub fn rule(&self) -> DiscountRule {
        self.rule
    }

    /// The fraction taken off the subtotal.
    #[must_use]
    pub fn discount_rate(&self) -> Percentage {
        self.rule.rate()
    }

    /// The amount taken off the subtotal.
    #[must_use]
    pub fn discount_amount(&self) -> &Money<'static, Currency> {
        &self.discount_amount
    }

    /// What the customer pays.
    #[must_use]
    pub fn total(&self) -> &Money<'static, Currency> {
        &self.total
    }
}

/// Evaluates a cart into a fresh summary.
///
/// Every cart has a summary: an empty cart yields an empty item list and
/// all-zero money lines. The subtotal is the exact item sum; the discount
/// amount is the tier's fraction of it, rounded half away from zero; the
/// total is what remains. The cart is only read, never changed.
#[must_use]
pub fn summarize(cart: &Cart) -> OrderSummary<'_> {
    let items: SmallVec<[&MenuItem; 3]> = cart.iter().collect();

    let currency = items
        .first()
        .map_or(iso::USD, |item| item.price().currency());

    let subtotal_minor = items
        .iter()
        .map(|item| item.price().to_minor_units())
        .fold(0_i64, i64::saturating_add);

    let rule = discounts::classify(cart);

    // Tier rates are fixed fractions of a cart-sized subtotal; the
    // conversion cannot overflow here.
    let discount_minor = discounts::percent_of_minor(&rule.rate(), subtotal_minor).unwrap_or(0);

    OrderSummary {
        items,
        subtotal: Money::from_minor(subtotal_minor, currency),
        rule,
        discount_amount: Money::from_minor(discount_minor, currency),
        total: Money::from_minor(subtotal_minor - discount_minor, currency),
    }
}
