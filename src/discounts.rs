//! Discounts
//!
//! The discount tiers the stand offers, the slot-presence classifier that
//! selects one, and the shared rounding used everywhere the crate scales
//! money.

use std::fmt;

use decimal_percentage::Percentage;
use rust_decimal::{
    Decimal, RoundingStrategy,
    prelude::{FromPrimitive, ToPrimitive},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cart::Cart;

/// Errors specific to discount calculations.
#[derive(Debug, Error)]
pub enum DiscountError {
    /// Percentage calculation could not be safely converted.
    #[error("percentage conversion overflowed or was not finite")]
    PercentConversion,
}

/// The discount tiers.
///
/// Exactly one tier applies to any cart. Tags seen in stored history that
/// are not recognized fall back to [`DiscountRule::None`], which rates at
/// zero, so a foreign record never fails the whole read.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum DiscountRule {
    /// Sandwich and fries together.
    #[serde(rename = "sandwich_fries_10")]
    SandwichFries10,

    /// Sandwich and soft drink together.
    #[serde(rename = "sandwich_drink_15")]
    SandwichDrink15,

    /// All three slots filled.
    #[serde(rename = "combo_20")]
    Combo20,

    /// No qualifying combination.
    #[serde(rename = "none")]
    None,
}

impl DiscountRule {
    /// The stable tag used on the wire and in stored orders.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DiscountRule::SandwichFries10 => "sandwich_fries_10",
            DiscountRule::SandwichDrink15 => "sandwich_drink_15",
            DiscountRule::Combo20 => "combo_20",
            DiscountRule::None => "none",
        }
    }

    /// The discount fraction for this tier.
    #[must_use]
    pub fn rate(self) -> Percentage {
        match self {
            DiscountRule::SandwichFries10 => Percentage::from(Decimal::new(10, 2)),
            DiscountRule::SandwichDrink15 => Percentage::from(Decimal::new(15, 2)),
            DiscountRule::Combo20 => Percentage::from(Decimal::new(20, 2)),
            DiscountRule::None => Percentage::from(Decimal::ZERO),
        }
    }

    /// The label shown next to the discount line on receipts.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            DiscountRule::SandwichFries10 => "Sandwich + Fries (-10%)",
            DiscountRule::SandwichDrink15 => "Sandwich + Soft drink (-15%)",
            DiscountRule::Combo20 => "Combo (Sandwich + Fries + Soft drink) (-20%)",
            DiscountRule::None => "No discount",
        }
    }
}

impl fmt::Display for DiscountRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<&str> for DiscountRule {
    fn from(tag: &str) -> Self {
        match tag {
            "sandwich_fries_10" => DiscountRule::SandwichFries10,
            "sandwich_drink_15" => DiscountRule::SandwichDrink15,
            "combo_20" => DiscountRule::Combo20,
            _ => DiscountRule::None,
        }
    }
}

impl From<String> for DiscountRule {
    fn from(tag: String) -> Self {
        DiscountRule::from(tag.as_str())
    }
}

/// Selects the discount tier for a cart.
///
/// Classification is by slot presence only, never by item identity or
/// price, and checks the most specific combination first: the full combo
/// before either pair, so a three-item cart is never misclassified as a
/// two-item discount. A side and drink without a sandwich, or any single
/// item, earns nothing.
#[must_use]
pub fn classify(cart: &Cart) -> DiscountRule {
    let sandwich = cart.sandwich().is_some();
    let side = cart.side().is_some();
    let drink = cart.drink().is_some();

    match (sandwich, side, drink) {
        (true, true, true) => DiscountRule::Combo20,
        (true, false, true) => DiscountRule::SandwichDrink15,
        (true, true, false) => DiscountRule::SandwichFries10,
        _ => DiscountRule::None,
    }
}

/// Rounds a decimal count of minor units to a whole count, halves away
/// from zero.
///
/// Every place the crate scales money goes through this one routine, so a
/// boundary case like 100.5 cents always lands on 101.
#[must_use]
pub fn round_minor_units(amount: Decimal) -> Option<i64> {
    amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
}

/// Calculates the discount amount in minor units for a percentage of a
/// minor unit amount.
///
/// # Errors
///
/// Returns an error if:
/// - The percentage calculation overflows or cannot be safely represented (`DiscountError::PercentConversion`).
pub fn percent_of_minor(percent: &Percentage, minor: i64) -> Result<i64, DiscountError> {
    let minor = Decimal::from_i64(minor).ok_or(DiscountError::PercentConversion)?;

    let scaled = ((*percent) * Decimal::ONE) // decimal_percentage crate doesn't actually expose the underlying Decimal
        .checked_mul(minor)
        .ok_or(DiscountError::PercentConversion)?;

    round_minor_units(scaled).ok_or(DiscountError::PercentConversion)
}
