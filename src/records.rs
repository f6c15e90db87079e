//! Session Records
//!
//! Plain serde shapes for what the session store persists: the in-progress
//! cart under the cart key and the order history under the orders key.
//! Money travels as minor units plus an ISO currency code; conversions back
//! into domain values are fallible and surface unknown currencies.

use jiff::Timestamp;
use rusty_money::{Findable, Money, MoneyError, iso::Currency};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::{
    cart::{Cart, CartError},
    discounts::DiscountRule,
    menu::{MenuCategory, MenuItem, MenuItemId},
    orders::SubmittedOrder,
};

/// Errors converting stored records back into domain values.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The stored currency code is not a known ISO currency.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// The stored cart shape violates the slot rules.
    #[error(transparent)]
    Cart(#[from] CartError),
}

/// One stored menu item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItemRecord {
    /// Stable item id.
    pub id: MenuItemId,

    /// Display name.
    pub name: String,

    /// Catalog category.
    pub category: MenuCategory,

    /// Price in minor units.
    pub price: i64,

    /// ISO currency code for the price.
    pub currency: String,
}

impl From<&MenuItem> for MenuItemRecord {
    fn from(item: &MenuItem) -> Self {
        Self {
            id: item.id(),
            name: item.name().to_owned(),
            category: item.category(),
            price: item.price().to_minor_units(),
            currency: item.price().currency().iso_alpha_code.to_owned(),
        }
    }
}

impl TryFrom<MenuItemRecord> for MenuItem {
    type Error = MoneyError;

    fn try_from(record: MenuItemRecord) -> Result<Self, Self::Error> {
        let Some(currency) = Currency::find(&record.currency) else {
            return Err(MoneyError::InvalidCurrency);
        };

        Ok(MenuItem::new(
            record.id,
            record.name,
            record.category,
            Money::from_minor(record.price, currency),
        ))
    }
}

/// The stored shape of an in-progress cart.
///
/// Slot keys match what the storefront always wrote: the side slot is
/// stored under `fries`. Empty slots are omitted entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartRecord {
    /// The sandwich slot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sandwich: Option<MenuItemRecord>,

    /// The side slot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fries: Option<MenuItemRecord>,

    /// The drink slot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drink: Option<MenuItemRecord>,
}

impl From<&Cart> for CartRecord {
    fn from(cart: &Cart) -> Self {
        Self {
            sandwich: cart.sandwich().map(MenuItemRecord::from),
            fries: cart.side().map(MenuItemRecord::from),
            drink: cart.drink().map(MenuItemRecord::from),
        }
    }
}

impl TryFrom<CartRecord> for Cart {
    type Error = RecordError;

    fn try_from(record: CartRecord) -> Result<Self, Self::Error> {
        let mut cart = Cart::new();

        for item in [record.sandwich, record.fries, record.drink]
            .into_iter()
            .flatten()
        {
            cart.add(MenuItem::try_from(item)?)?;
        }

        Ok(cart)
    }
}

/// One stored order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    /// Order id.
    pub id: Uuid,

    /// Who the order was taken for.
    pub customer_name: String,

    /// Submission time.
    pub created_at: Timestamp,

    /// The cart snapshot at submission.
    pub cart: CartRecord,

    /// Subtotal in minor units.
    pub subtotal: i64,

    /// The discount tier, stored by tag.
    pub discount_rule: DiscountRule,

    /// Discount amount in minor units.
    pub discount_amount: i64,

    /// Total in minor units.
    pub total: i64,

    /// ISO currency code shared by the money fields.
    pub currency: String,
}

impl From<&SubmittedOrder> for OrderRecord {
    fn from(order: &SubmittedOrder) -> Self {
        Self {
            id: order.id(),
            customer_name: order.customer_name().to_owned(),
            created_at: order.created_at(),
            cart: CartRecord::from(order.cart()),
            subtotal: order.subtotal().to_minor_units(),
            discount_rule: order.rule(),
            discount_amount: order.discount_amount().to_minor_units(),
            total: order.total().to_minor_units(),
            currency: order.subtotal().currency().iso_alpha_code.to_owned(),
        }
    }
}

impl TryFrom<OrderRecord> for SubmittedOrder {
    type Error = RecordError;

    fn try_from(record: OrderRecord) -> Result<Self, Self::Error> {
        let Some(currency) = Currency::find(&record.currency) else {
            return Err(RecordError::Money(MoneyError::InvalidCurrency));
        };

        Ok(SubmittedOrder::from_parts(
            record.id,
            record.customer_name,
            record.created_at,
            Cart::try_from(record.cart)?,
            Money::from_minor(record.subtotal, currency),
            record.discount_rule,
            Money::from_minor(record.discount_amount, currency),
            Money::from_minor(record.total, currency),
        ))
    }
}
