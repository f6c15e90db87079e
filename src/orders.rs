//! Orders

use jiff::Timestamp;
use rusty_money::{Money, iso::Currency};
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::{cart::Cart, discounts::DiscountRule, pricing};

/// Errors rejecting an order submission.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    /// The customer name was missing or blank.
    #[error("Customer name is required to submit the order.")]
    NameRequired,

    /// Nothing in the cart.
    #[error("Add at least 1 item to the cart before submitting.")]
    EmptyCart,
}

/// An order accepted into the history.
///
/// Snapshots the cart and the summary's money lines at submission time and
/// is never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmittedOrder {
    id: Uuid,
    customer_name: String,
    created_at: Timestamp,
    cart: Cart,
    subtotal: Money<'static, Currency>,
    rule: DiscountRule,
    discount_amount: Money<'static, Currency>,
    total: Money<'static, Currency>,
}

impl SubmittedOrder {
    #[expect(clippy::too_many_arguments, reason = "Record reconstruction passes every stored field")]
    pub(crate) fn from_parts(
        id: Uuid,
        customer_name: String,
        created_at: Timestamp,
        cart: Cart,
        subtotal: Money<'static, Currency>,
        rule: DiscountRule,
        discount_amount: Money<'static, Currency>,
        total: Money<'static, Currency>,
    ) -> Self {
        Self {
            id,
            customer_name,
            created_at,
            cart,
            subtotal,
            rule,
            discount_amount,
            total,
        }
    }

    /// Returns the order id.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the customer the order was taken for.
    #[must_use]
    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    /// Returns when the order was submitted.
    #[must_use]
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Returns the cart snapshot taken at submission.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Returns the subtotal at submission.
    #[must_use]
    pub fn subtotal(&self) -> &Money<'static, Currency> {
        &self.subtotal
    }

    /// Returns the discount tier the order qualified for.
    #[must_use]
    pub fn rule(&self) -> DiscountRule {
        self.rule
    }

    /// Returns the amount taken off the subtotal.
    #[must_use]
    pub fn discount_amount(&self) -> &Money<'static, Currency> {
        &self.discount_amount
    }

    /// Returns what the customer paid.
    #[must_use]
    pub fn total(&self) -> &Money<'static, Currency> {
        &self.total
    }
}

/// The session's submitted orders, most recent first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderBook {
    orders: Vec<SubmittedOrder>,
}

impl OrderBook {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and accepts an order, placing it at the front of the
    /// history.
    ///
    /// The customer name is trimmed before the check, so whitespace alone
    /// does not count as a name. The caller clears its cart after a
    /// successful submission.
    ///
    /// # Errors
    ///
    /// - [`OrderError::NameRequired`]: the name is empty after trimming.
    /// - [`OrderError::EmptyCart`]: no slot is occupied.
    pub fn submit(
        &mut self,
        customer_name: &str,
        cart: &Cart,
    ) -> Result<SubmittedOrder, OrderError> {
        let name = customer_name.trim();

        if name.is_empty() {
            return Err(OrderError::NameRequired);
        }

        if cart.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        let summary = pricing::summarize(cart);

        let order = SubmittedOrder {
            id: Uuid::new_v4(),
            customer_name: name.to_owned(),
            created_at: Timestamp::now(),
            cart: cart.clone(),
            subtotal: *summary.subtotal(),
            rule: summary.rule(),
            discount_amount: *summary.discount_amount(),
            total: *summary.total(),
        };

        info!(
            order = %order.id,
            customer = name,
            total_minor = order.total.to_minor_units(),
            "order accepted"
        );

        self.orders.insert(0, order.clone());

        Ok(order)
    }

    /// Iterates over the history, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &SubmittedOrder> {
        self.orders.iter()
    }

    /// Returns the most recently submitted order.
    #[must_use]
    pub fn latest(&self) -> Option<&SubmittedOrder> {
        self.orders.first()
    }

    /// The number of submitted orders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Whether any order has been submitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Forgets the whole history.
    pub fn clear(&mut self) {
        self.orders.clear();
    }
}

impl From<Vec<SubmittedOrder>> for OrderBook {
    /// Rebuilds a history from stored orders, assumed most recent first.
    fn from(orders: Vec<SubmittedOrder>) -> Self {
        Self { orders }
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::USD;
    use testresult::TestResult;

    use crate::menu::{MenuCategory, MenuItem, MenuItemId};

    use super::*;

    fn burger() -> MenuItem {
        MenuItem::new(
            MenuItemId::Burger,
            "Burger",
            MenuCategory::Sandwich,
            Money::from_minor(500, USD),
        )
    }

    fn fries() -> MenuItem {
        MenuItem::new(
            MenuItemId::Fries,
            "Fries",
            MenuCategory::Extra,
            Money::from_minor(200, USD),
        )
    }

    fn cart_with_burger_and_fries() -> TestResult<Cart> {
        let mut cart = Cart::new();
        cart.add(burger())?;
        cart.add(fries())?;

        Ok(cart)
    }

    #[test]
    fn submit_snapshots_the_summary() -> TestResult {
        let cart = cart_with_burger_and_fries()?;
        let mut book = OrderBook::new();

        let order = book.submit("Ada", &cart)?;

        assert_eq!(order.customer_name(), "Ada");
        assert_eq!(order.rule(), DiscountRule::SandwichFries10);
        assert_eq!(order.subtotal(), &Money::from_minor(700, USD));
        assert_eq!(order.discount_amount(), &Money::from_minor(70, USD));
        assert_eq!(order.total(), &Money::from_minor(630, USD));
        assert_eq!(order.cart(), &cart);
        assert_eq!(book.len(), 1);

        Ok(())
    }

    #[test]
    fn blank_names_are_rejected() -> TestResult {
        let cart = cart_with_burger_and_fries()?;
        let mut book = OrderBook::new();

        let err = book.submit("   ", &cart).unwrap_err();

        assert_eq!(err, OrderError::NameRequired);
        assert_eq!(
            err.to_string(),
            "Customer name is required to submit the order."
        );
        assert!(book.is_empty());

        Ok(())
    }

    #[test]
    fn names_are_trimmed_before_storing() -> TestResult {
        let cart = cart_with_burger_and_fries()?;
        let mut book = OrderBook::new();

        let order = book.submit("  Grace  ", &cart)?;

        assert_eq!(order.customer_name(), "Grace");

        Ok(())
    }

    #[test]
    fn empty_carts_are_rejected() {
        let cart = Cart::new();
        let mut book = OrderBook::new();

        let err = book.submit("Ada", &cart).unwrap_err();

        assert_eq!(err, OrderError::EmptyCart);
        assert_eq!(
            err.to_string(),
            "Add at least 1 item to the cart before submitting."
        );
        assert!(book.is_empty());
    }

    #[test]
    fn history_is_most_recent_first() -> TestResult {
        let cart = cart_with_burger_and_fries()?;
        let mut book = OrderBook::new();

        book.submit("First", &cart)?;
        book.submit("Second", &cart)?;

        let names: Vec<&str> = book.iter().map(SubmittedOrder::customer_name).collect();
        assert_eq!(names, vec!["Second", "First"]);
        assert_eq!(
            book.latest().map(SubmittedOrder::customer_name),
            Some("Second")
        );

        Ok(())
    }

    #[test]
    fn orders_get_distinct_ids() -> TestResult {
        let cart = cart_with_burger_and_fries()?;
        let mut book = OrderBook::new();

        let first = book.submit("Ada", &cart)?;
        let second = book.submit("Ada", &cart)?;

        assert_ne!(first.id(), second.id());

        Ok(())
    }

    #[test]
    fn clear_forgets_the_history() -> TestResult {
        let cart = cart_with_burger_and_fries()?;
        let mut book = OrderBook::new();

        book.submit("Ada", &cart)?;
        book.clear();

        assert!(book.is_empty());

        Ok(())
    }
}
