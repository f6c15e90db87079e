//! Receipt
//!
//! Console rendering for carts, order summaries, and the order history,
//! using the storefront's money format.

use std::io;

use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{cart::Cart, menu::MenuItem, orders::OrderBook, pricing::OrderSummary};

/// Errors that can occur when rendering a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// IO error
    #[error("IO error")]
    IO,
}

/// Renders a minor-unit amount the way the storefront prints prices.
///
/// A space follows the dollar sign, the decimal separator is a comma, and
/// a negative amount keeps its sign between the space and the digits:
/// `$ 5,00`, `$ -7,60`.
#[must_use]
pub fn format_money(minor: i64) -> String {
    let sign = if minor < 0 { "-" } else { "" };
    let magnitude = minor.unsigned_abs();

    format!("$ {sign}{},{:02}", magnitude / 100, magnitude % 100)
}

/// The slot contents on one line, with `—` marking empty slots.
#[must_use]
pub fn slot_line(cart: &Cart) -> String {
    [cart.sandwich(), cart.side(), cart.drink()]
        .into_iter()
        .map(|slot| slot.map_or("—", MenuItem::name))
        .collect::<Vec<_>>()
        .join(" / ")
}

/// Writes the cart receipt: one row per occupied slot, then subtotal,
/// discount, and total rows.
///
/// The discount row is always present, carrying the tier label and the
/// amount taken off: `No discount` and `-$ 0,00` when nothing applies.
///
/// # Errors
///
/// Returns a [`ReceiptError`] if the receipt cannot be written.
pub fn write_summary(
    mut out: impl io::Write,
    cart: &Cart,
    summary: &OrderSummary<'_>,
) -> Result<(), ReceiptError> {
    let mut builder = Builder::default();

    builder.push_record(["Slot", "Item", "Price"]);

    let slots = [
        ("Sandwich", cart.sandwich()),
        ("Fries", cart.side()),
        ("Soft drink", cart.drink()),
    ];

    let mut item_rows = 0usize;

    for (label, item) in slots {
        if let Some(item) = item {
            builder.push_record([
                label.to_string(),
                item.name().to_string(),
                format_money(item.price().to_minor_units()),
            ]);

            item_rows += 1;
        }
    }

    builder.push_record([
        "Subtotal".to_string(),
        String::new(),
        format_money(summary.subtotal().to_minor_units()),
    ]);

    builder.push_record([
        "Discount".to_string(),
        summary.rule().label().to_string(),
        format!("-{}", format_money(summary.discount_amount().to_minor_units())),
    ]);

    builder.push_record([
        "Total".to_string(),
        String::new(),
        format_money(summary.total().to_minor_units()),
    ]);

    // Separate the slot rows from the money rows.
    write_table(&mut out, builder, &[1 + item_rows], 2)
}

/// Writes the order history table, most recent order first.
///
/// # Errors
///
/// Returns a [`ReceiptError`] if the table cannot be written.
pub fn write_orders(mut out: impl io::Write, book: &OrderBook) -> Result<(), ReceiptError> {
    if book.is_empty() {
        return writeln!(out, "No orders yet.").map_err(|_err| ReceiptError::IO);
    }

    let mut builder = Builder::default();

    builder.push_record(["Customer", "Placed", "Order", "Total"]);

    for order in book.iter() {
        builder.push_record([
            order.customer_name().to_string(),
            order.created_at().to_string(),
            slot_line(order.cart()),
            format_money(order.total().to_minor_units()),
        ]);
    }

    write_table(&mut out, builder, &[], 3)
}

fn write_table(
    out: &mut impl io::Write,
    builder: Builder,
    boundary_rows: &[usize],
    money_col: usize,
) -> Result<(), ReceiptError> {
    let mut table = builder.build();
    let mut theme = Theme::from(Style::modern_rounded());
    let separator = HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤'));

    theme.remove_horizontal_lines();
    theme.insert_horizontal_line(1, separator);

    for &row in boundary_rows {
        if row > 1 {
            theme.insert_horizontal_line(row, separator);
        }
    }

    table.with(theme);
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(money_col..money_col + 1), Alignment::right());

    writeln!(out, "{table}").map_err(|_err| ReceiptError::IO)
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rusty_money::{Money, iso::USD};
    use testresult::TestResult;

    use crate::{
        discounts,
        menu::{MenuCategory, MenuItemId},
        pricing::summarize,
    };

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

    fn soft_drink() -> MenuItem {
        MenuItem::new(
            MenuItemId::SoftDrink,
            "Soft drink",
            MenuCategory::Extra,
            Money::from_minor(250, USD),
        )
    }

    fn combo_cart() -> TestResult<Cart> {
        let mut cart = Cart::new();

        cart.add(burger())?;
        cart.add(fries())?;
        cart.add(soft_drink())?;

        Ok(cart)
    }

    #[test]
    fn money_format_matches_the_storefront() {
        assert_eq!(format_money(500), "$ 5,00");
        assert_eq!(format_money(0), "$ 0,00");
        assert_eq!(format_money(5), "$ 0,05");
    }

    #[test]
    fn negative_amounts_keep_the_sign_after_the_space() {
        assert_eq!(format_money(-760), "$ -7,60");
    }

    #[test]
    fn large_amounts_have_no_thousands_separator() {
        assert_eq!(format_money(12_345_679), "$ 123456,79");
    }

    #[test]
    fn rounded_catalog_prices_format_to_the_nearest_cent() -> TestResult {
        // A catalog price of 1.005 rounds half away from zero to 101 minor
        // units before it is ever formatted.
        let minor = discounts::round_minor_units(Decimal::new(1005, 3) * Decimal::ONE_HUNDRED)
            .ok_or("price out of range")?;

        assert_eq!(minor, 101);
        assert_eq!(format_money(minor), "$ 1,01");

        Ok(())
    }

    #[test]
    fn slot_line_marks_empty_slots() -> TestResult {
        let mut cart = Cart::new();
        cart.add(fries())?;

        assert_eq!(slot_line(&cart), "— / Fries / —");
        assert_eq!(slot_line(&combo_cart()?), "Burger / Fries / Soft drink");

        Ok(())
    }

    #[test]
    fn summary_receipt_lists_items_and_discount() -> TestResult {
        let cart = combo_cart()?;
        let summary = summarize(&cart);

        let mut out = Vec::new();
        write_summary(&mut out, &cart, &summary)?;

        let output = String::from_utf8(out)?;
        assert!(output.contains("Burger"));
        assert!(output.contains("$ 9,50"));
        assert!(output.contains("Combo (Sandwich + Fries + Soft drink) (-20%)"));
        assert!(output.contains("-$ 1,90"));
        assert!(output.contains("$ 7,60"));

        Ok(())
    }

    #[test]
    fn empty_cart_receipt_shows_zero_totals() -> TestResult {
        let cart = Cart::new();
        let summary = summarize(&cart);

        let mut out = Vec::new();
        write_summary(&mut out, &cart, &summary)?;

        let output = String::from_utf8(out)?;
        assert!(output.contains("$ 0,00"));
        assert!(output.contains("No discount"));
        assert!(output.contains("-$ 0,00"));

        Ok(())
    }

    #[test]
    fn undiscounted_cart_keeps_the_discount_row() -> TestResult {
        let mut cart = Cart::new();
        cart.add(fries())?;

        let summary = summarize(&cart);

        let mut out = Vec::new();
        write_summary(&mut out, &cart, &summary)?;

        let output = String::from_utf8(out)?;
        assert!(output.contains("No discount"));
        assert!(output.contains("-$ 0,00"));
        assert!(output.contains("$ 2,00"));

        Ok(())
    }

    #[test]
    fn empty_history_prints_placeholder() -> TestResult {
        let book = OrderBook::default();

        let mut out = Vec::new();
        write_orders(&mut out, &book)?;

        assert_eq!(String::from_utf8(out)?, "No orders yet.\n");

        Ok(())
    }

    #[test]
    fn history_lists_orders_most_recent_first() -> TestResult {
        let mut book = OrderBook::default();

        let mut partial = Cart::new();
        partial.add(burger())?;
        partial.add(soft_drink())?;

        book.submit("Bob", &partial)?;
        book.submit("Ada", &combo_cart()?)?;

        let mut out = Vec::new();
        write_orders(&mut out, &book)?;

        let output = String::from_utf8(out)?;
        assert!(output.contains("Burger / — / Soft drink"));
        assert!(output.contains("$ 6,37"));
        assert!(output.contains("Burger / Fries / Soft drink"));
        assert!(output.contains("$ 7,60"));

        let ada = output.find("Ada").ok_or("Ada row missing")?;
        let bob = output.find("Bob").ok_or("Bob row missing")?;
        assert!(ada < bob);

        Ok(())
    }
}
