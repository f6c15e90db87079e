//! Griddle prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError, Slot},
    catalog::{Catalog, CatalogError, CatalogService},
    discounts::{DiscountError, DiscountRule, classify},
    menu::{MenuCategory, MenuFilter, MenuItem, MenuItemId},
    orders::{OrderBook, OrderError, SubmittedOrder},
    pricing::{OrderSummary, summarize},
    receipt::{ReceiptError, format_money, slot_line, write_orders, write_summary},
    records::{CartRecord, MenuItemRecord, OrderRecord, RecordError},
    session::{CART_KEY, ORDERS_KEY, SessionStore, StoreError},
};
