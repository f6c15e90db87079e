//! Griddle
//!
//! Griddle is an order-taking engine for a burger stand: a fixed menu catalog, a three-slot cart, tiered combo discounts, and an order history, written in Rust.

pub mod cart;
pub mod catalog;
pub mod discounts;
pub mod menu;
pub mod orders;
pub mod prelude;
pub mod pricing;
pub mod receipt;
pub mod records;
pub mod session;
pub mod utils;
