//! Utils

use clap::Parser;

use crate::menu::MenuItemId;

/// Arguments for the order demo
#[derive(Debug, Parser)]
pub struct DemoOrderArgs {
    /// Customer name for the submitted order
    #[clap(short, long, default_value = "Walk-in")]
    pub customer: String,

    /// Comma-separated item ids to add to the cart
    #[clap(short, long, default_value = "burger,fries,soft_drink")]
    pub items: String,

    /// Menu fetch latency in milliseconds
    #[clap(short, long)]
    pub latency: Option<u64>,
}

/// Resolves a wire item id like `soft_drink` to a [`MenuItemId`].
///
/// # Errors
///
/// Returns a message naming the unknown id.
pub fn parse_item_id(raw: &str) -> Result<MenuItemId, String> {
    match raw.trim() {
        "burger" => Ok(MenuItemId::Burger),
        "egg" => Ok(MenuItemId::Egg),
        "bacon" => Ok(MenuItemId::Bacon),
        "fries" => Ok(MenuItemId::Fries),
        "soft_drink" => Ok(MenuItemId::SoftDrink),
        other => Err(format!("unknown menu item id: {other}")),
    }
}
