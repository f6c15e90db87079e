//! Menu

use std::fmt;

use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Serialize};

/// The closed set of products the stand sells.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuItemId {
    /// The plain burger.
    Burger,

    /// The egg burger.
    Egg,

    /// The bacon burger.
    Bacon,

    /// A serving of fries.
    Fries,

    /// A soft drink.
    SoftDrink,
}

impl MenuItemId {
    /// The stable identifier string used on the wire and in the catalog data.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            MenuItemId::Burger => "burger",
            MenuItemId::Egg => "egg",
            MenuItemId::Bacon => "bacon",
            MenuItemId::Fries => "fries",
            MenuItemId::SoftDrink => "soft_drink",
        }
    }
}

impl fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two catalog categories.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuCategory {
    /// Sandwiches (burgers).
    Sandwich,

    /// Everything else: fries and drinks.
    Extra,
}

/// A purchasable product from the menu.
///
/// Catalog items are created when the menu loads and never mutated after
/// that; carts and summaries only ever read them.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuItem {
    id: MenuItemId,
    name: String,
    category: MenuCategory,
    price: Money<'static, Currency>,
}

impl MenuItem {
    /// Creates a new menu item.
    #[must_use]
    pub fn new(
        id: MenuItemId,
        name: impl Into<String>,
        category: MenuCategory,
        price: Money<'static, Currency>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            price,
        }
    }

    /// Returns the id of the item.
    #[must_use]
    pub fn id(&self) -> MenuItemId {
        self.id
    }

    /// Returns the display name of the item.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the category of the item.
    #[must_use]
    pub fn category(&self) -> MenuCategory {
        self.category
    }

    /// Returns the price of the item.
    #[must_use]
    pub fn price(&self) -> &Money<'static, Currency> {
        &self.price
    }
}

/// Menu display filters.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum MenuFilter {
    /// Show every item.
    #[default]
    All,

    /// Only sandwiches.
    Sandwich,

    /// Only extras.
    Extra,
}

impl MenuFilter {
    /// Whether an item passes this filter.
    #[must_use]
    pub fn matches(self, item: &MenuItem) -> bool {
        match self {
            MenuFilter::All => true,
            MenuFilter::Sandwich => item.category() == MenuCategory::Sandwich,
            MenuFilter::Extra => item.category() == MenuCategory::Extra,
        }
    }
}
