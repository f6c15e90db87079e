//! Catalog
//!
//! The stand's menu: five fixed items embedded as JSON data, loaded into
//! domain items and served through an async fetch that simulates upstream
//! latency the way the storefront's menu service did.

use std::time::Duration;

use rust_decimal::Decimal;
use rusty_money::{Money, iso};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::{
    discounts,
    menu::{MenuCategory, MenuFilter, MenuItem, MenuItemId},
};

const MENU_DATA: &str = include_str!("../data/menu.json");

/// How long a fetch simulates talking to an upstream by default.
pub const DEFAULT_FETCH_LATENCY: Duration = Duration::from_millis(1000);

/// Errors loading the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The embedded menu data did not parse.
    #[error("menu data is not valid JSON: {0}")]
    Data(#[from] serde_json::Error),

    /// A decimal price did not fit in minor units.
    #[error("price for {0} cannot be expressed in minor units")]
    Price(MenuItemId),
}

/// One row of the menu data file, price in decimal major units.
#[derive(Debug, Deserialize)]
struct MenuRow {
    id: MenuItemId,
    name: String,
    category: MenuCategory,
    price: Decimal,
}

/// The loaded menu.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    /// Parses the embedded menu data.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Data`]: the embedded JSON is malformed.
    /// - [`CatalogError::Price`]: a decimal price cannot be expressed in
    ///   minor units.
    pub fn load() -> Result<Self, CatalogError> {
        let rows: Vec<MenuRow> = serde_json::from_str(MENU_DATA)?;

        let items = rows
            .into_iter()
            .map(|row| {
                let minor = row
                    .price
                    .checked_mul(Decimal::ONE_HUNDRED)
                    .and_then(discounts::round_minor_units)
                    .ok_or(CatalogError::Price(row.id))?;

                Ok(MenuItem::new(
                    row.id,
                    row.name,
                    row.category,
                    Money::from_minor(minor, iso::USD),
                ))
            })
            .collect::<Result<Vec<_>, CatalogError>>()?;

        Ok(Self { items })
    }

    /// Every item, in menu order.
    #[must_use]
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Looks up an item by id.
    #[must_use]
    pub fn get(&self, id: MenuItemId) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Iterates over the items passing a display filter.
    pub fn filtered(&self, filter: MenuFilter) -> impl Iterator<Item = &MenuItem> {
        self.items.iter().filter(move |item| filter.matches(item))
    }

    /// The number of items on the menu.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the menu is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Serves the menu the way the storefront's service did: the full catalog,
/// a fresh copy per fetch, after a fixed simulated delay.
#[derive(Debug, Clone)]
pub struct CatalogService {
    latency: Duration,
}

impl Default for CatalogService {
    fn default() -> Self {
        Self {
            latency: DEFAULT_FETCH_LATENCY,
        }
    }
}

impl CatalogService {
    /// Creates a service with the default simulated latency.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service with a custom simulated latency.
    #[must_use]
    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }

    /// The configured simulated latency.
    #[must_use]
    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Fetches a fresh copy of the menu.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the embedded menu data fails to load.
    #[tracing::instrument(name = "catalog.fetch", skip(self))]
    pub async fn fetch(&self) -> Result<Catalog, CatalogError> {
        tokio::time::sleep(self.latency).await;

        let catalog = Catalog::load()?;
        debug!(items = catalog.len(), "menu fetched");

        Ok(catalog)
    }
}
