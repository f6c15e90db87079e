//! Cart

use thiserror::Error;

use crate::menu::{MenuCategory, MenuItem, MenuItemId};

/// The three positions an order can fill.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Slot {
    /// The sandwich position.
    Sandwich,

    /// The fries position.
    Side,

    /// The soft drink position.
    Drink,
}

impl Slot {
    /// The slot an item belongs in.
    ///
    /// Sandwich-category items go to the sandwich slot, fries to the side
    /// slot, and every other extra to the drink slot.
    #[must_use]
    pub fn for_item(item: &MenuItem) -> Slot {
        if item.category() == MenuCategory::Sandwich {
            Slot::Sandwich
        } else if item.id() == MenuItemId::Fries {
            Slot::Side
        } else {
            Slot::Drink
        }
    }

    /// User-facing message shown when this slot is already filled.
    #[must_use]
    pub fn limit_message(self) -> &'static str {
        match self {
            Slot::Sandwich => "You can only add 1 sandwich per order.",
            Slot::Side => "You can only add 1 serving of fries per order.",
            Slot::Drink => "You can only add 1 soft drink per order.",
        }
    }
}

/// Errors rejecting an addition to the cart.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// The same item is already somewhere in the cart.
    #[error("You can't add \"{0}\" twice. Only 1 is allowed.")]
    Duplicate(String),

    /// The slot the item maps to already holds an item.
    #[error("{}", .0.limit_message())]
    SlotTaken(Slot),
}

/// The in-progress selection for one order.
///
/// Each slot holds at most one item, and [`Slot::for_item`] decides which
/// slot an item may occupy. The pricing engine trusts this placement and
/// never re-checks it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    sandwich: Option<MenuItem>,
    side: Option<MenuItem>,
    drink: Option<MenuItem>,
}

impl Cart {
    /// Creates an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an item to the slot it belongs in.
    ///
    /// The duplicate check runs before the occupancy check, so re-adding
    /// the current occupant of a slot reports the duplicate message rather
    /// than the slot limit.
    ///
    /// # Errors
    ///
    /// - [`CartError::Duplicate`]: the same item id is already in the cart.
    /// - [`CartError::SlotTaken`]: the target slot already holds an item.
    pub fn add(&mut self, item: MenuItem) -> Result<(), CartError> {
        if self.contains(item.id()) {
            return Err(CartError::Duplicate(item.name().to_owned()));
        }

        let slot = Slot::for_item(&item);
        let entry = self.slot_mut(slot);

        if entry.is_some() {
            return Err(CartError::SlotTaken(slot));
        }

        *entry = Some(item);

        Ok(())
    }

    /// Empties one slot. Removing from an empty slot is a no-op.
    pub fn remove(&mut self, slot: Slot) {
        *self.slot_mut(slot) = None;
    }

    /// Empties every slot.
    pub fn clear(&mut self) {
        self.sandwich = None;
        self.side = None;
        self.drink = None;
    }

    /// Whether any slot holds the given item id.
    #[must_use]
    pub fn contains(&self, id: MenuItemId) -> bool {
        self.iter().any(|item| item.id() == id)
    }

    /// Returns the item in the given slot.
    #[must_use]
    pub fn get(&self, slot: Slot) -> Option<&MenuItem> {
        match slot {
            Slot::Sandwich => self.sandwich.as_ref(),
            Slot::Side => self.side.as_ref(),
            Slot::Drink => self.drink.as_ref(),
        }
    }

    /// Returns the item in the sandwich slot.
    #[must_use]
    pub fn sandwich(&self) -> Option<&MenuItem> {
        self.get(Slot::Sandwich)
    }

    /// Returns the item in the side slot.
    #[must_use]
    pub fn side(&self) -> Option<&MenuItem> {
        self.get(Slot::Side)
    }

    /// Returns the item in the drink slot.
    #[must_use]
    pub fn drink(&self) -> Option<&MenuItem> {
        self.get(Slot::Drink)
    }

    /// Iterates over the occupied slots in fixed order, sandwich then side
    /// then drink.
    pub fn iter(&self) -> impl Iterator<Item = &MenuItem> {
        [&self.sandwich, &self.side, &self.drink]
            .into_iter()
            .filter_map(Option::as_ref)
    }

    /// The number of occupied slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Whether every slot is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sandwich.is_none() && self.side.is_none() && self.drink.is_none()
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut Option<MenuItem> {
        match slot {
            Slot::Sandwich => &mut self.sandwich,
            Slot::Side => &mut self.side,
            Slot::Drink => &mut self.drink,
        }
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso::USD};
    use testresult::TestResult;

    use super::*;

    fn burger() -> MenuItem {
        MenuItem::new(
            MenuItemId::Burger,
            "Burger",
            MenuCategory::Sandwich,
            Money::from_minor(500, USD),
        )
    }

    fn egg() -> MenuItem {
        MenuItem::new(
            MenuItemId::Egg,
            "Egg",
            MenuCategory::Sandwich,
            Money::from_minor(450, USD),
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

    #[test]
    fn items_land_in_their_slots() -> TestResult {
        let mut cart = Cart::new();

        cart.add(burger())?;
        cart.add(fries())?;
        cart.add(soft_drink())?;

        assert_eq!(cart.sandwich().map(MenuItem::id), Some(MenuItemId::Burger));
        assert_eq!(cart.side().map(MenuItem::id), Some(MenuItemId::Fries));
        assert_eq!(cart.drink().map(MenuItem::id), Some(MenuItemId::SoftDrink));
        assert_eq!(cart.len(), 3);

        Ok(())
    }

    #[test]
    fn get_reads_a_single_slot() -> TestResult {
        let mut cart = Cart::new();
        cart.add(fries())?;

        assert_eq!(cart.get(Slot::Side).map(MenuItem::id), Some(MenuItemId::Fries));
        assert!(cart.get(Slot::Sandwich).is_none());
        assert!(cart.get(Slot::Drink).is_none());

        Ok(())
    }

    #[test]
    fn duplicate_item_is_rejected_with_its_name() -> TestResult {
        let mut cart = Cart::new();
        cart.add(burger())?;

        let err = cart.add(burger()).unwrap_err();

        assert_eq!(err, CartError::Duplicate("Burger".to_owned()));
        assert_eq!(
            err.to_string(),
            "You can't add \"Burger\" twice. Only 1 is allowed."
        );

        Ok(())
    }

    #[test]
    fn occupied_sandwich_slot_rejects_a_second_sandwich() -> TestResult {
        let mut cart = Cart::new();
        cart.add(burger())?;

        let err = cart.add(egg()).unwrap_err();

        assert_eq!(err, CartError::SlotTaken(Slot::Sandwich));
        assert_eq!(err.to_string(), "You can only add 1 sandwich per order.");

        Ok(())
    }

    #[test]
    fn slot_limit_messages_match_the_storefront() {
        assert_eq!(
            CartError::SlotTaken(Slot::Side).to_string(),
            "You can only add 1 serving of fries per order."
        );
        assert_eq!(
            CartError::SlotTaken(Slot::Drink).to_string(),
            "You can only add 1 soft drink per order."
        );
    }

    #[test]
    fn duplicate_check_runs_before_the_slot_check() -> TestResult {
        let mut cart = Cart::new();
        cart.add(burger())?;

        // The burger already occupies the sandwich slot; re-adding it must
        // report the duplicate, not the slot limit.
        assert!(matches!(
            cart.add(burger()),
            Err(CartError::Duplicate(name)) if name == "Burger"
        ));

        Ok(())
    }

    #[test]
    fn extras_split_between_side_and_drink_slots() -> TestResult {
        let mut cart = Cart::new();

        cart.add(fries())?;
        cart.add(soft_drink())?;

        assert_eq!(Slot::for_item(&fries()), Slot::Side);
        assert_eq!(Slot::for_item(&soft_drink()), Slot::Drink);
        assert!(cart.sandwich().is_none());
        assert_eq!(cart.len(), 2);

        Ok(())
    }

    #[test]
    fn remove_and_clear_empty_slots() -> TestResult {
        let mut cart = Cart::new();
        cart.add(burger())?;
        cart.add(fries())?;

        cart.remove(Slot::Side);
        assert!(cart.side().is_none());
        assert_eq!(cart.len(), 1);

        // Removing from an already empty slot changes nothing.
        cart.remove(Slot::Drink);
        assert_eq!(cart.len(), 1);

        cart.clear();
        assert!(cart.is_empty());

        Ok(())
    }

    #[test]
    fn iter_yields_fixed_slot_order() -> TestResult {
        let mut cart = Cart::new();

        // Added out of slot order on purpose.
        cart.add(soft_drink())?;
        cart.add(burger())?;

        let ids: Vec<MenuItemId> = cart.iter().map(MenuItem::id).collect();
        assert_eq!(ids, vec![MenuItemId::Burger, MenuItemId::SoftDrink]);

        Ok(())
    }
}
