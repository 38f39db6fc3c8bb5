//! The cart store.
//!
//! A cart is an ordered list of lines, one per distinct catalog item. Every
//! mutation is validated against the catalog's stock, so the quantity held
//! for an item never exceeds what the shop has.
//!
//! # Line lifecycle
//!
//! ```text
//! add (new item) ──► created ──► add (same item) / set_quantity ──► updated
//!                        │                                            │
//!                        └──── remove / set_quantity(<= 0) / clear ◄──┘
//! ```
//!
//! Line ids come from a counter kept next to the lines. Removing a line
//! never frees its id for reuse; only [`CartStore::clear`] resets it.

use rust_decimal::Decimal;

use crate::catalog::Catalog;
use crate::error::CartError;
use crate::types::{LineId, Money};

/// One entry in the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub id: LineId,
    /// Catalog item name.
    pub name: String,
    /// Unit price captured when the line was created.
    pub price: Money,
    /// Always greater than zero.
    pub quantity: u32,
    pub category: String,
}

impl CartLine {
    /// Price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.price * Decimal::from(self.quantity)
    }
}

/// What an [`CartStore::add`] call did to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new line was appended.
    Added { id: LineId, quantity: u32 },
    /// An existing line for the same item was topped up; `quantity` is the
    /// line's new total.
    Merged { id: LineId, quantity: u32 },
}

/// What a [`CartStore::set_quantity`] call did to the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuantityChange {
    /// The line now holds `quantity` units of `name`.
    Updated { name: String, quantity: u32 },
    /// The quantity was zero or negative, so the line was dropped.
    Removed(CartLine),
    /// No line had the given id.
    Unchanged,
}

/// Parse a quantity submitted by the clerk.
///
/// Surrounding whitespace is ignored and a leading sign is accepted, so
/// `" -2 "` parses to `-2`. Whether the value must be positive depends on
/// the operation it is passed to.
///
/// # Errors
///
/// Returns [`CartError::InvalidQuantity`] if the input is not an integer.
pub fn parse_quantity(raw: &str) -> Result<i64, CartError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| CartError::InvalidQuantity)
}

/// In-memory cart.
#[derive(Debug, Clone)]
pub struct CartStore {
    lines: Vec<CartLine>,
    next_id: u32,
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CartStore {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lines: Vec::new(),
            next_id: 1,
        }
    }

    /// Add `quantity` units of the named catalog item.
    ///
    /// If the cart already has a line for the item, that line is topped up
    /// in place and keeps its id and position.
    ///
    /// # Errors
    ///
    /// - [`CartError::ItemNotFound`] if the name is not in the catalog
    /// - [`CartError::InvalidQuantity`] if `quantity` is zero or negative
    /// - [`CartError::InsufficientStock`] if the cart would then hold more
    ///   than the item's stock; `available` is the stock minus what the
    ///   cart already holds
    ///
    /// The cart is unchanged on error.
    pub fn add(
        &mut self,
        catalog: &Catalog,
        name: &str,
        quantity: i64,
    ) -> Result<AddOutcome, CartError> {
        let item = catalog.lookup(name).ok_or_else(|| CartError::ItemNotFound {
            name: name.to_string(),
        })?;

        if quantity <= 0 {
            return Err(CartError::InvalidQuantity);
        }
        let committed = self.committed_quantity(&item.name);
        let available = item.stock.saturating_sub(committed);
        let requested =
            within_stock(quantity, available).ok_or_else(|| CartError::InsufficientStock {
                item: item.name.clone(),
                requested: quantity,
                available,
            })?;

        if let Some(line) = self.lines.iter_mut().find(|l| l.name == item.name) {
            line.quantity += requested;
            return Ok(AddOutcome::Merged {
                id: line.id,
                quantity: line.quantity,
            });
        }

        let id = LineId::new(self.next_id);
        self.next_id += 1;
        self.lines.push(CartLine {
            id,
            name: item.name.clone(),
            price: item.price,
            quantity: requested,
            category: item.category.clone(),
        });

        Ok(AddOutcome::Added {
            id,
            quantity: requested,
        })
    }

    /// Replace the quantity on a line.
    ///
    /// A quantity of zero or less removes the line. An unknown id leaves the
    /// cart untouched and reports [`QuantityChange::Unchanged`].
    ///
    /// The new quantity is checked against the item's full stock: the cart
    /// holds one line per item, so no other line competes for it.
    ///
    /// # Errors
    ///
    /// - [`CartError::InsufficientStock`] if `quantity` exceeds the stock
    /// - [`CartError::ItemNotFound`] if the line's item has left the catalog
    pub fn set_quantity(
        &mut self,
        catalog: &Catalog,
        id: LineId,
        quantity: i64,
    ) -> Result<QuantityChange, CartError> {
        if quantity <= 0 {
            return Ok(self
                .remove(id)
                .map_or(QuantityChange::Unchanged, QuantityChange::Removed));
        }

        let Some(line) = self.lines.iter_mut().find(|l| l.id == id) else {
            return Ok(QuantityChange::Unchanged);
        };

        let stock = catalog
            .lookup(&line.name)
            .map(|item| item.stock)
            .ok_or_else(|| CartError::ItemNotFound {
                name: line.name.clone(),
            })?;

        let requested =
            within_stock(quantity, stock).ok_or_else(|| CartError::InsufficientStock {
                item: line.name.clone(),
                requested: quantity,
                available: stock,
            })?;

        line.quantity = requested;
        Ok(QuantityChange::Updated {
            name: line.name.clone(),
            quantity: requested,
        })
    }

    /// Remove the line with the given id, returning it if it existed.
    pub fn remove(&mut self, id: LineId) -> Option<CartLine> {
        let index = self.lines.iter().position(|l| l.id == id)?;
        Some(self.lines.remove(index))
    }

    /// Empty the cart and restart line ids from 1.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.next_id = 1;
    }

    /// Sum of price times quantity over all lines.
    #[must_use]
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Total units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn committed_quantity(&self, name: &str) -> u32 {
        self.lines
            .iter()
            .filter(|l| l.name == name)
            .map(|l| l.quantity)
            .sum()
    }
}

/// `quantity` as a unit count if it fits in `available`.
fn within_stock(quantity: i64, available: u32) -> Option<u32> {
    u32::try_from(quantity).ok().filter(|q| *q <= available)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn line(cart: &CartStore, id: u32) -> &CartLine {
        cart.lines()
            .iter()
            .find(|l| l.id == LineId::new(id))
            .unwrap()
    }

    fn catalog() -> Catalog {
        Catalog::builtin()
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3"), Ok(3));
        assert_eq!(parse_quantity(" 12 "), Ok(12));
        assert_eq!(parse_quantity("-2"), Ok(-2));
        assert_eq!(parse_quantity("+4"), Ok(4));
        assert_eq!(parse_quantity(""), Err(CartError::InvalidQuantity));
        assert_eq!(parse_quantity("two"), Err(CartError::InvalidQuantity));
        assert_eq!(parse_quantity("1.5"), Err(CartError::InvalidQuantity));
    }

    #[test]
    fn test_add_appends_new_line() {
        let catalog = catalog();
        let mut cart = CartStore::new();

        let outcome = cart.add(&catalog, "Laptop", 2).unwrap();
        assert_eq!(
            outcome,
            AddOutcome::Added {
                id: LineId::new(1),
                quantity: 2
            }
        );

        let laptop = line(&cart, 1);
        assert_eq!(laptop.name, "Laptop");
        assert_eq!(laptop.price, Decimal::from(45_000));
        assert_eq!(laptop.category, "Electronics");
        assert_eq!(cart.subtotal(), Decimal::from(90_000));
    }

    #[test]
    fn test_add_same_item_merges_into_one_line() {
        let catalog = catalog();
        let mut cart = CartStore::new();
        cart.add(&catalog, "Keyboard", 1).unwrap();
        cart.add(&catalog, "Mouse", 2).unwrap();

        let outcome = cart.add(&catalog, "Mouse", 3).unwrap();
        assert_eq!(
            outcome,
            AddOutcome::Merged {
                id: LineId::new(2),
                quantity: 5
            }
        );
        assert_eq!(cart.len(), 2);
        let names: Vec<&str> = cart.lines().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["Keyboard", "Mouse"]);
        assert_eq!(line(&cart, 2).quantity, 5);
    }

    #[test]
    fn test_add_increases_subtotal_by_price_times_quantity() {
        let catalog = catalog();
        let mut cart = CartStore::new();
        cart.add(&catalog, "Notebook", 10).unwrap();
        let before = cart.subtotal();
        cart.add(&catalog, "Calculator", 3).unwrap();
        assert_eq!(cart.subtotal() - before, Decimal::from(900));
    }

    #[test]
    fn test_add_unknown_item() {
        let mut cart = CartStore::new();
        let err = cart.add(&catalog(), "Toaster", 1).unwrap_err();
        assert_eq!(
            err,
            CartError::ItemNotFound {
                name: "Toaster".to_string()
            }
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_rejects_non_positive_quantity() {
        let mut cart = CartStore::new();
        assert_eq!(
            cart.add(&catalog(), "Mouse", 0),
            Err(CartError::InvalidQuantity)
        );
        assert_eq!(
            cart.add(&catalog(), "Mouse", -3),
            Err(CartError::InvalidQuantity)
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_reports_remaining_capacity() {
        let catalog = catalog();
        let mut cart = CartStore::new();
        cart.add(&catalog, "LED TV", 3).unwrap();

        let err = cart.add(&catalog, "LED TV", 3).unwrap_err();
        assert_eq!(
            err,
            CartError::InsufficientStock {
                item: "LED TV".to_string(),
                requested: 3,
                available: 2,
            }
        );
        assert_eq!(line(&cart, 1).quantity, 3);
        assert_eq!(cart.subtotal(), Decimal::from(114_000));
    }

    #[test]
    fn test_add_up_to_exact_stock() {
        let catalog = catalog();
        let mut cart = CartStore::new();
        cart.add(&catalog, "LED TV", 4).unwrap();
        cart.add(&catalog, "LED TV", 1).unwrap();
        assert_eq!(cart.item_count(), 5);
        assert!(cart.add(&catalog, "LED TV", 1).is_err());
    }

    #[test]
    fn test_add_huge_quantity_is_insufficient_stock() {
        let mut cart = CartStore::new();
        let err = cart.add(&catalog(), "Pen Pack", i64::MAX).unwrap_err();
        assert_eq!(
            err,
            CartError::InsufficientStock {
                item: "Pen Pack".to_string(),
                requested: i64::MAX,
                available: 300,
            }
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_reports_typed_quantity() {
        let catalog = catalog();
        let mut cart = CartStore::new();
        cart.add(&catalog, "Mouse", 2).unwrap();

        let err = cart
            .set_quantity(&catalog, LineId::new(1), 99_999_999_999)
            .unwrap_err();
        assert_eq!(
            err,
            CartError::InsufficientStock {
                item: "Mouse".to_string(),
                requested: 99_999_999_999,
                available: 50,
            }
        );
        assert_eq!(line(&cart, 1).quantity, 2);
    }

    #[test]
    fn test_set_quantity_updates_in_place() {
        let catalog = catalog();
        let mut cart = CartStore::new();
        cart.add(&catalog, "Tablet", 1).unwrap();
        cart.add(&catalog, "Pen Pack", 1).unwrap();

        let change = cart.set_quantity(&catalog, LineId::new(1), 4).unwrap();
        assert_eq!(
            change,
            QuantityChange::Updated {
                name: "Tablet".to_string(),
                quantity: 4
            }
        );
        assert_eq!(cart.lines().first().unwrap().quantity, 4);
    }

    #[test]
    fn test_set_quantity_checks_full_stock() {
        let catalog = catalog();
        let mut cart = CartStore::new();
        cart.add(&catalog, "Washing Machine", 2).unwrap();

        assert_eq!(
            cart.set_quantity(&catalog, LineId::new(1), 8).unwrap(),
            QuantityChange::Updated {
                name: "Washing Machine".to_string(),
                quantity: 8
            }
        );
        let err = cart.set_quantity(&catalog, LineId::new(1), 9).unwrap_err();
        assert_eq!(
            err,
            CartError::InsufficientStock {
                item: "Washing Machine".to_string(),
                requested: 9,
                available: 8,
            }
        );
        assert_eq!(line(&cart, 1).quantity, 8);
    }

    #[test]
    fn test_set_quantity_zero_or_negative_removes() {
        let catalog = catalog();
        for quantity in [0, -1, -50] {
            let mut cart = CartStore::new();
            cart.add(&catalog, "Mouse", 2).unwrap();
            let mut removed = cart.clone();
            removed.remove(LineId::new(1));

            let change = cart.set_quantity(&catalog, LineId::new(1), quantity).unwrap();
            assert!(matches!(change, QuantityChange::Removed(ref line) if line.name == "Mouse"));
            assert_eq!(cart.lines(), removed.lines());
        }
    }

    #[test]
    fn test_set_quantity_unknown_id_is_noop() {
        let catalog = catalog();
        let mut cart = CartStore::new();
        cart.add(&catalog, "Mouse", 2).unwrap();

        assert_eq!(
            cart.set_quantity(&catalog, LineId::new(9), 3).unwrap(),
            QuantityChange::Unchanged
        );
        assert_eq!(
            cart.set_quantity(&catalog, LineId::new(9), 0).unwrap(),
            QuantityChange::Unchanged
        );
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_remove() {
        let catalog = catalog();
        let mut cart = CartStore::new();
        cart.add(&catalog, "Mouse", 2).unwrap();
        cart.add(&catalog, "Keyboard", 1).unwrap();

        let removed = cart.remove(LineId::new(1)).unwrap();
        assert_eq!(removed.name, "Mouse");
        assert_eq!(cart.len(), 1);

        let snapshot = cart.lines().to_vec();
        assert!(cart.remove(LineId::new(1)).is_none());
        assert!(cart.remove(LineId::new(42)).is_none());
        assert_eq!(cart.lines(), snapshot.as_slice());
    }

    #[test]
    fn test_ids_are_not_reused_after_removal() {
        let catalog = catalog();
        let mut cart = CartStore::new();
        cart.add(&catalog, "Mouse", 1).unwrap();
        cart.add(&catalog, "Keyboard", 1).unwrap();
        cart.remove(LineId::new(1));

        let outcome = cart.add(&catalog, "Headphones", 1).unwrap();
        assert_eq!(
            outcome,
            AddOutcome::Added {
                id: LineId::new(3),
                quantity: 1
            }
        );
        let ids: Vec<u32> = cart.lines().iter().map(|l| l.id.as_u32()).collect();
        assert_eq!(ids, [2, 3]);
    }

    #[test]
    fn test_clear_empties_and_resets_ids() {
        let catalog = catalog();
        let mut cart = CartStore::new();
        cart.add(&catalog, "Mouse", 1).unwrap();
        cart.add(&catalog, "Keyboard", 1).unwrap();

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), Decimal::ZERO);

        let outcome = cart.add(&catalog, "Notebook", 1).unwrap();
        assert!(matches!(outcome, AddOutcome::Added { id, .. } if id == LineId::new(1)));
    }

    #[test]
    fn test_subtotal_is_stable_without_mutation() {
        let catalog = catalog();
        let mut cart = CartStore::new();
        cart.add(&catalog, "Smartwatch", 3).unwrap();
        cart.add(&catalog, "Pen Pack", 7).unwrap();
        assert_eq!(cart.subtotal(), cart.subtotal());
        assert_eq!(cart.subtotal(), Decimal::from(16_850));
    }
}
