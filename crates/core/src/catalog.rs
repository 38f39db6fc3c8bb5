//! Static product catalog.
//!
//! The catalog is fixed for the life of the process: prices and stock
//! levels never change while the till is running. Items are grouped by
//! category and keep their declaration order for display.

use rust_decimal::Decimal;

use crate::types::Money;

/// A product that can be sold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    /// Unique name across the whole catalog.
    pub name: String,
    /// Unit price in rupees.
    pub price: Money,
    /// Units available for sale.
    pub stock: u32,
    /// Name of the owning category.
    pub category: String,
}

/// A named group of catalog items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub items: Vec<CatalogItem>,
}

/// Read-only product list.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    categories: Vec<Category>,
}

/// Built-in stock list: category, then (name, price, stock).
const BUILTIN: &[(&str, &[(&str, i64, u32)])] = &[
    (
        "Electronics",
        &[
            ("Laptop", 45_000, 10),
            ("Smartphone", 25_000, 25),
            ("Tablet", 20_000, 15),
            ("Smartwatch", 5_500, 30),
            ("LED TV", 38_000, 5),
        ],
    ),
    (
        "Accessories",
        &[
            ("Mouse", 500, 50),
            ("Keyboard", 800, 40),
            ("Headphones", 1_500, 35),
            ("Power Bank", 1_200, 60),
            ("Bluetooth Earbuds", 1_800, 45),
        ],
    ),
    (
        "Home Appliances",
        &[
            ("Washing Machine", 32_000, 8),
            ("Microwave Oven", 11_000, 12),
            ("Ceiling Fan", 2_600, 50),
        ],
    ),
    (
        "Stationery",
        &[
            ("Notebook", 80, 200),
            ("Pen Pack", 50, 300),
            ("Calculator", 300, 75),
        ],
    ),
];

impl Catalog {
    /// The shop's built-in product list.
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::default();
        for (category, items) in BUILTIN {
            for (name, price, stock) in *items {
                catalog.insert(category, name, Decimal::from(*price), *stock);
            }
        }
        catalog
    }

    /// Add an item, creating its category on first use.
    ///
    /// An item whose name already exists anywhere in the catalog replaces
    /// nothing and is ignored, keeping names unique.
    pub fn insert(&mut self, category: &str, name: &str, price: Money, stock: u32) {
        if self.lookup(name).is_some() {
            return;
        }

        let item = CatalogItem {
            name: name.to_string(),
            price,
            stock,
            category: category.to_string(),
        };

        match self.categories.iter_mut().find(|c| c.name == category) {
            Some(existing) => existing.items.push(item),
            None => self.categories.push(Category {
                name: category.to_string(),
                items: vec![item],
            }),
        }
    }

    /// Find an item by exact name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&CatalogItem> {
        self.categories
            .iter()
            .flat_map(|category| category.items.iter())
            .find(|item| item.name == name)
    }

    /// Categories in declaration order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Total number of distinct items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }

    /// True when the catalog holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_shape() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 16);
        let names: Vec<&str> = catalog.categories().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            ["Electronics", "Accessories", "Home Appliances", "Stationery"]
        );
    }

    #[test]
    fn test_lookup_found() {
        let catalog = Catalog::builtin();
        let mouse = catalog.lookup("Mouse");
        assert!(mouse.is_some());
        let mouse = mouse.map(|m| (m.price, m.stock, m.category.as_str()));
        assert_eq!(mouse, Some((Decimal::from(500), 50, "Accessories")));
    }

    #[test]
    fn test_lookup_is_exact() {
        let catalog = Catalog::builtin();
        assert!(catalog.lookup("mouse").is_none());
        assert!(catalog.lookup("Toaster").is_none());
        assert!(catalog.lookup("").is_none());
    }

    #[test]
    fn test_insert_keeps_names_unique() {
        let mut catalog = Catalog::default();
        catalog.insert("Snacks", "Chips", Decimal::from(20), 10);
        catalog.insert("Drinks", "Chips", Decimal::from(99), 1);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.categories().len(), 1);
        assert_eq!(
            catalog.lookup("Chips").map(|i| i.price),
            Some(Decimal::from(20))
        );
    }
}
