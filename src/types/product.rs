//! Product entity: one catalog item.
//!
//! ## Copies Across Indices
//!
//! The identity index holds the authoritative copy of every product; the
//! ordered index and both sales heaps hold independent `Clone`d copies.
//! Whenever `quantity` or `sales_count` changes on the authoritative copy,
//! the orchestrator rewrites the stale copies in the same logical call.
//! There is no shared-reference aliasing between indices.
//!
//! ## Money
//!
//! `price` is a [`Decimal`] — monetary values never touch floating point.
//! No index orders by price; it is carried data only.

use rust_decimal::Decimal;

/// A catalog item.
///
/// `id` is the primary key of all four indices and is immutable once the
/// product is created. `sales_count` is the ranking key of both sales heaps.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Unique product identifier (immutable after creation)
    pub id: i64,

    /// Display name
    pub name: String,

    /// Category label
    pub category: String,

    /// On-hand stock; never negative after a well-formed operation
    pub quantity: u32,

    /// Unit price; non-negative, not used by any index ordering
    pub price: Decimal,

    /// Cumulative units sold; ranking key for both sales heaps
    pub sales_count: u32,
}

impl Product {
    /// Create a product with no sales history.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: u32,
        price: Decimal,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            quantity,
            price,
            sales_count: 0,
        }
    }

    /// Create a product with an existing sales count (e.g. seeded history).
    pub fn with_sales(
        id: i64,
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: u32,
        price: Decimal,
        sales_count: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            quantity,
            price,
            sales_count,
        }
    }

    /// Check whether any stock is on hand.
    #[inline]
    pub fn in_stock(&self) -> bool {
        self.quantity > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_new() {
        let p = Product::new(1, "Widget", "Tools", 25, Decimal::new(1999, 2));

        assert_eq!(p.id, 1);
        assert_eq!(p.name, "Widget");
        assert_eq!(p.category, "Tools");
        assert_eq!(p.quantity, 25);
        assert_eq!(p.price, Decimal::new(1999, 2));
        assert_eq!(p.sales_count, 0);
        assert!(p.in_stock());
    }

    #[test]
    fn test_product_with_sales() {
        let p = Product::with_sales(2, "Gadget", "Tools", 0, Decimal::new(500, 2), 80);

        assert_eq!(p.sales_count, 80);
        assert!(!p.in_stock());
    }

    #[test]
    fn test_product_copies_are_independent() {
        let original = Product::new(3, "Gizmo", "Tools", 10, Decimal::ONE);
        let mut copy = original.clone();

        copy.quantity = 4;
        copy.sales_count = 6;

        // The clone diverged; the original is untouched.
        assert_eq!(original.quantity, 10);
        assert_eq!(original.sales_count, 0);
        assert_ne!(original, copy);
    }
}
