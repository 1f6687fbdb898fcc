//! Read-only product catalog.
//!
//! The catalog is the source of truth for product listings and lookups. It
//! is a static in-memory table: there is no persistence and no mutation
//! surface, only `list` and `get`.

use bazaar_core::{Price, Product, ProductId};

/// The in-memory product table.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from an explicit product list.
    #[must_use]
    pub const fn with_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The demo catalog shipped with the storefront.
    #[must_use]
    pub fn demo() -> Self {
        Self::with_products(vec![
            Product::new(
                "1",
                "Laptop",
                Price::from_cents(1_200_00),
                "High-performance laptop",
            ),
            Product::new(
                "2",
                "Phone",
                Price::from_cents(800_00),
                "Smartphone with excellent features",
            ),
            Product::new(
                "3",
                "Headphones",
                Price::from_cents(150_00),
                "Noise-cancelling headphones",
            ),
        ])
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == *id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_contents() {
        let catalog = Catalog::demo();
        assert_eq!(catalog.list().len(), 3);

        let phone = catalog.get(&ProductId::new("2")).unwrap();
        assert_eq!(phone.name, "Phone");
        assert_eq!(phone.price, Price::from_cents(800_00));
        assert_eq!(phone.description, "Smartphone with excellent features");
    }

    #[test]
    fn test_get_unknown_id() {
        let catalog = Catalog::demo();
        assert!(catalog.get(&ProductId::new("99")).is_none());
    }
}
