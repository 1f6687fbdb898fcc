//! Cart line-item collection with quantity-merge semantics.
//!
//! The cart is an insertion-ordered collection of [`LineItem`]s keyed by
//! product id, with at most one line per id. All operations here are pure
//! and synchronous; persistence belongs to the storefront's cart store,
//! which wraps this type.
//!
//! # Per-line state machine
//!
//! ```text
//! absent  --add_item-->  present(qty = n)
//! present --add_item / set_quantity-->  present(qty >= 1)
//! present --remove / clear-->  absent
//! ```
//!
//! Updates that would drive a quantity below 1 are rejected as no-ops, not
//! clamped.

use serde::{Deserialize, Serialize};

use crate::types::{Price, Product, ProductId};

/// One product's entry in the cart, carrying a quantity.
///
/// `name` and `price` are denormalized copies of the product's values at
/// the time of add. The serialized form is the persisted wire shape:
/// `{id, name, price, quantity}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Foreign key to [`Product::id`]; unique within the collection.
    pub id: ProductId,
    /// Product name at time of add.
    pub name: String,
    /// Unit price at time of add.
    pub price: Price,
    /// Always at least 1.
    pub quantity: u32,
}

impl LineItem {
    /// The line's contribution to the subtotal: `price * quantity`.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price * self.quantity
    }
}

/// Violations of the cart invariants found in an externally supplied
/// collection (e.g. a decoded persisted slot).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CartIntegrityError {
    /// A line item carried a quantity of zero.
    #[error("line item for product {0} has zero quantity")]
    ZeroQuantity(ProductId),
    /// Two line items shared the same product id.
    #[error("duplicate line item for product {0}")]
    DuplicateLine(ProductId),
}

/// An insertion-ordered collection of [`LineItem`]s, keyed by product id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build a cart from an externally supplied collection, validating the
    /// invariants the collection must uphold.
    ///
    /// # Errors
    ///
    /// Returns [`CartIntegrityError`] if any line has a zero quantity or if
    /// two lines share a product id.
    pub fn from_items(items: Vec<LineItem>) -> Result<Self, CartIntegrityError> {
        for (index, line) in items.iter().enumerate() {
            if line.quantity == 0 {
                return Err(CartIntegrityError::ZeroQuantity(line.id.clone()));
            }
            if items.iter().take(index).any(|other| other.id == line.id) {
                return Err(CartIntegrityError::DuplicateLine(line.id.clone()));
            }
        }
        Ok(Self { items })
    }

    /// Add `quantity` units of `product` to the cart.
    ///
    /// If a line for the product already exists its quantity is increased;
    /// otherwise a new line is appended with the product's current name and
    /// price. A zero `quantity` is a no-op.
    ///
    /// Returns `true` if the cart changed.
    pub fn add_item(&mut self, product: &Product, quantity: u32) -> bool {
        if quantity == 0 {
            return false;
        }
        if let Some(line) = self.items.iter_mut().find(|line| line.id == product.id) {
            line.quantity = line.quantity.saturating_add(quantity);
        } else {
            self.items.push(LineItem {
                id: product.id.clone(),
                name: product.name.clone(),
                price: product.price,
                quantity,
            });
        }
        true
    }

    /// Replace the quantity of the line for `id`.
    ///
    /// A `quantity` below 1 is rejected as a no-op (deliberate guard, not an
    /// error), as is an id with no line in the cart.
    ///
    /// Returns `true` if the cart changed.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: u32) -> bool {
        if quantity == 0 {
            return false;
        }
        match self.items.iter_mut().find(|line| line.id == *id) {
            Some(line) if line.quantity != quantity => {
                line.quantity = quantity;
                true
            }
            _ => false,
        }
    }

    /// Delete the line for `id` if present; a no-op otherwise.
    ///
    /// The order of the remaining lines is preserved.
    ///
    /// Returns `true` if the cart changed.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|line| line.id != *id);
        self.items.len() != before
    }

    /// Empty the collection unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// The sum of `price * quantity` over all lines. Pure; non-negative.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// The total number of units across all lines (the cart badge count).
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.items
            .iter()
            .fold(0, |sum, line| sum.saturating_add(line.quantity))
    }

    /// Look up the line for `id`.
    #[must_use]
    pub fn line(&self, id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|line| line.id == *id)
    }

    /// The lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consumes the cart and returns its lines.
    #[must_use]
    pub fn into_items(self) -> Vec<LineItem> {
        self.items
    }
}
