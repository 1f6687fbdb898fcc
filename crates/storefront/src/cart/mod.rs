//! Cart store: the owned cart collection and its persisted mirror.
//!
//! One `CartStore` is constructed per process and owned by the application
//! state; handlers reach it by reference rather than through ambient global
//! storage. Every mutation writes the whole collection back to the slot in
//! the same logical step, so the persisted and in-memory representations
//! never observably diverge.
//!
//! # Failure semantics
//!
//! A missing or malformed slot value degrades to an empty cart on open. A
//! slot write failure is non-fatal: it is logged and the in-memory cart
//! remains the source of truth for the rest of the session.

pub mod slot;

use bazaar_core::{Cart, LineItem, Price, Product, ProductId};
use tracing::warn;

pub use slot::{CartSlot, FileSlot, MemorySlot, SlotError};

/// The cart collection plus its write-through persistence.
#[derive(Debug)]
pub struct CartStore<S: CartSlot> {
    cart: Cart,
    slot: S,
}

impl<S: CartSlot> CartStore<S> {
    /// Open the store, reading the persisted slot.
    ///
    /// An absent slot yields an empty cart. A value that fails the strict
    /// decode (invalid JSON, wrong shape, or an invariant violation such as
    /// a zero quantity or duplicate id) also yields an empty cart; the
    /// failure is logged, never surfaced.
    pub fn open(slot: S) -> Self {
        let cart = match slot.load() {
            Ok(Some(raw)) => decode_cart(&raw),
            Ok(None) => Cart::new(),
            Err(e) => {
                warn!("failed to read cart slot, starting empty: {e}");
                Cart::new()
            }
        };
        Self { cart, slot }
    }

    /// The current cart collection.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add `quantity` units of `product`, merging by product id.
    ///
    /// Returns `true` if the cart changed (and was persisted).
    pub fn add_item(&mut self, product: &Product, quantity: u32) -> bool {
        let changed = self.cart.add_item(product, quantity);
        if changed {
            self.persist();
        }
        changed
    }

    /// Replace the quantity of the line for `id`.
    ///
    /// A quantity below 1 or an unknown id is a no-op and nothing is
    /// persisted.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: u32) -> bool {
        let changed = self.cart.set_quantity(id, quantity);
        if changed {
            self.persist();
        }
        changed
    }

    /// Delete the line for `id` if present.
    pub fn remove_item(&mut self, id: &ProductId) -> bool {
        let changed = self.cart.remove(id);
        if changed {
            self.persist();
        }
        changed
    }

    /// Empty the collection unconditionally and persist the empty state.
    pub fn clear(&mut self) {
        self.cart.clear();
        self.persist();
    }

    /// The current subtotal; pure, no side effects.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.cart.subtotal()
    }

    /// Compute the subtotal, clear the cart, and return the total.
    ///
    /// A local-only simulated transaction: irreversible, no rollback, no
    /// external payment call.
    pub fn checkout(&mut self) -> Price {
        let total = self.cart.subtotal();
        self.clear();
        total
    }

    /// Write the whole collection back to the slot.
    fn persist(&mut self) {
        match serde_json::to_string(self.cart.items()) {
            Ok(raw) => {
                if let Err(e) = self.slot.store(&raw) {
                    warn!("failed to persist cart, keeping in-memory state: {e}");
                }
            }
            Err(e) => {
                warn!("failed to serialize cart, keeping in-memory state: {e}");
            }
        }
    }
}

/// Strict decode of a persisted slot value.
///
/// Any shape mismatch or invariant violation degrades to an empty cart.
fn decode_cart(raw: &str) -> Cart {
    let items: Vec<LineItem> = match serde_json::from_str(raw) {
        Ok(items) => items,
        Err(e) => {
            warn!("malformed cart slot value, starting empty: {e}");
            return Cart::new();
        }
    };
    match Cart::from_items(items) {
        Ok(cart) => cart,
        Err(e) => {
            warn!("cart slot value violates invariants, starting empty: {e}");
            Cart::new()
        }
    }
}
