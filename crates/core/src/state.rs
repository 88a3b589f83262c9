//! The client-local projection of a user's commerce state.
//!
//! `UserData` holds the cart, wishlist, address book, order history, and the
//! in-progress order draft. Mutations arrive as [`UserDataAction`] values and
//! go through the pure [`UserData::apply`] transition; the I/O layer in the
//! `client` crate decides *when* to dispatch, this module decides *what* a
//! dispatch means.
//!
//! # Replace vs. merge vs. append
//!
//! Cart, wishlist, and addresses are current-snapshot resources: the backend
//! returns the full resulting collection after every mutation, so the local
//! copy is replaced wholesale. Order history is paginated and accumulates.
//! The order draft is assembled incrementally across checkout steps, so
//! updates merge field-by-field.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{
    Address, CartItem, Order, OrderDraft, OrderDraftUpdate, Product, ProductId,
};

// =============================================================================
// Actions
// =============================================================================

/// A state transition for [`UserData`].
///
/// The enum is exhaustive: there is no catch-all no-op variant, every
/// action means something.
#[derive(Debug, Clone, PartialEq)]
pub enum UserDataAction {
    /// Replace the cart with a server snapshot.
    SetCart(Vec<CartItem>),
    /// Replace the address book with a server snapshot.
    SetAddresses(Vec<Address>),
    /// Replace the wishlist with a server snapshot.
    SetWishlist(Vec<Product>),
    /// Shallow-merge a partial update into the order draft.
    SetOrderDraft(OrderDraftUpdate),
    /// Append a page of order history.
    AppendOrders(Vec<Order>),
}

// =============================================================================
// State
// =============================================================================

/// The user-data aggregate, held in memory only.
///
/// Created empty at store construction and populated by the bootstrap
/// fetches once an authenticated session is available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UserData {
    /// Cart lines, in server response order. No two lines share an ID.
    pub cart: Vec<CartItem>,
    /// Wishlist products, unique by ID.
    pub wishlist: Vec<Product>,
    /// Saved shipping addresses.
    pub addresses: Vec<Address>,
    /// Order history, append-only via incremental fetch.
    pub orders: Vec<Order>,
    /// The in-progress order summary.
    pub order_draft: OrderDraft,
}

impl UserData {
    /// Apply an action in place.
    pub fn apply(&mut self, action: UserDataAction) {
        match action {
            UserDataAction::SetCart(cart) => self.cart = cart,
            UserDataAction::SetAddresses(addresses) => self.addresses = addresses,
            UserDataAction::SetWishlist(wishlist) => self.wishlist = wishlist,
            UserDataAction::SetOrderDraft(update) => self.order_draft.merge(update),
            UserDataAction::AppendOrders(mut orders) => self.orders.append(&mut orders),
        }
    }

    /// Apply an action by value, returning the resulting state.
    #[must_use]
    pub fn reduce(mut self, action: UserDataAction) -> Self {
        self.apply(action);
        self
    }

    // =========================================================================
    // Membership lookups
    // =========================================================================

    /// Whether a cart line with this product ID exists.
    ///
    /// Linear scan; collections are UI-sized.
    #[must_use]
    pub fn contains_cart_item(&self, id: &ProductId) -> bool {
        self.cart.iter().any(|item| item.id() == id)
    }

    /// Whether a wishlist entry with this product ID exists.
    #[must_use]
    pub fn contains_wishlist_item(&self, id: &ProductId) -> bool {
        self.wishlist.iter().any(|product| &product.id == id)
    }

    /// Find a cart line by product ID.
    #[must_use]
    pub fn cart_item(&self, id: &ProductId) -> Option<&CartItem> {
        self.cart.iter().find(|item| item.id() == id)
    }

    // =========================================================================
    // Derived pricing
    // =========================================================================

    /// Sum of `original_price * qty` over the cart.
    ///
    /// Recomputed from current state on every call, never cached.
    #[must_use]
    pub fn total_original_price(&self) -> Decimal {
        self.cart
            .iter()
            .map(|item| item.product.original_price * Decimal::from(item.qty))
            .sum()
    }

    /// Sum of `discounted_price * qty` over the cart.
    #[must_use]
    pub fn total_discounted_price(&self) -> Decimal {
        self.cart
            .iter()
            .map(|item| item.product.discounted_price * Decimal::from(item.qty))
            .sum()
    }

    /// Aggregate discount as a percentage of the original price.
    ///
    /// Sums raw per-item prices, unweighted by quantity, then returns
    /// `round((original - discounted) / original, 2) * 100`. An empty cart
    /// (zero original sum) yields 0 rather than a division failure.
    #[must_use]
    pub fn discount_percent(&self) -> Decimal {
        let (original, discounted) = self.cart.iter().fold(
            (Decimal::ZERO, Decimal::ZERO),
            |(original, discounted), item| {
                (
                    original + item.product.original_price,
                    discounted + item.product.discounted_price,
                )
            },
        );

        if original.is_zero() {
            return Decimal::ZERO;
        }

        ((original - discounted) / original).round_dp(2) * Decimal::ONE_HUNDRED
    }
}
