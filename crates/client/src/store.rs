//! The user-data store: state container plus remote-synchronized mutations.
//!
//! One store exists per authenticated session: construct it when the session
//! starts, drop it when the session ends, and pass it to consumers
//! explicitly. All reads come from [`UserDataStore::data`]; all writes go
//! through the mutation operations below, which round-trip through the
//! backend and swap in the returned snapshot.
//!
//! # Error policy
//!
//! Mutation operations are terminal error boundaries: failures are logged,
//! surfaced as one generic failure toast, and never propagated to the
//! caller. Read-only calls (bootstrap, order-history pages) fail silently.
//! The loading flag is cleared on every path.
//!
//! # Concurrency
//!
//! Single logical task; every remote call is a suspension point. Overlapping
//! mutations against the same resource resolve last-write-wins by response
//! arrival order, which the snapshot-replace model makes safe for this
//! interactive scale. No cancellation: an in-flight call always runs to
//! completion.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, error, instrument};

use starfruit_core::{
    CartItem, OrderDraftUpdate, Product, ProductId, QuantityChange, UserData, UserDataAction,
};

use crate::api::{ApiError, CommerceApi};
use crate::session::AuthSession;
use crate::ui::{Navigator, Notifier};

/// Toast shown when a mutating call fails, regardless of cause.
const FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Client-local projection of the user's commerce state.
pub struct UserDataStore<A: CommerceApi> {
    data: UserData,
    loading: bool,
    bootstrapped: bool,
    api: A,
    session: AuthSession,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

impl<A: CommerceApi> UserDataStore<A> {
    /// Create an empty store for a session.
    pub fn new(
        api: A,
        session: AuthSession,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            data: UserData::default(),
            loading: false,
            bootstrapped: false,
            api,
            session,
            notifier,
            navigator,
        }
    }

    /// Current state projection.
    #[must_use]
    pub const fn data(&self) -> &UserData {
        &self.data
    }

    /// Whether a tracked remote call is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Apply a state transition directly.
    ///
    /// Mutation operations dispatch internally; this is exposed for consumers
    /// that receive snapshots through other channels (e.g., checkout).
    pub fn dispatch(&mut self, action: UserDataAction) {
        self.data.apply(action);
    }

    fn token(&self) -> &str {
        self.session.token()
    }

    fn mutation_failed(&self, operation: &str, err: &ApiError) {
        error!(operation, error = %err, "mutating call failed");
        self.notifier.error(FAILURE_MESSAGE);
    }

    // =========================================================================
    // Bootstrap
    // =========================================================================

    /// Populate cart, wishlist, and addresses from the backend.
    ///
    /// Runs at most once per store, and only once an authenticated session is
    /// available. The three fetches are independent: each dispatches its
    /// snapshot on success, and a failure in one does not prevent the others.
    /// Failures are not surfaced and not retried.
    #[instrument(skip(self))]
    pub async fn bootstrap(&mut self) {
        if !self.session.is_auth() || self.bootstrapped {
            return;
        }
        self.bootstrapped = true;

        let token = self.session.token();
        let (cart, wishlist, addresses) = tokio::join!(
            self.api.get_cart(token),
            self.api.get_wishlist(token),
            self.api.get_addresses(token),
        );

        match cart {
            Ok(items) => self.dispatch(UserDataAction::SetCart(items)),
            Err(e) => debug!(error = %e, "cart bootstrap fetch failed"),
        }
        match wishlist {
            Ok(products) => self.dispatch(UserDataAction::SetWishlist(products)),
            Err(e) => debug!(error = %e, "wishlist bootstrap fetch failed"),
        }
        match addresses {
            Ok(list) => self.dispatch(UserDataAction::SetAddresses(list)),
            Err(e) => debug!(error = %e, "address bootstrap fetch failed"),
        }
    }

    // =========================================================================
    // Cart operations
    // =========================================================================

    /// Add a product to the cart.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn add_to_cart(&mut self, product: &Product) {
        match self.api.add_to_cart(self.token(), product).await {
            Ok(cart) => {
                self.dispatch(UserDataAction::SetCart(cart));
                self.notifier.success("Added to cart");
            }
            Err(e) => self.mutation_failed("add_to_cart", &e),
        }
    }

    /// Remove a cart line entirely.
    #[instrument(skip(self, item), fields(product_id = %item.id()))]
    pub async fn remove_from_cart(&mut self, item: &CartItem) {
        self.loading = true;
        match self.api.remove_from_cart(self.token(), item.id()).await {
            Ok(cart) => {
                self.dispatch(UserDataAction::SetCart(cart));
                self.notifier
                    .success(&format!("{} removed from the cart", item.product.name));
            }
            Err(e) => self.mutation_failed("remove_from_cart", &e),
        }
        self.loading = false;
    }

    /// Change a cart line's quantity by one in either direction.
    ///
    /// Decrementing a line whose quantity is 1 removes it instead, since a
    /// quantity of 0 never exists.
    #[instrument(skip(self, item, change), fields(product_id = %item.id(), direction = change.as_str()))]
    pub async fn change_cart_quantity(&mut self, item: &CartItem, change: QuantityChange) {
        if change == QuantityChange::Decrement && item.qty == 1 {
            return self.remove_from_cart(item).await;
        }

        self.loading = true;
        match self
            .api
            .change_cart_quantity(self.token(), item.id(), change)
            .await
        {
            Ok(cart) => {
                self.dispatch(UserDataAction::SetCart(cart));
                let message = match change {
                    QuantityChange::Increment => {
                        format!("Added another {} to the cart", item.product.name)
                    }
                    QuantityChange::Decrement => {
                        format!("Removed one {} from the cart", item.product.name)
                    }
                };
                self.notifier.success(&message);
            }
            Err(e) => self.mutation_failed("change_cart_quantity", &e),
        }
        self.loading = false;
    }

    /// Whether a cart line with this product ID exists.
    #[must_use]
    pub fn is_in_cart(&self, id: &ProductId) -> bool {
        self.data.contains_cart_item(id)
    }

    // =========================================================================
    // Wishlist operations
    // =========================================================================

    /// Add or remove a product from the wishlist, depending on membership.
    ///
    /// Unauthenticated sessions get an informational toast and a redirect to
    /// the login route (carrying the originating location); no remote call is
    /// made and no state changes.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn toggle_wishlist(&mut self, product: &Product) {
        if !self.session.is_auth() {
            self.notifier.info("Please login first!");
            let from = self.navigator.current_location();
            self.navigator.redirect_to_login(&from);
            return;
        }

        self.loading = true;
        if self.is_in_wishlist(&product.id) {
            match self
                .api
                .remove_from_wishlist(self.token(), &product.id)
                .await
            {
                Ok(wishlist) => {
                    self.dispatch(UserDataAction::SetWishlist(wishlist));
                    self.notifier
                        .success(&format!("{} removed from the wishlist", product.name));
                }
                Err(e) => self.mutation_failed("remove_from_wishlist", &e),
            }
        } else {
            match self.api.add_to_wishlist(self.token(), product).await {
                Ok(wishlist) => {
                    self.dispatch(UserDataAction::SetWishlist(wishlist));
                    self.notifier
                        .success(&format!("{} added to the wishlist", product.name));
                }
                Err(e) => self.mutation_failed("add_to_wishlist", &e),
            }
        }
        self.loading = false;
    }

    /// Whether a wishlist entry with this product ID exists.
    #[must_use]
    pub fn is_in_wishlist(&self, id: &ProductId) -> bool {
        self.data.contains_wishlist_item(id)
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// Merge a partial update into the in-progress order draft.
    ///
    /// Local-only: the draft is assembled incrementally across checkout
    /// steps and never round-trips on its own.
    pub fn update_order_draft(&mut self, update: OrderDraftUpdate) {
        self.dispatch(UserDataAction::SetOrderDraft(update));
    }

    /// Fetch one page of order history and append it.
    ///
    /// Read-only call: failures are logged and otherwise ignored.
    #[instrument(skip(self))]
    pub async fn load_orders(&mut self, page: u32) {
        match self.api.get_orders(self.token(), page).await {
            Ok(orders) => self.dispatch(UserDataAction::AppendOrders(orders)),
            Err(e) => debug!(error = %e, page, "order history fetch failed"),
        }
    }

    // =========================================================================
    // Derived pricing
    // =========================================================================

    /// Sum of `original_price * qty` over the cart.
    #[must_use]
    pub fn total_original_price(&self) -> Decimal {
        self.data.total_original_price()
    }

    /// Sum of `discounted_price * qty` over the cart.
    #[must_use]
    pub fn total_discounted_price(&self) -> Decimal {
        self.data.total_discounted_price()
    }

    /// Aggregate discount percentage; 0 for an empty cart.
    #[must_use]
    pub fn discount_percent(&self) -> Decimal {
        self.data.discount_percent()
    }
}
