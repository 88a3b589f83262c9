//! Integration tests for Starfruit.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p starfruit-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `store_cart` - Cart mutation and pricing scenarios
//! - `store_wishlist` - Wishlist toggle and auth gating
//! - `store_bootstrap` - One-shot bootstrap and order history
//!
//! # Harness
//!
//! The store is driven end to end against [`FakeCommerceApi`], an in-memory
//! stand-in for the backend that applies mutations server-side and returns
//! full snapshots, the same contract the real REST client sees. Collaborator
//! seams are filled by [`RecordingNotifier`] and [`RecordingNavigator`], and
//! [`TestContext`] wires everything together.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use reqwest::StatusCode;

use starfruit_client::api::{ApiError, CommerceApi};
use starfruit_client::{AuthSession, Navigator, Notifier, UserDataStore};
use starfruit_core::{
    Address, AddressId, CartItem, Order, Product, ProductId, QuantityChange,
};

// =============================================================================
// Fixtures
// =============================================================================

/// A catalog product with integer prices.
#[must_use]
pub fn product(id: &str, original: i64, discounted: i64) -> Product {
    Product {
        id: ProductId::new(id),
        name: format!("product {id}"),
        original_price: rust_decimal::Decimal::from(original),
        discounted_price: rust_decimal::Decimal::from(discounted),
        image: None,
        category: None,
    }
}

/// A cart line over [`product`].
#[must_use]
pub fn cart_item(id: &str, original: i64, discounted: i64, qty: u32) -> CartItem {
    CartItem {
        product: product(id, original, discounted),
        qty,
    }
}

/// A saved address.
#[must_use]
pub fn address(id: &str) -> Address {
    Address {
        id: AddressId::new(id),
        name: "Grace Hopper".to_string(),
        street: "1 Harbor Dr".to_string(),
        city: "Arlington".to_string(),
        state: "VA".to_string(),
        zip_code: "22201".to_string(),
        phone: "5550100".to_string(),
    }
}

/// A placed order over a single cart line.
#[must_use]
pub fn order(id: &str, amount: i64) -> Order {
    Order {
        id: starfruit_core::OrderId::new(id),
        items: vec![cart_item("p1", amount, amount, 1)],
        amount: rust_decimal::Decimal::from(amount),
        address: address("a1"),
        created_at: chrono::Utc::now(),
    }
}

// =============================================================================
// FakeCommerceApi
// =============================================================================

#[derive(Default)]
struct FakeState {
    cart: Vec<CartItem>,
    wishlist: Vec<Product>,
    addresses: Vec<Address>,
    order_pages: HashMap<u32, Vec<Order>>,
}

#[derive(Default)]
struct FakeInner {
    state: Mutex<FakeState>,
    calls: Mutex<Vec<&'static str>>,
    failing: Mutex<HashSet<&'static str>>,
}

/// In-memory commerce backend.
///
/// Applies mutations to its own state and returns the full resulting
/// collection, matching the snapshot-replace contract of the real API.
/// Cheaply cloneable; clones share state so tests can seed and inspect
/// while the store holds its own handle.
#[derive(Clone, Default)]
pub struct FakeCommerceApi {
    inner: Arc<FakeInner>,
}

impl FakeCommerceApi {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the backend cart.
    pub fn seed_cart(&self, cart: Vec<CartItem>) {
        self.inner.state.lock().expect("lock").cart = cart;
    }

    /// Seed the backend wishlist.
    pub fn seed_wishlist(&self, wishlist: Vec<Product>) {
        self.inner.state.lock().expect("lock").wishlist = wishlist;
    }

    /// Seed the backend address book.
    pub fn seed_addresses(&self, addresses: Vec<Address>) {
        self.inner.state.lock().expect("lock").addresses = addresses;
    }

    /// Seed one page of order history.
    pub fn seed_order_page(&self, page: u32, orders: Vec<Order>) {
        self.inner
            .state
            .lock()
            .expect("lock")
            .order_pages
            .insert(page, orders);
    }

    /// Make one endpoint fail with a 500 until cleared.
    pub fn fail_on(&self, endpoint: &'static str) {
        self.inner.failing.lock().expect("lock").insert(endpoint);
    }

    /// Number of calls recorded against an endpoint.
    #[must_use]
    pub fn calls_to(&self, endpoint: &str) -> usize {
        self.inner
            .calls
            .lock()
            .expect("lock")
            .iter()
            .filter(|name| **name == endpoint)
            .count()
    }

    /// Total number of calls recorded.
    #[must_use]
    pub fn total_calls(&self) -> usize {
        self.inner.calls.lock().expect("lock").len()
    }

    fn record(&self, endpoint: &'static str) -> Result<(), ApiError> {
        self.inner.calls.lock().expect("lock").push(endpoint);
        if self.inner.failing.lock().expect("lock").contains(endpoint) {
            return Err(ApiError::UnexpectedStatus {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body: format!("{endpoint} failed"),
            });
        }
        Ok(())
    }
}

impl CommerceApi for FakeCommerceApi {
    async fn get_cart(&self, _token: &str) -> Result<Vec<CartItem>, ApiError> {
        self.record("get_cart")?;
        Ok(self.inner.state.lock().expect("lock").cart.clone())
    }

    async fn add_to_cart(
        &self,
        _token: &str,
        product: &Product,
    ) -> Result<Vec<CartItem>, ApiError> {
        self.record("add_to_cart")?;
        let mut state = self.inner.state.lock().expect("lock");
        if let Some(line) = state.cart.iter_mut().find(|line| line.id() == &product.id) {
            line.qty += 1;
        } else {
            state.cart.push(CartItem::single(product.clone()));
        }
        Ok(state.cart.clone())
    }

    async fn remove_from_cart(
        &self,
        _token: &str,
        id: &ProductId,
    ) -> Result<Vec<CartItem>, ApiError> {
        self.record("remove_from_cart")?;
        let mut state = self.inner.state.lock().expect("lock");
        state.cart.retain(|line| line.id() != id);
        Ok(state.cart.clone())
    }

    async fn change_cart_quantity(
        &self,
        _token: &str,
        id: &ProductId,
        change: QuantityChange,
    ) -> Result<Vec<CartItem>, ApiError> {
        self.record("change_cart_quantity")?;
        let mut state = self.inner.state.lock().expect("lock");
        if let Some(line) = state.cart.iter_mut().find(|line| line.id() == id) {
            match change {
                QuantityChange::Increment => line.qty += 1,
                QuantityChange::Decrement => line.qty -= 1,
            }
        }
        state.cart.retain(|line| line.qty > 0);
        Ok(state.cart.clone())
    }

    async fn get_wishlist(&self, _token: &str) -> Result<Vec<Product>, ApiError> {
        self.record("get_wishlist")?;
        Ok(self.inner.state.lock().expect("lock").wishlist.clone())
    }

    async fn add_to_wishlist(
        &self,
        _token: &str,
        product: &Product,
    ) -> Result<Vec<Product>, ApiError> {
        self.record("add_to_wishlist")?;
        let mut state = self.inner.state.lock().expect("lock");
        if !state.wishlist.iter().any(|entry| entry.id == product.id) {
            state.wishlist.push(product.clone());
        }
        Ok(state.wishlist.clone())
    }

    async fn remove_from_wishlist(
        &self,
        _token: &str,
        id: &ProductId,
    ) -> Result<Vec<Product>, ApiError> {
        self.record("remove_from_wishlist")?;
        let mut state = self.inner.state.lock().expect("lock");
        state.wishlist.retain(|entry| &entry.id != id);
        Ok(state.wishlist.clone())
    }

    async fn get_addresses(&self, _token: &str) -> Result<Vec<Address>, ApiError> {
        self.record("get_addresses")?;
        Ok(self.inner.state.lock().expect("lock").addresses.clone())
    }

    async fn get_orders(&self, _token: &str, page: u32) -> Result<Vec<Order>, ApiError> {
        self.record("get_orders")?;
        Ok(self
            .inner
            .state
            .lock()
            .expect("lock")
            .order_pages
            .get(&page)
            .cloned()
            .unwrap_or_default())
    }
}

// =============================================================================
// Recording collaborators
// =============================================================================

/// Kind of a recorded notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

/// [`Notifier`] that records every toast for assertions.
#[derive(Default)]
pub struct RecordingNotifier {
    toasts: Mutex<Vec<(ToastKind, String)>>,
}

impl RecordingNotifier {
    /// All recorded toasts, in emission order.
    #[must_use]
    pub fn toasts(&self) -> Vec<(ToastKind, String)> {
        self.toasts.lock().expect("lock").clone()
    }

    /// Messages of a given kind.
    #[must_use]
    pub fn messages(&self, kind: ToastKind) -> Vec<String> {
        self.toasts()
            .into_iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, message)| message)
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.toasts
            .lock()
            .expect("lock")
            .push((ToastKind::Success, message.to_string()));
    }

    fn info(&self, message: &str) {
        self.toasts
            .lock()
            .expect("lock")
            .push((ToastKind::Info, message.to_string()));
    }

    fn error(&self, message: &str) {
        self.toasts
            .lock()
            .expect("lock")
            .push((ToastKind::Error, message.to_string()));
    }
}

/// [`Navigator`] pinned to one location, recording redirects.
pub struct RecordingNavigator {
    location: String,
    redirects: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    #[must_use]
    pub fn at(location: &str) -> Self {
        Self {
            location: location.to_string(),
            redirects: Mutex::new(Vec::new()),
        }
    }

    /// Originating locations of recorded login redirects.
    #[must_use]
    pub fn redirects(&self) -> Vec<String> {
        self.redirects.lock().expect("lock").clone()
    }
}

impl Navigator for RecordingNavigator {
    fn current_location(&self) -> String {
        self.location.clone()
    }

    fn redirect_to_login(&self, from: &str) {
        self.redirects.lock().expect("lock").push(from.to_string());
    }
}

// =============================================================================
// TestContext
// =============================================================================

/// Everything a scenario test needs, wired together.
pub struct TestContext {
    pub api: FakeCommerceApi,
    pub notifier: Arc<RecordingNotifier>,
    pub navigator: Arc<RecordingNavigator>,
    pub store: UserDataStore<FakeCommerceApi>,
}

impl TestContext {
    /// Context with an authenticated session, starting at `/products`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_session(AuthSession::authenticated("test-token"))
    }

    /// Context with an explicit session.
    #[must_use]
    pub fn with_session(session: AuthSession) -> Self {
        init_tracing();

        let api = FakeCommerceApi::new();
        let notifier = Arc::new(RecordingNotifier::default());
        let navigator = Arc::new(RecordingNavigator::at("/products"));
        let store = UserDataStore::new(
            api.clone(),
            session,
            notifier.clone(),
            navigator.clone(),
        );

        Self {
            api,
            notifier,
            navigator,
            store,
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Install a test subscriber honoring `RUST_LOG`; idempotent across tests.
pub fn init_tracing() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
