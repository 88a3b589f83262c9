//! Remote commerce services: cart, wishlist, addresses, order history.
//!
//! # Architecture
//!
//! - The backend is the source of truth - every mutation returns the full
//!   resulting collection, which the caller swaps in wholesale
//! - [`CommerceApi`] is the seam the store is generic over; the production
//!   implementation is the REST-backed [`CommerceClient`], tests substitute
//!   an in-memory fake
//! - Calls carry the session token in the `authorization` header
//!
//! # Example
//!
//! ```rust,ignore
//! use starfruit_client::{CommerceClient, CommerceConfig};
//!
//! let client = CommerceClient::new(&CommerceConfig::from_env()?);
//! let cart = client.add_to_cart(token, &product).await?;
//! ```

mod rest;

pub use rest::CommerceClient;

use thiserror::Error;

use starfruit_core::{Address, CartItem, Order, Product, ProductId, QuantityChange};

/// Errors that can occur when calling the commerce backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The backend answered with a status outside the expected code.
    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus {
        /// HTTP status returned.
        status: reqwest::StatusCode,
        /// Leading slice of the response body, for diagnostics.
        body: String,
    },
}

/// The remote cart/wishlist/address/order services.
///
/// Mutating calls return the server's full resulting collection. Success
/// statuses are 201 for creates and 200 otherwise; anything else surfaces as
/// [`ApiError::UnexpectedStatus`].
///
/// Consumers stay generic over this trait; the store runs on one logical
/// task, so the futures carry no `Send` bound.
#[allow(async_fn_in_trait)]
pub trait CommerceApi {
    /// Fetch the current cart.
    async fn get_cart(&self, token: &str) -> Result<Vec<CartItem>, ApiError>;

    /// Add a product to the cart; returns the resulting cart.
    async fn add_to_cart(&self, token: &str, product: &Product) -> Result<Vec<CartItem>, ApiError>;

    /// Remove a cart line by product ID; returns the resulting cart.
    async fn remove_from_cart(
        &self,
        token: &str,
        id: &ProductId,
    ) -> Result<Vec<CartItem>, ApiError>;

    /// Change a cart line's quantity by one in either direction; returns the
    /// resulting cart. The caller routes decrement-at-1 to removal instead.
    async fn change_cart_quantity(
        &self,
        token: &str,
        id: &ProductId,
        change: QuantityChange,
    ) -> Result<Vec<CartItem>, ApiError>;

    /// Fetch the current wishlist.
    async fn get_wishlist(&self, token: &str) -> Result<Vec<Product>, ApiError>;

    /// Add a product to the wishlist; returns the resulting wishlist.
    async fn add_to_wishlist(
        &self,
        token: &str,
        product: &Product,
    ) -> Result<Vec<Product>, ApiError>;

    /// Remove a wishlist entry by product ID; returns the resulting wishlist.
    async fn remove_from_wishlist(
        &self,
        token: &str,
        id: &ProductId,
    ) -> Result<Vec<Product>, ApiError>;

    /// Fetch the saved address list.
    async fn get_addresses(&self, token: &str) -> Result<Vec<Address>, ApiError>;

    /// Fetch one page of order history.
    async fn get_orders(&self, token: &str, page: u32) -> Result<Vec<Order>, ApiError>;
}
