//! REST-backed implementation of [`CommerceApi`].
//!
//! Uses `reqwest` against the backend's `/api/{version}/user/*` routes.
//! Responses are read as text first and parsed with `serde_json` so parse
//! failures can log a body snippet.

use std::sync::Arc;

use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::instrument;

use starfruit_core::{Address, CartItem, Order, Product, ProductId, QuantityChange};

use crate::config::CommerceConfig;

use super::{ApiError, CommerceApi};

/// How much of a response body to keep in logs and errors.
const BODY_SNIPPET_LEN: usize = 500;

// =============================================================================
// Wire payloads
// =============================================================================

/// Body of cart reads and mutations: `{"cart": [...]}`.
#[derive(Debug, Deserialize)]
struct CartPayload {
    cart: Vec<CartItem>,
}

/// Body of wishlist reads and mutations: `{"wishlist": [...]}`.
#[derive(Debug, Deserialize)]
struct WishlistPayload {
    wishlist: Vec<Product>,
}

/// Body of the address list read: `{"addressList": [...]}`.
#[derive(Debug, Deserialize)]
struct AddressPayload {
    #[serde(rename = "addressList")]
    address_list: Vec<Address>,
}

/// Body of an order-history page: `{"orders": [...]}`.
#[derive(Debug, Deserialize)]
struct OrdersPayload {
    orders: Vec<Order>,
}

/// Body of the quantity-change call: `{"action": {"type": "increment"}}`.
#[derive(Debug, serde::Serialize)]
struct QuantityChangeBody {
    action: QuantityChangeAction,
}

#[derive(Debug, serde::Serialize)]
struct QuantityChangeAction {
    #[serde(rename = "type")]
    kind: QuantityChange,
}

// =============================================================================
// CommerceClient
// =============================================================================

/// REST client for the commerce backend.
#[derive(Clone)]
pub struct CommerceClient {
    inner: Arc<CommerceClientInner>,
}

struct CommerceClientInner {
    http: reqwest::Client,
    base_url: String,
    api_version: String,
}

impl CommerceClient {
    /// Create a new commerce client.
    #[must_use]
    pub fn new(config: &CommerceConfig) -> Self {
        Self {
            inner: Arc::new(CommerceClientInner {
                http: reqwest::Client::new(),
                base_url: config.base_url.clone(),
                api_version: config.api_version.clone(),
            }),
        }
    }

    /// Absolute URL for a `user`-scoped resource path.
    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/api/{}/user/{path}",
            self.inner.base_url, self.inner.api_version
        )
    }

    /// Send a request and parse the body against an expected status code.
    async fn expect_json<T: DeserializeOwned>(
        request: reqwest::RequestBuilder,
        token: &str,
        expected: StatusCode,
    ) -> Result<T, ApiError> {
        let response = request.header("authorization", token).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status != expected {
            tracing::error!(
                status = %status,
                body = %snippet(&body),
                "commerce API returned unexpected status"
            );
            return Err(ApiError::UnexpectedStatus {
                status,
                body: snippet(&body),
            });
        }

        match serde_json::from_str(&body) {
            Ok(payload) => Ok(payload),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %snippet(&body),
                    "failed to parse commerce API response"
                );
                Err(ApiError::Parse(e))
            }
        }
    }
}

fn snippet(body: &str) -> String {
    body.chars().take(BODY_SNIPPET_LEN).collect()
}

impl CommerceApi for CommerceClient {
    #[instrument(skip(self, token))]
    async fn get_cart(&self, token: &str) -> Result<Vec<CartItem>, ApiError> {
        let request = self.inner.http.get(self.endpoint("cart"));
        let payload: CartPayload = Self::expect_json(request, token, StatusCode::OK).await?;
        Ok(payload.cart)
    }

    #[instrument(skip(self, token, product), fields(product_id = %product.id))]
    async fn add_to_cart(&self, token: &str, product: &Product) -> Result<Vec<CartItem>, ApiError> {
        let request = self
            .inner
            .http
            .post(self.endpoint("cart"))
            .json(&serde_json::json!({ "product": product }));
        let payload: CartPayload = Self::expect_json(request, token, StatusCode::CREATED).await?;
        Ok(payload.cart)
    }

    #[instrument(skip(self, token), fields(product_id = %id))]
    async fn remove_from_cart(
        &self,
        token: &str,
        id: &ProductId,
    ) -> Result<Vec<CartItem>, ApiError> {
        let request = self
            .inner
            .http
            .delete(self.endpoint(&format!("cart/{id}")));
        let payload: CartPayload = Self::expect_json(request, token, StatusCode::OK).await?;
        Ok(payload.cart)
    }

    #[instrument(skip(self, token, change), fields(product_id = %id, direction = change.as_str()))]
    async fn change_cart_quantity(
        &self,
        token: &str,
        id: &ProductId,
        change: QuantityChange,
    ) -> Result<Vec<CartItem>, ApiError> {
        let request = self
            .inner
            .http
            .post(self.endpoint(&format!("cart/{id}")))
            .json(&QuantityChangeBody {
                action: QuantityChangeAction { kind: change },
            });
        let payload: CartPayload = Self::expect_json(request, token, StatusCode::OK).await?;
        Ok(payload.cart)
    }

    #[instrument(skip(self, token))]
    async fn get_wishlist(&self, token: &str) -> Result<Vec<Product>, ApiError> {
        let request = self.inner.http.get(self.endpoint("wishlist"));
        let payload: WishlistPayload = Self::expect_json(request, token, StatusCode::OK).await?;
        Ok(payload.wishlist)
    }

    #[instrument(skip(self, token, product), fields(product_id = %product.id))]
    async fn add_to_wishlist(
        &self,
        token: &str,
        product: &Product,
    ) -> Result<Vec<Product>, ApiError> {
        let request = self
            .inner
            .http
            .post(self.endpoint("wishlist"))
            .json(&serde_json::json!({ "product": product }));
        let payload: WishlistPayload =
            Self::expect_json(request, token, StatusCode::CREATED).await?;
        Ok(payload.wishlist)
    }

    #[instrument(skip(self, token), fields(product_id = %id))]
    async fn remove_from_wishlist(
        &self,
        token: &str,
        id: &ProductId,
    ) -> Result<Vec<Product>, ApiError> {
        let request = self
            .inner
            .http
            .delete(self.endpoint(&format!("wishlist/{id}")));
        let payload: WishlistPayload = Self::expect_json(request, token, StatusCode::OK).await?;
        Ok(payload.wishlist)
    }

    #[instrument(skip(self, token))]
    async fn get_addresses(&self, token: &str) -> Result<Vec<Address>, ApiError> {
        let request = self.inner.http.get(self.endpoint("addresses"));
        let payload: AddressPayload = Self::expect_json(request, token, StatusCode::OK).await?;
        Ok(payload.address_list)
    }

    #[instrument(skip(self, token))]
    async fn get_orders(&self, token: &str, page: u32) -> Result<Vec<Order>, ApiError> {
        let request = self
            .inner
            .http
            .get(self.endpoint("orders"))
            .query(&[("page", page)]);
        let payload: OrdersPayload = Self::expect_json(request, token, StatusCode::OK).await?;
        Ok(payload.orders)
    }
}
