//! Starfruit client library.
//!
//! This crate holds the client-local projection of a signed-in user's
//! commerce state and the operations that keep it synchronized with the
//! backend. The flow is always the same: UI event, remote call, then the
//! server's returned snapshot replaces the local collection. Local state is
//! never mutated optimistically without a confirming round-trip.
//!
//! # Collaborators
//!
//! The store talks to its surroundings through seams:
//! - [`api::CommerceApi`] - the remote cart/wishlist/address/order services
//! - [`ui::Notifier`] - fire-and-forget toast display
//! - [`ui::Navigator`] - imperative redirect to the login route
//! - [`session::AuthSession`] - token and authentication flag from the auth
//!   component
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use starfruit_client::{AuthSession, CommerceClient, CommerceConfig, UserDataStore};
//!
//! let config = CommerceConfig::from_env()?;
//! let api = CommerceClient::new(&config);
//! let mut store = UserDataStore::new(api, session, notifier, navigator);
//!
//! store.bootstrap().await;
//! store.add_to_cart(&product).await;
//! let subtotal = store.total_discounted_price();
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod session;
pub mod store;
pub mod ui;

pub use api::{ApiError, CommerceApi, CommerceClient};
pub use config::{CommerceConfig, ConfigError};
pub use session::AuthSession;
pub use store::UserDataStore;
pub use ui::{Navigator, Notifier, TracingNotifier};
