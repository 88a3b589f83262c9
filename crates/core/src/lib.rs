//! Starfruit Core - Shared types and user-data state machine.
//!
//! This crate provides the domain types and pure state logic used across all
//! Starfruit components:
//! - `client` - Client-side user-data store backing the web front end
//! - `integration-tests` - End-to-end scenario tests
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients. The server is the source of truth for every collection held here;
//! mutations arrive as full snapshots and are applied through the reducer in
//! [`state`].
//!
//! # Modules
//!
//! - [`types`] - Products, cart items, addresses, orders, and the order draft
//! - [`state`] - The `UserData` aggregate, its action sum type, and derived
//!   pricing computations

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod state;
pub mod types;

pub use state::{UserData, UserDataAction};
pub use types::*;
