//! Core types for Starfruit.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod address;
pub mod id;
pub mod order;
pub mod product;

pub use address::Address;
pub use id::*;
pub use order::{Order, OrderDraft, OrderDraftUpdate};
pub use product::{CartItem, Product, QuantityChange};
