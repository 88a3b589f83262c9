//! Products and cart lines as returned by the commerce API.
//!
//! These types mirror the wire shape of the backend's `cart` and `wishlist`
//! collections. The backend is the source of truth: every cart mutation
//! returns the resulting collection in full, and the client replaces its
//! local copy wholesale.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// A product as listed in the catalog or a wishlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Server-issued product ID.
    #[serde(rename = "_id")]
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Undiscounted unit price.
    pub original_price: Decimal,
    /// Current unit price after discount.
    pub discounted_price: Decimal,
    /// Product image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Category name for display and filtering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// A line in the cart: a product plus its quantity.
///
/// Quantity is always at least 1. Decrementing a line whose quantity is 1
/// removes the line instead; a `qty == 0` line never exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// The product on this line. Product fields sit at the top level of the
    /// cart entry on the wire, so the struct is flattened.
    #[serde(flatten)]
    pub product: Product,
    /// Number of units, always >= 1.
    pub qty: u32,
}

impl CartItem {
    /// Cart line for a single unit of a product.
    #[must_use]
    pub const fn single(product: Product) -> Self {
        Self { product, qty: 1 }
    }

    /// The product ID of this line.
    #[must_use]
    pub const fn id(&self) -> &ProductId {
        &self.product.id
    }
}

/// Direction of a cart quantity change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantityChange {
    /// Add one unit to the line.
    Increment,
    /// Remove one unit from the line.
    Decrement,
}

impl QuantityChange {
    /// Wire representation used by the quantity-change endpoint.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Increment => "increment",
            Self::Decrement => "decrement",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_item_flattens_product_on_the_wire() {
        let json = serde_json::json!({
            "_id": "p1",
            "name": "Trail Shoes",
            "original_price": "100",
            "discounted_price": "80",
            "qty": 2
        });

        let item: CartItem = serde_json::from_value(json).expect("deserialize");
        assert_eq!(item.id().as_str(), "p1");
        assert_eq!(item.product.name, "Trail Shoes");
        assert_eq!(item.product.original_price, Decimal::from(100));
        assert_eq!(item.product.discounted_price, Decimal::from(80));
        assert_eq!(item.qty, 2);
    }

    #[test]
    fn test_quantity_change_wire_values() {
        assert_eq!(QuantityChange::Increment.as_str(), "increment");
        assert_eq!(QuantityChange::Decrement.as_str(), "decrement");
        assert_eq!(
            serde_json::to_string(&QuantityChange::Decrement).expect("serialize"),
            "\"decrement\""
        );
    }
}
