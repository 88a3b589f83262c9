//! Placed orders and the in-progress order draft.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::address::Address;
use super::id::OrderId;
use super::product::CartItem;

/// A placed order as returned by the order-history endpoint.
///
/// Order history is paginated and accumulated client-side, so `Order` values
/// only ever append to the local projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Server-issued order ID.
    #[serde(rename = "_id")]
    pub id: OrderId,
    /// Cart lines captured at checkout time.
    pub items: Vec<CartItem>,
    /// Total charged amount.
    pub amount: Decimal,
    /// Shipping address chosen for this order.
    pub address: Address,
    /// When the order was placed.
    pub created_at: DateTime<Utc>,
}

/// The in-progress order summary assembled across checkout steps.
///
/// Each field is filled in by an independent step (totals calculation,
/// address selection, id assignment), so all fields are optional and updates
/// merge rather than replace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OrderDraft {
    /// Sum of original prices across cart lines.
    pub items_total: Option<Decimal>,
    /// Sum of discounted prices across cart lines.
    pub items_discount_total: Option<Decimal>,
    /// Additional discount from an applied coupon.
    pub coupon_discount_total: Option<Decimal>,
    /// Shipping address selected for the order.
    pub address: Option<Address>,
    /// Order ID once the backend has assigned one.
    pub order_id: Option<OrderId>,
}

impl OrderDraft {
    /// Shallow-merge an update into the draft.
    ///
    /// `Some` fields in the update overwrite; `None` fields leave the
    /// existing value untouched.
    pub fn merge(&mut self, update: OrderDraftUpdate) {
        if let Some(items_total) = update.items_total {
            self.items_total = Some(items_total);
        }
        if let Some(items_discount_total) = update.items_discount_total {
            self.items_discount_total = Some(items_discount_total);
        }
        if let Some(coupon_discount_total) = update.coupon_discount_total {
            self.coupon_discount_total = Some(coupon_discount_total);
        }
        if let Some(address) = update.address {
            self.address = Some(address);
        }
        if let Some(order_id) = update.order_id {
            self.order_id = Some(order_id);
        }
    }
}

/// A partial update to [`OrderDraft`].
///
/// Mirror of the draft with every field optional; build one with struct
/// update syntax from `OrderDraftUpdate::default()`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrderDraftUpdate {
    /// New items total, if this step computed one.
    pub items_total: Option<Decimal>,
    /// New items discount total, if this step computed one.
    pub items_discount_total: Option<Decimal>,
    /// New coupon discount, if this step applied one.
    pub coupon_discount_total: Option<Decimal>,
    /// Newly selected address.
    pub address: Option<Address>,
    /// Newly assigned order ID.
    pub order_id: Option<OrderId>,
}
