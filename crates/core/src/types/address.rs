//! Shipping addresses.

use serde::{Deserialize, Serialize};

use super::id::AddressId;

/// A saved shipping address.
///
/// Field names follow the backend's `addressList` entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Server-issued address ID.
    #[serde(rename = "_id")]
    pub id: AddressId,
    /// Recipient name.
    pub name: String,
    /// Street line.
    pub street: String,
    /// City.
    pub city: String,
    /// State or province.
    pub state: String,
    /// Postal code.
    #[serde(rename = "zipcode")]
    pub zip_code: String,
    /// Contact phone number.
    #[serde(rename = "mobile")]
    pub phone: String,
}
