//! Customer profile payload returned to the frontend.
//!
//! Field names are the frontend's wire format. Absent values serialize as
//! `null`, never as missing keys.

use serde::{Deserialize, Serialize};

/// Flattened customer profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    /// Customer first name.
    pub first_name: Option<String>,
    /// Value of the `custom.profile_image` metafield.
    pub profile_image: Option<String>,
    /// Product referenced by the `custom.assigned_product` metafield.
    pub assigned_product: Option<AssignedProduct>,
}

/// Product assigned to a customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignedProduct {
    pub title: Option<String>,
    pub vendor: Option<String>,
    /// Online store URL. `None` when the product is not published.
    pub url: Option<String>,
    /// Featured image URL.
    pub image: Option<String>,
}
