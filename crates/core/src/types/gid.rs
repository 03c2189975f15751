//! Shopify global ID for customers.

use core::fmt;

use serde::Serialize;

/// Errors that can occur when building a [`CustomerGid`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GidError {
    /// The customer identifier is empty.
    #[error("customer id cannot be empty")]
    Empty,
}

/// A Shopify customer global ID (`gid://shopify/Customer/<id>`).
///
/// The numeric suffix is taken as supplied by the caller. Only presence is
/// checked; Shopify rejects malformed suffixes itself.
///
/// ## Examples
///
/// ```
/// use profile_proxy_core::CustomerGid;
///
/// let gid = CustomerGid::from_customer_id("7012345678").unwrap();
/// assert_eq!(gid.as_str(), "gid://shopify/Customer/7012345678");
/// assert_eq!(gid.customer_id(), "7012345678");
///
/// assert!(CustomerGid::from_customer_id("").is_err());
/// ```
///
/// Only [`CustomerGid::from_customer_id`] constructs one; it cannot be
/// deserialized from arbitrary input:
///
/// ```compile_fail
/// use profile_proxy_core::CustomerGid;
///
/// let gid: CustomerGid = serde_json::from_str("\"\"").unwrap();
/// ```
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct CustomerGid(String);

impl CustomerGid {
    /// Prefix shared by every customer global ID.
    pub const PREFIX: &'static str = "gid://shopify/Customer/";

    /// Build a global ID from the customer's numeric identifier.
    ///
    /// # Errors
    ///
    /// Returns [`GidError::Empty`] if `customer_id` is empty.
    pub fn from_customer_id(customer_id: &str) -> Result<Self, GidError> {
        if customer_id.is_empty() {
            return Err(GidError::Empty);
        }

        Ok(Self(format!("{}{customer_id}", Self::PREFIX)))
    }

    /// Returns the full global ID.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the customer identifier suffix.
    #[must_use]
    pub fn customer_id(&self) -> &str {
        self.0.strip_prefix(Self::PREFIX).unwrap_or(&self.0)
    }

    /// Consumes the `CustomerGid` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CustomerGid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CustomerGid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
