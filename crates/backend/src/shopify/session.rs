//! Offline Admin API session.

use secrecy::{ExposeSecret, SecretString};

use super::AdminShopifyError;
use crate::config::ShopifyAdminConfig;

const MYSHOPIFY_SUFFIX: &str = ".myshopify.com";

/// Authentication context for Admin API calls.
///
/// Offline sessions belong to the app installation rather than a logged-in
/// staff member, so they carry no user and no expiry.
#[derive(Clone)]
pub struct Session {
    id: String,
    shop: String,
    state: String,
    is_online: bool,
    access_token: SecretString,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("shop", &self.shop)
            .field("state", &self.state)
            .field("is_online", &self.is_online)
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

impl Session {
    /// Build an offline session for the configured store.
    ///
    /// A bare store name is expanded to its `myshopify.com` domain.
    ///
    /// # Errors
    ///
    /// Returns `AdminShopifyError::InvalidSession` if the shop is blank or
    /// the access token is empty.
    pub fn offline(config: &ShopifyAdminConfig) -> Result<Self, AdminShopifyError> {
        let shop = normalize_shop_domain(&config.shop)?;

        if config.admin_access_token.expose_secret().is_empty() {
            return Err(AdminShopifyError::InvalidSession(
                "access token is empty".to_string(),
            ));
        }

        Ok(Self {
            id: format!("offline_{shop}"),
            shop,
            state: "state".to_string(),
            is_online: false,
            access_token: config.admin_access_token.clone(),
        })
    }

    /// Session identifier (`offline_<shop>`).
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Shop domain (e.g., `your-store.myshopify.com`).
    #[must_use]
    pub fn shop(&self) -> &str {
        &self.shop
    }

    /// Whether this is an online (per-user) session.
    #[must_use]
    pub const fn is_online(&self) -> bool {
        self.is_online
    }

    pub(crate) fn access_token(&self) -> &str {
        self.access_token.expose_secret()
    }
}

fn normalize_shop_domain(shop: &str) -> Result<String, AdminShopifyError> {
    let shop = shop
        .trim()
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_end_matches('/');

    if shop.is_empty() {
        return Err(AdminShopifyError::InvalidSession("shop is empty".to_string()));
    }

    if shop.contains('.') {
        Ok(shop.to_lowercase())
    } else {
        Ok(format!("{}{MYSHOPIFY_SUFFIX}", shop.to_lowercase()))
    }
}
