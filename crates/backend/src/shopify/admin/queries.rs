//! GraphQL query definitions for Shopify Admin API.
//!
//! Queries are written out in the shape `#[derive(GraphQLQuery)]` generates
//! (a module holding `QUERY`, `Variables` and `ResponseData`), so the crate
//! builds without the Admin schema on disk. Query text lives in
//! `graphql/admin/queries/`.

use graphql_client::{GraphQLQuery, QueryBody};

// =============================================================================
// Custom scalar type aliases
// =============================================================================

/// Opaque global ID.
#[allow(clippy::upper_case_acronyms)]
type ID = String;

/// URL string.
#[allow(clippy::upper_case_acronyms)]
type URL = String;

// =============================================================================
// Customer queries
// =============================================================================

/// Customer name, profile image metafield, and assigned product reference.
pub struct GetCustomer;

pub mod get_customer {
    use serde::{Deserialize, Serialize};

    use super::{ID, URL};

    pub const OPERATION_NAME: &str = "GetCustomer";
    pub const QUERY: &str = include_str!("../../../graphql/admin/queries/customer.graphql");

    #[derive(Debug, Clone, Serialize)]
    pub struct Variables {
        pub id: ID,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ResponseData {
        pub customer: Option<GetCustomerCustomer>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct GetCustomerCustomer {
        #[serde(rename = "firstName")]
        pub first_name: Option<String>,
        pub metafield: Option<GetCustomerCustomerMetafield>,
        #[serde(rename = "assignedProduct")]
        pub assigned_product: Option<GetCustomerCustomerAssignedProduct>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct GetCustomerCustomerMetafield {
        pub value: Option<String>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct GetCustomerCustomerAssignedProduct {
        pub reference: Option<GetCustomerCustomerAssignedProductReference>,
    }

    /// `MetafieldReference` union, discriminated by `__typename`.
    #[derive(Debug, Clone, Deserialize)]
    #[serde(tag = "__typename")]
    pub enum GetCustomerCustomerAssignedProductReference {
        Product(GetCustomerCustomerAssignedProductReferenceOnProduct),
        #[serde(other)]
        Other,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct GetCustomerCustomerAssignedProductReferenceOnProduct {
        pub title: Option<String>,
        pub vendor: Option<String>,
        #[serde(rename = "onlineStoreUrl")]
        pub online_store_url: Option<URL>,
        #[serde(rename = "featuredImage")]
        pub featured_image: Option<GetCustomerCustomerAssignedProductReferenceOnProductFeaturedImage>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct GetCustomerCustomerAssignedProductReferenceOnProductFeaturedImage {
        pub url: Option<URL>,
    }
}

impl GraphQLQuery for GetCustomer {
    type Variables = get_customer::Variables;
    type ResponseData = get_customer::ResponseData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: get_customer::QUERY,
            operation_name: get_customer::OPERATION_NAME,
        }
    }
}
