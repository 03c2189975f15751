//! Type conversion functions from GraphQL responses to domain types.

use profile_proxy_core::{AssignedProduct, UserData};

use super::queries::get_customer::{
    GetCustomerCustomer, GetCustomerCustomerAssignedProduct,
    GetCustomerCustomerAssignedProductReference,
};

/// Convert a customer response into the frontend profile payload.
pub fn convert_customer(customer: GetCustomerCustomer) -> UserData {
    UserData {
        first_name: customer.first_name,
        profile_image: customer.metafield.and_then(|m| m.value),
        assigned_product: customer.assigned_product.and_then(convert_assigned_product),
    }
}

/// A reference that is not a product still yields an object, with every field empty.
fn convert_assigned_product(
    metafield: GetCustomerCustomerAssignedProduct,
) -> Option<AssignedProduct> {
    match metafield.reference? {
        GetCustomerCustomerAssignedProductReference::Product(product) => Some(AssignedProduct {
            title: product.title,
            vendor: product.vendor,
            url: product.online_store_url,
            image: product.featured_image.and_then(|image| image.url),
        }),
        GetCustomerCustomerAssignedProductReference::Other => Some(AssignedProduct::default()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    fn customer(value: Value) -> GetCustomerCustomer {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_first_name_only() {
        let data = convert_customer(customer(json!({ "firstName": "Ada" })));

        assert_eq!(
            data,
            UserData {
                first_name: Some("Ada".to_string()),
                profile_image: None,
                assigned_product: None,
            }
        );
    }

    #[test]
    fn test_null_metafields() {
        let data = convert_customer(customer(json!({
            "firstName": null,
            "metafield": null,
            "assignedProduct": null,
        })));

        assert_eq!(data, UserData::default());
    }

    #[test]
    fn test_profile_image() {
        let data = convert_customer(customer(json!({
            "firstName": "Ada",
            "metafield": { "value": "https://cdn.shopify.com/ada.png" },
        })));

        assert_eq!(
            data.profile_image.as_deref(),
            Some("https://cdn.shopify.com/ada.png")
        );
    }

    #[test]
    fn test_metafield_without_reference() {
        let data = convert_customer(customer(json!({
            "firstName": "Ada",
            "assignedProduct": { "reference": null },
        })));

        assert!(data.assigned_product.is_none());
    }

    #[test]
    fn test_full_product() {
        let data = convert_customer(customer(json!({
            "firstName": "Ada",
            "assignedProduct": {
                "reference": {
                    "__typename": "Product",
                    "title": "Pineapple Tee",
                    "vendor": "Naked Pineapple",
                    "onlineStoreUrl": "https://shop.example.com/products/tee",
                    "featuredImage": { "url": "https://cdn.shopify.com/tee.png" }
                }
            }
        })));

        assert_eq!(
            data.assigned_product,
            Some(AssignedProduct {
                title: Some("Pineapple Tee".to_string()),
                vendor: Some("Naked Pineapple".to_string()),
                url: Some("https://shop.example.com/products/tee".to_string()),
                image: Some("https://cdn.shopify.com/tee.png".to_string()),
            })
        );
    }

    #[test]
    fn test_unpublished_product_without_image() {
        let data = convert_customer(customer(json!({
            "assignedProduct": {
                "reference": {
                    "__typename": "Product",
                    "title": "Draft Tee",
                    "vendor": "Naked Pineapple",
                    "onlineStoreUrl": null,
                    "featuredImage": null
                }
            }
        })));

        let product = data.assigned_product.unwrap();
        assert_eq!(product.title.as_deref(), Some("Draft Tee"));
        assert!(product.url.is_none());
        assert!(product.image.is_none());
    }

    #[test]
    fn test_non_product_reference() {
        let data = convert_customer(customer(json!({
            "assignedProduct": { "reference": { "__typename": "Collection" } }
        })));

        assert_eq!(data.assigned_product, Some(AssignedProduct::default()));
    }
}
