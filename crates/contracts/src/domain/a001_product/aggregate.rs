use crate::shared::serde_helpers::{null_as_default, null_as_true};
use serde::{Deserialize, Serialize};

fn default_active() -> bool {
    true
}

/// Catalog product. Field names follow the backend's PascalCase columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "SKU")]
    pub sku: String,

    #[serde(rename = "Name", default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(rename = "Description", default, deserialize_with = "null_as_default")]
    pub description: String,

    #[serde(
        rename = "IsActive",
        default = "default_active",
        deserialize_with = "null_as_true"
    )]
    pub is_active: bool,
}

/// Text columns that can be edited in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductField {
    Name,
    Description,
}

impl ProductField {
    pub fn label(&self) -> &'static str {
        match self {
            ProductField::Name => "Name",
            ProductField::Description => "Description",
        }
    }
}

impl Product {
    pub fn new(
        sku: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        is_active: bool,
    ) -> Self {
        Self {
            sku: sku.into(),
            name: name.into(),
            description: description.into(),
            is_active,
        }
    }

    pub fn field(&self, field: ProductField) -> &str {
        match field {
            ProductField::Name => &self.name,
            ProductField::Description => &self.description,
        }
    }

    /// Full record with a single text field overwritten, as sent to `/update_by_sku`.
    pub fn with_field(&self, field: ProductField, value: impl Into<String>) -> Self {
        let mut updated = self.clone();
        match field {
            ProductField::Name => updated.name = value.into(),
            ProductField::Description => updated.description = value.into(),
        }
        updated
    }
}

/// Response of `/get_all_products` and every `/get_by_*` query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductListResponse {
    pub success: bool,
    #[serde(default)]
    pub products: Option<Vec<Product>>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Body of `/delete_by_sku`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkuRequest {
    #[serde(rename = "SKU")]
    pub sku: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_wire_names() {
        let product = Product::new("A-1", "Widget", "Blue widget", false);
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["SKU"], "A-1");
        assert_eq!(json["Name"], "Widget");
        assert_eq!(json["Description"], "Blue widget");
        assert_eq!(json["IsActive"], false);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let product: Product = serde_json::from_str(r#"{"SKU":"B-2"}"#).unwrap();
        assert_eq!(product.name, "");
        assert_eq!(product.description, "");
        assert!(product.is_active);
    }

    #[test]
    fn test_null_columns_do_not_drop_the_list() {
        let resp: ProductListResponse = serde_json::from_str(
            r#"{"success":true,"products":[
                {"SKU":"A","Name":"x","Description":null,"IsActive":true},
                {"SKU":"B","Name":null,"Description":"y","IsActive":null}
            ]}"#,
        )
        .unwrap();
        let products = resp.products.unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0], Product::new("A", "x", "", true));
        assert_eq!(products[1], Product::new("B", "", "y", true));
    }

    #[test]
    fn test_with_field_keeps_other_columns() {
        let product = Product::new("A-1", "Widget", "Blue widget", false);
        let updated = product.with_field(ProductField::Description, "Red widget");
        assert_eq!(updated.sku, "A-1");
        assert_eq!(updated.name, "Widget");
        assert_eq!(updated.description, "Red widget");
        assert!(!updated.is_active);
    }
}
