//! Product data model supplied by the listing page.
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Identifier used for the synthesized variant of products without variants.
pub const DEFAULT_VARIANT_ID: &str = "default";

/// Star rating summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
pub struct Rating {
    #[serde(default)]
    pub rate: f64,
    #[serde(default)]
    pub count: u64,
}

/// A selectable sub-option of a product (size, colour, ...).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Variant {
    #[serde(deserialize_with = "id_from_scalar")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Absent means available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
}

impl Variant {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            available: None,
        }
    }

    #[must_use]
    pub const fn with_available(mut self, available: bool) -> Self {
        self.available = Some(available);
        self
    }

    /// Whether the variant carries an explicit `available: false`.
    #[must_use]
    pub const fn is_marked_unavailable(&self) -> bool {
        matches!(self.available, Some(false))
    }
}

/// Immutable product input for one tile.
///
/// Every optional field decodes to a safe default so a sparse listing payload
/// never fails the tile.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Product {
    #[serde(deserialize_with = "id_from_scalar")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default, alias = "priceMin")]
    pub price_min: Option<f64>,
    #[serde(default, alias = "priceMax")]
    pub price_max: Option<f64>,
    #[serde(default)]
    pub rating: Option<Rating>,
    /// Tri-state: `None` counts as available.
    #[serde(default)]
    pub available: Option<bool>,
    #[serde(default, deserialize_with = "variants_or_empty")]
    pub variants: Vec<Variant>,
    /// Caption shown instead of a picker when the product has no variants.
    #[serde(default, alias = "variantLabel")]
    pub variant_label: Option<String>,
}

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("product JSON could not be decoded: {0}")]
    Json(#[from] serde_json::Error),
    #[error("product is missing an id")]
    MissingId,
    #[error("product {product} lists variant id {variant} more than once")]
    DuplicateVariant { product: String, variant: String },
}

impl Product {
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Decode a single product.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the product fails [`Product::validate`].
    pub fn from_json(json: &str) -> Result<Self, ProductError> {
        let product: Self = serde_json::from_str(json)?;
        product.validate()?;
        Ok(product)
    }

    /// Decode a listing of products.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or any product fails validation.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>, ProductError> {
        let products: Vec<Self> = serde_json::from_str(json)?;
        for product in &products {
            product.validate()?;
        }
        Ok(products)
    }

    /// Structural checks the selection invariant depends on.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty id or duplicate variant ids.
    pub fn validate(&self) -> Result<(), ProductError> {
        if self.id.is_empty() {
            return Err(ProductError::MissingId);
        }
        for (idx, variant) in self.variants.iter().enumerate() {
            if self.variants[..idx].iter().any(|v| v.id == variant.id) {
                return Err(ProductError::DuplicateVariant {
                    product: self.id.clone(),
                    variant: variant.id.clone(),
                });
            }
        }
        Ok(())
    }

    #[must_use]
    pub const fn has_variants(&self) -> bool {
        !self.variants.is_empty()
    }

    #[must_use]
    pub fn find_variant(&self, variant_id: &str) -> Option<&Variant> {
        self.variants.iter().find(|v| v.id == variant_id)
    }

    /// Rating with missing data treated as zero.
    #[must_use]
    pub fn rating_or_default(&self) -> Rating {
        self.rating.unwrap_or_default()
    }

    /// Product-level availability flag; absent means available.
    #[must_use]
    pub const fn listed_available(&self) -> bool {
        !matches!(self.available, Some(false))
    }
}

fn id_from_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Text(s) => s,
        Scalar::Int(n) => n.to_string(),
        Scalar::Float(f) => f.to_string(),
    })
}

fn variants_or_empty<'de, D>(deserializer: D) -> Result<Vec<Variant>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Variant>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_payload_decodes_with_defaults() {
        let product = Product::from_json(r#"{"id": 7, "title": "Mug"}"#).unwrap();
        assert_eq!(product.id, "7");
        assert!(product.variants.is_empty());
        assert!(product.listed_available());
        assert_eq!(product.rating_or_default(), Rating::default());
        assert!(product.description.is_none());
    }

    #[test]
    fn camel_case_fields_are_accepted() {
        let product = Product::from_json(
            r#"{"id":"p1","priceMin":5,"priceMax":9.5,"variantLabel":"One size","variants":null}"#,
        )
        .unwrap();
        assert_eq!(product.price_min, Some(5.0));
        assert_eq!(product.price_max, Some(9.5));
        assert_eq!(product.variant_label.as_deref(), Some("One size"));
        assert!(!product.has_variants());
    }

    #[test]
    fn explicit_false_marks_product_unavailable() {
        let product = Product::from_json(r#"{"id":"p","available":false}"#).unwrap();
        assert!(!product.listed_available());
    }

    #[test]
    fn duplicate_variant_ids_are_rejected() {
        let err = Product::from_json(
            r#"{"id":"p","variants":[{"id":"a","name":"A"},{"id":"a","name":"A2"}]}"#,
        )
        .expect_err("duplicate ids");
        assert!(matches!(err, ProductError::DuplicateVariant { .. }));
    }

    #[test]
    fn empty_id_is_rejected() {
        let err = Product::from_json(r#"{"id":""}"#).expect_err("empty id");
        assert!(matches!(err, ProductError::MissingId));
    }

    #[test]
    fn list_decodes_numeric_variant_ids() {
        let list = Product::list_from_json(
            r#"[{"id":1,"variants":[{"id":10,"name":"S","available":false}]}]"#,
        )
        .unwrap();
        assert_eq!(list[0].variants[0].id, "10");
        assert!(list[0].variants[0].is_marked_unavailable());
    }
}
