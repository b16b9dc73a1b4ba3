//! Variant selection shared by the compact and expanded views of one tile.
use crate::availability::picker_locked;
use crate::display::variant_label_or_default;
use crate::product::{DEFAULT_VARIANT_ID, Product, Variant};
use serde::Serialize;
use thiserror::Error;

/// Why a selection request left the state unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionRejected {
    #[error("variant picker is locked because the product is unavailable")]
    Locked,
    #[error("variant {0} does not belong to this product")]
    UnknownVariant(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Changed,
    Unchanged,
}

/// The variant the tile currently shows, concrete or synthesized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedVariant {
    pub id: String,
    pub name: String,
    pub available: bool,
    /// True for the single pseudo-variant of a product without variants.
    pub synthesized: bool,
}

/// Active variant id for one tile.
///
/// The id always names one of the product's variants, or [`DEFAULT_VARIANT_ID`]
/// when the product has none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantSelection {
    selected_id: String,
}

impl VariantSelection {
    #[must_use]
    pub fn initialize(product: &Product) -> Self {
        let selected_id = product
            .variants
            .first()
            .map_or_else(|| DEFAULT_VARIANT_ID.to_string(), |v| v.id.clone());
        Self { selected_id }
    }

    #[must_use]
    pub fn selected_id(&self) -> &str {
        &self.selected_id
    }

    /// The concrete selected variant; `None` for products without variants.
    #[must_use]
    pub fn selected_variant<'a>(&self, product: &'a Product) -> Option<&'a Variant> {
        product.find_variant(&self.selected_id)
    }

    #[must_use]
    pub fn resolved(&self, product: &Product) -> ResolvedVariant {
        self.selected_variant(product).map_or_else(
            || ResolvedVariant {
                id: DEFAULT_VARIANT_ID.to_string(),
                name: variant_label_or_default(product).to_string(),
                available: product.listed_available(),
                synthesized: true,
            },
            |variant| ResolvedVariant {
                id: variant.id.clone(),
                name: variant.name.clone(),
                available: !variant.is_marked_unavailable(),
                synthesized: false,
            },
        )
    }

    /// Make `variant_id` the active variant.
    ///
    /// # Errors
    ///
    /// Rejects the request, leaving the selection untouched, when the picker is
    /// locked or the id is not one of the product's variants.
    pub fn select(
        &mut self,
        product: &Product,
        variant_id: &str,
    ) -> Result<SelectOutcome, SelectionRejected> {
        if picker_locked(product) {
            return Err(SelectionRejected::Locked);
        }
        let known = if product.has_variants() {
            product.find_variant(variant_id).is_some()
        } else {
            variant_id == DEFAULT_VARIANT_ID
        };
        if !known {
            return Err(SelectionRejected::UnknownVariant(variant_id.to_string()));
        }
        if self.selected_id == variant_id {
            return Ok(SelectOutcome::Unchanged);
        }
        variant_id.clone_into(&mut self.selected_id);
        Ok(SelectOutcome::Changed)
    }

    /// Return to the first variant.
    pub fn reset(&mut self, product: &Product) {
        *self = Self::initialize(product);
    }
}
