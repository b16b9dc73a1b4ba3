//! Purchasability rules.
use crate::product::{Product, Variant};
use serde::Serialize;

/// Whether the unit (product plus selected variant) can be purchased.
///
/// An explicit `false` on the product wins; otherwise an explicit `false` on the
/// selected variant. Absent flags count as available.
#[must_use]
pub fn is_available(product: &Product, selected: Option<&Variant>) -> bool {
    if !product.listed_available() {
        return false;
    }
    !selected.is_some_and(Variant::is_marked_unavailable)
}

/// Whether the variant picker is frozen.
///
/// The lock is product-level only: an unavailable variant disables purchase but
/// leaves the picker open so the shopper can move to another option.
#[must_use]
pub const fn picker_locked(product: &Product) -> bool {
    !product.listed_available()
}

/// Both availability answers for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Availability {
    /// Gates the purchase action.
    pub purchasable: bool,
    /// Gates every variant-picker interaction.
    pub picker_locked: bool,
}

impl Availability {
    #[must_use]
    pub fn resolve(product: &Product, selected: Option<&Variant>) -> Self {
        Self {
            purchasable: is_available(product, selected),
            picker_locked: picker_locked(product),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(available: Option<bool>) -> Product {
        Product {
            available,
            variants: vec![
                Variant::new("a", "A").with_available(true),
                Variant::new("b", "B").with_available(false),
                Variant::new("c", "C"),
            ],
            ..Product::new("p", "Product")
        }
    }

    #[test]
    fn unavailable_product_blocks_every_selection() {
        let p = product(Some(false));
        assert!(!is_available(&p, None));
        for variant in &p.variants {
            assert!(!is_available(&p, Some(variant)));
        }
        assert!(picker_locked(&p));
    }

    #[test]
    fn absent_flags_default_to_available() {
        let p = product(None);
        assert!(is_available(&p, None));
        assert!(is_available(&p, p.find_variant("c")));
        assert!(!picker_locked(&p));
    }

    #[test]
    fn unavailable_variant_only_disables_purchase() {
        let p = product(Some(true));
        let resolved = Availability::resolve(&p, p.find_variant("b"));
        assert!(!resolved.purchasable);
        assert!(!resolved.picker_locked);
    }
}
