//! Text and count values rendered by every tile adapter.
use crate::product::{Product, Rating};

pub const SELECT_VARIANT_CAPTION: &str = "Select variant";
pub const DEFAULT_VARIANT_CAPTION: &str = "Default";
pub const MISSING_DESCRIPTION: &str = "Product description not available.";
pub const ADD_TO_CART_LABEL: &str = "Add to Cart";
pub const OUT_OF_STOCK_LABEL: &str = "Out of Stock";

/// `"$min - $max"` when both range bounds are set and non-zero, otherwise `"$price"`.
#[must_use]
pub fn price_label(product: &Product) -> String {
    match (nonzero(product.price_min), nonzero(product.price_max)) {
        (Some(min), Some(max)) => format!("${min} - ${max}"),
        _ => format!("${}", product.price.unwrap_or(0.0)),
    }
}

fn nonzero(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

/// Rounded star count clamped to `[0, slots]`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn star_count(rating: Rating, slots: u8) -> u8 {
    if !rating.rate.is_finite() {
        return 0;
    }
    rating.rate.round().clamp(0.0, f64::from(slots)) as u8
}

/// Fill flag for each star slot, left to right.
#[must_use]
pub fn star_fills(rating: Rating, slots: u8) -> Vec<bool> {
    let filled = star_count(rating, slots);
    (0..slots).map(|slot| slot < filled).collect()
}

/// Review count, abbreviated to thousands with one decimal above `threshold`.
///
/// Halves round up (1250 is "1.3K").
#[must_use]
pub fn review_count_label(count: u64, threshold: u64) -> String {
    if count > threshold {
        let tenths = count.saturating_add(50) / 100;
        format!("{}.{}K", tenths / 10, tenths % 10)
    } else {
        count.to_string()
    }
}

#[must_use]
pub fn description_or_fallback(product: &Product) -> &str {
    product
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .unwrap_or(MISSING_DESCRIPTION)
}

#[must_use]
pub const fn purchase_label(purchasable: bool) -> &'static str {
    if purchasable {
        ADD_TO_CART_LABEL
    } else {
        OUT_OF_STOCK_LABEL
    }
}

/// Caption for products without variants.
#[must_use]
pub fn variant_label_or_default(product: &Product) -> &str {
    product
        .variant_label
        .as_deref()
        .filter(|l| !l.is_empty())
        .unwrap_or(DEFAULT_VARIANT_CAPTION)
}
