//! Add-to-cart requests handed to the host's cart callback.
use crate::product::Variant;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

/// Positive purchase quantity; defaults to one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Quantity(NonZeroU32);

impl Quantity {
    pub const ONE: Self = Self(NonZeroU32::MIN);

    /// `None` for zero.
    #[must_use]
    pub const fn new(value: u32) -> Option<Self> {
        match NonZeroU32::new(value) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything the cart service needs for one add.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddToCart {
    pub product_id: String,
    pub quantity: Quantity,
    /// The concrete selected variant; `None` for products without variants.
    pub variant: Option<Variant>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_rejects_zero() {
        assert!(Quantity::new(0).is_none());
        assert_eq!(Quantity::new(3).map(Quantity::get), Some(3));
        assert_eq!(Quantity::default(), Quantity::ONE);
        assert_eq!(Quantity::ONE.to_string(), "1");
    }

    #[test]
    fn quantity_deserializes_from_plain_number() {
        let q: Quantity = serde_json::from_str("4").unwrap();
        assert_eq!(q.get(), 4);
        assert!(serde_json::from_str::<Quantity>("0").is_err());
    }
}
