//! Shelf Tile Engine
//!
//! Platform-agnostic interaction state for storefront product tiles: variant
//! selection and availability, overlay visibility, and pointer-driven geometry.
//! This crate has no UI or platform-specific dependencies.

pub mod availability;
pub mod cart;
pub mod config;
pub mod display;
pub mod geometry;
pub mod overlay;
pub mod product;
pub mod selection;
pub mod tile;

use std::rc::Rc;

// Re-export commonly used types
pub use availability::{Availability, is_available, picker_locked};
pub use cart::{AddToCart, Quantity};
pub use config::TileConfig;
pub use display::{price_label, review_count_label, star_count, star_fills};
pub use geometry::{
    CardTransform, MagnifierParams, MagnifierState, MagnifierView, Point, Rect, Size, TiltAngles,
    TiltTracker, tilt,
};
pub use overlay::{DropdownSurface, Face, HoverState, Overlay, OverlayState, PointerHit};
pub use product::{DEFAULT_VARIANT_ID, Product, ProductError, Rating, Variant};
pub use selection::{ResolvedVariant, SelectOutcome, SelectionRejected, VariantSelection};
pub use tile::{
    CardChrome, ImageSlot, ImageSource, TileAction, TileState, TileView, Transition, VariantOption,
};

/// Trait for abstracting catalog loading operations
/// Platform-specific implementations should provide this
pub trait CatalogLoader {
    type Error: std::error::Error + 'static;

    /// Load the product listing
    ///
    /// # Errors
    ///
    /// Returns an error if the listing cannot be loaded or decoded.
    fn load_products(&self) -> Result<Vec<Product>, Self::Error>;

    /// Load tile tuning; `None` means use the defaults
    ///
    /// # Errors
    ///
    /// Returns an error if a config exists but cannot be parsed.
    fn load_config(&self) -> Result<Option<TileConfig>, Self::Error>;
}

/// Builds tile states for a whole listing from one loader
pub struct Shelf<L>
where
    L: CatalogLoader,
{
    loader: L,
}

impl<L> Shelf<L>
where
    L: CatalogLoader,
{
    pub const fn new(loader: L) -> Self {
        Self { loader }
    }

    /// Resolved tile config, falling back to defaults when none is provided
    ///
    /// # Errors
    ///
    /// Returns an error if the loader fails to parse a provided config.
    pub fn config(&self) -> Result<TileConfig, L::Error> {
        Ok(self.loader.load_config()?.unwrap_or_default())
    }

    /// One fresh tile per product, all sharing the same config
    ///
    /// # Errors
    ///
    /// Returns an error if the products or config cannot be loaded.
    pub fn tiles(&self) -> Result<Vec<TileState>, L::Error> {
        let config = Rc::new(self.config()?);
        Ok(self
            .loader
            .load_products()?
            .into_iter()
            .map(|product| TileState::new(Rc::new(product), Rc::clone(&config)))
            .collect())
    }
}
