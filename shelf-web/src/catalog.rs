//! Bundled product listing and tile tuning for the demo shelf.
use once_cell::sync::Lazy;
use shelf_engine::{CatalogLoader, Product, ProductError, Shelf, TileConfig};
use std::rc::Rc;
use thiserror::Error;

const PRODUCTS_JSON: &str = include_str!("../static/data/products.json");
const TILE_CONFIG_JSON: &str = include_str!("../static/data/tile.json");

static BUNDLED_CONFIG: Lazy<Option<TileConfig>> = Lazy::new(|| {
    TileConfig::from_json(TILE_CONFIG_JSON)
        .map_err(|err| log::error!("Bundled tile config is invalid, using defaults: {err}"))
        .ok()
});

#[derive(Debug, Error)]
pub enum WebCatalogError {
    #[error("product listing could not be decoded: {0}")]
    Products(#[from] ProductError),
    #[error("tile config could not be decoded: {0}")]
    Config(#[from] serde_json::Error),
}

/// Where a [`WebCatalogLoader`] reads its documents from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    Bundled,
    Inline {
        products_json: &'static str,
        config_json: Option<&'static str>,
    },
}

/// Loads products and config from JSON documents, by default the ones bundled into
/// the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WebCatalogLoader {
    source: Source,
}

impl Default for WebCatalogLoader {
    fn default() -> Self {
        Self::bundled()
    }
}

impl WebCatalogLoader {
    #[must_use]
    pub const fn bundled() -> Self {
        Self {
            source: Source::Bundled,
        }
    }

    #[must_use]
    pub const fn from_static(products_json: &'static str, config_json: Option<&'static str>) -> Self {
        Self {
            source: Source::Inline {
                products_json,
                config_json,
            },
        }
    }
}

impl CatalogLoader for WebCatalogLoader {
    type Error = WebCatalogError;

    fn load_products(&self) -> Result<Vec<Product>, Self::Error> {
        let json = match self.source {
            Source::Bundled => PRODUCTS_JSON,
            Source::Inline { products_json, .. } => products_json,
        };
        Ok(Product::list_from_json(json)?)
    }

    fn load_config(&self) -> Result<Option<TileConfig>, Self::Error> {
        match self.source {
            // Parsed once per page; a broken bundle already logged and falls back.
            Source::Bundled => Ok(BUNDLED_CONFIG.clone()),
            Source::Inline {
                config_json: Some(json),
                ..
            } => Ok(Some(TileConfig::from_json(json)?)),
            Source::Inline {
                config_json: None, ..
            } => Ok(None),
        }
    }
}

/// Products and shared config ready to hand to tile components.
#[derive(Debug, Clone, PartialEq)]
pub struct ShelfCatalog {
    pub products: Vec<Rc<Product>>,
    pub config: Rc<TileConfig>,
}

impl ShelfCatalog {
    /// # Errors
    ///
    /// Returns an error if the loader cannot decode its documents.
    pub fn load<L: CatalogLoader>(loader: L) -> Result<Self, L::Error> {
        let shelf = Shelf::new(loader);
        let config = Rc::new(shelf.config()?);
        let products = shelf
            .tiles()?
            .into_iter()
            .map(|tile| Rc::clone(tile.product()))
            .collect();
        Ok(Self { products, config })
    }

    /// The bundled catalog, or an empty shelf with default tuning when it fails to load.
    #[must_use]
    pub fn bundled_or_empty() -> Self {
        Self::load(WebCatalogLoader::bundled()).unwrap_or_else(|err| {
            log::error!("{err}");
            Self {
                products: Vec::new(),
                config: Rc::new(TileConfig::default()),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalog_decodes() {
        let catalog = ShelfCatalog::load(WebCatalogLoader::bundled()).unwrap();
        assert_eq!(catalog.products.len(), 4);
        assert_eq!(catalog.products[0].id, "1");
        assert!((catalog.config.max_tilt_deg - 10.0).abs() < f64::EPSILON);
        assert!(catalog.config.compact_placeholder.contains("220x140"));
    }

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let loader = WebCatalogLoader::from_static(r#"[{"id":"x","title":"X"}]"#, None);
        let catalog = ShelfCatalog::load(loader).unwrap();
        assert_eq!(*catalog.config, TileConfig::default());
        assert!(catalog.products[0].variants.is_empty());
    }

    #[test]
    fn malformed_listing_is_an_error() {
        let loader = WebCatalogLoader::from_static("{not json", None);
        assert!(matches!(
            ShelfCatalog::load(loader),
            Err(WebCatalogError::Products(_))
        ));
        let loader = WebCatalogLoader::from_static("[]", Some("[1,2]"));
        assert!(matches!(
            ShelfCatalog::load(loader),
            Err(WebCatalogError::Config(_))
        ));
    }
}
