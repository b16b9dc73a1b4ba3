use std::fs;
use std::path::{Path, PathBuf};

use shelf_engine::{CatalogLoader, Product, ProductError, TileConfig};
use thiserror::Error;

use crate::common::scenario::fixtures::default_products;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Products(#[from] ProductError),
    #[error("tile config is invalid: {0}")]
    Config(#[from] serde_json::Error),
}

/// Reads the product listing and tile tuning from disk.
///
/// Without a catalog path the built-in fixture products are used; without a
/// config path the engine defaults apply.
#[derive(Debug, Clone, Default)]
pub struct FileCatalogLoader {
    catalog: Option<PathBuf>,
    config: Option<PathBuf>,
}

impl FileCatalogLoader {
    pub const fn new(catalog: Option<PathBuf>, config: Option<PathBuf>) -> Self {
        Self { catalog, config }
    }
}

impl CatalogLoader for FileCatalogLoader {
    type Error = LoaderError;

    fn load_products(&self) -> Result<Vec<Product>, Self::Error> {
        match &self.catalog {
            Some(path) => Ok(Product::list_from_json(&read(path)?)?),
            None => Ok(default_products()),
        }
    }

    fn load_config(&self) -> Result<Option<TileConfig>, Self::Error> {
        self.config
            .as_deref()
            .map(|path| Ok(TileConfig::from_json(&read(path)?)?))
            .transpose()
    }
}

fn read(path: &Path) -> Result<String, LoaderError> {
    log::debug!("reading {}", path.display());
    fs::read_to_string(path).map_err(|source| LoaderError::Io {
        path: path.to_path_buf(),
        source,
    })
}
