pub mod loader;
pub mod reports;
pub mod tester;

pub use loader::FileCatalogLoader;
pub use tester::*;
