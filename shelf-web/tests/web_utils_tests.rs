use shelf_engine::CatalogLoader;
use shelf_web::catalog::WebCatalogLoader;
use shelf_web::styles::{STYLE_ELEMENT_ID, tile_css};

#[test]
fn bundled_loader_exposes_products_and_config() {
    let loader = WebCatalogLoader::default();
    let products = loader.load_products().expect("products");
    assert!(products.iter().any(|p| p.available == Some(false)));
    assert!(products.iter().any(|p| p.variants.is_empty()));
    let config = loader.load_config().expect("config").expect("bundled config");
    assert_eq!(config.star_slots, 5);
}

#[test]
fn stylesheet_is_keyed_by_stable_id() {
    assert_eq!(STYLE_ELEMENT_ID, "shelf-tile-styles");
    assert!(tile_css().contains(".shelf-flip__face--back"));
}
