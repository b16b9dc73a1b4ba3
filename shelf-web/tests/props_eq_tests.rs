use std::rc::Rc;

use shelf_engine::{Product, TileConfig};
use shelf_web::app::{Layout, ShelfGridProps};
use shelf_web::catalog::ShelfCatalog;
use shelf_web::components::flip_tile::FlipTileProps;
use shelf_web::components::product_tile::ProductTileProps;
use yew::Callback;

#[test]
fn tile_props_use_pointer_equality() {
    let product = Rc::new(Product::new("p", "P"));
    let twin = Rc::new(Product::new("p", "P"));
    let config = Rc::new(TileConfig::default());
    let on_add = Callback::noop();

    let a = ProductTileProps {
        product: Rc::clone(&product),
        config: Rc::clone(&config),
        on_add_to_cart: on_add.clone(),
    };
    let b = ProductTileProps {
        product: Rc::clone(&product),
        config: Rc::clone(&config),
        on_add_to_cart: on_add.clone(),
    };
    let c = ProductTileProps {
        product: twin,
        config: Rc::clone(&config),
        on_add_to_cart: on_add.clone(),
    };
    assert!(a == b);
    assert!(a != c, "equal-valued but distinct products must re-render");

    let flip_a = FlipTileProps {
        product: Rc::clone(&product),
        config: Rc::clone(&config),
        on_add_to_cart: on_add.clone(),
    };
    let flip_b = FlipTileProps {
        product,
        config: Rc::new(TileConfig::default()),
        on_add_to_cart: on_add,
    };
    assert!(flip_a == flip_a.clone());
    assert!(flip_a != flip_b);
}

#[test]
fn grid_props_compare_catalog_by_pointer_and_layout() {
    let catalog = Rc::new(ShelfCatalog {
        products: Vec::new(),
        config: Rc::new(TileConfig::default()),
    });
    let compact = ShelfGridProps {
        catalog: Rc::clone(&catalog),
        layout: Layout::Compact,
        on_add_to_cart: Callback::noop(),
    };
    let flip = ShelfGridProps {
        layout: Layout::Flip,
        ..compact.clone()
    };
    assert!(compact == compact.clone());
    assert!(compact != flip);
}
