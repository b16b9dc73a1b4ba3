pub mod flip_tile;
pub mod product_tile;
pub mod quick_look;
pub mod star_rating;
pub mod variant_picker;

pub use flip_tile::FlipTile;
pub use product_tile::ProductTile;
pub use quick_look::QuickLook;
pub use star_rating::StarRating;
pub use variant_picker::VariantPicker;

use shelf_engine::{AddToCart, Product, Quantity, Variant};
use std::rc::Rc;
use yew::Callback;

/// Host cart hook: `(product, quantity, selected variant)`.
pub type AddToCartCallback = Callback<(Rc<Product>, Quantity, Option<Variant>)>;

/// Forward an engine add-to-cart request to the host.
pub(crate) fn emit_add_to_cart(
    callback: &AddToCartCallback,
    product: &Rc<Product>,
    request: Option<AddToCart>,
) {
    match request {
        Some(request) => {
            log::info!(
                "add to cart: product={} quantity={} variant={:?}",
                request.product_id,
                request.quantity,
                request.variant.as_ref().map(|v| v.id.as_str())
            );
            callback.emit((Rc::clone(product), request.quantity, request.variant));
        }
        None => log::debug!("add to cart ignored: product {} is not purchasable", product.id),
    }
}
