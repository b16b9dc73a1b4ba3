//! Listing card that tilts toward the pointer and flips to show details.
use super::product_tile::interactions::use_outside_dismiss;
use super::product_tile::{compact_picker, purchase_class};
use super::{AddToCartCallback, StarRating, emit_add_to_cart};
use crate::dom;
use crate::tile_store::use_tile;
use shelf_engine::{ImageSlot, Product, TileAction, TileConfig, TileView};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, Clone)]
pub struct FlipTileProps {
    pub product: Rc<Product>,
    pub config: Rc<TileConfig>,
    #[prop_or_default]
    pub on_add_to_cart: AddToCartCallback,
}

impl PartialEq for FlipTileProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.product, &other.product)
            && Rc::ptr_eq(&self.config, &other.config)
            && self.on_add_to_cart == other.on_add_to_cart
    }
}

#[function_component(FlipTile)]
pub fn flip_tile(p: &FlipTileProps) -> Html {
    let tile = use_tile(Rc::clone(&p.product), Rc::clone(&p.config));
    let compact_ref = use_node_ref();
    let host_ref = use_node_ref();
    let view = tile.view();
    use_effect_with((), |_| {
        crate::styles::ensure_installed();
    });

    // Flip cards have no expanded picker; its ref stays unmounted.
    use_outside_dismiss(
        compact_ref.clone(),
        NodeRef::default(),
        view.compact_dropdown_open,
        false,
        tile.dispatch.clone(),
    );

    let dispatch = &tile.dispatch;
    let on_move = {
        let dispatch = dispatch.clone();
        let host_ref = host_ref.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(rect) = dom::element_rect(&host_ref) {
                dispatch.emit(TileAction::TiltMove {
                    rect,
                    pointer: dom::client_point(&e),
                });
            }
        })
    };
    let on_leave = dispatch.reform(|_: MouseEvent| TileAction::TiltLeave);
    let on_flip = dispatch.reform(|_: MouseEvent| TileAction::ToggleFlip);
    let on_image_error = dispatch.reform(|_: Event| TileAction::ImageFailed(ImageSlot::Compact));
    let on_add = {
        let state = tile.state();
        let callback = p.on_add_to_cart.clone();
        Callback::from(move |_: MouseEvent| {
            emit_add_to_cart(&callback, state.product(), state.add_to_cart());
        })
    };
    let flip_label = if view.flipped { "Back" } else { "Details" };

    html! {
        <div ref={host_ref} class="shelf-tile shelf-flip-host position-relative" style="height:420px"
             onmousemove={on_move} onmouseleave={on_leave}>
            <div class={classes!("shelf-flip", "h-100", view.flipped.then_some("is-flipped"))}
                 style={flip_layer_style(&view)}>
                <div class="shelf-flip__tilt" style={tilt_layer_style(&view)}>
                    <div class="shelf-flip__face shelf-flip__face--front card p-3" aria-hidden={view.flipped.to_string()}>
                        <img src={view.compact_image_src.clone()} alt={view.title.clone()}
                             class="card-img-top bg-white" style="height:160px;object-fit:contain"
                             onerror={on_image_error} />
                        <h6 class="card-title fw-bold mt-2 mb-1">{ view.title.clone() }</h6>
                        <div class="fw-bold mb-2 fs-5">{ view.price_label.clone() }</div>
                        <StarRating stars={view.stars.clone()} review_label={view.review_label.clone()} />
                        { compact_picker(&view, dispatch, compact_ref) }
                        <button type="button" class="btn btn-link p-0 mb-2" aria-pressed={view.flipped.to_string()}
                                onclick={on_flip.clone()}>
                            { flip_label }
                        </button>
                        <button type="button" class={purchase_class(&view)}
                                disabled={!view.purchasable()} onclick={on_add.clone()}>
                            { view.purchase_label }
                        </button>
                    </div>
                    <div class="shelf-flip__face shelf-flip__face--back card p-3" aria-hidden={(!view.flipped).to_string()}>
                        <h6 class="fw-bold mb-2">{ view.title.clone() }</h6>
                        <p class="text-muted small">{ view.description.clone() }</p>
                        <div class="mb-2">{ format!("Selected: {}", view.selected.name) }</div>
                        <button type="button" class="btn btn-link p-0 mb-2" aria-pressed={view.flipped.to_string()}
                                onclick={on_flip}>
                            { flip_label }
                        </button>
                        <button type="button" class={purchase_class(&view)}
                                disabled={!view.purchasable()} onclick={on_add}>
                            { view.purchase_label }
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Outer layer: perspective and the eased flip rotation.
pub(crate) fn flip_layer_style(view: &TileView) -> String {
    format!("transform:{}", view.flip_transform_css)
}

/// Inner layer: pointer tilt, applied and reset without a transition.
pub(crate) fn tilt_layer_style(view: &TileView) -> String {
    format!("transform:{};transition:none", view.tilt_transform_css)
}
