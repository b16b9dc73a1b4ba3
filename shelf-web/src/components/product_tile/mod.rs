//! Compact listing card with a variant dropdown and a quick-look modal.
pub(crate) mod interactions;

use super::{AddToCartCallback, QuickLook, StarRating, VariantPicker, emit_add_to_cart};
use crate::tile_store::use_tile;
use interactions::{card_style, quick_look_button_style, use_outside_dismiss};
use shelf_engine::{DropdownSurface, ImageSlot, Product, TileAction, TileConfig, TileView};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, Clone)]
pub struct ProductTileProps {
    pub product: Rc<Product>,
    pub config: Rc<TileConfig>,
    #[prop_or_default]
    pub on_add_to_cart: AddToCartCallback,
}

impl PartialEq for ProductTileProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.product, &other.product)
            && Rc::ptr_eq(&self.config, &other.config)
            && self.on_add_to_cart == other.on_add_to_cart
    }
}

#[function_component(ProductTile)]
pub fn product_tile(p: &ProductTileProps) -> Html {
    let tile = use_tile(Rc::clone(&p.product), Rc::clone(&p.config));
    let compact_ref = use_node_ref();
    let expanded_ref = use_node_ref();
    let view = tile.view();
    use_effect_with((), |_| {
        crate::styles::ensure_installed();
    });

    use_outside_dismiss(
        compact_ref.clone(),
        expanded_ref.clone(),
        view.compact_dropdown_open,
        view.expanded_dropdown_open,
        tile.dispatch.clone(),
    );

    let dispatch = &tile.dispatch;
    let on_enter = dispatch.reform(|_: MouseEvent| TileAction::CardHover(true));
    let on_leave = dispatch.reform(|_: MouseEvent| TileAction::CardHover(false));
    let on_image_error = dispatch.reform(|_: Event| TileAction::ImageFailed(ImageSlot::Compact));
    let on_open = dispatch.reform(|_: MouseEvent| TileAction::OpenQuickLook);
    let on_button_enter = dispatch.reform(|_: MouseEvent| TileAction::QuickLookButtonHover(true));
    let on_button_leave = dispatch.reform(|_: MouseEvent| TileAction::QuickLookButtonHover(false));
    let on_add = {
        let state = tile.state();
        let callback = p.on_add_to_cart.clone();
        Callback::from(move |_: MouseEvent| {
            emit_add_to_cart(&callback, state.product(), state.add_to_cart());
        })
    };

    html! {
        <>
            <div class="card shelf-tile h-100" style={card_style(&view.chrome)}
                 onmouseenter={on_enter} onmouseleave={on_leave}>
                <div class="position-relative">
                    <img src={view.compact_image_src.clone()} alt={view.title.clone()}
                         class="card-img-top bg-white pt-2"
                         style="height:160px;object-fit:contain;border-top-left-radius:12px;border-top-right-radius:12px"
                         onerror={on_image_error} />
                    <button type="button"
                            class="btn position-absolute start-50 bottom-0 mb-2 shelf-quick-look-btn"
                            style={quick_look_button_style(&view.chrome)}
                            onclick={on_open}
                            onmouseenter={on_button_enter}
                            onmouseleave={on_button_leave}>
                        {"Quick Look"}
                    </button>
                </div>
                <div class="card-body d-flex flex-column p-3">
                    <h6 class="card-title fw-bold mb-1" title={view.title.clone()}>{ view.title.clone() }</h6>
                    <div class="fw-bold mb-2 fs-5">{ view.price_label.clone() }</div>
                    <div class="mb-2">
                        <StarRating stars={view.stars.clone()} review_label={view.review_label.clone()} />
                    </div>
                    { compact_picker(&view, &tile.dispatch, compact_ref) }
                    <button type="button"
                            class={purchase_class(&view)}
                            disabled={!view.purchasable()}
                            onclick={on_add}>
                        { view.purchase_label }
                    </button>
                </div>
            </div>
            <QuickLook
                tile={tile.state()}
                on_action={tile.dispatch.clone()}
                on_add_to_cart={p.on_add_to_cart.clone()}
                dropdown_ref={expanded_ref}
            />
        </>
    }
}

/// The compact picker, or the static variant label for products without variants.
pub(crate) fn compact_picker(view: &TileView, dispatch: &Callback<TileAction>, container_ref: NodeRef) -> Html {
    if view.has_variants {
        html! {
            <VariantPicker
                surface={DropdownSurface::Compact}
                caption={view.variant_caption.clone()}
                options={view.options.clone()}
                open={view.compact_dropdown_open}
                locked={view.picker_locked()}
                on_action={dispatch.clone()}
                {container_ref}
            />
        }
    } else {
        html! { <div class="shelf-variant-label mb-2 text-muted">{ view.variant_caption.clone() }</div> }
    }
}

pub(crate) fn purchase_class(view: &TileView) -> Classes {
    classes!(
        "btn", "w-75", "fw-bold", "rounded-2", "mt-auto", "mx-auto", "d-block",
        if view.purchasable() { "btn-dark" } else { "btn-secondary" },
    )
}
