//! Expanded product view shown over the listing.
mod focus;
mod magnifier;

pub use magnifier::{Magnifier, MagnifierProps};

use super::{AddToCartCallback, StarRating, VariantPicker, emit_add_to_cart};
use crate::dom;
use focus::use_modal_focus;
use shelf_engine::{DropdownSurface, Quantity, TileAction, TileState, TileView};
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, Clone)]
pub struct QuickLookProps {
    pub tile: Rc<TileState>,
    pub on_action: Callback<TileAction>,
    pub on_add_to_cart: AddToCartCallback,
    /// Root of the expanded variant dropdown.
    #[prop_or_default]
    pub dropdown_ref: NodeRef,
}

impl PartialEq for QuickLookProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.tile, &other.tile)
            && self.on_action == other.on_action
            && self.on_add_to_cart == other.on_add_to_cart
            && self.dropdown_ref == other.dropdown_ref
    }
}

#[function_component(QuickLook)]
pub fn quick_look(p: &QuickLookProps) -> Html {
    let backdrop_ref = use_node_ref();
    let view = p.tile.view();
    use_modal_focus(view.quick_look_open, backdrop_ref.clone());
    if !view.quick_look_open {
        return Html::default();
    }
    let title_id = format!("quick-look-title-{}", p.tile.product().id);

    let on_backdrop = {
        let backdrop_ref = backdrop_ref.clone();
        p.on_action.reform(move |e: MouseEvent| TileAction::BackdropClick {
            on_backdrop: dom::targets_node(&backdrop_ref, &e),
        })
    };
    let on_close = p.on_action.reform(|_: MouseEvent| TileAction::CloseQuickLook);
    let on_keydown = {
        let on_action = p.on_action.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                e.prevent_default();
                on_action.emit(TileAction::CloseQuickLook);
            }
        })
    };
    let on_quantity = {
        let on_action = p.on_action.clone();
        Callback::from(move |e: InputEvent| {
            let Some(input) = e.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            match input.value().parse::<u32>().ok().and_then(Quantity::new) {
                Some(quantity) => on_action.emit(TileAction::SetQuantity(quantity)),
                None => log::debug!("ignoring quantity {:?}", input.value()),
            }
        })
    };
    let on_add = {
        let tile = Rc::clone(&p.tile);
        let callback = p.on_add_to_cart.clone();
        Callback::from(move |_: MouseEvent| {
            emit_add_to_cart(&callback, tile.product(), tile.add_to_cart());
        })
    };

    html! {
        <div ref={backdrop_ref} class="modal fade show d-block shelf-quick-look" tabindex="-1" role="dialog"
             aria-modal="true" aria-labelledby={title_id.clone()}
             style="background-color:rgba(0,0,0,0.5)"
             onclick={on_backdrop} onkeydown={on_keydown}>
            <div class="modal-dialog modal-lg modal-dialog-centered">
                <div class="modal-content border-0 shadow-lg" style="border-radius:12px">
                    <div class="modal-header border-0 pb-0">
                        <button type="button" class="btn-close" aria-label="Close" onclick={on_close}></button>
                    </div>
                    <div class="modal-body p-0">
                        <div class="row g-0">
                            <div class="col-md-4">
                                <div class="p-4 d-flex align-items-center justify-content-center" style="min-height:400px">
                                    <Magnifier
                                        src={view.quick_look_image_src.clone()}
                                        alt={view.title.clone()}
                                        view={view.magnifier}
                                        cursor={view.magnifier_cursor}
                                        on_action={p.on_action.clone()}
                                    />
                                </div>
                            </div>
                            <div class="col-md-8">
                                { details(&view, p, &title_id, on_quantity, on_add) }
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn details(
    view: &TileView,
    p: &QuickLookProps,
    title_id: &str,
    on_quantity: Callback<InputEvent>,
    on_add: Callback<MouseEvent>,
) -> Html {
    let picker = if view.has_variants {
        html! {
            <VariantPicker
                surface={DropdownSurface::Expanded}
                caption={view.variant_caption.clone()}
                options={view.options.clone()}
                open={view.expanded_dropdown_open}
                locked={view.picker_locked()}
                on_action={p.on_action.clone()}
                container_ref={p.dropdown_ref.clone()}
            />
        }
    } else {
        html! { <div class="shelf-variant-label mb-3">{ view.variant_caption.clone() }</div> }
    };
    let button_class = classes!(
        "btn", "fw-bold", "w-100",
        if view.purchasable() { "btn-dark" } else { "btn-secondary" },
    );

    html! {
        <div class="p-4">
            <h4 id={title_id.to_string()} class="fw-bold mb-2">{ view.title.clone() }</h4>
            <p class="text-muted mb-3">{ view.description.clone() }</p>
            <div class="mb-3">
                <StarRating stars={view.stars.clone()} review_label={view.review_label.clone()}
                            size={16} suffix={Some(AttrValue::from("reviews"))} />
            </div>
            <h3 class="fw-bold mb-4">{ view.price_label.clone() }</h3>
            { picker }
            <label class="form-label small mb-1" for={format!("{title_id}-qty")}>{"Quantity"}</label>
            <input id={format!("{title_id}-qty")} class="form-control mb-3" type="number" min="1"
                   value={view.quantity.to_string()} oninput={on_quantity} />
            <button type="button" class={button_class} disabled={!view.purchasable()} onclick={on_add}>
                { view.purchase_label }
            </button>
        </div>
    }
}
