use crate::dom;
use shelf_engine::{ImageSlot, MagnifierView, TileAction};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MagnifierProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    pub view: Option<MagnifierView>,
    pub cursor: AttrValue,
    pub on_action: Callback<TileAction>,
}

/// Quick-look image with a pointer-following circular lens.
#[function_component(Magnifier)]
pub fn magnifier(p: &MagnifierProps) -> Html {
    let image_ref = use_node_ref();
    let on_action = &p.on_action;
    let onload = on_action.reform(|e: Event| {
        let natural = dom::loaded_image_size(&e).unwrap_or_default();
        TileAction::ImageLoaded {
            slot: ImageSlot::QuickLook,
            natural,
        }
    });
    let onerror = on_action.reform(|_: Event| TileAction::ImageFailed(ImageSlot::QuickLook));
    let onmouseenter = on_action.reform(|_: MouseEvent| TileAction::MagnifierEnter);
    let onmouseleave = on_action.reform(|_: MouseEvent| TileAction::MagnifierLeave);
    let onmousemove = {
        let on_action = on_action.clone();
        let image_ref = image_ref.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(offset) = dom::offset_in(&image_ref, &e) {
                on_action.emit(TileAction::MagnifierMove(offset));
            }
        })
    };

    let lens = p.view.map(|view| {
        let style = format!(
            "left:{}px;top:{}px;width:{d}px;height:{d}px;background-image:url({});\
             background-size:{};background-position:{}",
            view.origin.x,
            view.origin.y,
            p.src,
            view.background_size_css(),
            view.background_position_css(),
            d = view.diameter,
        );
        html! {
            <div class="shelf-magnifier border border-2 border-white shadow-lg rounded-circle"
                 style={style} aria-hidden="true"></div>
        }
    });

    html! {
        <span class="shelf-magnifier-host position-relative d-inline-block">
            <img
                ref={image_ref}
                src={p.src.clone()}
                alt={p.alt.clone()}
                class="img-fluid"
                style={format!("max-height:350px;object-fit:contain;cursor:{}", p.cursor)}
                {onload}
                {onerror}
                {onmouseenter}
                {onmouseleave}
                {onmousemove}
            />
            { lens.unwrap_or_default() }
        </span>
    }
}
