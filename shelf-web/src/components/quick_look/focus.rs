use wasm_bindgen::JsCast;
use yew::hook;
use yew::prelude::*;

/// Move focus onto the modal while it is open so keyboard dismissal works,
/// and hand it back to the previously focused element on close.
#[hook]
pub fn use_modal_focus(open: bool, modal_ref: NodeRef) {
    use_effect_with((open, modal_ref), move |(open, modal_ref)| {
        let mut prev_focus: Option<web_sys::HtmlElement> = None;
        if cfg!(target_arch = "wasm32") && *open {
            prev_focus = crate::dom::document()
                .and_then(|doc| doc.active_element())
                .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
            if let Some(modal) = modal_ref.cast::<web_sys::HtmlElement>() {
                if let Err(err) = modal.focus() {
                    log::debug!("quick look could not take focus: {err:?}");
                }
            }
        }
        move || {
            if let Some(el) = prev_focus {
                let _ = el.focus();
            }
        }
    });
}
