use crate::dom;
use shelf_engine::{CardChrome, PointerHit, TileAction};
use yew::prelude::*;

const RESTING_SHADOW: &str =
    "0 8px 24px -8px rgba(60,60,120,0.18), 0 -4px 16px -4px rgba(60,60,120,0.10)";
const RAISED_SHADOW: &str =
    "0 16px 32px -8px rgba(60,60,120,0.28), 0 -6px 20px -4px rgba(60,60,120,0.14)";

/// Listen for document pointer-downs only while a dropdown is open, and report
/// which dropdown roots contained the target.
#[hook]
pub fn use_outside_dismiss(
    compact_ref: NodeRef,
    expanded_ref: NodeRef,
    compact_open: bool,
    expanded_open: bool,
    dispatch: Callback<TileAction>,
) {
    use_effect_with((compact_open, expanded_open), move |&(compact, expanded)| {
        let listener = if compact || expanded {
            dom::DocumentListener::new("mousedown", move |event: web_sys::Event| {
                let target = event.target();
                dispatch.emit(TileAction::PointerDown(PointerHit {
                    in_compact_dropdown: dom::node_contains(&compact_ref, target.as_ref()),
                    in_expanded_dropdown: dom::node_contains(&expanded_ref, target.as_ref()),
                }));
            })
            .map_err(|err| {
                dom::console_error(&format!(
                    "Failed to watch outside clicks: {}",
                    dom::js_error_message(&err)
                ));
            })
            .ok()
        } else {
            None
        };
        move || drop(listener)
    });
}

#[must_use]
pub fn card_style(chrome: &CardChrome) -> String {
    let shadow = if chrome.raised_shadow {
        RAISED_SHADOW
    } else {
        RESTING_SHADOW
    };
    format!(
        "border-radius:12px;border:none;transition:transform .25s ease, box-shadow .25s ease;\
         transform:translateY({}px);box-shadow:{shadow}",
        chrome.lift_px
    )
}

#[must_use]
pub fn quick_look_button_style(chrome: &CardChrome) -> String {
    let (opacity, offset, events) = if chrome.quick_look_button_visible {
        (1, 0, "auto")
    } else {
        (0, 20, "none")
    };
    format!(
        "transition:opacity .35s ease, transform .35s ease, background-color .3s ease;\
         opacity:{opacity};transform:translateX(-50%) translateY({offset}px);pointer-events:{events};\
         background-color:rgba(33, 37, 41, {});border:none;color:white;z-index:2;\
         padding:6px 24px;border-radius:8px",
        chrome.quick_look_button_alpha
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_engine::HoverState;

    #[test]
    fn resting_card_hides_quick_look_button() {
        let chrome = CardChrome::from_hover(HoverState::default(), 5.0);
        assert!(card_style(&chrome).contains("translateY(0px)"));
        let button = quick_look_button_style(&chrome);
        assert!(button.contains("opacity:0"));
        assert!(button.contains("pointer-events:none"));
        assert!(button.contains("rgba(33, 37, 41, 0.5)"));
    }

    #[test]
    fn hovered_card_lifts_and_reveals() {
        let chrome = CardChrome::from_hover(
            HoverState {
                card: true,
                quick_look_button: true,
            },
            5.0,
        );
        let card = card_style(&chrome);
        assert!(card.contains("translateY(-5px)"));
        assert!(card.contains(RAISED_SHADOW));
        let button = quick_look_button_style(&chrome);
        assert!(button.contains("opacity:1"));
        assert!(button.contains("rgba(33, 37, 41, 0.8)"));
    }
}
