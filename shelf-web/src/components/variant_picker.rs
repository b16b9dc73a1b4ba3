//! Listbox-style variant dropdown shared by the compact card and quick look.
use shelf_engine::{DropdownSurface, TileAction, VariantOption};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct VariantPickerProps {
    pub surface: DropdownSurface,
    pub caption: AttrValue,
    pub options: Vec<VariantOption>,
    pub open: bool,
    pub locked: bool,
    pub on_action: Callback<TileAction>,
    /// Root of the dropdown; pointer-downs outside it dismiss the menu.
    #[prop_or_default]
    pub container_ref: NodeRef,
}

#[function_component(VariantPicker)]
pub fn variant_picker(p: &VariantPickerProps) -> Html {
    let surface = p.surface;
    let on_toggle = {
        let on_action = p.on_action.clone();
        let locked = p.locked;
        Callback::from(move |_: MouseEvent| {
            if !locked {
                on_action.emit(TileAction::ToggleDropdown(surface));
            }
        })
    };
    let menu_class = classes!("dropdown-menu", "w-100", p.open.then_some("show"));

    html! {
        <div class={classes!("dropdown", "shelf-picker", "mb-2")} ref={p.container_ref.clone()}>
            <button
                type="button"
                class={classes!(
                    "btn", "btn-outline-secondary", "w-100", "text-start", "dropdown-toggle",
                    "d-flex", "justify-content-between", "align-items-center",
                    p.locked.then_some("disabled"),
                )}
                disabled={p.locked}
                aria-haspopup="listbox"
                aria-expanded={p.open.to_string()}
                onclick={on_toggle}
            >
                <span>{ p.caption.clone() }</span>
                <svg class={classes!("shelf-picker__chevron", p.open.then_some("open"))}
                     width="16" height="16" viewBox="0 0 20 20" aria-hidden="true">
                    <path d="M5 8l5 5 5-5" stroke="#222" stroke-width="2" fill="none" />
                </svg>
            </button>
            <ul class={menu_class} role="listbox">
                { for p.options.iter().map(|option| option_item(option, surface, &p.on_action)) }
            </ul>
        </div>
    }
}

fn option_item(option: &VariantOption, surface: DropdownSurface, on_action: &Callback<TileAction>) -> Html {
    let onclick = {
        let on_action = on_action.clone();
        let variant_id = option.id.clone();
        let disabled = option.disabled;
        Callback::from(move |_: MouseEvent| {
            if !disabled {
                on_action.emit(TileAction::SelectVariant {
                    surface,
                    variant_id: variant_id.clone(),
                });
            }
        })
    };
    let class = classes!(
        "dropdown-item",
        option.selected.then_some("active"),
        option.disabled.then_some("disabled"),
        (!option.available).then_some("shelf-option--unavailable"),
    );

    html! {
        <li key={option.id.clone()}>
            <button
                type="button"
                {class}
                role="option"
                aria-selected={option.selected.to_string()}
                data-variant-id={option.id.clone()}
                disabled={option.disabled}
                {onclick}
            >
                { option.name.clone() }
            </button>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn option(id: &str, selected: bool, available: bool, disabled: bool) -> VariantOption {
        VariantOption {
            id: id.into(),
            name: id.to_uppercase(),
            selected,
            available,
            disabled,
        }
    }

    #[test]
    fn open_picker_marks_selection_and_availability() {
        let props = VariantPickerProps {
            surface: DropdownSurface::Compact,
            caption: AttrValue::from("A"),
            options: vec![option("a", true, true, false), option("b", false, false, false)],
            open: true,
            locked: false,
            on_action: Callback::noop(),
            container_ref: NodeRef::default(),
        };
        let html = block_on(LocalServerRenderer::<VariantPicker>::with_props(props).render());
        assert!(html.contains("aria-haspopup=\"listbox\""));
        assert!(html.contains("aria-expanded=\"true\""));
        assert!(html.contains("dropdown-menu w-100 show"));
        assert!(html.contains("aria-selected=\"true\""));
        assert!(html.contains("shelf-option--unavailable"));
    }

    #[test]
    fn locked_picker_disables_toggle() {
        let props = VariantPickerProps {
            surface: DropdownSurface::Expanded,
            caption: AttrValue::from("A"),
            options: vec![option("a", true, true, true)],
            open: false,
            locked: true,
            on_action: Callback::noop(),
            container_ref: NodeRef::default(),
        };
        let html = block_on(LocalServerRenderer::<VariantPicker>::with_props(props).render());
        assert!(html.contains("aria-expanded=\"false\""));
        assert!(html.contains("disabled"));
        assert!(!html.contains("dropdown-menu w-100 show"));
    }
}
