use crate::catalog::ShelfCatalog;
use crate::components::{AddToCartCallback, FlipTile, ProductTile};
use shelf_engine::{Product, Quantity, Variant};
use std::rc::Rc;
use yew::prelude::*;

/// Which card adapter the listing renders.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Layout {
    #[default]
    Compact,
    Flip,
}

impl Layout {
    const fn label(self) -> &'static str {
        match self {
            Self::Compact => "Quick look",
            Self::Flip => "Flip cards",
        }
    }
}

#[derive(Properties, Clone)]
pub struct ShelfGridProps {
    pub catalog: Rc<ShelfCatalog>,
    pub layout: Layout,
    #[prop_or_default]
    pub on_add_to_cart: AddToCartCallback,
}

impl PartialEq for ShelfGridProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.catalog, &other.catalog)
            && self.layout == other.layout
            && self.on_add_to_cart == other.on_add_to_cart
    }
}

#[function_component(ShelfGrid)]
pub fn shelf_grid(p: &ShelfGridProps) -> Html {
    if p.catalog.products.is_empty() {
        return html! { <p class="shelf-empty text-muted">{"No products to show."}</p> };
    }
    html! {
        <div class="row g-4 shelf-grid">
            { for p.catalog.products.iter().map(|product| {
                let config = Rc::clone(&p.catalog.config);
                let on_add_to_cart = p.on_add_to_cart.clone();
                let key = format!("{:?}-{}", p.layout, product.id);
                let tile = match p.layout {
                    Layout::Compact => html! {
                        <ProductTile product={Rc::clone(product)} {config} {on_add_to_cart} />
                    },
                    Layout::Flip => html! {
                        <FlipTile product={Rc::clone(product)} {config} {on_add_to_cart} />
                    },
                };
                html! { <div key={key} class="col-6 col-md-4 col-lg-3">{ tile }</div> }
            }) }
        </div>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let catalog = use_memo((), |_| ShelfCatalog::bundled_or_empty());
    let layout = use_state(Layout::default);
    let cart_count = use_state(|| 0_u32);

    let on_add_to_cart = {
        let cart_count = cart_count.clone();
        Callback::from(move |(product, quantity, variant): (Rc<Product>, Quantity, Option<Variant>)| {
            log::info!(
                "cart: {} x{} ({})",
                product.title,
                quantity,
                variant.map_or_else(|| "no variant".to_string(), |v| v.name)
            );
            cart_count.set(cart_count.saturating_add(quantity.get()));
        })
    };

    let layout_button = |target: Layout| {
        let layout = layout.clone();
        let active = *layout == target;
        let onclick = Callback::from(move |_: MouseEvent| layout.set(target));
        html! {
            <button type="button"
                    class={classes!("btn", "btn-sm", if active { "btn-dark" } else { "btn-outline-dark" })}
                    aria-pressed={active.to_string()}
                    {onclick}>
                { target.label() }
            </button>
        }
    };

    html! {
        <main class="container py-4 shelf-app">
            <header class="d-flex justify-content-between align-items-center mb-4">
                <h1 class="h4 mb-0">{"Shelf"}</h1>
                <div class="btn-group" role="group" aria-label="Card layout">
                    { layout_button(Layout::Compact) }
                    { layout_button(Layout::Flip) }
                </div>
                <span class="badge bg-dark" aria-live="polite">{ format!("Cart: {}", *cart_count) }</span>
            </header>
            <ShelfGrid catalog={catalog.clone()} layout={*layout} {on_add_to_cart} />
        </main>
    }
}
