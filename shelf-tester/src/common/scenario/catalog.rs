use anyhow::{Result, ensure};
use shelf_engine::{
    DEFAULT_VARIANT_ID, DropdownSurface, Face, ImageSlot, Point, PointerHit, Quantity, Rect, Size,
    TileAction, TileState, is_available,
};

use super::fixtures::{plain_mug, sized_sweater, sold_out_lamp, two_variant_tee};
use super::{Fixture, Step, TileScenario};
use crate::common::util::approx_eq;

const MISSING_VARIANT: &str = "__missing__";

pub fn catalog_scenarios() -> Vec<TileScenario> {
    vec![
        TileScenario::new("catalog-smoke", "Catalog Smoke Walkthrough", Fixture::Catalog)
            .with_steps(smoke_steps())
            .with_invariant(selection_is_known)
            .with_invariant(expanded_dropdown_needs_quick_look)
            .with_invariant(tilt_within_bounds),
        TileScenario::new("unknown-variant", "Unknown Variant Rejection", Fixture::Catalog)
            .with_steps(vec![Step::then(
                select(DropdownSurface::Compact, MISSING_VARIANT),
                selection_still_initial,
            )])
            .with_invariant(selection_is_known),
        TileScenario::new(
            "unavailable-product",
            "Unavailable Product Locks Picker",
            Fixture::Product(sold_out_lamp),
        )
        .with_steps(vec![
            Step::then(
                TileAction::ToggleDropdown(DropdownSurface::Compact),
                no_dropdown_open,
            ),
            Step::then(select(DropdownSurface::Compact, "cool"), selection_still_initial),
            Step::then(TileAction::ResetSelection, nothing_purchasable),
        ])
        .with_invariant(nothing_purchasable),
        TileScenario::new(
            "default-variant",
            "Synthesized Default Variant",
            Fixture::Product(plain_mug),
        )
        .with_steps(vec![
            Step::then(select(DropdownSurface::Compact, DEFAULT_VARIANT_ID), default_selected),
            Step::then(select(DropdownSurface::Compact, "other"), default_selected),
        ])
        .with_invariant(default_selected),
        TileScenario::new(
            "shared-selection",
            "Compact and Expanded Views Share Selection",
            Fixture::Product(sized_sweater),
        )
        .with_steps(vec![
            Step::act(TileAction::OpenQuickLook),
            Step::act(TileAction::ToggleDropdown(DropdownSurface::Expanded)),
            Step::then(select(DropdownSurface::Expanded, "l"), large_selected_everywhere),
            Step::then(TileAction::CloseQuickLook, large_selected_everywhere),
        ]),
        TileScenario::new(
            "outside-dismiss",
            "Outside Pointer-Down Dismissal",
            Fixture::Product(sized_sweater),
        )
        .with_steps(vec![
            Step::act(TileAction::ToggleDropdown(DropdownSurface::Compact)),
            Step::act(TileAction::OpenQuickLook),
            Step::then(
                TileAction::ToggleDropdown(DropdownSurface::Expanded),
                both_dropdowns_open,
            ),
            Step::then(
                TileAction::PointerDown(PointerHit::inside(DropdownSurface::Compact)),
                only_compact_open,
            ),
            Step::then(TileAction::PointerDown(PointerHit::outside()), no_dropdown_open),
        ]),
        TileScenario::new(
            "face-exclusion",
            "Quick Look and Flip Exclude Each Other",
            Fixture::Product(sized_sweater),
        )
        .with_steps(vec![
            Step::act(TileAction::OpenQuickLook),
            Step::then(TileAction::Flip, face_is_quick_look),
            Step::then(TileAction::BackdropClick { on_backdrop: false }, face_is_quick_look),
            Step::then(TileAction::BackdropClick { on_backdrop: true }, face_is_front),
            Step::act(TileAction::ToggleFlip),
            Step::then(TileAction::OpenQuickLook, face_is_flipped),
            Step::then(TileAction::ToggleFlip, face_is_front),
        ]),
        TileScenario::new("tilt-bounds", "Tilt Stays Bounded", Fixture::Product(sized_sweater))
            .with_steps(tilt_sweep())
            .with_invariant(tilt_within_bounds),
        TileScenario::new(
            "magnifier-mapping",
            "Magnifier Follows Pointer",
            Fixture::Product(two_variant_tee),
        )
        .with_steps(vec![
            Step::act(TileAction::OpenQuickLook),
            Step::act(TileAction::MagnifierEnter),
            Step::then(TileAction::MagnifierMove(Point::new(30.0, 40.0)), magnifier_hidden),
            Step::act(TileAction::ImageLoaded {
                slot: ImageSlot::QuickLook,
                natural: Size::new(800.0, 600.0),
            }),
            Step::then(TileAction::MagnifierMove(Point::new(30.0, 40.0)), magnifier_mapped),
            Step::then(TileAction::CloseQuickLook, magnifier_hidden),
        ]),
        TileScenario::new(
            "variant-availability",
            "Per-Variant Availability Gates Purchase Only",
            Fixture::Product(two_variant_tee),
        )
        .with_steps(vec![
            Step::then(select(DropdownSurface::Compact, "b"), b_selected_not_purchasable),
            Step::then(select(DropdownSurface::Compact, "a"), a_selected_purchasable),
        ]),
        TileScenario::new(
            "image-fallback",
            "Image Failure Falls Back Once",
            Fixture::Product(two_variant_tee),
        )
        .with_steps(vec![
            Step::then(TileAction::ImageFailed(ImageSlot::Compact), compact_placeholder),
            Step::then(TileAction::ImageFailed(ImageSlot::Compact), compact_placeholder),
        ]),
        TileScenario::new("add-to-cart", "Add to Cart Request", Fixture::Product(sized_sweater))
            .with_steps(vec![
                Step::act(select(DropdownSurface::Compact, "m")),
                Step::then(TileAction::SetQuantity(three()), cart_request_matches),
            ]),
    ]
}

fn select(surface: DropdownSurface, variant_id: &str) -> TileAction {
    TileAction::SelectVariant {
        surface,
        variant_id: variant_id.to_string(),
    }
}

fn three() -> Quantity {
    Quantity::new(3).unwrap_or_default()
}

fn smoke_steps() -> Vec<Step> {
    let card = Rect::new(0.0, 0.0, 200.0, 300.0);
    vec![
        Step::act(TileAction::CardHover(true)),
        Step::act(TileAction::QuickLookButtonHover(true)),
        Step::act(TileAction::ToggleDropdown(DropdownSurface::Compact)),
        Step::act(TileAction::PointerDown(PointerHit::outside())),
        Step::act(TileAction::OpenQuickLook),
        Step::act(TileAction::ToggleDropdown(DropdownSurface::Expanded)),
        Step::act(TileAction::MagnifierEnter),
        Step::act(TileAction::MagnifierMove(Point::new(10.0, 10.0))),
        Step::act(TileAction::CloseQuickLook),
        Step::act(TileAction::OpenDropdown(DropdownSurface::Expanded)),
        Step::act(TileAction::TiltMove {
            rect: card,
            pointer: Point::new(190.0, 20.0),
        }),
        Step::act(TileAction::ToggleFlip),
        Step::act(TileAction::TiltLeave),
        Step::act(TileAction::Unflip),
        Step::act(TileAction::CardHover(false)),
        Step::then(TileAction::ResetSelection, selection_still_initial),
    ]
}

fn tilt_sweep() -> Vec<Step> {
    let card = Rect::new(100.0, 50.0, 240.0, 320.0);
    let pointers = [
        (100.0, 50.0),
        (340.0, 370.0),
        (220.0, 210.0),
        (-5000.0, 9000.0),
        (f64::NAN, 60.0),
    ];
    let mut steps: Vec<Step> = pointers
        .iter()
        .map(|&(x, y)| {
            Step::act(TileAction::TiltMove {
                rect: card,
                pointer: Point::new(x, y),
            })
        })
        .collect();
    steps.push(Step::then(TileAction::TiltLeave, tilt_reset));
    steps
}

fn selection_is_known(tile: &TileState) -> Result<()> {
    let product = tile.product();
    let id = tile.selection().selected_id();
    if product.has_variants() {
        ensure!(
            product.find_variant(id).is_some(),
            "selection {id} is not a variant of {}",
            product.id
        );
    } else {
        ensure!(id == DEFAULT_VARIANT_ID, "expected default selection, got {id}");
    }
    Ok(())
}

fn selection_still_initial(tile: &TileState) -> Result<()> {
    let expected = tile
        .product()
        .variants
        .first()
        .map_or(DEFAULT_VARIANT_ID, |v| v.id.as_str());
    let actual = tile.selection().selected_id();
    ensure!(actual == expected, "selection moved to {actual}, expected {expected}");
    Ok(())
}

fn expanded_dropdown_needs_quick_look(tile: &TileState) -> Result<()> {
    let overlays = tile.overlays();
    ensure!(
        !overlays.is_dropdown_open(DropdownSurface::Expanded) || overlays.face() == Face::QuickLook,
        "expanded dropdown open without quick look"
    );
    Ok(())
}

fn tilt_within_bounds(tile: &TileState) -> Result<()> {
    let max = tile.config().max_tilt_deg;
    if let Some(angles) = tile.card_transform().tilt {
        ensure!(
            angles.rotate_x.abs() <= max && angles.rotate_y.abs() <= max,
            "tilt {angles:?} exceeds {max}"
        );
        ensure!(
            angles.rotate_x.is_finite() && angles.rotate_y.is_finite(),
            "tilt {angles:?} is not finite"
        );
    }
    Ok(())
}

fn tilt_reset(tile: &TileState) -> Result<()> {
    ensure!(tile.card_transform().tilt.is_none(), "tilt should reset on leave");
    Ok(())
}

fn nothing_purchasable(tile: &TileState) -> Result<()> {
    let product = tile.product();
    ensure!(!is_available(product, None), "product should be unavailable");
    for variant in &product.variants {
        ensure!(
            !is_available(product, Some(variant)),
            "variant {} should be unavailable",
            variant.id
        );
    }
    ensure!(tile.availability().picker_locked, "picker should be locked");
    ensure!(tile.add_to_cart().is_none(), "add to cart should be refused");
    Ok(())
}

fn no_dropdown_open(tile: &TileState) -> Result<()> {
    ensure!(!tile.overlays().any_dropdown_open(), "no dropdown should be open");
    Ok(())
}

fn both_dropdowns_open(tile: &TileState) -> Result<()> {
    let overlays = tile.overlays();
    ensure!(
        overlays.is_dropdown_open(DropdownSurface::Compact)
            && overlays.is_dropdown_open(DropdownSurface::Expanded),
        "both dropdowns should be open"
    );
    Ok(())
}

fn only_compact_open(tile: &TileState) -> Result<()> {
    let overlays = tile.overlays();
    ensure!(
        overlays.is_dropdown_open(DropdownSurface::Compact),
        "compact dropdown should stay open"
    );
    ensure!(
        !overlays.is_dropdown_open(DropdownSurface::Expanded),
        "expanded dropdown should close"
    );
    Ok(())
}

fn default_selected(tile: &TileState) -> Result<()> {
    let resolved = tile.selection().resolved(tile.product());
    ensure!(resolved.id == DEFAULT_VARIANT_ID, "expected default, got {}", resolved.id);
    ensure!(resolved.synthesized, "default variant should be synthesized");
    ensure!(tile.view().variant_caption == "12 oz", "variant label should show");
    Ok(())
}

fn large_selected_everywhere(tile: &TileState) -> Result<()> {
    let view = tile.view();
    ensure!(view.selected.id == "l", "expected l, got {}", view.selected.id);
    ensure!(view.variant_caption == "Large", "caption {}", view.variant_caption);
    ensure!(
        !view.expanded_dropdown_open,
        "selecting should close the expanded dropdown"
    );
    let marked: Vec<_> = view.options.iter().filter(|o| o.selected).collect();
    ensure!(marked.len() == 1 && marked[0].id == "l", "one option should be marked");
    Ok(())
}

fn face_is(tile: &TileState, face: Face) -> Result<()> {
    let actual = tile.overlays().face();
    ensure!(actual == face, "face is {actual:?}, expected {face:?}");
    Ok(())
}

fn face_is_front(tile: &TileState) -> Result<()> {
    face_is(tile, Face::Front)
}

fn face_is_quick_look(tile: &TileState) -> Result<()> {
    face_is(tile, Face::QuickLook)
}

fn face_is_flipped(tile: &TileState) -> Result<()> {
    face_is(tile, Face::Flipped)
}

fn magnifier_hidden(tile: &TileState) -> Result<()> {
    ensure!(tile.magnifier_view().is_none(), "magnifier should be hidden");
    Ok(())
}

fn magnifier_mapped(tile: &TileState) -> Result<()> {
    let Some(view) = tile.magnifier_view() else {
        anyhow::bail!("magnifier should be visible");
    };
    ensure!(
        approx_eq(view.origin.x, -30.0) && approx_eq(view.origin.y, -20.0),
        "lens origin {:?}",
        view.origin
    );
    ensure!(
        approx_eq(view.background_offset.x, -33.0) && approx_eq(view.background_offset.y, -44.0),
        "background offset {:?}",
        view.background_offset
    );
    ensure!(
        view.background_size == Size::new(800.0, 600.0),
        "background size {:?}",
        view.background_size
    );
    ensure!(tile.view().magnifier_cursor == "none", "cursor should hide");
    Ok(())
}

fn b_selected_not_purchasable(tile: &TileState) -> Result<()> {
    ensure!(tile.selection().selected_id() == "b", "selection should move to b");
    let availability = tile.availability();
    ensure!(!availability.purchasable, "b is marked unavailable");
    ensure!(!availability.picker_locked, "picker stays usable");
    Ok(())
}

fn a_selected_purchasable(tile: &TileState) -> Result<()> {
    ensure!(tile.selection().selected_id() == "a", "selection should move to a");
    ensure!(tile.availability().purchasable, "a is available");
    Ok(())
}

fn compact_placeholder(tile: &TileState) -> Result<()> {
    let src = tile.image_src(ImageSlot::Compact);
    ensure!(src == tile.config().compact_placeholder, "compact src {src}");
    ensure!(
        tile.image_src(ImageSlot::QuickLook) == tile.product().image,
        "quick look image should be untouched"
    );
    Ok(())
}

fn cart_request_matches(tile: &TileState) -> Result<()> {
    let Some(request) = tile.add_to_cart() else {
        anyhow::bail!("sweater should be purchasable");
    };
    ensure!(request.product_id == "crew", "product {}", request.product_id);
    ensure!(request.quantity.get() == 3, "quantity {}", request.quantity);
    ensure!(
        request.variant.as_ref().map(|v| v.id.as_str()) == Some("m"),
        "variant {:?}",
        request.variant
    );
    Ok(())
}
