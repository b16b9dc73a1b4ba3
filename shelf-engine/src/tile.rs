//! Aggregate state of one tile widget and its event dispatcher.
//!
//! A [`TileState`] is created at mount and mutated only through [`TileState::apply`],
//! which runs each host event to completion. Both views of the tile (compact card
//! and quick look) read the same selection, so they always agree.
use std::rc::Rc;

use serde::Serialize;

use crate::availability::Availability;
use crate::cart::{AddToCart, Quantity};
use crate::config::TileConfig;
use crate::display::{
    SELECT_VARIANT_CAPTION, description_or_fallback, price_label, purchase_label,
    review_count_label, star_fills, variant_label_or_default,
};
use crate::geometry::{
    CardTransform, MagnifierState, MagnifierView, Point, Rect, Size, TiltAngles, TiltTracker,
};
use crate::overlay::{DropdownSurface, HoverState, Overlay, OverlayState, PointerHit};
use crate::product::Product;
use crate::selection::{ResolvedVariant, SelectOutcome, SelectionRejected, VariantSelection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ImageSlot {
    Compact,
    QuickLook,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum ImageSource {
    #[default]
    Primary,
    Placeholder,
}

/// Every host event the tile reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum TileAction {
    ToggleDropdown(DropdownSurface),
    OpenDropdown(DropdownSurface),
    CloseDropdown(DropdownSurface),
    SelectVariant {
        surface: DropdownSurface,
        variant_id: String,
    },
    ResetSelection,
    /// Document-level pointer-down while a dropdown is open.
    PointerDown(PointerHit),
    OpenQuickLook,
    CloseQuickLook,
    BackdropClick {
        on_backdrop: bool,
    },
    Flip,
    Unflip,
    ToggleFlip,
    CardHover(bool),
    QuickLookButtonHover(bool),
    TiltMove {
        rect: Rect,
        pointer: Point,
    },
    TiltLeave,
    MagnifierEnter,
    MagnifierMove(Point),
    MagnifierLeave,
    ImageLoaded {
        slot: ImageSlot,
        natural: Size,
    },
    ImageFailed(ImageSlot),
    SetQuantity(Quantity),
}

/// Result of one [`TileState::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Changed,
    Unchanged,
    /// A selection request was refused; nothing changed.
    Rejected(SelectionRejected),
}

impl Transition {
    #[must_use]
    pub const fn changed(&self) -> bool {
        matches!(self, Self::Changed)
    }

    const fn from_flag(changed: bool) -> Self {
        if changed { Self::Changed } else { Self::Unchanged }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TileState {
    product: Rc<Product>,
    config: Rc<TileConfig>,
    selection: VariantSelection,
    overlays: OverlayState,
    tilt: TiltTracker,
    magnifier: MagnifierState,
    compact_image: ImageSource,
    quick_look_image: ImageSource,
    quantity: Quantity,
}

impl TileState {
    #[must_use]
    pub fn new(product: Rc<Product>, config: Rc<TileConfig>) -> Self {
        let selection = VariantSelection::initialize(&product);
        Self {
            product,
            config,
            selection,
            overlays: OverlayState::new(),
            tilt: TiltTracker::default(),
            magnifier: MagnifierState::default(),
            compact_image: ImageSource::Primary,
            quick_look_image: ImageSource::Primary,
            quantity: Quantity::ONE,
        }
    }

    #[must_use]
    pub fn product(&self) -> &Rc<Product> {
        &self.product
    }

    #[must_use]
    pub fn config(&self) -> &Rc<TileConfig> {
        &self.config
    }

    #[must_use]
    pub const fn selection(&self) -> &VariantSelection {
        &self.selection
    }

    #[must_use]
    pub const fn overlays(&self) -> &OverlayState {
        &self.overlays
    }

    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    #[must_use]
    pub fn availability(&self) -> Availability {
        Availability::resolve(&self.product, self.selection.selected_variant(&self.product))
    }

    /// Dispatch one event.
    pub fn apply(&mut self, action: TileAction) -> Transition {
        match action {
            TileAction::ToggleDropdown(surface) => {
                let locked = self.availability().picker_locked;
                Transition::from_flag(self.overlays.toggle_dropdown(surface, locked))
            }
            TileAction::OpenDropdown(surface) => {
                let locked = self.availability().picker_locked;
                Transition::from_flag(self.overlays.open_dropdown(surface, locked))
            }
            TileAction::CloseDropdown(surface) => {
                Transition::from_flag(self.overlays.close_dropdown(surface))
            }
            TileAction::SelectVariant {
                surface,
                variant_id,
            } => self.select(surface, &variant_id),
            TileAction::ResetSelection => {
                let before = self.selection.clone();
                self.selection.reset(&self.product);
                Transition::from_flag(before != self.selection)
            }
            TileAction::PointerDown(hit) => Transition::from_flag(self.overlays.pointer_down(hit)),
            TileAction::OpenQuickLook => Transition::from_flag(self.overlays.open_quick_look()),
            TileAction::CloseQuickLook => {
                let closed = self.overlays.close_quick_look();
                if closed {
                    self.magnifier.leave();
                }
                Transition::from_flag(closed)
            }
            TileAction::BackdropClick { on_backdrop } => {
                let closed = self.overlays.backdrop_click(on_backdrop);
                if closed {
                    self.magnifier.leave();
                }
                Transition::from_flag(closed)
            }
            TileAction::Flip => Transition::from_flag(self.overlays.flip()),
            TileAction::Unflip => Transition::from_flag(self.overlays.unflip()),
            TileAction::ToggleFlip => Transition::from_flag(self.overlays.toggle_flip()),
            TileAction::CardHover(hovered) => {
                Transition::from_flag(self.overlays.set_card_hover(hovered))
            }
            TileAction::QuickLookButtonHover(hovered) => {
                Transition::from_flag(self.overlays.set_quick_look_button_hover(hovered))
            }
            TileAction::TiltMove { rect, pointer } => {
                let before = self.tilt.current();
                let after = self.tilt.track(&rect, pointer, self.config.max_tilt_deg);
                Transition::from_flag(before != Some(after))
            }
            TileAction::TiltLeave => Transition::from_flag(self.tilt.leave()),
            TileAction::MagnifierEnter => Transition::from_flag(self.magnifier.enter()),
            TileAction::MagnifierMove(pointer) => {
                self.magnifier.track(pointer);
                Transition::from_flag(self.magnifier.is_active())
            }
            TileAction::MagnifierLeave => Transition::from_flag(self.magnifier.leave()),
            TileAction::ImageLoaded { slot, natural } => match slot {
                ImageSlot::QuickLook => {
                    let changed = self.magnifier.natural_size() != natural;
                    self.magnifier.image_loaded(natural);
                    Transition::from_flag(changed)
                }
                ImageSlot::Compact => Transition::Unchanged,
            },
            TileAction::ImageFailed(slot) => self.image_failed(slot),
            TileAction::SetQuantity(quantity) => {
                let changed = self.quantity != quantity;
                self.quantity = quantity;
                Transition::from_flag(changed)
            }
        }
    }

    fn select(&mut self, surface: DropdownSurface, variant_id: &str) -> Transition {
        match self.selection.select(&self.product, variant_id) {
            Ok(outcome) => {
                let closed = self.overlays.close_dropdown(surface);
                Transition::from_flag(closed || outcome == SelectOutcome::Changed)
            }
            Err(rejected) => Transition::Rejected(rejected),
        }
    }

    fn image_failed(&mut self, slot: ImageSlot) -> Transition {
        let source = match slot {
            ImageSlot::Compact => &mut self.compact_image,
            ImageSlot::QuickLook => &mut self.quick_look_image,
        };
        // A failing placeholder is not retried.
        if *source == ImageSource::Placeholder {
            return Transition::Unchanged;
        }
        *source = ImageSource::Placeholder;
        if slot == ImageSlot::QuickLook {
            self.magnifier.image_failed();
        }
        Transition::Changed
    }

    /// URL currently shown in `slot`.
    #[must_use]
    pub fn image_src(&self, slot: ImageSlot) -> &str {
        match slot {
            ImageSlot::Compact => match self.compact_image {
                ImageSource::Primary => &self.product.image,
                ImageSource::Placeholder => &self.config.compact_placeholder,
            },
            ImageSlot::QuickLook => match self.quick_look_image {
                ImageSource::Primary => &self.product.image,
                ImageSource::Placeholder => &self.config.quick_look_placeholder,
            },
        }
    }

    /// Build the add-to-cart request for the current quantity, or `None` when the
    /// unit is not purchasable.
    #[must_use]
    pub fn add_to_cart(&self) -> Option<AddToCart> {
        self.add_to_cart_with(self.quantity)
    }

    #[must_use]
    pub fn add_to_cart_with(&self, quantity: Quantity) -> Option<AddToCart> {
        if !self.availability().purchasable {
            return None;
        }
        Some(AddToCart {
            product_id: self.product.id.clone(),
            quantity,
            variant: self.selection.selected_variant(&self.product).cloned(),
        })
    }

    #[must_use]
    pub fn magnifier_view(&self) -> Option<MagnifierView> {
        self.magnifier.view(self.config.magnifier())
    }

    #[must_use]
    pub fn card_transform(&self) -> CardTransform {
        CardTransform::new(self.overlays.is_open(Overlay::FlipBack), self.tilt.current())
    }

    /// Everything an adapter needs to render the tile.
    #[must_use]
    pub fn view(&self) -> TileView {
        let availability = self.availability();
        let rating = self.product.rating_or_default();
        let selected = self.selection.resolved(&self.product);
        let variant_caption = if self.product.has_variants() {
            if selected.synthesized {
                SELECT_VARIANT_CAPTION.to_string()
            } else {
                selected.name.clone()
            }
        } else {
            variant_label_or_default(&self.product).to_string()
        };
        let options = self
            .product
            .variants
            .iter()
            .map(|variant| VariantOption {
                id: variant.id.clone(),
                name: variant.name.clone(),
                selected: variant.id == self.selection.selected_id(),
                available: !variant.is_marked_unavailable(),
                disabled: availability.picker_locked,
            })
            .collect();
        let transform = self.card_transform();

        TileView {
            title: self.product.title.clone(),
            description: description_or_fallback(&self.product).to_string(),
            price_label: price_label(&self.product),
            stars: star_fills(rating, self.config.star_slots),
            review_label: review_count_label(rating.count, self.config.review_abbrev_threshold),
            availability,
            purchase_label: purchase_label(availability.purchasable),
            selected,
            variant_caption,
            has_variants: self.product.has_variants(),
            options,
            open_overlays: self.overlays.open_overlays(),
            compact_dropdown_open: self.overlays.is_dropdown_open(DropdownSurface::Compact),
            expanded_dropdown_open: self.overlays.is_dropdown_open(DropdownSurface::Expanded),
            quick_look_open: self.overlays.is_open(Overlay::QuickLook),
            flipped: self.overlays.is_open(Overlay::FlipBack),
            tilt: transform.tilt,
            card_transform_css: transform.to_css(self.config.card_perspective_px),
            flip_transform_css: transform.flip_css(self.config.card_perspective_px),
            tilt_transform_css: transform.tilt_css(),
            magnifier: self.magnifier_view(),
            magnifier_cursor: if self.magnifier.is_active() {
                "none"
            } else {
                "zoom-in"
            },
            chrome: CardChrome::from_hover(self.overlays.hover(), self.config.hover_lift_px),
            compact_image_src: self.image_src(ImageSlot::Compact).to_string(),
            quick_look_image_src: self.image_src(ImageSlot::QuickLook).to_string(),
            quantity: self.quantity,
        }
    }
}

/// One row of a variant picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariantOption {
    pub id: String,
    pub name: String,
    pub selected: bool,
    /// The variant's own flag, shown to inform the shopper.
    pub available: bool,
    /// Interaction is frozen because the picker is locked.
    pub disabled: bool,
}

/// Hover-driven styling of the compact card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CardChrome {
    /// Vertical translation in px (negative lifts the card).
    pub lift_px: f64,
    pub raised_shadow: bool,
    pub quick_look_button_visible: bool,
    /// Alpha of the quick-look button background.
    pub quick_look_button_alpha: f64,
}

impl CardChrome {
    #[must_use]
    pub fn from_hover(hover: HoverState, lift_px: f64) -> Self {
        Self {
            lift_px: if hover.card { -lift_px } else { 0.0 },
            raised_shadow: hover.card,
            quick_look_button_visible: hover.card,
            quick_look_button_alpha: if hover.quick_look_button { 0.8 } else { 0.5 },
        }
    }
}

/// Render snapshot of one tile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileView {
    pub title: String,
    pub description: String,
    pub price_label: String,
    pub stars: Vec<bool>,
    pub review_label: String,
    pub availability: Availability,
    pub purchase_label: &'static str,
    pub selected: ResolvedVariant,
    pub variant_caption: String,
    pub has_variants: bool,
    pub options: Vec<VariantOption>,
    pub open_overlays: Vec<Overlay>,
    pub compact_dropdown_open: bool,
    pub expanded_dropdown_open: bool,
    pub quick_look_open: bool,
    pub flipped: bool,
    pub tilt: Option<TiltAngles>,
    pub card_transform_css: String,
    /// Perspective and flip rotation only; animated by adapters.
    pub flip_transform_css: String,
    /// Tilt rotation only; follows the pointer without easing.
    pub tilt_transform_css: String,
    pub magnifier: Option<MagnifierView>,
    pub magnifier_cursor: &'static str,
    pub chrome: CardChrome,
    pub compact_image_src: String,
    pub quick_look_image_src: String,
    pub quantity: Quantity,
}

impl TileView {
    #[must_use]
    pub const fn purchasable(&self) -> bool {
        self.availability.purchasable
    }

    #[must_use]
    pub const fn picker_locked(&self) -> bool {
        self.availability.picker_locked
    }

    #[must_use]
    pub fn filled_stars(&self) -> usize {
        self.stars.iter().filter(|filled| **filled).count()
    }
}
