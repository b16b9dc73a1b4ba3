//! Overlay visibility machine for one tile instance.
//!
//! The two variant dropdowns are independent of each other. The tile face is a
//! separate three-way state: the plain front, the quick-look modal, or the
//! flipped back. Quick look and flip exclude each other; a request for one while
//! the other is showing is ignored.
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DropdownSurface {
    /// Picker on the compact card.
    Compact,
    /// Picker inside the quick-look modal.
    Expanded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Overlay {
    CompactDropdown,
    ExpandedDropdown,
    QuickLook,
    FlipBack,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Face {
    #[default]
    Front,
    QuickLook,
    Flipped,
}

/// Which dropdown surfaces contain the target of a pointer-down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerHit {
    pub in_compact_dropdown: bool,
    pub in_expanded_dropdown: bool,
}

impl PointerHit {
    /// A pointer-down that landed inside neither dropdown.
    #[must_use]
    pub const fn outside() -> Self {
        Self {
            in_compact_dropdown: false,
            in_expanded_dropdown: false,
        }
    }

    #[must_use]
    pub const fn inside(surface: DropdownSurface) -> Self {
        match surface {
            DropdownSurface::Compact => Self {
                in_compact_dropdown: true,
                in_expanded_dropdown: false,
            },
            DropdownSurface::Expanded => Self {
                in_compact_dropdown: false,
                in_expanded_dropdown: true,
            },
        }
    }
}

/// Hover flags that drive the reveal styling of the compact card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HoverState {
    pub card: bool,
    pub quick_look_button: bool,
}

/// Per-instance overlay state. Every mutator returns whether anything changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OverlayState {
    compact_dropdown: bool,
    expanded_dropdown: bool,
    face: Face,
    hover: HoverState,
}

impl OverlayState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn face(&self) -> Face {
        self.face
    }

    #[must_use]
    pub const fn hover(&self) -> HoverState {
        self.hover
    }

    #[must_use]
    pub const fn is_dropdown_open(&self, surface: DropdownSurface) -> bool {
        match surface {
            DropdownSurface::Compact => self.compact_dropdown,
            DropdownSurface::Expanded => self.expanded_dropdown,
        }
    }

    #[must_use]
    pub const fn is_open(&self, overlay: Overlay) -> bool {
        match overlay {
            Overlay::CompactDropdown => self.compact_dropdown,
            Overlay::ExpandedDropdown => self.expanded_dropdown,
            Overlay::QuickLook => matches!(self.face, Face::QuickLook),
            Overlay::FlipBack => matches!(self.face, Face::Flipped),
        }
    }

    /// Every overlay currently showing, in a stable order.
    #[must_use]
    pub fn open_overlays(&self) -> Vec<Overlay> {
        [
            Overlay::CompactDropdown,
            Overlay::ExpandedDropdown,
            Overlay::QuickLook,
            Overlay::FlipBack,
        ]
        .into_iter()
        .filter(|overlay| self.is_open(*overlay))
        .collect()
    }

    /// True when nothing is open and the card is unflipped.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        !self.compact_dropdown && !self.expanded_dropdown && matches!(self.face, Face::Front)
    }

    /// Open a dropdown. Ignored while the picker is locked, and the expanded
    /// dropdown only exists while quick look is showing.
    pub const fn open_dropdown(&mut self, surface: DropdownSurface, picker_locked: bool) -> bool {
        if picker_locked || !self.surface_mounted(surface) {
            return false;
        }
        self.set_dropdown(surface, true)
    }

    pub const fn toggle_dropdown(&mut self, surface: DropdownSurface, picker_locked: bool) -> bool {
        if self.is_dropdown_open(surface) {
            self.close_dropdown(surface)
        } else {
            self.open_dropdown(surface, picker_locked)
        }
    }

    pub const fn close_dropdown(&mut self, surface: DropdownSurface) -> bool {
        self.set_dropdown(surface, false)
    }

    /// Dismiss every open dropdown whose surface does not contain the target.
    /// Each surface is judged on its own.
    pub const fn pointer_down(&mut self, hit: PointerHit) -> bool {
        let mut changed = false;
        if self.compact_dropdown && !hit.in_compact_dropdown {
            self.compact_dropdown = false;
            changed = true;
        }
        if self.expanded_dropdown && !hit.in_expanded_dropdown {
            self.expanded_dropdown = false;
            changed = true;
        }
        changed
    }

    /// Whether an outside-interaction listener is needed at all.
    #[must_use]
    pub const fn any_dropdown_open(&self) -> bool {
        self.compact_dropdown || self.expanded_dropdown
    }

    pub const fn open_quick_look(&mut self) -> bool {
        if matches!(self.face, Face::Front) {
            self.face = Face::QuickLook;
            true
        } else {
            false
        }
    }

    /// Close quick look; its dropdown goes with it.
    pub const fn close_quick_look(&mut self) -> bool {
        if !matches!(self.face, Face::QuickLook) {
            return false;
        }
        self.face = Face::Front;
        self.expanded_dropdown = false;
        true
    }

    /// A click on the modal layer; only a click on the backdrop itself closes.
    pub const fn backdrop_click(&mut self, on_backdrop: bool) -> bool {
        on_backdrop && self.close_quick_look()
    }

    pub const fn flip(&mut self) -> bool {
        if matches!(self.face, Face::Front) {
            self.face = Face::Flipped;
            true
        } else {
            false
        }
    }

    pub const fn unflip(&mut self) -> bool {
        if matches!(self.face, Face::Flipped) {
            self.face = Face::Front;
            true
        } else {
            false
        }
    }

    pub const fn toggle_flip(&mut self) -> bool {
        match self.face {
            Face::Flipped => self.unflip(),
            _ => self.flip(),
        }
    }

    pub const fn set_card_hover(&mut self, hovered: bool) -> bool {
        let changed = self.hover.card != hovered;
        self.hover.card = hovered;
        if !hovered {
            self.hover.quick_look_button = false;
        }
        changed
    }

    pub const fn set_quick_look_button_hover(&mut self, hovered: bool) -> bool {
        let changed = self.hover.quick_look_button != hovered;
        self.hover.quick_look_button = hovered;
        changed
    }

    const fn surface_mounted(&self, surface: DropdownSurface) -> bool {
        match surface {
            DropdownSurface::Compact => true,
            DropdownSurface::Expanded => matches!(self.face, Face::QuickLook),
        }
    }

    const fn set_dropdown(&mut self, surface: DropdownSurface, open: bool) -> bool {
        let slot = match surface {
            DropdownSurface::Compact => &mut self.compact_dropdown,
            DropdownSurface::Expanded => &mut self.expanded_dropdown,
        };
        let changed = *slot != open;
        *slot = open;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_and_unflipped() {
        let state = OverlayState::new();
        assert!(state.is_closed());
        assert_eq!(state.face(), Face::Front);
        assert!(state.open_overlays().is_empty());
    }

    #[test]
    fn locked_picker_never_opens() {
        let mut state = OverlayState::new();
        assert!(!state.open_dropdown(DropdownSurface::Compact, true));
        assert!(!state.toggle_dropdown(DropdownSurface::Compact, true));
        assert!(state.is_closed());
    }

    #[test]
    fn expanded_dropdown_requires_quick_look() {
        let mut state = OverlayState::new();
        assert!(!state.open_dropdown(DropdownSurface::Expanded, false));
        assert!(state.open_quick_look());
        assert!(state.open_dropdown(DropdownSurface::Expanded, false));
        assert!(state.is_open(Overlay::ExpandedDropdown));
    }

    #[test]
    fn dropdowns_are_independent() {
        let mut state = OverlayState::new();
        state.open_dropdown(DropdownSurface::Compact, false);
        state.open_quick_look();
        state.open_dropdown(DropdownSurface::Expanded, false);
        assert!(state.is_dropdown_open(DropdownSurface::Compact));

        assert!(state.pointer_down(PointerHit::inside(DropdownSurface::Expanded)));
        assert!(!state.is_dropdown_open(DropdownSurface::Compact));
        assert!(state.is_dropdown_open(DropdownSurface::Expanded));
    }

    #[test]
    fn outside_pointer_down_closes_both() {
        let mut state = OverlayState::new();
        state.open_dropdown(DropdownSurface::Compact, false);
        state.open_quick_look();
        state.open_dropdown(DropdownSurface::Expanded, false);
        assert!(state.pointer_down(PointerHit::outside()));
        assert!(!state.any_dropdown_open());
        assert!(state.is_open(Overlay::QuickLook));
        assert!(!state.pointer_down(PointerHit::outside()));
    }

    #[test]
    fn closing_quick_look_drops_expanded_dropdown() {
        let mut state = OverlayState::new();
        state.open_quick_look();
        state.toggle_dropdown(DropdownSurface::Expanded, false);
        assert!(!state.backdrop_click(false));
        assert!(state.backdrop_click(true));
        assert!(state.is_closed());
    }

    #[test]
    fn flip_is_idempotent() {
        let mut state = OverlayState::new();
        assert!(state.flip());
        assert!(!state.flip());
        assert_eq!(state.open_overlays(), vec![Overlay::FlipBack]);
        assert!(state.unflip());
        assert!(!state.unflip());
        assert!(state.is_closed());
    }

    #[test]
    fn quick_look_and_flip_exclude_each_other() {
        let mut state = OverlayState::new();
        state.flip();
        assert!(!state.open_quick_look());
        state.unflip();
        state.open_quick_look();
        assert!(!state.flip());
        assert!(!state.toggle_flip());
        assert_eq!(state.face(), Face::QuickLook);
    }

    #[test]
    fn leaving_card_clears_button_hover() {
        let mut state = OverlayState::new();
        state.set_card_hover(true);
        state.set_quick_look_button_hover(true);
        assert!(state.set_card_hover(false));
        assert_eq!(state.hover(), HoverState::default());
    }
}
