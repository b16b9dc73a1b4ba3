//! Tile stylesheet, installed once per document.

/// Element id of the injected `<style>` node.
pub const STYLE_ELEMENT_ID: &str = "shelf-tile-styles";

/// Static rules the inline engine-driven styles rely on.
///
/// Covers the active dropdown item, the suppressed default toggle arrow, and the
/// 3D flip card faces.
#[must_use]
pub const fn tile_css() -> &'static str {
    ".shelf-tile .dropdown-item.active,.shelf-tile .dropdown-item:active{background-color:#e5e7eb !important;color:#222 !important}\
.shelf-tile .dropdown-toggle::after{display:none !important}\
.shelf-option--unavailable{color:#9ca3af;text-decoration:line-through}\
.shelf-flip{transform-style:preserve-3d;transition:transform .2s ease}\
.shelf-flip__tilt{transform-style:preserve-3d;position:relative;height:100%}\
.shelf-flip__face{backface-visibility:hidden;position:absolute;inset:0}\
.shelf-flip__face--back{transform:rotateY(180deg)}\
.shelf-magnifier{position:absolute;width:120px;height:120px;background-repeat:no-repeat;pointer-events:none;z-index:10}"
}

/// Insert the stylesheet unless a node with [`STYLE_ELEMENT_ID`] already exists.
///
/// Returns `true` when this call inserted it. Safe to call from every mount.
#[cfg(target_arch = "wasm32")]
pub fn ensure_installed() -> bool {
    let Some(document) = crate::dom::document() else {
        return false;
    };
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return false;
    }
    let Some(head) = document.head() else {
        return false;
    };
    let inserted = document.create_element("style").and_then(|style| {
        style.set_id(STYLE_ELEMENT_ID);
        style.set_text_content(Some(tile_css()));
        head.append_child(&style)
    });
    match inserted {
        Ok(_) => true,
        Err(err) => {
            crate::dom::console_error(&format!(
                "Failed to install tile styles: {}",
                crate::dom::js_error_message(&err)
            ));
            false
        }
    }
}

/// Without a DOM there is nothing to install.
#[cfg(not(target_arch = "wasm32"))]
pub const fn ensure_installed() -> bool {
    false
}
