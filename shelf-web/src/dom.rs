use shelf_engine::{Point, Rect, Size};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, HtmlImageElement, MouseEvent, Node, Window};
use yew::NodeRef;

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// A document-level event listener that unregisters itself when dropped.
pub struct DocumentListener {
    document: Document,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl DocumentListener {
    /// Attach `handler` to `event` on the document.
    ///
    /// # Errors
    /// Returns an error if there is no document or the browser rejects the listener.
    pub fn new<F>(event: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let document = document().ok_or_else(|| JsValue::from_str("document unavailable"))?;
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        document.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            document,
            event,
            callback,
        })
    }
}

impl Drop for DocumentListener {
    fn drop(&mut self) {
        let _ = self.document.remove_event_listener_with_callback(
            self.event,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// Whether the element behind `container` contains `target`.
/// An unmounted container contains nothing.
#[must_use]
pub fn node_contains(container: &NodeRef, target: Option<&EventTarget>) -> bool {
    let Some(container) = container.cast::<Node>() else {
        return false;
    };
    let target = target.and_then(|t| t.dyn_ref::<Node>());
    container.contains(target)
}

/// Pointer position in viewport coordinates.
#[must_use]
pub fn client_point(event: &MouseEvent) -> Point {
    Point::new(f64::from(event.client_x()), f64::from(event.client_y()))
}

/// Bounding rectangle of the mounted element behind `node`.
///
/// Yew delegates listeners to the app root, so handlers locate their element
/// through a `NodeRef` rather than `current_target`.
#[must_use]
pub fn element_rect(node: &NodeRef) -> Option<Rect> {
    let rect = node.cast::<Element>()?.get_bounding_client_rect();
    Some(Rect::new(rect.left(), rect.top(), rect.width(), rect.height()))
}

/// Pointer position relative to the top-left of the element behind `node`.
#[must_use]
pub fn offset_in(node: &NodeRef, event: &MouseEvent) -> Option<Point> {
    let rect = element_rect(node)?;
    let client = client_point(event);
    Some(Point::new(client.x - rect.left, client.y - rect.top))
}

/// Natural pixel size of the image that fired a load event.
#[must_use]
pub fn loaded_image_size(event: &Event) -> Option<Size> {
    let image = event.target()?.dyn_into::<HtmlImageElement>().ok()?;
    Some(Size::new(
        f64::from(image.natural_width()),
        f64::from(image.natural_height()),
    ))
}

/// Whether the event's target is exactly the element behind `node`, not a descendant.
#[must_use]
pub fn targets_node(node: &NodeRef, event: &Event) -> bool {
    let Some(element) = node.cast::<Node>() else {
        return false;
    };
    event
        .target()
        .and_then(|target| target.dyn_into::<Node>().ok())
        .is_some_and(|target| target.is_same_node(Some(&element)))
}
