//! Browser DOM backend: [`WebHost`] implements [`DragHost`] over `web-sys`, and
//! [`attach_html_element`] binds the listener table to a live element.

use std::cell::RefCell;
use std::rc::Rc;

use egui::{Rect, Vec2, pos2, vec2};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Document, HtmlElement, MouseEvent, Window};

use super::{DragHost, HostError};
use crate::draggable::{
    Buttons, DragEvent, Draggable, DraggableError, DraggableOptions, EventKind, LISTENERS, Mode,
    StyleProperty,
};

fn js_error(err: &JsValue) -> HostError {
    HostError::Js(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

/// The current window's document. `document.body` is the root; `window.innerHeight` the
/// viewport height.
pub struct WebHost {
    window: Window,
    document: Document,
}

impl WebHost {
    /// # Errors
    /// [`HostError::NoRoot`] outside a browser window.
    pub fn new() -> Result<Self, HostError> {
        let window = web_sys::window().ok_or(HostError::NoRoot)?;
        let document = window.document().ok_or(HostError::NoRoot)?;
        Ok(Self { window, document })
    }
}

impl DragHost for WebHost {
    type Element = HtmlElement;

    fn bounding_rect(&self, element: &HtmlElement) -> Rect {
        let rect = element.get_bounding_client_rect();
        Rect::from_min_size(
            pos2(rect.x() as f32, rect.y() as f32),
            vec2(element.client_width() as f32, element.client_height() as f32),
        )
    }

    fn viewport_size(&self) -> Vec2 {
        let width = self.document.body().map_or(0, |body| body.client_width());
        let height = self
            .window
            .inner_height()
            .ok()
            .and_then(|height| height.as_f64())
            .unwrap_or_default();
        vec2(width as f32, height as f32)
    }

    fn style(&self, element: &HtmlElement, property: StyleProperty) -> Option<String> {
        element
            .style()
            .get_property_value(property.css_name())
            .ok()
            .filter(|value| !value.is_empty())
    }

    fn set_style(&mut self, element: &HtmlElement, property: StyleProperty, value: Option<&str>) {
        let style = element.style();
        let result = match value {
            Some(value) => style.set_property(property.css_name(), value),
            None => style.remove_property(property.css_name()).map(|_old| ()),
        };
        if let Err(err) = result {
            log::warn!(
                "draggable: setting {} failed: {}",
                property.css_name(),
                js_error(&err)
            );
        }
    }

    fn clone_shallow(&mut self, element: &HtmlElement) -> Result<HtmlElement, HostError> {
        element
            .clone_node()
            .map_err(|err| js_error(&err))?
            .dyn_into::<HtmlElement>()
            .map_err(|node| HostError::Js(format!("shallow clone is not an HtmlElement: {node:?}")))
    }

    fn replace_with(&mut self, old: &HtmlElement, new: &HtmlElement) -> Result<(), HostError> {
        let parent = old.parent_node().ok_or(HostError::NoParent)?;
        parent
            .replace_child(new, old)
            .map(|_old| ())
            .map_err(|err| js_error(&err))
    }

    fn append_to_root(&mut self, element: &HtmlElement) -> Result<(), HostError> {
        let body = self.document.body().ok_or(HostError::NoRoot)?;
        body.append_child(element)
            .map(|_appended| ())
            .map_err(|err| js_error(&err))
    }

    fn is_connected(&self, element: &HtmlElement) -> bool {
        element.is_connected()
    }

    fn is_root_child(&self, element: &HtmlElement) -> bool {
        match (element.parent_element(), self.document.body()) {
            (Some(parent), Some(body)) => {
                let body: &web_sys::Element = body.as_ref();
                &parent == body
            }
            _ => false,
        }
    }
}

type ListenerClosure = Closure<dyn FnMut(MouseEvent)>;

/// A draggable bound to a live DOM element. Dropping it unbinds every listener; the element
/// stays wherever it currently is.
pub struct WebDraggable {
    element: HtmlElement,
    draggable: Rc<RefCell<Draggable<HtmlElement>>>,
    listeners: Vec<(EventKind, ListenerClosure)>,
}

impl WebDraggable {
    pub fn element(&self) -> &HtmlElement {
        &self.element
    }

    pub fn is_floating(&self) -> bool {
        self.draggable.borrow().is_floating()
    }

    /// Current mode, with the placeholder element while floating.
    pub fn mode(&self) -> Mode<HtmlElement> {
        self.draggable.borrow().mode().clone()
    }

    pub fn debug_log_text(&self) -> String {
        self.draggable.borrow().debug_log_text()
    }
}

impl Drop for WebDraggable {
    fn drop(&mut self) {
        for (kind, closure) in self.listeners.drain(..) {
            let callback = closure.as_ref().unchecked_ref();
            if let Err(err) = self
                .element
                .remove_event_listener_with_callback(kind.dom_name(), callback)
            {
                log::warn!(
                    "draggable: removing {} listener failed: {}",
                    kind.dom_name(),
                    js_error(&err)
                );
            }
        }
    }
}

/// Make a DOM element draggable: drag-start tears it off, release snaps it back or against the
/// window edges.
///
/// # Errors
/// [`DraggableError::MissingElement`] / [`DraggableError::InvalidRadius`] as for
/// [`Draggable::attach`], or [`DraggableError::Host`] if a listener cannot be bound.
pub fn attach_html_element(
    element: Option<HtmlElement>,
    options: DraggableOptions,
) -> Result<WebDraggable, DraggableError> {
    let draggable = Draggable::attach(element, options)?;
    let mut bound = WebDraggable {
        element: draggable.element().clone(),
        draggable: Rc::new(RefCell::new(draggable)),
        listeners: Vec::with_capacity(LISTENERS.len()),
    };

    for listener in LISTENERS {
        let state = Rc::clone(&bound.draggable);
        let kind = listener.kind;
        let closure = ListenerClosure::new(move |event: MouseEvent| dispatch(&state, kind, &event));

        let listener_options = AddEventListenerOptions::new();
        listener_options.set_passive(listener.passive);
        bound
            .element
            .add_event_listener_with_callback_and_add_event_listener_options(
                kind.dom_name(),
                closure.as_ref().unchecked_ref(),
                &listener_options,
            )
            .map_err(|err| DraggableError::Host(js_error(&err)))?;
        bound.listeners.push((kind, closure));
    }

    Ok(bound)
}

fn translate(kind: EventKind, event: &MouseEvent) -> DragEvent {
    let buttons = Buttons(event.buttons());
    match kind {
        EventKind::DragStart => DragEvent::DragStart,
        EventKind::PointerMove => DragEvent::PointerMove {
            buttons,
            movement: vec2(event.movement_x() as f32, event.movement_y() as f32),
        },
        EventKind::PointerUp => DragEvent::PointerUp,
        EventKind::PointerLeave => DragEvent::PointerLeave { buttons },
    }
}

fn dispatch(state: &Rc<RefCell<Draggable<HtmlElement>>>, kind: EventKind, event: &MouseEvent) {
    let mut host = match WebHost::new() {
        Ok(host) => host,
        Err(err) => {
            log::error!("draggable: {err}");
            return;
        }
    };

    // Moving the element in the tree can synchronously fire another event on it.
    let Ok(mut draggable) = state.try_borrow_mut() else {
        log::trace!("draggable: re-entrant {} ignored", kind.dom_name());
        return;
    };

    match draggable.handle_event(&mut host, translate(kind, event)) {
        Ok(response) => {
            if response.default_prevented {
                event.prevent_default();
            }
        }
        Err(err) => log::error!("{err}"),
    }
}
