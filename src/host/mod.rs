//! The document a [`crate::Draggable`] manipulates, abstracted as a capability trait.

use egui::{Rect, Vec2};

use crate::draggable::StyleProperty;

mod memory;
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub mod web;

pub use memory::{MemoryHost, NodeId};

/// Geometry reads, inline style access and subtree surgery on a host document.
///
/// Implementations own the document; the controller only ever holds element handles.
pub trait DragHost {
    type Element: Clone + std::fmt::Debug;

    /// On-screen position of the element plus its client size.
    fn bounding_rect(&self, element: &Self::Element) -> Rect;

    /// Width of the root container and height of the viewport: the bounds of a window snap.
    fn viewport_size(&self) -> Vec2;

    /// Inline style value, `None` when the property is unset.
    fn style(&self, element: &Self::Element, property: StyleProperty) -> Option<String>;

    /// Set (`Some`) or remove (`None`) an inline style property.
    fn set_style(&mut self, element: &Self::Element, property: StyleProperty, value: Option<&str>);

    /// Copy of the element with its attributes and inline style, but no children and no parent.
    ///
    /// # Errors
    /// If the host cannot produce a compatible element.
    fn clone_shallow(&mut self, element: &Self::Element) -> Result<Self::Element, HostError>;

    /// Put `new` where `old` is in `old`'s parent, detaching `old`.
    ///
    /// # Errors
    /// [`HostError::NoParent`] if `old` is not in the document tree.
    fn replace_with(&mut self, old: &Self::Element, new: &Self::Element) -> Result<(), HostError>;

    /// Move the element to the end of the document root.
    ///
    /// # Errors
    /// [`HostError::NoRoot`] if the document has no root container.
    fn append_to_root(&mut self, element: &Self::Element) -> Result<(), HostError>;

    fn is_connected(&self, element: &Self::Element) -> bool;

    /// Is the element a direct child of the document root?
    fn is_root_child(&self, element: &Self::Element) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    NoParent,
    NoRoot,

    /// A host call failed; the message is the host's own.
    Js(String),
}

impl std::fmt::Display for HostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoParent => write!(f, "element has no parent node"),
            Self::NoRoot => write!(f, "document has no root container"),
            Self::Js(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for HostError {}
