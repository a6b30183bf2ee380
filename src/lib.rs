//! Drag-to-detach and snap-back behavior for a single document element.
//!
//! Attach a [`Draggable`] to an element, bind [`LISTENERS`] in your host, and forward each event
//! to [`Draggable::handle_event`] together with a [`DragHost`]. A drag-start tears the element off
//! into a fixed-position floating layer; releasing it near its original slot docks it back, and
//! releasing it near a window edge clamps it there.
//!
//! [`MemoryHost`] is a headless document for tests and non-browser hosts. With the `web` feature on
//! `wasm32`, `host::web::attach_html_element` does all of the above for a real DOM element.

#![forbid(unsafe_code)]

pub mod draggable;
pub mod host;

pub use draggable::{
    AxisSnap, Buttons, CornerRadii, DragEvent, Draggable, DraggableError, DraggableOptions,
    EventKind, EventResponse, LISTENERS, Listener, Mode, ModeKind, RadiusOption, SnapCorners,
    SnapOutcome, StyleProperty, Transition, WindowSnap, attach, draggable_integrity_issues,
    snap_to_window, within_snap_radius,
};
pub use host::{DragHost, HostError, MemoryHost, NodeId};

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use host::web::{WebDraggable, WebHost, attach_html_element};
