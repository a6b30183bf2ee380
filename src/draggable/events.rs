use egui::Vec2;

use super::geometry::WindowSnap;

/// The host events a [`super::Draggable`] listens to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    DragStart,
    PointerMove,
    PointerUp,
    PointerLeave,
}

impl EventKind {
    /// DOM event type name.
    pub fn dom_name(self) -> &'static str {
        match self {
            Self::DragStart => "dragstart",
            Self::PointerMove => "mousemove",
            Self::PointerUp => "mouseup",
            Self::PointerLeave => "mouseleave",
        }
    }
}

/// One listener the host glue must bind on the element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Listener {
    pub kind: EventKind,

    /// Passive listeners can never cancel the platform default.
    pub passive: bool,
}

/// Listeners in registration order. Only drag-start needs to cancel the native drag.
pub const LISTENERS: [Listener; 4] = [
    Listener {
        kind: EventKind::PointerMove,
        passive: true,
    },
    Listener {
        kind: EventKind::PointerUp,
        passive: true,
    },
    Listener {
        kind: EventKind::PointerLeave,
        passive: true,
    },
    Listener {
        kind: EventKind::DragStart,
        passive: false,
    },
];

/// Bitmask of held pointer buttons, as in `MouseEvent.buttons`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Buttons(pub u16);

impl Buttons {
    pub const NONE: Self = Self(0);
    pub const PRIMARY: Self = Self(1);

    pub fn any_held(self) -> bool {
        self.0 != 0
    }
}

/// A synthetic or host-translated event fed to [`super::Draggable::handle_event`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragEvent {
    DragStart,
    PointerMove {
        buttons: Buttons,

        /// Movement since the previous move event (`movementX`/`movementY`).
        movement: Vec2,
    },
    PointerUp,
    PointerLeave {
        buttons: Buttons,
    },
}

impl DragEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::DragStart => EventKind::DragStart,
            Self::PointerMove { .. } => EventKind::PointerMove,
            Self::PointerUp => EventKind::PointerUp,
            Self::PointerLeave { .. } => EventKind::PointerLeave,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Detached,
    Docked,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SnapOutcome {
    /// Returned into the placeholder's slot.
    Container,

    /// Stayed floating and was clamped against the window edges.
    Window(WindowSnap),
}

/// What handling one event did.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EventResponse {
    /// The host must call `preventDefault()` on the native event.
    pub default_prevented: bool,
    pub transition: Option<Transition>,
    pub snap: Option<SnapOutcome>,
}

impl EventResponse {
    pub(crate) fn prevented() -> Self {
        Self {
            default_prevented: true,
            ..Default::default()
        }
    }
}
