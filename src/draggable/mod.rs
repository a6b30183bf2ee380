use std::collections::VecDeque;

use egui::{Pos2, Vec2};

use crate::host::DragHost;

mod debug;
mod error;
mod events;
mod geometry;
mod integrity;
mod options;
pub(crate) mod style;


pub use error::{DraggableError, RadiusOption};
pub use events::{
    Buttons, DragEvent, EventKind, EventResponse, LISTENERS, Listener, SnapOutcome, Transition,
};
pub use geometry::{AxisSnap, WindowSnap, snap_to_window, within_snap_radius};
pub use integrity::draggable_integrity_issues;
pub use options::DraggableOptions;
pub use style::{CornerRadii, SnapCorners, StyleProperty};

use style::{DRAG_CURSOR, FLOATING_Z_INDEX, box_shadow, px};

/// Where the element currently lives. The placeholder exists exactly while floating.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode<E> {
    /// In its original container, waiting for a drag-start to tear it off.
    Docked,

    /// Fixed-position in the document root, following pointer movement.
    Floating {
        /// Invisible shallow clone holding the docked slot.
        placeholder: E,
    },
}

impl<E> Mode<E> {
    pub fn kind(&self) -> ModeKind {
        match self {
            Self::Docked => ModeKind::Docked,
            Self::Floating { .. } => ModeKind::Floating,
        }
    }

    pub fn is_floating(&self) -> bool {
        matches!(self, Self::Floating { .. })
    }

    pub fn placeholder(&self) -> Option<&E> {
        match self {
            Self::Docked => None,
            Self::Floating { placeholder } => Some(placeholder),
        }
    }
}

/// [`Mode`] without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModeKind {
    Docked,
    Floating,
}

impl ModeKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Docked => "docked",
            Self::Floating => "floating",
        }
    }
}

/// What an event does in a given mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    /// Tear the element off into the floating layer.
    Detach,

    /// Swallow the native drag and reset the snap borders.
    PreventDrag,

    /// Cursor feedback, plus repositioning by `movement` when floating.
    TrackPointer {
        buttons: Buttons,
        movement: Option<Vec2>,
    },

    /// Evaluate snap-to-container, then snap-to-window.
    Snap,

    Ignore,
}

/// The dispatch table: one action per (mode, event).
pub fn route(mode: ModeKind, event: &DragEvent) -> Action {
    match (mode, *event) {
        (ModeKind::Docked, DragEvent::DragStart) => Action::Detach,
        (ModeKind::Floating, DragEvent::DragStart) => Action::PreventDrag,

        (ModeKind::Docked, DragEvent::PointerMove { buttons, .. }) => Action::TrackPointer {
            buttons,
            movement: None,
        },
        (ModeKind::Floating, DragEvent::PointerMove { buttons, movement }) => {
            Action::TrackPointer {
                buttons,
                movement: Some(movement),
            }
        }

        (ModeKind::Floating, DragEvent::PointerUp) => Action::Snap,
        (ModeKind::Floating, DragEvent::PointerLeave { buttons }) if buttons.any_held() => {
            Action::Snap
        }

        (ModeKind::Docked, DragEvent::PointerUp | DragEvent::PointerLeave { .. })
        | (ModeKind::Floating, DragEvent::PointerLeave { .. }) => Action::Ignore,
    }
}

/// Drag-to-detach and snap-back behavior for one element.
///
/// Lifecycle:
/// - A drag-start while [`Mode::Docked`] tears the element off: a hidden placeholder takes its
///   slot and the element floats, fixed-positioned, in the document root.
/// - Pointer moves with a button held shift the floating element by the movement delta.
/// - Releasing (or leaving with a button held) snaps the element back into its slot when it is
///   within `snap_radius` of the placeholder on both axes, otherwise clamps it against the
///   window edges and squares the corners touching them.
///
/// The controller never reads ambient state: every host interaction goes through the
/// [`DragHost`] passed to [`Self::handle_event`].
#[derive(Debug)]
pub struct Draggable<E> {
    options: DraggableOptions,
    element: E,
    mode: Mode<E>,

    debug_log: VecDeque<String>,
    event_serial: u64,
    last_integrity_hash: Option<u64>,
}

/// Shorthand for [`Draggable::attach`].
///
/// # Errors
/// See [`Draggable::attach`].
pub fn attach<E: Clone + std::fmt::Debug>(
    element: Option<E>,
    options: DraggableOptions,
) -> Result<Draggable<E>, DraggableError> {
    Draggable::attach(element, options)
}

impl<E: Clone + std::fmt::Debug> Draggable<E> {
    /// Make `element` draggable. The host glue must then bind [`LISTENERS`] and forward the
    /// events to [`Self::handle_event`].
    ///
    /// # Errors
    /// [`DraggableError::MissingElement`] if `element` is `None`, and
    /// [`DraggableError::InvalidRadius`] if a radius is infinite or negative. A NaN radius is
    /// treated as unset (`0`).
    pub fn attach(element: Option<E>, options: DraggableOptions) -> Result<Self, DraggableError> {
        let element = element.ok_or(DraggableError::MissingElement)?;
        let options = options.normalized();
        options.validate()?;

        log::debug!(
            "draggable attached to {element:?} (shadow={} border={} snap={})",
            options.shadow_radius,
            options.border_radius,
            options.snap_radius
        );

        Ok(Self {
            options,
            element,
            mode: Mode::Docked,
            debug_log: VecDeque::new(),
            event_serial: 0,
            last_integrity_hash: None,
        })
    }

    pub fn options(&self) -> &DraggableOptions {
        &self.options
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    pub fn mode(&self) -> &Mode<E> {
        &self.mode
    }

    pub fn is_floating(&self) -> bool {
        self.mode.is_floating()
    }

    /// Route one host event through the dispatch table and apply it.
    ///
    /// # Errors
    /// [`DraggableError::Host`] when the host refuses a structural change. The mode only changes
    /// once a transition has fully succeeded.
    pub fn handle_event<H>(
        &mut self,
        host: &mut H,
        event: DragEvent,
    ) -> Result<EventResponse, DraggableError>
    where
        H: DragHost<Element = E>,
    {
        self.event_serial = self.event_serial.wrapping_add(1);
        let mode = self.mode.kind();
        let action = route(mode, &event);
        log::trace!("draggable {}: {event:?} -> {action:?}", mode.name());
        if action != Action::Ignore {
            self.debug_log_event(format!("{} {:?} -> {action:?}", mode.name(), event.kind()));
        }

        let response = match action {
            Action::Detach => {
                self.detach(host)?;
                EventResponse {
                    default_prevented: true,
                    transition: Some(Transition::Detached),
                    snap: None,
                }
            }
            Action::PreventDrag => {
                self.draw_snap_border(host, SnapCorners::NONE);
                EventResponse::prevented()
            }
            Action::TrackPointer { buttons, movement } => {
                self.track_pointer(host, buttons, movement);
                EventResponse::default()
            }
            Action::Snap => {
                let snap = self.snap(host)?;
                EventResponse {
                    default_prevented: false,
                    transition: matches!(snap, Some(SnapOutcome::Container))
                        .then_some(Transition::Docked),
                    snap,
                }
            }
            Action::Ignore => EventResponse::default(),
        };

        if self.options.debug_integrity {
            self.check_integrity(host);
        }

        Ok(response)
    }

    /// Set each corner's radius: square where flagged, the configured radius elsewhere.
    pub fn draw_snap_border<H>(&self, host: &mut H, snapped: SnapCorners)
    where
        H: DragHost<Element = E>,
    {
        let radii = CornerRadii::with_snapped(self.options.border_radius, snapped);
        host.set_style(
            &self.element,
            StyleProperty::BorderRadius,
            Some(&radii.to_css()),
        );
    }

    fn detach<H>(&mut self, host: &mut H) -> Result<(), DraggableError>
    where
        H: DragHost<Element = E>,
    {
        debug_assert!(!self.mode.is_floating(), "detach requested while floating");
        if self.mode.is_floating() {
            return Err(DraggableError::InvariantViolation(
                "detach requested while floating".to_owned(),
            ));
        }

        // Cloned before any style change: the placeholder keeps the docked inline style, which is
        // what gets restored on re-dock.
        let placeholder = host.clone_shallow(&self.element)?;
        let rect = host.bounding_rect(&self.element);

        // Structural moves first: on failure the element is back in its slot, unstyled.
        host.replace_with(&self.element, &placeholder)?;
        if let Err(err) = host.append_to_root(&self.element) {
            if let Err(restore_err) = host.replace_with(&placeholder, &self.element) {
                log::error!(
                    "draggable {:?}: restoring after failed detach: {restore_err}",
                    self.element
                );
            }
            return Err(err.into());
        }

        host.set_style(&placeholder, StyleProperty::Visibility, Some("hidden"));
        self.draw_snap_border(host, SnapCorners::NONE);
        self.set_position(host, rect.min);
        let element = &self.element;
        host.set_style(element, StyleProperty::Position, Some("fixed"));
        host.set_style(element, StyleProperty::ZIndex, Some(FLOATING_Z_INDEX));
        host.set_style(
            element,
            StyleProperty::BoxShadow,
            Some(&box_shadow(self.options.shadow_radius)),
        );

        log::debug!("draggable {element:?} detached at {:?}", rect.min);
        self.debug_log_event(format!("detached at {:?}", rect.min));
        self.mode = Mode::Floating { placeholder };
        Ok(())
    }

    fn dock<H>(&mut self, host: &mut H) -> Result<(), DraggableError>
    where
        H: DragHost<Element = E>,
    {
        debug_assert!(self.mode.is_floating(), "dock requested while docked");
        let Mode::Floating { placeholder } = &self.mode else {
            return Err(DraggableError::InvariantViolation(
                "dock requested while docked".to_owned(),
            ));
        };

        host.replace_with(placeholder, &self.element)?;
        for property in StyleProperty::RESTORED_ON_DOCK {
            let value = host.style(placeholder, property);
            host.set_style(&self.element, property, value.as_deref());
        }

        log::debug!("draggable {:?} docked", self.element);
        self.debug_log_event("docked");
        self.mode = Mode::Docked;
        Ok(())
    }

    fn track_pointer<H>(&self, host: &mut H, buttons: Buttons, movement: Option<Vec2>)
    where
        H: DragHost<Element = E>,
    {
        if !buttons.any_held() {
            host.set_style(&self.element, StyleProperty::Cursor, None);
            return;
        }

        if let Some(movement) = movement {
            // Relative: the host's current rect plus the delta, not the absolute pointer position.
            let pos = host.bounding_rect(&self.element).min + movement;
            self.set_position(host, pos);
        }
        host.set_style(&self.element, StyleProperty::Cursor, Some(DRAG_CURSOR));
    }

    /// `None` when snapping is disabled.
    fn snap<H>(&mut self, host: &mut H) -> Result<Option<SnapOutcome>, DraggableError>
    where
        H: DragHost<Element = E>,
    {
        if !self.options.snapping_enabled() {
            return Ok(None);
        }
        let Mode::Floating { placeholder } = &self.mode else {
            return Err(DraggableError::InvariantViolation(
                "snap requested while docked".to_owned(),
            ));
        };

        let radius = self.options.snap_radius;
        let element_rect = host.bounding_rect(&self.element);
        let placeholder_rect = host.bounding_rect(placeholder);
        if within_snap_radius(element_rect.min, placeholder_rect.min, radius) {
            self.dock(host)?;
            return Ok(Some(SnapOutcome::Container));
        }

        let snap = snap_to_window(element_rect, host.viewport_size(), radius);
        self.set_position(host, snap.pos);
        self.draw_snap_border(host, snap.corners());
        if snap.any_axis_snapped() {
            self.debug_log_event(format!(
                "window snap x={:?} y={:?} corner={}",
                snap.x,
                snap.y,
                snap.is_corner_snap()
            ));
        }
        Ok(Some(SnapOutcome::Window(snap)))
    }

    fn set_position<H>(&self, host: &mut H, pos: Pos2)
    where
        H: DragHost<Element = E>,
    {
        host.set_style(&self.element, StyleProperty::Left, Some(&px(pos.x)));
        host.set_style(&self.element, StyleProperty::Top, Some(&px(pos.y)));
    }

    fn check_integrity<H>(&mut self, host: &H)
    where
        H: DragHost<Element = E>,
    {
        let issues = draggable_integrity_issues(self, host);
        if issues.is_empty() {
            self.last_integrity_hash = None;
            return;
        }

        let hash = integrity::hash_issues(&issues);
        if self.last_integrity_hash != Some(hash) {
            self.last_integrity_hash = Some(hash);
            for issue in &issues {
                log::warn!("draggable {:?}: {issue}", self.element);
                self.debug_integrity_log_event(issue.clone());
            }
        }

        assert!(
            !self.options.debug_integrity_panic,
            "draggable integrity failed:\n{}",
            issues.join("\n")
        );
    }
}
