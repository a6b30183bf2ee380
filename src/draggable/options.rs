use super::error::{DraggableError, RadiusOption};

/// Options for [`super::Draggable`].
///
/// The three radii are fixed once the controller is attached. A radius of `0` disables the
/// corresponding effect.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DraggableOptions {
    /// Blur radius (in px) of the shadow drawn around the element while it floats.
    #[cfg_attr(feature = "serde", serde(alias = "shadowRadius"))]
    pub shadow_radius: f32,

    /// Radius (in px) of the corners that are *not* touching a snapped edge while floating.
    #[cfg_attr(feature = "serde", serde(alias = "borderRadius"))]
    pub border_radius: f32,

    /// Distance (in px) within which a released element snaps back into its slot or against a
    /// window edge.
    ///
    /// `0` disables all snapping.
    #[cfg_attr(feature = "serde", serde(alias = "snapRadius", alias = "snapDistance"))]
    pub snap_radius: f32,

    /// If true, record routed events and transitions in a small ring buffer
    /// (see [`super::Draggable::debug_log`]).
    pub debug_event_log: bool,

    /// Maximum number of debug log lines to keep (ring buffer).
    pub debug_event_log_capacity: usize,

    /// If true, check the docked/floating invariants after every event.
    pub debug_integrity: bool,

    /// If true, panic on integrity issues.
    pub debug_integrity_panic: bool,
}

impl Default for DraggableOptions {
    fn default() -> Self {
        Self {
            shadow_radius: 0.0,
            border_radius: 0.0,
            snap_radius: 0.0,
            debug_event_log: false,
            debug_event_log_capacity: 200,
            debug_integrity: false,
            debug_integrity_panic: false,
        }
    }
}

impl DraggableOptions {
    pub fn with_radii(shadow_radius: f32, border_radius: f32, snap_radius: f32) -> Self {
        Self {
            shadow_radius,
            border_radius,
            snap_radius,
            ..Default::default()
        }
    }

    /// A NaN radius counts as unset and becomes `0` (disabled).
    #[must_use]
    pub fn normalized(self) -> Self {
        let unset_nan = |value: f32| if value.is_nan() { 0.0 } else { value };
        Self {
            shadow_radius: unset_nan(self.shadow_radius),
            border_radius: unset_nan(self.border_radius),
            snap_radius: unset_nan(self.snap_radius),
            ..self
        }
    }

    /// NaN fails here too; [`super::Draggable::attach`] runs [`Self::normalized`] first.
    ///
    /// # Errors
    /// [`DraggableError::InvalidRadius`] for the first radius that is not a finite, non-negative
    /// number.
    pub fn validate(&self) -> Result<(), DraggableError> {
        for (option, value) in [
            (RadiusOption::Shadow, self.shadow_radius),
            (RadiusOption::Border, self.border_radius),
            (RadiusOption::Snap, self.snap_radius),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(DraggableError::InvalidRadius { option, value });
            }
        }
        Ok(())
    }

    pub(crate) fn snapping_enabled(&self) -> bool {
        self.snap_radius > 0.0
    }

    pub(crate) fn debug_event_log_capacity_clamped(&self) -> usize {
        self.debug_event_log_capacity.clamp(1, 10_000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_disable_every_effect() {
        let opt = DraggableOptions::default();
        assert!(opt.validate().is_ok());
        assert!(!opt.snapping_enabled());
        assert_eq!(opt, DraggableOptions::with_radii(0.0, 0.0, 0.0));
    }

    #[test]
    fn infinite_or_negative_radius_is_a_configuration_error() {
        for (opt, expected) in [
            (
                DraggableOptions::with_radii(f32::NEG_INFINITY, 0.0, 0.0),
                RadiusOption::Shadow,
            ),
            (
                DraggableOptions::with_radii(0.0, f32::INFINITY, 0.0),
                RadiusOption::Border,
            ),
            (DraggableOptions::with_radii(0.0, 0.0, -1.0), RadiusOption::Snap),
        ] {
            match opt.normalized().validate() {
                Err(err @ DraggableError::InvalidRadius { option, .. }) => {
                    assert_eq!(option, expected);
                    assert!(err.is_configuration_error());
                    assert!(err.to_string().contains(expected.name()), "{err}");
                }
                other => panic!("expected InvalidRadius, got {other:?}"),
            }
        }
    }

    #[test]
    fn nan_radius_normalizes_to_disabled() {
        let opt = DraggableOptions::with_radii(f32::NAN, 8.0, f32::NAN).normalized();
        assert_eq!(opt, DraggableOptions::with_radii(0.0, 8.0, 0.0));
        assert!(opt.validate().is_ok());
        assert!(!opt.snapping_enabled());
    }

    #[test]
    fn event_log_capacity_is_clamped() {
        let opt = DraggableOptions {
            debug_event_log_capacity: 0,
            ..Default::default()
        };
        assert_eq!(opt.debug_event_log_capacity_clamped(), 1);

        let opt = DraggableOptions {
            debug_event_log_capacity: usize::MAX,
            ..Default::default()
        };
        assert_eq!(opt.debug_event_log_capacity_clamped(), 10_000);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_camel_case_and_legacy_snap_distance() {
        let opt: DraggableOptions =
            serde_json::from_str(r#"{ "shadowRadius": 4, "borderRadius": 8, "snapRadius": 10 }"#)
                .expect("valid json");
        assert_eq!(opt, DraggableOptions::with_radii(4.0, 8.0, 10.0));

        let legacy: DraggableOptions =
            serde_json::from_str(r#"{ "snapDistance": 12 }"#).expect("valid json");
        assert_eq!(legacy.snap_radius, 12.0);
        assert_eq!(legacy.shadow_radius, 0.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_from_ron_with_defaults() {
        let opt: DraggableOptions =
            ron::from_str("(border_radius: 6.0, debug_event_log: true)").expect("valid ron");
        assert_eq!(opt.border_radius, 6.0);
        assert!(opt.debug_event_log);
        assert_eq!(opt.debug_event_log_capacity, 200);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn string_radius_is_rejected() {
        let result = serde_json::from_str::<DraggableOptions>(r#"{ "snapRadius": "10" }"#);
        assert!(result.is_err());
    }
}
