use crate::host::HostError;

/// Which radius of [`super::DraggableOptions`] failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RadiusOption {
    Shadow,
    Border,
    Snap,
}

impl RadiusOption {
    pub fn name(self) -> &'static str {
        match self {
            Self::Shadow => "shadow_radius",
            Self::Border => "border_radius",
            Self::Snap => "snap_radius",
        }
    }
}

#[derive(Debug)]
pub enum DraggableError {
    /// No element was supplied at attach time.
    MissingElement,

    /// A radius was NaN, infinite, or negative.
    InvalidRadius { option: RadiusOption, value: f32 },

    /// The host document refused a structural change.
    Host(HostError),

    /// An operation was requested in a mode where it cannot happen.
    InvariantViolation(String),
}

impl DraggableError {
    /// Errors raised while attaching; the controller never came to life.
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::MissingElement | Self::InvalidRadius { .. })
    }
}

impl std::fmt::Display for DraggableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingElement => write!(f, "draggable: element not provided"),
            Self::InvalidRadius { option, value } => write!(
                f,
                "draggable: {} must be a finite non-negative number, got {value}",
                option.name()
            ),
            Self::Host(err) => write!(f, "draggable: host error: {err}"),
            Self::InvariantViolation(what) => write!(f, "draggable: invariant violated: {what}"),
        }
    }
}

impl std::error::Error for DraggableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Host(err) => Some(err),
            Self::MissingElement | Self::InvalidRadius { .. } | Self::InvariantViolation(_) => None,
        }
    }
}

impl From<HostError> for DraggableError {
    fn from(err: HostError) -> Self {
        Self::Host(err)
    }
}
