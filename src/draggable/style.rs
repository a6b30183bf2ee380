use itertools::Itertools as _;

/// Inline style properties the controller reads or writes on the host element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum StyleProperty {
    Position,
    Left,
    Top,
    ZIndex,
    BoxShadow,
    BorderRadius,
    Cursor,
    Visibility,
}

impl StyleProperty {
    /// Properties copied from the placeholder back onto the element when it re-docks.
    ///
    /// `Visibility` is not restored: only the placeholder is ever hidden.
    pub const RESTORED_ON_DOCK: [Self; 7] = [
        Self::Position,
        Self::Left,
        Self::Top,
        Self::ZIndex,
        Self::BoxShadow,
        Self::BorderRadius,
        Self::Cursor,
    ];

    pub fn css_name(self) -> &'static str {
        match self {
            Self::Position => "position",
            Self::Left => "left",
            Self::Top => "top",
            Self::ZIndex => "z-index",
            Self::BoxShadow => "box-shadow",
            Self::BorderRadius => "border-radius",
            Self::Cursor => "cursor",
            Self::Visibility => "visibility",
        }
    }
}

/// Stacking level of a floating element.
pub(crate) const FLOATING_Z_INDEX: &str = "999999";

/// Cursor shown while a pointer button is held over the element.
pub(crate) const DRAG_CURSOR: &str = "pointer";

pub(crate) fn px(value: f32) -> String {
    format!("{value}px")
}

/// Parses a CSS pixel length such as `"12.5px"`.
pub(crate) fn parse_px(value: &str) -> Option<f32> {
    value.trim().strip_suffix("px")?.trim().parse().ok()
}

pub(crate) fn box_shadow(shadow_radius: f32) -> String {
    format!("0 0 {}", px(shadow_radius))
}

/// Corners adjacent to a snapped edge. A flagged corner is drawn square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct SnapCorners {
    pub top_left: bool,
    pub top_right: bool,
    pub bottom_right: bool,
    pub bottom_left: bool,
}

impl SnapCorners {
    /// No corner snapped: every corner keeps the configured radius.
    pub const NONE: Self = Self {
        top_left: false,
        top_right: false,
        bottom_right: false,
        bottom_left: false,
    };

    pub fn any(self) -> bool {
        self.top_left || self.top_right || self.bottom_right || self.bottom_left
    }
}

/// Per-corner radius in CSS order (top-left, top-right, bottom-right, bottom-left).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    pub fn same(radius: f32) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    /// `radius` on every corner, except square (0) on the corners flagged in `snapped`.
    pub fn with_snapped(radius: f32, snapped: SnapCorners) -> Self {
        let pick = |flag: bool| if flag { 0.0 } else { radius };
        Self {
            top_left: pick(snapped.top_left),
            top_right: pick(snapped.top_right),
            bottom_right: pick(snapped.bottom_right),
            bottom_left: pick(snapped.bottom_left),
        }
    }

    pub fn to_css(self) -> String {
        [
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
        .into_iter()
        .map(px)
        .join(" ")
    }
}
