use egui::{Pos2, Rect, Vec2};

use super::style::SnapCorners;

/// Which edge of one axis the element was clamped to, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum AxisSnap {
    #[default]
    None,
    /// Clamped to 0 (left / top edge).
    Low,
    /// Clamped to `bound - size` (right / bottom edge).
    High,
}

impl AxisSnap {
    pub fn is_snapped(self) -> bool {
        self != Self::None
    }
}

/// Result of clamping a floating element against the window edges.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct WindowSnap {
    /// Position to write back to the element (unchanged on axes that did not snap).
    pub pos: Pos2,
    pub x: AxisSnap,
    pub y: AxisSnap,
}

impl WindowSnap {
    /// Corners touching a snapped edge.
    pub fn corners(&self) -> SnapCorners {
        let (x, y) = (self.x, self.y);
        SnapCorners {
            top_left: x == AxisSnap::Low || y == AxisSnap::Low,
            top_right: x == AxisSnap::High || y == AxisSnap::Low,
            bottom_right: x == AxisSnap::High || y == AxisSnap::High,
            bottom_left: x == AxisSnap::Low || y == AxisSnap::High,
        }
    }

    /// True only when *both* axes snapped.
    ///
    /// This is the historical truthiness of a window snap. A single-edge snap still moves the
    /// element and squares its corners, it just doesn't count here.
    pub fn is_corner_snap(&self) -> bool {
        self.x.is_snapped() && self.y.is_snapped()
    }

    pub fn any_axis_snapped(&self) -> bool {
        self.x.is_snapped() || self.y.is_snapped()
    }
}

/// Clamp one axis: far edge wins over near edge.
pub(crate) fn snap_axis(pos: f32, size: f32, bound: f32, snap_radius: f32) -> (f32, AxisSnap) {
    if pos + size + snap_radius > bound {
        (bound - size, AxisSnap::High)
    } else if pos < snap_radius {
        (0.0, AxisSnap::Low)
    } else {
        (pos, AxisSnap::None)
    }
}

/// Clamp `rect` to the container `bounds` on each axis independently, when within `snap_radius`
/// of an edge.
///
/// `bounds.x` is the container's client width and `bounds.y` the viewport height; both are
/// injected by the caller rather than read from the host.
pub fn snap_to_window(rect: Rect, bounds: Vec2, snap_radius: f32) -> WindowSnap {
    let (x, snap_x) = snap_axis(rect.min.x, rect.width(), bounds.x, snap_radius);
    let (y, snap_y) = snap_axis(rect.min.y, rect.height(), bounds.y, snap_radius);
    WindowSnap {
        pos: Pos2::new(x, y),
        x: snap_x,
        y: snap_y,
    }
}

/// Snap-to-container test: both axis deltas strictly below the radius.
pub fn within_snap_radius(element: Pos2, placeholder: Pos2, snap_radius: f32) -> bool {
    (element.x - placeholder.x).abs() < snap_radius
        && (element.y - placeholder.y).abs() < snap_radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    const BOUNDS: Vec2 = vec2(800.0, 600.0);

    #[test]
    fn container_snap_requires_both_deltas_strictly_inside() {
        let element = pos2(100.0, 100.0);
        assert!(within_snap_radius(element, pos2(105.0, 104.0), 10.0));
        assert!(!within_snap_radius(element, pos2(111.0, 100.0), 10.0));
        assert!(!within_snap_radius(element, pos2(110.0, 100.0), 10.0));
        assert!(!within_snap_radius(element, pos2(100.0, 89.0), 10.0));
        assert!(!within_snap_radius(element, element, 0.0));
    }

    #[test]
    fn far_edge_clamps_to_bound_minus_size() {
        let rect = Rect::from_min_size(pos2(795.0, 300.0), vec2(100.0, 50.0));
        let snap = snap_to_window(rect, BOUNDS, 10.0);
        assert_eq!(snap.pos, pos2(700.0, 300.0));
        assert_eq!(snap.x, AxisSnap::High);
        assert_eq!(snap.y, AxisSnap::None);
    }

    #[test]
    fn near_edge_clamps_to_zero() {
        let rect = Rect::from_min_size(pos2(5.0, 300.0), vec2(100.0, 50.0));
        let snap = snap_to_window(rect, BOUNDS, 10.0);
        assert_eq!(snap.pos, pos2(0.0, 300.0));
        assert_eq!(snap.x, AxisSnap::Low);
    }

    #[test]
    fn far_edge_wins_when_element_fills_the_axis() {
        // Wider than the window: both edge tests pass, the far edge is checked first.
        assert_eq!(snap_axis(2.0, 900.0, 800.0, 10.0), (-100.0, AxisSnap::High));
    }

    #[test]
    fn interior_position_is_untouched() {
        let rect = Rect::from_min_size(pos2(300.0, 200.0), vec2(100.0, 50.0));
        let snap = snap_to_window(rect, BOUNDS, 10.0);
        assert_eq!(snap.pos, rect.min);
        assert!(!snap.any_axis_snapped());
        assert_eq!(snap.corners(), SnapCorners::NONE);
    }

    #[test]
    fn corners_follow_snapped_edges() {
        let mut snap = WindowSnap {
            pos: Pos2::ZERO,
            x: AxisSnap::High,
            y: AxisSnap::None,
        };
        assert_eq!(
            snap.corners(),
            SnapCorners {
                top_left: false,
                top_right: true,
                bottom_right: true,
                bottom_left: false,
            }
        );

        snap.x = AxisSnap::Low;
        snap.y = AxisSnap::Low;
        assert_eq!(
            snap.corners(),
            SnapCorners {
                top_left: true,
                top_right: true,
                bottom_right: false,
                bottom_left: true,
            }
        );
    }

    #[test]
    fn only_two_axis_snap_is_a_corner_snap() {
        let one_axis = snap_to_window(
            Rect::from_min_size(pos2(5.0, 300.0), vec2(100.0, 50.0)),
            BOUNDS,
            10.0,
        );
        assert!(one_axis.any_axis_snapped());
        assert!(!one_axis.is_corner_snap());

        let both = snap_to_window(
            Rect::from_min_size(pos2(5.0, 595.0), vec2(100.0, 50.0)),
            BOUNDS,
            10.0,
        );
        assert_eq!(both.pos, pos2(0.0, 550.0));
        assert!(both.is_corner_snap());
    }
}
