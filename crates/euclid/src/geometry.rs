//! Screen-space geometry of the control: where the ring sits inside its bounds, where the thumb
//! is drawn, and whether a pointer lands on it.
//!
//! Coordinates are the control's local space with `y` growing downwards, so a positive cross
//! product of two vectors means a clockwise turn on screen.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Vector from `origin` to `self`.
    pub fn offset_from(&self, origin: Point) -> (f64, f64) {
        (self.x - origin.x, self.y - origin.y)
    }

    pub fn distance(&self, other: Point) -> f64 {
        let (dx, dy) = self.offset_from(other);
        dx.hypot(dy)
    }

    /// Point at `radius` from `self` in direction `angle` (radians).
    pub fn polar_offset(&self, radius: f64, angle: f64) -> Point {
        Point::new(self.x + radius * angle.cos(), self.y + radius * angle.sin())
    }
}

/// Local drawing rectangle of the control.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub origin: Point,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            width,
            height,
        }
    }

    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.width / 2.0,
            self.origin.y + self.height / 2.0,
        )
    }

    pub fn min_side(&self) -> f64 {
        self.width.min(self.height)
    }
}

/// Radius of the track centerline. The thicker of the thumb and half the track is subtracted
/// so neither the thumb nor the track shadow is clipped by the bounds.
pub fn control_radius(bounds: Bounds, thumb_radius: f64, track_width: f64, has_thumb: bool) -> f64 {
    let thumb_radius = if has_thumb { thumb_radius } else { 0.0 };
    bounds.min_side() / 2.0 - thumb_radius.max(track_width / 2.0)
}

pub fn thumb_center(control_center: Point, control_radius: f64, draw_angle: f64) -> Point {
    control_center.polar_offset(control_radius, draw_angle)
}

pub fn is_within_thumb(point: Point, thumb_center: Point, thumb_radius: f64) -> bool {
    point.distance(thumb_center) <= thumb_radius
}

/// Derived per-frame geometry. Built fresh from the control's current state on every use and
/// never stored, so it cannot go stale after a resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryContext {
    pub center: Point,
    pub control_radius: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    /// Drawing angle of the thumb in radians.
    pub thumb_angle: f64,
    pub thumb_center: Point,
}

impl GeometryContext {
    pub fn compute(
        bounds: Bounds,
        thumb_angle: f64,
        thumb_radius: f64,
        track_width: f64,
        has_thumb: bool,
    ) -> Self {
        let center = bounds.center();
        let radius = control_radius(bounds, thumb_radius, track_width, has_thumb);

        Self {
            center,
            control_radius: radius,
            inner_radius: radius - track_width * 0.5,
            outer_radius: radius + track_width * 0.5,
            thumb_angle,
            thumb_center: thumb_center(center, radius, thumb_angle),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_control_radius_subtracts_thickness() {
        let bounds = Bounds::from_size(200.0, 300.0);
        let cases = vec![
            // (thumb radius, track width, has thumb, expected)
            (14.0, 2.0, true, 86.0),
            (14.0, 40.0, true, 80.0),
            (14.0, 2.0, false, 99.0),
            (0.0, 0.0, true, 100.0),
        ];

        for (thumb_radius, track_width, has_thumb, expected) in cases {
            let radius = control_radius(bounds, thumb_radius, track_width, has_thumb);
            assert!((radius - expected).abs() < EPSILON, "{radius} != {expected}");
        }
    }

    #[test]
    fn test_thumb_center_zero_angle_points_right() {
        let center = Point::new(50.0, 50.0);
        let right = thumb_center(center, 10.0, 0.0);
        assert!((right.x - 60.0).abs() < EPSILON);
        assert!((right.y - 50.0).abs() < EPSILON);

        // y grows downwards, so a quarter turn lands below the center
        let below = thumb_center(center, 10.0, PI / 2.0);
        assert!((below.x - 50.0).abs() < EPSILON);
        assert!((below.y - 60.0).abs() < EPSILON);
    }

    #[test]
    fn test_is_within_thumb_includes_boundary() {
        let thumb = Point::new(10.0, 10.0);
        assert!(is_within_thumb(Point::new(10.0, 10.0), thumb, 5.0));
        assert!(is_within_thumb(Point::new(10.0, 15.0), thumb, 5.0));
        assert!(!is_within_thumb(Point::new(13.0, 14.1), thumb, 5.0));
    }

    #[test]
    fn test_geometry_context_radii() {
        let bounds = Bounds::new(10.0, 20.0, 100.0, 100.0);
        let geometry = GeometryContext::compute(bounds, PI, 10.0, 4.0, true);

        assert_eq!(geometry.center, Point::new(60.0, 70.0));
        assert!((geometry.control_radius - 40.0).abs() < EPSILON);
        assert!((geometry.inner_radius - 38.0).abs() < EPSILON);
        assert!((geometry.outer_radius - 42.0).abs() < EPSILON);
        assert!((geometry.thumb_center.x - 20.0).abs() < EPSILON);
        assert!((geometry.thumb_center.y - 70.0).abs() < EPSILON);
    }
}
