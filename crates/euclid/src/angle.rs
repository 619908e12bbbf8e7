//! Conversions between value space, track angles and drawing angles.
//!
//! - Track angles are degrees measured clockwise from `trackMinAngle`, in `[0, 360)` when they
//!   come from a pointer position.
//! - Drawing angles are radians rotated by half a turn, so the zero of the track sits on the
//!   left of the ring and angles grow clockwise on screen.

use crate::error::{ControlError, ensure_finite};
use crate::geometry::Point;
use crate::range::ValueRange;
use std::f64::consts::PI;

/// Angular sweep of the track in degrees. `min < max`; the sweep may exceed a full turn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngularSpan {
    min: f64,
    max: f64,
}

impl Default for AngularSpan {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 360.0,
        }
    }
}

impl AngularSpan {
    pub fn new(min: f64, max: f64) -> Result<Self, ControlError> {
        let min = ensure_finite("track min angle", min)?;
        let max = ensure_finite("track max angle", max)?;
        if max <= min {
            return Err(ControlError::EmptySpan { min, max });
        }
        ensure_finite("track angle sweep", max - min)?;
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn sweep(&self) -> f64 {
        self.max - self.min
    }
}

/// Absolute degrees to a drawing angle.
pub fn degrees_to_draw_angle(degrees: f64) -> f64 {
    degrees / 180.0 * PI + PI
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AngleMapper {
    pub range: ValueRange,
    pub span: AngularSpan,
}

impl AngleMapper {
    pub fn new(range: ValueRange, span: AngularSpan) -> Self {
        Self { range, span }
    }

    pub fn value_to_draw_angle(&self, value: f64) -> f64 {
        degrees_to_draw_angle(self.value_to_track_angle(value) + self.span.min())
    }

    /// Track angle of `value`, unwrapped: it runs from `0` to the full sweep without passing
    /// through a pointer position.
    pub fn value_to_track_angle(&self, value: f64) -> f64 {
        self.range.normalize(value) * self.span.sweep()
    }

    /// Drawing angle of a track angle, the inverse of [`Self::point_to_track_angle`].
    pub fn track_angle_to_draw_angle(&self, track_angle: f64) -> f64 {
        degrees_to_draw_angle(track_angle + self.span.min())
    }

    /// Track angle of `point` around `center`, in `[0, 360)` with `0` at `trackMinAngle`.
    pub fn point_to_track_angle(&self, point: Point, center: Point) -> f64 {
        let (dx, dy) = point.offset_from(center);
        let raw = dx.atan2(dy) / PI * 180.0 + self.span.min() + 180.0;
        let mut angle = (90.0 - raw) % 360.0;
        while angle < 0.0 {
            angle += 360.0;
        }
        angle
    }

    /// Value at `track_angle`. Not clamped: an out-of-range result tells the caller the angle
    /// lies past the end of the value-producing arc.
    pub fn track_angle_to_value(&self, track_angle: f64) -> f64 {
        track_angle * self.angle_to_value_scale() + self.range.minimum()
    }

    pub fn point_to_value(&self, point: Point, center: Point) -> f64 {
        self.track_angle_to_value(self.point_to_track_angle(point, center))
    }

    /// Value units per degree of track.
    pub fn angle_to_value_scale(&self) -> f64 {
        self.range.span() / self.span.sweep()
    }
}
