//! Pointer drag tracking.
//!
//! A drag is integrated step by step instead of reading the absolute angle of the pointer: each
//! move contributes the angle swept since the previous sample, with the sign taken from the
//! local direction of motion. That keeps the value continuous across the 0/360 seam and over
//! several full turns. The running sum (the pseudo value) may leave the value range; only the
//! value handed back to the control is clamped.

use crate::angle::AngleMapper;
use crate::geometry::{GeometryContext, Point, is_within_thumb};

/// State kept while a pointer is down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub last_position: Point,
    pub pseudo_value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TrackerState {
    #[default]
    Idle,
    Tracking(DragSession),
}

/// How a pointer-down was accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Grab {
    /// The pointer landed on the value-producing arc; the value jumps to it.
    Track(f64),
    /// The pointer landed on the thumb outside the arc; the value is kept until the first move.
    Thumb,
}

#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    state: TrackerState,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TrackerState {
        self.state
    }

    pub fn is_tracking(&self) -> bool {
        matches!(self.state, TrackerState::Tracking(_))
    }

    pub fn pseudo_value(&self) -> Option<f64> {
        match self.state {
            TrackerState::Tracking(session) => Some(session.pseudo_value),
            TrackerState::Idle => None,
        }
    }

    /// Starts a drag at `position` while the control shows `value`. Returns `None` when the
    /// gesture is rejected, in which case nothing changes. A second pointer-down during a drag is
    /// rejected as well.
    pub fn begin(
        &mut self,
        position: Point,
        value: f64,
        mapper: &AngleMapper,
        geometry: &GeometryContext,
        thumb_radius: f64,
    ) -> Option<Grab> {
        if self.is_tracking() {
            log::debug!("pointer down at {position:?} ignored: drag already in progress");
            return None;
        }

        let candidate = mapper.point_to_value(position, geometry.center);

        if mapper.range.contains(candidate) {
            log::debug!("track grab at {position:?}, value {candidate}");
            self.state = TrackerState::Tracking(DragSession {
                last_position: position,
                pseudo_value: candidate,
            });
            return Some(Grab::Track(candidate));
        }

        if is_within_thumb(position, geometry.thumb_center, thumb_radius) {
            // seeded from the thumb, not the tap, so the drag continues from where the thumb is.
            // The thumb's own track angle is used since atan2 of its center can wrap at the seam.
            let pseudo_value = mapper.track_angle_to_value(mapper.value_to_track_angle(value));
            log::debug!("thumb grab at {position:?}, pseudo value {pseudo_value}");
            self.state = TrackerState::Tracking(DragSession {
                last_position: position,
                pseudo_value,
            });
            return Some(Grab::Thumb);
        }

        log::debug!("pointer down at {position:?} rejected: off track and thumb");
        None
    }

    /// Advances the drag to `position` and returns the clamped value, or `None` when idle.
    pub fn update(&mut self, position: Point, mapper: &AngleMapper, center: Point) -> Option<f64> {
        let TrackerState::Tracking(session) = &mut self.state else {
            return None;
        };

        let from = session.last_position;
        let mut delta = mapper.point_to_track_angle(position, center)
            - mapper.point_to_track_angle(from, center);

        if is_clockwise(from.offset_from(center), position.offset_from(from)) {
            while delta < 0.0 {
                delta += 360.0;
            }
        } else {
            while delta > 0.0 {
                delta -= 360.0;
            }
        }

        let range = mapper.range;
        session.pseudo_value += delta * mapper.angle_to_value_scale();

        // hold the accumulator within one extra turn on either side
        if session.pseudo_value > range.minimum() + range.span() * 2.0 {
            session.pseudo_value -= range.span();
            log::debug!("pseudo value wrapped down to {}", session.pseudo_value);
        }
        if session.pseudo_value < range.minimum() - range.span() {
            session.pseudo_value += range.span();
            log::debug!("pseudo value wrapped up to {}", session.pseudo_value);
        }

        session.last_position = position;
        log::trace!("drag to {position:?}, pseudo value {}", session.pseudo_value);

        Some(range.clamp(session.pseudo_value))
    }

    /// Ends the drag. Calling it while idle does nothing.
    pub fn end(&mut self) {
        self.state = TrackerState::Idle;
    }
}

/// Whether moving along `motion` from the tip of `radial` turns clockwise on screen.
fn is_clockwise(radial: (f64, f64), motion: (f64, f64)) -> bool {
    radial.1 * motion.0 < radial.0 * motion.1
}
