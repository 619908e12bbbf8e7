//! What the control asks a renderer to draw. A [`DrawRequest`] is built fresh for every frame and
//! carries only geometry and colors; any layers, masks or surfaces belong to the renderer.

use crate::angle::{AngleMapper, degrees_to_draw_angle};
use crate::geometry::{GeometryContext, Point};
use crate::style::{HandleType, Style, Tint};
use std::path::PathBuf;

pub const THUMB_SHADOW_OPACITY: f64 = 0.25;

/// Slice of the ring between two drawing angles, swept clockwise from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingSlice {
    pub center: Point,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    /// Vertical offset of the shadow.
    pub depth: f64,
    /// Blur radius.
    pub radius: f64,
    pub tint: Tint,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThumbRequest {
    pub center: Point,
    pub radius: f64,
    pub tint: Tint,
    pub handle_type: HandleType,
    pub image: Option<PathBuf>,
    pub shadow: Option<Shadow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrawRequest {
    /// Clip region and unfilled track, from the min to the max track angle.
    pub track: RingSlice,
    pub track_tint: Tint,
    pub track_shadow: Option<Shadow>,
    /// Filled track, from the min track angle to the thumb.
    pub progress: RingSlice,
    pub progress_tint: Tint,
    pub thumb: Option<ThumbRequest>,
}

impl DrawRequest {
    pub fn new(mapper: &AngleMapper, geometry: &GeometryContext, style: &Style) -> Self {
        let slice = |start_angle, end_angle| RingSlice {
            center: geometry.center,
            inner_radius: geometry.inner_radius,
            outer_radius: geometry.outer_radius,
            start_angle,
            end_angle,
        };
        let track_start = degrees_to_draw_angle(mapper.span.min());

        let track_shadow = (style.track_shadow_depth > 0.0).then(|| Shadow {
            depth: style.track_shadow_depth,
            radius: style.track_shadow_radius,
            tint: Tint::black(),
        });

        let thumb = style.has_thumb.then(|| {
            let has_shadow = style.thumb_shadow_depth != 0.0 || style.thumb_shadow_radius != 0.0;
            ThumbRequest {
                center: geometry.thumb_center,
                radius: style.thumb_radius,
                tint: style.thumb_tint,
                handle_type: style.handle_type,
                image: style.thumb_image.clone(),
                shadow: has_shadow.then(|| Shadow {
                    depth: style.thumb_shadow_depth,
                    radius: style.thumb_shadow_radius,
                    tint: Tint::black().with_alpha(THUMB_SHADOW_OPACITY),
                }),
            }
        });

        Self {
            track: slice(track_start, degrees_to_draw_angle(mapper.span.max())),
            track_tint: style.maximum_track_tint,
            track_shadow,
            progress: slice(track_start, geometry.thumb_angle),
            progress_tint: style.minimum_track_tint,
            thumb,
        }
    }
}

/// Draws a [`DrawRequest`] onto some surface.
pub trait Renderer {
    type Error;

    fn render(&mut self, request: &DrawRequest) -> Result<(), Self::Error>;
}
