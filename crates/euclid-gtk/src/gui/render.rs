use cairo::Context;
use euclid::{DrawRequest, HandleType, Renderer, RingSlice, Shadow, ThumbRequest, Tint};
use gdk_pixbuf::Pixbuf;
use gdk4::prelude::*;
use std::f64::consts::PI;
use std::path::{Path, PathBuf};

const HANDLE_ALPHA: f64 = 0.7;
const HANDLE_STROKE: f64 = 2.0;
const BIG_CIRCLE_FACTOR: f64 = 1.3;

/// Keeps the decoded thumb image between frames; reloaded only when the path changes.
#[derive(Default)]
pub struct ThumbImageCache {
    path: Option<PathBuf>,
    pixbuf: Option<Pixbuf>,
}

impl ThumbImageCache {
    fn get(&mut self, path: &Path, size: i32) -> Option<&Pixbuf> {
        if self.path.as_deref() != Some(path) {
            self.pixbuf = Pixbuf::from_file_at_scale(path, size, size, true)
                .map_err(|e| log::error!("Failed to load thumb image {}: {}", path.display(), e))
                .ok();
            self.path = Some(path.to_path_buf());
        }
        self.pixbuf.as_ref()
    }
}

pub struct CairoRenderer<'a> {
    cr: &'a Context,
    images: &'a mut ThumbImageCache,
}

impl<'a> CairoRenderer<'a> {
    pub fn new(cr: &'a Context, images: &'a mut ThumbImageCache) -> Self {
        Self { cr, images }
    }

    fn set_source(&self, tint: Tint) {
        let (r, g, b, a) = tint.components();
        self.cr.set_source_rgba(r, g, b, a);
    }

    fn circle(&self, x: f64, y: f64, radius: f64) {
        self.cr.new_sub_path();
        self.cr.arc(x, y, radius.max(0.0), 0.0, 2.0 * PI);
    }

    fn ring_path(&self, slice: &RingSlice) {
        let (x, y) = (slice.center.x, slice.center.y);
        self.cr.new_path();
        self.cr
            .arc(x, y, slice.outer_radius, slice.start_angle, slice.end_angle);
        self.cr.arc_negative(
            x,
            y,
            slice.inner_radius.max(0.0),
            slice.end_angle,
            slice.start_angle,
        );
        self.cr.close_path();
    }

    fn draw_track(&self, request: &DrawRequest) -> Result<(), cairo::Error> {
        let track = &request.track;
        self.cr.new_path();
        self.circle(track.center.x, track.center.y, track.outer_radius);
        self.set_source(request.track_tint);
        self.cr.fill()?;

        if let Some(shadow) = &request.track_shadow {
            self.draw_track_shadow(track, shadow)?;
        }
        Ok(())
    }

    /// Inner shadow of the ring: everything outside it, shifted down by the depth and spread in
    /// faint layers over the blur radius. Only the part inside the clip shows.
    fn draw_track_shadow(&self, track: &RingSlice, shadow: &Shadow) -> Result<(), cairo::Error> {
        let (x, y) = (track.center.x, track.center.y + shadow.depth);
        let extent = 2.0 * track.outer_radius + shadow.depth + shadow.radius;
        let layers = shadow.radius.ceil().max(1.0) as u32;
        let (r, g, b, a) = shadow.tint.components();

        self.cr.save()?;
        self.cr.set_fill_rule(cairo::FillRule::EvenOdd);
        self.cr.set_source_rgba(r, g, b, a / f64::from(layers));
        for layer in 0..layers {
            let spread = f64::from(layer);
            self.cr.new_path();
            self.cr
                .rectangle(x - extent, y - extent, 2.0 * extent, 2.0 * extent);
            self.circle(x, y, track.outer_radius + 0.5 - spread);
            self.circle(x, y, track.inner_radius - 0.5 + spread);
            self.cr.fill()?;
        }
        self.cr.restore()
    }

    fn fill_slice(&self, slice: &RingSlice, tint: Tint) -> Result<(), cairo::Error> {
        self.ring_path(slice);
        self.set_source(tint);
        self.cr.fill()
    }

    fn draw_thumb(&mut self, thumb: &ThumbRequest) -> Result<(), cairo::Error> {
        let (x, y, radius) = (thumb.center.x, thumb.center.y, thumb.radius);

        if let Some(shadow) = &thumb.shadow {
            self.cr.new_path();
            self.circle(x, y + shadow.depth, radius + shadow.radius / 2.0);
            self.set_source(shadow.tint);
            self.cr.fill()?;
        }

        self.cr.new_path();
        match thumb.handle_type {
            HandleType::Tinted => {
                self.circle(x, y, radius);
                self.set_source(thumb.tint);
                self.cr.fill()?;
            }
            HandleType::SemiTransparentWhiteCircle => {
                self.circle(x, y, radius);
                self.set_source(Tint::white().with_alpha(HANDLE_ALPHA));
                self.cr.fill()?;
            }
            HandleType::SemiTransparentBlackCircle => {
                self.circle(x, y, radius);
                self.set_source(Tint::black().with_alpha(HANDLE_ALPHA));
                self.cr.fill()?;
            }
            HandleType::DoubleCircleWithOpenCenter => {
                self.set_source(thumb.tint);
                self.cr.set_line_width(HANDLE_STROKE);
                self.circle(x, y, radius - HANDLE_STROKE / 2.0);
                self.cr.stroke()?;
                self.circle(x, y, radius / 2.0);
                self.cr.stroke()?;
            }
            HandleType::DoubleCircleWithClosedCenter => {
                self.set_source(thumb.tint);
                self.cr.set_line_width(HANDLE_STROKE);
                self.circle(x, y, radius - HANDLE_STROKE / 2.0);
                self.cr.stroke()?;
                self.circle(x, y, radius / 2.0);
                self.cr.fill()?;
            }
            HandleType::BigCircle => {
                self.circle(x, y, radius * BIG_CIRCLE_FACTOR);
                self.set_source(thumb.tint);
                self.cr.fill()?;
            }
        }

        if let Some(path) = &thumb.image {
            self.draw_thumb_image(path, x, y, radius)?;
        }
        Ok(())
    }

    fn draw_thumb_image(
        &mut self,
        path: &Path,
        x: f64,
        y: f64,
        radius: f64,
    ) -> Result<(), cairo::Error> {
        let size = (radius * 2.0).ceil().max(1.0) as i32;
        let Some(pixbuf) = self.images.get(path, size).cloned() else {
            return Ok(());
        };

        // fit image into thumb
        let (w, h) = (f64::from(pixbuf.width()), f64::from(pixbuf.height()));
        let scale = (radius * 2.0) / w.max(h);

        self.cr.save()?;
        self.cr.new_path();
        self.circle(x, y, radius);
        self.cr.clip();
        self.cr.translate(x - w * scale / 2.0, y - h * scale / 2.0);
        self.cr.scale(scale, scale);
        self.cr.set_source_pixbuf(&pixbuf, 0.0, 0.0);
        self.cr.paint()?;
        self.cr.restore()
    }
}

impl Renderer for CairoRenderer<'_> {
    type Error = cairo::Error;

    fn render(&mut self, request: &DrawRequest) -> Result<(), cairo::Error> {
        self.cr.save()?;
        self.ring_path(&request.track);
        self.cr.clip();
        self.draw_track(request)?;
        self.cr.restore()?;

        self.fill_slice(&request.progress, request.progress_tint)?;

        if let Some(thumb) = &request.thumb {
            self.draw_thumb(thumb)?;
        }
        Ok(())
    }
}
