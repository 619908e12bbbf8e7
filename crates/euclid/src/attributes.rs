//! Sparse configuration of a control.
//!
//! Every field is optional: a batch only overwrites what it names and leaves the rest of the
//! control's configuration untouched. The same record is what the `[slider]` table of a config
//! file deserializes into.

use crate::angle::AngularSpan;
use crate::error::{ControlError, ensure_size};
use crate::style::{HandleType, Style, Tint};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Attributes {
    /* Track */
    pub minimum_track_tint: Option<Tint>,
    pub maximum_track_tint: Option<Tint>,
    pub track_width: Option<f64>,
    pub track_shadow_radius: Option<f64>,
    pub track_shadow_depth: Option<f64>,
    pub track_min_angle: Option<f64>,
    pub track_max_angle: Option<f64>,

    /* Thumb */
    pub has_thumb: Option<bool>,
    pub thumb_tint: Option<Tint>,
    pub thumb_radius: Option<f64>,
    pub thumb_shadow_radius: Option<f64>,
    pub thumb_shadow_depth: Option<f64>,
    pub thumb_image: Option<PathBuf>,
    pub handle_type: Option<HandleType>,
}

macro_rules! setter {
    ($name:ident: $ty:ty) => {
        pub fn $name(mut self, value: impl Into<$ty>) -> Self {
            self.$name = Some(value.into());
            self
        }
    };
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    setter!(minimum_track_tint: Tint);
    setter!(maximum_track_tint: Tint);
    setter!(track_width: f64);
    setter!(track_shadow_radius: f64);
    setter!(track_shadow_depth: f64);
    setter!(track_min_angle: f64);
    setter!(track_max_angle: f64);
    setter!(has_thumb: bool);
    setter!(thumb_tint: Tint);
    setter!(thumb_radius: f64);
    setter!(thumb_shadow_radius: f64);
    setter!(thumb_shadow_depth: f64);
    setter!(thumb_image: PathBuf);
    setter!(handle_type: HandleType);

    /// Layers `other` on top of `self`; fields set in `other` win.
    pub fn merge(mut self, other: Attributes) -> Self {
        macro_rules! take {
            ($($field:ident),*) => { $( if other.$field.is_some() { self.$field = other.$field; } )* };
        }
        take!(
            minimum_track_tint,
            maximum_track_tint,
            track_width,
            track_shadow_radius,
            track_shadow_depth,
            track_min_angle,
            track_max_angle,
            has_thumb,
            thumb_tint,
            thumb_radius,
            thumb_shadow_radius,
            thumb_shadow_depth,
            thumb_image,
            handle_type
        );
        self
    }

    /// Resolves the batch against the current configuration without touching it. Fails on the
    /// first invalid field, so a rejected batch applies nothing.
    pub fn resolve(
        &self,
        style: &Style,
        span: AngularSpan,
    ) -> Result<(Style, AngularSpan), ControlError> {
        let size = |name, value: Option<f64>, current: f64| match value {
            Some(v) => ensure_size(name, v),
            None => Ok(current),
        };

        let span = match (self.track_min_angle, self.track_max_angle) {
            (None, None) => span,
            (min, max) => AngularSpan::new(min.unwrap_or(span.min()), max.unwrap_or(span.max()))?,
        };

        let style = Style {
            minimum_track_tint: self.minimum_track_tint.unwrap_or(style.minimum_track_tint),
            maximum_track_tint: self.maximum_track_tint.unwrap_or(style.maximum_track_tint),
            track_width: size("track width", self.track_width, style.track_width)?,
            track_shadow_radius: size(
                "track shadow radius",
                self.track_shadow_radius,
                style.track_shadow_radius,
            )?,
            track_shadow_depth: size(
                "track shadow depth",
                self.track_shadow_depth,
                style.track_shadow_depth,
            )?,
            has_thumb: self.has_thumb.unwrap_or(style.has_thumb),
            thumb_tint: self.thumb_tint.unwrap_or(style.thumb_tint),
            thumb_radius: size("thumb radius", self.thumb_radius, style.thumb_radius)?,
            thumb_shadow_radius: size(
                "thumb shadow radius",
                self.thumb_shadow_radius,
                style.thumb_shadow_radius,
            )?,
            thumb_shadow_depth: size(
                "thumb shadow depth",
                self.thumb_shadow_depth,
                style.thumb_shadow_depth,
            )?,
            thumb_image: self.thumb_image.clone().or_else(|| style.thumb_image.clone()),
            handle_type: self.handle_type.unwrap_or(style.handle_type),
        };

        Ok((style, span))
    }
}
