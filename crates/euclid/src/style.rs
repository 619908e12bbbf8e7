use derive_more::{Deref, From, Into};
use palette::Srgba;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use strum::{Display as StrumDisplay, EnumIter, EnumString};
use thiserror::Error;

/// An RGBA color, written as `#rrggbb` or `#rrggbbaa` in config files.
#[derive(Debug, Clone, Copy, PartialEq, Deref, From, Into, DeserializeFromStr, SerializeDisplay)]
pub struct Tint(Srgba<f64>);

impl Tint {
    pub fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self(Srgba::new(red, green, blue, 1.0))
    }

    pub fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }

    pub fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    pub fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self(Srgba::new(red, green, blue, alpha))
    }

    pub fn with_alpha(self, alpha: f64) -> Self {
        let (r, g, b, _) = self.0.into_components();
        Self::rgba(r, g, b, alpha)
    }

    pub fn components(&self) -> (f64, f64, f64, f64) {
        self.0.into_components()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color '{0}', expected #rrggbb or #rrggbbaa")]
pub struct ParseTintError(String);

impl FromStr for Tint {
    type Err = ParseTintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseTintError(s.to_string());
        let hex = s.trim().trim_start_matches('#');
        if !matches!(hex.len(), 6 | 8) || !hex.is_ascii() {
            return Err(err());
        }

        let channel = |i: usize| {
            hex.get(i..i + 2)
                .and_then(|c| u8::from_str_radix(c, 16).ok())
                .map(|c| f64::from(c) / 255.0)
                .ok_or_else(err)
        };
        let alpha = if hex.len() == 8 { channel(6)? } else { 1.0 };

        Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, alpha))
    }
}

impl fmt::Display for Tint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b, a) = self.components();
        let byte = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        write!(f, "#{:02x}{:02x}{:02x}", byte(r), byte(g), byte(b))?;
        if a < 1.0 {
            write!(f, "{:02x}", byte(a))?;
        }
        Ok(())
    }
}

/// Decoration of the thumb. Only affects drawing; hit testing always uses the thumb radius.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    SerializeDisplay,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
pub enum HandleType {
    /// Disc filled with the thumb tint.
    #[default]
    #[strum(to_string = "Tinted")]
    Tinted,
    #[strum(to_string = "SemiTransparentWhiteCircle", serialize = "white")]
    SemiTransparentWhiteCircle,
    #[strum(to_string = "SemiTransparentBlackCircle", serialize = "black")]
    SemiTransparentBlackCircle,
    #[strum(to_string = "DoubleCircleWithOpenCenter", serialize = "open")]
    DoubleCircleWithOpenCenter,
    #[strum(to_string = "DoubleCircleWithClosedCenter", serialize = "closed")]
    DoubleCircleWithClosedCenter,
    #[strum(to_string = "BigCircle", serialize = "big")]
    BigCircle,
}

/// Presentation attributes of the control, handed through to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    /// Tint of the filled part of the track, from the start to the thumb.
    pub minimum_track_tint: Tint,
    /// Tint of the unfilled track.
    pub maximum_track_tint: Tint,
    pub track_width: f64,
    pub track_shadow_radius: f64,
    pub track_shadow_depth: f64,
    pub has_thumb: bool,
    pub thumb_tint: Tint,
    pub thumb_radius: f64,
    pub thumb_shadow_radius: f64,
    pub thumb_shadow_depth: f64,
    pub thumb_image: Option<PathBuf>,
    pub handle_type: HandleType,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            minimum_track_tint: Tint::rgb(0.0, 0.478, 1.0),
            maximum_track_tint: Tint::rgb(0.71, 0.71, 0.71),
            track_width: 2.0,
            track_shadow_radius: 0.0,
            track_shadow_depth: 0.0,
            has_thumb: true,
            thumb_tint: Tint::white(),
            thumb_radius: 14.0,
            thumb_shadow_radius: 2.0,
            thumb_shadow_depth: 3.0,
            thumb_image: None,
            handle_type: HandleType::Tinted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tint_parsing() {
        let cases = vec![
            ("#ffffff", Tint::white()),
            ("000000", Tint::black()),
            ("#FF000080", Tint::rgba(1.0, 0.0, 0.0, 128.0 / 255.0)),
            (" #0000ff ", Tint::rgb(0.0, 0.0, 1.0)),
        ];

        for (input, expected) in cases {
            assert_eq!(input.parse::<Tint>().unwrap(), expected, "{input}");
        }
    }

    #[test]
    fn test_tint_rejects_garbage() {
        for input in ["", "#fff", "#gggggg", "#12345", "#ffffffffff", "#ffé000"] {
            assert!(input.parse::<Tint>().is_err(), "{input}");
        }
    }

    #[test]
    fn test_tint_display() {
        assert_eq!(Tint::rgb(0.0, 0.478, 1.0).to_string(), "#007aff");
        assert_eq!(Tint::black().with_alpha(0.25).to_string(), "#00000040");
    }

    #[test]
    fn test_tint_serde() {
        let tint: Tint = serde_json::from_str("\"#102030\"").unwrap();
        assert_eq!(tint.to_string(), "#102030");
        assert_eq!(serde_json::to_string(&tint).unwrap(), "\"#102030\"");
    }

    #[test]
    fn test_handle_type_deserialization() {
        let cases = vec![
            ("\"tinted\"", HandleType::Tinted),
            ("\"BigCircle\"", HandleType::BigCircle),
            ("\"bigcircle\"", HandleType::BigCircle),
            ("\"big\"", HandleType::BigCircle),
            ("\"white\"", HandleType::SemiTransparentWhiteCircle),
            ("\"OPEN\"", HandleType::DoubleCircleWithOpenCenter),
            ("\"closed\"", HandleType::DoubleCircleWithClosedCenter),
        ];

        for (json, expected) in cases {
            let deserialized: HandleType = serde_json::from_str(json).unwrap();
            assert_eq!(deserialized, expected);
        }
        assert!(serde_json::from_str::<HandleType>("\"triangle\"").is_err());
    }

    #[test]
    fn test_handle_type_display_parses_back() {
        use strum::IntoEnumIterator;

        for handle in HandleType::iter() {
            assert_eq!(handle.to_string().parse::<HandleType>().unwrap(), handle);
        }
    }
}
