//! Easing curves that warp normalized segment progress.
//!
//! Every curve maps `t` in `[0, 1]` into `[0, 1]` and fixes both endpoints.
//! The Expo curves special-case their endpoints with exact float comparisons;
//! inputs that land a hair away from 0 or 1 take the exponential branch.

use core::f32::consts::PI;
use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Named time-warping curve applied to linear segment progress.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EasingStyle {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    ExpoIn,
    ExpoOut,
    ExpoInOut,
    CircIn,
    CircOut,
    CircInOut,
    SineIn,
    SineOut,
    SineInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
    /// Snap straight to the target. The controller skips time-based
    /// interpolation for this style.
    Instant,
}

impl EasingStyle {
    pub const ALL: [EasingStyle; 17] = [
        EasingStyle::Linear,
        EasingStyle::EaseIn,
        EasingStyle::EaseOut,
        EasingStyle::EaseInOut,
        EasingStyle::ExpoIn,
        EasingStyle::ExpoOut,
        EasingStyle::ExpoInOut,
        EasingStyle::CircIn,
        EasingStyle::CircOut,
        EasingStyle::CircInOut,
        EasingStyle::SineIn,
        EasingStyle::SineOut,
        EasingStyle::SineInOut,
        EasingStyle::CubicIn,
        EasingStyle::CubicOut,
        EasingStyle::CubicInOut,
        EasingStyle::Instant,
    ];

    /// Canonical name, matching the serde representation.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseIn => "easeIn",
            Self::EaseOut => "easeOut",
            Self::EaseInOut => "easeInOut",
            Self::ExpoIn => "expoIn",
            Self::ExpoOut => "expoOut",
            Self::ExpoInOut => "expoInOut",
            Self::CircIn => "circIn",
            Self::CircOut => "circOut",
            Self::CircInOut => "circInOut",
            Self::SineIn => "sineIn",
            Self::SineOut => "sineOut",
            Self::SineInOut => "sineInOut",
            Self::CubicIn => "cubicIn",
            Self::CubicOut => "cubicOut",
            Self::CubicInOut => "cubicInOut",
            Self::Instant => "instant",
        }
    }

    #[inline]
    pub fn is_instant(&self) -> bool {
        matches!(self, Self::Instant)
    }

    /// Warp `t` through this curve. See [`warp`].
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        warp(self, t)
    }
}

impl fmt::Display for EasingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EasingStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|style| style.name() == s)
            .ok_or_else(|| ConfigError::UnknownEasing(s.to_string()))
    }
}

/// Map normalized progress `t` (already clamped to `[0, 1]` by the caller)
/// through `style`. `Instant` always yields 1.0.
pub fn warp(style: EasingStyle, t: f32) -> f32 {
    match style {
        EasingStyle::Linear => t,
        EasingStyle::EaseIn => t.powi(2),
        EasingStyle::EaseOut => 1.0 - (1.0 - t).powi(2),
        EasingStyle::EaseInOut => {
            if t < 0.5 {
                2.0 * t.powi(2)
            } else {
                1.0 - (-2.0 * t + 2.0).powi(2) * 0.5
            }
        }
        EasingStyle::ExpoIn => {
            if t == 0.0 {
                0.0
            } else {
                2f32.powf(10.0 * (t - 1.0))
            }
        }
        EasingStyle::ExpoOut => {
            if t == 1.0 {
                1.0
            } else {
                1.0 - 2f32.powf(-10.0 * t)
            }
        }
        EasingStyle::ExpoInOut => {
            if t == 0.0 || t == 1.0 {
                t
            } else if t < 0.5 {
                0.5 * 2f32.powf(10.0 * (2.0 * t - 1.0))
            } else {
                0.5 * (2.0 - 2f32.powf(-10.0 * (2.0 * t - 1.0)))
            }
        }
        EasingStyle::CircIn => 1.0 - (1.0 - t.powi(2)).sqrt(),
        EasingStyle::CircOut => (1.0 - (t - 1.0).powi(2)).sqrt(),
        EasingStyle::CircInOut => {
            if t < 0.5 {
                0.5 * (1.0 - (1.0 - 4.0 * t.powi(2)).sqrt())
            } else {
                0.5 * ((1.0 - (-2.0 * t + 2.0).powi(2)).sqrt() + 1.0)
            }
        }
        EasingStyle::SineIn => 1.0 - (t * PI * 0.5).cos(),
        EasingStyle::SineOut => (t * PI * 0.5).sin(),
        EasingStyle::SineInOut => 0.5 * (1.0 - (t * PI).cos()),
        EasingStyle::CubicIn => t.powi(3),
        EasingStyle::CubicOut => 1.0 - (1.0 - t).powi(3),
        EasingStyle::CubicInOut => {
            if t < 0.5 {
                4.0 * t.powi(3)
            } else {
                1.0 - (-2.0 * t + 2.0).powi(3) * 0.5
            }
        }
        EasingStyle::Instant => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for style in EasingStyle::ALL {
            assert_eq!(style.name().parse::<EasingStyle>().unwrap(), style);
        }
        assert!(matches!(
            "bounceOut".parse::<EasingStyle>(),
            Err(ConfigError::UnknownEasing(name)) if name == "bounceOut"
        ));
    }

    #[test]
    fn serde_uses_canonical_names() {
        let json = serde_json::to_string(&EasingStyle::CircInOut).unwrap();
        assert_eq!(json, "\"circInOut\"");
        let back: EasingStyle = serde_json::from_str("\"expoOut\"").unwrap();
        assert_eq!(back, EasingStyle::ExpoOut);
    }

    #[test]
    fn expo_endpoints_are_exact() {
        assert_eq!(warp(EasingStyle::ExpoIn, 0.0), 0.0);
        assert_eq!(warp(EasingStyle::ExpoOut, 1.0), 1.0);
        assert_eq!(warp(EasingStyle::ExpoInOut, 0.0), 0.0);
        assert_eq!(warp(EasingStyle::ExpoInOut, 1.0), 1.0);
        // Just off the endpoint the exponential branch applies.
        assert!(warp(EasingStyle::ExpoIn, f32::EPSILON) > 0.0);
    }

    #[test]
    fn instant_ignores_progress() {
        assert_eq!(warp(EasingStyle::Instant, 0.0), 1.0);
        assert_eq!(warp(EasingStyle::Instant, 0.3), 1.0);
        assert!(EasingStyle::Instant.is_instant());
        assert!(!EasingStyle::Linear.is_instant());
    }
}
