//! Static mover configuration, set once before activation.

use serde::{Deserialize, Deserializer, Serialize};

use crate::easing::EasingStyle;
use crate::error::ConfigError;
use crate::interp::Dimensionality;

/// Duration used for any segment without an entry in the duration table.
pub const DEFAULT_SEGMENT_DURATION: f32 = 1.0;

/// Configuration for a single waypoint mover.
///
/// JSON uses camelCase keys and accepts `[x, y]` or `[x, y, z]` waypoints;
/// two-component waypoints get `z = 0`. Missing keys fall back to defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MoverConfig {
    pub dimensionality: Dimensionality,
    /// Ordered targets. Indices are stable for the life of the mover.
    #[serde(deserialize_with = "deserialize_waypoints")]
    pub waypoints: Vec<[f32; 3]>,
    /// Seconds per segment, aligned by index with `waypoints`. May be shorter.
    pub durations: Vec<f32>,
    pub easing: EasingStyle,
    #[serde(rename = "loop")]
    pub looping: bool,
    pub autoplay_on_start: bool,
    pub trigger_on_click: bool,
}

impl Default for MoverConfig {
    fn default() -> Self {
        Self {
            dimensionality: Dimensionality::TwoD,
            waypoints: Vec::new(),
            durations: Vec::new(),
            easing: EasingStyle::Linear,
            looping: false,
            autoplay_on_start: false,
            trigger_on_click: false,
        }
    }
}

impl MoverConfig {
    /// Parse a JSON configuration document. Does not validate; see [`MoverConfig::validate`].
    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn with_waypoints(mut self, waypoints: Vec<[f32; 3]>) -> Self {
        self.waypoints = waypoints;
        self
    }

    pub fn with_durations(mut self, durations: Vec<f32>) -> Self {
        self.durations = durations;
        self
    }

    pub fn with_easing(mut self, easing: EasingStyle) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_dimensionality(mut self, dimensionality: Dimensionality) -> Self {
        self.dimensionality = dimensionality;
        self
    }

    pub fn with_loop(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay_on_start = autoplay;
        self
    }

    pub fn with_click_trigger(mut self, trigger_on_click: bool) -> Self {
        self.trigger_on_click = trigger_on_click;
        self
    }

    /// Duration of the segment approaching `waypoints[index]`.
    #[inline]
    pub fn duration_for(&self, index: usize) -> f32 {
        self.durations
            .get(index)
            .copied()
            .unwrap_or(DEFAULT_SEGMENT_DURATION)
    }

    /// Reject configurations a mover cannot run. Suspicious but usable
    /// durations are only logged.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.waypoints.is_empty() {
            return Err(ConfigError::EmptyWaypoints);
        }
        for (index, d) in self.durations.iter().enumerate() {
            if !(d.is_finite() && *d > 0.0) {
                log::warn!(
                    "segment {index} has duration {d}; it will complete on its first tick"
                );
            }
        }
        if self.durations.len() > self.waypoints.len() {
            log::debug!(
                "{} duration entries for {} waypoints; extra entries are ignored",
                self.durations.len(),
                self.waypoints.len()
            );
        }
        Ok(())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawWaypoint {
    Xy([f32; 2]),
    Xyz([f32; 3]),
}

impl From<RawWaypoint> for [f32; 3] {
    fn from(raw: RawWaypoint) -> Self {
        match raw {
            RawWaypoint::Xy([x, y]) => [x, y, 0.0],
            RawWaypoint::Xyz(p) => p,
        }
    }
}

fn deserialize_waypoints<'de, D>(deserializer: D) -> Result<Vec<[f32; 3]>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<RawWaypoint>::deserialize(deserializer)?;
    Ok(raw.into_iter().map(Into::into).collect())
}
