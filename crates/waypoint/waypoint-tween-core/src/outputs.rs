//! Output contracts from the mover.
//!
//! `advance` returns a [`Tick`] describing what was written this tick, plus an
//! optional semantic [`MoverEvent`] when a segment completed.

use serde::{Deserialize, Serialize};

/// Discrete signals emitted when a segment completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum MoverEvent {
    /// The waypoint at `index` was reached and the next segment has begun.
    WaypointReached { index: usize },
    /// The waypoint at `index` was reached and the mover is now idle.
    Finished { index: usize },
}

impl MoverEvent {
    /// Index of the waypoint that was reached.
    #[inline]
    pub fn index(&self) -> usize {
        match self {
            Self::WaypointReached { index } | Self::Finished { index } => *index,
        }
    }
}

/// Result of one `advance` call on a moving mover.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    /// Index of the waypoint approached during this tick.
    pub segment: usize,
    /// Normalized elapsed time within the segment, in `[0, 1]`.
    pub progress: f32,
    /// Interpolation factor after easing.
    pub eased: f32,
    /// Position written to the target.
    pub position: [f32; 3],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<MoverEvent>,
}

impl Tick {
    #[inline]
    pub fn completed(&self) -> bool {
        self.event.is_some()
    }
}
