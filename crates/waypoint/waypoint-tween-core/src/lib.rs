//! Waypoint Tween Core (engine-agnostic)
//!
//! Moves one object through an ordered list of waypoints. Each segment maps
//! elapsed time to normalized progress, warps it through an [`EasingStyle`],
//! and writes the interpolated position into a host-provided [`PositionTarget`].
//! Hosts drive the [`WaypointMover`] by calling `advance(dt, target)` every tick.

pub mod config;
pub mod easing;
pub mod error;
pub mod interp;
pub mod mover;
pub mod outputs;
pub mod target;

// Re-exports for consumers (adapters)
pub use config::{MoverConfig, DEFAULT_SEGMENT_DURATION};
pub use easing::{warp, EasingStyle};
pub use error::ConfigError;
pub use interp::Dimensionality;
pub use mover::{PlaybackState, WaypointMover};
pub use outputs::{MoverEvent, Tick};
pub use target::PositionTarget;

/// Result type for mover configuration.
pub type Result<T> = core::result::Result<T, ConfigError>;
