//! Waypoint playback controller.
//!
//! A mover is either idle or moving toward `waypoints[current_index]`. The host
//! calls [`WaypointMover::advance`] once per tick with the elapsed delta; each
//! call evaluates one easing curve and one interpolation, and completes at most
//! one segment. On completion the index steps forward (wrapping) and the mover
//! keeps going unless it has wrapped back to the first waypoint without looping.

use serde::{Deserialize, Serialize};

use crate::config::MoverConfig;
use crate::easing::warp;
use crate::error::ConfigError;
use crate::outputs::{MoverEvent, Tick};
use crate::target::PositionTarget;

/// Mutable playback state owned by a [`WaypointMover`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaybackState {
    /// Waypoint currently approached (or next to approach when idle).
    pub current_index: usize,
    /// Seconds since the current segment began.
    pub elapsed: f32,
    pub is_moving: bool,
    /// Set by the first `play()`; suppresses autoplay afterwards.
    pub has_started: bool,
}

#[derive(Clone, Debug)]
pub struct WaypointMover {
    cfg: MoverConfig,
    state: PlaybackState,
    /// Position at segment start; captured from the target on the first tick
    /// of a segment started by `play()`.
    segment_start: Option<[f32; 3]>,
}

#[inline]
fn segment_progress(elapsed: f32, duration: f32) -> f32 {
    if !(duration.is_finite() && duration > 0.0) {
        return 1.0;
    }
    (elapsed / duration).clamp(0.0, 1.0)
}

impl WaypointMover {
    /// Validate `cfg` and build an idle mover at waypoint 0.
    pub fn new(cfg: MoverConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        Ok(Self {
            cfg,
            state: PlaybackState::default(),
            segment_start: None,
        })
    }

    #[inline]
    pub fn config(&self) -> &MoverConfig {
        &self.cfg
    }

    #[inline]
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.state.is_moving
    }

    #[inline]
    pub fn has_started(&self) -> bool {
        self.state.has_started
    }

    /// Duration of the segment approaching waypoint `index`.
    #[inline]
    pub fn segment_duration(&self, index: usize) -> f32 {
        self.cfg.duration_for(index)
    }

    /// Activation hook: autoplay once if configured.
    pub fn on_start(&mut self) {
        if self.cfg.autoplay_on_start && !self.state.has_started {
            self.play();
        }
    }

    /// Pointer-click hook: play if click triggering is enabled.
    pub fn on_pointer_clicked(&mut self) {
        if self.cfg.trigger_on_click {
            self.play();
        }
    }

    /// Begin a segment toward the current waypoint. Returns false (and changes
    /// nothing) if a segment is already in progress.
    pub fn play(&mut self) -> bool {
        if self.state.is_moving {
            return false;
        }
        self.begin_segment(None);
        self.state.has_started = true;
        true
    }

    /// Force the mover idle mid-segment. The current index is kept, so the
    /// next `play()` heads for the same waypoint from wherever the object is.
    pub fn stop(&mut self) -> bool {
        if !self.state.is_moving {
            return false;
        }
        log::debug!("mover stopped toward waypoint {}", self.state.current_index);
        self.state.is_moving = false;
        self.state.elapsed = 0.0;
        self.segment_start = None;
        true
    }

    /// Step the active segment by `dt` seconds and write the new position into
    /// `target`. Returns `None` when idle. Negative or NaN deltas count as zero.
    pub fn advance<T>(&mut self, dt: f32, target: &mut T) -> Option<Tick>
    where
        T: PositionTarget + ?Sized,
    {
        if !self.state.is_moving {
            return None;
        }
        let segment = self.state.current_index;
        let goal = self.cfg.waypoints[segment];
        let start = *self.segment_start.get_or_insert_with(|| target.position());

        self.state.elapsed += dt.max(0.0);
        let (progress, eased) = if self.cfg.easing.is_instant() {
            (1.0, 1.0)
        } else {
            let progress = segment_progress(self.state.elapsed, self.cfg.duration_for(segment));
            (progress, warp(self.cfg.easing, progress))
        };

        let dims = self.cfg.dimensionality;
        let position = if progress >= 1.0 {
            dims.snap(start, goal)
        } else {
            dims.lerp(start, goal, eased)
        };
        target.set_position(position);

        let event = (progress >= 1.0).then(|| self.complete_segment(position));
        Some(Tick {
            segment,
            progress,
            eased,
            position,
            event,
        })
    }

    fn begin_segment(&mut self, start: Option<[f32; 3]>) {
        self.state.is_moving = true;
        self.state.elapsed = 0.0;
        self.segment_start = start;
        log::debug!(
            "segment start toward waypoint {} ({}s, {})",
            self.state.current_index,
            self.cfg.duration_for(self.state.current_index),
            self.cfg.easing
        );
    }

    fn complete_segment(&mut self, position: [f32; 3]) -> MoverEvent {
        let reached = self.state.current_index;
        self.state.current_index = (reached + 1) % self.cfg.waypoints.len();
        self.state.is_moving = false;

        if self.cfg.looping || self.state.current_index != 0 {
            self.begin_segment(Some(position));
            MoverEvent::WaypointReached { index: reached }
        } else {
            log::debug!("sequence finished at waypoint {reached}");
            self.segment_start = None;
            MoverEvent::Finished { index: reached }
        }
    }
}
