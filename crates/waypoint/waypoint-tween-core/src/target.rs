//! Host seam for the moving object's position.
//!
//! Adapters (Bevy, tests, custom scene graphs) implement [`PositionTarget`]
//! for whatever holds the position. While a mover is moving it is the only
//! writer; callers must not mutate the position concurrently.

/// Read/write access to the position a mover animates.
pub trait PositionTarget {
    fn position(&self) -> [f32; 3];
    fn set_position(&mut self, position: [f32; 3]);
}

impl PositionTarget for [f32; 3] {
    #[inline]
    fn position(&self) -> [f32; 3] {
        *self
    }

    #[inline]
    fn set_position(&mut self, position: [f32; 3]) {
        *self = position;
    }
}
