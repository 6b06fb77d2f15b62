//! Component-wise linear interpolation for 2D and 3D positions.

use serde::{Deserialize, Serialize};

/// How many position components a mover animates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimensionality {
    /// x and y are interpolated; z is left as it was at segment start.
    #[default]
    #[serde(rename = "2d")]
    TwoD,
    #[serde(rename = "3d")]
    ThreeD,
}

impl Dimensionality {
    #[inline]
    pub fn components(&self) -> usize {
        match self {
            Self::TwoD => 2,
            Self::ThreeD => 3,
        }
    }

    /// Interpolate `a` toward `b` by `t` over this many components.
    #[inline]
    pub fn lerp(&self, a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
        match self {
            Self::TwoD => {
                let [x, y] = lerp_vec2([a[0], a[1]], [b[0], b[1]], t);
                [x, y, a[2]]
            }
            Self::ThreeD => lerp_vec3(a, b, t),
        }
    }

    /// Land exactly on `b` in the animated components.
    #[inline]
    pub fn snap(&self, a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
        match self {
            Self::TwoD => [b[0], b[1], a[2]],
            Self::ThreeD => b,
        }
    }
}

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
pub fn lerp_vec2(a: [f32; 2], b: [f32; 2], t: f32) -> [f32; 2] {
    [lerp_f32(a[0], b[0], t), lerp_f32(a[1], b[1], t)]
}

#[inline]
pub fn lerp_vec3(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [
        lerp_f32(a[0], b[0], t),
        lerp_f32(a[1], b[1], t),
        lerp_f32(a[2], b[2], t),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_d_keeps_start_depth() {
        let out = Dimensionality::TwoD.lerp([0.0, 0.0, 5.0], [2.0, 4.0, -3.0], 0.5);
        assert_eq!(out, [1.0, 2.0, 5.0]);
    }

    #[test]
    fn three_d_moves_every_component() {
        let out = Dimensionality::ThreeD.lerp([0.0, 0.0, 5.0], [2.0, 4.0, -3.0], 0.5);
        assert_eq!(out, [1.0, 2.0, 1.0]);
        assert_eq!(Dimensionality::ThreeD.components(), 3);
    }

    #[test]
    fn snap_respects_dimensionality() {
        let a = [1.0, 1.0, 4.0];
        let b = [0.3, 0.7, 0.9];
        assert_eq!(Dimensionality::TwoD.snap(a, b), [0.3, 0.7, 4.0]);
        assert_eq!(Dimensionality::ThreeD.snap(a, b), b);
    }

    #[test]
    fn endpoints_are_exact() {
        let a = [0.5, 0.25, 1.0];
        let b = [7.0, -8.0, 9.0];
        assert_eq!(lerp_vec3(a, b, 0.0), a);
        assert_eq!(lerp_vec3(a, b, 1.0), b);
    }
}
