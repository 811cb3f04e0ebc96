// extensions/easing.rs
//
// Interpolation primitives shared by the item animator, the camera and the
// intro sequencer. Pure math, no scene knowledge.

use std::f32::consts::PI;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::components::color::{clamp_channel, Rgba};

/// Shaping curve applied to a normalized progress value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Progress passes through unchanged.
    #[default]
    Linear,
    /// Fast start, slow end.
    QuadOut,
    /// Stronger fast start, slow end.
    CubicOut,
    /// Slow at both ends.
    SineInOut,
    /// Overshoots the end, then settles.
    BackOut,
}

impl Easing {
    /// Map `t` in [0, 1] through the curve. Input outside the range is clamped first.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
            Easing::BackOut => {
                const C1: f32 = 1.70158;
                const C3: f32 = C1 + 1.0;
                1.0 + C3 * (t - 1.0).powi(3) + C1 * (t - 1.0).powi(2)
            }
        }
    }
}

// ── Interpolation helpers ────────────────────────────────────────────────

/// `a + (b - a) * t`. With a fixed `t` per tick this is exponential smoothing.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Component-wise [`lerp`] for 3-vectors.
#[inline]
pub fn lerp_vec3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a + (b - a) * t
}

/// Channel-wise [`lerp`] for 8-bit colors.
///
/// Each channel is rounded back to an integer. A channel whose rounded step
/// would be zero while it still differs from the target moves by one unit, so
/// repeated smoothing lands exactly on the target instead of stalling a few
/// units short of it.
#[inline]
pub fn lerp_color(a: Rgba, b: Rgba, t: f32) -> Rgba {
    Rgba {
        r: lerp_channel(a.r, b.r, t),
        g: lerp_channel(a.g, b.g, t),
        b: lerp_channel(a.b, b.b, t),
        a: lerp_channel(a.a, b.a, t),
    }
}

#[inline]
fn lerp_channel(current: u8, target: u8, t: f32) -> u8 {
    let next = clamp_channel(lerp(current as f32, target as f32, t));
    if next != current || current == target || t <= 0.0 {
        return next;
    }
    if target > current {
        current + 1
    } else {
        current - 1
    }
}

/// Interpolate with a shaping curve.
#[inline]
pub fn ease_vec3(a: Vec3, b: Vec3, t: f32, easing: Easing) -> Vec3 {
    lerp_vec3(a, b, easing.apply(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_endpoints() {
        assert_eq!(Easing::Linear.apply(0.0), 0.0);
        assert_eq!(Easing::Linear.apply(1.0), 1.0);
        assert_eq!(Easing::Linear.apply(0.25), 0.25);
    }

    #[test]
    fn curves_hit_endpoints() {
        for easing in [Easing::QuadOut, Easing::CubicOut, Easing::SineInOut, Easing::BackOut] {
            assert!(easing.apply(0.0).abs() < 1e-5, "{:?} at 0", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-5, "{:?} at 1", easing);
        }
    }

    #[test]
    fn back_out_overshoots() {
        let peak = (1..100)
            .map(|i| Easing::BackOut.apply(i as f32 / 100.0))
            .fold(0.0_f32, f32::max);
        assert!(peak > 1.0, "BackOut should overshoot, peak {}", peak);
    }

    #[test]
    fn lerp_closes_fraction_of_gap() {
        assert!((lerp(0.0, 10.0, 0.1) - 1.0).abs() < 1e-6);
        let v = lerp_vec3(Vec3::ZERO, Vec3::new(10.0, -20.0, 5.0), 0.1);
        assert!((v - Vec3::new(1.0, -2.0, 0.5)).length() < 1e-6);
    }

    #[test]
    fn fixed_point_is_stable() {
        let v = Vec3::new(1.5, -2.0, 3.25);
        assert_eq!(lerp_vec3(v, v, 0.1), v);
        assert_eq!(lerp_color(Rgba::BLUE, Rgba::BLUE, 0.1), Rgba::BLUE);
    }

    #[test]
    fn color_channels_are_independent() {
        let from = Rgba::new(0, 100, 200, 255);
        let to = Rgba::new(100, 100, 0, 255);
        let c = lerp_color(from, to, 0.1);
        assert_eq!(c, Rgba::new(10, 100, 180, 255));
    }

    #[test]
    fn color_smoothing_converges_exactly() {
        let mut c = Rgba::DARK_GRAY;
        for _ in 0..200 {
            c = lerp_color(c, Rgba::BLUE, 0.1);
        }
        assert_eq!(c, Rgba::BLUE);

        for _ in 0..200 {
            c = lerp_color(c, Rgba::DARK_GRAY, 0.1);
        }
        assert_eq!(c, Rgba::DARK_GRAY);
    }

    #[test]
    fn zero_factor_leaves_color_alone() {
        let c = lerp_color(Rgba::DARK_GRAY, Rgba::BLUE, 0.0);
        assert_eq!(c, Rgba::DARK_GRAY);
    }
}
