//! Background ring: a band of small orbs orbiting behind the items.

use std::f32::consts::TAU;

use glam::Vec3;

use crate::api::config::MenuConfig;
use crate::components::color::Rgba;
use crate::menu::state::SceneState;
use crate::renderer::instance::SphereInstance;

/// World position of orb `index` of `count` on a ring of `radius`, rotated by `rotation`.
/// The ring undulates vertically twice per revolution and sits 5 units below the origin.
pub fn orb_position(index: usize, count: usize, radius: f32, rotation: f32) -> Vec3 {
    let angle = orb_angle(index, count, rotation);
    Vec3::new(angle.cos() * radius, (angle * 2.0).sin() * 5.0 - 5.0, angle.sin() * radius)
}

/// Blue-ish tint that shifts around the ring. `alpha` is 0–255.
pub fn orb_color(angle: f32, alpha: f32) -> Rgba {
    Rgba::new(
        (20.0 + angle.sin() * 20.0) as u8,
        (40.0 + angle.cos() * 20.0) as u8,
        (100.0 + (angle * 0.5).sin() * 20.0) as u8,
        alpha.clamp(0.0, 255.0) as u8,
    )
}

fn orb_angle(index: usize, count: usize, rotation: f32) -> f32 {
    index as f32 / count as f32 * TAU + rotation
}

/// Append every background orb for this frame to `out`. Returns how many were written.
pub fn push_orbs(state: &SceneState, config: &MenuConfig, out: &mut Vec<SphereInstance>) -> usize {
    let bg = &config.background;
    let pulse = state.pulse_scale(config.idle.pulse_speed, config.idle.pulse_amplitude);
    let alpha = bg.orb_alpha * state.background_alpha();

    for i in 0..bg.orb_count {
        let angle = orb_angle(i, bg.orb_count, state.background_rotation);
        let pos = orb_position(i, bg.orb_count, bg.ring_radius, state.background_rotation);
        let [r, g, b, a] = orb_color(angle, alpha).to_f32();
        out.push(SphereInstance {
            x: pos.x,
            y: pos.y,
            z: pos.z,
            radius: bg.orb_radius * pulse,
            r,
            g,
            b,
            a,
        });
    }
    bg.orb_count
}
