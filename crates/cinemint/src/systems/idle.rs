//! Idle system: background spin, pulse clock and the gentle sway/bob of every item.

use crate::api::config::MenuConfig;
use crate::api::context::MenuContext;
use crate::menu::state::SceneState;

/// One idle step. Items are smoothed toward last step's targets, then the
/// oscillator targets for the next step are written.
pub fn update_idle(state: &mut SceneState, ctx: &mut MenuContext, config: &MenuConfig, dt: f32) {
    let idle = &config.idle;
    state.background_rotation += idle.background_spin;
    state.pulse_timer += dt;

    let time = state.time as f32;
    let rotation = state.background_rotation;
    for item in ctx.scene.iter_mut() {
        item.tick();

        let i = item.slot as f32;
        item.target_rotation.y = (rotation + i * idle.sway_phase).sin() * idle.sway_amplitude;
        item.target_position.y = (time * idle.bob_speed + i * idle.bob_phase).sin() * idle.bob_amplitude;
    }
}
