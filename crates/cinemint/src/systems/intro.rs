//! Intro system: drops the items into place, flies the camera in, sprinkles sparkles.

use glam::Vec3;

use crate::api::config::MenuConfig;
use crate::api::context::MenuContext;
use crate::api::types::{MenuEvent, SoundEvent};
use crate::components::color::Rgba;
use crate::extensions::easing::lerp_vec3;
use crate::menu::state::{Phase, SceneState};

/// Per-item progress: the global progress delayed by `offset` per slot, clamped to [0, 1].
pub fn stagger_progress(progress: f32, index: usize, offset: f32) -> f32 {
    (progress - offset * index as f32).clamp(0.0, 1.0)
}

/// Played once, on the first update of the session.
pub fn start_intro(state: &mut SceneState, ctx: &mut MenuContext) {
    if state.started {
        return;
    }
    state.started = true;
    ctx.emit_sound(SoundEvent::INTRO);
    log::info!("intro started with {} items", ctx.scene.len());
}

/// Advance the intro by `dt` seconds. Switches to [`Phase::Idle`] once the
/// timer reaches the duration; idle behaviour starts on the following update.
pub fn update_intro(state: &mut SceneState, ctx: &mut MenuContext, config: &MenuConfig, dt: f32) {
    debug_assert!(state.is_intro());
    let intro = &config.intro;

    state.intro_timer = (state.intro_timer + dt).min(intro.duration);
    let progress = intro.easing.apply(state.intro_progress());

    for item in ctx.scene.iter_mut() {
        item.animate_intro(stagger_progress(progress, item.slot, intro.stagger));
    }

    let cam = &config.camera;
    state.camera.position = lerp_vec3(Vec3::from(cam.start), Vec3::from(cam.rest), progress);

    if progress > intro.sparkle_threshold && ctx.rng.chance(intro.sparkle_chance) {
        let [w, h] = intro.sparkle_area;
        let origin = Vec3::new(ctx.rng.range(-w, w), ctx.rng.range(-h, h), 0.0);
        let color = Rgba::new(ctx.rng.range_u8(100, 255), ctx.rng.range_u8(100, 255), 255, 255);
        ctx.particles.spawn(origin, color, intro.sparkle_count);
    }

    if state.intro_timer >= intro.duration {
        state.phase = Phase::Idle;
        ctx.emit_event(MenuEvent::intro_done(intro.duration));
        log::info!("intro complete after {:.2}s", state.time);
    }
}
