//! Navigation system: turns menu actions into selection changes, bursts, sounds and events,
//! and keeps the camera drifting toward the selected item.

use glam::Vec3;

use crate::api::config::MenuConfig;
use crate::api::context::MenuContext;
use crate::api::types::{MenuEvent, SoundEvent};
use crate::input::queue::MenuAction;
use crate::menu::state::SceneState;

/// Move `current` by `delta` slots, wrapping in both directions.
pub fn wrap_index(current: usize, delta: isize, count: usize) -> usize {
    assert!(count > 0, "cannot wrap over an empty menu");
    (current as isize + delta).rem_euclid(count as isize) as usize
}

/// Move the selection by `delta` and react: swap highlight, sound, burst, camera goal.
pub fn navigate(state: &mut SceneState, ctx: &mut MenuContext, config: &MenuConfig, delta: isize) {
    let next = wrap_index(state.current, delta, ctx.scene.len());
    if let Some(old) = ctx.scene.get_mut(state.current) {
        old.set_selected(false);
    }
    state.current = next;

    let Some(item) = ctx.scene.get_mut(next) else {
        return;
    };
    item.set_selected(true);
    let position = item.position;

    ctx.emit_sound(SoundEvent::NAVIGATE);
    let bursts = &config.bursts;
    ctx.particles.spawn(position, bursts.navigate_color, bursts.navigate_count);
    state.camera_goal = camera_goal_for(state.camera_goal, position, config.camera.follow_factor);

    log::debug!("selection moved to {} ({})", next, item_label(ctx, next));
}

/// Confirm the current selection. Confirming the exit item raises the exit flag.
pub fn confirm(state: &mut SceneState, ctx: &mut MenuContext, config: &MenuConfig) {
    let slot = state.current;
    let Some(position) = ctx.scene.get(slot).map(|item| item.position) else {
        return;
    };

    ctx.emit_sound(SoundEvent::SELECT);
    ctx.emit_event(MenuEvent::confirmed(slot));
    let bursts = &config.bursts;
    ctx.particles.spawn(position, bursts.confirm_color, bursts.confirm_count);
    log::debug!("confirmed {} ({})", slot, item_label(ctx, slot));

    if config.exit_item == Some(slot) && !state.exit_requested {
        state.exit_requested = true;
        ctx.emit_event(MenuEvent::exit());
        log::info!("exit requested");
    }
}

/// Apply queued actions in order, then one camera smoothing step.
pub fn update_navigation(
    state: &mut SceneState,
    ctx: &mut MenuContext,
    config: &MenuConfig,
    actions: impl IntoIterator<Item = MenuAction>,
) {
    for action in actions {
        if state.exit_requested {
            break;
        }
        match action {
            MenuAction::Left => navigate(state, ctx, config, -1),
            MenuAction::Right => navigate(state, ctx, config, 1),
            MenuAction::Confirm => confirm(state, ctx, config),
        }
    }
    state.camera.follow(state.camera_goal, config.camera.smoothing);
}

fn item_label(ctx: &MenuContext, slot: usize) -> &str {
    ctx.scene.get(slot).map_or("", |item| item.label.as_str())
}

/// Camera goal for the item at `position`, keeping the goal's Y and Z.
pub fn camera_goal_for(goal: Vec3, position: Vec3, follow_factor: f32) -> Vec3 {
    Vec3::new(position.x * follow_factor, goal.y, goal.z)
}
