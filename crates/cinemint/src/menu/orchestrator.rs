use crate::api::config::MenuConfig;
use crate::api::context::MenuContext;
use crate::api::types::{MenuEvent, SoundEvent};
use crate::core::scene::Scene;
use crate::input::queue::{InputQueue, MenuAction};
use crate::systems::particles::ParticleSystem;
use crate::systems::{idle, intro, navigation};

use super::state::{Phase, SceneState};

/// The menu as a whole: owns the items, particles and loop state, and runs
/// the intro → idle state machine one fixed step at a time.
///
/// Order within a step: timers and phase → item animation → input →
/// camera → particle integration.
pub struct MenuScene {
    config: MenuConfig,
    state: SceneState,
    ctx: MenuContext,
}

impl MenuScene {
    /// Build the menu with item 0 selected. The config must hold at least one item.
    pub fn new(config: MenuConfig) -> Self {
        assert!(!config.items.is_empty(), "menu needs at least one item");
        let state = SceneState::new(&config);
        let mut ctx = MenuContext::new(&config);
        if let Some(first) = ctx.scene.get_mut(0) {
            first.set_selected(true);
        }
        log::info!(
            "menu created: {} items, exit item {:?}",
            config.items.len(),
            config.exit_item
        );
        Self { config, state, ctx }
    }

    /// One fixed step of `dt` seconds. Input is only acted on once idle;
    /// actions pressed during the intro are dropped, as are actions after exit.
    pub fn update(&mut self, dt: f32, input: &InputQueue) {
        intro::start_intro(&mut self.state, &mut self.ctx);
        self.state.time += dt as f64;

        match self.state.phase {
            Phase::Intro => intro::update_intro(&mut self.state, &mut self.ctx, &self.config, dt),
            Phase::Idle => {
                idle::update_idle(&mut self.state, &mut self.ctx, &self.config, dt);
                let actions = input.actions(&self.config.keymap);
                navigation::update_navigation(&mut self.state, &mut self.ctx, &self.config, actions);
            }
        }

        self.ctx.particles.tick(dt);
    }

    /// Apply a single action immediately, outside the fixed-step loop.
    /// Ignored until the intro has finished.
    pub fn apply(&mut self, action: MenuAction) {
        if self.state.is_intro() || self.state.exit_requested {
            return;
        }
        match action {
            MenuAction::Left => navigation::navigate(&mut self.state, &mut self.ctx, &self.config, -1),
            MenuAction::Right => navigation::navigate(&mut self.state, &mut self.ctx, &self.config, 1),
            MenuAction::Confirm => navigation::confirm(&mut self.state, &mut self.ctx, &self.config),
        }
    }

    /// Clear per-frame transient data (sounds, events). Call at the start of each frame.
    pub fn clear_frame_data(&mut self) {
        self.ctx.clear_frame_data();
    }

    pub fn should_exit(&self) -> bool {
        self.state.exit_requested
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn current(&self) -> usize {
        self.state.current
    }

    pub fn state(&self) -> &SceneState {
        &self.state
    }

    pub fn scene(&self) -> &Scene {
        &self.ctx.scene
    }

    pub fn particles(&self) -> &ParticleSystem {
        &self.ctx.particles
    }

    pub fn particles_mut(&mut self) -> &mut ParticleSystem {
        &mut self.ctx.particles
    }

    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    pub fn sounds(&self) -> &[SoundEvent] {
        &self.ctx.sounds
    }

    pub fn events(&self) -> &[MenuEvent] {
        &self.ctx.events
    }
}
