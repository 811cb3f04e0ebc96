use crate::api::config::MenuConfig;
use crate::api::types::{MenuEvent, SoundEvent};
use crate::components::menu_item::ItemStyle;
use crate::core::scene::Scene;
use crate::systems::particles::ParticleSystem;
use crate::systems::rng::Rng;

/// Everything the update systems mutate besides [`SceneState`](crate::menu::state::SceneState):
/// the items, the particle pool, randomness and this frame's outbound sounds and events.
pub struct MenuContext {
    pub scene: Scene,
    pub particles: ParticleSystem,
    pub rng: Rng,
    pub sounds: Vec<SoundEvent>,
    pub events: Vec<MenuEvent>,
}

impl MenuContext {
    pub fn new(config: &MenuConfig) -> Self {
        let style = ItemStyle {
            base_color: config.base_color,
            highlight_color: config.highlight_color,
            hover_scale: config.hover_scale,
            selection_spin: config.selection_spin,
            smoothing: config.smoothing,
        };
        Self {
            scene: Scene::with_row(
                config.model,
                &config.items,
                config.item_spacing,
                config.intro.drop_height,
                style,
            ),
            particles: ParticleSystem::new(config.particles.clone(), config.seed),
            rng: Rng::new(config.seed),
            sounds: Vec::new(),
            events: Vec::new(),
        }
    }

    pub fn emit_sound(&mut self, event: SoundEvent) {
        self.sounds.push(event);
    }

    pub fn emit_event(&mut self, event: MenuEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data (sounds, events).
    pub fn clear_frame_data(&mut self) {
        self.sounds.clear();
        self.events.clear();
    }
}
