pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod menu;
pub mod extensions;

// Re-export key types at crate root for convenience
pub use api::config::{
    BackgroundConfig, BurstConfig, CameraConfig, IdleConfig, IntroConfig, LabelConfig,
    MenuConfig, OverflowPolicy, ParticleConfig, SoundBank,
};
pub use api::context::MenuContext;
pub use api::error::ConfigError;
pub use api::types::{MenuEvent, SoundEvent};
pub use components::color::Rgba;
pub use components::menu_item::{ItemStyle, MenuItem};
pub use components::model::{ModelDesc, ModelId, ModelShape};
pub use core::scene::Scene;
pub use core::time::FixedTimestep;
pub use renderer::camera::{Camera3D, CameraUniform};
pub use renderer::instance::{GlowInstance, LabelInstance, ModelInstance, RenderBuffer, SphereInstance};
pub use input::queue::{InputEvent, InputQueue, Keymap, MenuAction};
pub use bridge::manifest::HostManifest;
pub use bridge::protocol::{FrameCounts, ProtocolLayout};
pub use menu::orchestrator::MenuScene;
pub use menu::state::{Phase, SceneState};
pub use systems::particles::{Particle, ParticleSystem};
pub use systems::render::build_render_buffer;
pub use systems::rng::Rng;

// Extensions: easing curves and interpolation helpers
pub use extensions::{Easing, lerp, lerp_vec3, lerp_color, ease_vec3};
