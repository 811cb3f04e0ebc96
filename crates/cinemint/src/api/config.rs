use serde::{Deserialize, Serialize};

use crate::api::error::ConfigError;
use crate::components::color::Rgba;
use crate::components::model::ModelDesc;
use crate::extensions::easing::Easing;
use crate::input::queue::Keymap;

/// Everything the menu needs to know before the first frame.
/// Every field has a default, so a host can send `{}` or only the overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Fixed simulation step in seconds (default: 1/60).
    /// Particle velocities are per-step displacements tuned for this rate.
    pub fixed_dt: f32,
    /// Viewport size in pixels (width, height), used for projection and label slide-in.
    pub viewport: [f32; 2],
    /// Item labels, left to right.
    pub items: Vec<String>,
    /// Slot that ends the session when confirmed.
    pub exit_item: Option<usize>,
    /// Horizontal distance between neighbouring items.
    pub item_spacing: f32,
    /// Fraction of the remaining distance items close per step.
    pub smoothing: f32,
    /// Uniform scale of the selected item.
    pub hover_scale: f32,
    /// Extra Y rotation (radians) added to the target when an item becomes selected.
    pub selection_spin: f32,
    /// Resting tint of unselected items.
    pub base_color: Rgba,
    /// Tint of the selected item.
    pub highlight_color: Rgba,
    /// Model shared by every item.
    pub model: ModelDesc,
    pub intro: IntroConfig,
    pub idle: IdleConfig,
    pub camera: CameraConfig,
    pub background: BackgroundConfig,
    pub labels: LabelConfig,
    pub particles: ParticleConfig,
    pub bursts: BurstConfig,
    pub sounds: SoundBank,
    pub keymap: Keymap,
    /// RNG seed for particle and sparkle randomness.
    pub seed: u64,
    /// Maximum sphere instances per frame (particles + background orbs).
    pub max_spheres: usize,
    /// Maximum sound events per frame.
    pub max_sounds: usize,
    /// Maximum menu events per frame.
    pub max_events: usize,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            viewport: [1280.0, 720.0],
            items: vec!["Option 1".into(), "Option 2".into(), "Option 3".into()],
            exit_item: Some(2),
            item_spacing: 5.0,
            smoothing: 0.1,
            hover_scale: 1.2,
            selection_spin: 0.5,
            base_color: Rgba::DARK_GRAY,
            highlight_color: Rgba::BLUE,
            model: ModelDesc::default(),
            intro: IntroConfig::default(),
            idle: IdleConfig::default(),
            camera: CameraConfig::default(),
            background: BackgroundConfig::default(),
            labels: LabelConfig::default(),
            particles: ParticleConfig::default(),
            bursts: BurstConfig::default(),
            sounds: SoundBank::default(),
            keymap: Keymap::default(),
            seed: 42,
            max_spheres: 4096 + 64,
            max_sounds: 16,
            max_events: 16,
        }
    }
}

/// Intro sequence: items rise from below, scale up and fade in while the camera dollies in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IntroConfig {
    /// Length of the intro in seconds.
    pub duration: f32,
    /// How far below its resting place each item starts.
    pub drop_height: f32,
    /// Progress lag per slot; later items trail earlier ones.
    pub stagger: f32,
    /// Curve applied to global intro progress.
    pub easing: Easing,
    /// Sparkles only appear once progress exceeds this.
    pub sparkle_threshold: f32,
    /// Per-step probability of a sparkle once past the threshold.
    pub sparkle_chance: f32,
    /// Particles per sparkle.
    pub sparkle_count: usize,
    /// Half-extent (x, y) of the area sparkles appear in, centred on the origin.
    pub sparkle_area: [f32; 2],
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            duration: 2.0,
            drop_height: 20.0,
            stagger: 0.1,
            easing: Easing::Linear,
            sparkle_threshold: 0.5,
            sparkle_chance: 0.1,
            sparkle_count: 5,
            sparkle_area: [5.0, 3.0],
        }
    }
}

/// Oscillators that drive item targets after the intro.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IdleConfig {
    /// Background ring rotation added per step (radians).
    pub background_spin: f32,
    /// Peak item sway around Y (radians).
    pub sway_amplitude: f32,
    /// Sway phase offset per slot.
    pub sway_phase: f32,
    /// Peak vertical bob.
    pub bob_amplitude: f32,
    /// Bob angular speed (radians per second).
    pub bob_speed: f32,
    /// Bob phase offset per slot.
    pub bob_phase: f32,
    /// Background orb pulse angular speed (radians per second).
    pub pulse_speed: f32,
    /// Background orb pulse depth, as a fraction of orb radius.
    pub pulse_amplitude: f32,
}

impl Default for IdleConfig {
    fn default() -> Self {
        Self {
            background_spin: 0.005,
            sway_amplitude: 0.3,
            sway_phase: 0.5,
            bob_amplitude: 0.2,
            bob_speed: 0.5,
            bob_phase: 1.0,
            pulse_speed: 2.0,
            pulse_amplitude: 0.05,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Camera position when the intro begins.
    pub start: [f32; 3],
    /// Camera position when the intro ends.
    pub rest: [f32; 3],
    /// Point the camera looks at.
    pub target: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Fraction of the remaining distance the camera closes per idle step.
    pub smoothing: f32,
    /// Camera X goal as a fraction of the selected item's X.
    pub follow_factor: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            start: [0.0, 2.0, 30.0],
            rest: [0.0, 2.0, 15.0],
            target: [0.0, 0.0, 0.0],
            fovy: 45.0,
            smoothing: 0.05,
            follow_factor: 0.5,
        }
    }
}

/// Ring of slowly orbiting spheres behind the items.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    pub orb_count: usize,
    pub ring_radius: f32,
    pub orb_radius: f32,
    /// Orb alpha once fully faded in (0–255).
    pub orb_alpha: f32,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            orb_count: 50,
            ring_radius: 20.0,
            orb_radius: 0.3,
            orb_alpha: 100.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    /// World-space height of the label anchor above the item.
    pub lift: f32,
    /// Font size in pixels, passed through to the host.
    pub font_size: f32,
    /// Peak alpha (0–1) of the glow behind the selected item.
    pub glow_alpha: f32,
    /// Glow radius in pixels.
    pub glow_radius: f32,
    /// Overlay text drawn top-left, fading in with the labels.
    pub title: String,
    /// Overlay text drawn bottom-left.
    pub instructions: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            lift: 2.5,
            font_size: 35.0,
            glow_alpha: 0.3,
            glow_radius: 100.0,
            title: "Cinemint".into(),
            instructions: "Use LEFT/RIGHT to navigate, ENTER to select".into(),
        }
    }
}

/// What happens when a spawn would exceed `max_particles`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Evict the oldest live particles to make room.
    #[default]
    DropOldest,
    /// Keep the live set and discard the surplus new particles.
    RejectNew,
}

/// Spawn parameters and capacity of the particle system.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Live particle cap; `None` leaves the collection unbounded.
    pub max_particles: Option<usize>,
    pub overflow: OverflowPolicy,
    /// Horizontal (x and z) velocity is drawn from [-drift, drift].
    pub drift: f32,
    /// Vertical velocity range; positive values drift upward.
    pub rise: [f32; 2],
    /// Sphere radius range.
    pub size: [f32; 2],
    /// Lifetime range in seconds.
    pub lifetime: [f32; 2],
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            max_particles: Some(4096),
            overflow: OverflowPolicy::DropOldest,
            drift: 0.05,
            rise: [0.01, 0.05],
            size: [0.05, 0.15],
            lifetime: [1.0, 2.0],
        }
    }
}

/// Particle bursts fired by navigation and confirmation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BurstConfig {
    pub navigate_count: usize,
    pub navigate_color: Rgba,
    pub confirm_count: usize,
    pub confirm_color: Rgba,
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self {
            navigate_count: 20,
            navigate_color: Rgba::BLUE,
            confirm_count: 50,
            confirm_color: Rgba::GOLD,
        }
    }
}

/// Asset paths for each sound the menu emits. The host loads these at init.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundBank {
    pub intro: String,
    pub navigate: String,
    pub select: String,
}

impl Default for SoundBank {
    fn default() -> Self {
        Self {
            intro: "resources/intro.wav".into(),
            navigate: "resources/move.wav".into(),
            select: "resources/select.wav".into(),
        }
    }
}

impl MenuConfig {
    /// Parse and validate a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: MenuConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the animation systems rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.items.is_empty() {
            return Err(ConfigError::NoItems);
        }
        if let Some(index) = self.exit_item {
            if index >= self.items.len() {
                return Err(ConfigError::ExitOutOfRange { index, len: self.items.len() });
            }
        }

        check_factor("smoothing", self.smoothing)?;
        check_factor("camera.smoothing", self.camera.smoothing)?;

        check_positive("fixed_dt", self.fixed_dt)?;
        check_positive("intro.duration", self.intro.duration)?;
        check_positive("hover_scale", self.hover_scale)?;
        check_positive("camera.fovy", self.camera.fovy)?;
        check_positive("viewport width", self.viewport[0])?;
        check_positive("viewport height", self.viewport[1])?;

        let p = &self.particles;
        check_range("particles.rise", p.rise)?;
        check_range("particles.size", p.size)?;
        check_range("particles.lifetime", p.lifetime)?;
        check_positive("particles.lifetime", p.lifetime[0])?;
        check_range("particles.drift", [-p.drift, p.drift])?;

        Ok(())
    }
}

fn check_factor(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::FactorOutOfRange { field, value })
    }
}

fn check_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn check_range(field: &'static str, [min, max]: [f32; 2]) -> Result<(), ConfigError> {
    if min <= max {
        Ok(())
    } else {
        Err(ConfigError::EmptyRange { field, min, max })
    }
}
