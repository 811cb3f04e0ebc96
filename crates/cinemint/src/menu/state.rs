use glam::Vec3;

use crate::api::config::MenuConfig;
use crate::renderer::camera::Camera3D;

/// Which half of the menu's lifetime we are in. Intro → Idle, never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Intro,
    Idle,
}

/// Per-session loop state, threaded by `&mut` through the update systems.
#[derive(Debug, Clone)]
pub struct SceneState {
    pub phase: Phase,
    /// Seconds spent in the intro, capped at the intro duration.
    pub intro_timer: f32,
    pub intro_duration: f32,
    /// Simulated seconds since the menu started.
    pub time: f64,
    /// Slot of the selected item.
    pub current: usize,
    pub camera: Camera3D,
    /// Position the camera smooths toward during idle.
    pub camera_goal: Vec3,
    /// Background ring angle in radians; only grows.
    pub background_rotation: f32,
    /// Drives the background pulse; only grows.
    pub pulse_timer: f32,
    /// Set once the exit item is confirmed.
    pub exit_requested: bool,
    /// Set after the first update has run (intro sound emitted).
    pub started: bool,
}

impl SceneState {
    pub fn new(config: &MenuConfig) -> Self {
        let cam = &config.camera;
        Self {
            phase: Phase::Intro,
            intro_timer: 0.0,
            intro_duration: config.intro.duration,
            time: 0.0,
            current: 0,
            camera: Camera3D::new(Vec3::from(cam.start), Vec3::from(cam.target), cam.fovy),
            camera_goal: Vec3::from(cam.rest),
            background_rotation: 0.0,
            pulse_timer: 0.0,
            exit_requested: false,
            started: false,
        }
    }

    pub fn is_intro(&self) -> bool {
        self.phase == Phase::Intro
    }

    /// Raw intro progress in [0, 1]; 1 once idle.
    pub fn intro_progress(&self) -> f32 {
        match self.phase {
            Phase::Idle => 1.0,
            Phase::Intro => (self.intro_timer / self.intro_duration).clamp(0.0, 1.0),
        }
    }

    /// Opacity of labels and overlay text; follows intro progress.
    pub fn text_alpha(&self) -> f32 {
        self.intro_progress()
    }

    /// Background fade-in; follows intro progress.
    pub fn background_alpha(&self) -> f32 {
        self.intro_progress()
    }

    /// Multiplier applied to background orb radius.
    pub fn pulse_scale(&self, speed: f32, amplitude: f32) -> f32 {
        1.0 + amplitude * (self.pulse_timer * speed).sin()
    }
}
