use bytemuck::{Pod, Zeroable};

use super::camera::CameraUniform;

/// One menu item model, written to the frame buffer for the host renderer.
/// Must match the host protocol: 12 floats = 48 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct ModelInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Rotation about the world Y axis in radians.
    pub rotation_y: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub scale_z: f32,
    /// Tint, 0.0–1.0 per channel.
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
    /// [`ModelId`](crate::components::model::ModelId) the host resolves at init.
    pub model: f32,
}

impl ModelInstance {
    pub const FLOATS: usize = 12;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// A flat-shaded sphere: background orb or particle. 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct SphereInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub radius: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl SphereInstance {
    pub const FLOATS: usize = 8;
}

/// Screen-space anchor for an item label. The host looks the text up by `slot`
/// (labels JSON is sent once) and draws the box and text centred on `x`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct LabelInstance {
    /// Pixels from the left edge, before `offset_x` is applied.
    pub x: f32,
    /// Pixels from the top edge.
    pub y: f32,
    pub slot: f32,
    /// 0.0–1.0.
    pub alpha: f32,
    /// 1.0 when this is the selected item.
    pub highlighted: f32,
    /// Horizontal slide-in offset in pixels.
    pub offset_x: f32,
    pub font_size: f32,
    /// 0.0 when the anchor fell behind the camera this frame.
    pub visible: f32,
}

impl LabelInstance {
    pub const FLOATS: usize = 8;
}

/// Radial glow behind the selected item, in screen space.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct GlowInstance {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    /// Alpha at the centre; fades to zero at `radius`.
    pub alpha: f32,
}

/// Everything the host draws for one frame.
pub struct RenderBuffer {
    pub models: Vec<ModelInstance>,
    /// Background orbs first, then particles after `orb_split`.
    pub spheres: Vec<SphereInstance>,
    /// Spheres [0..orb_split) are background orbs, [orb_split..] are particles.
    pub orb_split: u32,
    pub labels: Vec<LabelInstance>,
    pub camera: CameraUniform,
    pub glow: Option<GlowInstance>,
    /// Opacity of labels and overlay text.
    pub text_alpha: f32,
    /// 0.0 = intro, 1.0 = idle.
    pub phase: f32,
    /// Slot of the selected item.
    pub selected: u32,
    /// Viewport size in pixels the labels and glow were projected for.
    pub viewport: [f32; 2],
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self {
            models: Vec::with_capacity(8),
            spheres: Vec::with_capacity(512),
            orb_split: 0,
            labels: Vec::with_capacity(8),
            camera: CameraUniform::zeroed(),
            glow: None,
            text_alpha: 0.0,
            phase: 0.0,
            selected: 0,
            viewport: [0.0; 2],
        }
    }

    pub fn clear(&mut self) {
        self.models.clear();
        self.spheres.clear();
        self.orb_split = 0;
        self.labels.clear();
        self.glow = None;
        self.text_alpha = 0.0;
    }

    pub fn push_model(&mut self, instance: ModelInstance) {
        self.models.push(instance);
    }

    pub fn push_sphere(&mut self, instance: SphereInstance) {
        self.spheres.push(instance);
    }

    pub fn push_label(&mut self, instance: LabelInstance) {
        self.labels.push(instance);
    }

    pub fn set_orb_split(&mut self, split: u32) {
        self.orb_split = split;
    }

    pub fn model_count(&self) -> u32 {
        self.models.len() as u32
    }

    pub fn sphere_count(&self) -> u32 {
        self.spheres.len() as u32
    }

    pub fn particle_count(&self) -> u32 {
        self.sphere_count() - self.orb_split
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}
