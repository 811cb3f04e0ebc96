use serde::{Deserialize, Serialize};

/// Non-owning handle to a model resource held by the menu scene.
/// The host resolves it against the descriptors it loaded at init.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ModelId(pub u32);

/// Procedural mesh primitive the host generates for a model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelShape {
    Sphere { radius: f32, rings: u32, slices: u32 },
}

/// Describes one model resource. Owned by the scene for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelDesc {
    pub shape: ModelShape,
}

impl Default for ModelDesc {
    fn default() -> Self {
        Self {
            shape: ModelShape::Sphere { radius: 1.2, rings: 16, slices: 16 },
        }
    }
}
