use serde::{Deserialize, Serialize};

use crate::api::config::MenuConfig;
use crate::api::types::SoundEvent;
use crate::components::model::{ModelDesc, ModelId};
use crate::core::scene::Scene;

/// Static description of the menu sent to the host once at init.
/// Everything per-frame goes through the frame buffer instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostManifest {
    /// Item labels indexed by slot.
    pub labels: Vec<String>,
    pub models: Vec<ModelDescriptor>,
    pub sounds: Vec<SoundDescriptor>,
    pub font_size: f32,
    pub title: String,
    pub instructions: String,
}

/// A model the host must build before the first frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    /// Value found in the `model` field of model instances.
    pub id: u32,
    #[serde(flatten)]
    pub desc: ModelDesc,
}

/// Describes an audio asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundDescriptor {
    /// Numeric event ID that triggers this sound from Rust.
    pub event_id: u32,
    /// Relative path to the audio file.
    pub path: String,
}

impl HostManifest {
    pub fn from_config(config: &MenuConfig) -> Self {
        let bank = &config.sounds;
        let sound = |event: SoundEvent, path: &str| SoundDescriptor {
            event_id: event.0,
            path: path.to_owned(),
        };
        Self {
            labels: config.items.clone(),
            models: vec![model_descriptor(Scene::MODEL, config.model)],
            sounds: vec![
                sound(SoundEvent::INTRO, &bank.intro),
                sound(SoundEvent::NAVIGATE, &bank.navigate),
                sound(SoundEvent::SELECT, &bank.select),
            ],
            font_size: config.labels.font_size,
            title: config.labels.title.clone(),
            instructions: config.labels.instructions.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

fn model_descriptor(id: ModelId, desc: ModelDesc) -> ModelDescriptor {
    ModelDescriptor { id: id.0, desc }
}
