//! Frame buffer layout shared with the host renderer.
//! Must stay in sync with the host's `protocol.ts`.
//!
//! Layout (all values in f32 / 4 bytes):
//! ```text
//! [Header: 44 floats, camera uniform at HEADER_CAMERA]
//! [Models: max_models × 12 floats]
//! [Spheres: max_spheres × 8 floats]
//! [Labels: max_labels × 8 floats]
//! [Sounds: max_sounds × 1 float]
//! [Events: max_events × 4 floats]
//! ```
//!
//! Capacities are written into the header every frame.
//! The host reads them from the header to compute offsets dynamically.

use bytemuck::cast_slice;

use crate::api::config::MenuConfig;
use crate::api::types::{MenuEvent, SoundEvent};
use crate::renderer::camera::CameraUniform;
use crate::renderer::instance::{LabelInstance, ModelInstance, RenderBuffer, SphereInstance};

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 44;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_PROTOCOL_VERSION: usize = 2;
pub const HEADER_PHASE: usize = 3;
pub const HEADER_VIEWPORT_WIDTH: usize = 4;
pub const HEADER_VIEWPORT_HEIGHT: usize = 5;
pub const HEADER_MAX_MODELS: usize = 6;
pub const HEADER_MODEL_COUNT: usize = 7;
pub const HEADER_MAX_SPHERES: usize = 8;
pub const HEADER_SPHERE_COUNT: usize = 9;
pub const HEADER_ORB_SPLIT: usize = 10;
pub const HEADER_MAX_LABELS: usize = 11;
pub const HEADER_LABEL_COUNT: usize = 12;
pub const HEADER_MAX_SOUNDS: usize = 13;
pub const HEADER_SOUND_COUNT: usize = 14;
pub const HEADER_MAX_EVENTS: usize = 15;
pub const HEADER_EVENT_COUNT: usize = 16;
/// Opacity of labels, title and instructions.
pub const HEADER_TEXT_ALPHA: usize = 17;
pub const HEADER_SELECTED: usize = 18;
/// 1.0 when the glow block below holds a glow for this frame.
pub const HEADER_GLOW_VISIBLE: usize = 19;
/// Four floats: x, y, radius, alpha.
pub const HEADER_GLOW: usize = 20;
/// [`CameraUniform`]: view-projection (column-major) then eye position + fovy.
pub const HEADER_CAMERA: usize = 24;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per model instance (wire format, fixed).
pub const MODEL_FLOATS: usize = ModelInstance::FLOATS;

/// Floats per sphere: x, y, z, radius, r, g, b, a (wire format, fixed).
pub const SPHERE_FLOATS: usize = SphereInstance::FLOATS;

/// Floats per label anchor (wire format, fixed).
pub const LABEL_FLOATS: usize = LabelInstance::FLOATS;

/// Floats per menu event: kind, a, b, c (wire format, fixed).
pub const EVENT_FLOATS: usize = MenuEvent::FLOATS;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Maximum item models.
    pub max_models: usize,
    /// Maximum spheres (background orbs plus particles).
    pub max_spheres: usize,
    /// Maximum label anchors.
    pub max_labels: usize,
    /// Maximum sound events per frame.
    pub max_sounds: usize,
    /// Maximum menu events per frame.
    pub max_events: usize,

    /// Size of model data section in floats.
    pub model_data_floats: usize,
    /// Size of sphere data section in floats.
    pub sphere_data_floats: usize,
    /// Size of label data section in floats.
    pub label_data_floats: usize,
    /// Size of sound data section in floats.
    pub sound_data_floats: usize,
    /// Size of event data section in floats.
    pub event_data_floats: usize,

    /// Offset (in floats) where model data begins.
    pub model_data_offset: usize,
    /// Offset (in floats) where sphere data begins.
    pub sphere_data_offset: usize,
    /// Offset (in floats) where label data begins.
    pub label_data_offset: usize,
    /// Offset (in floats) where sound data begins.
    pub sound_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

/// Counts actually written by [`ProtocolLayout::write_frame`], after capacity truncation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameCounts {
    pub models: usize,
    pub spheres: usize,
    pub orb_split: usize,
    pub labels: usize,
    pub sounds: usize,
    pub events: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(
        max_models: usize,
        max_spheres: usize,
        max_labels: usize,
        max_sounds: usize,
        max_events: usize,
    ) -> Self {
        let model_data_floats = max_models * MODEL_FLOATS;
        let sphere_data_floats = max_spheres * SPHERE_FLOATS;
        let label_data_floats = max_labels * LABEL_FLOATS;
        let sound_data_floats = max_sounds;
        let event_data_floats = max_events * EVENT_FLOATS;

        let model_data_offset = HEADER_FLOATS;
        let sphere_data_offset = model_data_offset + model_data_floats;
        let label_data_offset = sphere_data_offset + sphere_data_floats;
        let sound_data_offset = label_data_offset + label_data_floats;
        let event_data_offset = sound_data_offset + sound_data_floats;

        let buffer_total_floats = event_data_offset + event_data_floats;
        let buffer_total_bytes = buffer_total_floats * 4;

        Self {
            max_models,
            max_spheres,
            max_labels,
            max_sounds,
            max_events,
            model_data_floats,
            sphere_data_floats,
            label_data_floats,
            sound_data_floats,
            event_data_floats,
            model_data_offset,
            sphere_data_offset,
            label_data_offset,
            sound_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes,
        }
    }

    /// Compute layout from a MenuConfig. One model and one label per item.
    pub fn from_config(config: &MenuConfig) -> Self {
        Self::new(
            config.items.len(),
            config.max_spheres,
            config.items.len(),
            config.max_sounds,
            config.max_events,
        )
    }

    /// Allocate a zeroed frame buffer of the right size.
    pub fn allocate(&self) -> Vec<f32> {
        vec![0.0; self.buffer_total_floats]
    }

    /// Pack one frame into `frame`. Sections are truncated to their capacity;
    /// spheres past capacity are particles, so orbs are never dropped first.
    pub fn write_frame(
        &self,
        frame: &mut [f32],
        frame_counter: u32,
        render: &RenderBuffer,
        sounds: &[SoundEvent],
        events: &[MenuEvent],
    ) -> FrameCounts {
        assert!(
            frame.len() >= self.buffer_total_floats,
            "frame buffer holds {} floats, layout needs {}",
            frame.len(),
            self.buffer_total_floats
        );

        let counts = FrameCounts {
            models: render.models.len().min(self.max_models),
            spheres: render.spheres.len().min(self.max_spheres),
            orb_split: (render.orb_split as usize).min(self.max_spheres),
            labels: render.labels.len().min(self.max_labels),
            sounds: sounds.len().min(self.max_sounds),
            events: events.len().min(self.max_events),
        };
        if counts.spheres < render.spheres.len() {
            log::warn!(
                "frame buffer full: dropped {} spheres",
                render.spheres.len() - counts.spheres
            );
        }

        let header = &mut frame[..HEADER_FLOATS];
        header.fill(0.0);
        header[HEADER_FRAME_COUNTER] = frame_counter as f32;
        header[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        header[HEADER_PHASE] = render.phase;
        header[HEADER_VIEWPORT_WIDTH] = render.viewport[0];
        header[HEADER_VIEWPORT_HEIGHT] = render.viewport[1];
        header[HEADER_MAX_MODELS] = self.max_models as f32;
        header[HEADER_MODEL_COUNT] = counts.models as f32;
        header[HEADER_MAX_SPHERES] = self.max_spheres as f32;
        header[HEADER_SPHERE_COUNT] = counts.spheres as f32;
        header[HEADER_ORB_SPLIT] = counts.orb_split as f32;
        header[HEADER_MAX_LABELS] = self.max_labels as f32;
        header[HEADER_LABEL_COUNT] = counts.labels as f32;
        header[HEADER_MAX_SOUNDS] = self.max_sounds as f32;
        header[HEADER_SOUND_COUNT] = counts.sounds as f32;
        header[HEADER_MAX_EVENTS] = self.max_events as f32;
        header[HEADER_EVENT_COUNT] = counts.events as f32;
        header[HEADER_TEXT_ALPHA] = render.text_alpha;
        header[HEADER_SELECTED] = render.selected as f32;
        if let Some(glow) = render.glow {
            header[HEADER_GLOW_VISIBLE] = 1.0;
            header[HEADER_GLOW..HEADER_GLOW + 4].copy_from_slice(cast_slice(&[glow]));
        }
        header[HEADER_CAMERA..HEADER_CAMERA + CameraUniform::FLOATS]
            .copy_from_slice(cast_slice(&[render.camera]));

        write_section(frame, self.model_data_offset, cast_slice(&render.models[..counts.models]));
        write_section(frame, self.sphere_data_offset, cast_slice(&render.spheres[..counts.spheres]));
        write_section(frame, self.label_data_offset, cast_slice(&render.labels[..counts.labels]));
        for (slot, sound) in frame[self.sound_data_offset..]
            .iter_mut()
            .zip(&sounds[..counts.sounds])
        {
            *slot = sound.0 as f32;
        }
        write_section(frame, self.event_data_offset, cast_slice(&events[..counts.events]));

        counts
    }
}

fn write_section(frame: &mut [f32], offset: usize, data: &[f32]) {
    frame[offset..offset + data.len()].copy_from_slice(data);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::instance::GlowInstance;

    #[test]
    fn from_default_config_matches_expected_sizes() {
        let layout = ProtocolLayout::from_config(&MenuConfig::default());

        assert_eq!(layout.max_models, 3);
        assert_eq!(layout.max_spheres, 4160);
        assert_eq!(layout.max_labels, 3);
        assert_eq!(layout.max_sounds, 16);
        assert_eq!(layout.max_events, 16);

        assert_eq!(layout.model_data_offset, HEADER_FLOATS);
        assert_eq!(layout.sphere_data_offset, HEADER_FLOATS + 3 * 12);
        assert_eq!(layout.label_data_offset, HEADER_FLOATS + 3 * 12 + 4160 * 8);
        assert_eq!(
            layout.buffer_total_floats,
            HEADER_FLOATS + 3 * 12 + 4160 * 8 + 3 * 8 + 16 + 16 * 4
        );
        assert_eq!(layout.buffer_total_bytes, layout.buffer_total_floats * 4);
    }

    #[test]
    fn offsets_are_contiguous() {
        let layout = ProtocolLayout::new(5, 100, 5, 10, 20);

        assert_eq!(layout.model_data_offset, HEADER_FLOATS);
        assert_eq!(layout.sphere_data_offset, layout.model_data_offset + layout.model_data_floats);
        assert_eq!(layout.label_data_offset, layout.sphere_data_offset + layout.sphere_data_floats);
        assert_eq!(layout.sound_data_offset, layout.label_data_offset + layout.label_data_floats);
        assert_eq!(layout.event_data_offset, layout.sound_data_offset + layout.sound_data_floats);
        assert_eq!(layout.buffer_total_floats, layout.event_data_offset + layout.event_data_floats);
    }

    #[test]
    fn camera_block_fits_in_header() {
        assert!(HEADER_GLOW + 4 <= HEADER_CAMERA);
        assert_eq!(HEADER_CAMERA + CameraUniform::FLOATS, HEADER_FLOATS);
    }

    #[test]
    fn write_frame_packs_every_section() {
        let layout = ProtocolLayout::new(2, 4, 2, 2, 2);
        let mut frame = layout.allocate();
        let mut render = RenderBuffer::new();
        render.push_model(ModelInstance { x: 7.0, model: 0.0, ..Default::default() });
        render.push_sphere(SphereInstance { radius: 0.3, ..Default::default() });
        render.set_orb_split(1);
        render.push_sphere(SphereInstance { radius: 0.1, ..Default::default() });
        render.push_label(LabelInstance { slot: 1.0, ..Default::default() });
        render.glow = Some(GlowInstance { x: 10.0, y: 20.0, radius: 100.0, alpha: 0.3 });
        render.text_alpha = 0.5;
        render.selected = 1;

        let counts = layout.write_frame(
            &mut frame,
            9,
            &render,
            &[SoundEvent::NAVIGATE],
            &[MenuEvent::confirmed(1)],
        );

        assert_eq!(counts, FrameCounts { models: 1, spheres: 2, orb_split: 1, labels: 1, sounds: 1, events: 1 });
        assert_eq!(frame[HEADER_FRAME_COUNTER], 9.0);
        assert_eq!(frame[HEADER_PROTOCOL_VERSION], PROTOCOL_VERSION);
        assert_eq!(frame[HEADER_SPHERE_COUNT], 2.0);
        assert_eq!(frame[HEADER_ORB_SPLIT], 1.0);
        assert_eq!(frame[HEADER_TEXT_ALPHA], 0.5);
        assert_eq!(frame[HEADER_SELECTED], 1.0);
        assert_eq!(frame[HEADER_GLOW_VISIBLE], 1.0);
        assert_eq!(&frame[HEADER_GLOW..HEADER_GLOW + 4], &[10.0, 20.0, 100.0, 0.3]);
        assert_eq!(frame[layout.model_data_offset], 7.0);
        assert_eq!(frame[layout.sphere_data_offset + 3], 0.3);
        assert_eq!(frame[layout.sphere_data_offset + SPHERE_FLOATS + 3], 0.1);
        assert_eq!(frame[layout.label_data_offset + 2], 1.0);
        assert_eq!(frame[layout.sound_data_offset], 1.0);
        assert_eq!(
            &frame[layout.event_data_offset..layout.event_data_offset + 4],
            &[MenuEvent::KIND_CONFIRMED, 1.0, 0.0, 0.0]
        );
    }

    #[test]
    fn write_frame_truncates_at_capacity() {
        let layout = ProtocolLayout::new(1, 2, 1, 1, 1);
        let mut frame = layout.allocate();
        let mut render = RenderBuffer::new();
        for _ in 0..5 {
            render.push_sphere(SphereInstance::default());
        }
        render.set_orb_split(1);
        let sounds = [SoundEvent::INTRO, SoundEvent::SELECT];

        let counts = layout.write_frame(&mut frame, 0, &render, &sounds, &[]);
        assert_eq!(counts.spheres, 2);
        assert_eq!(counts.orb_split, 1);
        assert_eq!(counts.sounds, 1);
        assert_eq!(frame[HEADER_GLOW_VISIBLE], 0.0);
        assert_eq!(frame.len(), layout.buffer_total_floats);
    }
}
