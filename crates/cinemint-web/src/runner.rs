use cinemint::bridge::protocol::FrameCounts;
use cinemint::{
    build_render_buffer, FixedTimestep, HostManifest, InputEvent, InputQueue, MenuAction,
    MenuConfig, MenuScene, ProtocolLayout, RenderBuffer,
};

/// Menu runner that wires the menu loop to the host.
///
/// A demo crate keeps one in a `thread_local!` and exports free functions via
/// `#[wasm_bindgen]` (see [`export_menu!`](crate::export_menu)); the host calls
/// `tick` once per animation frame and reads the packed frame buffer back.
pub struct MenuRunner {
    menu: MenuScene,
    input: InputQueue,
    render_buffer: RenderBuffer,
    timestep: FixedTimestep,
    layout: ProtocolLayout,
    /// Packed frame the host reads through `frame_ptr`.
    frame: Vec<f32>,
    frame_counter: u32,
    last_counts: FrameCounts,
    manifest_json: String,
}

impl MenuRunner {
    pub fn new(config: MenuConfig) -> Self {
        let timestep = FixedTimestep::new(config.fixed_dt);
        let layout = ProtocolLayout::from_config(&config);
        let frame = layout.allocate();
        let manifest_json = HostManifest::from_config(&config)
            .to_json()
            .unwrap_or_else(|e| {
                log::error!("failed to serialize host manifest: {}", e);
                String::from("{}")
            });

        Self {
            menu: MenuScene::new(config),
            input: InputQueue::new(),
            render_buffer: RenderBuffer::new(),
            timestep,
            layout,
            frame,
            frame_counter: 0,
            last_counts: FrameCounts::default(),
            manifest_json,
        }
    }

    /// Build from a JSON config. Invalid configs are logged and replaced by the defaults.
    pub fn from_json(json: &str) -> Self {
        let config = MenuConfig::from_json(json).unwrap_or_else(|e| {
            log::error!("invalid menu config, using defaults: {}", e);
            MenuConfig::default()
        });
        Self::new(config)
    }

    /// Push an input event into the queue. Handled on the next fixed step.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    pub fn push_key_down(&mut self, key_code: u32) {
        self.push_input(InputEvent::KeyDown { key_code });
    }

    pub fn push_action(&mut self, action: MenuAction) {
        self.push_input(InputEvent::Action(action));
    }

    /// Run one frame tick: fixed steps, render buffer, frame packing.
    pub fn tick(&mut self, dt: f32) {
        // Clear per-frame transient data
        self.menu.clear_frame_data();

        // Fixed timestep accumulation. Input is consumed by the first step so a
        // key press is handled once even when a frame runs several steps.
        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.menu.update(self.timestep.dt(), &self.input);
            self.input.drain();
        }

        build_render_buffer(&self.menu, &mut self.render_buffer);

        self.frame_counter = self.frame_counter.wrapping_add(1);
        self.last_counts = self.layout.write_frame(
            &mut self.frame,
            self.frame_counter,
            &self.render_buffer,
            self.menu.sounds(),
            self.menu.events(),
        );
    }

    pub fn menu(&self) -> &MenuScene {
        &self.menu
    }

    pub fn should_exit(&self) -> bool {
        self.menu.should_exit()
    }

    /// Labels, models, sounds and overlay text, serialized once at construction.
    pub fn manifest_json(&self) -> &str {
        &self.manifest_json
    }

    /// Sound descriptors only, for hosts that preload audio before the manifest.
    pub fn sounds_json(&self) -> String {
        let manifest = HostManifest::from_config(self.menu.config());
        serde_json_array(&manifest.sounds)
    }

    /// Item labels indexed by slot.
    pub fn labels_json(&self) -> String {
        serde_json_array(&self.menu.config().items)
    }

    // ---- Pointer accessors for frame buffer reads ----

    pub fn frame_ptr(&self) -> *const f32 {
        self.frame.as_ptr()
    }

    pub fn frame(&self) -> &[f32] {
        &self.frame
    }

    pub fn frame_counter(&self) -> u32 {
        self.frame_counter
    }

    pub fn last_counts(&self) -> FrameCounts {
        self.last_counts
    }

    // ---- Capacity accessors (read by the host via wasm_bindgen exports) ----

    pub fn max_models(&self) -> u32 {
        self.layout.max_models as u32
    }

    pub fn max_spheres(&self) -> u32 {
        self.layout.max_spheres as u32
    }

    pub fn max_labels(&self) -> u32 {
        self.layout.max_labels as u32
    }

    pub fn max_sounds(&self) -> u32 {
        self.layout.max_sounds as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}

fn serde_json_array<T: serde::Serialize>(items: &[T]) -> String {
    serde_json::to_string(items).unwrap_or_else(|e| {
        log::error!("failed to serialize host data: {}", e);
        String::from("[]")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinemint::bridge::protocol::{
        HEADER_EVENT_COUNT, HEADER_FRAME_COUNTER, HEADER_GLOW_VISIBLE, HEADER_PHASE,
        HEADER_SELECTED, HEADER_SOUND_COUNT,
    };
    use cinemint::{Keymap, MenuEvent, Phase, SoundEvent};

    const DT: f32 = 1.0 / 60.0;

    fn run_until_idle(runner: &mut MenuRunner) {
        for _ in 0..200 {
            runner.tick(DT);
            if runner.menu().phase() == Phase::Idle {
                return;
            }
        }
        panic!("intro never finished");
    }

    #[test]
    fn first_tick_packs_intro_sound() {
        let mut runner = MenuRunner::new(MenuConfig::default());
        runner.tick(DT);

        let frame = runner.frame();
        assert_eq!(frame.len(), runner.buffer_total_floats() as usize);
        assert_eq!(frame[HEADER_FRAME_COUNTER], 1.0);
        assert_eq!(frame[HEADER_PHASE], 0.0);
        assert_eq!(frame[HEADER_SOUND_COUNT], 1.0);
        let layout = ProtocolLayout::from_config(&MenuConfig::default());
        assert_eq!(frame[layout.sound_data_offset], SoundEvent::INTRO.0 as f32);
    }

    #[test]
    fn short_frames_accumulate_into_steps() {
        let mut runner = MenuRunner::new(MenuConfig::default());
        runner.tick(0.004);
        assert_eq!(runner.menu().state().time, 0.0);
        runner.tick(0.004);
        runner.tick(0.004);
        runner.tick(0.006);
        assert!(runner.menu().state().time > 0.0);
    }

    #[test]
    fn key_press_is_handled_once_per_frame() {
        let mut runner = MenuRunner::new(MenuConfig::default());
        run_until_idle(&mut runner);

        runner.push_key_down(Keymap::ARROW_RIGHT);
        // Three steps in one frame; the press must still move the selection once.
        runner.tick(3.0 * DT + 0.001);
        assert_eq!(runner.menu().current(), 1);
        assert_eq!(runner.frame()[HEADER_SELECTED], 1.0);
        assert_eq!(runner.frame()[HEADER_GLOW_VISIBLE], 1.0);
        assert_eq!(runner.menu().sounds(), &[SoundEvent::NAVIGATE]);
    }

    #[test]
    fn confirming_exit_item_is_reported() {
        let mut runner = MenuRunner::new(MenuConfig::default());
        run_until_idle(&mut runner);

        runner.push_action(MenuAction::Left);
        runner.tick(DT);
        runner.push_action(MenuAction::Confirm);
        runner.tick(DT);

        assert!(runner.should_exit());
        assert_eq!(runner.frame()[HEADER_EVENT_COUNT], 2.0);
        assert_eq!(runner.menu().events()[1], MenuEvent::exit());
    }

    #[test]
    fn invalid_json_falls_back_to_defaults() {
        let runner = MenuRunner::from_json(r#"{ "items": [] }"#);
        assert_eq!(runner.menu().scene().len(), 3);

        let runner = MenuRunner::from_json(r#"{ "items": ["Play", "Quit"], "exit_item": 1 }"#);
        assert_eq!(runner.labels_json(), r#"["Play","Quit"]"#);
        assert_eq!(runner.max_models(), 2);
    }

    #[test]
    fn manifest_and_sounds_serialize() {
        let runner = MenuRunner::new(MenuConfig::default());
        assert!(runner.manifest_json().contains("\"labels\":[\"Option 1\""));
        assert!(runner.sounds_json().contains("resources/select.wav"));
    }
}
