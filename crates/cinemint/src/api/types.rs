use bytemuck::{Pod, Zeroable};

/// A sound event emitted by the menu logic.
/// The numeric value indexes the host's loaded sound bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct SoundEvent(pub u32);

impl SoundEvent {
    /// Played once when the intro starts.
    pub const INTRO: SoundEvent = SoundEvent(0);
    /// Played when the selection moves.
    pub const NAVIGATE: SoundEvent = SoundEvent(1);
    /// Played when the selection is confirmed.
    pub const SELECT: SoundEvent = SoundEvent(2);
}

/// A menu event communicated to the host through the frame buffer.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct MenuEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl MenuEvent {
    pub const FLOATS: usize = 4;

    /// `a` = slot that was confirmed.
    pub const KIND_CONFIRMED: f32 = 1.0;
    /// The exit item was confirmed; the host should stop the loop.
    pub const KIND_EXIT: f32 = 2.0;
    /// The intro finished; `a` = intro duration in seconds.
    pub const KIND_INTRO_DONE: f32 = 3.0;

    pub fn confirmed(slot: usize) -> Self {
        Self { kind: Self::KIND_CONFIRMED, a: slot as f32, ..Default::default() }
    }

    pub fn exit() -> Self {
        Self { kind: Self::KIND_EXIT, ..Default::default() }
    }

    pub fn intro_done(duration: f32) -> Self {
        Self { kind: Self::KIND_INTRO_DONE, a: duration, ..Default::default() }
    }
}
