use serde::{Deserialize, Serialize};

/// What the menu can be asked to do in a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuAction {
    /// Move the selection one slot to the left (wraps).
    Left,
    /// Move the selection one slot to the right (wraps).
    Right,
    /// Activate the selected item.
    Confirm,
}

/// Input event types the menu understands.
/// Key events are edge-triggered: the host sends one `KeyDown` per physical
/// press and drops auto-repeat.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A key went down this frame (DOM `keyCode` numbering).
    KeyDown { key_code: u32 },
    /// An already-mapped action (gamepad, touch buttons, tests).
    Action(MenuAction),
}

/// Key code → action bindings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Keymap {
    pub left: Vec<u32>,
    pub right: Vec<u32>,
    pub confirm: Vec<u32>,
}

impl Keymap {
    pub const ARROW_LEFT: u32 = 37;
    pub const ARROW_RIGHT: u32 = 39;
    pub const ENTER: u32 = 13;
    pub const SPACE: u32 = 32;
    pub const KEY_A: u32 = 65;
    pub const KEY_D: u32 = 68;

    /// Resolve a key code to its bound action, if any.
    pub fn action_for(&self, key_code: u32) -> Option<MenuAction> {
        if self.left.contains(&key_code) {
            Some(MenuAction::Left)
        } else if self.right.contains(&key_code) {
            Some(MenuAction::Right)
        } else if self.confirm.contains(&key_code) {
            Some(MenuAction::Confirm)
        } else {
            None
        }
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self {
            left: vec![Self::ARROW_LEFT, Self::KEY_A],
            right: vec![Self::ARROW_RIGHT, Self::KEY_D],
            confirm: vec![Self::ENTER, Self::SPACE],
        }
    }
}

/// A queue of input events.
/// The host pushes events as they arrive; the runner drains them after each frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(16),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// Pending events translated to actions, in arrival order. Unbound keys are skipped.
    pub fn actions<'a>(&'a self, keymap: &'a Keymap) -> impl Iterator<Item = MenuAction> + 'a {
        self.events.iter().filter_map(move |event| match *event {
            InputEvent::KeyDown { key_code } => keymap.action_for(key_code),
            InputEvent::Action(action) => Some(action),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
