use cubefield_events::Key;
use std::collections::HashSet;

/// The set of currently held keys, fed by key-pressed/released events.
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: HashSet<Key>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }
}

/// Resolve one movement axis from an opposing key pair.
///
/// Both held → 0; only `negative` held → +1; only `positive` held → -1;
/// neither → 0.
pub fn axis_intent(keys: &KeyState, negative: Key, positive: Key) -> i8 {
    match (keys.is_held(negative), keys.is_held(positive)) {
        (true, true) => 0,
        (true, false) => 1,
        (false, true) => -1,
        (false, false) => 0,
    }
}

/// Key pairs for the three movement axes plus the sprint modifier.
#[derive(Debug, Clone, Copy)]
pub struct Bindings {
    pub left: Key,
    pub right: Key,
    pub backward: Key,
    pub forward: Key,
    pub descend: Key,
    pub ascend: Key,
    pub sprint: Key,
}

impl Default for Bindings {
    fn default() -> Self {
        Self {
            left: Key::A,
            right: Key::D,
            backward: Key::S,
            forward: Key::W,
            descend: Key::ShiftLeft,
            ascend: Key::Space,
            sprint: Key::ControlLeft,
        }
    }
}

/// Movement intent for one frame, each axis in {-1, 0, +1}.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveIntent {
    /// Left-right axis.
    pub lr: i8,
    /// Forward-back axis.
    pub fb: i8,
    /// Up-down axis; independent of look direction.
    pub ud: i8,
}

impl MoveIntent {
    /// Derive the intent from the live key state.
    pub fn from_keys(keys: &KeyState, bindings: &Bindings) -> Self {
        Self {
            lr: axis_intent(keys, bindings.left, bindings.right),
            fb: axis_intent(keys, bindings.backward, bindings.forward),
            ud: axis_intent(keys, bindings.descend, bindings.ascend),
        }
    }
}
