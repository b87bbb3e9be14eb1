use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::RigAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping rig actions to key codes.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format
/// (`"Digit1"`, `"KeyZ"`, ...).
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `Zoom` → `"KeyZ"`).
    pub bindings: HashMap<RigAction, String>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: HashMap<String, RigAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (RigAction::SelectOrbital, "Digit1".into()),
            (RigAction::SelectMidShot, "Digit2".into()),
            (RigAction::SelectFirstPerson, "Digit3".into()),
            (RigAction::SelectPathFollower, "Digit4".into()),
            (RigAction::Zoom, "KeyZ".into()),
        ]);

        let mut opts = Self {
            bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (key string → action).
    ///
    /// Must be called after deserializing or editing `bindings`.
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, key) in &self.bindings {
            if let Some(previous) = self.key_to_action.insert(key.clone(), *action) {
                log::warn!("key {key} bound to both {previous:?} and {action:?}");
            }
        }
    }

    /// Give every action missing from `bindings` its default key, then
    /// rebuild the reverse map.
    pub fn fill_unbound_from_defaults(&mut self) {
        for (action, key) in Self::default().bindings {
            let _ = self.bindings.entry(action).or_insert(key);
        }
        self.rebuild_reverse_map();
    }

    /// Bind `action` to `key`, replacing its previous key.
    pub fn bind(&mut self, action: RigAction, key: impl Into<String>) {
        let _ = self.bindings.insert(action, key.into());
        self.rebuild_reverse_map();
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<RigAction> {
        self.key_to_action.get(key).copied()
    }
}
