//! Rig tuning, key bindings and scene setup with TOML preset support.
//!
//! All tweakable settings are consolidated in [`Options`], which serializes
//! to/from TOML so a rig can be configured from a preset file.

mod camera;
mod keybindings;
mod scene;

use std::path::Path;

pub use camera::RigOptions;
pub use keybindings::KeybindingOptions;
pub use scene::{SceneSetup, SlotSetup, WaypointPath};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::RigError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[rig]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema)]
#[serde(default)]
pub struct Options {
    /// Motion tuning for every rig mode.
    pub rig: RigOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
    /// Initial slot poses, orbit target and waypoint path.
    #[schemars(skip)]
    pub scene: SceneSetup,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from a TOML string. Missing fields use defaults, and a
    /// partial `[keybindings.bindings]` table only overrides the actions it
    /// names.
    ///
    /// # Errors
    ///
    /// Returns [`RigError::OptionsParse`] if the TOML is malformed or a rate
    /// in `[rig]` is not positive.
    pub fn from_toml(content: &str) -> Result<Self, RigError> {
        let mut options: Self = toml::from_str(content)
            .map_err(|e| RigError::OptionsParse(e.to_string()))?;
        options.rig.validate()?;
        options.keybindings.fill_unbound_from_defaults();
        Ok(options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`RigError::Io`] if the file cannot be read, or any error of
    /// [`from_toml`](Self::from_toml).
    pub fn load(path: &Path) -> Result<Self, RigError> {
        let content = std::fs::read_to_string(path).map_err(RigError::Io)?;
        let options = Self::from_toml(&content)?;
        log::info!("loaded rig options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`RigError::Io`] if the file or its directory cannot be
    /// written.
    pub fn save(&self, path: &Path) -> Result<(), RigError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RigError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(RigError::Io)?;
        }
        std::fs::write(path, content).map_err(RigError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::input::RigAction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[rig]
orbit_speed = 90.0
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.rig.orbit_speed, 90.0);
        // Everything else should be default
        assert_eq!(opts.rig.transition_speed, 2.0);
        assert_eq!(opts.rig.zoom_fov, 30.0);
        assert_eq!(opts.scene, SceneSetup::default());
    }

    #[test]
    fn scene_without_path_or_target_parses() {
        let toml_str = r"
[scene]
slots = [
    { pose = { position = [0.0, 1.0, -10.0] }, fovy = 50.0 },
    { fovy = 60.0 },
    {},
    { pose = { position = [0.0, 0.0, 5.0], orientation = [0.0, 0.0, 0.0, 1.0] } },
]
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.scene.orbit_target, None);
        assert_eq!(opts.scene.path, None);
        assert_eq!(opts.scene.slots[0].pose.position, Vec3::new(0.0, 1.0, -10.0));
        assert_eq!(opts.scene.slots[0].fovy, 50.0);
        assert_eq!(opts.scene.slots[2], SlotSetup::default());
    }

    #[test]
    fn loaded_keybindings_are_searchable() {
        let toml_str = r#"
[keybindings.bindings]
zoom = "KeyX"
select_orbital = "Numpad1"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.keybindings.lookup("KeyX"), Some(RigAction::Zoom));
        assert_eq!(
            opts.keybindings.lookup("Numpad1"),
            Some(RigAction::SelectOrbital)
        );
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
        // Actions the table leaves out keep their default keys.
        assert_eq!(
            opts.keybindings.lookup("Digit2"),
            Some(RigAction::SelectMidShot)
        );
        assert_eq!(
            opts.keybindings.lookup("Digit4"),
            Some(RigAction::SelectPathFollower)
        );
        assert_eq!(opts.keybindings.lookup("Digit1"), None);
    }

    #[test]
    fn non_positive_rates_are_rejected() {
        let err = Options::from_toml("[rig]\ntransition_speed = 0.0\n").unwrap_err();
        assert!(matches!(err, RigError::OptionsParse(_)));
        let err = Options::from_toml("[rig]\nzoom_rate = -1.0\n").unwrap_err();
        assert!(matches!(err, RigError::OptionsParse(_)));
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("Digit3"),
            Some(RigAction::SelectFirstPerson)
        );
        assert_eq!(opts.keybindings.lookup("KeyZ"), Some(RigAction::Zoom));
        assert_eq!(opts.keybindings.lookup("Digit5"), None);
    }

    #[test]
    fn rebinding_replaces_old_key() {
        let mut bindings = KeybindingOptions::default();
        bindings.bind(RigAction::Zoom, "ShiftLeft");
        assert_eq!(bindings.lookup("ShiftLeft"), Some(RigAction::Zoom));
        assert_eq!(bindings.lookup("KeyZ"), None);
    }

    #[test]
    fn malformed_toml_reports_parse_error() {
        let err = Options::from_toml("[rig\norbit_speed = ").unwrap_err();
        assert!(matches!(err, RigError::OptionsParse(_)));
    }

    #[test]
    fn save_then_load_and_list_presets() {
        let dir = std::env::temp_dir()
            .join(format!("camrig-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.rig.orbit_speed = 12.5;
        opts.save(&dir.join("slow_orbit.toml")).unwrap();
        std::fs::write(dir.join("notes.txt"), "ignored").unwrap();

        let loaded = Options::load(&dir.join("slow_orbit.toml")).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(Options::list_presets(&dir), vec!["slow_orbit".to_owned()]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value = serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();
        assert!(props.contains_key("rig"));
        assert!(!props.contains_key("keybindings"));
        assert!(!props.contains_key("scene"));

        let rig = &props["rig"]["properties"];
        assert!(rig.get("orbit_speed").is_some());
        assert!(rig.get("znear").is_none());
    }
}
