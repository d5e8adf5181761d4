//! Editing settings for wikilink.
//!
//! Settings resolve in layers, later layers winning key by key:
//!
//! 1. the defaults compiled in from `defaults/wikilink.default.toml`
//! 2. settings files, in the order they are added
//! 3. rule toggles set for the current session
//!
//! The result deserializes straight into the engine's own option types, so there is no
//! parallel settings schema to keep in sync with [`wikilink::PairingOptions`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat};
use serde::Deserialize;
use std::path::Path;
use wikilink::PairingOptions;

const DEFAULT_TOML: &str = include_str!("../defaults/wikilink.default.toml");

/// Every setting, as resolved from all layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub pairing: PairingOptions,
}

/// A pairing rule that can be switched per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairingRule {
    AutoClose,
    AutoRemove,
}

impl PairingRule {
    fn key(self) -> &'static str {
        match self {
            PairingRule::AutoClose => "pairing.auto_close",
            PairingRule::AutoRemove => "pairing.auto_remove",
        }
    }
}

/// Builds [`Settings`] from the compiled-in defaults plus whatever the application layers on.
#[derive(Debug, Clone)]
pub struct Loader {
    layers: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            layers: Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml)),
        }
    }

    /// Add a TOML settings file. A missing `required` file fails [`Loader::settings`]; a
    /// missing optional one is skipped.
    pub fn file(mut self, path: impl AsRef<Path>, required: bool) -> Self {
        let layer = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(required);
        self.layers = self.layers.add_source(layer);
        self
    }

    /// Switch one pairing rule on or off, above every file layer.
    pub fn toggle(mut self, rule: PairingRule, enabled: bool) -> Result<Self, ConfigError> {
        self.layers = self.layers.set_override(rule.key(), enabled)?;
        Ok(self)
    }

    pub fn settings(self) -> Result<Settings, ConfigError> {
        self.layers.build()?.try_deserialize()
    }

    /// Just the options [`wikilink::apply_edit`] needs.
    pub fn pairing(self) -> Result<PairingOptions, ConfigError> {
        self.settings().map(|settings| settings.pairing)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use wikilink::{apply_edit, EditEvent};

    fn settings_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file to be created");
        file.write_all(contents.as_bytes())
            .expect("settings to be written");
        file
    }

    #[test]
    fn compiled_defaults_match_engine_defaults() {
        let pairing = Loader::new().pairing().expect("defaults to deserialize");
        assert_eq!(pairing, PairingOptions::default());
    }

    #[test]
    fn toggle_overrides_one_rule() {
        let pairing = Loader::new()
            .toggle(PairingRule::AutoClose, false)
            .expect("toggle to apply")
            .pairing()
            .expect("settings to build");
        assert!(!pairing.auto_close);
        assert!(pairing.auto_remove);
    }

    #[test]
    fn file_layer_overrides_defaults_key_by_key() {
        let file = settings_file("[pairing]\nauto_remove = false\n");
        let settings = Loader::new()
            .file(file.path(), true)
            .settings()
            .expect("settings to build");
        assert!(settings.pairing.auto_close);
        assert!(!settings.pairing.auto_remove);
    }

    #[test]
    fn toggle_wins_over_file_layer() {
        let file = settings_file("[pairing]\nauto_close = false\n");
        let pairing = Loader::new()
            .file(file.path(), true)
            .toggle(PairingRule::AutoClose, true)
            .expect("toggle to apply")
            .pairing()
            .expect("settings to build");
        assert!(pairing.auto_close);
    }

    #[test]
    fn missing_optional_file_is_skipped() {
        let pairing = Loader::new()
            .file("does/not/exist.toml", false)
            .pairing()
            .expect("settings to build");
        assert_eq!(pairing, PairingOptions::default());
    }

    #[test]
    fn missing_required_file_is_an_error() {
        assert!(Loader::new()
            .file("does/not/exist.toml", true)
            .settings()
            .is_err());
    }

    #[test]
    fn malformed_value_is_an_error() {
        let file = settings_file("[pairing]\nauto_close = \"sometimes\"\n");
        assert!(Loader::new().file(file.path(), true).pairing().is_err());
    }

    #[test]
    fn disabled_auto_close_flows_into_edits() {
        let options = Loader::new()
            .toggle(PairingRule::AutoClose, false)
            .expect("toggle to apply")
            .pairing()
            .expect("settings to build");
        assert_eq!(apply_edit(&EditEvent::new("", "[", 1), &options), "[");
        assert_eq!(apply_edit(&EditEvent::new("[]", "]", 0), &options), "");
    }
}
