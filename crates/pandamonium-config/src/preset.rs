//! Preset file format and operations.

use pandamonium_core::{
    DistortionMode, FUZZ_DEFAULT, GAIN_DEFAULT_DB, ParamSnapshot, VOLUME_DEFAULT_DB,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// A named set of effect parameter values.
///
/// Presets are stored as TOML files. Every parameter field is optional in
/// the file and falls back to the effect default when missing.
///
/// # TOML Format
///
/// ```toml
/// name = "Crunch"
/// description = "Mid-gain soft knee"
/// gain_db = 12.0
/// fuzz = 12.0
/// volume_db = 0.0
/// mode = "soft-clip"
/// ```
///
/// `mode` accepts any spelling [`DistortionMode`] parses (`"soft-clip"`,
/// `"Soft Clip"`, `"1"`) and is always written back in the kebab-case form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Preset {
    /// Name of the preset.
    pub name: String,

    /// Optional description of the preset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Input gain in dB.
    #[serde(default = "default_gain_db")]
    pub gain_db: f32,

    /// Fuzz amount.
    #[serde(default = "default_fuzz")]
    pub fuzz: f32,

    /// Output volume in dB.
    #[serde(default = "default_volume_db")]
    pub volume_db: f32,

    /// Distortion mode.
    #[serde(default, with = "mode_id")]
    pub mode: DistortionMode,
}

fn default_gain_db() -> f32 {
    GAIN_DEFAULT_DB
}

fn default_fuzz() -> f32 {
    FUZZ_DEFAULT
}

fn default_volume_db() -> f32 {
    VOLUME_DEFAULT_DB
}

/// Serde adapter storing [`DistortionMode`] as its string id.
mod mode_id {
    use pandamonium_core::DistortionMode;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        mode: &DistortionMode,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(mode.id())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DistortionMode, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

impl Preset {
    /// Create a preset holding the default parameter values.
    pub fn new(name: impl Into<String>) -> Self {
        Self::from_snapshot(name, &ParamSnapshot::default())
    }

    /// Create a preset from a parameter snapshot.
    pub fn from_snapshot(name: impl Into<String>, params: &ParamSnapshot) -> Self {
        Self {
            name: name.into(),
            description: None,
            gain_db: params.gain_db,
            fuzz: params.fuzz,
            volume_db: params.volume_db,
            mode: params.mode,
        }
    }

    /// Create a preset with a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Parameter values of this preset, clamped to range.
    pub fn to_snapshot(&self) -> ParamSnapshot {
        ParamSnapshot::new(self.gain_db, self.fuzz, self.volume_db, self.mode).clamped()
    }

    /// Load a preset from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let preset: Preset = toml::from_str(&content)?;
        Ok(preset)
    }

    /// Load a preset from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the preset to a TOML file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Convert the preset to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self::new("Untitled")
    }
}
