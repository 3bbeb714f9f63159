//! Preset and configuration management for the pandamonium effect.
//!
//! # Features
//!
//! - **Presets**: Load and save parameter sets as TOML files
//! - **Validation**: Check values against the effect's parameter ranges
//! - **Paths**: Platform-specific preset and config directories
//! - **Factory Presets**: Built-in presets, one or more per distortion mode
//!
//! # Example
//!
//! ```rust,no_run
//! use pandamonium_config::{Preset, user_presets_dir, validate_preset};
//! use pandamonium_core::{DistortionMode, ParamSnapshot};
//!
//! let preset = Preset::from_snapshot(
//!     "Square",
//!     &ParamSnapshot::new(12.0, 28.0, 0.0, DistortionMode::HardClipping),
//! )
//! .with_description("Almost a square wave");
//! validate_preset(&preset).unwrap();
//!
//! let path = user_presets_dir().join("square.toml");
//! preset.save(&path).unwrap();
//!
//! let loaded = Preset::load(&path).unwrap();
//! assert_eq!(loaded, preset);
//! ```

mod error;
mod preset;

/// Platform-specific paths for presets and configuration.
pub mod paths;

/// Parameter and preset validation.
pub mod validation;

/// Factory presets bundled with the library.
pub mod factory_presets;

pub use error::ConfigError;
pub use factory_presets::{
    FACTORY_PRESET_NAMES, factory_preset_names, factory_presets, get_factory_preset,
    is_factory_preset,
};
pub use paths::{
    ensure_user_presets_dir, find_preset, list_user_presets, preset_name_from_path,
    user_config_dir, user_preset_path, user_presets_dir,
};
pub use preset::Preset;
pub use validation::{ValidationError, ValidationResult, validate_param, validate_preset};
