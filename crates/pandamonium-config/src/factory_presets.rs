//! Factory presets bundled with the library.
//!
//! These are always available without external files and cover each
//! distortion mode at a few typical settings.

use crate::Preset;

/// Array of factory preset names for external access.
pub static FACTORY_PRESET_NAMES: &[&str] = &[
    "init",
    "warm",
    "crunch",
    "fuzz_wall",
    "brickwall",
    "clean_boost",
];

/// TOML content for factory presets.
static FACTORY_PRESETS_TOML: &[(&str, &str)] = &[
    ("init", INIT_PRESET),
    ("warm", WARM_PRESET),
    ("crunch", CRUNCH_PRESET),
    ("fuzz_wall", FUZZ_WALL_PRESET),
    ("brickwall", BRICKWALL_PRESET),
    ("clean_boost", CLEAN_BOOST_PRESET),
];

const INIT_PRESET: &str = r#"
name = "Init"
description = "Default settings"
gain_db = 1.0
fuzz = 15.0
volume_db = 1.0
mode = "exp-soft-clip"
"#;

const WARM_PRESET: &str = r#"
name = "Warm"
description = "Gentle exponential saturation"
gain_db = 6.0
fuzz = 4.0
volume_db = 2.0
mode = "exp-soft-clip"
"#;

const CRUNCH_PRESET: &str = r#"
name = "Crunch"
description = "Mid-gain quadratic knee"
gain_db = 12.0
fuzz = 12.0
volume_db = 0.0
mode = "soft-clip"
"#;

const FUZZ_WALL_PRESET: &str = r#"
name = "Fuzz Wall"
description = "Maximum gain into the steepest exponential curve"
gain_db = 24.0
fuzz = 30.0
volume_db = 0.0
mode = "exp-soft-clip"
"#;

// Threshold 0.2 after +18 dB: nearly a square wave.
const BRICKWALL_PRESET: &str = r#"
name = "Brickwall"
description = "Low-threshold hard clipping"
gain_db = 18.0
fuzz = 24.0
volume_db = 0.0
mode = "hard-clip"
"#;

// Zero fuzz puts the hard-clip threshold at full scale.
const CLEAN_BOOST_PRESET: &str = r#"
name = "Clean Boost"
description = "Volume boost, clipping only above full scale"
gain_db = 0.0
fuzz = 0.0
volume_db = 6.0
mode = "hard-clip"
"#;

/// Get all factory presets.
pub fn factory_presets() -> Vec<Preset> {
    FACTORY_PRESETS_TOML
        .iter()
        .filter_map(|(_, toml)| Preset::from_toml(toml).ok())
        .collect()
}

/// Get a factory preset by internal or display name (case-insensitive).
///
/// # Example
///
/// ```rust
/// use pandamonium_config::get_factory_preset;
///
/// let preset = get_factory_preset("Fuzz Wall").unwrap();
/// assert_eq!(preset.fuzz, 30.0);
/// ```
pub fn get_factory_preset(name: &str) -> Option<Preset> {
    if let Some((_, toml)) = FACTORY_PRESETS_TOML
        .iter()
        .find(|(id, _)| id.eq_ignore_ascii_case(name))
    {
        return Preset::from_toml(toml).ok();
    }

    factory_presets()
        .into_iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(name))
}

/// Get the names of all factory presets.
pub fn factory_preset_names() -> Vec<&'static str> {
    FACTORY_PRESETS_TOML.iter().map(|(name, _)| *name).collect()
}

/// Check if a preset name is a factory preset.
///
/// # Example
///
/// ```rust
/// use pandamonium_config::is_factory_preset;
///
/// assert!(is_factory_preset("crunch"));
/// assert!(is_factory_preset("Clean Boost"));
/// assert!(!is_factory_preset("my_custom_preset"));
/// ```
pub fn is_factory_preset(name: &str) -> bool {
    get_factory_preset(name).is_some()
}
