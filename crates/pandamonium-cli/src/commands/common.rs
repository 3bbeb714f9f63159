//! Shared CLI helpers used across multiple commands.

use clap::Args;
use pandamonium_config::{Preset, find_preset as config_find_preset, get_factory_preset, validate_param};
use pandamonium_core::{DistortionMode, ParamSnapshot};
use std::path::PathBuf;

/// Parameter flags shared by `process` and `presets save`.
///
/// Each flag, when given, replaces the corresponding value of the base
/// parameter set (a preset or the defaults).
#[derive(Args, Debug, Default, Clone)]
pub struct ParamOverrides {
    /// Input gain in dB (0 to 24)
    #[arg(short, long, allow_negative_numbers = true)]
    pub gain: Option<f32>,

    /// Fuzz amount (0 to 30)
    #[arg(short, long, allow_negative_numbers = true)]
    pub fuzz: Option<f32>,

    /// Output volume in dB (0 to 24)
    #[arg(short, long, allow_negative_numbers = true)]
    pub volume: Option<f32>,

    /// Distortion mode (exp-soft-clip, soft-clip, hard-clip or 0-2)
    #[arg(short, long, value_parser = parse_mode)]
    pub mode: Option<DistortionMode>,
}

impl ParamOverrides {
    /// True when no flag was given.
    pub fn is_empty(&self) -> bool {
        self.gain.is_none() && self.fuzz.is_none() && self.volume.is_none() && self.mode.is_none()
    }

    /// Apply the given flags on top of `base`.
    ///
    /// Out-of-range or non-finite values are rejected rather than clamped.
    pub fn apply(&self, base: ParamSnapshot) -> anyhow::Result<ParamSnapshot> {
        let mut params = base;
        if let Some(gain) = self.gain {
            params.gain_db = validate_param("gain", gain)?;
        }
        if let Some(fuzz) = self.fuzz {
            params.fuzz = validate_param("fuzz", fuzz)?;
        }
        if let Some(volume) = self.volume {
            params.volume_db = validate_param("volume", volume)?;
        }
        if let Some(mode) = self.mode {
            params.mode = mode;
        }
        Ok(params)
    }
}

/// Parse a distortion mode for clap's `value_parser`.
pub fn parse_mode(s: &str) -> Result<DistortionMode, String> {
    s.parse::<DistortionMode>().map_err(|_| {
        let ids: Vec<&str> = DistortionMode::ALL.iter().map(|m| m.id()).collect();
        format!("unknown mode '{s}' (expected one of: {})", ids.join(", "))
    })
}

/// Load a preset by name or path.
///
/// Searches in this order:
/// 1. Factory presets (by id or display name)
/// 2. User presets (by name)
/// 3. File path (if it's a path to a .toml file)
pub fn load_preset(name: &str) -> anyhow::Result<Preset> {
    if let Some(preset) = get_factory_preset(name) {
        return Ok(preset);
    }

    if let Some(path) = config_find_preset(name) {
        return Ok(Preset::load(&path)?);
    }

    let path = PathBuf::from(name);
    if path.exists() {
        return Ok(Preset::load(&path)?);
    }

    anyhow::bail!(
        "Preset '{}' not found. Use 'pandamonium presets list' to see available presets.",
        name
    )
}

/// Root-mean-square level over all samples.
pub fn rms<'a>(channels: impl IntoIterator<Item = &'a [f32]>) -> f32 {
    let (sum, count) = channels
        .into_iter()
        .flatten()
        .fold((0.0f64, 0usize), |(sum, count), &s| {
            (sum + f64::from(s) * f64::from(s), count + 1)
        });
    if count == 0 {
        0.0
    } else {
        (sum / count as f64).sqrt() as f32
    }
}

/// Largest absolute sample value.
pub fn peak<'a>(channels: impl IntoIterator<Item = &'a [f32]>) -> f32 {
    channels
        .into_iter()
        .flatten()
        .fold(0.0f32, |acc, &s| acc.max(s.abs()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mode_accepts_ids_and_indices() {
        assert_eq!(parse_mode("hard-clip"), Ok(DistortionMode::HardClipping));
        assert_eq!(parse_mode("1"), Ok(DistortionMode::SoftClipping));
        assert_eq!(parse_mode("Exp Soft Clip"), Ok(DistortionMode::ExpSoftClipping));
    }

    #[test]
    fn test_parse_mode_error_lists_choices() {
        let err = parse_mode("wavefold").unwrap_err();
        assert!(err.contains("wavefold"));
        assert!(err.contains("soft-clip"));
    }

    #[test]
    fn test_overrides_replace_only_given_values() {
        let overrides = ParamOverrides {
            fuzz: Some(3.0),
            mode: Some(DistortionMode::HardClipping),
            ..Default::default()
        };
        let params = overrides.apply(ParamSnapshot::default()).unwrap();
        assert_eq!(params.gain_db, ParamSnapshot::default().gain_db);
        assert_eq!(params.fuzz, 3.0);
        assert_eq!(params.mode, DistortionMode::HardClipping);
    }

    #[test]
    fn test_overrides_reject_out_of_range() {
        let overrides = ParamOverrides {
            volume: Some(30.0),
            ..Default::default()
        };
        assert!(overrides.apply(ParamSnapshot::default()).is_err());
        assert!(ParamOverrides::default().is_empty());
    }

    #[test]
    fn test_load_factory_preset() {
        let preset = load_preset("crunch").unwrap();
        assert_eq!(preset.name, "Crunch");
        assert!(load_preset("definitely-not-a-preset-name").is_err());
    }

    #[test]
    fn test_levels() {
        let left = [1.0f32, -1.0];
        let right = [0.0f32, 0.0];
        let channels = [&left[..], &right[..]];
        assert!((rms(channels) - 0.5f32.sqrt()).abs() < 1e-6);
        assert_eq!(peak(channels), 1.0);
        assert_eq!(rms(std::iter::empty()), 0.0);
    }
}
