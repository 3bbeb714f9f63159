//! Parameter and preset validation.
//!
//! Ranges come from the core crate's [`PARAM_DESCRIPTORS`], so a preset is
//! valid exactly when every value could have been set by a host.
//!
//! # Example
//!
//! ```rust
//! use pandamonium_config::{Preset, validate_preset, validate_param};
//!
//! assert!(validate_param("fuzz", 12.0).is_ok());
//! assert!(validate_param("gain", 40.0).is_err());
//!
//! let mut preset = Preset::new("Too Hot");
//! preset.volume_db = 30.0;
//! assert!(validate_preset(&preset).is_err());
//! ```

use pandamonium_core::{PARAM_DESCRIPTORS, PARAM_FUZZ, PARAM_GAIN, PARAM_VOLUME, ParamDescriptor};
use thiserror::Error;

use crate::Preset;

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// Unknown parameter name.
    #[error("unknown parameter: {0}")]
    UnknownParameter(String),

    /// Parameter value out of range.
    #[error("parameter '{param}' value {value} out of range [{min}, {max}]")]
    OutOfRange {
        /// Name of the parameter.
        param: String,
        /// The value that was out of range.
        value: f32,
        /// Minimum allowed value.
        min: f32,
        /// Maximum allowed value.
        max: f32,
    },

    /// Value is NaN or infinite.
    #[error("parameter '{param}' has non-finite value {value}")]
    InvalidValue {
        /// Name of the parameter.
        param: String,
        /// The offending value.
        value: f32,
    },

    /// Multiple validation errors.
    #[error("multiple validation errors: {}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
    Multiple(Vec<ValidationError>),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Look up a continuous parameter descriptor by string id, name or short name.
///
/// The mode is not a continuous value and is not returned here.
pub fn find_descriptor(name: &str) -> Option<&'static ParamDescriptor> {
    [PARAM_GAIN, PARAM_FUZZ, PARAM_VOLUME]
        .into_iter()
        .map(|index| &PARAM_DESCRIPTORS[index])
        .find(|desc| {
            desc.string_id.eq_ignore_ascii_case(name)
                || desc.name.eq_ignore_ascii_case(name)
                || desc.short_name.eq_ignore_ascii_case(name)
        })
}

/// Validate a single continuous parameter value.
///
/// Returns the value unchanged when it is finite and within range.
pub fn validate_param(name: &str, value: f32) -> ValidationResult<f32> {
    let desc =
        find_descriptor(name).ok_or_else(|| ValidationError::UnknownParameter(name.to_string()))?;
    check_value(desc, value)
}

fn check_value(desc: &ParamDescriptor, value: f32) -> ValidationResult<f32> {
    if !value.is_finite() {
        return Err(ValidationError::InvalidValue {
            param: desc.string_id.to_string(),
            value,
        });
    }
    if value < desc.min || value > desc.max {
        return Err(ValidationError::OutOfRange {
            param: desc.string_id.to_string(),
            value,
            min: desc.min,
            max: desc.max,
        });
    }
    Ok(value)
}

/// Validate every value in a preset.
///
/// All problems are collected; more than one is reported as
/// [`ValidationError::Multiple`].
pub fn validate_preset(preset: &Preset) -> ValidationResult<()> {
    let mut errors: Vec<ValidationError> = [
        (PARAM_GAIN, preset.gain_db),
        (PARAM_FUZZ, preset.fuzz),
        (PARAM_VOLUME, preset.volume_db),
    ]
    .into_iter()
    .filter_map(|(index, value)| check_value(&PARAM_DESCRIPTORS[index], value).err())
    .collect();

    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => Err(ValidationError::Multiple(errors)),
    }
}
