//! Parameter introspection for hosts, presets and the command line.
//!
//! [`ParameterInfo`] exposes an effect's parameters by index, each described
//! by a [`ParamDescriptor`] carrying display metadata, range, default and a
//! stable identity. This is what a plugin wrapper or generic UI needs to
//! list, automate and restore parameters without knowing the effect type.
//!
//! Identity comes in two forms:
//!
//! - [`ParamId`] - numeric id for host automation lanes; never reused.
//! - `string_id` - textual id used in preset files and on the command line.
//!
//! Stepped parameters (the distortion mode) carry `labels`, so values format
//! and parse as names instead of numbers.
//!
//! # Example
//!
//! ```rust
//! use pandamonium_core::{Pandamonium, ParameterInfo};
//!
//! let effect = Pandamonium::default();
//! let index = effect.find_param_by_name("fuzz").unwrap();
//! let desc = effect.param_info(index).unwrap();
//! assert_eq!(desc.max, 30.0);
//! assert_eq!(desc.format_value(15.0), "15.0");
//! ```

#[cfg(not(feature = "std"))]
use alloc::{format, string::String};

use crate::mode::DistortionMode;
use crate::params::{
    FUZZ_DEFAULT, FUZZ_MAX, FUZZ_MIN, GAIN_DEFAULT_DB, GAIN_MAX_DB, GAIN_MIN_DB,
    VOLUME_DEFAULT_DB, VOLUME_MAX_DB, VOLUME_MIN_DB,
};

/// Stable parameter identifier that survives reordering.
///
/// Once assigned, a `ParamId` must never change for a given parameter;
/// hosts store it with automation data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParamId(pub u32);

/// Parameter capability flags for host communication.
///
/// # Example
///
/// ```rust
/// use pandamonium_core::ParamFlags;
///
/// let flags = ParamFlags::AUTOMATABLE.union(ParamFlags::STEPPED);
/// assert!(flags.contains(ParamFlags::STEPPED));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamFlags(u8);

impl ParamFlags {
    /// No flags set.
    pub const NONE: Self = Self(0);
    /// Host can automate this parameter.
    pub const AUTOMATABLE: Self = Self(1 << 0);
    /// Parameter takes integer steps only.
    pub const STEPPED: Self = Self(1 << 1);

    /// Returns `true` if all bits in `other` are set in `self`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns the union of two flag sets.
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl Default for ParamFlags {
    fn default() -> Self {
        Self::AUTOMATABLE
    }
}

/// Unit type for parameter display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamUnit {
    /// Decibels, for gain and volume.
    Decibels,
    /// Dimensionless amount, for fuzz and stepped selectors.
    None,
}

impl ParamUnit {
    /// Returns the unit suffix string for display.
    pub const fn suffix(&self) -> &'static str {
        match self {
            ParamUnit::Decibels => " dB",
            ParamUnit::None => "",
        }
    }
}

/// Metadata for a single parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDescriptor {
    /// Full name for display (e.g., "Gain").
    pub name: &'static str,
    /// Short name for narrow displays, at most 8 characters.
    pub short_name: &'static str,
    /// Display unit.
    pub unit: ParamUnit,
    /// Minimum plain value.
    pub min: f32,
    /// Maximum plain value.
    pub max: f32,
    /// Value on construction.
    pub default: f32,
    /// Recommended increment for encoders and keyboard nudges.
    pub step: f32,
    /// Numeric id for host automation.
    pub id: ParamId,
    /// Textual id for preset files and the command line.
    pub string_id: &'static str,
    /// Host capability flags.
    pub flags: ParamFlags,
    /// Value names for stepped parameters, indexed from `min`. Empty for continuous ones.
    pub labels: &'static [&'static str],
}

impl ParamDescriptor {
    /// Continuous decibel parameter.
    pub const fn gain_db(
        name: &'static str,
        short_name: &'static str,
        min: f32,
        max: f32,
        default: f32,
    ) -> Self {
        Self {
            name,
            short_name,
            unit: ParamUnit::Decibels,
            min,
            max,
            default,
            step: 0.5,
            id: ParamId(0),
            string_id: "",
            flags: ParamFlags::AUTOMATABLE,
            labels: &[],
        }
    }

    /// Continuous dimensionless parameter.
    pub const fn amount(
        name: &'static str,
        short_name: &'static str,
        min: f32,
        max: f32,
        default: f32,
    ) -> Self {
        Self {
            name,
            short_name,
            unit: ParamUnit::None,
            min,
            max,
            default,
            step: 0.5,
            id: ParamId(0),
            string_id: "",
            flags: ParamFlags::AUTOMATABLE,
            labels: &[],
        }
    }

    /// Stepped selector over `labels`, ranging `0..labels.len() - 1`.
    pub const fn stepped(
        name: &'static str,
        short_name: &'static str,
        labels: &'static [&'static str],
        default: usize,
    ) -> Self {
        Self {
            name,
            short_name,
            unit: ParamUnit::None,
            min: 0.0,
            max: labels.len().saturating_sub(1) as f32,
            default: default as f32,
            step: 1.0,
            id: ParamId(0),
            string_id: "",
            flags: ParamFlags::AUTOMATABLE.union(ParamFlags::STEPPED),
            labels,
        }
    }

    /// Sets the stable parameter ID and string ID.
    pub const fn with_id(mut self, id: ParamId, string_id: &'static str) -> Self {
        self.id = id;
        self.string_id = string_id;
        self
    }

    /// Clamps a value to this parameter's range; NaN maps to the default.
    ///
    /// ```rust
    /// use pandamonium_core::ParamDescriptor;
    ///
    /// let desc = ParamDescriptor::gain_db("Gain", "Gain", 0.0, 24.0, 1.0);
    /// assert_eq!(desc.clamp(-3.0), 0.0);
    /// assert_eq!(desc.clamp(30.0), 24.0);
    /// assert_eq!(desc.clamp(f32::NAN), 1.0);
    /// ```
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            self.default
        } else if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    /// Converts a plain value to the normalized 0.0–1.0 range.
    #[inline]
    pub fn normalize(&self, value: f32) -> f32 {
        let range = self.max - self.min;
        if range == 0.0 {
            return 0.0;
        }
        (value - self.min) / range
    }

    /// Converts a normalized 0.0–1.0 value back to the plain range.
    ///
    /// Stepped parameters snap to the nearest step.
    #[inline]
    pub fn denormalize(&self, normalized: f32) -> f32 {
        let plain = self.min + normalized * (self.max - self.min);
        if self.flags.contains(ParamFlags::STEPPED) {
            libm::roundf(plain)
        } else {
            plain
        }
    }

    /// Formats a plain value for display.
    ///
    /// Stepped parameters with labels show the label, others one decimal
    /// place plus the unit suffix.
    pub fn format_value(&self, value: f32) -> String {
        if let Some(label) = self.label_for(value) {
            return String::from(label);
        }
        format!("{:.1}{}", value, self.unit.suffix())
    }

    /// Parses display text back to a plain value, clamped to range.
    ///
    /// Accepts labels (case-insensitive) for stepped parameters, and numbers
    /// with or without the unit suffix. Returns `None` for anything else.
    pub fn parse_value(&self, text: &str) -> Option<f32> {
        let text = text.trim();

        if let Some(index) = self
            .labels
            .iter()
            .position(|label| label.eq_ignore_ascii_case(text))
        {
            return Some(self.min + index as f32);
        }

        let suffix = self.unit.suffix().trim();
        let number = if suffix.is_empty() {
            text
        } else {
            text.strip_suffix(suffix).unwrap_or(text).trim_end()
        };

        number
            .parse::<f32>()
            .ok()
            .filter(|v| v.is_finite())
            .map(|v| self.clamp(v))
    }

    fn label_for(&self, value: f32) -> Option<&'static str> {
        if self.labels.is_empty() {
            return None;
        }
        let index = libm::roundf(self.clamp(value) - self.min) as usize;
        self.labels.get(index).copied()
    }
}

/// Trait for effects that expose introspectable parameters.
///
/// Parameters are addressed by a zero-based index that is stable for the
/// lifetime of the type.
pub trait ParameterInfo {
    /// Number of parameters; valid indices are `0..param_count()`.
    fn param_count(&self) -> usize;

    /// Descriptor at `index`, `None` when out of range.
    fn param_info(&self, index: usize) -> Option<ParamDescriptor>;

    /// Current plain value at `index`, `0.0` when out of range.
    fn get_param(&self, index: usize) -> f32;

    /// Set the plain value at `index`, clamped to the descriptor's range.
    /// Out-of-range indices are ignored.
    fn set_param(&mut self, index: usize, value: f32);

    /// Find a parameter index by name, short name, or string id (case-insensitive).
    fn find_param_by_name(&self, name: &str) -> Option<usize> {
        (0..self.param_count()).find(|&i| {
            self.param_info(i).is_some_and(|desc| {
                desc.name.eq_ignore_ascii_case(name)
                    || desc.short_name.eq_ignore_ascii_case(name)
                    || desc.string_id.eq_ignore_ascii_case(name)
            })
        })
    }

    /// Stable [`ParamId`] of the parameter at `index`.
    fn param_id(&self, index: usize) -> Option<ParamId> {
        self.param_info(index).map(|d| d.id)
    }

    /// Finds a parameter index by its stable [`ParamId`].
    ///
    /// Scans all parameters, so keep it off the audio path.
    fn param_index_by_id(&self, id: ParamId) -> Option<usize> {
        (0..self.param_count()).find(|&i| self.param_info(i).is_some_and(|d| d.id == id))
    }
}

/// Index of the gain parameter.
pub const PARAM_GAIN: usize = 0;
/// Index of the fuzz parameter.
pub const PARAM_FUZZ: usize = 1;
/// Index of the volume parameter.
pub const PARAM_VOLUME: usize = 2;
/// Index of the mode parameter.
pub const PARAM_MODE: usize = 3;

/// Descriptors of the four effect parameters, in index order.
///
/// Numeric ids start at 100; string ids are the names hosts already
/// store automation under.
pub const PARAM_DESCRIPTORS: [ParamDescriptor; 4] = [
    ParamDescriptor::gain_db("Gain", "Gain", GAIN_MIN_DB, GAIN_MAX_DB, GAIN_DEFAULT_DB)
        .with_id(ParamId(100), "gain"),
    ParamDescriptor::amount("Fuzz", "Fuzz", FUZZ_MIN, FUZZ_MAX, FUZZ_DEFAULT)
        .with_id(ParamId(101), "fuzz"),
    ParamDescriptor::gain_db("Volume", "Vol", VOLUME_MIN_DB, VOLUME_MAX_DB, VOLUME_DEFAULT_DB)
        .with_id(ParamId(102), "volume"),
    ParamDescriptor::stepped("Mode", "Mode", &DistortionMode::NAMES, 0)
        .with_id(ParamId(103), "mode"),
];
