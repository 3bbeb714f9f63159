//! Distortion mode selector.
//!
//! The mode is a closed set of three transfer functions. It travels through
//! the parameter system as a stepped index (0, 1, 2); [`DistortionMode`] is
//! the typed form, so an out-of-range index can only exist at the
//! conversion boundary ([`DistortionMode::from_index`], [`FromStr`]).

use core::fmt;
use core::str::FromStr;

/// Waveshaping algorithm applied after the gain stage.
///
/// The discriminants match the host-facing stepped parameter values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DistortionMode {
    /// Asymmetric exponential soft clip, `fuzz` is the exponential rate.
    #[default]
    ExpSoftClipping = 0,
    /// Piecewise quadratic soft knee, `fuzz` sets the knee steepness.
    SoftClipping = 1,
    /// Hard clamp to ±1, `fuzz` lowers the threshold from 1 towards 0.
    HardClipping = 2,
}

impl DistortionMode {
    /// All modes in parameter-index order.
    pub const ALL: [DistortionMode; 3] = [
        DistortionMode::ExpSoftClipping,
        DistortionMode::SoftClipping,
        DistortionMode::HardClipping,
    ];

    /// Number of selectable modes.
    pub const COUNT: usize = Self::ALL.len();

    /// Stepped parameter index of this mode.
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Mode for a stepped parameter index, `None` outside `0..=2`.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(DistortionMode::ExpSoftClipping),
            1 => Some(DistortionMode::SoftClipping),
            2 => Some(DistortionMode::HardClipping),
            _ => None,
        }
    }

    /// Mode for a plain parameter value as automated by a host.
    ///
    /// Rounds to the nearest step and saturates at both ends, which is how
    /// stepped float parameters are quantized.
    #[inline]
    pub fn from_param_value(value: f32) -> Self {
        let max = (Self::COUNT - 1) as f32;
        let step = libm::roundf(value.clamp(0.0, max)) as u8;
        Self::from_index(step).unwrap_or_default()
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            DistortionMode::ExpSoftClipping => "Exp Soft Clip",
            DistortionMode::SoftClipping => "Soft Clip",
            DistortionMode::HardClipping => "Hard Clip",
        }
    }

    /// Machine-friendly identifier, used in preset files and on the command line.
    pub const fn id(self) -> &'static str {
        match self {
            DistortionMode::ExpSoftClipping => "exp-soft-clip",
            DistortionMode::SoftClipping => "soft-clip",
            DistortionMode::HardClipping => "hard-clip",
        }
    }

    /// Display names in index order, for stepped-parameter labels.
    pub const NAMES: [&'static str; 3] = ["Exp Soft Clip", "Soft Clip", "Hard Clip"];
}

impl fmt::Display for DistortionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no known [`DistortionMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseModeError;

impl fmt::Display for ParseModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown distortion mode (expected exp-soft-clip, soft-clip, hard-clip or 0-2)")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseModeError {}

impl FromStr for DistortionMode {
    type Err = ParseModeError;

    /// Accepts the id (`soft-clip`), snake case (`soft_clip`), the display
    /// name (`Soft Clip`), the long variant name (`SoftClipping`), or the
    /// numeric index. Matching ignores ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(index) = s.parse::<u8>() {
            return Self::from_index(index).ok_or(ParseModeError);
        }

        Self::ALL
            .into_iter()
            .find(|mode| {
                let long = match mode {
                    DistortionMode::ExpSoftClipping => "ExpSoftClipping",
                    DistortionMode::SoftClipping => "SoftClipping",
                    DistortionMode::HardClipping => "HardClipping",
                };
                eq_ignoring_separators(s, mode.id())
                    || eq_ignoring_separators(s, mode.name())
                    || s.eq_ignore_ascii_case(long)
            })
            .ok_or(ParseModeError)
    }
}

/// Case-insensitive comparison that treats `-`, `_` and ` ` as the same separator.
fn eq_ignoring_separators(a: &str, b: &str) -> bool {
    let norm = |c: u8| match c {
        b'_' | b' ' => b'-',
        other => other.to_ascii_lowercase(),
    };
    a.len() == b.len() && a.bytes().zip(b.bytes()).all(|(x, y)| norm(x) == norm(y))
}
