//! Effect trait and the pandamonium effect itself.
//!
//! The [`Effect`] trait is the single-channel processing interface shared by
//! the offline engine and any plugin wrapper. [`Pandamonium`] implements it
//! on top of [`process_sample`](crate::process_sample), owning its own
//! parameter values and exposing them through [`ParameterInfo`].
//!
//! ## Design Decisions
//!
//! - **Mono processing**: a single `f32` in and out. Multi-channel buffers
//!   go through [`process_block`](crate::process_block), which applies the
//!   same transform to every channel.
//!
//! - **Object-safe**: `dyn Effect` works for runtime selection.
//!
//! - **No allocations**: every method may be called from the audio thread,
//!   except [`ParameterInfo::set_param`] which may emit a trace event when
//!   the `tracing` feature is on.

use crate::mode::DistortionMode;
use crate::param_info::{
    PARAM_DESCRIPTORS, PARAM_FUZZ, PARAM_GAIN, PARAM_MODE, PARAM_VOLUME, ParamDescriptor,
    ParameterInfo,
};
use crate::params::{ParamSnapshot, clamp_fuzz, clamp_gain_db, clamp_volume_db};
use crate::processor::process_sample;

/// Core trait for audio effects.
///
/// # Example
///
/// ```rust
/// use pandamonium_core::Effect;
///
/// struct Gain {
///     gain: f32,
/// }
///
/// impl Effect for Gain {
///     fn process(&mut self, input: f32) -> f32 {
///         input * self.gain
///     }
///
///     fn reset(&mut self) {}
/// }
/// ```
pub trait Effect {
    /// Process a single sample.
    fn process(&mut self, input: f32) -> f32;

    /// Process a block of samples.
    ///
    /// Default implementation calls `process()` for each sample.
    ///
    /// # Panics
    /// Debug builds panic if `input.len() != output.len()`.
    fn process_block(&mut self, input: &[f32], output: &mut [f32]) {
        debug_assert_eq!(
            input.len(),
            output.len(),
            "Input and output buffers must have same length"
        );
        for (inp, out) in input.iter().zip(output.iter_mut()) {
            *out = self.process(*inp);
        }
    }

    /// Process a block of samples in place.
    fn process_block_inplace(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.process(*sample);
        }
    }

    /// Clear internal state without touching parameters.
    fn reset(&mut self);

    /// Processing latency in samples. Default is 0.
    fn latency_samples(&self) -> usize {
        0
    }
}

/// Gain, selectable distortion and output volume.
///
/// Stateless between samples: [`reset`](Effect::reset) has nothing to clear
/// and the latency is zero.
///
/// # Example
///
/// ```rust
/// use pandamonium_core::{DistortionMode, Effect, Pandamonium};
///
/// let mut fx = Pandamonium::default();
/// fx.set_gain_db(0.0);
/// fx.set_volume_db(0.0);
/// fx.set_fuzz(30.0);
/// fx.set_mode(DistortionMode::HardClipping);
///
/// assert_eq!(fx.process(0.2), 1.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pandamonium {
    params: ParamSnapshot,
}

impl Pandamonium {
    /// Create the effect with the given values, clamped to range.
    pub fn new(params: ParamSnapshot) -> Self {
        Self {
            params: params.clamped(),
        }
    }

    /// Current parameter values.
    pub fn params(&self) -> ParamSnapshot {
        self.params
    }

    /// Replace all parameter values, clamped to range.
    pub fn set_params(&mut self, params: ParamSnapshot) {
        self.params = params.clamped();
    }

    /// Set input gain in dB.
    pub fn set_gain_db(&mut self, db: f32) {
        self.params.gain_db = clamp_gain_db(db);
    }

    /// Set fuzz amount.
    pub fn set_fuzz(&mut self, fuzz: f32) {
        self.params.fuzz = clamp_fuzz(fuzz);
    }

    /// Set output volume in dB.
    pub fn set_volume_db(&mut self, db: f32) {
        self.params.volume_db = clamp_volume_db(db);
    }

    /// Select the distortion mode.
    pub fn set_mode(&mut self, mode: DistortionMode) {
        self.params.mode = mode;
    }

    /// Input gain in dB.
    pub fn gain_db(&self) -> f32 {
        self.params.gain_db
    }

    /// Fuzz amount.
    pub fn fuzz(&self) -> f32 {
        self.params.fuzz
    }

    /// Output volume in dB.
    pub fn volume_db(&self) -> f32 {
        self.params.volume_db
    }

    /// Active distortion mode.
    pub fn mode(&self) -> DistortionMode {
        self.params.mode
    }
}

impl Effect for Pandamonium {
    #[inline]
    fn process(&mut self, input: f32) -> f32 {
        process_sample(input, &self.params)
    }

    fn reset(&mut self) {}
}

impl ParameterInfo for Pandamonium {
    fn param_count(&self) -> usize {
        PARAM_DESCRIPTORS.len()
    }

    fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
        PARAM_DESCRIPTORS.get(index).copied()
    }

    fn get_param(&self, index: usize) -> f32 {
        match index {
            PARAM_GAIN => self.params.gain_db,
            PARAM_FUZZ => self.params.fuzz,
            PARAM_VOLUME => self.params.volume_db,
            PARAM_MODE => f32::from(self.params.mode.index()),
            _ => 0.0,
        }
    }

    fn set_param(&mut self, index: usize, value: f32) {
        match index {
            PARAM_GAIN => self.set_gain_db(value),
            PARAM_FUZZ => self.set_fuzz(value),
            PARAM_VOLUME => self.set_volume_db(value),
            PARAM_MODE => self.set_mode(DistortionMode::from_param_value(value)),
            _ => return,
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(index, value = self.get_param(index), "set_param");
    }
}
