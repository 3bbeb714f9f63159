//! Per-sample transform and the host block contract.
//!
//! Signal flow for every sample, in this fixed order:
//!
//! ```text
//! input ──► × 10^(gain/20) ──► mode.shape(·, fuzz) ──► × 10^(volume/20) ──► output
//! ```
//!
//! Nothing is carried from one sample to the next; the only inputs are the
//! sample itself and the parameter snapshot read for it.

use crate::math::db_to_linear;
use crate::params::{ParamSnapshot, ParamSource};

/// Transform one sample with the given parameters.
///
/// Total over all `f32` inputs: NaN and infinities propagate through the
/// arithmetic instead of being special-cased.
///
/// # Example
///
/// ```rust
/// use pandamonium_core::{DistortionMode, ParamSnapshot, process_sample};
///
/// let params = ParamSnapshot::new(0.0, 30.0, 0.0, DistortionMode::HardClipping);
/// assert_eq!(process_sample(0.5, &params), 1.0);
/// assert_eq!(process_sample(-0.5, &params), -1.0);
/// ```
#[inline]
pub fn process_sample(input: f32, params: &ParamSnapshot) -> f32 {
    let driven = input * db_to_linear(params.gain_db);
    let shaped = params.mode.shape(driven, params.fuzz);
    shaped * db_to_linear(params.volume_db)
}

/// Process one host block in place.
///
/// `channels` holds one slice per output channel. Channels
/// `0..num_input_channels` are transformed sample by sample in ascending
/// order, re-reading `params` for every sample so automation written
/// mid-block is heard. Channels `num_input_channels..num_output_channels`
/// carry no input and are zero-filled. Channels past `num_output_channels`
/// are left untouched.
///
/// Both counts are clamped to `channels.len()`, so a caller that over-reports
/// cannot make this index outside the buffer. The function never allocates,
/// blocks, or logs.
///
/// # Example
///
/// ```rust
/// use pandamonium_core::{DistortionMode, ParamSnapshot, process_block};
///
/// let params = ParamSnapshot::new(0.0, 0.0, 0.0, DistortionMode::HardClipping);
/// let mut left = [0.5, -0.9, 1.5];
/// let mut right = [0.7, 0.7, 0.7];
/// let mut channels: [&mut [f32]; 2] = [&mut left, &mut right];
///
/// process_block(&mut channels, 1, 2, &params);
///
/// assert_eq!(left, [0.5, -0.9, 1.0]);
/// assert_eq!(right, [0.0; 3]);
/// ```
pub fn process_block<P: ParamSource + ?Sized>(
    channels: &mut [&mut [f32]],
    num_input_channels: usize,
    num_output_channels: usize,
    params: &P,
) {
    let num_output_channels = num_output_channels.min(channels.len());
    let num_input_channels = num_input_channels.min(num_output_channels);

    let (active, silent) = channels[..num_output_channels].split_at_mut(num_input_channels);

    for channel in silent.iter_mut() {
        channel.fill(0.0);
    }

    for channel in active.iter_mut() {
        process_channel(channel, params);
    }
}

/// Process a single channel in place, re-reading `params` per sample.
#[inline]
pub fn process_channel<P: ParamSource + ?Sized>(samples: &mut [f32], params: &P) {
    for sample in samples.iter_mut() {
        *sample = process_sample(*sample, &params.snapshot());
    }
}
