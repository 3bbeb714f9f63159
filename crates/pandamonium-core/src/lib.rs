//! Pandamonium Core - gain, waveshaping distortion and output volume
//!
//! This crate holds the whole signal path of the pandamonium effect and the
//! parameter plumbing around it, designed for real-time audio processing
//! with zero allocation in the audio path.
//!
//! # Signal Flow
//!
//! ```text
//! input ──► gain (dB) ──► waveshaper (mode, fuzz) ──► volume (dB) ──► output
//! ```
//!
//! # Core Abstractions
//!
//! ## Processing
//!
//! - [`process_sample`] - Transform one sample with a parameter snapshot
//! - [`process_block`] - Host block contract: transform input channels,
//!   zero-fill extra output channels
//! - [`Effect`] - Object-safe single-channel effect trait
//! - [`Pandamonium`] - The effect as a self-contained [`Effect`]
//!
//! ## Waveshapers
//!
//! - [`DistortionMode`] - Closed set of transfer functions
//! - [`exp_soft_clip`], [`soft_clip`], [`hard_clip`] - The transfer functions
//!
//! ## Parameters
//!
//! - [`ParamSource`] - Read access used by the processor
//! - [`ParamSnapshot`] - Plain `Copy` values
//! - [`AtomicParams`] - Lock-free storage shared with a control thread
//! - [`ParameterInfo`] / [`ParamDescriptor`] - Introspection for hosts and UIs
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the default `std` feature in
//! your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! pandamonium-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use pandamonium_core::{AtomicParams, DistortionMode, process_block};
//!
//! let params = Arc::new(AtomicParams::default());
//! params.set_mode(DistortionMode::HardClipping);
//!
//! let mut left = vec![0.1f32; 64];
//! let mut right = vec![0.0f32; 64];
//! let mut channels: [&mut [f32]; 2] = [&mut left, &mut right];
//!
//! // Mono in, stereo out: the right channel is silenced.
//! process_block(&mut channels, 1, 2, &*params);
//! assert!(right.iter().all(|&s| s == 0.0));
//! ```
//!
//! # Design Principles
//!
//! - **Real-time safe**: No allocations, locks or logging in processing paths
//! - **No dependencies on std**: Pure `no_std` with `libm` for math
//! - **Stateless**: Output depends only on the current sample and parameters

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod effect;
pub mod math;
pub mod mode;
pub mod param_info;
pub mod params;
pub mod processor;
pub mod shaper;

// Re-export main types at crate root
pub use effect::{Effect, Pandamonium};
pub use math::{db_to_linear, linear_to_db};
pub use mode::{DistortionMode, ParseModeError};
pub use param_info::{
    PARAM_DESCRIPTORS, PARAM_FUZZ, PARAM_GAIN, PARAM_MODE, PARAM_VOLUME, ParamDescriptor,
    ParamFlags, ParamId, ParamUnit, ParameterInfo,
};
pub use params::{
    AtomicParams, FUZZ_DEFAULT, FUZZ_MAX, FUZZ_MIN, GAIN_DEFAULT_DB, GAIN_MAX_DB, GAIN_MIN_DB,
    ParamSnapshot, ParamSource, VOLUME_DEFAULT_DB, VOLUME_MAX_DB, VOLUME_MIN_DB, clamp_fuzz,
    clamp_gain_db, clamp_volume_db,
};
pub use processor::{process_block, process_channel, process_sample};
pub use shaper::{exp_soft_clip, hard_clip, soft_clip};
