//! Offline audio I/O for the pandamonium effect.
//!
//! This crate provides:
//!
//! - **WAV file I/O**: [`read_wav`] and [`write_wav`] for loading/saving
//!   multi-channel audio files
//! - **Planar buffers**: [`PlanarBuffer`], one `Vec<f32>` per channel
//! - **Block processing**: [`ProcessingEngine`] feeds a buffer through
//!   [`process_block`](pandamonium_core::process_block) the way a host
//!   callback would
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use pandamonium_core::{AtomicParams, DistortionMode};
//! use pandamonium_io::{ProcessingEngine, read_wav, write_wav};
//!
//! let (mut buffer, spec) = read_wav("input.wav")?;
//!
//! let params = Arc::new(AtomicParams::default());
//! params.set_mode(DistortionMode::SoftClipping);
//!
//! let engine = ProcessingEngine::new(Arc::clone(&params)).with_output_channels(2);
//! engine.process(&mut buffer);
//!
//! write_wav("output.wav", &buffer, spec)?;
//! # Ok::<(), pandamonium_io::Error>(())
//! ```

mod buffer;
mod engine;
mod wav;

pub use buffer::PlanarBuffer;
pub use engine::{DEFAULT_BLOCK_SIZE, ProcessingEngine};
pub use wav::{WavFormat, WavInfo, WavSpec, read_wav, read_wav_info, write_wav};

/// Error types for audio I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// The requested sample format is not supported.
    #[error("Unsupported sample format: {0}")]
    UnsupportedFormat(String),

    /// Channel data does not form a rectangular buffer.
    #[error("Invalid buffer: {0}")]
    InvalidBuffer(String),

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for audio I/O operations.
pub type Result<T> = std::result::Result<T, Error>;
