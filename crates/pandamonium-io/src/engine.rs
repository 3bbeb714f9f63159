//! Offline block processing engine.

use std::sync::Arc;

use pandamonium_core::{AtomicParams, process_block};

use crate::PlanarBuffer;

/// Block size used when none is configured.
pub const DEFAULT_BLOCK_SIZE: usize = 512;

/// Runs a [`PlanarBuffer`] through the effect one host-sized block at a time.
///
/// Parameters live in a shared [`AtomicParams`], so another thread (a UI,
/// an automation source) can change them while `process` runs; each sample
/// sees whatever value was last stored.
///
/// The buffer's channels are the input channels. With an output channel
/// count larger than that, the buffer grows and the extra channels come
/// out silent; with a smaller count, surplus input channels are dropped.
#[derive(Debug, Clone)]
pub struct ProcessingEngine {
    params: Arc<AtomicParams>,
    block_size: usize,
    output_channels: Option<usize>,
}

impl ProcessingEngine {
    /// Create an engine reading from `params`.
    pub fn new(params: Arc<AtomicParams>) -> Self {
        Self {
            params,
            block_size: DEFAULT_BLOCK_SIZE,
            output_channels: None,
        }
    }

    /// Set the block size (at least one frame).
    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size.max(1);
        self
    }

    /// Fix the number of output channels. Unset means "same as input".
    pub fn with_output_channels(mut self, output_channels: usize) -> Self {
        self.output_channels = Some(output_channels);
        self
    }

    /// Shared parameter storage.
    pub fn params(&self) -> &Arc<AtomicParams> {
        &self.params
    }

    /// Frames per block.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Output channel count for a buffer with `input_channels` channels.
    pub fn output_channels_for(&self, input_channels: usize) -> usize {
        self.output_channels.unwrap_or(input_channels)
    }

    /// Process `buffer` in place.
    pub fn process(&self, buffer: &mut PlanarBuffer) {
        self.process_with(buffer, |_| {});
    }

    /// Process `buffer` in place, calling `on_block` with the number of
    /// frames done after each block.
    pub fn process_with(&self, buffer: &mut PlanarBuffer, mut on_block: impl FnMut(usize)) {
        let num_input_channels = buffer.num_channels();
        let num_output_channels = self.output_channels_for(num_input_channels);
        let frames = buffer.frames();

        tracing::debug!(
            block_size = self.block_size,
            num_input_channels,
            num_output_channels,
            frames,
            "processing buffer"
        );

        buffer.set_num_channels(num_output_channels);

        let mut start = 0;
        while start < frames {
            let end = (start + self.block_size).min(frames);
            let mut block = buffer.block_mut(start, end);
            process_block(
                &mut block,
                num_input_channels,
                num_output_channels,
                &*self.params,
            );
            start = end;
            on_block(end);
        }
    }
}
