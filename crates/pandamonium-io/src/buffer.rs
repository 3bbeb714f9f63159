//! Planar (one vector per channel) sample storage.

use crate::{Error, Result};

/// Multi-channel audio held as one `Vec<f32>` per channel.
///
/// Every channel has the same length, the frame count. This is the layout
/// [`process_block`](pandamonium_core::process_block) expects, so a block is
/// just a range of frames sliced out of each channel.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlanarBuffer {
    channels: Vec<Vec<f32>>,
}

impl PlanarBuffer {
    /// Create a silent buffer.
    pub fn new(num_channels: usize, frames: usize) -> Self {
        Self {
            channels: vec![vec![0.0; frames]; num_channels],
        }
    }

    /// Wrap a single channel.
    pub fn from_mono(samples: Vec<f32>) -> Self {
        Self {
            channels: vec![samples],
        }
    }

    /// Wrap existing channel vectors.
    ///
    /// Fails if the channels differ in length.
    pub fn from_channels(channels: Vec<Vec<f32>>) -> Result<Self> {
        if let Some(first) = channels.first() {
            let frames = first.len();
            if let Some((index, ch)) = channels
                .iter()
                .enumerate()
                .find(|(_, ch)| ch.len() != frames)
            {
                return Err(Error::InvalidBuffer(format!(
                    "channel {index} has {} frames, channel 0 has {frames}",
                    ch.len()
                )));
            }
        }
        Ok(Self { channels })
    }

    /// Deinterleave `samples` into `num_channels` channels.
    ///
    /// A trailing partial frame is dropped.
    pub fn from_interleaved(samples: &[f32], num_channels: usize) -> Self {
        if num_channels == 0 {
            return Self::default();
        }

        let frames = samples.len() / num_channels;
        let mut channels = vec![Vec::with_capacity(frames); num_channels];
        for frame in samples.chunks_exact(num_channels) {
            for (channel, &sample) in channels.iter_mut().zip(frame) {
                channel.push(sample);
            }
        }
        Self { channels }
    }

    /// Interleave all channels frame by frame.
    pub fn to_interleaved(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.frames() * self.num_channels());
        for frame in 0..self.frames() {
            out.extend(self.channels.iter().map(|ch| ch[frame]));
        }
        out
    }

    /// Number of channels.
    pub fn num_channels(&self) -> usize {
        self.channels.len()
    }

    /// Number of frames (samples per channel).
    pub fn frames(&self) -> usize {
        self.channels.first().map_or(0, Vec::len)
    }

    /// True when there are no frames.
    pub fn is_empty(&self) -> bool {
        self.frames() == 0
    }

    /// Samples of one channel.
    pub fn channel(&self, index: usize) -> Option<&[f32]> {
        self.channels.get(index).map(Vec::as_slice)
    }

    /// Mutable samples of one channel.
    pub fn channel_mut(&mut self, index: usize) -> Option<&mut [f32]> {
        self.channels.get_mut(index).map(Vec::as_mut_slice)
    }

    /// Iterate over channels.
    pub fn iter(&self) -> impl Iterator<Item = &[f32]> {
        self.channels.iter().map(Vec::as_slice)
    }

    /// Resize to `num_channels`, dropping channels past it or adding
    /// silent ones of the current length.
    pub fn set_num_channels(&mut self, num_channels: usize) {
        let frames = self.frames();
        self.channels.resize_with(num_channels, || vec![0.0; frames]);
    }

    /// Builder form of [`set_num_channels`](Self::set_num_channels).
    pub fn with_channels(mut self, num_channels: usize) -> Self {
        self.set_num_channels(num_channels);
        self
    }

    /// Mutable slices covering `start..end` of every channel.
    ///
    /// `end` is clamped to the frame count.
    pub fn block_mut(&mut self, start: usize, end: usize) -> Vec<&mut [f32]> {
        let end = end.min(self.frames());
        let start = start.min(end);
        self.channels
            .iter_mut()
            .map(|ch| &mut ch[start..end])
            .collect()
    }

    /// Consume the buffer, returning the channel vectors.
    pub fn into_channels(self) -> Vec<Vec<f32>> {
        self.channels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_silent() {
        let buf = PlanarBuffer::new(2, 8);
        assert_eq!(buf.num_channels(), 2);
        assert_eq!(buf.frames(), 8);
        assert!(buf.iter().all(|ch| ch.iter().all(|&s| s == 0.0)));
    }

    #[test]
    fn test_interleaved_roundtrip() {
        let interleaved = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let buf = PlanarBuffer::from_interleaved(&interleaved, 2);
        assert_eq!(buf.channel(0), Some(&[1.0, 3.0, 5.0][..]));
        assert_eq!(buf.channel(1), Some(&[2.0, 4.0, 6.0][..]));
        assert_eq!(buf.to_interleaved(), interleaved);
    }

    #[test]
    fn test_from_interleaved_drops_partial_frame() {
        let buf = PlanarBuffer::from_interleaved(&[1.0, 2.0, 3.0], 2);
        assert_eq!(buf.frames(), 1);
        assert_eq!(buf.to_interleaved(), vec![1.0, 2.0]);
    }

    #[test]
    fn test_from_interleaved_zero_channels() {
        let buf = PlanarBuffer::from_interleaved(&[1.0, 2.0], 0);
        assert_eq!(buf.num_channels(), 0);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_from_channels_rejects_ragged() {
        assert!(PlanarBuffer::from_channels(vec![vec![0.0; 4], vec![0.0; 4]]).is_ok());
        let err = PlanarBuffer::from_channels(vec![vec![0.0; 4], vec![0.0; 3]]).unwrap_err();
        assert!(matches!(err, Error::InvalidBuffer(_)));
    }

    #[test]
    fn test_set_num_channels_grows_silent() {
        let mut buf = PlanarBuffer::from_mono(vec![0.5; 4]);
        buf.set_num_channels(3);
        assert_eq!(buf.num_channels(), 3);
        assert_eq!(buf.channel(2), Some(&[0.0; 4][..]));
        assert_eq!(buf.channel(0), Some(&[0.5; 4][..]));
    }

    #[test]
    fn test_with_channels_truncates() {
        let buf = PlanarBuffer::new(4, 2).with_channels(1);
        assert_eq!(buf.num_channels(), 1);
        assert_eq!(buf.frames(), 2);
    }

    #[test]
    fn test_channel_mut_and_into_channels() {
        let mut buf = PlanarBuffer::new(2, 3);
        if let Some(right) = buf.channel_mut(1) {
            right.fill(0.25);
        }
        assert!(buf.channel_mut(2).is_none());
        assert_eq!(buf.into_channels(), vec![vec![0.0; 3], vec![0.25; 3]]);
    }

    #[test]
    fn test_block_mut_clamps_range() {
        let mut buf = PlanarBuffer::new(2, 10);
        let block = buf.block_mut(8, 16);
        assert_eq!(block.len(), 2);
        assert!(block.iter().all(|ch| ch.len() == 2));
    }
}
