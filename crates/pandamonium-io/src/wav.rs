//! WAV file reading and writing.

use crate::{Error, PlanarBuffer, Result};
use hound::{SampleFormat, WavReader, WavWriter};
use std::path::Path;

/// WAV audio encoding format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WavFormat {
    /// Linear PCM (integer samples).
    Pcm,
    /// IEEE 754 floating-point samples.
    IeeeFloat,
}

/// WAV file metadata extracted without loading sample data.
#[derive(Debug, Clone)]
pub struct WavInfo {
    /// Number of audio channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bit depth per sample.
    pub bits_per_sample: u16,
    /// Total number of sample frames (samples per channel).
    pub num_frames: u64,
    /// Duration in seconds.
    pub duration_secs: f64,
    /// Audio encoding format.
    pub format: WavFormat,
}

/// Read WAV metadata without loading sample data.
pub fn read_wav_info<P: AsRef<Path>>(path: P) -> Result<WavInfo> {
    let reader = WavReader::open(path)?;
    let spec = reader.spec();
    let total_samples = u64::from(reader.len()); // total across all channels
    let num_frames = total_samples / u64::from(spec.channels.max(1));
    let duration_secs = num_frames as f64 / f64::from(spec.sample_rate);

    let format = match spec.sample_format {
        SampleFormat::Float => WavFormat::IeeeFloat,
        SampleFormat::Int => WavFormat::Pcm,
    };

    Ok(WavInfo {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
        num_frames,
        duration_secs,
        format,
    })
}

/// WAV file specification.
///
/// When writing, 32 bits means IEEE float and 16 or 24 bits means integer
/// PCM. The channel count is taken from the buffer being written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavSpec {
    /// Number of audio channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz (e.g., 44100, 48000).
    pub sample_rate: u32,
    /// Bit depth per sample (16, 24 or 32).
    pub bits_per_sample: u16,
}

impl Default for WavSpec {
    fn default() -> Self {
        Self {
            channels: 1,
            sample_rate: 48000,
            bits_per_sample: 32,
        }
    }
}

impl From<hound::WavSpec> for WavSpec {
    fn from(spec: hound::WavSpec) -> Self {
        Self {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            bits_per_sample: spec.bits_per_sample,
        }
    }
}

impl From<WavSpec> for hound::WavSpec {
    fn from(spec: WavSpec) -> Self {
        hound::WavSpec {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            bits_per_sample: spec.bits_per_sample,
            sample_format: if spec.bits_per_sample == 32 {
                SampleFormat::Float
            } else {
                SampleFormat::Int
            },
        }
    }
}

/// Full-scale value of a signed integer sample.
fn int_full_scale(bits: u16) -> f32 {
    (1i64 << (bits - 1)) as f32
}

/// Read a WAV file, keeping every channel, as `f32` in [-1, 1).
///
/// Integer PCM is scaled by its full-scale value; float files are read as is.
///
/// # Example
/// ```ignore
/// let (buffer, spec) = read_wav("input.wav")?;
/// println!("{} channels, {} frames at {} Hz", buffer.num_channels(), buffer.frames(), spec.sample_rate);
/// ```
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<(PlanarBuffer, WavSpec)> {
    let path = path.as_ref();
    let reader = WavReader::open(path)?;
    let hound_spec = reader.spec();
    let spec = WavSpec::from(hound_spec);

    if spec.channels == 0 {
        return Err(Error::UnsupportedFormat("WAV file has no channels".to_string()));
    }

    let samples: Vec<f32> = match hound_spec.sample_format {
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<std::result::Result<Vec<_>, _>>()?,
        SampleFormat::Int => {
            let max_val = int_full_scale(spec.bits_per_sample);
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f32 / max_val))
                .collect::<std::result::Result<Vec<_>, _>>()?
        }
    };

    let buffer = PlanarBuffer::from_interleaved(&samples, usize::from(spec.channels));

    tracing::debug!(
        path = %path.display(),
        channels = spec.channels,
        sample_rate = spec.sample_rate,
        bits = spec.bits_per_sample,
        frames = buffer.frames(),
        "read wav"
    );

    Ok((buffer, spec))
}

/// Write a planar buffer to a WAV file.
///
/// The channel count comes from `buffer`; `spec` supplies the sample rate
/// and bit depth. Integer output is clamped to the representable range.
///
/// # Example
/// ```ignore
/// let buffer = PlanarBuffer::new(2, 48000); // 1 second of stereo silence
/// let spec = WavSpec { sample_rate: 48000, ..Default::default() };
/// write_wav("output.wav", &buffer, spec)?;
/// ```
pub fn write_wav<P: AsRef<Path>>(path: P, buffer: &PlanarBuffer, spec: WavSpec) -> Result<()> {
    let path = path.as_ref();

    if !matches!(spec.bits_per_sample, 16 | 24 | 32) {
        return Err(Error::UnsupportedFormat(format!(
            "{}-bit output (expected 16, 24 or 32)",
            spec.bits_per_sample
        )));
    }
    let channels = u16::try_from(buffer.num_channels())
        .ok()
        .filter(|&c| c > 0)
        .ok_or_else(|| {
            Error::UnsupportedFormat(format!("{} output channels", buffer.num_channels()))
        })?;

    let spec = WavSpec { channels, ..spec };
    let mut writer = WavWriter::create(path, hound::WavSpec::from(spec))?;
    let interleaved = buffer.to_interleaved();

    if spec.bits_per_sample == 32 {
        for &sample in &interleaved {
            writer.write_sample(sample)?;
        }
    } else {
        let max_val = int_full_scale(spec.bits_per_sample);
        for &sample in &interleaved {
            let int_sample = (sample * max_val).clamp(-max_val, max_val - 1.0) as i32;
            writer.write_sample(int_sample)?;
        }
    }

    writer.finalize()?;

    tracing::info!(
        path = %path.display(),
        channels,
        sample_rate = spec.sample_rate,
        bits = spec.bits_per_sample,
        frames = buffer.frames(),
        "wrote wav"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn sine(num_frames: usize, scale: f32) -> Vec<f32> {
        (0..num_frames)
            .map(|i| (i as f32 / 1000.0).sin() * scale)
            .collect()
    }

    #[test]
    fn test_roundtrip_f32() {
        let buffer = PlanarBuffer::from_mono(sine(1000, 1.0));
        let spec = WavSpec {
            channels: 1,
            sample_rate: 48000,
            bits_per_sample: 32,
        };

        let file = NamedTempFile::new().unwrap();
        write_wav(file.path(), &buffer, spec).unwrap();

        let (loaded, loaded_spec) = read_wav(file.path()).unwrap();
        assert_eq!(loaded_spec, spec);
        assert_eq!(loaded, buffer);
    }

    #[test]
    fn test_roundtrip_i16() {
        let buffer = PlanarBuffer::from_mono(sine(1000, 0.9));
        let spec = WavSpec {
            channels: 1,
            sample_rate: 44100,
            bits_per_sample: 16,
        };

        let file = NamedTempFile::new().unwrap();
        write_wav(file.path(), &buffer, spec).unwrap();

        let (loaded, loaded_spec) = read_wav(file.path()).unwrap();
        assert_eq!(loaded_spec.sample_rate, 44100);
        assert_eq!(loaded.frames(), buffer.frames());

        // 16-bit has less precision
        for (a, b) in buffer.iter().flatten().zip(loaded.iter().flatten()) {
            assert!((a - b).abs() < 0.001);
        }
    }

    #[test]
    fn test_roundtrip_i24_stereo() {
        let left = sine(500, 0.5);
        let right = sine(500, -0.25);
        let buffer = PlanarBuffer::from_channels(vec![left, right]).unwrap();
        let spec = WavSpec {
            channels: 2,
            sample_rate: 96000,
            bits_per_sample: 24,
        };

        let file = NamedTempFile::new().unwrap();
        write_wav(file.path(), &buffer, spec).unwrap();

        let (loaded, loaded_spec) = read_wav(file.path()).unwrap();
        assert_eq!(loaded_spec.channels, 2);
        assert_eq!(loaded_spec.bits_per_sample, 24);
        for (a, b) in buffer.iter().flatten().zip(loaded.iter().flatten()) {
            assert!((a - b).abs() < 1e-5);
        }
    }

    #[test]
    fn test_integer_output_clamps() {
        let buffer = PlanarBuffer::from_mono(vec![2.0, -2.0, 0.0]);
        let spec = WavSpec {
            bits_per_sample: 16,
            ..WavSpec::default()
        };

        let file = NamedTempFile::new().unwrap();
        write_wav(file.path(), &buffer, spec).unwrap();

        let (loaded, _) = read_wav(file.path()).unwrap();
        let samples = loaded.channel(0).unwrap();
        assert!((samples[0] - 32767.0 / 32768.0).abs() < 1e-6);
        assert_eq!(samples[1], -1.0);
        assert_eq!(samples[2], 0.0);
    }

    #[test]
    fn test_channel_count_follows_buffer() {
        let buffer = PlanarBuffer::new(3, 10);
        let file = NamedTempFile::new().unwrap();
        write_wav(file.path(), &buffer, WavSpec::default()).unwrap();

        let info = read_wav_info(file.path()).unwrap();
        assert_eq!(info.channels, 3);
        assert_eq!(info.num_frames, 10);
    }

    #[test]
    fn test_unsupported_bit_depth() {
        let buffer = PlanarBuffer::from_mono(vec![0.0; 4]);
        let spec = WavSpec {
            bits_per_sample: 12,
            ..WavSpec::default()
        };

        let file = NamedTempFile::new().unwrap();
        let err = write_wav(file.path(), &buffer, spec).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
    }

    #[test]
    fn test_zero_channels_rejected() {
        let file = NamedTempFile::new().unwrap();
        let err = write_wav(file.path(), &PlanarBuffer::default(), WavSpec::default()).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
    }

    #[test]
    fn test_read_wav_info() {
        let buffer = PlanarBuffer::new(2, 4800);
        let spec = WavSpec {
            channels: 2,
            sample_rate: 48000,
            bits_per_sample: 24,
        };

        let file = NamedTempFile::new().unwrap();
        write_wav(file.path(), &buffer, spec).unwrap();

        let info = read_wav_info(file.path()).unwrap();
        assert_eq!(info.sample_rate, 48000);
        assert_eq!(info.bits_per_sample, 24);
        assert_eq!(info.format, WavFormat::Pcm);
        assert!((info.duration_secs - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_wav("/nonexistent/file/12345.wav").unwrap_err();
        assert!(matches!(err, Error::Wav(_)));
    }
}
