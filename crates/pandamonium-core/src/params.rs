//! The four effect parameters and the ways the processor reads them.
//!
//! The processor only ever *reads* parameters, through [`ParamSource`]. Two
//! sources ship with the crate:
//!
//! - [`ParamSnapshot`] - a plain `Copy` value, for offline rendering and tests.
//! - [`AtomicParams`] - lock-free storage that a control thread (UI,
//!   automation) writes while the audio thread reads.
//!
//! Ranges and defaults:
//!
//! | Parameter | Range | Default |
//! |-----------|-------|---------|
//! | Gain (dB) | [`GAIN_MIN_DB`]..=[`GAIN_MAX_DB`] | [`GAIN_DEFAULT_DB`] |
//! | Fuzz | [`FUZZ_MIN`]..=[`FUZZ_MAX`] | [`FUZZ_DEFAULT`] |
//! | Volume (dB) | [`VOLUME_MIN_DB`]..=[`VOLUME_MAX_DB`] | [`VOLUME_DEFAULT_DB`] |
//! | Mode | [`DistortionMode`] | [`DistortionMode::ExpSoftClipping`] |

use core::sync::atomic::{AtomicU8, AtomicU32, Ordering};

use crate::mode::DistortionMode;

/// Minimum input gain in dB.
pub const GAIN_MIN_DB: f32 = 0.0;
/// Maximum input gain in dB.
pub const GAIN_MAX_DB: f32 = 24.0;
/// Default input gain in dB.
pub const GAIN_DEFAULT_DB: f32 = 1.0;

/// Minimum fuzz amount.
pub const FUZZ_MIN: f32 = 0.0;
/// Maximum fuzz amount.
pub const FUZZ_MAX: f32 = 30.0;
/// Default fuzz amount.
pub const FUZZ_DEFAULT: f32 = 15.0;

/// Minimum output volume in dB.
pub const VOLUME_MIN_DB: f32 = 0.0;
/// Maximum output volume in dB.
pub const VOLUME_MAX_DB: f32 = 24.0;
/// Default output volume in dB.
pub const VOLUME_DEFAULT_DB: f32 = 1.0;

/// Read access to the current parameter values.
///
/// Implementations must be callable from the audio thread: no locks, no
/// allocation, no logging. The processor calls [`snapshot`](Self::snapshot)
/// once per sample so automation lands mid-block.
pub trait ParamSource {
    /// Input gain in dB, within [`GAIN_MIN_DB`]..=[`GAIN_MAX_DB`].
    fn gain_db(&self) -> f32;

    /// Fuzz amount, within [`FUZZ_MIN`]..=[`FUZZ_MAX`].
    fn fuzz(&self) -> f32;

    /// Output volume in dB, within [`VOLUME_MIN_DB`]..=[`VOLUME_MAX_DB`].
    fn volume_db(&self) -> f32;

    /// Active distortion mode.
    fn mode(&self) -> DistortionMode;

    /// Read all four values.
    ///
    /// There is no consistency guarantee across the four reads; a value
    /// changed halfway through is picked up by the next snapshot.
    #[inline]
    fn snapshot(&self) -> ParamSnapshot {
        ParamSnapshot {
            gain_db: self.gain_db(),
            fuzz: self.fuzz(),
            volume_db: self.volume_db(),
            mode: self.mode(),
        }
    }
}

/// Plain parameter values.
///
/// Fields are public and unchecked; the processor assumes they are in range.
/// Use [`clamped`](Self::clamped) when the values come from outside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSnapshot {
    /// Input gain in dB.
    pub gain_db: f32,
    /// Fuzz amount.
    pub fuzz: f32,
    /// Output volume in dB.
    pub volume_db: f32,
    /// Distortion mode.
    pub mode: DistortionMode,
}

impl ParamSnapshot {
    /// Build a snapshot from explicit values.
    pub const fn new(gain_db: f32, fuzz: f32, volume_db: f32, mode: DistortionMode) -> Self {
        Self {
            gain_db,
            fuzz,
            volume_db,
            mode,
        }
    }

    /// Copy with every continuous value clamped to its range.
    ///
    /// NaN becomes the parameter's default; infinities saturate.
    pub fn clamped(self) -> Self {
        Self {
            gain_db: clamp_gain_db(self.gain_db),
            fuzz: clamp_fuzz(self.fuzz),
            volume_db: clamp_volume_db(self.volume_db),
            mode: self.mode,
        }
    }
}

impl Default for ParamSnapshot {
    fn default() -> Self {
        Self::new(
            GAIN_DEFAULT_DB,
            FUZZ_DEFAULT,
            VOLUME_DEFAULT_DB,
            DistortionMode::ExpSoftClipping,
        )
    }
}

impl ParamSource for ParamSnapshot {
    #[inline]
    fn gain_db(&self) -> f32 {
        self.gain_db
    }

    #[inline]
    fn fuzz(&self) -> f32 {
        self.fuzz
    }

    #[inline]
    fn volume_db(&self) -> f32 {
        self.volume_db
    }

    #[inline]
    fn mode(&self) -> DistortionMode {
        self.mode
    }

    #[inline]
    fn snapshot(&self) -> ParamSnapshot {
        *self
    }
}

/// Lock-free parameter storage shared between a control thread and the audio thread.
///
/// Continuous values are stored as `f32` bit patterns in `AtomicU32`, the
/// mode as its index in an `AtomicU8`. Every load returns a value that was
/// stored in full, never a mix of two writes. Writers clamp to range and
/// replace NaN with the default, so a reader can rely on the
/// [`ParamSource`] range contract.
///
/// Wrap in an `Arc` to share it.
///
/// # Example
///
/// ```rust
/// use pandamonium_core::{AtomicParams, DistortionMode, ParamSource};
///
/// let params = AtomicParams::default();
/// params.set_gain_db(40.0); // clamped
/// params.set_mode(DistortionMode::HardClipping);
///
/// assert_eq!(params.gain_db(), 24.0);
/// assert_eq!(params.mode(), DistortionMode::HardClipping);
/// ```
#[derive(Debug)]
pub struct AtomicParams {
    gain_db: AtomicU32,
    fuzz: AtomicU32,
    volume_db: AtomicU32,
    mode: AtomicU8,
}

impl AtomicParams {
    /// Create storage holding `initial` (clamped).
    pub fn new(initial: ParamSnapshot) -> Self {
        let initial = initial.clamped();
        Self {
            gain_db: AtomicU32::new(initial.gain_db.to_bits()),
            fuzz: AtomicU32::new(initial.fuzz.to_bits()),
            volume_db: AtomicU32::new(initial.volume_db.to_bits()),
            mode: AtomicU8::new(initial.mode.index()),
        }
    }

    /// Set input gain in dB, clamped to range.
    pub fn set_gain_db(&self, db: f32) {
        store_f32(&self.gain_db, clamp_gain_db(db));
    }

    /// Set fuzz amount, clamped to range.
    pub fn set_fuzz(&self, fuzz: f32) {
        store_f32(&self.fuzz, clamp_fuzz(fuzz));
    }

    /// Set output volume in dB, clamped to range.
    pub fn set_volume_db(&self, db: f32) {
        store_f32(&self.volume_db, clamp_volume_db(db));
    }

    /// Select the distortion mode.
    pub fn set_mode(&self, mode: DistortionMode) {
        self.mode.store(mode.index(), Ordering::Release);
    }

    /// Store all four values (clamped), one parameter at a time.
    pub fn store(&self, values: &ParamSnapshot) {
        self.set_gain_db(values.gain_db);
        self.set_fuzz(values.fuzz);
        self.set_volume_db(values.volume_db);
        self.set_mode(values.mode);
    }
}

impl Default for AtomicParams {
    fn default() -> Self {
        Self::new(ParamSnapshot::default())
    }
}

impl ParamSource for AtomicParams {
    #[inline]
    fn gain_db(&self) -> f32 {
        load_f32(&self.gain_db)
    }

    #[inline]
    fn fuzz(&self) -> f32 {
        load_f32(&self.fuzz)
    }

    #[inline]
    fn volume_db(&self) -> f32 {
        load_f32(&self.volume_db)
    }

    #[inline]
    fn mode(&self) -> DistortionMode {
        // Only `set_mode` writes here, so the index is always valid.
        DistortionMode::from_index(self.mode.load(Ordering::Acquire)).unwrap_or_default()
    }
}

impl<P: ParamSource + ?Sized> ParamSource for &P {
    #[inline]
    fn gain_db(&self) -> f32 {
        (**self).gain_db()
    }

    #[inline]
    fn fuzz(&self) -> f32 {
        (**self).fuzz()
    }

    #[inline]
    fn volume_db(&self) -> f32 {
        (**self).volume_db()
    }

    #[inline]
    fn mode(&self) -> DistortionMode {
        (**self).mode()
    }

    #[inline]
    fn snapshot(&self) -> ParamSnapshot {
        (**self).snapshot()
    }
}

/// Clamp to `min..=max`, mapping NaN to `default`.
#[inline]
fn clamp_or_default(value: f32, min: f32, max: f32, default: f32) -> f32 {
    if value.is_nan() {
        default
    } else {
        value.clamp(min, max)
    }
}

/// Input gain in dB forced into range.
#[inline]
pub fn clamp_gain_db(db: f32) -> f32 {
    clamp_or_default(db, GAIN_MIN_DB, GAIN_MAX_DB, GAIN_DEFAULT_DB)
}

/// Fuzz amount forced into range.
#[inline]
pub fn clamp_fuzz(fuzz: f32) -> f32 {
    clamp_or_default(fuzz, FUZZ_MIN, FUZZ_MAX, FUZZ_DEFAULT)
}

/// Output volume in dB forced into range.
#[inline]
pub fn clamp_volume_db(db: f32) -> f32 {
    clamp_or_default(db, VOLUME_MIN_DB, VOLUME_MAX_DB, VOLUME_DEFAULT_DB)
}

#[inline]
fn load_f32(atomic: &AtomicU32) -> f32 {
    f32::from_bits(atomic.load(Ordering::Acquire))
}

#[inline]
fn store_f32(atomic: &AtomicU32, value: f32) {
    atomic.store(value.to_bits(), Ordering::Release);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_defaults() {
        let p = ParamSnapshot::default();
        assert_eq!(p.gain_db, 1.0);
        assert_eq!(p.fuzz, 15.0);
        assert_eq!(p.volume_db, 1.0);
        assert_eq!(p.mode, DistortionMode::ExpSoftClipping);
    }

    #[test]
    fn test_snapshot_clamped() {
        let p = ParamSnapshot::new(-3.0, 45.0, 30.0, DistortionMode::SoftClipping).clamped();
        assert_eq!(p.gain_db, GAIN_MIN_DB);
        assert_eq!(p.fuzz, FUZZ_MAX);
        assert_eq!(p.volume_db, VOLUME_MAX_DB);
        assert_eq!(p.mode, DistortionMode::SoftClipping);
    }

    #[test]
    fn test_snapshot_is_its_own_source() {
        let p = ParamSnapshot::new(6.0, 3.0, 2.0, DistortionMode::HardClipping);
        assert_eq!(p.snapshot(), p);
        assert_eq!(p.gain_db(), 6.0);
        assert_eq!(p.mode(), DistortionMode::HardClipping);
    }

    #[test]
    fn test_atomic_defaults_match_snapshot() {
        let params = AtomicParams::default();
        assert_eq!(params.snapshot(), ParamSnapshot::default());
    }

    #[test]
    fn test_atomic_setters_clamp() {
        let params = AtomicParams::default();

        params.set_gain_db(100.0);
        params.set_fuzz(-1.0);
        params.set_volume_db(-10.0);
        assert_eq!(params.gain_db(), GAIN_MAX_DB);
        assert_eq!(params.fuzz(), FUZZ_MIN);
        assert_eq!(params.volume_db(), VOLUME_MIN_DB);

        params.set_gain_db(12.5);
        assert_eq!(params.gain_db(), 12.5);
    }

    #[test]
    fn test_nan_writes_fall_back_to_defaults() {
        let params = AtomicParams::default();
        params.set_gain_db(12.0);
        params.set_fuzz(3.0);
        params.set_volume_db(6.0);

        params.set_gain_db(f32::NAN);
        params.set_fuzz(f32::NAN);
        params.set_volume_db(f32::NAN);
        assert_eq!(params.gain_db(), GAIN_DEFAULT_DB);
        assert_eq!(params.fuzz(), FUZZ_DEFAULT);
        assert_eq!(params.volume_db(), VOLUME_DEFAULT_DB);

        let initial = ParamSnapshot::new(f32::NAN, f32::NAN, f32::NAN, DistortionMode::HardClipping);
        assert_eq!(
            AtomicParams::new(initial).snapshot(),
            ParamSnapshot::new(GAIN_DEFAULT_DB, FUZZ_DEFAULT, VOLUME_DEFAULT_DB, DistortionMode::HardClipping)
        );
    }

    #[test]
    fn test_infinite_writes_saturate() {
        let p = ParamSnapshot::new(f32::INFINITY, f32::NEG_INFINITY, f32::INFINITY, DistortionMode::SoftClipping)
            .clamped();
        assert_eq!(p.gain_db, GAIN_MAX_DB);
        assert_eq!(p.fuzz, FUZZ_MIN);
        assert_eq!(p.volume_db, VOLUME_MAX_DB);
    }

    #[test]
    fn test_atomic_store_all() {
        let params = AtomicParams::default();
        let values = ParamSnapshot::new(3.0, 20.0, 6.0, DistortionMode::SoftClipping);
        params.store(&values);
        assert_eq!(params.snapshot(), values);
    }

    #[test]
    fn test_atomic_new_clamps_initial() {
        let params = AtomicParams::new(ParamSnapshot::new(99.0, 99.0, 99.0, DistortionMode::HardClipping));
        assert_eq!(params.gain_db(), GAIN_MAX_DB);
        assert_eq!(params.fuzz(), FUZZ_MAX);
        assert_eq!(params.volume_db(), VOLUME_MAX_DB);
    }

    #[test]
    fn test_reference_is_a_source() {
        fn read<P: ParamSource>(p: P) -> f32 {
            p.fuzz()
        }
        let params = AtomicParams::default();
        params.set_fuzz(7.0);
        assert_eq!(read(&params), 7.0);
    }
}
