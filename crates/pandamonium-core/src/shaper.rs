//! Waveshaping transfer functions for the distortion stage.
//!
//! Each function maps a gain-staged sample `x` to a shaped sample, with
//! `fuzz` (0–30) playing a different role per mode:
//!
//! | Mode | Role of `fuzz` | Output bound |
//! |------|----------------|--------------|
//! | [`exp_soft_clip`] | exponential rate | approaches ±1 |
//! | [`soft_clip`] | knee steepness `k = 6 · fuzz / 30` | ±0.5 |
//! | [`hard_clip`] | threshold `1 − fuzz / 30` | ±1 |
//!
//! All three are stateless and branch-only, so they are safe for the
//! real-time path. NaN passes through unchanged in every mode because no
//! comparison against NaN succeeds.

use libm::expf;

use crate::mode::DistortionMode;

/// Upper end of the fuzz range; the soft-knee and hard-clip mappings are normalized by it.
pub const FUZZ_SCALE: f32 = 30.0;

/// Fixed knee threshold of [`soft_clip`].
pub const SOFT_CLIP_THRESHOLD: f32 = 1.0 / 3.0;

/// Asymmetric exponential soft clip.
///
/// `x < 0 → −1 + e^(x·fuzz)`, otherwise `1 − e^(−x·fuzz)`.
///
/// Both halves head for ±1 as `|x|` grows, and a larger `fuzz` steepens the
/// knee. With `fuzz = 0` both branches collapse to 0 (silence). In `f32`
/// the result reaches exactly ±1 once `e^(−|x|·fuzz)` drops below half an
/// ULP of 1, but never exceeds it.
///
/// # Example
/// ```rust
/// use pandamonium_core::shaper::exp_soft_clip;
///
/// let y = exp_soft_clip(1.0, 1.0);
/// assert!((y - 0.63212).abs() < 1e-5);
/// ```
#[inline]
pub fn exp_soft_clip(x: f32, fuzz: f32) -> f32 {
    if x < 0.0 {
        -1.0 + expf(x * fuzz)
    } else {
        1.0 - expf(-x * fuzz)
    }
}

/// Piecewise soft-knee clip, halved.
///
/// With `k = 6 · fuzz / 30` and `t = 1/3`:
///
/// - `x > t`: `1` past `2t`, otherwise `(3 − (2 − k·x)²) / 3`
/// - `x < −t`: `−1` past `−2t`, otherwise `−(3 − (2 − k·x)²) / 3`
/// - else: `2x`
///
/// and the result is divided by two. The comparisons are strict, so
/// `x == t` stays linear and `x == 2t` takes the curved formula. At low
/// `fuzz` the curved segment changes sign (at `k = 0`, `x = 0.5` gives
/// `−1/6`); that shape is kept as is.
///
/// # Example
/// ```rust
/// use pandamonium_core::shaper::soft_clip;
///
/// assert!((soft_clip(0.2, 15.0) - 0.2).abs() < 1e-6);
/// assert_eq!(soft_clip(5.0, 15.0), 0.5);
/// ```
#[inline]
pub fn soft_clip(x: f32, fuzz: f32) -> f32 {
    let threshold = SOFT_CLIP_THRESHOLD;
    let k = 6.0 * (fuzz / FUZZ_SCALE);

    let y = if x > threshold {
        if x > 2.0 * threshold {
            1.0
        } else {
            let knee = 2.0 - k * x;
            (3.0 - knee * knee) / 3.0
        }
    } else if x < -threshold {
        if x < -2.0 * threshold {
            -1.0
        } else {
            let knee = 2.0 - k * x;
            -(3.0 - knee * knee) / 3.0
        }
    } else {
        x * 2.0
    };

    y / 2.0
}

/// Hard clip to ±1 with a fuzz-controlled threshold.
///
/// `threshold = 1 − fuzz / 30`; samples above it become `1`, samples below
/// its negation become `−1`, everything else passes unchanged. `fuzz = 0`
/// is a passthrough for `|x| ≤ 1`; `fuzz = 30` turns any nonzero sample
/// into ±1.
///
/// # Example
/// ```rust
/// use pandamonium_core::shaper::hard_clip;
///
/// assert_eq!(hard_clip(0.5, 0.0), 0.5);
/// assert_eq!(hard_clip(1.5, 0.0), 1.0);
/// assert_eq!(hard_clip(0.5, 30.0), 1.0);
/// assert_eq!(hard_clip(0.0, 30.0), 0.0);
/// ```
#[inline]
pub fn hard_clip(x: f32, fuzz: f32) -> f32 {
    let threshold = 1.0 - fuzz / FUZZ_SCALE;

    if x > threshold {
        1.0
    } else if x < -threshold {
        -1.0
    } else {
        x
    }
}

impl DistortionMode {
    /// Apply this mode's transfer function.
    #[inline]
    pub fn shape(self, x: f32, fuzz: f32) -> f32 {
        match self {
            DistortionMode::ExpSoftClipping => exp_soft_clip(x, fuzz),
            DistortionMode::SoftClipping => soft_clip(x, fuzz),
            DistortionMode::HardClipping => hard_clip(x, fuzz),
        }
    }
}
