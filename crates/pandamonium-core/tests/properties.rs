//! Property-based tests for the processing path.
//!
//! Uses proptest to check the bounds of each waveshaper, the monotonic gain
//! and volume stages, the channel-fill contract and repeatability across
//! the full parameter space.

use pandamonium_core::{
    DistortionMode, ParamSnapshot, db_to_linear, exp_soft_clip, hard_clip, process_block,
    process_sample, soft_clip,
};
use proptest::prelude::*;

fn any_mode() -> impl Strategy<Value = DistortionMode> {
    prop::sample::select(DistortionMode::ALL.to_vec())
}

fn any_params() -> impl Strategy<Value = ParamSnapshot> {
    (0.0f32..=24.0, 0.0f32..=30.0, 0.0f32..=24.0, any_mode())
        .prop_map(|(gain, fuzz, volume, mode)| ParamSnapshot::new(gain, fuzz, volume, mode))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Hard clipping never leaves [-1, 1], whatever the drive.
    #[test]
    fn hard_clip_bounded(x in -1000.0f32..=1000.0, fuzz in 0.0f32..=30.0) {
        let y = hard_clip(x, fuzz);
        prop_assert!(y.abs() <= 1.0, "hard_clip({x}, {fuzz}) = {y}");
    }

    /// Soft clipping stays within [-1, 1]; the halving actually keeps it within ±0.5.
    #[test]
    fn soft_clip_bounded(x in -1000.0f32..=1000.0, fuzz in 0.0f32..=30.0) {
        let y = soft_clip(x, fuzz);
        prop_assert!(y.abs() <= 1.0, "soft_clip({x}, {fuzz}) = {y}");
        prop_assert!(y.abs() <= 0.5, "soft_clip({x}, {fuzz}) = {y}");
    }

    /// Exponential soft clipping never exceeds unity.
    #[test]
    fn exp_soft_clip_bounded(x in -1000.0f32..=1000.0, fuzz in 0.0f32..=30.0) {
        let y = exp_soft_clip(x, fuzz);
        prop_assert!(y.abs() <= 1.0, "exp_soft_clip({x}, {fuzz}) = {y}");
    }

    /// Below f32 saturation the exponential curve stays strictly inside ±1.
    #[test]
    fn exp_soft_clip_strictly_below_unity(x in -1.0f32..=1.0, fuzz in 0.0f32..=10.0) {
        let y = exp_soft_clip(x, fuzz);
        prop_assert!(y.abs() < 1.0, "exp_soft_clip({x}, {fuzz}) = {y}");
    }

    /// Zero fuzz on hard clipping is an identity for |x| <= 1.
    #[test]
    fn hard_clip_zero_fuzz_is_identity(x in -1.0f32..=1.0) {
        let p = ParamSnapshot::new(0.0, 0.0, 0.0, DistortionMode::HardClipping);
        prop_assert_eq!(process_sample(x, &p), x);
    }

    /// More gain means a strictly larger signal going into the shaper.
    #[test]
    fn gain_stage_monotonic(
        x in prop_oneof![-1.0f32..=-0.001, 0.001f32..=1.0],
        g1 in 0.0f32..=23.9,
        delta in 0.1f32..=24.0,
    ) {
        let g2 = (g1 + delta).min(24.0);
        prop_assume!(g2 > g1);
        let lo = (x * db_to_linear(g1)).abs();
        let hi = (x * db_to_linear(g2)).abs();
        prop_assert!(hi > lo, "gain {g1} -> {g2}: {lo} vs {hi}");
    }

    /// More volume means a strictly louder output for any nonzero shaped sample.
    #[test]
    fn volume_stage_monotonic(
        x in -1.0f32..=1.0,
        fuzz in 0.0f32..=30.0,
        mode in any_mode(),
        v1 in 0.0f32..=23.9,
        delta in 0.1f32..=24.0,
    ) {
        let v2 = (v1 + delta).min(24.0);
        prop_assume!(v2 > v1);
        prop_assume!(mode.shape(x, fuzz).abs() > 1e-30);

        let quiet = process_sample(x, &ParamSnapshot::new(0.0, fuzz, v1, mode));
        let loud = process_sample(x, &ParamSnapshot::new(0.0, fuzz, v2, mode));
        prop_assert!(loud.abs() > quiet.abs(), "volume {v1} -> {v2}: {quiet} vs {loud}");
    }

    /// Mono in, stereo out: the second channel is silent whatever it held.
    #[test]
    fn extra_output_channel_is_silent(
        left in prop::collection::vec(-1.0f32..=1.0, 0..256),
        fill in -1.0f32..=1.0,
        params in any_params(),
    ) {
        let mut left = left;
        let mut right = vec![fill; left.len()];
        let mut channels: [&mut [f32]; 2] = [&mut left, &mut right];
        process_block(&mut channels, 1, 2, &params);
        prop_assert!(right.iter().all(|&s| s == 0.0));
    }

    /// Any finite input and in-range parameters give a finite output.
    #[test]
    fn output_finite(x in -10.0f32..=10.0, params in any_params()) {
        prop_assert!(process_sample(x, &params).is_finite());
    }

    /// Processing the same block twice gives the same result.
    #[test]
    fn processing_is_repeatable(
        input in prop::collection::vec(-1.0f32..=1.0, 1..128),
        params in any_params(),
    ) {
        let mut first = input.clone();
        let mut second = input;
        process_block(&mut [first.as_mut_slice()], 1, 1, &params);
        process_block(&mut [second.as_mut_slice()], 1, 1, &params);
        prop_assert_eq!(first, second);
    }
}
