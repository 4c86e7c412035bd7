//! Procedural terrain height field
//!
//! Three layered sine waves, not true gradient noise. The exact
//! frequencies and amplitudes define how hard a level feels, so they are
//! fixed constants rather than tuning knobs.

use crate::consts::{GROUND_BASELINE, GROUND_RELIEF};

/// (spatial frequency, seed multiplier, amplitude) per layer
const LAYERS: [(f64, f64, f64); 3] = [(0.0009, 1.0, 0.5), (0.004, 1.7, 0.35), (0.012, 2.3, 0.15)];

/// Terrain height at `x` for a run seed, in [-1, 1]
///
/// Pure and continuous in `x`; valid for negative and far-away positions.
#[inline]
pub fn height_at(x: f64, seed: f64) -> f64 {
    LAYERS
        .iter()
        .map(|&(freq, seed_mul, amp)| (x * freq + seed * seed_mul).sin() * amp)
        .sum()
}

/// Screen-space elevation of the snow surface at `x` (larger = lower)
#[inline]
pub fn ground_elevation(x: f64, seed: f64, bump_factor: f64) -> f64 {
    GROUND_BASELINE + height_at(x * 2.0, seed) * GROUND_RELIEF * bump_factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_height_at_origin_zero_seed() {
        assert_eq!(height_at(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_height_is_deterministic() {
        for x in [-5000.0, -1.5, 0.0, 12.25, 1e6] {
            assert_eq!(height_at(x, 321.5), height_at(x, 321.5));
        }
    }

    #[test]
    fn test_height_is_continuous() {
        let seed = 77.7;
        let mut x = -2000.0;
        while x < 2000.0 {
            let step = 0.01;
            let delta = (height_at(x + step, seed) - height_at(x, seed)).abs();
            // Max slope is sum(freq * amp) ~= 0.0037 per unit
            assert!(delta < 0.001, "jump of {delta} at x={x}");
            x += 7.3;
        }
    }

    #[test]
    fn test_ground_elevation_band() {
        for i in 0..500 {
            let x = i as f64 * 13.0;
            let y = ground_elevation(x, 42.0, 1.6);
            assert!((GROUND_BASELINE - 64.0..=GROUND_BASELINE + 64.0).contains(&y));
        }
    }

    proptest! {
        #[test]
        fn prop_height_within_unit_range(x in -1e9f64..1e9, seed in 0.0f64..1000.0) {
            let h = height_at(x, seed);
            prop_assert!((-1.0..=1.0).contains(&h), "height {} out of range", h);
        }
    }
}
