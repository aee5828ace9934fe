#![forbid(unsafe_code)]

//! Property-based invariants for the core vocabulary types.
//!
//! ## Invariants
//!
//! 1. `Breakpoint::from_width` is total and partitions the number line at
//!    the two thresholds
//! 2. `Size::max` never returns an axis below the floor, for any input
//!    including NaN and infinities
//! 3. `is_zero` implies `is_empty`, never the other way around for
//!    positive axes
//! 4. `CssRem::to_px` scales linearly with the base font size

use proptest::prelude::*;
use viewgrid_core::{Breakpoint, CssRem, Size};

/// Axis values including the non-finite edge cases the observer can
/// surface from a misbehaving probe.
fn arb_axis() -> impl Strategy<Value = f64> {
    prop_oneof![
        -10_000.0f64..10_000.0,
        Just(0.0),
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn breakpoint_partitions_the_width_line(width in arb_axis()) {
        let bp = Breakpoint::from_width(width);
        if width <= Breakpoint::MOBILE_MAX {
            prop_assert_eq!(bp, Breakpoint::Mobile);
        } else if width <= Breakpoint::TABLET_MAX {
            prop_assert_eq!(bp, Breakpoint::Tablet);
        } else {
            // NaN fails both comparisons and lands here by design.
            prop_assert_eq!(bp, Breakpoint::Desktop);
        }
    }

    #[test]
    fn breakpoint_is_monotonic_in_width(a in -10_000.0f64..10_000.0, b in -10_000.0f64..10_000.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(Breakpoint::from_width(lo) <= Breakpoint::from_width(hi));
    }

    #[test]
    fn size_max_never_dips_below_the_floor(
        width in arb_axis(),
        height in arb_axis(),
        floor_w in 0.0f64..500.0,
        floor_h in 0.0f64..500.0,
    ) {
        let floor = Size::new(floor_w, floor_h);
        let clamped = Size::new(width, height).max(floor);
        prop_assert!(clamped.width >= floor.width);
        prop_assert!(clamped.height >= floor.height);
        // Axes already above the floor pass through unchanged.
        if width > floor_w {
            prop_assert_eq!(clamped.width, width);
        }
        if height > floor_h {
            prop_assert_eq!(clamped.height, height);
        }
    }

    #[test]
    fn zero_implies_empty(width in arb_axis(), height in arb_axis()) {
        let s = Size::new(width, height);
        if s.is_zero() {
            prop_assert!(s.is_empty());
        }
        if width > 0.0 && height > 0.0 {
            prop_assert!(!s.is_empty());
            prop_assert!(!s.is_zero());
        }
    }

    #[test]
    fn rem_to_px_scales_with_the_base_font(rem in -100.0f64..100.0, base in 1.0f64..64.0) {
        let px = CssRem::new(rem).to_px(base);
        prop_assert!((px - rem * base).abs() < 1e-9);
        // Doubling the base font doubles the pixel length.
        let doubled = CssRem::new(rem).to_px(base * 2.0);
        prop_assert!((doubled - 2.0 * px).abs() < 1e-6);
    }
}
