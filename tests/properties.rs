//! Property-based tests for timecode conversion, ordering and durations.
//!
//! Offsets are drawn inside one 24-hour day at the slowest rate so hour
//! wrapping never masks a round-trip mismatch.

use proptest::prelude::*;
use tapecode::{duration_between, end_timecode, parse_timecode, TimecodeValue};

const DAY_AT_24: u64 = 24 * 86_400;

fn scales() -> impl Strategy<Value = (u16, bool)> {
    prop_oneof![
        Just((24u16, false)),
        Just((25u16, false)),
        Just((30u16, false)),
        Just((30u16, true)),
        Just((50u16, false)),
        Just((60u16, false)),
        Just((60u16, true)),
    ]
}

// =============================================================================
// Round-Trip Properties
// =============================================================================

proptest! {
    /// Conversion to real-time components and back recovers the offset.
    #[test]
    fn component_roundtrip(offset in 0u64..DAY_AT_24, (fps, drop) in scales()) {
        let tc = TimecodeValue::new(offset, fps, drop).unwrap();
        let ts = tc.to_real_time().unwrap();
        let back = TimecodeValue::from_components(
            ts.hours, ts.minutes, ts.seconds, ts.frames, ts.pair, fps, drop,
        )
        .unwrap();
        prop_assert_eq!(back.frame_offset(), offset);
    }

    /// Formatting and rate-aware parsing are exact inverses.
    #[test]
    fn string_roundtrip(offset in 0u64..DAY_AT_24, (fps, drop) in scales()) {
        let tc = TimecodeValue::new(offset, fps, drop).unwrap();
        let back = parse_timecode(&tc.to_string(), fps).unwrap();
        prop_assert_eq!(back.frame_offset(), offset);
        prop_assert_eq!(back.frames_per_second(), fps);
        prop_assert_eq!(back.drop_frame(), drop);
    }
}

// =============================================================================
// Ordering Properties
// =============================================================================

proptest! {
    /// compare(a, b) and compare(b, a) always cancel out.
    #[test]
    fn ordering_is_antisymmetric(
        a_off in 0u64..DAY_AT_24, (a_fps, a_drop) in scales(),
        b_off in 0u64..DAY_AT_24, (b_fps, b_drop) in scales(),
    ) {
        let a = TimecodeValue::new(a_off, a_fps, a_drop).unwrap();
        let b = TimecodeValue::new(b_off, b_fps, b_drop).unwrap();
        prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
    }

    /// The real-time order is transitive across rates and drop settings.
    #[test]
    fn ordering_is_transitive(
        a_off in 0u64..DAY_AT_24, (a_fps, a_drop) in scales(),
        b_off in 0u64..DAY_AT_24, (b_fps, b_drop) in scales(),
        c_off in 0u64..DAY_AT_24, (c_fps, c_drop) in scales(),
    ) {
        let a = TimecodeValue::new(a_off, a_fps, a_drop).unwrap();
        let b = TimecodeValue::new(b_off, b_fps, b_drop).unwrap();
        let c = TimecodeValue::new(c_off, c_fps, c_drop).unwrap();
        if a <= b && b <= c {
            prop_assert!(a <= c);
        }
    }
}

// =============================================================================
// Duration Properties
// =============================================================================

proptest! {
    /// end(som, duration(som, eom)) recovers eom for non-wrapping pairs.
    #[test]
    fn duration_additivity(
        som_off in 0u64..(DAY_AT_24 - 10_000),
        extra in 0u64..10_000,
        (fps, drop) in scales(),
    ) {
        let som = TimecodeValue::new(som_off, fps, drop).unwrap();
        let eom = TimecodeValue::new(som_off + extra, fps, drop).unwrap();
        let dur = duration_between(&som, &eom).unwrap();
        prop_assert_eq!(dur.frame_offset(), extra);
        let end = end_timecode(&som, &dur).unwrap();
        prop_assert_eq!(end.frame_offset(), som_off + extra);
    }
}

// =============================================================================
// Drop-Frame Numbering
// =============================================================================

proptest! {
    /// The dropped numbers never surface in the displayed sequence.
    #[test]
    fn dropped_numbers_never_display(offset in 0u64..DAY_AT_24) {
        let tc = TimecodeValue::new(offset, 30, true).unwrap();
        let ts = tc.to_real_time().unwrap();
        if ts.seconds == 0 && ts.minutes % 10 != 0 {
            prop_assert!(ts.frames >= 2, "showed {}", tc);
        }
    }
}

/// The display sequence over the first ten minutes is strictly increasing:
/// consecutive offsets always move the display forward, through both kinds
/// of minute boundary.
#[test]
fn drop_frame_display_is_monotone() {
    let mut prev = None;
    for offset in 0..18_000u64 {
        let ts = TimecodeValue::new(offset, 30, true)
            .unwrap()
            .to_real_time()
            .unwrap();
        let key = (ts.hours, ts.minutes, ts.seconds, ts.frames);
        if let Some(p) = prev {
            assert!(key > p, "display went backwards at offset {offset}");
        }
        prev = Some(key);
    }
}
