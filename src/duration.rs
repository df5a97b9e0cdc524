//! Chronological comparison and duration arithmetic.
//!
//! Ordering is defined on real elapsed time, not on raw frame offsets: a
//! drop-frame signal runs at `fps * 1000/1001` real frames per second, so
//! equal offsets at different rates or drop settings name different
//! instants. All comparisons and rescaling here use exact integer rational
//! arithmetic widened to 128 bits; no floats, so the order is total and
//! transitive.

use crate::dropframe::DropFrameConfig;
use crate::error::{Result, TimecodeError};
use crate::value::TimecodeValue;
use std::cmp::Ordering;

/// Compare two timecode values by real time.
///
/// Real time of a value is `offset * den / num` seconds for a real rate of
/// `num/den` fps; cross-multiplying keeps the comparison exact.
pub(crate) fn real_time_cmp(a: &TimecodeValue, b: &TimecodeValue) -> Ordering {
    let (num_a, den_a) = a.real_rate();
    let (num_b, den_b) = b.real_rate();
    let lhs = u128::from(a.frame_offset()) * u128::from(den_a) * u128::from(num_b);
    let rhs = u128::from(b.frame_offset()) * u128::from(den_b) * u128::from(num_a);
    lhs.cmp(&rhs)
}

fn same_scale(a: &TimecodeValue, b: &TimecodeValue) -> bool {
    a.frames_per_second() == b.frames_per_second() && a.drop_frame() == b.drop_frame()
}

fn round_div(n: u128, d: u128) -> u128 {
    (n + d / 2) / d
}

/// Frames in one 24-hour day at the value's rate and drop setting.
fn frames_per_day(tc: &TimecodeValue) -> u64 {
    match DropFrameConfig::for_rate(tc.frames_per_second()) {
        Some(cfg) if tc.drop_frame() => cfg.frames_per_day(),
        _ => u64::from(tc.frames_per_second()) * 86_400,
    }
}

/// Re-quantize a frame count from one scale to another, rounding to the
/// nearest frame.
fn rescale_frames(frames: u64, from: &TimecodeValue, to: &TimecodeValue) -> u64 {
    let (num_f, den_f) = from.real_rate();
    let (num_t, den_t) = to.real_rate();
    let n = u128::from(frames) * u128::from(den_f) * u128::from(num_t);
    let d = u128::from(num_f) * u128::from(den_t);
    round_div(n, d) as u64
}

/// Elapsed frames between a start-of-media and an end-of-media timecode.
///
/// When both operands share a rate and drop setting the duration is the
/// plain difference of their frame offsets. Otherwise the real-time
/// difference is re-quantized at the start-of-media scale. The result
/// carries the start-of-media rate and drop flag.
///
/// # Errors
///
/// `Range` if the end of media precedes the start of media.
///
/// ```
/// use tapecode::{duration_between, TimecodeValue};
///
/// let som = TimecodeValue::new(250, 25, false)?;
/// let eom = TimecodeValue::new(500, 25, false)?;
/// assert_eq!(duration_between(&som, &eom)?.to_string(), "00:00:10:00");
/// # Ok::<(), tapecode::TimecodeError>(())
/// ```
pub fn duration_between(som: &TimecodeValue, eom: &TimecodeValue) -> Result<TimecodeValue> {
    if same_scale(som, eom) {
        let frames = eom
            .frame_offset()
            .checked_sub(som.frame_offset())
            .ok_or_else(|| TimecodeError::range("end of media precedes start of media"))?;
        return TimecodeValue::new(frames, som.frames_per_second(), som.drop_frame());
    }

    let (num_s, den_s) = som.real_rate();
    let (num_e, den_e) = eom.real_rate();
    let end = i128::from(eom.frame_offset()) * i128::from(den_e) * i128::from(num_s);
    let start = i128::from(som.frame_offset()) * i128::from(den_s) * i128::from(num_e);
    let delta = end - start;
    if delta < 0 {
        return Err(TimecodeError::range(
            "end of media precedes start of media",
        ));
    }
    let den = u128::from(num_e) * u128::from(den_s);
    let frames = round_div(delta as u128, den) as u64;
    TimecodeValue::new(frames, som.frames_per_second(), som.drop_frame())
}

/// End-of-media timecode for a start timecode and a duration.
///
/// The duration is re-quantized to the start's scale if it was measured at
/// a different one, then added to the start offset. A sum that passes
/// midnight wraps at 24 hours, matching the hour wrap of
/// [`TimecodeValue::to_real_time`].
pub fn end_timecode(som: &TimecodeValue, duration: &TimecodeValue) -> Result<TimecodeValue> {
    let frames = if same_scale(som, duration) {
        duration.frame_offset()
    } else {
        rescale_frames(duration.frame_offset(), duration, som)
    };
    let sum = som
        .frame_offset()
        .checked_add(frames)
        .ok_or_else(|| TimecodeError::range("frame offset overflow"))?;
    let wrapped = sum % frames_per_day(som);
    TimecodeValue::new(wrapped, som.frames_per_second(), som.drop_frame())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tc(offset: u64, fps: u16, drop: bool) -> TimecodeValue {
        TimecodeValue::new(offset, fps, drop).unwrap()
    }

    #[test]
    fn test_same_scale_duration() {
        let som = tc(250, 25, false);
        let eom = tc(500, 25, false);
        let dur = duration_between(&som, &eom).unwrap();
        assert_eq!(dur.frame_offset(), 250);
        assert_eq!(dur.frames_per_second(), 25);
        assert!(!dur.drop_frame());
    }

    #[test]
    fn test_negative_duration_rejected() {
        let som = tc(500, 25, false);
        let eom = tc(250, 25, false);
        assert!(duration_between(&som, &eom).is_err());

        let som = tc(0, 30, true);
        let eom = tc(30, 30, false);
        // Reversed cross-scale operands fail the same way.
        assert!(duration_between(&eom.with_frame_offset(100_000).unwrap(), &som).is_err());
    }

    #[test]
    fn test_cross_rate_duration() {
        // 10 seconds at 25 fps, end measured at 50 fps.
        let som = tc(250, 25, false);
        let eom = tc(1000, 50, false);
        let dur = duration_between(&som, &eom).unwrap();
        assert_eq!(dur.frame_offset(), 250);
        assert_eq!(dur.frames_per_second(), 25);
    }

    #[test]
    fn test_cross_drop_duration() {
        // One non-drop second (frame 30 at 30 fps) measured from a drop
        // start: 1s of 29.97 signal is 29.97 frames, rounded to 30.
        let som = tc(0, 30, true);
        let eom = tc(30, 30, false);
        let dur = duration_between(&som, &eom).unwrap();
        assert_eq!(dur.frame_offset(), 30);
        assert!(dur.drop_frame());
    }

    #[test]
    fn test_duration_additivity() {
        let som = tc(1800, 30, true);
        let eom = tc(20_000, 30, true);
        let dur = duration_between(&som, &eom).unwrap();
        let end = end_timecode(&som, &dur).unwrap();
        assert_eq!(end.frame_offset(), eom.frame_offset());
        assert_eq!(end, eom);
    }

    #[test]
    fn test_end_timecode_wraps_at_midnight() {
        // 23:59:59:24 at 25 fps plus one frame lands on 00:00:00:00.
        let som = tc(2_159_999, 25, false);
        let one = tc(1, 25, false);
        let end = end_timecode(&som, &one).unwrap();
        assert_eq!(end.frame_offset(), 0);

        // Same at the drop-frame day length.
        let som = tc(2_589_407, 30, true);
        let one = tc(1, 30, true);
        assert_eq!(end_timecode(&som, &one).unwrap().frame_offset(), 0);
    }

    #[test]
    fn test_end_timecode_cross_scale() {
        // A 50 fps duration applied to a 25 fps start: 100 frames at 50 fps
        // is two seconds, 50 frames at 25 fps.
        let som = tc(0, 25, false);
        let dur = tc(100, 50, false);
        let end = end_timecode(&som, &dur).unwrap();
        assert_eq!(end.frame_offset(), 50);
        assert_eq!(end.frames_per_second(), 25);
    }

    #[test]
    fn test_comparison_is_exact() {
        // 29.97 vs 30: after one nominal hour the drop signal lags by
        // exactly 3.6 real seconds; the comparison must see it.
        let ndf = tc(108_000, 30, false);
        let df = tc(108_000, 30, true);
        assert_eq!(real_time_cmp(&ndf, &df), Ordering::Less);
        assert_eq!(real_time_cmp(&df, &ndf), Ordering::Greater);
        assert_eq!(real_time_cmp(&ndf, &ndf), Ordering::Equal);
    }
}
