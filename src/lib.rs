//! Videotape timecode values per SMPTE 12M and EBU TS N12.
//!
//! A [`TimecodeValue`] is a frame offset from the start of the tape, a
//! nominal integer frame rate and a drop-frame flag. Everything else is
//! derived: real-time components (with the drop-frame correction),
//! chronological ordering, durations between start- and end-of-media
//! markers, and the canonical `hh:mm:ss<sep>ff(.p)?` text form.
//!
//! # Quick start
//!
//! ```rust
//! use tapecode::TimecodeValue;
//!
//! // One minute into a 29.97 drop-frame tape; numbers 0 and 1 of minute 1
//! // do not exist, so the minute starts at frame 2.
//! let tc = TimecodeValue::new(1800, 30, true)?;
//! assert_eq!(tc.to_string(), "00:01:00;02");
//!
//! // Parse back at a known rate.
//! let back = tapecode::parse_timecode("00:01:00;02", 30)?;
//! assert_eq!(back, tc);
//! # Ok::<(), tapecode::TimecodeError>(())
//! ```
//!
//! # Durations
//!
//! ```rust
//! use tapecode::{calculate_duration, calculate_end_timecode, timecode};
//!
//! let som = timecode(250, 25)?;
//! let eom = timecode(500, 25)?;
//!
//! let duration = calculate_duration(Some(&som), Some(&eom))?;
//! assert_eq!(duration.to_string(), "00:00:10:00");
//!
//! let end = calculate_end_timecode(Some(&som), Some(&duration))?;
//! assert_eq!(end, eom);
//! # Ok::<(), tapecode::TimecodeError>(())
//! ```
//!
//! # High frame rates
//!
//! Above 30 fps two frames share one classic-rate slot and the text form
//! carries a `.0`/`.1` pair suffix:
//!
//! ```rust
//! use tapecode::TimecodeValue;
//!
//! let tc = TimecodeValue::new(123, 60, false)?;
//! assert_eq!(tc.to_string(), "00:00:02:01.1");
//! # Ok::<(), tapecode::TimecodeError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod descriptor;
pub mod dropframe;
pub mod duration;
pub mod error;
pub mod text;
pub mod value;

pub use descriptor::TapeDescriptor;
pub use dropframe::DropFrameConfig;
pub use duration::{duration_between, end_timecode};
pub use error::{Result, TimecodeError};
pub use text::parse_timecode;
pub use value::{TimeStruct, TimecodeValue};

use std::cmp::Ordering;

/// The edition of the timecode standards this crate implements.
pub const SMPTE_VERSION: &str = "SMPTE 12M-2008 / EBU TS N12-1999";

/// Maximum hours value in timecode (23).
pub const MAX_HOURS: u8 = 23;

/// Maximum minutes value in timecode (59).
pub const MAX_MINUTES: u8 = 59;

/// Maximum seconds value in timecode (59).
pub const MAX_SECONDS: u8 = 59;

/// Largest accepted frame offset.
///
/// Offsets are capped at 2^62 so every intermediate of the drop-frame
/// correction and of the exact rational comparisons stays inside 128 bits.
pub const MAX_FRAME_OFFSET: u64 = 1 << 62;

/// Create a non-drop timecode value from a frame offset and rate.
///
/// ```rust
/// use tapecode::timecode;
///
/// let tc = timecode(25, 25)?;
/// assert_eq!(tc.to_string(), "00:00:01:00");
/// # Ok::<(), tapecode::TimecodeError>(())
/// ```
pub fn timecode(frame_offset: u64, frames_per_second: u16) -> Result<TimecodeValue> {
    TimecodeValue::new(frame_offset, frames_per_second, false)
}

/// Create a drop-frame timecode value from a frame offset and rate.
///
/// The rate must belong to the 30-frame family.
///
/// ```rust
/// use tapecode::timecode_df;
///
/// let tc = timecode_df(1800, 30)?;
/// assert_eq!(tc.to_string(), "00:01:00;02");
/// # Ok::<(), tapecode::TimecodeError>(())
/// ```
pub fn timecode_df(frame_offset: u64, frames_per_second: u16) -> Result<TimecodeValue> {
    TimecodeValue::new(frame_offset, frames_per_second, true)
}

/// Build a timecode value from SMPTE display components.
///
/// Convenience wrapper over [`TimecodeValue::from_components`].
pub fn calculate_timecode(
    hours: u8,
    minutes: u8,
    seconds: u8,
    frames: u16,
    pair: Option<u8>,
    frames_per_second: u16,
    drop_frame: bool,
) -> Result<TimecodeValue> {
    TimecodeValue::from_components(
        hours,
        minutes,
        seconds,
        frames,
        pair,
        frames_per_second,
        drop_frame,
    )
}

/// Chronologically compare two timecode values by real time.
///
/// # Errors
///
/// `MissingOperand` if either operand is absent.
pub fn compare_timecodes(
    a: Option<&TimecodeValue>,
    b: Option<&TimecodeValue>,
) -> Result<Ordering> {
    match (a, b) {
        (Some(a), Some(b)) => Ok(a.cmp(b)),
        _ => Err(TimecodeError::missing_operand("timecode comparison")),
    }
}

/// Duration between a start-of-media and an end-of-media timecode.
///
/// # Errors
///
/// `MissingOperand` if either marker is absent; otherwise as
/// [`duration_between`].
pub fn calculate_duration(
    som: Option<&TimecodeValue>,
    eom: Option<&TimecodeValue>,
) -> Result<TimecodeValue> {
    match (som, eom) {
        (Some(som), Some(eom)) => duration_between(som, eom),
        _ => Err(TimecodeError::missing_operand("duration calculation")),
    }
}

/// End-of-media timecode from a start-of-media timecode and a duration.
///
/// # Errors
///
/// `MissingOperand` if either operand is absent; otherwise as
/// [`end_timecode`].
pub fn calculate_end_timecode(
    som: Option<&TimecodeValue>,
    duration: Option<&TimecodeValue>,
) -> Result<TimecodeValue> {
    match (som, duration) {
        (Some(som), Some(duration)) => end_timecode(som, duration),
        _ => Err(TimecodeError::missing_operand("end timecode calculation")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_convenience_constructors() {
        let tc = timecode(0, 25).unwrap();
        assert_eq!(tc.to_string(), "00:00:00:00");
        assert!(!tc.drop_frame());

        let tc = timecode_df(0, 30).unwrap();
        assert!(tc.drop_frame());
        assert!(timecode_df(0, 25).is_err());
    }

    #[test]
    fn test_calculate_timecode() {
        let tc = calculate_timecode(1, 2, 3, 4, None, 30, true).unwrap();
        assert_eq!(tc.to_string(), "01:02:03;04");
    }

    #[test]
    fn test_compare_timecodes() {
        let a = timecode(0, 25).unwrap();
        let b = timecode(1, 25).unwrap();
        assert_eq!(compare_timecodes(Some(&a), Some(&b)), Ok(Ordering::Less));
        assert_eq!(compare_timecodes(Some(&b), Some(&a)), Ok(Ordering::Greater));
        assert_eq!(compare_timecodes(Some(&a), Some(&a)), Ok(Ordering::Equal));
        assert_eq!(
            compare_timecodes(None, Some(&a)),
            Err(TimecodeError::missing_operand("timecode comparison"))
        );
        assert_eq!(
            compare_timecodes(Some(&a), None),
            Err(TimecodeError::missing_operand("timecode comparison"))
        );
    }

    #[test]
    fn test_duration_and_end_require_operands() {
        let som = timecode(250, 25).unwrap();
        assert!(matches!(
            calculate_duration(Some(&som), None),
            Err(TimecodeError::MissingOperand { .. })
        ));
        assert!(matches!(
            calculate_end_timecode(None, Some(&som)),
            Err(TimecodeError::MissingOperand { .. })
        ));
    }

    #[test]
    fn test_duration_additivity_via_factory() {
        let som = timecode_df(1800, 30).unwrap();
        let eom = timecode_df(54_321, 30).unwrap();
        let dur = calculate_duration(Some(&som), Some(&eom)).unwrap();
        let end = calculate_end_timecode(Some(&som), Some(&dur)).unwrap();
        assert_eq!(end, eom);
    }

    #[test]
    fn test_constants() {
        assert_eq!(MAX_HOURS, 23);
        assert_eq!(MAX_MINUTES, 59);
        assert_eq!(MAX_SECONDS, 59);
        assert!(SMPTE_VERSION.contains("12M"));
    }
}
