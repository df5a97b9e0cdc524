//! Canonical text form: `hh:mm:ss<sep>ff(.p)?`.
//!
//! The separator before the frame number is `;` for drop-frame values and
//! `:` otherwise; the `.0`/`.1` pair suffix appears exactly when the
//! nominal rate is above 30 fps. The format is char-exact: padding,
//! separator choice and suffix presence are part of the wire form, not
//! cosmetics.

use crate::dropframe::DropFrameConfig;
use crate::error::{Result, TimecodeError};
use crate::value::TimecodeValue;
use std::fmt;
use std::str::FromStr;

impl fmt::Display for TimecodeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ts = self.to_real_time().map_err(|_| fmt::Error)?;
        write!(
            f,
            "{:02}:{:02}:{:02}{}{:02}",
            ts.hours,
            ts.minutes,
            ts.seconds,
            self.separator(),
            ts.frames
        )?;
        if let Some(pair) = ts.pair {
            write!(f, ".{pair}")?;
        }
        Ok(())
    }
}

/// Components lifted straight out of the canonical string.
struct RawTimecode {
    hours: u8,
    minutes: u8,
    seconds: u8,
    frames: u8,
    drop_frame: bool,
    pair: Option<u8>,
}

fn two_digits(bytes: &[u8], at: usize, component: &str) -> Result<u8> {
    let (hi, lo) = (bytes[at], bytes[at + 1]);
    if !hi.is_ascii_digit() || !lo.is_ascii_digit() {
        return Err(TimecodeError::invalid_format(format!(
            "{component} must be two decimal digits"
        )));
    }
    Ok((hi - b'0') * 10 + (lo - b'0'))
}

fn split_canonical(s: &str) -> Result<RawTimecode> {
    let bytes = s.as_bytes();
    if bytes.len() != 11 && bytes.len() != 13 {
        return Err(TimecodeError::invalid_format(
            "expected hh:mm:ss:ff, hh:mm:ss;ff or a .0/.1 pair suffix",
        ));
    }
    if bytes[2] != b':' || bytes[5] != b':' {
        return Err(TimecodeError::invalid_format(
            "expected ':' after hours and minutes",
        ));
    }
    let drop_frame = match bytes[8] {
        b':' => false,
        b';' => true,
        _ => {
            return Err(TimecodeError::invalid_format(
                "expected ':' or ';' before frames",
            ))
        }
    };
    let pair = if bytes.len() == 13 {
        if bytes[11] != b'.' {
            return Err(TimecodeError::invalid_format("expected '.' before pair index"));
        }
        match bytes[12] {
            b'0' => Some(0),
            b'1' => Some(1),
            _ => {
                return Err(TimecodeError::invalid_format("pair index must be 0 or 1"))
            }
        }
    } else {
        None
    };
    Ok(RawTimecode {
        hours: two_digits(bytes, 0, "hours")?,
        minutes: two_digits(bytes, 3, "minutes")?,
        seconds: two_digits(bytes, 6, "seconds")?,
        frames: two_digits(bytes, 9, "frames")?,
        drop_frame,
        pair,
    })
}

/// Parse a canonical timecode string at a known frame rate.
///
/// This is the exact inverse of the `Display` form: the drop-frame flag
/// comes from the separator and the pair index from the suffix, and both
/// must be consistent with the given rate.
///
/// ```
/// use tapecode::parse_timecode;
///
/// let tc = parse_timecode("01:02:03;04", 30)?;
/// assert!(tc.drop_frame());
/// assert_eq!(tc.to_string(), "01:02:03;04");
/// # Ok::<(), tapecode::TimecodeError>(())
/// ```
pub fn parse_timecode(s: &str, frames_per_second: u16) -> Result<TimecodeValue> {
    let raw = split_canonical(s)?;
    if raw.drop_frame && DropFrameConfig::for_rate(frames_per_second).is_none() {
        return Err(TimecodeError::DropFrameRate { frames_per_second });
    }
    if frames_per_second > 30 && raw.pair.is_none() {
        return Err(TimecodeError::invalid_format(format!(
            "missing pair suffix for {frames_per_second} fps"
        )));
    }
    if frames_per_second <= 30 && raw.pair.is_some() {
        return Err(TimecodeError::invalid_format(format!(
            "unexpected pair suffix at {frames_per_second} fps"
        )));
    }
    TimecodeValue::from_components(
        raw.hours,
        raw.minutes,
        raw.seconds,
        u16::from(raw.frames),
        raw.pair,
        frames_per_second,
        raw.drop_frame,
    )
}

impl FromStr for TimecodeValue {
    type Err = TimecodeError;

    /// Parse with the frame rate inferred from the string alone.
    ///
    /// A pair suffix implies 60 fps and a `;` separator implies 30; other
    /// strings get the smallest of 24/25/30 that admits the frame digit.
    /// The inference is lossy (a 25 fps value with a low frame number reads
    /// back as 24 fps); use [`parse_timecode`] when the rate is known.
    fn from_str(s: &str) -> Result<Self> {
        let raw = split_canonical(s.trim())?;
        let frames_per_second = if raw.pair.is_some() {
            60
        } else if raw.drop_frame {
            30
        } else if raw.frames >= 30 {
            return Err(TimecodeError::invalid_format(format!(
                "frame number {} requires a pair suffix",
                raw.frames
            )));
        } else if raw.frames >= 25 {
            30
        } else if raw.frames >= 24 {
            25
        } else {
            24
        };
        TimecodeValue::from_components(
            raw.hours,
            raw.minutes,
            raw.seconds,
            u16::from(raw.frames),
            raw.pair,
            frames_per_second,
            raw.drop_frame,
        )
    }
}
