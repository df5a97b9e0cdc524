//! The timecode value type and its real-time conversion.

use crate::dropframe::DropFrameConfig;
use crate::error::{Result, TimecodeError};
use crate::{MAX_FRAME_OFFSET, MAX_HOURS, MAX_MINUTES, MAX_SECONDS};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A SMPTE 12M / EBU N12 timecode value.
///
/// The canonical representation is a frame offset from the start of the
/// tape or media, together with the nominal integer frame rate and the
/// drop-frame flag. Hours, minutes, seconds and frame numbers are derived
/// on demand by [`TimecodeValue::to_real_time`] and never stored.
///
/// Values are immutable: the `with_*` builders return a new, re-validated
/// value instead of mutating in place.
///
/// ```
/// use tapecode::TimecodeValue;
///
/// let tc = TimecodeValue::new(1800, 30, true)?;
/// assert_eq!(tc.to_string(), "00:01:00;02");
/// # Ok::<(), tapecode::TimecodeError>(())
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TimecodeValue {
    frame_offset: u64,
    frames_per_second: u16,
    drop_frame: bool,
}

/// Derived real-time components of a timecode value.
///
/// `frames` holds the displayed frame number. For nominal rates above 30
/// two frames share one classic-rate slot, so `frames` counts slots and
/// `pair` carries the 0/1 index within the slot; at 30 fps and below `pair`
/// is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeStruct {
    /// Hours, 0-23 (wrapped at 24).
    pub hours: u8,
    /// Minutes, 0-59.
    pub minutes: u8,
    /// Seconds, 0-59.
    pub seconds: u8,
    /// Displayed frame number within the second.
    pub frames: u16,
    /// Pair index for rates above 30 fps.
    pub pair: Option<u8>,
}

impl TimecodeValue {
    /// Create a timecode value from its stored parts.
    ///
    /// # Errors
    ///
    /// `ZeroFrameRate` if `frames_per_second` is zero, `DropFrameRate` if
    /// `drop_frame` is set for a rate outside the 30-frame family, `Range`
    /// if `frame_offset` exceeds [`MAX_FRAME_OFFSET`].
    pub fn new(frame_offset: u64, frames_per_second: u16, drop_frame: bool) -> Result<Self> {
        if frames_per_second == 0 {
            return Err(TimecodeError::ZeroFrameRate);
        }
        if drop_frame && DropFrameConfig::for_rate(frames_per_second).is_none() {
            return Err(TimecodeError::DropFrameRate { frames_per_second });
        }
        if frame_offset > MAX_FRAME_OFFSET {
            return Err(TimecodeError::range(format!(
                "frame offset {frame_offset} exceeds {MAX_FRAME_OFFSET}"
            )));
        }
        Ok(Self {
            frame_offset,
            frames_per_second,
            drop_frame,
        })
    }

    /// Build a timecode value from SMPTE display components.
    ///
    /// `pair` must be present exactly when `frames_per_second > 30`. Under
    /// drop-frame the tuple must not name a skipped frame number (frames 0
    /// and 1 in second zero of a non-tenth minute, at nominal 30).
    ///
    /// ```
    /// use tapecode::TimecodeValue;
    ///
    /// let tc = TimecodeValue::from_components(1, 2, 3, 4, None, 30, true)?;
    /// assert_eq!(tc.to_string(), "01:02:03;04");
    /// # Ok::<(), tapecode::TimecodeError>(())
    /// ```
    pub fn from_components(
        hours: u8,
        minutes: u8,
        seconds: u8,
        frames: u16,
        pair: Option<u8>,
        frames_per_second: u16,
        drop_frame: bool,
    ) -> Result<Self> {
        if frames_per_second == 0 {
            return Err(TimecodeError::ZeroFrameRate);
        }
        if hours > MAX_HOURS {
            return Err(TimecodeError::invalid_component(
                "hours",
                u32::from(hours),
                u32::from(MAX_HOURS),
            ));
        }
        if minutes > MAX_MINUTES {
            return Err(TimecodeError::invalid_component(
                "minutes",
                u32::from(minutes),
                u32::from(MAX_MINUTES),
            ));
        }
        if seconds > MAX_SECONDS {
            return Err(TimecodeError::invalid_component(
                "seconds",
                u32::from(seconds),
                u32::from(MAX_SECONDS),
            ));
        }

        let fps = u32::from(frames_per_second);
        let within: u16 = if frames_per_second > 30 {
            let p = match pair {
                Some(p) if p <= 1 => p,
                Some(p) => {
                    return Err(TimecodeError::invalid_component("pair", u32::from(p), 1))
                }
                None => return Err(TimecodeError::PairIndex { frames_per_second }),
            };
            let w = u32::from(frames) * 2 + u32::from(p);
            if w >= fps {
                return Err(TimecodeError::invalid_component(
                    "frames",
                    u32::from(frames),
                    (fps - 1) / 2,
                ));
            }
            w as u16
        } else {
            if pair.is_some() {
                return Err(TimecodeError::PairIndex { frames_per_second });
            }
            if u32::from(frames) >= fps {
                return Err(TimecodeError::invalid_component(
                    "frames",
                    u32::from(frames),
                    fps - 1,
                ));
            }
            frames
        };

        let frame_offset = if drop_frame {
            let cfg = DropFrameConfig::for_rate(frames_per_second)
                .ok_or(TimecodeError::DropFrameRate { frames_per_second })?;
            if cfg.is_dropped(minutes, seconds, within) {
                return Err(TimecodeError::DroppedFrameNumber {
                    minutes,
                    frames: within,
                });
            }
            cfg.components_to_offset(hours, minutes, seconds, within)
        } else {
            let total_seconds =
                u64::from(hours) * 3600 + u64::from(minutes) * 60 + u64::from(seconds);
            total_seconds * u64::from(frames_per_second) + u64::from(within)
        };

        Self::new(frame_offset, frames_per_second, drop_frame)
    }

    /// The frame offset from the start of the media.
    #[must_use]
    pub fn frame_offset(&self) -> u64 {
        self.frame_offset
    }

    /// The nominal integer frame rate.
    #[must_use]
    pub fn frames_per_second(&self) -> u16 {
        self.frames_per_second
    }

    /// Whether the timecode counts in drop-frame numbering.
    #[must_use]
    pub fn drop_frame(&self) -> bool {
        self.drop_frame
    }

    /// A copy of this value with a different frame offset.
    pub fn with_frame_offset(&self, frame_offset: u64) -> Result<Self> {
        Self::new(frame_offset, self.frames_per_second, self.drop_frame)
    }

    /// A copy of this value with a different frame rate.
    pub fn with_frames_per_second(&self, frames_per_second: u16) -> Result<Self> {
        Self::new(self.frame_offset, frames_per_second, self.drop_frame)
    }

    /// A copy of this value with a different drop-frame flag.
    pub fn with_drop_frame(&self, drop_frame: bool) -> Result<Self> {
        Self::new(self.frame_offset, self.frames_per_second, drop_frame)
    }

    /// Convert the frame offset to its real-time components.
    ///
    /// Hours wrap at 24. Under drop-frame the closed-form correction of
    /// [`DropFrameConfig`] applies, so the displayed numbering skips the
    /// dropped values.
    ///
    /// # Errors
    ///
    /// `Range` if the stored offset exceeds [`MAX_FRAME_OFFSET`] (possible
    /// only for values built by deserialization), `DropFrameRate` for a
    /// deserialized drop flag on a non-30-family rate.
    pub fn to_real_time(&self) -> Result<TimeStruct> {
        if self.frame_offset > MAX_FRAME_OFFSET {
            return Err(TimecodeError::range(format!(
                "frame offset {} exceeds {MAX_FRAME_OFFSET}",
                self.frame_offset
            )));
        }
        let fps = u64::from(self.frames_per_second);
        let (hours, minutes, seconds, within) = if self.drop_frame {
            let cfg = DropFrameConfig::for_rate(self.frames_per_second).ok_or(
                TimecodeError::DropFrameRate {
                    frames_per_second: self.frames_per_second,
                },
            )?;
            cfg.offset_to_components(self.frame_offset)
        } else {
            let total_seconds = self.frame_offset / fps;
            (
                ((total_seconds / 3600) % 24) as u8,
                ((total_seconds % 3600) / 60) as u8,
                (total_seconds % 60) as u8,
                (self.frame_offset % fps) as u16,
            )
        };

        Ok(if self.frames_per_second > 30 {
            TimeStruct {
                hours,
                minutes,
                seconds,
                frames: within / 2,
                pair: Some((within % 2) as u8),
            }
        } else {
            TimeStruct {
                hours,
                minutes,
                seconds,
                frames: within,
                pair: None,
            }
        })
    }

    /// Offset this timecode by a signed number of frames.
    pub fn add_frames(&self, frames: i64) -> Result<Self> {
        let offset = i64::try_from(self.frame_offset)
            .map_err(|_| TimecodeError::range("frame offset overflow"))?;
        let next = offset
            .checked_add(frames)
            .ok_or_else(|| TimecodeError::range("frame offset overflow"))?;
        let next = u64::try_from(next)
            .map_err(|_| TimecodeError::range("frame offset underflow"))?;
        Self::new(next, self.frames_per_second, self.drop_frame)
    }

    /// Whether this timecode points at the start of the media.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.frame_offset == 0
    }

    /// The separator printed before the frame number.
    #[must_use]
    pub fn separator(&self) -> char {
        if self.drop_frame {
            ';'
        } else {
            ':'
        }
    }

    /// Real signal rate as an exact rational (numerator, denominator).
    ///
    /// Drop-frame signals run at `fps * 1000/1001` real frames per second.
    pub(crate) fn real_rate(&self) -> (u64, u64) {
        let fps = u64::from(self.frames_per_second);
        if self.drop_frame {
            (fps * 1000, 1001)
        } else {
            (fps, 1)
        }
    }
}

impl Default for TimecodeValue {
    fn default() -> Self {
        Self {
            frame_offset: 0,
            frames_per_second: 25,
            drop_frame: false,
        }
    }
}

// Equality and ordering are chronological: two values are equal when they
// name the same real time, whatever their rate or drop setting.

impl PartialEq for TimecodeValue {
    fn eq(&self, other: &Self) -> bool {
        crate::duration::real_time_cmp(self, other) == Ordering::Equal
    }
}

impl Eq for TimecodeValue {}

impl PartialOrd for TimecodeValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimecodeValue {
    fn cmp(&self, other: &Self) -> Ordering {
        crate::duration::real_time_cmp(self, other)
    }
}
