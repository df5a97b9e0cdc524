//! Drop-frame correction for 30-family frame rates.
//!
//! A drop-frame signal runs at `fps * 1000/1001` real frames per second
//! (29.97 for nominal 30) while its timecode counts nominal-rate numbers.
//! To keep the displayed time aligned with the wall clock, the numbering
//! skips the first `2 * fps/30` frame numbers of every minute that is not a
//! multiple of ten. At nominal 30 that removes 108 numbers per hour.
//!
//! All conversions here are closed-form over the 10-minute block structure;
//! nothing steps minute by minute.

use serde::{Deserialize, Serialize};

/// Drop-frame counting parameters for one 30-family nominal rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropFrameConfig {
    /// Nominal integer frame rate (30, 60, ...).
    pub nominal_fps: u64,
    /// Frame numbers skipped at the start of each non-tenth minute.
    pub dropped_per_minute: u64,
    /// Frames in a dropped (non-tenth) minute.
    pub frames_per_minute: u64,
    /// Frames in a full 10-minute block (one undropped minute plus nine dropped).
    pub frames_per_10_minutes: u64,
}

impl DropFrameConfig {
    /// Parameters for a nominal rate, or `None` outside the 30-frame family.
    ///
    /// Nominal 30 yields the familiar constants: 2 numbers dropped per
    /// minute, 1798 frames in a dropped minute, 17982 per 10-minute block.
    pub fn for_rate(frames_per_second: u16) -> Option<Self> {
        if frames_per_second == 0 || frames_per_second % 30 != 0 {
            return None;
        }
        let fps = u64::from(frames_per_second);
        let dropped = 2 * (fps / 30);
        Some(Self {
            nominal_fps: fps,
            dropped_per_minute: dropped,
            frames_per_minute: fps * 60 - dropped,
            frames_per_10_minutes: fps * 600 - 9 * dropped,
        })
    }

    /// Whether the tuple names a skipped frame number.
    ///
    /// Numbers below `dropped_per_minute` do not exist in second zero of a
    /// non-tenth minute.
    pub fn is_dropped(&self, minutes: u8, seconds: u8, within_second: u16) -> bool {
        seconds == 0 && minutes % 10 != 0 && u64::from(within_second) < self.dropped_per_minute
    }

    /// Total frame numbers skipped before the given whole minute.
    pub fn frames_dropped_until(&self, total_minutes: u64) -> u64 {
        self.dropped_per_minute * (total_minutes - total_minutes / 10)
    }

    /// Frames in one 24-hour day of this signal.
    ///
    /// 1296 dropped minutes per day: 54 non-tenth minutes per hour, 24 hours.
    pub fn frames_per_day(&self) -> u64 {
        self.nominal_fps * 86_400 - self.dropped_per_minute * 1296
    }

    /// Decompose a frame offset into (hours, minutes, seconds, within-second
    /// index). Hours wrap at 24.
    pub fn offset_to_components(&self, frame_offset: u64) -> (u8, u8, u8, u16) {
        let fps = self.nominal_fps;
        let full_minute = fps * 60;

        let blocks = frame_offset / self.frames_per_10_minutes;
        let in_block = frame_offset % self.frames_per_10_minutes;

        // The first minute of each block keeps all its numbers; the nine
        // that follow are short by dropped_per_minute.
        let (extra_minutes, rest) = if in_block < full_minute {
            (0, in_block)
        } else {
            let past_first = in_block - full_minute;
            (
                1 + past_first / self.frames_per_minute,
                past_first % self.frames_per_minute,
            )
        };

        // Re-add the skipped numbers so seconds/frames come out in display
        // numbering.
        let display = if extra_minutes > 0 {
            rest + self.dropped_per_minute
        } else {
            rest
        };

        let total_minutes = blocks * 10 + extra_minutes;
        let hours = ((total_minutes / 60) % 24) as u8;
        let minutes = (total_minutes % 60) as u8;
        let seconds = (display / fps) as u8;
        let within = (display % fps) as u16;
        (hours, minutes, seconds, within)
    }

    /// Rebuild a frame offset from display components.
    ///
    /// The tuple must not name a dropped frame number; callers validate with
    /// [`DropFrameConfig::is_dropped`] first.
    pub fn components_to_offset(&self, hours: u8, minutes: u8, seconds: u8, within_second: u16) -> u64 {
        let total_minutes = u64::from(hours) * 60 + u64::from(minutes);
        let total_seconds =
            u64::from(hours) * 3600 + u64::from(minutes) * 60 + u64::from(seconds);
        self.nominal_fps * total_seconds + u64::from(within_second)
            - self.frames_dropped_until(total_minutes)
    }
}
