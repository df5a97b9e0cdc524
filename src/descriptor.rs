//! Videotape descriptor metadata adjacent to the timecode core.

use crate::error::Result;
use crate::value::TimecodeValue;
use serde::{Deserialize, Serialize};

/// Ancillary tape metadata carried alongside timecode values.
///
/// Every property is optional: an absent value means the property does not
/// apply to this tape, which is distinct from a present zero. The timecode
/// core neither reads nor writes these fields; they live and die with the
/// tape entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TapeDescriptor {
    /// Tape manufacturer, when known.
    pub manufacturer: Option<String>,
    /// Tape capacity in minutes, when known.
    pub tape_capacity_minutes: Option<i32>,
    /// Color-frame alignment of the recording, when the tape carries one.
    pub color_frame: Option<i32>,
    /// Start-of-media timecode marker.
    pub start_timecode: Option<TimecodeValue>,
    /// End-of-media timecode marker.
    pub end_timecode: Option<TimecodeValue>,
}

impl TapeDescriptor {
    /// Elapsed duration between the start and end of media markers.
    ///
    /// Fails with `MissingOperand` when either marker is absent.
    pub fn duration(&self) -> Result<TimecodeValue> {
        crate::calculate_duration(self.start_timecode.as_ref(), self.end_timecode.as_ref())
    }
}
