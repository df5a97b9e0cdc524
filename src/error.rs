//! Error types for timecode operations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for timecode operations.
pub type Result<T> = std::result::Result<T, TimecodeError>;

/// Errors that can occur during timecode operations.
///
/// Every error is reported synchronously by the operation that detected it;
/// no operation recovers silently or returns a partial result.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimecodeError {
    /// A computed or supplied temporal value exceeds its representable bound.
    #[error("Timecode range error: {message}")]
    Range {
        /// Description of the bound that was exceeded.
        message: String,
    },

    /// A string does not match the canonical timecode grammar.
    #[error("Invalid timecode format: {message}")]
    Format {
        /// Description of the format error.
        message: String,
    },

    /// A timecode component value is outside its valid range.
    #[error("Invalid timecode component: {component} = {value} (max {max})")]
    InvalidComponent {
        /// Name of the invalid component (hours, minutes, seconds, frames, pair).
        component: String,
        /// The invalid value that was provided.
        value: u32,
        /// The maximum allowed value for this component.
        max: u32,
    },

    /// The frames-per-second rate is zero.
    #[error("Frames per second must be positive")]
    ZeroFrameRate,

    /// Drop-frame requested for a frame rate outside the 30-frame family.
    #[error("Drop-frame is not defined for {frames_per_second} fps")]
    DropFrameRate {
        /// The offending nominal frame rate.
        frames_per_second: u16,
    },

    /// Pair index supplied for a classic rate, or omitted above 30 fps.
    #[error("Invalid pair index for {frames_per_second} fps")]
    PairIndex {
        /// The nominal frame rate the pair index disagreed with.
        frames_per_second: u16,
    },

    /// A component tuple names a frame number that drop-frame counting skips.
    #[error("Frame {frames} does not exist at minute {minutes} in drop-frame counting")]
    DroppedFrameNumber {
        /// Minutes component of the offending tuple.
        minutes: u8,
        /// Within-second frame index of the offending tuple.
        frames: u16,
    },

    /// A comparison or duration calculation was invoked without an operand.
    #[error("Missing operand for {operation}")]
    MissingOperand {
        /// The operation that was missing an operand.
        operation: String,
    },
}

impl TimecodeError {
    /// Create a range error.
    pub fn range(message: impl Into<String>) -> Self {
        Self::Range {
            message: message.into(),
        }
    }

    /// Create a format error.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::Format {
            message: message.into(),
        }
    }

    /// Create an invalid component error.
    pub fn invalid_component(component: impl Into<String>, value: u32, max: u32) -> Self {
        Self::InvalidComponent {
            component: component.into(),
            value,
            max,
        }
    }

    /// Create a missing operand error.
    pub fn missing_operand(operation: impl Into<String>) -> Self {
        Self::MissingOperand {
            operation: operation.into(),
        }
    }
}
