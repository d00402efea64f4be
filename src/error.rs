//! Error types for the header parser
//!
//! Every way a 4-byte window can fail to be an MPEG audio frame header
//! is a variant of [`HeaderError`]. All of them are recoverable: the usual
//! reaction is to advance the search window and try again.

use thiserror::Error;

/// Reasons a byte window is not a valid frame header
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HeaderError {
    /// Fewer than 4 bytes were supplied
    #[error("Header too short: need 4 bytes, got {len}")]
    TooShort { len: usize },

    /// The leading 11 bits are not all set
    #[error("Sync word not found: got 0x{sync:03X}")]
    InvalidSync { sync: u16 },

    /// Reserved version bits, or MPEG-2.5 when the parser does not accept it
    #[error("Unsupported MPEG version bits '0b{bits:02b}'")]
    InvalidVersion { bits: u8 },

    /// Reserved layer bits `0b00`
    #[error("Reserved value '0b00' used for layer description")]
    InvalidLayer,

    /// Reserved sampling rate index `0b11`
    #[error("Reserved value '0b11' used for sampling rate index")]
    InvalidSampleRateIndex,

    /// Free format (`0b0000`) or reserved (`0b1111`) bitrate index
    #[error("Unsupported bitrate index '0b{index:04b}'")]
    InvalidBitrateIndex { index: u8 },
}

impl HeaderError {
    /// True when the window does not even start with a sync word.
    ///
    /// A demuxer scanning for frames will usually step one byte on this error
    /// and treat every other variant as a false sync.
    pub fn is_sync_error(&self) -> bool {
        matches!(self, HeaderError::InvalidSync { .. })
    }
}

/// Result type for header parsing
pub type HeaderResult<T> = std::result::Result<T, HeaderError>;
