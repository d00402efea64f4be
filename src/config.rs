//! Configuration for the header parser
//!
//! The only policy knob is whether the unofficial MPEG-2.5 extension is
//! accepted. The default configuration rejects it.

use crate::types::MpegVersion;

/// Parser policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParserConfig {
    /// Accept MPEG-2.5 headers (version bits `0b00`)
    pub accept_mpeg25: bool,
}

impl ParserConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// ISO MPEG-1 and MPEG-2 only
    pub fn strict() -> Self {
        Self { accept_mpeg25: false }
    }

    /// Also accept MPEG-2.5
    pub fn lenient() -> Self {
        Self { accept_mpeg25: true }
    }

    pub fn with_mpeg25(mut self, accept: bool) -> Self {
        self.accept_mpeg25 = accept;
        self
    }

    /// Whether a header carrying `version` passes version validation
    pub fn accepts_version(&self, version: MpegVersion) -> bool {
        match version {
            MpegVersion::Mpeg1 | MpegVersion::Mpeg2 => true,
            MpegVersion::Mpeg25 => self.accept_mpeg25,
            MpegVersion::Reserved => false,
        }
    }
}
