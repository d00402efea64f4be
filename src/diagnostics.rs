//! Serializable header reports
//!
//! Snapshot of every header field plus the derived parameters, for tools
//! that want to dump what a stream contains as JSON.
//!
//! This module is only available when the "diagnostics" feature is enabled.

use serde::Serialize;

use crate::header::FrameHeader;
use crate::types::{ChannelMode, Emphasis, Layer, MpegVersion, StereoExtension};

/// Flat view of a parsed header
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderReport {
    /// Header word as found in the stream
    pub raw: String,
    pub version: MpegVersion,
    pub layer: Layer,
    pub is_protected: bool,
    pub has_crc: bool,
    pub bitrate_index: u8,
    pub sampling_rate_index: u8,
    pub is_padded: bool,
    pub is_private: bool,
    pub channel_mode: ChannelMode,
    pub mode_extension: u8,
    pub stereo_extension: Option<StereoExtension>,
    pub is_copyrighted: bool,
    pub is_original: bool,
    pub emphasis: Emphasis,

    /// Derived values, `None` when unavailable
    pub bitrate_kbps: Option<u32>,
    pub sample_rate_hz: Option<u32>,
    pub frame_size_bytes: Option<u32>,
    pub samples_per_frame: Option<u32>,
    pub frame_duration_us: Option<u64>,
}

impl HeaderReport {
    pub fn new(header: &FrameHeader) -> Self {
        Self {
            raw: format!("0x{:08X}", header.raw()),
            version: header.version(),
            layer: header.layer(),
            is_protected: header.is_protected(),
            has_crc: header.has_crc(),
            bitrate_index: header.bitrate_index(),
            sampling_rate_index: header.sampling_rate_index(),
            is_padded: header.is_padded(),
            is_private: header.is_private(),
            channel_mode: header.channel_mode(),
            mode_extension: header.mode_extension(),
            stereo_extension: header.stereo_extension(),
            is_copyrighted: header.is_copyrighted(),
            is_original: header.is_original(),
            emphasis: header.emphasis_kind(),
            bitrate_kbps: header.bitrate(),
            sample_rate_hz: header.sample_rate(),
            frame_size_bytes: header.frame_size(),
            samples_per_frame: header.samples_per_frame(),
            frame_duration_us: header.frame_duration_us(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl FrameHeader {
    /// Build a [`HeaderReport`] for this header
    pub fn report(&self) -> HeaderReport {
        HeaderReport::new(self)
    }
}
