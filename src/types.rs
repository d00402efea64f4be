//! Type definitions for MPEG audio frame headers
//!
//! This module holds the header bit layout and the enumerations that the
//! raw 2-bit fields decode into.

use std::fmt;

/// Value of the 11-bit frame sync
pub const SYNC_WORD: u16 = 0x7FF;
/// Length of a frame header in bytes
pub const HEADER_SIZE: usize = 4;
/// Length of the optional CRC word following the header
pub const CRC_SIZE: usize = 2;

// Bit positions within the big-endian header word (bit 31 = MSB)
pub const SYNC_SHIFT: u32 = 21;
pub const VERSION_SHIFT: u32 = 19;
pub const LAYER_SHIFT: u32 = 17;
pub const PROTECTION_SHIFT: u32 = 16;
pub const BITRATE_SHIFT: u32 = 12;
pub const SAMPLE_RATE_SHIFT: u32 = 10;
pub const PADDING_SHIFT: u32 = 9;
pub const PRIVATE_SHIFT: u32 = 8;
pub const CHANNEL_MODE_SHIFT: u32 = 6;
pub const MODE_EXT_SHIFT: u32 = 4;
pub const COPYRIGHT_SHIFT: u32 = 3;
pub const ORIGINAL_SHIFT: u32 = 2;
pub const EMPHASIS_SHIFT: u32 = 0;

pub const SYNC_MASK: u32 = 0x7FF;
pub const TWO_BIT_MASK: u32 = 0x3;
pub const BITRATE_MASK: u32 = 0xF;
pub const ONE_BIT_MASK: u32 = 0x1;

/// Extract `mask`-wide field at `shift` from a header word
#[inline]
pub fn field(word: u32, shift: u32, mask: u32) -> u32 {
    (word >> shift) & mask
}

/// MPEG audio version ID (bits 20-19)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "diagnostics", derive(serde::Serialize))]
pub enum MpegVersion {
    /// MPEG-2.5, unofficial low sample rate extension (00)
    Mpeg25,
    /// Reserved (01)
    Reserved,
    /// MPEG-2, ISO/IEC 13818-3 (10)
    Mpeg2,
    /// MPEG-1, ISO/IEC 11172-3 (11)
    Mpeg1,
}

impl MpegVersion {
    /// Decode the two version bits
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => MpegVersion::Mpeg25,
            0b01 => MpegVersion::Reserved,
            0b10 => MpegVersion::Mpeg2,
            _ => MpegVersion::Mpeg1,
        }
    }

    /// Encode back to the two version bits
    pub fn bits(self) -> u8 {
        match self {
            MpegVersion::Mpeg25 => 0b00,
            MpegVersion::Reserved => 0b01,
            MpegVersion::Mpeg2 => 0b10,
            MpegVersion::Mpeg1 => 0b11,
        }
    }
}

impl fmt::Display for MpegVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MpegVersion::Mpeg1 => write!(f, "MPEG-1"),
            MpegVersion::Mpeg2 => write!(f, "MPEG-2"),
            MpegVersion::Mpeg25 => write!(f, "MPEG-2.5"),
            MpegVersion::Reserved => write!(f, "reserved"),
        }
    }
}

/// Layer description (bits 18-17)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "diagnostics", derive(serde::Serialize))]
pub enum Layer {
    /// Reserved (00)
    Reserved,
    /// Layer III (01)
    Layer3,
    /// Layer II (10)
    Layer2,
    /// Layer I (11)
    Layer1,
}

impl Layer {
    /// Decode the two layer bits
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => Layer::Reserved,
            0b01 => Layer::Layer3,
            0b10 => Layer::Layer2,
            _ => Layer::Layer1,
        }
    }

    /// Encode back to the two layer bits
    pub fn bits(self) -> u8 {
        match self {
            Layer::Reserved => 0b00,
            Layer::Layer3 => 0b01,
            Layer::Layer2 => 0b10,
            Layer::Layer1 => 0b11,
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layer::Layer1 => write!(f, "Layer I"),
            Layer::Layer2 => write!(f, "Layer II"),
            Layer::Layer3 => write!(f, "Layer III"),
            Layer::Reserved => write!(f, "reserved layer"),
        }
    }
}

/// Channel mode (bits 7-6)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "diagnostics", derive(serde::Serialize))]
pub enum ChannelMode {
    /// Standard stereo (00)
    Stereo,
    /// Joint stereo, see mode extension (01)
    JointStereo,
    /// Two independent mono channels (10)
    DualChannel,
    /// Single channel (11)
    Mono,
}

impl ChannelMode {
    /// Decode the two channel mode bits; every value is valid
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => ChannelMode::Stereo,
            0b01 => ChannelMode::JointStereo,
            0b10 => ChannelMode::DualChannel,
            _ => ChannelMode::Mono,
        }
    }

    /// Encode back to the two channel mode bits
    pub fn bits(self) -> u8 {
        match self {
            ChannelMode::Stereo => 0b00,
            ChannelMode::JointStereo => 0b01,
            ChannelMode::DualChannel => 0b10,
            ChannelMode::Mono => 0b11,
        }
    }

    /// Number of audio channels carried by the frame
    pub fn channel_count(self) -> u8 {
        match self {
            ChannelMode::Mono => 1,
            _ => 2,
        }
    }
}

impl fmt::Display for ChannelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelMode::Stereo => write!(f, "Stereo"),
            ChannelMode::JointStereo => write!(f, "Joint Stereo"),
            ChannelMode::DualChannel => write!(f, "Dual Channel"),
            ChannelMode::Mono => write!(f, "Mono"),
        }
    }
}

/// De-emphasis to apply after decoding (bits 1-0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "diagnostics", derive(serde::Serialize))]
pub enum Emphasis {
    /// No emphasis (00)
    None,
    /// 50/15 microseconds (01)
    Ms50_15,
    /// Reserved (10)
    Reserved,
    /// CCITT J.17 (11)
    CcittJ17,
}

impl Emphasis {
    /// Decode the two emphasis bits
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => Emphasis::None,
            0b01 => Emphasis::Ms50_15,
            0b10 => Emphasis::Reserved,
            _ => Emphasis::CcittJ17,
        }
    }
}

impl fmt::Display for Emphasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Emphasis::None => write!(f, "none"),
            Emphasis::Ms50_15 => write!(f, "50/15 ms"),
            Emphasis::Reserved => write!(f, "reserved"),
            Emphasis::CcittJ17 => write!(f, "CCITT J.17"),
        }
    }
}

/// Joint stereo coding tools selected by the mode extension bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "diagnostics", derive(serde::Serialize))]
pub enum StereoExtension {
    /// Layer I/II: intensity stereo applies from subband `start` to 31
    Bands { start: u8 },
    /// Layer III: which of intensity and mid/side stereo are switched on
    Layer3 { intensity: bool, mid_side: bool },
}

impl StereoExtension {
    /// Interpret the mode extension bits for `layer`
    pub fn decode(layer: Layer, mode_extension: u8) -> Option<Self> {
        let bits = mode_extension & 0b11;
        match layer {
            Layer::Layer1 | Layer::Layer2 => Some(StereoExtension::Bands { start: 4 * (bits + 1) }),
            Layer::Layer3 => Some(StereoExtension::Layer3 {
                intensity: bits & 0b01 != 0,
                mid_side: bits & 0b10 != 0,
            }),
            Layer::Reserved => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits_round_trip_for_all_two_bit_values() {
        for bits in 0u8..4 {
            assert_eq!(MpegVersion::from_bits(bits).bits(), bits);
            assert_eq!(Layer::from_bits(bits).bits(), bits);
            assert_eq!(ChannelMode::from_bits(bits).bits(), bits);
        }
    }

    #[test]
    fn test_reserved_bit_patterns() {
        assert_eq!(MpegVersion::from_bits(0b01), MpegVersion::Reserved);
        assert_eq!(Layer::from_bits(0b00), Layer::Reserved);
        assert_eq!(Emphasis::from_bits(0b10), Emphasis::Reserved);
    }

    #[test]
    fn test_channel_count() {
        assert_eq!(ChannelMode::Mono.channel_count(), 1);
        assert_eq!(ChannelMode::Stereo.channel_count(), 2);
        assert_eq!(ChannelMode::JointStereo.channel_count(), 2);
        assert_eq!(ChannelMode::DualChannel.channel_count(), 2);
    }

    #[test]
    fn test_stereo_extension_layer12_bands() {
        let starts: Vec<u8> = (0u8..4)
            .map(|bits| match StereoExtension::decode(Layer::Layer2, bits) {
                Some(StereoExtension::Bands { start }) => start,
                other => panic!("unexpected extension {:?}", other),
            })
            .collect();
        assert_eq!(starts, vec![4, 8, 12, 16]);
    }

    #[test]
    fn test_stereo_extension_layer3_flags() {
        assert_eq!(
            StereoExtension::decode(Layer::Layer3, 0b00),
            Some(StereoExtension::Layer3 { intensity: false, mid_side: false })
        );
        assert_eq!(
            StereoExtension::decode(Layer::Layer3, 0b01),
            Some(StereoExtension::Layer3 { intensity: true, mid_side: false })
        );
        assert_eq!(
            StereoExtension::decode(Layer::Layer3, 0b10),
            Some(StereoExtension::Layer3 { intensity: false, mid_side: true })
        );
        assert_eq!(
            StereoExtension::decode(Layer::Layer3, 0b11),
            Some(StereoExtension::Layer3 { intensity: true, mid_side: true })
        );
        assert_eq!(StereoExtension::decode(Layer::Reserved, 0b11), None);
    }

    #[test]
    fn test_field_extraction() {
        let word = 0xFFFB_900C;
        assert_eq!(field(word, SYNC_SHIFT, SYNC_MASK), SYNC_WORD as u32);
        assert_eq!(field(word, VERSION_SHIFT, TWO_BIT_MASK), 0b11);
        assert_eq!(field(word, LAYER_SHIFT, TWO_BIT_MASK), 0b01);
        assert_eq!(field(word, BITRATE_SHIFT, BITRATE_MASK), 9);
        assert_eq!(field(word, EMPHASIS_SHIFT, TWO_BIT_MASK), 0);
    }
}
