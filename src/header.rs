//! MPEG audio frame header parsing
//!
//! A frame header is the first 32 bits of every MPEG audio frame:
//!
//! ```text
//! AAAAAAAA AAABBCCD EEEEFFGH IIJJKLMM
//! ```
//!
//! | Field | Bits | Meaning |
//! |---|---|---|
//! | A | 31-21 | sync word, all ones |
//! | B | 20-19 | version: 00=2.5, 01=reserved, 10=2, 11=1 |
//! | C | 18-17 | layer: 00=reserved, 01=III, 10=II, 11=I |
//! | D | 16 | protection: 0 = CRC follows, 1 = no CRC |
//! | E | 15-12 | bitrate index |
//! | F | 11-10 | sampling rate index |
//! | G | 9 | padding |
//! | H | 8 | private |
//! | I | 7-6 | channel mode |
//! | J | 5-4 | mode extension |
//! | K | 3 | copyright |
//! | L | 2 | original |
//! | M | 1-0 | emphasis |

use std::fmt;

use log::{debug, trace};

use crate::config::ParserConfig;
use crate::derived;
use crate::error::{HeaderError, HeaderResult};
use crate::types::*;

/// A validated MPEG audio frame header
///
/// Only obtainable through parsing, so every instance satisfies the
/// sync, version, layer, sampling rate and bitrate index checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHeader {
    sync_word: u16,
    version: MpegVersion,
    layer: Layer,
    is_protected: bool,
    bitrate_index: u8,
    sampling_rate_index: u8,
    is_padded: bool,
    is_private: bool,
    channel_mode: ChannelMode,
    mode_extension: u8,
    is_copyrighted: bool,
    is_original: bool,
    emphasis: u8,
}

impl FrameHeader {
    /// Parse the first 4 bytes of `buf` with the default (strict) policy.
    ///
    /// Bytes beyond the fourth are ignored.
    pub fn parse(buf: &[u8]) -> HeaderResult<Self> {
        Self::parse_with(buf, &ParserConfig::default())
    }

    /// Parse the first 4 bytes of `buf` under `config`
    pub fn parse_with(buf: &[u8], config: &ParserConfig) -> HeaderResult<Self> {
        let bytes: [u8; HEADER_SIZE] = match buf.get(..HEADER_SIZE) {
            Some(head) => [head[0], head[1], head[2], head[3]],
            None => {
                trace!("Rejecting {}-byte header window", buf.len());
                return Err(HeaderError::TooShort { len: buf.len() });
            }
        };
        let word = u32::from_be_bytes(bytes);

        Self::from_word(word, config).map_err(|err| {
            trace!("Rejecting header 0x{:08X}: {}", word, err);
            err
        })
    }

    /// Validate and decode a header word already assembled big-endian
    pub fn from_word(word: u32, config: &ParserConfig) -> HeaderResult<Self> {
        let sync_word = field(word, SYNC_SHIFT, SYNC_MASK) as u16;
        if sync_word != SYNC_WORD {
            return Err(HeaderError::InvalidSync { sync: sync_word });
        }

        let version_bits = field(word, VERSION_SHIFT, TWO_BIT_MASK) as u8;
        let version = MpegVersion::from_bits(version_bits);
        if !config.accepts_version(version) {
            return Err(HeaderError::InvalidVersion { bits: version_bits });
        }

        let layer = Layer::from_bits(field(word, LAYER_SHIFT, TWO_BIT_MASK) as u8);
        if layer == Layer::Reserved {
            return Err(HeaderError::InvalidLayer);
        }

        let sampling_rate_index = field(word, SAMPLE_RATE_SHIFT, TWO_BIT_MASK) as u8;
        if sampling_rate_index == 0b11 {
            return Err(HeaderError::InvalidSampleRateIndex);
        }

        let bitrate_index = field(word, BITRATE_SHIFT, BITRATE_MASK) as u8;
        if bitrate_index == 0b0000 || bitrate_index == 0b1111 {
            return Err(HeaderError::InvalidBitrateIndex { index: bitrate_index });
        }

        Ok(FrameHeader {
            sync_word,
            version,
            layer,
            is_protected: field(word, PROTECTION_SHIFT, ONE_BIT_MASK) != 0,
            bitrate_index,
            sampling_rate_index,
            is_padded: field(word, PADDING_SHIFT, ONE_BIT_MASK) != 0,
            is_private: field(word, PRIVATE_SHIFT, ONE_BIT_MASK) != 0,
            channel_mode: ChannelMode::from_bits(field(word, CHANNEL_MODE_SHIFT, TWO_BIT_MASK) as u8),
            mode_extension: field(word, MODE_EXT_SHIFT, TWO_BIT_MASK) as u8,
            is_copyrighted: field(word, COPYRIGHT_SHIFT, ONE_BIT_MASK) != 0,
            is_original: field(word, ORIGINAL_SHIFT, ONE_BIT_MASK) != 0,
            emphasis: field(word, EMPHASIS_SHIFT, TWO_BIT_MASK) as u8,
        })
    }

    /// Rebuild the 32-bit header word from the decoded fields
    pub fn raw(&self) -> u32 {
        (u32::from(self.sync_word) << SYNC_SHIFT)
            | (u32::from(self.version.bits()) << VERSION_SHIFT)
            | (u32::from(self.layer.bits()) << LAYER_SHIFT)
            | (u32::from(self.is_protected) << PROTECTION_SHIFT)
            | (u32::from(self.bitrate_index) << BITRATE_SHIFT)
            | (u32::from(self.sampling_rate_index) << SAMPLE_RATE_SHIFT)
            | (u32::from(self.is_padded) << PADDING_SHIFT)
            | (u32::from(self.is_private) << PRIVATE_SHIFT)
            | (u32::from(self.channel_mode.bits()) << CHANNEL_MODE_SHIFT)
            | (u32::from(self.mode_extension) << MODE_EXT_SHIFT)
            | (u32::from(self.is_copyrighted) << COPYRIGHT_SHIFT)
            | (u32::from(self.is_original) << ORIGINAL_SHIFT)
            | (u32::from(self.emphasis) << EMPHASIS_SHIFT)
    }

    pub fn sync_word(&self) -> u16 {
        self.sync_word
    }

    pub fn version(&self) -> MpegVersion {
        self.version
    }

    pub fn layer(&self) -> Layer {
        self.layer
    }

    /// True when the protection bit is set, meaning no CRC follows the header
    pub fn is_protected(&self) -> bool {
        self.is_protected
    }

    /// True when a 16-bit CRC follows the header
    pub fn has_crc(&self) -> bool {
        !self.is_protected
    }

    /// Header length including the CRC word, if any
    pub fn header_len(&self) -> usize {
        if self.has_crc() {
            HEADER_SIZE + CRC_SIZE
        } else {
            HEADER_SIZE
        }
    }

    pub fn bitrate_index(&self) -> u8 {
        self.bitrate_index
    }

    pub fn sampling_rate_index(&self) -> u8 {
        self.sampling_rate_index
    }

    pub fn is_padded(&self) -> bool {
        self.is_padded
    }

    pub fn is_private(&self) -> bool {
        self.is_private
    }

    pub fn channel_mode(&self) -> ChannelMode {
        self.channel_mode
    }

    pub fn channel_count(&self) -> u8 {
        self.channel_mode.channel_count()
    }

    /// Raw mode extension bits, meaningful only in joint stereo
    pub fn mode_extension(&self) -> u8 {
        self.mode_extension
    }

    /// Decoded mode extension; `None` unless the channel mode is joint stereo
    pub fn stereo_extension(&self) -> Option<StereoExtension> {
        match self.channel_mode {
            ChannelMode::JointStereo => StereoExtension::decode(self.layer, self.mode_extension),
            _ => None,
        }
    }

    pub fn is_copyrighted(&self) -> bool {
        self.is_copyrighted
    }

    pub fn is_original(&self) -> bool {
        self.is_original
    }

    /// Raw emphasis bits
    pub fn emphasis(&self) -> u8 {
        self.emphasis
    }

    pub fn emphasis_kind(&self) -> Emphasis {
        Emphasis::from_bits(self.emphasis)
    }

    /// See [`derived::sample_rate`]
    pub fn sample_rate(&self) -> Option<u32> {
        derived::sample_rate(self)
    }

    /// See [`derived::bitrate`]
    pub fn bitrate(&self) -> Option<u32> {
        derived::bitrate(self)
    }

    /// See [`derived::frame_size`]
    pub fn frame_size(&self) -> Option<u32> {
        derived::frame_size(self)
    }

    /// See [`derived::samples_per_frame`]
    pub fn samples_per_frame(&self) -> Option<u32> {
        derived::samples_per_frame(self)
    }

    /// See [`derived::frame_duration_us`]
    pub fn frame_duration_us(&self) -> Option<u64> {
        derived::frame_duration_us(self)
    }
}

impl fmt::Display for FrameHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.version, self.layer)?;
        match self.bitrate() {
            Some(kbps) => write!(f, " {} kbps", kbps)?,
            None => write!(f, " ? kbps")?,
        }
        match self.sample_rate() {
            Some(hz) => write!(f, " {} Hz", hz)?,
            None => write!(f, " ? Hz")?,
        }
        write!(f, " {}", self.channel_mode)?;
        if self.has_crc() {
            write!(f, ", CRC")?;
        }
        if self.is_padded {
            write!(f, ", padded")?;
        }
        if self.is_private {
            write!(f, ", private")?;
        }
        if self.is_copyrighted {
            write!(f, ", copyright")?;
        }
        if self.is_original {
            write!(f, ", original")?;
        }
        if self.emphasis != 0 {
            write!(f, ", emphasis {}", self.emphasis_kind())?;
        }
        write!(f, " (0x{:08X})", self.raw())
    }
}

/// Header parser bound to a [`ParserConfig`]
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderParser {
    config: ParserConfig,
}

impl HeaderParser {
    /// Create a parser applying `config` to every header
    pub fn new(config: ParserConfig) -> Self {
        if config != ParserConfig::default() {
            debug!("Header parser using non-default policy: {:?}", config);
        }
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse the first 4 bytes of `buf`
    pub fn parse(&self, buf: &[u8]) -> HeaderResult<FrameHeader> {
        FrameHeader::parse_with(buf, &self.config)
    }
}

/// Parse the first 4 bytes of `buf` with the default policy
pub fn parse_header(buf: &[u8]) -> HeaderResult<FrameHeader> {
    FrameHeader::parse(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mpeg1_layer3_fields() {
        let h = FrameHeader::parse(&[0xFF, 0xFB, 0x90, 0x0C]).expect("valid header");
        assert_eq!(h.sync_word(), 0x7FF);
        assert_eq!(h.version(), MpegVersion::Mpeg1);
        assert_eq!(h.layer(), Layer::Layer3);
        assert!(h.is_protected());
        assert!(!h.has_crc());
        assert_eq!(h.header_len(), 4);
        assert_eq!(h.bitrate_index(), 9);
        assert_eq!(h.sampling_rate_index(), 0);
        assert!(!h.is_padded());
        assert!(!h.is_private());
        assert_eq!(h.channel_mode(), ChannelMode::Stereo);
        assert_eq!(h.mode_extension(), 0);
        assert!(h.is_copyrighted());
        assert!(h.is_original());
        assert_eq!(h.emphasis(), 0);
        assert_eq!(h.emphasis_kind(), Emphasis::None);
    }

    #[test]
    fn test_crc_present() {
        // Protection bit cleared
        let h = FrameHeader::parse(&[0xFF, 0xFA, 0x90, 0x00]).expect("valid header");
        assert!(!h.is_protected());
        assert!(h.has_crc());
        assert_eq!(h.header_len(), 6);
    }

    #[test]
    fn test_too_short() {
        for len in 0..4 {
            let buf = vec![0xFF; len];
            assert_eq!(FrameHeader::parse(&buf), Err(HeaderError::TooShort { len }));
        }
    }

    #[test]
    fn test_extra_bytes_ignored() {
        let short = FrameHeader::parse(&[0xFF, 0xFB, 0x90, 0x0C]).expect("valid header");
        let long = FrameHeader::parse(&[0xFF, 0xFB, 0x90, 0x0C, 0x00, 0xFF, 0x12]).expect("valid header");
        assert_eq!(short, long);
    }

    #[test]
    fn test_guard_order() {
        // Sync is checked before anything else
        assert_eq!(
            FrameHeader::parse(&[0xBB, 0xF8, 0x00, 0x00]),
            Err(HeaderError::InvalidSync { sync: 0x5DF })
        );
        // Reserved version with reserved layer reports the version
        assert_eq!(
            FrameHeader::parse(&[0xFF, 0xE8, 0x00, 0x00]),
            Err(HeaderError::InvalidVersion { bits: 0b01 })
        );
        // Reserved layer before the sampling rate index
        assert_eq!(FrameHeader::parse(&[0xFF, 0xF8, 0x0C, 0x00]), Err(HeaderError::InvalidLayer));
        // Reserved sampling rate index before the bitrate index
        assert_eq!(
            FrameHeader::parse(&[0xFF, 0xFB, 0xFC, 0x00]),
            Err(HeaderError::InvalidSampleRateIndex)
        );
        assert_eq!(
            FrameHeader::parse(&[0xFF, 0xFB, 0xF0, 0x00]),
            Err(HeaderError::InvalidBitrateIndex { index: 15 })
        );
        assert_eq!(
            FrameHeader::parse(&[0xFF, 0xFB, 0x00, 0x00]),
            Err(HeaderError::InvalidBitrateIndex { index: 0 })
        );
    }

    #[test]
    fn test_mpeg25_policy() {
        let bytes = [0xFF, 0xE3, 0x88, 0xC4];
        assert_eq!(FrameHeader::parse(&bytes), Err(HeaderError::InvalidVersion { bits: 0b00 }));

        let h = HeaderParser::new(ParserConfig::lenient()).parse(&bytes).expect("lenient parse");
        assert_eq!(h.version(), MpegVersion::Mpeg25);

        // Reserved stays rejected regardless of policy
        assert_eq!(
            HeaderParser::new(ParserConfig::lenient()).parse(&[0xFF, 0xEB, 0x90, 0x00]),
            Err(HeaderError::InvalidVersion { bits: 0b01 })
        );
    }

    #[test]
    fn test_raw_reconstructs_word() {
        for word in [0xFFFB_900Cu32, 0xFFF5_84C4, 0xFFFF_E6FF, 0xFFF2_A87D] {
            let h = FrameHeader::parse(&word.to_be_bytes()).expect("valid header");
            assert_eq!(h.raw(), word, "raw() should rebuild 0x{:08X}", word);
        }
    }

    #[test]
    fn test_stereo_extension_only_in_joint_stereo() {
        // Joint stereo, Layer III, mode extension 0b10
        let joint = FrameHeader::parse(&[0xFF, 0xFB, 0x90, 0x64]).expect("valid header");
        assert_eq!(joint.channel_mode(), ChannelMode::JointStereo);
        assert_eq!(
            joint.stereo_extension(),
            Some(StereoExtension::Layer3 { intensity: false, mid_side: true })
        );

        // Same extension bits in plain stereo are ignored
        let stereo = FrameHeader::parse(&[0xFF, 0xFB, 0x90, 0x24]).expect("valid header");
        assert_eq!(stereo.mode_extension(), 0b10);
        assert_eq!(stereo.stereo_extension(), None);
    }

    #[test]
    fn test_display() {
        let h = FrameHeader::parse(&[0xFF, 0xFB, 0x90, 0x0C]).expect("valid header");
        assert_eq!(
            h.to_string(),
            "MPEG-1 Layer III 128 kbps 44100 Hz Stereo, copyright, original (0xFFFB900C)"
        );

        let h = FrameHeader::parse(&[0xFF, 0xF4, 0x44, 0xC5]).expect("valid header");
        assert_eq!(
            h.to_string(),
            "MPEG-2 Layer II 32 kbps 24000 Hz Mono, CRC, original, emphasis 50/15 ms (0xFFF444C5)"
        );
    }

    #[test]
    fn test_parse_header_matches_default_parser() {
        let bytes = [0xFF, 0xFB, 0x90, 0x0C];
        assert_eq!(parse_header(&bytes), HeaderParser::default().parse(&bytes));
    }
}
