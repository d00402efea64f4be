//! # MPEG Audio Header Parser
//!
//! A pure Rust parser for the 32-bit header that starts every MPEG audio
//! frame (MPEG-1, MPEG-2 and optionally MPEG-2.5; Layers I, II and III).
//! Parsing validates the header and yields a [`FrameHeader`]; sample rate,
//! bitrate and frame size are derived from it on demand.
//!
//! ```
//! use mpa_header::{FrameHeader, Layer, MpegVersion};
//!
//! let header = FrameHeader::parse(&[0xFF, 0xFB, 0x90, 0x0C]).unwrap();
//! assert_eq!(header.version(), MpegVersion::Mpeg1);
//! assert_eq!(header.layer(), Layer::Layer3);
//! assert_eq!(header.bitrate(), Some(128));
//! assert_eq!(header.sample_rate(), Some(44100));
//! assert_eq!(header.frame_size(), Some(417));
//! ```

pub mod config;
pub mod derived;
pub mod error;
pub mod header;
pub mod tables;
pub mod types;

#[cfg(feature = "diagnostics")]
pub mod diagnostics;

#[cfg(feature = "diagnostics")]
pub use diagnostics::HeaderReport;

pub use config::ParserConfig;
pub use derived::{bitrate, frame_duration_us, frame_size, sample_rate, samples_per_frame};
pub use error::{HeaderError, HeaderResult};
pub use header::{parse_header, FrameHeader, HeaderParser};
pub use types::{ChannelMode, Emphasis, Layer, MpegVersion, StereoExtension};
