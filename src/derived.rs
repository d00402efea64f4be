//! Derived playback parameters
//!
//! Sample rate, bitrate and frame size computed from a parsed
//! [`FrameHeader`]. Every function is total: combinations without a
//! standard value yield `None` rather than an error.

use crate::header::FrameHeader;
use crate::tables::*;
use crate::types::{Layer, MpegVersion};

/// Sample rate in Hz
pub fn sample_rate(header: &FrameHeader) -> Option<u32> {
    let rates = match header.version() {
        MpegVersion::Mpeg1 => &SAMPLE_RATES_MPEG1,
        MpegVersion::Mpeg2 => &SAMPLE_RATES_MPEG2,
        MpegVersion::Mpeg25 => &SAMPLE_RATES_MPEG25,
        MpegVersion::Reserved => return None,
    };
    rates
        .get(header.sampling_rate_index() as usize)
        .copied()
        .flatten()
}

/// Bitrate in kbps
pub fn bitrate(header: &FrameHeader) -> Option<u32> {
    let table = match header.version() {
        MpegVersion::Mpeg1 => &BITRATES_MPEG1,
        MpegVersion::Mpeg2 | MpegVersion::Mpeg25 => &BITRATES_MPEG2,
        MpegVersion::Reserved => return None,
    };
    let column = match header.layer() {
        Layer::Layer3 => LAYER3_COLUMN,
        Layer::Layer2 => LAYER2_COLUMN,
        Layer::Layer1 => LAYER1_COLUMN,
        Layer::Reserved => return None,
    };
    table
        .get(header.bitrate_index() as usize)
        .and_then(|row| row[column])
}

/// Frame size in bytes, header included
///
/// Padding adds a single byte for every layer, Layer I included.
pub fn frame_size(header: &FrameHeader) -> Option<u32> {
    let coefficient = match header.layer() {
        Layer::Layer1 => LAYER1_FRAME_COEFFICIENT,
        Layer::Layer2 | Layer::Layer3 => LAYER23_FRAME_COEFFICIENT,
        Layer::Reserved => return None,
    };
    let bitrate_bps = bitrate(header)? as f64 * 1000.0;
    let sample_rate = sample_rate(header)? as f64;
    let padding = u32::from(header.is_padded());

    Some((coefficient * bitrate_bps / sample_rate).floor() as u32 + padding)
}

/// Number of PCM samples per channel in one frame
pub fn samples_per_frame(header: &FrameHeader) -> Option<u32> {
    match (header.version(), header.layer()) {
        (_, Layer::Reserved) | (MpegVersion::Reserved, _) => None,
        (_, Layer::Layer1) => Some(SAMPLES_PER_FRAME_LAYER1),
        (_, Layer::Layer2) => Some(SAMPLES_PER_FRAME_LAYER2),
        (MpegVersion::Mpeg1, Layer::Layer3) => Some(SAMPLES_PER_FRAME_LAYER3_MPEG1),
        (_, Layer::Layer3) => Some(SAMPLES_PER_FRAME_LAYER3_LSF),
    }
}

/// Playback duration of one frame in microseconds, rounded down
pub fn frame_duration_us(header: &FrameHeader) -> Option<u64> {
    let samples = u64::from(samples_per_frame(header)?);
    let sample_rate = u64::from(sample_rate(header)?);
    Some(samples * 1_000_000 / sample_rate)
}
