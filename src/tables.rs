//! Lookup tables for MPEG audio frame headers
//!
//! Sample rates in Hz and bitrates in kbps, indexed by the raw header
//! fields. Slots for reserved or free-format indices hold `None`.

/// Sample rates indexed by sampling rate index (slot 3 is reserved)
pub const SAMPLE_RATES_MPEG1: [Option<u32>; 4] = [Some(44100), Some(48000), Some(32000), None];
pub const SAMPLE_RATES_MPEG2: [Option<u32>; 4] = [Some(22050), Some(24000), Some(16000), None];
pub const SAMPLE_RATES_MPEG25: [Option<u32>; 4] = [Some(11025), Some(12000), Some(8000), None];

/// Column of the bitrate tables for each layer
pub const LAYER3_COLUMN: usize = 0;
pub const LAYER2_COLUMN: usize = 1;
pub const LAYER1_COLUMN: usize = 2;

/// MPEG-1 bitrates, index: [bitrate_index][Layer III, Layer II, Layer I]
/// Row 0 is free format and row 15 is reserved.
pub const BITRATES_MPEG1: [[Option<u32>; 3]; 16] = [
    [None, None, None],                      // 0000 free
    [Some(32), Some(32), Some(32)],          // 0001
    [Some(40), Some(48), Some(64)],          // 0010
    [Some(48), Some(56), Some(96)],          // 0011
    [Some(56), Some(64), Some(128)],         // 0100
    [Some(64), Some(80), Some(160)],         // 0101
    [Some(80), Some(96), Some(192)],         // 0110
    [Some(96), Some(112), Some(224)],        // 0111
    [Some(112), Some(128), Some(256)],       // 1000
    [Some(128), Some(160), Some(288)],       // 1001
    [Some(160), Some(192), Some(320)],       // 1010
    [Some(192), Some(224), Some(352)],       // 1011
    [Some(224), Some(256), Some(384)],       // 1100
    [Some(256), Some(320), Some(416)],       // 1101
    [Some(320), Some(384), Some(448)],       // 1110
    [None, None, None],                      // 1111 reserved
];

/// MPEG-2 and MPEG-2.5 bitrates, same layout as [`BITRATES_MPEG1`]
pub const BITRATES_MPEG2: [[Option<u32>; 3]; 16] = [
    [None, None, None],                      // 0000 free
    [Some(8), Some(8), Some(32)],            // 0001
    [Some(16), Some(16), Some(48)],          // 0010
    [Some(24), Some(24), Some(56)],          // 0011
    [Some(32), Some(32), Some(64)],          // 0100
    [Some(40), Some(40), Some(80)],          // 0101
    [Some(48), Some(48), Some(96)],          // 0110
    [Some(56), Some(56), Some(112)],         // 0111
    [Some(64), Some(64), Some(128)],         // 1000
    [Some(80), Some(80), Some(144)],         // 1001
    [Some(96), Some(96), Some(160)],         // 1010
    [Some(112), Some(112), Some(176)],       // 1011
    [Some(128), Some(128), Some(192)],       // 1100
    [Some(144), Some(144), Some(224)],       // 1101
    [Some(160), Some(160), Some(256)],       // 1110
    [None, None, None],                      // 1111 reserved
];

/// Frame size coefficients: 12 slots of 4 bytes for Layer I,
/// 1152 samples / 8 bits per byte for Layer II/III
pub const LAYER1_FRAME_COEFFICIENT: f64 = 48.0;
pub const LAYER23_FRAME_COEFFICIENT: f64 = 144.0;

/// PCM samples carried by one frame
pub const SAMPLES_PER_FRAME_LAYER1: u32 = 384;
pub const SAMPLES_PER_FRAME_LAYER2: u32 = 1152;
pub const SAMPLES_PER_FRAME_LAYER3_MPEG1: u32 = 1152;
pub const SAMPLES_PER_FRAME_LAYER3_LSF: u32 = 576;
