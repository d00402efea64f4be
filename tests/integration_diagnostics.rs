//! Integration tests for serializable header reports

use mpa_header::{parse_header, HeaderReport};

#[test]
fn test_report_round_trips_through_json() {
    let _ = env_logger::builder().is_test(true).try_init();

    let header = parse_header(&[0xFF, 0xF5, 0x84, 0xC4]).expect("valid header");
    let report = HeaderReport::new(&header);
    assert_eq!(report, header.report());

    let json = report.to_json().expect("report should serialize");
    let value: serde_json::Value = serde_json::from_str(&json).expect("output should be JSON");

    assert_eq!(value["raw"], "0xFFF584C4");
    assert_eq!(value["version"], "Mpeg2");
    assert_eq!(value["layer"], "Layer2");
    assert_eq!(value["channel_mode"], "Mono");
    assert_eq!(value["bitrate_kbps"], 64);
    assert_eq!(value["sample_rate_hz"], 24000);
    assert_eq!(value["frame_size_bytes"], 384);
    assert_eq!(value["samples_per_frame"], 1152);
    assert_eq!(value["frame_duration_us"], 48000);
    assert_eq!(value["has_crc"], false);
}
