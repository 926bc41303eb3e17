use semporna::application::ports::TranscriptionError;
use semporna::infrastructure::speech::parse_mel_filters;

// 80 mel bins over 201 FFT bins, the layout of the shipped filterbank file.
const NUM_MEL_BINS: usize = 80;
const EXPECTED_VALUES: usize = NUM_MEL_BINS * 201;

#[test]
fn given_filter_bytes_when_parsing_then_values_are_little_endian_f32() {
    let mut bytes = Vec::with_capacity(EXPECTED_VALUES * 4);
    bytes.extend_from_slice(&1.0f32.to_le_bytes());
    bytes.extend_from_slice(&(-0.5f32).to_le_bytes());
    bytes.extend_from_slice(&0.25f32.to_le_bytes());
    bytes.resize(EXPECTED_VALUES * 4, 0);

    let filters = parse_mel_filters(&bytes, NUM_MEL_BINS).unwrap();

    assert_eq!(filters.len(), EXPECTED_VALUES);
    assert_eq!(filters[0], 1.0);
    assert_eq!(filters[1], -0.5);
    assert_eq!(filters[2], 0.25);
    assert_eq!(filters[3], 0.0);
}

#[test]
fn given_truncated_file_when_parsing_then_returns_model_load_failed() {
    let bytes = vec![0u8; 100];

    let result = parse_mel_filters(&bytes, NUM_MEL_BINS);

    assert!(matches!(
        result,
        Err(TranscriptionError::ModelLoadFailed(_))
    ));
}

#[test]
fn given_oversized_file_when_parsing_then_extra_bytes_are_ignored() {
    let bytes = vec![0u8; (EXPECTED_VALUES + 16) * 4];

    let filters = parse_mel_filters(&bytes, NUM_MEL_BINS).unwrap();

    assert_eq!(filters.len(), EXPECTED_VALUES);
}
