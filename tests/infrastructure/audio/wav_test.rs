use std::io::Cursor;

use semporna::domain::Waveform;
use semporna::infrastructure::audio::wav::encode_wav;

#[test]
fn given_waveform_when_encoding_then_header_describes_16bit_mono_pcm() {
    let waveform = Waveform::new(vec![0.0, 0.25, -0.25, 0.5], 16_000);

    let bytes = encode_wav(&waveform).unwrap();

    let reader = hound::WavReader::new(Cursor::new(bytes)).unwrap();
    let spec = reader.spec();
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, 16_000);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(spec.sample_format, hound::SampleFormat::Int);
    assert_eq!(reader.len(), 4);
}

#[test]
fn given_waveform_when_encoding_then_samples_round_trip_as_pcm16() {
    let waveform = Waveform::new(vec![0.0, 0.5, -0.5, 1.0], 8_000);

    let bytes = encode_wav(&waveform).unwrap();

    let mut reader = hound::WavReader::new(Cursor::new(bytes)).unwrap();
    let decoded: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
    assert_eq!(decoded[0], 0);
    assert!((decoded[1] as i32 - 16383).abs() <= 1);
    assert!((decoded[2] as i32 + 16383).abs() <= 1);
    assert_eq!(decoded[3], i16::MAX);
}

#[test]
fn given_out_of_range_samples_when_encoding_then_values_are_clamped() {
    let waveform = Waveform::new(vec![2.0, -3.0], 16_000);

    let bytes = encode_wav(&waveform).unwrap();

    let mut reader = hound::WavReader::new(Cursor::new(bytes)).unwrap();
    let decoded: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
    assert_eq!(decoded[0], i16::MAX);
    assert_eq!(decoded[1], -i16::MAX);
}

#[test]
fn given_empty_waveform_when_encoding_then_container_is_valid_and_empty() {
    let waveform = Waveform::new(Vec::new(), 16_000);

    let bytes = encode_wav(&waveform).unwrap();

    let reader = hound::WavReader::new(Cursor::new(bytes)).unwrap();
    assert_eq!(reader.len(), 0);
}
