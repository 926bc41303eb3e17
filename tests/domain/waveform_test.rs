use semporna::domain::Waveform;

#[test]
fn given_one_second_of_samples_when_measuring_duration_then_returns_one_second() {
    let waveform = Waveform::new(vec![0.0; 16_000], 16_000);

    assert!((waveform.duration_secs() - 1.0).abs() < f32::EPSILON);
}

#[test]
fn given_half_second_of_samples_when_measuring_duration_then_returns_half_second() {
    let waveform = Waveform::new(vec![0.0; 8_000], 16_000);

    assert!((waveform.duration_secs() - 0.5).abs() < f32::EPSILON);
}

#[test]
fn given_zero_sample_rate_when_measuring_duration_then_returns_zero() {
    let waveform = Waveform::new(vec![0.0; 100], 0);

    assert_eq!(waveform.duration_secs(), 0.0);
}

#[test]
fn given_empty_waveform_when_inspected_then_len_is_zero() {
    let waveform = Waveform::new(Vec::new(), 16_000);

    assert!(waveform.is_empty());
    assert_eq!(waveform.len(), 0);
    assert_eq!(waveform.duration_secs(), 0.0);
}
