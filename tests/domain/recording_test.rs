use semporna::domain::{AudioFormat, Recording, RecordingId};

#[test]
fn given_mpeg_mime_variants_when_parsing_then_all_map_to_mp3() {
    for mime in ["audio/mpeg", "audio/mp3", "audio/mpeg3"] {
        assert_eq!(AudioFormat::from_mime(mime), Some(AudioFormat::Mp3));
    }
}

#[test]
fn given_wav_mime_variants_when_parsing_then_all_map_to_wav() {
    for mime in ["audio/wav", "audio/x-wav", "audio/wave"] {
        assert_eq!(AudioFormat::from_mime(mime), Some(AudioFormat::Wav));
    }
}

#[test]
fn given_unknown_mime_when_parsing_then_returns_none() {
    assert_eq!(AudioFormat::from_mime("video/mp4"), None);
    assert_eq!(AudioFormat::from_mime("application/octet-stream"), None);
}

#[test]
fn given_filename_with_extension_when_parsing_then_format_is_detected() {
    assert_eq!(
        AudioFormat::from_filename("talk.mp3"),
        Some(AudioFormat::Mp3)
    );
    assert_eq!(
        AudioFormat::from_filename("Session.MP3"),
        Some(AudioFormat::Mp3)
    );
    assert_eq!(
        AudioFormat::from_filename("take.wav"),
        Some(AudioFormat::Wav)
    );
    assert_eq!(AudioFormat::from_filename("notes.txt"), None);
    assert_eq!(AudioFormat::from_filename("no_extension"), None);
}

#[test]
fn given_format_when_reading_mime_and_extension_then_values_are_canonical() {
    assert_eq!(AudioFormat::Mp3.as_mime(), "audio/mpeg");
    assert_eq!(AudioFormat::Mp3.extension(), "mp3");
    assert_eq!(AudioFormat::Wav.as_mime(), "audio/wav");
    assert_eq!(AudioFormat::Wav.extension(), "wav");
}

#[test]
fn given_new_recording_when_created_then_fields_are_populated() {
    let recording = Recording::new("talk.mp3".to_string(), AudioFormat::Mp3, 4096);

    assert_eq!(recording.filename, "talk.mp3");
    assert_eq!(recording.format, AudioFormat::Mp3);
    assert_eq!(recording.size_bytes, 4096);
}

#[test]
fn given_two_recordings_when_created_then_ids_are_unique() {
    let a = Recording::new("a.mp3".to_string(), AudioFormat::Mp3, 1);
    let b = Recording::new("b.mp3".to_string(), AudioFormat::Mp3, 1);

    assert_ne!(a.id, b.id);
}

#[test]
fn given_recording_id_when_displayed_then_matches_uuid() {
    let id = RecordingId::new();

    assert_eq!(format!("{}", id), id.as_uuid().to_string());
}
