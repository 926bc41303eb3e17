mod local_whisper_transcriber;
mod transcriber_factory;
mod whisper_api_transcriber;

pub use local_whisper_transcriber::{parse_mel_filters, LocalWhisperTranscriber};
pub use transcriber_factory::{TranscriberFactory, TranscriberProvider};
pub use whisper_api_transcriber::WhisperApiTranscriber;
