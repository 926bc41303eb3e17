mod answer;
mod recording;
mod session;
mod storage_path;
mod transcript;
mod waveform;

pub use answer::Answer;
pub use recording::{AudioFormat, Recording, RecordingId};
pub use session::{Session, SessionPhase, TranscriptionFailureKind};
pub use storage_path::StoragePath;
pub use transcript::Transcript;
pub use waveform::Waveform;
