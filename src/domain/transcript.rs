use chrono::{DateTime, Utc};

use super::RecordingId;

/// Text recognized from one recording. Always tied to the recording it came
/// from, never to the session as a whole.
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    pub recording_id: RecordingId,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Transcript {
    pub fn new(recording_id: RecordingId, text: String) -> Self {
        Self {
            recording_id,
            text,
            created_at: Utc::now(),
        }
    }
}
