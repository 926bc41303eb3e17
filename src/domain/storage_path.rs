use std::fmt;

use super::{Recording, RecordingId};

/// Location of a staged object, namespaced by recording id so concurrent or
/// repeated uploads never collide on a shared scratch name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePath(String);

impl StoragePath {
    pub fn new(recording_id: &RecordingId, filename: &str) -> Self {
        Self(format!("{}/{}", recording_id.as_uuid(), filename))
    }

    /// Path of the raw uploaded audio for a recording, kept for playback.
    pub fn source_audio(recording: &Recording) -> Self {
        Self::new(
            &recording.id,
            &format!("source.{}", recording.format.extension()),
        )
    }

    pub fn from_raw(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoragePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
