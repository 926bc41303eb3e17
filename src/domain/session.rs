use super::{Recording, Transcript};

/// Why transcription of the current recording failed. Unintelligible audio
/// needs a new recording; the other kinds can be retried as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptionFailureKind {
    ServiceUnavailable,
    Unintelligible,
    TimedOut,
}

impl TranscriptionFailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            Self::Unintelligible => "UNINTELLIGIBLE",
            Self::TimedOut => "TIMED_OUT",
        }
    }
}

/// Where the session stands after the last upload finished processing.
/// Intermediate states are never observable because uploads hold the session
/// write lock from start to finish.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionPhase {
    /// No recording uploaded yet.
    Idle,
    /// The last upload could not be decoded.
    ConversionFailed { message: String },
    /// The last upload decoded but produced no transcript.
    TranscriptionFailed {
        kind: TranscriptionFailureKind,
        message: String,
    },
    /// A transcript exists and questions can be answered against it.
    AwaitingQuestion,
}

impl SessionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::ConversionFailed { .. } => "CONVERSION_FAILED",
            Self::TranscriptionFailed { .. } => "TRANSCRIPTION_FAILED",
            Self::AwaitingQuestion => "AWAITING_QUESTION",
        }
    }
}

/// The single interactive session: at most one current recording and the
/// transcript derived from it.
#[derive(Debug)]
pub struct Session {
    recording: Option<Recording>,
    transcript: Option<Transcript>,
    phase: SessionPhase,
}

impl Session {
    pub fn new() -> Self {
        Self {
            recording: None,
            transcript: None,
            phase: SessionPhase::Idle,
        }
    }

    /// Starts over with a new recording. The previous transcript is dropped
    /// here, before any processing, so a failed re-upload can never leave
    /// answers flowing from the old recording. Returns the replaced
    /// recording so its staged audio can be cleaned up.
    pub fn begin(&mut self, recording: Recording) -> Option<Recording> {
        self.transcript = None;
        self.phase = SessionPhase::Idle;
        self.recording.replace(recording)
    }

    pub fn mark_conversion_failed(&mut self, message: String) {
        self.transcript = None;
        self.phase = SessionPhase::ConversionFailed { message };
    }

    pub fn mark_transcription_failed(&mut self, kind: TranscriptionFailureKind, message: String) {
        self.transcript = None;
        self.phase = SessionPhase::TranscriptionFailed { kind, message };
    }

    pub fn mark_transcribed(&mut self, transcript: Transcript) {
        self.transcript = Some(transcript);
        self.phase = SessionPhase::AwaitingQuestion;
    }

    pub fn recording(&self) -> Option<&Recording> {
        self.recording.as_ref()
    }

    pub fn transcript(&self) -> Option<&Transcript> {
        self.transcript.as_ref()
    }

    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    pub fn can_answer(&self) -> bool {
        matches!(self.phase, SessionPhase::AwaitingQuestion) && self.transcript.is_some()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
