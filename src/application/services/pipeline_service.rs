use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use tokio::sync::RwLock;

use crate::application::ports::{
    AudioConverter, ConversionError, QaModel, QaModelError, StagingStore, StagingStoreError,
    Transcriber, TranscriptionError,
};
use crate::domain::{
    Answer, AudioFormat, Recording, Session, SessionPhase, StoragePath, Transcript,
    TranscriptionFailureKind, Waveform,
};

/// Drives the upload, convert, transcribe and answer steps over the single
/// interactive session. Engine calls are bounded by the configured timeouts
/// so a hung backend can never wedge the session lock forever.
pub struct PipelineService<C, T: ?Sized, Q>
where
    C: AudioConverter,
    T: Transcriber,
    Q: QaModel,
{
    converter: Arc<C>,
    transcriber: Arc<T>,
    qa_model: Arc<Q>,
    staging: Arc<dyn StagingStore>,
    session: RwLock<Session>,
    transcription_timeout: Duration,
    answer_timeout: Duration,
}

impl<C, T: ?Sized, Q> PipelineService<C, T, Q>
where
    C: AudioConverter,
    T: Transcriber,
    Q: QaModel,
{
    pub fn new(
        converter: Arc<C>,
        transcriber: Arc<T>,
        qa_model: Arc<Q>,
        staging: Arc<dyn StagingStore>,
        transcription_timeout: Duration,
        answer_timeout: Duration,
    ) -> Self {
        Self {
            converter,
            transcriber,
            qa_model,
            staging,
            session: RwLock::new(Session::new()),
            transcription_timeout,
            answer_timeout,
        }
    }

    /// Runs a new recording through staging, conversion and transcription.
    /// The session write lock is held for the whole run, so racing uploads
    /// are serialized and readers only ever see settled phases.
    pub async fn process_upload(
        &self,
        filename: String,
        format: AudioFormat,
        data: Bytes,
    ) -> Result<Transcript, PipelineError> {
        let recording = Recording::new(filename, format, data.len() as u64);
        let recording_id = recording.id;
        let source_path = StoragePath::source_audio(&recording);

        let mut session = self.session.write().await;

        if let Some(previous) = session.begin(recording) {
            let stale = StoragePath::source_audio(&previous);
            if let Err(error) = self.staging.delete(&stale).await {
                tracing::warn!(path = %stale, error = %error, "Failed to delete replaced recording");
            }
        }

        self.staging.store(&source_path, data.clone()).await?;

        let waveform = match self.converter.convert(&data, format) {
            Ok(waveform) => waveform,
            Err(error) => {
                tracing::warn!(recording_id = %recording_id, error = %error, "Conversion failed");
                session.mark_conversion_failed(error.to_string());
                return Err(PipelineError::Conversion(error));
            }
        };

        tracing::debug!(
            recording_id = %recording_id,
            duration_secs = waveform.duration_secs(),
            sample_rate = waveform.sample_rate,
            "Recording decoded"
        );

        let text = match self.transcribe_bounded(&waveform).await {
            Ok(text) => text,
            Err(error) => {
                tracing::warn!(recording_id = %recording_id, error = %error, "Transcription failed");
                session.mark_transcription_failed(failure_kind(&error), error.to_string());
                return Err(error);
            }
        };

        let transcript = Transcript::new(recording_id, text);
        session.mark_transcribed(transcript.clone());

        tracing::info!(
            recording_id = %recording_id,
            chars = transcript.text.len(),
            "Recording transcribed"
        );

        Ok(transcript)
    }

    async fn transcribe_bounded(&self, waveform: &Waveform) -> Result<String, PipelineError> {
        let outcome = tokio::time::timeout(
            self.transcription_timeout,
            self.transcriber.transcribe(waveform),
        )
        .await;

        let text = match outcome {
            Ok(Ok(text)) => text,
            Ok(Err(error)) => return Err(PipelineError::Transcription(error)),
            Err(_) => {
                return Err(PipelineError::Timeout {
                    stage: "transcription",
                    seconds: self.transcription_timeout.as_secs(),
                });
            }
        };

        // An engine that succeeds with blank output understood the stream but
        // found no speech in it.
        if text.trim().is_empty() {
            return Err(PipelineError::Transcription(
                TranscriptionError::Unintelligible,
            ));
        }

        Ok(text)
    }

    /// Answers a free-form question against the current transcript.
    pub async fn ask(&self, question: &str) -> Result<Answer, PipelineError> {
        if question.trim().is_empty() {
            return Err(PipelineError::EmptyQuestion);
        }

        // The transcript is copied out and the lock released before the model
        // call, so a slow answer never blocks the next upload.
        let context = {
            let session = self.session.read().await;
            match (session.phase(), session.transcript()) {
                (SessionPhase::AwaitingQuestion, Some(transcript)) => transcript.text.clone(),
                (phase, _) => {
                    return Err(PipelineError::TranscriptNotReady {
                        reason: unanswerable_reason(phase),
                    });
                }
            }
        };

        let outcome =
            tokio::time::timeout(self.answer_timeout, self.qa_model.answer(question, &context))
                .await;

        match outcome {
            Ok(Ok(answer)) => {
                tracing::info!(score = answer.score, "Question answered");
                Ok(answer)
            }
            Ok(Err(error)) => Err(PipelineError::Answering(error)),
            Err(_) => Err(PipelineError::Timeout {
                stage: "answering",
                seconds: self.answer_timeout.as_secs(),
            }),
        }
    }

    /// Returns the current recording and its staged bytes for playback.
    pub async fn source_audio(&self) -> Result<(Recording, Vec<u8>), PipelineError> {
        let recording = {
            let session = self.session.read().await;
            session
                .recording()
                .cloned()
                .ok_or(PipelineError::NoRecording)?
        };

        let path = StoragePath::source_audio(&recording);
        let data = self.staging.fetch(&path).await?;
        Ok((recording, data))
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        let session = self.session.read().await;
        SessionSnapshot {
            phase: session.phase().clone(),
            recording: session.recording().cloned(),
            transcript: session.transcript().cloned(),
        }
    }
}

/// Point-in-time copy of the session for the status endpoint.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    pub recording: Option<Recording>,
    pub transcript: Option<Transcript>,
}

fn failure_kind(error: &PipelineError) -> TranscriptionFailureKind {
    match error {
        PipelineError::Transcription(TranscriptionError::Unintelligible) => {
            TranscriptionFailureKind::Unintelligible
        }
        PipelineError::Timeout { .. } => TranscriptionFailureKind::TimedOut,
        _ => TranscriptionFailureKind::ServiceUnavailable,
    }
}

fn unanswerable_reason(phase: &SessionPhase) -> String {
    match phase {
        SessionPhase::Idle => "no recording has been uploaded".to_string(),
        SessionPhase::ConversionFailed { .. } => {
            "the last recording could not be decoded".to_string()
        }
        SessionPhase::TranscriptionFailed { .. } => {
            "the last recording could not be transcribed".to_string()
        }
        SessionPhase::AwaitingQuestion => "the transcript is not available".to_string(),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("conversion: {0}")]
    Conversion(ConversionError),
    #[error("transcription: {0}")]
    Transcription(TranscriptionError),
    #[error("answering: {0}")]
    Answering(QaModelError),
    #[error("staging: {0}")]
    Staging(#[from] StagingStoreError),
    #[error("no recording has been uploaded")]
    NoRecording,
    #[error("no transcript to answer against: {reason}")]
    TranscriptNotReady { reason: String },
    #[error("question must not be empty")]
    EmptyQuestion,
    #[error("{stage} timed out after {seconds}s")]
    Timeout { stage: &'static str, seconds: u64 },
}
