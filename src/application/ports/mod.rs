mod audio_converter;
mod qa_model;
mod staging_store;
mod transcriber;

pub use audio_converter::{AudioConverter, ConversionError};
pub use qa_model::{QaModel, QaModelError};
pub use staging_store::{StagingStore, StagingStoreError};
pub use transcriber::{Transcriber, TranscriptionError};
