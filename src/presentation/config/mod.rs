mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    LoggingSettings, QaSettings, ServerSettings, Settings, TranscriptionProviderSetting,
    TranscriptionSettings, UploadSettings,
};
