use std::sync::Arc;

use crate::application::ports::{AudioConverter, QaModel, Transcriber};
use crate::application::services::PipelineService;
use crate::presentation::config::Settings;

pub struct AppState<C, T: ?Sized, Q>
where
    C: AudioConverter,
    T: Transcriber,
    Q: QaModel,
{
    pub pipeline: Arc<PipelineService<C, T, Q>>,
    pub settings: Settings,
}

impl<C, T: ?Sized, Q> Clone for AppState<C, T, Q>
where
    C: AudioConverter,
    T: Transcriber,
    Q: QaModel,
{
    fn clone(&self) -> Self {
        Self {
            pipeline: Arc::clone(&self.pipeline),
            settings: self.settings.clone(),
        }
    }
}
