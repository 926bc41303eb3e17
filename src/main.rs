use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use semporna::application::services::PipelineService;
use semporna::infrastructure::audio::SymphoniaConverter;
use semporna::infrastructure::observability::{TracingConfig, init_tracing};
use semporna::infrastructure::qa::ExtractiveQaClient;
use semporna::infrastructure::speech::{TranscriberFactory, TranscriberProvider};
use semporna::infrastructure::storage::LocalStagingStore;
use semporna::presentation::{
    AppState, Environment, Settings, TranscriptionProviderSetting, create_router,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".to_string())
        .try_into()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let settings = Settings::load(environment)?;

    init_tracing(
        TracingConfig::new(
            environment.as_str(),
            settings.logging.json,
            settings.logging.level.clone(),
        ),
        settings.server.port,
    );

    let staging = Arc::new(LocalStagingStore::new(settings.upload.staging_dir.clone())?);
    let converter = Arc::new(SymphoniaConverter);

    let provider = match settings.transcription.provider {
        TranscriptionProviderSetting::Local => TranscriberProvider::Local,
        TranscriptionProviderSetting::OpenAi => TranscriberProvider::OpenAi,
    };
    let transcriber = TranscriberFactory::create(
        provider,
        &settings.transcription.model,
        settings.transcription.api_key.clone(),
        settings.transcription.base_url.clone(),
    )?;

    let qa_model = Arc::new(ExtractiveQaClient::new(
        &settings.qa.base_url,
        &settings.qa.model,
        settings.qa.api_key.clone(),
    ));

    let pipeline = Arc::new(PipelineService::new(
        converter,
        transcriber,
        qa_model,
        staging,
        Duration::from_secs(settings.transcription.timeout_secs),
        Duration::from_secs(settings.qa.timeout_secs),
    ));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;

    let state = AppState { pipeline, settings };
    let router = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
