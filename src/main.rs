use fraud_predictor::{
    config::{resolve_data_path, Config},
    load_classifier, router, AppState, ReferenceTable,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cfg = Config::from_env();
    let model_path = resolve_data_path(&cfg.model_path);
    let zip_db_path = resolve_data_path(&cfg.zip_db_path);
    tracing::info!("model={} zip_db={}", model_path.display(), zip_db_path.display());

    let reference = ReferenceTable::load(&zip_db_path)?;
    if reference.is_empty() {
        tracing::warn!("zip code database is empty; every prediction will fail");
    }
    tracing::info!("loaded reference table; {} zip codes", reference.len());

    let classifier = load_classifier(&model_path)?;
    tracing::info!("loaded {}", classifier.describe());

    let app = router(AppState::new(classifier, reference));

    let addr = cfg.socket_addr()?;
    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
