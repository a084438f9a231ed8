use api::Config;
use repository::Repository;
use shuttle_runtime::{Error, SecretStore, Secrets};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[shuttle_runtime::main]
async fn main(
    #[Secrets] secret_store: SecretStore,
    #[shuttle_shared_db::Postgres(local_uri = "{secrets.LOCAL_DATABASE_URL}")]
    conn_string: String,
) -> shuttle_axum::ShuttleAxum {
    let level = match secret_store.get("ENV").as_deref() {
        Some("prod") => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .init();

    let config_name = secret_store
        .get("CONFIG")
        .unwrap_or_else(|| "Config.toml".to_string());
    let config: Config = util::load_config(&config_name)
        .map_err(|e| Error::BuildPanic(e.to_string()))?;

    let repository = Repository::new(
        &conn_string,
        config.database.max_connections,
        config.database.min_connections,
    )
    .await
    .map_err(|e| Error::BuildPanic(e.to_string()))?;

    let router = api::serve(repository, &config)
        .await
        .map_err(|e| Error::BuildPanic(e.to_string()))?;

    info!(task = "router ready", config = config_name.as_str());

    Ok(router.into())
}
