use item_store::core::config::Config;
use item_store::core::{database, server, telemetry};

fn main() -> anyhow::Result<()> {
    let (runtime, worker_threads) = server::build_runtime()?;
    runtime.block_on(async_main(worker_threads))
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    telemetry::init_tracing();

    tracing::info!(
        "System info: tokio_worker_threads={}, pid={}",
        worker_threads,
        std::process::id()
    );
    tracing::info!("Configuration loaded successfully");

    let pool = database::create_pool(&config.database).await?;
    tracing::info!("Database connection pool created: {}", config.database.url);

    tracing::info!("Running database migrations...");
    database::run_migrations(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;
    tracing::info!("Database migrations completed successfully");

    let app = item_store::item_store_app(&config, pool);

    let listener = server::bind_listener(&config.app)?;
    let addr = config.app.server_address();
    tracing::info!("Server listening on {}", format!("http://{}", addr));
    tracing::info!(
        "Swagger UI available at {}",
        format!("http://{}/swagger-ui/", addr)
    );

    server::serve(listener, app).await
}
