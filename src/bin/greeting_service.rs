use item_store::core::config::GreetingConfig;
use item_store::core::{server, telemetry};

fn main() -> anyhow::Result<()> {
    let (runtime, _) = server::build_runtime()?;
    runtime.block_on(async_main())
}

async fn async_main() -> anyhow::Result<()> {
    let config = GreetingConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;
    telemetry::init_tracing();

    let app = item_store::greeting_app(&config);

    let listener = server::bind_listener(&config.app)?;
    tracing::info!(
        "Greeting service listening on {}",
        format!("http://{}", config.app.server_address())
    );

    server::serve(listener, app).await
}
