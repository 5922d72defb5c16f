use enellerett::config::{Config, USAGE};
use enellerett::hits::recorder::HitRecorder;
use enellerett::hits::reporter::spawn_stats_reporter;
use enellerett::lexicon::loader;
use enellerett::lookup::engine::Lookup;
use enellerett::quiz::engine::Quiz;
use enellerett::web::router::build_router;

use anyhow::Context;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let Some(config) = Config::from_env()? else {
        println!("{}", USAGE);
        return Ok(());
    };

    // 1. Lexicon (fatal on any load error):
    let store = loader::load(&config.en_path, &config.ett_path).with_context(|| {
        format!(
            "failed to load lexicon from {} and {}",
            config.en_path.display(),
            config.ett_path.display()
        )
    })?;
    let store = Arc::new(store);
    tracing::info!("Lexicon contains {} words", store.len().await);

    // 2. Hit counting:
    let (hits, writer) = HitRecorder::start(store.clone(), config.hit_queue_capacity);
    let reporter = spawn_stats_reporter(store.clone(), config.stats_interval);

    // 3. HTTP Router:
    let app = build_router(Lookup::new(store.clone(), hits), Quiz::new(store.clone()));

    // 4. Start HTTP server:
    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    tracing::info!("Listening on {}", config.bind);
    tracing::info!("Press Ctrl+C to shutdown");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Once the router and its connections are gone the writer drains and stops.
    reporter.abort();
    match tokio::time::timeout(Duration::from_secs(2), writer).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => tracing::warn!("Hit writer ended abnormally: {}", e),
        Err(_) => tracing::warn!("Hit writer still busy at exit, pending hits are lost"),
    }
    tracing::info!("Exiting with {} hits recorded", store.total_hits().await);

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}
