use std::net::SocketAddr;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use services::AppServices;
use storage::repository::Storage;
use storage::seed::seed_demo;
use storage::store::RecordStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "kuizmo=info,api=info,services=info,tower_http=info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "kuizmo", version, about = "Kuizmo study companion REST API")]
struct Cli {
    /// Socket address to bind, e.g. 127.0.0.1:8000
    #[arg(long, default_value = "127.0.0.1:8000", env = "KUIZMO_LISTEN")]
    listen: SocketAddr,
    /// Start with an empty store instead of the demo course.
    #[arg(long, default_value_t = false, env = "KUIZMO_NO_SEED")]
    no_seed: bool,
    /// Log output format.
    #[arg(long, value_enum, default_value_t = LogFormat::Text, env = "KUIZMO_LOG_FORMAT")]
    log_format: LogFormat,
}

fn init_tracing(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn build_store(seed: bool) -> anyhow::Result<RecordStore> {
    let mut store = RecordStore::default();
    if seed {
        let demo = seed_demo(&mut store).context("seed demo course")?;
        info!(
            course_id = %demo.course_id,
            modules = demo.module_ids.len(),
            questions = demo.question_ids.len(),
            "demo course seeded"
        );
    }
    Ok(store)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_format);

    let store = build_store(!cli.no_seed)?;
    let services = AppServices::new(&Storage::from_store(store));
    let router = api::build_router(services);

    let listener = tokio::net::TcpListener::bind(cli.listen)
        .await
        .with_context(|| format!("bind {}", cli.listen))?;
    info!(listen = %cli.listen, "kuizmo listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serve http")?;

    info!("kuizmo stopped");
    Ok(())
}
