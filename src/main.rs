//! Alembic HTTP server entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use alembic::cache::{HotCache, PairCache};
use alembic::config::Config;
use alembic::gateway::{HandlerState, create_router_with_state};
use alembic::generation::{GenaiModel, Generator};
use alembic::resolver::Resolver;
use alembic::storage::SqlitePairStore;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!(
        r#"
   ▄▄▄       ██▓    ▓█████  ███▄ ▄███▓ ▄▄▄▄    ██▓ ▄████▄
  ▒████▄    ▓██▒    ▓█   ▀ ▓██▒▀█▀ ██▒▓█████▄ ▓██▒▒██▀ ▀█
  ▒██  ▀█▄  ▒██░    ▒███   ▓██    ▓██░▒██▒ ▄██▒██▒▒▓█    ▄
  ░██▄▄▄▄██ ▒██░    ▒▓█  ▄ ▒██    ▒██ ▒██░█▀  ░██░▒▓▓▄ ▄██▒
   ▓█   ▓██▒░██████▒░▒████▒▒██▒   ░██▒░▓█  ▀█▓░██░▒ ▓███▀ ░

        WATER + FIRE = ?
                                        AGPL-3.0
"#
    );

    if std::env::args().any(|arg| arg == "--health-check") {
        std::process::exit(run_health_check());
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    let addr: SocketAddr = config.socket_addr().parse()?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        model = %config.model,
        "Alembic starting"
    );

    let store = SqlitePairStore::open(&config.db_path)?;
    let entries = store.count().await?;
    tracing::info!(path = %store.path().display(), entries, "Pair store opened");

    let model = Arc::new(GenaiModel::new(
        config.model.clone(),
        config.seed,
        config.context_size,
    ));

    let cache = PairCache::new(HotCache::with_capacity(config.hot_capacity), store.clone());
    let resolver = Resolver::new(cache, Generator::new(model));
    let state = HandlerState::new(resolver).with_request_timeout(config.request_timeout);

    let app = create_router_with_state(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close()?;
    tracing::info!("Alembic shutdown complete");
    Ok(())
}

fn run_health_check() -> i32 {
    let port = std::env::var("ALEMBIC_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(3000);

    let url = format!("http://127.0.0.1:{}/healthz", port);

    let Ok(rt) = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    else {
        return 1;
    };

    rt.block_on(async {
        let Ok(client) = reqwest::Client::builder()
            .timeout(Duration::from_secs(1))
            .build()
        else {
            return 1;
        };

        match client.get(&url).send().await {
            Ok(res) if res.status().is_success() => 0,
            _ => 1,
        }
    })
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
