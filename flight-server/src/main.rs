use flight_server::config::ServerConfig;
use flight_server::web::{AppState, create_router};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            std::process::exit(2);
        }
    };

    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|e| {
        eprintln!("Invalid log filter {:?}: {e}; using \"info\"", config.log_filter);
        EnvFilter::new("info")
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let addr = config.bind_addr;
    info!(%addr, max_segments = config.max_segments, "starting flight path server");

    let app = create_router(AppState::new(config));

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(%addr, error = %e, "failed to bind listener");
            std::process::exit(1);
        }
    };

    info!("API Endpoints:");
    info!("  GET  /health     - Health check");
    info!("  GET  /calculate  - Reduce a JSON flight list to [source, destination]");
    info!("  POST /calculate  - Same as GET");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(error = %e, "server error");
        std::process::exit(1);
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(err) => error!(?err, "failed to listen for shutdown signal"),
    }
}
