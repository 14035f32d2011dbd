//! API server entry point.

use std::process::ExitCode;

use api::config::Config;
use room_store::PostgresRoomStore;
use tokio::signal;

/// Resolves once the process is asked to stop, naming the signal received.
///
/// A signal whose handler cannot be installed is logged and never fires.
async fn shutdown_signal() {
    let interrupt = async {
        match signal::ctrl_c().await {
            Ok(()) => "SIGINT",
            Err(err) => {
                tracing::warn!(error = %err, "cannot listen for SIGINT");
                std::future::pending().await
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                "SIGTERM"
            }
            Err(err) => {
                tracing::warn!(error = %err, "cannot listen for SIGTERM");
                std::future::pending().await
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<&'static str>();

    let received = tokio::select! {
        name = interrupt => name,
        name = terminate => name,
    };
    tracing::info!(signal = received, "shutting down, draining in-flight requests");
}

#[tokio::main]
async fn main() -> ExitCode {
    // 1. Load .env and initialize tracing
    let _ = dotenvy::dotenv();
    api::init_tracing("info");

    // 2. Validate configuration before touching the network
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "refusing to start");
            return ExitCode::FAILURE;
        }
    };

    // 3. Install Prometheus metrics recorder
    let metrics_handle = match api::routes::metrics::install_recorder() {
        Ok(handle) => handle,
        Err(err) => {
            tracing::error!(error = %err, "failed to install Prometheus recorder");
            return ExitCode::FAILURE;
        }
    };

    // 4. Create the room store; connections open on first query so that
    //    /health answers while the database is still down
    let store = match PostgresRoomStore::connect_lazy(&config.database.url) {
        Ok(store) => store,
        Err(err) => {
            tracing::error!(error = %err, "failed to configure database pool");
            return ExitCode::FAILURE;
        }
    };

    // 5. Build the application
    let app = api::create_app(api::create_state(store), metrics_handle);

    // 6. Start server
    let addr = config.addr();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(%addr, error = %err, "failed to bind address");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(%addr, "starting API server");

    if let Err(err) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %err, "server error");
        return ExitCode::FAILURE;
    }

    tracing::info!("server shut down gracefully");
    ExitCode::SUCCESS
}
