//! API server entry point.

use api::config::Config;
use api::logging::{LogConfig, init_logging};
use api::{ServiceInfo, startup};
use tokio::signal;

/// Waits for a shutdown signal (SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install SIGINT handler");
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
        () = ctrl_c => {
            tracing::info!("received SIGINT, starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("received SIGTERM, starting graceful shutdown");
        }
    }
}

#[tokio::main]
async fn main() {
    let log_config = LogConfig::detect();
    init_logging(&log_config).expect("failed to initialise logging");

    let config = Config::from_env();
    tracing::info!(
        service = %log_config.service_name,
        version = %log_config.version,
        environment = %log_config.environment,
        "starting service"
    );

    let metrics_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .expect("failed to install Prometheus recorder");

    let state = api::create_default_state(ServiceInfo {
        name: log_config.service_name.clone(),
        version: log_config.version.clone(),
    });

    if config.seed_sample_data {
        startup::seed_sample_data(&state.customers)
            .await
            .expect("failed to load sample data");
    }

    let app = api::create_app(state, metrics_handle);

    let addr = config.addr();
    tracing::info!(%addr, "starting API server");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind address");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");

    tracing::info!("server shut down gracefully");
}
