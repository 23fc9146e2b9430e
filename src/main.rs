use anyhow::Result;
use axum::http::header;
use clap::Parser;
use dotenv::dotenv;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use template_manager::catalog::build_catalog;
use template_manager::config::{validate_store_settings, Settings};
use template_manager::metrics::{self, Metrics};
use template_manager::{create_app, with_cors, TemplateStore};

#[derive(Parser)]
struct Args {
    /// Write the built-in template catalog into the store before serving
    #[arg(long)]
    build_catalog: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    // Parse command-line arguments
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let settings = Settings::new().unwrap_or_else(|e| {
        error!("Failed to load configuration: {:?}", e);
        std::process::exit(1);
    });
    if let Err(e) = validate_store_settings(&settings) {
        error!("Invalid store configuration: {:?}", e);
        std::process::exit(1);
    }

    info!("Loaded settings: {:?}", settings);

    let prometheus_handle = metrics::setup_metrics_recorder()?;
    let metrics = Metrics::new(prometheus_handle);

    info!("Prometheus metrics initialized");

    let store = Arc::new(TemplateStore::new(settings.store.root.clone()));
    info!("Template store rooted at {}", store.root().display());

    if args.build_catalog {
        let catalog_store = Arc::clone(&store);
        let report = tokio::task::spawn_blocking(move || build_catalog(&catalog_store)).await?;
        if !report.is_complete() {
            warn!("{} catalog templates could not be written", report.failed.len());
        }
    }

    let app = create_app(store)
        .route("/metrics", axum::routing::get(move || async move {
            (
                [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
                metrics.render(),
            )
        }))
        .route("/health", axum::routing::get(|| async { "OK" }));
    let app = with_cors(app, &settings.application);

    info!("Successfully initialized router");

    let addr = SocketAddr::from((
        settings.application.host.parse::<std::net::IpAddr>().unwrap_or_else(|_| {
            warn!("Invalid application.host {:?}, binding to 127.0.0.1", settings.application.host);
            std::net::IpAddr::from([127, 0, 0, 1])
        }),
        settings.application.port,
    ));

    let listener = TcpListener::bind(addr).await?;
    info!("Email Template Manager listening on http://{}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}
