//! `giri-mart-till` binary.
//!
//! Reads `TillConfig` from the environment, then serves the cart page and
//! the bill on `TILL_HOST:TILL_PORT` (port 5000 unless overridden). The
//! cart and every clerk session live in process memory, so stopping the
//! till throws away whatever is on the counter.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::process::ExitCode;

use giri_mart_till::build_router;
use giri_mart_till::config::TillConfig;
use giri_mart_till::state::AppState;
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "giri_mart_till=info,tower_http=debug";

#[tokio::main]
async fn main() -> ExitCode {
    let config = match TillConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("giri-mart-till: {err}");
            return ExitCode::FAILURE;
        }
    };

    // Held until exit; dropping it flushes queued Sentry events.
    let _sentry = connect_sentry(&config);
    install_subscriber();

    match serve(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "Till stopped");
            ExitCode::FAILURE
        }
    }
}

/// Start reporting to Sentry when `SENTRY_DSN` is configured.
fn connect_sentry(config: &TillConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_deref()?;

    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            sample_rate: config.sentry_sample_rate,
            traces_sample_rate: config.sentry_traces_sample_rate,
            attach_stacktrace: true,
            ..Default::default()
        },
    )))
}

/// Console logging plus Sentry forwarding: refused cart actions and
/// handler progress become breadcrumbs, warnings and errors become events.
fn install_subscriber() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer().event_filter(|metadata| match *metadata.level() {
            tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
            tracing::Level::INFO | tracing::Level::DEBUG => {
                sentry_tracing::EventFilter::Breadcrumb
            }
            _ => sentry_tracing::EventFilter::Ignore,
        }))
        .init();
}

/// Bind the listener and serve until the clerk stops the till.
async fn serve(config: TillConfig) -> std::io::Result<()> {
    let addr = config.socket_addr();
    let state = AppState::new(config);
    tracing::info!(
        shop = %state.config().shop_name,
        items = state.catalog().len(),
        "Catalog loaded"
    );

    // Each request gets its own Sentry hub so cart tags do not leak
    // between clerks.
    let app = build_router(state)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Till open");

    axum::serve(listener, app)
        .with_graceful_shutdown(closing_time())
        .await?;

    tracing::info!("Till closed");
    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on Unix. In-flight requests finish
/// before the cart is dropped.
async fn closing_time() {
    let interrupt = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %err, "Ctrl+C handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = interrupt => {},
        () = terminate => {},
    }

    tracing::info!("Closing the till");
}
