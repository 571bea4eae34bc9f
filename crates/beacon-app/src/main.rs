mod cli;
mod host_link;
mod logging;
mod services;

use std::process::ExitCode;
use std::time::Duration;

use beacon_config::BeaconConfig;
use tokio::io::BufReader;

use host_link::{HostLink, HostReader};
use services::Services;

/// Load config from the CLI override or the default path. Failures fall
/// back to defaults; the error is returned so it can be logged once
/// logging is up.
fn load_config(args: &cli::Args) -> (BeaconConfig, Option<String>) {
    let loaded = match &args.config {
        Some(path) => beacon_config::load_config_from(path),
        None => beacon_config::load_config(),
    };
    let (mut config, warning) = match loaded {
        Ok(config) => (config, None),
        Err(e) => (BeaconConfig::default(), Some(e.to_string())),
    };

    if args.no_presence {
        config.presence.enabled = false;
    }
    if args.no_notifications {
        config.notifications.enabled = false;
    }
    (config, warning)
}

fn build_runtime() -> beacon_common::Result<tokio::runtime::Runtime> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(runtime)
}

/// Resolves on ctrl-c. If the handler cannot be installed it never resolves.
async fn interrupted() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
}

async fn run(config: BeaconConfig) {
    let (link, signals) = HostLink::new();
    let writer = host_link::spawn_writer(signals, tokio::io::stdout());

    let mut services = Services::start(&config, link);
    tracing::info!(
        presence = services.presence_enabled(),
        notifications = services.notifications_enabled(),
        "Services started"
    );
    let mut reader = HostReader::new(BufReader::new(tokio::io::stdin()));

    tracing::info!("Waiting for host messages");
    services.serve(&mut reader, interrupted()).await;

    services.shutdown().await;
    drop(services);

    // Flush whatever the bridge queued before it stopped.
    if tokio::time::timeout(Duration::from_secs(2), writer).await.is_err() {
        tracing::warn!("Timed out flushing host link");
    }
}

fn main() -> ExitCode {
    let args = cli::parse();
    let (config, config_warning) = load_config(&args);

    let _log_guard = logging::init(&config.logging, args.log_level.as_deref());

    tracing::info!("Beacon v{} starting...", env!("CARGO_PKG_VERSION"));
    match (&args.config, config_warning) {
        (_, Some(e)) => tracing::warn!("Config load failed, using defaults: {e}"),
        (Some(path), None) => tracing::info!("Using config override: {}", path.display()),
        (None, None) => tracing::info!("Config loaded"),
    }

    if let Err(e) = beacon_platform::ensure_dirs(config.logging.file_logging) {
        tracing::warn!("Failed to create directories: {e}");
    }

    let runtime = match build_runtime() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to start async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    runtime.block_on(run(config));

    // A pending stdin read lives on the blocking pool and would hold up drop.
    runtime.shutdown_timeout(Duration::from_secs(2));
    tracing::info!("Shutdown complete");
    ExitCode::SUCCESS
}
