/*!
 * AQUASENTRY KERNEL - Point d'entrée du serveur de démonstration
 *
 * RÔLE : charge la configuration, construit le simulateur et sert l'API.
 * Arrêt propre sur Ctrl-C / SIGTERM.
 */

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use aquasentry_kernel::config::load_config;
use aquasentry_kernel::{build_app, AppState, SystemClock, TelemetrySimulator};

#[tokio::main]
async fn main() {
    // Charger les variables d'environnement depuis .env (si présent)
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aquasentry_kernel=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        tracing::error!("[kernel] arrêt sur erreur: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cfg = load_config().await?;
    tracing::info!(
        host = %cfg.host,
        port = cfg.port,
        seeded = cfg.seed.is_some(),
        timeout_secs = cfg.request_timeout_secs,
        "[kernel] configuration chargée"
    );

    let simulator = TelemetrySimulator::new(Arc::new(SystemClock), cfg.seed);
    let app = build_app(AppState::new(simulator), Duration::from_secs(cfg.request_timeout_secs));

    let ip = cfg.host.parse::<IpAddr>().with_context(|| format!("HOST invalide: {}", cfg.host))?;
    let addr = SocketAddr::new(ip, cfg.port);
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind impossible sur {addr}"))?;
    tracing::info!("[kernel] listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serveur HTTP interrompu")?;

    tracing::info!("[kernel] arrêt propre terminé");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("[kernel] handler Ctrl-C indisponible: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!("[kernel] handler SIGTERM indisponible: {e}");
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
    tracing::info!("[kernel] signal d'arrêt reçu");
}
