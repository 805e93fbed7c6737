/*!
 * API REST AQUASENTRY - Routes HTTP du tableau de bord
 *
 * RÔLE :
 * Expose en lecture seule la télémétrie simulée, les catalogues constants
 * (zones de risque, liens réseau, analytique) et la page du dashboard.
 *
 * FONCTIONNEMENT :
 * - Serveur Axum, toutes les routes en GET, sans corps ni authentification
 * - Handlers infaillibles : sérialisation JSON directe des réponses
 * - Route inconnue → 404 standard d'Axum, panic → 500 (CatchPanicLayer)
 * - Traces requête/réponse + x-request-id via tower-http
 */

use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::http::{HeaderName, StatusCode};
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::catalog::{ANALYTICS, NETWORK_LINKS, RISK_ZONES};
use crate::health::{HealthTracker, ServiceHealth};
use crate::models::{AnalyticsSummary, NetworkLink, RiskZone, TelemetryHistory, TelemetryReading};
use crate::simulation::TelemetrySimulator;

/// Page du dashboard, rendue côté client (asset opaque pour le serveur)
pub const DASHBOARD_HTML: &str = include_str!("../templates/index.html");

const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Clone)]
pub struct AppState {
    pub simulator: Arc<TelemetrySimulator>,
    pub health_tracker: HealthTracker,
}

impl AppState {
    pub fn new(simulator: TelemetrySimulator) -> Self {
        Self {
            simulator: Arc::new(simulator),
            health_tracker: HealthTracker::new(),
        }
    }
}

/// Routes seules, sans middleware
pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(get_health))
        .route("/api/telemetry", get(get_telemetry))
        .route("/api/telemetry/history", get(get_telemetry_history))
        .route("/api/risk-zones", get(get_risk_zones))
        .route("/api/network-status", get(get_network_status))
        .route("/api/analytics", get(get_analytics))
        .with_state(app_state)
}

/// Routes + pile de middleware (appliquée de bas en haut)
pub fn build_app(app_state: AppState, request_timeout: Duration) -> Router {
    let request_id_header = HeaderName::from_static(REQUEST_ID_HEADER);

    build_router(app_state)
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, request_timeout))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(CorsLayer::permissive())
}

// GET / (page dashboard)
async fn index() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}

// GET /health (liveness)
async fn get_health(State(app): State<AppState>) -> Json<ServiceHealth> {
    Json(app.health_tracker.get_health())
}

// GET /api/telemetry (lecture instantanée)
async fn get_telemetry(State(app): State<AppState>) -> Json<TelemetryReading> {
    Json(app.simulator.reading())
}

// GET /api/telemetry/history (7 points horaires)
async fn get_telemetry_history(State(app): State<AppState>) -> Json<TelemetryHistory> {
    Json(app.simulator.history())
}

// GET /api/risk-zones (catalogue fixe)
async fn get_risk_zones() -> Json<&'static [RiskZone]> {
    Json(&RISK_ZONES[..])
}

// GET /api/network-status (catalogue fixe)
async fn get_network_status() -> Json<&'static [NetworkLink]> {
    Json(&NETWORK_LINKS[..])
}

// GET /api/analytics (séries figées)
async fn get_analytics() -> Json<&'static AnalyticsSummary> {
    Json(&ANALYTICS)
}
