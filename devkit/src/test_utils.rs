/*!
Test Harness pour l'API AquaSentry

Facilite l'écriture de tests HTTP avec:
- Routeur complet (middleware compris) piloté via `tower::ServiceExt::oneshot`
- Horloge figée et graine fixe : réponses reproductibles
- Helpers de lecture JSON / texte
*/

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use aquasentry_kernel::{build_app, AppState, FixedClock, TelemetrySimulator};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use chrono::{NaiveDate, NaiveDateTime};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub const DEFAULT_SEED: u64 = 0x00A9_5E47;

/// Harness de test complet pour l'API
pub struct TestHarness {
    app: Router,
    pub now: NaiveDateTime,
    pub seed: u64,
}

impl TestHarness {
    /// 1er juillet 2024, 09:15:42, graine par défaut
    pub fn new() -> Self {
        Self::with(default_now(), DEFAULT_SEED)
    }

    pub fn at(now: NaiveDateTime) -> Self {
        Self::with(now, DEFAULT_SEED)
    }

    pub fn with(now: NaiveDateTime, seed: u64) -> Self {
        // logs visibles avec --nocapture
        tracing_subscriber::fmt().with_test_writer().try_init().ok();

        let simulator = TelemetrySimulator::new(Arc::new(FixedClock(now)), Some(seed));
        let app = build_app(AppState::new(simulator), Duration::from_secs(30));
        Self { app, now, seed }
    }

    /// GET brut sur le routeur en mémoire
    pub async fn get(&self, uri: &str) -> Result<Response> {
        let request = Request::builder().uri(uri).body(Body::empty())?;
        let response = self.app.clone().oneshot(request).await?;
        Ok(response)
    }

    pub async fn get_text(&self, uri: &str) -> Result<(StatusCode, String)> {
        let response = self.get(uri).await?;
        let status = response.status();
        let bytes = response.into_body().collect().await?.to_bytes();
        let text = String::from_utf8(bytes.to_vec()).context("réponse non UTF-8")?;
        Ok((status, text))
    }

    /// Échoue si le statut n'est pas 200 ou si le corps n'est pas du JSON
    pub async fn get_json(&self, uri: &str) -> Result<Value> {
        let (status, text) = self.get_text(uri).await?;
        if status != StatusCode::OK {
            anyhow::bail!("GET {} → {} (attendu 200): {}", uri, status, text);
        }
        serde_json::from_str(&text).with_context(|| format!("JSON invalide sur {}", uri))
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

fn default_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 7, 1)
        .and_then(|d| d.and_hms_opt(9, 15, 42))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_harness_basic_functionality() {
        let harness = TestHarness::new();

        let telemetry = harness.get_json("/api/telemetry").await.unwrap();
        assert_eq!(telemetry["timestamp"], "09:15:42");

        let (status, _) = harness.get_text("/nope").await.unwrap();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(harness.get_json("/nope").await.is_err());
    }

    #[tokio::test]
    async fn test_same_seed_same_payload() {
        let a = TestHarness::new();
        let b = TestHarness::new();

        assert_eq!(
            a.get_json("/api/telemetry/history").await.unwrap(),
            b.get_json("/api/telemetry/history").await.unwrap()
        );
    }
}
