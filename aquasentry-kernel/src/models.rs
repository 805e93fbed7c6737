/*!
 * MODÈLES AQUASENTRY - Payloads JSON exposés par l'API
 *
 * Tous ces types vivent le temps d'une réponse HTTP : rien n'est stocké.
 * Les types "catalogue" empruntent des données `'static` (tables constantes),
 * les types simulés possèdent leurs valeurs.
 */

use serde::Serialize;

/// Lecture instantanée simulée d'une bouée capteur
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TelemetryReading {
    pub turbidity: f64,      // NTU, [110, 150]
    pub conductivity: f64,   // µS/cm, [650, 720]
    pub temperature: f64,    // °C, [27.5, 29.5]
    pub battery: u8,         // %, 95..=100
    pub gps_accuracy: f64,   // m, [1.0, 1.5]
    pub satellites: u8,      // 14..=16
    pub lora_rssi: i16,      // dBm, -95..=-80
    pub timestamp: String,   // HH:MM:SS heure locale
}

/// Série horaire pour le graphique (7 points alignés)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TelemetryHistory {
    pub labels: Vec<String>,
    pub turbidity: Vec<f64>,
    pub conductivity: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskZone {
    pub id: &'static str,
    pub level: RiskLevel,
    pub disease: &'static str,
    pub tds: u32,
    pub triggers: &'static [&'static str],
    pub reference: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkLevel {
    Online,
    Warning,
    Offline,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkLink {
    pub name: &'static str,
    pub detail: &'static str,
    pub status: &'static str, // libellé opérationnel libre (CONNECTED, STANDBY...)
    pub level: LinkLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskTrend {
    pub labels: &'static [&'static str],
    pub high: &'static [u32],
    pub medium: &'static [u32],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertDistribution {
    pub labels: &'static [&'static str],
    pub data: &'static [u32],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsSummary {
    pub risk_trend: RiskTrend,
    pub alert_distribution: AlertDistribution,
}
