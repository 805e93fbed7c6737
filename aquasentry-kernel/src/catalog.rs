/*!
 * CATALOGUES AQUASENTRY - Tables constantes servies telles quelles
 *
 * Zones de risque, liens réseau et séries analytiques du tableau de bord.
 * Construites à la compilation, jamais régénérées par requête : deux appels
 * successifs produisent des réponses octet pour octet identiques.
 */

use crate::models::{
    AlertDistribution, AnalyticsSummary, LinkLevel, NetworkLink, RiskLevel, RiskTrend, RiskZone,
};

pub static RISK_ZONES: [RiskZone; 3] = [
    RiskZone {
        id: "Z01",
        level: RiskLevel::High,
        disease: "Leptospirosis",
        tds: 685,
        triggers: &[
            "TDS >680 μS/cm (Threshold: 500)",
            "Flood exposure >72 hours",
            "Temperature optimal for bacterial growth",
        ],
        reference: "WHO Guidelines for Drinking Water Quality, 4th Edition (2022)",
    },
    RiskZone {
        id: "Z02",
        level: RiskLevel::Medium,
        disease: "Cholera",
        tds: 420,
        triggers: &[
            "Moderate turbidity levels",
            "Recent precipitation events",
            "Population density: Medium",
        ],
        reference: "CDC Cholera Surveillance Guidelines (2023)",
    },
    RiskZone {
        id: "Z03",
        level: RiskLevel::Low,
        disease: "None",
        tds: 210,
        triggers: &[
            "Water quality within WHO standards",
            "No flood conditions",
            "Population health indicators stable",
        ],
        reference: "Routine monitoring — no intervention required",
    },
];

pub static NETWORK_LINKS: [NetworkLink; 4] = [
    NetworkLink {
        name: "Primary Dashboard (Wi-Fi)",
        detail: "Real-time decision support interface • IP: 192.168.1.100",
        status: "CONNECTED",
        level: LinkLevel::Online,
    },
    NetworkLink {
        name: "GSM SMS Gateway (SIM800L)",
        detail: "Targeted emergency alerts • Network: Globe Telecom",
        status: "OPERATIONAL",
        level: LinkLevel::Online,
    },
    NetworkLink {
        name: "LoRa Mesh Network",
        detail: "Field sensor communication • 868MHz • 12 active nodes",
        status: "SYNCHRONIZED",
        level: LinkLevel::Online,
    },
    NetworkLink {
        name: "Radio Broadcast (AM 702 kHz)",
        detail: "Mass communication channel • Coverage: 50km radius",
        status: "STANDBY",
        level: LinkLevel::Warning,
    },
];

pub static ANALYTICS: AnalyticsSummary = AnalyticsSummary {
    risk_trend: RiskTrend {
        labels: &["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
        high: &[2, 4, 1, 3, 7, 5, 2],
        medium: &[5, 6, 8, 7, 9, 8, 6],
    },
    alert_distribution: AlertDistribution {
        labels: &["Critical", "High", "Medium", "Low"],
        data: &[3, 12, 25, 60],
    },
};
