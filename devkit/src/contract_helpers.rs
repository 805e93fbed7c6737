/*!
Helpers pour valider les payloads JSON de l'API contre leurs contrats

Chaque endpoint a un vérificateur qui renvoie une erreur explicite au
premier écart (champ manquant, borne dépassée, tableaux désalignés...).
*/

use anyhow::{bail, Context, Result};
use aquasentry_kernel::simulation::{
    BATTERY_RANGE, CONDUCTIVITY_RANGE, GPS_ACCURACY_RANGE, HISTORY_POINTS, LORA_RSSI_RANGE,
    SATELLITES_RANGE, TEMPERATURE_RANGE, TURBIDITY_RANGE,
};
use chrono::NaiveTime;
use serde_json::Value;
use std::ops::RangeInclusive;

#[derive(Clone, Copy)]
pub struct Endpoint {
    pub path: &'static str,
    pub is_static: bool, // réponse identique d'un appel à l'autre
    pub check: fn(&Value) -> Result<()>,
}

/// Tous les endpoints JSON de l'API
pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint { path: "/api/telemetry", is_static: false, check: check_telemetry_reading },
    Endpoint { path: "/api/telemetry/history", is_static: false, check: check_history },
    Endpoint { path: "/api/risk-zones", is_static: true, check: check_risk_zones },
    Endpoint { path: "/api/network-status", is_static: true, check: check_network_links },
    Endpoint { path: "/api/analytics", is_static: true, check: check_analytics },
];

pub fn check_telemetry_reading(v: &Value) -> Result<()> {
    check_f64(v, "turbidity", &TURBIDITY_RANGE)?;
    check_f64(v, "conductivity", &CONDUCTIVITY_RANGE)?;
    check_f64(v, "temperature", &TEMPERATURE_RANGE)?;
    check_f64(v, "gps_accuracy", &GPS_ACCURACY_RANGE)?;
    check_i64(v, "battery", widen(&BATTERY_RANGE))?;
    check_i64(v, "satellites", widen(&SATELLITES_RANGE))?;
    check_i64(v, "lora_rssi", widen(&LORA_RSSI_RANGE))?;

    let ts = str_field(v, "timestamp")?;
    if ts.len() != 8 || NaiveTime::parse_from_str(ts, "%H:%M:%S").is_err() {
        bail!("timestamp '{}' n'est pas au format HH:MM:SS", ts);
    }
    Ok(())
}

pub fn check_history(v: &Value) -> Result<()> {
    let labels = array_field(v, "labels")?;
    let turbidity = numbers(v, "turbidity")?;
    let conductivity = numbers(v, "conductivity")?;

    let lengths = [
        ("labels", labels.len()),
        ("turbidity", turbidity.len()),
        ("conductivity", conductivity.len()),
    ];
    for (name, len) in lengths {
        if len != HISTORY_POINTS {
            bail!("{}: {} points au lieu de {}", name, len, HISTORY_POINTS);
        }
    }

    non_decreasing("turbidity", &turbidity)?;
    non_decreasing("conductivity", &conductivity)?;

    // une heure pile entre deux libellés, minuit compris
    let times = labels
        .iter()
        .map(|l| {
            let s = l.as_str().context("libellé non textuel")?;
            NaiveTime::parse_from_str(s, "%H:%M")
                .with_context(|| format!("libellé '{}' invalide", s))
        })
        .collect::<Result<Vec<_>>>()?;
    for w in times.windows(2) {
        let minutes = (w[1] - w[0]).num_minutes().rem_euclid(24 * 60);
        if minutes != 60 {
            bail!("libellés {} → {} non consécutifs", w[0], w[1]);
        }
    }
    Ok(())
}

pub fn check_risk_zones(v: &Value) -> Result<()> {
    let zones = v.as_array().context("risk-zones: tableau attendu")?;
    let ids: Vec<&str> = zones.iter().filter_map(|z| z["id"].as_str()).collect();
    if ids != ["Z01", "Z02", "Z03"] {
        bail!("risk-zones: ids {:?}", ids);
    }
    for zone in zones {
        one_of(zone, "level", &["high", "medium", "low"])?;
        str_field(zone, "disease")?;
        str_field(zone, "reference")?;
        zone["tds"].as_u64().context("tds entier attendu")?;
        if array_field(zone, "triggers")?.iter().any(|t| !t.is_string()) {
            bail!("triggers: chaînes attendues");
        }
    }
    Ok(())
}

pub fn check_network_links(v: &Value) -> Result<()> {
    let links = v.as_array().context("network-status: tableau attendu")?;
    if links.len() != 4 {
        bail!("network-status: {} liens au lieu de 4", links.len());
    }
    for link in links {
        str_field(link, "name")?;
        str_field(link, "detail")?;
        str_field(link, "status")?;
        one_of(link, "level", &["online", "warning", "offline"])?;
    }
    Ok(())
}

pub fn check_analytics(v: &Value) -> Result<()> {
    let trend = &v["risk_trend"];
    let days = array_field(trend, "labels")?.len();
    if numbers(trend, "high")?.len() != days || numbers(trend, "medium")?.len() != days {
        bail!("risk_trend: séries désalignées");
    }

    let dist = &v["alert_distribution"];
    if array_field(dist, "labels")?.len() != numbers(dist, "data")?.len() {
        bail!("alert_distribution: séries désalignées");
    }
    Ok(())
}

// ===== Helpers =====

fn widen<T: Copy + Into<i64>>(r: &RangeInclusive<T>) -> RangeInclusive<i64> {
    (*r.start()).into()..=(*r.end()).into()
}

fn check_f64(v: &Value, field: &str, range: &RangeInclusive<f64>) -> Result<()> {
    let x = v[field].as_f64().with_context(|| format!("{}: nombre attendu", field))?;
    if !range.contains(&x) {
        bail!("{} = {} hors de {:?}", field, x, range);
    }
    if ((x * 10.0).round() - x * 10.0).abs() > 1e-6 {
        bail!("{} = {} non arrondi à 1 décimale", field, x);
    }
    Ok(())
}

fn check_i64(v: &Value, field: &str, range: RangeInclusive<i64>) -> Result<()> {
    let x = v[field].as_i64().with_context(|| format!("{}: entier attendu", field))?;
    if !range.contains(&x) {
        bail!("{} = {} hors de {:?}", field, x, range);
    }
    Ok(())
}

fn str_field<'a>(v: &'a Value, field: &str) -> Result<&'a str> {
    v[field].as_str().with_context(|| format!("{}: chaîne attendue", field))
}

fn array_field<'a>(v: &'a Value, field: &str) -> Result<&'a Vec<Value>> {
    v[field].as_array().with_context(|| format!("{}: tableau attendu", field))
}

fn numbers(v: &Value, field: &str) -> Result<Vec<f64>> {
    array_field(v, field)?
        .iter()
        .map(|x| x.as_f64().with_context(|| format!("{}: nombres attendus", field)))
        .collect()
}

fn one_of(v: &Value, field: &str, allowed: &[&str]) -> Result<()> {
    let s = str_field(v, field)?;
    if !allowed.contains(&s) {
        bail!("{} = '{}' hors de {:?}", field, s, allowed);
    }
    Ok(())
}

fn non_decreasing(field: &str, xs: &[f64]) -> Result<()> {
    if let Some(w) = xs.windows(2).find(|w| w[0] > w[1]) {
        bail!("{} décroît: {} → {}", field, w[0], w[1]);
    }
    Ok(())
}
