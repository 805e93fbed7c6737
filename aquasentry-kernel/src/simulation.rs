/*!
 * SIMULATEUR TÉLÉMÉTRIE - Génération des lectures capteurs factices
 *
 * RÔLE :
 * Produit les lectures instantanées et l'historique horaire servis par l'API.
 *
 * FONCTIONNEMENT :
 * - Générateur aléatoire explicite (StdRng) possédé par le simulateur,
 *   graine fixe optionnelle pour des tirages reproductibles
 * - Horloge injectée (trait Clock) pour l'horodatage et les libellés
 * - Le verrou du générateur n'est tenu que le temps d'une série de tirages,
 *   jamais à travers un `.await`
 */

use std::ops::RangeInclusive;
use std::sync::Arc;

use chrono::TimeDelta;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::clock::Clock;
use crate::models::{TelemetryHistory, TelemetryReading};

// Intervalles fermés des lectures instantanées
pub const TURBIDITY_RANGE: RangeInclusive<f64> = 110.0..=150.0;
pub const CONDUCTIVITY_RANGE: RangeInclusive<f64> = 650.0..=720.0;
pub const TEMPERATURE_RANGE: RangeInclusive<f64> = 27.5..=29.5;
pub const BATTERY_RANGE: RangeInclusive<u8> = 95..=100;
pub const GPS_ACCURACY_RANGE: RangeInclusive<f64> = 1.0..=1.5;
pub const SATELLITES_RANGE: RangeInclusive<u8> = 14..=16;
pub const LORA_RSSI_RANGE: RangeInclusive<i16> = -95..=-80;

// Historique : cumul à partir de bases fixes
pub const HISTORY_POINTS: usize = 7;
const BASE_TURBIDITY: f64 = 40.0;
const BASE_CONDUCTIVITY: f64 = 250.0;
const TURBIDITY_STEP: std::ops::Range<f64> = 5.0..30.0;
const CONDUCTIVITY_STEP: std::ops::Range<f64> = 20.0..70.0;

pub struct TelemetrySimulator {
    rng: Mutex<StdRng>,
    clock: Arc<dyn Clock>,
}

impl TelemetrySimulator {
    /// Graine fournie → tirages déterministes, sinon entropie OS
    pub fn new(clock: Arc<dyn Clock>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng: Mutex::new(rng), clock }
    }

    /// GET /api/telemetry : chaque champ tiré indépendamment et uniformément
    pub fn reading(&self) -> TelemetryReading {
        let timestamp = self.clock.now().format("%H:%M:%S").to_string();
        let mut rng = self.rng.lock();

        TelemetryReading {
            turbidity: round1(rng.random_range(TURBIDITY_RANGE)),
            conductivity: round1(rng.random_range(CONDUCTIVITY_RANGE)),
            temperature: round1(rng.random_range(TEMPERATURE_RANGE)),
            battery: rng.random_range(BATTERY_RANGE),
            gps_accuracy: round1(rng.random_range(GPS_ACCURACY_RANGE)),
            satellites: rng.random_range(SATELLITES_RANGE),
            lora_rssi: rng.random_range(LORA_RSSI_RANGE),
            timestamp,
        }
    }

    /// GET /api/telemetry/history : tendance croissante sur 7 heures se
    /// terminant à l'heure courante
    pub fn history(&self) -> TelemetryHistory {
        let now = self.clock.now();
        let mut labels = Vec::with_capacity(HISTORY_POINTS);
        let mut turbidity = Vec::with_capacity(HISTORY_POINTS);
        let mut conductivity = Vec::with_capacity(HISTORY_POINTS);

        // les cumuls restent non arrondis, seules les valeurs publiées le sont
        let mut turbidity_total = BASE_TURBIDITY;
        let mut conductivity_total = BASE_CONDUCTIVITY;

        let mut rng = self.rng.lock();
        for i in 0..HISTORY_POINTS {
            let hours_back = (HISTORY_POINTS - 1 - i) as i64;
            let at = now - TimeDelta::hours(hours_back);
            labels.push(at.format("%H:%M").to_string());

            turbidity_total += rng.random_range(TURBIDITY_STEP);
            conductivity_total += rng.random_range(CONDUCTIVITY_STEP);
            turbidity.push(round1(turbidity_total));
            conductivity.push(round1(conductivity_total));
        }

        TelemetryHistory { labels, turbidity, conductivity }
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;

    fn clock_at(h: u32, m: u32, s: u32) -> Arc<dyn Clock> {
        let at = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap().and_hms_opt(h, m, s).unwrap();
        Arc::new(FixedClock(at))
    }

    fn has_one_decimal(value: f64) -> bool {
        ((value * 10.0).round() - value * 10.0).abs() < 1e-6
    }

    #[test]
    fn test_round1() {
        assert_eq!(round1(128.04), 128.0);
        assert_eq!(round1(128.06), 128.1);
        assert_eq!(round1(149.97), 150.0);
    }

    #[test]
    fn test_reading_fields_stay_in_bounds() {
        let sim = TelemetrySimulator::new(clock_at(9, 5, 7), Some(42));

        for _ in 0..2000 {
            let r = sim.reading();
            assert!(TURBIDITY_RANGE.contains(&r.turbidity), "turbidity {}", r.turbidity);
            assert!(
                CONDUCTIVITY_RANGE.contains(&r.conductivity),
                "conductivity {}",
                r.conductivity
            );
            assert!(TEMPERATURE_RANGE.contains(&r.temperature), "temperature {}", r.temperature);
            assert!(BATTERY_RANGE.contains(&r.battery));
            assert!(GPS_ACCURACY_RANGE.contains(&r.gps_accuracy), "gps {}", r.gps_accuracy);
            assert!(SATELLITES_RANGE.contains(&r.satellites));
            assert!(LORA_RSSI_RANGE.contains(&r.lora_rssi));
            assert!(has_one_decimal(r.turbidity));
            assert!(has_one_decimal(r.temperature));
            assert_eq!(r.timestamp, "09:05:07");
        }
    }

    #[test]
    fn test_integer_draws_reach_both_bounds() {
        let sim = TelemetrySimulator::new(clock_at(9, 5, 7), Some(42));
        let readings: Vec<TelemetryReading> = (0..5000).map(|_| sim.reading()).collect();

        let battery: Vec<u8> = readings.iter().map(|r| r.battery).collect();
        let satellites: Vec<u8> = readings.iter().map(|r| r.satellites).collect();
        let rssi: Vec<i16> = readings.iter().map(|r| r.lora_rssi).collect();

        // bornes incluses des deux côtés
        for bound in [*BATTERY_RANGE.start(), *BATTERY_RANGE.end()] {
            assert!(battery.contains(&bound), "battery {} jamais tiré", bound);
        }
        for bound in [*SATELLITES_RANGE.start(), *SATELLITES_RANGE.end()] {
            assert!(satellites.contains(&bound), "satellites {} jamais tiré", bound);
        }
        for bound in [*LORA_RSSI_RANGE.start(), *LORA_RSSI_RANGE.end()] {
            assert!(rssi.contains(&bound), "lora_rssi {} jamais tiré", bound);
        }
        assert_eq!((*BATTERY_RANGE.start(), *BATTERY_RANGE.end()), (95, 100));
        assert_eq!((*SATELLITES_RANGE.start(), *SATELLITES_RANGE.end()), (14, 16));
        assert_eq!((*LORA_RSSI_RANGE.start(), *LORA_RSSI_RANGE.end()), (-95, -80));
    }

    #[test]
    fn test_same_seed_same_draws() {
        let a = TelemetrySimulator::new(clock_at(12, 0, 0), Some(7));
        let b = TelemetrySimulator::new(clock_at(12, 0, 0), Some(7));

        assert_eq!(a.reading(), b.reading());
        assert_eq!(a.history(), b.history());
    }

    #[test]
    fn test_history_labels_end_at_now() {
        let sim = TelemetrySimulator::new(clock_at(9, 15, 42), Some(1));
        let history = sim.history();

        assert_eq!(
            history.labels,
            vec!["03:15", "04:15", "05:15", "06:15", "07:15", "08:15", "09:15"]
        );
    }

    #[test]
    fn test_history_labels_wrap_midnight() {
        let sim = TelemetrySimulator::new(clock_at(2, 30, 0), Some(1));
        let history = sim.history();

        assert_eq!(
            history.labels,
            vec!["20:30", "21:30", "22:30", "23:30", "00:30", "01:30", "02:30"]
        );
    }

    #[test]
    fn test_history_is_monotonic_and_aligned() {
        let sim = TelemetrySimulator::new(clock_at(18, 0, 0), None);

        for _ in 0..200 {
            let h = sim.history();
            assert_eq!(h.labels.len(), HISTORY_POINTS);
            assert_eq!(h.turbidity.len(), HISTORY_POINTS);
            assert_eq!(h.conductivity.len(), HISTORY_POINTS);

            for w in h.turbidity.windows(2) {
                assert!(w[0] <= w[1], "turbidity not increasing: {:?}", h.turbidity);
            }
            for w in h.conductivity.windows(2) {
                assert!(w[0] <= w[1], "conductivity not increasing: {:?}", h.conductivity);
            }

            // premier pas : base + un incrément
            assert!((45.0..=70.0).contains(&h.turbidity[0]));
            assert!((270.0..=320.0).contains(&h.conductivity[0]));
            // dernier pas : base + 7 incréments
            assert!((75.0..=250.0).contains(&h.turbidity[6]));
            assert!((390.0..=740.0).contains(&h.conductivity[6]));
        }
    }
}
