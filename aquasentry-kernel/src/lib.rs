/*!
# AquaSentry Kernel - Backend de démonstration du dashboard environnemental

Télémétrie simulée (turbidité, conductivité, LoRa...), zones de risque
sanitaire, état des liens réseau et séries analytiques, servis en HTTP.

- `simulation` : tirages bornés + historique horaire cumulatif
- `catalog` : tables constantes (zones, liens, analytique)
- `clock` : horloge injectable (réelle ou figée)
- `http` : routeur Axum et pile tower-http
- `config` : défauts → YAML → environnement
*/

pub mod catalog;
pub mod clock;
pub mod config;
pub mod health;
pub mod http;
pub mod models;
pub mod simulation;

pub use clock::{Clock, FixedClock, SystemClock};
pub use http::{build_app, build_router, AppState};
pub use simulation::TelemetrySimulator;
