/*!
# AquaSentry DevKit - Outils de test pour l'API du kernel

Bibliothèque facilitant les tests de bout en bout sans socket ni hasard:
- Harness pilotant le routeur en mémoire (horloge figée, graine fixe)
- Vérificateurs de contrats JSON par endpoint
*/

pub mod contract_helpers;
pub mod test_utils;

pub use contract_helpers::{Endpoint, ENDPOINTS};
pub use test_utils::TestHarness;
