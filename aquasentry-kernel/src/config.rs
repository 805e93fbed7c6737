use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tokio::fs;

pub const DEFAULT_CONFIG_PATH: &str = "aquasentry.yaml";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    pub seed: Option<u64>,            // graine du simulateur, None = entropie OS
    pub request_timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 5000,
            seed: None,
            request_timeout_secs: 30,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("lecture de {path} impossible: {source}")]
    Read { path: String, #[source] source: std::io::Error },
    #[error("config invalide dans {path}: {source}")]
    Yaml { path: String, #[source] source: serde_yaml::Error },
    #[error("variable {name}={value} invalide")]
    Env { name: &'static str, value: String },
}

/// Défauts → fichier YAML optionnel → variables d'environnement
pub async fn load_config() -> Result<ServiceConfig, ConfigError> {
    let path = std::env::var("AQUASENTRY_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
    let mut cfg = load_file(&path).await?;
    apply_env(&mut cfg, |name| std::env::var(name).ok())?;
    Ok(cfg)
}

async fn load_file(path: &str) -> Result<ServiceConfig, ConfigError> {
    if !Path::new(path).exists() {
        tracing::debug!(path, "pas de fichier de config, usage des défauts");
        return Ok(ServiceConfig::default());
    }
    let txt = fs::read_to_string(path)
        .await
        .map_err(|source| ConfigError::Read { path: path.into(), source })?;
    parse_yaml(path, &txt)
}

fn parse_yaml(path: &str, txt: &str) -> Result<ServiceConfig, ConfigError> {
    if txt.trim().is_empty() {
        return Ok(ServiceConfig::default());
    }
    serde_yaml::from_str(txt).map_err(|source| ConfigError::Yaml { path: path.into(), source })
}

/// `lookup` abstrait l'environnement pour les tests
fn apply_env<F>(cfg: &mut ServiceConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(host) = lookup("HOST") {
        cfg.host = host;
    }
    if let Some(port) = lookup("PORT") {
        cfg.port = parse_var("PORT", port)?;
    }
    if let Some(seed) = lookup("AQUASENTRY_SEED") {
        cfg.seed = Some(parse_var("AQUASENTRY_SEED", seed)?);
    }
    if let Some(secs) = lookup("REQUEST_TIMEOUT_SECS") {
        cfg.request_timeout_secs = parse_var("REQUEST_TIMEOUT_SECS", secs)?;
    }
    Ok(())
}

fn parse_var<T: std::str::FromStr>(name: &'static str, value: String) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Env { name, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_default_config() {
        let cfg = ServiceConfig::default();
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 5000);
        assert_eq!(cfg.seed, None);
    }

    #[test]
    fn test_port_from_env() {
        let mut cfg = ServiceConfig::default();
        apply_env(&mut cfg, env(&[("PORT", "8081"), ("AQUASENTRY_SEED", "99")])).unwrap();
        assert_eq!(cfg.port, 8081);
        assert_eq!(cfg.seed, Some(99));
        assert_eq!(cfg.host, "0.0.0.0");
    }

    #[test]
    fn test_invalid_port_rejected() {
        let mut cfg = ServiceConfig::default();
        let err = apply_env(&mut cfg, env(&[("PORT", "http")])).unwrap_err();
        assert!(matches!(err, ConfigError::Env { name: "PORT", .. }));
    }

    #[test]
    fn test_yaml_partial_keeps_defaults() {
        let cfg = parse_yaml("test.yaml", "port: 7000\nseed: 3\n").unwrap();
        assert_eq!(cfg.port, 7000);
        assert_eq!(cfg.seed, Some(3));
        assert_eq!(cfg.request_timeout_secs, 30);

        assert_eq!(parse_yaml("empty.yaml", "  \n").unwrap(), ServiceConfig::default());
        assert!(parse_yaml("bad.yaml", "port: [").is_err());
    }

    #[tokio::test]
    async fn test_missing_file_gives_defaults() {
        let cfg = load_file("/nonexistent/aquasentry.yaml").await.unwrap();
        assert_eq!(cfg, ServiceConfig::default());
    }
}
