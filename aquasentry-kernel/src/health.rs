use serde::Serialize;
use std::time::Instant;

#[derive(Debug, Serialize)]
pub struct ServiceHealth {
    pub status: &'static str,
    pub version: &'static str,
    pub uptime_seconds: u64,
    pub memory_usage_mb: f32,
}

/// Suivi de vie du processus pour GET /health
#[derive(Debug, Clone, Copy)]
pub struct HealthTracker {
    start_time: Instant,
}

impl HealthTracker {
    pub fn new() -> Self {
        Self { start_time: Instant::now() }
    }

    pub fn get_health(&self) -> ServiceHealth {
        ServiceHealth {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            memory_usage_mb: get_memory_usage_mb(),
        }
    }
}

impl Default for HealthTracker {
    fn default() -> Self {
        Self::new()
    }
}

fn get_memory_usage_mb() -> f32 {
    #[cfg(target_os = "linux")]
    {
        if let Ok(status) = std::fs::read_to_string("/proc/self/status") {
            if let Some(kb) = parse_vm_rss_kb(&status) {
                return (kb as f32) / 1024.0; // KB -> MB
            }
        }
    }

    // Fallback approximatif
    12.0
}

fn parse_vm_rss_kb(status: &str) -> Option<u64> {
    status
        .lines()
        .find(|line| line.starts_with("VmRSS:"))
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|kb| kb.parse().ok())
}
