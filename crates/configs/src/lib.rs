use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub latency: LatencyConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8081, worker_threads: Some(4) }
    }
}

/// Simulated store latency, standing in for a real backend round trip.
/// List reads and mutations carry different delays; both can be zeroed
/// (e.g. in tests) to make operations resolve immediately.
#[derive(Debug, Clone, Deserialize)]
pub struct LatencyConfig {
    #[serde(default = "default_list_ms")]
    pub list_ms: u64,
    #[serde(default = "default_mutate_ms")]
    pub mutate_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self { list_ms: default_list_ms(), mutate_ms: default_mutate_ms() }
    }
}

fn default_list_ms() -> u64 { 500 }
fn default_mutate_ms() -> u64 { 300 }

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.latency.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        if let Some(w) = self.worker_threads {
            if w == 0 { self.worker_threads = Some(4); }
        } else {
            self.worker_threads = Some(4);
        }
        Ok(())
    }
}

impl LatencyConfig {
    pub fn validate(&self) -> Result<()> {
        // Guard against accidental multi-minute delays from a typo'd config
        if self.list_ms > 60_000 || self.mutate_ms > 60_000 {
            return Err(anyhow!("latency delays must be <= 60000 ms"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_mock_backend_delays() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.latency.list_ms, 500);
        assert_eq!(cfg.latency.mutate_ms, 300);
        assert_eq!(cfg.server.port, 8081);
    }

    #[test]
    fn parse_toml_overrides() {
        let mut cfg: AppConfig = toml::from_str(
            "[server]\nhost = \"\"\nport = 9090\n\n[latency]\nlist_ms = 0\nmutate_ms = 0\n",
        )
        .expect("parse");
        cfg.normalize_and_validate().expect("valid");
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 9090);
        assert_eq!(cfg.latency.list_ms, 0);
    }

    #[test]
    fn reject_absurd_latency() {
        let cfg = LatencyConfig { list_ms: 120_000, mutate_ms: 300 };
        assert!(cfg.validate().is_err());
    }
}
