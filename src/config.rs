use std::net::SocketAddr;
use std::path::{Path, PathBuf};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MODEL_PATH: &str = "models/best_model.json";
pub const DEFAULT_ZIP_DB_PATH: &str = "data/external/zip_code_database.csv";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub port: u16,
    pub model_path: PathBuf,
    pub zip_db_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            zip_db_path: PathBuf::from(DEFAULT_ZIP_DB_PATH),
        }
    }
}

impl Config {
    /// Defaults, overridden by `BIND_ADDR`, `PORT`, `MODEL_PATH` and `ZIP_DB_PATH`.
    pub fn from_env() -> Self {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let d = Self::default();
        Self {
            bind_addr: get("BIND_ADDR").unwrap_or(d.bind_addr),
            port: get("PORT").and_then(|s| s.parse().ok()).unwrap_or(d.port),
            model_path: get("MODEL_PATH").map(PathBuf::from).unwrap_or(d.model_path),
            zip_db_path: get("ZIP_DB_PATH").map(PathBuf::from).unwrap_or(d.zip_db_path),
        }
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.bind_addr, self.port);
        addr.parse()
            .map_err(|e| anyhow::anyhow!("invalid bind address {}: {}", addr, e))
    }
}

/// Find `rel` relative to the working directory, then next to the executable.
/// Falls back to `rel` itself so the caller's load reports the missing file.
pub fn resolve_data_path(rel: &Path) -> PathBuf {
    if rel.is_absolute() || rel.exists() {
        return rel.to_path_buf();
    }
    if let Ok(mut p) = std::env::current_exe() {
        p.pop(); // exe dir
        p.push(rel);
        if p.exists() {
            return p;
        }
    }
    rel.to_path_buf()
}
