use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

const DATABASE_FILE: &str = "database.db";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("HOST must be an IP address, got {0:?}")]
    InvalidHost(String),

    #[error("PORT must be a number between 0 and 65535, got {0:?}")]
    InvalidPort(String),
}

/// Server configuration loaded from environment variables.
///
/// | Env Var      | Default   |
/// |--------------|-----------|
/// | `HOST`       | `0.0.0.0` |
/// | `PORT`       | `3000`    |
/// | `DATA_DIR`   | `./data`  |
/// | `PUBLIC_DIR` | `public`  |
/// | `VIEWS_DIR`  | `views`   |
#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub data_dir: PathBuf,
    pub public_dir: PathBuf,
    pub views_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = var("HOST", "0.0.0.0");
        let host = host.parse::<IpAddr>().map_err(|_| ConfigError::InvalidHost(host))?;

        let port = var("PORT", "3000");
        let port = port.parse::<u16>().map_err(|_| ConfigError::InvalidPort(port))?;

        Ok(Self {
            host,
            port,
            data_dir: var("DATA_DIR", "./data").into(),
            public_dir: var("PUBLIC_DIR", "public").into(),
            views_dir: var("VIEWS_DIR", "views").into(),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config.addr().to_string(), "0.0.0.0:3000");
        assert_eq!(config.database_path(), PathBuf::from("./data/database.db"));
        assert_eq!(config.public_dir, PathBuf::from("public"));
        assert_eq!(config.views_dir, PathBuf::from("views"));
    }

    #[test]
    fn data_dir_moves_the_database_file() {
        let config = load(&[("DATA_DIR", "/inputdata"), ("PORT", "8080")]).unwrap();
        assert_eq!(config.database_path(), PathBuf::from("/inputdata/database.db"));
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn bad_port_is_an_error() {
        let err = load(&[("PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(p) if p == "eighty"));
    }

    #[test]
    fn bad_host_is_an_error() {
        assert!(matches!(
            load(&[("HOST", "not-an-ip")]),
            Err(ConfigError::InvalidHost(_))
        ));
    }
}
