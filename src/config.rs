use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

/// Runtime configuration, read from the environment on top of built-in defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub loglevel: String,
    pub max_connections: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:produk.db".to_string(),
            listen_addr: "0.0.0.0:8000".to_string(),
            loglevel: "info".to_string(),
            max_connections: 5,
        }
    }
}

impl Config {
    /// Defaults merged with `DATABASE_URL`, `LISTEN_ADDR`, `LOGLEVEL` and `MAX_CONNECTIONS`.
    pub fn from_env() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::raw().only(&[
            "database_url",
            "listen_addr",
            "loglevel",
            "max_connections",
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_sqlite_file() {
        let cfg: Config = Figment::from(Serialized::defaults(Config::default()))
            .extract()
            .expect("defaults extract");
        assert_eq!(cfg.database_url, "sqlite:produk.db");
        assert_eq!(cfg.listen_addr, "0.0.0.0:8000");
        assert_eq!(cfg.max_connections, 5);
    }

    #[test]
    fn environment_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("DATABASE_URL", "sqlite::memory:");
            jail.set_env("MAX_CONNECTIONS", "1");
            let cfg = Config::from_env()?;
            assert_eq!(cfg.database_url, "sqlite::memory:");
            assert_eq!(cfg.max_connections, 1);
            Ok(())
        });
    }
}
