use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// JSON snapshot with `events` and `spots`, read once at startup.
    pub path: String,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        Self::builder(&run_mode)?.build()?.try_deserialize()
    }

    fn builder(
        run_mode: &str,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        Ok(config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("catalog.path", "db.json")?
            // Shared settings, then per-environment overrides, then an untracked local file
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(config::File::with_name("config/local").required(false))
            // Eg.. `BOXOFFICE_SERVER__PORT=9000`
            .add_source(config::Environment::with_prefix("BOXOFFICE").separator("__")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_files() {
        let cfg: Config = Config::builder("no-such-mode")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.catalog.path, "db.json");
    }

    #[test]
    fn test_overrides_replace_defaults() {
        let cfg: Config = Config::builder("no-such-mode")
            .unwrap()
            .set_override("server.port", 9090)
            .unwrap()
            .set_override("catalog.path", "/srv/catalog.json")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(cfg.server.port, 9090);
        assert_eq!(cfg.catalog.path, "/srv/catalog.json");
    }
}
