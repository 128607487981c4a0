use serde::Deserialize;

/// Top-level server configuration, loaded from `gamedex.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
    pub web_root: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            web_root: "public".to_string(),
        }
    }
}

impl ServerConfig {
    /// Validate configuration, logging warnings for issues.
    pub fn validate(&self) {
        if self.listen_addr.parse::<std::net::SocketAddr>().is_err() {
            tracing::error!(
                addr = %self.listen_addr,
                "listen_addr is not a valid socket address"
            );
            std::process::exit(1);
        }

        if !std::path::Path::new(&self.web_root).is_dir() {
            tracing::warn!(
                root = %self.web_root,
                "web_root directory does not exist, static assets will 404"
            );
        }
    }

    /// Load config from `gamedex.toml` if it exists, then apply env var overrides.
    pub fn load() -> Self {
        let mut config = match std::fs::read_to_string("gamedex.toml") {
            Ok(content) => match toml::from_str::<ServerConfig>(&content) {
                Ok(cfg) => {
                    tracing::info!("Loaded configuration from gamedex.toml");
                    cfg
                },
                Err(e) => {
                    tracing::warn!("Failed to parse gamedex.toml: {e}, using defaults");
                    ServerConfig::default()
                },
            },
            Err(_) => {
                tracing::info!("No gamedex.toml found, using defaults");
                ServerConfig::default()
            },
        };

        // Environment variable overrides
        if let Ok(addr) = std::env::var("GAMEDEX_LISTEN_ADDR")
            && !addr.is_empty()
        {
            config.listen_addr = addr;
        }
        if let Ok(root) = std::env::var("GAMEDEX_WEB_ROOT")
            && !root.is_empty()
        {
            config.web_root = root;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.listen_addr, "0.0.0.0:3000");
        assert_eq!(cfg.web_root, "public");
    }

    #[test]
    fn parse_minimal_toml() {
        let toml_str = r#"
listen_addr = "127.0.0.1:9090"
web_root = "/var/www"
"#;
        let cfg: ServerConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(cfg.listen_addr, "127.0.0.1:9090");
        assert_eq!(cfg.web_root, "/var/www");
    }

    #[test]
    fn missing_keys_use_defaults() {
        let cfg: ServerConfig = toml::from_str(r#"listen_addr = "0.0.0.0:8080""#).unwrap();
        assert_eq!(cfg.listen_addr, "0.0.0.0:8080");
        assert_eq!(cfg.web_root, "public");
    }

    #[test]
    fn validate_rejects_invalid_addr() {
        let cfg = ServerConfig {
            listen_addr: "not-an-address".to_string(),
            ..ServerConfig::default()
        };
        // validate() calls process::exit, so we test the underlying check
        assert!(cfg.listen_addr.parse::<std::net::SocketAddr>().is_err());
    }
}
