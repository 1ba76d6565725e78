use std::env;
use std::path::PathBuf;

use crate::error::ServerError;

const DEFAULT_PORT: u16 = 8081;

/// Process settings read from the environment (and `.env`, if present).
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    pub frontend_dir: PathBuf,
    pub catalog_path: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ServerError::Config(format!("PORT is not a valid port: {}", raw)))?,
            None => DEFAULT_PORT,
        };

        let workspace = workspace_dir(lookup("CARGO_MANIFEST_DIR"));
        let frontend_dir = lookup("FRONTEND_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| workspace.join("frontend/dist"));
        let catalog_path = lookup("CATALOG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| workspace.join("config/catalog.yaml"));

        Ok(Self {
            port,
            frontend_dir,
            catalog_path,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn workspace_dir(manifest_dir: Option<String>) -> PathBuf {
    match manifest_dir {
        Some(dir) => PathBuf::from(dir).join(".."),
        None => PathBuf::from("/usr/src/app"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_resolve_against_the_workspace() {
        let config = ServerConfig::from_lookup(lookup(&[("CARGO_MANIFEST_DIR", "/work/backend")])).unwrap();
        assert_eq!(config.port, 8081);
        assert_eq!(config.frontend_dir, PathBuf::from("/work/backend/../frontend/dist"));
        assert_eq!(config.catalog_path, PathBuf::from("/work/backend/../config/catalog.yaml"));
        assert_eq!(config.bind_address(), "0.0.0.0:8081");
    }

    #[test]
    fn explicit_variables_win() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("PORT", "9000"),
            ("FRONTEND_DIR", "/srv/www"),
            ("CATALOG_PATH", "/etc/ecosnap/catalog.yaml"),
        ]))
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.frontend_dir, PathBuf::from("/srv/www"));
        assert_eq!(config.catalog_path, PathBuf::from("/etc/ecosnap/catalog.yaml"));
    }

    #[test]
    fn bad_port_is_a_config_error() {
        let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));
    }
}
