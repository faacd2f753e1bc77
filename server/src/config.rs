//! Server configuration.
//!
//! Sources, lowest precedence first: built-in defaults, an optional TOML
//! file, `FOLIO__*` environment variables, then the variables cargo-leptos
//! exports when it runs the server. Command-line flags are applied last by
//! the binary through [`ServerConfig::apply_overrides`].

use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ServerError};

/// Default listen address, matching the workspace `site-addr`.
pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// cargo-leptos variables and the keys they override.
const LEPTOS_ENV: [(&str, &str); 4] = [
    ("LEPTOS_SITE_ADDR", "addr"),
    ("LEPTOS_SITE_ROOT", "site_root"),
    ("LEPTOS_SITE_PKG_DIR", "site_pkg_dir"),
    ("LEPTOS_OUTPUT_NAME", "output_name"),
];

/// Runtime settings of the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address (`host:port`).
    pub addr: String,

    /// Directory holding the built site.
    pub site_root: PathBuf,

    /// Directory under `site_root` with the compiled JS, WASM, and CSS.
    pub site_pkg_dir: String,

    /// File stem of the compiled bundle (`{output_name}.js`, ...).
    pub output_name: String,

    /// Public origin used in `robots.txt` and `sitemap.xml`.
    pub base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            site_root: PathBuf::from("target/site"),
            site_pkg_dir: "pkg".to_string(),
            output_name: "folio".to_string(),
            base_url: format!("http://{DEFAULT_ADDR}"),
        }
    }
}

impl ServerConfig {
    /// Load configuration from `path` (if it exists) and the process environment.
    pub fn load(path: &Path) -> Result<Self> {
        let leptos_vars = LEPTOS_ENV
            .iter()
            .filter_map(|(var, key)| std::env::var(var).ok().map(|value| (*key, value)));
        Self::load_with(path, leptos_vars)
    }

    /// Load configuration with explicit cargo-leptos overrides.
    pub fn load_with<I>(path: &Path, leptos_vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'static str, String)>,
    {
        let defaults = Self::default();
        let mut builder = config::Config::builder()
            .set_default("addr", defaults.addr)?
            .set_default("site_root", defaults.site_root.to_string_lossy().into_owned())?
            .set_default("site_pkg_dir", defaults.site_pkg_dir)?
            .set_default("output_name", defaults.output_name)?
            .set_default("base_url", defaults.base_url)?
            .add_source(config::File::from(path).required(false))
            .add_source(config::Environment::with_prefix("FOLIO").separator("__"));

        for (key, value) in leptos_vars {
            tracing::debug!(key, value = %value, "applying cargo-leptos override");
            builder = builder.set_override(key, value)?;
        }

        let config: ServerConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides.
    pub fn apply_overrides(&mut self, addr: Option<String>, site_root: Option<PathBuf>) {
        if let Some(addr) = addr {
            self.addr = addr;
        }
        if let Some(site_root) = site_root {
            self.site_root = site_root;
        }
    }

    /// Parsed listen address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.addr
            .parse()
            .map_err(|e| ServerError::invalid_addr(&self.addr, e))
    }

    /// Directory served under `/{site_pkg_dir}`.
    pub fn pkg_path(&self) -> PathBuf {
        self.site_root.join(&self.site_pkg_dir)
    }

    /// Absolute URL for a site path.
    pub fn url_for(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    fn validate(&self) -> Result<()> {
        if self.output_name.is_empty() {
            return Err(ServerError::invalid_config("output_name cannot be empty"));
        }

        if self.site_pkg_dir.trim_matches('/').is_empty() {
            return Err(ServerError::invalid_config("site_pkg_dir cannot be empty"));
        }

        if self.base_url.ends_with('/') {
            tracing::warn!("base_url should not have a trailing slash");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_overrides() -> Vec<(&'static str, String)> {
        Vec::new()
    }

    #[test]
    fn test_defaults_without_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config =
            ServerConfig::load_with(&dir.path().join("folio.toml"), no_overrides()).expect("load");

        assert_eq!(config.addr, "127.0.0.1:3000");
        assert_eq!(config.site_root, PathBuf::from("target/site"));
        assert_eq!(config.site_pkg_dir, "pkg");
        assert_eq!(config.output_name, "folio");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("folio.toml");
        std::fs::write(
            &path,
            r#"
addr = "0.0.0.0:8080"
site_root = "dist"
base_url = "https://thomp.dev"
"#,
        )
        .expect("write");

        let config = ServerConfig::load_with(&path, no_overrides()).expect("load");

        assert_eq!(config.addr, "0.0.0.0:8080");
        assert_eq!(config.site_root, PathBuf::from("dist"));
        assert_eq!(config.base_url, "https://thomp.dev");
        assert_eq!(config.output_name, "folio");
    }

    #[test]
    fn test_leptos_overrides_win_over_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("folio.toml");
        std::fs::write(&path, "addr = \"0.0.0.0:8080\"\n").expect("write");

        let config = ServerConfig::load_with(
            &path,
            vec![
                ("addr", "127.0.0.1:4000".to_string()),
                ("output_name", "site".to_string()),
            ],
        )
        .expect("load");

        assert_eq!(config.addr, "127.0.0.1:4000");
        assert_eq!(config.output_name, "site");
    }

    #[test]
    fn test_empty_output_name_rejected() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("folio.toml");
        std::fs::write(&path, "output_name = \"\"\n").expect("write");

        let result = ServerConfig::load_with(&path, no_overrides());
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("output_name cannot be empty")
        );
    }

    #[test]
    fn test_slash_only_pkg_dir_rejected() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("folio.toml");

        for pkg_dir in ["/", "//"] {
            std::fs::write(&path, format!("site_pkg_dir = \"{pkg_dir}\"\n")).expect("write");

            let result = ServerConfig::load_with(&path, no_overrides());
            assert!(result.is_err(), "{pkg_dir}");
            assert!(
                result
                    .unwrap_err()
                    .to_string()
                    .contains("site_pkg_dir cannot be empty")
            );
        }
    }

    #[test]
    fn test_apply_overrides() {
        let mut config = ServerConfig::default();
        config.apply_overrides(Some("0.0.0.0:80".to_string()), None);

        assert_eq!(config.addr, "0.0.0.0:80");
        assert_eq!(config.site_root, PathBuf::from("target/site"));
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig::default();
        assert_eq!(
            config.socket_addr().expect("valid addr"),
            "127.0.0.1:3000".parse::<SocketAddr>().expect("parse")
        );

        let config = ServerConfig {
            addr: "localhost".to_string(),
            ..ServerConfig::default()
        };
        assert!(matches!(
            config.socket_addr(),
            Err(ServerError::InvalidAddr { .. })
        ));
    }

    #[test]
    fn test_url_for() {
        let config = ServerConfig {
            base_url: "https://thomp.dev/".to_string(),
            ..ServerConfig::default()
        };
        assert_eq!(config.url_for("/trips"), "https://thomp.dev/trips");
        assert_eq!(config.url_for("/"), "https://thomp.dev/");
    }

    #[test]
    fn test_pkg_path() {
        let config = ServerConfig::default();
        assert_eq!(config.pkg_path(), PathBuf::from("target/site/pkg"));
    }
}
