use std::env;

use anyhow::{Context, Result};

/// Port used when PORT is unset.
pub const DEFAULT_PORT: u16 = 5000;
/// Frontend origin allowed when TONEMETER_ALLOWED_ORIGINS is unset.
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";
/// Upload cap when TONEMETER_MAX_UPLOAD_BYTES is unset (10 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
/// Rows scored at once per batch when TONEMETER_BATCH_CONCURRENCY is unset.
pub const DEFAULT_BATCH_CONCURRENCY: usize = 8;

/// Which browser origins may call the `/api/*` routes.
#[derive(Debug, Clone, PartialEq)]
pub enum AllowedOrigins {
    /// Only these exact origins (the default, restrictive policy)
    List(Vec<String>),
    /// Any origin — opt in with TONEMETER_ALLOWED_ORIGINS=*
    Any,
}

/// Central configuration loaded from environment variables.
///
/// Read once at startup and handed to the server as `Arc<Config>`; nothing
/// reads the environment after that. The .env file is loaded automatically
/// at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// Listening port (PORT, default 5000)
    pub port: u16,
    /// Bind address (TONEMETER_BIND, default all interfaces)
    pub bind: String,
    /// CORS origins for /api/* (TONEMETER_ALLOWED_ORIGINS, comma-separated)
    pub allowed_origins: AllowedOrigins,
    /// Request body cap in bytes, mostly relevant to CSV uploads
    pub max_upload_bytes: usize,
    /// How many CSV rows are scored concurrently within one request
    pub batch_concurrency: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind: "0.0.0.0".to_string(),
            allowed_origins: AllowedOrigins::List(vec![DEFAULT_ALLOWED_ORIGIN.to_string()]),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            batch_concurrency: DEFAULT_BATCH_CONCURRENCY,
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key → value lookup. Unset or blank
    /// variables fall back to defaults; unparseable numbers are an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let port = match get("PORT") {
            Some(v) => v
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a port number, got {v:?}"))?,
            None => defaults.port,
        };

        let max_upload_bytes = match get("TONEMETER_MAX_UPLOAD_BYTES") {
            Some(v) => v.trim().parse().with_context(|| {
                format!("TONEMETER_MAX_UPLOAD_BYTES must be a byte count, got {v:?}")
            })?,
            None => defaults.max_upload_bytes,
        };

        let batch_concurrency = match get("TONEMETER_BATCH_CONCURRENCY") {
            Some(v) => {
                let n: usize = v.trim().parse().with_context(|| {
                    format!("TONEMETER_BATCH_CONCURRENCY must be a positive integer, got {v:?}")
                })?;
                if n == 0 {
                    anyhow::bail!("TONEMETER_BATCH_CONCURRENCY must be at least 1");
                }
                n
            }
            None => defaults.batch_concurrency,
        };

        let allowed_origins = match get("TONEMETER_ALLOWED_ORIGINS") {
            Some(v) => parse_origins(&v)?,
            None => defaults.allowed_origins,
        };

        Ok(Self {
            port,
            bind: get("TONEMETER_BIND")
                .map(|v| v.trim().to_string())
                .unwrap_or(defaults.bind),
            allowed_origins,
            max_upload_bytes,
            batch_concurrency,
        })
    }
}

fn parse_origins(raw: &str) -> Result<AllowedOrigins> {
    if raw.trim() == "*" {
        return Ok(AllowedOrigins::Any);
    }
    let origins: Vec<String> = raw
        .split(',')
        .map(|o| o.trim().trim_end_matches('/').to_string())
        .filter(|o| !o.is_empty())
        .collect();
    if origins.is_empty() {
        anyhow::bail!("TONEMETER_ALLOWED_ORIGINS has no origins in {raw:?}");
    }
    if let Some(bad) = origins.iter().find(|o| o.as_str() == "*") {
        anyhow::bail!("TONEMETER_ALLOWED_ORIGINS can't mix {bad:?} with named origins");
    }
    Ok(AllowedOrigins::List(origins))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config.port, 5000);
        assert_eq!(config.bind, "0.0.0.0");
        assert_eq!(
            config.allowed_origins,
            AllowedOrigins::List(vec!["http://localhost:3000".to_string()])
        );
        assert_eq!(config.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
        assert_eq!(config.batch_concurrency, 8);
    }

    #[test]
    fn reads_port() {
        assert_eq!(load(&[("PORT", "8080")]).unwrap().port, 8080);
    }

    #[test]
    fn blank_port_uses_default() {
        assert_eq!(load(&[("PORT", "  ")]).unwrap().port, 5000);
    }

    #[test]
    fn invalid_port_is_an_error() {
        let err = load(&[("PORT", "http")]).unwrap_err();
        assert!(err.to_string().contains("PORT"), "{err}");
        assert!(load(&[("PORT", "70000")]).is_err());
    }

    #[test]
    fn origins_are_split_and_trimmed() {
        let config = load(&[(
            "TONEMETER_ALLOWED_ORIGINS",
            "https://a.example/, https://b.example",
        )])
        .unwrap();
        assert_eq!(
            config.allowed_origins,
            AllowedOrigins::List(vec![
                "https://a.example".to_string(),
                "https://b.example".to_string()
            ])
        );
    }

    #[test]
    fn star_means_any_origin() {
        let config = load(&[("TONEMETER_ALLOWED_ORIGINS", "*")]).unwrap();
        assert_eq!(config.allowed_origins, AllowedOrigins::Any);
    }

    #[test]
    fn star_mixed_with_names_is_rejected() {
        assert!(load(&[("TONEMETER_ALLOWED_ORIGINS", "*,https://a.example")]).is_err());
    }

    #[test]
    fn zero_concurrency_is_rejected() {
        assert!(load(&[("TONEMETER_BATCH_CONCURRENCY", "0")]).is_err());
    }
}
