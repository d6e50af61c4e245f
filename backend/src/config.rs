use std::{env, fmt::Display, net::SocketAddr, path::PathBuf, str::FromStr};

use tracing::{info, warn};

use crate::Error;

#[derive(Clone, Debug)]
pub struct TlsPaths {
    pub cert_path: PathBuf,
    pub key_path: PathBuf,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub site_pkg_dir: PathBuf,
    pub assets_dir: PathBuf,
    pub tls: Option<TlsPaths>,
    pub session_secure: bool,
}

impl Config {
    /// Reads the environment, after loading `.env` when one exists.
    pub fn from_env() -> Result<Self, Error> {
        if let Err(e) = dotenvy::dotenv() {
            warn!("No .env file loaded: {e}");
        }
        let tls = match (var("TLS_CERT_PATH"), var("TLS_KEY_PATH")) {
            (Some(cert_path), Some(key_path)) => Some(TlsPaths {
                cert_path: cert_path.into(),
                key_path: key_path.into(),
            }),
            (None, None) => None,
            _ => {
                return Err(Error::Config(
                    "TLS_CERT_PATH and TLS_KEY_PATH must be set together".to_string(),
                ));
            }
        };
        Ok(Self {
            database_url: var("DATABASE_URL")
                .ok_or_else(|| Error::Config("DATABASE_URL must be set".to_string()))?,
            bind_addr: try_load("BIND_ADDR", "0.0.0.0:8080")?,
            site_pkg_dir: try_load("SITE_PKG_DIR", "target/site/pkg")?,
            assets_dir: try_load("ASSETS_DIR", "backend/assets")?,
            tls,
            session_secure: try_load("SESSION_SECURE", "false")?,
        })
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T, Error>
where
    T::Err: Display,
{
    let value = var(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });
    value
        .parse()
        .map_err(|e| Error::Config(format!("Invalid {key} value {value:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_load_default() {
        let addr: SocketAddr = try_load("INVOICES_TEST_UNSET_ADDR", "127.0.0.1:3000").unwrap();
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_try_load_rejects_malformed_default() {
        let result: Result<bool, Error> = try_load("INVOICES_TEST_UNSET_FLAG", "maybe");
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
