use std::env;
use std::path::PathBuf;

use anyhow::Context;

/// Where the static server listens and what it serves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub host: String,
    pub port: u16,
    /// Trunk output: `index.html` plus the wasm bundle.
    pub dist_dir: PathBuf,
    pub assets_dir: PathBuf,
}

impl SiteConfig {
    /// Loads `.env` if present, then reads `SITE_*` variables.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = match lookup("SITE_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("SITE_PORT must be a port number, got {raw:?}"))?,
            None => 3000,
        };

        Ok(Self {
            host: lookup("SITE_HOST").unwrap_or_else(|| "127.0.0.1".into()),
            port,
            dist_dir: lookup("SITE_DIST").unwrap_or_else(|| "dist".into()).into(),
            assets_dir: lookup("SITE_ASSETS").unwrap_or_else(|| "assets".into()).into(),
        })
    }

    pub fn index_file(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }
}
