use std::env;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::{Port, PortError, SiteOrigin, SiteOriginError, SlotCount, SlotCountError};

const DEFAULT_PORT: u16 = 3000;

/// Total number of placeholder images. One constant feeds both the
/// generator and the selector so they cannot disagree.
const TOTAL_IMAGES: u32 = 1000;

/// Public assets directory, relative to the deployment root.
const PUBLIC_DIR: &str = "public";

/// Gallery location inside the public directory. Images end up served at
/// /images/ogp/<file>.
const GALLERY_SUBDIR: &str = "images/ogp";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT is not a number: '{0}'")]
    PortNotANumber(String),

    #[error("Invalid PORT: {0}")]
    Port(#[from] PortError),

    #[error("Invalid SITE_ORIGIN: {0}")]
    Origin(#[from] SiteOriginError),

    #[error("Invalid image total: {0}")]
    Count(#[from] SlotCountError),
}

/// Runtime configuration, sourced from the environment with localhost
/// defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: Port,
    pub site_origin: SiteOrigin,
    pub image_count: SlotCount,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(env::var("PORT").ok(), env::var("SITE_ORIGIN").ok())
    }

    fn resolve(port: Option<String>, origin: Option<String>) -> Result<Self, ConfigError> {
        let port = match port {
            Some(raw) => {
                let value = raw
                    .parse()
                    .map_err(|_| ConfigError::PortNotANumber(raw.clone()))?;
                Port::new(value)?
            }
            None => Port::new(DEFAULT_PORT)?,
        };

        let site_origin = match origin {
            Some(raw) => SiteOrigin::new(&raw)?,
            None => SiteOrigin::new(&format!("http://localhost:{port}"))?,
        };

        Ok(Self {
            port,
            site_origin,
            image_count: SlotCount::new(TOTAL_IMAGES)?,
        })
    }

    pub fn public_dir(&self) -> PathBuf {
        PathBuf::from(PUBLIC_DIR)
    }

    pub fn gallery_dir(&self) -> PathBuf {
        self.public_dir().join(GALLERY_SUBDIR)
    }
}
