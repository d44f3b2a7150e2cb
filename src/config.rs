//! Configuration types
//!
//! Defaults for the range calculator, the record listing, and the HTTP
//! service, loaded from YAML. Every key is optional.
//!
//! ```yaml
//! pagination:
//!   siblings: 1
//!   boundaries: 1
//! listing:
//!   page_size: 15
//!   page_param: page
//!   default_page: 1
//! server:
//!   port: 8080
//! ```

use crate::error::{Error, Result};
use crate::pagination::{DEFAULT_BOUNDARIES, DEFAULT_PAGE_SIZE, DEFAULT_SIBLINGS};
use crate::query::{DEFAULT_PAGE, PAGE_PARAM};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Range calculator defaults
    #[serde(default)]
    pub pagination: PaginationSettings,

    /// Record listing defaults
    #[serde(default)]
    pub listing: ListingSettings,

    /// HTTP service settings
    #[serde(default)]
    pub server: ServerSettings,
}

impl AppConfig {
    /// Parse and validate a YAML config
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a YAML config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&contents)?;
        tracing::debug!(path = %path.display(), ?config, "Loaded config");
        Ok(config)
    }

    /// Load `path` if given, otherwise use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Reject values the listing cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.listing.page_size == 0 {
            return Err(Error::invalid_config(
                "listing.page_size",
                "must be at least 1",
            ));
        }
        if self.listing.page_param.trim().is_empty() {
            return Err(Error::invalid_config(
                "listing.page_param",
                "must not be empty",
            ));
        }
        if self.listing.default_page == 0 {
            return Err(Error::invalid_config(
                "listing.default_page",
                "pages are 1-based",
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Pagination Settings
// ============================================================================

/// Range calculator defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationSettings {
    /// Pages shown next to the active page on each side
    #[serde(default = "default_siblings")]
    pub siblings: u32,

    /// Pages always shown at each end
    #[serde(default = "default_boundaries")]
    pub boundaries: u32,
}

impl Default for PaginationSettings {
    fn default() -> Self {
        Self {
            siblings: default_siblings(),
            boundaries: default_boundaries(),
        }
    }
}

fn default_siblings() -> u32 {
    DEFAULT_SIBLINGS
}

fn default_boundaries() -> u32 {
    DEFAULT_BOUNDARIES
}

// ============================================================================
// Listing Settings
// ============================================================================

/// Record listing defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingSettings {
    /// Records per page
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Query parameter that carries the active page
    #[serde(default = "default_page_param")]
    pub page_param: String,

    /// Page shown when a request names none
    #[serde(default = "default_page")]
    pub default_page: u32,
}

impl Default for ListingSettings {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            page_param: default_page_param(),
            default_page: default_page(),
        }
    }
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_page_param() -> String {
    PAGE_PARAM.to_string()
}

fn default_page() -> u32 {
    DEFAULT_PAGE
}

// ============================================================================
// Server Settings
// ============================================================================

/// HTTP service settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

fn default_port() -> u16 {
    8080
}
