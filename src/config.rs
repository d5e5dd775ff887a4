//! Auth Configuration
//!
//! YAML document supplying custom roles and guest access settings:
//!
//! ```yaml
//! roles:
//!   - role_id: listener
//!     name: Listener
//!     description: Browse and listen only
//!     is_system: false
//!     permissions: [player.view, library.read]
//! guest:
//!   enabled: true
//!   url: https://music.example/guest
//!   capabilities:
//!     can_control_volume: true
//! ```

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::{
    guest::GuestAccessConfig,
    roles::{Role, RoleError, RoleRegistry},
};

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading the configuration file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// A configured role was rejected by the registry
    #[error("Invalid role: {0}")]
    Role(#[from] RoleError),
}

/// Auth configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Custom roles layered over the built-in ones.
    pub roles: Vec<Role>,

    /// Guest access settings.
    pub guest: GuestAccessConfig,
}

impl AuthConfig {
    /// Parse a configuration document.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or a role names an unknown scope.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_norway::from_str(yaml)?)
    }

    /// Read and parse a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&contents)?;

        info!(
            path = %path.display(),
            custom_roles = config.roles.len(),
            guest_enabled = config.guest.enabled,
            "loaded auth config"
        );

        Ok(config)
    }

    /// Build a role registry from the configured custom roles.
    ///
    /// # Errors
    ///
    /// Returns an error if a custom role collides with a built-in role or
    /// claims to be a system role.
    pub fn build_registry(&self) -> Result<RoleRegistry, ConfigError> {
        Ok(RoleRegistry::with_custom_roles(self.roles.iter().cloned())?)
    }
}
