//! Deployment configuration.
//!
//! The deploy config TOML names the genesis height and the deploying
//! principal, which becomes the admin of every registry unless a registry
//! section overrides it.
//!
//! # Example
//!
//! ```toml
//! [chain]
//! genesis_height = 100
//! deployer = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM"
//!
//! [registries.testing-certification]
//! admin = "ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use equipreg_core::{Height, Identity};
use equipreg_registry::RegistryKind;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// ── Types ─────────────────────────────────────────────────────────────────────

/// Top-level deploy configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeployConfig {
    pub chain: ChainSettings,
    /// Per-registry overrides, keyed by registry name.
    #[serde(default)]
    pub registries: BTreeMap<String, RegistryConfig>,
}

/// `[chain]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChainSettings {
    /// Height of the first block. Defaults to 0.
    #[serde(default)]
    pub genesis_height: Height,
    /// Principal that deploys the registries and submits calls until the
    /// sender is changed.
    pub deployer: Identity,
}

/// `[registries.<name>]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    /// Initial admin; the deployer when absent.
    pub admin: Option<Identity>,
}

// ── Functions ─────────────────────────────────────────────────────────────────

impl DeployConfig {
    /// A config where `deployer` administers every registry.
    pub fn new(deployer: Identity, genesis_height: Height) -> Self {
        DeployConfig {
            chain: ChainSettings {
                genesis_height,
                deployer,
            },
            registries: BTreeMap::new(),
        }
    }

    /// Parse and validate a deploy config.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: DeployConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every `[registries.*]` section names a known registry.
    ///
    /// Returns all unknown names at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let errors: Vec<String> = self
            .registries
            .keys()
            .filter(|name| name.parse::<RegistryKind>().is_err())
            .map(|name| {
                format!(
                    "unknown registry '{}' (expected one of: {})",
                    name,
                    RegistryKind::ALL
                        .iter()
                        .map(|k| k.name())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(errors))
        }
    }

    /// The initial admin of `kind`.
    pub fn admin_for(&self, kind: RegistryKind) -> &Identity {
        self.registries
            .get(kind.name())
            .and_then(|r| r.admin.as_ref())
            .unwrap_or(&self.chain.deployer)
    }
}

/// Read, parse, and validate a deploy config TOML file from `path`.
pub fn read_deploy_config(path: &Path) -> Result<DeployConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    DeployConfig::from_toml_str(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const DEPLOYER: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";
    const CERTIFIER_ADMIN: &str = "ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG";

    #[test]
    fn test_parse_full_config() {
        let config = DeployConfig::from_toml_str(&format!(
            r#"
[chain]
genesis_height = 100
deployer = "{DEPLOYER}"

[registries.testing-certification]
admin = "{CERTIFIER_ADMIN}"
"#
        ))
        .unwrap();

        assert_eq!(config.chain.genesis_height, Height(100));
        assert_eq!(
            config.admin_for(RegistryKind::TestingCertification).as_str(),
            CERTIFIER_ADMIN
        );
        assert_eq!(
            config.admin_for(RegistryKind::MaintenanceHistory).as_str(),
            DEPLOYER
        );
    }

    #[test]
    fn test_genesis_defaults_to_zero() {
        let config =
            DeployConfig::from_toml_str(&format!("[chain]\ndeployer = \"{DEPLOYER}\"\n")).unwrap();
        assert_eq!(config.chain.genesis_height, Height(0));
        assert!(config.registries.is_empty());
    }

    #[test]
    fn test_missing_deployer_is_parse_error() {
        let err = DeployConfig::from_toml_str("[chain]\ngenesis_height = 1\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_empty_principal_is_parse_error() {
        let err = DeployConfig::from_toml_str("[chain]\ndeployer = \"\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_unknown_registries_all_reported() {
        let err = DeployConfig::from_toml_str(&format!(
            r#"
[chain]
deployer = "{DEPLOYER}"

[registries.asset-registry]
[registries.fleet]
"#
        ))
        .unwrap_err();

        match err {
            ConfigError::Invalid(errors) => {
                assert_eq!(errors.len(), 2);
                assert!(errors[0].contains("asset-registry"));
                assert!(errors[1].contains("fleet"));
            }
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn test_read_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[chain]\ngenesis_height = 42\ndeployer = \"{DEPLOYER}\"").unwrap();

        let config = read_deploy_config(file.path()).unwrap();
        assert_eq!(config.chain.genesis_height, Height(42));
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_deploy_config(&dir.path().join("deploy.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("deploy.toml"));
    }
}
