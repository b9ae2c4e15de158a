//! equipreg-host: runs the four registries behind the two host primitives.
//!
//! [`Chain`] owns one instance of each registry, the current sender, and
//! the block height. It supplies `caller`/`clock` to every call, refuses to
//! move the clock backwards, and routes named calls through
//! `equipreg-interchange`. [`DeployConfig`] describes who administers each
//! registry at genesis.

pub mod chain;
pub mod config;
mod error;

pub use chain::Chain;
pub use config::{read_deploy_config, ChainSettings, DeployConfig, RegistryConfig};
pub use error::{ConfigError, HostError};
