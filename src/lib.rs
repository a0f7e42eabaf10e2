#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![allow(clippy::module_inception)]

pub mod asset_paths;
pub mod collaborators;
pub mod config;
pub mod error;
pub mod identifier;
pub mod mode;
pub mod plugin;
pub mod synthesis;

pub use config::PluginConfig;
pub use error::{Error, Result};
pub use identifier::ModuleIdentifier;
pub use mode::ResolutionMode;
pub use plugin::{Enforce, Outcome, SvgPlugin};
