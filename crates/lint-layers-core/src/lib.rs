//! # lint-layers-core
//!
//! Core data model for layered lint configurations.
//!
//! A configuration is a [`Chain`] of [`Layer`]s handed to an external
//! analysis tool. Each layer bundles a file scope, [`LanguageOptions`],
//! plugin bindings and a [`RuleTable`]; when the tool evaluates a file,
//! later layers override earlier ones, one rule identifier at a time.
//!
//! This crate provides:
//!
//! - [`RuleTable`], [`RuleSetting`], [`Severity`] for rule entries
//! - [`Layer`] and [`Chain`] with [`Chain::resolve_for`] to preview what
//!   applies to a file
//! - [`CapabilityRegistry`] for plugins and parsers resolved at startup
//! - [`ChainRequest`] and [`Customization`] describing what to build
//! - [`Config`] for loading requests from TOML
//!
//! ## Example
//!
//! ```ignore
//! use lint_layers_core::{Chain, Layer, RuleTable, Severity};
//!
//! let chain = Chain::new(vec![
//!     Layer::new().with_rules(RuleTable::new().with("no-empty", Severity::Error)),
//!     Layer::new().with_rules(RuleTable::new().with("no-empty", Severity::Off)),
//! ]);
//! let resolved = chain.resolve_for(std::path::Path::new("src/index.js"));
//! assert!(!resolved.rule("no-empty").unwrap().is_enabled());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod capability;
mod chain;
mod config;
mod error;
mod layer;
mod pattern;
mod registry;
mod request;
mod types;

pub use capability::{
    Capability, CapabilityKind, CapabilityRegistry, CapabilityResolver, CapabilitySpec,
    NodeModulesResolver, PluginBindings, StaticResolver,
};
pub use chain::{Chain, ResolvedConfig};
pub use config::{Config, ConfigError};
pub use error::{ChainError, ModelError};
pub use layer::{EcmaVersion, LanguageOptions, Layer, ParserOptions, SourceType};
pub use pattern::FilePattern;
pub use registry::Registries;
pub use request::{ChainRequest, Customization, CustomizeFn, LayerPatch, TypedLayerOptions};
pub use types::{RuleId, RuleSetting, RuleTable, Severity};
