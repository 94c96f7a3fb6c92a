//! # lint-layers-rules
//!
//! Built-in rule catalog for lint-layers.
//!
//! | Item | Layer | Contents |
//! |------|-------|----------|
//! | [`recommended_layer`] | 1st | the analysis tool's recommended core rules |
//! | [`formatter_compat_layer`] | 2nd | formatter-conflicting core rules switched off |
//! | [`base_rules`] | 3rd | the project's base policy (formatting delegation, unused symbols, import order, anti-patterns, misc) |
//!
//! [`BASE_CAPABILITIES`] declares the plugins the base rules need; it is
//! resolved once at startup into a
//! [`CapabilityRegistry`](lint_layers_core::CapabilityRegistry).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod base;
mod formatter;
mod recommended;

pub use base::{base_rules, BASE_CAPABILITIES, BASE_PLUGINS};
pub use formatter::{formatter_compat_layer, FORMATTER_COMPAT_LAYER};
pub use recommended::{recommended_layer, RECOMMENDED_LAYER};

/// Re-export core types for convenience.
pub use lint_layers_core::{Layer, RuleTable, Severity};
