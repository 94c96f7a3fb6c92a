//! # lint-layers
//!
//! Layered lint configuration builder.
//!
//! This is the main facade crate. It re-exports the core model, the rule
//! catalog and the typed-language layer, and adds the chain builder:
//!
//! ```text
//! [ recommended defaults, formatter compatibility, base (customizable), typescript? ]
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lint_layers::{builtin_registries, ChainBuilder, ChainRequest, Customization, TypedLayerOptions};
//!
//! let registries = builtin_registries()?;
//! let chain = ChainBuilder::new(&registries).build_chain(
//!     ChainRequest::new()
//!         .with_typescript(TypedLayerOptions::new("/work/app"))
//!         .with_customize(Customization::hook(|base| base.with_name("app/base"))),
//! )?;
//! println!("{}", serde_json::to_string_pretty(&chain)?);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

// Re-export core types and traits
pub use lint_layers_core::*;

/// Built-in rule catalog and external layers.
pub mod rules {
    pub use lint_layers_rules::*;
}

/// Typed-language layer.
pub mod ts {
    pub use lint_layers_ts::*;
}

mod builder;
mod registries;

pub use builder::{build_chain, ChainBuilder, BASE_LAYER};
pub use registries::{builtin_capabilities, builtin_registries, resolve_registries};
