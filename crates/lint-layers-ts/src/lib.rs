//! # lint-layers-ts
//!
//! Typed-language layer for lint-layers.
//!
//! Adds stricter, type-aware rules for TypeScript sources on top of the
//! base rules. It reuses `lint-layers-core` types and provides:
//!
//! - [`build_typed_layer`], the layer factory, parameterized by project root
//! - [`typescript_rules`], the type-aware rule table
//! - [`TYPESCRIPT_CAPABILITIES`], the plugin and parser the layer binds
//! - [`detect_project`] to find a `tsconfig.json`

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod detect;
pub mod layer;
pub mod rules;

pub use detect::detect_project;
pub use layer::{
    build_typed_layer, EXTRA_FILE_EXTENSIONS, PROJECT_DESCRIPTOR, TYPED_FILES,
    TYPESCRIPT_CAPABILITIES, TYPESCRIPT_LAYER, TYPESCRIPT_PARSER, TYPESCRIPT_PLUGIN,
};
pub use rules::typescript_rules;
