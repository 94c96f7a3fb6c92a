//! Error types for chain construction and model validation.

use miette::Diagnostic;
use thiserror::Error;

/// Fatal errors raised while building layers and chains.
///
/// All variants are programming or configuration errors. They are returned
/// to the immediate caller without a partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ChainError {
    /// The typed-language layer was requested without a project root.
    #[error("typed-language layer requested without a project root")]
    #[diagnostic(
        code(lint_layers::missing_project_root),
        help("set `root_dir` to the directory that contains tsconfig.json")
    )]
    MissingProjectRoot,

    /// The customization is not usable as a layer transform, or its output
    /// lacks the minimal layer shape.
    #[error("malformed customization: {reason}")]
    #[diagnostic(code(lint_layers::malformed_customization))]
    MalformedCustomization {
        /// What was wrong with the customization.
        reason: String,
    },

    /// A named capability could not be resolved at startup.
    #[error("capability `{name}` ({package}) could not be resolved: {reason}")]
    #[diagnostic(
        code(lint_layers::unresolvable_capability),
        help("install the missing package or resolve capabilities from another node_modules root")
    )]
    UnresolvableCapability {
        /// Short capability name (e.g., `prettier`).
        name: String,
        /// Package specifier the capability maps to.
        package: String,
        /// Why resolution failed.
        reason: String,
    },

    /// Layer data failed model validation.
    #[error("invalid layer data: {0}")]
    #[diagnostic(code(lint_layers::invalid_layer_data))]
    Model(#[from] ModelError),
}

impl ChainError {
    /// Shorthand for [`ChainError::MalformedCustomization`].
    #[must_use]
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedCustomization {
            reason: reason.into(),
        }
    }
}

/// Validation errors for model newtypes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Rule identifier is empty.
    #[error("rule identifier must not be empty")]
    EmptyRuleId,

    /// Severity string or level is not one of off/warn/error (0/1/2).
    #[error("unknown severity `{value}`, expected: off, warn, error (or 0, 1, 2)")]
    UnknownSeverity {
        /// The invalid value.
        value: String,
    },

    /// A rule setting array had no severity.
    #[error("rule setting array must start with a severity")]
    MissingSeverity,

    /// File pattern is empty.
    #[error("file pattern must not be empty")]
    EmptyFilePattern,

    /// File pattern has invalid glob syntax.
    #[error("invalid file pattern `{pattern}`: {reason}")]
    InvalidFilePattern {
        /// The pattern that failed to compile.
        pattern: String,
        /// Reason reported by the glob compiler.
        reason: String,
    },

    /// Source type is not module/commonjs/script.
    #[error("unknown source type `{value}`, expected: module, commonjs, script")]
    UnknownSourceType {
        /// The invalid value.
        value: String,
    },

    /// ECMAScript version is neither `latest` nor a number.
    #[error("unknown ecma version `{value}`, expected `latest` or a year")]
    UnknownEcmaVersion {
        /// The invalid value.
        value: String,
    },
}
