//! Typed-language layer factory.

use crate::rules::typescript_rules;
use lint_layers_core::{
    CapabilitySpec, ChainError, EcmaVersion, FilePattern, LanguageOptions, Layer, ParserOptions,
    Registries, SourceType, TypedLayerOptions,
};
use lint_layers_rules::BASE_PLUGINS;
use tracing::debug;

/// Name of the typed-language layer.
pub const TYPESCRIPT_LAYER: &str = "lint-layers/typescript";

/// Plugin namespace of the type-aware rules.
pub const TYPESCRIPT_PLUGIN: &str = "@typescript-eslint";

/// Capability name of the typed-source parser.
pub const TYPESCRIPT_PARSER: &str = "@typescript-eslint/parser";

/// Startup capability table for the typed layer.
pub const TYPESCRIPT_CAPABILITIES: &[CapabilitySpec] = &[
    CapabilitySpec::plugin(TYPESCRIPT_PLUGIN, "@typescript-eslint/eslint-plugin"),
    CapabilitySpec::parser(TYPESCRIPT_PARSER, "@typescript-eslint/parser"),
];

/// Files the typed layer applies to.
pub const TYPED_FILES: &str = "**/*.{ts,tsx,mts}";

/// Project descriptor, relative to the project root.
pub const PROJECT_DESCRIPTOR: &str = "tsconfig.json";

/// Non-standard extensions the parser treats as modules.
pub const EXTRA_FILE_EXTENSIONS: &[&str] = &[".cjs", ".mjs"];

/// Builds the typed-language layer for the project rooted at
/// `options.root_dir`.
///
/// The layer is scoped to typed sources, parses them with the typed parser
/// against `<root>/tsconfig.json`, binds the base plugins plus the
/// type-aware plugin, and carries the base rules overridden by
/// [`typescript_rules`]. Place it after the base layer so its entries win.
///
/// # Errors
///
/// - [`ChainError::MissingProjectRoot`] if no root is given
/// - [`ChainError::UnresolvableCapability`] if `registries` was resolved
///   without the typed capabilities
pub fn build_typed_layer(
    options: &TypedLayerOptions,
    registries: &Registries,
) -> Result<Layer, ChainError> {
    let root = options.require_root()?;
    let capabilities = registries.capabilities();

    let files = FilePattern::new(TYPED_FILES)?;

    let parser_options = ParserOptions {
        project: root.join(PROJECT_DESCRIPTOR),
        tsconfig_root_dir: root.to_path_buf(),
        extra_file_extensions: EXTRA_FILE_EXTENSIONS.iter().map(|e| (*e).to_string()).collect(),
        ecma_version: Some(EcmaVersion::Latest),
        source_type: Some(SourceType::Module),
    };
    let language_options = LanguageOptions {
        parser: Some(capabilities.require(TYPESCRIPT_PARSER)?.clone()),
        parser_options: Some(parser_options),
        ..LanguageOptions::default()
    };

    let plugins = capabilities
        .bindings(BASE_PLUGINS)?
        .with(TYPESCRIPT_PLUGIN, capabilities.require(TYPESCRIPT_PLUGIN)?.clone());
    let rules = registries.rules().overridden_by(&typescript_rules());

    debug!(
        root = %root.display(),
        rules = rules.len(),
        "built typed-language layer"
    );

    Ok(Layer::new()
        .with_name(TYPESCRIPT_LAYER)
        .with_files(vec![files])
        .with_language_options(language_options)
        .with_plugins(plugins)
        .with_rules(rules))
}
