//! Configuration chain builder.

use lint_layers_core::{
    Chain, ChainError, ChainRequest, EcmaVersion, LanguageOptions, Layer, Registries, SourceType,
    TypedLayerOptions,
};
use lint_layers_rules::{formatter_compat_layer, recommended_layer, BASE_PLUGINS};
use lint_layers_ts::build_typed_layer;
use tracing::debug;

/// Name of the customizable base layer.
pub const BASE_LAYER: &str = "lint-layers/base";

/// Assembles layer chains from a set of registries.
///
/// The builder holds no state besides the borrowed registries, so one
/// builder can serve any number of requests, from any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct ChainBuilder<'a> {
    registries: &'a Registries,
}

impl<'a> ChainBuilder<'a> {
    /// Creates a builder over `registries`.
    #[must_use]
    pub fn new(registries: &'a Registries) -> Self {
        Self { registries }
    }

    /// Builds the customizable base layer: all files, generic language
    /// options, base plugins and base rules.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::UnresolvableCapability`] if the registries lack
    /// a base plugin.
    pub fn base_layer(&self) -> Result<Layer, ChainError> {
        let plugins = self.registries.capabilities().bindings(BASE_PLUGINS)?;
        Ok(Layer::new()
            .with_name(BASE_LAYER)
            .with_language_options(LanguageOptions {
                source_type: Some(SourceType::Commonjs),
                ecma_version: Some(EcmaVersion::Latest),
                ..LanguageOptions::default()
            })
            .with_plugins(plugins)
            .with_rules(self.registries.rules().clone()))
    }

    /// Builds the typed-language layer on its own, for callers that manage
    /// their own chain.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::MissingProjectRoot`] if `options` has no root.
    pub fn build_typed_layer(&self, options: &TypedLayerOptions) -> Result<Layer, ChainError> {
        build_typed_layer(options, self.registries)
    }

    /// Builds the chain
    /// `[recommended, formatter compatibility, base, typescript?]`.
    ///
    /// The customization, if any, is applied once to the base layer; the
    /// other layers are never touched by it. The typed layer is appended
    /// last so it overrides the base layer for typed sources.
    ///
    /// # Errors
    ///
    /// - [`ChainError::MalformedCustomization`] if the customized base layer
    ///   lacks the minimal layer shape
    /// - [`ChainError::MissingProjectRoot`] if the typed layer is requested
    ///   without a root
    pub fn build_chain(&self, request: ChainRequest) -> Result<Chain, ChainError> {
        let ChainRequest {
            typescript,
            customize,
        } = request;

        let mut base = self.base_layer()?;
        if let Some(customization) = &customize {
            base = customization.apply(base)?;
        }

        let mut layers = vec![recommended_layer(), formatter_compat_layer(), base];
        if let Some(options) = &typescript {
            layers.push(self.build_typed_layer(options)?);
        }

        debug!(
            layers = layers.len(),
            customized = customize.is_some(),
            typescript = typescript.is_some(),
            "built configuration chain"
        );
        Ok(Chain::new(layers))
    }
}

/// Builds a chain with a one-off [`ChainBuilder`].
///
/// # Errors
///
/// See [`ChainBuilder::build_chain`].
pub fn build_chain(registries: &Registries, request: ChainRequest) -> Result<Chain, ChainError> {
    ChainBuilder::new(registries).build_chain(request)
}
