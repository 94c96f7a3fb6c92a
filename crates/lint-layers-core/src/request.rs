//! Chain requests and base-layer customizations.

use crate::error::ChainError;
use crate::layer::{EcmaVersion, LanguageOptions, Layer, SourceType};
use crate::pattern::FilePattern;
use crate::types::RuleTable;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Parameters of the typed-language layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypedLayerOptions {
    /// Project root holding the project descriptor (`tsconfig.json`).
    #[serde(default)]
    pub root_dir: Option<PathBuf>,
}

impl TypedLayerOptions {
    /// Options rooted at `root_dir`.
    #[must_use]
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: Some(root_dir.into()),
        }
    }

    /// Returns the project root.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::MissingProjectRoot`] if the root is absent or
    /// empty.
    pub fn require_root(&self) -> Result<&Path, ChainError> {
        match self.root_dir.as_deref() {
            Some(root) if !root.as_os_str().is_empty() => Ok(root),
            _ => Err(ChainError::MissingProjectRoot),
        }
    }
}

/// Programmatic customization hook: receives the full base layer and
/// returns its complete replacement.
pub type CustomizeFn = dyn Fn(Layer) -> Layer + Send + Sync;

/// A transform applied exactly once to the customizable base layer.
#[derive(Clone)]
pub enum Customization {
    /// Arbitrary caller-supplied function.
    Hook(Arc<CustomizeFn>),
    /// Declarative patch, typically loaded from a config file.
    Patch(LayerPatch),
}

impl Customization {
    /// Wraps a closure as a customization.
    pub fn hook<F>(f: F) -> Self
    where
        F: Fn(Layer) -> Layer + Send + Sync + 'static,
    {
        Self::Hook(Arc::new(f))
    }

    /// Interprets a configuration value as a declarative patch.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::MalformedCustomization`] if the value is not a
    /// table or does not match the patch shape.
    pub fn from_value(value: toml::Value) -> Result<Self, ChainError> {
        LayerPatch::from_value(value).map(Self::Patch)
    }

    /// Applies the customization and checks the result's shape.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::MalformedCustomization`] if the produced layer
    /// lacks the minimal layer shape (see [`Layer::check_shape`]).
    pub fn apply(&self, base: Layer) -> Result<Layer, ChainError> {
        let layer = match self {
            Self::Hook(f) => f(base),
            Self::Patch(patch) => patch.apply(base),
        };
        layer.check_shape().map_err(ChainError::malformed)?;
        debug!(
            kind = self.kind(),
            rules = layer.rules().len(),
            "applied base layer customization"
        );
        Ok(layer)
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Hook(_) => "hook",
            Self::Patch(_) => "patch",
        }
    }
}

impl fmt::Debug for Customization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hook(_) => f.write_str("Customization::Hook(..)"),
            Self::Patch(patch) => f.debug_tuple("Customization::Patch").field(patch).finish(),
        }
    }
}

/// Declarative edit of the base layer.
///
/// Every field is optional. `rules` replace same-named entries whole;
/// `remove_rules` drops entries after `rules` are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayerPatch {
    /// New display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Restricts the base layer to these files.
    #[serde(default)]
    pub files: Option<Vec<FilePattern>>,
    /// Overrides the source type.
    #[serde(default)]
    pub source_type: Option<SourceType>,
    /// Overrides the ECMAScript version.
    #[serde(default)]
    pub ecma_version: Option<EcmaVersion>,
    /// Rule entries to set.
    #[serde(default)]
    pub rules: RuleTable,
    /// Rule identifiers to drop.
    #[serde(default)]
    pub remove_rules: Vec<String>,
}

impl LayerPatch {
    /// Parses a patch from a configuration value.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::MalformedCustomization`] if the value is not a
    /// table or has unknown or mistyped fields.
    pub fn from_value(value: toml::Value) -> Result<Self, ChainError> {
        if !value.is_table() {
            return Err(ChainError::malformed(format!(
                "expected a table of layer edits, found {}",
                value.type_str()
            )));
        }
        value
            .try_into()
            .map_err(|e: toml::de::Error| ChainError::malformed(e.message().to_string()))
    }

    /// Produces the patched layer.
    #[must_use]
    pub fn apply(&self, base: Layer) -> Layer {
        let mut layer = base;
        if let Some(name) = &self.name {
            layer = layer.with_name(name.clone());
        }
        if let Some(files) = &self.files {
            layer = layer.with_files(files.clone());
        }
        if self.source_type.is_some() || self.ecma_version.is_some() {
            let current = layer.language_options().cloned().unwrap_or_default();
            let edits = LanguageOptions {
                source_type: self.source_type,
                ecma_version: self.ecma_version,
                ..LanguageOptions::default()
            };
            layer = layer.with_language_options(current.merged_with(&edits));
        }
        let rules = layer.rules().overridden_by(&self.rules);
        layer = layer.with_rules(rules);
        for id in &self.remove_rules {
            layer = layer.without_rule(id);
        }
        layer
    }
}

/// Request for a layer chain. Both fields are independent and optional.
#[derive(Debug, Clone, Default)]
pub struct ChainRequest {
    /// Append the typed-language layer with these options.
    pub typescript: Option<TypedLayerOptions>,
    /// Transform the customizable base layer.
    pub customize: Option<Customization>,
}

impl ChainRequest {
    /// Request for the three generic layers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Also request the typed-language layer.
    #[must_use]
    pub fn with_typescript(mut self, options: TypedLayerOptions) -> Self {
        self.typescript = Some(options);
        self
    }

    /// Customize the base layer.
    #[must_use]
    pub fn with_customize(mut self, customization: Customization) -> Self {
        self.customize = Some(customization);
        self
    }
}
