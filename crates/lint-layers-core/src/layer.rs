//! Configuration layers and their language options.

use crate::capability::{Capability, PluginBindings};
use crate::error::ModelError;
use crate::pattern::FilePattern;
use crate::types::{RuleId, RuleSetting, RuleTable};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// How source files are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    /// ECMAScript modules.
    Module,
    /// CommonJS modules.
    Commonjs,
    /// Classic scripts.
    Script,
}

impl FromStr for SourceType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "module" => Ok(Self::Module),
            "commonjs" => Ok(Self::Commonjs),
            "script" => Ok(Self::Script),
            other => Err(ModelError::UnknownSourceType {
                value: other.to_string(),
            }),
        }
    }
}

/// ECMAScript version accepted by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EcmaVersion {
    /// Most recent version the parser supports.
    Latest,
    /// A specific edition, by year (`2022`) or number (`13`).
    Edition(u16),
}

impl fmt::Display for EcmaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latest => f.write_str("latest"),
            Self::Edition(n) => write!(f, "{n}"),
        }
    }
}

impl Serialize for EcmaVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Latest => serializer.serialize_str("latest"),
            Self::Edition(n) => serializer.serialize_u16(*n),
        }
    }
}

impl<'de> Deserialize<'de> for EcmaVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Edition(u16),
            Name(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Edition(n) => Ok(Self::Edition(n)),
            Repr::Name(name) if name == "latest" => Ok(Self::Latest),
            Repr::Name(name) => Err(de::Error::custom(ModelError::UnknownEcmaVersion {
                value: name,
            })),
        }
    }
}

/// Options handed to a custom parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParserOptions {
    /// Project descriptor the parser loads type information from.
    pub project: PathBuf,
    /// Directory the descriptor's relative paths resolve against.
    pub tsconfig_root_dir: PathBuf,
    /// Non-standard extensions the parser accepts as modules.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extra_file_extensions: Vec<String>,
    /// ECMAScript version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ecma_version: Option<EcmaVersion>,
    /// Source type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<SourceType>,
}

/// Language options of a layer. Unset fields defer to earlier layers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageOptions {
    /// Source type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<SourceType>,
    /// ECMAScript version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ecma_version: Option<EcmaVersion>,
    /// Custom parser.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parser: Option<Capability>,
    /// Options for the custom parser.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parser_options: Option<ParserOptions>,
}

impl LanguageOptions {
    /// Field-wise merge: every field set in `later` wins. Parser options are
    /// replaced whole.
    #[must_use]
    pub fn merged_with(&self, later: &LanguageOptions) -> LanguageOptions {
        LanguageOptions {
            source_type: later.source_type.or(self.source_type),
            ecma_version: later.ecma_version.or(self.ecma_version),
            parser: later.parser.clone().or_else(|| self.parser.clone()),
            parser_options: later
                .parser_options
                .clone()
                .or_else(|| self.parser_options.clone()),
        }
    }
}

/// A configuration layer: file scope, language options, plugin bindings and
/// rule entries.
///
/// Layers are values. Every `with_*` method consumes the layer and returns
/// a new one; nothing mutates a layer once it is part of a chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    files: Option<Vec<FilePattern>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    language_options: Option<LanguageOptions>,
    #[serde(skip_serializing_if = "PluginBindings::is_empty")]
    plugins: PluginBindings,
    rules: RuleTable,
}

impl Layer {
    /// Creates an empty layer that applies to every file.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Restricts the layer to files matching any of `patterns`.
    #[must_use]
    pub fn with_files(mut self, patterns: Vec<FilePattern>) -> Self {
        self.files = Some(patterns);
        self
    }

    /// Removes the file restriction.
    #[must_use]
    pub fn without_files(mut self) -> Self {
        self.files = None;
        self
    }

    /// Sets the language options.
    #[must_use]
    pub fn with_language_options(mut self, options: LanguageOptions) -> Self {
        self.language_options = Some(options);
        self
    }

    /// Replaces the plugin bindings.
    #[must_use]
    pub fn with_plugins(mut self, plugins: PluginBindings) -> Self {
        self.plugins = plugins;
        self
    }

    /// Binds one more plugin namespace.
    #[must_use]
    pub fn with_plugin(mut self, name: impl Into<String>, capability: Capability) -> Self {
        self.plugins = self.plugins.with(name, capability);
        self
    }

    /// Replaces the rule table.
    #[must_use]
    pub fn with_rules(mut self, rules: RuleTable) -> Self {
        self.rules = rules;
        self
    }

    /// Sets one rule entry.
    #[must_use]
    pub fn with_rule(mut self, id: RuleId, setting: RuleSetting) -> Self {
        self.rules.insert(id, setting);
        self
    }

    /// Drops one rule entry.
    #[must_use]
    pub fn without_rule(mut self, id: &str) -> Self {
        self.rules.remove(id);
        self
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// File patterns; `None` means the layer applies to all files.
    #[must_use]
    pub fn files(&self) -> Option<&[FilePattern]> {
        self.files.as_deref()
    }

    /// Language options.
    #[must_use]
    pub fn language_options(&self) -> Option<&LanguageOptions> {
        self.language_options.as_ref()
    }

    /// Plugin bindings.
    #[must_use]
    pub fn plugins(&self) -> &PluginBindings {
        &self.plugins
    }

    /// Rule entries.
    #[must_use]
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Whether this layer applies to a path relative to the project root.
    #[must_use]
    pub fn applies_to(&self, path: &Path) -> bool {
        self.files
            .as_ref()
            .map_or(true, |patterns| patterns.iter().any(|p| p.matches(path)))
    }

    /// Checks the minimal shape every customizable layer must keep:
    /// language options present, a non-empty file list when files are
    /// given, and a plugin binding for every enabled namespaced rule.
    ///
    /// # Errors
    ///
    /// Returns a description of the first defect found.
    pub fn check_shape(&self) -> Result<(), String> {
        if self.language_options.is_none() {
            return Err("layer has no language options".to_string());
        }
        if self.files.as_ref().is_some_and(Vec::is_empty) {
            return Err("layer has an empty file list and would match nothing".to_string());
        }
        for (id, setting) in &self.rules {
            if let Some(namespace) = id.namespace() {
                if setting.is_enabled() && !self.plugins.contains(namespace) {
                    return Err(format!(
                        "rule `{id}` is enabled but plugin `{namespace}` is not bound"
                    ));
                }
            }
        }
        Ok(())
    }
}
