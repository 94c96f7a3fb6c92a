//! Ordered layer chains and their evaluation for a single file.

use crate::capability::PluginBindings;
use crate::layer::{LanguageOptions, Layer};
use crate::types::{RuleSetting, RuleTable};
use serde::Serialize;
use std::path::Path;

/// An ordered sequence of layers. Later layers take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Chain {
    layers: Vec<Layer>,
}

impl Chain {
    /// Creates a chain from layers in evaluation order.
    #[must_use]
    pub fn new(layers: Vec<Layer>) -> Self {
        Self { layers }
    }

    /// Layers in evaluation order.
    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Number of layers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Returns `true` if the chain has no layers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Layer at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }

    /// Iterates layers in evaluation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Layer> {
        self.layers.iter()
    }

    /// Consumes the chain, returning its layers.
    #[must_use]
    pub fn into_layers(self) -> Vec<Layer> {
        self.layers
    }

    /// Computes the configuration the analysis tool would apply to `path`.
    ///
    /// Layers whose file patterns match (or that have none) are folded in
    /// order: rule entries replace earlier entries with the same identifier
    /// whole, plugin bindings are united, language options merge field by
    /// field.
    #[must_use]
    pub fn resolve_for(&self, path: &Path) -> ResolvedConfig {
        let mut resolved = ResolvedConfig::default();
        for (index, layer) in self.layers.iter().enumerate() {
            if !layer.applies_to(path) {
                continue;
            }
            resolved.layers.push(index);
            resolved.rules.extend_from(layer.rules());
            resolved.plugins = resolved.plugins.merged_with(layer.plugins());
            if let Some(options) = layer.language_options() {
                resolved.language_options = resolved.language_options.merged_with(options);
            }
        }
        resolved
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a Layer;
    type IntoIter = std::slice::Iter<'a, Layer>;

    fn into_iter(self) -> Self::IntoIter {
        self.layers.iter()
    }
}

/// Effective configuration for one file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfig {
    /// Indices of the layers that applied, in order.
    pub layers: Vec<usize>,
    /// Merged language options.
    pub language_options: LanguageOptions,
    /// Merged plugin bindings.
    pub plugins: PluginBindings,
    /// Effective rule entries.
    pub rules: RuleTable,
}

impl ResolvedConfig {
    /// Effective setting of a rule.
    #[must_use]
    pub fn rule(&self, id: &str) -> Option<&RuleSetting> {
        self.rules.get(id)
    }

    /// Number of rules that are not `off`.
    #[must_use]
    pub fn enabled_count(&self) -> usize {
        self.rules.iter().filter(|(_, s)| s.is_enabled()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::{EcmaVersion, SourceType};
    use crate::pattern::FilePattern;
    use crate::types::Severity;
    use serde_json::json;

    fn chain() -> Chain {
        let defaults = Layer::new().with_name("defaults").with_rules(
            RuleTable::new()
                .with("no-undef", Severity::Error)
                .with("no-empty", Severity::Error),
        );
        let base = Layer::new()
            .with_name("base")
            .with_language_options(LanguageOptions {
                source_type: Some(SourceType::Commonjs),
                ecma_version: Some(EcmaVersion::Latest),
                ..LanguageOptions::default()
            })
            .with_rules(
                RuleTable::new()
                    .with("no-empty", Severity::Off)
                    .with(
                        "no-constant-condition",
                        RuleSetting::error().with_option(json!({ "checkLoops": false })),
                    ),
            );
        let typed = Layer::new()
            .with_name("typed")
            .with_files(vec![FilePattern::new("**/*.{ts,tsx}").unwrap()])
            .with_language_options(LanguageOptions {
                source_type: Some(SourceType::Module),
                ..LanguageOptions::default()
            })
            .with_rules(
                RuleTable::new()
                    .with("no-undef", Severity::Off)
                    .with("no-constant-condition", Severity::Off),
            );
        Chain::new(vec![defaults, base, typed])
    }

    #[test]
    fn plain_sources_skip_gated_layers() {
        let resolved = chain().resolve_for(Path::new("src/index.js"));
        assert_eq!(resolved.layers, vec![0, 1]);
        assert_eq!(resolved.rule("no-undef"), Some(&RuleSetting::error()));
        assert_eq!(resolved.rule("no-empty"), Some(&RuleSetting::off()));
        assert_eq!(
            resolved.language_options.source_type,
            Some(SourceType::Commonjs)
        );
    }

    #[test]
    fn later_layers_win_for_matching_files() {
        let resolved = chain().resolve_for(Path::new("src/index.ts"));
        assert_eq!(resolved.layers, vec![0, 1, 2]);
        assert_eq!(resolved.rule("no-undef"), Some(&RuleSetting::off()));
        // Whole tuple replaced, options are not carried over.
        assert_eq!(resolved.rule("no-constant-condition"), Some(&RuleSetting::off()));
        assert_eq!(resolved.language_options.source_type, Some(SourceType::Module));
        assert_eq!(resolved.language_options.ecma_version, Some(EcmaVersion::Latest));
        assert_eq!(resolved.enabled_count(), 0);
    }

    #[test]
    fn serializes_as_array() {
        let value = serde_json::to_value(chain()).unwrap();
        let layers = value.as_array().unwrap();
        assert_eq!(layers.len(), 3);
        assert_eq!(layers[2]["files"], json!(["**/*.{ts,tsx}"]));
        assert_eq!(layers[0]["name"], "defaults");
    }
}
