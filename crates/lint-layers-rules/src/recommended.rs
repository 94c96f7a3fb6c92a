//! The analysis tool's recommended defaults, placed first in every chain.

use lint_layers_core::{Layer, RuleTable, Severity};

/// Name of the recommended-defaults layer.
pub const RECOMMENDED_LAYER: &str = "@eslint/js/recommended";

const RECOMMENDED_RULES: &[&str] = &[
    "constructor-super",
    "for-direction",
    "getter-return",
    "no-async-promise-executor",
    "no-case-declarations",
    "no-class-assign",
    "no-compare-neg-zero",
    "no-cond-assign",
    "no-const-assign",
    "no-constant-binary-expression",
    "no-constant-condition",
    "no-control-regex",
    "no-debugger",
    "no-delete-var",
    "no-dupe-args",
    "no-dupe-class-members",
    "no-dupe-else-if",
    "no-dupe-keys",
    "no-duplicate-case",
    "no-empty",
    "no-empty-character-class",
    "no-empty-pattern",
    "no-empty-static-block",
    "no-ex-assign",
    "no-extra-boolean-cast",
    "no-fallthrough",
    "no-func-assign",
    "no-global-assign",
    "no-import-assign",
    "no-invalid-regexp",
    "no-irregular-whitespace",
    "no-loss-of-precision",
    "no-misleading-character-class",
    "no-new-native-nonconstructor",
    "no-nonoctal-decimal-escape",
    "no-obj-calls",
    "no-octal",
    "no-prototype-builtins",
    "no-redeclare",
    "no-regex-spaces",
    "no-self-assign",
    "no-setter-return",
    "no-shadow-restricted-names",
    "no-sparse-arrays",
    "no-this-before-super",
    "no-undef",
    "no-unexpected-multiline",
    "no-unreachable",
    "no-unsafe-finally",
    "no-unsafe-negation",
    "no-unsafe-optional-chaining",
    "no-unused-labels",
    "no-unused-private-class-members",
    "no-unused-vars",
    "no-useless-backreference",
    "no-useless-catch",
    "no-useless-escape",
    "no-with",
    "require-yield",
    "use-isnan",
    "valid-typeof",
];

/// Returns the recommended-defaults layer. It applies to all files and
/// enables every recommended core rule at `error`.
#[must_use]
pub fn recommended_layer() -> Layer {
    let rules = RECOMMENDED_RULES
        .iter()
        .copied()
        .fold(RuleTable::new(), |table, id| table.with(id, Severity::Error));
    Layer::new().with_name(RECOMMENDED_LAYER).with_rules(rules)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recommended_layer_is_unscoped_core_rules() {
        let layer = recommended_layer();
        assert!(layer.files().is_none());
        assert!(layer.plugins().is_empty());
        assert_eq!(layer.rules().len(), RECOMMENDED_RULES.len());
        assert!(layer.rules().ids().all(|id| id.namespace().is_none()));
        assert!(layer.rules().iter().all(|(_, s)| s.is_enabled()));
    }
}
