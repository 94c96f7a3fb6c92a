//! Type-aware rules layered over the base rules for typed sources.

use lint_layers_core::{RuleSetting, RuleTable, Severity};
use serde_json::json;

/// Returns the TypeScript rule table.
///
/// Entries here replace base entries with the same identifier whole. Core
/// rules that the type checker already covers, or that have a type-aware
/// replacement, are switched off.
#[must_use]
pub fn typescript_rules() -> RuleTable {
    RuleTable::new()
        // the type checker reports undefined names itself
        .with("no-undef", Severity::Off)
        .with(
            "@typescript-eslint/strict-boolean-expressions",
            RuleSetting::error().with_option(json!({
                "allowString": true,
                "allowNullableBoolean": true,
                "allowNumber": true,
                "allowNullableNumber": true,
                "allowNullableString": true
            })),
        )
        // handled by unused-imports
        .with("@typescript-eslint/no-unused-vars", Severity::Off)
        .with("@typescript-eslint/explicit-module-boundary-types", Severity::Off)
        .with("@typescript-eslint/explicit-function-return-type", Severity::Off)
        .with("@typescript-eslint/no-empty-interface", Severity::Off)
        .with("@typescript-eslint/interface-name-prefix", Severity::Off)
        .with("@typescript-eslint/no-inferrable-types", Severity::Off)
        .with("@typescript-eslint/restrict-plus-operands", Severity::Error)
        .with("@typescript-eslint/restrict-template-expressions", Severity::Error)
        .with("@typescript-eslint/no-floating-promises", Severity::Error)
        .with("@typescript-eslint/no-explicit-any", Severity::Off)
        .with("@typescript-eslint/no-misused-new", Severity::Error)
        .with("@typescript-eslint/await-thenable", Severity::Error)
        .with("no-return-await", Severity::Off)
        .with(
            "@typescript-eslint/return-await",
            RuleSetting::error().with_option("always"),
        )
        .with("@typescript-eslint/require-await", Severity::Error)
        .with("no-throw-literal", Severity::Off)
        .with("@typescript-eslint/only-throw-error", Severity::Error)
        .with("@typescript-eslint/no-shadow", Severity::Error)
        .with("@typescript-eslint/array-type", Severity::Error)
        .with("@typescript-eslint/ban-ts-comment", Severity::Error)
        .with("@typescript-eslint/no-empty-object-type", Severity::Error)
        .with("@typescript-eslint/no-unsafe-function-type", Severity::Error)
        .with("@typescript-eslint/no-wrapper-object-types", Severity::Error)
        .with(
            "@typescript-eslint/consistent-type-assertions",
            RuleSetting::error().with_option(json!({
                "assertionStyle": "as",
                "objectLiteralTypeAssertions": "allow-as-parameter"
            })),
        )
        .with("@typescript-eslint/no-for-in-array", Severity::Error)
        .with("@typescript-eslint/no-invalid-void-type", Severity::Error)
        .with("@typescript-eslint/no-meaningless-void-operator", Severity::Error)
        .with("@typescript-eslint/no-misused-promises", Severity::Error)
        .with("@typescript-eslint/no-unnecessary-type-arguments", Severity::Error)
        .with("@typescript-eslint/no-unsafe-argument", Severity::Error)
        .with("@typescript-eslint/no-unsafe-assignment", Severity::Error)
        .with("@typescript-eslint/no-unsafe-call", Severity::Error)
        .with("@typescript-eslint/prefer-for-of", Severity::Error)
        .with("@typescript-eslint/switch-exhaustiveness-check", Severity::Error)
        .with("@typescript-eslint/typedef", Severity::Error)
        .with("@typescript-eslint/unbound-method", Severity::Error)
        .with("@typescript-eslint/no-redeclare", Severity::Error)
        .with("@typescript-eslint/no-array-constructor", Severity::Error)
        .with("@typescript-eslint/no-invalid-this", Severity::Error)
        .with("@typescript-eslint/no-empty-function", Severity::Off)
        .with("dot-notation", Severity::Off)
        .with("@typescript-eslint/dot-notation", Severity::Error)
        .with("no-constant-condition", Severity::Off)
        .with(
            "@typescript-eslint/no-unnecessary-condition",
            RuleSetting::error().with_option(json!({ "allowConstantLoopConditions": true })),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_overrides_are_off() {
        let rules = typescript_rules();
        for id in [
            "no-undef",
            "no-return-await",
            "no-throw-literal",
            "dot-notation",
            "no-constant-condition",
        ] {
            assert_eq!(rules.get(id), Some(&RuleSetting::off()), "{id}");
        }
    }

    #[test]
    fn namespaced_rules_belong_to_typescript_plugin() {
        assert!(typescript_rules()
            .ids()
            .filter_map(|id| id.namespace())
            .all(|ns| ns == crate::TYPESCRIPT_PLUGIN));
    }
}
