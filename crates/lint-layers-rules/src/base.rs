//! Base behavioral rules and the plugins they need.

use lint_layers_core::{CapabilitySpec, RuleSetting, RuleTable, Severity};
use serde_json::json;

/// Plugins bound by the base layer, by short name.
pub const BASE_PLUGINS: &[&str] = &[
    "prettier",
    "sonarjs",
    "unused-imports",
    "simple-import-sort",
    "import",
];

/// Startup capability table for [`BASE_PLUGINS`].
pub const BASE_CAPABILITIES: &[CapabilitySpec] = &[
    CapabilitySpec::plugin("prettier", "eslint-plugin-prettier"),
    CapabilitySpec::plugin("sonarjs", "eslint-plugin-sonarjs"),
    CapabilitySpec::plugin("unused-imports", "eslint-plugin-unused-imports"),
    CapabilitySpec::plugin("simple-import-sort", "eslint-plugin-simple-import-sort"),
    CapabilitySpec::plugin("import", "eslint-plugin-import"),
];

/// Returns the base rule table.
///
/// Groups:
/// - formatting delegated to prettier, with overlapping core rules off
/// - unused imports and variables via `unused-imports`
/// - import ordering via `simple-import-sort` and `import`
/// - anti-pattern detection via `sonarjs`
/// - misc correctness and style rules
#[must_use]
pub fn base_rules() -> RuleTable {
    formatting_rules()
        .overridden_by(&unused_symbol_rules())
        .overridden_by(&import_rules())
        .overridden_by(&sonarjs_rules())
        .overridden_by(&misc_rules())
}

fn formatting_rules() -> RuleTable {
    RuleTable::new()
        .with("prettier/prettier", Severity::Error)
        .with("no-extra-semi", Severity::Off)
        .with("no-empty", Severity::Off)
}

fn unused_symbol_rules() -> RuleTable {
    RuleTable::new()
        .with("no-unused-vars", Severity::Off)
        .with("unused-imports/no-unused-imports", Severity::Error)
        .with(
            "unused-imports/no-unused-vars",
            RuleSetting::error().with_option(json!({
                "vars": "all",
                "varsIgnorePattern": "^_",
                "args": "after-used",
                "argsIgnorePattern": "^_"
            })),
        )
}

fn import_rules() -> RuleTable {
    RuleTable::new()
        .with("sort-imports", Severity::Off)
        .with("import/order", Severity::Off)
        .with("no-multi-spaces", Severity::Error)
        .with(
            "no-multiple-empty-lines",
            RuleSetting::error().with_option(json!({ "max": 1, "maxEOF": 1 })),
        )
        .with(
            "simple-import-sort/imports",
            RuleSetting::error().with_option(json!({
                "groups": [
                    [r"^([^s.]|s($|[^r])|s($|[^r]$|r[^c])|sr($|c[^/]))"],
                    ["^src"],
                    ["."]
                ]
            })),
        )
        .with("import/first", Severity::Error)
        .with("import/newline-after-import", Severity::Error)
        .with(
            "import/no-duplicates",
            RuleSetting::error().with_option(json!({ "considerQueryString": true })),
        )
        .with(
            "no-restricted-imports",
            RuleSetting::error().with_option(json!({ "patterns": ["**/../**", ".."] })),
        )
}

fn sonarjs_rules() -> RuleTable {
    [
        "sonarjs/no-all-duplicated-branches",
        "sonarjs/no-element-overwrite",
        "sonarjs/no-empty-collection",
        "sonarjs/no-extra-arguments",
        "sonarjs/no-identical-conditions",
        "sonarjs/no-identical-expressions",
        "sonarjs/no-ignored-return",
        "sonarjs/no-use-of-empty-return-value",
        "sonarjs/no-collapsible-if",
        "sonarjs/non-existent-operator",
        "sonarjs/no-collection-size-mischeck",
        "sonarjs/no-duplicate-string",
        "sonarjs/no-gratuitous-expressions",
        "sonarjs/no-duplicated-branches",
        "sonarjs/no-redundant-boolean",
        "sonarjs/no-redundant-jump",
        "sonarjs/no-unused-collection",
        "sonarjs/prefer-immediate-return",
    ]
    .into_iter()
    .fold(RuleTable::new(), |table, id| table.with(id, Severity::Error))
}

fn misc_rules() -> RuleTable {
    RuleTable::new()
        .with("no-unreachable-loop", Severity::Error)
        .with(
            "multiline-comment-style",
            RuleSetting::error().with_option("bare-block"),
        )
        .with(
            "no-constant-condition",
            RuleSetting::error().with_option(json!({ "checkLoops": false })),
        )
        .with("require-atomic-updates", Severity::Off)
        .with("use-isnan", Severity::Error)
        .with("no-restricted-syntax", restricted_syntax())
        .with("prefer-arrow-callback", Severity::Error)
        .with("constructor-super", Severity::Error)
        .with("no-invalid-this", Severity::Error)
        .with("spaced-comment", Severity::Error)
        .with("dot-notation", Severity::Error)
        .with("no-redeclare", Severity::Error)
        .with("arrow-parens", Severity::Error)
        .with("arrow-body-style", RuleSetting::error().with_option("always"))
        .with("prefer-const", Severity::Error)
}

fn restricted_syntax() -> RuleSetting {
    RuleSetting::error()
        .with_option(
            r#":not(MethodDefinition, AssignmentExpression[left.type="MemberExpression"], VariableDeclarator[init.generator=true]) > FunctionExpression"#,
        )
        .with_option(json!({
            "selector": "CallExpression[callee.name='setTimeout'][arguments.length!=2]",
            "message": "setTimeout must always be invoked with two arguments."
        }))
        .with_option(json!({
            "selector": "CallExpression[callee.name='setInterval'][arguments.length!=2]",
            "message": "setInterval must always be invoked with two arguments."
        }))
        .with_option(json!({
            "selector": "CallExpression[arguments.length=1] > MemberExpression.callee > Identifier.property[name='reduce']",
            "message": "Provide initialValue to .reduce()."
        }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_namespaced_rule_has_a_base_plugin() {
        for id in base_rules().ids() {
            if let Some(namespace) = id.namespace() {
                assert!(
                    BASE_PLUGINS.contains(&namespace),
                    "{id} uses unbound plugin {namespace}"
                );
            }
        }
    }

    #[test]
    fn capability_table_covers_base_plugins() {
        let names: Vec<&str> = BASE_CAPABILITIES.iter().map(|s| s.name).collect();
        assert_eq!(names, BASE_PLUGINS);
    }

    #[test]
    fn capability_packages() {
        let packages: Vec<&str> = BASE_CAPABILITIES.iter().map(|s| s.package).collect();
        insta::assert_debug_snapshot!(packages, @r###"
        [
            "eslint-plugin-prettier",
            "eslint-plugin-sonarjs",
            "eslint-plugin-unused-imports",
            "eslint-plugin-simple-import-sort",
            "eslint-plugin-import",
        ]
        "###);
    }

    #[test]
    fn catalog_values() {
        let rules = base_rules();
        assert_eq!(rules.len(), 48);
        assert_eq!(rules.get("prettier/prettier"), Some(&RuleSetting::error()));
        assert_eq!(rules.get("no-unused-vars"), Some(&RuleSetting::off()));
        assert_eq!(rules.get("no-restricted-syntax").unwrap().options().len(), 4);
        assert_eq!(
            rules.get("arrow-body-style"),
            Some(&RuleSetting::error().with_option("always"))
        );
    }
}
