//! Formatter-compatibility overrides: turns off every core rule that
//! conflicts with the code formatter.

use lint_layers_core::{Layer, RuleTable, Severity};

/// Name of the formatter-compatibility layer.
pub const FORMATTER_COMPAT_LAYER: &str = "eslint-config-prettier";

const FORMATTING_RULES: &[&str] = &[
    "array-bracket-newline",
    "array-bracket-spacing",
    "array-element-newline",
    "arrow-parens",
    "arrow-spacing",
    "block-spacing",
    "brace-style",
    "comma-dangle",
    "comma-spacing",
    "comma-style",
    "computed-property-spacing",
    "dot-location",
    "eol-last",
    "func-call-spacing",
    "function-call-argument-newline",
    "function-paren-newline",
    "generator-star-spacing",
    "implicit-arrow-linebreak",
    "indent",
    "jsx-quotes",
    "key-spacing",
    "keyword-spacing",
    "linebreak-style",
    "multiline-ternary",
    "new-parens",
    "newline-per-chained-call",
    "no-extra-parens",
    "no-extra-semi",
    "no-floating-decimal",
    "no-mixed-spaces-and-tabs",
    "no-multi-spaces",
    "no-multiple-empty-lines",
    "no-trailing-spaces",
    "no-whitespace-before-property",
    "nonblock-statement-body-position",
    "object-curly-newline",
    "object-curly-spacing",
    "object-property-newline",
    "one-var-declaration-per-line",
    "operator-linebreak",
    "padded-blocks",
    "quote-props",
    "rest-spread-spacing",
    "semi",
    "semi-spacing",
    "semi-style",
    "space-before-blocks",
    "space-before-function-paren",
    "space-in-parens",
    "space-infix-ops",
    "space-unary-ops",
    "switch-colon-spacing",
    "template-curly-spacing",
    "template-tag-spacing",
    "unicode-bom",
    "wrap-iife",
    "wrap-regex",
    "yield-star-spacing",
];

// Rules that only conflict in some configurations. Still switched off.
const SPECIAL_RULES: &[&str] = &[
    "curly",
    "lines-around-comment",
    "max-len",
    "no-confusing-arrow",
    "no-mixed-operators",
    "no-tabs",
    "no-unexpected-multiline",
    "quotes",
];

/// Returns the formatter-compatibility layer.
#[must_use]
pub fn formatter_compat_layer() -> Layer {
    let rules = FORMATTING_RULES
        .iter()
        .chain(SPECIAL_RULES)
        .copied()
        .fold(RuleTable::new(), |table, id| table.with(id, Severity::Off));
    Layer::new()
        .with_name(FORMATTER_COMPAT_LAYER)
        .with_rules(rules)
}
