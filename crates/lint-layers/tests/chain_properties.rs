//! Integration tests: chain construction end-to-end through the facade.
//!
//! Builds chains from the built-in registries and checks the guarantees
//! callers rely on: layer order, typed-layer scoping, override semantics,
//! customization isolation and determinism.

use lint_layers::rules::{
    base_rules, formatter_compat_layer, recommended_layer, FORMATTER_COMPAT_LAYER,
    RECOMMENDED_LAYER,
};
use lint_layers::ts::{typescript_rules, TYPESCRIPT_LAYER, TYPESCRIPT_PARSER, TYPESCRIPT_PLUGIN};
use lint_layers::{
    build_chain, builtin_registries, Chain, ChainError, ChainRequest, Config, ConfigError,
    Customization, Layer, RuleId, RuleSetting, TypedLayerOptions, BASE_LAYER,
};
use std::path::Path;

fn typed_request() -> ChainRequest {
    ChainRequest::new().with_typescript(TypedLayerOptions::new("/work/app"))
}

fn layer_names(chain: &Chain) -> Vec<&str> {
    chain.iter().filter_map(Layer::name).collect()
}

fn mentions_typescript(layer: &Layer) -> bool {
    let rules = layer
        .rules()
        .ids()
        .any(|id| id.namespace() == Some(TYPESCRIPT_PLUGIN));
    let plugin = layer.plugins().contains(TYPESCRIPT_PLUGIN);
    let parser = layer
        .language_options()
        .is_some_and(|o| o.parser.is_some() || o.parser_options.is_some());
    rules || plugin || parser
}

// ── Shape ──

#[test]
fn generic_chain_has_three_layers_without_typed_content() {
    let registries = builtin_registries().expect("built-in registries should resolve");
    let chain = build_chain(&registries, ChainRequest::new()).expect("chain should build");

    assert_eq!(chain.len(), 3);
    assert!(
        !chain.iter().any(mentions_typescript),
        "no layer of the generic chain may reference the typed plugin or parser"
    );

    let base = base_rules();
    let recommended = recommended_layer();
    let formatter = formatter_compat_layer();
    let typed = typescript_rules();
    let typed_only: Vec<&RuleId> = typed
        .ids()
        .filter(|id| {
            !base.contains(id.as_str())
                && !recommended.rules().contains(id.as_str())
                && !formatter.rules().contains(id.as_str())
        })
        .collect();
    assert!(typed_only.iter().any(|id| id.as_str() == "no-return-await"));

    for layer in chain.iter() {
        for id in &typed_only {
            assert!(
                !layer.rules().contains(id.as_str()),
                "{id} belongs to the typed layer only"
            );
        }
    }
}

#[test]
fn typed_chain_appends_scoped_fourth_layer() {
    let registries = builtin_registries().unwrap();
    let chain = build_chain(&registries, typed_request()).unwrap();

    assert_eq!(chain.len(), 4);
    let typed = chain.get(3).unwrap();
    for file in ["src/main.ts", "src/App.tsx", "bin/cli.mts", "index.ts"] {
        assert!(typed.applies_to(Path::new(file)), "{file} should match");
    }
    for file in ["src/main.js", "eslint.config.cjs", "bin/cli.mjs"] {
        assert!(!typed.applies_to(Path::new(file)), "{file} should not match");
    }

    let parser = typed.language_options().unwrap().parser.as_ref().unwrap();
    assert_eq!(parser.name(), TYPESCRIPT_PARSER);
}

#[test]
fn layer_order_is_fixed() {
    let registries = builtin_registries().unwrap();
    let chain = build_chain(&registries, typed_request()).unwrap();

    assert_eq!(
        layer_names(&chain),
        vec![RECOMMENDED_LAYER, FORMATTER_COMPAT_LAYER, BASE_LAYER, TYPESCRIPT_LAYER]
    );
    insta::assert_debug_snapshot!(layer_names(&chain), @r###"
    [
        "@eslint/js/recommended",
        "eslint-config-prettier",
        "lint-layers/base",
        "lint-layers/typescript",
    ]
    "###);
}

// ── Override law ──

#[test]
fn typed_rules_override_base_rules_entry_by_entry() {
    let registries = builtin_registries().unwrap();
    let chain = build_chain(&registries, typed_request()).unwrap();
    let typed = chain.get(3).unwrap().rules();
    let base = base_rules();
    let overrides = typescript_rules();

    for (id, setting) in &overrides {
        assert_eq!(typed.get(id.as_str()), Some(setting), "{id} should come from the typed table");
    }
    for (id, setting) in &base {
        if !overrides.contains(id.as_str()) {
            assert_eq!(typed.get(id.as_str()), Some(setting), "{id} should be inherited");
        }
    }
    assert!(typed.ids().all(|id| base.contains(id.as_str()) || overrides.contains(id.as_str())));
}

#[test]
fn typed_sources_resolve_to_typed_settings() {
    let registries = builtin_registries().unwrap();
    let chain = build_chain(&registries, typed_request()).unwrap();

    let ts = chain.resolve_for(Path::new("src/main.ts"));
    assert_eq!(ts.layers, vec![0, 1, 2, 3]);
    assert_eq!(ts.rule("no-undef"), Some(&RuleSetting::off()));
    assert!(ts.plugins.contains(TYPESCRIPT_PLUGIN));

    let js = chain.resolve_for(Path::new("src/main.js"));
    assert_eq!(js.layers, vec![0, 1, 2]);
    assert!(!js.plugins.contains(TYPESCRIPT_PLUGIN));
    assert!(js.rules.ids().all(|id| id.namespace() != Some(TYPESCRIPT_PLUGIN)));
}

// ── Customization ──

#[test]
fn customization_touches_only_the_base_layer() {
    let registries = builtin_registries().unwrap();
    let plain = build_chain(&registries, typed_request()).unwrap();
    let customized = build_chain(
        &registries,
        typed_request().with_customize(Customization::hook(|base| {
            base.with_name("app/base")
                .with_rule(RuleId::new("no-console").unwrap(), RuleSetting::error())
                .without_rule("prefer-const")
        })),
    )
    .unwrap();

    for index in [0, 1, 3] {
        assert_eq!(plain.get(index), customized.get(index), "layer {index} changed");
    }
    let base = customized.get(2).unwrap();
    assert_eq!(base.name(), Some("app/base"));
    assert_eq!(base.rules().get("no-console"), Some(&RuleSetting::error()));
    assert!(!base.rules().contains("prefer-const"));
}

#[test]
fn customization_output_without_language_options_is_rejected() {
    let registries = builtin_registries().unwrap();
    let err = build_chain(
        &registries,
        ChainRequest::new().with_customize(Customization::hook(|base| {
            Layer::new().with_rules(base.rules().clone())
        })),
    )
    .unwrap_err();
    assert!(matches!(err, ChainError::MalformedCustomization { .. }));
}

#[test]
fn non_table_customize_in_config_is_malformed() {
    let err = Config::parse("customize = \"not-a-function\"").unwrap_err();
    assert!(
        matches!(
            err,
            ConfigError::Chain(ChainError::MalformedCustomization { .. })
        ),
        "unexpected error: {err:?}"
    );
}

#[test]
fn declarative_config_builds_same_chain_as_hook() {
    let registries = builtin_registries().unwrap();
    let config = Config::parse(
        r#"
[typescript]
root_dir = "/work/app"

[customize]
name = "app/base"
remove_rules = ["prefer-const"]

[customize.rules]
"no-console" = "error"
"#,
    )
    .unwrap();
    let from_config = build_chain(&registries, config.into_request()).unwrap();
    let from_hook = build_chain(
        &registries,
        typed_request().with_customize(Customization::hook(|base| {
            base.with_name("app/base")
                .with_rule(RuleId::new("no-console").unwrap(), RuleSetting::error())
                .without_rule("prefer-const")
        })),
    )
    .unwrap();
    assert_eq!(from_config, from_hook);
}

// ── Errors and determinism ──

#[test]
fn typed_layer_without_root_fails() {
    let registries = builtin_registries().unwrap();
    let err = build_chain(
        &registries,
        ChainRequest::new().with_typescript(TypedLayerOptions::default()),
    )
    .unwrap_err();
    assert_eq!(err, ChainError::MissingProjectRoot);
}

#[test]
fn building_twice_yields_equal_chains() {
    let registries = builtin_registries().unwrap();
    let first = build_chain(&registries, typed_request()).unwrap();
    let second = build_chain(&registries, typed_request()).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}
