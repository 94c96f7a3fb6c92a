//! List rules command implementation.

use lint_layers_core::RuleTable;
use lint_layers_rules::{base_rules, BASE_PLUGINS};
use lint_layers_ts::{typescript_rules, TYPED_FILES};

/// Runs the list-rules command.
pub fn run(typescript: bool) {
    if typescript {
        println!("Typed-language overrides (applied to {TYPED_FILES}):\n");
        print_table(&typescript_rules());
    } else {
        println!("Base rules:\n");
        print_table(&base_rules());
        println!("\nPlugins: {}", BASE_PLUGINS.join(", "));
    }

    println!("\nOverride rules per project in lint-layers.toml, e.g.:");
    println!("  [customize.rules]");
    println!("  \"no-console\" = \"warn\"");
}

fn print_table(rules: &RuleTable) {
    println!("{:<50} {:<6} Options", "Rule", "Level");
    println!("{}", "-".repeat(80));

    for (id, setting) in rules {
        let options = serde_json::to_string(setting.options()).unwrap_or_default();
        println!(
            "{:<50} {:<6} {}",
            id.as_str(),
            setting.severity().as_str(),
            if setting.options().is_empty() { "" } else { options.as_str() }
        );
    }

    println!("\n{} rule(s)", rules.len());
}
