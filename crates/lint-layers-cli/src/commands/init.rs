//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const CONFIG_FILE: &str = "lint-layers.toml";

const DEFAULT_CONFIG: &str = r#"# lint-layers configuration

# Typed-language layer. Uncomment to lint TypeScript sources with
# type-aware rules; root_dir must contain tsconfig.json.
# [typescript]
# root_dir = "."

# Edits applied to the base layer. Every key is optional.
[customize]
# name = "my-project/base"
# files = ["src/**/*.js"]
# source_type = "module"
# ecma_version = 2022
remove_rules = []

[customize.rules]
# "no-console" = "warn"
# "arrow-body-style" = ["error", "as-needed"]
"#;

const TYPESCRIPT_CONFIG: &str = r#"# lint-layers configuration

# Typed-language layer; root_dir must contain tsconfig.json.
[typescript]
root_dir = "."

# Edits applied to the base layer. Every key is optional.
[customize]
# name = "my-project/base"
# source_type = "module"
remove_rules = []

[customize.rules]
# "no-console" = "warn"
"#;

/// Runs the init command.
pub fn run(force: bool, typescript: bool) -> Result<()> {
    let config_path = Path::new(CONFIG_FILE);

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, template(typescript))?;

    println!("Created {CONFIG_FILE}");
    println!("\nNext steps:");
    println!("  1. Edit {CONFIG_FILE} to customize the base layer");
    println!("  2. Run: lint-layers print");

    Ok(())
}

fn template(typescript: bool) -> &'static str {
    if typescript {
        TYPESCRIPT_CONFIG
    } else {
        DEFAULT_CONFIG
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lint_layers_core::{Config, TypedLayerOptions};

    #[test]
    fn default_template_parses() {
        let config = Config::parse(template(false)).unwrap();
        assert!(config.typescript.is_none());
        assert!(config.customize.is_some());
    }

    #[test]
    fn typescript_template_enables_typed_layer() {
        let config = Config::parse(template(true)).unwrap();
        assert_eq!(config.typescript, Some(TypedLayerOptions::new(".")));
    }
}
