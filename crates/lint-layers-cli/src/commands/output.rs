//! Shared output formatting for chains and resolved configurations.

use anyhow::Result;
use lint_layers_core::{Chain, Layer, ResolvedConfig, RuleTable, Severity};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::OutputFormat;

/// Print a configuration chain in the specified format.
pub fn print_chain(chain: &Chain, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => return print_json(chain),
        OutputFormat::Summary => print_chain_summary(chain),
    }
    Ok(())
}

/// Print the effective configuration of one file.
pub fn print_resolved(
    file: &Path,
    chain: &Chain,
    resolved: &ResolvedConfig,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            return print_json(&ResolvedReport {
                file,
                layer_names: layer_labels(chain, &resolved.layers),
                config: resolved,
            })
        }
        OutputFormat::Summary => print_resolved_summary(file, chain, resolved),
    }
    Ok(())
}

/// Layer membership of one file.
#[derive(Debug, Clone, Serialize)]
pub struct Membership {
    /// File path relative to the project.
    pub file: PathBuf,
    /// Labels of the layers that apply, in chain order.
    pub layers: Vec<String>,
}

/// Print per-file layer membership for a directory.
pub fn print_membership(entries: &[Membership], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => return print_json(&entries),
        OutputFormat::Summary => {
            for entry in entries {
                println!("{}: {}", entry.file.display(), entry.layers.join(", "));
            }
            println!("\n{} file(s)", entries.len());
        }
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResolvedReport<'a> {
    file: &'a Path,
    layer_names: Vec<String>,
    #[serde(flatten)]
    config: &'a ResolvedConfig,
}

/// Display label of a layer: its name, or its position when unnamed.
pub fn layer_label(index: usize, layer: &Layer) -> String {
    layer
        .name()
        .map_or_else(|| format!("#{index}"), ToString::to_string)
}

/// Labels for a list of layer indices.
pub fn layer_labels(chain: &Chain, indices: &[usize]) -> Vec<String> {
    indices
        .iter()
        .filter_map(|&i| chain.get(i).map(|layer| layer_label(i, layer)))
        .collect()
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}

fn print_chain_summary(chain: &Chain) {
    for (index, layer) in chain.iter().enumerate() {
        println!("[{index}] {}", layer_label(index, layer));

        let files = layer.files().map_or_else(
            || "all files".to_string(),
            |patterns| {
                patterns
                    .iter()
                    .map(|p| p.as_str().to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            },
        );
        println!("  files:   {files}");

        if let Some(parser) = layer.language_options().and_then(|o| o.parser.as_ref()) {
            println!("  parser:  {}", parser.package());
        }
        if !layer.plugins().is_empty() {
            let names: Vec<&str> = layer.plugins().names().collect();
            println!("  plugins: {}", names.join(", "));
        }
        println!("  rules:   {}", rule_counts(layer.rules()));
    }
}

fn print_resolved_summary(file: &Path, chain: &Chain, resolved: &ResolvedConfig) {
    println!("{}", file.display());
    println!(
        "  layers: {}",
        layer_labels(chain, &resolved.layers).join(", ")
    );
    println!("  rules:  {}\n", rule_counts(&resolved.rules));

    for (id, setting) in &resolved.rules {
        if !setting.is_enabled() {
            continue;
        }
        let indicator = match setting.severity() {
            Severity::Error => "\x1b[31merror\x1b[0m",
            Severity::Warn => "\x1b[33mwarn\x1b[0m ",
            Severity::Off => "off  ",
        };
        if setting.options().is_empty() {
            println!("  {indicator} {id}");
        } else {
            let options: Vec<String> = setting.options().iter().map(ToString::to_string).collect();
            println!("  {indicator} {id} {}", options.join(" "));
        }
    }
}

fn rule_counts(rules: &RuleTable) -> String {
    let enabled = rules.iter().filter(|(_, s)| s.is_enabled()).count();
    format!("{enabled} enabled, {} off", rules.len() - enabled)
}
