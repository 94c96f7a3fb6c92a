//! Print command implementation.

use anyhow::Result;
use lint_layers::build_chain;
use std::path::Path;

use super::TypedSelection;
use crate::OutputFormat;

/// Runs the print command.
pub fn run(
    path: &Path,
    typed: &TypedSelection,
    format: OutputFormat,
    node_modules: Option<&Path>,
    config: Option<&Path>,
) -> Result<()> {
    let registries = super::load_registries(node_modules)?;
    let request = super::load_request(path, config, typed)?;
    let chain = build_chain(&registries, request)?;

    tracing::info!("Built configuration chain with {} layer(s)", chain.len());

    super::output::print_chain(&chain, format)
}
