//! Startup construction of the process-wide registries.

use lint_layers_core::{
    CapabilityRegistry, CapabilityResolver, CapabilitySpec, ChainError, Registries,
    StaticResolver,
};
use lint_layers_rules::{base_rules, BASE_CAPABILITIES};
use lint_layers_ts::TYPESCRIPT_CAPABILITIES;
use tracing::debug;

/// Every capability the built-in layers can bind: base plugins first, then
/// the typed plugin and parser.
pub fn builtin_capabilities() -> impl Iterator<Item = &'static CapabilitySpec> {
    BASE_CAPABILITIES.iter().chain(TYPESCRIPT_CAPABILITIES)
}

/// Registries with capabilities taken from the built-in table as-is.
///
/// # Errors
///
/// Never fails with the static resolver; the `Result` mirrors
/// [`resolve_registries`].
pub fn builtin_registries() -> Result<Registries, ChainError> {
    resolve_registries(&StaticResolver)
}

/// Registries with capabilities resolved through `resolver`.
///
/// # Errors
///
/// Returns [`ChainError::UnresolvableCapability`] for the first capability
/// the resolver cannot provide.
pub fn resolve_registries(resolver: &dyn CapabilityResolver) -> Result<Registries, ChainError> {
    let capabilities = CapabilityRegistry::resolve(builtin_capabilities(), resolver)?;
    debug!(capabilities = capabilities.len(), "registries ready");
    Ok(Registries::new(base_rules(), capabilities))
}
