//! Process-wide registries shared by the layer builders.

use crate::capability::CapabilityRegistry;
use crate::types::RuleTable;

/// The immutable inputs every layer is built from: the base rule table and
/// the resolved capability table.
///
/// Built once at startup and passed by reference; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registries {
    rules: RuleTable,
    capabilities: CapabilityRegistry,
}

impl Registries {
    /// Bundles a rule table and a capability registry.
    #[must_use]
    pub fn new(rules: RuleTable, capabilities: CapabilityRegistry) -> Self {
        Self {
            rules,
            capabilities,
        }
    }

    /// Base rule table.
    #[must_use]
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Resolved capabilities.
    #[must_use]
    pub fn capabilities(&self) -> &CapabilityRegistry {
        &self.capabilities
    }
}
