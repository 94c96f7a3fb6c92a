//! Capability registry: plugin and parser handles resolved once at startup.
//!
//! Rule identifiers prefixed by a plugin namespace (`sonarjs/...`) only work
//! when the layer binds that namespace to a plugin. Instead of resolving
//! plugins by name whenever a layer is built, the set of capabilities is
//! declared up front as a table of [`CapabilitySpec`]s, resolved through a
//! [`CapabilityResolver`] when the process starts, and injected into the
//! components that build layers.

use crate::error::ChainError;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// What a capability provides to the analysis tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapabilityKind {
    /// A rule plugin, bound under a namespace in a layer's `plugins`.
    Plugin,
    /// A source parser, referenced from a layer's language options.
    Parser,
}

/// Startup declaration of a capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapabilitySpec {
    /// Short name (`prettier`, `@typescript-eslint`).
    pub name: &'static str,
    /// Plugin or parser.
    pub kind: CapabilityKind,
    /// Package specifier that implements it.
    pub package: &'static str,
}

impl CapabilitySpec {
    /// Declares a plugin capability.
    #[must_use]
    pub const fn plugin(name: &'static str, package: &'static str) -> Self {
        Self {
            name,
            kind: CapabilityKind::Plugin,
            package,
        }
    }

    /// Declares a parser capability.
    #[must_use]
    pub const fn parser(name: &'static str, package: &'static str) -> Self {
        Self {
            name,
            kind: CapabilityKind::Parser,
            package,
        }
    }
}

/// A resolved capability handle.
///
/// Serializes as its package specifier, which is how the external loader
/// refers to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Capability {
    name: String,
    kind: CapabilityKind,
    package: String,
    version: Option<String>,
}

impl Capability {
    /// Creates a handle for a spec, optionally pinned to an installed version.
    #[must_use]
    pub fn new(spec: &CapabilitySpec, version: Option<String>) -> Self {
        Self {
            name: spec.name.to_string(),
            kind: spec.kind,
            package: spec.package.to_string(),
            version,
        }
    }

    /// Short name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Plugin or parser.
    #[must_use]
    pub fn kind(&self) -> CapabilityKind {
        self.kind
    }

    /// Package specifier.
    #[must_use]
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Installed version, when resolved against a package tree.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}

impl Serialize for Capability {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.package)
    }
}

/// Resolves capability specs to handles.
pub trait CapabilityResolver {
    /// Resolves a single spec.
    ///
    /// # Errors
    ///
    /// Returns a human-readable reason when the capability is unavailable.
    fn resolve(&self, spec: &CapabilitySpec) -> Result<Capability, String>;
}

/// Trusts the spec table as-is. Used when the consuming tool resolves
/// packages itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticResolver;

impl CapabilityResolver for StaticResolver {
    fn resolve(&self, spec: &CapabilitySpec) -> Result<Capability, String> {
        Ok(Capability::new(spec, None))
    }
}

/// Resolves specs against an installed `node_modules` tree, requiring each
/// package's `package.json` to exist.
#[derive(Debug, Clone)]
pub struct NodeModulesResolver {
    root: PathBuf,
}

impl NodeModulesResolver {
    /// Resolves from `<root>/node_modules`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn manifest_path(&self, package: &str) -> PathBuf {
        package
            .split('/')
            .fold(self.root.join("node_modules"), |dir, segment| dir.join(segment))
            .join("package.json")
    }

    /// Root directory whose `node_modules` is searched.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl CapabilityResolver for NodeModulesResolver {
    fn resolve(&self, spec: &CapabilitySpec) -> Result<Capability, String> {
        #[derive(Deserialize)]
        struct Manifest {
            #[serde(default)]
            version: Option<String>,
        }

        let path = self.manifest_path(spec.package);
        let content = std::fs::read_to_string(&path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
        let manifest: Manifest = serde_json::from_str(&content)
            .map_err(|e| format!("invalid {}: {e}", path.display()))?;
        Ok(Capability::new(spec, manifest.version))
    }
}

/// Plugin bindings of a layer: namespace -> capability.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PluginBindings(BTreeMap<String, Capability>);

impl PluginBindings {
    /// Creates empty bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a namespace, replacing any earlier binding.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, capability: Capability) -> Self {
        self.0.insert(name.into(), capability);
        self
    }

    /// Looks up a binding.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Capability> {
        self.0.get(name)
    }

    /// Returns `true` if the namespace is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Bound namespaces in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Union of both sets; bindings in `later` win.
    #[must_use]
    pub fn merged_with(&self, later: &PluginBindings) -> PluginBindings {
        let mut merged = self.clone();
        for (name, capability) in &later.0 {
            merged.0.insert(name.clone(), capability.clone());
        }
        merged
    }
}

/// Immutable table of resolved capabilities, keyed by short name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapabilityRegistry {
    entries: BTreeMap<String, Capability>,
}

impl CapabilityRegistry {
    /// Resolves every spec through `resolver`.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::UnresolvableCapability`] for the first spec that
    /// cannot be resolved. A partially resolved registry is never returned.
    pub fn resolve<'a, I>(specs: I, resolver: &dyn CapabilityResolver) -> Result<Self, ChainError>
    where
        I: IntoIterator<Item = &'a CapabilitySpec>,
    {
        let mut entries = BTreeMap::new();
        for spec in specs {
            let capability =
                resolver
                    .resolve(spec)
                    .map_err(|reason| ChainError::UnresolvableCapability {
                        name: spec.name.to_string(),
                        package: spec.package.to_string(),
                        reason,
                    })?;
            debug!(
                name = spec.name,
                package = spec.package,
                version = capability.version().unwrap_or("unpinned"),
                "resolved capability"
            );
            entries.insert(spec.name.to_string(), capability);
        }
        Ok(Self { entries })
    }

    /// Looks up a capability by short name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Capability> {
        self.entries.get(name)
    }

    /// Looks up a capability, treating absence as unresolvable.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::UnresolvableCapability`] if `name` was not part
    /// of the startup table.
    pub fn require(&self, name: &str) -> Result<&Capability, ChainError> {
        self.get(name)
            .ok_or_else(|| ChainError::UnresolvableCapability {
                name: name.to_string(),
                package: String::new(),
                reason: "not declared in the capability table".to_string(),
            })
    }

    /// Builds plugin bindings for the given names.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::UnresolvableCapability`] for a name that is not
    /// in the registry.
    pub fn bindings(&self, names: &[&str]) -> Result<PluginBindings, ChainError> {
        names.iter().try_fold(PluginBindings::new(), |bindings, name| {
            Ok(bindings.with(*name, self.require(name)?.clone()))
        })
    }

    /// Iterates capabilities in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Capability> {
        self.entries.values()
    }

    /// Number of capabilities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
