//! Rule-level types: severities, identifiers, settings and rule tables.

use crate::error::ModelError;
use serde::de::{self, Deserializer};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Severity of a configured rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Rule is disabled.
    Off,
    /// Rule reports warnings.
    Warn,
    /// Rule reports errors.
    Error,
}

impl Severity {
    /// Maps the numeric aliases `0`, `1`, `2` to a severity.
    #[must_use]
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            0 => Some(Self::Off),
            1 => Some(Self::Warn),
            2 => Some(Self::Error),
            _ => None,
        }
    }

    /// Returns the lowercase name used in configuration files.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "off" => Ok(Self::Off),
            "warn" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(ModelError::UnknownSeverity {
                value: other.to_string(),
            }),
        }
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Name(String),
            Level(u8),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Name(name) => name.parse().map_err(de::Error::custom),
            Repr::Level(level) => Self::from_level(level).ok_or_else(|| {
                de::Error::custom(ModelError::UnknownSeverity {
                    value: level.to_string(),
                })
            }),
        }
    }
}

/// A rule identifier, optionally prefixed by a plugin namespace
/// (e.g., `no-empty`, `sonarjs/no-identical-conditions`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RuleId(String);

impl RuleId {
    /// Creates a validated rule identifier.
    ///
    /// # Errors
    ///
    /// Returns error if the identifier is empty.
    pub fn new(id: &str) -> Result<Self, ModelError> {
        if id.trim().is_empty() {
            return Err(ModelError::EmptyRuleId);
        }
        Ok(Self(id.to_string()))
    }

    /// Creates an identifier from a catalog literal.
    #[must_use]
    pub fn from_static(id: &'static str) -> Self {
        debug_assert!(!id.is_empty(), "catalog rule ids are never empty");
        Self(id.to_string())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the plugin namespace: everything before the last `/`.
    ///
    /// `@typescript-eslint/no-shadow` -> `@typescript-eslint`,
    /// `no-empty` -> `None`.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.0
            .rsplit_once('/')
            .map(|(ns, _)| ns)
            .filter(|ns| !ns.is_empty())
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for RuleId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for RuleId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::new(&raw).map_err(de::Error::custom)
    }
}

/// Severity of a rule plus its option values.
///
/// Serializes as the bare severity when there are no options, otherwise as
/// `[severity, option, ...]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSetting {
    severity: Severity,
    options: Vec<serde_json::Value>,
}

impl RuleSetting {
    /// Creates a setting without options.
    #[must_use]
    pub fn new(severity: Severity) -> Self {
        Self {
            severity,
            options: Vec::new(),
        }
    }

    /// `off` without options.
    #[must_use]
    pub fn off() -> Self {
        Self::new(Severity::Off)
    }

    /// `warn` without options.
    #[must_use]
    pub fn warn() -> Self {
        Self::new(Severity::Warn)
    }

    /// `error` without options.
    #[must_use]
    pub fn error() -> Self {
        Self::new(Severity::Error)
    }

    /// Appends an option value.
    #[must_use]
    pub fn with_option(mut self, option: impl Into<serde_json::Value>) -> Self {
        self.options.push(option.into());
        self
    }

    /// Returns the severity.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the option values, in declaration order.
    #[must_use]
    pub fn options(&self) -> &[serde_json::Value] {
        &self.options
    }

    /// Returns `true` unless the severity is `off`.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.severity != Severity::Off
    }
}

impl From<Severity> for RuleSetting {
    fn from(severity: Severity) -> Self {
        Self::new(severity)
    }
}

impl Serialize for RuleSetting {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.options.is_empty() {
            return self.severity.serialize(serializer);
        }
        let mut seq = serializer.serialize_seq(Some(self.options.len() + 1))?;
        seq.serialize_element(&self.severity)?;
        for option in &self.options {
            seq.serialize_element(option)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for RuleSetting {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::Array(values) => {
                let mut values = values.into_iter();
                let first = values
                    .next()
                    .ok_or_else(|| de::Error::custom(ModelError::MissingSeverity))?;
                let severity = Severity::deserialize(first).map_err(de::Error::custom)?;
                Ok(Self {
                    severity,
                    options: values.collect(),
                })
            }
            bare => Severity::deserialize(bare)
                .map(Self::new)
                .map_err(de::Error::custom),
        }
    }
}

/// A set of rule entries keyed by identifier.
///
/// Identifiers are unique within a table. Tables iterate in identifier order
/// so serialized output is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleTable(BTreeMap<RuleId, RuleSetting>);

impl RuleTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a catalog entry, replacing any previous one for the same id.
    #[must_use]
    pub fn with(mut self, id: &'static str, setting: impl Into<RuleSetting>) -> Self {
        self.0.insert(RuleId::from_static(id), setting.into());
        self
    }

    /// Inserts an entry, returning the setting it replaced.
    pub fn insert(&mut self, id: RuleId, setting: RuleSetting) -> Option<RuleSetting> {
        self.0.insert(id, setting)
    }

    /// Removes an entry.
    pub fn remove(&mut self, id: &str) -> Option<RuleSetting> {
        self.0.remove(id)
    }

    /// Looks up the setting for an identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&RuleSetting> {
        self.0.get(id)
    }

    /// Returns `true` if the table has an entry for `id`.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates entries in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&RuleId, &RuleSetting)> {
        self.0.iter()
    }

    /// Iterates identifiers in order.
    pub fn ids(&self) -> impl Iterator<Item = &RuleId> {
        self.0.keys()
    }

    /// Shallow merge: every entry of `later` replaces the whole setting of
    /// the same identifier here. Options are never merged.
    #[must_use]
    pub fn overridden_by(&self, later: &RuleTable) -> RuleTable {
        let mut merged = self.clone();
        merged.extend_from(later);
        merged
    }

    /// In-place form of [`RuleTable::overridden_by`].
    pub fn extend_from(&mut self, later: &RuleTable) {
        for (id, setting) in later.iter() {
            self.0.insert(id.clone(), setting.clone());
        }
    }
}

impl FromIterator<(RuleId, RuleSetting)> for RuleTable {
    fn from_iter<I: IntoIterator<Item = (RuleId, RuleSetting)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RuleTable {
    type Item = (&'a RuleId, &'a RuleSetting);
    type IntoIter = std::collections::btree_map::Iter<'a, RuleId, RuleSetting>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn severity_parses_names_and_levels() {
        let names: Vec<Severity> = serde_json::from_value(json!(["off", "warn", "error"])).unwrap();
        let levels: Vec<Severity> = serde_json::from_value(json!([0, 1, 2])).unwrap();
        assert_eq!(names, levels);
        assert!(serde_json::from_value::<Severity>(json!("fatal")).is_err());
        assert!(serde_json::from_value::<Severity>(json!(3)).is_err());
    }

    #[test]
    fn rule_id_namespace() {
        let ns = |id: &str| RuleId::new(id).unwrap().namespace().map(String::from);
        assert_eq!(ns("no-empty"), None);
        assert_eq!(ns("prettier/prettier"), Some("prettier".into()));
        assert_eq!(ns("@typescript-eslint/no-shadow"), Some("@typescript-eslint".into()));
        assert_eq!(ns("@scope/plugin/rule"), Some("@scope/plugin".into()));
    }

    #[test]
    fn empty_rule_id_rejected() {
        assert_eq!(RuleId::new(""), Err(ModelError::EmptyRuleId));
        assert_eq!(RuleId::new("  "), Err(ModelError::EmptyRuleId));
    }

    #[test]
    fn setting_without_options_serializes_bare() {
        let value = serde_json::to_value(RuleSetting::error()).unwrap();
        assert_eq!(value, json!("error"));
    }

    #[test]
    fn setting_with_options_serializes_as_tuple() {
        let setting = RuleSetting::error()
            .with_option("bare-block")
            .with_option(json!({ "max": 1 }));
        let value = serde_json::to_value(&setting).unwrap();
        assert_eq!(value, json!(["error", "bare-block", { "max": 1 }]));

        let back: RuleSetting = serde_json::from_value(value).unwrap();
        assert_eq!(back, setting);
    }

    #[test]
    fn setting_deserializes_from_toml() {
        let table: RuleTable = toml::from_str(
            r#"
"no-console" = "warn"
"arrow-body-style" = ["error", "as-needed"]
"max-len" = [1, { code = 100 }]
"#,
        )
        .unwrap();
        assert_eq!(table.get("no-console"), Some(&RuleSetting::warn()));
        assert_eq!(
            table.get("arrow-body-style"),
            Some(&RuleSetting::error().with_option("as-needed"))
        );
        let max_len = table.get("max-len").unwrap();
        assert_eq!(max_len.severity(), Severity::Warn);
        assert_eq!(max_len.options(), &[json!({ "code": 100 })]);
    }

    #[test]
    fn empty_tuple_rejected() {
        assert!(serde_json::from_value::<RuleSetting>(json!([])).is_err());
    }

    #[test]
    fn override_replaces_whole_setting() {
        let base = RuleTable::new()
            .with(
                "no-constant-condition",
                RuleSetting::error().with_option(json!({ "checkLoops": false })),
            )
            .with("prefer-const", Severity::Error);
        let later = RuleTable::new().with("no-constant-condition", Severity::Off);

        let merged = base.overridden_by(&later);
        assert_eq!(merged.get("no-constant-condition"), Some(&RuleSetting::off()));
        assert!(merged.get("no-constant-condition").unwrap().options().is_empty());
        assert_eq!(merged.get("prefer-const"), Some(&RuleSetting::error()));
        // Receiver is untouched.
        assert_eq!(base.get("no-constant-condition").unwrap().options().len(), 1);
    }
}
