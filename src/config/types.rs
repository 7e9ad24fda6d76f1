//! Configuration types for model-defaults
//!
//! Two documents are involved:
//! - [`AppConfig`], the application's own settings, loaded from TOML files
//!   and environment variables.
//! - [`DefaultModelsConfig`], the plugin's `DefaultModels.json` holding the
//!   model table and the change allow lists.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Default location of the defaults file, relative to the working directory
pub const DEFAULT_MODELS_PATH: &str = "configs/plugins/PlayerModelChanger/DefaultModels.json";

/// Location of the defaults file relative to the plugin's module directory
pub const MODULE_RELATIVE_MODELS_PATH: &str =
    "../../configs/plugins/PlayerModelChanger/DefaultModels.json";

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where to find the default-models file
    pub defaults: DefaultsConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Default-models file settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Path to `DefaultModels.json` (`~` is expanded)
    pub path: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_MODELS_PATH.to_string(),
        }
    }
}

impl DefaultsConfig {
    /// Path with a leading `~` expanded
    pub fn expanded_path(&self) -> String {
        shellexpand::tilde(&self.path).into_owned()
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Output format (pretty, json)
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable output
    #[default]
    Pretty,
    /// JSON structured output
    Json,
}

/// Contents of `DefaultModels.json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DefaultModelsConfig {
    /// Default model per key and side
    #[serde(rename = "DefaultModels", deserialize_with = "null_as_default")]
    pub models: ModelSections,

    /// Who may change their model, per side
    #[serde(rename = "WhoCanChangeModel", deserialize_with = "null_as_default")]
    pub who_can_change_model: WhoCanChangeModelConfig,
}

impl DefaultModelsConfig {
    /// Parse the JSON document
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// The `DefaultModels` object: one key table for both sides plus per-side
/// overrides
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ModelSections {
    /// Applies to both sides
    pub all: Option<ModelTable>,

    /// Terrorist overrides
    pub t: Option<ModelTable>,

    /// Counter-terrorist overrides
    pub ct: Option<ModelTable>,
}

/// The `WhoCanChangeModel` object
///
/// `all` seeds both sides; `t` and `ct` replace the seeded list when present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WhoCanChangeModelConfig {
    pub all: Option<Vec<String>>,
    pub t: Option<Vec<String>>,
    pub ct: Option<Vec<String>>,
}

/// A `key -> model` table in declared order
///
/// Duplicate keys are kept so the merge can apply them in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelTable(Vec<(String, String)>);

impl ModelTable {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ModelTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<'de> Deserialize<'de> for ModelTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ModelTableVisitor;

        impl<'de> Visitor<'de> for ModelTableVisitor {
            type Value = ModelTable;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of keys to model names")
            }

            fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut pairs = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, model)) = access.next_entry::<String, String>()? {
                    pairs.push((key, model));
                }
                Ok(ModelTable(pairs))
            }
        }

        deserializer.deserialize_map(ModelTableVisitor)
    }
}

/// Treat an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_app_config() {
        let config = AppConfig::default();
        assert_eq!(config.defaults.path, DEFAULT_MODELS_PATH);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_deserialize_log_format() {
        let format: LogFormat = serde_json::from_str(r#""json""#).unwrap();
        assert_eq!(format, LogFormat::Json);

        let format: LogFormat = serde_json::from_str(r#""pretty""#).unwrap();
        assert_eq!(format, LogFormat::Pretty);
    }

    #[test]
    fn test_model_table_keeps_declared_order() {
        let table: ModelTable =
            serde_json::from_str(r##"{"*": "a", "#vip": "b", "@css/vip": "c"}"##).unwrap();
        let keys: Vec<_> = table.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["*", "#vip", "@css/vip"]);
    }

    #[test]
    fn test_model_table_keeps_duplicates() {
        let table: ModelTable = serde_json::from_str(r#"{"*": "first", "*": "second"}"#).unwrap();
        assert_eq!(table.len(), 2);
        let models: Vec<_> = table.iter().map(|(_, v)| v).collect();
        assert_eq!(models, vec!["first", "second"]);
    }

    #[test]
    fn test_model_table_rejects_non_string_model() {
        let result = serde_json::from_str::<ModelTable>(r#"{"*": 3}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_defaults_file_full() {
        let json = r##"{
            "DefaultModels": {
                "all": {"*": "modelA"},
                "t": {"#vip": "modelB"},
                "ct": {"76561198000000001": ""}
            },
            "WhoCanChangeModel": {
                "all": ["@css/vip"],
                "ct": ["#staff"]
            }
        }"##;

        let config = DefaultModelsConfig::from_json(json).unwrap();
        assert_eq!(config.models.all.as_ref().unwrap().len(), 1);
        assert_eq!(config.models.t.as_ref().unwrap().len(), 1);
        assert_eq!(
            config.models.ct.as_ref().unwrap().iter().next(),
            Some(("76561198000000001", ""))
        );
        assert_eq!(
            config.who_can_change_model.all,
            Some(vec!["@css/vip".to_string()])
        );
        assert!(config.who_can_change_model.t.is_none());
        assert_eq!(
            config.who_can_change_model.ct,
            Some(vec!["#staff".to_string()])
        );
    }

    #[test]
    fn test_defaults_file_missing_and_null_sections() {
        let config = DefaultModelsConfig::from_json("{}").unwrap();
        assert_eq!(config, DefaultModelsConfig::default());

        let json = r#"{"DefaultModels": null, "WhoCanChangeModel": {"t": null}}"#;
        let config = DefaultModelsConfig::from_json(json).unwrap();
        assert!(config.models.all.is_none());
        assert!(config.who_can_change_model.t.is_none());
    }
}
