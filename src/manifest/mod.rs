//! Mod manifest model and loading.
//!
//! The manifest is the JSON document the server browser publishes. Only the
//! parts this tool needs are modelled:
//!
//! ```json
//! {
//!   "serverSettings": [{ "label": "Type", "value": "Fabric" }],
//!   "modCategories": [
//!     { "title": "Performance", "mods": [{ "name": "Sodium", "url": "https://modrinth.com/mod/sodium" }] }
//!   ]
//! }
//! ```
//!
//! Unknown fields are ignored. Missing or `null` lists default to empty, and
//! setting values may be any JSON type.

mod error;

pub use error::ManifestError;

use std::path::Path;

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::{debug, instrument};

/// Settings label whose value selects the mod loader.
pub const LOADER_SETTING_LABEL: &str = "Type";

/// Title used for categories that do not carry one.
pub const UNKNOWN_CATEGORY_TITLE: &str = "Unknown Category";

/// Parsed mod manifest.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    /// Label/value pairs describing the server.
    #[serde(default, deserialize_with = "null_as_default")]
    pub server_settings: Vec<ServerSetting>,
    /// Mod categories in document order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub mod_categories: Vec<Category>,
}

/// A single server setting.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSetting {
    /// Setting name, e.g. `Type` or `Max Players`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: String,
    /// Raw setting value; only the `Type` setting is read, and only as a string.
    #[serde(default)]
    pub value: Value,
}

/// A titled group of mods.
#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    /// Heading shown for the group, if the document has one.
    #[serde(default)]
    pub title: Option<String>,
    /// Mods in document order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub mods: Vec<ModEntry>,
}

/// One mod reference from the manifest.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModEntry {
    /// Display name, used in logs and reports.
    #[serde(default)]
    pub name: Option<String>,
    /// Project page URL.
    #[serde(default)]
    pub url: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Category {
    /// Title for logging; untitled categories report as `Unknown Category`.
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(UNKNOWN_CATEGORY_TITLE)
    }
}

impl ModEntry {
    /// Name for reporting; entries without a name report as empty.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

impl Manifest {
    /// Loads and parses a manifest file.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::NotFound`] if the file does not exist,
    /// [`ManifestError::Io`] for other read failures, and
    /// [`ManifestError::Parse`] if the content is not a valid manifest.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ManifestError::from_io(path, e))?;
        let manifest = Self::from_json(&content).map_err(|e| ManifestError::parse(path, e))?;
        debug!(
            categories = manifest.mod_categories.len(),
            mods = manifest.mod_count(),
            "manifest loaded"
        );
        Ok(manifest)
    }

    /// Parses a manifest from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns the underlying JSON error when the document is malformed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Selects the mod loader for the whole run.
    ///
    /// Uses the value of the first setting labelled `Type`, or `default`
    /// when no such setting exists or its value is not a string. The
    /// returned value is not case-folded.
    #[must_use]
    pub fn loader<'a>(&'a self, default: &'a str) -> &'a str {
        self.server_settings
            .iter()
            .find(|setting| setting.label == LOADER_SETTING_LABEL)
            .and_then(|setting| setting.value.as_str())
            .unwrap_or(default)
    }

    /// Total number of mod entries across all categories.
    #[must_use]
    pub fn mod_count(&self) -> usize {
        self.mod_categories.iter().map(|c| c.mods.len()).sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "serverSettings": [
            { "label": "Version", "value": "1.21.10" },
            { "label": "Type", "value": "Quilt" },
            { "label": "Type", "value": "Forge" }
        ],
        "modCategories": [
            {
                "title": "Performance",
                "mods": [
                    { "name": "Sodium", "url": "https://modrinth.com/mod/sodium", "description": "fast" },
                    { "name": "No URL" }
                ]
            },
            { "mods": [ { "url": "https://modrinth.com/mod/lithium" } ] }
        ]
    }"#;

    #[test]
    fn test_from_json_parses_categories_and_mods() {
        let manifest = Manifest::from_json(SAMPLE).unwrap();
        assert_eq!(manifest.mod_categories.len(), 2);
        assert_eq!(manifest.mod_count(), 3);
        assert_eq!(manifest.mod_categories[0].display_title(), "Performance");
        assert_eq!(manifest.mod_categories[0].mods[0].display_name(), "Sodium");
        assert!(manifest.mod_categories[0].mods[1].url.is_none());
    }

    #[test]
    fn test_from_json_missing_title_defaults() {
        let manifest = Manifest::from_json(SAMPLE).unwrap();
        assert_eq!(manifest.mod_categories[1].display_title(), UNKNOWN_CATEGORY_TITLE);
        assert_eq!(manifest.mod_categories[1].mods[0].display_name(), "");
    }

    #[test]
    fn test_loader_uses_first_type_setting() {
        let manifest = Manifest::from_json(SAMPLE).unwrap();
        assert_eq!(manifest.loader("fabric"), "Quilt");
    }

    #[test]
    fn test_loader_defaults_when_type_absent() {
        let manifest =
            Manifest::from_json(r#"{"serverSettings": [{"label": "Motd", "value": "hi"}]}"#)
                .unwrap();
        assert_eq!(manifest.loader("fabric"), "fabric");
    }

    #[test]
    fn test_from_json_accepts_non_string_setting_values_and_nulls() {
        let manifest = Manifest::from_json(
            r#"{
                "serverSettings": [
                    { "label": "Max Players", "value": 20 },
                    { "label": "Whitelist", "value": true },
                    { "label": "Motd", "value": null },
                    { "label": "Type", "value": "quilt" }
                ],
                "modCategories": [
                    { "title": null, "mods": [{ "name": "Sodium", "url": "https://modrinth.com/mod/sodium" }] },
                    { "title": "Empty", "mods": null }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(manifest.server_settings.len(), 4);
        assert_eq!(manifest.server_settings[0].value, Value::from(20));
        assert_eq!(manifest.loader("fabric"), "quilt");
        assert_eq!(manifest.mod_categories[0].display_title(), UNKNOWN_CATEGORY_TITLE);
        assert_eq!(manifest.mod_count(), 1);
    }

    #[test]
    fn test_loader_defaults_when_type_value_is_not_a_string() {
        let manifest = Manifest::from_json(
            r#"{"serverSettings": [{"label": "Type", "value": 3}, {"label": "Type", "value": "forge"}]}"#,
        )
        .unwrap();
        assert_eq!(manifest.loader("fabric"), "fabric");
    }

    #[test]
    fn test_empty_document_has_no_mods() {
        let manifest = Manifest::from_json("{}").unwrap();
        assert!(manifest.server_settings.is_empty());
        assert_eq!(manifest.mod_count(), 0);
        assert_eq!(manifest.loader("fabric"), "fabric");
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = Manifest::load(&dir.path().join("data.json")).unwrap_err();
        assert!(matches!(err, ManifestError::NotFound { .. }));
    }

    #[test]
    fn test_load_invalid_json_is_parse_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = Manifest::load(&path).unwrap_err();
        assert!(matches!(err, ManifestError::Parse { .. }));
    }

    #[test]
    fn test_load_reads_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, SAMPLE).unwrap();
        let manifest = Manifest::load(&path).unwrap();
        assert_eq!(manifest.mod_count(), 3);
    }
}
