// Defines the schema of `.shopware-extension.yml`, the local store configuration
// that lives in the root of an extension.
//
// Every optional field is skipped when unset, so the YAML never contains
// `icon: ""` for an extension without an icon.

use serde::{Deserialize, Serialize};

/// Root of `.shopware-extension.yml`.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtensionConfig {
    #[serde(default)]
    pub store: ConfigStore,
}

/// The `store:` section, mirroring the store record of the extension.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigStore {
    /// Path of the icon relative to the extension root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localizations: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availabilities: Option<Vec<String>>,
    #[serde(default)]
    pub description: Translated<String>,
    #[serde(default)]
    pub installation_manual: Translated<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
    #[serde(default)]
    pub tags: Translated<Vec<String>>,
    #[serde(default)]
    pub videos: Translated<Vec<String>>,
    #[serde(default)]
    pub highlights: Translated<Vec<String>>,
    #[serde(default)]
    pub features: Translated<Vec<String>>,
    #[serde(default)]
    pub faq: Translated<Vec<ConfigStoreFaq>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<ConfigStoreImage>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automatic_bugfix_version_compatibility: Option<bool>,
}

/// A value that exists once in German and once in English.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Translated<T> {
    #[serde(rename = "de", skip_serializing_if = "Option::is_none")]
    pub german: Option<T>,
    #[serde(rename = "en", skip_serializing_if = "Option::is_none")]
    pub english: Option<T>,
}

// Manual impl: the derived one would require `T: Default`.
impl<T> Default for Translated<T> {
    fn default() -> Self {
        Self {
            german: None,
            english: None,
        }
    }
}

impl<T> Translated<T> {
    pub fn new(german: T, english: T) -> Self {
        Self {
            german: Some(german),
            english: Some(english),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigStoreFaq {
    pub question: String,
    pub answer: String,
}

/// A screenshot entry; `file` is relative to the extension root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigStoreImage {
    pub file: String,
    pub activate: LocalizedFlags,
    pub preview: LocalizedFlags,
    pub priority: i64,
}

/// A per-language on/off switch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocalizedFlags {
    #[serde(rename = "de")]
    pub german: bool,
    #[serde(rename = "en")]
    pub english: bool,
}
