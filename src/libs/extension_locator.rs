// Resolves a folder on disk to the Shopware extension it contains.
//
// Two layouts are recognized:
// * apps, described by `manifest.xml` (`<manifest><meta><name>`)
// * platform plugins, described by `composer.json` (`extra.shopware-plugin-class`)

use crate::libs::errors::ExtensionError;
use crate::log_debug;
use quick_xml::Reader;
use quick_xml::events::Event;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const MANIFEST_FILE: &str = "manifest.xml";
const COMPOSER_FILE: &str = "composer.json";
const PLATFORM_PLUGIN_TYPE: &str = "shopware-platform-plugin";
/// Element path of the app name inside `manifest.xml`.
const APP_NAME_PATH: [&[u8]; 3] = [b"manifest", b"meta", b"name"];

/// The kind of extension found in a folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtensionKind {
    App,
    PlatformPlugin,
}

/// A local extension: its technical name (the store lookup key) and its root folder.
#[derive(Debug, Clone)]
pub struct LocalExtension {
    kind: ExtensionKind,
    name: String,
    path: PathBuf,
}

impl LocalExtension {
    /// Inspects `path` and reads the extension's name from its descriptor.
    pub fn from_folder(path: &Path) -> Result<Self, ExtensionError> {
        let (kind, name) = if path.join(MANIFEST_FILE).is_file() {
            (ExtensionKind::App, read_app_name(&path.join(MANIFEST_FILE))?)
        } else if path.join(COMPOSER_FILE).is_file() {
            (
                ExtensionKind::PlatformPlugin,
                read_plugin_name(&path.join(COMPOSER_FILE))?,
            )
        } else {
            return Err(ExtensionError::UnknownType(path.to_path_buf()));
        };

        if name.is_empty() {
            return Err(ExtensionError::EmptyName);
        }

        log_debug!("[Extension] Found {:?} {} at {}", kind, name, path.display());
        Ok(Self {
            kind,
            name,
            path: path.to_path_buf(),
        })
    }

    pub fn kind(&self) -> ExtensionKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[derive(Deserialize)]
struct ComposerJson {
    #[serde(rename = "type", default)]
    package_type: String,
    #[serde(default)]
    extra: ComposerExtra,
}

#[derive(Default, Deserialize)]
struct ComposerExtra {
    #[serde(rename = "shopware-plugin-class", default)]
    plugin_class: String,
}

/// `Swag\MyPlugin\MyPlugin` becomes `MyPlugin`.
fn read_plugin_name(composer_path: &Path) -> Result<String, ExtensionError> {
    let content = read(composer_path)?;
    let composer: ComposerJson =
        serde_json::from_str(&content).map_err(ExtensionError::Composer)?;

    if composer.package_type != PLATFORM_PLUGIN_TYPE {
        return Err(ExtensionError::NotPlatformPlugin);
    }

    Ok(composer
        .extra
        .plugin_class
        .rsplit('\\')
        .next()
        .unwrap_or_default()
        .to_string())
}

/// Returns the text of `<manifest><meta><name>`, or an empty string when it is missing.
fn read_app_name(manifest_path: &Path) -> Result<String, ExtensionError> {
    let content = read(manifest_path)?;
    let mut reader = Reader::from_str(&content);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Vec<u8>> = Vec::new();
    loop {
        match reader.read_event() {
            Ok(Event::Start(tag)) => stack.push(tag.local_name().as_ref().to_vec()),
            Ok(Event::End(_)) => {
                stack.pop();
            }
            Ok(Event::Text(text)) if stack == APP_NAME_PATH => {
                let name = text
                    .unescape()
                    .map_err(|e| ExtensionError::Manifest(e.to_string()))?;
                return Ok(name.into_owned());
            }
            Ok(Event::Eof) => return Ok(String::new()),
            Ok(_) => {}
            Err(e) => return Err(ExtensionError::Manifest(e.to_string())),
        }
    }
}

fn read(path: &Path) -> Result<String, ExtensionError> {
    fs::read_to_string(path).map_err(|cause| ExtensionError::Read {
        path: path.to_path_buf(),
        cause,
    })
}
