// Data structures for the Shopware account API responses.
// Only the fields the pull pipeline reads are declared; serde ignores the rest.

use serde::{Deserialize, Deserializer};

/// Reads an explicit `null` the same way as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A `{ "id": .., "name": .. }` pair as used for locales, categories,
/// localizations, store availabilities and product types.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NamedEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// The producer's view of a published extension (`GET /plugins/{id}`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreExtension {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Empty or missing when no icon was uploaded.
    #[serde(default)]
    pub icon_url: Option<String>,
    #[serde(default)]
    pub standard_locale: Option<NamedEntry>,
    #[serde(default)]
    pub product_type: Option<NamedEntry>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub automatic_bugfix_version_compatibility: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<NamedEntry>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub localizations: Vec<NamedEntry>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub store_availabilities: Vec<NamedEntry>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub infos: Vec<StoreInfo>,
}

/// One locale's worth of store text and structured content.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreInfo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub locale: NamedEntry,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub installation_manual: String,
    /// Newline separated list.
    #[serde(default, deserialize_with = "null_as_default")]
    pub highlights: String,
    /// Newline separated list.
    #[serde(default, deserialize_with = "null_as_default")]
    pub features: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<NamedEntry>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub videos: Vec<StoreVideo>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub faqs: Vec<StoreFaq>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreVideo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreFaq {
    #[serde(default, deserialize_with = "null_as_default")]
    pub question: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub answer: String,
}

/// A store screenshot (`GET /plugins/{id}/pictures`).
///
/// `details[0]` is the German and `details[1]` the English setting.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreImage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub remote_link: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub priority: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub details: Vec<StoreImageDetail>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreImageDetail {
    #[serde(default, deserialize_with = "null_as_default")]
    pub preview: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub activated: bool,
}

// Account API plumbing responses.

/// Response of `POST /accesstokens`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessToken {
    pub token: String,
    pub user_account_id: u64,
}

/// One entry of `GET /account/{id}/memberships`.
#[derive(Debug, Deserialize)]
pub struct Membership {
    pub company: Company,
}

#[derive(Debug, Deserialize)]
pub struct Company {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// Response of `GET /companies/{id}/allocations`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyAllocation {
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_producer: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub producer_id: u64,
}

/// Search result entry of `GET /plugins?search=..`.
#[derive(Debug, Deserialize)]
pub struct ExtensionSummary {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}
