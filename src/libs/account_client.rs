// Client for the Shopware account API.
//
// A run logs in once, picks the company to act for, resolves that company's
// producer and then only needs two producer calls: look up an extension by
// name and list its images.

use crate::libs::errors::AccountError;
use crate::schemas::store::{
    AccessToken, CompanyAllocation, ExtensionSummary, Membership, StoreExtension, StoreImage,
};
use crate::{log_debug, log_info};
use colored::Colorize;
use serde::de::DeserializeOwned;

/// Public endpoint of the account API.
pub const DEFAULT_API_URL: &str = "https://api.shopware.com";

/// Header that carries the access token on authenticated requests.
const TOKEN_HEADER: &str = "X-Shopware-Token";

/// How many search hits are requested when looking up an extension by name.
const SEARCH_LIMIT: &str = "100";

/// Login data after merging the config file, CLI flags and environment.
#[derive(Debug, Clone)]
pub struct AccountCredentials {
    pub email: String,
    pub password: String,
    pub company: Option<u64>,
}

/// The producer operations the pull pipeline relies on.
pub trait ProducerApi {
    fn extension_by_name(&self, name: &str) -> Result<StoreExtension, AccountError>;
    fn extension_images(&self, extension_id: u64) -> Result<Vec<StoreImage>, AccountError>;
}

/// A logged-in session acting for one company.
pub struct AccountClient {
    agent: ureq::Agent,
    base_url: String,
    token: String,
    company_id: u64,
}

impl AccountClient {
    /// Logs in and selects the active company.
    ///
    /// The configured company must be one of the account's memberships; without
    /// one, the first membership is used.
    pub fn login(
        agent: ureq::Agent,
        base_url: &str,
        credentials: &AccountCredentials,
    ) -> Result<Self, AccountError> {
        let base_url = base_url.trim_end_matches('/').to_string();
        let url = format!("{base_url}/accesstokens");
        log_debug!("[Account] Logging in as {}", credentials.email.cyan());

        let response = agent
            .post(&url)
            .send_json(serde_json::json!({
                "shopwareId": credentials.email,
                "password": credentials.password,
            }))
            .map_err(|e| request_error(&url, e))?;
        let access: AccessToken = decode(&url, response)?;

        let mut client = Self {
            agent,
            base_url,
            token: access.token,
            company_id: 0,
        };

        let memberships: Vec<Membership> =
            client.get_json(&format!("/account/{}/memberships", access.user_account_id), &[])?;
        let membership = match credentials.company {
            Some(id) => memberships
                .into_iter()
                .find(|m| m.company.id == id)
                .ok_or(AccountError::CompanyNotFound(id))?,
            None => memberships
                .into_iter()
                .next()
                .ok_or(AccountError::NoMembership)?,
        };

        log_info!(
            "[Account] Using company {} ({})",
            membership.company.name.bold(),
            membership.company.id
        );
        client.company_id = membership.company.id;
        Ok(client)
    }

    /// Resolves the producer of the active company.
    pub fn producer(&self) -> Result<ProducerEndpoint<'_>, AccountError> {
        let allocation: CompanyAllocation =
            self.get_json(&format!("/companies/{}/allocations", self.company_id), &[])?;

        if !allocation.is_producer {
            return Err(AccountError::NotProducer);
        }

        log_debug!("[Account] Producer id {}", allocation.producer_id);
        Ok(ProducerEndpoint {
            client: self,
            producer_id: allocation.producer_id,
        })
    }

    /// Sends an authenticated GET to `path` (relative to the base URL) and decodes the JSON body.
    fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, AccountError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "account api request");

        let mut request = self.agent.get(&url).set(TOKEN_HEADER, &self.token);
        for (key, value) in query {
            request = request.query(key, value);
        }

        let response = request.call().map_err(|e| request_error(&url, e))?;
        decode(&url, response)
    }
}

/// Producer scoped operations of a logged-in client.
pub struct ProducerEndpoint<'a> {
    client: &'a AccountClient,
    producer_id: u64,
}

impl ProducerApi for ProducerEndpoint<'_> {
    /// Searches the producer's extensions and loads the full record of the
    /// first case-insensitive name match.
    fn extension_by_name(&self, name: &str) -> Result<StoreExtension, AccountError> {
        let producer_id = self.producer_id.to_string();
        let hits: Vec<ExtensionSummary> = self.client.get_json(
            "/plugins",
            &[
                ("producerId", producer_id.as_str()),
                ("limit", SEARCH_LIMIT),
                ("search", name),
            ],
        )?;

        let hit = hits
            .into_iter()
            .find(|hit| hit.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| AccountError::ExtensionNotFound(name.to_string()))?;

        log_debug!("[Account] Found {} with id {}", hit.name.cyan(), hit.id);
        self.client.get_json(&format!("/plugins/{}", hit.id), &[])
    }

    fn extension_images(&self, extension_id: u64) -> Result<Vec<StoreImage>, AccountError> {
        self.client
            .get_json(&format!("/plugins/{extension_id}/pictures"), &[])
    }
}

/// Splits `ureq` errors into "server answered with an error status" and "no usable answer".
fn request_error(url: &str, error: ureq::Error) -> AccountError {
    match error {
        ureq::Error::Status(status, response) => AccountError::Status {
            url: url.to_string(),
            status,
            body: response.into_string().unwrap_or_default(),
        },
        other => AccountError::Request {
            url: url.to_string(),
            cause: Box::new(other),
        },
    }
}

fn decode<T: DeserializeOwned>(url: &str, response: ureq::Response) -> Result<T, AccountError> {
    response.into_json().map_err(|cause| AccountError::Decode {
        url: url.to_string(),
        cause,
    })
}
