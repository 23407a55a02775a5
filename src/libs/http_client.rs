// Builds the single HTTP agent shared by the account API client and the asset fetcher.

use std::time::Duration;

/// How long establishing a connection may take.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);
/// Upper bound for a whole request including the body transfer.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

/// Creates the `ureq` agent. The agent is cheap to clone and shares its connection pool.
pub fn build_agent() -> ureq::Agent {
    ureq::AgentBuilder::new()
        .user_agent(concat!("shopware-store-pull/", env!("CARGO_PKG_VERSION")))
        .timeout_connect(CONNECT_TIMEOUT)
        .timeout(REQUEST_TIMEOUT)
        .build()
}
