use reqwest::Client;
use std::time::Duration;

/// Shared client for backend calls. Per-request timeouts are set by the caller
/// because analysis and generation have very different budgets.
pub fn build_backend_client(connect_timeout_secs: u64) -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(connect_timeout_secs))
        .pool_max_idle_per_host(2)
        .pool_idle_timeout(Duration::from_secs(90))
        .tcp_keepalive(Duration::from_secs(60))
        .user_agent(concat!("stylemind/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| Client::new())
}
