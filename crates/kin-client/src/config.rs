use crate::auth::Auth;

/// Connection settings for one kintone host.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the host, e.g. `https://example.cybozu.com`.
    pub base_url: String,
    pub auth: Auth,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, auth: Auth) -> Self {
        Self {
            base_url: base_url.into(),
            auth,
        }
    }
}
