use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Credentials attached to every REST request.
#[derive(Clone)]
pub enum Auth {
    /// App-scoped API token, sent as `X-Cybozu-API-Token`.
    ApiToken(String),
    /// Username/password pair, sent base64-encoded as `X-Cybozu-Authorization`.
    Password { username: String, password: String },
}

impl Auth {
    pub fn api_token(token: impl Into<String>) -> Self {
        Auth::ApiToken(token.into())
    }

    pub fn password(username: impl Into<String>, password: impl Into<String>) -> Self {
        Auth::Password {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn header_name(&self) -> &'static str {
        match self {
            Auth::ApiToken(_) => "X-Cybozu-API-Token",
            Auth::Password { .. } => "X-Cybozu-Authorization",
        }
    }

    pub fn header_value(&self) -> String {
        match self {
            Auth::ApiToken(token) => token.clone(),
            Auth::Password { username, password } => {
                STANDARD.encode(format!("{username}:{password}"))
            }
        }
    }
}

// Credentials stay out of logs.
impl std::fmt::Debug for Auth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Auth::ApiToken(_) => f.write_str("Auth::ApiToken(***)"),
            Auth::Password { username, .. } => f
                .debug_struct("Auth::Password")
                .field("username", username)
                .field("password", &"***")
                .finish(),
        }
    }
}
