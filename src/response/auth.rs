use serde::{Serialize, Deserialize};

/// The result returned after a successful login.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoginResponse {
    /// The access token for the session. Stored as the `token` cookie and
    /// sent as the bearer credential on authenticated requests.
    pub access_token: String,
}
