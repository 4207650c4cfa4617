use super::{HbnbApi, DEFAULT_HOSTNAME};
use crate::helpers::USER_AGENT_STRING;
use std::sync::Arc;
use reqwest::cookie::Jar;
use reqwest_middleware::ClientWithMiddleware;

/// Builder for constructing an [`HbnbApi`].
#[derive(Debug, Clone)]
pub struct HbnbApiBuilder {
    /// The origin requests are made against.
    pub(crate) hostname: String,
    /// An access token for an already-established session.
    pub(crate) access_token: Option<String>,
    /// Request cookies.
    pub(crate) cookie_jar: Option<Arc<Jar>>,
    /// Client to use for requests. Remember to also include the cookies
    /// connected to this client.
    pub(crate) client: Option<ClientWithMiddleware>,
    /// User agent for requests.
    pub(crate) user_agent: &'static str,
}

impl Default for HbnbApiBuilder {
    fn default() -> Self {
        Self {
            hostname: String::from(DEFAULT_HOSTNAME),
            access_token: None,
            cookie_jar: None,
            client: None,
            user_agent: USER_AGENT_STRING,
        }
    }
}

impl HbnbApiBuilder {
    /// Creates a new [`HbnbApiBuilder`].
    pub fn new() -> Self {
        Self::default()
    }

    /// The origin requests are made against, e.g. `"http://localhost:5000"`.
    pub fn hostname<T>(mut self, hostname: T) -> Self
    where
        T: Into<String>,
    {
        self.hostname = hostname.into();
        self
    }

    /// An access token for an already-established session. Without one the
    /// client starts logged out.
    pub fn access_token<T>(mut self, access_token: T) -> Self
    where
        T: Into<String>,
    {
        self.access_token = Some(access_token.into());
        self
    }

    /// Client to use for requests. It is also required to include the
    /// associated cookies with this client so that the `set_cookie` method
    /// works as expected.
    pub fn client(mut self, client: ClientWithMiddleware, cookies: Arc<Jar>) -> Self {
        self.client = Some(client);
        self.cookie_jar = Some(cookies);
        self
    }

    /// Builds the [`HbnbApi`].
    pub fn build(self) -> HbnbApi {
        self.into()
    }
}
