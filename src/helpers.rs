use crate::error::Error;
use std::sync::Arc;
use reqwest_middleware::{
    ClientBuilder,
    ClientWithMiddleware,
};
use reqwest::{
    header,
    cookie::CookieStore,
};
use serde::Deserialize;
use serde::de::DeserializeOwned;

pub const USER_AGENT_STRING: &str = concat!("hbnb-client/", env!("CARGO_PKG_VERSION"));

/// An error body. The API is inconsistent about which key carries the
/// message.
#[derive(Deserialize, Debug)]
struct ErrorResponse {
    message: Option<String>,
    error: Option<String>,
}

impl ErrorResponse {
    fn into_message(self) -> Option<String> {
        self.message.or(self.error)
    }
}

pub fn get_default_middleware<T>(cookie_store: Arc<T>, user_agent_string: &'static str) -> ClientWithMiddleware
where
    T: CookieStore + 'static,
{
    let mut headers = header::HeaderMap::new();

    headers.insert(header::USER_AGENT, header::HeaderValue::from_static(user_agent_string));

    let client = reqwest::ClientBuilder::new()
        .cookie_provider(cookie_store)
        .default_headers(headers)
        .build()
        .unwrap();

    ClientBuilder::new(client).build()
}

/// Checks the response status, converting non-2xx responses into errors. An
/// error body carrying a `message` or `error` key becomes
/// [`Error::Response`]; anything else becomes [`Error::Http`] with the
/// status.
pub async fn check_response(response: reqwest::Response) -> Result<bytes::Bytes, Error> {
    let status = response.status();

    if status.is_client_error() || status.is_server_error() {
        let body = response.bytes().await?;

        if let Ok(error_body) = serde_json::from_slice::<ErrorResponse>(&body) {
            if let Some(message) = error_body.into_message() {
                return Err(Error::Response(message));
            }
        }

        return Err(Error::Http(status));
    }

    Ok(response.bytes().await?)
}

pub async fn parses_response<D>(response: reqwest::Response) -> Result<D, Error>
where
    D: DeserializeOwned,
{
    let body = check_response(response).await?;

    match serde_json::from_slice::<D>(&body) {
        Ok(body) => Ok(body),
        Err(parse_error) => {
            // unexpected response
            if let Ok(error_body) = serde_json::from_slice::<ErrorResponse>(&body) {
                if let Some(message) = error_body.into_message() {
                    return Err(Error::Response(message));
                }
            }

            Err(parse_error.into())
        },
    }
}
