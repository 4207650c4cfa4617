use reqwest::StatusCode;

/// Any error that can occur when making API calls.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Invalid parameter. Checked before a request is made.
    #[error("Invalid parameter: {}", .0)]
    Parameter(&'static str),
    /// The response contained an error message. The API is inconsistent
    /// about the key it uses (`message` or `error`); both end up here.
    #[error("{}", .0)]
    Response(String),
    /// An error occurred making the request.
    #[error("Request error: {}", .0)]
    Reqwest(#[from] reqwest::Error),
    /// An error occurred in the request middleware.
    #[error("Request middleware error: {}", .0)]
    ReqwestMiddleware(anyhow::Error),
    /// An error occurred parsing the response body.
    #[error("Error parsing response: {}", .0)]
    Parse(#[from] serde_json::Error),
    /// The response returned a non-2xx status with no parseable message.
    /// Displays the status text, e.g. "404 Not Found".
    #[error("{}", .0)]
    Http(StatusCode),
    /// No session token is present. Operations that require authentication
    /// fail with this before any request is made.
    #[error("Not logged in")]
    NotLoggedIn,
    /// The page URL does not contain a place ID in its query string.
    #[error("Place ID not found in URL")]
    MissingPlaceId,
}

impl From<reqwest_middleware::Error> for Error {
    fn from(error: reqwest_middleware::Error) -> Error {
        match error {
            reqwest_middleware::Error::Reqwest(e) => Error::Reqwest(e),
            reqwest_middleware::Error::Middleware(e) => Error::ReqwestMiddleware(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_displays_status_text() {
        let error = Error::Http(StatusCode::NOT_FOUND);

        assert_eq!(error.to_string(), "404 Not Found");
    }

    #[test]
    fn response_error_displays_server_message() {
        let error = Error::Response(String::from("Invalid credentials"));

        assert_eq!(error.to_string(), "Invalid credentials");
    }
}
