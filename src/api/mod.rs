//! The API client. Its [`HbnbApi`] struct covers the full HTTP surface of
//! the service.

mod builder;

pub use builder::HbnbApiBuilder;

use crate::error::Error;
use crate::helpers::{get_default_middleware, parses_response};
use crate::request::{NewPlace, NewReview};
use crate::response::{LoginResponse, Place, Review};
use crate::session::{self, Session, TOKEN_COOKIE_NAME};
use crate::types::HttpClient;
use std::sync::{Arc, RwLock};
use serde::Serialize;
use reqwest::cookie::Jar;
use reqwest::header::AUTHORIZATION;
use url::Url;

/// The hostname requests are made against when none is configured.
pub const DEFAULT_HOSTNAME: &str = "http://localhost:5000";

/// The underlying API for interacting with an HBnB service.
#[derive(Debug, Clone)]
pub struct HbnbApi {
    client: HttpClient,
    /// The origin requests are made against.
    pub hostname: String,
    /// The cookies to make requests with. Since the requests are made with
    /// the provided client, the cookies should be the same as what the
    /// client uses.
    pub cookies: Arc<Jar>,
    /// The session, if logged in.
    pub(crate) session: Arc<RwLock<Option<Session>>>,
}

impl HbnbApi {
    /// Creates a new [`HbnbApi`] against [`DEFAULT_HOSTNAME`].
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Builder for constructing an [`HbnbApi`].
    pub fn builder() -> HbnbApiBuilder {
        HbnbApiBuilder::new()
    }

    fn get_uri(&self, pathname: &str) -> String {
        format!("{}{}", self.hostname, pathname)
    }

    /// The current session token, if logged in.
    pub fn token(&self) -> Option<String> {
        self.session.read().unwrap()
            .as_ref()
            .map(|session| session.access_token.clone())
    }

    /// Whether a session token is present.
    pub fn is_logged_in(&self) -> bool {
        self.session.read().unwrap().is_some()
    }

    /// Returns the session token, failing with [`Error::NotLoggedIn`] when
    /// absent. Guards operations that require authentication.
    pub fn check_authentication(&self) -> Result<String, Error> {
        self.token().ok_or(Error::NotLoggedIn)
    }

    /// Adds a cookie string to the cookie jar, e.g. `"token=abc; Path=/"`.
    /// A `token` cookie also becomes the session token.
    pub fn set_cookie(&self, cookie_str: &str) -> Result<(), Error> {
        let url = self.hostname.parse::<Url>()
            .map_err(|_error| Error::Parameter("hostname is not a valid URL"))?;

        self.cookies.add_cookie_str(cookie_str, &url);

        if let Some(token) = session::get_token(cookie_str) {
            let mut session = self.session.write().unwrap();

            *session = Some(Session {
                access_token: token.to_string(),
            });
        }

        Ok(())
    }

    /// Adds cookie strings to the cookie jar.
    pub fn set_cookies(&self, cookies: &[String]) -> Result<(), Error> {
        for cookie_str in cookies {
            self.set_cookie(cookie_str)?;
        }

        Ok(())
    }

    /// Logs in with the given credentials. On success the returned access
    /// token is stored as the `token` cookie (path `/`, no expiry) and used
    /// as the bearer credential for subsequent requests. On failure no
    /// token is stored and the error carries the server's message, or the
    /// HTTP status when the body has none.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, Error> {
        #[derive(Serialize, Debug)]
        struct LoginParams<'a> {
            email: &'a str,
            password: &'a str,
        }

        let uri = self.get_uri("/api/v1/auth/login");
        let response = self.client.post(&uri)
            .json(&LoginParams {
                email,
                password,
            })
            .send()
            .await?;
        let body: LoginResponse = parses_response(response).await?;

        // mirrors the browser's `token=...; path=/` cookie
        let cookie_str = format!("{}={}; Path=/", TOKEN_COOKIE_NAME, body.access_token);

        if self.set_cookie(&cookie_str).is_err() {
            log::debug!("Hostname is not a valid URL; token kept in memory only");

            let mut session = self.session.write().unwrap();

            *session = Some(Session {
                access_token: body.access_token.clone(),
            });
        }

        Ok(body)
    }

    /// Logs out, clearing the `token` cookie by re-adding it with
    /// `Max-Age=0` and dropping the session.
    pub fn logout(&self) {
        let cookie_str = format!("{}=; Max-Age=0; Path=/", TOKEN_COOKIE_NAME);

        if let Ok(url) = self.hostname.parse::<Url>() {
            self.cookies.add_cookie_str(&cookie_str, &url);
        }

        let mut session = self.session.write().unwrap();

        *session = None;
    }

    /// Gets all places. Requires authentication.
    pub async fn get_places(&self) -> Result<Vec<Place>, Error> {
        let token = self.check_authentication()?;
        let uri = self.get_uri("/api/v1/places/");
        let response = self.client.get(&uri)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .send()
            .await?;
        let body: Vec<Place> = parses_response(response).await?;

        Ok(body)
    }

    /// Gets the details of a place. Authentication is optional; the bearer
    /// credential is attached only when a token is present.
    pub async fn get_place(&self, place_id: &str) -> Result<Place, Error> {
        if place_id.is_empty() {
            return Err(Error::Parameter("place_id cannot be empty"));
        }

        let uri = self.get_uri(&format!("/api/v1/places/{place_id}"));
        let mut request = self.client.get(&uri);

        if let Some(token) = self.token() {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        let response = request.send().await?;
        let body: Place = parses_response(response).await?;

        Ok(body)
    }

    /// Gets the reviews for a place. No authentication required.
    pub async fn get_reviews(&self, place_id: &str) -> Result<Vec<Review>, Error> {
        if place_id.is_empty() {
            return Err(Error::Parameter("place_id cannot be empty"));
        }

        let uri = self.get_uri(&format!("/api/v1/places/{place_id}/reviews"));
        let response = self.client.get(&uri)
            .send()
            .await?;
        let body: Vec<Review> = parses_response(response).await?;

        Ok(body)
    }

    /// Creates a new place listing. Requires authentication. The returned
    /// [`Place`] carries the ID of the new listing.
    pub async fn create_place(&self, place: &NewPlace) -> Result<Place, Error> {
        let token = self.check_authentication()?;
        let uri = self.get_uri("/api/v1/places/");
        let response = self.client.post(&uri)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .json(place)
            .send()
            .await?;
        let body: Place = parses_response(response).await?;

        Ok(body)
    }

    /// Submits a review. Requires authentication, a place ID, and non-empty
    /// review text; all three are checked before any request is made.
    pub async fn create_review(&self, review: &NewReview) -> Result<Review, Error> {
        let token = self.check_authentication()?;

        if review.place_id.is_empty() {
            return Err(Error::Parameter("place_id cannot be empty"));
        }

        if review.is_empty() {
            return Err(Error::Parameter("Review text cannot be empty"));
        }

        let uri = self.get_uri("/api/v1/reviews/");
        let response = self.client.post(&uri)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .json(review)
            .send()
            .await?;
        let body: Review = parses_response(response).await?;

        Ok(body)
    }
}

impl Default for HbnbApi {
    fn default() -> Self {
        Self::new()
    }
}

impl From<HbnbApiBuilder> for HbnbApi {
    fn from(builder: HbnbApiBuilder) -> Self {
        let cookies = builder.cookie_jar
            .unwrap_or_default();
        let client = builder.client
            .unwrap_or_else(|| get_default_middleware(
                Arc::clone(&cookies),
                builder.user_agent,
            ));
        let session = Arc::new(RwLock::new(builder.access_token
            .map(|access_token| Session { access_token })));

        Self {
            client,
            hostname: builder.hostname,
            cookies,
            session,
        }
    }
}
