//! # hbnb-client
//!
//! Typed async client for HBnB property-rental APIs.
//!
//! The [`HbnbApi`] struct covers the raw HTTP surface: logging in, listing
//! places, fetching a place with its reviews, and creating places and
//! reviews. The [`pages`] module builds the front-end page flows on top of
//! it (listing with a price filter, place details with star-rated reviews).
//!
//! ```no_run
//! use hbnb_client::HbnbApi;
//!
//! # async fn run() -> Result<(), hbnb_client::Error> {
//! let api = HbnbApi::builder()
//!     .hostname("http://localhost:5000")
//!     .build();
//!
//! api.login("bob@example.com", "hunter2").await?;
//!
//! for place in api.get_places().await? {
//!     println!("{}: ${}/night", place.title, place.price);
//! }
//! # Ok(())
//! # }
//! ```

mod error;
mod helpers;

pub mod api;
pub mod pages;
pub mod request;
pub mod response;
pub mod session;
pub mod types;

pub use api::{HbnbApi, HbnbApiBuilder};
pub use error::Error;
pub use request::{NewPlace, NewReview};
pub use response::{Place, Review};
pub use session::Session;
