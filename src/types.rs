//! Types for common values in API responses.

/// A UUID string uniquely identifying a place.
pub type PlaceId = String;
/// A UUID string uniquely identifying a review.
pub type ReviewId = String;
/// A UUID string uniquely identifying a user.
pub type UserId = String;
/// A star rating. Valid values are 1 through 5; `0` means no rating was
/// given.
pub type Rating = u8;

// Types internally used by the crate.
use reqwest_middleware::ClientWithMiddleware;

pub(crate) type HttpClient = ClientWithMiddleware;
