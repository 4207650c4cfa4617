//! Models for requests.

mod new_place;
mod new_review;

pub use new_place::{NewPlace, NewPlaceBuilder};
pub use new_review::NewReview;
