//! Models for responses.

mod auth;
mod place;
mod review;

pub mod deserializers;

pub use auth::LoginResponse;
pub use place::{Amenity, Owner, Place};
pub use review::Review;
