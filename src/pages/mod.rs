//! Page-level flows mirroring the front end: the listing page with its
//! client-side price filter, and the place detail page with its reviews
//! and review form.

mod detail;
mod listing;

pub use detail::{place_id_from_url, DetailPage};
pub use listing::{ListingPage, PlaceCard, PriceFilter};
