use crate::api::HbnbApi;
use crate::error::Error;
use crate::request::NewReview;
use crate::response::{Place, Review};
use crate::types::{PlaceId, Rating};
use url::Url;

/// Reads the place ID from a page URL's query string, e.g.
/// `http://localhost:5000/place.html?id=5f7c`.
pub fn place_id_from_url(url: &Url) -> Option<String> {
    url.query_pairs()
        .find(|(key, _value)| key == "id")
        .map(|(_key, value)| value.into_owned())
}

/// The place detail page: the place's details alongside its reviews.
///
/// The details and reviews fetches fail independently; either block can
/// show a failure message while the other still displays.
#[derive(Debug)]
pub struct DetailPage {
    /// The ID of the place being shown.
    pub place_id: PlaceId,
    /// The place's details. `None` when the details fetch failed.
    pub place: Option<Place>,
    /// The error from the details fetch, if it failed. The details block
    /// shows a failure message instead.
    pub details_error: Option<Error>,
    /// The reviews for the place. Empty when the reviews fetch failed.
    pub reviews: Vec<Review>,
    /// The error from the reviews fetch, if it failed. The reviews block
    /// shows a failure message instead.
    pub reviews_error: Option<Error>,
    /// Whether the add-review form should be shown. True only when logged
    /// in.
    pub can_review: bool,
}

impl DetailPage {
    /// Loads the page for a URL, reading the place ID from its query
    /// string. Fails with [`Error::MissingPlaceId`] when the URL has none.
    pub async fn load(api: &HbnbApi, url: &Url) -> Result<Self, Error> {
        let place_id = place_id_from_url(url).ok_or(Error::MissingPlaceId)?;

        Ok(Self::load_by_id(api, &place_id).await)
    }

    /// Loads the page for a place ID. The details fetch uses the token when
    /// one is present (public access works without); the reviews fetch
    /// never needs one. Each fetch failure is kept on the page rather than
    /// failing the load.
    pub async fn load_by_id(api: &HbnbApi, place_id: &str) -> Self {
        let (place, details_error) = match api.get_place(place_id).await {
            Ok(place) => (Some(place), None),
            Err(error) => {
                log::error!("Error fetching place details: {error}");

                (None, Some(error))
            },
        };
        let (reviews, reviews_error) = match api.get_reviews(place_id).await {
            Ok(reviews) => (reviews, None),
            Err(error) => {
                log::error!("Error fetching reviews: {error}");

                (Vec::new(), Some(error))
            },
        };

        Self {
            place_id: place_id.to_string(),
            place,
            details_error,
            reviews,
            reviews_error,
            can_review: api.is_logged_in(),
        }
    }

    /// Submits a review for this place, then re-fetches the details block.
    /// The review list itself is not refreshed.
    pub async fn submit_review(
        &mut self,
        api: &HbnbApi,
        text: &str,
        rating: Rating,
    ) -> Result<Review, Error> {
        let review = NewReview::new(self.place_id.clone(), text, rating);
        let submitted = api.create_review(&review).await?;

        match api.get_place(&self.place_id).await {
            Ok(place) => {
                self.place = Some(place);
                self.details_error = None;
            },
            Err(error) => {
                log::error!("Error fetching place details: {error}");

                self.details_error = Some(error);
            },
        }

        Ok(submitted)
    }

    /// The details block as an HTML fragment, with the front end's
    /// fallbacks: host `"Unknown"`, description `"N/A"`, amenities
    /// `"None"`. A failed details fetch renders a failure message instead.
    pub fn details_html(&self) -> String {
        let place = match &self.place {
            Some(place) => place,
            None => return String::from("<p>Could not load place details.</p>"),
        };

        format!(
            "<div class=\"place-details\">\
            <h2>{title}</h2>\
            <p><strong>Host:</strong> {host}</p>\
            <p><strong>Price:</strong> ${price}/night</p>\
            <p><strong>Description:</strong> {description}</p>\
            <p><strong>Amenities:</strong> {amenities}</p>\
            <p><strong>Location:</strong> {latitude}, {longitude}</p>\
            </div>",
            title = place.title,
            host = place.host_name(),
            price = place.price,
            description = place.description_text(),
            amenities = place.amenity_names(),
            latitude = place.latitude,
            longitude = place.longitude,
        )
    }

    /// The reviews block as an HTML fragment. Ratings render as star
    /// glyphs.
    pub fn reviews_html(&self) -> String {
        if self.reviews_error.is_some() {
            return String::from("<p>Could not load reviews.</p>");
        }

        let items = self.reviews.iter()
            .map(|review| format!(
                "<li class=\"review-card\">\
                <p><strong>{user_name}:</strong></p>\
                <p>{text}</p>\
                <p><span class=\"rating-label\">Rating:</span><span class=\"stars\">{stars}</span></p>\
                </li>",
                user_name = review.user_name,
                text = review.text,
                stars = review.stars(),
            ))
            .collect::<Vec<_>>()
            .join("\n");

        format!("<ul id=\"review-list\">{items}</ul>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_page() -> DetailPage {
        DetailPage {
            place_id: String::from("5f7c"),
            place: Some(Place {
                id: String::from("5f7c"),
                title: String::from("Seaside cabin"),
                description: None,
                price: 80.0,
                latitude: 43.6,
                longitude: -1.4,
                owner: None,
                amenities: Vec::new(),
            }),
            details_error: None,
            reviews: vec![Review {
                id: None,
                user_name: String::from("Ann"),
                text: String::from("Lovely stay."),
                rating: 4,
            }],
            reviews_error: None,
            can_review: false,
        }
    }

    #[test]
    fn reads_place_id_from_url() {
        let url = Url::parse("http://localhost:5000/place.html?id=5f7c").unwrap();

        assert_eq!(place_id_from_url(&url), Some(String::from("5f7c")));
    }

    #[test]
    fn url_without_id_has_no_place_id() {
        let url = Url::parse("http://localhost:5000/place.html?place=5f7c").unwrap();

        assert_eq!(place_id_from_url(&url), None);
    }

    #[test]
    fn details_render_fallbacks() {
        let html = sample_page().details_html();

        assert!(html.contains("<strong>Host:</strong> Unknown"));
        assert!(html.contains("<strong>Description:</strong> N/A"));
        assert!(html.contains("<strong>Amenities:</strong> None"));
    }

    #[test]
    fn reviews_render_star_glyphs() {
        let html = sample_page().reviews_html();

        assert!(html.contains("★★★★☆"));
        assert!(html.contains("<strong>Ann:</strong>"));
    }

    #[test]
    fn failed_reviews_fetch_renders_message() {
        let mut page = sample_page();

        page.reviews_error = Some(Error::Http(reqwest::StatusCode::BAD_GATEWAY));

        assert_eq!(page.reviews_html(), "<p>Could not load reviews.</p>");
    }

    #[test]
    fn failed_details_fetch_renders_message() {
        let mut page = sample_page();

        page.place = None;
        page.details_error = Some(Error::Http(reqwest::StatusCode::BAD_GATEWAY));

        assert_eq!(page.details_html(), "<p>Could not load place details.</p>");
    }

    #[tokio::test]
    async fn fetch_failures_still_yield_a_page() {
        // the connection is refused; both blocks fail independently and
        // the page still loads
        let api = HbnbApi::builder()
            .hostname("http://localhost:1")
            .build();
        let page = DetailPage::load_by_id(&api, "5f7c").await;

        assert_eq!(page.place_id, "5f7c");
        assert!(page.place.is_none());
        assert!(page.details_error.is_some());
        assert!(page.reviews.is_empty());
        assert!(page.reviews_error.is_some());
        assert_eq!(page.details_html(), "<p>Could not load place details.</p>");
        assert_eq!(page.reviews_html(), "<p>Could not load reviews.</p>");
    }
}
