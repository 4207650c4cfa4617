use crate::types::{Rating, ReviewId};
use super::deserializers::option_number_or_string;
use serde::{Serialize, Deserialize};

/// A user-submitted review of a place.
#[derive(Debug, Serialize, Clone)]
#[serde(into = "RawReview")]
pub struct Review {
    /// The ID of the review. Not included in all responses.
    pub id: Option<ReviewId>,
    /// The display name of the reviewer.
    pub user_name: String,
    /// The review text.
    pub text: String,
    /// The star rating, 1 through 5. `0` when the response carried no
    /// usable rating.
    pub rating: Rating,
}

impl Review {
    /// The rating rendered as filled and empty star glyphs over five, e.g.
    /// `"★★★☆☆"` for a rating of 3. Ratings above 5 are clamped.
    pub fn stars(&self) -> String {
        let filled = usize::from(self.rating).min(5);

        format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
    }
}

/// The review shape as it appears on the wire. Some deployments use a
/// `stars` key in place of `rating`; [`Review`] folds the two together.
#[derive(Deserialize, Serialize, Debug)]
struct RawReview {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<ReviewId>,
    user_name: String,
    text: String,
    #[serde(default, deserialize_with = "option_number_or_string")]
    rating: Option<Rating>,
    #[serde(default, deserialize_with = "option_number_or_string", skip_serializing_if = "Option::is_none")]
    stars: Option<Rating>,
}

impl<'de> Deserialize<'de> for Review {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawReview::deserialize(deserializer)?;

        Ok(Self {
            id: raw.id,
            user_name: raw.user_name,
            text: raw.text,
            rating: raw.rating.or(raw.stars).unwrap_or(0),
        })
    }
}

impl From<Review> for RawReview {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            user_name: review.user_name,
            text: review.text,
            rating: Some(review.rating),
            stars: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_review_with_rating_key() {
        let review: Review = serde_json::from_str(r#"{
            "user_name": "Ann",
            "text": "Lovely stay.",
            "rating": 4
        }"#).unwrap();

        assert_eq!(review.rating, 4);
        assert_eq!(review.stars(), "★★★★☆");
    }

    #[test]
    fn falls_back_to_stars_key() {
        let review: Review = serde_json::from_str(r#"{
            "user_name": "Ann",
            "text": "Lovely stay.",
            "stars": 2
        }"#).unwrap();

        assert_eq!(review.rating, 2);
    }

    #[test]
    fn missing_rating_defaults_to_zero() {
        let review: Review = serde_json::from_str(r#"{
            "user_name": "Ann",
            "text": "Lovely stay."
        }"#).unwrap();

        assert_eq!(review.rating, 0);
        assert_eq!(review.stars(), "☆☆☆☆☆");
    }

    #[test]
    fn ratings_above_five_are_clamped() {
        let review = Review {
            id: None,
            user_name: String::from("Ann"),
            text: String::from("!!"),
            rating: 9,
        };

        assert_eq!(review.stars(), "★★★★★");
    }
}
