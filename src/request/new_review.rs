use crate::types::{PlaceId, Rating};
use serde::Serialize;

/// A new review to submit for a place.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewReview {
    /// The review text.
    pub text: String,
    /// The star rating, 1 through 5.
    pub rating: Rating,
    /// The ID of the place being reviewed.
    pub place_id: PlaceId,
}

impl NewReview {
    pub fn new<T, P>(place_id: P, text: T, rating: Rating) -> Self
    where
        T: Into<String>,
        P: Into<PlaceId>,
    {
        Self {
            text: text.into(),
            rating,
            place_id: place_id.into(),
        }
    }

    /// Whether the review text is empty after trimming. Empty reviews are
    /// rejected before any request is made.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_text_is_empty() {
        let review = NewReview::new("5f7c", "  \n ", 4);

        assert!(review.is_empty());
    }

    #[test]
    fn serializes_place_id() {
        let review = NewReview::new("5f7c", "Lovely stay.", 4);
        let json = serde_json::to_value(&review).unwrap();

        assert_eq!(json["place_id"], "5f7c");
        assert_eq!(json["rating"], 4);
    }
}
