use serde::{Deserialize, de::{self, Deserializer}};

/// Deserializes an optional rating which may appear as either a number or a
/// numeric string.
pub fn option_number_or_string<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(u8),
        String(String),
    }

    match Option::<NumberOrString>::deserialize(deserializer)? {
        Some(NumberOrString::Number(rating)) => Ok(Some(rating)),
        Some(NumberOrString::String(rating)) => rating.parse::<u8>()
            .map(Some)
            .map_err(de::Error::custom),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Rated {
        #[serde(default, deserialize_with = "option_number_or_string")]
        rating: Option<u8>,
    }

    #[test]
    fn parses_numeric_rating() {
        let rated: Rated = serde_json::from_str(r#"{"rating": 4}"#).unwrap();

        assert_eq!(rated.rating, Some(4));
    }

    #[test]
    fn parses_string_rating() {
        let rated: Rated = serde_json::from_str(r#"{"rating": "4"}"#).unwrap();

        assert_eq!(rated.rating, Some(4));
    }

    #[test]
    fn missing_rating_is_none() {
        let rated: Rated = serde_json::from_str(r#"{}"#).unwrap();

        assert_eq!(rated.rating, None);
    }
}
