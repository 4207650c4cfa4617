use crate::types::{PlaceId, UserId};
use serde::{Serialize, Deserialize};

/// A rentable property.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Place {
    /// The ID of the place.
    pub id: PlaceId,
    /// The title of the listing.
    pub title: String,
    /// The description of the listing. Often missing or empty in list
    /// responses.
    #[serde(default)]
    pub description: Option<String>,
    /// The price per night.
    pub price: f64,
    /// The latitude of the place.
    pub latitude: f64,
    /// The longitude of the place.
    pub longitude: f64,
    /// The user hosting the place. Not included in list responses.
    #[serde(default)]
    pub owner: Option<Owner>,
    /// Amenities offered by the place.
    #[serde(default)]
    pub amenities: Vec<Amenity>,
}

impl Place {
    /// The host's display name, or `"Unknown"` when the owner is absent.
    pub fn host_name(&self) -> String {
        match &self.owner {
            Some(owner) => owner.full_name(),
            None => String::from("Unknown"),
        }
    }

    /// The description, or `"N/A"` when absent or empty.
    pub fn description_text(&self) -> &str {
        match self.description.as_deref() {
            Some(description) if !description.is_empty() => description,
            _ => "N/A",
        }
    }

    /// Amenity names joined with `", "`, or `"None"` when the place has no
    /// amenities.
    pub fn amenity_names(&self) -> String {
        if self.amenities.is_empty() {
            return String::from("None");
        }

        self.amenities.iter()
            .map(|amenity| amenity.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// The user hosting a place.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Owner {
    /// The ID of the user.
    #[serde(default)]
    pub id: Option<UserId>,
    /// The user's first name.
    pub first_name: String,
    /// The user's last name.
    pub last_name: String,
}

impl Owner {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// An amenity offered by a place.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Amenity {
    /// The name of the amenity.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_place() -> Place {
        serde_json::from_str(r#"{
            "id": "5f7c",
            "title": "Seaside cabin",
            "description": "A cabin by the sea.",
            "price": 80.0,
            "latitude": 43.6,
            "longitude": -1.4,
            "owner": {"first_name": "Ann", "last_name": "Lee"},
            "amenities": [{"name": "WiFi"}, {"name": "Sauna"}]
        }"#).unwrap()
    }

    #[test]
    fn parses_full_place() {
        let place = sample_place();

        assert_eq!(place.host_name(), "Ann Lee");
        assert_eq!(place.description_text(), "A cabin by the sea.");
        assert_eq!(place.amenity_names(), "WiFi, Sauna");
    }

    #[test]
    fn parses_list_entry_without_optional_fields() {
        // list responses carry only the card fields
        let place: Place = serde_json::from_str(r#"{
            "id": "5f7c",
            "title": "Seaside cabin",
            "price": 80.0,
            "latitude": 43.6,
            "longitude": -1.4
        }"#).unwrap();

        assert_eq!(place.host_name(), "Unknown");
        assert_eq!(place.description_text(), "N/A");
        assert_eq!(place.amenity_names(), "None");
    }

    #[test]
    fn empty_description_is_not_available() {
        let mut place = sample_place();

        place.description = Some(String::new());

        assert_eq!(place.description_text(), "N/A");
    }

    #[test]
    fn empty_amenities_are_none() {
        let mut place = sample_place();

        place.amenities.clear();

        assert_eq!(place.amenity_names(), "None");
    }
}
