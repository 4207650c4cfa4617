use serde::Serialize;

/// A new place listing to submit. Numeric fields are passed through as
/// given; the server is responsible for range checks.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewPlace {
    /// The title of the listing.
    pub title: String,
    /// The description of the listing.
    pub description: String,
    /// The price per night.
    pub price: f64,
    /// The latitude of the place.
    pub latitude: f64,
    /// The longitude of the place.
    pub longitude: f64,
}

impl NewPlace {
    /// Creates a builder for a new place with the given title.
    pub fn builder<T>(title: T) -> NewPlaceBuilder
    where
        T: Into<String>,
    {
        NewPlaceBuilder::new(title)
    }
}

/// Builder for constructing a [`NewPlace`].
#[derive(Debug, Clone)]
pub struct NewPlaceBuilder {
    title: String,
    description: String,
    price: f64,
    latitude: f64,
    longitude: f64,
}

impl NewPlaceBuilder {
    /// Creates a new [`NewPlaceBuilder`].
    pub fn new<T>(title: T) -> Self
    where
        T: Into<String>,
    {
        Self {
            title: title.into(),
            description: String::new(),
            price: 0.0,
            latitude: 0.0,
            longitude: 0.0,
        }
    }

    /// The description of the listing.
    pub fn description<T>(mut self, description: T) -> Self
    where
        T: Into<String>,
    {
        self.description = description.into();
        self
    }

    /// The price per night.
    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// The coordinates of the place.
    pub fn location(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    /// Builds the [`NewPlace`].
    pub fn build(self) -> NewPlace {
        NewPlace {
            title: self.title,
            description: self.description,
            price: self.price,
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}
