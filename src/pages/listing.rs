use crate::api::HbnbApi;
use crate::error::Error;
use crate::response::Place;
use std::fmt;
use std::num::ParseFloatError;
use std::str::FromStr;

/// A maximum-price threshold for the listing page filter.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PriceFilter {
    /// Show every place.
    #[default]
    All,
    /// Show places priced at or below this amount.
    UpTo(f64),
}

impl PriceFilter {
    /// The fixed options offered by the filter control: 10, 50, 100, All.
    pub fn options() -> [PriceFilter; 4] {
        [
            PriceFilter::UpTo(10.0),
            PriceFilter::UpTo(50.0),
            PriceFilter::UpTo(100.0),
            PriceFilter::All,
        ]
    }

    /// Whether a place at the given price passes the filter.
    pub fn matches(&self, price: f64) -> bool {
        match self {
            PriceFilter::All => true,
            PriceFilter::UpTo(max_price) => price <= *max_price,
        }
    }
}

impl fmt::Display for PriceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceFilter::All => write!(f, "All"),
            PriceFilter::UpTo(max_price) => write!(f, "{max_price}"),
        }
    }
}

impl FromStr for PriceFilter {
    type Err = ParseFloatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "All" {
            return Ok(PriceFilter::All);
        }

        Ok(PriceFilter::UpTo(s.parse::<f64>()?))
    }
}

/// One place rendered as a card on the listing page.
#[derive(Debug, Clone)]
pub struct PlaceCard {
    /// The place this card presents.
    pub place: Place,
    visible: bool,
}

impl PlaceCard {
    fn new(place: Place) -> Self {
        Self {
            place,
            visible: true,
        }
    }

    /// The price attribute the filter compares against.
    pub fn price(&self) -> f64 {
        self.place.price
    }

    /// Whether the card passes the currently applied filter.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The card as an HTML fragment. The price is exposed as a `data-price`
    /// attribute so the filter works without refetching.
    pub fn to_html(&self) -> String {
        let style = if self.visible { "" } else { r#" style="display: none""# };

        format!(
            "<article class=\"place-card\" data-price=\"{price}\"{style}>\
            <h3>{title}</h3>\
            <p><strong>Price:</strong> ${price}/night</p>\
            <p><strong>Location:</strong> ({latitude}, {longitude})</p>\
            <button class=\"details-button\" onclick=\"location.href='place.html?id={id}'\">View Details</button>\
            </article>",
            price = self.place.price,
            title = self.place.title,
            latitude = self.place.latitude,
            longitude = self.place.longitude,
            id = self.place.id,
        )
    }
}

/// The listing page: one card per place, filterable by price without
/// refetching.
#[derive(Debug, Clone, Default)]
pub struct ListingPage {
    cards: Vec<PlaceCard>,
    filter: PriceFilter,
}

impl ListingPage {
    /// Creates a listing page from a places response. Every card starts
    /// visible.
    pub fn new(places: Vec<Place>) -> Self {
        Self {
            cards: places.into_iter()
                .map(PlaceCard::new)
                .collect(),
            filter: PriceFilter::All,
        }
    }

    /// Loads the listing page. Places are fetched only when logged in;
    /// without a token this yields an empty page and no request is made.
    pub async fn load(api: &HbnbApi) -> Result<Self, Error> {
        if !api.is_logged_in() {
            log::debug!("No token found; not fetching places");

            return Ok(Self::default());
        }

        let places = api.get_places().await?;

        log::debug!("Loaded {} places", places.len());

        Ok(Self::new(places))
    }

    /// The currently applied filter.
    pub fn filter(&self) -> PriceFilter {
        self.filter
    }

    /// All cards, visible or not.
    pub fn cards(&self) -> &[PlaceCard] {
        &self.cards
    }

    /// The cards passing the currently applied filter.
    pub fn visible_cards(&self) -> impl Iterator<Item = &PlaceCard> {
        self.cards.iter()
            .filter(|card| card.visible)
    }

    /// Applies a price filter, toggling the visibility of the
    /// already-loaded cards. Idempotent for a given filter; applying
    /// [`PriceFilter::All`] restores every card.
    pub fn apply_filter(&mut self, filter: PriceFilter) {
        self.filter = filter;

        for card in &mut self.cards {
            card.visible = filter.matches(card.price());
        }
    }

    /// The page as an HTML fragment. Filtered-out cards are rendered
    /// hidden, matching how the filter toggles display styles in place.
    pub fn to_html(&self) -> String {
        self.cards.iter()
            .map(|card| card.to_html())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn places(prices: &[f64]) -> Vec<Place> {
        prices.iter()
            .enumerate()
            .map(|(i, &price)| Place {
                id: format!("place-{i}"),
                title: format!("Place {i}"),
                description: None,
                price,
                latitude: 0.0,
                longitude: 0.0,
                owner: None,
                amenities: Vec::new(),
            })
            .collect()
    }

    #[test]
    fn one_card_per_place() {
        let page = ListingPage::new(places(&[10.0, 55.0, 120.0]));

        assert_eq!(page.cards().len(), 3);
        assert_eq!(page.visible_cards().count(), 3);
    }

    #[test]
    fn cards_expose_price_attribute() {
        let page = ListingPage::new(places(&[55.0]));
        let html = page.to_html();

        assert!(html.contains(r#"data-price="55""#));
    }

    #[test]
    fn filter_50_shows_only_cheaper_places() {
        let mut page = ListingPage::new(places(&[10.0, 50.0, 55.0, 120.0]));

        page.apply_filter(PriceFilter::UpTo(50.0));

        let visible = page.visible_cards()
            .map(|card| card.price())
            .collect::<Vec<_>>();

        assert_eq!(visible, vec![10.0, 50.0]);
    }

    #[test]
    fn all_restores_every_card() {
        let mut page = ListingPage::new(places(&[10.0, 120.0]));

        page.apply_filter(PriceFilter::UpTo(10.0));
        page.apply_filter(PriceFilter::All);

        assert_eq!(page.visible_cards().count(), 2);
    }

    #[test]
    fn toggling_filters_is_idempotent() {
        let mut page = ListingPage::new(places(&[10.0, 55.0, 120.0]));

        for _ in 0..3 {
            page.apply_filter(PriceFilter::UpTo(50.0));
            assert_eq!(page.visible_cards().count(), 1);

            page.apply_filter(PriceFilter::All);
            assert_eq!(page.visible_cards().count(), 3);
        }
    }

    #[test]
    fn hidden_cards_render_display_none() {
        let mut page = ListingPage::new(places(&[120.0]));

        page.apply_filter(PriceFilter::UpTo(10.0));

        assert!(page.to_html().contains("display: none"));
    }

    #[test]
    fn parses_filter_options() {
        assert_eq!("All".parse::<PriceFilter>().unwrap(), PriceFilter::All);
        assert_eq!("50".parse::<PriceFilter>().unwrap(), PriceFilter::UpTo(50.0));
        assert!("cheap".parse::<PriceFilter>().is_err());
    }

    #[test]
    fn filter_options_display_as_control_values() {
        let values = PriceFilter::options()
            .iter()
            .map(|option| option.to_string())
            .collect::<Vec<_>>();

        assert_eq!(values, vec!["10", "50", "100", "All"]);
    }
}
