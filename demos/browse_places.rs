use hbnb_client::HbnbApi;
use hbnb_client::pages::{ListingPage, PriceFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let api = HbnbApi::builder()
        .hostname(std::env::var("HBNB_HOST").unwrap_or_else(|_| String::from("http://localhost:5000")))
        .access_token(std::env::var("HBNB_TOKEN").expect("HBNB_TOKEN missing"))
        .build();
    let mut page = ListingPage::load(&api).await?;

    println!("{} places", page.cards().len());

    // show only the cheap ones
    page.apply_filter(PriceFilter::UpTo(50.0));

    for card in page.visible_cards() {
        println!("{}: ${}/night", card.place.title, card.place.price);
    }

    Ok(())
}
