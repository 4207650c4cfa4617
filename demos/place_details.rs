use hbnb_client::HbnbApi;
use hbnb_client::pages::DetailPage;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let place_id = std::env::var("HBNB_PLACE_ID").expect("HBNB_PLACE_ID missing");
    // no token needed; place details are public
    let api = HbnbApi::builder()
        .hostname(std::env::var("HBNB_HOST").unwrap_or_else(|_| String::from("http://localhost:5000")))
        .build();
    let page = DetailPage::load_by_id(&api, &place_id).await;

    match &page.place {
        Some(place) => {
            println!("{} hosted by {}", place.title, place.host_name());
            println!("Amenities: {}", place.amenity_names());
        },
        None => println!("Could not load place details."),
    }

    for review in &page.reviews {
        println!("{} {}: {}", review.stars(), review.user_name, review.text);
    }

    Ok(())
}
