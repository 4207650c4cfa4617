use hbnb_client::{HbnbApi, NewReview};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let place_id = std::env::var("HBNB_PLACE_ID").expect("HBNB_PLACE_ID missing");
    let api = HbnbApi::builder()
        .hostname(std::env::var("HBNB_HOST").unwrap_or_else(|_| String::from("http://localhost:5000")))
        .access_token(std::env::var("HBNB_TOKEN").expect("HBNB_TOKEN missing"))
        .build();
    let review = NewReview::new(place_id, "Lovely stay.", 5);
    let submitted = api.create_review(&review).await?;

    println!("Review submitted: {}", submitted.stars());
    Ok(())
}
