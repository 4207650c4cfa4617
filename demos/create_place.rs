use hbnb_client::{HbnbApi, NewPlace};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let api = HbnbApi::builder()
        .hostname(std::env::var("HBNB_HOST").unwrap_or_else(|_| String::from("http://localhost:5000")))
        .access_token(std::env::var("HBNB_TOKEN").expect("HBNB_TOKEN missing"))
        .build();
    let place = NewPlace::builder("Seaside cabin")
        .description("A cabin by the sea.")
        .price(80.0)
        .location(43.6, -1.4)
        .build();
    let created = api.create_place(&place).await?;

    println!("Created place {}", created.id);
    Ok(())
}
