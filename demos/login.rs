use hbnb_client::HbnbApi;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let hostname = std::env::var("HBNB_HOST")
        .unwrap_or_else(|_| String::from("http://localhost:5000"));
    let email = std::env::var("HBNB_EMAIL").expect("HBNB_EMAIL missing");
    let password = std::env::var("HBNB_PASSWORD").expect("HBNB_PASSWORD missing");
    let api = HbnbApi::builder()
        .hostname(hostname)
        .build();
    let response = api.login(&email, &password).await?;

    println!("Logged in; token is {} characters long", response.access_token.len());
    Ok(())
}
