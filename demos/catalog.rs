//! Demo catalog: opens the store from env, seeds the well-known dummy pet
//! through the public insert path, then lists the table. The catalog screen
//! minus the screen.

use pets_provider::{contract, Gender, PetProvider, PetStore, PetValues};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("pets_provider=debug")),
        )
        .init();

    let db_path = std::env::var("PETS_DB").unwrap_or_else(|_| "pets.db".into());
    let provider = PetProvider::new(PetStore::open(&db_path).await?);

    let values = PetValues::new()
        .name("Toto")
        .breed("Terrier")
        .gender(Gender::Male.as_i64())
        .weight(7);
    let item_uri = provider.insert(&contract::pets_uri(), &values).await?;
    println!("inserted {item_uri}");

    let rows = provider
        .query(&contract::pets_uri(), None, None, &[], Some("name ASC"))
        .await?;
    for row in rows {
        println!("{row}");
    }
    Ok(())
}
