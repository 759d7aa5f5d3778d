use crate::config::Config;
use crate::models::{movie::Movie, user::User};
use anyhow::Result;
use mongodb::bson::doc;
use mongodb::options::IndexOptions;
use mongodb::{Client, Database, IndexModel};

pub const USERS: &str = "users";
pub const MOVIES: &str = "movies";

pub async fn connect(config: &Config) -> Result<Database> {
    // 1. Connect
    // The driver connects lazily, so this mostly just parses the URI.
    let client = Client::with_uri_str(&config.database_url).await?;
    let db = client.database(&config.database_name);

    // 2. Define unique indexes
    // Usernames and movie titles are unique by contract. Letting the store
    // enforce this means concurrent inserts can't race past an app-level check;
    // violations come back as duplicate-key errors (E11000).
    db.collection::<User>(USERS)
        .create_index(
            IndexModel::builder()
                .keys(doc! { "username": 1 })
                .options(IndexOptions::builder().unique(true).build())
                .build(),
        )
        .await?;

    db.collection::<Movie>(MOVIES)
        .create_index(
            IndexModel::builder()
                .keys(doc! { "title": 1 })
                .options(IndexOptions::builder().unique(true).build())
                .build(),
        )
        .await?;

    Ok(db)
}

/// Whether a driver error is a unique-index violation (Mongo code 11000).
pub fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    use mongodb::error::{ErrorKind, WriteFailure};
    match *err.kind {
        ErrorKind::Write(WriteFailure::WriteError(ref we)) => we.code == 11000,
        ErrorKind::Command(ref ce) => ce.code == 11000,
        _ => false,
    }
}
