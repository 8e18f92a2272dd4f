//! Database connection management

use mongodb::{Client, Database, bson::doc};

use crate::config::DatabaseConfig;

/// Open a client against the configured deployment and select the
/// problem-bank database. The driver connects lazily; failures surface on
/// first use, so callers should follow up with [`test_connection`].
pub async fn connect(config: &DatabaseConfig) -> Result<Database, mongodb::error::Error> {
    let client = Client::with_uri_str(&config.url).await?;
    Ok(client.database(&config.database))
}

/// Test database connection
pub async fn test_connection(db: &Database) -> Result<(), mongodb::error::Error> {
    db.run_command(doc! { "ping": 1 }, None).await?;
    Ok(())
}
