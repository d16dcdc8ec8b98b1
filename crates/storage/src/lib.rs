pub mod dto;
pub mod error;
pub mod models;
pub mod repository;
pub mod schema;

use bson::doc;
use mongodb::error::ErrorKind;

use error::Result;
use repository::exercise::COLLECTION;

/// Handle to the exercise database.
///
/// Opened once at startup, shared across requests through the router state,
/// and closed explicitly via [`Database::shutdown`] when the process exits.
#[derive(Clone)]
pub struct Database {
    client: mongodb::Client,
    database: mongodb::Database,
}

impl Database {
    pub async fn new(url: &str, database: &str) -> Result<Self> {
        let client = mongodb::Client::with_uri_str(url).await?;
        let database = client.database(database);

        Ok(Self { client, database })
    }

    pub fn handle(&self) -> &mongodb::Database {
        &self.database
    }

    /// Round-trips a `ping` command to surface connection state at startup.
    pub async fn ping(&self) -> Result<()> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    /// Install the collection-level validation schema, creating the
    /// collection if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<()> {
        let created = self
            .database
            .create_collection(COLLECTION)
            .validator(schema::validation_schema())
            .await;

        match created {
            Ok(()) => Ok(()),
            // NamespaceExists: refresh the validator on the existing collection.
            Err(e) if matches!(&*e.kind, ErrorKind::Command(c) if c.code == 48) => {
                self.database
                    .run_command(doc! {
                        "collMod": COLLECTION,
                        "validator": schema::validation_schema(),
                    })
                    .await?;
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn shutdown(self) {
        self.client.shutdown().await;
    }
}
