// src/storage/mongo.rs

//! MongoDB storage backend.

use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::{Client, Collection};

use crate::config::Config;
use crate::error::Result;
use crate::models::Pulse;
use crate::storage::{PulseStore, StoreFailure, StoreOutcome};

/// Pulse store backed by a MongoDB collection.
pub struct MongoStore {
    collection: Collection<Pulse>,
}

impl MongoStore {
    /// Connect to the configured database and collection.
    pub async fn connect(config: &Config) -> Result<Self> {
        let client = Client::with_uri_str(&config.mongo_uri).await?;
        let collection = client
            .database(&config.db_name)
            .collection(&config.collection_name);
        Ok(Self { collection })
    }
}

#[async_trait]
impl PulseStore for MongoStore {
    async fn upsert_batch(&self, pulses: &[Pulse]) -> StoreOutcome {
        let mut outcome = StoreOutcome::default();

        for pulse in pulses {
            let filter = doc! { "id": &pulse.id };
            match self.collection.replace_one(filter, pulse).upsert(true).await {
                Ok(_) => outcome.upserted.push(pulse.id.clone()),
                Err(error) => outcome.failures.push(StoreFailure {
                    id: pulse.id.clone(),
                    reason: error.to_string(),
                }),
            }
        }

        outcome
    }
}
