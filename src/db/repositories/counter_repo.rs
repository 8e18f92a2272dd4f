//! Pid counter repository

use mongodb::{
    Database,
    bson::doc,
    options::{FindOneAndUpdateOptions, ReturnDocument},
};

use crate::{constants::COUNTER_COLLECTION, error::AppResult, models::Counter};

/// Repository for the singleton pid counter document
pub struct CounterRepository;

impl CounterRepository {
    /// Insert the counter document seeded to 0 when the collection is empty
    pub async fn ensure_seeded(db: &Database) -> AppResult<()> {
        let counters = db.collection::<Counter>(COUNTER_COLLECTION);
        if counters.find_one(doc! {}, None).await?.is_none() {
            counters.insert_one(Counter { pro_id: 0 }, None).await?;
        }
        Ok(())
    }

    /// Allocate the next pid.
    ///
    /// A single server-side `$inc` reserves the value, so concurrent creates
    /// always receive distinct ids. The pre-increment value is the allocated
    /// pid; if the upsert ever races the startup seeding and creates the
    /// document itself, the first pid is 0.
    pub async fn allocate(db: &Database) -> AppResult<i64> {
        let counters = db.collection::<Counter>(COUNTER_COLLECTION);
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::Before)
            .build();

        let previous = counters
            .find_one_and_update(doc! {}, doc! { "$inc": { "pro_id": 1 } }, options)
            .await?;

        Ok(previous.map_or(0, |c| c.pro_id))
    }
}
