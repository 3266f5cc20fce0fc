//! MongoDB implementation of EventRepository

use async_trait::async_trait;
use database::mongodb::{Collection, Database};
use futures_util::TryStreamExt;
use mongodb::bson::{Bson, doc, to_bson};
use tracing::instrument;
use uuid::Uuid;

use crate::error::EventResult;
use crate::models::Event;
use crate::repository::EventRepository;

/// MongoDB implementation of the EventRepository
pub struct MongoEventRepository {
    collection: Collection<Event>,
}

impl MongoEventRepository {
    /// Create a repository over the default `events` collection
    ///
    /// # Example
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let db = client.database("events");
    /// let repo = MongoEventRepository::new(db);
    /// ```
    pub fn new(db: Database) -> Self {
        Self::with_collection(db, "events")
    }

    /// Create a repository with a custom collection name
    pub fn with_collection(db: Database, collection_name: &str) -> Self {
        let collection = db.collection::<Event>(collection_name);
        Self { collection }
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<Event> {
        &self.collection
    }

    fn id_filter(id: Uuid) -> mongodb::bson::Document {
        doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) }
    }
}

#[async_trait]
impl EventRepository for MongoEventRepository {
    #[instrument(skip(self, event), fields(event_id = %event.id))]
    async fn save(&self, event: Event) -> EventResult<Event> {
        self.collection
            .replace_one(Self::id_filter(event.id), &event)
            .upsert(true)
            .await?;

        tracing::info!(event_id = %event.id, "Event saved");
        Ok(event)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> EventResult<Option<Event>> {
        let event = self.collection.find_one(Self::id_filter(id)).await?;
        Ok(event)
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> EventResult<Vec<Event>> {
        let cursor = self.collection.find(doc! {}).await?;
        let events: Vec<Event> = cursor.try_collect().await?;
        Ok(events)
    }

    #[instrument(skip(self))]
    async fn exists_by_id(&self, id: Uuid) -> EventResult<bool> {
        let count = self
            .collection
            .count_documents(Self::id_filter(id))
            .await?;
        Ok(count > 0)
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: Uuid) -> EventResult<()> {
        self.collection.delete_one(Self::id_filter(id)).await?;

        tracing::info!(event_id = %id, "Event deleted");
        Ok(())
    }
}
