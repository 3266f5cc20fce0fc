//! In-memory implementation of EventRepository
//!
//! Backed by a `RwLock<Vec<Event>>` so insertion order is preserved.
//! Intended for tests and local development.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::EventResult;
use crate::models::Event;
use crate::repository::EventRepository;

#[derive(Debug, Default)]
pub struct InMemoryEventRepository {
    events: RwLock<Vec<Event>>,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with initial events, keeping their order
    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            events: RwLock::new(events),
        }
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn save(&self, event: Event) -> EventResult<Event> {
        let mut events = self.events.write().await;

        match events.iter_mut().find(|e| e.id == event.id) {
            Some(existing) => *existing = event.clone(),
            None => events.push(event.clone()),
        }

        Ok(event)
    }

    async fn find_by_id(&self, id: Uuid) -> EventResult<Option<Event>> {
        let events = self.events.read().await;
        Ok(events.iter().find(|e| e.id == id).cloned())
    }

    async fn find_all(&self) -> EventResult<Vec<Event>> {
        let events = self.events.read().await;
        Ok(events.clone())
    }

    async fn exists_by_id(&self, id: Uuid) -> EventResult<bool> {
        let events = self.events.read().await;
        Ok(events.iter().any(|e| e.id == id))
    }

    async fn delete_by_id(&self, id: Uuid) -> EventResult<()> {
        let mut events = self.events.write().await;
        events.retain(|e| e.id != id);
        Ok(())
    }
}
