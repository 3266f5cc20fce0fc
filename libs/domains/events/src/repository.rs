use async_trait::async_trait;
use uuid::Uuid;

use crate::error::EventResult;
use crate::models::Event;

/// Repository trait for Event persistence
///
/// Implementations can use different storage backends. The service layer
/// only depends on this trait, so storage failures surface to callers
/// unchanged.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Insert or replace an event keyed by its id
    async fn save(&self, event: Event) -> EventResult<Event>;

    /// Look up an event by id
    async fn find_by_id(&self, id: Uuid) -> EventResult<Option<Event>>;

    /// All events in store-defined order
    async fn find_all(&self) -> EventResult<Vec<Event>>;

    /// Check whether an event exists
    async fn exists_by_id(&self, id: Uuid) -> EventResult<bool>;

    /// Remove an event by id
    async fn delete_by_id(&self, id: Uuid) -> EventResult<()>;
}
