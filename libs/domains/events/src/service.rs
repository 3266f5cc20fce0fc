//! Event Service - Business logic layer

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{EventError, EventResult};
use crate::models::{CreateEvent, Event, PatchEvent, UpdateEvent};
use crate::query;
use crate::repository::EventRepository;

/// Event service providing business logic operations
///
/// The service owns id assignment, existence checks, and the filter
/// endpoints. Storage failures propagate to the caller unchanged.
pub struct EventService<R: EventRepository> {
    repository: Arc<R>,
}

impl<R: EventRepository> EventService<R> {
    /// Create a new EventService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new event, generating an id when the payload has none
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CreateEvent) -> EventResult<Event> {
        self.repository.save(Event::new(input)).await
    }

    /// Get an event by id
    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> EventResult<Event> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(EventError::NotFound { id })
    }

    /// List all events in store order
    #[instrument(skip(self))]
    pub async fn list(&self) -> EventResult<Vec<Event>> {
        self.repository.find_all().await
    }

    /// Replace an event wholesale, keeping the stored id
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: Uuid, input: UpdateEvent) -> EventResult<Event> {
        if !self.repository.exists_by_id(id).await? {
            return Err(EventError::NotFound { id });
        }

        self.repository.save(input.into_event(id)).await
    }

    /// Merge a partial update into an existing event
    #[instrument(skip(self, patch))]
    pub async fn patch(&self, id: Uuid, patch: PatchEvent) -> EventResult<Event> {
        let mut event = self.get(id).await?;
        event.apply_patch(patch);
        self.repository.save(event).await
    }

    /// Delete an event
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> EventResult<()> {
        if !self.repository.exists_by_id(id).await? {
            return Err(EventError::NotFound { id });
        }

        self.repository.delete_by_id(id).await
    }

    /// Events carrying the given tag
    #[instrument(skip(self))]
    pub async fn events_by_tag(&self, tag: Option<&str>) -> EventResult<Vec<Event>> {
        let events = self.repository.find_all().await?;
        Ok(query::by_tag(&events, tag))
    }

    /// Events scheduled inside the inclusive date range
    #[instrument(skip(self))]
    pub async fn events_by_date_range(
        &self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> EventResult<Vec<Event>> {
        let events = self.repository.find_all().await?;
        Ok(query::by_date_range(&events, start, end))
    }

    /// Events priced inside the inclusive range
    #[instrument(skip(self))]
    pub async fn events_by_price_range(
        &self,
        min: Option<Decimal>,
        max: Option<Decimal>,
    ) -> EventResult<Vec<Event>> {
        let events = self.repository.find_all().await?;
        Ok(query::by_price_range(&events, min, max))
    }

    /// Events scheduled strictly after `now`
    #[instrument(skip(self))]
    pub async fn upcoming_events(&self, now: DateTime<Utc>) -> EventResult<Vec<Event>> {
        let events = self.repository.find_all().await?;
        Ok(query::upcoming(&events, now))
    }

    /// Set the ticket price of an existing event
    ///
    /// The price is validated before the event is looked up, so a bad price
    /// on a missing id still reports the argument error.
    #[instrument(skip(self))]
    pub async fn update_ticket_price(
        &self,
        id: Uuid,
        price: Option<Decimal>,
    ) -> EventResult<Event> {
        let price = match price {
            Some(p) if p >= Decimal::ZERO => p,
            Some(_) => {
                return Err(EventError::invalid_argument(
                    "ticket price must be non-negative",
                ));
            }
            None => return Err(EventError::invalid_argument("ticket price is required")),
        };

        let mut event = self.get(id).await?;
        event.ticket_price = Some(price);
        self.repository.save(event).await
    }
}

impl<R: EventRepository> Clone for EventService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockEventRepository;
    use mockall::predicate::eq;

    fn event(id: Uuid) -> Event {
        Event {
            id,
            event_name: Some("Concert".to_string()),
            tags: vec!["music".to_string()],
            ticket_price: Some(Decimal::from(40)),
            event_date_time: None,
            duration_minutes: 90,
        }
    }

    #[tokio::test]
    async fn test_create_generates_id() {
        let mut repo = MockEventRepository::new();
        repo.expect_save()
            .withf(|e| !e.id.is_nil())
            .returning(|e| Ok(e));

        let service = EventService::new(repo);
        let created = service.create(CreateEvent::default()).await.unwrap();
        assert!(!created.id.is_nil());
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let id = Uuid::now_v7();
        let mut repo = MockEventRepository::new();
        repo.expect_find_by_id()
            .with(eq(id))
            .returning(|_| Ok(None));

        let service = EventService::new(repo);
        let err = service.get(id).await.unwrap_err();
        assert!(matches!(err, EventError::NotFound { id: missing } if missing == id));
    }

    #[tokio::test]
    async fn test_update_missing_never_saves() {
        let id = Uuid::now_v7();
        let mut repo = MockEventRepository::new();
        repo.expect_exists_by_id()
            .with(eq(id))
            .returning(|_| Ok(false));
        repo.expect_save().never();

        let service = EventService::new(repo);
        let err = service.update(id, UpdateEvent::default()).await.unwrap_err();
        assert!(matches!(err, EventError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_forces_stored_id() {
        let id = Uuid::now_v7();
        let mut repo = MockEventRepository::new();
        repo.expect_exists_by_id().returning(|_| Ok(true));
        repo.expect_save()
            .withf(move |e| e.id == id)
            .returning(|e| Ok(e));

        let service = EventService::new(repo);
        let updated = service.update(id, UpdateEvent::default()).await.unwrap();
        assert_eq!(updated.id, id);
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let id = Uuid::now_v7();
        let mut repo = MockEventRepository::new();
        repo.expect_exists_by_id().returning(|_| Ok(false));
        repo.expect_delete_by_id().never();

        let service = EventService::new(repo);
        let err = service.delete(id).await.unwrap_err();
        assert!(matches!(err, EventError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_ticket_price_rejects_missing_price_before_lookup() {
        let mut repo = MockEventRepository::new();
        repo.expect_find_by_id().never();

        let service = EventService::new(repo);
        let err = service
            .update_ticket_price(Uuid::now_v7(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, EventError::InvalidArgument { .. }));
    }

    #[tokio::test]
    async fn test_update_ticket_price_rejects_negative() {
        let mut repo = MockEventRepository::new();
        repo.expect_find_by_id().never();

        let service = EventService::new(repo);
        let err = service
            .update_ticket_price(Uuid::now_v7(), Some(Decimal::from(-1)))
            .await
            .unwrap_err();
        assert!(matches!(err, EventError::InvalidArgument { .. }));
    }

    #[tokio::test]
    async fn test_update_ticket_price_sets_and_saves() {
        let id = Uuid::now_v7();
        let mut repo = MockEventRepository::new();
        repo.expect_find_by_id()
            .with(eq(id))
            .returning(move |_| Ok(Some(event(id))));
        repo.expect_save()
            .withf(|e| e.ticket_price == Some(Decimal::from(75)))
            .returning(|e| Ok(e));

        let service = EventService::new(repo);
        let updated = service
            .update_ticket_price(id, Some(Decimal::from(75)))
            .await
            .unwrap();
        assert_eq!(updated.ticket_price, Some(Decimal::from(75)));
    }

    #[tokio::test]
    async fn test_store_failures_propagate() {
        let mut repo = MockEventRepository::new();
        repo.expect_find_all().returning(|| {
            Err(EventError::Unspecified {
                message: "connection reset".to_string(),
            })
        });

        let service = EventService::new(repo);
        let err = service.list().await.unwrap_err();
        assert!(matches!(err, EventError::Unspecified { .. }));
    }

    #[tokio::test]
    async fn test_filters_delegate_to_find_all() {
        let id = Uuid::now_v7();
        let mut repo = MockEventRepository::new();
        repo.expect_find_all()
            .returning(move || Ok(vec![event(id)]));

        let service = EventService::new(repo);
        let matched = service.events_by_tag(Some("music")).await.unwrap();
        assert_eq!(matched.len(), 1);

        let none = service.events_by_tag(None).await.unwrap();
        assert!(none.is_empty());
    }
}
