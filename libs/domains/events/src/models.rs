use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Event entity - represents a ticketed event stored in MongoDB
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Event {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Display name
    pub event_name: Option<String>,
    /// Tags for categorization, matched by exact string equality
    #[serde(default)]
    pub tags: Vec<String>,
    /// Ticket price, exact decimal
    pub ticket_price: Option<Decimal>,
    /// Scheduled start, UTC
    pub event_date_time: Option<DateTime<Utc>>,
    /// Duration in minutes
    #[serde(default)]
    pub duration_minutes: i32,
}

/// DTO for creating a new event
///
/// The id is optional; one is generated when absent.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateEvent {
    pub id: Option<Uuid>,
    pub event_name: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub ticket_price: Option<Decimal>,
    pub event_date_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub duration_minutes: i32,
}

/// DTO for replacing an event wholesale
///
/// Every field is overwritten; the path id always wins over any id in the
/// payload.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateEvent {
    pub event_name: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub ticket_price: Option<Decimal>,
    pub event_date_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub duration_minutes: i32,
}

/// DTO for partially updating an event
///
/// Missing fields leave the stored value unchanged. Empty tag lists and
/// non-positive durations are treated as "not provided".
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct PatchEvent {
    pub event_name: Option<String>,
    pub tags: Option<Vec<String>>,
    pub ticket_price: Option<Decimal>,
    pub event_date_time: Option<DateTime<Utc>>,
    pub duration_minutes: Option<i32>,
}

/// Query parameters for tag filtering
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct TagQuery {
    /// Tag to match exactly
    pub tag: Option<String>,
}

/// Query parameters for date-range filtering
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct DateRangeQuery {
    /// Inclusive lower bound (RFC 3339)
    pub start: Option<DateTime<Utc>>,
    /// Inclusive upper bound (RFC 3339)
    pub end: Option<DateTime<Utc>>,
}

/// Query parameters for price-range filtering
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct PriceRangeQuery {
    /// Inclusive lower bound, defaults to 0
    pub min: Option<Decimal>,
    /// Inclusive upper bound, defaults to 10^9
    pub max: Option<Decimal>,
}

/// Query parameters for the targeted price update
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct PriceQuery {
    /// New ticket price, must be non-negative
    pub price: Option<Decimal>,
}

impl Event {
    /// Create a new event from the CreateEvent DTO, generating an id when
    /// the payload carries none
    pub fn new(input: CreateEvent) -> Self {
        Self {
            id: input.id.unwrap_or_else(Uuid::now_v7),
            event_name: input.event_name,
            tags: input.tags,
            ticket_price: input.ticket_price,
            event_date_time: input.event_date_time,
            duration_minutes: input.duration_minutes,
        }
    }

    /// Apply a partial update
    ///
    /// Field rules: name, price, and date apply when present. Tags apply
    /// only when present and non-empty. Duration applies only when present
    /// and strictly positive.
    pub fn apply_patch(&mut self, patch: PatchEvent) {
        if let Some(event_name) = patch.event_name {
            self.event_name = Some(event_name);
        }
        if let Some(tags) = patch.tags {
            if !tags.is_empty() {
                self.tags = tags;
            }
        }
        if let Some(ticket_price) = patch.ticket_price {
            self.ticket_price = Some(ticket_price);
        }
        if let Some(event_date_time) = patch.event_date_time {
            self.event_date_time = Some(event_date_time);
        }
        if let Some(duration_minutes) = patch.duration_minutes {
            if duration_minutes > 0 {
                self.duration_minutes = duration_minutes;
            }
        }
    }
}

impl UpdateEvent {
    /// Materialize a full replacement, forcing the stored id
    pub fn into_event(self, id: Uuid) -> Event {
        Event {
            id,
            event_name: self.event_name,
            tags: self.tags,
            ticket_price: self.ticket_price,
            event_date_time: self.event_date_time,
            duration_minutes: self.duration_minutes,
        }
    }
}
