//! HTTP handlers for the events API

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch},
};
use axum_helpers::{
    UuidPath,
    errors::responses::{
        BadRequestResponse, BadRequestUuidResponse, InternalServerErrorResponse, NotFoundResponse,
    },
};
use chrono::Utc;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::EventResult;
use crate::models::{
    CreateEvent, DateRangeQuery, Event, PatchEvent, PriceQuery, PriceRangeQuery, TagQuery,
    UpdateEvent,
};
use crate::repository::EventRepository;
use crate::service::EventService;

/// OpenAPI documentation for the Events API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_events,
        create_event,
        get_event,
        update_event,
        patch_event,
        delete_event,
        events_by_tag,
        events_by_date_range,
        events_by_price_range,
        upcoming_events,
        update_ticket_price,
    ),
    components(
        schemas(Event, CreateEvent, UpdateEvent, PatchEvent),
        responses(
            NotFoundResponse,
            BadRequestResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Events", description = "Event management endpoints (MongoDB)")
    )
)]
pub struct ApiDoc;

/// Create the events router with all HTTP endpoints
pub fn router<R: EventRepository + 'static>(service: EventService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_events).post(create_event))
        .route("/filter/tag", get(events_by_tag))
        .route("/filter/date", get(events_by_date_range))
        .route("/filter/price", get(events_by_price_range))
        .route("/upcoming", get(upcoming_events))
        .route(
            "/{id}",
            get(get_event)
                .put(update_event)
                .patch(patch_event)
                .delete(delete_event),
        )
        .route("/{id}/price", patch(update_ticket_price))
        .with_state(shared_service)
}

/// List all events
#[utoipa::path(
    get,
    path = "",
    tag = "Events",
    responses(
        (status = 200, description = "List of events", body = Vec<Event>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_events<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
) -> EventResult<Json<Vec<Event>>> {
    let events = service.list().await?;
    Ok(Json(events))
}

/// Create a new event
#[utoipa::path(
    post,
    path = "",
    tag = "Events",
    request_body = CreateEvent,
    responses(
        (status = 201, description = "Event created successfully", body = Event),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_event<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
    Json(input): Json<CreateEvent>,
) -> EventResult<impl IntoResponse> {
    let event = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// Get an event by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Events",
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event found", body = Event),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_event<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
    UuidPath(id): UuidPath,
) -> EventResult<Json<Event>> {
    let event = service.get(id).await?;
    Ok(Json(event))
}

/// Replace an event
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Events",
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    request_body = UpdateEvent,
    responses(
        (status = 200, description = "Event updated successfully", body = Event),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_event<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
    UuidPath(id): UuidPath,
    Json(input): Json<UpdateEvent>,
) -> EventResult<Json<Event>> {
    let event = service.update(id, input).await?;
    Ok(Json(event))
}

/// Partially update an event
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "Events",
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    request_body = PatchEvent,
    responses(
        (status = 200, description = "Event patched successfully", body = Event),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn patch_event<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
    UuidPath(id): UuidPath,
    Json(input): Json<PatchEvent>,
) -> EventResult<Json<Event>> {
    let event = service.patch(id, input).await?;
    Ok(Json(event))
}

/// Delete an event
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Events",
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 204, description = "Event deleted successfully"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_event<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
    UuidPath(id): UuidPath,
) -> EventResult<impl IntoResponse> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Events carrying a tag
#[utoipa::path(
    get,
    path = "/filter/tag",
    tag = "Events",
    params(TagQuery),
    responses(
        (status = 200, description = "Events with the given tag", body = Vec<Event>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn events_by_tag<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
    Query(query): Query<TagQuery>,
) -> EventResult<Json<Vec<Event>>> {
    let events = service.events_by_tag(query.tag.as_deref()).await?;
    Ok(Json(events))
}

/// Events inside an inclusive date range
#[utoipa::path(
    get,
    path = "/filter/date",
    tag = "Events",
    params(DateRangeQuery),
    responses(
        (status = 200, description = "Events inside the date range", body = Vec<Event>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn events_by_date_range<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
    Query(query): Query<DateRangeQuery>,
) -> EventResult<Json<Vec<Event>>> {
    let events = service.events_by_date_range(query.start, query.end).await?;
    Ok(Json(events))
}

/// Events inside an inclusive price range
#[utoipa::path(
    get,
    path = "/filter/price",
    tag = "Events",
    params(PriceRangeQuery),
    responses(
        (status = 200, description = "Events inside the price range", body = Vec<Event>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn events_by_price_range<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
    Query(query): Query<PriceRangeQuery>,
) -> EventResult<Json<Vec<Event>>> {
    let events = service.events_by_price_range(query.min, query.max).await?;
    Ok(Json(events))
}

/// Events scheduled strictly in the future
#[utoipa::path(
    get,
    path = "/upcoming",
    tag = "Events",
    responses(
        (status = 200, description = "Upcoming events", body = Vec<Event>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn upcoming_events<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
) -> EventResult<Json<Vec<Event>>> {
    let events = service.upcoming_events(Utc::now()).await?;
    Ok(Json(events))
}

/// Update the ticket price of an event
#[utoipa::path(
    patch,
    path = "/{id}/price",
    tag = "Events",
    params(
        ("id" = Uuid, Path, description = "Event ID"),
        PriceQuery
    ),
    responses(
        (status = 200, description = "Price updated successfully", body = Event),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_ticket_price<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
    UuidPath(id): UuidPath,
    Query(query): Query<PriceQuery>,
) -> EventResult<Json<Event>> {
    let event = service.update_ticket_price(id, query.price).await?;
    Ok(Json(event))
}
