//! Events API routes
//!
//! Wires the events domain to HTTP routes over MongoDB.

use axum::Router;
use domain_events::{EventService, MongoEventRepository, handlers};

use crate::state::AppState;

/// Create the events router
pub fn router(state: &AppState) -> Router {
    let repository = MongoEventRepository::new(state.db.clone());
    let service = EventService::new(repository);

    handlers::router(service)
}
