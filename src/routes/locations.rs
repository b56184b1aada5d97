use actix_web::{web, HttpResponse, Responder};
use std::time::Instant;

use crate::models::{
    decode_request, CreateLocationRequest, CreateLocationResponse, HealthResponse,
    LocationsResponse, NewLocation, SearchQuery, SearchRequest, SearchResponse,
};
use crate::routes::{elapsed_ns, ApiError, AppState};

/// Configure all location routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/locations", web::post().to(add_location))
        .route("/locations/{category}", web::get().to(get_locations_by_category))
        .route("/search", web::post().to(search_locations));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let store_healthy = state.store.health_check().await.unwrap_or(false);

    let status = if store_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Store a location
///
/// POST /locations
///
/// Request body:
/// ```json
/// {
///   "name": "string",
///   "address": "string",
///   "latitude": 40.0,
///   "longitude": -73.0,
///   "category": "string"
/// }
/// ```
async fn add_location(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let start = Instant::now();

    let req: CreateLocationRequest = decode_request(&body, state.request_policy).map_err(|e| {
        tracing::info!("Rejected add_location request: {}", e);
        e
    })?;
    let location = NewLocation::from(req);

    let id = state.store.create(&location).await.map_err(|e| {
        tracing::error!("Failed to store location {:?}: {}", location.name, e);
        e
    })?;

    tracing::info!("Stored location {} in category {:?}", id, location.category);

    Ok(HttpResponse::Ok().json(CreateLocationResponse {
        id,
        time_ns: elapsed_ns(start),
    }))
}

/// List all locations in a category
///
/// GET /locations/{category}
async fn get_locations_by_category(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let start = Instant::now();
    let category = path.into_inner();

    let locations = state.store.list_by_category(&category).await.map_err(|e| {
        tracing::error!("Failed to list category {:?}: {}", category, e);
        e
    })?;

    tracing::debug!("Category {:?} returned {} locations", category, locations.len());

    Ok(HttpResponse::Ok().json(LocationsResponse {
        locations,
        time_ns: elapsed_ns(start),
    }))
}

/// Radius search within a category
///
/// POST /search
///
/// Request body:
/// ```json
/// {
///   "latitude": 40.0,
///   "longitude": -73.0,
///   "category": "string",
///   "radius_km": 5.0
/// }
/// ```
async fn search_locations(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let start = Instant::now();

    let req: SearchRequest = decode_request(&body, state.request_policy).map_err(|e| {
        tracing::info!("Rejected search request: {}", e);
        e
    })?;
    let query = SearchQuery::from(req);

    let locations = state.search.search(&query).await.map_err(|e| {
        tracing::error!("Search in {:?} failed: {}", query.category, e);
        e
    })?;

    tracing::info!(
        "Returning {} locations in {:?} within {} km",
        locations.len(),
        query.category,
        query.radius_km
    );

    Ok(HttpResponse::Ok().json(SearchResponse {
        locations,
        time_ns: elapsed_ns(start),
    }))
}
