use actix_web::{web, HttpResponse};
use std::time::Instant;

use crate::models::{decode_request, TripCostRequest, TripCostResponse};
use crate::routes::{elapsed_ns, ApiError, AppState};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/trip-cost/{location_id}", web::post().to(trip_cost));
}

/// Estimate fuel and toll cost from the caller to a stored location
///
/// POST /trip-cost/{location_id}
///
/// Request body:
/// ```json
/// {
///   "latitude": 40.0,
///   "longitude": -73.0
/// }
/// ```
async fn trip_cost(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let start = Instant::now();
    let location_id = path.into_inner();

    let destination = state.store.get_by_id(&location_id).await.map_err(|e| {
        tracing::info!("Trip cost lookup for {} failed: {}", location_id, e);
        e
    })?;

    let req: TripCostRequest = decode_request(&body, state.request_policy)?;

    let cost = state
        .trip_cost
        .estimate(req.origin(), destination.coordinate())
        .await
        .map_err(|e| {
            tracing::error!("Trip cost estimate to {} failed: {}", location_id, e);
            e
        })?;

    tracing::info!("Trip cost to {}: total {}", location_id, cost.total_cost);

    Ok(HttpResponse::Ok().json(TripCostResponse::new(cost, elapsed_ns(start))))
}
