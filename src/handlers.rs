use actix_web::{web, HttpResponse, Result};
use rand::Rng;
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::generator;
use crate::models::{
    HealthReport, PredictionRequest, PredictionResponse, StatusSnapshot, SurgeRecord,
};
use crate::state::AppState;

const SERVICE_NAME: &str = "ml-prediction";
const SURGE_OCCUPANCY_PERCENT: u64 = 90;
const SURGE_ALERT: &str = "Crowd surge simulation activated";

pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthReport {
        status: "healthy".into(),
        service: SERVICE_NAME.into(),
    })
}

pub async fn predict(
    state: web::Data<AppState>,
    payload: web::Json<PredictionRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = payload.into_inner();

    if !state.capacities.contains(&request.location_id) {
        warn!(location = %request.location_id, "Prediction requested for unknown location");
        return Err(ApiError::UnknownLocation(request.location_id));
    }

    let mut rng = state.rng();
    let predictions = generator::generate(
        &state.capacities,
        &request.location_id,
        &request.date,
        request.festival_mode,
        &mut rng,
    )
    .map_err(|e| {
        warn!(error = %e, "Rejected prediction request");
        ApiError::from(e)
    })?;

    let summary = generator::summarize(&predictions)
        .ok_or_else(|| ApiError::Internal("forecast produced no hourly predictions".into()))?;

    info!(
        location = %request.location_id,
        date = %request.date,
        festival = request.festival_mode,
        total = summary.total_predicted,
        "Prediction generated"
    );
    debug!(peak_hour = summary.peak_hour, peak_visitors = summary.peak_visitors);

    Ok(HttpResponse::Ok().json(PredictionResponse {
        location_id: request.location_id,
        date: request.date,
        predictions,
        total_predicted: summary.total_predicted,
        peak_hour: summary.peak_hour,
        peak_visitors: summary.peak_visitors,
    }))
}

pub async fn current_status(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let location_id = path.into_inner();
    let capacity = lookup(&state, &location_id)?;
    let mut rng = state.rng();

    let capacity = f64::from(capacity);
    let current_visitors = (capacity * (0.5 + 0.3 * rng.gen::<f64>())).floor();
    let queue_length = (current_visitors * (0.02 + 0.03 * rng.gen::<f64>())).floor();
    let occupancy_percent = (current_visitors / capacity * 100.0).floor();
    let avg_wait_time = (queue_length * (0.03 + 0.02 * rng.gen::<f64>())).floor();

    debug!(location = %location_id, current_visitors, queue_length, "Status snapshot");

    Ok(HttpResponse::Ok().json(StatusSnapshot {
        location_id,
        current_visitors: current_visitors as u64,
        queue_length: queue_length as u64,
        occupancy_percent: occupancy_percent as u64,
        avg_wait_time: avg_wait_time as u64,
    }))
}

pub async fn simulate_surge(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let location_id = path.into_inner();
    let capacity = lookup(&state, &location_id)?;

    let new_visitor_count = (f64::from(capacity) * 0.9).floor() as u64;
    info!(location = %location_id, new_visitor_count, "Surge simulation triggered");

    Ok(HttpResponse::Ok().json(SurgeRecord {
        location_id,
        surge_triggered: true,
        new_visitor_count,
        occupancy_percent: SURGE_OCCUPANCY_PERCENT,
        alert: SURGE_ALERT.into(),
    }))
}

/// Strict lookup for the status and surge endpoints.
fn lookup(state: &AppState, location_id: &str) -> Result<u32, ApiError> {
    state.capacities.get(location_id).ok_or_else(|| {
        warn!(location = %location_id, "Location not found");
        ApiError::LocationNotFound(location_id.to_string())
    })
}
