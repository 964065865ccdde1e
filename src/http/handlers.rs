//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the engine
//! for business logic. Park and unpark always answer 200 with the engine's
//! message in `result`; a 400 is returned only when required fields are
//! missing from the request body.

use axum::{extract::State, Json};

use super::dto::{
    HealthResponse, ParkRequest, ParkedVehicleDto, ParkedVehiclesResponse, ResultResponse,
    UnparkRequest,
};
use super::error::AppError;
use super::state::AppState;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
///
/// Health check endpoint reporting current lot usage.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let engine = state.engine.read();

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        capacity: engine.slots().len(),
        occupied: engine.occupied_count(),
    }))
}

/// POST /park
///
/// Assign the closest compatible slot to a vehicle.
pub async fn park_vehicle(
    State(state): State<AppState>,
    Json(request): Json<ParkRequest>,
) -> HandlerResult<ResultResponse> {
    let (Some(plate_number), Some(vehicle_type)) = (request.plate_number, request.vehicle_type)
    else {
        return Err(AppError::BadRequest(
            "Both vehicleType and plateNumber are required for parking.".to_string(),
        ));
    };

    let result = match state.engine.write().park_vehicle(&vehicle_type, &plate_number) {
        Ok(outcome) => outcome.message(),
        Err(err) => err.to_string(),
    };

    Ok(Json(ResultResponse { result }))
}

/// POST /unpark
///
/// Settle a stay by plate number and free its slot.
pub async fn unpark_vehicle(
    State(state): State<AppState>,
    Json(request): Json<UnparkRequest>,
) -> HandlerResult<ResultResponse> {
    let Some(plate_number) = request.plate_number else {
        return Err(AppError::BadRequest(
            "plateNumber is required for unparking.".to_string(),
        ));
    };

    let result = match state.engine.write().unpark_vehicle(&plate_number) {
        Ok(receipt) => receipt.message(),
        Err(err) => err.to_string(),
    };

    Ok(Json(ResultResponse { result }))
}

/// GET /parked-vehicles
///
/// Snapshot of all currently parked vehicles with their assigned slots.
pub async fn list_parked_vehicles(
    State(state): State<AppState>,
) -> HandlerResult<ParkedVehiclesResponse> {
    let engine = state.engine.read();

    let parked_vehicles = engine
        .parked_vehicles()
        .into_iter()
        .filter_map(|vehicle| {
            engine
                .slot(vehicle.slot)
                .map(|slot| ParkedVehicleDto::new(&vehicle, slot))
        })
        .collect();

    Ok(Json(ParkedVehiclesResponse { parked_vehicles }))
}
