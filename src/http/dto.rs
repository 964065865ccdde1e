//! Data Transfer Objects for the HTTP API.
//!
//! Field names follow the legacy camelCase wire format, and slot sizes keep
//! their numeric encoding (0/1/2).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{ParkedVehicle, ParkingSlot, VehicleType};

/// Request body for `POST /park`.
///
/// Fields are optional so that missing ones can be rejected with a 400 and a
/// descriptive message instead of a generic deserialization error.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ParkRequest {
    #[serde(default)]
    pub plate_number: Option<String>,
    #[serde(default)]
    pub vehicle_type: Option<String>,
}

/// Request body for `POST /unpark`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UnparkRequest {
    #[serde(default)]
    pub plate_number: Option<String>,
}

/// Response envelope for park/unpark: the engine's message, success or not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultResponse {
    pub result: String,
}

/// Response for `GET /parked-vehicles`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkedVehiclesResponse {
    pub parked_vehicles: Vec<ParkedVehicleDto>,
}

/// A parked vehicle with its assigned slot embedded, as the legacy API
/// rendered it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkedVehicleDto {
    pub vehicle_id: String,
    pub plate_number: String,
    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,
    pub entry_time: DateTime<Utc>,
    pub slot: SlotDto,
}

/// Slot view embedded in [`ParkedVehicleDto`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotDto {
    pub distance: u32,
    pub size: u8,
    pub occupied: bool,
}

impl ParkedVehicleDto {
    pub fn new(vehicle: &ParkedVehicle, slot: &ParkingSlot) -> Self {
        Self {
            vehicle_id: vehicle.vehicle_id.clone(),
            plate_number: vehicle.plate_number.clone(),
            vehicle_type: vehicle.vehicle_type,
            entry_time: vehicle.entry_time,
            slot: SlotDto {
                distance: slot.distance,
                size: slot.size.into(),
                occupied: slot.occupied,
            },
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Total number of slots in the lot
    pub capacity: usize,
    /// Number of currently occupied slots
    pub occupied: usize,
}
