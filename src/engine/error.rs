//! Engine error types.
//!
//! Business-rule failures are non-fatal and reach the HTTP client as the
//! human-readable message text, not as an error status code. The `Display`
//! strings below are the exact wire messages.

/// Result type for engine operations.
pub type ParkingResult<T> = Result<T, ParkingError>;

/// Business-rule failures for park/unpark operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParkingError {
    /// The request's vehicle type was not one of s/m/l.
    #[error("Invalid vehicle type: {0}")]
    InvalidVehicleType(String),

    /// The plate is already present in the registry.
    #[error("Vehicle with plate number {0} is already parked.")]
    AlreadyParked(String),

    /// No unoccupied slot is compatible with the requested vehicle type.
    #[error("No available slots for this vehicle type.")]
    NoAvailableSlot,

    /// Unpark was requested for a plate that is not currently parked.
    #[error("No vehicle with plate number {0} is currently parked.")]
    VehicleNotFound(String),
}
