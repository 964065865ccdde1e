//! Core domain types for the parking backend.
//!
//! The slot inventory is a flat list owned by the engine; registry entries
//! reference slots by index ([`SlotId`]) rather than holding shared pointers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Index of a slot in the engine's flat slot list.
pub type SlotId = usize;

/// Size class of a parking slot.
///
/// The legacy wire and config encoding is numeric (0 = small, 1 = medium,
/// 2 = large), so serde goes through `u8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum SlotSize {
    Small,
    Medium,
    Large,
}

impl SlotSize {
    /// Hourly rate in pesos for time spent beyond the flat-rate window.
    pub fn hourly_rate(self) -> i64 {
        match self {
            SlotSize::Small => 20,
            SlotSize::Medium => 60,
            SlotSize::Large => 100,
        }
    }
}

impl From<SlotSize> for u8 {
    fn from(size: SlotSize) -> Self {
        match size {
            SlotSize::Small => 0,
            SlotSize::Medium => 1,
            SlotSize::Large => 2,
        }
    }
}

impl TryFrom<u8> for SlotSize {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(SlotSize::Small),
            1 => Ok(SlotSize::Medium),
            2 => Ok(SlotSize::Large),
            other => Err(format!("invalid slot size code: {}", other)),
        }
    }
}

/// Vehicle size category, parsed from the single-letter request field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleType {
    #[serde(rename = "s")]
    Small,
    #[serde(rename = "m")]
    Medium,
    #[serde(rename = "l")]
    Large,
}

impl VehicleType {
    /// Parse the request string; accepts "s"/"m"/"l" in any case.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_lowercase().as_str() {
            "s" => Some(VehicleType::Small),
            "m" => Some(VehicleType::Medium),
            "l" => Some(VehicleType::Large),
            _ => None,
        }
    }

    /// Slot label used in the park confirmation message.
    pub fn abbreviation(self) -> &'static str {
        match self {
            VehicleType::Small => "SP",
            VehicleType::Medium => "MP",
            VehicleType::Large => "LP",
        }
    }

    /// Whether a slot of the given size can hold this vehicle.
    ///
    /// Small vehicles fit anywhere; medium vehicles need a medium or large
    /// slot; large vehicles need a large slot.
    pub fn fits(self, slot_size: SlotSize) -> bool {
        match self {
            VehicleType::Small => true,
            VehicleType::Medium => matches!(slot_size, SlotSize::Medium | SlotSize::Large),
            VehicleType::Large => slot_size == SlotSize::Large,
        }
    }
}

/// A single parking slot.
///
/// Slots are created once at engine construction and never destroyed; only
/// `occupied` changes over the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkingSlot {
    /// Distance from the entry point this slot was generated for.
    pub distance: u32,
    pub size: SlotSize,
    pub occupied: bool,
}

/// A vehicle currently in the lot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkedVehicle {
    /// Unique id generated at park time (UUIDv4).
    pub vehicle_id: String,
    /// Plate number; unique among currently parked vehicles.
    pub plate_number: String,
    pub vehicle_type: VehicleType,
    pub entry_time: DateTime<Utc>,
    /// Index of the assigned slot in the engine's slot list.
    pub slot: SlotId,
}
