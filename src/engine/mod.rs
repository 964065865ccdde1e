//! Allocator/Billing engine.
//!
//! The engine owns the slot inventory and the registry of currently parked
//! vehicles, and is the only place either is mutated. It exposes the two
//! mutating operations (park, unpark) plus pure query helpers; the HTTP
//! layer serializes access to a single engine instance behind a lock.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Request parsing and validation                         │
//! │  - JSON serialization/deserialization                     │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  ParkingEngine                                            │
//! │  - Slot allocation (closest compatible slot wins)         │
//! │  - Registry of parked vehicles                            │
//! │  - Fee calculation (billing)                              │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Invariants maintained across every operation:
//!
//! - a slot is `occupied` iff exactly one registry entry references it;
//! - a plate number appears in at most one registry entry at a time.

pub mod billing;
pub mod error;

pub use error::{ParkingError, ParkingResult};

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use uuid::Uuid;

use crate::config::{ConfigError, LotConfig};
use crate::models::{ParkedVehicle, ParkingSlot, SlotId, VehicleType};

/// Outcome of a successful park request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParkOutcome {
    /// A slot was assigned and the vehicle registered.
    Parked {
        vehicle_id: String,
        vehicle_type: VehicleType,
        distance: u32,
    },
    /// The plate re-entered within the grace window; the original rate keeps
    /// running and nothing is charged or removed.
    ContinuousRate { plate_number: String },
    /// The plate was found still registered past the grace window; the stay
    /// was settled and the slot released.
    SettledOnReturn {
        plate_number: String,
        total_charge: i64,
    },
}

impl ParkOutcome {
    /// Wire message for this outcome.
    pub fn message(&self) -> String {
        match self {
            ParkOutcome::Parked {
                vehicle_id,
                vehicle_type,
                distance,
            } => format!(
                "Vehicle parked in ({}) slot with distance {}. Vehicle ID: {}",
                vehicle_type.abbreviation(),
                distance,
                vehicle_id
            ),
            ParkOutcome::ContinuousRate { plate_number } => format!(
                "Vehicle with plate number {} left and returned within one hour. Continuous rate applied.",
                plate_number
            ),
            ParkOutcome::SettledOnReturn {
                plate_number,
                total_charge,
            } => format!(
                "Vehicle with plate number {} unparked. Total charge: {} pesos.",
                plate_number, total_charge
            ),
        }
    }
}

/// Settlement returned by a successful unpark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnparkReceipt {
    pub plate_number: String,
    pub total_charge: i64,
}

impl UnparkReceipt {
    /// Wire message for this receipt.
    pub fn message(&self) -> String {
        format!(
            "Vehicle with plate number {} unparked. Total charge: {} pesos.",
            self.plate_number, self.total_charge
        )
    }
}

/// Slot allocator and billing engine.
pub struct ParkingEngine {
    slots: Vec<ParkingSlot>,
    parked: HashMap<String, ParkedVehicle>,
}

impl ParkingEngine {
    /// Build the engine from a lot layout.
    ///
    /// The flat slot list is produced by walking each entry point's distance
    /// row; the size of slot column j comes from `sizes[j]` regardless of
    /// entry point. Mismatched dimensions are rejected here, at construction.
    pub fn new(config: &LotConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut slots = Vec::with_capacity(config.slot_count());
        for row in &config.distances {
            for (column, &distance) in row.iter().enumerate() {
                slots.push(ParkingSlot {
                    distance,
                    size: config.sizes[column],
                    occupied: false,
                });
            }
        }

        Ok(Self {
            slots,
            parked: HashMap::new(),
        })
    }

    /// Park a vehicle, assigning the closest compatible slot.
    pub fn park_vehicle(
        &mut self,
        vehicle_type: &str,
        plate_number: &str,
    ) -> ParkingResult<ParkOutcome> {
        self.park_vehicle_at(vehicle_type, plate_number, Utc::now())
    }

    /// Park with an explicit clock, for deterministic tests.
    pub fn park_vehicle_at(
        &mut self,
        vehicle_type: &str,
        plate_number: &str,
        now: DateTime<Utc>,
    ) -> ParkingResult<ParkOutcome> {
        let vehicle_type = VehicleType::parse(vehicle_type)
            .ok_or_else(|| ParkingError::InvalidVehicleType(vehicle_type.to_string()))?;

        if self.find_by_plate(plate_number).is_some() {
            return Err(ParkingError::AlreadyParked(plate_number.to_string()));
        }

        // Re-entry settlement. The duplicate rejection above fires first for
        // any plate still in the registry, so this lookup is always empty;
        // kept to match the legacy park flow.
        if let Some(vehicle) = self.find_by_plate(plate_number).cloned() {
            let elapsed = billing::elapsed_units(vehicle.entry_time, now);
            if elapsed <= billing::GRACE_UNITS {
                return Ok(ParkOutcome::ContinuousRate {
                    plate_number: plate_number.to_string(),
                });
            }

            let total_charge = billing::total_charge(self.slots[vehicle.slot].size, elapsed);
            self.release(&vehicle);
            return Ok(ParkOutcome::SettledOnReturn {
                plate_number: plate_number.to_string(),
                total_charge,
            });
        }

        let available = self.available_slots(vehicle_type);
        let slot_id = self
            .find_closest_slot(&available)
            .ok_or(ParkingError::NoAvailableSlot)?;

        self.slots[slot_id].occupied = true;
        let vehicle_id = Uuid::new_v4().to_string();
        self.parked.insert(
            vehicle_id.clone(),
            ParkedVehicle {
                vehicle_id: vehicle_id.clone(),
                plate_number: plate_number.to_string(),
                vehicle_type,
                entry_time: now,
                slot: slot_id,
            },
        );

        tracing::debug!(
            plate = plate_number,
            slot = slot_id,
            distance = self.slots[slot_id].distance,
            "vehicle parked"
        );

        Ok(ParkOutcome::Parked {
            vehicle_id,
            vehicle_type,
            distance: self.slots[slot_id].distance,
        })
    }

    /// Unpark by plate number, settling the stay and freeing the slot.
    pub fn unpark_vehicle(&mut self, plate_number: &str) -> ParkingResult<UnparkReceipt> {
        self.unpark_vehicle_at(plate_number, Utc::now())
    }

    /// Unpark with an explicit clock, for deterministic tests.
    pub fn unpark_vehicle_at(
        &mut self,
        plate_number: &str,
        now: DateTime<Utc>,
    ) -> ParkingResult<UnparkReceipt> {
        let vehicle = self
            .find_by_plate(plate_number)
            .cloned()
            .ok_or_else(|| ParkingError::VehicleNotFound(plate_number.to_string()))?;

        let elapsed = billing::elapsed_units(vehicle.entry_time, now);
        let total_charge = billing::total_charge(self.slots[vehicle.slot].size, elapsed);
        self.release(&vehicle);

        tracing::debug!(
            plate = plate_number,
            elapsed_units = elapsed,
            total_charge,
            "vehicle unparked"
        );

        Ok(UnparkReceipt {
            plate_number: vehicle.plate_number,
            total_charge,
        })
    }

    /// Unoccupied slots compatible with the vehicle type, sorted by distance
    /// ascending with ties broken by smaller size class first.
    pub fn available_slots(&self, vehicle_type: VehicleType) -> Vec<SlotId> {
        let mut candidates: Vec<SlotId> = self
            .slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| !slot.occupied && vehicle_type.fits(slot.size))
            .map(|(id, _)| id)
            .collect();

        candidates.sort_by_key(|&id| (self.slots[id].distance, self.slots[id].size));
        candidates
    }

    /// The candidate with the smallest distance.
    pub fn find_closest_slot(&self, candidates: &[SlotId]) -> Option<SlotId> {
        candidates
            .iter()
            .copied()
            .min_by_key(|&id| self.slots[id].distance)
    }

    /// Snapshot of all currently parked vehicles. No ordering guarantee.
    pub fn parked_vehicles(&self) -> Vec<ParkedVehicle> {
        self.parked.values().cloned().collect()
    }

    /// Read access to the slot inventory.
    pub fn slots(&self) -> &[ParkingSlot] {
        &self.slots
    }

    /// Look up a slot by id.
    pub fn slot(&self, id: SlotId) -> Option<&ParkingSlot> {
        self.slots.get(id)
    }

    /// Number of occupied slots.
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.occupied).count()
    }

    fn find_by_plate(&self, plate_number: &str) -> Option<&ParkedVehicle> {
        self.parked
            .values()
            .find(|vehicle| vehicle.plate_number == plate_number)
    }

    fn release(&mut self, vehicle: &ParkedVehicle) {
        self.parked.remove(&vehicle.vehicle_id);
        self.slots[vehicle.slot].occupied = false;
    }
}


#[cfg(test)]
#[path = "billing_tests.rs"]
mod billing_tests;
