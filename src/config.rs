//! Lot layout configuration.
//!
//! The slot layout is fixed for the lifetime of the process: a distance
//! matrix (one row per entry point) and a size-class list indexed by column.
//! Layouts can be loaded from a TOML file; when no file is found the default
//! layout of the original deployment is used.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::SlotSize;

/// Environment variable pointing at a lot config file.
pub const LOT_CONFIG_ENV: &str = "LOT_CONFIG";

/// Errors raised while loading or validating a lot layout.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read lot config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse lot config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("distance matrix has {found} rows but {expected} entry points are configured")]
    EntryPointMismatch { expected: usize, found: usize },

    #[error("distance row {row} has {found} columns but {expected} slot sizes are configured")]
    RowLengthMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Slot layout: entry points, distance matrix, and per-column size classes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotConfig {
    /// Number of entry points; must equal the number of distance rows.
    pub entry_points: usize,
    /// distances[i][j] = distance of slot j from entry point i.
    pub distances: Vec<Vec<u32>>,
    /// Size class of slot column j, shared by all entry points.
    pub sizes: Vec<SlotSize>,
}

impl Default for LotConfig {
    fn default() -> Self {
        Self {
            entry_points: 3,
            distances: vec![vec![1, 2, 3], vec![1, 2, 3], vec![1, 2, 3]],
            sizes: vec![SlotSize::Small, SlotSize::Medium, SlotSize::Large],
        }
    }
}

impl LotConfig {
    /// Load a lot layout from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: LotConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the lot layout from the standard locations.
    ///
    /// Checks the `LOT_CONFIG` environment variable first, then `parking.toml`
    /// in the current and parent directory, and finally falls back to the
    /// built-in default layout.
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = std::env::var(LOT_CONFIG_ENV) {
            return Self::from_file(path);
        }

        let search_paths = [
            PathBuf::from("parking.toml"),
            PathBuf::from("../parking.toml"),
        ];
        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Validate the layout dimensions.
    ///
    /// Every distance row must match the configured entry-point count and
    /// every row must have one column per size-class entry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.distances.len() != self.entry_points {
            return Err(ConfigError::EntryPointMismatch {
                expected: self.entry_points,
                found: self.distances.len(),
            });
        }

        for (row, distances) in self.distances.iter().enumerate() {
            if distances.len() != self.sizes.len() {
                return Err(ConfigError::RowLengthMismatch {
                    row,
                    expected: self.sizes.len(),
                    found: distances.len(),
                });
            }
        }

        Ok(())
    }

    /// Total number of slots this layout produces.
    pub fn slot_count(&self) -> usize {
        self.entry_points * self.sizes.len()
    }
}
