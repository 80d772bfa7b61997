//! Construction parameters.
//!
//! All lengths are model units (millimetres by convention). Missing fields
//! in a JSON configuration fall back to the defaults below.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Parameters of a building-shell run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    pub wall_thickness: f64,
    pub wall_height: f64,
    pub slab_thickness: f64,
    pub door: OpeningParams,
    pub window: WindowParams,
    pub tolerances: Tolerances,
}

/// Cutter dimensions of a door.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpeningParams {
    /// Width of the cutter across the wall.
    pub thickness: f64,
    pub height: f64,
}

/// Cutter dimensions of a window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowParams {
    /// Width of the cutter across the wall.
    pub thickness: f64,
    pub height: f64,
    /// Elevation of the sill above the floor.
    pub height_from_floor: f64,
}

/// Numeric tolerances handed to the geometry kernel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerances {
    /// Offset, join and planarity checks.
    pub curve: f64,
    /// Wall hollowing and opening removal.
    pub boolean: f64,
    /// Wall network and slab unions.
    pub union: f64,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            wall_thickness: 200.0,
            wall_height: 3000.0,
            slab_thickness: 200.0,
            door: OpeningParams::default(),
            window: WindowParams::default(),
            tolerances: Tolerances::default(),
        }
    }
}

impl Default for OpeningParams {
    fn default() -> Self {
        Self {
            thickness: 300.0,
            height: 2100.0,
        }
    }
}

impl Default for WindowParams {
    fn default() -> Self {
        Self {
            thickness: 300.0,
            height: 1200.0,
            height_from_floor: 900.0,
        }
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            curve: 0.01,
            boolean: 0.001,
            union: 0.01,
        }
    }
}

impl BuildConfig {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the JSON is malformed or a value is out of
    /// range.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every dimension and tolerance is finite and positive and
    /// that windows fit below the wall top.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let values = [
            ("wall_thickness", self.wall_thickness),
            ("wall_height", self.wall_height),
            ("slab_thickness", self.slab_thickness),
            ("door.thickness", self.door.thickness),
            ("door.height", self.door.height),
            ("window.thickness", self.window.thickness),
            ("window.height", self.window.height),
            ("window.height_from_floor", self.window.height_from_floor),
            ("tolerances.curve", self.tolerances.curve),
            ("tolerances.boolean", self.tolerances.boolean),
            ("tolerances.union", self.tolerances.union),
        ];
        for (name, value) in values {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NotPositive { name, value });
            }
        }

        let top = self.window.height_from_floor + self.window.height;
        if top > self.wall_height {
            return Err(ConfigError::WindowAboveWall {
                top,
                wall_height: self.wall_height,
            });
        }
        Ok(())
    }
}
