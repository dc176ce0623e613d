//! # Unit Types
//!
//! Thin newtype wrappers for the units health_core works in. They keep JSON
//! clean (just numbers) while making it hard to hand a height in centimeters
//! to a function expecting meters.
//!
//! ## Units
//!
//! - Mass: kilograms (kg)
//! - Length: meters (m) for BMI, centimeters (cm) for ideal body weight
//! - Body mass index: kilograms per square meter (kg/m²)
//!
//! ## Example
//!
//! ```rust
//! use health_core::units::{Centimeters, Meters};
//!
//! let height = Centimeters(175.0);
//! let height_m: Meters = height.into();
//! assert!((height_m.0 - 1.75).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Mass Units
// ============================================================================

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

// ============================================================================
// Length Units
// ============================================================================

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

impl From<Meters> for Centimeters {
    fn from(m: Meters) -> Self {
        Centimeters(m.0 * 100.0)
    }
}

impl From<Centimeters> for Meters {
    fn from(cm: Centimeters) -> Self {
        Meters(cm.0 / 100.0)
    }
}

// ============================================================================
// Body Mass Index
// ============================================================================

/// Body mass index in kilograms per square meter
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgPerM2(pub f64);

impl fmt::Display for Kilograms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} kg", self.0)
    }
}

impl fmt::Display for Meters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} m", self.0)
    }
}

impl fmt::Display for Centimeters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} cm", self.0)
    }
}

impl fmt::Display for KgPerM2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} kg/m²", self.0)
    }
}
