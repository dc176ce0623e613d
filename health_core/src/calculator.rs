//! # Health Calculator
//!
//! [`HealthCalc`] is the contract callers program against. Every method has a
//! default body backed by the free functions in [`crate::metrics`], so an
//! alternative provider (for example one with a different classification
//! table) only overrides what it changes.
//!
//! ## Example
//!
//! ```rust
//! use health_core::{Gender, HealthCalc, HealthCalculator};
//!
//! let calc = HealthCalculator;
//! let bmi = calc.bmi(70.0, 1.75).unwrap();
//! assert_eq!(calc.bmi_classification(bmi).unwrap().label(), "Normal weight");
//! assert!((calc.ibw(175.0, Gender::Male).unwrap() - 68.75).abs() < 0.01);
//! ```

use crate::errors::HealthResult;
use crate::gender::Gender;
use crate::metrics::{bmi, ibw, BmiClassification};

/// Calculator of basic anthropometric health metrics.
pub trait HealthCalc {
    /// Body mass index from weight (kg) and height (m).
    fn bmi(&self, weight_kg: f64, height_m: f64) -> HealthResult<f64> {
        bmi::compute_bmi(weight_kg, height_m)
    }

    /// Class of a BMI value.
    fn bmi_classification(&self, bmi: f64) -> HealthResult<BmiClassification> {
        bmi::classify_bmi(bmi)
    }

    /// Ideal body weight (kg), divisors 4 (male) / 2 (female), height in cm.
    fn ibw(&self, height_cm: f64, gender: Gender) -> HealthResult<f64> {
        ibw::compute_ibw(height_cm, gender)
    }

    /// Ideal body weight (kg) by the Lorenz formula, divisors 4 / 2.5.
    fn lorenz_ibw(&self, height_cm: f64, gender: Gender) -> HealthResult<f64> {
        ibw::lorenz_ibw(height_cm, gender)
    }
}

/// Stateless default implementation of [`HealthCalc`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HealthCalculator;

impl HealthCalc for HealthCalculator {}
