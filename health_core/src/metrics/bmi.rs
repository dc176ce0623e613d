//! # Body Mass Index
//!
//! BMI = weight (kg) / height (m)².
//!
//! Classification uses eight half-open intervals. A value sitting exactly on a
//! boundary belongs to the upper class, and no rounding is applied before the
//! comparison.
//!
//! | BMI           | Class             |
//! |---------------|-------------------|
//! | [0, 16)       | Severe thinness   |
//! | [16, 17)      | Moderate thinness |
//! | [17, 18.5)    | Mild thinness     |
//! | [18.5, 25)    | Normal weight     |
//! | [25, 30)      | Overweight        |
//! | [30, 35)      | Obese Class I     |
//! | [35, 40)      | Obese Class II    |
//! | [40, 150]     | Obese Class III   |
//!
//! ## Example
//!
//! ```rust
//! use health_core::metrics::bmi::{calculate, BmiClassification, BmiInput};
//!
//! let input = BmiInput { weight_kg: 70.0, height_m: 1.75 };
//! let result = calculate(&input).unwrap();
//! assert!((result.bmi.0 - 22.86).abs() < 0.01);
//! assert_eq!(result.classification, BmiClassification::NormalWeight);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{HealthError, HealthResult};
use crate::units::{KgPerM2, Kilograms, Meters};

/// Accepted weight range in kilograms (inclusive)
pub const WEIGHT_RANGE_KG: (f64, f64) = (1.0, 700.0);

/// Accepted height range in meters (inclusive)
pub const HEIGHT_RANGE_M: (f64, f64) = (0.30, 3.00);

/// Largest BMI accepted for classification
pub const MAX_BMI: f64 = 150.0;

/// WHO-style BMI class.
///
/// Variants are declared in ascending BMI order, so the derived `Ord`
/// follows the interval order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BmiClassification {
    #[serde(rename = "Severe thinness")]
    SevereThinness,
    #[serde(rename = "Moderate thinness")]
    ModerateThinness,
    #[serde(rename = "Mild thinness")]
    MildThinness,
    #[serde(rename = "Normal weight")]
    NormalWeight,
    #[serde(rename = "Overweight")]
    Overweight,
    #[serde(rename = "Obese Class I")]
    ObeseClassI,
    #[serde(rename = "Obese Class II")]
    ObeseClassII,
    #[serde(rename = "Obese Class III")]
    ObeseClassIII,
}

impl BmiClassification {
    /// All classes in ascending BMI order
    pub const ALL: [BmiClassification; 8] = [
        BmiClassification::SevereThinness,
        BmiClassification::ModerateThinness,
        BmiClassification::MildThinness,
        BmiClassification::NormalWeight,
        BmiClassification::Overweight,
        BmiClassification::ObeseClassI,
        BmiClassification::ObeseClassII,
        BmiClassification::ObeseClassIII,
    ];

    /// Human-readable label, e.g. "Normal weight"
    pub fn label(&self) -> &'static str {
        match self {
            BmiClassification::SevereThinness => "Severe thinness",
            BmiClassification::ModerateThinness => "Moderate thinness",
            BmiClassification::MildThinness => "Mild thinness",
            BmiClassification::NormalWeight => "Normal weight",
            BmiClassification::Overweight => "Overweight",
            BmiClassification::ObeseClassI => "Obese Class I",
            BmiClassification::ObeseClassII => "Obese Class II",
            BmiClassification::ObeseClassIII => "Obese Class III",
        }
    }

    /// Inclusive lower bound of this class
    pub fn lower_bound(&self) -> f64 {
        match self {
            BmiClassification::SevereThinness => 0.0,
            BmiClassification::ModerateThinness => 16.0,
            BmiClassification::MildThinness => 17.0,
            BmiClassification::NormalWeight => 18.5,
            BmiClassification::Overweight => 25.0,
            BmiClassification::ObeseClassI => 30.0,
            BmiClassification::ObeseClassII => 35.0,
            BmiClassification::ObeseClassIII => 40.0,
        }
    }

    /// Exclusive upper bound, `None` for the open-ended top class
    pub fn upper_bound(&self) -> Option<f64> {
        let next = (*self as usize) + 1;
        Self::ALL.get(next).map(|class| class.lower_bound())
    }
}

impl fmt::Display for BmiClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Compute BMI from weight (kg) and height (m).
///
/// Checks run in a fixed order and the first failure is returned:
/// non-positive weight, non-positive height, weight outside 1-700 kg,
/// height outside 0.30-3.00 m.
pub fn compute_bmi(weight_kg: f64, height_m: f64) -> HealthResult<f64> {
    if weight_kg <= 0.0 {
        return Err(HealthError::invalid_data(
            "weight_kg",
            weight_kg.to_string(),
            "Weight must be positive",
        ));
    }
    if height_m <= 0.0 {
        return Err(HealthError::invalid_data(
            "height_m",
            height_m.to_string(),
            "Height must be positive",
        ));
    }
    if !(WEIGHT_RANGE_KG.0..=WEIGHT_RANGE_KG.1).contains(&weight_kg) {
        return Err(HealthError::invalid_data(
            "weight_kg",
            weight_kg.to_string(),
            "Weight must be within a possible biological range [1-700] kg",
        ));
    }
    if !(HEIGHT_RANGE_M.0..=HEIGHT_RANGE_M.1).contains(&height_m) {
        return Err(HealthError::invalid_data(
            "height_m",
            height_m.to_string(),
            "Height must be within a possible biological range [0.30-3.00] m",
        ));
    }

    let bmi = weight_kg / height_m.powi(2);
    tracing::trace!(weight_kg, height_m, bmi, "computed BMI");
    Ok(bmi)
}

/// Classify a BMI value.
///
/// Negative values are rejected before values above 150.
pub fn classify_bmi(bmi: f64) -> HealthResult<BmiClassification> {
    if bmi < 0.0 {
        return Err(HealthError::invalid_data(
            "bmi",
            bmi.to_string(),
            "BMI cannot be negative",
        ));
    }
    // NaN fails `contains` and lands here too
    if !(0.0..=MAX_BMI).contains(&bmi) {
        return Err(HealthError::invalid_data(
            "bmi",
            bmi.to_string(),
            "BMI must be within a possible biological range [0-150]",
        ));
    }

    let class = if bmi < 16.0 {
        BmiClassification::SevereThinness
    } else if bmi < 17.0 {
        BmiClassification::ModerateThinness
    } else if bmi < 18.5 {
        BmiClassification::MildThinness
    } else if bmi < 25.0 {
        BmiClassification::NormalWeight
    } else if bmi < 30.0 {
        BmiClassification::Overweight
    } else if bmi < 35.0 {
        BmiClassification::ObeseClassI
    } else if bmi < 40.0 {
        BmiClassification::ObeseClassII
    } else {
        BmiClassification::ObeseClassIII
    };
    Ok(class)
}

/// Input parameters for a BMI assessment.
///
/// ## JSON Example
///
/// ```json
/// { "weight_kg": 70.0, "height_m": 1.75 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiInput {
    /// Body weight in kilograms
    pub weight_kg: f64,

    /// Height in meters
    pub height_m: f64,
}

impl BmiInput {
    /// Build an input from unit-typed values. Height may be given in meters
    /// or centimeters.
    pub fn new(weight: Kilograms, height: impl Into<Meters>) -> Self {
        BmiInput {
            weight_kg: weight.0,
            height_m: height.into().0,
        }
    }
}

/// Results from a BMI assessment.
///
/// ## JSON Example
///
/// ```json
/// { "bmi": 22.857, "classification": "Normal weight" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    /// Body mass index (kg/m²)
    pub bmi: KgPerM2,

    /// Class the BMI falls into
    pub classification: BmiClassification,
}

/// Compute and classify BMI in one step.
pub fn calculate(input: &BmiInput) -> HealthResult<BmiResult> {
    let bmi = compute_bmi(input.weight_kg, input.height_m)?;
    let classification = classify_bmi(bmi)?;
    Ok(BmiResult {
        bmi: KgPerM2(bmi),
        classification,
    })
}
