//! # Ideal Body Weight
//!
//! Two linear formulas of the form `(h - 100) - (h - 150) / k`, height `h`
//! in centimeters:
//!
//! | Formula    | Male k | Female k | Height check      |
//! |------------|--------|----------|-------------------|
//! | `Standard` | 4      | 2        | 30 cm ≤ h ≤ 300 cm |
//! | `Lorenz`   | 4      | 2.5      | h > 0             |
//!
//! The female divisors differ: 2 for `Standard`, 2.5 for the published Lorenz
//! formula. They give different weights for the same input (180 cm: 65 kg vs
//! 68 kg), so the two formulas are separate and neither replaces the other.
//!
//! ## Example
//!
//! ```rust
//! use health_core::gender::Gender;
//! use health_core::metrics::ibw::{compute_ibw, lorenz_ibw_female};
//!
//! let male = compute_ibw(175.0, Gender::Male).unwrap();
//! assert!((male - 68.75).abs() < 0.01);
//!
//! let female = lorenz_ibw_female(165.0).unwrap();
//! assert!((female - 59.0).abs() < 0.01);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{HealthError, HealthResult};
use crate::gender::Gender;
use crate::units::Kilograms;

/// Accepted height range in centimeters for the standard formula (inclusive)
pub const HEIGHT_RANGE_CM: (f64, f64) = (30.0, 300.0);

/// Which ideal body weight formula to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IbwFormula {
    /// Divisors 4 (male) / 2 (female), height bounded to 30-300 cm
    #[default]
    Standard,
    /// Divisors 4 (male) / 2.5 (female), height only required to be positive
    Lorenz,
}

impl IbwFormula {
    /// Divisor applied to `(h - 150)` for the given gender
    pub fn divisor(&self, gender: Gender) -> f64 {
        match (self, gender) {
            (_, Gender::Male) => 4.0,
            (IbwFormula::Standard, Gender::Female) => 2.0,
            (IbwFormula::Lorenz, Gender::Female) => 2.5,
        }
    }
}

impl fmt::Display for IbwFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IbwFormula::Standard => write!(f, "standard"),
            IbwFormula::Lorenz => write!(f, "lorenz"),
        }
    }
}

fn linear_ibw(height_cm: f64, divisor: f64) -> f64 {
    (height_cm - 100.0) - ((height_cm - 150.0) / divisor)
}

/// Ideal body weight (kg) with divisors 4 (male) / 2 (female).
///
/// Height must lie within 30-300 cm.
pub fn compute_ibw(height_cm: f64, gender: Gender) -> HealthResult<f64> {
    check_height_range(height_cm)?;
    Ok(standard_ibw(height_cm, gender))
}

/// Same as [`compute_ibw`] but takes the raw gender character.
///
/// Height is validated before gender.
pub fn compute_ibw_char(height_cm: f64, gender: char) -> HealthResult<f64> {
    check_height_range(height_cm)?;
    let gender = Gender::from_char(gender)?;
    Ok(standard_ibw(height_cm, gender))
}

fn standard_ibw(height_cm: f64, gender: Gender) -> f64 {
    let ibw = linear_ibw(height_cm, IbwFormula::Standard.divisor(gender));
    tracing::trace!(height_cm, %gender, ibw, "computed IBW");
    ibw
}

fn check_height_range(height_cm: f64) -> HealthResult<()> {
    if !(HEIGHT_RANGE_CM.0..=HEIGHT_RANGE_CM.1).contains(&height_cm) {
        return Err(HealthError::invalid_data(
            "height_cm",
            height_cm.to_string(),
            "Height must be within a possible biological range [30-300] cm",
        ));
    }
    Ok(())
}

fn check_height_positive(height_cm: f64) -> HealthResult<()> {
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return Err(HealthError::invalid_data(
            "height_cm",
            height_cm.to_string(),
            "Height must be positive",
        ));
    }
    Ok(())
}

/// Lorenz ideal body weight for men: `(h - 100) - (h - 150) / 4`.
pub fn lorenz_ibw_male(height_cm: f64) -> HealthResult<f64> {
    check_height_positive(height_cm)?;
    Ok(linear_ibw(height_cm, IbwFormula::Lorenz.divisor(Gender::Male)))
}

/// Lorenz ideal body weight for women: `(h - 100) - (h - 150) / 2.5`.
pub fn lorenz_ibw_female(height_cm: f64) -> HealthResult<f64> {
    check_height_positive(height_cm)?;
    Ok(linear_ibw(height_cm, IbwFormula::Lorenz.divisor(Gender::Female)))
}

/// Lorenz ideal body weight, dispatching on gender.
pub fn lorenz_ibw(height_cm: f64, gender: Gender) -> HealthResult<f64> {
    match gender {
        Gender::Male => lorenz_ibw_male(height_cm),
        Gender::Female => lorenz_ibw_female(height_cm),
    }
}

/// Input parameters for an ideal body weight calculation.
///
/// ## JSON Example
///
/// ```json
/// { "height_cm": 175.0, "gender": "m", "formula": "lorenz" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IbwInput {
    /// Height in centimeters
    pub height_cm: f64,

    pub gender: Gender,

    /// Defaults to the standard formula when omitted
    #[serde(default)]
    pub formula: IbwFormula,
}

/// Results from an ideal body weight calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IbwResult {
    /// Ideal body weight (kg). Not range-checked.
    pub ibw: Kilograms,
    pub gender: Gender,
    pub formula: IbwFormula,
}

/// Run the formula selected in `input`.
pub fn calculate(input: &IbwInput) -> HealthResult<IbwResult> {
    let ibw = match input.formula {
        IbwFormula::Standard => compute_ibw(input.height_cm, input.gender)?,
        IbwFormula::Lorenz => lorenz_ibw(input.height_cm, input.gender)?,
    };
    Ok(IbwResult {
        ibw: Kilograms(ibw),
        gender: input.gender,
        formula: input.formula,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEIGHTS: [f64; 5] = [165.0, 170.0, 180.0, 190.0, 201.0];

    #[test]
    fn test_standard_male() {
        assert!((compute_ibw(175.0, Gender::Male).unwrap() - 68.75).abs() < 0.01);
        for h in HEIGHTS {
            let expected = (h - 100.0) - ((h - 150.0) / 4.0);
            assert!((compute_ibw_char(h, 'm').unwrap() - expected).abs() < 0.01);
        }
    }

    #[test]
    fn test_standard_female_uses_divisor_two() {
        assert!((compute_ibw(165.0, Gender::Female).unwrap() - 57.5).abs() < 0.01);
        for h in HEIGHTS {
            let expected = (h - 100.0) - ((h - 150.0) / 2.0);
            assert!((compute_ibw_char(h, 'f').unwrap() - expected).abs() < 0.01);
        }
    }

    #[test]
    fn test_gender_case_does_not_matter() {
        assert_eq!(compute_ibw_char(170.0, 'M').unwrap(), compute_ibw_char(170.0, 'm').unwrap());
        assert_eq!(compute_ibw_char(170.0, 'F').unwrap(), compute_ibw_char(170.0, 'f').unwrap());
    }

    #[test]
    fn test_invalid_gender() {
        for c in ['x', '1', ' '] {
            let err = compute_ibw_char(170.0, c).unwrap_err();
            assert_eq!(err.message(), "Gender must be 'm' or 'f'");
        }
    }

    #[test]
    fn test_char_entry_point_matches_typed_entry_point() {
        for (c, gender) in [('m', Gender::Male), ('F', Gender::Female)] {
            for h in [30.0, 150.0, 201.0, 300.0] {
                assert_eq!(compute_ibw_char(h, c).unwrap(), compute_ibw(h, gender).unwrap());
            }
        }
        assert_eq!(
            compute_ibw_char(301.0, 'm').unwrap_err().message(),
            "Height must be within a possible biological range [30-300] cm"
        );
    }

    #[test]
    fn test_formula_display_is_lowercase() {
        assert_eq!(IbwFormula::Standard.to_string(), "standard");
        assert_eq!(IbwFormula::Lorenz.to_string(), "lorenz");
        // Display matches the serde name
        for formula in [IbwFormula::Standard, IbwFormula::Lorenz] {
            let json = serde_json::to_string(&formula).unwrap();
            assert_eq!(json, format!("\"{formula}\""));
        }
    }

    #[test]
    fn test_height_checked_before_gender() {
        let err = compute_ibw_char(29.0, 'x').unwrap_err();
        assert_eq!(err.field(), "height_cm");
    }

    #[test]
    fn test_standard_height_bounds() {
        for gender in Gender::ALL {
            assert!(compute_ibw(30.0, gender).is_ok());
            assert!(compute_ibw(300.0, gender).is_ok());
            for h in [-100.0, 0.0, 29.0, 29.99, 300.01, 301.0, f64::NAN] {
                let err = compute_ibw(h, gender).unwrap_err();
                assert_eq!(
                    err.message(),
                    "Height must be within a possible biological range [30-300] cm"
                );
            }
        }
    }

    #[test]
    fn test_lorenz_formulas() {
        assert!((lorenz_ibw_female(165.0).unwrap() - 59.0).abs() < 0.01);
        assert!((lorenz_ibw_male(175.0).unwrap() - 68.75).abs() < 0.01);
        for h in HEIGHTS {
            let male = (h - 100.0) - ((h - 150.0) / 4.0);
            let female = (h - 100.0) - ((h - 150.0) / 2.5);
            assert!((lorenz_ibw(h, Gender::Male).unwrap() - male).abs() < 0.01);
            assert!((lorenz_ibw(h, Gender::Female).unwrap() - female).abs() < 0.01);
        }
    }

    #[test]
    fn test_female_divisors_stay_distinct() {
        let standard = compute_ibw(180.0, Gender::Female).unwrap();
        let lorenz = lorenz_ibw_female(180.0).unwrap();
        // 80 - 15 = 65 vs 80 - 12 = 68
        assert!((standard - 65.0).abs() < 0.01);
        assert!((lorenz - 68.0).abs() < 0.01);
    }

    #[test]
    fn test_lorenz_height_must_be_positive() {
        for h in [0.0, -1.0, -170.0, f64::NAN, f64::INFINITY] {
            assert_eq!(lorenz_ibw_male(h).unwrap_err().message(), "Height must be positive");
            assert_eq!(lorenz_ibw_female(h).unwrap_err().message(), "Height must be positive");
        }
        // No upper bound on this form
        assert!(lorenz_ibw_male(400.0).is_ok());
        assert!(lorenz_ibw_female(10.0).is_ok());
    }

    #[test]
    fn test_calculate_dispatches_on_formula() {
        let mut input = IbwInput {
            height_cm: 190.0,
            gender: Gender::Female,
            formula: IbwFormula::Standard,
        };
        let standard = calculate(&input).unwrap();
        assert!((standard.ibw.0 - 70.0).abs() < 0.01);

        input.formula = IbwFormula::Lorenz;
        let lorenz = calculate(&input).unwrap();
        assert!((lorenz.ibw.0 - 74.0).abs() < 0.01);
        assert_eq!(lorenz.formula, IbwFormula::Lorenz);
    }

    #[test]
    fn test_input_deserialization() {
        let input: IbwInput = serde_json::from_str(r#"{"height_cm": 175.0, "gender": "M"}"#).unwrap();
        assert_eq!(input.gender, Gender::Male);
        assert_eq!(input.formula, IbwFormula::Standard);

        let input: IbwInput =
            serde_json::from_str(r#"{"height_cm": 175.0, "gender": "f", "formula": "lorenz"}"#).unwrap();
        assert_eq!(input.formula, IbwFormula::Lorenz);

        let input: IbwInput = serde_json::from_str(r#"{"height_cm": 175.0, "gender": "Male"}"#).unwrap();
        assert_eq!(input.gender, Gender::Male);
    }
}
