//! # Health Metrics
//!
//! Each metric follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, HealthError>` - Pure calculation function
//!
//! plus plain `f64` entry points for callers that don't need the records.
//!
//! ## Available Metrics
//!
//! - [`bmi`] - Body mass index and its classification
//! - [`ibw`] - Ideal body weight (standard and Lorenz formulas)

pub mod bmi;
pub mod ibw;

// Re-export commonly used types
pub use bmi::{classify_bmi, compute_bmi, BmiClassification, BmiInput, BmiResult};
pub use ibw::{
    compute_ibw, compute_ibw_char, lorenz_ibw, lorenz_ibw_female, lorenz_ibw_male, IbwFormula,
    IbwInput, IbwResult,
};
