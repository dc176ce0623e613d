//! # health_core - Anthropometric Health Metrics
//!
//! `health_core` computes body mass index (BMI), its classification, and
//! ideal body weight (IBW) from weight, height, and gender. Inputs and
//! outputs are JSON-serializable so the engine can sit behind a CLI, a
//! service, or an assistant tool call.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Fail-fast validation**: The first out-of-range input is reported
//! - **Rich Errors**: Structured error values, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use health_core::{classify_bmi, compute_bmi, compute_ibw, Gender};
//!
//! let bmi = compute_bmi(70.0, 1.75).unwrap();
//! assert_eq!(classify_bmi(bmi).unwrap().to_string(), "Normal weight");
//!
//! let ibw = compute_ibw(175.0, Gender::Male).unwrap();
//! assert!((ibw - 68.75).abs() < 0.01);
//! ```
//!
//! ## Modules
//!
//! - [`metrics`] - BMI and IBW calculations
//! - [`calculator`] - The `HealthCalc` trait and its default implementation
//! - [`gender`] - Gender parsing for the IBW formulas
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculator;
pub mod errors;
pub mod gender;
pub mod metrics;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculator::{HealthCalc, HealthCalculator};
pub use errors::{HealthError, HealthResult};
pub use gender::Gender;
pub use metrics::{
    classify_bmi, compute_bmi, compute_ibw, compute_ibw_char, lorenz_ibw, lorenz_ibw_female,
    lorenz_ibw_male, BmiClassification, IbwFormula,
};
