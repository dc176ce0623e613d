//! Gender selector for the ideal body weight formulas.
//!
//! Parsing is case-insensitive. Characters accept `m`/`f`; strings also
//! accept `male`/`female`. Deserialization goes through the same string
//! parser. There is no default.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{HealthError, HealthResult};

const INVALID_GENDER: &str = "Gender must be 'm' or 'f'";

/// Gender used to select an ideal body weight divisor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Gender {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// Normalize a single character, e.g. `'M'` or `'f'`.
    pub fn from_char(c: char) -> HealthResult<Self> {
        match c.to_ascii_uppercase() {
            'M' => Ok(Gender::Male),
            'F' => Ok(Gender::Female),
            _ => Err(HealthError::invalid_data("gender", format!("{c:?}"), INVALID_GENDER)),
        }
    }

    /// Lowercase code used in JSON and on the command line
    pub fn code(&self) -> char {
        match self {
            Gender::Male => 'm',
            Gender::Female => 'f',
        }
    }
}

impl TryFrom<char> for Gender {
    type Error = HealthError;

    fn try_from(c: char) -> HealthResult<Self> {
        Gender::from_char(c)
    }
}

impl TryFrom<String> for Gender {
    type Error = HealthError;

    fn try_from(s: String) -> HealthResult<Self> {
        s.parse()
    }
}

impl FromStr for Gender {
    type Err = HealthError;

    fn from_str(s: &str) -> HealthResult<Self> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Gender::from_char(c);
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(HealthError::invalid_data("gender", s, INVALID_GENDER)),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_is_case_insensitive() {
        assert_eq!(Gender::from_char('m').unwrap(), Gender::Male);
        assert_eq!(Gender::from_char('M').unwrap(), Gender::Male);
        assert_eq!(Gender::from_char('f').unwrap(), Gender::Female);
        assert_eq!(Gender::try_from('F').unwrap(), Gender::Female);
    }

    #[test]
    fn test_invalid_chars() {
        for c in ['x', '1', ' ', 'w'] {
            let err = Gender::from_char(c).unwrap_err();
            assert_eq!(err.message(), INVALID_GENDER);
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("m".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!(" F ".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("Female".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("MALE".parse::<Gender>().unwrap(), Gender::Male);
        assert!("".parse::<Gender>().is_err());
        assert!("mf".parse::<Gender>().is_err());
        assert!("other".parse::<Gender>().is_err());
    }

    #[test]
    fn test_serialization() {
        assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "\"f\"");
        let g: Gender = serde_json::from_str("\"M\"").unwrap();
        assert_eq!(g, Gender::Male);
        assert_eq!(g.code(), 'm');
    }

    #[test]
    fn test_deserialization_matches_from_str() {
        for s in ["m", "M", "male", "Male", "MALE", "f", "F", "female", "Female", "FEMALE"] {
            let json = serde_json::to_string(s).unwrap();
            let from_json: Gender = serde_json::from_str(&json).unwrap();
            assert_eq!(from_json, s.parse::<Gender>().unwrap(), "input {s:?}");
        }
        for s in ["x", "", "mf", "other"] {
            let json = serde_json::to_string(s).unwrap();
            assert!(serde_json::from_str::<Gender>(&json).is_err(), "input {s:?}");
            assert!(s.parse::<Gender>().is_err());
        }
    }
}
