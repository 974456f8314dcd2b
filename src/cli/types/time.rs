//! Season type for upstream league lookups.

use crate::error::{RankingsError, Result};
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Season years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    /// The calendar year on the local clock.
    pub fn current() -> Self {
        Self(chrono::Local::now().year() as u16)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl Default for Season {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = RankingsError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse()
            .map(Self)
            .map_err(|e| RankingsError::malformed(format!("invalid season {s:?}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_parse() {
        assert_eq!("2024".parse::<Season>().unwrap(), Season::new(2024));
        assert!("twenty".parse::<Season>().is_err());
    }

    #[test]
    fn test_default_season_is_current_year() {
        let year = chrono::Local::now().year() as u16;
        assert_eq!(Season::default().as_u16(), year);
    }
}
