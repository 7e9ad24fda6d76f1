//! Team sides
//!
//! Configuration and queries are partitioned by side. `all` is only a query
//! combinator and is never stored on an entry.

use crate::error::ParseSideError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the two playable sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Terrorists
    T,
    /// Counter-terrorists
    CT,
}

impl Side {
    /// Get the side name as used in configuration files
    pub const fn as_str(&self) -> &'static str {
        match self {
            Side::T => "t",
            Side::CT => "ct",
        }
    }

    /// Try to parse a side from its configuration name
    pub fn try_parse(s: &str) -> Option<Self> {
        match s {
            "t" => Some(Side::T),
            "ct" => Some(Side::CT),
            _ => None,
        }
    }

    /// Get both sides
    pub fn all() -> &'static [Side] {
        &[Side::T, Side::CT]
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Side {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Side::try_parse(s).ok_or_else(|| ParseSideError::new(s, "t, ct"))
    }
}

/// Side argument of a permission query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SideQuery {
    /// A single side
    Side(Side),
    /// Authority over both sides at once
    All,
}

impl SideQuery {
    pub const fn as_str(&self) -> &'static str {
        match self {
            SideQuery::Side(side) => side.as_str(),
            SideQuery::All => "all",
        }
    }

    /// Sides covered by this query
    pub fn sides(&self) -> &'static [Side] {
        match self {
            SideQuery::Side(Side::T) => &[Side::T],
            SideQuery::Side(Side::CT) => &[Side::CT],
            SideQuery::All => Side::all(),
        }
    }
}

impl From<Side> for SideQuery {
    fn from(side: Side) -> Self {
        SideQuery::Side(side)
    }
}

impl fmt::Display for SideQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SideQuery {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(SideQuery::All);
        }
        Side::try_parse(s)
            .map(SideQuery::Side)
            .ok_or_else(|| ParseSideError::new(s, "t, ct, all"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_roundtrip() {
        for side in Side::all() {
            let parsed: Side = side.as_str().parse().unwrap();
            assert_eq!(*side, parsed);
        }
    }

    #[test]
    fn test_side_is_case_sensitive() {
        assert!(Side::try_parse("T").is_none());
        assert!(Side::try_parse("CT").is_none());
    }

    #[test]
    fn test_side_rejects_all() {
        let err = "all".parse::<Side>().unwrap_err();
        assert_eq!(err.input, "all");
    }

    #[test]
    fn test_side_query_parse() {
        assert_eq!("all".parse::<SideQuery>().unwrap(), SideQuery::All);
        assert_eq!(
            "t".parse::<SideQuery>().unwrap(),
            SideQuery::Side(Side::T)
        );
        assert_eq!(
            "ct".parse::<SideQuery>().unwrap(),
            SideQuery::Side(Side::CT)
        );
        assert!("spectator".parse::<SideQuery>().is_err());
    }

    #[test]
    fn test_side_query_sides() {
        assert_eq!(SideQuery::All.sides(), &[Side::T, Side::CT]);
        assert_eq!(SideQuery::from(Side::CT).sides(), &[Side::CT]);
    }

    #[test]
    fn test_deserialize_side() {
        let side: Side = serde_json::from_str(r#""ct""#).unwrap();
        assert_eq!(side, Side::CT);
    }
}
