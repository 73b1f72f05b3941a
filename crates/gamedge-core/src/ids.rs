//! Identifier types for gamedge.
//!
//! IGDB and GameSpot identify every record with a positive integer. These
//! newtypes keep game, company and article identifiers from being mixed up and
//! give them a fixed-width big-endian encoding for storage keys.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Errors that can occur when parsing or decoding identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    /// The string is not a valid unsigned integer.
    #[error("invalid numeric identifier: {0}")]
    InvalidNumber(String),

    /// The byte slice has the wrong length.
    #[error("invalid length: expected {expected} bytes, got {got}")]
    InvalidLength {
        /// Expected number of bytes.
        expected: usize,
        /// Actual number of bytes.
        got: usize,
    },
}

/// Decode a big-endian `u64` from exactly eight bytes.
fn u64_from_be_slice(bytes: &[u8]) -> Result<u64, IdError> {
    let arr: [u8; 8] = bytes.try_into().map_err(|_| IdError::InvalidLength {
        expected: 8,
        got: bytes.len(),
    })?;
    Ok(u64::from_be_bytes(arr))
}

/// A game identifier, as assigned by IGDB.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(u64);

impl GameId {
    /// Create a new `GameId` from its numeric value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Return the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Encode the identifier as 8 big-endian bytes.
    ///
    /// Big-endian keeps byte order equal to numeric order.
    #[must_use]
    pub const fn to_be_bytes(self) -> [u8; 8] {
        self.0.to_be_bytes()
    }

    /// Decode an identifier from 8 big-endian bytes.
    ///
    /// # Errors
    ///
    /// Returns `IdError::InvalidLength` if the slice is not exactly 8 bytes.
    pub fn from_be_slice(bytes: &[u8]) -> Result<Self, IdError> {
        u64_from_be_slice(bytes).map(Self)
    }
}

impl fmt::Debug for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GameId({})", self.0)
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GameId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| IdError::InvalidNumber(s.to_string()))
    }
}

impl From<u64> for GameId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A company identifier, as assigned by IGDB.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyId(u64);

impl CompanyId {
    /// Create a new `CompanyId` from its numeric value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Return the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CompanyId({})", self.0)
    }
}

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CompanyId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| IdError::InvalidNumber(s.to_string()))
    }
}

impl From<u64> for CompanyId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A news article identifier, as assigned by GameSpot.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(u64);

impl ArticleId {
    /// Create a new `ArticleId` from its numeric value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Return the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Encode the identifier as 8 big-endian bytes.
    #[must_use]
    pub const fn to_be_bytes(self) -> [u8; 8] {
        self.0.to_be_bytes()
    }
}

impl fmt::Debug for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArticleId({})", self.0)
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ArticleId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| IdError::InvalidNumber(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_id_parse() {
        let id: GameId = "1942".parse().unwrap();
        assert_eq!(id.get(), 1942);
        assert_eq!(id.to_string(), "1942");
        assert_eq!(format!("{id:?}"), "GameId(1942)");
    }

    #[test]
    fn game_id_parse_rejects_garbage() {
        let result = "witcher".parse::<GameId>();
        assert_eq!(
            result,
            Err(IdError::InvalidNumber("witcher".to_string()))
        );
        assert!("-5".parse::<GameId>().is_err());
    }

    #[test]
    fn game_id_bytes_preserve_order() {
        let small = GameId::new(255);
        let large = GameId::new(256);
        assert!(small.to_be_bytes() < large.to_be_bytes());

        let decoded = GameId::from_be_slice(&large.to_be_bytes()).unwrap();
        assert_eq!(decoded, large);
    }

    #[test]
    fn game_id_from_short_slice() {
        let result = GameId::from_be_slice(&[0, 1, 2]);
        assert_eq!(
            result,
            Err(IdError::InvalidLength {
                expected: 8,
                got: 3
            })
        );
    }

    #[test]
    fn ids_serialize_as_numbers() {
        let json = serde_json::to_string(&GameId::new(7)).unwrap();
        assert_eq!(json, "7");

        let company: CompanyId = serde_json::from_str("70").unwrap();
        assert_eq!(company, CompanyId::new(70));
    }

    #[test]
    fn article_id_parse() {
        let id: ArticleId = " 1100006173 ".parse().unwrap();
        assert_eq!(id.get(), 1_100_006_173);
        assert_eq!(format!("{id:?}"), "ArticleId(1100006173)");
        assert!("news".parse::<ArticleId>().is_err());
    }
}
