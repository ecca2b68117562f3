//! Closed field enumerations for the identifier wire format.
//!
//! Every field embedded in an identifier is a closed set at the type level.
//! The short uppercase wire tags are a serialization concern handled by
//! `as_tag`/`from_tag`; tag matching is exact (no case folding).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::IdError;

/// The category of real-world thing an identifier denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    /// A natural person (guest, staff member, payee).
    Individual,
    /// A lodging property (hotel, guesthouse, campsite).
    Property,
    /// A company or other legal entity.
    Organization,
}

impl EntityType {
    /// All entity types, in wire-tag order.
    pub const ALL: [Self; 3] = [Self::Individual, Self::Property, Self::Organization];

    /// Returns the three-letter wire tag.
    #[must_use]
    pub const fn as_tag(&self) -> &'static str {
        match self {
            Self::Individual => "IND",
            Self::Property => "PTY",
            Self::Organization => "ORG",
        }
    }

    /// Parses a wire tag.
    pub fn from_tag(tag: &str) -> Result<Self, IdError> {
        match tag {
            "IND" => Ok(Self::Individual),
            "PTY" => Ok(Self::Property),
            "ORG" => Ok(Self::Organization),
            other => Err(IdError::UnknownEntityType(other.to_string())),
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl FromStr for EntityType {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s)
    }
}

/// The sub-product an identifier was minted under.
///
/// The same real-world entity can hold one identifier per project; all of
/// them share every field except this one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Project {
    /// Buffr Host (hospitality management).
    Host,
    /// Buffr Pay (payments and disbursements).
    Pay,
    /// Buffr Lend (credit products).
    Lend,
}

impl Project {
    /// All projects, in wire-tag order.
    pub const ALL: [Self; 3] = [Self::Host, Self::Pay, Self::Lend];

    /// Returns the wire tag.
    #[must_use]
    pub const fn as_tag(&self) -> &'static str {
        match self {
            Self::Host => "HOST",
            Self::Pay => "PAY",
            Self::Lend => "LEND",
        }
    }

    /// Parses a wire tag.
    pub fn from_tag(tag: &str) -> Result<Self, IdError> {
        match tag {
            "HOST" => Ok(Self::Host),
            "PAY" => Ok(Self::Pay),
            "LEND" => Ok(Self::Lend),
            other => Err(IdError::UnknownProject(other.to_string())),
        }
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl FromStr for Project {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s)
    }
}

/// A market the platform operates in, tagged with its two-letter
/// ISO 3166-1 code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Country {
    /// Namibia.
    Namibia,
    /// South Africa.
    SouthAfrica,
    /// Botswana.
    Botswana,
    /// Zambia.
    Zambia,
}

impl Country {
    /// All supported markets, in wire-tag order.
    pub const ALL: [Self; 4] = [
        Self::Namibia,
        Self::SouthAfrica,
        Self::Botswana,
        Self::Zambia,
    ];

    /// Returns the two-letter country code.
    #[must_use]
    pub const fn as_tag(&self) -> &'static str {
        match self {
            Self::Namibia => "NA",
            Self::SouthAfrica => "ZA",
            Self::Botswana => "BW",
            Self::Zambia => "ZM",
        }
    }

    /// Parses a two-letter country code. Only supported markets are
    /// recognized.
    pub fn from_tag(tag: &str) -> Result<Self, IdError> {
        match tag {
            "NA" => Ok(Self::Namibia),
            "ZA" => Ok(Self::SouthAfrica),
            "BW" => Ok(Self::Botswana),
            "ZM" => Ok(Self::Zambia),
            other => Err(IdError::UnknownCountry(other.to_string())),
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl FromStr for Country {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s)
    }
}
