//! Identifier generation, parsing, and comparison.
//!
//! Identifiers use the format: `BFR-<ENTITY>-<PROJECT>-<COUNTRY>-<OPAQUE>-<TIMESTAMP>`
//!
//! - `BFR`: fixed prefix
//! - entity/project/country: closed wire tags (see [`crate::fields`])
//! - opaque: eight uppercase hex characters derived from a seed value,
//!   disambiguating same-second mints
//! - timestamp: minting instant as decimal Unix seconds
//!
//! Parsing is strict and total: any deviation from the grammar yields a
//! typed error, never a panic. There is no uniqueness guarantee beyond the
//! spread of the opaque segment.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

use crate::error::{IdError, IdResult};
use crate::fields::{Country, EntityType, Project};

/// Fixed prefix every identifier starts with.
pub const ID_PREFIX: &str = "BFR";

/// Field delimiter in the wire format.
pub const ID_DELIMITER: char = '-';

/// Length of the opaque segment in characters.
pub const OPAQUE_LEN: usize = 8;

/// A parsed Buffr identifier.
///
/// Construct via [`BuffrId::generate`], [`BuffrId::mint`], or
/// [`BuffrId::parse`]. The canonical string form is available through
/// `Display` and round-trips exactly through `parse`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BuffrId {
    entity_type: EntityType,
    project: Project,
    country: Country,
    opaque: String,
    timestamp_secs: i64,
}

impl BuffrId {
    /// Generates an identifier, deriving the opaque segment from `seed` and
    /// stamping the current UTC second.
    ///
    /// The same seed always yields the same opaque segment, so identifiers
    /// minted from one seed under different projects stay linkable via
    /// [`BuffrId::same_entity`].
    #[must_use]
    pub fn generate(
        entity_type: EntityType,
        project: Project,
        country: Country,
        seed: &str,
    ) -> Self {
        Self {
            entity_type,
            project,
            country,
            opaque: derive_opaque(seed),
            timestamp_secs: Utc::now().timestamp(),
        }
    }

    /// Generates an identifier with a random seed, for entities that have no
    /// natural seed value.
    #[must_use]
    pub fn mint(entity_type: EntityType, project: Project, country: Country) -> Self {
        let seed = uuid::Uuid::new_v4().to_string();
        Self::generate(entity_type, project, country, &seed)
    }

    /// Assembles an identifier from already-validated components.
    ///
    /// # Errors
    ///
    /// Returns an error if the opaque segment is not exactly eight uppercase
    /// hex characters or the timestamp is negative.
    pub fn from_parts(
        entity_type: EntityType,
        project: Project,
        country: Country,
        opaque: impl Into<String>,
        timestamp_secs: i64,
    ) -> IdResult<Self> {
        let opaque = opaque.into();
        if !is_opaque_segment(&opaque) {
            return Err(IdError::MalformedOpaque(opaque));
        }
        if timestamp_secs < 0 {
            return Err(IdError::MalformedTimestamp(timestamp_secs.to_string()));
        }
        Ok(Self {
            entity_type,
            project,
            country,
            opaque,
            timestamp_secs,
        })
    }

    /// Parses an identifier from its canonical string form.
    ///
    /// Total over strings: never panics, and every malformed input maps to a
    /// specific [`IdError`].
    pub fn parse(candidate: &str) -> IdResult<Self> {
        let parts: Vec<&str> = candidate.split(ID_DELIMITER).collect();
        if parts.len() != 6 {
            return Err(IdError::FieldCount(parts.len()));
        }
        if parts[0] != ID_PREFIX {
            return Err(IdError::InvalidPrefix(parts[0].to_string()));
        }

        let entity_type = EntityType::from_tag(parts[1])?;
        let project = Project::from_tag(parts[2])?;
        let country = Country::from_tag(parts[3])?;

        let opaque = parts[4];
        if !is_opaque_segment(opaque) {
            return Err(IdError::MalformedOpaque(opaque.to_string()));
        }

        let ts = parts[5];
        if ts.is_empty() || !ts.bytes().all(|b| b.is_ascii_digit()) {
            return Err(IdError::MalformedTimestamp(ts.to_string()));
        }
        let timestamp_secs: i64 = ts
            .parse()
            .map_err(|_| IdError::MalformedTimestamp(ts.to_string()))?;

        Ok(Self {
            entity_type,
            project,
            country,
            opaque: opaque.to_string(),
            timestamp_secs,
        })
    }

    /// Returns true when `candidate` matches the identifier grammar exactly.
    #[must_use]
    pub fn is_valid(candidate: &str) -> bool {
        Self::parse(candidate).is_ok()
    }

    /// Returns true when `other` denotes the same underlying entity: every
    /// field except the project matches.
    #[must_use]
    pub fn same_entity(&self, other: &Self) -> bool {
        self.entity_type == other.entity_type
            && self.country == other.country
            && self.opaque == other.opaque
            && self.timestamp_secs == other.timestamp_secs
    }

    /// Returns the same identifier minted under another sub-product.
    #[must_use]
    pub fn reprojected(&self, new_project: Project) -> Self {
        Self {
            project: new_project,
            ..self.clone()
        }
    }

    /// Returns the entity type.
    #[must_use]
    pub const fn entity_type(&self) -> EntityType {
        self.entity_type
    }

    /// Returns the project the identifier was minted under.
    #[must_use]
    pub const fn project(&self) -> Project {
        self.project
    }

    /// Returns the market.
    #[must_use]
    pub const fn country(&self) -> Country {
        self.country
    }

    /// Returns the opaque segment.
    #[must_use]
    pub fn opaque(&self) -> &str {
        &self.opaque
    }

    /// Returns the minting instant as Unix seconds.
    #[must_use]
    pub const fn timestamp_secs(&self) -> i64 {
        self.timestamp_secs
    }

    /// Returns the minting instant, or `None` if the stored seconds fall
    /// outside chrono's representable range.
    #[must_use]
    pub fn minted_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.timestamp_secs, 0)
    }
}

impl fmt::Display for BuffrId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{ID_PREFIX}{ID_DELIMITER}{}{ID_DELIMITER}{}{ID_DELIMITER}{}{ID_DELIMITER}{}{ID_DELIMITER}{}",
            self.entity_type.as_tag(),
            self.project.as_tag(),
            self.country.as_tag(),
            self.opaque,
            self.timestamp_secs
        )
    }
}

impl FromStr for BuffrId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for BuffrId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BuffrId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Returns true when both strings parse and denote the same entity,
/// ignoring the project field. False when either side is invalid.
#[must_use]
pub fn same_entity(a: &str, b: &str) -> bool {
    match (BuffrId::parse(a), BuffrId::parse(b)) {
        (Ok(a), Ok(b)) => a.same_entity(&b),
        _ => false,
    }
}

/// Re-serializes `id` under another project, preserving every other field.
///
/// # Errors
///
/// Returns an error when `id` is not a valid identifier.
pub fn reproject(id: &str, new_project: Project) -> IdResult<BuffrId> {
    Ok(BuffrId::parse(id)?.reprojected(new_project))
}

/// Derives the fixed-length opaque segment from a seed value: the first
/// four bytes of `SHA-256(seed)`, hex-encoded uppercase.
fn derive_opaque(seed: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(seed.as_bytes());
    let digest = hasher.finalize();
    digest[..OPAQUE_LEN / 2]
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect()
}

/// Returns true when `s` is exactly eight uppercase hex characters.
fn is_opaque_segment(s: &str) -> bool {
    s.len() == OPAQUE_LEN
        && s.bytes()
            .all(|b| b.is_ascii_digit() || (b'A'..=b'F').contains(&b))
}
