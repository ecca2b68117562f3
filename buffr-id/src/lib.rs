//! Structured entity identifiers for the Buffr platform.
//!
//! A Buffr ID is a delimited string token embedding:
//! - the entity type (individual, property, organization)
//! - the sub-product it was minted under (Host, Pay, Lend)
//! - the market the entity belongs to
//! - an opaque segment disambiguating same-second mints
//! - the minting instant, to the second
//!
//! The same real-world entity may hold one identifier per sub-product.
//! Identifiers that differ only in the project field denote the same entity
//! and remain linkable via [`BuffrId::same_entity`] or [`reproject`].
//!
//! All operations over candidate strings are total: malformed input yields
//! a typed error or `false`, never a panic, since these run inline in
//! request-handling code.

mod error;
mod fields;
mod id;

pub use error::{IdError, IdResult};
pub use fields::{Country, EntityType, Project};
pub use id::{reproject, same_entity, BuffrId, ID_DELIMITER, ID_PREFIX, OPAQUE_LEN};
