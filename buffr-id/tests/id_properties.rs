//! Property-based tests for the identifier grammar.
//!
//! These pin the two guarantees callers rely on:
//! - every identifier assembled from valid components round-trips exactly
//!   through its string form
//! - parsing is total: no input panics, and nothing without the proper
//!   prefix ever validates

use buffr_id::{same_entity, BuffrId, Country, EntityType, Project};
use proptest::prelude::*;

fn entity_type_strategy() -> impl Strategy<Value = EntityType> {
    prop_oneof![
        Just(EntityType::Individual),
        Just(EntityType::Property),
        Just(EntityType::Organization),
    ]
}

fn project_strategy() -> impl Strategy<Value = Project> {
    prop_oneof![Just(Project::Host), Just(Project::Pay), Just(Project::Lend)]
}

fn country_strategy() -> impl Strategy<Value = Country> {
    prop_oneof![
        Just(Country::Namibia),
        Just(Country::SouthAfrica),
        Just(Country::Botswana),
        Just(Country::Zambia),
    ]
}

fn opaque_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[0-9A-F]{8}").unwrap()
}

fn seed_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9@. _-]{0,48}").unwrap()
}

proptest! {
    /// Any identifier assembled from valid components survives a
    /// string round-trip unchanged.
    #[test]
    fn from_parts_roundtrips(
        entity_type in entity_type_strategy(),
        project in project_strategy(),
        country in country_strategy(),
        opaque in opaque_strategy(),
        timestamp in 0i64..4_102_444_800,
    ) {
        let id = BuffrId::from_parts(entity_type, project, country, opaque, timestamp).unwrap();
        let parsed = BuffrId::parse(&id.to_string()).unwrap();
        prop_assert_eq!(parsed, id);
    }

    /// Generated identifiers validate and re-parse to the generator's
    /// inputs.
    #[test]
    fn generate_roundtrips(
        entity_type in entity_type_strategy(),
        project in project_strategy(),
        country in country_strategy(),
        seed in seed_strategy(),
    ) {
        let id = BuffrId::generate(entity_type, project, country, &seed);
        let rendered = id.to_string();
        prop_assert!(BuffrId::is_valid(&rendered));
        let parsed = BuffrId::parse(&rendered).unwrap();
        prop_assert_eq!(parsed.entity_type(), entity_type);
        prop_assert_eq!(parsed.project(), project);
        prop_assert_eq!(parsed.country(), country);
        prop_assert_eq!(parsed.opaque(), id.opaque());
        prop_assert_eq!(parsed.timestamp_secs(), id.timestamp_secs());
    }

    /// The opaque segment is a pure function of the seed.
    #[test]
    fn opaque_is_deterministic_in_seed(
        entity_type in entity_type_strategy(),
        country in country_strategy(),
        seed in seed_strategy(),
    ) {
        let a = BuffrId::generate(entity_type, Project::Host, country, &seed);
        let b = BuffrId::generate(entity_type, Project::Pay, country, &seed);
        prop_assert_eq!(a.opaque(), b.opaque());
    }

    /// Reprojection never breaks entity linkage, in either direction.
    #[test]
    fn reprojection_preserves_entity(
        entity_type in entity_type_strategy(),
        project in project_strategy(),
        new_project in project_strategy(),
        country in country_strategy(),
        opaque in opaque_strategy(),
        timestamp in 0i64..4_102_444_800,
    ) {
        let id = BuffrId::from_parts(entity_type, project, country, opaque, timestamp).unwrap();
        let other = id.reprojected(new_project);
        prop_assert!(id.same_entity(&other));
        prop_assert!(same_entity(&id.to_string(), &other.to_string()));
    }

    /// Parsing is total: arbitrary input never panics, and anything that
    /// does not start with the identifier prefix never validates.
    #[test]
    fn parse_is_total(input in "\\PC*") {
        let _ = BuffrId::parse(&input);
        if !input.starts_with("BFR") {
            prop_assert!(!BuffrId::is_valid(&input));
        }
    }
}
