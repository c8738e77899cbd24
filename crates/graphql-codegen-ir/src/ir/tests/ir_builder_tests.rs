use super::field_summary;
use super::hero_location;
use super::summary;
use crate::ir::EntityStorage;
use crate::ir::IrBuildError;
use crate::ir::IrBuilder;
use crate::ir::Location;
use crate::operation::ExecutableDocument;
use crate::operation::OperationKind;
use crate::schema::SchemaBuilder;
use crate::test::star_wars_schema;
use crate::types::TypeAnnotation;
use rayon::prelude::*;
use std::sync::Arc;

const HERO_AND_FRIENDS_SRC: &str = r#"
    query HeroAndFriends {
      hero {
        name
        friends {
          ...CharacterFragment
        }
      }
    }

    fragment CharacterFragment on Character {
      name
      ... on Human {
        ...HumanFragment
      }
    }

    fragment HumanFragment on Human {
      homePlanet
    }
"#;

mod end_to_end {
    use super::*;

    #[test]
    fn hero_and_friends() {
        let schema = star_wars_schema();
        let doc = ExecutableDocument::from_str(None, HERO_AND_FRIENDS_SRC).unwrap();
        let mut builder = IrBuilder::new(&schema, &doc).unwrap();

        let op = builder.build_operation_named("HeroAndFriends").unwrap();

        assert_eq!(
            op.referenced_fragments().keys().collect::<Vec<_>>(),
            vec!["CharacterFragment", "HumanFragment"],
        );
        // Query root, hero, hero.friends
        assert_eq!(op.entities().len(), 3);

        let hero = &op.entities()[&hero_location("HeroAndFriends")];
        assert_eq!(field_summary(hero), summary(&[
            ("friends", "[Character]", &["Character"]),
            ("name", "String!", &["Character"]),
        ]));
        assert!(hero.merged_fragments().is_empty());

        let friends_location = hero_location("HeroAndFriends").appending("friends", "Character");
        let friends = &op.entities()[&friends_location];
        assert_eq!(friends.root_type(), "Character");
        assert_eq!(field_summary(friends), summary(&[
            ("homePlanet", "String", &["Human"]),
            ("name", "String!", &["Character"]),
        ]));
        assert_eq!(
            friends.merged_fragments().iter().collect::<Vec<_>>(),
            vec!["CharacterFragment", "HumanFragment"],
        );
        assert_eq!(
            hero.field("friends").unwrap().entity_location(),
            Some(&friends_location),
        );

        let character_fragment = &op.referenced_fragments()["CharacterFragment"];
        assert!(Arc::ptr_eq(
            &character_fragment.referenced_fragments()["HumanFragment"],
            builder.fragment_registry().get("HumanFragment").unwrap(),
        ));
        assert_eq!(
            field_summary(character_fragment.root_entity()),
            summary(&[
                ("homePlanet", "String", &["Human"]),
                ("name", "String!", &["Character"]),
            ]),
        );
    }

    #[test]
    fn root_field_is_data() {
        let schema = star_wars_schema();
        let doc = ExecutableDocument::from_str(None, HERO_AND_FRIENDS_SRC).unwrap();
        let mut builder = IrBuilder::new(&schema, &doc).unwrap();

        let op = builder.build_operation_named("HeroAndFriends").unwrap();

        let root_field = op.root_field();
        assert_eq!(root_field.response_key(), "data");
        assert_eq!(root_field.field_name(), "data");
        assert_eq!(root_field.type_annotation(), &TypeAnnotation::named("Query", false));
        assert_eq!(root_field.entity_location(), Some(op.root_location()));
        assert_eq!(root_field.entity(op.entities()), Some(op.root_entity()));
        assert_eq!(op.root_entity().root_type(), "Query");
        assert_eq!(op.root_location().to_string(), "Operation(HeroAndFriends)");
    }

    #[test]
    fn mutation_and_subscription_roots() {
        let schema = star_wars_schema();
        let doc = ExecutableDocument::from_str(None, r#"
            mutation Review($review: ReviewInput!) {
              createReview(review: $review) { stars commentary }
            }
            subscription Reviews { reviewAdded { episode } }
        "#).unwrap();
        let mut builder = IrBuilder::new(&schema, &doc).unwrap();

        let mutation = builder.build_operation_named("Review").unwrap();
        assert_eq!(mutation.definition().kind(), OperationKind::Mutation);
        assert_eq!(mutation.root_entity().root_type(), "Mutation");
        let review = &mutation.entities()[
            &Location::operation(Some("Review"), "Mutation").appending("createReview", "Review")
        ];
        assert_eq!(field_summary(review), summary(&[
            ("commentary", "String", &["Review"]),
            ("stars", "Int!", &["Review"]),
        ]));

        let subscription = builder.build_operation_named("Reviews").unwrap();
        assert_eq!(subscription.root_entity().root_type(), "Subscription");
    }

    #[test]
    fn anonymous_query() {
        let schema = star_wars_schema();
        let doc = ExecutableDocument::from_str(None, "{ hero { id } }").unwrap();
        let mut builder = IrBuilder::new(&schema, &doc).unwrap();

        let op = builder.build_operation(&doc.operations()[0]).unwrap();

        assert_eq!(op.name(), None);
        let hero_location = Location::operation(None, "Query").appending("hero", "Character");
        assert_eq!(hero_location.to_string(), "Operation(<anonymous>).hero");
        assert!(op.entities().get(&hero_location).is_some());
    }
}

mod documents {
    use super::*;

    #[test]
    fn build_document_keeps_declaration_order() {
        let schema = star_wars_schema();
        let doc = ExecutableDocument::from_str(None, r#"
            fragment Stars on Review { stars }
            query Hero { hero { name } }
            fragment Name on Character { name }
            query Reviews { reviews(episode: JEDI) { ...Stars } }
        "#).unwrap();
        let mut builder = IrBuilder::new(&schema, &doc).unwrap();

        let ir = builder.build_document().unwrap();

        assert_eq!(
            ir.operations().iter().map(|op| op.name()).collect::<Vec<_>>(),
            vec![Some("Hero"), Some("Reviews")],
        );
        assert_eq!(
            ir.fragments().iter().map(|frag| frag.name()).collect::<Vec<_>>(),
            vec!["Stars", "Name"],
        );
        assert!(Arc::ptr_eq(
            ir.fragment("Stars").unwrap(),
            &ir.operation("Reviews").unwrap().referenced_fragments()["Stars"],
        ));
        assert!(ir.operation("Missing").is_none());
    }

    #[test]
    fn unknown_operation() {
        let schema = star_wars_schema();
        let doc = ExecutableDocument::from_str(None, HERO_AND_FRIENDS_SRC).unwrap();
        let mut builder = IrBuilder::new(&schema, &doc).unwrap();

        assert_eq!(
            builder.build_operation_named("VillainAndFriends").unwrap_err(),
            IrBuildError::UnknownOperation {
                operation_name: "VillainAndFriends".to_string(),
            },
        );
        // Nothing was built, so the builder remains usable.
        assert!(!builder.is_poisoned());
        assert!(builder.build_operation_named("HeroAndFriends").is_ok());
    }

    #[test]
    fn undefined_root_operation_type() {
        let schema = SchemaBuilder::from_str(None, "type Query { greeting: String }")
            .unwrap()
            .build()
            .unwrap();
        let doc = ExecutableDocument::from_str(None, "mutation Greet { greeting }").unwrap();
        let mut builder = IrBuilder::new(&schema, &doc).unwrap();

        assert_eq!(
            builder.build_operation_named("Greet").unwrap_err(),
            IrBuildError::UndefinedRootOperationType {
                operation: OperationKind::Mutation,
            },
        );
    }
}

mod poisoning {
    use super::*;

    #[test]
    fn failed_build_poisons_builder() {
        let schema = star_wars_schema();
        let doc = ExecutableDocument::from_str(None, r#"
            query Broken { hero { wingspan } }
            query Fine { hero { name } }
            fragment Name on Character { name }
        "#).unwrap();
        let mut builder = IrBuilder::new(&schema, &doc).unwrap();

        assert!(matches!(
            builder.build_operation_named("Broken"),
            Err(IrBuildError::UnknownField { .. }),
        ));
        assert!(builder.is_poisoned());

        assert_eq!(
            builder.build_operation_named("Fine").unwrap_err(),
            IrBuildError::BuilderPoisoned,
        );
        assert_eq!(
            builder.build_fragment("Name").unwrap_err(),
            IrBuildError::BuilderPoisoned,
        );
        assert_eq!(builder.build_document().unwrap_err(), IrBuildError::BuilderPoisoned);
    }

    #[test]
    fn fresh_builder_is_unaffected() {
        let schema = star_wars_schema();
        let doc = ExecutableDocument::from_str(None, r#"
            query Broken { hero { wingspan } }
            query Fine { hero { name } }
        "#).unwrap();

        let mut poisoned = IrBuilder::new(&schema, &doc).unwrap();
        assert!(poisoned.build_operation_named("Broken").is_err());

        let mut fresh = IrBuilder::new(&schema, &doc).unwrap();
        assert!(fresh.build_operation_named("Fine").is_ok());
    }
}

#[test]
fn independent_runs_share_one_schema() {
    let schema = star_wars_schema();

    let runs = (0..8)
        .into_par_iter()
        .map(|_| -> Result<EntityStorage, Box<dyn std::error::Error + Send + Sync>> {
            let doc = ExecutableDocument::from_str(None, HERO_AND_FRIENDS_SRC)?;
            let mut builder = IrBuilder::new(&schema, &doc)?;
            let op = builder.build_operation_named("HeroAndFriends")?;
            Ok(op.entities().to_owned())
        })
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    assert_eq!(runs.len(), 8);
    for entities in &runs[1..] {
        assert_eq!(entities, &runs[0]);
    }
}
