use super::build_first_operation;
use super::field_summary;
use super::hero_location;
use super::summary;
use crate::ir::IrBuildError;
use crate::ir::Location;
use crate::test::star_wars_schema;
use crate::types::TypeAnnotation;
use proptest::prelude::*;
use std::collections::HashSet;

mod bijection {
    use super::*;

    #[test]
    fn repeated_selections_reuse_one_entity() {
        let schema = star_wars_schema();
        let op = build_first_operation(&schema, r#"
            query Q {
              hero { name }
              hero { id }
              hero { ... on Human { homePlanet } }
            }
        "#).unwrap();

        // Query root + hero
        assert_eq!(op.entities().len(), 2);
        let hero = &op.entities()[&hero_location("Q")];
        assert_eq!(field_summary(hero), summary(&[
            ("homePlanet", "String", &["Human"]),
            ("id", "ID!", &["Character"]),
            ("name", "String!", &["Character"]),
        ]));

        let root_field = op.root_entity().field("hero").unwrap();
        assert_eq!(root_field.entity(op.entities()), Some(hero));
    }

    #[test]
    fn aliases_create_distinct_locations() {
        let schema = star_wars_schema();
        let op = build_first_operation(&schema, r#"
            query Q {
              hero { name }
              leader: hero { id }
            }
        "#).unwrap();

        assert_eq!(op.entities().len(), 3);
        let leader_location =
            Location::operation(Some("Q"), "Query").appending("leader", "Character");
        let leader = &op.entities()[&leader_location];
        assert_eq!(leader.root_type(), "Character");
        assert_eq!(field_summary(leader), summary(&[("id", "ID!", &["Character"])]));
        assert_eq!(
            op.root_entity().field("leader").unwrap().field_name(),
            "hero",
        );
    }

    #[test]
    fn every_location_has_exactly_one_entity() {
        let schema = star_wars_schema();
        let op = build_first_operation(&schema, r#"
            query Q {
              hero {
                friends { name }
                ... on Human { friends { id } starships { name } }
                ...Friends
                ...Friends
              }
            }
            fragment Friends on Character { friends { appearsIn } }
        "#).unwrap();

        let locations = op.entities()
            .iter()
            .map(|entity| entity.location().to_owned())
            .collect::<HashSet<_>>();
        assert_eq!(locations.len(), op.entities().len());
        // Query root, hero, hero.friends, hero.starships
        assert_eq!(op.entities().len(), 4);

        let friends = &op.entities()[&hero_location("Q").appending("friends", "Character")];
        assert_eq!(field_summary(friends), summary(&[
            ("appearsIn", "[Episode]!", &["Character"]),
            ("id", "ID!", &["Character"]),
            ("name", "String!", &["Character"]),
        ]));
        assert_eq!(
            friends.merged_fragments().iter().collect::<Vec<_>>(),
            vec!["Friends"],
        );
    }
}

mod conditions {
    use super::*;

    #[test]
    fn wider_condition_subsumes_narrower() {
        let schema = star_wars_schema();
        let op = build_first_operation(&schema, r#"
            query Q {
              hero {
                ... on Human { name }
                name
                ... on Droid { name }
              }
            }
        "#).unwrap();

        let hero = &op.entities()[&hero_location("Q")];
        assert_eq!(field_summary(hero), summary(&[("name", "String!", &["Character"])]));
    }

    #[test]
    fn sibling_conditions_are_unioned() {
        let schema = star_wars_schema();
        let op = build_first_operation(&schema, r#"
            query Q {
              search(text: "a") {
                ... on Human { name }
                ... on Droid { name }
              }
            }
        "#).unwrap();

        let search = &op.entities()[
            &Location::operation(Some("Q"), "Query").appending("search", "SearchResult")
        ];
        assert_eq!(search.root_type(), "SearchResult");
        assert_eq!(
            field_summary(search),
            summary(&[("name", "String!", &["Droid", "Human"])]),
        );
    }

    #[test]
    fn same_key_with_different_types_under_disjoint_conditions() {
        let schema = star_wars_schema();
        let op = build_first_operation(&schema, r#"
            query Q {
              hero {
                ... on Human { detail: homePlanet }
                ... on Droid { detail: appearsIn }
              }
            }
        "#).unwrap();

        let hero = &op.entities()[&hero_location("Q")];
        assert_eq!(hero.fields_for_response_key("detail").count(), 2);
        assert!(hero.field("detail").is_none());
        assert_eq!(field_summary(hero), summary(&[
            ("detail", "String", &["Human"]),
            ("detail", "[Episode]!", &["Droid"]),
        ]));
    }

    #[test]
    fn typename_on_union() {
        let schema = star_wars_schema();
        let op = build_first_operation(&schema, r#"
            query Q { search(text: "a") { __typename } }
        "#).unwrap();

        let search = &op.entities()[
            &Location::operation(Some("Q"), "Query").appending("search", "SearchResult")
        ];
        assert_eq!(
            search.field("__typename").unwrap().type_annotation(),
            &TypeAnnotation::named("String", false),
        );
    }

    #[test]
    fn nested_entity_under_abstract_field_type() {
        let schema = star_wars_schema();
        let op = build_first_operation(&schema, r#"
            query Q {
              search(text: "a") {
                ... on Human { starships { name } }
                ... on Starship { coordinates }
              }
            }
        "#).unwrap();

        let search = Location::operation(Some("Q"), "Query").appending("search", "SearchResult");
        let starships = &op.entities()[&search.appending("starships", "Starship")];
        assert_eq!(starships.root_type(), "Starship");
        assert_eq!(field_summary(starships), summary(&[("name", "String!", &["Starship"])]));
        assert_eq!(
            field_summary(&op.entities()[&search]),
            summary(&[
                ("coordinates", "[[Float!]!]", &["Starship"]),
                ("starships", "[Starship]", &["Human"]),
            ]),
        );
    }
}

mod conflicts {
    use super::*;

    #[test]
    fn nullability_only_difference_conflicts() {
        let schema = star_wars_schema();
        let result = build_first_operation(&schema, r#"
            query Q { hero { name ... on Human { name: homePlanet } } }
        "#);

        assert_eq!(result.unwrap_err(), IrBuildError::FieldMergeConflict {
            location: hero_location("Q"),
            response_key: "name".to_string(),
            existing: TypeAnnotation::named("String", false),
            conflicting: TypeAnnotation::named("String", true),
        });
    }

    #[test]
    fn conflict_is_detected_in_either_order() {
        let schema = star_wars_schema();
        let result = build_first_operation(&schema, r#"
            query Q { hero { ... on Human { name: homePlanet } name } }
        "#);

        assert_eq!(result.unwrap_err(), IrBuildError::FieldMergeConflict {
            location: hero_location("Q"),
            response_key: "name".to_string(),
            existing: TypeAnnotation::named("String", true),
            conflicting: TypeAnnotation::named("String", false),
        });
    }

    #[test]
    fn list_shape_difference_conflicts() {
        let schema = star_wars_schema();
        let result = build_first_operation(&schema, r#"
            query Q { hero { friends { id } friends: appearsIn } }
        "#);

        assert!(matches!(
            result,
            Err(IrBuildError::FieldMergeConflict { response_key, .. })
                if response_key == "friends",
        ));
    }

    #[test]
    fn conflict_introduced_by_fragment() {
        let schema = star_wars_schema();
        let result = build_first_operation(&schema, r#"
            query Q { hero { name ...Planet } }
            fragment Planet on Human { name: homePlanet }
        "#);

        assert!(matches!(
            result,
            Err(IrBuildError::FieldMergeConflict { location, .. })
                if location == hero_location("Q"),
        ));
    }
}

mod lookup_failures {
    use super::*;

    #[test]
    fn unknown_field() {
        let schema = star_wars_schema();
        let result = build_first_operation(&schema, "query Q { hero { wingspan } }");

        assert!(matches!(
            result,
            Err(IrBuildError::UnknownField { type_name, field_name, .. })
                if type_name == "Character" && field_name == "wingspan",
        ));
    }

    #[test]
    fn field_on_union_requires_inline_fragment() {
        let schema = star_wars_schema();
        let result = build_first_operation(&schema, r#"query Q { search(text: "a") { name } }"#);

        assert!(matches!(
            result,
            Err(IrBuildError::UnknownField { type_name, .. }) if type_name == "SearchResult",
        ));
    }

    #[test]
    fn selection_set_on_leaf_field() {
        let schema = star_wars_schema();
        let result = build_first_operation(&schema, "query Q { hero { name { length } } }");

        assert!(matches!(
            result,
            Err(IrBuildError::NotACompositeType { type_name, .. }) if type_name == "String",
        ));
    }

    #[test]
    fn unknown_field_in_unreachable_inline_fragment() {
        let schema = star_wars_schema();
        let result = build_first_operation(&schema, r#"
            query Q { hero { ... on Starship { wingspan } name } }
        "#);

        assert!(matches!(
            result,
            Err(IrBuildError::UnknownField { type_name, field_name, .. })
                if type_name == "Starship" && field_name == "wingspan",
        ));
    }

    #[test]
    fn unknown_fragment_in_unreachable_inline_fragment() {
        let schema = star_wars_schema();
        let result = build_first_operation(&schema, r#"
            query Q { hero { ... on Starship { name ...Missing } name } }
        "#);

        assert_eq!(result.unwrap_err(), IrBuildError::UnknownFragment {
            fragment_name: "Missing".to_string(),
        });
    }

    #[test]
    fn unreachable_inline_fragment_contributes_nothing() {
        let schema = star_wars_schema();
        let op = build_first_operation(&schema, r#"
            query Q { hero { name ... on Starship { length coordinates } } }
        "#).unwrap();

        assert_eq!(op.entities().len(), 2);
        let hero = &op.entities()[&hero_location("Q")];
        assert_eq!(field_summary(hero), summary(&[("name", "String!", &["Character"])]));
    }

    #[test]
    fn unknown_fragment() {
        let schema = star_wars_schema();
        let result = build_first_operation(&schema, "query Q { hero { ...Missing } }");

        assert_eq!(result.unwrap_err(), IrBuildError::UnknownFragment {
            fragment_name: "Missing".to_string(),
        });
    }
}

mod commutativity {
    use super::*;

    const HERO_SELECTIONS: [&str; 8] = [
        "name",
        "id",
        "... on Human { homePlanet }",
        "... on Droid { primaryFunction }",
        "... on Human { name }",
        "friends { name }",
        "... on Droid { friends { id } }",
        "...HeroDetails",
    ];

    const HERO_DETAILS: &str = r#"
        fragment HeroDetails on Character {
          appearsIn
          ... on Human { mass friends { appearsIn } }
        }
    "#;

    fn hero_query(selections: &[&str]) -> String {
        format!("query Q {{ hero {{ {} }} }}\n{HERO_DETAILS}", selections.join("\n"))
    }

    proptest! {
        #[test]
        fn merged_entities_do_not_depend_on_selection_order(
            shuffled in Just(HERO_SELECTIONS.to_vec()).prop_shuffle(),
        ) {
            let schema = star_wars_schema();
            let baseline = build_first_operation(&schema, &hero_query(&HERO_SELECTIONS)).unwrap();
            let reordered = build_first_operation(&schema, &hero_query(&shuffled)).unwrap();

            prop_assert_eq!(baseline.entities(), reordered.entities());
        }

        #[test]
        fn conflicts_do_not_depend_on_selection_order(
            shuffled in Just(vec![
                "name",
                "id",
                "... on Droid { primaryFunction }",
                "... on Human { name: homePlanet }",
                "friends { name }",
            ]).prop_shuffle(),
        ) {
            let schema = star_wars_schema();
            let result = build_first_operation(&schema, &hero_query(&shuffled));

            match result {
                Err(IrBuildError::FieldMergeConflict {
                    response_key,
                    existing,
                    conflicting,
                    ..
                }) => {
                    prop_assert_eq!(response_key, "name");
                    let annotations = HashSet::from([existing, conflicting]);
                    prop_assert_eq!(annotations, HashSet::from([
                        TypeAnnotation::named("String", false),
                        TypeAnnotation::named("String", true),
                    ]));
                },
                other => prop_assert!(false, "Expected FieldMergeConflict, got {:?}", other),
            }
        }
    }
}
