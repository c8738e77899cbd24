use crate::loc;
use crate::operation::ExecutableDocument;
use crate::operation::ExecutableDocumentBuildError;
use crate::operation::OperationKind;
use crate::operation::Selection;
use std::path::Path;

type Result<T> = std::result::Result<T, ExecutableDocumentBuildError>;

mod basics {
    use super::*;

    #[test]
    fn empty_document_is_a_parse_error() {
        let result = ExecutableDocument::from_str(None, "");

        assert!(matches!(
            result,
            Err(ExecutableDocumentBuildError::ParseError { file: None, .. }),
        ));
    }

    #[test]
    fn parse_error_carries_file_path() {
        let path = Path::new("queries/hero.graphql");
        let result = ExecutableDocument::from_str(Some(path), "query {");

        assert!(matches!(
            result,
            Err(ExecutableDocumentBuildError::ParseError { file: Some(file), .. })
                if file == path,
        ));
    }

    #[test]
    fn definitions_keep_declaration_order() -> Result<()> {
        let doc = ExecutableDocument::from_str(None, r#"
            fragment B on Character { name }
            query Second { hero { ...B } }
            fragment A on Character { id }
            mutation First { createReview(review: { stars: 5 }) { stars } }
            subscription Third { reviewAdded { stars } }
        "#)?;

        assert_eq!(
            doc.operations().iter().map(|op| (op.name(), op.kind())).collect::<Vec<_>>(),
            vec![
                (Some("Second"), OperationKind::Query),
                (Some("First"), OperationKind::Mutation),
                (Some("Third"), OperationKind::Subscription),
            ],
        );
        assert_eq!(
            doc.fragments().iter().map(|frag| frag.name()).collect::<Vec<_>>(),
            vec!["B", "A"],
        );
        assert_eq!(doc.operation("First").map(|op| op.kind()), Some(OperationKind::Mutation));
        assert!(doc.operation("Fourth").is_none());

        Ok(())
    }

    #[test]
    fn query_shorthand_is_an_anonymous_query() -> Result<()> {
        let doc = ExecutableDocument::from_str(None, "{ hero { name } }")?;

        let op = &doc.operations()[0];
        assert_eq!(op.kind(), OperationKind::Query);
        assert_eq!(op.name(), None);

        Ok(())
    }

    #[test]
    fn duplicate_operation_names() {
        let result = ExecutableDocument::from_str(None, r#"
            query Hero { hero { name } }
            query Hero { hero { id } }
        "#);

        assert!(matches!(
            result,
            Err(ExecutableDocumentBuildError::DuplicateOperationName { operation_name, .. })
                if operation_name == "Hero",
        ));
    }

    #[test]
    fn anonymous_operation_must_be_alone() {
        let result = ExecutableDocument::from_str(None, r#"
            { hero { name } }
            query Hero { hero { id } }
        "#);

        assert!(matches!(
            result,
            Err(ExecutableDocumentBuildError::AnonymousOperationNotAlone { .. }),
        ));
    }

    #[test]
    fn duplicate_fragment_names_are_kept() -> Result<()> {
        // Reported when the fragments are registered for an IR build.
        let doc = ExecutableDocument::from_str(None, r#"
            fragment F on Character { name }
            fragment F on Character { id }
        "#)?;

        assert_eq!(doc.fragments().len(), 2);

        Ok(())
    }
}

mod selections {
    use super::*;

    #[test]
    fn field_selection_alias_and_response_key() -> Result<()> {
        let doc = ExecutableDocument::from_str(None, "{ leader: hero { name } }")?;

        let Selection::Field(field) = &doc.operations()[0].selection_set().selections()[0] else {
            panic!("Expected a field selection");
        };
        assert_eq!(field.name(), "hero");
        assert_eq!(field.alias(), Some("leader"));
        assert_eq!(field.response_key(), "leader");
        assert_eq!(field.selection_set().selections().len(), 1);

        Ok(())
    }

    #[test]
    fn leaf_field_has_empty_selection_set() -> Result<()> {
        let doc = ExecutableDocument::from_str(None, "{ hero { name } }")?;

        let Selection::Field(hero) = &doc.operations()[0].selection_set().selections()[0] else {
            panic!("Expected a field selection");
        };
        let Selection::Field(name) = &hero.selection_set().selections()[0] else {
            panic!("Expected a field selection");
        };
        assert_eq!(name.response_key(), "name");
        assert!(name.selection_set().is_empty());

        Ok(())
    }

    #[test]
    fn inline_fragments_and_spreads() -> Result<()> {
        let doc = ExecutableDocument::from_str(None, r#"
            query Q {
              hero {
                ... on Droid { primaryFunction }
                ... { id }
                ...HeroName
              }
            }
        "#)?;

        let Selection::Field(hero) = &doc.operations()[0].selection_set().selections()[0] else {
            panic!("Expected a field selection");
        };
        let selections = hero.selection_set().selections();
        match (&selections[0], &selections[1], &selections[2]) {
            (
                Selection::InlineFragment(on_droid),
                Selection::InlineFragment(no_condition),
                Selection::FragmentSpread(spread),
            ) => {
                assert_eq!(on_droid.type_condition(), Some("Droid"));
                assert_eq!(no_condition.type_condition(), None);
                assert_eq!(spread.fragment_name(), "HeroName");
            },
            other => panic!("Unexpected selections: {other:?}"),
        }

        Ok(())
    }

    #[test]
    fn fragment_definition_type_condition_and_location() -> Result<()> {
        let path = Path::new("fragments.graphql");
        let doc = ExecutableDocument::from_str(
            Some(path),
            "\nfragment HeroName on Character { name }",
        )?;

        let fragment = &doc.fragments()[0];
        assert_eq!(fragment.type_condition(), "Character");
        assert_eq!(doc.file_path(), Some(path));
        match fragment.def_location() {
            loc::SourceLocation::ExecutableDocument(pos) => {
                assert_eq!(pos.line, 2);
                assert_eq!(pos.file.as_deref(), Some(path));
            },
            other => panic!("Unexpected location: {other:?}"),
        }

        Ok(())
    }
}
