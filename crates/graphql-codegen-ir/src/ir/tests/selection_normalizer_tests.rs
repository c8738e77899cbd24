use crate::ir::IrBuildError;
use crate::ir::NormalizedSelection;
use crate::ir::normalize_selection_set;
use crate::operation::ExecutableDocument;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use crate::test::star_wars_schema;

/// Normalizes the selection set of the first fragment in `doc_src` under the
/// fragment's own type condition, returning `(name, type condition)` pairs
/// (fields by response key, spreads as `...Name`, unreachable inline fragments
/// as `... on Type`).
fn normalize_first_fragment(
    schema: &Schema,
    doc_src: &str,
) -> Result<Vec<(String, String)>, IrBuildError> {
    let doc = ExecutableDocument::from_str(None, doc_src).unwrap();
    let fragment = &doc.fragments()[0];
    Ok(normalize_selection_set(schema, fragment.selection_set(), fragment.type_condition())?
        .into_iter()
        .map(|selection| match &selection {
            NormalizedSelection::Field { field, type_condition } =>
                (field.response_key().to_string(), type_condition.to_owned()),
            NormalizedSelection::FragmentSpread { spread, type_condition } =>
                (format!("...{}", spread.fragment_name()), type_condition.to_owned()),
            NormalizedSelection::UnreachableInlineFragment { type_condition, .. } =>
                (format!("... on {type_condition}"), type_condition.to_owned()),
        })
        .collect())
}

fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected.iter()
        .map(|(name, cond)| (name.to_string(), cond.to_string()))
        .collect()
}

#[test]
fn fields_inherit_enclosing_condition() {
    let schema = star_wars_schema();
    let normalized = normalize_first_fragment(
        &schema,
        "fragment F on Character { id name }",
    ).unwrap();

    assert_eq!(normalized, pairs(&[("id", "Character"), ("name", "Character")]));
}

#[test]
fn inline_fragment_narrows_condition() {
    let schema = star_wars_schema();
    let normalized = normalize_first_fragment(&schema, r#"
        fragment F on Character {
          name
          ... on Human { homePlanet }
          ... on Droid { primaryFunction }
        }
    "#).unwrap();

    assert_eq!(normalized, pairs(&[
        ("name", "Character"),
        ("homePlanet", "Human"),
        ("primaryFunction", "Droid"),
    ]));
}

#[test]
fn inline_fragment_on_wider_type_keeps_narrower_condition() {
    let schema = star_wars_schema();
    let normalized = normalize_first_fragment(
        &schema,
        "fragment F on Human { ... on Character { name } }",
    ).unwrap();

    assert_eq!(normalized, pairs(&[("name", "Human")]));
}

#[test]
fn inline_fragment_without_condition_inherits() {
    let schema = star_wars_schema();
    let normalized = normalize_first_fragment(
        &schema,
        "fragment F on Character { ... { id ... on Droid { ... { name } } } }",
    ).unwrap();

    assert_eq!(normalized, pairs(&[("id", "Character"), ("name", "Droid")]));
}

#[test]
fn disjoint_inline_fragment_is_not_entered() {
    let schema = star_wars_schema();
    let normalized = normalize_first_fragment(
        &schema,
        "fragment F on Human { id ... on Droid { primaryFunction ...DroidName } }",
    ).unwrap();

    assert_eq!(normalized, pairs(&[("id", "Human"), ("... on Droid", "Droid")]));
}

#[test]
fn partially_overlapping_condition_expands_to_object_types() {
    let schema = SchemaBuilder::from_str(None, concat!(
        "type Query { a: Named }\n",
        "interface Named { name: String }\n",
        "interface Aged { age: Int }\n",
        "type Person implements Named & Aged { name: String, age: Int }\n",
        "type Pet implements Named & Aged { name: String, age: Int }\n",
        "type Planet implements Named { name: String }\n",
        "type Rock implements Aged { age: Int }\n",
    )).unwrap().build().unwrap();
    let normalized = normalize_first_fragment(
        &schema,
        "fragment F on Named { ... on Aged { age } }",
    ).unwrap();

    assert_eq!(normalized, pairs(&[("age", "Person"), ("age", "Pet")]));
}

#[test]
fn spreads_are_not_entered() {
    let schema = star_wars_schema();
    let normalized = normalize_first_fragment(&schema, r#"
        fragment F on Character { ... on Human { ...HumanDetails } }
        fragment HumanDetails on Human { homePlanet }
    "#).unwrap();

    assert_eq!(normalized, pairs(&[("...HumanDetails", "Human")]));
}

#[test]
fn unknown_inline_fragment_type() {
    let schema = star_wars_schema();
    let result = normalize_first_fragment(
        &schema,
        "fragment F on Character { ... on Wookiee { name } }",
    );

    assert_eq!(result.unwrap_err(), IrBuildError::UnknownType {
        type_name: "Wookiee".to_string(),
    });
}
