mod entity_merge_tests;
mod ir_builder_tests;
mod selection_normalizer_tests;

use crate::ir::Entity;
use crate::ir::IrBuildError;
use crate::ir::IrBuilder;
use crate::ir::Location;
use crate::ir::Operation;
use crate::operation::ExecutableDocument;
use crate::schema::Schema;

/// Builds the first operation of `doc_src`.
fn build_first_operation(
    schema: &Schema,
    doc_src: &str,
) -> Result<Operation, IrBuildError> {
    let doc = ExecutableDocument::from_str(None, doc_src).unwrap();
    let mut builder = IrBuilder::new(schema, &doc)?;
    builder.build_operation(&doc.operations()[0])
}

fn hero_location(op_name: &str) -> Location {
    Location::operation(Some(op_name), "Query").appending("hero", "Character")
}

/// `(response key, type, sorted type conditions)` of every field of `entity`,
/// sorted.
fn field_summary(entity: &Entity) -> Vec<(String, String, Vec<String>)> {
    let mut summary = entity.fields()
        .map(|field| {
            let mut conditions =
                field.type_conditions().iter().cloned().collect::<Vec<_>>();
            conditions.sort();
            (
                field.response_key().to_string(),
                field.type_annotation().to_string(),
                conditions,
            )
        })
        .collect::<Vec<_>>();
    summary.sort();
    summary
}

fn summary(fields: &[(&str, &str, &[&str])]) -> Vec<(String, String, Vec<String>)> {
    let mut summary = fields.iter()
        .map(|(key, annot, conditions)| (
            key.to_string(),
            annot.to_string(),
            conditions.iter().map(|c| c.to_string()).collect::<Vec<_>>(),
        ))
        .collect::<Vec<_>>();
    summary.sort();
    summary
}
