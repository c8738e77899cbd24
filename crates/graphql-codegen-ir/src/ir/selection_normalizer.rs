use crate::ir::IrBuildError;
use crate::operation::FieldSelection;
use crate::operation::FragmentSpread;
use crate::operation::InlineFragment;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use crate::schema::Schema;

type Result<T> = std::result::Result<T, IrBuildError>;

/// A field or fragment spread paired with the type condition under which it
/// was selected.
#[derive(Clone, Debug, PartialEq)]
pub enum NormalizedSelection<'a> {
    Field {
        field: &'a FieldSelection,
        type_condition: String,
    },
    FragmentSpread {
        spread: &'a FragmentSpread,
        type_condition: String,
    },
    /// An inline fragment whose condition cannot overlap the enclosing one.
    /// Its selections never reach the response but must still be valid, so
    /// `type_condition` is the fragment's own condition.
    UnreachableInlineFragment {
        inline_fragment: &'a InlineFragment,
        type_condition: String,
    },
}
impl NormalizedSelection<'_> {
    pub fn type_condition(&self) -> &str {
        match self {
            Self::Field { type_condition, .. }
                | Self::FragmentSpread { type_condition, .. }
                | Self::UnreachableInlineFragment { type_condition, .. } => type_condition,
        }
    }
}

/// Flattens `selection_set` (selected under `type_condition`) into document
/// order, dissolving inline fragments.
///
/// An inline fragment narrows the condition to the intersection of its own
/// condition and the enclosing one. When that intersection is a set of
/// concrete object types, the fragment's selections are emitted once per
/// type. Inline fragments without `on Type` keep the enclosing condition.
/// An inline fragment whose condition cannot overlap the enclosing one is
/// emitted as a single [`NormalizedSelection::UnreachableInlineFragment`]
/// without being entered. Named fragment spreads are not entered either.
pub fn normalize_selection_set<'a>(
    schema: &Schema,
    selection_set: &'a SelectionSet,
    type_condition: &str,
) -> Result<Vec<NormalizedSelection<'a>>> {
    let mut normalized = vec![];
    normalize_into(schema, selection_set, type_condition, &mut normalized)?;
    Ok(normalized)
}

fn normalize_into<'a>(
    schema: &Schema,
    selection_set: &'a SelectionSet,
    type_condition: &str,
    normalized: &mut Vec<NormalizedSelection<'a>>,
) -> Result<()> {
    for selection in selection_set.selections() {
        match selection {
            Selection::Field(field) =>
                normalized.push(NormalizedSelection::Field {
                    field,
                    type_condition: type_condition.to_string(),
                }),

            Selection::FragmentSpread(spread) =>
                normalized.push(NormalizedSelection::FragmentSpread {
                    spread,
                    type_condition: type_condition.to_string(),
                }),

            Selection::InlineFragment(inline) => match inline.type_condition() {
                None => normalize_into(
                    schema,
                    inline.selection_set(),
                    type_condition,
                    normalized,
                )?,

                Some(inline_condition) => {
                    let narrowed = schema.intersect_type_conditions(
                        type_condition,
                        inline_condition,
                    )?;
                    if narrowed.is_empty() {
                        log::trace!(
                            "`... on {inline_condition}` cannot apply within \
                            `{type_condition}`; it is only validated.",
                        );
                        normalized.push(NormalizedSelection::UnreachableInlineFragment {
                            inline_fragment: inline,
                            type_condition: inline_condition.to_string(),
                        });
                    }
                    for narrowed_condition in &narrowed {
                        normalize_into(
                            schema,
                            inline.selection_set(),
                            narrowed_condition,
                            normalized,
                        )?;
                    }
                },
            },
        }
    }
    Ok(())
}
