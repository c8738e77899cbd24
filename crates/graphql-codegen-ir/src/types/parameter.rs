use crate::ast;
use crate::loc;
use crate::types::TypeAnnotation;
use std::path::Path;

/// An argument declared on a [`Field`](crate::types::Field).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Parameter {
    pub(super) def_location: loc::SourceLocation,
    pub(super) default_value: Option<String>,
    pub(super) description: Option<String>,
    pub(super) name: String,
    pub(super) type_annotation: TypeAnnotation,
}
impl Parameter {
    pub(crate) fn from_ast(
        file_path: Option<&Path>,
        input_val: &ast::schema::InputValue,
    ) -> Self {
        Self {
            def_location: loc::SourceLocation::from_schema_ast_position(
                file_path,
                &input_val.position,
            ),
            default_value: input_val.default_value
                .as_ref()
                .map(value_to_graphql_string),
            description: input_val.description.to_owned(),
            name: input_val.name.to_owned(),
            type_annotation: TypeAnnotation::from_ast_type(&input_val.value_type),
        }
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    /// The default value, rendered as a GraphQL literal (e.g. `NEWHOPE`,
    /// `10`, `"abc"`).
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}

/// Renders a literal value back into GraphQL syntax.
fn value_to_graphql_string(value: &ast::Value) -> String {
    match value {
        ast::Value::Boolean(b) => b.to_string(),
        ast::Value::Enum(name) => name.to_owned(),
        ast::Value::Float(f) => f.to_string(),
        ast::Value::Int(num) => num.as_i64()
            .map(|n| n.to_string())
            .unwrap_or_default(),
        ast::Value::List(items) => format!(
            "[{}]",
            items.iter()
                .map(value_to_graphql_string)
                .collect::<Vec<_>>()
                .join(", "),
        ),
        ast::Value::Null => "null".to_string(),
        ast::Value::Object(fields) => format!(
            "{{{}}}",
            fields.iter()
                .map(|(name, value)| format!(
                    "{name}: {}",
                    value_to_graphql_string(value),
                ))
                .collect::<Vec<_>>()
                .join(", "),
        ),
        ast::Value::String(s) => format!("{s:?}"),
        ast::Value::Variable(name) => format!("${name}"),
    }
}
