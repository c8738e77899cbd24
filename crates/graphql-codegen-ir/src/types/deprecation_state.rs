use crate::ast;

const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DeprecationState<'a> {
    Deprecated(&'a str),
    NotDeprecated,
}
impl<'a> DeprecationState<'a> {
    pub fn is_deprecated(&self) -> bool {
        matches!(self, Self::Deprecated(_))
    }
}
impl<'a> std::convert::From<&'a Option<String>> for DeprecationState<'a> {
    fn from(value: &'a Option<String>) -> DeprecationState<'a> {
        match value {
            Some(reason) => DeprecationState::Deprecated(reason.as_str()),
            None => DeprecationState::NotDeprecated,
        }
    }
}

/// Reads the `@deprecated(reason: ...)` annotation (if any) off of a list of
/// schema directives.
pub(crate) fn deprecation_reason_from_ast(
    directives: &[ast::schema::Directive],
) -> Option<String> {
    let directive = directives.iter().find(|d| d.name == "deprecated")?;
    let reason = directive.arguments.iter().find_map(|(arg_name, value)| {
        match (arg_name.as_str(), value) {
            ("reason", ast::Value::String(reason)) => Some(reason.to_owned()),
            _ => None,
        }
    });
    Some(reason.unwrap_or_else(|| DEFAULT_DEPRECATION_REASON.to_string()))
}
