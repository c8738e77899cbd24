use crate::operation::OperationKind;
use crate::schema::SchemaBuilder;
use crate::schema::SchemaLookupError;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectType;
use indexmap::IndexMap;
use indexmap::IndexSet;
use std::collections::HashMap;
use std::sync::OnceLock;

type Result<T> = std::result::Result<T, SchemaLookupError>;

/// Represents a fully loaded and immutable GraphQL schema.
///
/// A `Schema` is read-only once built. The possible-types memo it carries is
/// filled lazily through [`OnceLock`]s, so one `Schema` may be shared across
/// threads by independent compilation runs.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) mutation_type: Option<NamedGraphQLTypeRef>,
    /// Composite type name -> names of the object types it can resolve to.
    possible_types: HashMap<String, OnceLock<IndexSet<String>>>,
    pub(crate) query_type: NamedGraphQLTypeRef,
    pub(crate) subscription_type: Option<NamedGraphQLTypeRef>,
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl Schema {
    pub(crate) fn new(
        types: IndexMap<String, GraphQLType>,
        query_type: NamedGraphQLTypeRef,
        mutation_type: Option<NamedGraphQLTypeRef>,
        subscription_type: Option<NamedGraphQLTypeRef>,
    ) -> Self {
        let possible_types =
            types.values()
                .filter(|type_| type_.is_composite())
                .map(|type_| (type_.name().to_string(), OnceLock::new()))
                .collect();

        Self {
            mutation_type,
            possible_types,
            query_type,
            subscription_type,
            types,
        }
    }

    /// Returns every type defined within this [`Schema`] (including the
    /// built-in scalars), in definition order.
    pub fn all_types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }

    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Look up a type by its exact name.
    pub fn get_type(&self, type_name: &str) -> Result<&GraphQLType> {
        self.types
            .get(type_name)
            .ok_or_else(|| SchemaLookupError::UnknownType(type_name.to_string()))
    }

    /// Returns this [`Schema`]'s Mutation root operation type (if one was
    /// defined).
    pub fn mutation_type(&self) -> Option<&GraphQLType> {
        self.mutation_type.as_ref().and_then(|named_ref| {
            named_ref.deref(self).ok()
        })
    }

    /// Returns this [`Schema`]'s Query root operation type.
    ///
    /// This factors in any `schema { query: ... }` override, so prefer it over
    /// looking up a type named `"Query"`.
    pub fn query_type(&self) -> &GraphQLType {
        self.query_type.deref(self)
            .expect("query type is validated while building the schema")
    }

    /// Returns this [`Schema`]'s Subscription root operation type (if one
    /// was defined).
    pub fn subscription_type(&self) -> Option<&GraphQLType> {
        self.subscription_type.as_ref().and_then(|named_ref| {
            named_ref.deref(self).ok()
        })
    }

    /// The root type that operations of the given kind select against.
    pub fn root_operation_type(&self, kind: OperationKind) -> Option<&GraphQLType> {
        match kind {
            OperationKind::Mutation => self.mutation_type(),
            OperationKind::Query => Some(self.query_type()),
            OperationKind::Subscription => self.subscription_type(),
        }
    }

    /// The object types that a value of the named composite type may have at
    /// runtime.
    ///
    /// * Interface: every object type declaring that it implements it.
    /// * Union: exactly its declared members.
    /// * Object: the object type itself.
    ///
    /// Interface results need a scan over every type in the schema; that scan
    /// runs at most once per interface per [`Schema`].
    pub fn possible_type_names(&self, type_name: &str) -> Result<&IndexSet<String>> {
        let type_ = self.get_type(type_name)?;
        let memo = self.possible_types.get(type_name).ok_or_else(|| {
            SchemaLookupError::NotACompositeType {
                type_name: type_name.to_string(),
                kind: GraphQLTypeKind::from(type_),
            }
        })?;

        Ok(memo.get_or_init(|| match type_ {
            GraphQLType::Interface(iface) => {
                log::trace!("Computing possible types for interface `{type_name}`.");
                self.types
                    .values()
                    .filter_map(|type_| type_.as_object())
                    .filter(|obj| obj.implements_interface(iface.name()))
                    .map(|obj| obj.name().to_string())
                    .collect()
            },
            GraphQLType::Union(union_type) =>
                union_type.member_type_names()
                    .into_iter()
                    .map(|name| name.to_string())
                    .collect(),
            _ => IndexSet::from([type_name.to_string()]),
        }))
    }

    /// Like [`Schema::possible_type_names()`], but resolves each name to its
    /// [`ObjectType`].
    pub fn possible_types(&self, type_: &GraphQLType) -> Result<Vec<&ObjectType>> {
        self.possible_type_names(type_.name())?
            .iter()
            .map(|name| {
                self.get_type(name).and_then(|type_| {
                    type_.as_object().ok_or_else(|| {
                        SchemaLookupError::NotACompositeType {
                            type_name: name.to_string(),
                            kind: GraphQLTypeKind::from(type_),
                        }
                    })
                })
            })
            .collect()
    }

    /// Whether `object_type_name` is one of the possible types of
    /// `composite_type_name`.
    pub fn is_possible_type(
        &self,
        composite_type_name: &str,
        object_type_name: &str,
    ) -> Result<bool> {
        Ok(self.possible_type_names(composite_type_name)?.contains(object_type_name))
    }

    /// Whether some object type satisfies both type conditions.
    pub fn type_conditions_overlap(&self, cond_a: &str, cond_b: &str) -> Result<bool> {
        if cond_a == cond_b {
            return Ok(true);
        }
        let possible_a = self.possible_type_names(cond_a)?;
        let possible_b = self.possible_type_names(cond_b)?;
        Ok(possible_a.iter().any(|name| possible_b.contains(name)))
    }

    /// Whether every possible type of `inner` is also a possible type of
    /// `outer`.
    pub fn type_condition_is_within(&self, inner: &str, outer: &str) -> Result<bool> {
        if inner == outer {
            return Ok(true);
        }
        let possible_inner = self.possible_type_names(inner)?;
        let possible_outer = self.possible_type_names(outer)?;
        Ok(possible_inner.is_subset(possible_outer))
    }

    /// Narrows two type conditions into the condition(s) under which both
    /// hold.
    ///
    /// When one condition is contained in the other the narrower one is
    /// returned as-is. Conditions that only partially overlap (two interfaces
    /// sharing some implementers, an interface and a union, ...) narrow to the
    /// concrete object types they have in common, in `cond_a`'s order.
    /// Disjoint conditions produce an empty list.
    pub fn intersect_type_conditions(
        &self,
        cond_a: &str,
        cond_b: &str,
    ) -> Result<Vec<String>> {
        if self.type_condition_is_within(cond_a, cond_b)? {
            return Ok(vec![cond_a.to_string()]);
        }
        if self.type_condition_is_within(cond_b, cond_a)? {
            return Ok(vec![cond_b.to_string()]);
        }
        let possible_b = self.possible_type_names(cond_b)?;
        Ok(self.possible_type_names(cond_a)?
            .iter()
            .filter(|name| possible_b.contains(*name))
            .cloned()
            .collect())
    }
}
