/// The compilation unit a [`Location`] is rooted in.
#[derive(
    Clone,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
pub enum LocationSource {
    NamedFragment {
        name: String,
        type_condition: String,
    },
    Operation {
        name: Option<String>,
        root_type: String,
    },
}

/// One field step in a [`Location`] path.
#[derive(
    Clone,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct LocationStep {
    pub(super) response_key: String,
    /// Innermost named type of the field (`[Character!]` -> `Character`).
    pub(super) type_name: String,
}
impl LocationStep {
    pub fn response_key(&self) -> &str {
        self.response_key.as_str()
    }

    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }
}

/// A response position within one compilation unit, e.g. the `friends` list
/// nested under `hero` in the `HeroQuery` operation.
///
/// This is the sole key deciding [`Entity`](crate::ir::Entity) identity: every
/// selection reaching the same `Location` contributes to the same entity.
/// Locations of different units never compare equal since their sources
/// differ.
#[derive(
    Clone,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct Location {
    pub(super) path: Vec<LocationStep>,
    pub(super) source: LocationSource,
}
impl Location {
    /// A new location one field deeper than `self`.
    pub fn appending(
        &self,
        response_key: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Self {
        let mut path = self.path.clone();
        path.push(LocationStep {
            response_key: response_key.into(),
            type_name: type_name.into(),
        });
        Self {
            path,
            source: self.source.clone(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    pub fn named_fragment(
        name: impl Into<String>,
        type_condition: impl Into<String>,
    ) -> Self {
        Self {
            path: vec![],
            source: LocationSource::NamedFragment {
                name: name.into(),
                type_condition: type_condition.into(),
            },
        }
    }

    pub fn operation(name: Option<&str>, root_type: impl Into<String>) -> Self {
        Self {
            path: vec![],
            source: LocationSource::Operation {
                name: name.map(str::to_string),
                root_type: root_type.into(),
            },
        }
    }

    pub fn path(&self) -> &[LocationStep] {
        self.path.as_slice()
    }

    pub fn source(&self) -> &LocationSource {
        &self.source
    }

    /// The named type of the value found at this location.
    pub fn type_name(&self) -> &str {
        match (self.path.last(), &self.source) {
            (Some(step), _) => step.type_name(),
            (None, LocationSource::NamedFragment { type_condition, .. }) =>
                type_condition.as_str(),
            (None, LocationSource::Operation { root_type, .. }) =>
                root_type.as_str(),
        }
    }
}
impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.source {
            LocationSource::NamedFragment { name, .. } =>
                write!(f, "Fragment({name})")?,
            LocationSource::Operation { name: Some(name), .. } =>
                write!(f, "Operation({name})")?,
            LocationSource::Operation { name: None, .. } =>
                write!(f, "Operation(<anonymous>)")?,
        }
        for step in &self.path {
            write!(f, ".{}", step.response_key)?;
        }
        Ok(())
    }
}
