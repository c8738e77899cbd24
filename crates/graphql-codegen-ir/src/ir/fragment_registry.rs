use crate::ir::IrBuildError;
use crate::ir::NamedFragment;
use crate::operation::ExecutableDocument;
use crate::operation::FragmentDefinition;
use crate::schema::Schema;
use indexmap::IndexMap;
use indexmap::IndexSet;
use std::collections::HashMap;
use std::sync::Arc;

type Result<T> = std::result::Result<T, IrBuildError>;

/// Resolves named fragments for one compilation run.
///
/// Each fragment is built at most once per registry, on first use. Every
/// later resolution (from any operation or fragment) gets the same
/// [`Arc`]. Fragment definitions may reference each other in any order;
/// a spread of a fragment that is still being built is a cycle.
#[derive(Debug, Default)]
pub struct FragmentRegistry {
    built: HashMap<String, Arc<NamedFragment>>,
    definitions: IndexMap<String, FragmentDefinition>,
    in_progress: IndexSet<String>,
}
impl FragmentRegistry {
    /// The definition registered under `name`.
    pub fn definition(&self, name: &str) -> Option<&FragmentDefinition> {
        self.definitions.get(name)
    }

    /// Every registered definition, in registration order.
    pub fn definitions(&self) -> impl Iterator<Item = &FragmentDefinition> {
        self.definitions.values()
    }

    /// The already-built fragment named `name`, without building it.
    pub fn get(&self, name: &str) -> Option<&Arc<NamedFragment>> {
        self.built.get(name)
    }

    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, definition: FragmentDefinition) -> Result<()> {
        if let Some(existing) = self.definitions.get(definition.name()) {
            return Err(IrBuildError::DuplicateFragmentDefinition {
                fragment_name: definition.name().to_string(),
                location1: existing.def_location().to_owned(),
                location2: definition.def_location().to_owned(),
            });
        }
        self.definitions.insert(definition.name().to_string(), definition);
        Ok(())
    }

    /// Registers every fragment defined in `document`.
    pub fn register_document(&mut self, document: &ExecutableDocument) -> Result<()> {
        for definition in document.fragments() {
            self.register(definition.to_owned())?;
        }
        Ok(())
    }

    /// Returns the built fragment named `name`, building it (and whatever it
    /// spreads) first if this registry has not done so yet.
    ///
    /// A failed build is not cached.
    pub fn resolve(
        &mut self,
        schema: &Schema,
        name: &str,
    ) -> Result<Arc<NamedFragment>> {
        if let Some(fragment) = self.built.get(name) {
            log::trace!("Reusing built fragment `{name}`.");
            return Ok(Arc::clone(fragment));
        }

        if let Some(cycle_start) = self.in_progress.get_index_of(name) {
            let mut cycle_path: Vec<String> =
                self.in_progress
                    .iter()
                    .skip(cycle_start)
                    .cloned()
                    .collect();
            cycle_path.push(name.to_string());
            return Err(IrBuildError::FragmentCycleDetected { cycle_path });
        }

        let definition =
            self.definitions
                .get(name)
                .cloned()
                .ok_or_else(|| IrBuildError::UnknownFragment {
                    fragment_name: name.to_string(),
                })?;

        self.in_progress.insert(name.to_string());
        let result = NamedFragment::build(schema, self, definition);
        self.in_progress.shift_remove(name);

        let fragment = Arc::new(result?);
        self.built.insert(name.to_string(), Arc::clone(&fragment));
        Ok(fragment)
    }
}
