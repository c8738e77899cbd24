use crate::ir::FragmentRegistry;
use crate::ir::IrBuildError;
use crate::ir::IrDocument;
use crate::ir::NamedFragment;
use crate::ir::Operation;
use crate::operation::ExecutableDocument;
use crate::operation::OperationDefinition;
use crate::schema::Schema;
use std::sync::Arc;

type Result<T> = std::result::Result<T, IrBuildError>;

/// Drives one compilation run over an [`ExecutableDocument`].
///
/// The builder owns the run's [`FragmentRegistry`], so fragments are built
/// once no matter how many operations spread them. Independent runs (each
/// with their own `IrBuilder`) may share one [`Schema`] across threads.
///
/// Once any build fails the builder is poisoned: every later request returns
/// [`IrBuildError::BuilderPoisoned`].
///
/// ```
/// use graphql_codegen_ir::ir::IrBuilder;
/// use graphql_codegen_ir::operation::ExecutableDocument;
/// use graphql_codegen_ir::schema::SchemaBuilder;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let schema = SchemaBuilder::from_str(
///     None,
///     "type Query { greeting: String }",
/// )?.build()?;
/// let document = ExecutableDocument::from_str(
///     None,
///     "query Greet { greeting }",
/// )?;
///
/// let mut builder = IrBuilder::new(&schema, &document)?;
/// let operation = builder.build_operation_named("Greet")?;
/// assert!(operation.root_entity().field("greeting").is_some());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct IrBuilder<'schema, 'doc> {
    document: &'doc ExecutableDocument,
    poisoned: bool,
    registry: FragmentRegistry,
    schema: &'schema Schema,
}
impl<'schema, 'doc> IrBuilder<'schema, 'doc> {
    /// Build every operation and every named fragment of the document.
    pub fn build_document(&mut self) -> Result<IrDocument> {
        let document = self.document;
        let mut operations = vec![];
        for definition in document.operations() {
            operations.push(self.build_operation(definition)?);
        }
        let mut fragments = vec![];
        for definition in document.fragments() {
            fragments.push(self.build_fragment(definition.name())?);
        }
        Ok(IrDocument {
            fragments,
            operations,
        })
    }

    pub fn build_fragment(&mut self, name: &str) -> Result<Arc<NamedFragment>> {
        self.guarded(|schema, registry| registry.resolve(schema, name))
    }

    pub fn build_operation(
        &mut self,
        definition: &OperationDefinition,
    ) -> Result<Operation> {
        self.guarded(|schema, registry| Operation::build(schema, registry, definition))
    }

    /// Look up an operation of the document by name and build it.
    pub fn build_operation_named(&mut self, name: &str) -> Result<Operation> {
        let definition =
            self.document
                .operation(name)
                .ok_or_else(|| IrBuildError::UnknownOperation {
                    operation_name: name.to_string(),
                })?;
        self.build_operation(definition)
    }

    pub fn fragment_registry(&self) -> &FragmentRegistry {
        &self.registry
    }

    pub fn is_poisoned(&self) -> bool {
        self.poisoned
    }

    pub fn new(
        schema: &'schema Schema,
        document: &'doc ExecutableDocument,
    ) -> Result<Self> {
        let mut registry = FragmentRegistry::new();
        registry.register_document(document)?;
        Ok(Self {
            document,
            poisoned: false,
            registry,
            schema,
        })
    }

    fn guarded<T>(
        &mut self,
        build: impl FnOnce(&Schema, &mut FragmentRegistry) -> Result<T>,
    ) -> Result<T> {
        if self.poisoned {
            return Err(IrBuildError::BuilderPoisoned);
        }
        let result = build(self.schema, &mut self.registry);
        if let Err(err) = &result {
            log::debug!("IR build failed, poisoning builder: {err}");
            self.poisoned = true;
        }
        result
    }
}
