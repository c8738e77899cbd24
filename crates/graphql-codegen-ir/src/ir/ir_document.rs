use crate::ir::NamedFragment;
use crate::ir::Operation;
use std::sync::Arc;

/// The IR of a whole executable document: each operation and each named
/// fragment it defines, in declaration order.
#[derive(Debug, serde::Serialize)]
pub struct IrDocument {
    #[serde(serialize_with = "super::serialize_arcs")]
    pub(super) fragments: Vec<Arc<NamedFragment>>,
    pub(super) operations: Vec<Operation>,
}
impl IrDocument {
    pub fn fragment(&self, name: &str) -> Option<&Arc<NamedFragment>> {
        self.fragments.iter().find(|fragment| fragment.name() == name)
    }

    pub fn fragments(&self) -> &[Arc<NamedFragment>] {
        self.fragments.as_slice()
    }

    pub fn operation(&self, name: &str) -> Option<&Operation> {
        self.operations.iter().find(|op| op.name() == Some(name))
    }

    pub fn operations(&self) -> &[Operation] {
        self.operations.as_slice()
    }
}
