use crate::DefinitionExt;
use crate::ast;

/// The concatenated definitions of every loaded source schema, with type
/// extensions already folded into their base definitions.
///
/// Definitions are kept in load order. Names are not deduplicated: when two
/// sources define the same name, both are kept here and the first one is the
/// one a closure resolves references to.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CandidateSet {
    pub(super) definitions: Vec<ast::schema::Definition>,
}
impl CandidateSet {
    pub fn definitions(&self) -> &[ast::schema::Definition] {
        self.definitions.as_slice()
    }

    /// The first definition loaded under the given name.
    pub fn get(&self, name: &str) -> Option<&ast::schema::Definition> {
        self.definitions.iter().find(|def| def.name() == name)
    }

    pub fn has_schema_definition(&self) -> bool {
        self.definitions.iter()
            .any(|def| matches!(def, ast::schema::Definition::SchemaDefinition(_)))
    }

    pub fn into_definitions(self) -> Vec<ast::schema::Definition> {
        self.definitions
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }
}
