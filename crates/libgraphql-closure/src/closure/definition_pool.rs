use crate::DefinitionExt;
use crate::ast;
use indexmap::IndexMap;

/// An ordered collection of definitions, unique by name.
///
/// Inserting a definition whose name is already present is a no-op: the
/// first definition inserted under a name wins and keeps its original
/// position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DefinitionPool {
    definitions: IndexMap<String, ast::schema::Definition>,
}
impl DefinitionPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&ast::schema::Definition> {
        self.definitions.get(name)
    }

    /// Returns `true` if the definition was added, `false` if a definition
    /// with the same name was already present.
    pub fn insert(&mut self, definition: ast::schema::Definition) -> bool {
        match self.definitions.entry(definition.name().to_string()) {
            indexmap::map::Entry::Occupied(_) => false,
            indexmap::map::Entry::Vacant(entry) => {
                entry.insert(definition);
                true
            },
        }
    }

    pub fn into_definitions(self) -> Vec<ast::schema::Definition> {
        self.definitions.into_values().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ast::schema::Definition> {
        self.definitions.values()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.definitions.keys().map(String::as_str)
    }
}
impl std::iter::Extend<ast::schema::Definition> for DefinitionPool {
    fn extend<I: IntoIterator<Item = ast::schema::Definition>>(&mut self, iter: I) {
        for definition in iter {
            self.insert(definition);
        }
    }
}
impl std::iter::FromIterator<ast::schema::Definition> for DefinitionPool {
    fn from_iter<I: IntoIterator<Item = ast::schema::Definition>>(iter: I) -> Self {
        let mut pool = Self::new();
        pool.extend(iter);
        pool
    }
}

/// Deduplicate definitions by name. The first occurrence of each name wins;
/// relative order is otherwise preserved.
pub fn dedup_by_name(
    definitions: impl IntoIterator<Item = ast::schema::Definition>,
) -> Vec<ast::schema::Definition> {
    definitions.into_iter()
        .collect::<DefinitionPool>()
        .into_definitions()
}
