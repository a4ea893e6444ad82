use crate::DefinitionExt;
use crate::ast;
use crate::closure::ClosureError;
use crate::closure::Result;
use std::collections::HashMap;

/// A name → definition index over every candidate definition, plus an index
/// of the object types implementing each interface.
///
/// When more than one candidate shares a name, the first one wins name
/// resolution. The implementor index still covers every candidate object
/// type, shadowed or not.
#[derive(Debug)]
pub struct LookupTable<'a> {
    definitions: HashMap<&'a str, &'a ast::schema::Definition>,
    implementors: HashMap<&'a str, Vec<&'a ast::schema::Definition>>,
}
impl<'a> LookupTable<'a> {
    pub fn new(all_candidates: &'a [ast::schema::Definition]) -> Result<Self> {
        let mut definitions = HashMap::with_capacity(all_candidates.len());
        let mut implementors: HashMap<&'a str, Vec<&'a ast::schema::Definition>> =
            HashMap::new();

        for definition in all_candidates {
            if let ast::schema::Definition::TypeExtension(type_ext) = definition {
                return Err(ClosureError::UnmergedTypeExtension {
                    type_name: definition.name().to_string(),
                    extended_kind: type_ext.into(),
                    position: definition.position(),
                });
            }

            // Every object type counts as an implementor, including one whose
            // name is shadowed by an earlier candidate.
            if let Some(obj_type) = definition.as_object_type() {
                for iface_name in &obj_type.implements_interfaces {
                    implementors.entry(iface_name.as_str())
                        .or_default()
                        .push(definition);
                }
            }

            let name = definition.name();
            if definitions.contains_key(name) {
                log::trace!(
                    "Ignoring duplicate `{name}` {} definition at {}:{}.",
                    definition.kind(),
                    definition.position().line,
                    definition.position().column,
                );
                continue;
            }
            definitions.insert(name, definition);
        }

        Ok(Self {
            definitions,
            implementors,
        })
    }

    pub fn get(&self, name: &str) -> Option<&'a ast::schema::Definition> {
        self.definitions.get(name).copied()
    }

    /// Every candidate object type that declares it implements the named
    /// interface, in candidate order.
    pub fn implementors_of(&self, interface_name: &str) -> &[&'a ast::schema::Definition] {
        self.implementors
            .get(interface_name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }
}
