use crate::DefinitionExt;
use crate::ast;
use crate::builtins;
use crate::closure::ClosureError;
use crate::closure::DefinitionPool;
use crate::closure::LookupTable;
use crate::closure::Result;
use crate::innermost_type_name;
use std::collections::HashSet;

/// Inspect one definition and return every definition it references that is
/// not already in `pool`.
///
/// References are resolved through `lookup`. Built-in scalars and built-in
/// directives are never returned. An interface additionally pulls in every
/// candidate object type that implements it, whether or not anything else
/// references those implementors.
///
/// The first reference that can't be resolved aborts collection with the
/// corresponding [`ClosureError`].
pub fn collect_references<'a>(
    definition: &ast::schema::Definition,
    pool: &DefinitionPool,
    lookup: &LookupTable<'a>,
) -> Result<Vec<ast::schema::Definition>> {
    ReferenceCollector::new(pool, lookup).collect(definition)
}

/// Identifies the place in a definition that holds a reference, for use in
/// error messages.
#[derive(Clone, Copy, Debug)]
enum ReferenceSite<'s> {
    DirectiveArgument {
        directive_name: &'s str,
        argument_name: &'s str,
    },
    EnumValue {
        type_name: &'s str,
        value_name: &'s str,
    },
    Field {
        type_name: &'s str,
        field_name: &'s str,
    },
    FieldArgument {
        type_name: &'s str,
        field_name: &'s str,
        argument_name: &'s str,
    },
    SchemaRoot {
        operation: &'s str,
    },
    Schema,
    Type {
        type_name: &'s str,
    },
}
impl std::fmt::Display for ReferenceSite<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DirectiveArgument { directive_name, argument_name } =>
                write!(f, "@{directive_name}({argument_name}:)"),
            Self::EnumValue { type_name, value_name } =>
                write!(f, "{type_name}.{value_name}"),
            Self::Field { type_name, field_name } =>
                write!(f, "{type_name}.{field_name}"),
            Self::FieldArgument { type_name, field_name, argument_name } =>
                write!(f, "{type_name}.{field_name}({argument_name}:)"),
            Self::SchemaRoot { operation } =>
                write!(f, "{}.{operation}", crate::SCHEMA_DEFINITION_NAME),
            Self::Schema =>
                f.write_str(crate::SCHEMA_DEFINITION_NAME),
            Self::Type { type_name } =>
                f.write_str(type_name),
        }
    }
}

struct ReferenceCollector<'a, 'p> {
    collected: Vec<ast::schema::Definition>,
    collected_names: HashSet<&'a str>,
    lookup: &'p LookupTable<'a>,
    pool: &'p DefinitionPool,
    resolving_directives: HashSet<&'a str>,
}
impl<'a, 'p> ReferenceCollector<'a, 'p> {
    fn new(pool: &'p DefinitionPool, lookup: &'p LookupTable<'a>) -> Self {
        Self {
            collected: vec![],
            collected_names: HashSet::new(),
            lookup,
            pool,
            resolving_directives: HashSet::new(),
        }
    }

    fn collect(
        mut self,
        definition: &ast::schema::Definition,
    ) -> Result<Vec<ast::schema::Definition>> {
        use ast::schema::Definition;
        match definition {
            // Directive definitions carry no directives of their own; only
            // their arguments can reference other definitions.
            Definition::DirectiveDefinition(directive_def) =>
                self.visit_directive_def_arguments(directive_def)?,

            Definition::SchemaDefinition(schema_def) =>
                self.visit_schema_def(schema_def)?,

            Definition::TypeDefinition(type_def) =>
                self.visit_type_def(type_def)?,

            Definition::TypeExtension(type_ext) =>
                return Err(ClosureError::UnmergedTypeExtension {
                    type_name: definition.name().to_string(),
                    extended_kind: type_ext.into(),
                    position: definition.position(),
                }),
        }

        Ok(self.collected)
    }

    fn add(&mut self, definition: &'a ast::schema::Definition) {
        if self.collected_names.insert(definition.name()) {
            self.collected.push(definition.clone());
        }
    }

    fn is_known(&self, name: &str) -> bool {
        self.pool.contains(name) || self.collected_names.contains(name)
    }

    fn visit_type_def(&mut self, type_def: &ast::schema::TypeDefinition) -> Result<()> {
        use ast::schema::TypeDefinition;
        match type_def {
            TypeDefinition::Enum(enum_def) => {
                self.visit_directives(
                    &enum_def.directives,
                    ReferenceSite::Type { type_name: &enum_def.name },
                )?;
                for value in &enum_def.values {
                    self.visit_directives(&value.directives, ReferenceSite::EnumValue {
                        type_name: &enum_def.name,
                        value_name: &value.name,
                    })?;
                }
            },

            TypeDefinition::InputObject(inputobj_def) => {
                self.visit_directives(
                    &inputobj_def.directives,
                    ReferenceSite::Type { type_name: &inputobj_def.name },
                )?;
                for field in &inputobj_def.fields {
                    let site = ReferenceSite::Field {
                        type_name: &inputobj_def.name,
                        field_name: &field.name,
                    };
                    self.visit_input_value(field, site)?;
                }
            },

            TypeDefinition::Interface(iface_def) => {
                self.visit_directives(
                    &iface_def.directives,
                    ReferenceSite::Type { type_name: &iface_def.name },
                )?;
                self.visit_implemented_interfaces(
                    &iface_def.name,
                    &iface_def.implements_interfaces,
                    iface_def.position,
                )?;
                self.visit_fields(&iface_def.name, &iface_def.fields)?;

                // Including an interface always includes every object type in
                // the candidate set that implements it.
                let lookup = self.lookup;
                for implementor in lookup.implementors_of(&iface_def.name).iter().copied() {
                    self.add(implementor);
                }
            },

            TypeDefinition::Object(obj_def) => {
                self.visit_directives(
                    &obj_def.directives,
                    ReferenceSite::Type { type_name: &obj_def.name },
                )?;
                self.visit_implemented_interfaces(
                    &obj_def.name,
                    &obj_def.implements_interfaces,
                    obj_def.position,
                )?;
                self.visit_fields(&obj_def.name, &obj_def.fields)?;
            },

            TypeDefinition::Scalar(scalar_def) =>
                self.visit_directives(
                    &scalar_def.directives,
                    ReferenceSite::Type { type_name: &scalar_def.name },
                )?,

            TypeDefinition::Union(union_def) => {
                self.visit_directives(
                    &union_def.directives,
                    ReferenceSite::Type { type_name: &union_def.name },
                )?;
                for member_name in &union_def.types {
                    if builtins::is_builtin_type(member_name) || self.is_known(member_name) {
                        continue;
                    }
                    match self.lookup.get(member_name) {
                        Some(member_def) => self.add(member_def),
                        None => return Err(ClosureError::MissingUnionMember {
                            union_name: union_def.name.to_string(),
                            member_name: member_name.to_string(),
                            position: union_def.position,
                        }),
                    }
                }
            },
        }

        Ok(())
    }

    fn visit_schema_def(&mut self, schema_def: &ast::schema::SchemaDefinition) -> Result<()> {
        self.visit_directives(&schema_def.directives, ReferenceSite::Schema)?;

        let roots = [
            ("query", &schema_def.query),
            ("mutation", &schema_def.mutation),
            ("subscription", &schema_def.subscription),
        ];
        for (operation, root_type_name) in roots {
            if let Some(root_type_name) = root_type_name {
                self.resolve_type_name(
                    root_type_name,
                    ReferenceSite::SchemaRoot { operation },
                    schema_def.position,
                )?;
            }
        }

        Ok(())
    }

    fn visit_directive_def_arguments(
        &mut self,
        directive_def: &ast::schema::DirectiveDefinition,
    ) -> Result<()> {
        for argument in &directive_def.arguments {
            let site = ReferenceSite::DirectiveArgument {
                directive_name: &directive_def.name,
                argument_name: &argument.name,
            };
            self.visit_input_value(argument, site)?;
        }
        Ok(())
    }

    fn visit_directives(
        &mut self,
        directives: &[ast::schema::Directive],
        site: ReferenceSite<'_>,
    ) -> Result<()> {
        for directive in directives {
            let directive_name = directive.name.as_str();
            if builtins::is_builtin_directive(directive_name)
                || self.is_known(directive_name)
                || self.resolving_directives.contains(directive_name) {
                continue;
            }

            let missing_directive = || ClosureError::MissingDirective {
                referencing_path: site.to_string(),
                directive_name: directive_name.to_string(),
                position: directive.position,
            };
            let Some(directive_node) = self.lookup.get(directive_name) else {
                return Err(missing_directive());
            };
            let ast::schema::Definition::DirectiveDefinition(directive_def) = directive_node else {
                return Err(missing_directive());
            };

            // A directive's argument types travel together with the directive
            // definition itself.
            self.resolving_directives.insert(directive_def.name.as_str());
            self.visit_directive_def_arguments(directive_def)?;
            self.add(directive_node);
        }
        Ok(())
    }

    fn visit_fields(&mut self, type_name: &str, fields: &[ast::schema::Field]) -> Result<()> {
        for field in fields {
            let field_site = ReferenceSite::Field {
                type_name,
                field_name: &field.name,
            };
            self.resolve_type_ref(&field.field_type, field_site, field.position)?;
            self.visit_directives(&field.directives, field_site)?;

            for argument in &field.arguments {
                let argument_site = ReferenceSite::FieldArgument {
                    type_name,
                    field_name: &field.name,
                    argument_name: &argument.name,
                };
                self.visit_input_value(argument, argument_site)?;
            }
        }
        Ok(())
    }

    fn visit_implemented_interfaces(
        &mut self,
        type_name: &str,
        interface_names: &[String],
        position: ast::Pos,
    ) -> Result<()> {
        for interface_name in interface_names {
            if self.is_known(interface_name) {
                continue;
            }
            match self.lookup.get(interface_name) {
                Some(iface_def) => self.add(iface_def),
                None => return Err(ClosureError::MissingInterface {
                    type_name: type_name.to_string(),
                    interface_name: interface_name.to_string(),
                    position,
                }),
            }
        }
        Ok(())
    }

    fn visit_input_value(
        &mut self,
        input_value: &ast::schema::InputValue,
        site: ReferenceSite<'_>,
    ) -> Result<()> {
        self.resolve_type_ref(&input_value.value_type, site, input_value.position)?;
        self.visit_directives(&input_value.directives, site)
    }

    fn resolve_type_ref(
        &mut self,
        type_ref: &ast::schema::Type,
        site: ReferenceSite<'_>,
        position: ast::Pos,
    ) -> Result<()> {
        self.resolve_type_name(innermost_type_name(type_ref), site, position)
    }

    fn resolve_type_name(
        &mut self,
        type_name: &str,
        site: ReferenceSite<'_>,
        position: ast::Pos,
    ) -> Result<()> {
        if builtins::is_builtin_type(type_name) || self.is_known(type_name) {
            return Ok(());
        }

        match self.lookup.get(type_name) {
            Some(type_def) => {
                self.add(type_def);
                Ok(())
            },
            None => Err(ClosureError::MissingType {
                referencing_path: site.to_string(),
                type_name: type_name.to_string(),
                position,
            }),
        }
    }
}
