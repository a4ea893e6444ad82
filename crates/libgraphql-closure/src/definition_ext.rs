use crate::ast;

/// The name under which a `schema { ... }` definition is tracked.
pub const SCHEMA_DEFINITION_NAME: &str = "schema";

/// Similar to [`ast::schema::Definition`] except without the corresponding
/// definition data. Useful for logging and diagnostics.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DefinitionKind {
    Directive,
    Enum,
    InputObject,
    Interface,
    Object,
    Scalar,
    Schema,
    TypeExtension,
    Union,
}
impl DefinitionKind {
    pub fn name(&self) -> &str {
        match self {
            Self::Directive => "Directive",
            Self::Enum => "Enum",
            Self::InputObject => "InputObject",
            Self::Interface => "Interface",
            Self::Object => "Object",
            Self::Scalar => "Scalar",
            Self::Schema => "Schema",
            Self::TypeExtension => "TypeExtension",
            Self::Union => "Union",
        }
    }
}
impl std::convert::From<&ast::schema::TypeDefinition> for DefinitionKind {
    fn from(value: &ast::schema::TypeDefinition) -> Self {
        use ast::schema::TypeDefinition;
        match value {
            TypeDefinition::Enum(_) => Self::Enum,
            TypeDefinition::InputObject(_) => Self::InputObject,
            TypeDefinition::Interface(_) => Self::Interface,
            TypeDefinition::Object(_) => Self::Object,
            TypeDefinition::Scalar(_) => Self::Scalar,
            TypeDefinition::Union(_) => Self::Union,
        }
    }
}
impl std::convert::From<&ast::schema::TypeExtension> for DefinitionKind {
    /// The kind of definition the extension applies to.
    fn from(value: &ast::schema::TypeExtension) -> Self {
        use ast::schema::TypeExtension;
        match value {
            TypeExtension::Enum(_) => Self::Enum,
            TypeExtension::InputObject(_) => Self::InputObject,
            TypeExtension::Interface(_) => Self::Interface,
            TypeExtension::Object(_) => Self::Object,
            TypeExtension::Scalar(_) => Self::Scalar,
            TypeExtension::Union(_) => Self::Union,
        }
    }
}
impl std::convert::From<&ast::schema::Definition> for DefinitionKind {
    fn from(value: &ast::schema::Definition) -> Self {
        use ast::schema::Definition;
        match value {
            Definition::DirectiveDefinition(_) => Self::Directive,
            Definition::SchemaDefinition(_) => Self::Schema,
            Definition::TypeDefinition(type_def) => type_def.into(),
            Definition::TypeExtension(_) => Self::TypeExtension,
        }
    }
}
impl std::fmt::Display for DefinitionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Accessors shared by every kind of schema [`Definition`](ast::schema::Definition).
pub trait DefinitionExt {
    /// The name this definition is tracked under. A `schema` definition is
    /// named [`SCHEMA_DEFINITION_NAME`]; a type extension carries the name of
    /// the type it extends.
    fn name(&self) -> &str;

    fn kind(&self) -> DefinitionKind;

    fn position(&self) -> ast::Pos;

    fn as_object_type(&self) -> Option<&ast::schema::ObjectType>;
}
impl DefinitionExt for ast::schema::Definition {
    fn name(&self) -> &str {
        use ast::schema::Definition;
        use ast::schema::TypeDefinition;
        match self {
            Definition::DirectiveDefinition(def) => def.name.as_str(),
            Definition::SchemaDefinition(_) => SCHEMA_DEFINITION_NAME,
            Definition::TypeDefinition(type_def) => match type_def {
                TypeDefinition::Enum(def) => def.name.as_str(),
                TypeDefinition::InputObject(def) => def.name.as_str(),
                TypeDefinition::Interface(def) => def.name.as_str(),
                TypeDefinition::Object(def) => def.name.as_str(),
                TypeDefinition::Scalar(def) => def.name.as_str(),
                TypeDefinition::Union(def) => def.name.as_str(),
            },
            Definition::TypeExtension(type_ext) => type_extension_name(type_ext),
        }
    }

    fn kind(&self) -> DefinitionKind {
        self.into()
    }

    fn position(&self) -> ast::Pos {
        use ast::schema::Definition;
        use ast::schema::TypeDefinition;
        match self {
            Definition::DirectiveDefinition(def) => def.position,
            Definition::SchemaDefinition(def) => def.position,
            Definition::TypeDefinition(type_def) => match type_def {
                TypeDefinition::Enum(def) => def.position,
                TypeDefinition::InputObject(def) => def.position,
                TypeDefinition::Interface(def) => def.position,
                TypeDefinition::Object(def) => def.position,
                TypeDefinition::Scalar(def) => def.position,
                TypeDefinition::Union(def) => def.position,
            },
            Definition::TypeExtension(type_ext) => type_extension_position(type_ext),
        }
    }

    fn as_object_type(&self) -> Option<&ast::schema::ObjectType> {
        use ast::schema::Definition;
        use ast::schema::TypeDefinition;
        if let Definition::TypeDefinition(TypeDefinition::Object(obj_type)) = self {
            Some(obj_type)
        } else {
            None
        }
    }
}

pub(crate) fn type_extension_name(type_ext: &ast::schema::TypeExtension) -> &str {
    use ast::schema::TypeExtension;
    match type_ext {
        TypeExtension::Enum(ext) => ext.name.as_str(),
        TypeExtension::InputObject(ext) => ext.name.as_str(),
        TypeExtension::Interface(ext) => ext.name.as_str(),
        TypeExtension::Object(ext) => ext.name.as_str(),
        TypeExtension::Scalar(ext) => ext.name.as_str(),
        TypeExtension::Union(ext) => ext.name.as_str(),
    }
}

pub(crate) fn type_extension_position(type_ext: &ast::schema::TypeExtension) -> ast::Pos {
    use ast::schema::TypeExtension;
    match type_ext {
        TypeExtension::Enum(ext) => ext.position,
        TypeExtension::InputObject(ext) => ext.position,
        TypeExtension::Interface(ext) => ext.position,
        TypeExtension::Object(ext) => ext.position,
        TypeExtension::Scalar(ext) => ext.position,
        TypeExtension::Union(ext) => ext.position,
    }
}
