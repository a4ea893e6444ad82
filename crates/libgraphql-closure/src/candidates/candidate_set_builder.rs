use crate::DefinitionExt;
use crate::DefinitionKind;
use crate::ast;
use crate::candidates::CandidateSet;
use crate::definition_ext::type_extension_name;
use crate::definition_ext::type_extension_position;
use crate::file_reader;
use crate::loc;
use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, CandidateSetBuildError>;

/// Utility for loading the definitions of many source schemas into one
/// [`CandidateSet`].
///
/// Type extensions (`extend type Foo ...`) are folded into the first-loaded
/// definition of the type they extend. An extension may be loaded before the
/// type it extends; it is applied once [`build()`](Self::build) is called.
#[derive(Debug, Default)]
pub struct CandidateSetBuilder {
    definitions: Vec<ast::schema::Definition>,
    pending_extensions: Vec<(PathBuf, ast::schema::TypeExtension)>,
    str_load_counter: u32,
    type_def_indices: HashMap<String, usize>,
}
impl CandidateSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(mut self) -> Result<CandidateSet> {
        let pending_extensions = std::mem::take(&mut self.pending_extensions);
        for (file_path, type_ext) in pending_extensions {
            self.apply_extension(file_path.as_path(), type_ext)?;
        }

        log::debug!(
            "Loaded {} candidate definitions.",
            self.definitions.len(),
        );

        Ok(CandidateSet {
            definitions: self.definitions,
        })
    }

    pub fn load_file(
        self,
        file_path: impl AsRef<Path>,
    ) -> Result<Self> {
        self.load_files(vec![file_path])
    }

    pub fn load_files(
        mut self,
        file_paths: Vec<impl AsRef<Path>>,
    ) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let file_content = file_reader::read_content(file_path)
                .map_err(|err| CandidateSetBuildError::SchemaFileReadError(
                    Box::new(err),
                ))?;
            self = self.load_str(
                Some(file_path.to_path_buf()),
                file_content.as_str(),
            )?;
        }
        Ok(self)
    }

    pub fn load_str(
        mut self,
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        let file_path =
            if let Some(file_path) = file_path {
                file_path
            } else {
                let ctr = self.str_load_counter;
                self.str_load_counter += 1;
                PathBuf::from(format!("str://{ctr}"))
            };

        let ast_doc =
            graphql_parser::schema::parse_schema::<String>(content)
                .map_err(|err| CandidateSetBuildError::ParseError {
                    file: file_path.to_owned(),
                    err: err.to_string(),
                })?.into_static();

        log::trace!(
            "Parsed {} definitions from {file_path:?}.",
            ast_doc.definitions.len(),
        );

        for def in ast_doc.definitions {
            self.visit_ast_def(file_path.as_path(), def)?;
        }

        Ok(self)
    }

    fn visit_ast_def(
        &mut self,
        file_path: &Path,
        def: ast::schema::Definition,
    ) -> Result<()> {
        match def {
            ast::schema::Definition::TypeExtension(type_ext) => {
                if self.type_def_indices.contains_key(type_extension_name(&type_ext)) {
                    self.apply_extension(file_path, type_ext)?;
                } else {
                    self.pending_extensions.push((file_path.to_path_buf(), type_ext));
                }
            },

            ast::schema::Definition::TypeDefinition(_) => {
                if !self.type_def_indices.contains_key(def.name()) {
                    self.type_def_indices.insert(
                        def.name().to_string(),
                        self.definitions.len(),
                    );
                }
                self.definitions.push(def);
            },

            ast::schema::Definition::DirectiveDefinition(_)
            | ast::schema::Definition::SchemaDefinition(_) =>
                self.definitions.push(def),
        }

        Ok(())
    }

    fn apply_extension(
        &mut self,
        file_path: &Path,
        type_ext: ast::schema::TypeExtension,
    ) -> Result<()> {
        use ast::schema::Definition;
        use ast::schema::TypeDefinition;
        use ast::schema::TypeExtension;

        let type_name = type_extension_name(&type_ext).to_string();
        let extension_location = loc::FilePosition::from_pos(
            file_path,
            type_extension_position(&type_ext),
        );
        let extended_kind = DefinitionKind::from(&type_ext);

        let Some(&def_idx) = self.type_def_indices.get(type_name.as_str()) else {
            return Err(CandidateSetBuildError::ExtensionOfUndefinedType {
                type_name,
                extension_location,
            });
        };
        let base_def = &mut self.definitions[def_idx];

        log::trace!("Folding extension of `{type_name}` at {extension_location}.");
        match (base_def, type_ext) {
            (Definition::TypeDefinition(TypeDefinition::Enum(base)),
             TypeExtension::Enum(ext)) => {
                base.directives.extend(ext.directives);
                base.values.extend(ext.values);
            },

            (Definition::TypeDefinition(TypeDefinition::InputObject(base)),
             TypeExtension::InputObject(ext)) => {
                base.directives.extend(ext.directives);
                base.fields.extend(ext.fields);
            },

            (Definition::TypeDefinition(TypeDefinition::Interface(base)),
             TypeExtension::Interface(ext)) => {
                base.implements_interfaces.extend(ext.implements_interfaces);
                base.directives.extend(ext.directives);
                base.fields.extend(ext.fields);
            },

            (Definition::TypeDefinition(TypeDefinition::Object(base)),
             TypeExtension::Object(ext)) => {
                base.implements_interfaces.extend(ext.implements_interfaces);
                base.directives.extend(ext.directives);
                base.fields.extend(ext.fields);
            },

            (Definition::TypeDefinition(TypeDefinition::Scalar(base)),
             TypeExtension::Scalar(ext)) =>
                base.directives.extend(ext.directives),

            (Definition::TypeDefinition(TypeDefinition::Union(base)),
             TypeExtension::Union(ext)) => {
                base.directives.extend(ext.directives);
                base.types.extend(ext.types);
            },

            (base_def, _) => return Err(CandidateSetBuildError::InvalidExtensionType {
                type_name,
                base_kind: base_def.kind(),
                extended_kind,
                extension_location,
            }),
        }

        Ok(())
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum CandidateSetBuildError {
    #[error(
        "Attempted to extend the `{type_name}` type at {extension_location}, \
        but no type with that name is defined in any loaded schema"
    )]
    ExtensionOfUndefinedType {
        type_name: String,
        extension_location: loc::FilePosition,
    },

    #[error(
        "Attempted to extend the `{type_name}` {base_kind} type with an \
        extension of a(n) {extended_kind} type at {extension_location}"
    )]
    InvalidExtensionType {
        type_name: String,
        base_kind: DefinitionKind,
        extended_kind: DefinitionKind,
        extension_location: loc::FilePosition,
    },

    #[error("Error parsing schema from {file:?}: {err}")]
    ParseError {
        file: PathBuf,
        err: String,
    },

    #[error("Failure while trying to read a schema file from disk: {0}")]
    SchemaFileReadError(Box<file_reader::ReadContentError>),
}
