use crate::DefinitionKind;
use crate::ast;
use thiserror::Error;

/// Every way a closure computation can fail. All of them are fatal: a
/// closure either resolves every reference or returns one of these.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ClosureError {
    #[error(
        "The `{type_name}` type implements the `{interface_name}` interface, \
        but no interface with that name is defined in any loaded schema \
        (at {}:{})",
        .position.line,
        .position.column,
    )]
    MissingInterface {
        type_name: String,
        interface_name: String,
        position: ast::Pos,
    },

    #[error(
        "`{referencing_path}` references the `{type_name}` type, but no type \
        with that name is defined in any loaded schema (at {}:{})",
        .position.line,
        .position.column,
    )]
    MissingType {
        referencing_path: String,
        type_name: String,
        position: ast::Pos,
    },

    #[error(
        "The `{union_name}` union lists `{member_name}` as a member, but no \
        type with that name is defined in any loaded schema (at {}:{})",
        .position.line,
        .position.column,
    )]
    MissingUnionMember {
        union_name: String,
        member_name: String,
        position: ast::Pos,
    },

    #[error(
        "`{referencing_path}` is annotated with `@{directive_name}`, but no \
        directive with that name is defined in any loaded schema (at {}:{})",
        .position.line,
        .position.column,
    )]
    MissingDirective {
        referencing_path: String,
        directive_name: String,
        position: ast::Pos,
    },

    #[error("No definition named `{name}` exists to seed the closure with")]
    UnknownSeedName {
        name: String,
    },

    #[error(
        "Encountered an unmerged extension of the `{type_name}` {extended_kind} \
        type (at {}:{}). Type extensions must be folded into their base \
        definitions before computing a closure.",
        .position.line,
        .position.column,
    )]
    UnmergedTypeExtension {
        type_name: String,
        extended_kind: DefinitionKind,
        position: ast::Pos,
    },
}
