//! Computes the closed set of GraphQL definitions needed to assemble one
//! self-consistent schema document out of definitions drawn from many source
//! schemas.
//!
//! Start from a [`CandidateSet`](candidates::CandidateSet) (or any slice of
//! parsed [`ast::schema::Definition`]s) and hand the definitions you want to
//! keep to [`closure::compute_closure`]. The result contains those
//! definitions plus every type, directive, interface implementor, union
//! member, and operation root type they transitively depend on.

pub mod ast;
pub mod builtins;
pub mod candidates;
pub mod closure;
pub(crate) mod definition_ext;
pub(crate) mod file_reader;
pub mod loc;
mod type_ref;

pub use definition_ext::DefinitionExt;
pub use definition_ext::DefinitionKind;
pub use definition_ext::SCHEMA_DEFINITION_NAME;
pub use type_ref::innermost_type_name;

#[cfg(test)]
mod test;
