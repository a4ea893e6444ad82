//! The closure computation: starting from a seed set of definitions, pull in
//! every definition they transitively reference until nothing is left
//! unresolved.

mod closure_driver;
mod closure_error;
mod definition_pool;
mod lookup_table;
mod reference_collector;

pub use closure_driver::compute_closure;
pub use closure_driver::compute_closure_for_names;
pub use closure_driver::compute_closure_from_seed;
pub use closure_error::ClosureError;
pub use definition_pool::DefinitionPool;
pub use definition_pool::dedup_by_name;
pub use lookup_table::LookupTable;
pub use reference_collector::collect_references;

pub(crate) type Result<T> = std::result::Result<T, ClosureError>;
