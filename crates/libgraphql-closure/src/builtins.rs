//! Names defined by the GraphQL language itself. These never need (and never
//! receive) an explicit definition in a closed definition set.

use std::collections::HashSet;
use std::sync::OnceLock;

pub fn builtin_type_names() -> &'static HashSet<&'static str> {
    static NAMES: OnceLock<HashSet<&'static str>> = OnceLock::new();
    NAMES.get_or_init(|| {
        HashSet::from([
            "Boolean",
            "Float",
            "ID",
            "Int",
            "String",
        ])
    })
}

pub fn builtin_directive_names() -> &'static HashSet<&'static str> {
    static NAMES: OnceLock<HashSet<&'static str>> = OnceLock::new();
    NAMES.get_or_init(|| {
        HashSet::from([
            "skip",
            "include",
            "deprecated",
        ])
    })
}

pub fn is_builtin_type(name: &str) -> bool {
    builtin_type_names().contains(name)
}

pub fn is_builtin_directive(name: &str) -> bool {
    builtin_directive_names().contains(name)
}
