use crate::ast;

/// Recursively unwrap list and non-null wrappers from a type reference and
/// return the inner-most named type.
///
/// ```
/// use libgraphql_closure::ast;
/// use libgraphql_closure::innermost_type_name;
///
/// let type_ref = ast::schema::Type::NonNullType(Box::new(
///     ast::schema::Type::ListType(Box::new(
///         ast::schema::Type::NamedType("User".to_string()),
///     )),
/// ));
/// assert_eq!(innermost_type_name(&type_ref), "User");
/// ```
pub fn innermost_type_name(type_ref: &ast::schema::Type) -> &str {
    match type_ref {
        ast::schema::Type::NamedType(name) => name.as_str(),
        ast::schema::Type::ListType(inner)
        | ast::schema::Type::NonNullType(inner)
            => innermost_type_name(inner),
    }
}
