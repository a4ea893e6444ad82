use crate::DefinitionExt;
use crate::ast;
use crate::builtins;
use crate::closure::ClosureError;
use crate::closure::DefinitionPool;
use crate::closure::LookupTable;
use crate::closure::Result;
use crate::closure::collect_references;
use std::collections::HashSet;
use std::collections::VecDeque;

/// Compute the closed set of definitions reachable from a seed.
///
/// `all_candidates` holds every definition from every source schema and is
/// only used to resolve references (and to find the implementors of
/// interfaces). `seed_pool` is the initial result set and `seed_worklist` the
/// definitions to expand; callers typically pass the same definitions for
/// both (see [`compute_closure_from_seed`]).
///
/// Definitions are expanded breadth-first, each name at most once. The
/// returned definitions are unique by name (first occurrence wins) and keep
/// the order in which they entered the pool. Definitions carrying a built-in
/// type or directive name are never part of the result.
///
/// The computation is all-or-nothing: the first unresolvable reference aborts
/// it with a [`ClosureError`].
pub fn compute_closure(
    all_candidates: &[ast::schema::Definition],
    seed_pool: &[ast::schema::Definition],
    seed_worklist: &[ast::schema::Definition],
) -> Result<Vec<ast::schema::Definition>> {
    let lookup = LookupTable::new(all_candidates)?;
    run_worklist(&lookup, seed_pool, seed_worklist)
}

/// Like [`compute_closure`], using `seed` as both the seed pool and the seed
/// worklist.
pub fn compute_closure_from_seed(
    all_candidates: &[ast::schema::Definition],
    seed: &[ast::schema::Definition],
) -> Result<Vec<ast::schema::Definition>> {
    compute_closure(all_candidates, seed, seed)
}

/// Like [`compute_closure_from_seed`], seeding with the candidates that carry
/// each of the given names.
pub fn compute_closure_for_names<S: AsRef<str>>(
    all_candidates: &[ast::schema::Definition],
    names: impl IntoIterator<Item = S>,
) -> Result<Vec<ast::schema::Definition>> {
    let lookup = LookupTable::new(all_candidates)?;
    let seed = names.into_iter()
        .map(|name| {
            let name = name.as_ref();
            lookup.get(name)
                .cloned()
                .ok_or_else(|| ClosureError::UnknownSeedName {
                    name: name.to_string(),
                })
        })
        .collect::<Result<Vec<_>>>()?;

    run_worklist(&lookup, &seed, &seed)
}

fn run_worklist(
    lookup: &LookupTable<'_>,
    seed_pool: &[ast::schema::Definition],
    seed_worklist: &[ast::schema::Definition],
) -> Result<Vec<ast::schema::Definition>> {
    let mut pool: DefinitionPool =
        seed_pool.iter()
            .filter(|def| !is_builtin_definition(def))
            .cloned()
            .collect();
    let mut worklist: VecDeque<ast::schema::Definition> =
        seed_worklist.iter()
            .filter(|def| !is_builtin_definition(def))
            .cloned()
            .collect();
    let mut visited: HashSet<String> = HashSet::new();

    log::debug!(
        "Computing closure over {} candidate definitions from {} seed \
        definitions...",
        lookup.len(),
        worklist.len(),
    );

    while let Some(definition) = worklist.pop_front() {
        let name = definition.name();
        if visited.contains(name) {
            continue;
        }

        let required = collect_references(&definition, &pool, lookup)?;
        log::trace!(
            "Expanded `{name}` ({}): requires [{}].",
            definition.kind(),
            required.iter()
                .map(|def| format!("`{}`", def.name()))
                .collect::<Vec<_>>()
                .join(", "),
        );

        for required_def in required {
            worklist.push_back(required_def.clone());
            pool.insert(required_def);
        }
        visited.insert(name.to_string());
    }

    log::debug!(
        "Closure complete: {} definitions after expanding {} names.",
        pool.len(),
        visited.len(),
    );

    Ok(pool.into_definitions())
}

fn is_builtin_definition(definition: &ast::schema::Definition) -> bool {
    let is_builtin = match definition {
        ast::schema::Definition::DirectiveDefinition(directive_def) =>
            builtins::is_builtin_directive(&directive_def.name),
        ast::schema::Definition::TypeDefinition(_) =>
            builtins::is_builtin_type(definition.name()),
        ast::schema::Definition::SchemaDefinition(_)
        | ast::schema::Definition::TypeExtension(_) => false,
    };

    if is_builtin {
        log::debug!(
            "Dropping seed definition of the built-in `{}` {}.",
            definition.name(),
            definition.kind(),
        );
    }

    is_builtin
}
