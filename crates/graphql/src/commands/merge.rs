use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use libgraphql_closure::SCHEMA_DEFINITION_NAME;
use libgraphql_closure::ast;
use libgraphql_closure::candidates::CandidateSet;
use libgraphql_closure::candidates::CandidateSetBuilder;
use libgraphql_closure::closure::compute_closure_for_names;
use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

const DEFAULT_ROOT_TYPE_NAMES: [&str; 3] = ["Query", "Mutation", "Subscription"];

#[derive(Debug, clap::Args)]
pub(crate) struct MergeCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Names of the definitions to seed the merged schema with. \
             Defaults to `schema` when a schema definition was loaded, or \
             else to whichever of `Query`, `Mutation`, and `Subscription` \
             are defined.",
        long,
        value_delimiter = ',',
    )]
    include: Vec<String>,

    #[arg(
        help="Write the merged schema to this file instead of stdout.",
        long,
        short='o',
    )]
    output: Option<PathBuf>,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files which need to be merged.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

impl MergeCmd {
    /// Find all GraphQL files recursively located at or under each path
    /// passed as an arg, in a stable order.
    fn find_schema_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        let graphql_file_exts: HashSet<String> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            let walker = WalkDir::new(path.as_path())
                .follow_links(true)
                .sort_by_file_name();
            for entry in walker {
                let entry = entry.with_context(|| format!(
                    "Failed to scan for GraphQL files at/under {path:?}",
                ))?;
                let entry_path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {entry_path:?}.");
                    continue;
                }

                let has_graphql_ext = entry_path.extension()
                    .map(|ext| ext.to_string_lossy())
                    .is_some_and(|ext| graphql_file_exts.contains(&*ext));
                if has_graphql_ext {
                    log::trace!("Found GraphQL file at {entry_path:?}.");
                    file_paths.push(std::fs::canonicalize(entry_path).with_context(
                        || format!("Failed to resolve {entry_path:?}"),
                    )?);
                }
            }
        }

        // A single file passed explicitly is loaded even when its extension
        // isn't one of `--graphql-file-exts`.
        if file_paths.is_empty()
            && let [only_path] = self.file_or_dir_paths.as_slice()
            && only_path.is_file() {
            log::warn!(
                "Proceeding to merge {only_path:?} even though it doesn't \
                match any of the --graphql-file-exts ({}).",
                self.graphql_file_exts.join(", "),
            );
            file_paths.push(std::fs::canonicalize(only_path).with_context(
                || format!("Failed to resolve {only_path:?}"),
            )?);
        }

        Ok(file_paths)
    }

    fn seed_names(&self, candidates: &CandidateSet) -> anyhow::Result<Vec<String>> {
        if !self.include.is_empty() {
            return Ok(self.include.clone());
        }

        if candidates.has_schema_definition() {
            return Ok(vec![SCHEMA_DEFINITION_NAME.to_string()]);
        }

        let root_names: Vec<String> = DEFAULT_ROOT_TYPE_NAMES.iter()
            .filter(|name| candidates.get(name).is_some())
            .map(|name| name.to_string())
            .collect();
        if root_names.is_empty() {
            anyhow::bail!(
                "Found no `schema` definition and none of the {} root \
                types; use --include to name the definitions to merge",
                DEFAULT_ROOT_TYPE_NAMES.join("/"),
            );
        }
        Ok(root_names)
    }

    fn merge(&self) -> anyhow::Result<MergeSummary> {
        let file_paths = self.find_schema_files()?;
        if file_paths.is_empty() {
            anyhow::bail!("Found no GraphQL files to merge");
        }
        log::debug!("Found {} GraphQL files to be merged.", file_paths.len());

        let num_files = file_paths.len();
        let candidates = CandidateSetBuilder::new()
            .load_files(file_paths)?
            .build()?;
        let num_candidates = candidates.len();

        let seed_names = self.seed_names(&candidates)?;
        log::info!("Merging definitions reachable from: {}.", seed_names.join(", "));

        let closure = compute_closure_for_names(candidates.definitions(), &seed_names)?;
        let num_definitions = closure.len();
        let rendered = ast::schema::Document {
            definitions: closure,
        }.to_string();

        let output =
            if let Some(output_path) = &self.output {
                std::fs::write(output_path, rendered).with_context(
                    || format!("Failed to write the merged schema to {output_path:?}"),
                )?;
                MergeOutput::Written(output_path.to_owned())
            } else {
                MergeOutput::Printed(rendered)
            };

        Ok(MergeSummary {
            num_candidates,
            num_definitions,
            num_files,
            output,
        })
    }
}

#[derive(Debug)]
enum MergeOutput {
    Printed(String),
    Written(PathBuf),
}

#[derive(Debug)]
struct MergeSummary {
    num_candidates: usize,
    num_definitions: usize,
    num_files: usize,
    output: MergeOutput,
}

#[inherent::inherent]
impl RunnableCommand for MergeCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match self.merge() {
            Ok(MergeSummary { output: MergeOutput::Printed(rendered), .. }) =>
                CommandResult::stdout(format_args!("{rendered}")),

            Ok(MergeSummary {
                num_candidates,
                num_definitions,
                num_files,
                output: MergeOutput::Written(output_path),
            }) => CommandResult::stdout(format_args!(
                concat!(
                    "{} Merged GraphQL schema written to {:?}:\n",
                    "  * Analyzed {} files.\n",
                    "  * Considered {} candidate definitions.\n",
                    "  * Kept {} definitions.",
                ),
                output_utils::GREEN_CHECK,
                output_path,
                num_files,
                num_candidates,
                num_definitions,
            )),

            Err(err) => CommandResult::stderr(format_args!(
                "{} Failed to merge GraphQL schemas: {err:#}",
                output_utils::RED_X,
            )),
        }
    }
}
