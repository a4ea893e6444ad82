mod candidate_set;
mod candidate_set_builder;

pub use candidate_set::CandidateSet;
pub use candidate_set_builder::CandidateSetBuildError;
pub use candidate_set_builder::CandidateSetBuilder;
pub use crate::file_reader::ReadContentError;
