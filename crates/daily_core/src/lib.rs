//! Daily core: problem model, asked-memory and the selection policy.
mod memory;
mod problem;
mod select;

pub use memory::AskedMemory;
pub use problem::{canonical_link, Difficulty, Problem, ProblemId, Selection, PROBLEM_URL_BASE};
pub use select::{pick, Pick, SelectError};
