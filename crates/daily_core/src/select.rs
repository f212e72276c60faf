use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::{AskedMemory, Problem, Selection};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    #[error("no non-premium problems available (catalog had {catalog_len} entries)")]
    NoEligibleItems { catalog_len: usize },
}

/// Outcome of a single pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pick {
    pub selection: Selection,
    /// True when every eligible problem had already been asked and the memory
    /// was cleared before choosing.
    pub reset: bool,
}

/// Choose one eligible problem that is not yet in `memory`.
///
/// When every eligible problem has been asked, `memory` is cleared in full and
/// the choice is made from the whole eligible set. The chosen id is NOT
/// appended; recording it is the caller's job.
pub fn pick<R: Rng + ?Sized>(
    catalog: &[Problem],
    memory: &mut AskedMemory,
    rng: &mut R,
) -> Result<Pick, SelectError> {
    let no_eligible = || SelectError::NoEligibleItems {
        catalog_len: catalog.len(),
    };

    let eligible: Vec<&Problem> = catalog.iter().filter(|p| p.is_eligible()).collect();
    if eligible.is_empty() {
        return Err(no_eligible());
    }

    let mut unseen: Vec<&Problem> = eligible
        .iter()
        .copied()
        .filter(|p| !memory.contains(p.id))
        .collect();

    let reset = unseen.is_empty();
    if reset {
        memory.clear();
        unseen = eligible;
    }

    let chosen = unseen.choose(rng).ok_or_else(no_eligible)?;
    Ok(Pick {
        selection: Selection::from_problem(chosen),
        reset,
    })
}
