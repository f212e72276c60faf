use crate::ProblemId;

/// Ordered history of problem ids handed out on previous runs.
///
/// Only membership matters; duplicates are tolerated rather than rejected so a
/// hand-edited history file never blocks a run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AskedMemory {
    ids: Vec<ProblemId>,
}

impl AskedMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: ProblemId) -> bool {
        self.ids.contains(&id)
    }

    pub fn push(&mut self, id: ProblemId) {
        self.ids.push(id);
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[ProblemId] {
        &self.ids
    }

    pub fn into_vec(self) -> Vec<ProblemId> {
        self.ids
    }
}

impl From<Vec<ProblemId>> for AskedMemory {
    fn from(ids: Vec<ProblemId>) -> Self {
        Self { ids }
    }
}
