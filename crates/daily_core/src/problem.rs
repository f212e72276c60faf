use std::fmt;

/// Frontend question number as shown on the problem page.
pub type ProblemId = u32;

/// Prefix of every canonical problem link.
pub const PROBLEM_URL_BASE: &str = "https://leetcode.com/problems/";

/// One catalog entry, as reported by the catalog source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub id: ProblemId,
    pub title: String,
    pub slug: String,
    pub paid_only: bool,
    /// Raw difficulty ordinal; see [`Difficulty::from_level`].
    pub difficulty: i64,
}

impl Problem {
    /// Premium-only problems can never be picked.
    pub fn is_eligible(&self) -> bool {
        !self.paid_only
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Unknown,
}

impl Difficulty {
    pub fn from_level(level: i64) -> Self {
        match level {
            1 => Difficulty::Easy,
            2 => Difficulty::Medium,
            3 => Difficulty::Hard,
            _ => Difficulty::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The problem chosen for this run, fully resolved for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub id: ProblemId,
    pub title: String,
    pub difficulty: Difficulty,
    pub link: String,
}

impl Selection {
    pub fn from_problem(problem: &Problem) -> Self {
        Self {
            id: problem.id,
            title: problem.title.clone(),
            difficulty: Difficulty::from_level(problem.difficulty),
            link: canonical_link(&problem.slug),
        }
    }
}

/// Slugs are already URL-safe, so no escaping is applied.
pub fn canonical_link(slug: &str) -> String {
    format!("{PROBLEM_URL_BASE}{slug}/")
}
