//! Traced sorting algorithms.
//!
//! Every sort takes `&[T]`, runs against a private working copy and returns
//! the [`Trace`] of what it did. The caller's slice is never mutated.

mod elementary;
mod merge;
mod quick;
mod shell;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{SortVizError, Trace};

pub use elementary::{bubble_sort, insertion_sort, selection_sort};
pub use merge::merge_sort;
pub use quick::quick_sort;
pub use shell::shell_sort;

/// Registry of the available sorts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Selection,
    Insertion,
    Bubble,
    Merge,
    Quick,
    Shell,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Bubble,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Shell,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::Bubble => "bubble",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
            Algorithm::Shell => "shell",
        }
    }

    /// Runs the algorithm over `input` and returns its trace.
    pub fn trace<T: Ord + Clone>(&self, input: &[T]) -> Trace<T> {
        let trace = match self {
            Algorithm::Selection => selection_sort(input),
            Algorithm::Insertion => insertion_sort(input),
            Algorithm::Bubble => bubble_sort(input),
            Algorithm::Merge => merge_sort(input),
            Algorithm::Quick => quick_sort(input),
            Algorithm::Shell => shell_sort(input),
        };
        tracing::debug!(
            algorithm = self.name(),
            len = input.len(),
            operations = trace.len(),
            "generated sort trace"
        );
        trace
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SortVizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        let wanted = wanted.strip_suffix("_sort").unwrap_or(&wanted);
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == wanted)
            .ok_or_else(|| SortVizError::UnknownAlgorithm(s.to_string()))
    }
}
