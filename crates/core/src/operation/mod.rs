use serde::{Deserialize, Serialize};

use crate::{Result, SortVizError};

/// One elementary step recorded while a sort runs.
///
/// Copy stores an owned snapshot of the written value, so later writes to the
/// working array never change an already recorded event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation<T> {
    /// The algorithm inspected positions `i` and `j`.
    Compare { i: usize, j: usize },
    /// Position `index` was set to `value`.
    Copy { index: usize, value: T },
    /// Positions `i` and `j` exchanged contents.
    Swap { i: usize, j: usize },
}

impl<T: Clone> Operation<T> {
    /// Applies the operation to `array`.
    ///
    /// # Panics
    ///
    /// Panics if any affected index is outside `array`. Operations produced by
    /// the sorts in this crate are always in range for the array length they
    /// were recorded against; use [`Operation::try_apply`] for traces of
    /// unknown origin.
    pub fn apply(&self, array: &mut [T]) {
        if let Err(err) = self.check_bounds(array.len()) {
            panic!("cannot apply {}: {err}", self.kind());
        }
        self.apply_unchecked(array);
    }

    /// Applies the operation, reporting out-of-range indices instead of
    /// panicking. The array is left untouched on error.
    pub fn try_apply(&self, array: &mut [T]) -> Result<()> {
        self.check_bounds(array.len())?;
        self.apply_unchecked(array);
        Ok(())
    }

    fn apply_unchecked(&self, array: &mut [T]) {
        match self {
            Operation::Compare { .. } => {}
            Operation::Copy { index, value } => array[*index] = value.clone(),
            Operation::Swap { i, j } => array.swap(*i, *j),
        }
    }
}

impl<T> Operation<T> {
    /// Positions a renderer should highlight for this event.
    pub fn affected_indices(&self) -> Vec<usize> {
        match self {
            Operation::Compare { i, j } | Operation::Swap { i, j } => vec![*i, *j],
            Operation::Copy { index, .. } => vec![*index],
        }
    }

    /// True for data movement (Copy, Swap), false for pure inspection.
    pub fn is_emphasized(&self) -> bool {
        match self {
            Operation::Compare { .. } => false,
            Operation::Copy { .. } | Operation::Swap { .. } => true,
        }
    }

    /// Short lowercase name of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Operation::Compare { .. } => "compare",
            Operation::Copy { .. } => "copy",
            Operation::Swap { .. } => "swap",
        }
    }

    /// Verifies that every affected index is valid for an array of `len`.
    pub fn check_bounds(&self, len: usize) -> Result<()> {
        match self
            .affected_indices()
            .into_iter()
            .find(|&index| index >= len)
        {
            Some(index) => Err(SortVizError::IndexOutOfBounds { index, len }),
            None => Ok(()),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Display for Operation<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Compare { i, j } => write!(f, "compare({i}, {j})"),
            Operation::Copy { index, value } => write!(f, "copy({index}, {value:?})"),
            Operation::Swap { i, j } => write!(f, "swap({i}, {j})"),
        }
    }
}
