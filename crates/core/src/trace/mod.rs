use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::{Operation, Result};

/// Ordered log of the operations performed by one sort run.
///
/// A trace is only meaningful relative to the array length it was recorded
/// against, which it carries as [`Trace::array_len`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace<T> {
    array_len: usize,
    operations: Vec<Operation<T>>,
}

impl<T> Trace<T> {
    /// Builds a trace from operations recorded elsewhere, such as a trace
    /// decoded from JSON. Indices are not validated until replay.
    pub fn from_parts(array_len: usize, operations: Vec<Operation<T>>) -> Self {
        Self {
            array_len,
            operations,
        }
    }

    /// Returns the length of the array the trace was recorded against.
    pub fn array_len(&self) -> usize {
        self.array_len
    }

    /// Returns the number of recorded operations.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn operations(&self) -> &[Operation<T>] {
        &self.operations
    }

    pub fn get(&self, step: usize) -> Option<&Operation<T>> {
        self.operations.get(step)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Operation<T>> {
        self.operations.iter()
    }

    /// Checks every operation against the recorded array length, so a trace
    /// of unknown origin can be rejected before anything is applied.
    pub fn validate(&self) -> Result<()> {
        self.operations
            .iter()
            .try_for_each(|op| op.check_bounds(self.array_len))
    }

    /// Counts the recorded operations by kind.
    pub fn stats(&self) -> TraceStats {
        self.operations
            .iter()
            .fold(TraceStats::default(), |mut stats, op| {
                match op {
                    Operation::Compare { .. } => stats.compares += 1,
                    Operation::Copy { .. } => stats.copies += 1,
                    Operation::Swap { .. } => stats.swaps += 1,
                }
                stats
            })
    }
}

impl<'a, T> IntoIterator for &'a Trace<T> {
    type Item = &'a Operation<T>;
    type IntoIter = std::slice::Iter<'a, Operation<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.operations.iter()
    }
}

/// Per-kind operation counts of a [`Trace`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceStats {
    pub compares: usize,
    pub copies: usize,
    pub swaps: usize,
}

impl TraceStats {
    pub fn total(&self) -> usize {
        self.compares + self.copies + self.swaps
    }
}

/// Working copy that records every observation and write made through it.
///
/// The sorts never touch the slice directly: each read-for-ordering goes
/// through [`Recorder::compare`] and each write through [`Recorder::swap`] or
/// [`Recorder::copy`], which keeps the log in execution order.
#[derive(Debug)]
pub(crate) struct Recorder<T> {
    array: Vec<T>,
    operations: Vec<Operation<T>>,
}

impl<T: Ord + Clone> Recorder<T> {
    pub(crate) fn new(input: &[T]) -> Self {
        Self {
            array: input.to_vec(),
            operations: Vec::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.array.len()
    }

    pub(crate) fn value(&self, index: usize) -> &T {
        &self.array[index]
    }

    /// Clones the inclusive range `[lo, hi]` of the working array.
    pub(crate) fn snapshot(&self, lo: usize, hi: usize) -> Vec<T> {
        self.array[lo..=hi].to_vec()
    }

    /// Records a comparison between two slots and returns `a[i]` cmp `a[j]`.
    pub(crate) fn compare(&mut self, i: usize, j: usize) -> Ordering {
        self.operations.push(Operation::Compare { i, j });
        self.array[i].cmp(&self.array[j])
    }

    /// Records a comparison of slots `i` and `j` where slot `j` has been
    /// displaced and the algorithm holds its value as `candidate`. Returns
    /// `a[i]` cmp `candidate`.
    pub(crate) fn compare_with(&mut self, i: usize, j: usize, candidate: &T) -> Ordering {
        self.operations.push(Operation::Compare { i, j });
        self.array[i].cmp(candidate)
    }

    /// Records a comparison of slots `i` and `j` whose values are read from a
    /// snapshot taken before the current pass.
    pub(crate) fn compare_values(&mut self, i: usize, j: usize, left: &T, right: &T) -> Ordering {
        self.operations.push(Operation::Compare { i, j });
        left.cmp(right)
    }

    pub(crate) fn swap(&mut self, i: usize, j: usize) {
        self.operations.push(Operation::Swap { i, j });
        self.array.swap(i, j);
    }

    pub(crate) fn copy(&mut self, index: usize, value: T) {
        self.operations.push(Operation::Copy {
            index,
            value: value.clone(),
        });
        self.array[index] = value;
    }

    pub(crate) fn finish(self) -> Trace<T> {
        Trace {
            array_len: self.array.len(),
            operations: self.operations,
        }
    }

    #[cfg(test)]
    pub(crate) fn array(&self) -> &[T] {
        &self.array
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_operations_in_execution_order() {
        let mut recorder = Recorder::new(&[2, 1]);
        assert_eq!(recorder.compare(0, 1), Ordering::Greater);
        recorder.swap(0, 1);
        recorder.copy(1, 5);

        assert_eq!(recorder.array(), &[1, 5]);

        let trace = recorder.finish();
        assert_eq!(trace.array_len(), 2);
        assert_eq!(
            trace.operations(),
            &[
                Operation::Compare { i: 0, j: 1 },
                Operation::Swap { i: 0, j: 1 },
                Operation::Copy { index: 1, value: 5 },
            ]
        );
    }

    #[test]
    fn stats_count_each_kind() {
        let mut recorder = Recorder::new(&[3, 2, 1]);
        recorder.compare(0, 1);
        recorder.compare(1, 2);
        recorder.swap(0, 2);
        recorder.copy(1, 2);

        let stats = recorder.finish().stats();
        assert_eq!(
            stats,
            TraceStats {
                compares: 2,
                copies: 1,
                swaps: 1,
            }
        );
        assert_eq!(stats.total(), 4);
    }

    #[test]
    fn validate_reports_the_first_out_of_range_index() {
        let trace = Trace::from_parts(
            2,
            vec![
                Operation::Swap { i: 0, j: 1 },
                Operation::Copy { index: 5, value: 9 },
                Operation::Compare { i: 7, j: 0 },
            ],
        );

        assert!(matches!(
            trace.validate(),
            Err(crate::SortVizError::IndexOutOfBounds { index: 5, len: 2 })
        ));
        assert!(Recorder::new(&[3, 1, 2]).finish().validate().is_ok());
    }

    #[test]
    fn copy_snapshots_are_not_live_references() {
        let mut recorder = Recorder::new(&[String::from("a"), String::from("b")]);
        recorder.copy(0, String::from("z"));
        recorder.copy(0, String::from("y"));

        let trace = recorder.finish();
        assert_eq!(
            trace.get(0),
            Some(&Operation::Copy {
                index: 0,
                value: String::from("z"),
            })
        );
    }
}
