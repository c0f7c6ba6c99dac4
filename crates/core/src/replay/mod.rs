use crate::{Operation, Result, SortVizError, Trace};

/// Applies every operation of `trace` to `array`, in order.
///
/// `array` must have the length the trace was recorded against, normally a
/// fresh copy of the unsorted input. A mismatch, or an operation indexing
/// past that length, is rejected before anything is applied.
pub fn replay<T: Clone>(array: &mut [T], trace: &Trace<T>) -> Result<()> {
    Replayer::new(array, trace)?.finish();
    Ok(())
}

/// Applies the first `steps` operations of `trace`, clamped to its length.
pub fn replay_prefix<T: Clone>(array: &mut [T], trace: &Trace<T>, steps: usize) -> Result<()> {
    let mut replayer = Replayer::new(array, trace)?;
    replayer.advance(steps);
    Ok(())
}

/// Stepping cursor over a trace and the array it mutates.
///
/// The consumer drives the pace: each [`Replayer::step`] applies one
/// operation and hands it back so the caller can highlight or sound it.
#[derive(Debug)]
pub struct Replayer<'a, T> {
    array: &'a mut [T],
    trace: &'a Trace<T>,
    position: usize,
}

impl<'a, T: Clone> Replayer<'a, T> {
    pub fn new(array: &'a mut [T], trace: &'a Trace<T>) -> Result<Self> {
        if array.len() != trace.array_len() {
            return Err(SortVizError::LengthMismatch {
                expected: trace.array_len(),
                actual: array.len(),
            });
        }
        trace.validate()?;
        Ok(Self {
            array,
            trace,
            position: 0,
        })
    }

    /// Applies the next operation and returns it, or `None` once the trace is
    /// exhausted.
    pub fn step(&mut self) -> Option<&'a Operation<T>> {
        let trace = self.trace;
        let op = trace.get(self.position)?;
        op.apply(self.array);
        self.position += 1;
        Some(op)
    }

    /// Applies up to `steps` operations and returns how many were applied.
    pub fn advance(&mut self, steps: usize) -> usize {
        let mut applied = 0;
        while applied < steps && self.step().is_some() {
            applied += 1;
        }
        applied
    }

    /// Applies the remaining operations.
    pub fn finish(&mut self) {
        let remaining = self.remaining();
        self.advance(remaining);
        tracing::debug!(steps = self.position, "replay finished");
    }

    /// Number of operations applied so far.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.trace.len() - self.position
    }

    pub fn is_finished(&self) -> bool {
        self.position == self.trace.len()
    }

    /// Live view of the array after the applied prefix.
    pub fn array(&self) -> &[T] {
        self.array
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{merge_sort, selection_sort};

    #[test]
    fn replays_to_the_sorted_array() {
        let input = vec![5, 3, 8, 1];
        let trace = merge_sort(&input);

        let mut array = input.clone();
        replay(&mut array, &trace).unwrap();
        assert_eq!(array, vec![1, 3, 5, 8]);
    }

    #[test]
    fn rejects_arrays_of_the_wrong_length() {
        let trace = selection_sort(&[3, 1, 2]);
        let mut array = vec![3, 1];

        let err = replay(&mut array, &trace).unwrap_err();
        assert!(matches!(
            err,
            SortVizError::LengthMismatch {
                expected: 3,
                actual: 2
            }
        ));
        assert_eq!(array, vec![3, 1]);
    }

    #[test]
    fn prefix_replay_yields_intermediate_states() {
        let input = vec![3, 1, 2];
        let trace = selection_sort(&input);

        // compare, compare, swap(0, 1)
        let mut array = input.clone();
        replay_prefix(&mut array, &trace, 3).unwrap();
        assert_eq!(array, vec![1, 3, 2]);

        let mut array = input.clone();
        replay_prefix(&mut array, &trace, 100).unwrap();
        assert_eq!(array, vec![1, 2, 3]);
    }

    #[test]
    fn stepping_reports_each_applied_operation() {
        let input = vec![2, 1];
        let trace = selection_sort(&input);
        let mut array = input.clone();
        let mut replayer = Replayer::new(&mut array, &trace).unwrap();

        let first = replayer.step().unwrap();
        assert!(!first.is_emphasized());
        assert_eq!(replayer.array(), &[2, 1]);

        let second = replayer.step().unwrap();
        assert!(second.is_emphasized());
        assert_eq!(replayer.array(), &[1, 2]);

        assert!(replayer.is_finished());
        assert_eq!(replayer.remaining(), 0);
        assert!(replayer.step().is_none());
        assert_eq!(replayer.position(), 2);
    }

    #[test]
    fn finish_applies_the_remaining_operations() {
        let input = vec![3, 1, 2];
        let trace = selection_sort(&input);
        let mut array = input.clone();
        let mut replayer = Replayer::new(&mut array, &trace).unwrap();

        replayer.advance(3);
        replayer.finish();
        assert!(replayer.is_finished());
        assert_eq!(replayer.array(), &[1, 2, 3]);
    }

    #[test]
    fn bad_indices_are_rejected_before_anything_is_applied() {
        let trace: Trace<i32> = serde_json::from_str(
            r#"{"array_len":2,"operations":[
                {"op":"swap","i":0,"j":1},
                {"op":"copy","index":5,"value":9}
            ]}"#,
        )
        .unwrap();
        let mut array = vec![1, 2];

        let err = replay(&mut array, &trace).unwrap_err();
        assert!(matches!(
            err,
            SortVizError::IndexOutOfBounds { index: 5, len: 2 }
        ));
        assert_eq!(array, vec![1, 2]);

        let err = replay_prefix(&mut array, &trace, 1).unwrap_err();
        assert!(matches!(err, SortVizError::IndexOutOfBounds { .. }));
        assert_eq!(array, vec![1, 2]);
    }
}
