use std::cmp::Ordering;

use crate::trace::Recorder;
use crate::Trace;

/// Quick sort with a Lomuto partition around the last element of each range.
///
/// Ranges are visited in the same order as the recursive formulation (left
/// partition fully before right) but through an explicit stack, so sorted
/// inputs cannot exhaust the call stack.
pub fn quick_sort<T: Ord + Clone>(input: &[T]) -> Trace<T> {
    let mut rec = Recorder::new(input);
    let mut pending = Vec::new();
    if rec.len() > 1 {
        pending.push((0, rec.len() - 1));
    }

    while let Some((lo, hi)) = pending.pop() {
        if lo >= hi {
            continue;
        }
        let pivot = partition(&mut rec, lo, hi);
        pending.push((pivot + 1, hi));
        if pivot > lo {
            pending.push((lo, pivot - 1));
        }
    }

    rec.finish()
}

/// Partitions `[lo, hi]` and returns the final pivot position.
fn partition<T: Ord + Clone>(rec: &mut Recorder<T>, lo: usize, hi: usize) -> usize {
    let mut boundary = lo;
    for j in lo..hi {
        if rec.compare(j, hi) != Ordering::Greater {
            rec.swap(boundary, j);
            boundary += 1;
        }
    }
    rec.swap(boundary, hi);
    boundary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{replay, Operation};

    #[test]
    fn partitions_around_the_last_element() {
        let input = [3, 1, 2];
        let trace = quick_sort(&input);

        assert_eq!(
            trace.operations(),
            &[
                Operation::Compare { i: 0, j: 2 },
                Operation::Compare { i: 1, j: 2 },
                Operation::Swap { i: 0, j: 1 },
                Operation::Swap { i: 1, j: 2 },
            ]
        );

        let mut array = input.to_vec();
        replay(&mut array, &trace).unwrap();
        assert_eq!(array, vec![1, 2, 3]);
    }

    #[test]
    fn records_self_swaps_for_values_already_left_of_the_boundary() {
        let trace = quick_sort(&[1, 2]);

        assert_eq!(
            trace.operations(),
            &[
                Operation::Compare { i: 0, j: 1 },
                Operation::Swap { i: 0, j: 0 },
                Operation::Swap { i: 1, j: 1 },
            ]
        );
    }

    #[test]
    fn sorted_input_takes_the_quadratic_path() {
        let input: Vec<u32> = (0..500).collect();
        let trace = quick_sort(&input);

        let mut array = input.clone();
        replay(&mut array, &trace).unwrap();
        assert_eq!(array, input);
        // n(n-1)/2 comparisons for the degenerate pivot choice
        assert_eq!(trace.stats().compares, 500 * 499 / 2);
    }
}
