use std::cmp::Ordering;

use crate::trace::Recorder;
use crate::Trace;

/// Selection sort: scan for the running minimum, then swap it into place.
///
/// Each scan step records `Compare(j, min)`; a single `Swap(i, min)` follows
/// the scan only when the minimum moved.
pub fn selection_sort<T: Ord + Clone>(input: &[T]) -> Trace<T> {
    let mut rec = Recorder::new(input);
    let n = rec.len();

    for i in 0..n {
        let mut min = i;
        for j in (i + 1)..n {
            if rec.compare(j, min) == Ordering::Less {
                min = j;
            }
        }
        if min != i {
            rec.swap(i, min);
        }
    }

    rec.finish()
}

/// Insertion sort: shift larger values right, then place the candidate.
///
/// The final placement is recorded even when no shift happened.
pub fn insertion_sort<T: Ord + Clone>(input: &[T]) -> Trace<T> {
    let mut rec = Recorder::new(input);

    for i in 1..rec.len() {
        let candidate = rec.value(i).clone();
        let mut j = i;
        while j > 0 {
            if rec.compare_with(j - 1, i, &candidate) != Ordering::Greater {
                break;
            }
            let shifted = rec.value(j - 1).clone();
            rec.copy(j, shifted);
            j -= 1;
        }
        rec.copy(j, candidate);
    }

    rec.finish()
}

/// Bubble sort over a shrinking active prefix, stopping after a clean pass.
pub fn bubble_sort<T: Ord + Clone>(input: &[T]) -> Trace<T> {
    let mut rec = Recorder::new(input);
    let mut active = rec.len();

    loop {
        let mut swapped = false;
        for i in 1..active {
            if rec.compare(i - 1, i) == Ordering::Greater {
                rec.swap(i - 1, i);
                swapped = true;
            }
        }
        active = active.saturating_sub(1);
        if !swapped {
            break;
        }
    }

    rec.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{replay, Operation};

    fn sorted_by(trace: &Trace<i32>, input: &[i32]) -> Vec<i32> {
        let mut array = input.to_vec();
        replay(&mut array, trace).unwrap();
        array
    }

    #[test]
    fn selection_sort_records_scan_then_swap() {
        let input = [3, 1, 2];
        let trace = selection_sort(&input);

        assert_eq!(
            trace.operations(),
            &[
                Operation::Compare { i: 1, j: 0 },
                Operation::Compare { i: 2, j: 1 },
                Operation::Swap { i: 0, j: 1 },
                Operation::Compare { i: 2, j: 1 },
                Operation::Swap { i: 1, j: 2 },
            ]
        );
        assert_eq!(sorted_by(&trace, &input), vec![1, 2, 3]);
    }

    #[test]
    fn selection_sort_skips_swap_when_minimum_is_in_place() {
        let trace = selection_sort(&[1, 2, 3]);
        assert_eq!(trace.stats().swaps, 0);
        assert_eq!(trace.stats().compares, 3);
    }

    #[test]
    fn insertion_sort_shifts_and_places() {
        let input = [3, 1, 2];
        let trace = insertion_sort(&input);

        assert_eq!(
            trace.operations(),
            &[
                Operation::Compare { i: 0, j: 1 },
                Operation::Copy { index: 1, value: 3 },
                Operation::Copy { index: 0, value: 1 },
                Operation::Compare { i: 1, j: 2 },
                Operation::Copy { index: 2, value: 3 },
                Operation::Compare { i: 0, j: 2 },
                Operation::Copy { index: 1, value: 2 },
            ]
        );
        assert_eq!(sorted_by(&trace, &input), vec![1, 2, 3]);
    }

    #[test]
    fn insertion_sort_places_equal_values_unconditionally() {
        let input = [4, 4, 4];
        let trace = insertion_sort(&input);

        assert_eq!(
            trace.operations(),
            &[
                Operation::Compare { i: 0, j: 1 },
                Operation::Copy { index: 1, value: 4 },
                Operation::Compare { i: 1, j: 2 },
                Operation::Copy { index: 2, value: 4 },
            ]
        );
        assert_eq!(sorted_by(&trace, &input), vec![4, 4, 4]);
    }

    #[test]
    fn bubble_sort_stops_after_a_clean_pass() {
        let input = [2, 1];
        let trace = bubble_sort(&input);

        assert_eq!(
            trace.operations(),
            &[
                Operation::Compare { i: 0, j: 1 },
                Operation::Swap { i: 0, j: 1 },
            ]
        );
        assert_eq!(sorted_by(&trace, &input), vec![1, 2]);
    }

    #[test]
    fn bubble_sort_makes_one_pass_over_sorted_input() {
        let trace = bubble_sort(&[1, 2, 3, 4]);
        assert_eq!(trace.len(), 3);
        assert_eq!(trace.stats().swaps, 0);
    }

    #[test]
    fn bubble_sort_shrinks_the_active_range() {
        let input = [3, 2, 1];
        let trace = bubble_sort(&input);

        // passes of 2, 1 and 0 comparisons
        assert_eq!(trace.stats().compares, 3);
        assert_eq!(trace.stats().swaps, 3);
        assert_eq!(sorted_by(&trace, &input), vec![1, 2, 3]);
    }
}
