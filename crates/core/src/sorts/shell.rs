use std::cmp::Ordering;

use crate::trace::Recorder;
use crate::Trace;

/// Shell sort with Shell's original gaps `n/2, n/4, ..., 1`.
///
/// Each gap runs a gapped insertion sort recorded the same way as
/// [`insertion_sort`](super::insertion_sort), offset by the gap.
pub fn shell_sort<T: Ord + Clone>(input: &[T]) -> Trace<T> {
    let mut rec = Recorder::new(input);
    let n = rec.len();

    let mut gap = n / 2;
    while gap > 0 {
        for i in gap..n {
            let candidate = rec.value(i).clone();
            let mut j = i;
            while j >= gap {
                if rec.compare_with(j - gap, i, &candidate) != Ordering::Greater {
                    break;
                }
                let shifted = rec.value(j - gap).clone();
                rec.copy(j, shifted);
                j -= gap;
            }
            rec.copy(j, candidate);
        }
        gap /= 2;
    }

    rec.finish()
}
