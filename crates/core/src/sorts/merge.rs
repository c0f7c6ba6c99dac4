use std::cmp::Ordering;

use crate::trace::Recorder;
use crate::Trace;

/// Top-down merge sort splitting at `(lo + hi) / 2`.
///
/// Each merge records `Compare(i, j)` on the two cursors followed by a
/// `Copy(k, winner)`; ties go to the left half. Once a half is exhausted the
/// other half is flushed with copies only.
pub fn merge_sort<T: Ord + Clone>(input: &[T]) -> Trace<T> {
    let mut rec = Recorder::new(input);
    if rec.len() > 1 {
        let hi = rec.len() - 1;
        sort_range(&mut rec, 0, hi);
    }
    rec.finish()
}

fn sort_range<T: Ord + Clone>(rec: &mut Recorder<T>, lo: usize, hi: usize) {
    if lo >= hi {
        return;
    }
    let mid = lo + (hi - lo) / 2;
    sort_range(rec, lo, mid);
    sort_range(rec, mid + 1, hi);
    merge(rec, lo, mid, hi);
}

fn merge<T: Ord + Clone>(rec: &mut Recorder<T>, lo: usize, mid: usize, hi: usize) {
    // only [lo, hi] is read back, so that is all the snapshot holds
    let aux = rec.snapshot(lo, hi);
    let at = |index: usize| &aux[index - lo];

    let (mut i, mut j, mut k) = (lo, mid + 1, lo);

    while i <= mid && j <= hi {
        if rec.compare_values(i, j, at(i), at(j)) != Ordering::Greater {
            rec.copy(k, at(i).clone());
            i += 1;
        } else {
            rec.copy(k, at(j).clone());
            j += 1;
        }
        k += 1;
    }

    for rest in (i..=mid).chain(j..=hi) {
        rec.copy(k, at(rest).clone());
        k += 1;
    }
}
