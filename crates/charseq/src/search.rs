// Substring search engine
// Single-pass skip search (Sunday variant): the slide distance after a
// mismatch is derived from where the unit just outside the current
// window reoccurs inside the pattern, so the window can jump more than
// one position at a time. Forward and mirrored backward scans.

use ahash::RandomState;
use std::collections::HashMap;
use std::hash::Hash;

/// Return the smallest index `i` such that `haystack[i..i+m] == needle`,
/// or `None` if the needle never occurs.
///
/// An empty needle matches at index 0 of every haystack. A needle
/// longer than the haystack never matches. Expected O(n+m) unit
/// comparisons, O(n*m) worst case.
pub fn find_first<T>(haystack: &[T], needle: &[T]) -> Option<usize>
where
    T: Eq + Hash + Copy,
{
    if needle.is_empty() {
        return Some(0);
    }
    let n = haystack.len();
    let m = needle.len();
    if n < m {
        return None;
    }

    // Skip table: unit -> rightmost offset of that unit in the needle.
    // A single left-to-right pass; later occurrences overwrite earlier.
    let mut last_index: HashMap<T, usize, RandomState> =
        HashMap::with_capacity_and_hasher(m, RandomState::new());
    for (j, &unit) in needle.iter().enumerate() {
        last_index.insert(unit, j);
    }

    let mut start = 0;
    while n - start >= m {
        if (0..m).all(|i| haystack[start + i] == needle[i]) {
            return Some(start);
        }
        // Mismatch: the unit one past the window decides the slide.
        if start + m >= n {
            return None;
        }
        let next = haystack[start + m];
        match last_index.get(&next) {
            // Not in the needle at all: the window can clear it entirely
            None => start += m + 1,
            // `next` must line up with its rightmost needle occurrence
            Some(&last) => start += m - last,
        }
    }
    None
}

/// Return the largest index `i` such that `haystack[i..i+m] == needle`,
/// or `None` if the needle never occurs.
///
/// Mirror of [`find_first`]: scans windows from the haystack's end and
/// keys the skip table on the unit just before the window. Same
/// empty-needle and too-short-haystack policy.
pub fn find_last<T>(haystack: &[T], needle: &[T]) -> Option<usize>
where
    T: Eq + Hash + Copy,
{
    if needle.is_empty() {
        return Some(0);
    }
    let n = haystack.len() as isize;
    let m = needle.len() as isize;
    if n < m {
        return None;
    }

    // Mirrored skip table: unit -> leftmost offset of that unit in the
    // needle. Built right-to-left, so closer-to-start occurrences
    // overwrite the ones recorded before them.
    let mut first_index: HashMap<T, usize, RandomState> =
        HashMap::with_capacity_and_hasher(needle.len(), RandomState::new());
    for (j, &unit) in needle.iter().enumerate().rev() {
        first_index.insert(unit, j);
    }

    // Signed index math so the retreat below m-1 falls out of the loop
    // guard instead of needing underflow checks.
    let mut end = n - 1;
    while end >= m - 1 {
        if (0..m).all(|i| haystack[(end - i) as usize] == needle[(m - 1 - i) as usize]) {
            return Some((end - m + 1) as usize);
        }
        if end - m < 0 {
            return None;
        }
        let prev = haystack[(end - m) as usize];
        end -= match first_index.get(&prev) {
            None => m + 1,
            Some(&last) => last as isize + 1,
        };
    }
    None
}
