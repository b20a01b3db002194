//! Longest run of consecutive integers in an unordered collection.
//!
//! Values go into a hash set (duplicates collapse). Only *run starts*, values
//! whose predecessor is absent, walk forward; every value is visited by at
//! most one walk, so the whole scan is O(n) despite the nested loop.

use rustc_hash::FxHashSet;

fn membership(nums: &[i64]) -> FxHashSet<i64> {
    let mut set = FxHashSet::default();
    set.reserve(nums.len());
    set.extend(nums.iter().copied());
    set
}

fn is_run_start(set: &FxHashSet<i64>, v: i64) -> bool {
    v.checked_sub(1).map_or(true, |prev| !set.contains(&prev))
}

/// Last value of the run starting at `start`.
fn run_end(set: &FxHashSet<i64>, start: i64) -> i64 {
    let mut current = start;
    while let Some(next) = current.checked_add(1) {
        if !set.contains(&next) {
            break;
        }
        current = next;
    }
    current
}

fn run_len(start: i64, end: i64) -> usize {
    end.abs_diff(start) as usize + 1
}

/// Length of the longest run of consecutive integers in `nums`.
///
/// Returns 0 for empty input; duplicates do not count twice.
///
/// ```
/// use algo_drills::problems::consecutive::longest_consecutive;
///
/// assert_eq!(longest_consecutive(&[100, 4, 200, 1, 3, 2]), 4);
/// ```
pub fn longest_consecutive(nums: &[i64]) -> usize {
    if nums.is_empty() {
        return 0;
    }
    let set = membership(nums);
    set.iter()
        .filter(|&&v| is_run_start(&set, v))
        .map(|&v| run_len(v, run_end(&set, v)))
        .max()
        .unwrap_or(0)
}

/// The longest run itself, ascending.
///
/// When several runs share the maximum length, the one with the smallest
/// start wins, so the result does not depend on hash iteration order.
pub fn longest_consecutive_run(nums: &[i64]) -> Vec<i64> {
    if nums.is_empty() {
        return Vec::new();
    }
    let set = membership(nums);
    let mut best: Option<(usize, i64, i64)> = None;
    for &v in &set {
        if !is_run_start(&set, v) {
            continue;
        }
        let end = run_end(&set, v);
        let len = run_len(v, end);
        let better = match best {
            None => true,
            Some((best_len, best_start, _)) => len > best_len || (len == best_len && v < best_start),
        };
        if better {
            best = Some((len, v, end));
        }
    }
    best.map(|(_, start, end)| (start..=end).collect())
        .unwrap_or_default()
}

/// O(n log n) cross-check: sort, skip duplicates, count adjacent steps.
pub fn longest_consecutive_sorted(nums: &[i64]) -> usize {
    if nums.is_empty() {
        return 0;
    }
    let mut sorted = nums.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let mut best = 1;
    let mut current = 1;
    for w in sorted.windows(2) {
        if w[0].checked_add(1) == Some(w[1]) {
            current += 1;
        } else {
            best = best.max(current);
            current = 1;
        }
    }
    best.max(current)
}
