//! Frequency and averaging helpers shared by the statistics reporters.
//!
//! All functions return `Option`/empty collections on empty input rather
//! than panicking, so callers decide how an undefined statistic is shown.

use std::collections::HashMap;
use std::hash::Hash;

/// The most frequent value in `values`, or `None` when empty.
///
/// Ties are broken by first appearance: of the values sharing the highest
/// count, the one encountered earliest in the input wins. This keeps the
/// result stable for inputs that preserve file order.
pub fn mode<'a, T, I>(values: I) -> Option<&'a T>
where
    T: Eq + Hash + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut tallies: HashMap<&T, (u64, usize)> = HashMap::new();
    for (index, value) in values.into_iter().enumerate() {
        let entry = tallies.entry(value).or_insert((0, index));
        entry.0 += 1;
    }

    tallies
        .into_iter()
        // Higher count wins; on equal counts the smaller first index wins.
        .max_by(|a, b| a.1 .0.cmp(&b.1 .0).then(b.1 .1.cmp(&a.1 .1)))
        .map(|(value, _)| value)
}

/// Counts per distinct value, sorted by descending count.
///
/// Values with equal counts keep their first-appearance order, matching
/// the tie rule used by [`mode`].
pub fn value_counts<'a, T, I>(values: I) -> Vec<(&'a T, u64)>
where
    T: Eq + Hash + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut tallies: HashMap<&T, (u64, usize)> = HashMap::new();
    for (index, value) in values.into_iter().enumerate() {
        let entry = tallies.entry(value).or_insert((0, index));
        entry.0 += 1;
    }

    let mut counts: Vec<(&T, (u64, usize))> = tallies.into_iter().collect();
    counts.sort_by(|a, b| b.1 .0.cmp(&a.1 .0).then(a.1 .1.cmp(&b.1 .1)));
    counts
        .into_iter()
        .map(|(value, (count, _))| (value, count))
        .collect()
}

/// Mean of the strictly positive values, or `None` when there are none.
///
/// Zero and negative durations stand for missing or corrupt cells and are
/// excluded from the average (though not from totals).
pub fn mean_of_positive<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let mut sum = 0.0;
    let mut count: u64 = 0;
    for value in values {
        if value > 0.0 {
            sum += value;
            count += 1;
        }
    }
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
