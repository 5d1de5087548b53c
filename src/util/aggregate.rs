//! Client-side aggregation helpers for the dashboard summary cards.
//!
//! The backend owns every real report; these only condense already-fetched
//! lists into counts and totals for display.

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod aggregate_test;

/// Count occurrences of each key, preserving first-seen order.
pub fn count_by<'a, I>(keys: I) -> Vec<(&'a str, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: Vec<(&'a str, usize)> = Vec::new();
    for key in keys {
        match counts.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, count)) => *count += 1,
            None => counts.push((key, 1)),
        }
    }
    counts
}

/// Sum `amount` over the items matching `keep`.
pub fn sum_where<T, K, A>(items: &[T], keep: K, amount: A) -> f64
where
    K: Fn(&T) -> bool,
    A: Fn(&T) -> f64,
{
    items.iter().filter(|item| keep(item)).map(amount).sum()
}
