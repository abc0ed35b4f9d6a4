//! Binary entropy and the information gain of an attribute
//! over a [`Dataset`].
use crate::sample::{Dataset, LabelCounts};


/// Binary entropy `B(q)` of a Bernoulli variable with
/// success probability `q`, in bits.
/// Returns exactly `0` at `q = 0` and `q = 1`.
#[inline]
pub fn binary_entropy(q: f64) -> f64 {
    if q <= 0f64 || q >= 1f64 { return 0f64; }

    -(q * q.log2() + (1f64 - q) * (1f64 - q).log2())
}


/// Sums the counts of the keys whose column `index` equals `value`.
///
/// A count pair is added at most once: when two matching keys carry
/// exactly the same `(yes, no)` pair, only the first one contributes.
pub fn label_counts(index: usize, value: &str, dataset: &Dataset)
    -> LabelCounts
{
    let mut visited: Vec<LabelCounts> = Vec::new();
    let mut sum = LabelCounts::default();
    for (key, counts) in dataset.iter() {
        if key.get(index) != Some(value) { continue; }
        if visited.contains(counts) { continue; }

        visited.push(*counts);
        sum += *counts;
    }
    sum
}


/// Entropy of the outcome over the whole dataset.
#[inline]
pub fn total_entropy(dataset: &Dataset) -> f64 {
    binary_entropy(dataset.totals().yes_fraction())
}


/// Expected entropy left after splitting on the attribute at `index`.
pub fn remainder(index: usize, dataset: &Dataset) -> f64 {
    let total = dataset.totals().total();
    if total == 0 { return 0f64; }
    let total = total as f64;

    dataset.domain(index)
        .into_iter()
        .map(|value| {
            let counts = label_counts(index, value, dataset);
            let weight = counts.total() as f64 / total;
            weight * binary_entropy(counts.yes_fraction())
        })
        .sum::<f64>()
}


/// Information gain of splitting on the attribute at `index`.
/// Never negative; rounding noise below zero is clamped.
#[inline]
pub fn gain(index: usize, dataset: &Dataset) -> f64 {
    (total_entropy(dataset) - remainder(index, dataset)).max(0f64)
}


/// Unweighted sum of the binary entropies of each value of
/// the attribute at `index`.
///
/// This is a diagnostic figure only.
/// Attribute selection uses [`gain`].
pub fn value_entropy_sum(index: usize, dataset: &Dataset) -> f64 {
    dataset.domain(index)
        .into_iter()
        .map(|value| {
            let counts = label_counts(index, value, dataset);
            binary_entropy(counts.yes_fraction())
        })
        .sum::<f64>()
}
