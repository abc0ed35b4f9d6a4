//! Ranks the candidate attributes of a node by information gain.
use serde::{Serialize, Deserialize};

use tracing::trace;

use std::fmt;
use std::cmp::Ordering;

use crate::sample::Dataset;
use super::entropy;


/// Score for a splitting.
/// This is just a wrapper for `f64`.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct Score(pub f64);


impl From<f64> for Score {
    #[inline(always)]
    fn from(score: f64) -> Self {
        Self(score)
    }
}


impl PartialEq for Score {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}


impl PartialOrd for Score {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}


impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}


/// Computes the information gain of every candidate attribute.
///
/// Each name is resolved to its column through the dataset's schema
/// right before its gain is computed; names missing from the schema
/// are skipped.
/// The result is sorted by ascending gain.
/// The sort is stable, so attributes with equal gain keep
/// the order of `candidates`.
pub fn importance<'a, S>(dataset: &Dataset, candidates: &'a [S])
    -> Vec<(&'a str, Score)>
    where S: AsRef<str>
{
    let schema = dataset.schema();
    let mut gains = candidates.iter()
        .filter_map(|name| {
            let name = name.as_ref();
            let index = schema.index_of(name)?;
            let score = Score::from(entropy::gain(index, dataset));
            Some((name, score))
        })
        .collect::<Vec<_>>();

    gains.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));

    trace!(ranking = ?gains, "attribute ranking");
    gains
}


/// Returns the attribute with maximal gain.
/// On ties, the attribute that comes first in the schema wins,
/// whatever the order of `candidates`.
pub fn best_attribute<'a, S>(dataset: &Dataset, candidates: &'a [S])
    -> Option<(&'a str, Score)>
    where S: AsRef<str>
{
    let schema = dataset.schema();
    let ranking = importance(dataset, candidates);
    let &(_, best) = ranking.last()?;

    ranking.into_iter()
        .filter(|(_, score)| *score == best)
        .min_by_key(|(name, _)| schema.index_of(name))
}
