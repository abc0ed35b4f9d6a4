use rand::Rng;

use crate::Classifier;
use crate::sample::{Dataset, Label, SampleKey};


/// An interface for the learners in this crate.
/// A learner grows a fresh hypothesis for every call of
/// [`produce`](WeakLearner::produce); nothing is cached between calls.
pub trait WeakLearner {
    /// The hypothesis returned by this learner.
    type Hypothesis: Classifier;


    /// Returns the name of the learner.
    fn name(&self) -> &str;


    /// Returns the parameters of the learner as `(name, value)` pairs.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// Grows a hypothesis on `dataset`.
    fn produce(&self, dataset: &Dataset) -> Self::Hypothesis;


    /// Grows a hypothesis on `dataset` and predicts the label of `key`
    /// with it.
    fn predict<R>(&self, dataset: &Dataset, key: &SampleKey, rng: &mut R)
        -> Label
        where R: Rng + ?Sized
    {
        self.produce(dataset).predict(dataset, key, rng)
    }
}
