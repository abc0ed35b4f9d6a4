//! The prediction side of the learning protocol.
//!
//! A [`WeakLearner`](crate::WeakLearner) grows a hypothesis from a
//! [`Dataset`]; the hypothesis implements [`Classifier`].
use rand::Rng;

use crate::sample::{Dataset, Label, SampleKey};


/// A trait that defines the prediction of a trained hypothesis.
pub trait Classifier {
    /// Predicts the label of `key`.
    ///
    /// `dataset` is the table the hypothesis was grown on;
    /// it supplies the attribute domains used when `key` holds values
    /// the hypothesis has no branch for.
    /// `rng` is the only source of randomness a prediction may use.
    fn predict<R>(&mut self, dataset: &Dataset, key: &SampleKey, rng: &mut R)
        -> Label
        where R: Rng + ?Sized;


    /// Predicts the labels of every key in `keys`.
    fn predict_all<R>(
        &mut self,
        dataset: &Dataset,
        keys: &[SampleKey],
        rng: &mut R,
    ) -> Vec<Label>
        where R: Rng + ?Sized
    {
        keys.iter()
            .map(|key| self.predict(dataset, key, rng))
            .collect()
    }
}
