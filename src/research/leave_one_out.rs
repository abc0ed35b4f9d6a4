use rand::prelude::*;
use colored::Colorize;
use serde::Serialize;
use tracing::debug;

use crate::{Classifier, WeakLearner};
use crate::sample::{Dataset, Label};
use crate::weak_learner::DecisionTreeBuilder;

use std::fmt;

const WIDTH: usize = 9;


/// Number of correct predictions out of the number of trials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Accuracy {
    /// Predictions that matched the held-out label.
    pub correct: usize,
    /// Held-out rows.
    pub total: usize,
}


impl Accuracy {
    /// The fraction of correct predictions.
    /// Returns `0` when nothing was evaluated.
    #[inline]
    pub fn ratio(&self) -> f64 {
        if self.total == 0 { return 0f64; }
        self.correct as f64 / self.total as f64
    }
}


impl fmt::Display for Accuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} out of {} correct", self.correct, self.total)
    }
}


/// Leave-one-out evaluation of a [`WeakLearner`].
///
/// Every raw row is held out once: the row is removed from a fresh copy
/// of the dataset, a hypothesis is grown on the copy,
/// and its prediction for the row's key is compared
/// with the removed label.
///
/// # Example
/// ```no_run
/// use id3boosts::prelude::*;
///
/// let dataset = SampleReader::new()
///     .file("/path/to/data.txt")
///     .read()
///     .unwrap();
/// let tree = DecisionTreeBuilder::new(&dataset).build();
/// let accuracy = LeaveOneOut::new(&dataset)
///     .seed(777)
///     .verbose(true)
///     .run(&tree);
/// println!("{accuracy}");
/// ```
pub struct LeaveOneOut<'a> {
    dataset: &'a Dataset,
    seed: u64,
    verbose: bool,
}


impl<'a> LeaveOneOut<'a> {
    /// Construct a new instance of `LeaveOneOut`.
    #[inline]
    pub fn new(dataset: &'a Dataset) -> Self {
        Self {
            dataset,
            seed: 1234,
            verbose: false,
        }
    }


    /// Set the seed of the randomness used by stuck predictions.
    /// Default vaule is `1234.`
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// Set the verbose parameter.
    /// If `true`, `LeaveOneOut` prints one line per held-out row.
    /// Default vaule is `false.`
    #[inline]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Run the evaluation.
    ///
    /// Keys are visited in table order; under each key the `yes` rows
    /// are held out first, then the `no` rows.
    pub fn run<W>(&self, learner: &W) -> Accuracy
        where W: WeakLearner
    {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut accuracy = Accuracy { correct: 0, total: 0 };

        if self.verbose {
            println!("{}", format!("  [{}]", learner.name()).bold().cyan());
            for (name, value) in learner.info().unwrap_or_default() {
                println!("    - {name}: {value}");
            }
        }

        for (key, counts) in self.dataset.iter() {
            for label in [Label::Yes, Label::No] {
                for _ in 0..counts.get(label) {
                    let mut reduced = self.dataset.clone();
                    reduced.remove_one(key, label);

                    let mut f = learner.produce(&reduced);
                    let prediction = f.predict(&reduced, key, &mut rng);

                    let hit = prediction == label;
                    accuracy.total += 1;
                    if hit { accuracy.correct += 1; }

                    if self.verbose {
                        let status = if hit {
                            "[HIT ]".bold().green()
                        } else {
                            "[MISS]".bold().red()
                        };
                        println!(
                            "{}    {}    {}",
                            format!("  [{:>WIDTH$}]", accuracy.total)
                                .bold().yellow(),
                            status,
                            format!("{key} : {label} -> {prediction}"),
                        );
                    }
                }
            }
        }

        debug!(
            learner = learner.name(),
            correct = accuracy.correct,
            total = accuracy.total,
            "leave-one-out finished"
        );
        accuracy
    }
}


/// Leave-one-out accuracy of ID3 over every attribute of `dataset`,
/// with the default seed.
pub fn leave_one_out_accuracy(dataset: &Dataset) -> Accuracy {
    let tree = DecisionTreeBuilder::new(dataset).build();
    LeaveOneOut::new(dataset).run(&tree)
}
