#![warn(missing_docs)]

//! 
//! A crate that grows ID3 decision trees over categorical samples.
//! 
//! Each sample is a tuple of attribute values with a binary outcome,
//! `yes` or `no`.
//! Identical tuples are aggregated into one [`Dataset`] entry that counts
//! how often each outcome was observed.
//! 
//! - Tree induction
//!     [`DecisionTree`] chooses, at every node, the remaining attribute
//!     with the largest information gain and recurses on each of its
//!     observed values.
//! 
//! - Prediction
//!     [`DecisionTreeClassifier`] walks the tree for a query.
//!     Values that were never observed fall back to the first value of
//!     the attribute's domain;
//!     a traversal that still cannot proceed grafts a synthetic edge onto
//!     the tree, drawing the value from a caller-supplied random source.
//! 
//! - Evaluation
//!     [`LeaveOneOut`] holds out every raw row once, regrows the tree
//!     and reports an [`Accuracy`].
//! 
//! # Example
//! ```no_run
//! use id3boosts::prelude::*;
//! 
//! let dataset = SampleReader::new()
//!     .file("data/weather.txt")
//!     .read()
//!     .unwrap();
//! 
//! let tree = DecisionTreeBuilder::new(&dataset).build();
//! let f = tree.produce(&dataset);
//! print!("{f}");
//! 
//! let accuracy = LeaveOneOut::new(&dataset).run(&tree);
//! println!("{accuracy}");
//! ```

pub mod errors;
pub mod sample;
pub mod classifier;
pub mod weak_learner;
pub mod research;
pub mod logging;
pub mod prelude;

mod common;


pub use errors::{Id3Error, Result};

pub use sample::{
    Label,
    LabelCounts,
    Schema,
    SampleKey,
    Dataset,
    SampleReader,
};

pub use classifier::Classifier;

pub use weak_learner::{
    WeakLearner,
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
};

pub use research::{
    Accuracy,
    LeaveOneOut,
    leave_one_out_accuracy,
};
