//! ID3 decision tree over categorical attributes.

/// Defines the builder of `DecisionTree`.
pub mod builder;
/// Defines the tree growing algorithm.
pub mod decision_tree_algorithm;
/// Defines the classifier produced by `DecisionTree`.
pub mod decision_tree_classifier;

/// Entropy and information gain.
pub mod entropy;
/// Ranks attributes by information gain.
pub mod criterion;

/// Defines the inner representations of `DecisionTreeClassifier`.
mod node;


pub use builder::DecisionTreeBuilder;
pub use decision_tree_algorithm::{
    DecisionTree,
    plurality_value,
    same_classification,
};
pub use decision_tree_classifier::DecisionTreeClassifier;
pub use criterion::{Score, importance, best_attribute};
