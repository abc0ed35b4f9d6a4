//! Exports the standard structs and traits.
//! 
pub use crate::sample::{
    Label,
    LabelCounts,
    Schema,
    SampleKey,
    Dataset,
    SampleReader,
};


pub use crate::weak_learner::{
    // Weak learner trait
    WeakLearner,


    // Decision tree (ID3)
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
};


pub use crate::classifier::Classifier;


pub use crate::research::{
    Accuracy,
    LeaveOneOut,
};
