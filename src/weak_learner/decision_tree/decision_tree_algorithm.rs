use tracing::{debug, warn};

use crate::WeakLearner;
use crate::sample::{Dataset, Label};

use super::{
    node::*,
    criterion,
    decision_tree_classifier::DecisionTreeClassifier,
};

use std::fmt;


/// The ID3 decision tree algorithm.
/// Given a [`Dataset`] of categorical samples with `yes`/`no` outcomes,
/// [`DecisionTree`] grows a [`DecisionTreeClassifier`] that splits,
/// at every node, on the remaining attribute with the largest
/// information gain.
///
/// The code follows the `DECISION-TREE-LEARNING` procedure of
/// [Artificial Intelligence: A Modern
/// Approach](https://aima.cs.berkeley.edu/)
/// by Stuart Russell and Peter Norvig.
///
/// [`DecisionTree`] is constructed
/// by [`DecisionTreeBuilder`](crate::weak_learner::DecisionTreeBuilder).
///
/// # Example
/// ```no_run
/// use id3boosts::prelude::*;
///
/// let dataset = SampleReader::new()
///     .file("/path/to/data.txt")
///     .read()
///     .unwrap();
///
/// let tree = DecisionTreeBuilder::new(&dataset).build();
/// let f = tree.produce(&dataset);
/// println!("{f}");
/// ```
pub struct DecisionTree {
    attributes: Vec<String>,
}


impl DecisionTree {
    /// Initialize [`DecisionTree`].
    /// This method is called only via `DecisionTreeBuilder::build`.
    #[inline]
    pub(super) fn from_components(attributes: Vec<String>) -> Self {
        Self { attributes }
    }


    /// The attributes the root may split on.
    #[inline]
    pub fn attributes(&self) -> &[String] {
        &self.attributes[..]
    }


    /// Grow the subtree for `dataset`.
    ///
    /// `candidates` are the attributes not yet used on the path to this
    /// node. Siblings receive the same slice and never modify it.
    /// `parent` is the table of the node above, if any.
    fn full_tree(
        &self,
        dataset: &Dataset,
        candidates: &[String],
        parent: Option<&Dataset>,
        depth: usize,
    ) -> NodePtr
    {
        // No sample reached this node.
        if dataset.is_empty() {
            let label = plurality_value(parent.unwrap_or(dataset));
            return Node::leaf(label);
        }


        if let Some(label) = same_classification(dataset) {
            return Node::leaf(label);
        }


        let Some((attribute, score)) = criterion::best_attribute(
            dataset, candidates
        ) else {
            return Node::leaf(plurality_value(dataset));
        };


        let values = dataset.schema()
            .index_of(attribute)
            .map(|index| (index, dataset.domain(index)))
            .filter(|(_, values)| !values.is_empty());
        let Some((index, values)) = values else {
            warn!(
                attribute,
                depth,
                "split attribute has no observed value; using plurality"
            );
            return Node::leaf(plurality_value(dataset));
        };

        debug!(attribute, gain = score.0, depth, "split");


        let node = Node::branch(attribute, depth);

        let remaining = candidates.iter()
            .filter(|name| name.as_str() != attribute)
            .cloned()
            .collect::<Vec<_>>();

        for value in values {
            let subset = dataset.filter(index, value);
            let child = self.full_tree(
                &subset, &remaining[..], Some(dataset), depth + 1
            );
            Node::attach(&node, value.to_string(), child);
        }

        node
    }
}


impl WeakLearner for DecisionTree {
    type Hypothesis = DecisionTreeClassifier;


    fn name(&self) -> &str {
        "Decision Tree (ID3)"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = Vec::from([
            ("# of attributes", format!("{}", self.attributes.len())),
            ("Split criterion", "Information gain".to_string()),
        ]);
        Some(info)
    }


    /// Grows a fresh tree on `dataset`.
    #[inline]
    fn produce(&self, dataset: &Dataset) -> Self::Hypothesis {
        let root = self.full_tree(dataset, &self.attributes[..], None, 0);
        DecisionTreeClassifier::from(root)
    }
}


/// The majority label of `dataset`.
/// Ties, including an empty table, resolve to [`Label::No`].
#[inline]
pub fn plurality_value(dataset: &Dataset) -> Label {
    dataset.totals().plurality()
}


/// Returns `Some(label)` if every row of `dataset` has that label.
#[inline]
pub fn same_classification(dataset: &Dataset) -> Option<Label> {
    dataset.totals().single_outcome()
}


impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "\
            ----------\n\
            # Decision Tree Weak Learner\n\n\
            - Splitting criterion: Information gain\n\
            - Attributes:\
            "
        )?;

        for name in self.attributes.iter() {
            writeln!(f, "\t* {name}")?;
        }

        write!(f, "----------")
    }
}
