use crate::sample::Dataset;
use super::decision_tree_algorithm::DecisionTree;


/// A struct that builds `DecisionTree`.
/// `DecisionTreeBuilder` keeps parameters for constructing `DecisionTree`.
///
/// # Example
///
/// ```no_run
/// use id3boosts::prelude::*;
///
/// let dataset = SampleReader::new()
///     .file("/path/to/data.txt")
///     .read()
///     .unwrap();
/// let tree = DecisionTreeBuilder::new(&dataset)
///     .attributes(["outlook", "humidity"])
///     .build();
/// ```
#[derive(Clone)]
pub struct DecisionTreeBuilder<'a> {
    dataset: &'a Dataset,
    attributes: Vec<String>,
}


impl<'a> DecisionTreeBuilder<'a> {
    /// Construct a new instance of [`DecisionTreeBuilder`].
    /// By default, every attribute of the schema is a split candidate.
    pub fn new(dataset: &'a Dataset) -> Self {
        let attributes = dataset.schema()
            .attributes()
            .to_vec();

        Self { dataset, attributes }
    }


    /// Restrict the split candidates to the named attributes.
    /// Names that are not in the schema are ignored;
    /// the candidates keep the schema's column order.
    pub fn attributes<I, S>(mut self, names: I) -> Self
        where I: IntoIterator<Item = S>,
              S: AsRef<str>,
    {
        let names = names.into_iter()
            .map(|name| name.as_ref().to_string())
            .collect::<Vec<_>>();

        self.attributes = self.dataset.schema()
            .attributes()
            .iter()
            .filter(|attr| names.contains(attr))
            .cloned()
            .collect();
        self
    }


    /// Build a `DecisionTree`.
    /// This method consumes `self`.
    pub fn build(self) -> DecisionTree {
        DecisionTree::from_components(self.attributes)
    }
}
