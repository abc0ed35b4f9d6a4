//! Defines the decision tree classifier.
use rand::Rng;

use crate::Classifier;
use crate::sample::{Dataset, Label, SampleKey};

use super::node::*;
use super::decision_tree_algorithm::plurality_value;

use std::fmt;
use std::rc::Rc;
use std::path::Path;
use std::fs::File;
use std::io::prelude::*;


/// Decision tree classifier.
/// This struct is just a wrapper of the root node.
///
/// Prediction takes `&mut self`:
/// a query whose traversal gets stuck grafts a synthetic edge
/// onto the tree (see [`Classifier::predict`]).
#[derive(Debug)]
pub struct DecisionTreeClassifier {
    root: NodePtr,
}


impl From<NodePtr> for DecisionTreeClassifier {
    #[inline]
    fn from(root: NodePtr) -> Self {
        Self { root }
    }
}


impl Classifier for DecisionTreeClassifier {
    fn predict<R>(&mut self, dataset: &Dataset, key: &SampleKey, rng: &mut R)
        -> Label
        where R: Rng + ?Sized
    {
        let mut node = Rc::clone(&self.root);
        loop {
            let next = match *node.borrow_mut() {
                Node::Leaf(ref leaf) => return leaf.label,
                Node::Branch(ref mut branch) => {
                    branch.descend(key, dataset, rng)
                },
            };

            match next {
                Some(child) => node = child,
                None => return plurality_value(dataset),
            }
        }
    }
}


impl DecisionTreeClassifier {
    /// Returns the number of leaves, counted once per edge.
    #[inline]
    pub fn leaves(&self) -> usize {
        self.root.borrow().leaves()
    }


    /// Write the current decision tree to dot file.
    #[inline]
    pub fn to_dot_file<P>(&self, path: P) -> std::io::Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(b"graph DecisionTree {\n")?;

        let info = self.root.borrow().to_dot_info(0).0;
        for row in info {
            f.write_all(row.as_bytes())?;
        }

        f.write_all(b"}\n")?;

        Ok(())
    }
}


impl fmt::Display for DecisionTreeClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.borrow().write_tree(f)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::Schema;
    use rand::prelude::*;

    fn key(values: &[&str]) -> SampleKey {
        values.iter().copied().collect()
    }


    fn toy() -> (DecisionTreeClassifier, Dataset) {
        let root = Node::branch("sky", 0);
        Node::attach(&root, "sunny".into(), Node::leaf(Label::Yes));
        Node::attach(&root, "rainy".into(), Node::leaf(Label::No));

        let mut data = Dataset::new(Schema::new(["sky"], "play"));
        data.record(key(&["sunny"]), Label::Yes).unwrap();
        data.record(key(&["rainy"]), Label::No).unwrap();
        data.record(key(&["cloudy"]), Label::No).unwrap();

        (DecisionTreeClassifier::from(root), data)
    }


    #[test]
    fn predicts_along_matching_edges() {
        let (mut f, data) = toy();
        let mut rng = StdRng::seed_from_u64(1234);
        let keys = [key(&["sunny"]), key(&["rainy"])];
        let predictions = f.predict_all(&data, &keys, &mut rng);
        assert_eq!(predictions, vec![Label::Yes, Label::No]);
    }


    #[test]
    fn unseen_value_uses_the_first_domain_value() {
        let (mut f, data) = toy();
        let mut rng = StdRng::seed_from_u64(1234);
        assert_eq!(f.predict(&data, &key(&["foggy"]), &mut rng), Label::Yes);
        assert_eq!(f.leaves(), 2);
    }


    #[test]
    fn stuck_prediction_terminates_and_grows_an_edge() {
        let (mut f, data) = toy();
        let mut rng = StdRng::seed_from_u64(1234);
        // `cloudy` is observed but has no edge.
        assert_eq!(f.predict(&data, &key(&["cloudy"]), &mut rng), Label::Yes);
        assert_eq!(f.leaves(), 3);
    }


    #[test]
    fn edgeless_branch_falls_back_to_the_plurality() {
        let (_, data) = toy();
        let mut f = DecisionTreeClassifier::from(Node::branch("sky", 0));
        let mut rng = StdRng::seed_from_u64(1234);
        assert_eq!(f.predict(&data, &key(&["sunny"]), &mut rng), Label::No);
    }


    #[test]
    fn leaf_only_tree_prints_its_label() {
        let mut f = DecisionTreeClassifier::from(Node::leaf(Label::Yes));
        assert_eq!(f.to_string(), ": yes\n");
        let (_, data) = toy();
        let mut rng = StdRng::seed_from_u64(1234);
        assert_eq!(f.predict(&data, &key(&["rainy"]), &mut rng), Label::Yes);
    }
}
