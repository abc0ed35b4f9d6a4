//! Defines the inner representation
//! of the Decision Tree class.
use rand::prelude::*;
use tracing::{debug, warn};

use crate::sample::{Dataset, Label, SampleKey};

use std::fmt;
use std::rc::{Rc, Weak};
use std::cell::RefCell;


/// Shared pointer to a tree node.
/// Edges may share a child, see [`BranchNode::graft_random_edge`].
pub(crate) type NodePtr = Rc<RefCell<Node>>;


/// Enumeration of `BranchNode` and `LeafNode`.
pub enum Node {
    /// A node that splits on one attribute.
    Branch(BranchNode),


    /// A node that have no child.
    Leaf(LeafNode),
}


/// Represents the decision nodes of the tree.
/// There is one edge per attribute value seen while growing the tree.
pub struct BranchNode {
    // Attribute tested at this node.
    pub(super) attribute: String,


    // Number of decision nodes above this one.
    pub(super) depth: usize,


    // `(value, child)` pairs in first-seen order.
    pub(super) edges: Vec<(String, NodePtr)>,


    // The decision node above this one and
    // the value on the edge leading here.
    pub(super) parent: Weak<RefCell<Node>>,
    pub(super) via: Option<String>,
}


/// Represents the leaf nodes of decision tree.
pub struct LeafNode {
    pub(super) label: Label,
}


impl Node {
    /// Construct a leaf node that outputs `label`.
    #[inline]
    pub(super) fn leaf(label: Label) -> NodePtr {
        Rc::new(RefCell::new(Node::Leaf(LeafNode { label })))
    }


    /// Construct a decision node without edges.
    #[inline]
    pub(super) fn branch<S>(attribute: S, depth: usize) -> NodePtr
        where S: Into<String>
    {
        let branch = BranchNode {
            attribute: attribute.into(),
            depth,
            edges: Vec::new(),
            parent: Weak::new(),
            via: None,
        };
        Rc::new(RefCell::new(Node::Branch(branch)))
    }


    /// Append the edge `value -> child` to `parent`.
    /// `parent` must be a decision node.
    pub(super) fn attach(parent: &NodePtr, value: String, child: NodePtr) {
        if let Node::Branch(ref mut branch) = *child.borrow_mut() {
            branch.parent = Rc::downgrade(parent);
            branch.via = Some(value.clone());
        }
        if let Node::Branch(ref mut branch) = *parent.borrow_mut() {
            branch.edges.push((value, child));
        }
    }


    #[inline]
    pub(super) fn is_leaf(&self) -> bool {
        match self {
            Node::Branch(_) => false,
            Node::Leaf(_) => true,
        }
    }


    /// Returns the number of leaves reachable through distinct edges.
    pub(super) fn leaves(&self) -> usize {
        match self {
            Node::Branch(ref branch) => {
                branch.edges.iter()
                    .map(|(_, child)| child.borrow().leaves())
                    .sum()
            },
            Node::Leaf(_) => 1_usize,
        }
    }


    /// Write this subtree in preorder, one line per edge.
    pub(super) fn write_tree(&self, f: &mut fmt::Formatter<'_>)
        -> fmt::Result
    {
        match self {
            Node::Leaf(leaf) => writeln!(f, ": {}", leaf.label),
            Node::Branch(branch) => {
                let indent = "|   ".repeat(branch.depth);
                for (value, child) in branch.edges.iter() {
                    write!(f, "{indent}{} = {value}", branch.attribute)?;
                    let child = child.borrow();
                    if child.is_leaf() {
                        child.write_tree(f)?;
                    } else {
                        writeln!(f)?;
                        child.write_tree(f)?;
                    }
                }
                Ok(())
            },
        }
    }


    pub(super) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Node::Branch(branch) => {
                let mut info = vec![format!(
                    "\tnode_{id} [ label = \"{attr} ?\" ];\n",
                    attr = branch.attribute,
                )];

                let mut next_id = id + 1;
                for (value, child) in branch.edges.iter() {
                    let child_id = next_id;
                    let (mut child_info, ret_id) = child.borrow()
                        .to_dot_info(child_id);
                    info.append(&mut child_info);
                    info.push(format!(
                        "\tnode_{id} -- node_{child_id} \
                         [ label = \"{value}\" ];\n",
                    ));
                    next_id = ret_id;
                }

                (info, next_id)
            },
            Node::Leaf(leaf) => {
                let info = format!(
                    "\tnode_{id} [ label = \"{label}\", shape = box ];\n",
                    label = leaf.label,
                );

                (vec![info], id + 1)
            },
        }
    }
}


impl BranchNode {
    /// The child reached through the edge labelled `value`.
    #[inline]
    fn child_for(&self, value: &str) -> Option<NodePtr> {
        self.edges.iter()
            .find(|(v, _)| v == value)
            .map(|(_, child)| Rc::clone(child))
    }


    /// The `attribute = value` steps from the root down to this node.
    pub(super) fn path(&self) -> Vec<String> {
        let mut steps = Vec::new();
        let mut via = self.via.clone();
        let mut parent = self.parent.upgrade();
        while let Some(node) = parent {
            let node = node.borrow();
            let Node::Branch(ref branch) = *node else { break; };
            if let Some(value) = via {
                steps.push(format!("{} = {value}", branch.attribute));
            }
            via = branch.via.clone();
            parent = branch.parent.upgrade();
        }
        steps.reverse();
        steps
    }


    /// Pick the child that `key` falls into.
    ///
    /// 1. Follow the edge labelled with the key's value for this attribute.
    /// 2. If that value never occurs in `dataset` for this attribute,
    ///    retry with the first value of the attribute's domain.
    /// 3. Otherwise the traversal is stuck and
    ///    [`graft_random_edge`](Self::graft_random_edge) decides.
    ///
    /// Returns `None` only for a decision node without edges.
    pub(super) fn descend<R>(
        &mut self,
        key: &SampleKey,
        dataset: &Dataset,
        rng: &mut R,
    ) -> Option<NodePtr>
        where R: Rng + ?Sized
    {
        let index = dataset.schema().index_of(&self.attribute);
        let value = index.and_then(|i| key.get(i));

        if let Some(child) = value.and_then(|v| self.child_for(v)) {
            return Some(child);
        }

        let domain = index.map(|i| dataset.domain(i))
            .unwrap_or_default();

        let unseen = value.map_or(true, |v| !domain.contains(&v));
        if unseen {
            if let Some(&first) = domain.first() {
                debug!(
                    attribute = %self.attribute,
                    value = value.unwrap_or_default(),
                    substitute = first,
                    "substituting an unseen attribute value"
                );
                if let Some(child) = self.child_for(first) {
                    return Some(child);
                }
            }
        }

        self.graft_random_edge(&domain[..], rng)
    }


    /// Stuck-traversal fallback.
    ///
    /// Picks a value uniformly at random from `domain`, appends the edge
    /// `value -> first child` to this node and returns the first child.
    /// This mutates the tree: later lookups see the synthetic edge, and
    /// the outcome depends on `rng`, so predictions stop being
    /// deterministic unless the caller pins the random source.
    /// Existing edges are looked up first, so a synthetic edge never
    /// shadows a grown one.
    pub(super) fn graft_random_edge<R>(
        &mut self,
        domain: &[&str],
        rng: &mut R,
    ) -> Option<NodePtr>
        where R: Rng + ?Sized
    {
        let first = self.edges.first()
            .map(|(_, child)| Rc::clone(child))?;

        if let Some(&value) = domain.choose(rng) {
            warn!(
                attribute = %self.attribute,
                path = %self.path().join(", "),
                value,
                "prediction is stuck; adding a synthetic edge to the first child"
            );
            self.edges.push((value.to_string(), Rc::clone(&first)));
        }
        Some(first)
    }
}


impl fmt::Debug for BranchNode {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BranchNode")
            .field("attribute", &self.attribute)
            .field("depth", &self.depth)
            .field("edges", &self.edges)
            .finish()
    }
}


impl fmt::Debug for LeafNode {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeafNode")
            .field("label", &self.label)
            .finish()
    }
}


impl fmt::Debug for Node {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Branch(branch) => {
                write!(f, "{:?}", branch)
            },
            Node::Leaf(leaf) => {
                write!(f, "{:?}", leaf)
            },
        }
    }
}
