use std::iter::FusedIterator;

use super::DecodedNode;

/// A depth-first, pre-order iterator over the nodes of a [DecodedScene](super::DecodedScene).
pub struct NodeIter<'scene> {
    /// Siblings not yet visited, and their depth
    stack: Vec<(std::slice::Iter<'scene, DecodedNode>, usize)>,
}

impl<'scene> NodeIter<'scene> {
    pub(crate) fn new(roots: &'scene [DecodedNode]) -> Self {
        Self {
            stack: vec![(roots.iter(), 0)],
        }
    }
}

impl<'scene> FusedIterator for NodeIter<'scene> {}

impl<'scene> Iterator for NodeIter<'scene> {
    type Item = (&'scene DecodedNode, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((siblings, depth)) = self.stack.last_mut() {
            let depth = *depth;
            match siblings.next() {
                Some(node) => {
                    // descend before moving on to this node's next sibling
                    if !node.children.is_empty() {
                        self.stack.push((node.children.iter(), depth + 1));
                    }
                    return Some((node, depth));
                }
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}
