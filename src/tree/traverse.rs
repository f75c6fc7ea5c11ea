use std::iter::FusedIterator;

use super::Node;

/// Order in which a traversal visits the nodes of a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Left subtree, node, right subtree. Yields nodes by ascending id.
    Inorder,
    /// Node, left subtree, right subtree.
    Preorder,
    /// Left subtree, right subtree, node.
    Postorder,
}

/// A lazy iterator over the nodes of a tree.
///
/// This `struct` is created by the [`traverse`] and [`iter`] methods on [`Tree`].
///
/// [`Tree`]: struct.Tree.html
/// [`traverse`]: struct.Tree.html#method.traverse
/// [`iter`]: struct.Tree.html#method.iter
pub struct Traverse<'a> {
    order: Order,
    // Pending nodes, flagged whether their subtrees have been scheduled already
    stack: Vec<(&'a Node, bool)>,
}

impl<'a> Traverse<'a> {
    pub(super) fn new(root: Option<&'a Node>, order: Order) -> Self {
        Self {
            order,
            stack: root.map(|node| (node, false)).into_iter().collect(),
        }
    }

    pub fn order(&self) -> Order {
        self.order
    }

    // Stack is LIFO, so push in reverse visiting order
    fn expand(&mut self, node: &'a Node) {
        let left = node.left();
        let right = node.right();
        match self.order {
            Order::Inorder => {
                self.push(right);
                self.stack.push((node, true));
                self.push(left);
            }
            Order::Preorder => {
                self.push(right);
                self.push(left);
                self.stack.push((node, true));
            }
            Order::Postorder => {
                self.stack.push((node, true));
                self.push(right);
                self.push(left);
            }
        }
    }

    fn push(&mut self, child: Option<&'a Node>) {
        if let Some(node) = child {
            self.stack.push((node, false));
        }
    }
}

impl<'a> Iterator for Traverse<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(node);
            }
            self.expand(node);
        }
    }
}

impl FusedIterator for Traverse<'_> {}
