//! The roster tree: an AVL tree mapping ids to names.

use std::cmp::{self, Ordering};
use std::fmt;
use std::ops::ControlFlow;

use log::{debug, trace};

use crate::error::TreeError;
use crate::id::Id;

mod traverse;
pub use traverse::{Order, Traverse};

/// An AVL tree keyed by [`Id`], storing one name per id.
///
/// Every mutation rebalances the nodes on its path, so the heights of the two
/// subtrees of any node differ by at most one.
///
/// ```
/// use avl_roster::{Id, Order, Tree};
/// let mut tree = Tree::new();
/// let id = |v| Id::new(v).unwrap();
/// tree.insert(id(3), "Carol").unwrap();
/// tree.insert(id(1), "Alice").unwrap();
/// tree.insert(id(2), "Bob").unwrap();
/// assert_eq!(tree.root().map(|node| node.id()), Some(id(2)));
/// assert_eq!(tree.names(Order::Inorder).collect::<Vec<_>>(), ["Alice", "Bob", "Carol"]);
/// assert!(tree.insert(id(2), "Bobby").is_err());
/// ```
pub struct Tree {
    root: Link,
    num_nodes: usize,
}

/// A stored record, exposed read-only for inspecting the tree shape.
pub struct Node {
    id: Id,
    name: String,
    height: usize,
    left: Link,
    right: Link,
}

type Link = Option<Box<Node>>;

impl Tree {
    /// Creates an empty tree.
    /// No memory is allocated until the first record is inserted.
    pub fn new() -> Self {
        Self {
            root: None,
            num_nodes: 0,
        }
    }

    /// Returns true if the tree contains no records.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of records in the tree.
    pub fn len(&self) -> usize {
        self.num_nodes
    }

    /// Returns the number of levels of the tree, 0 if it is empty.
    pub fn height(&self) -> usize {
        height(&self.root)
    }

    /// Returns the root node, if any.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Removes all records.
    pub fn clear(&mut self) {
        self.root = None;
        self.num_nodes = 0;
    }

    /// Returns the name stored under the id.
    pub fn get(&self, id: Id) -> Option<&str> {
        self.find(id).map(Node::name)
    }

    /// Returns true if the tree contains the id.
    pub fn contains(&self, id: Id) -> bool {
        self.find(id).is_some()
    }

    /// Returns the name stored under the id, or `NotFound`.
    pub fn search(&self, id: Id) -> Result<&str, TreeError> {
        self.get(id).ok_or(TreeError::NotFound(id))
    }

    /// Returns the ids of all records with exactly this name, in ascending order.
    ///
    /// Names are not ordered, so this visits every node.
    pub fn search_name<'a>(&'a self, name: &'a str) -> impl Iterator<Item = Id> + 'a {
        self.iter()
            .filter(move |node| node.name == name)
            .map(Node::id)
    }

    /// Inserts a record.
    /// Fails with `DuplicateKey` if the id is already present, leaving the tree unchanged.
    pub fn insert(&mut self, id: Id, name: impl Into<String>) -> Result<(), TreeError> {
        match Self::insert_into(&mut self.root, id, name.into()) {
            Ok(()) => {
                self.num_nodes += 1;
                debug!("inserted {id}, {} records", self.num_nodes);
                Ok(())
            }
            Err(err) => {
                debug!("insert rejected: {err}");
                Err(err)
            }
        }
    }

    /// Removes the record with the id and returns its name.
    /// Fails with `NotFound` if the id is absent, leaving the tree unchanged.
    pub fn remove(&mut self, id: Id) -> Result<String, TreeError> {
        match Self::remove_from(&mut self.root, id) {
            Some(node) => {
                debug_assert!(self.num_nodes >= 1);
                self.num_nodes -= 1;
                debug!("removed {id}, {} records", self.num_nodes);
                Ok(node.name)
            }
            None => {
                debug!("remove rejected: {id} not found");
                Err(TreeError::NotFound(id))
            }
        }
    }

    /// Removes the record at the given zero-based in-order position and returns it.
    /// Fails with `RankOutOfRange` if `rank >= len()`.
    pub fn remove_at_rank(&mut self, rank: usize) -> Result<(Id, String), TreeError> {
        let mut remaining = rank;
        match Self::id_at_rank(&self.root, &mut remaining) {
            ControlFlow::Break(id) => {
                let name = self.remove(id)?;
                Ok((id, name))
            }
            ControlFlow::Continue(()) => {
                debug!("remove at rank {rank} rejected, {} records", self.num_nodes);
                Err(TreeError::RankOutOfRange {
                    rank,
                    len: self.num_nodes,
                })
            }
        }
    }

    /// Gets an iterator over the nodes in ascending id order.
    pub fn iter(&self) -> Traverse<'_> {
        self.traverse(Order::Inorder)
    }

    /// Gets an iterator over the nodes in the given order.
    pub fn traverse(&self, order: Order) -> Traverse<'_> {
        Traverse::new(self.root.as_deref(), order)
    }

    /// Gets an iterator over the names in the given order.
    pub fn names(&self, order: Order) -> impl Iterator<Item = &str> + '_ {
        self.traverse(order).map(Node::name)
    }

    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        // Check tree nodes, returns height and number of nodes
        fn check(link: &Link, lower: Option<Id>, upper: Option<Id>) -> (usize, usize) {
            match link {
                None => (0, 0),
                Some(node) => {
                    // Check search order against ancestors
                    assert!(lower.map_or(true, |lower| lower < node.id));
                    assert!(upper.map_or(true, |upper| node.id < upper));

                    let (left_height, left_nodes) = check(&node.left, lower, Some(node.id));
                    let (right_height, right_nodes) = check(&node.right, Some(node.id), upper);

                    // Check height
                    assert_eq!(node.height, cmp::max(left_height, right_height) + 1);

                    // Check AVL condition (nearly balance)
                    assert!(left_height <= right_height + 1);
                    assert!(right_height <= left_height + 1);

                    (node.height, left_nodes + right_nodes + 1)
                }
            }
        }

        let (_, num_nodes) = check(&self.root, None, None);

        // Check number of nodes
        assert_eq!(num_nodes, self.num_nodes);
        assert_eq!(self.is_empty(), self.num_nodes == 0);
    }

    fn find(&self, id: Id) -> Option<&Node> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match id.cmp(&node.id) {
                Ordering::Equal => break,
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            }
        }
        current
    }

    fn insert_into(link: &mut Link, id: Id, name: String) -> Result<(), TreeError> {
        match link {
            None => {
                *link = Some(Node::create(id, name));
                Ok(())
            }
            Some(node) => {
                match id.cmp(&node.id) {
                    Ordering::Equal => return Err(TreeError::DuplicateKey(id)),
                    Ordering::Less => Self::insert_into(&mut node.left, id, name)?,
                    Ordering::Greater => Self::insert_into(&mut node.right, id, name)?,
                }
                Self::rebalance_link(link);
                Ok(())
            }
        }
    }

    // Unlinks the node with the given id from the subtree and returns it.
    fn remove_from(link: &mut Link, id: Id) -> Option<Box<Node>> {
        let node = link.as_mut()?;
        let removed = match id.cmp(&node.id) {
            Ordering::Less => Self::remove_from(&mut node.left, id)?,
            Ordering::Greater => Self::remove_from(&mut node.right, id)?,
            Ordering::Equal => {
                let mut removed = link.take()?;
                *link = match (removed.left.take(), removed.right.take()) {
                    (None, right) => right,
                    (left, None) => left,
                    (left, Some(right)) => {
                        // Replace by in-order successor, the smallest node of the right subtree
                        let (rest, mut successor) = Self::unlink_min(right);
                        successor.left = left;
                        successor.right = rest;
                        Some(Self::rebalance(successor))
                    }
                };
                return Some(removed);
            }
        };
        Self::rebalance_link(link);
        Some(removed)
    }

    // Splits the smallest node off the subtree.
    // Returns the rebalanced remainder and the detached node.
    fn unlink_min(mut node: Box<Node>) -> (Link, Box<Node>) {
        match node.left.take() {
            None => (node.right.take(), node),
            Some(left) => {
                let (rest, min_node) = Self::unlink_min(left);
                node.left = rest;
                (Some(Self::rebalance(node)), min_node)
            }
        }
    }

    fn id_at_rank(link: &Link, remaining: &mut usize) -> ControlFlow<Id> {
        if let Some(node) = link {
            Self::id_at_rank(&node.left, remaining)?;
            if *remaining == 0 {
                return ControlFlow::Break(node.id);
            }
            *remaining -= 1;
            Self::id_at_rank(&node.right, remaining)?;
        }
        ControlFlow::Continue(())
    }

    fn rotate_left(mut node: Box<Node>) -> Box<Node> {
        match node.right.take() {
            None => node,
            Some(mut right) => {
                trace!("rotate left at {}", node.id);
                node.right = right.left.take();
                node.adjust_height();
                right.left = Some(node);
                right
            }
        }
    }

    fn rotate_right(mut node: Box<Node>) -> Box<Node> {
        match node.left.take() {
            None => node,
            Some(mut left) => {
                trace!("rotate right at {}", node.id);
                node.left = left.right.take();
                node.adjust_height();
                left.right = Some(node);
                left
            }
        }
    }

    fn rebalance_link(link: &mut Link) {
        if let Some(node) = link.take() {
            *link = Some(Self::rebalance(node));
        }
    }

    /// Restores AVL condition (balance) at given node if necessary and adjusts height.
    /// Both subtrees must already be balanced, with a height difference of at most 2.
    /// Returns the root of the rebalanced subtree.
    fn rebalance(mut node: Box<Node>) -> Box<Node> {
        let balance = node.balance_factor();
        debug_assert!((-2..=2).contains(&balance));
        if balance < -1 {
            // Right heavy, right-left case needs the right child rotated first
            if balance_factor(&node.right) > 0 {
                node.right = node.right.take().map(Self::rotate_right);
            }
            node = Self::rotate_left(node);
        } else if balance > 1 {
            // Left heavy, left-right case needs the left child rotated first
            if balance_factor(&node.left) < 0 {
                node.left = node.left.take().map(Self::rotate_left);
            }
            node = Self::rotate_right(node);
        }
        node.adjust_height();
        node
    }
}

impl Node {
    fn create(id: Id, name: String) -> Box<Node> {
        Box::new(Node {
            id,
            name,
            height: 1,
            left: None,
            right: None,
        })
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of levels of the subtree rooted at this node, 1 for a leaf.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    /// Height of the left subtree minus height of the right subtree.
    pub fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }

    fn adjust_height(&mut self) {
        self.height = cmp::max(height(&self.left), height(&self.right)) + 1;
    }
}

fn height(link: &Link) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

fn balance_factor(link: &Link) -> isize {
    link.as_ref().map_or(0, |node| node.balance_factor())
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|node| (node.id, &node.name)))
            .finish()
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = &'a Node;
    type IntoIter = Traverse<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: Into<String>> Extend<(Id, S)> for Tree {
    /// Inserts all records. The first record with a given id wins, later
    /// duplicates are skipped.
    fn extend<I: IntoIterator<Item = (Id, S)>>(&mut self, iter: I) {
        for (id, name) in iter {
            if let Err(err) = self.insert(id, name) {
                debug!("extend skipped record: {err}");
            }
        }
    }
}

/// Builds a tree from records. The first record with a given id wins.
///
/// ```
/// use avl_roster::{Id, Tree};
/// let id = Id::new(1).unwrap();
/// let tree: Tree = [(id, "Ann"), (id, "Bob")].into_iter().collect();
/// assert_eq!(tree.len(), 1);
/// assert_eq!(tree.get(id), Some("Ann"));
/// ```
impl<S: Into<String>> FromIterator<(Id, S)> for Tree {
    fn from_iter<I: IntoIterator<Item = (Id, S)>>(iter: I) -> Self {
        let mut tree = Tree::new();
        tree.extend(iter);
        tree
    }
}
