// Best-first frontier: a priority queue of pending nodes plus the rule that
// derives each node's children.
//
// Both engines are a `Frontier` with a different `Expand` implementation.
// Popping a node yields its item and pushes whatever children the expander
// derives from the node's key. If the item ranks never increase from parent
// to child, items leave the frontier in non-increasing rank order.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use hunter_core::Ranked;

/// Child-generation rule for a [`Frontier`].
pub trait Expand {
    /// Position of a node in the search space (an index path, an index pair).
    type Key;
    /// What a node yields when popped.
    type Item: Ranked;

    /// Append the children of the node at `key` to `children`.
    ///
    /// Each child must rank no higher than its parent, and each reachable
    /// key must have exactly one parent.
    fn expand(&mut self, key: &Self::Key, children: &mut Vec<(Self::Key, Self::Item)>);
}

/// A pending node. Ordered by the item's rank only; keys never participate.
struct Node<K, T> {
    key: K,
    item: T,
}

impl<K, T: Ranked> PartialEq for Node<K, T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K, T: Ranked> Eq for Node<K, T> {}

impl<K, T: Ranked> PartialOrd for Node<K, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K, T: Ranked> Ord for Node<K, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.item.rank().total_cmp(&other.item.rank())
    }
}

/// Max-heap of nodes driven by an [`Expand`] rule.
pub struct Frontier<E: Expand> {
    heap: BinaryHeap<Node<E::Key, E::Item>>,
    expander: E,
    /// Reused buffer for children of the node being popped.
    scratch: Vec<(E::Key, E::Item)>,
}

impl<E: Expand> Frontier<E> {
    /// Create an empty frontier.
    pub fn new(expander: E) -> Self {
        Self {
            heap: BinaryHeap::new(),
            expander,
            scratch: Vec::with_capacity(2),
        }
    }

    /// Add a node.
    pub fn push(&mut self, key: E::Key, item: E::Item) {
        self.heap.push(Node { key, item });
    }

    /// Pop the best node, push its children, and return its item.
    pub fn pop(&mut self) -> Option<E::Item> {
        let Node { key, item } = self.heap.pop()?;
        self.expander.expand(&key, &mut self.scratch);
        for (child_key, child_item) in self.scratch.drain(..) {
            self.heap.push(Node {
                key: child_key,
                item: child_item,
            });
        }
        Some(item)
    }

    /// Number of pending nodes.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn expander(&self) -> &E {
        &self.expander
    }
}

impl<E: Expand> Iterator for Frontier<E> {
    type Item = E::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.pop()
    }
}
