use fxhash::FxHashMap;
use grid_util::point::Point;

use crate::node::SearchNode;

/// The open set of an A* search: a binary min-heap of [SearchNode]s keyed on
/// their estimated total cost `f`, with a position-to-slot table for constant
/// time membership checks and in-place cost decreases.
///
/// The heap is the classic array layout: the parent of slot `c` is
/// `(c - 1) / 2` and the children of slot `p` are `2p + 1` and `2p + 2`.
/// Callers keep at most one entry per position by going through
/// [index_of](Self::index_of) and [decrease](Self::decrease) instead of
/// inserting duplicates.
#[derive(Clone, Debug, Default)]
pub struct Frontier {
    nodes: Vec<SearchNode>,
    slots: FxHashMap<Point, usize>,
}

impl Frontier {
    pub fn new() -> Frontier {
        Frontier::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Adds a node and restores heap order by bubbling it up while its `f` is
    /// strictly smaller than its parent's. Equal costs do not swap.
    pub fn insert(&mut self, node: SearchNode) {
        debug_assert!(
            !self.slots.contains_key(&node.position),
            "duplicate frontier entry for {}",
            node.position
        );
        self.slots.insert(node.position, self.nodes.len());
        self.nodes.push(node);
        self.bubble_up(self.nodes.len() - 1);
    }

    /// Removes and returns the minimum-`f` node, or [None] if the frontier is
    /// empty. The last node is swapped into the root and bubbled down.
    pub fn pop(&mut self) -> Option<SearchNode> {
        if self.nodes.is_empty() {
            return None;
        }
        let root = self.nodes.swap_remove(0);
        self.slots.remove(&root.position);
        if !self.nodes.is_empty() {
            self.slots.insert(self.nodes[0].position, 0);
            self.bubble_down(0);
        }
        Some(root)
    }

    /// The heap slot currently holding `position`, if it is open.
    pub fn index_of(&self, position: Point) -> Option<usize> {
        self.slots.get(&position).copied()
    }

    pub fn get(&self, index: usize) -> Option<&SearchNode> {
        self.nodes.get(index)
    }

    /// Replaces the node in `index` with a cheaper route to the same position
    /// and bubbles it up. The position must match and the new `f` must not
    /// exceed the stored one.
    pub fn decrease(&mut self, index: usize, node: SearchNode) {
        debug_assert_eq!(self.nodes[index].position, node.position);
        debug_assert!(node.f <= self.nodes[index].f);
        self.nodes[index] = node;
        self.bubble_up(index);
    }

    fn bubble_up(&mut self, mut child: usize) {
        while child > 0 {
            let parent = (child - 1) / 2;
            if self.nodes[parent].f > self.nodes[child].f {
                self.swap(parent, child);
                child = parent;
            } else {
                break;
            }
        }
    }

    fn bubble_down(&mut self, mut parent: usize) {
        loop {
            let left = 2 * parent + 1;
            if left >= self.nodes.len() {
                break;
            }
            let right = left + 1;
            // Left child wins ties.
            let child = if right < self.nodes.len() && self.nodes[right].f < self.nodes[left].f {
                right
            } else {
                left
            };
            if self.nodes[child].f < self.nodes[parent].f {
                self.swap(parent, child);
                parent = child;
            } else {
                break;
            }
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.nodes.swap(a, b);
        self.slots.insert(self.nodes[a].position, a);
        self.slots.insert(self.nodes[b].position, b);
    }
}
