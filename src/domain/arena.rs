//! Arena-backed vampire lineages and their queries.

use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::domain::entities::Vampire;
use crate::domain::error::{DomainError, DomainResult};

/// Tree node in the arena-based lineage structure.
#[derive(Debug)]
pub struct LineageNode {
    /// Vampire payload for this node
    pub vampire: Vampire,
    /// Index of the creator in the arena, None for originals
    pub parent: Option<Index>,
    /// Indices of offspring, in siring order
    pub children: Vec<Index>,
}

/// Arena-based forest of vampire lineages.
///
/// Uses generational arena for memory-safe node references and O(1) lookups.
/// Ownership flows strictly from creator to offspring; the parent link is a
/// plain back-index and never owns. Each root is an original vampire, and
/// several independent lineages may coexist in one arena.
#[derive(Debug)]
pub struct LineageArena {
    /// Arena storage for all lineage nodes
    arena: Arena<LineageNode>,
    /// Indices of the original vampires, in insertion order
    roots: Vec<Index>,
}

impl Default for LineageArena {
    fn default() -> Self {
        Self::new()
    }
}

impl LineageArena {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            roots: Vec::new(),
        }
    }

    /// Creates a vampire and links it under `parent`, or starts a new
    /// lineage when `parent` is `None`.
    ///
    /// Both sides of the relation are updated together, so the offspring
    /// list and the back-reference cannot diverge. A stale parent index is
    /// rejected before anything is inserted.
    #[instrument(level = "trace", skip(self))]
    pub fn insert_node(&mut self, vampire: Vampire, parent: Option<Index>) -> DomainResult<Index> {
        if let Some(parent_idx) = parent {
            if !self.arena.contains(parent_idx) {
                return Err(DomainError::StaleIndex(parent_idx));
            }
        }

        let node_idx = self.arena.insert(LineageNode {
            vampire,
            parent,
            children: Vec::new(),
        });

        match parent {
            Some(parent_idx) => {
                if let Some(parent_node) = self.arena.get_mut(parent_idx) {
                    parent_node.children.push(node_idx);
                }
            }
            None => self.roots.push(node_idx),
        }

        Ok(node_idx)
    }

    pub fn get_node(&self, idx: Index) -> Option<&LineageNode> {
        self.arena.get(idx)
    }

    pub fn get_node_mut(&mut self, idx: Index) -> Option<&mut LineageNode> {
        self.arena.get_mut(idx)
    }

    /// Indices of the original vampires, in insertion order.
    pub fn roots(&self) -> &[Index] {
        &self.roots
    }

    /// Total number of vampires across all lineages.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Creator of `idx`, `None` for originals and unknown indices.
    pub fn parent_of(&self, idx: Index) -> Option<Index> {
        self.get_node(idx).and_then(|node| node.parent)
    }

    /// Number of direct offspring of `idx`.
    pub fn offspring_count(&self, idx: Index) -> usize {
        self.get_node(idx).map_or(0, |node| node.children.len())
    }

    /// Number of creator-hops from `idx` up to its original; originals are 0.
    #[instrument(level = "trace", skip(self))]
    pub fn depth_from_root(&self, idx: Index) -> usize {
        let mut depth = 0;
        let mut current = idx;
        while let Some(parent_idx) = self.parent_of(current) {
            depth += 1;
            current = parent_idx;
        }
        depth
    }

    /// True iff `a` sits strictly closer to its original than `b`.
    ///
    /// This compares depth only, not ancestry: vampires at equal depth are
    /// never senior to each other, even across different subtrees.
    #[instrument(level = "trace", skip(self))]
    pub fn is_more_senior(&self, a: Index, b: Index) -> bool {
        self.depth_from_root(a) < self.depth_from_root(b)
    }

    /// First vampire named `name` in `start`'s subtree, pre-order.
    #[instrument(level = "debug", skip(self))]
    pub fn find_by_name(&self, start: Index, name: &str) -> Option<Index> {
        self.iter_subtree(start)
            .find(|(_, node)| node.vampire.name == name)
            .map(|(idx, _)| idx)
    }

    /// Total number of vampires below `idx`, excluding `idx` itself.
    #[instrument(level = "trace", skip(self))]
    pub fn count_descendants(&self, idx: Index) -> usize {
        match self.get_node(idx) {
            Some(node) => node
                .children
                .iter()
                .map(|&child| 1 + self.count_descendants(child))
                .sum(),
            None => 0,
        }
    }

    /// Collects every vampire in `start`'s subtree whose payload satisfies
    /// `predicate`, in pre-order: self before offspring, siblings in siring
    /// order, each subtree fully before the next sibling's.
    pub fn collect_where<F>(&self, start: Index, predicate: F) -> Vec<Index>
    where
        F: Fn(&Vampire) -> bool,
    {
        self.iter_subtree(start)
            .filter(|(_, node)| predicate(&node.vampire))
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Vampires in `start`'s subtree converted strictly after `year`.
    #[instrument(level = "debug", skip(self))]
    pub fn converted_after(&self, start: Index, year: i32) -> Vec<Index> {
        self.collect_where(start, |vampire| vampire.year_converted > year)
    }

    /// Nearest vampire that is an ancestor of (or equal to) both `a` and `b`.
    ///
    /// When one argument is a direct ancestor of the other, the more senior
    /// one is the answer. The walk first lifts the deeper node until both
    /// depths match, then climbs both chains in lockstep until the indices
    /// coincide. Running out of parents on both sides means the two descend
    /// from different originals.
    #[instrument(level = "debug", skip(self))]
    pub fn closest_common_ancestor(&self, a: Index, b: Index) -> DomainResult<Index> {
        if !self.arena.contains(a) {
            return Err(DomainError::StaleIndex(a));
        }
        if !self.arena.contains(b) {
            return Err(DomainError::StaleIndex(b));
        }

        let (mut junior, mut senior) = if self.is_more_senior(a, b) {
            (b, a)
        } else {
            (a, b)
        };

        let senior_depth = self.depth_from_root(senior);
        let mut junior_depth = self.depth_from_root(junior);
        while junior_depth > senior_depth {
            match self.parent_of(junior) {
                Some(parent_idx) => {
                    junior = parent_idx;
                    junior_depth -= 1;
                }
                None => break,
            }
        }

        loop {
            if junior == senior {
                return Ok(senior);
            }
            match (self.parent_of(junior), self.parent_of(senior)) {
                (Some(junior_parent), Some(senior_parent)) => {
                    junior = junior_parent;
                    senior = senior_parent;
                }
                _ => return Err(self.disjoint_error(a, b)),
            }
        }
    }

    fn disjoint_error(&self, a: Index, b: Index) -> DomainError {
        let name = |idx: Index| {
            self.get_node(idx)
                .map(|node| node.vampire.name.clone())
                .unwrap_or_default()
        };
        DomainError::DisjointLineages {
            a: name(a),
            b: name(b),
        }
    }

    /// Number of generations on the longest line, across all lineages.
    #[instrument(level = "debug", skip(self))]
    pub fn generations(&self) -> usize {
        self.roots
            .iter()
            .map(|&root| self.generations_below(root))
            .max()
            .unwrap_or(0)
    }

    fn generations_below(&self, node_idx: Index) -> usize {
        if let Some(node) = self.get_node(node_idx) {
            1 + node
                .children
                .iter()
                .map(|&child| self.generations_below(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }

    /// Collects all vampires without offspring, in pre-order.
    #[instrument(level = "debug", skip(self))]
    pub fn childless(&self) -> Vec<Index> {
        self.iter()
            .filter(|(_, node)| node.children.is_empty())
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Pre-order traversal over the whole forest, lineages in root order.
    pub fn iter(&self) -> TreeIterator {
        TreeIterator::over_forest(self)
    }

    /// Pre-order traversal over `start`'s subtree only.
    pub fn iter_subtree(&self, start: Index) -> TreeIterator {
        TreeIterator::over_subtree(self, start)
    }

    /// Post-order traversal over the whole forest (offspring before maker).
    pub fn iter_postorder(&self) -> PostOrderIterator {
        PostOrderIterator::new(self)
    }
}

pub struct TreeIterator<'a> {
    arena: &'a LineageArena,
    stack: Vec<Index>,
}

impl<'a> TreeIterator<'a> {
    fn over_forest(arena: &'a LineageArena) -> Self {
        let stack = arena.roots.iter().rev().copied().collect();
        Self { arena, stack }
    }

    fn over_subtree(arena: &'a LineageArena, start: Index) -> Self {
        let stack = if arena.arena.contains(start) {
            vec![start]
        } else {
            Vec::new()
        };
        Self { arena, stack }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = (Index, &'a LineageNode);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.arena.get_node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}

pub struct PostOrderIterator<'a> {
    arena: &'a LineageArena,
    stack: Vec<(Index, bool)>,
}

impl<'a> PostOrderIterator<'a> {
    fn new(arena: &'a LineageArena) -> Self {
        let stack = arena.roots.iter().rev().map(|&root| (root, false)).collect();
        Self { arena, stack }
    }
}

impl<'a> Iterator for PostOrderIterator<'a> {
    type Item = (Index, &'a LineageNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current_idx, visited)) = self.stack.pop() {
            if let Some(node) = self.arena.get_node(current_idx) {
                if !visited {
                    self.stack.push((current_idx, true));
                    for &child in node.children.iter().rev() {
                        self.stack.push((child, false));
                    }
                } else {
                    return Some((current_idx, node));
                }
            }
        }
        None
    }
}
