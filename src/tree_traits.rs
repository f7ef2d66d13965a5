//! Rendering of lineages as indented trees.

use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

use crate::domain::LineageArena;

pub trait TreeNodeConvert {
    fn to_tree_string(&self, root: Index) -> Tree<String>;
}

impl TreeNodeConvert for LineageArena {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self, root: Index) -> Tree<String> {
        let label = self
            .get_node(root)
            .map(|node| node.vampire.to_string())
            .unwrap_or_else(|| "empty lineage".to_string());
        let mut tree = Tree::new(label);

        fn build_tree(arena: &LineageArena, node_idx: Index, parent_tree: &mut Tree<String>) {
            if let Some(node) = arena.get_node(node_idx) {
                for &child_idx in &node.children {
                    if let Some(child) = arena.get_node(child_idx) {
                        let mut child_tree = Tree::new(child.vampire.to_string());
                        build_tree(arena, child_idx, &mut child_tree);
                        parent_tree.push(child_tree);
                    }
                }
            }
        }

        build_tree(self, root, &mut tree);
        tree
    }
}
