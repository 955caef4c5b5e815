/*
Rendering of the skyline tree for diagnostics.

termtree::Tree is foreign, so the conversion lives in a local trait
implemented for the domain types.
 */
use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

use crate::domain::Skyline;

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeNodeConvert for Skyline {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        if self.is_empty() {
            return Tree::new("(empty skyline)".to_string());
        }

        fn build_tree(skyline: &Skyline, node_idx: Index, label: String) -> Tree<String> {
            let mut tree = Tree::new(label);
            if let Some(node) = skyline.get_node(node_idx) {
                let children = [("L", node.left), ("R", node.right)];
                for (side, child_idx) in children {
                    let Some(child_idx) = child_idx else { continue };
                    // empty leaves carry nothing worth showing
                    let Some(child) = skyline.get_node(child_idx) else { continue };
                    if child.building.is_empty() {
                        continue;
                    }
                    let child_label = format!("{side} {}", child.building);
                    tree.push(build_tree(skyline, child_idx, child_label));
                }
            }
            tree
        }

        let root = self.root();
        let label = self
            .get_node(root)
            .map(|n| n.building.to_string())
            .unwrap_or_default();
        build_tree(self, root, label)
    }
}
