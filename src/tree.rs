//! Tree Utilities
//!
//! Flattening and lookup helpers for branch forests.

use crate::models::{Branch, Tree};

/// Separator between ancestor names in a flattened path label
pub const PATH_SEPARATOR: &str = " -- ";

/// One selectable row produced by flattening a tree
#[derive(Debug, Clone, PartialEq)]
pub struct BranchOption {
    pub branch: Branch,
    /// Ancestor names joined with `PATH_SEPARATOR`, e.g. "Setor -- Elétrica"
    pub path_label: String,
    pub depth: usize,
    /// False when the tree restricts selection to leaves and this branch has children
    pub is_selectable: bool,
}

/// Flatten a tree into depth-first display order.
///
/// When `onlyFinalOptions` is set, only leaf branches are selectable; the
/// rest stay visible for context but are rejected on pick.
pub fn flatten_tree(tree: &Tree) -> Vec<BranchOption> {
    fn collect(
        branches: &[Branch],
        prefix: &str,
        depth: usize,
        only_final: bool,
        result: &mut Vec<BranchOption>,
    ) {
        for branch in branches {
            let path_label = if prefix.is_empty() {
                branch.name.clone()
            } else {
                format!("{}{}{}", prefix, PATH_SEPARATOR, branch.name)
            };
            let is_leaf = branch.child_branches.is_empty();
            result.push(BranchOption {
                branch: branch.clone(),
                path_label: path_label.clone(),
                depth,
                is_selectable: !only_final || is_leaf,
            });
            collect(&branch.child_branches, &path_label, depth + 1, only_final, result);
        }
    }

    let mut result = Vec::new();
    collect(&tree.branches, "", 0, tree.only_final_options, &mut result);
    result
}

/// Depth-first branch lookup by id, first match wins
pub fn find_branch(branches: &[Branch], id_branch: u32) -> Option<&Branch> {
    for branch in branches {
        if branch.id_branch == id_branch {
            return Some(branch);
        }
        if let Some(found) = find_branch(&branch.child_branches, id_branch) {
            return Some(found);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_branch(id: u32, name: &str, children: Vec<Branch>) -> Branch {
        Branch {
            id_branch: id,
            id_tree: 1,
            name: name.to_string(),
            description: None,
            parent_branch_id: None,
            tags: None,
            is_active: true,
            child_branches: children,
        }
    }

    fn make_tree(only_final: bool, branches: Vec<Branch>) -> Tree {
        Tree {
            id_tree: 1,
            name: "Setores".to_string(),
            description: None,
            only_final_options: only_final,
            tabulation_tree: false,
            conformity_tree: false,
            is_active: true,
            branches,
        }
    }

    fn sample_forest() -> Vec<Branch> {
        vec![
            make_branch(
                1,
                "Raiz",
                vec![
                    make_branch(2, "A", vec![make_branch(4, "B", vec![])]),
                    make_branch(3, "C", vec![]),
                ],
            ),
            make_branch(5, "Outra", vec![]),
        ]
    }

    #[test]
    fn test_flatten_depth_first_order() {
        let tree = make_tree(false, sample_forest());
        let options = flatten_tree(&tree);
        let ids: Vec<u32> = options.iter().map(|o| o.branch.id_branch).collect();
        assert_eq!(ids, vec![1, 2, 4, 3, 5]);
        let depths: Vec<usize> = options.iter().map(|o| o.depth).collect();
        assert_eq!(depths, vec![0, 1, 2, 1, 0]);
    }

    #[test]
    fn test_path_labels_join_left_to_right() {
        let tree = make_tree(false, sample_forest());
        let options = flatten_tree(&tree);
        let deepest = options.iter().find(|o| o.branch.id_branch == 4).unwrap();
        assert_eq!(deepest.path_label, "Raiz -- A -- B");
    }

    #[test]
    fn test_only_final_options_restricts_to_leaves() {
        let tree = make_tree(true, sample_forest());
        for option in flatten_tree(&tree) {
            let is_leaf = option.branch.child_branches.is_empty();
            assert_eq!(option.is_selectable, is_leaf, "branch {}", option.branch.id_branch);
        }
    }

    #[test]
    fn test_everything_selectable_without_flag() {
        let tree = make_tree(false, sample_forest());
        assert!(flatten_tree(&tree).iter().all(|o| o.is_selectable));
    }

    #[test]
    fn test_find_branch_recurses() {
        let forest = sample_forest();
        assert_eq!(find_branch(&forest, 4).unwrap().name, "B");
        assert_eq!(find_branch(&forest, 5).unwrap().name, "Outra");
        assert!(find_branch(&forest, 99).is_none());
    }
}
