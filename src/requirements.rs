//! Requirement Row Editing
//!
//! Pure list operations behind the task-type editor: provisional ids for
//! unsaved rows, bulk removal, and type-code changes that clear a stale tree
//! reference.

use crate::models::{TaskTypeOption, TREE_OPTION_TYPE};

/// Next provisional id for a new, unsaved requirement row.
///
/// The backend reconciles these on save; until then rows need a unique key.
pub fn next_provisional_id(requirements: &[TaskTypeOption]) -> u32 {
    requirements.iter().map(|r| r.id_ta_ty_op).max().unwrap_or(0) + 1
}

/// Append a blank requirement row with a provisional id
pub fn add_requirement(
    requirements: &mut Vec<TaskTypeOption>,
    id_ta_ty: u32,
    default_op_ty: u32,
) {
    let id = next_provisional_id(requirements);
    requirements.push(TaskTypeOption {
        id_ta_ty_op: id,
        id_ta_ty,
        name: String::new(),
        id_op_ty: default_op_ty,
        id_tree: None,
        is_mandatory: false,
    });
}

/// Remove exactly the rows whose ids are selected
pub fn remove_requirements(requirements: &mut Vec<TaskTypeOption>, selected: &[u32]) {
    requirements.retain(|r| !selected.contains(&r.id_ta_ty_op));
}

/// Change a row's type code. Moving away from the tree-reference type clears
/// the tree id; moving back does not restore it.
pub fn set_requirement_type(requirements: &mut [TaskTypeOption], id: u32, id_op_ty: u32) {
    if let Some(req) = requirements.iter_mut().find(|r| r.id_ta_ty_op == id) {
        req.id_op_ty = id_op_ty;
        if id_op_ty != TREE_OPTION_TYPE {
            req.id_tree = None;
        }
    }
}

pub fn set_requirement_name(requirements: &mut [TaskTypeOption], id: u32, name: String) {
    if let Some(req) = requirements.iter_mut().find(|r| r.id_ta_ty_op == id) {
        req.name = name;
    }
}

pub fn set_requirement_tree(requirements: &mut [TaskTypeOption], id: u32, id_tree: Option<u32>) {
    if let Some(req) = requirements.iter_mut().find(|r| r.id_ta_ty_op == id) {
        req.id_tree = id_tree;
    }
}

pub fn set_requirement_mandatory(requirements: &mut [TaskTypeOption], id: u32, mandatory: bool) {
    if let Some(req) = requirements.iter_mut().find(|r| r.id_ta_ty_op == id) {
        req.is_mandatory = mandatory;
    }
}

/// Per-field validation flags for the task-type editor
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TaskTypeErrors {
    pub title: bool,
    pub description: bool,
}

impl TaskTypeErrors {
    pub fn any(&self) -> bool {
        self.title || self.description
    }
}

/// Title and description must be non-empty after trimming; no save request
/// is issued while this reports errors.
pub fn validate_task_type(title: &str, description: &str) -> TaskTypeErrors {
    TaskTypeErrors {
        title: title.trim().is_empty(),
        description: description.trim().is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_req(id: u32, id_op_ty: u32, id_tree: Option<u32>) -> TaskTypeOption {
        TaskTypeOption {
            id_ta_ty_op: id,
            id_ta_ty: 7,
            name: format!("Campo {}", id),
            id_op_ty,
            id_tree,
            is_mandatory: false,
        }
    }

    #[test]
    fn test_provisional_id_is_max_plus_one() {
        assert_eq!(next_provisional_id(&[]), 1);
        let reqs = vec![make_req(3, 8, None), make_req(10, 8, None), make_req(4, 8, None)];
        assert_eq!(next_provisional_id(&reqs), 11);
    }

    #[test]
    fn test_add_requirement_appends_blank_row() {
        let mut reqs = vec![make_req(2, 8, None)];
        add_requirement(&mut reqs, 7, 1);
        assert_eq!(reqs.len(), 2);
        let added = &reqs[1];
        assert_eq!(added.id_ta_ty_op, 3);
        assert_eq!(added.id_ta_ty, 7);
        assert!(added.name.is_empty());
        assert!(added.id_tree.is_none());
        assert!(!added.is_mandatory);
    }

    #[test]
    fn test_remove_only_selected_rows() {
        let mut reqs = vec![make_req(1, 8, None), make_req(2, 8, None), make_req(3, 8, None)];
        remove_requirements(&mut reqs, &[1, 3]);
        let ids: Vec<u32> = reqs.iter().map(|r| r.id_ta_ty_op).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_type_change_clears_tree_reference() {
        let mut reqs = vec![make_req(1, TREE_OPTION_TYPE, Some(7))];
        set_requirement_type(&mut reqs, 1, 8);
        assert_eq!(reqs[0].id_op_ty, 8);
        assert!(reqs[0].id_tree.is_none());
        // Changing back does not restore the old reference
        set_requirement_type(&mut reqs, 1, TREE_OPTION_TYPE);
        assert!(reqs[0].id_tree.is_none());
    }

    #[test]
    fn test_validation_trims_whitespace() {
        assert!(validate_task_type("  ", "desc").title);
        assert!(validate_task_type("titulo", " \t ").description);
        let ok = validate_task_type("titulo", "desc");
        assert!(!ok.any());
    }
}
