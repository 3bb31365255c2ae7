//! Frontend Models
//!
//! Data structures matching backend DTOs. The backend serializes camelCase
//! with its abbreviated id names (idTaTy, idOpTy, ...), so everything here is
//! `rename_all = "camelCase"`.

use serde::{Deserialize, Serialize};

/// Auth role descriptor attached to a profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Auth {
    pub id: u32,
    pub name: String,
    pub display_name: String,
}

/// Group membership entry; `name` is the role used for route gating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberOf {
    pub id: u32,
    pub id_meof: u32,
    pub name: String,
    pub display_name: String,
}

/// Authenticated user profile (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub job_title: String,
    pub login: String,
    pub mail: String,
    pub phone: String,
    pub photo: String,
    #[serde(default)]
    pub connection_id: Option<String>,
    pub is_active: bool,
    pub is_deleted: bool,
    pub auth: Auth,
    #[serde(default)]
    pub member_of: Vec<MemberOf>,
}

impl Profile {
    /// Role names used by the permission tables
    pub fn role_names(&self) -> Vec<String> {
        self.member_of.iter().map(|m| m.name.clone()).collect()
    }

    /// Initials shown in the app bar avatar
    pub fn initials(&self) -> String {
        let first = self.first_name.chars().next();
        let last = self.last_name.chars().next();
        match (first, last) {
            (Some(f), Some(l)) => format!("{}{}", f, l).to_uppercase(),
            _ => "??".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub access_token: String,
    pub expires_in: u64,
    pub token_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub profile: Profile,
    pub token: Token,
}

/// Task type: a reusable form template (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskType {
    pub id_ta_ty: u32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub task_type_attachments: Vec<TaskTypeAttachment>,
    #[serde(default)]
    pub task_type_options: Vec<TaskTypeOption>,
}

/// Persisted file attachment of a task type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskTypeAttachment {
    pub id_ta_ty_at: u32,
    pub id_ta_ty: u32,
    pub url: String,
    pub file_name: String,
}

/// One field requirement of a task type's schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskTypeOption {
    pub id_ta_ty_op: u32,
    pub id_ta_ty: u32,
    pub name: String,
    pub id_op_ty: u32,
    #[serde(default)]
    pub id_tree: Option<u32>,
    pub is_mandatory: bool,
}

/// Backend catalog entry describing a legal requirement type code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionType {
    pub id_op_ty: u32,
    pub description: String,
}

/// Hierarchical classification tree (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tree {
    pub id_tree: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub only_final_options: bool,
    #[serde(default)]
    pub tabulation_tree: bool,
    #[serde(default)]
    pub conformity_tree: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub branches: Vec<Branch>,
}

/// One node of a tree; children are owned by value, no back-pointers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub id_branch: u32,
    pub id_tree: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parent_branch_id: Option<u32>,
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub child_branches: Vec<Branch>,
}

fn default_true() -> bool {
    true
}

/// Client-side picked file, not yet uploaded
#[derive(Debug, Clone, PartialEq)]
pub struct NewAttachment {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Requirement type code that references a classification tree
pub const TREE_OPTION_TYPE: u32 = 1;

/// Closed set of field kinds the dynamic form knows how to render.
///
/// Unknown codes fall back to `Text` rather than failing the whole form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    TreeSelect,
    YesNo,
    DateTime,
    Date,
    Time,
    Signature,
    Checkbox,
    Text,
    Label,
}

impl FieldKind {
    pub fn from_code(code: u32) -> FieldKind {
        match code {
            1 => FieldKind::TreeSelect,
            2 => FieldKind::YesNo,
            3 => FieldKind::DateTime,
            4 => FieldKind::Date,
            5 => FieldKind::Time,
            6 => FieldKind::Signature,
            7 => FieldKind::Checkbox,
            8 => FieldKind::Text,
            9 => FieldKind::Label,
            _ => FieldKind::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_kind_mapping() {
        assert_eq!(FieldKind::from_code(1), FieldKind::TreeSelect);
        assert_eq!(FieldKind::from_code(6), FieldKind::Signature);
        assert_eq!(FieldKind::from_code(9), FieldKind::Label);
        // Unrecognized codes fall back to a text input
        assert_eq!(FieldKind::from_code(0), FieldKind::Text);
        assert_eq!(FieldKind::from_code(42), FieldKind::Text);
    }

    #[test]
    fn test_tree_deserializes_without_branches() {
        let tree: Tree = serde_json::from_str(r#"{"idTree":3,"name":"Setores"}"#).unwrap();
        assert_eq!(tree.id_tree, 3);
        assert!(tree.branches.is_empty());
        assert!(tree.is_active);
        assert!(!tree.only_final_options);
    }

    #[test]
    fn test_branch_wire_names() {
        let branch = Branch {
            id_branch: 5,
            id_tree: 3,
            name: "Elétrica".to_string(),
            description: None,
            parent_branch_id: Some(2),
            tags: None,
            is_active: true,
            child_branches: vec![],
        };
        let json = serde_json::to_value(&branch).unwrap();
        assert_eq!(json["idBranch"], 5);
        assert_eq!(json["parentBranchId"], 2);
        assert!(json["childBranches"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_profile_role_names() {
        let profile: Profile = serde_json::from_str(
            r#"{
                "id":1,"firstName":"Ana","lastName":"Souza","jobTitle":"Admin",
                "login":"ana","mail":"ana@x.com","phone":"","photo":"",
                "connectionId":null,"isActive":true,"isDeleted":false,
                "auth":{"id":1,"name":"admin","displayName":"Admin"},
                "memberOf":[
                    {"id":1,"idMeof":1,"name":"SYSA","displayName":"Sys Admin"},
                    {"id":2,"idMeof":2,"name":"OPER","displayName":"Operador"}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(profile.role_names(), vec!["SYSA", "OPER"]);
        assert_eq!(profile.initials(), "AS");
    }
}
